//! Looping step animator.
//!
//! A [`StepAnimator`] cycles through a fixed, non-empty sequence of
//! [`Step`]s on a fixed period. It never completes: after the last step it
//! wraps back to the first and keeps going until paused.
//!
//! The animator owns no timer. A host drives it either by calling
//! [`StepAnimator::tick_session`] from a periodic callback (the web UI), or by
//! feeding elapsed wall-clock time to [`StepAnimator::advance_by`] (the
//! terminal runner and the tests).
//!
//! ## Example
//!
//! ```
//! use netlearn::content::topics::CIRCUIT_SWITCHING;
//! use netlearn::StepAnimator;
//!
//! let mut anim = StepAnimator::new(CIRCUIT_SWITCHING.steps, 2500).unwrap();
//! anim.start();
//! assert_eq!(anim.advance_by(5000), 2);
//! assert_eq!(anim.index(), 2);
//! ```

use log::debug;

use crate::error::{LearnError, Result};
use crate::palette::{ColorTag, Icon};

/// One phase of an illustrative process, e.g. "Call Setup".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub detail: &'static str,
    pub icon: Icon,
    pub color: ColorTag,
    /// Marks a special case such as a collision; pulses while active.
    pub special: bool,
}

/// The mutable part of an animator: `(current index, is playing)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationState {
    pub index: usize,
    pub playing: bool,
}

/// Identifies one play period, from `start()` to the next pause or reset.
///
/// A periodic timer captures the session that was current when it was
/// created; ticks carrying an older session are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlaySession(u64);

/// How a step card should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// The current step.
    Active,
    /// The current step, flagged special.
    Pulsing,
    /// Any other step.
    Muted,
}

impl Emphasis {
    pub fn css_class(self) -> &'static str {
        match self {
            Emphasis::Active => "step-active",
            Emphasis::Pulsing => "step-active step-pulse",
            Emphasis::Muted => "step-muted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepAnimator {
    steps: &'static [Step],
    interval_ms: u32,
    state: AnimationState,
    session: PlaySession,
    /// Time accumulated toward the next tick while playing.
    carry_ms: u64,
}

impl StepAnimator {
    /// Create an animator at step 0, paused.
    pub fn new(steps: &'static [Step], interval_ms: u32) -> Result<Self> {
        if steps.is_empty() {
            return Err(LearnError::EmptySequence);
        }
        if interval_ms == 0 {
            return Err(LearnError::ZeroInterval);
        }
        Ok(Self {
            steps,
            interval_ms,
            state: AnimationState::default(),
            session: PlaySession::default(),
            carry_ms: 0,
        })
    }

    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: `new` rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn is_playing(&self) -> bool {
        self.state.playing
    }

    pub fn session(&self) -> PlaySession {
        self.session
    }

    pub fn current(&self) -> &'static Step {
        &self.steps[self.state.index]
    }

    pub fn start(&mut self) {
        if self.state.playing {
            return;
        }
        self.state.playing = true;
        self.session = PlaySession(self.session.0 + 1);
        self.carry_ms = 0;
        debug!(
            "animator start at step {} (session {})",
            self.state.index, self.session.0
        );
    }

    pub fn pause(&mut self) {
        if !self.state.playing {
            return;
        }
        self.state.playing = false;
        self.carry_ms = 0;
        debug!("animator paused at step {}", self.state.index);
    }

    pub fn toggle(&mut self) {
        if self.state.playing {
            self.pause();
        } else {
            self.start();
        }
    }

    pub fn reset(&mut self) {
        self.state = AnimationState::default();
        self.carry_ms = 0;
        debug!("animator reset");
    }

    /// Advance one step, wrapping at the end. No-op while paused.
    pub fn tick(&mut self) {
        if self.state.playing {
            self.state.index = (self.state.index + 1) % self.steps.len();
        }
    }

    /// Tick on behalf of a timer created during `session`.
    ///
    /// Returns whether the index moved.
    pub fn tick_session(&mut self, session: PlaySession) -> bool {
        if !self.state.playing || session != self.session {
            return false;
        }
        self.tick();
        true
    }

    /// Feed elapsed time; fires one tick per full interval.
    ///
    /// Returns the number of ticks fired, saturating at `usize::MAX`. Time
    /// passed while paused is discarded.
    pub fn advance_by(&mut self, elapsed_ms: u64) -> usize {
        if !self.state.playing {
            return 0;
        }
        let total = u128::from(self.carry_ms) + u128::from(elapsed_ms);
        let period = u128::from(self.interval_ms);
        let ticks = total / period;
        // Remainder is below the period, which fits in u32.
        self.carry_ms = (total % period) as u64;
        let len = self.steps.len() as u128;
        self.state.index = ((self.state.index as u128 + ticks % len) % len) as usize;
        usize::try_from(ticks).unwrap_or(usize::MAX)
    }

    /// Jump to a step, e.g. when a learner clicks its card.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.steps.len() {
            return Err(LearnError::StepOutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        self.state.index = index;
        self.carry_ms = 0;
        Ok(())
    }

    /// Manual step forward, wrapping. Works whether or not playing.
    pub fn next(&mut self) {
        self.state.index = (self.state.index + 1) % self.steps.len();
        self.carry_ms = 0;
    }

    /// Manual step back, wrapping.
    pub fn previous(&mut self) {
        let len = self.steps.len();
        self.state.index = (self.state.index + len - 1) % len;
        self.carry_ms = 0;
    }

    pub fn emphasis(&self, index: usize) -> Emphasis {
        if index != self.state.index {
            Emphasis::Muted
        } else if self.steps[index].special {
            Emphasis::Pulsing
        } else {
            Emphasis::Active
        }
    }

    /// Progress through the loop as a percentage, for progress bars.
    pub fn progress_percent(&self) -> u32 {
        ((self.state.index + 1) * 100 / self.steps.len()) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn step(id: &'static str, special: bool) -> Step {
        Step {
            id,
            name: id,
            description: "",
            detail: "",
            icon: Icon::Packet,
            color: ColorTag::Blue,
            special,
        }
    }

    const THREE: &[Step] = &[step("a", false), step("b", true), step("c", false)];

    #[test]
    fn test_new_rejects_empty_and_zero_interval() {
        assert!(matches!(
            StepAnimator::new(&[], 2000),
            Err(LearnError::EmptySequence)
        ));
        assert!(matches!(
            StepAnimator::new(THREE, 0),
            Err(LearnError::ZeroInterval)
        ));
    }

    #[test]
    fn test_initial_state() {
        let anim = StepAnimator::new(THREE, 2000).unwrap();
        assert_eq!(anim.state(), AnimationState { index: 0, playing: false });
        assert_eq!(anim.current().id, "a");
    }

    #[test]
    fn test_tick_while_paused_is_noop() {
        let mut anim = StepAnimator::new(THREE, 2000).unwrap();
        anim.tick();
        assert_eq!(anim.index(), 0);
    }

    #[test]
    fn test_tick_wraps() {
        let mut anim = StepAnimator::new(THREE, 2000).unwrap();
        anim.start();
        anim.tick();
        anim.tick();
        assert_eq!(anim.index(), 2);
        anim.tick();
        assert_eq!(anim.index(), 0);
    }

    #[test]
    fn test_start_twice_keeps_session() {
        let mut anim = StepAnimator::new(THREE, 2000).unwrap();
        anim.start();
        let session = anim.session();
        anim.start();
        assert_eq!(anim.session(), session);
    }

    #[test]
    fn test_stale_session_tick_ignored() {
        let mut anim = StepAnimator::new(THREE, 2000).unwrap();
        anim.start();
        let old = anim.session();
        anim.pause();
        anim.start();
        assert!(!anim.tick_session(old));
        assert_eq!(anim.index(), 0);
        assert!(anim.tick_session(anim.session()));
        assert_eq!(anim.index(), 1);
    }

    #[test]
    fn test_advance_by_keeps_partial_period() {
        let mut anim = StepAnimator::new(THREE, 2000).unwrap();
        anim.start();
        assert_eq!(anim.advance_by(1500), 0);
        assert_eq!(anim.advance_by(600), 1);
        assert_eq!(anim.index(), 1);
    }

    #[test]
    fn test_advance_by_huge_elapsed_after_partial_period() {
        let mut anim = StepAnimator::new(THREE, 2500).unwrap();
        anim.start();
        assert_eq!(anim.advance_by(1000), 0);
        let fired = anim.advance_by(u64::MAX);

        let total = 1000u128 + u128::from(u64::MAX);
        let ticks = total / 2500;
        assert_eq!(fired, usize::try_from(ticks).unwrap_or(usize::MAX));
        assert_eq!(anim.index(), (ticks % 3) as usize);
        // The leftover partial period is kept.
        let left = (total % 2500) as u64;
        assert_eq!(anim.advance_by(2500 - left - 1), 0);
        assert_eq!(anim.advance_by(1), 1);
    }

    #[test]
    fn test_pause_drops_partial_period() {
        let mut anim = StepAnimator::new(THREE, 2000).unwrap();
        anim.start();
        anim.advance_by(1500);
        anim.pause();
        assert_eq!(anim.advance_by(5000), 0);
        anim.start();
        assert_eq!(anim.advance_by(600), 0);
        assert_eq!(anim.index(), 0);
    }

    #[test]
    fn test_select_bounds() {
        let mut anim = StepAnimator::new(THREE, 2000).unwrap();
        anim.select(2).unwrap();
        assert_eq!(anim.current().id, "c");
        assert!(matches!(
            anim.select(3),
            Err(LearnError::StepOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(anim.index(), 2);
    }

    #[test]
    fn test_manual_next_previous_wrap() {
        let mut anim = StepAnimator::new(THREE, 2000).unwrap();
        anim.previous();
        assert_eq!(anim.index(), 2);
        anim.next();
        assert_eq!(anim.index(), 0);
    }

    #[test]
    fn test_emphasis() {
        let mut anim = StepAnimator::new(THREE, 2000).unwrap();
        assert_eq!(anim.emphasis(0), Emphasis::Active);
        assert_eq!(anim.emphasis(1), Emphasis::Muted);
        anim.select(1).unwrap();
        assert_eq!(anim.emphasis(1), Emphasis::Pulsing);
        assert_eq!(anim.emphasis(0), Emphasis::Muted);
    }

    #[test]
    fn test_progress_percent() {
        let mut anim = StepAnimator::new(THREE, 2000).unwrap();
        assert_eq!(anim.progress_percent(), 33);
        anim.select(2).unwrap();
        assert_eq!(anim.progress_percent(), 100);
    }
}

//! Reducers behind the components.
//!
//! Each reducer wraps a `netlearn` model and maps UI actions onto it. They
//! hold no DOM handles, so they are tested natively.

use std::rc::Rc;

use netlearn::{
    AssignmentBoard, AssignmentInput, AssignmentSet, DragAdapter, InputMode, PlaySession,
    ScenarioQuestion, ScrollTracker, SelectionEvaluator, ShellState, StepAnimator, TapAdapter,
};
use yew::Reducible;

/// Page root: theme, display mode and the "back to top" button.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShellModel {
    pub shell: ShellState,
    tracker: ScrollTracker,
}

pub enum ShellAction {
    ToggleDarkMode,
    ToggleLearningMode,
    Scrolled(f64),
}

impl ShellModel {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            shell: ShellState::default(),
            tracker: ScrollTracker::new(threshold_px),
        }
    }
}

impl Reducible for ShellModel {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ShellAction::ToggleDarkMode => next.shell.toggle_dark_mode(),
            ShellAction::ToggleLearningMode => {
                next.shell.toggle_learning_mode();
                log::debug!("display mode: {}", next.shell.learning_mode.label());
            }
            ShellAction::Scrolled(offset) => {
                // Scroll events arrive many times a second; only re-render
                // when the button should appear or disappear.
                if !next.tracker.observe(offset) {
                    return self;
                }
                next.shell.show_scroll_top = next.tracker.is_visible();
            }
        }
        Rc::new(next)
    }
}

/// One topic's animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatorModel {
    pub anim: StepAnimator,
}

pub enum AnimatorAction {
    Toggle,
    Reset,
    /// Sent by the interval created during the given session.
    Tick(PlaySession),
    Select(usize),
    Next,
    Previous,
}

impl From<StepAnimator> for AnimatorModel {
    fn from(anim: StepAnimator) -> Self {
        Self { anim }
    }
}

impl Reducible for AnimatorModel {
    type Action = AnimatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut anim = self.anim.clone();
        match action {
            AnimatorAction::Toggle => anim.toggle(),
            AnimatorAction::Reset => anim.reset(),
            AnimatorAction::Tick(session) => {
                if !anim.tick_session(session) {
                    return self;
                }
            }
            AnimatorAction::Select(index) => {
                if let Err(e) = anim.select(index) {
                    log::warn!("{e}");
                    return self;
                }
            }
            AnimatorAction::Next => anim.next(),
            AnimatorAction::Previous => anim.previous(),
        }
        Rc::new(Self { anim })
    }
}

/// A single-choice question card.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizModel {
    pub eval: SelectionEvaluator,
}

pub enum QuizAction {
    Choose(&'static str),
    Reset,
}

impl QuizModel {
    pub fn new(question: &'static ScenarioQuestion) -> Self {
        Self {
            eval: SelectionEvaluator::new(question),
        }
    }
}

impl Reducible for QuizModel {
    type Action = QuizAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut eval = self.eval.clone();
        match action {
            QuizAction::Choose(candidate) => {
                if eval.choose(candidate).is_err() {
                    return self;
                }
            }
            QuizAction::Reset => eval.reset(),
        }
        Rc::new(Self { eval })
    }
}

/// An assignment board plus whichever input adapter the device uses.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentModel {
    pub board: AssignmentBoard,
    pub mode: InputMode,
    drag: DragAdapter,
    tap: TapAdapter,
}

pub enum AssignmentAction {
    DragStart(&'static str),
    DropOn(&'static str),
    DragEnd,
    TapItem(&'static str),
    TapTarget(&'static str),
    Unassign(&'static str),
    Check,
    Reset,
}

impl AssignmentModel {
    pub fn new(set: &'static AssignmentSet, mode: InputMode) -> Self {
        Self {
            board: AssignmentBoard::new(set),
            mode,
            drag: DragAdapter::default(),
            tap: TapAdapter::default(),
        }
    }

    /// The item being dragged or waiting for a target tap.
    pub fn pending(&self) -> Option<&'static str> {
        match self.mode {
            InputMode::Drag => self.drag.pending(),
            InputMode::Tap => self.tap.pending(),
        }
    }
}

impl Reducible for AssignmentModel {
    type Action = AssignmentAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let result = match action {
            AssignmentAction::DragStart(item) => next.drag.drag_start(&next.board, item),
            AssignmentAction::DropOn(target) => next.drag.drop_on(&mut next.board, target),
            AssignmentAction::DragEnd => {
                next.drag.drag_end();
                Ok(())
            }
            AssignmentAction::TapItem(item) => next.tap.tap_item(&next.board, item),
            AssignmentAction::TapTarget(target) => next.tap.tap_target(&mut next.board, target),
            AssignmentAction::Unassign(item) => {
                next.board.unassign(item);
                Ok(())
            }
            AssignmentAction::Check => {
                let score = next.board.check();
                log::info!(
                    "assignment '{}': {}/{}",
                    next.board.set().id,
                    score.correct,
                    score.total
                );
                Ok(())
            }
            AssignmentAction::Reset => {
                next.board.reset();
                next.drag.cancel();
                next.tap.cancel();
                Ok(())
            }
        };
        if let Err(e) = result {
            log::warn!("{e}");
            return self;
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netlearn::content::{assignments, quizzes, topics};
    use netlearn::Outcome;

    fn animator() -> Rc<AnimatorModel> {
        Rc::new(topics::TCP_HANDSHAKE.animator().unwrap().into())
    }

    #[test]
    fn test_shell_scroll_only_rerenders_on_change() {
        let model = Rc::new(ShellModel::new(300.0));
        let same = model.clone().reduce(ShellAction::Scrolled(120.0));
        assert!(Rc::ptr_eq(&model, &same));

        let shown = same.reduce(ShellAction::Scrolled(301.0));
        assert!(shown.shell.show_scroll_top);
        let hidden = shown.reduce(ShellAction::Scrolled(0.0));
        assert!(!hidden.shell.show_scroll_top);
    }

    #[test]
    fn test_shell_toggles() {
        let model = Rc::new(ShellModel::default());
        let model = model.reduce(ShellAction::ToggleDarkMode);
        let model = model.reduce(ShellAction::ToggleLearningMode);
        assert!(model.shell.dark_mode);
        assert_eq!(model.shell.learning_mode, netlearn::LearningMode::Exam);
    }

    #[test]
    fn test_stale_interval_tick_is_dropped() {
        let model = animator().reduce(AnimatorAction::Toggle);
        let session = model.anim.session();
        let model = model.reduce(AnimatorAction::Tick(session));
        assert_eq!(model.anim.index(), 1);

        // Pause, then the old interval fires once more before its cleanup.
        let paused = model.reduce(AnimatorAction::Toggle);
        let after = paused.clone().reduce(AnimatorAction::Tick(session));
        assert!(Rc::ptr_eq(&paused, &after));
        assert_eq!(after.anim.index(), 1);
    }

    #[test]
    fn test_animator_controls() {
        let model = animator()
            .reduce(AnimatorAction::Previous)
            .reduce(AnimatorAction::Next)
            .reduce(AnimatorAction::Select(2));
        assert_eq!(model.anim.index(), 2);
        let model = model.reduce(AnimatorAction::Select(99));
        assert_eq!(model.anim.index(), 2);
        let model = model
            .reduce(AnimatorAction::Toggle)
            .reduce(AnimatorAction::Reset);
        assert_eq!(model.anim.index(), 0);
        assert!(!model.anim.is_playing());
    }

    #[test]
    fn test_quiz_reducer() {
        let model = Rc::new(QuizModel::new(&quizzes::MODEL_IN_USE));
        let model = model.reduce(QuizAction::Choose("OSI Model"));
        assert_eq!(model.eval.outcome(), Some(Outcome::Incorrect));
        let model = model.reduce(QuizAction::Choose("Token Ring"));
        assert_eq!(model.eval.answer().selected, Some("OSI Model"));
        let model = model.reduce(QuizAction::Reset);
        assert_eq!(model.eval.outcome(), None);
    }

    #[test]
    fn test_assignment_by_drag() {
        let set = &assignments::DEVICE_LAYERS;
        let item = set.items[0];
        let model = Rc::new(AssignmentModel::new(set, InputMode::Drag))
            .reduce(AssignmentAction::DragStart(item.id));
        assert_eq!(model.pending(), Some(item.id));
        let model = model.reduce(AssignmentAction::DropOn(item.correct_target));
        assert_eq!(model.pending(), None);
        assert_eq!(model.board.is_correct(item.id), Some(true));
    }

    #[test]
    fn test_assignment_by_tap_then_reset() {
        let set = &assignments::OSI_ORDER;
        let item = set.items[0];
        let model = Rc::new(AssignmentModel::new(set, InputMode::Tap))
            .reduce(AssignmentAction::TapItem(item.id))
            .reduce(AssignmentAction::TapTarget(item.correct_target))
            .reduce(AssignmentAction::Check);
        assert!(model.board.is_checked());
        assert_eq!(model.board.score().correct, 1);

        let model = model.reduce(AssignmentAction::Reset);
        assert_eq!(model.board.unplaced().len(), set.items.len());
        assert!(!model.board.is_checked());
    }

    #[test]
    fn test_assignment_unknown_target_keeps_state() {
        let set = &assignments::DEVICE_LAYERS;
        let model = Rc::new(AssignmentModel::new(set, InputMode::Tap))
            .reduce(AssignmentAction::TapItem(set.items[0].id));
        let same = model.clone().reduce(AssignmentAction::TapTarget("transport"));
        assert!(Rc::ptr_eq(&model, &same));
        assert_eq!(same.pending(), Some(set.items[0].id));
    }
}

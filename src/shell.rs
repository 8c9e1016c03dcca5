//! State owned by the page root and handed to every section read-only.

use crate::config::DEFAULT_SCROLL_THRESHOLD_PX;
use crate::mode::LearningMode;

/// Cross-cutting UI flags.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShellState {
    pub dark_mode: bool,
    pub learning_mode: LearningMode,
    pub show_scroll_top: bool,
}

impl ShellState {
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn toggle_learning_mode(&mut self) {
        self.learning_mode = self.learning_mode.toggled();
    }

    pub fn theme_class(&self) -> &'static str {
        if self.dark_mode { "theme-dark" } else { "theme-light" }
    }
}

/// Derives "back to top" visibility from the vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    threshold_px: f64,
    visible: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD_PX)
    }
}

impl ScrollTracker {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Record a scroll offset; returns true when visibility flipped.
    pub fn observe(&mut self, offset_px: f64) -> bool {
        let visible = offset_px > self.threshold_px;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles() {
        let mut shell = ShellState::default();
        assert!(!shell.dark_mode);
        assert_eq!(shell.theme_class(), "theme-light");
        shell.toggle_dark_mode();
        assert_eq!(shell.theme_class(), "theme-dark");
        shell.toggle_learning_mode();
        assert_eq!(shell.learning_mode, LearningMode::Exam);
        shell.toggle_learning_mode();
        assert_eq!(shell.learning_mode, LearningMode::Visualize);
    }

    #[test]
    fn test_scroll_threshold_crossing() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.observe(120.0));
        assert!(!tracker.observe(300.0));
        assert!(tracker.observe(301.0));
        assert!(tracker.is_visible());
        assert!(!tracker.observe(900.0));
        assert!(tracker.observe(0.0));
        assert!(!tracker.is_visible());
    }
}

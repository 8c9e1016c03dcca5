//! Display mode ("visualize" vs "exam") and per-block visibility.

/// Which flavor of content each section shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LearningMode {
    /// Animations, diagrams and guided explanations.
    #[default]
    Visualize,
    /// Condensed fact tables and revision notes.
    Exam,
}

impl LearningMode {
    pub const ALL: [LearningMode; 2] = [LearningMode::Visualize, LearningMode::Exam];

    pub fn toggled(self) -> Self {
        match self {
            LearningMode::Visualize => LearningMode::Exam,
            LearningMode::Exam => LearningMode::Visualize,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LearningMode::Visualize => "Visualize",
            LearningMode::Exam => "Exam",
        }
    }
}

/// Which modes a content block appears in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Always,
    VisualizeOnly,
    ExamOnly,
}

impl Visibility {
    pub fn shows_in(self, mode: LearningMode) -> bool {
        matches!(
            (self, mode),
            (Visibility::Always, _)
                | (Visibility::VisualizeOnly, LearningMode::Visualize)
                | (Visibility::ExamOnly, LearningMode::Exam)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mode = LearningMode::default();
        assert_eq!(mode, LearningMode::Visualize);
        assert_eq!(mode.toggled(), LearningMode::Exam);
        assert_eq!(mode.toggled().toggled(), mode);
    }

    #[test]
    fn test_visibility_table() {
        assert!(Visibility::Always.shows_in(LearningMode::Exam));
        assert!(Visibility::Always.shows_in(LearningMode::Visualize));
        assert!(Visibility::VisualizeOnly.shows_in(LearningMode::Visualize));
        assert!(!Visibility::VisualizeOnly.shows_in(LearningMode::Exam));
        assert!(Visibility::ExamOnly.shows_in(LearningMode::Exam));
        assert!(!Visibility::ExamOnly.shows_in(LearningMode::Visualize));
    }
}

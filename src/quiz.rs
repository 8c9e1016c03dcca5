//! Single-choice scenario questions.

use log::{info, warn};

use crate::error::{LearnError, Result};

/// A literal question: prompt, candidates, the one correct answer and the
/// explanation shown once an answer is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub candidates: &'static [&'static str],
    pub correct: &'static str,
    pub explanation: &'static str,
}

impl ScenarioQuestion {
    pub fn has_candidate(&self, candidate: &str) -> bool {
        self.candidates.contains(&candidate)
    }
}

/// Result of comparing a selection with the correct answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn is_correct(self) -> bool {
        self == Outcome::Correct
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Outcome::Correct => "outcome-correct",
            Outcome::Incorrect => "outcome-incorrect",
        }
    }
}

/// What the learner has picked so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserAnswerState {
    pub selected: Option<&'static str>,
    pub revealed: bool,
}

/// Records one choice for a [`ScenarioQuestion`] and grades it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEvaluator {
    question: &'static ScenarioQuestion,
    answer: UserAnswerState,
}

impl SelectionEvaluator {
    pub fn new(question: &'static ScenarioQuestion) -> Self {
        Self {
            question,
            answer: UserAnswerState::default(),
        }
    }

    pub fn question(&self) -> &'static ScenarioQuestion {
        self.question
    }

    pub fn answer(&self) -> UserAnswerState {
        self.answer
    }

    /// Record `candidate` and reveal the result.
    ///
    /// Wrong answers are accepted; only values outside the candidate set are
    /// rejected, and those leave the current answer untouched.
    pub fn choose(&mut self, candidate: &str) -> Result<Outcome> {
        let Some(&picked) = self.question.candidates.iter().find(|&&c| c == candidate) else {
            warn!(
                "rejected answer '{}' for question '{}'",
                candidate, self.question.id
            );
            return Err(LearnError::UnknownCandidate {
                question: self.question.id.to_string(),
                candidate: candidate.to_string(),
            });
        };
        self.answer = UserAnswerState {
            selected: Some(picked),
            revealed: true,
        };
        let outcome = grade(self.question, picked);
        info!("question '{}': {:?}", self.question.id, outcome);
        Ok(outcome)
    }

    /// Back to the prompt-only display.
    pub fn reset(&mut self) {
        self.answer = UserAnswerState::default();
    }

    /// `None` until an answer has been revealed.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.answer.revealed {
            return None;
        }
        self.answer.selected.map(|s| grade(self.question, s))
    }

    pub fn explanation(&self) -> &'static str {
        self.question.explanation
    }

    /// Outcome styling for one candidate button once revealed: the correct
    /// answer is always marked, a wrong pick is marked incorrect.
    pub fn candidate_outcome(&self, candidate: &str) -> Option<Outcome> {
        if !self.answer.revealed {
            return None;
        }
        if candidate == self.question.correct {
            Some(Outcome::Correct)
        } else if self.answer.selected == Some(candidate) {
            Some(Outcome::Incorrect)
        } else {
            None
        }
    }
}

/// Equality against the single designated answer.
pub fn grade(question: &ScenarioQuestion, selection: &str) -> Outcome {
    if selection == question.correct {
        Outcome::Correct
    } else {
        Outcome::Incorrect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static PORT: ScenarioQuestion = ScenarioQuestion {
        id: "https-port",
        prompt: "Which port does HTTPS use by default?",
        candidates: &["80", "443", "8080"],
        correct: "443",
        explanation: "HTTPS listens on 443; plain HTTP uses 80.",
    };

    #[test]
    fn test_no_outcome_before_choice() {
        let eval = SelectionEvaluator::new(&PORT);
        assert_eq!(eval.outcome(), None);
        assert_eq!(eval.answer(), UserAnswerState::default());
    }

    #[test]
    fn test_choose_correct() {
        let mut eval = SelectionEvaluator::new(&PORT);
        assert_eq!(eval.choose("443").unwrap(), Outcome::Correct);
        assert_eq!(eval.outcome(), Some(Outcome::Correct));
        assert_eq!(eval.answer().selected, Some("443"));
    }

    #[test]
    fn test_choose_incorrect_is_recorded() {
        let mut eval = SelectionEvaluator::new(&PORT);
        assert_eq!(eval.choose("80").unwrap(), Outcome::Incorrect);
        assert!(eval.answer().revealed);
        assert_eq!(eval.candidate_outcome("80"), Some(Outcome::Incorrect));
        assert_eq!(eval.candidate_outcome("443"), Some(Outcome::Correct));
        assert_eq!(eval.candidate_outcome("8080"), None);
    }

    #[test]
    fn test_unknown_candidate_leaves_state() {
        let mut eval = SelectionEvaluator::new(&PORT);
        eval.choose("80").unwrap();
        assert!(eval.choose("22").is_err());
        assert_eq!(eval.answer().selected, Some("80"));
    }

    #[test]
    fn test_reset_hides_result() {
        let mut eval = SelectionEvaluator::new(&PORT);
        eval.choose("443").unwrap();
        eval.reset();
        assert_eq!(eval.outcome(), None);
        assert_eq!(eval.candidate_outcome("443"), None);
    }
}

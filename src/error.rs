//! Error type shared by the lesson library and the terminal runner.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when lesson data is wired up incorrectly or when the
/// terminal runner cannot read or write its files.
///
/// None of these are shown to a learner in the web UI; a rejected click is
/// simply ignored there.
#[derive(Debug, Error)]
pub enum LearnError {
    #[error("step sequence is empty")]
    EmptySequence,

    #[error("tick interval must be greater than zero")]
    ZeroInterval,

    #[error("step {index} is out of range (sequence has {len} steps)")]
    StepOutOfRange { index: usize, len: usize },

    #[error("'{candidate}' is not an answer to question '{question}'")]
    UnknownCandidate { question: String, candidate: String },

    #[error("unknown item '{0}'")]
    UnknownItem(String),

    #[error("unknown target '{0}'")]
    UnknownTarget(String),

    #[error("unknown topic '{0}'")]
    UnknownTopic(String),

    #[error("unknown question '{0}'")]
    UnknownQuestion(String),

    #[error("unknown section '{0}'")]
    UnknownSection(String),

    #[error("error writing '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LearnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = LearnError::UnknownCandidate {
            question: "model-in-use".to_string(),
            candidate: "Token Ring".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'Token Ring' is not an answer to question 'model-in-use'"
        );

        let err = LearnError::StepOutOfRange { index: 9, len: 4 };
        assert!(err.to_string().contains("4 steps"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;
        let err = LearnError::Io {
            path: PathBuf::from("out/frames.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("error writing 'out/frames.txt'"));
        assert!(err.source().is_some());
    }
}

//! # netlearn
//!
//! Interactive lessons on computer networking: the OSI and TCP/IP models,
//! switching techniques and network devices.
//!
//! Every packet, routing table and MAC table in here is illustrative
//! literal data. The library holds the behavior behind the lessons so it can
//! be shared by the web UI and the terminal runner:
//!
//! - **Step animator**: loops through a topic's steps on a fixed period.
//! - **Selection evaluator**: grades one choice against one correct answer.
//! - **Assignment board**: grades item-to-target placements made by drag or
//!   by tap.
//! - **Display mode**: each content block is tagged for "visualize" mode,
//!   "exam" mode or both.
//!
//! ## Example
//!
//! ```
//! use netlearn::content::quizzes::MODEL_IN_USE;
//! use netlearn::{Outcome, SelectionEvaluator};
//!
//! let mut quiz = SelectionEvaluator::new(&MODEL_IN_USE);
//! assert_eq!(quiz.choose("OSI Model").unwrap(), Outcome::Incorrect);
//! assert_eq!(quiz.choose("TCP/IP Model").unwrap(), Outcome::Correct);
//! ```

pub mod animator;
pub mod assignment;
pub mod config;
pub mod content;
pub mod error;
pub mod mode;
pub mod palette;
pub mod quiz;
pub mod shell;
pub mod transcript;

pub use animator::{AnimationState, Emphasis, PlaySession, Step, StepAnimator};
pub use assignment::{
    AssignmentBoard, AssignmentInput, AssignmentItem, AssignmentSet, AssignmentTarget,
    DragAdapter, InputMode, Score, TapAdapter, TargetScore,
};
pub use config::Settings;
pub use error::{LearnError, Result};
pub use mode::{LearningMode, Visibility};
pub use palette::{ColorTag, Icon, StyleDescriptor};
pub use quiz::{Outcome, ScenarioQuestion, SelectionEvaluator, UserAnswerState};
pub use shell::{ScrollTracker, ShellState};

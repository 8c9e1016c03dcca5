//! Literal lesson content.
//!
//! Nothing here is computed or fetched. Topics, questions, tables and
//! assignment sets are `const` data; [`sections::SECTIONS`] arranges them
//! into the page.

pub mod assignments;
pub mod facts;
pub mod quizzes;
pub mod sections;
pub mod topics;

pub use assignments::ALL_ASSIGNMENTS;
pub use facts::{ALL_TABLES, FactTable};
pub use quizzes::{ALL_QUESTIONS, question};
pub use sections::{BlockBody, ContentBlock, FactStyle, SECTIONS, Section, section};
pub use topics::{ALL_TOPICS, Topic, topic};

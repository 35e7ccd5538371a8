//! quizpress-core: question model, scoring, and test sessions.
//!
//! This crate defines the question data model shared by the layout and
//! report crates, the scoring rules, and the answer-collection session that
//! freezes a test on submit.

pub mod error;
pub mod model;
pub mod parser;
pub mod scoring;
pub mod session;

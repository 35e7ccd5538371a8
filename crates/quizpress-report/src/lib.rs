//! quizpress-report: writers for exported layouts and test results.
//!
//! Layouts are written as JSON (the hand-off format for a PDF writer) or as
//! a plain-text proof for review; submissions as JSON or markdown.

pub mod json;
pub mod submission;
pub mod text;

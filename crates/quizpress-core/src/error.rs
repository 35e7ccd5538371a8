//! Test session error types.
//!
//! Scoring and layout are total functions and never fail; the only
//! fallible operations are the session state transitions.

use thiserror::Error;

/// Errors returned by [`crate::session::TestSession`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The session was already submitted; answers are frozen.
    #[error("test already submitted, answers are frozen")]
    AlreadySubmitted,

    /// The answer refers to a question that does not exist.
    #[error("question index {index} out of range (test has {len} questions)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl SessionError {
    /// Returns `true` if the error comes from the submitted-state freeze.
    pub fn is_frozen(&self) -> bool {
        matches!(self, SessionError::AlreadySubmitted)
    }
}

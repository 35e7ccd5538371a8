//! Test session lifecycle.
//!
//! A session owns the question list for one sitting, accumulates answers,
//! and performs the one-way submit transition. After submit the answers are
//! frozen and the tally is fixed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SessionError;
use crate::model::Question;
use crate::scoring::{self, AnswerSheet, QuestionOutcome, ScoreTally};

/// The frozen result of a submitted test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub session_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub tally: ScoreTally,
    /// One entry per question, in question order.
    pub outcomes: Vec<QuestionOutcome>,
    pub answers: AnswerSheet,
    pub marks_awarded: f64,
    pub marks_available: f64,
}

/// One sitting of a test.
#[derive(Debug, Clone)]
pub struct TestSession {
    id: Uuid,
    questions: Vec<Question>,
    answers: AnswerSheet,
    submission: Option<Submission>,
}

impl TestSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            id: Uuid::new_v4(),
            questions,
            answers: AnswerSheet::new(),
            submission: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn is_submitted(&self) -> bool {
        self.submission.is_some()
    }

    /// The submission, once the session has been submitted.
    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Record (or overwrite) the response to question `index`.
    pub fn record_answer(
        &mut self,
        index: usize,
        response: impl Into<String>,
    ) -> Result<(), SessionError> {
        if self.is_submitted() {
            return Err(SessionError::AlreadySubmitted);
        }
        if index >= self.questions.len() {
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.questions.len(),
            });
        }
        self.answers.record(index, response);
        Ok(())
    }

    /// Score the answers collected so far without submitting.
    pub fn provisional_tally(&self) -> ScoreTally {
        scoring::score(&self.questions, &self.answers)
    }

    /// Freeze the answers and compute the final tally.
    pub fn submit(&mut self) -> Result<&Submission, SessionError> {
        if self.is_submitted() {
            return Err(SessionError::AlreadySubmitted);
        }

        let submission = Submission {
            session_id: self.id,
            submitted_at: Utc::now(),
            tally: scoring::score(&self.questions, &self.answers),
            outcomes: scoring::outcomes(&self.questions, &self.answers),
            answers: self.answers.clone(),
            marks_awarded: scoring::marks_awarded(&self.questions, &self.answers),
            marks_available: scoring::marks_available(&self.questions),
        };

        tracing::info!(
            session = %self.id,
            correct = submission.tally.correct,
            incorrect = submission.tally.incorrect,
            missed = submission.tally.missed,
            "test submitted"
        );

        Ok(self.submission.insert(submission))
    }
}

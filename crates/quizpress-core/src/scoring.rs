//! Answer scoring.
//!
//! Multiple-choice answers are compared to the correct label by exact
//! string equality. Free-response answers are acknowledged but never graded,
//! even when the question carries a suggested answer. Any unanswered
//! question, of either kind, counts as missed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Question, QuestionKind};

/// The user's responses, keyed by question index.
///
/// A missing key means "unanswered", which is not the same as an empty
/// response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet(BTreeMap<usize, String>);

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or overwrite the response for `index`.
    pub fn record(&mut self, index: usize, response: impl Into<String>) {
        self.0.insert(index, response.into());
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(&index).map(String::as_str)
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.0.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0.iter().map(|(i, r)| (*i, r.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(usize, S)> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = (usize, S)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(i, r)| (i, r.into())).collect())
    }
}

/// How a single question was resolved at scoring time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionOutcome {
    Correct,
    Incorrect,
    Missed,
    /// Free-response answer received, not graded.
    Submitted,
}

/// Three-way classification of the answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    pub correct: u32,
    pub incorrect: u32,
    pub missed: u32,
}

impl ScoreTally {
    /// Fold one outcome into the tally.
    pub fn with(mut self, outcome: QuestionOutcome) -> Self {
        match outcome {
            QuestionOutcome::Correct => self.correct += 1,
            QuestionOutcome::Incorrect => self.incorrect += 1,
            QuestionOutcome::Missed => self.missed += 1,
            QuestionOutcome::Submitted => {}
        }
        self
    }

    /// Answered multiple-choice questions.
    pub fn graded(&self) -> u32 {
        self.correct + self.incorrect
    }

    pub fn total(&self) -> u32 {
        self.correct + self.incorrect + self.missed
    }

    /// Fraction of counted questions answered correctly, 0.0 when nothing
    /// was counted.
    pub fn accuracy(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.correct as f64 / total as f64,
        }
    }
}

/// Classify one question against its (possibly absent) response.
pub fn classify(question: &Question, answer: Option<&str>) -> QuestionOutcome {
    match (answer, &question.kind) {
        (None, _) => QuestionOutcome::Missed,
        (Some(given), QuestionKind::MultipleChoice { correct_label, .. }) => {
            if correct_label.as_deref() == Some(given) {
                QuestionOutcome::Correct
            } else {
                QuestionOutcome::Incorrect
            }
        }
        (Some(_), QuestionKind::FreeResponse { .. }) => QuestionOutcome::Submitted,
    }
}

/// Per-question outcomes, in question order.
pub fn outcomes(questions: &[Question], answers: &AnswerSheet) -> Vec<QuestionOutcome> {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| classify(q, answers.get(i)))
        .collect()
}

/// Score a full answer sheet.
///
/// Answers keyed beyond the end of `questions` are ignored.
pub fn score(questions: &[Question], answers: &AnswerSheet) -> ScoreTally {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| classify(q, answers.get(i)))
        .fold(ScoreTally::default(), ScoreTally::with)
}

/// Sum of `marks` over correctly answered questions. Questions without
/// marks are worth nothing here.
pub fn marks_awarded(questions: &[Question], answers: &AnswerSheet) -> f64 {
    questions
        .iter()
        .enumerate()
        .filter(|(i, q)| classify(q, answers.get(*i)) == QuestionOutcome::Correct)
        .filter_map(|(_, q)| q.marks)
        .sum()
}

/// Sum of `marks` over gradable (multiple-choice) questions.
///
/// Free-response answers are never graded, so their marks can never be
/// awarded and are left out of the total.
pub fn marks_available(questions: &[Question]) -> f64 {
    questions
        .iter()
        .filter(|q| q.is_multiple_choice())
        .filter_map(|q| q.marks)
        .sum()
}

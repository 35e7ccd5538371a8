//! Core data model types for quizpress.
//!
//! A [`Question`] is either multiple-choice or free-response. Upstream
//! producers hand us loosely-shaped records where the presence of an
//! `options` mapping is the only thing that tells the two apart; that record
//! shape lives on as [`QuestionRecord`] and is converted into the explicit
//! [`QuestionKind`] at the serde boundary.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single question as handed in by the question supplier.
///
/// Its position inside the surrounding list is its identity; there is no
/// separate id field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "QuestionRecord", into = "QuestionRecord")]
pub struct Question {
    /// The question stem.
    pub text: String,
    /// Marks this question is worth, if the supplier assigned any.
    pub marks: Option<f64>,
    /// Multiple-choice or free-response, with the variant's payload.
    pub kind: QuestionKind,
}

/// The two question shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Options keyed by label, in display order.
    MultipleChoice {
        options: IndexMap<String, String>,
        correct_label: Option<String>,
    },
    /// Answered in free text; never graded automatically.
    FreeResponse { suggested_answer: Option<String> },
}

impl Question {
    /// Build a multiple-choice question. Option order is kept as given.
    pub fn multiple_choice<L, T, I>(text: impl Into<String>, options: I, correct: Option<&str>) -> Self
    where
        I: IntoIterator<Item = (L, T)>,
        L: Into<String>,
        T: Into<String>,
    {
        Self {
            text: text.into(),
            marks: None,
            kind: QuestionKind::MultipleChoice {
                options: options
                    .into_iter()
                    .map(|(l, t)| (l.into(), t.into()))
                    .collect(),
                correct_label: correct.map(str::to_string),
            },
        }
    }

    /// Build a free-response question.
    pub fn free_response(text: impl Into<String>, suggested: Option<&str>) -> Self {
        Self {
            text: text.into(),
            marks: None,
            kind: QuestionKind::FreeResponse {
                suggested_answer: suggested.map(str::to_string),
            },
        }
    }

    pub fn with_marks(mut self, marks: f64) -> Self {
        self.marks = Some(marks);
        self
    }

    pub fn is_multiple_choice(&self) -> bool {
        matches!(self.kind, QuestionKind::MultipleChoice { .. })
    }

    /// Option pairs in display order. Empty for free-response questions.
    pub fn options(&self) -> impl Iterator<Item = (&str, &str)> {
        let options = match &self.kind {
            QuestionKind::MultipleChoice { options, .. } => Some(options),
            QuestionKind::FreeResponse { .. } => None,
        };
        options
            .into_iter()
            .flat_map(|o| o.iter().map(|(l, t)| (l.as_str(), t.as_str())))
    }

    /// The answer key entry: the correct label for multiple-choice, the
    /// suggested answer for free-response.
    pub fn reference_answer(&self) -> Option<&str> {
        match &self.kind {
            QuestionKind::MultipleChoice { correct_label, .. } => correct_label.as_deref(),
            QuestionKind::FreeResponse { suggested_answer } => suggested_answer.as_deref(),
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::MultipleChoice { .. } => write!(f, "multiple-choice"),
            QuestionKind::FreeResponse { .. } => write!(f, "free-response"),
        }
    }
}

/// The upstream record shape.
///
/// `options` present and non-empty makes the record multiple-choice;
/// `correctAnswer` is then a label, otherwise free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    #[serde(rename = "question", alias = "text")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<IndexMap<String, String>>,
    #[serde(default, alias = "correct_answer", skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
}

impl From<QuestionRecord> for Question {
    fn from(record: QuestionRecord) -> Self {
        let kind = match record.options {
            Some(options) if !options.is_empty() => QuestionKind::MultipleChoice {
                options,
                correct_label: record.correct_answer,
            },
            _ => QuestionKind::FreeResponse {
                suggested_answer: record.correct_answer,
            },
        };
        Self {
            text: record.text,
            marks: record.marks,
            kind,
        }
    }
}

impl From<Question> for QuestionRecord {
    fn from(question: Question) -> Self {
        let (options, correct_answer) = match question.kind {
            QuestionKind::MultipleChoice {
                options,
                correct_label,
            } => (Some(options), correct_label),
            QuestionKind::FreeResponse { suggested_answer } => (None, suggested_answer),
        };
        Self {
            text: question.text,
            marks: question.marks,
            options,
            correct_answer,
        }
    }
}

/// An ordered list of questions, optionally titled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            title: None,
            questions,
        }
    }

    pub fn multiple_choice_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_multiple_choice()).count()
    }

    /// Display name: the title, or a fallback.
    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled question set")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_presence_decides_kind() {
        let mcq: Question = serde_json::from_str(
            r#"{"question":"2+2=?","options":{"A":"3","B":"4"},"correctAnswer":"B"}"#,
        )
        .unwrap();
        assert!(mcq.is_multiple_choice());
        assert_eq!(mcq.reference_answer(), Some("B"));

        let free: Question =
            serde_json::from_str(r#"{"question":"Explain gravity","correctAnswer":"Mass attracts"}"#)
                .unwrap();
        assert!(!free.is_multiple_choice());
        assert_eq!(free.reference_answer(), Some("Mass attracts"));
    }

    #[test]
    fn empty_options_is_free_response() {
        let q: Question =
            serde_json::from_str(r#"{"text":"Describe it","options":{}}"#).unwrap();
        assert_eq!(
            q.kind,
            QuestionKind::FreeResponse {
                suggested_answer: None
            }
        );
    }

    #[test]
    fn option_order_is_preserved() {
        let q: Question = serde_json::from_str(
            r#"{"question":"Pick","options":{"D":"four","A":"one","C":"three"}}"#,
        )
        .unwrap();
        let labels: Vec<&str> = q.options().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["D", "A", "C"]);
    }

    #[test]
    fn snake_case_answer_alias() {
        let q: Question = serde_json::from_str(
            r#"{"question":"Pick","options":{"A":"x"},"correct_answer":"A","marks":2}"#,
        )
        .unwrap();
        assert_eq!(q.reference_answer(), Some("A"));
        assert_eq!(q.marks, Some(2.0));
    }

    #[test]
    fn serializes_back_to_record_shape() {
        let q = Question::multiple_choice("2+2=?", [("A", "3"), ("B", "4")], Some("B"));
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["question"], "2+2=?");
        assert_eq!(value["correctAnswer"], "B");
        assert_eq!(value["options"]["B"], "4");
        assert!(value.get("marks").is_none());
    }

    #[test]
    fn missing_text_is_rejected() {
        let result: Result<Question, _> = serde_json::from_str(r#"{"options":{"A":"x"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn kind_display() {
        assert_eq!(
            Question::free_response("q", None).kind.to_string(),
            "free-response"
        );
        assert_eq!(
            Question::multiple_choice("q", [("A", "a")], None).kind.to_string(),
            "multiple-choice"
        );
    }
}

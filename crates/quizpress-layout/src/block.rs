//! Question blocks: the wrapped text of one question, ready to be placed.

use quizpress_core::model::{Question, QuestionKind};

use crate::export::ExportMode;
use crate::metrics::{PageMetrics, TextMeasure};
use crate::wrap::wrap;

pub const RESPONSE_PROMPT: &str = "Write your answer below:";
pub const RESPONSE_RULE: &str = "__________________________________________";
pub const RESPONSE_RULE_COUNT: usize = 5;
pub const ANSWER_HEADER: &str = "Correct Answer:";

/// What follows the stem.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockBody {
    /// Wrapped option lines, all options in display order.
    Options(Vec<String>),
    /// Prompt line plus blank rules for a handwritten answer.
    Response { rules: usize },
}

/// All wrapped text belonging to one question.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// 0-based question index.
    pub question: usize,
    pub stem: Vec<String>,
    pub body: BlockBody,
    /// Wrapped answer key lines, present only when exporting answers.
    pub answer_key: Option<Vec<String>>,
}

impl Block {
    pub fn build(
        index: usize,
        question: &Question,
        mode: ExportMode,
        metrics: &PageMetrics,
        measure: &dyn TextMeasure,
    ) -> Self {
        let width = metrics.content_width;
        let stem = wrap(&format!("{}. {}", index + 1, question.text), width, measure);

        let body = match &question.kind {
            QuestionKind::MultipleChoice { options, .. } => BlockBody::Options(
                options
                    .iter()
                    .flat_map(|(label, text)| wrap(&format!("{label}. {text}"), width, measure))
                    .collect(),
            ),
            QuestionKind::FreeResponse { .. } => BlockBody::Response {
                rules: RESPONSE_RULE_COUNT,
            },
        };

        // An empty reference answer is treated as absent.
        let answer_key = question
            .reference_answer()
            .filter(|a| mode.includes_answers() && !a.is_empty())
            .map(|a| wrap(a, width, measure));

        Self {
            question: index,
            stem,
            body,
            answer_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> PageMetrics {
        PageMetrics {
            content_width: 20.0,
            char_width: 1.0,
            ..Default::default()
        }
    }

    fn build(q: &Question, mode: ExportMode) -> Block {
        let m = metrics();
        Block::build(2, q, mode, &m, &m.measure())
    }

    #[test]
    fn stem_is_numbered_from_one() {
        let q = Question::free_response("Why?", None);
        assert_eq!(build(&q, ExportMode::QuestionsOnly).stem, vec!["3. Why?"]);
    }

    #[test]
    fn options_wrap_individually() {
        let q = Question::multiple_choice(
            "Pick one",
            [("A", "a fairly long option text"), ("B", "short")],
            Some("B"),
        );
        let block = build(&q, ExportMode::QuestionsOnly);
        assert_eq!(
            block.body,
            BlockBody::Options(vec![
                "A. a fairly long".into(),
                "option text".into(),
                "B. short".into()
            ])
        );
        assert!(block.answer_key.is_none());
    }

    #[test]
    fn free_response_gets_rules() {
        let q = Question::free_response("Explain", Some("Because"));
        let block = build(&q, ExportMode::WithAnswers);
        assert_eq!(block.body, BlockBody::Response { rules: 5 });
        assert_eq!(block.answer_key, Some(vec!["Because".to_string()]));
    }

    #[test]
    fn answer_key_needs_mode_and_answer() {
        let with = Question::multiple_choice("Pick", [("A", "x")], Some("A"));
        let without = Question::multiple_choice("Pick", [("A", "x")], None);
        let empty = Question::free_response("Explain", Some(""));

        assert!(build(&with, ExportMode::QuestionsOnly).answer_key.is_none());
        assert_eq!(
            build(&with, ExportMode::WithAnswers).answer_key,
            Some(vec!["A".to_string()])
        );
        assert!(build(&without, ExportMode::WithAnswers).answer_key.is_none());
        assert!(build(&empty, ExportMode::WithAnswers).answer_key.is_none());
    }
}

//! Export driver.
//!
//! Turns a question list into an [`ExportedDocument`] for one of the two
//! export modes. Byte serialization is left to a downstream writer; the
//! document only carries pages of draw instructions and a file name hint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use quizpress_core::model::Question;

use crate::block::Block;
use crate::engine::{layout_blocks, LineRole, Page};
use crate::metrics::{LayoutConfig, TextMeasure};

/// Which of the two artifacts to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportMode {
    QuestionsOnly,
    WithAnswers,
}

impl ExportMode {
    pub fn from_include_answers(include_answers: bool) -> Self {
        if include_answers {
            ExportMode::WithAnswers
        } else {
            ExportMode::QuestionsOnly
        }
    }

    pub fn includes_answers(self) -> bool {
        self == ExportMode::WithAnswers
    }

    /// File name without extension.
    pub fn file_stem(self) -> &'static str {
        match self {
            ExportMode::QuestionsOnly => "questions_only",
            ExportMode::WithAnswers => "questions_with_answers",
        }
    }

    pub fn file_name(self, extension: &str) -> String {
        format!("{}.{}", self.file_stem(), extension)
    }
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

impl FromStr for ExportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "questions_only" | "questions" => Ok(ExportMode::QuestionsOnly),
            "questions_with_answers" | "answers" | "with_answers" => Ok(ExportMode::WithAnswers),
            other => Err(format!("unknown export mode: {other}")),
        }
    }
}

/// The laid-out result of one export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedDocument {
    pub mode: ExportMode,
    /// Suggested output file name for the PDF writer.
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub question_count: usize,
    pub pages: Vec<Page>,
}

impl ExportedDocument {
    /// `true` when there were no questions to lay out.
    pub fn is_empty(&self) -> bool {
        self.question_count == 0
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Distinct questions whose stem starts on some page, in order.
    pub fn stem_questions(&self) -> Vec<usize> {
        let mut seen: Vec<usize> = self
            .pages
            .iter()
            .flat_map(|p| &p.ops)
            .filter(|op| op.role == LineRole::Stem)
            .filter_map(|op| op.question)
            .collect();
        seen.dedup();
        seen
    }
}

/// Lays out question lists with fixed configuration.
#[derive(Debug)]
pub struct Exporter {
    config: LayoutConfig,
    measure: Box<dyn TextMeasure>,
}

impl Exporter {
    pub fn new(config: LayoutConfig) -> Self {
        let measure = Box::new(config.metrics.measure());
        Self { config, measure }
    }

    /// Replace the default fixed-advance measure.
    pub fn with_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    /// Override the configured document title. Empty disables it.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn export(&self, questions: &[Question], mode: ExportMode) -> ExportedDocument {
        let metrics = &self.config.metrics;
        let blocks: Vec<Block> = questions
            .iter()
            .enumerate()
            .map(|(i, q)| Block::build(i, q, mode, metrics, self.measure.as_ref()))
            .collect();

        let title = self.config.title();
        let pages = layout_blocks(&blocks, metrics, title);

        tracing::debug!(
            mode = %mode,
            questions = questions.len(),
            pages = pages.len(),
            "exported question set"
        );

        ExportedDocument {
            mode,
            file_name: mode.file_name("pdf"),
            title: title.map(str::to_string),
            question_count: questions.len(),
            pages,
        }
    }

    /// Both artifacts: questions only, then questions with answers.
    pub fn export_both(&self, questions: &[Question]) -> [ExportedDocument; 2] {
        [
            self.export(questions, ExportMode::QuestionsOnly),
            self.export(questions, ExportMode::WithAnswers),
        ]
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

/// Lay out `questions` with the default page geometry.
pub fn export(questions: &[Question], include_answers: bool) -> Vec<Page> {
    Exporter::default()
        .export(questions, ExportMode::from_include_answers(include_answers))
        .pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FixedAdvance;

    #[test]
    fn mode_names() {
        assert_eq!(ExportMode::from_include_answers(false).file_stem(), "questions_only");
        assert_eq!(
            ExportMode::from_include_answers(true).file_name("pdf"),
            "questions_with_answers.pdf"
        );
        assert_eq!("answers".parse::<ExportMode>().unwrap(), ExportMode::WithAnswers);
        assert!("everything".parse::<ExportMode>().is_err());
    }

    #[test]
    fn empty_list_gives_titled_page() {
        let doc = Exporter::default().export(&[], ExportMode::QuestionsOnly);
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.pages[0].ops.len(), 1);
        assert_eq!(doc.pages[0].ops[0].text, "Generated Questions");
        assert_eq!(doc.file_name, "questions_only.pdf");
    }

    #[test]
    fn title_override() {
        let doc = Exporter::default()
            .with_title("Unit 3 Quiz")
            .export(&[Question::free_response("Why?", None)], ExportMode::QuestionsOnly);
        assert_eq!(doc.title.as_deref(), Some("Unit 3 Quiz"));
        assert_eq!(doc.pages[0].ops[0].text, "Unit 3 Quiz");

        let untitled = Exporter::default()
            .with_title("")
            .export(&[Question::free_response("Why?", None)], ExportMode::QuestionsOnly);
        assert!(untitled.title.is_none());
        assert_eq!(untitled.pages[0].ops[0].role, LineRole::Stem);
    }

    #[test]
    fn custom_measure_changes_wrapping() {
        let q = vec![Question::free_response("one two three four", None)];
        let narrow = Exporter::default()
            .with_measure(FixedAdvance { char_width: 45.0 })
            .export(&q, ExportMode::QuestionsOnly);
        let stems = narrow.pages[0]
            .ops
            .iter()
            .filter(|o| o.role == LineRole::Stem)
            .count();
        // four columns per 180-wide line
        assert_eq!(stems, 6);
    }

    #[test]
    fn export_both_modes() {
        let q = vec![Question::multiple_choice("2+2=?", [("A", "3"), ("B", "4")], Some("B"))];
        let [plain, answered] = Exporter::default().export_both(&q);
        assert_eq!(plain.mode, ExportMode::QuestionsOnly);
        assert!(plain
            .pages
            .iter()
            .flat_map(|p| &p.ops)
            .all(|o| o.role != LineRole::AnswerHeader));
        assert!(answered
            .pages
            .iter()
            .flat_map(|p| &p.ops)
            .any(|o| o.role == LineRole::AnswerText && o.text == "B"));
    }
}

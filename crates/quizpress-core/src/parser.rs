//! Question set and answer sheet loading.
//!
//! Question sets come from JSON (the shape the question service returns)
//! or TOML files. Validation is advisory: it produces warnings and never
//! blocks scoring or export.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Question, QuestionKind, QuestionSet};
use crate::scoring::AnswerSheet;

/// Supported question set file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetFormat {
    Json,
    Toml,
}

impl SetFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(SetFormat::Json),
            "toml" => Some(SetFormat::Toml),
            _ => None,
        }
    }
}

/// The object form of a JSON set. Records stay raw so each one is
/// deserialized on its own and keeps serde's error message.
#[derive(Debug, Deserialize)]
struct WrappedJsonSet {
    #[serde(default)]
    title: Option<String>,
    questions: Vec<serde_json::Value>,
}

/// Parse a single question set file.
pub fn parse_question_set(path: &Path) -> Result<QuestionSet> {
    let format = SetFormat::from_path(path)
        .with_context(|| format!("unsupported question set extension: {}", path.display()))?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question set file: {}", path.display()))?;

    parse_question_set_str(&content, format, path)
}

/// Parse question set content (useful for testing).
pub fn parse_question_set_str(
    content: &str,
    format: SetFormat,
    source_path: &Path,
) -> Result<QuestionSet> {
    let set = match format {
        SetFormat::Json => parse_json_set(content, source_path)?,
        SetFormat::Toml => toml::from_str(content)
            .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?,
    };

    tracing::debug!(
        path = %source_path.display(),
        questions = set.questions.len(),
        "parsed question set"
    );
    Ok(set)
}

/// A JSON set is either a bare array of records or `{ title, questions }`.
fn parse_json_set(content: &str, source_path: &Path) -> Result<QuestionSet> {
    let value: serde_json::Value = serde_json::from_str(content)
        .with_context(|| format!("failed to parse JSON: {}", source_path.display()))?;

    let (title, records) = match value {
        serde_json::Value::Array(records) => (None, records),
        other => {
            let wrapped: WrappedJsonSet = serde_json::from_value(other).with_context(|| {
                format!(
                    "expected an array of questions or an object with `questions`: {}",
                    source_path.display()
                )
            })?;
            (wrapped.title, wrapped.questions)
        }
    };

    let questions = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            serde_json::from_value::<Question>(record).with_context(|| {
                format!("invalid question {} in {}", i + 1, source_path.display())
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionSet { title, questions })
}

/// Recursively collect every `.json` and `.toml` file under `dir`, sorted.
pub fn question_set_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            files.extend(question_set_files(&path)?);
        } else if SetFormat::from_path(&path).is_some() {
            files.push(path);
        }
    }

    Ok(files)
}

/// Recursively load all `.json` and `.toml` question sets from a directory.
/// Files that fail to parse are skipped with a warning.
pub fn load_question_directory(dir: &Path) -> Result<Vec<QuestionSet>> {
    let sets = question_set_files(dir)?
        .into_iter()
        .filter_map(|path| match parse_question_set(&path) {
            Ok(set) => Some(set),
            Err(e) => {
                tracing::warn!("skipping {}: {:#}", path.display(), e);
                None
            }
        })
        .collect();

    Ok(sets)
}

/// Parse an answer sheet: a JSON object keyed by decimal question index.
pub fn parse_answer_sheet(path: &Path) -> Result<AnswerSheet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answer sheet: {}", path.display()))?;
    parse_answer_sheet_str(&content)
        .with_context(|| format!("invalid answer sheet: {}", path.display()))
}

pub fn parse_answer_sheet_str(content: &str) -> Result<AnswerSheet> {
    serde_json::from_str(content).context("answer sheet must map question indices to strings")
}

/// A warning from question set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Index of the offending question (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a question set for common issues.
pub fn validate_question_set(set: &QuestionSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if set.questions.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "question set is empty".into(),
        });
    }

    for (i, q) in set.questions.iter().enumerate() {
        let mut warn = |message: String| {
            warnings.push(ValidationWarning {
                question: Some(i),
                message,
            })
        };

        if q.text.trim().is_empty() {
            warn("question text is empty".into());
        }

        if let Some(marks) = q.marks {
            if marks.is_nan() || marks <= 0.0 {
                warn(format!("marks must be positive, got {marks}"));
            }
        }

        if let QuestionKind::MultipleChoice {
            options,
            correct_label,
        } = &q.kind
        {
            match correct_label {
                None => warn("multiple-choice question has no correct answer".into()),
                Some(label) if !options.contains_key(label) => {
                    warn(format!("correct answer '{label}' is not one of the option labels"))
                }
                Some(_) => {}
            }

            let mut seen_text = HashSet::new();
            for (label, text) in options {
                if text.trim().is_empty() {
                    warn(format!("option '{label}' has empty text"));
                } else if !seen_text.insert(text.trim()) {
                    warn(format!("option '{label}' duplicates another option's text"));
                }
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_JSON: &str = r#"{
  "title": "Arithmetic",
  "questions": [
    {"question": "2+2=?", "marks": 1, "options": {"A": "3", "B": "4"}, "correctAnswer": "B"},
    {"question": "Explain carrying in addition.", "correctAnswer": "Overflow moves to the next column."}
  ]
}"#;

    const VALID_TOML: &str = r#"
title = "Arithmetic"

[[questions]]
question = "2+2=?"
marks = 1
correctAnswer = "B"
options = { B = "4", A = "3" }

[[questions]]
question = "Explain carrying in addition."
"#;

    #[test]
    fn parse_wrapped_json() {
        let set =
            parse_question_set_str(VALID_JSON, SetFormat::Json, &PathBuf::from("set.json")).unwrap();
        assert_eq!(set.title.as_deref(), Some("Arithmetic"));
        assert_eq!(set.questions.len(), 2);
        assert_eq!(set.multiple_choice_count(), 1);
    }

    #[test]
    fn parse_bare_json_array() {
        let json = r#"[{"question": "Why?"}, {"question": "Pick", "options": {"A": "a"}}]"#;
        let set = parse_question_set_str(json, SetFormat::Json, &PathBuf::from("set.json")).unwrap();
        assert!(set.title.is_none());
        assert_eq!(set.questions.len(), 2);
        assert!(set.questions[1].is_multiple_choice());
    }

    #[test]
    fn parse_toml_keeps_option_order() {
        let set =
            parse_question_set_str(VALID_TOML, SetFormat::Toml, &PathBuf::from("set.toml")).unwrap();
        let labels: Vec<&str> = set.questions[0].options().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["B", "A"]);
        assert!(!set.questions[1].is_multiple_choice());
    }

    #[test]
    fn parse_malformed_json() {
        let result = parse_question_set_str("{ nope", SetFormat::Json, &PathBuf::from("bad.json"));
        assert!(result.is_err());
    }

    #[test]
    fn missing_question_text_names_field_and_record() {
        let json = r#"{"title": "T", "questions": [{"question": "ok"}, {"options": {"A": "x"}}]}"#;
        let err =
            parse_question_set_str(json, SetFormat::Json, &PathBuf::from("s.json")).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("invalid question 2 in s.json"), "{message}");
        assert!(message.contains("missing field `question`"), "{message}");

        let bare = r#"[{"marks": 2}]"#;
        let err =
            parse_question_set_str(bare, SetFormat::Json, &PathBuf::from("s.json")).unwrap_err();
        assert!(format!("{err:#}").contains("missing field `question`"));
    }

    #[test]
    fn object_without_questions_is_rejected() {
        let err = parse_question_set_str(
            r#"{"title": "T"}"#,
            SetFormat::Json,
            &PathBuf::from("s.json"),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("missing field `questions`"));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(SetFormat::from_path(Path::new("a.json")), Some(SetFormat::Json));
        assert_eq!(SetFormat::from_path(Path::new("a.toml")), Some(SetFormat::Toml));
        assert_eq!(SetFormat::from_path(Path::new("a.yaml")), None);
        assert!(parse_question_set(Path::new("a.yaml")).is_err());
    }

    #[test]
    fn validate_clean_set() {
        let set =
            parse_question_set_str(VALID_JSON, SetFormat::Json, &PathBuf::from("set.json")).unwrap();
        assert!(validate_question_set(&set).is_empty());
    }

    #[test]
    fn validate_reports_problems() {
        let set = QuestionSet::new(vec![
            Question::multiple_choice("Pick", [("A", "x"), ("B", "x")], Some("C")),
            Question::free_response("  ", None).with_marks(0.0),
            Question::multiple_choice("Pick again", [("A", "")], None),
        ]);
        let warnings = validate_question_set(&set);
        let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.contains("'C' is not one of")));
        assert!(messages.iter().any(|m| m.contains("duplicates")));
        assert!(messages.iter().any(|m| m.contains("text is empty")));
        assert!(messages.iter().any(|m| m.contains("marks must be positive")));
        assert!(messages.iter().any(|m| m.contains("no correct answer")));
        assert!(messages.iter().any(|m| m.contains("option 'A' has empty text")));
        assert!(warnings.iter().all(|w| w.question.is_some()));
    }

    #[test]
    fn validate_empty_set() {
        let warnings = validate_question_set(&QuestionSet::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].question.is_none());
    }

    #[test]
    fn answer_sheet_rejects_non_numeric_keys() {
        assert!(parse_answer_sheet_str(r#"{"first": "A"}"#).is_err());
        let sheet = parse_answer_sheet_str(r#"{"1": "A"}"#).unwrap();
        assert_eq!(sheet.get(1), Some("A"));
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), VALID_JSON).unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/b.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("broken.json"), "not json").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let files = question_set_files(dir.path()).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files[0].ends_with("a.json"));
        assert!(files[2].ends_with("nested/b.toml"));

        let sets = load_question_directory(dir.path()).unwrap();
        assert_eq!(sets.len(), 2);
        assert!(sets.iter().all(|s| s.title.as_deref() == Some("Arithmetic")));
    }
}

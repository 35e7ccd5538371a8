//! The `quizpress export` command.

use std::path::PathBuf;

use anyhow::Result;

use quizpress_core::parser;
use quizpress_layout::{ExportMode, Exporter};
use quizpress_report::json::write_pages_json;
use quizpress_report::text::write_text_proof;

use crate::config::{load_config_from, OutputFormat};

pub fn execute(
    questions_path: PathBuf,
    with_answers: bool,
    both: bool,
    output: Option<PathBuf>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let format: OutputFormat = format
        .as_deref()
        .unwrap_or(&config.format)
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{}", e))?;
    let output = output.unwrap_or_else(|| config.output_dir.clone());

    let set = parser::parse_question_set(&questions_path)?;
    if set.questions.is_empty() {
        println!("No questions found. Please try again.");
        return Ok(());
    }

    let mut exporter = Exporter::new(config.layout.clone());
    if let Some(title) = &set.title {
        exporter = exporter.with_title(title.clone());
    }

    let modes = if both {
        vec![ExportMode::QuestionsOnly, ExportMode::WithAnswers]
    } else {
        vec![ExportMode::from_include_answers(with_answers)]
    };

    std::fs::create_dir_all(&output)?;

    for mode in modes {
        let doc = exporter.export(&set.questions, mode);

        if format.writes_json() {
            let path = output.join(mode.file_name("json"));
            write_pages_json(&doc, &path)?;
            println!(
                "Wrote {} ({} questions, {} pages)",
                path.display(),
                doc.question_count,
                doc.page_count()
            );
        }
        if format.writes_text() {
            let path = output.join(mode.file_name("txt"));
            write_text_proof(&doc, &path)?;
            println!(
                "Wrote {} ({} questions, {} pages)",
                path.display(),
                doc.question_count,
                doc.page_count()
            );
        }
    }

    Ok(())
}

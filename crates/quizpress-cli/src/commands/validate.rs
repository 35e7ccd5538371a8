//! The `quizpress validate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizpress_core::model::QuestionSet;
use quizpress_core::parser;
use quizpress_core::scoring::marks_available;

/// Outcome of checking one file.
struct SetCheck {
    source: PathBuf,
    result: Result<(QuestionSet, usize)>,
}

pub fn execute(questions_path: PathBuf) -> Result<()> {
    if !questions_path.is_dir() {
        let set = parser::parse_question_set(&questions_path)?;
        print_total(report_set(&set));
        return Ok(());
    }

    // Inside a directory every file is reported, including the ones that
    // fail to parse.
    let checks: Vec<SetCheck> = parser::question_set_files(&questions_path)?
        .into_iter()
        .map(|source| {
            let result = parser::parse_question_set(&source).map(|set| {
                let warnings = report_set(&set);
                (set, warnings)
            });
            if let Err(e) = &result {
                println!("{}: ERROR: {e:#}", source.display());
            }
            SetCheck { source, result }
        })
        .collect();

    print_summary(&checks);

    let failed = checks.iter().filter(|c| c.result.is_err()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} question set(s) failed to parse", checks.len());
    }

    print_total(
        checks
            .iter()
            .filter_map(|c| c.result.as_ref().ok())
            .map(|(_, warnings)| warnings)
            .sum(),
    );
    Ok(())
}

fn print_total(total_warnings: usize) {
    if total_warnings == 0 {
        println!("All question sets valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }
}

/// Print the set header and its warnings; returns the warning count.
fn report_set(set: &QuestionSet) -> usize {
    println!(
        "Question set: {} ({} questions, {} multiple-choice)",
        set.display_name(),
        set.questions.len(),
        set.multiple_choice_count()
    );

    let warnings = parser::validate_question_set(set);
    for w in &warnings {
        let prefix = w
            .question
            .map(|i| format!("  [Q{}]", i + 1))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }
    warnings.len()
}

fn print_summary(checks: &[SetCheck]) {
    let mut table = Table::new();
    table.set_header(vec!["File", "Set", "Questions", "Marks", "Status"]);

    for check in checks {
        let file = check
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let row = match &check.result {
            Ok((set, warnings)) => vec![
                Cell::new(file),
                Cell::new(set.display_name()),
                Cell::new(set.questions.len()),
                Cell::new(marks_available(&set.questions)),
                Cell::new(match warnings {
                    0 => "ok".to_string(),
                    n => format!("{n} warning(s)"),
                }),
            ],
            Err(_) => vec![
                Cell::new(file),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new("parse error"),
            ],
        };
        table.add_row(row);
    }

    println!("\n{table}");
}

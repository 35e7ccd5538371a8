//! Submission results: JSON persistence and a markdown summary.

use std::path::Path;

use anyhow::{Context, Result};

use quizpress_core::model::Question;
use quizpress_core::scoring::QuestionOutcome;
use quizpress_core::session::Submission;

/// Save a submission as pretty JSON.
pub fn write_submission_json(submission: &Submission, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(submission).context("failed to serialize submission")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write submission to {}", path.display()))?;
    Ok(())
}

/// Load a submission from a JSON file.
pub fn load_submission_json(path: &Path) -> Result<Submission> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read submission from {}", path.display()))?;
    serde_json::from_str(&content).context("failed to parse submission JSON")
}

/// Per-question feedback line, as shown after submit.
pub fn feedback_line(question: &Question, outcome: QuestionOutcome) -> String {
    match outcome {
        QuestionOutcome::Submitted => "Your answer has been submitted.".to_string(),
        QuestionOutcome::Correct | QuestionOutcome::Incorrect | QuestionOutcome::Missed => {
            match (question.is_multiple_choice(), question.reference_answer()) {
                (true, Some(label)) => format!("Correct Answer: {label}"),
                (true, None) => "No correct answer provided.".to_string(),
                (false, _) => "Not answered.".to_string(),
            }
        }
    }
}

fn outcome_label(outcome: QuestionOutcome) -> &'static str {
    match outcome {
        QuestionOutcome::Correct => "correct",
        QuestionOutcome::Incorrect => "incorrect",
        QuestionOutcome::Missed => "missed",
        QuestionOutcome::Submitted => "submitted",
    }
}

/// Render a markdown summary of a submission.
pub fn summary_markdown(submission: &Submission, questions: &[Question]) -> String {
    let tally = &submission.tally;
    let mut md = String::from("## Test Results\n\n");

    md.push_str("| Correct | Incorrect | Missed |\n");
    md.push_str("|---------|-----------|--------|\n");
    md.push_str(&format!(
        "| {} | {} | {} |\n",
        tally.correct, tally.incorrect, tally.missed
    ));

    if submission.marks_available > 0.0 {
        md.push_str(&format!(
            "\nMarks: {} / {}\n",
            submission.marks_awarded, submission.marks_available
        ));
    }

    md.push_str(&format!(
        "\nSubmitted {}\n",
        submission.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    if !questions.is_empty() {
        md.push_str("\n### Questions\n\n");
        for (i, (question, outcome)) in questions.iter().zip(&submission.outcomes).enumerate() {
            let answer = submission
                .answers
                .get(i)
                .map(|a| format!(" (your answer: {a})"))
                .unwrap_or_default();
            md.push_str(&format!(
                "{}. **{}**{}: {} {}\n",
                i + 1,
                outcome_label(*outcome),
                answer,
                question.text,
                feedback_line(question, *outcome)
            ));
        }
    }

    md
}

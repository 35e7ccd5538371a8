//! The `quizpress score` command.

use std::path::PathBuf;

use anyhow::Result;

use quizpress_core::model::Question;
use quizpress_core::parser;
use quizpress_core::session::{Submission, TestSession};
use quizpress_report::submission::{feedback_line, summary_markdown, write_submission_json};

pub fn execute(
    questions_path: PathBuf,
    answers_path: PathBuf,
    output: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let set = parser::parse_question_set(&questions_path)?;
    let answers = parser::parse_answer_sheet(&answers_path)?;

    if set.questions.is_empty() {
        println!("No questions found. Please try again.");
        return Ok(());
    }

    let mut session = TestSession::new(set.questions);
    for (index, response) in answers.iter() {
        if let Err(e) = session.record_answer(index, response) {
            tracing::warn!("ignoring answer for question {}: {}", index + 1, e);
        }
    }

    let questions = session.questions().to_vec();
    let submission = session.submit()?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(submission)?),
        "markdown" | "md" => println!("{}", summary_markdown(submission, &questions)),
        _ => print_summary(submission, &questions),
    }

    if let Some(path) = output {
        write_submission_json(submission, &path)?;
        eprintln!("Results saved to: {}", path.display());
    }

    Ok(())
}

fn print_summary(submission: &Submission, questions: &[Question]) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Answer", "Outcome", "Feedback"]);

    for (i, (question, outcome)) in questions.iter().zip(&submission.outcomes).enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&question.text),
            Cell::new(submission.answers.get(i).unwrap_or("-")),
            Cell::new(format!("{outcome:?}")),
            Cell::new(feedback_line(question, *outcome)),
        ]);
    }

    println!("{table}");

    let tally = &submission.tally;
    println!("\nTest Results");
    println!("  Correct:   {}", tally.correct);
    println!("  Incorrect: {}", tally.incorrect);
    println!("  Missed:    {}", tally.missed);
    println!("  Accuracy:  {:.0}%", tally.accuracy() * 100.0);
    if submission.marks_available > 0.0 {
        println!(
            "  Marks:     {} / {}",
            submission.marks_awarded, submission.marks_available
        );
    }
}

//! quizpress CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "quizpress",
    version,
    about = "Score question sets and lay them out for export"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate question set files
    Validate {
        /// Path to a .json/.toml question set or a directory
        #[arg(long)]
        questions: PathBuf,
    },

    /// Score an answer sheet against a question set
    Score {
        /// Question set file
        #[arg(long)]
        questions: PathBuf,

        /// Answer sheet JSON (question index -> response)
        #[arg(long)]
        answers: PathBuf,

        /// Save the submission as JSON
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Lay out a question set as pages
    Export {
        /// Question set file
        #[arg(long)]
        questions: PathBuf,

        /// Include the answer key
        #[arg(long)]
        with_answers: bool,

        /// Write both the questions-only and the with-answers layout
        #[arg(long, conflicts_with = "with_answers")]
        both: bool,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json, text, all
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example question set
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizpress=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { questions } => commands::validate::execute(questions),
        Commands::Score {
            questions,
            answers,
            output,
            format,
        } => commands::score::execute(questions, answers, output, format),
        Commands::Export {
            questions,
            with_answers,
            both,
            output,
            format,
            config,
        } => commands::export::execute(questions, with_answers, both, output, format, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

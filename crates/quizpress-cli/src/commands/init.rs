//! The `quizpress init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizpress.toml
    if std::path::Path::new("quizpress.toml").exists() {
        println!("quizpress.toml already exists, skipping.");
    } else {
        std::fs::write("quizpress.toml", SAMPLE_CONFIG)?;
        println!("Created quizpress.toml");
    }

    // Create example question set and answer sheet
    std::fs::create_dir_all("question-sets")?;
    for (path, content) in [
        ("question-sets/example.json", EXAMPLE_QUESTION_SET),
        ("question-sets/example-answers.json", EXAMPLE_ANSWERS),
    ] {
        if std::path::Path::new(path).exists() {
            println!("{path} already exists, skipping.");
        } else {
            std::fs::write(path, content)?;
            println!("Created {path}");
        }
    }

    println!("\nNext steps:");
    println!("  1. Run: quizpress validate --questions question-sets/example.json");
    println!(
        "  2. Run: quizpress score --questions question-sets/example.json \
         --answers question-sets/example-answers.json"
    );
    println!("  3. Run: quizpress export --questions question-sets/example.json --both");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizpress configuration

output_dir = "./quizpress-output"
# json, text, or all
format = "json"

[layout]
title = "Generated Questions"
content_width = 180.0
page_height = 270.0
top_margin = 20.0
line_height = 6.0
rule_advance = 8.0
question_gap = 10.0
left_margin = 10.0
option_indent = 15.0
title_y = 10.0
char_width = 2.5
"#;

const EXAMPLE_QUESTION_SET: &str = r#"{
  "title": "Example Quiz",
  "questions": [
    {
      "question": "What is 2 + 2?",
      "marks": 1,
      "options": { "A": "3", "B": "4", "C": "5", "D": "22" },
      "correctAnswer": "B"
    },
    {
      "question": "Which planet is known as the Red Planet?",
      "marks": 1,
      "options": { "A": "Venus", "B": "Jupiter", "C": "Mars", "D": "Mercury" },
      "correctAnswer": "C"
    },
    {
      "question": "Explain why the sky appears blue during the day.",
      "marks": 3,
      "correctAnswer": "Air molecules scatter shorter blue wavelengths of sunlight more strongly than longer red wavelengths."
    }
  ]
}
"#;

const EXAMPLE_ANSWERS: &str = r#"{
  "0": "B",
  "1": "A",
  "2": "Because of scattering."
}
"#;

//! Plain-text proof of an exported layout.
//!
//! One section per page, one row per draw operation with its coordinates
//! and a style marker (`[i]` italic, `[b]` bold). Useful for eyeballing
//! page breaks without a PDF viewer.

use std::path::Path;

use anyhow::{Context, Result};

use quizpress_layout::{ExportedDocument, TextStyle};

fn style_marker(style: TextStyle) -> &'static str {
    match style {
        TextStyle::Normal => "   ",
        TextStyle::Italic => "[i]",
        TextStyle::Bold => "[b]",
    }
}

/// Render the proof as a string.
pub fn generate_text_proof(doc: &ExportedDocument) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "== {} ({} questions, {} pages) ==\n",
        doc.file_name,
        doc.question_count,
        doc.page_count()
    ));

    for page in &doc.pages {
        out.push_str(&format!("\n--- page {} ---\n", page.number));
        for op in &page.ops {
            out.push_str(&format!(
                "y={:>6.1} x={:>5.1} {} {}\n",
                op.y,
                op.x,
                style_marker(op.style),
                op.text
            ));
        }
    }

    if doc.is_empty() {
        out.push_str("\n(no questions)\n");
    }

    out
}

/// Write the proof to a file.
pub fn write_text_proof(doc: &ExportedDocument, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, generate_text_proof(doc))
        .with_context(|| format!("failed to write proof to {}", path.display()))?;
    Ok(())
}

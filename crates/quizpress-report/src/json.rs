//! JSON page dump.
//!
//! The pretty-printed [`ExportedDocument`] is what an external PDF writer
//! consumes: one entry per page, each with its draw operations in order.

use std::path::Path;

use anyhow::{Context, Result};

use quizpress_layout::ExportedDocument;

/// Serialize an exported document to pretty JSON.
pub fn generate_pages_json(doc: &ExportedDocument) -> Result<String> {
    serde_json::to_string_pretty(doc).context("failed to serialize exported document")
}

/// Write an exported document as JSON.
pub fn write_pages_json(doc: &ExportedDocument, path: &Path) -> Result<()> {
    let json = generate_pages_json(doc)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write layout to {}", path.display()))?;
    Ok(())
}

/// Load a previously written document.
pub fn load_pages_json(path: &Path) -> Result<ExportedDocument> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read layout from {}", path.display()))?;
    serde_json::from_str(&content).context("failed to parse layout JSON")
}

//! CLI configuration.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizpress_layout::LayoutConfig;

/// Output format for exported layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
    All,
}

impl OutputFormat {
    pub fn writes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::All)
    }

    pub fn writes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::All)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            "all" => Ok(OutputFormat::All),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Top-level quizpress configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizpressConfig {
    /// Page geometry and document title.
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Directory exported files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Default export format: json, text, or all.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./quizpress-output")
}

fn default_format() -> String {
    "json".to_string()
}

impl Default for QuizpressConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            output_dir: default_output_dir(),
            format: default_format(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizpress.toml` in the current directory
/// 2. `~/.config/quizpress/config.toml`
///
/// `QUIZPRESS_OUTPUT_DIR` overrides `output_dir`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizpressConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizpress.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizpressConfig::default(),
    };

    if let Ok(dir) = std::env::var("QUIZPRESS_OUTPUT_DIR") {
        config.output_dir = PathBuf::from(dir);
    }

    Ok(config)
}

fn parse_config(content: &str) -> Result<QuizpressConfig> {
    let config: QuizpressConfig = toml::from_str(content)?;
    config
        .format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    anyhow::ensure!(
        config.layout.metrics.page_height > config.layout.metrics.top_margin,
        "layout.page_height must be greater than layout.top_margin"
    );
    anyhow::ensure!(
        config.layout.metrics.content_width > 0.0,
        "layout.content_width must be positive"
    );
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizpress"))
}

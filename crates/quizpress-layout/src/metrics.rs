//! Page geometry and text measurement.
//!
//! All lengths are in abstract layout units. The defaults describe an A4
//! portrait page in millimetres with 14pt Helvetica, which is what the
//! downstream PDF writer expects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Measures the rendered width of a run of text.
pub trait TextMeasure: fmt::Debug + Send + Sync {
    fn width(&self, text: &str) -> f64;
}

/// Every character advances by the same amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedAdvance {
    pub char_width: f64,
}

impl TextMeasure for FixedAdvance {
    fn width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }
}

/// Fixed page geometry for one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMetrics {
    /// Maximum rendered width of a wrapped line.
    pub content_width: f64,
    /// Vertical threshold; content that would pass it moves to a new page.
    pub page_height: f64,
    /// Cursor position at the top of every page.
    pub top_margin: f64,
    /// Advance per wrapped text line.
    pub line_height: f64,
    /// Advance for the response prompt, blank answer rules, and the answer
    /// key header.
    pub rule_advance: f64,
    /// Advance after every question block.
    pub question_gap: f64,
    /// x of stems, prompts, rules and answer text.
    pub left_margin: f64,
    /// x of option lines.
    pub option_indent: f64,
    /// y of the document title on the first page.
    pub title_y: f64,
    /// Advance per character for the default measure.
    pub char_width: f64,
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self {
            content_width: 180.0,
            page_height: 270.0,
            top_margin: 20.0,
            line_height: 6.0,
            rule_advance: 8.0,
            question_gap: 10.0,
            left_margin: 10.0,
            option_indent: 15.0,
            title_y: 10.0,
            char_width: 2.5,
        }
    }
}

impl PageMetrics {
    /// The fixed-advance measure described by `char_width`.
    pub fn measure(&self) -> FixedAdvance {
        FixedAdvance {
            char_width: self.char_width,
        }
    }
}

pub const DEFAULT_TITLE: &str = "Generated Questions";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Page metrics plus document-level settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Title drawn on the first page. Empty disables it.
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(flatten)]
    pub metrics: PageMetrics,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            metrics: PageMetrics::default(),
        }
    }
}

impl LayoutConfig {
    pub fn title(&self) -> Option<&str> {
        Some(self.title.trim()).filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_advance_counts_chars() {
        let m = FixedAdvance { char_width: 2.0 };
        assert_eq!(m.width(""), 0.0);
        assert_eq!(m.width("abc"), 6.0);
        assert_eq!(m.width("é!"), 4.0);
    }

    #[test]
    fn default_metrics() {
        let m = PageMetrics::default();
        assert_eq!(m.content_width, 180.0);
        assert_eq!(m.page_height, 270.0);
        assert_eq!(m.top_margin, 20.0);
        assert_eq!(m.line_height, 6.0);
        assert_eq!(m.question_gap, 10.0);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: LayoutConfig = toml::from_str("page_height = 100.0\ntitle = \"Quiz\"").unwrap();
        assert_eq!(config.metrics.page_height, 100.0);
        assert_eq!(config.metrics.content_width, 180.0);
        assert_eq!(config.title(), Some("Quiz"));
    }

    #[test]
    fn empty_title_disables_it() {
        let config = LayoutConfig {
            title: "  ".into(),
            ..Default::default()
        };
        assert_eq!(config.title(), None);
        assert_eq!(LayoutConfig::default().title(), Some(DEFAULT_TITLE));
    }
}

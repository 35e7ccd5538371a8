//! Cursor-driven pagination.
//!
//! [`LayoutState`] is folded over the block sequence. Each step draws at the
//! current cursor and advances it; when the next piece of content would pass
//! the page height, the state starts a new page and resets the cursor to the
//! top margin.
//!
//! Page breaks are checked at two granularities. A question stem is checked
//! once, against the height of its first line only, and then drawn in full
//! even if later stem lines run past the threshold. Option, prompt, rule and
//! answer lines are checked one at a time.

use serde::{Deserialize, Serialize};

use crate::block::{Block, BlockBody, ANSWER_HEADER, RESPONSE_PROMPT, RESPONSE_RULE};
use crate::metrics::PageMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    Normal,
    Italic,
    Bold,
}

/// What a drawn line is part of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRole {
    Title,
    Stem,
    Option,
    ResponsePrompt,
    ResponseRule,
    AnswerHeader,
    AnswerText,
}

/// A single positioned line of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawOp {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub style: TextStyle,
    pub role: LineRole,
    /// 0-based index of the owning question; `None` for the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<usize>,
}

/// One page of draw instructions, in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    pub ops: Vec<DrawOp>,
}

impl Page {
    fn new(number: usize) -> Self {
        Self {
            number,
            ops: Vec::new(),
        }
    }
}

/// Accumulated layout: the finished pages plus the cursor on the last one.
#[derive(Debug, Clone)]
pub struct LayoutState<'m> {
    metrics: &'m PageMetrics,
    cursor_y: f64,
    pages: Vec<Page>,
}

impl<'m> LayoutState<'m> {
    /// A single empty page, titled when `title` is given.
    pub fn new(metrics: &'m PageMetrics, title: Option<&str>) -> Self {
        let mut first = Page::new(1);
        if let Some(title) = title {
            first.ops.push(DrawOp {
                text: title.to_string(),
                x: metrics.left_margin,
                y: metrics.title_y,
                style: TextStyle::Normal,
                role: LineRole::Title,
                question: None,
            });
        }
        Self {
            metrics,
            cursor_y: metrics.top_margin,
            pages: vec![first],
        }
    }

    pub fn cursor_y(&self) -> f64 {
        self.cursor_y
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }

    /// Break before a question stem. Only the first line's height is
    /// considered; the remaining stem lines are never split across pages.
    /// Returns `true` if a new page was started.
    pub fn ensure_space_for_block(&mut self, first_line_height: f64) -> bool {
        self.break_if_needed(first_line_height)
    }

    /// Break before a single line. Returns `true` if a new page was started.
    pub fn ensure_space_for_line(&mut self, height: f64) -> bool {
        self.break_if_needed(height)
    }

    fn break_if_needed(&mut self, needed: f64) -> bool {
        if self.cursor_y + needed <= self.metrics.page_height {
            return false;
        }
        let number = self.pages.len() + 1;
        tracing::debug!(page = number, cursor_y = self.cursor_y, needed, "page break");
        self.pages.push(Page::new(number));
        self.cursor_y = self.metrics.top_margin;
        true
    }

    fn draw_at(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        style: TextStyle,
        role: LineRole,
        question: usize,
    ) {
        // `pages` always holds at least the first page.
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(DrawOp {
                text: text.to_string(),
                x,
                y,
                style,
                role,
                question: Some(question),
            });
        }
    }

    /// Check, draw at the cursor, advance.
    fn line(
        &mut self,
        text: &str,
        x: f64,
        style: TextStyle,
        role: LineRole,
        question: usize,
        advance: f64,
    ) {
        self.ensure_space_for_line(advance);
        self.draw_at(text, x, self.cursor_y, style, role, question);
        self.cursor_y += advance;
    }

    /// Lay out one question block.
    pub fn place(mut self, block: &Block) -> Self {
        let m = self.metrics;
        let q = block.question;

        self.ensure_space_for_block(m.line_height);
        let top = self.cursor_y;
        for (i, text) in block.stem.iter().enumerate() {
            let y = top + i as f64 * m.line_height;
            self.draw_at(text, m.left_margin, y, TextStyle::Normal, LineRole::Stem, q);
        }
        self.cursor_y += block.stem.len() as f64 * m.line_height;

        match &block.body {
            BlockBody::Options(lines) => {
                for text in lines {
                    self.line(
                        text,
                        m.option_indent,
                        TextStyle::Normal,
                        LineRole::Option,
                        q,
                        m.line_height,
                    );
                }
            }
            BlockBody::Response { rules } => {
                self.line(
                    RESPONSE_PROMPT,
                    m.left_margin,
                    TextStyle::Italic,
                    LineRole::ResponsePrompt,
                    q,
                    m.rule_advance,
                );
                for _ in 0..*rules {
                    self.line(
                        RESPONSE_RULE,
                        m.left_margin,
                        TextStyle::Normal,
                        LineRole::ResponseRule,
                        q,
                        m.rule_advance,
                    );
                }
            }
        }

        if let Some(answer) = &block.answer_key {
            self.line(
                ANSWER_HEADER,
                m.left_margin,
                TextStyle::Bold,
                LineRole::AnswerHeader,
                q,
                m.rule_advance,
            );
            for text in answer {
                self.line(
                    text,
                    m.left_margin,
                    TextStyle::Normal,
                    LineRole::AnswerText,
                    q,
                    m.line_height,
                );
            }
        }

        // Added even straight after a page break.
        self.cursor_y += m.question_gap;
        self
    }
}

/// Fold `blocks` into pages.
pub fn layout_blocks<'a, I>(blocks: I, metrics: &PageMetrics, title: Option<&str>) -> Vec<Page>
where
    I: IntoIterator<Item = &'a Block>,
{
    blocks
        .into_iter()
        .fold(LayoutState::new(metrics, title), |state, block| state.place(block))
        .into_pages()
}

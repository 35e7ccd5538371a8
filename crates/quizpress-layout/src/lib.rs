//! quizpress-layout: paginated layout of question sets.
//!
//! Questions are wrapped into blocks, and the blocks are folded into pages
//! of positioned text lines. The result is an abstract page description; a
//! separate writer turns it into PDF or any other page format.

pub mod block;
pub mod engine;
pub mod export;
pub mod metrics;
pub mod wrap;

pub use engine::{DrawOp, LineRole, Page, TextStyle};
pub use export::{export, ExportMode, ExportedDocument, Exporter};
pub use metrics::{FixedAdvance, LayoutConfig, PageMetrics, TextMeasure};

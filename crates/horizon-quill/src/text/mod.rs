//! Text measurement for caret tracking.
//!
//! This module computes line-wrapped layouts and caret pixel offsets for
//! the text shown in a host input control. The wrap algorithm must match
//! the host control's rendering exactly (word-breaking rules, line height,
//! wrap width); any divergence shows up as caret-position drift, which in
//! turn misplaces the suggestion popup.
//!
//! # Example
//!
//! ```
//! use horizon_quill::text::{TextLayout, UniformMetrics};
//!
//! let metrics = UniformMetrics::new(8.0, 16.0);
//! let layout = TextLayout::measure("hello world", &metrics, 200.0);
//! assert_eq!(layout.line_count(), 1);
//!
//! let caret = layout.caret_offset(5).unwrap();
//! assert_eq!(caret.x, 40.0);
//! assert_eq!(caret.y, 0.0);
//! ```

mod layout;
mod metrics;

pub use layout::{LayoutError, LayoutGlyph, LayoutLine, TextLayout};
pub use metrics::{FontMetrics, UniformMetrics};

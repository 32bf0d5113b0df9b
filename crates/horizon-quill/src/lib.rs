//! Horizon Quill - caret tracking and inline completion overlays.
//!
//! Horizon Quill keeps a suggestion popup anchored to the text caret of a
//! multiline, word-wrapped input field. The hard part it owns is caret
//! position computation under text wrapping and multi-line growth, and
//! keeping the popup's anchor synchronized with asynchronous input,
//! focus, and layout events.
//!
//! The crate is host-agnostic: the surrounding toolkit supplies the input
//! control, the overlay layer, and font metrics through the traits in
//! [`host`] and [`text`], and forwards its change/focus/layout
//! notifications to the [`OverlayController`].
//!
//! # Components
//!
//! - [`text::TextLayout`]: line-wrapped layout and caret pixel offsets
//! - [`CaretLocator`]: absolute screen coordinate of the caret
//! - [`CompletionModel`] / [`DelimitedMenuModel`]: candidate resolution
//! - [`OverlayController`]: popup lifecycle, anchoring, and teardown
//!
//! # Example
//!
//! ```
//! use horizon_quill::{
//!     ContentInsets, DelimitedMenuModel, OverlayController,
//!     OverlayHost, TextInputHost,
//! };
//! use horizon_quill::text::UniformMetrics;
//! use horizon_quill_core::{Point, Rect};
//!
//! struct Field {
//!     text: String,
//!     caret: usize,
//!     rect: Option<Rect>,
//! }
//!
//! impl TextInputHost for Field {
//!     fn text(&self) -> &str {
//!         &self.text
//!     }
//!     fn caret(&self) -> usize {
//!         self.caret
//!     }
//!     fn field_rect(&self) -> Option<Rect> {
//!         self.rect
//!     }
//!     fn set_text_and_caret(&mut self, text: String, caret: usize) {
//!         self.text = text;
//!         self.caret = caret;
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Layer {
//!     popup: Option<(Point, Vec<String>)>,
//! }
//!
//! impl OverlayHost for Layer {
//!     fn insert(&mut self, anchor: Point, items: &[String]) {
//!         self.popup = Some((anchor, items.to_vec()));
//!     }
//!     fn remove(&mut self) {
//!         self.popup = None;
//!     }
//! }
//!
//! let mut controller = OverlayController::new(
//!     Box::new(DelimitedMenuModel::from(vec!["banana", "orange", "grape"])),
//!     Box::new(UniformMetrics::new(8.0, 16.0)),
//!     ContentInsets::new(4.0, 4.0),
//! );
//!
//! let field = Field {
//!     text: "oran".to_string(),
//!     caret: 4,
//!     rect: Some(Rect::new(0.0, 0.0, 200.0, 32.0)),
//! };
//! let mut layer = Layer::default();
//!
//! // The host forwards its events; the popup appears once layout commits.
//! controller.notify_text_changed();
//! controller.layout_committed(&field, &mut layer);
//! assert!(controller.is_visible());
//! assert_eq!(layer.popup.as_ref().unwrap().1, vec!["orange".to_string()]);
//! ```

mod caret;
mod complete;
mod editor;
mod host;
mod overlay;
pub mod text;

pub use caret::{CaretLocator, ContentInsets};
pub use complete::{CaseSensitivity, CompletionModel, DelimitedMenuModel, apply_completion};
pub use editor::EditorState;
pub use host::{OverlayHost, TextInputHost};
pub use overlay::{DEFAULT_GRACE_PERIOD, OverlayController, OverlayState};

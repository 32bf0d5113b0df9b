//! Host interface traits.
//!
//! The overlay core runs inside a host UI toolkit and reaches it through
//! two narrow seams: the text input control being completed, and the
//! overlay/layer system the popup is inserted into. The host forwards its
//! own change/focus/layout notifications to the
//! [`OverlayController`](crate::OverlayController)'s `notify_*` and
//! `layout_committed` entry points.

use horizon_quill_core::{Point, Rect};

/// The text input control being completed.
///
/// The core reads current text, the collapsed selection index, and the
/// field's bounding box on demand. It writes back only on suggestion
/// acceptance, through [`set_text_and_caret`](Self::set_text_and_caret).
pub trait TextInputHost {
    /// The field's current text.
    fn text(&self) -> &str;

    /// The current caret index (byte offset into [`text`](Self::text)).
    fn caret(&self) -> usize;

    /// The field's bounding box in screen coordinates, or `None` if the
    /// field has not been laid out yet.
    ///
    /// Queried on demand at recompute time, never cached: the box changes
    /// with window resize, scrolling, and multi-line growth.
    fn field_rect(&self) -> Option<Rect>;

    /// Replace the field's text and move the caret.
    ///
    /// Called only when a suggestion is accepted.
    fn set_text_and_caret(&mut self, text: String, caret: usize);
}

/// The host's overlay/layer system.
///
/// The controller owns the popup's full lifecycle: it always calls
/// [`remove`](Self::remove) for the previous popup before
/// [`insert`](Self::insert)ing a replacement, and never leaves a popup
/// behind on teardown. Hosts can treat each `insert` as creating a fresh
/// layer entry.
pub trait OverlayHost {
    /// Insert a popup at `anchor` showing `items`.
    fn insert(&mut self, anchor: Point, items: &[String]);

    /// Remove the current popup.
    fn remove(&mut self);
}

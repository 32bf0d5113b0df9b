//! Caret location in screen coordinates.
//!
//! Combines the current [`EditorState`], the input field's on-screen
//! bounding box, and font metrics to produce an absolute screen coordinate
//! for the caret, suitable for anchoring the suggestion popup.

use horizon_quill_core::{Point, Rect};

use crate::editor::{EditorState, clamp_to_char_boundary};
use crate::text::{FontMetrics, TextLayout};

/// Content padding between the field's border box and its text, per side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentInsets {
    /// Padding on the left and right edges.
    pub horizontal: f32,
    /// Padding on the top and bottom edges.
    pub vertical: f32,
}

impl ContentInsets {
    /// Create insets with the given per-side padding.
    pub const fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// No padding.
    pub const ZERO: Self = Self {
        horizontal: 0.0,
        vertical: 0.0,
    };
}

/// Locates the caret of an input field in absolute screen coordinates.
///
/// The locator carries the field's content insets, a box-model policy of
/// the host control being shadowed: the wrap width subtracts the
/// horizontal inset from both sides, and the caret's y offset includes the
/// vertical inset for both the top and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CaretLocator {
    insets: ContentInsets,
}

impl CaretLocator {
    /// Create a locator with the given content insets.
    pub const fn new(insets: ContentInsets) -> Self {
        Self { insets }
    }

    /// Get the content insets.
    pub fn insets(&self) -> ContentInsets {
        self.insets
    }

    /// Compute the caret's absolute screen coordinate.
    ///
    /// `field_rect` is the input field's bounding box in screen
    /// coordinates, or `None` if the field has not been laid out yet.
    /// This never fails: without renderable geometry it degrades to the
    /// field origin (or the screen origin when no rect exists at all) —
    /// a misplaced popup is worse than one pinned at the field's corner.
    pub fn locate(
        &self,
        state: &EditorState,
        field_rect: Option<Rect>,
        metrics: &dyn FontMetrics,
    ) -> Point {
        let Some(rect) = field_rect else {
            return Point::ZERO;
        };
        if rect.is_empty() {
            return rect.origin;
        }

        let wrap_width = (rect.size.width - 2.0 * self.insets.horizontal).max(0.0);
        let layout = TextLayout::measure(state.text(), metrics, wrap_width);

        let offset = match layout.caret_offset(state.caret()) {
            Ok(offset) => offset,
            Err(err) => {
                // Unreachable if the EditorState invariant holds.
                debug_assert!(false, "caret offset failed: {err}");
                tracing::warn!(
                    target: "horizon_quill::caret",
                    %err,
                    "caret index invalid, clamping"
                );
                let clamped = clamp_to_char_boundary(state.text(), state.caret());
                layout.caret_offset(clamped).unwrap_or(Point::ZERO)
            }
        };

        // Vertical insets are applied for both the top and bottom edges,
        // matching the box model of the host control being shadowed.
        Point::new(
            rect.origin.x + self.insets.horizontal + offset.x,
            rect.origin.y + 2.0 * self.insets.vertical + offset.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::UniformMetrics;

    const METRICS: UniformMetrics = UniformMetrics::new(10.0, 20.0);

    #[test]
    fn test_locate_single_line() {
        let locator = CaretLocator::new(ContentInsets::new(4.0, 6.0));
        let state = EditorState::new("abc", 2);
        let rect = Rect::new(100.0, 200.0, 300.0, 40.0);

        let point = locator.locate(&state, Some(rect), &METRICS);
        assert_eq!(point.x, 100.0 + 4.0 + 20.0);
        // Vertical inset counts twice: top and bottom.
        assert_eq!(point.y, 200.0 + 12.0);
    }

    #[test]
    fn test_locate_wrapped_line_adds_line_heights() {
        let locator = CaretLocator::new(ContentInsets::new(5.0, 5.0));
        // Wrap width = 50 - 10 = 40, so "aaaa bbbb" wraps after the space.
        let state = EditorState::new("aaaa bbbb", 9);
        let rect = Rect::new(0.0, 0.0, 50.0, 100.0);

        let point = locator.locate(&state, Some(rect), &METRICS);
        assert_eq!(point.y, 10.0 + 20.0);
        assert_eq!(point.x, 5.0 + 40.0);
    }

    #[test]
    fn test_locate_without_geometry_degrades_to_zero() {
        let locator = CaretLocator::new(ContentInsets::new(4.0, 4.0));
        let state = EditorState::new("abc", 1);

        assert_eq!(locator.locate(&state, None, &METRICS), Point::ZERO);
    }

    #[test]
    fn test_locate_with_empty_rect_degrades_to_origin() {
        let locator = CaretLocator::new(ContentInsets::ZERO);
        let state = EditorState::new("abc", 1);
        let rect = Rect::new(30.0, 40.0, 0.0, 0.0);

        assert_eq!(
            locator.locate(&state, Some(rect), &METRICS),
            Point::new(30.0, 40.0)
        );
    }

    #[test]
    fn test_locate_empty_text_sits_at_content_origin() {
        let locator = CaretLocator::new(ContentInsets::new(8.0, 3.0));
        let state = EditorState::empty();
        let rect = Rect::new(10.0, 10.0, 100.0, 30.0);

        let point = locator.locate(&state, Some(rect), &METRICS);
        assert_eq!(point, Point::new(18.0, 16.0));
    }
}

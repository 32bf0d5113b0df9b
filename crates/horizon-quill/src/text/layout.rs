//! Line-wrapped text layout and caret offset computation.

use std::ops::Range;

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use horizon_quill_core::Point;

use super::FontMetrics;

/// Errors from caret offset lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The caret index is outside `[0, text.len()]`.
    #[error("caret index {index} out of bounds for text of length {len}")]
    InvalidIndex { index: usize, len: usize },

    /// The caret index does not fall on a character boundary.
    #[error("caret index {index} is not a character boundary")]
    NotCharBoundary { index: usize },
}

/// A positioned grapheme cluster within the text layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGlyph {
    /// X position relative to the start of the line.
    pub x: f32,
    /// Advance width of the cluster.
    pub width: f32,
    /// The byte range in the original text this cluster represents.
    pub cluster: Range<usize>,
}

impl LayoutGlyph {
    /// Get the rightmost x position of this cluster.
    pub fn x_end(&self) -> f32 {
        self.x + self.width
    }
}

/// A single line within the text layout.
#[derive(Debug, Clone)]
pub struct LayoutLine {
    /// The grapheme clusters in this line, in text order.
    pub glyphs: Vec<LayoutGlyph>,
    /// Y offset from the top of the layout to this line's top.
    pub top_y: f32,
    /// Height of this line.
    pub height: f32,
    /// Width of this line's content.
    pub width: f32,
    /// The byte range in the original text that this line covers.
    ///
    /// Ranges of consecutive soft-wrapped lines are contiguous; a newline
    /// byte separating hard lines belongs to neither side's range.
    pub text_range: Range<usize>,
    /// Whether this line ends with a hard break (newline).
    pub is_hard_break: bool,
}

impl LayoutLine {
    /// Check if this line is empty (no glyphs).
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Get the x position for a given text offset within this line.
    pub fn x_for_offset(&self, offset: usize) -> f32 {
        if offset <= self.text_range.start || self.glyphs.is_empty() {
            return 0.0;
        }

        for glyph in &self.glyphs {
            if glyph.cluster.start >= offset {
                return glyph.x;
            }
            if glyph.cluster.contains(&offset) {
                return glyph.x;
            }
        }

        self.width
    }
}

/// A complete text layout with positioned lines.
///
/// Layouts are ephemeral: rebuilt whenever the text or the wrap width
/// changes, never mutated in place.
#[derive(Debug, Clone)]
pub struct TextLayout {
    /// The original text that was laid out.
    text: String,
    /// The laid out lines.
    lines: Vec<LayoutLine>,
    /// Total width of the layout (widest line).
    width: f32,
    /// Total height of the layout.
    height: f32,
    /// The uniform line height used for layout.
    line_height: f32,
}

impl TextLayout {
    /// Lay out `text` wrapped at `max_width`.
    ///
    /// Wrapping is greedy at word boundaries with a grapheme fallback for
    /// words wider than the wrap width, and hard breaks at `\n`. Trailing
    /// whitespace stays on the line it follows and may overflow
    /// `max_width`, matching how the host control renders wrapped text.
    ///
    /// A non-positive `max_width` still places at least one grapheme per
    /// line, so layout always makes progress.
    pub fn measure(text: &str, metrics: &dyn FontMetrics, max_width: f32) -> Self {
        let line_height = metrics.line_height();
        let mut lines: Vec<LayoutLine> = Vec::new();
        let mut top_y = 0.0;

        let piece_count = text.split('\n').count();
        let mut hard_start = 0;

        for (piece_index, piece) in text.split('\n').enumerate() {
            let is_last_piece = piece_index + 1 == piece_count;

            let mut glyphs: Vec<LayoutGlyph> = Vec::new();
            let mut line_start = hard_start;
            let mut x = 0.0;

            for (word_offset, word) in piece.split_word_bound_indices() {
                let word_abs = hard_start + word_offset;
                let is_whitespace = word.chars().all(char::is_whitespace);
                let word_width = metrics.text_width(word);

                // Whitespace never forces a wrap; it stays on the current
                // line even when it overflows the wrap width.
                if !is_whitespace && x > 0.0 && x + word_width > max_width {
                    lines.push(LayoutLine {
                        glyphs: std::mem::take(&mut glyphs),
                        top_y,
                        height: line_height,
                        width: x,
                        text_range: line_start..word_abs,
                        is_hard_break: false,
                    });
                    top_y += line_height;
                    line_start = word_abs;
                    x = 0.0;
                }

                let needs_grapheme_fallback = !is_whitespace && word_width > max_width;

                for (grapheme_offset, grapheme) in word.grapheme_indices(true) {
                    let cluster_start = word_abs + grapheme_offset;
                    let advance = metrics.advance(grapheme);

                    if needs_grapheme_fallback && x > 0.0 && x + advance > max_width {
                        lines.push(LayoutLine {
                            glyphs: std::mem::take(&mut glyphs),
                            top_y,
                            height: line_height,
                            width: x,
                            text_range: line_start..cluster_start,
                            is_hard_break: false,
                        });
                        top_y += line_height;
                        line_start = cluster_start;
                        x = 0.0;
                    }

                    glyphs.push(LayoutGlyph {
                        x,
                        width: advance,
                        cluster: cluster_start..cluster_start + grapheme.len(),
                    });
                    x += advance;
                }
            }

            // Final segment of the hard line; empty pieces still produce a
            // line so the caret can sit on them.
            lines.push(LayoutLine {
                glyphs,
                top_y,
                height: line_height,
                width: x,
                text_range: line_start..hard_start + piece.len(),
                is_hard_break: !is_last_piece,
            });
            top_y += line_height;

            hard_start += piece.len() + 1;
        }

        let width = lines.iter().map(|l| l.width).fold(0.0, f32::max);

        Self {
            text: text.to_string(),
            lines,
            width,
            height: top_y,
            line_height,
        }
    }

    /// Get the original text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the laid out lines.
    pub fn lines(&self) -> &[LayoutLine] {
        &self.lines
    }

    /// Get the total width of the layout.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Get the total height of the layout.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Get the number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get the uniform line height.
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Compute the pixel offset of the caret at byte `index`, relative to
    /// the layout origin.
    ///
    /// `x` is the measured width of the line prefix before the caret; `y`
    /// is the cumulative height of all prior lines.
    ///
    /// At a soft-wrap boundary the index is shared between the end of one
    /// line and the start of the next; the caret renders at the earlier
    /// line's trailing edge, matching host cursor rendering. After a hard
    /// break the caret belongs to the following line (the newline byte
    /// separates the two ranges, so no tie arises).
    pub fn caret_offset(&self, index: usize) -> Result<Point, LayoutError> {
        if index > self.text.len() {
            return Err(LayoutError::InvalidIndex {
                index,
                len: self.text.len(),
            });
        }
        if !self.text.is_char_boundary(index) {
            return Err(LayoutError::NotCharBoundary { index });
        }

        // First line whose range can hold the index wins the soft-wrap tie.
        let line = self
            .lines
            .iter()
            .find(|l| index >= l.text_range.start && index <= l.text_range.end)
            .or(self.lines.last());

        match line {
            Some(line) => Ok(Point::new(line.x_for_offset(index), line.top_y)),
            None => Ok(Point::ZERO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::UniformMetrics;

    const METRICS: UniformMetrics = UniformMetrics::new(10.0, 20.0);

    #[test]
    fn test_single_line_caret_has_zero_vertical_offset() {
        let layout = TextLayout::measure("hello", &METRICS, 1000.0);
        assert_eq!(layout.line_count(), 1);

        for index in 0..=5 {
            let caret = layout.caret_offset(index).unwrap();
            assert_eq!(caret.y, 0.0);
            assert_eq!(caret.x, index as f32 * 10.0);
        }
    }

    #[test]
    fn test_word_wrap_splits_at_word_boundary() {
        // "aaa bbb" at width 40: "aaa " fits (trailing space overflows
        // nothing), "bbb" wraps.
        let layout = TextLayout::measure("aaa bbb", &METRICS, 40.0);
        assert_eq!(layout.line_count(), 2);
        assert_eq!(layout.lines()[0].text_range, 0..4);
        assert_eq!(layout.lines()[1].text_range, 4..7);
        assert!(!layout.lines()[0].is_hard_break);
    }

    #[test]
    fn test_caret_at_final_char_of_wrapped_text() {
        // Three words, each forced onto its own line.
        let layout = TextLayout::measure("aaaa bbbb cccc", &METRICS, 45.0);
        assert_eq!(layout.line_count(), 3);

        let caret = layout.caret_offset(14).unwrap();
        assert_eq!(caret.y, 2.0 * 20.0);
        assert_eq!(caret.x, 40.0);
    }

    #[test]
    fn test_vertical_offset_grows_with_line_count() {
        let mut text = String::new();
        for n in 1..=5 {
            text.push_str("word ");
            let layout = TextLayout::measure(text.trim_end(), &METRICS, 45.0);
            assert_eq!(layout.line_count(), n);
            let caret = layout.caret_offset(text.trim_end().len()).unwrap();
            assert_eq!(caret.y, (n as f32 - 1.0) * 20.0);
        }
    }

    #[test]
    fn test_soft_wrap_boundary_prefers_earlier_line() {
        // Width 40 wraps "aaaabbbb" (one long word, grapheme fallback)
        // into "aaaa" / "bbbb"; index 4 is both end-of-line-0 and
        // start-of-line-1.
        let layout = TextLayout::measure("aaaabbbb", &METRICS, 40.0);
        assert_eq!(layout.line_count(), 2);
        assert_eq!(layout.lines()[0].text_range.end, 4);
        assert_eq!(layout.lines()[1].text_range.start, 4);

        let caret = layout.caret_offset(4).unwrap();
        assert_eq!(caret.y, 0.0, "caret at wrap boundary stays on line 0");
        assert_eq!(caret.x, 40.0, "caret renders at the trailing edge");
    }

    #[test]
    fn test_hard_break_moves_caret_to_next_line() {
        let layout = TextLayout::measure("ab\ncd", &METRICS, 1000.0);
        assert_eq!(layout.line_count(), 2);
        assert!(layout.lines()[0].is_hard_break);

        // Before the newline: end of line 0.
        let before = layout.caret_offset(2).unwrap();
        assert_eq!((before.x, before.y), (20.0, 0.0));

        // After the newline: start of line 1.
        let after = layout.caret_offset(3).unwrap();
        assert_eq!((after.x, after.y), (0.0, 20.0));
    }

    #[test]
    fn test_trailing_newline_produces_empty_line() {
        let layout = TextLayout::measure("ab\n", &METRICS, 1000.0);
        assert_eq!(layout.line_count(), 2);
        assert!(layout.lines()[1].is_empty());

        let caret = layout.caret_offset(3).unwrap();
        assert_eq!((caret.x, caret.y), (0.0, 20.0));
    }

    #[test]
    fn test_empty_text_layout() {
        let layout = TextLayout::measure("", &METRICS, 100.0);
        assert_eq!(layout.line_count(), 1);
        assert_eq!(layout.height(), 20.0);

        let caret = layout.caret_offset(0).unwrap();
        assert_eq!(caret, Point::ZERO);
    }

    #[test]
    fn test_invalid_index_rejected() {
        let layout = TextLayout::measure("abc", &METRICS, 100.0);
        assert_eq!(
            layout.caret_offset(4),
            Err(LayoutError::InvalidIndex { index: 4, len: 3 })
        );
    }

    #[test]
    fn test_non_boundary_index_rejected() {
        let layout = TextLayout::measure("é", &METRICS, 100.0);
        assert_eq!(
            layout.caret_offset(1),
            Err(LayoutError::NotCharBoundary { index: 1 })
        );
    }

    #[test]
    fn test_overlong_word_grapheme_fallback() {
        let layout = TextLayout::measure("abcdefgh", &METRICS, 30.0);
        assert_eq!(layout.line_count(), 3);
        assert_eq!(layout.lines()[0].text_range, 0..3);
        assert_eq!(layout.lines()[1].text_range, 3..6);
        assert_eq!(layout.lines()[2].text_range, 6..8);
    }

    #[test]
    fn test_layout_rebuild_is_deterministic() {
        let a = TextLayout::measure("some wrapped text here", &METRICS, 60.0);
        let b = TextLayout::measure("some wrapped text here", &METRICS, 60.0);
        assert_eq!(a.line_count(), b.line_count());
        for (la, lb) in a.lines().iter().zip(b.lines()) {
            assert_eq!(la.text_range, lb.text_range);
            assert_eq!(la.width, lb.width);
        }
    }
}

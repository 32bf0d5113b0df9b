//! Font metrics providers.

use unicode_segmentation::UnicodeSegmentation;

/// Glyph and line metrics for a fixed text style.
///
/// The measurer treats the metrics provider as a pure external service:
/// the host supplies one backed by its real font stack, and the layout is
/// only as accurate as the advances it reports. Implementations must be
/// deterministic for a given input.
pub trait FontMetrics {
    /// Advance width of a single grapheme cluster, in pixels.
    fn advance(&self, grapheme: &str) -> f32;

    /// Height of one laid-out line, in pixels.
    fn line_height(&self) -> f32;

    /// Width of a string: the sum of its grapheme advances.
    fn text_width(&self, text: &str) -> f32 {
        text.graphemes(true).map(|g| self.advance(g)).sum()
    }
}

/// Metrics with one fixed advance for every grapheme cluster.
///
/// Matches monospace rendering and keeps layout tests exact. Hosts with
/// proportional fonts implement [`FontMetrics`] against their own font
/// stack instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformMetrics {
    advance: f32,
    line_height: f32,
}

impl UniformMetrics {
    /// Create metrics with the given grapheme advance and line height.
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl FontMetrics for UniformMetrics {
    fn advance(&self, _grapheme: &str) -> f32 {
        self.advance
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_sums_graphemes() {
        let metrics = UniformMetrics::new(10.0, 20.0);
        assert_eq!(metrics.text_width(""), 0.0);
        assert_eq!(metrics.text_width("abc"), 30.0);
        // A combining sequence counts as one grapheme cluster.
        assert_eq!(metrics.text_width("e\u{0301}"), 10.0);
    }
}

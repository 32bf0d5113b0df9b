//! Editor state snapshot used for caret location.

/// A snapshot of the host input control's text and selection.
///
/// The overlay core assumes a collapsed selection (a single caret):
/// `0 <= selection_start == selection_end <= text.len()`. The constructor
/// enforces the invariant by clamping, so a snapshot can always be
/// measured; an out-of-range caret index is a programmer error and asserts
/// in debug builds.
///
/// Snapshots are ephemeral. One is taken per recompute from the host's
/// current text and selection, used to locate the caret, and discarded —
/// never cached across text changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    text: String,
    selection_start: usize,
    selection_end: usize,
}

impl EditorState {
    /// Create a snapshot with a collapsed selection at `caret`.
    ///
    /// `caret` is clamped to the nearest character boundary at or below
    /// `text.len()`.
    pub fn new(text: impl Into<String>, caret: usize) -> Self {
        let text = text.into();
        debug_assert!(
            caret <= text.len() && text.is_char_boundary(caret),
            "caret index {} invalid for text of length {}",
            caret,
            text.len()
        );
        let caret = clamp_to_char_boundary(&text, caret);
        Self {
            text,
            selection_start: caret,
            selection_end: caret,
        }
    }

    /// Create an empty snapshot with the caret at 0.
    pub fn empty() -> Self {
        Self::new(String::new(), 0)
    }

    /// Get the text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the selection start (equal to the caret index).
    pub fn selection_start(&self) -> usize {
        self.selection_start
    }

    /// Get the selection end (equal to the caret index).
    pub fn selection_end(&self) -> usize {
        self.selection_end
    }

    /// Get the caret index.
    pub fn caret(&self) -> usize {
        self.selection_end
    }
}

/// Clamp `index` to the nearest character boundary at or below it.
pub(crate) fn clamp_to_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_collapsed_selection() {
        let state = EditorState::new("hello", 3);
        assert_eq!(state.selection_start(), state.selection_end());
        assert_eq!(state.caret(), 3);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_out_of_range_caret_clamps_in_release() {
        let state = EditorState::new("abc", 99);
        assert_eq!(state.caret(), 3);
    }

    #[test]
    fn test_clamp_to_char_boundary() {
        // "é" is two bytes; index 1 is mid-character.
        assert_eq!(clamp_to_char_boundary("é", 1), 0);
        assert_eq!(clamp_to_char_boundary("é", 2), 2);
        assert_eq!(clamp_to_char_boundary("abc", 99), 3);
    }

    #[test]
    fn test_empty_state() {
        let state = EditorState::empty();
        assert_eq!(state.text(), "");
        assert_eq!(state.caret(), 0);
    }
}

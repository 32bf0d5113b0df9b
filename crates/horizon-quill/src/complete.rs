//! Completion candidate resolution.
//!
//! This module provides [`CompletionModel`], the pure suggestion source
//! consumed by the [`OverlayController`](crate::OverlayController), and
//! [`DelimitedMenuModel`], a model over delimiter-separated token paths
//! (e.g. `fruit.variety.`) where each accepted token opens the next menu
//! level.

/// Controls how completion matching handles letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    /// Case-sensitive matching (e.g., "Ora" won't match "orange").
    #[default]
    CaseSensitive,
    /// Case-insensitive matching (e.g., "Ora" will match "orange").
    CaseInsensitive,
}

/// Trait for providing completion suggestions.
///
/// Implement this trait to provide custom completion data sources.
/// Resolution must be pure and deterministic: the same `text` always
/// yields the same ordered candidates, with no hidden state and no I/O.
/// An empty result is the signal the overlay controller uses to suppress
/// the popup — it is not an error.
pub trait CompletionModel: Send {
    /// Get the ordered candidates for the current field text.
    fn resolve(&self, text: &str) -> Vec<String>;

    /// The token delimiter separating menu levels in the field text.
    fn delimiter(&self) -> char;
}

/// A completion model backed by a static candidate list, filtered against
/// the trailing delimiter-separated token.
///
/// Resolution rules:
///
/// - Empty text resolves to no candidates.
/// - Text ending with the delimiter resolves to the full candidate set:
///   the next menu level.
/// - Otherwise the trailing token filters the set to candidates containing
///   it as a substring, preserving insertion order.
#[derive(Debug, Clone)]
pub struct DelimitedMenuModel {
    items: Vec<String>,
    delimiter: char,
    case_sensitivity: CaseSensitivity,
    min_chars: usize,
}

impl DelimitedMenuModel {
    /// Create a model over the given candidates with delimiter `.`.
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            delimiter: '.',
            case_sensitivity: CaseSensitivity::CaseSensitive,
            min_chars: 0,
        }
    }

    /// Set the token delimiter using builder pattern.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set case sensitivity using builder pattern.
    pub fn with_case_sensitivity(mut self, sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = sensitivity;
        self
    }

    /// Set the minimum trailing-token length before candidates are offered.
    pub fn with_min_chars(mut self, count: usize) -> Self {
        self.min_chars = count;
        self
    }

    /// Get a reference to the candidates.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Set the candidates.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
    }

    fn matches(&self, candidate: &str, token: &str) -> bool {
        match self.case_sensitivity {
            CaseSensitivity::CaseSensitive => candidate.contains(token),
            CaseSensitivity::CaseInsensitive => {
                candidate.to_lowercase().contains(&token.to_lowercase())
            }
        }
    }
}

impl CompletionModel for DelimitedMenuModel {
    fn resolve(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        // A trailing delimiter opens the next menu level.
        if text.ends_with(self.delimiter) {
            return self.items.clone();
        }

        let trailing = text.rsplit(self.delimiter).next().unwrap_or(text);
        if trailing.len() < self.min_chars {
            return Vec::new();
        }

        self.items
            .iter()
            .filter(|item| self.matches(item, trailing))
            .cloned()
            .collect()
    }

    fn delimiter(&self) -> char {
        self.delimiter
    }
}

impl From<Vec<String>> for DelimitedMenuModel {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

impl From<Vec<&str>> for DelimitedMenuModel {
    fn from(items: Vec<&str>) -> Self {
        Self::new(items.into_iter().map(String::from).collect())
    }
}

/// Apply an accepted completion to the field text.
///
/// Replaces the trailing token after the last delimiter with `choice`, or
/// appends `choice` when the text is empty or ends with the delimiter.
/// The caller moves the caret to the end of the returned text.
pub fn apply_completion(text: &str, choice: &str, delimiter: char) -> String {
    if text.is_empty() || text.ends_with(delimiter) {
        return format!("{text}{choice}");
    }

    match text.rfind(delimiter) {
        Some(index) => format!("{}{}", &text[..=index], choice),
        None => choice.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_model() -> DelimitedMenuModel {
        DelimitedMenuModel::from(vec!["banana", "orange", "grape"])
    }

    #[test]
    fn test_trailing_delimiter_opens_next_level() {
        let model = fruit_model();
        assert_eq!(
            model.resolve("banana."),
            vec!["banana", "orange", "grape"]
        );
    }

    #[test]
    fn test_trailing_token_filters_by_substring() {
        let model = fruit_model();
        assert_eq!(model.resolve("banana.oran"), vec!["orange"]);
        // Substring, not prefix.
        assert_eq!(model.resolve("ran"), vec!["orange"]);
    }

    #[test]
    fn test_matching_is_case_sensitive_by_default() {
        let model = fruit_model();
        assert!(model.resolve("banana.Oran").is_empty());

        let relaxed = fruit_model().with_case_sensitivity(CaseSensitivity::CaseInsensitive);
        assert_eq!(relaxed.resolve("banana.Oran"), vec!["orange"]);
    }

    #[test]
    fn test_empty_text_resolves_to_nothing() {
        assert!(fruit_model().resolve("").is_empty());
    }

    #[test]
    fn test_no_match_resolves_to_nothing() {
        assert!(fruit_model().resolve("kiwi").is_empty());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let model = fruit_model();
        assert_eq!(model.resolve("an"), model.resolve("an"));
        assert_eq!(model.resolve("grape."), model.resolve("grape."));
    }

    #[test]
    fn test_min_chars_suppresses_short_tokens() {
        let model = fruit_model().with_min_chars(2);
        assert!(model.resolve("a").is_empty());
        assert_eq!(model.resolve("an"), vec!["banana", "orange"]);
    }

    #[test]
    fn test_apply_completion_replaces_trailing_token() {
        assert_eq!(apply_completion("banana.oran", "orange", '.'), "banana.orange");
        assert_eq!(apply_completion("oran", "orange", '.'), "orange");
    }

    #[test]
    fn test_apply_completion_appends_after_delimiter() {
        assert_eq!(apply_completion("banana.", "grape", '.'), "banana.grape");
        assert_eq!(apply_completion("", "banana", '.'), "banana");
    }
}

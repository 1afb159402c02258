// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Normalises raw comment text into a flat list of words
// before vocabulary building and encoding.
//
// Normalisation steps (applied in order):
//   1. Replace every punctuation/control character from the
//      filter set below with a plain space
//   2. Lowercase the whole string (Unicode-aware, so Cyrillic
//      text normalises correctly too)
//   3. Split on whitespace, dropping empty fragments
//
// Both the vocabulary builder and the encoder go through this
// one function, so a word is spelled identically on both sides
// of the lookup.

/// Characters stripped from comment text before splitting.
/// Standard punctuation plus tab/newline/carriage return —
/// apostrophes are kept so contractions survive as one word.
const FILTERS: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n\r";

#[derive(Debug, Clone, Copy)]
pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Split raw text into normalised lowercase words.
    /// Punctuation-only and empty input yields an empty Vec.
    pub fn words(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .chars()
            .map(|c| if FILTERS.contains(c) { ' ' } else { c })
            .collect();

        cleaned
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Number of words the text yields after normalisation
    pub fn word_count(&self, text: &str) -> usize {
        self.words(text).len()
    }
}

/// Implement Default so Preprocessor can be created with Preprocessor::default()
impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_words() {
        let p = Preprocessor::new();
        assert_eq!(p.words("Hello WORLD"), vec!["hello", "world"]);
    }

    #[test]
    fn test_strips_punctuation() {
        let p = Preprocessor::new();
        assert_eq!(p.words("hello, world!"), vec!["hello", "world"]);
    }

    #[test]
    fn test_punctuation_splits_joined_words() {
        let p = Preprocessor::new();
        // The comma becomes a space, producing two words
        assert_eq!(p.words("one,two"), vec!["one", "two"]);
    }

    #[test]
    fn test_keeps_apostrophes() {
        let p = Preprocessor::new();
        assert_eq!(p.words("don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn test_collapses_whitespace() {
        let p = Preprocessor::new();
        assert_eq!(p.words("  spaced \t out \n text  "), vec!["spaced", "out", "text"]);
    }

    #[test]
    fn test_cyrillic_lowercasing() {
        let p = Preprocessor::new();
        assert_eq!(p.words("Привет, МИР"), vec!["привет", "мир"]);
    }

    #[test]
    fn test_empty_and_punctuation_only_input() {
        let p = Preprocessor::new();
        assert!(p.words("").is_empty());
        assert!(p.words("?!...  ,,").is_empty());
    }

    #[test]
    fn test_word_count() {
        let p = Preprocessor::new();
        assert_eq!(p.word_count("three little words."), 3);
        assert_eq!(p.word_count(""), 0);
    }
}

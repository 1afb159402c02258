// ============================================================
// Layer 4 — Vocabulary
// ============================================================
// Builds a word → index map from the training texts and encodes
// any text against it.
//
// Construction:
//   - Count every normalised word across the training corpus
//   - Rank by frequency, descending; ties broken by first
//     occurrence so the ranking never depends on hash order
//   - Keep the top `num_words` words
//   - Assign indices 1..=num_words in rank order
//
// Index 0 is reserved for padding and is never assigned to a
// word. The map is immutable once built: the test partition is
// encoded with the training vocabulary, so a word that only
// appears in test never receives an index.
//
// Encoding:
//   - Words found in the map become their index
//   - Out-of-vocabulary words are silently skipped, never an error

use std::collections::HashMap;

use crate::data::preprocessor::Preprocessor;

/// A frequency-ranked word → index mapping, built once from the
/// training partition and then used as a pure value.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    index: HashMap<String, u32>,
    preprocessor: Preprocessor,
}

impl Vocabulary {
    /// Build a vocabulary from the given texts, keeping at most
    /// `num_words` of the most frequent words.
    pub fn build(texts: &[String], num_words: usize) -> Self {
        let preprocessor = Preprocessor::new();

        // Count word frequencies, remembering each word's first-seen
        // rank so that equal counts sort deterministically.
        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
        for text in texts {
            for word in preprocessor.words(text) {
                let first_seen = counts.len();
                let entry = counts.entry(word).or_insert((0, first_seen));
                entry.0 += 1;
            }
        }

        // Sort by frequency descending, then first occurrence ascending
        let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
        ranked.truncate(num_words);

        // Most frequent word gets index 1; 0 stays reserved for padding
        let index = ranked
            .into_iter()
            .enumerate()
            .map(|(rank, (word, _))| (word, (rank + 1) as u32))
            .collect();

        let vocab = Self { index, preprocessor };
        tracing::info!("Vocabulary built with {} words (cap {})", vocab.len(), num_words);
        vocab
    }

    /// Encode one text as a sequence of vocabulary indices.
    /// Out-of-vocabulary words are dropped, so the sequence length
    /// equals the number of retained word occurrences.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        self.preprocessor
            .words(text)
            .iter()
            .filter_map(|word| self.index.get(word).copied())
            .collect()
    }

    /// Encode every text, preserving order.
    pub fn encode_all(&self, texts: &[String]) -> Vec<Vec<u32>> {
        texts.iter().map(|t| self.encode(t)).collect()
    }

    /// The index assigned to a word, if it made the cut.
    pub fn index_of(&self, word: &str) -> Option<u32> {
        self.index.get(word).copied()
    }

    /// Number of words in the vocabulary
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Fraction of word occurrences in `texts` that are in-vocabulary.
    /// A corpus with no words at all counts as fully covered.
    pub fn coverage(&self, texts: &[String]) -> f64 {
        let mut total = 0usize;
        let mut known = 0usize;

        for text in texts {
            for word in self.preprocessor.words(text) {
                total += 1;
                if self.index.contains_key(&word) {
                    known += 1;
                }
            }
        }

        if total == 0 {
            1.0
        } else {
            known as f64 / total as f64
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_most_frequent_word_gets_index_one() {
        let corpus = texts(&["b b b a a c"]);
        let vocab = Vocabulary::build(&corpus, 100);

        assert_eq!(vocab.index_of("b"), Some(1));
        assert_eq!(vocab.index_of("a"), Some(2));
        assert_eq!(vocab.index_of("c"), Some(3));
    }

    #[test]
    fn test_ties_break_by_first_occurrence() {
        // "x" and "y" both appear once; "x" is seen first
        let corpus = texts(&["x y"]);
        let vocab = Vocabulary::build(&corpus, 100);

        assert_eq!(vocab.index_of("x"), Some(1));
        assert_eq!(vocab.index_of("y"), Some(2));
    }

    #[test]
    fn test_cap_drops_rare_words() {
        let corpus = texts(&["a a a b b c"]);
        let vocab = Vocabulary::build(&corpus, 2);

        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.index_of("a"), Some(1));
        assert_eq!(vocab.index_of("b"), Some(2));
        assert_eq!(vocab.index_of("c"), None);
    }

    #[test]
    fn test_encode_skips_out_of_vocabulary_words() {
        let corpus = texts(&["a a b"]);
        let vocab = Vocabulary::build(&corpus, 100);

        // "z" was never seen during building → silently dropped
        assert_eq!(vocab.encode("a z b"), vec![1, 2]);
    }

    #[test]
    fn test_encode_normalises_like_the_builder() {
        let corpus = texts(&["hello world hello"]);
        let vocab = Vocabulary::build(&corpus, 100);

        // Case and punctuation differences must not break lookup
        assert_eq!(vocab.encode("Hello, WORLD!"), vec![1, 2]);
    }

    #[test]
    fn test_zero_is_never_assigned() {
        let corpus = texts(&["a b c d e f g"]);
        let vocab = Vocabulary::build(&corpus, 100);

        for word in ["a", "b", "c", "d", "e", "f", "g"] {
            assert!(vocab.index_of(word).unwrap() >= 1);
        }
    }

    #[test]
    fn test_empty_corpus_builds_empty_vocabulary() {
        let vocab = Vocabulary::build(&[], 100);
        assert!(vocab.is_empty());
        assert!(vocab.encode("anything at all").is_empty());
    }

    #[test]
    fn test_coverage() {
        let corpus = texts(&["a a b"]);
        let vocab = Vocabulary::build(&corpus, 100);

        // 2 of 4 occurrences are in-vocabulary
        let cov = vocab.coverage(&texts(&["a z z b"]));
        assert!((cov - 0.5).abs() < 1e-9);

        // Empty corpus counts as fully covered
        assert!((vocab.coverage(&[]) - 1.0).abs() < 1e-9);
    }
}

// ============================================================
// Layer 3 — Comment Domain Type
// ============================================================
// Represents a single labelled comment from the dataset.
// This is a plain data struct with no behaviour —
// just the free text and its binary toxicity label.

use serde::{Deserialize, Serialize};

/// One row of the source dataset.
/// By the time a LabeledComment exists, the CSV cell values have
/// already been extracted and the label normalised to 0/1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledComment {
    /// The raw comment text, untouched by any cleaning
    pub text: String,

    /// Binary toxicity label: 1 = toxic, 0 = not toxic
    pub toxic: u8,
}

impl LabeledComment {
    /// Create a new LabeledComment.
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(text: impl Into<String>, toxic: u8) -> Self {
        Self {
            text:  text.into(),
            toxic,
        }
    }

    /// Whether this comment carries the positive (toxic) label
    pub fn is_toxic(&self) -> bool {
        self.toxic != 0
    }
}

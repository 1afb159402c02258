// ============================================================
// toxic-comment-data
// ============================================================
// Prepares a labelled toxic-comment CSV for model consumption:
//
//   CSV file
//       │
//       ▼
//   CsvLoader         → reads rows, keeps two named columns
//       │
//       ▼
//   split_train_test  → seeded shuffle into train/test
//       │
//       ▼
//   Vocabulary        → word → index map from training text only
//       │
//       ▼
//   pad_sequences     → fixed-width [records × maxlen] arrays
//
// The layers mirror the module tree below: cli (presentation),
// application (workflow), domain (core types), data (pipeline
// steps), infra (cross-cutting reporting).

/// CLI parsing and command dispatch
pub mod cli;

/// Use cases that orchestrate the pipeline layers
pub mod application;

/// Core domain types and abstractions
pub mod domain;

/// The data pipeline: load, split, tokenize, pad
pub mod data;

/// Cross-cutting concerns (corpus reporting)
pub mod infra;

pub use application::prepare_use_case::{PrepareConfig, PrepareUseCase};
pub use data::dataset::{PreparedData, SplitArrays};
pub use data::vocab::Vocabulary;

use anyhow::Result;

/// Run the whole pipeline with default settings, overriding only the
/// input path, the vocabulary cap and the target sequence length.
///
/// Returns two pairs of (padded input array, label array) — one for
/// training, one for test. See [`PrepareConfig`] for the remaining
/// knobs (delimiter, column names, test fraction, shuffle seed).
pub fn load_data(path: impl Into<String>, num_words: usize, maxlen: usize) -> Result<PreparedData> {
    let config = PrepareConfig {
        path: path.into(),
        num_words,
        maxlen,
        ..PrepareConfig::default()
    };
    let (data, _report) = PrepareUseCase::new(config).execute()?;
    Ok(data)
}

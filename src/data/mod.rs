// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from the raw CSV file
// all the way to fixed-width integer arrays.
//
// The pipeline flows in this order:
//
//   CSV file
//       │
//       ▼
//   CsvLoader         → reads rows, extracts text + label columns
//       │
//       ▼
//   split_train_test  → seeded shuffle into train/test partitions
//       │
//       ▼
//   Preprocessor      → lowercases and strips punctuation
//       │
//       ▼
//   Vocabulary        → word → index map from training text only
//       │
//       ▼
//   pad_sequences     → pads/truncates every row to maxlen
//       │
//       ▼
//   PreparedData      → final (inputs, labels) arrays per partition
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.

/// Loads labelled comments from a delimited text file
pub mod loader;

/// Normalises raw comment text into lowercase words
pub mod preprocessor;

/// Shuffles and splits data into train/test partitions
pub mod splitter;

/// Builds the word → index vocabulary and encodes text
pub mod vocab;

/// Pads/truncates integer sequences to a fixed width
pub mod padder;

/// Final padded arrays for one partition and for the whole run
pub mod dataset;

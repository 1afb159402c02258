// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the full preparation pipeline in order:
//
//   Step 1: Load the CSV            (Layer 4 - data)
//   Step 2: Split train/test       (Layer 4 - data)
//   Step 3: Build vocabulary       (Layer 4 - data, training text only)
//   Step 4: Encode both partitions (Layer 4 - data)
//   Step 5: Pad to fixed width     (Layer 4 - data)
//   Step 6: Report corpus stats    (Layer 6 - infra)
//
// The vocabulary is built from the training partition and then
// used, unchanged, to encode the test partition. That ordering
// is the one invariant this use case exists to enforce.

use anyhow::Result;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::{PreparedData, SplitArrays},
    loader::CsvLoader,
    padder::pad_sequences,
    splitter::split_train_test,
    vocab::Vocabulary,
};
use crate::domain::traits::RecordSource;
use crate::infra::report::CorpusReport;

// ─── Preparation Configuration ───────────────────────────────────────────────
// All knobs for one pipeline run. Serialisable so a run can be
// described in full by one JSON value when embedding the crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    /// Path to the input CSV file
    pub path: String,
    /// Field delimiter used in the file
    pub delimiter: char,
    /// Header name of the free-text column
    pub text_column: String,
    /// Header name of the binary label column
    pub label_column: String,
    /// Maximum vocabulary size (most frequent words kept)
    pub num_words: usize,
    /// Fixed width of every output sequence
    pub maxlen: usize,
    /// Proportion of rows held out for the test partition
    pub test_fraction: f64,
    /// Shuffle seed; equal seeds give bit-identical outputs
    pub seed: u64,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            path:          "data/toxic_comments.csv".to_string(),
            delimiter:     ',',
            text_column:   "comment".to_string(),
            label_column:  "toxic".to_string(),
            num_words:     20_000,
            maxlen:        200,
            test_fraction: 0.5,
            seed:          42,
        }
    }
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
// Owns the config and runs the full pipeline.
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    /// Create a new PrepareUseCase with the given configuration
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Execute the pipeline end to end, returning the padded arrays
    /// and the corpus report describing what was produced.
    pub fn execute(&self) -> Result<(PreparedData, CorpusReport)> {
        let cfg = &self.config;

        // ── Step 1: Load the CSV ──────────────────────────────────────────────
        tracing::info!("Loading labelled comments from '{}'", cfg.path);
        let loader = CsvLoader::new(&cfg.path, cfg.delimiter, &cfg.text_column, &cfg.label_column);
        let records = loader.load_all()?;

        if records.is_empty() {
            tracing::warn!("'{}' has no data rows — all outputs will be empty", cfg.path);
        }

        // ── Step 2: Seeded train/test split ───────────────────────────────────
        let (train_records, test_records) =
            split_train_test(records, cfg.test_fraction, cfg.seed);
        tracing::info!(
            "Split: {} train, {} test (seed {})",
            train_records.len(),
            test_records.len(),
            cfg.seed
        );

        let (train_texts, train_labels): (Vec<String>, Vec<u8>) =
            train_records.into_iter().map(|r| (r.text, r.toxic)).unzip();
        let (test_texts, test_labels): (Vec<String>, Vec<u8>) =
            test_records.into_iter().map(|r| (r.text, r.toxic)).unzip();

        // ── Step 3: Build vocabulary from training text ONLY ──────────────────
        // The test partition must not influence which words get indices.
        let vocabulary = Vocabulary::build(&train_texts, cfg.num_words);

        // ── Step 4: Encode both partitions with the one vocabulary ────────────
        let train_sequences = vocabulary.encode_all(&train_texts);
        let test_sequences  = vocabulary.encode_all(&test_texts);

        // ── Step 5: Corpus report (needs pre-padding lengths) ─────────────────
        let report = CorpusReport::from_run(
            &vocabulary,
            &test_texts,
            &train_labels,
            &test_labels,
            &train_sequences,
            &test_sequences,
            cfg.maxlen,
        );

        // ── Step 6: Pad to [records × maxlen] ─────────────────────────────────
        let train = SplitArrays::new(
            pad_sequences(&train_sequences, cfg.maxlen),
            Array1::from_vec(train_labels),
        );
        let test = SplitArrays::new(
            pad_sequences(&test_sequences, cfg.maxlen),
            Array1::from_vec(test_labels),
        );

        report.log();
        Ok((PreparedData { train, test }, report))
    }
}

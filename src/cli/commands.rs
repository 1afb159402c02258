// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `prepare` and `inspect`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, char)

use crate::application::prepare_use_case::PrepareConfig;
use clap::{Args, Subcommand};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline: load, split, tokenize, pad
    Prepare(PrepareArgs),

    /// Print statistics about the raw CSV without encoding it
    Inspect(InspectArgs),
}

/// All arguments for the `prepare` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Path to the labelled comment CSV
    #[arg(long, default_value = "data/toxic_comments.csv")]
    pub csv_path: String,

    /// Field delimiter used in the file
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Header name of the free-text column
    #[arg(long, default_value = "comment")]
    pub text_column: String,

    /// Header name of the binary label column
    #[arg(long, default_value = "toxic")]
    pub label_column: String,

    /// Maximum vocabulary size — only the most frequent words
    /// receive an index, everything else is dropped at encoding
    #[arg(long, default_value_t = 20_000)]
    pub num_words: usize,

    /// Fixed width of every output sequence: shorter comments are
    /// zero-padded, longer ones truncated
    #[arg(long, default_value_t = 200)]
    pub maxlen: usize,

    /// Proportion of rows held out for the test partition
    #[arg(long, default_value_t = 0.5)]
    pub test_fraction: f64,

    /// Shuffle seed — the same seed always yields the same split
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Convert CLI PrepareArgs into the application-layer PrepareConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            path:          a.csv_path,
            delimiter:     a.delimiter,
            text_column:   a.text_column,
            label_column:  a.label_column,
            num_words:     a.num_words,
            maxlen:        a.maxlen,
            test_fraction: a.test_fraction,
            seed:          a.seed,
        }
    }
}

/// All arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the labelled comment CSV
    #[arg(long, default_value = "data/toxic_comments.csv")]
    pub csv_path: String,

    /// Field delimiter used in the file
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Header name of the free-text column
    #[arg(long, default_value = "comment")]
    pub text_column: String,

    /// Header name of the binary label column
    #[arg(long, default_value = "toxic")]
    pub label_column: String,
}

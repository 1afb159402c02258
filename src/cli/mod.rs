// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `prepare` — runs the full pipeline and prints the report
//   2. `inspect` — summarises the raw CSV without encoding it

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, PrepareArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "toxic-comment-data",
    version = "0.1.0",
    about = "Load, split, tokenize and pad a labelled toxic-comment CSV for model consumption."
)]
pub struct Cli {
    /// The subcommand to run (prepare or inspect)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => Self::run_prepare(args),
            Commands::Inspect(args) => Self::run_inspect(args),
        }
    }

    /// Handles the `prepare` subcommand.
    /// Converts CLI args into a PrepareConfig and hands off to Layer 2.
    fn run_prepare(args: PrepareArgs) -> Result<()> {
        use crate::application::prepare_use_case::PrepareUseCase;

        tracing::info!("Preparing dataset from: {}", args.csv_path);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = PrepareUseCase::new(args.into());
        let (data, report) = use_case.execute()?;

        println!("{report}");
        println!(
            "\nPrepared {} train and {} test samples, {} columns each.",
            data.train.sample_count(),
            data.test.sample_count(),
            data.train.sequence_length(),
        );
        Ok(())
    }

    /// Handles the `inspect` subcommand.
    /// Loads the CSV and prints the raw-dataset summary.
    fn run_inspect(args: InspectArgs) -> Result<()> {
        use crate::application::inspect_use_case::InspectUseCase;

        let use_case = InspectUseCase::new(
            args.csv_path,
            args.delimiter,
            args.text_column,
            args.label_column,
        );
        let summary = use_case.execute()?;
        println!("{summary}");
        Ok(())
    }
}

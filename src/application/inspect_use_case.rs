// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Loads the raw CSV and summarises it without splitting or
// encoding anything. Useful for a first look at a dataset
// before deciding on num_words / maxlen.

use anyhow::Result;
use std::fmt;

use crate::data::loader::CsvLoader;
use crate::data::preprocessor::Preprocessor;
use crate::domain::traits::RecordSource;

/// Raw-dataset statistics, before any train/test split.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    /// Total number of data rows
    pub rows: usize,
    /// Rows carrying the positive (toxic) label
    pub toxic_rows: usize,
    /// Mean words per comment after normalisation
    pub mean_words: f64,
    /// Longest comment, in words
    pub max_words: usize,
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let toxic_share = if self.rows == 0 {
            0.0
        } else {
            100.0 * self.toxic_rows as f64 / self.rows as f64
        };
        writeln!(f, "Dataset summary")?;
        writeln!(f, "  rows:            {}", self.rows)?;
        writeln!(f, "  toxic rows:      {} ({:.1}%)", self.toxic_rows, toxic_share)?;
        writeln!(f, "  words/comment:   {:.1} mean", self.mean_words)?;
        write!(f,   "  longest comment: {} words", self.max_words)
    }
}

/// Computes a DatasetSummary from a CSV file.
pub struct InspectUseCase {
    loader: CsvLoader,
}

impl InspectUseCase {
    pub fn new(
        path:         impl Into<String>,
        delimiter:    char,
        text_column:  impl Into<String>,
        label_column: impl Into<String>,
    ) -> Self {
        Self {
            loader: CsvLoader::new(path, delimiter, text_column, label_column),
        }
    }

    /// Load the file and compute the summary statistics.
    pub fn execute(&self) -> Result<DatasetSummary> {
        let records = self.loader.load_all()?;
        let preprocessor = Preprocessor::new();

        let rows = records.len();
        let toxic_rows = records.iter().filter(|r| r.is_toxic()).count();

        let word_counts: Vec<usize> = records
            .iter()
            .map(|r| preprocessor.word_count(&r.text))
            .collect();

        let total_words: usize = word_counts.iter().sum();
        let mean_words = if rows == 0 {
            0.0
        } else {
            total_words as f64 / rows as f64
        };
        let max_words = word_counts.into_iter().max().unwrap_or(0);

        tracing::info!(
            "Inspected {} rows: {} toxic, {:.1} words/comment mean",
            rows,
            toxic_rows,
            mean_words
        );

        Ok(DatasetSummary {
            rows,
            toxic_rows,
            mean_words,
            max_words,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_summary_statistics() {
        let path = std::env::temp_dir().join("toxic_comment_inspect_summary.csv");
        fs::write(
            &path,
            "comment,toxic\none two three,1\none,0\none two three four five,0\n",
        )
        .unwrap();

        let summary = InspectUseCase::new(path.to_str().unwrap(), ',', "comment", "toxic")
            .execute()
            .unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(summary.rows, 3);
        assert_eq!(summary.toxic_rows, 1);
        assert_eq!(summary.max_words, 5);
        // (3 + 1 + 5) / 3
        assert!((summary.mean_words - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_dataset_summary() {
        let path = std::env::temp_dir().join("toxic_comment_inspect_empty.csv");
        fs::write(&path, "comment,toxic\n").unwrap();

        let summary = InspectUseCase::new(path.to_str().unwrap(), ',', "comment", "toxic")
            .execute()
            .unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(summary.rows, 0);
        assert_eq!(summary.toxic_rows, 0);
        assert_eq!(summary.max_words, 0);
        assert_eq!(summary.mean_words, 0.0);
    }
}

// ============================================================
// Layer 4 — CSV Loader
// ============================================================
// Loads labelled comments from a delimited text file using the
// csv crate.
//
// The loader keeps exactly two columns, located by name in the
// header row — everything else in the file is ignored. Column
// names and the delimiter are configuration, not contracts.
//
// Labels are parsed as numbers rather than as integers because
// exported datasets frequently store the binary label as a
// float ("0.0"/"1.0"). Any nonzero value is the positive class.

use anyhow::{anyhow, bail, Context, Result};
use csv::ReaderBuilder;

use crate::domain::comment::LabeledComment;
use crate::domain::traits::RecordSource;

/// Loads labelled comments from a single CSV file.
/// Implements the RecordSource trait from Layer 3.
pub struct CsvLoader {
    /// Path to the delimited text file
    path: String,
    /// Field delimiter, a single ASCII character
    delimiter: char,
    /// Header name of the free-text column
    text_column: String,
    /// Header name of the binary label column
    label_column: String,
}

impl CsvLoader {
    /// Create a new CsvLoader for the given file and column names.
    pub fn new(
        path:         impl Into<String>,
        delimiter:    char,
        text_column:  impl Into<String>,
        label_column: impl Into<String>,
    ) -> Self {
        Self {
            path:         path.into(),
            delimiter,
            text_column:  text_column.into(),
            label_column: label_column.into(),
        }
    }
}

impl RecordSource for CsvLoader {
    fn load_all(&self) -> Result<Vec<LabeledComment>> {
        if !self.delimiter.is_ascii() {
            bail!("Delimiter '{}' is not a single-byte character", self.delimiter);
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter as u8)
            .from_path(&self.path)
            .with_context(|| format!("Cannot open CSV file '{}'", self.path))?;

        // Resolve the two configured column names against the header row.
        // A missing column is a schema error, not an I/O error.
        let headers = reader
            .headers()
            .with_context(|| format!("Cannot read CSV header of '{}'", self.path))?
            .clone();

        let text_idx = column_index(&headers, &self.text_column, &self.path)?;
        let label_idx = column_index(&headers, &self.label_column, &self.path)?;

        let mut records = Vec::new();

        for (row, result) in reader.records().enumerate() {
            // Data rows are 1-based in messages; the header is row 0
            let row_number = row + 1;
            let record = result
                .with_context(|| format!("Cannot parse row {} of '{}'", row_number, self.path))?;

            let text = record
                .get(text_idx)
                .ok_or_else(|| {
                    anyhow!("Row {} of '{}' has no '{}' field", row_number, self.path, self.text_column)
                })?
                .to_string();

            let label_cell = record.get(label_idx).ok_or_else(|| {
                anyhow!("Row {} of '{}' has no '{}' field", row_number, self.path, self.label_column)
            })?;

            // "0"/"1" and "0.0"/"1.0" are both in the wild for this column
            let label: f64 = label_cell.trim().parse().with_context(|| {
                format!(
                    "Row {} of '{}': label '{}' is not numeric",
                    row_number, self.path, label_cell
                )
            })?;

            records.push(LabeledComment::new(text, (label != 0.0) as u8));
        }

        tracing::info!("Loaded {} labelled comments from '{}'", records.len(), self.path);
        Ok(records)
    }
}

/// Find the position of a named column in the header row.
fn column_index(headers: &csv::StringRecord, name: &str, path: &str) -> Result<usize> {
    headers.iter().position(|h| h == name).ok_or_else(|| {
        anyhow!(
            "Column '{}' not found in '{}' (header has: {})",
            name,
            path,
            headers.iter().collect::<Vec<_>>().join(", ")
        )
    })
}

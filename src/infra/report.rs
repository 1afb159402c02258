// ============================================================
// Layer 6 — Corpus Report
// ============================================================
// Summarises what one pipeline run produced:
//
//   - rows and label balance per partition
//   - vocabulary size actually reached (may be below the cap)
//   - out-of-vocabulary rate on the test partition — the share
//     of test word occurrences that were dropped at encoding
//   - share of sequences that hit the maxlen truncation limit
//
// The report is computed from the pre-padding sequences (padding
// erases the lengths it would need) and is never persisted: it
// goes out through tracing and Display only.

use std::fmt;

use crate::data::vocab::Vocabulary;

/// Statistics for one completed pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusReport {
    /// Rows in the training partition
    pub train_rows: usize,
    /// Rows in the test partition
    pub test_rows: usize,
    /// Toxic-labelled rows in the training partition
    pub train_toxic: usize,
    /// Toxic-labelled rows in the test partition
    pub test_toxic: usize,
    /// Words that received a vocabulary index
    pub vocab_size: usize,
    /// Share of test word occurrences dropped as out-of-vocabulary
    pub test_oov_rate: f64,
    /// Share of sequences (both partitions) longer than maxlen
    pub truncated_share: f64,
    /// The fixed width every sequence was padded/truncated to
    pub maxlen: usize,
}

impl CorpusReport {
    /// Compute the report from one run's intermediate products.
    pub fn from_run(
        vocabulary:      &Vocabulary,
        test_texts:      &[String],
        train_labels:    &[u8],
        test_labels:     &[u8],
        train_sequences: &[Vec<u32>],
        test_sequences:  &[Vec<u32>],
        maxlen:          usize,
    ) -> Self {
        let total_sequences = train_sequences.len() + test_sequences.len();
        let truncated = train_sequences
            .iter()
            .chain(test_sequences)
            .filter(|s| s.len() > maxlen)
            .count();

        let truncated_share = if total_sequences == 0 {
            0.0
        } else {
            truncated as f64 / total_sequences as f64
        };

        Self {
            train_rows:      train_labels.len(),
            test_rows:       test_labels.len(),
            train_toxic:     count_positive(train_labels),
            test_toxic:      count_positive(test_labels),
            vocab_size:      vocabulary.len(),
            test_oov_rate:   1.0 - vocabulary.coverage(test_texts),
            truncated_share,
            maxlen,
        }
    }

    /// Emit the report through tracing at info level.
    pub fn log(&self) {
        tracing::info!(
            "Corpus: {} train ({} toxic), {} test ({} toxic), vocab {}, \
             test OOV {:.1}%, truncated at {} {:.1}%",
            self.train_rows,
            self.train_toxic,
            self.test_rows,
            self.test_toxic,
            self.vocab_size,
            100.0 * self.test_oov_rate,
            self.maxlen,
            100.0 * self.truncated_share,
        );
    }
}

fn count_positive(labels: &[u8]) -> usize {
    labels.iter().filter(|&&l| l != 0).count()
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    }
}

impl fmt::Display for CorpusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Corpus report")?;
        writeln!(
            f,
            "  train rows:       {} ({:.1}% toxic)",
            self.train_rows,
            percent(self.train_toxic, self.train_rows)
        )?;
        writeln!(
            f,
            "  test rows:        {} ({:.1}% toxic)",
            self.test_rows,
            percent(self.test_toxic, self.test_rows)
        )?;
        writeln!(f, "  vocabulary size:  {}", self.vocab_size)?;
        writeln!(f, "  test OOV rate:    {:.1}%", 100.0 * self.test_oov_rate)?;
        write!(
            f,
            "  truncated at {}: {:.1}%",
            self.maxlen,
            100.0 * self.truncated_share
        )
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
    fn test_report_numbers() {
        let train_texts = texts(&["a a b", "a b"]);
        let vocabulary = Vocabulary::build(&train_texts, 100);

        let test_texts = texts(&["a z"]);
        let train_sequences = vocabulary.encode_all(&train_texts);
        let test_sequences = vocabulary.encode_all(&test_texts);

        let report = CorpusReport::from_run(
            &vocabulary,
            &test_texts,
            &[0, 1],
            &[1],
            &train_sequences,
            &test_sequences,
            2,
        );

        assert_eq!(report.train_rows, 2);
        assert_eq!(report.test_rows, 1);
        assert_eq!(report.train_toxic, 1);
        assert_eq!(report.test_toxic, 1);
        assert_eq!(report.vocab_size, 2);
        // "z" is 1 of 2 test occurrences
        assert!((report.test_oov_rate - 0.5).abs() < 1e-9);
        // Only "a a b" exceeds maxlen 2 → 1 of 3 sequences
        assert!((report.truncated_share - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_run_report() {
        let vocabulary = Vocabulary::build(&[], 100);
        let report = CorpusReport::from_run(&vocabulary, &[], &[], &[], &[], &[], 200);

        assert_eq!(report.train_rows, 0);
        assert_eq!(report.vocab_size, 0);
        assert_eq!(report.test_oov_rate, 0.0);
        assert_eq!(report.truncated_share, 0.0);
    }

    #[test]
    fn test_display_is_multi_line() {
        let vocabulary = Vocabulary::build(&texts(&["a"]), 100);
        let report = CorpusReport::from_run(&vocabulary, &[], &[0], &[], &[vec![1]], &[], 200);
        let rendered = format!("{report}");

        assert!(rendered.starts_with("Corpus report"));
        assert!(rendered.contains("vocabulary size:  1"));
    }
}

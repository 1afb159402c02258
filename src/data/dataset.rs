// ============================================================
// Layer 4 — Prepared Dataset
// ============================================================
// The pipeline's final product: one fixed-width input array and
// one aligned label array per partition.

use ndarray::{Array1, Array2, ArrayView1};

/// One fully encoded and padded partition.
/// Row i of `inputs` and element i of `labels` describe the same
/// source comment.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitArrays {
    inputs: Array2<u32>,
    labels: Array1<u8>,
}

impl SplitArrays {
    /// Bundle inputs and labels for one partition.
    ///
    /// # Panics
    /// Panics if the two are not aligned — a row count mismatch here
    /// means the pipeline itself is broken, not the input data.
    pub fn new(inputs: Array2<u32>, labels: Array1<u8>) -> Self {
        assert_eq!(
            inputs.nrows(),
            labels.len(),
            "inputs and labels must be aligned ({} rows vs {} labels)",
            inputs.nrows(),
            labels.len()
        );
        Self { inputs, labels }
    }

    /// Number of samples in this partition
    pub fn sample_count(&self) -> usize {
        self.labels.len()
    }

    /// Width of every input row (the configured maxlen)
    pub fn sequence_length(&self) -> usize {
        self.inputs.ncols()
    }

    /// The [records × maxlen] input array
    pub fn inputs(&self) -> &Array2<u32> {
        &self.inputs
    }

    /// The [records] label array
    pub fn labels(&self) -> &Array1<u8> {
        &self.labels
    }

    /// One sample's padded sequence and label, if the index is in range
    pub fn sample(&self, index: usize) -> Option<(ArrayView1<'_, u32>, u8)> {
        if index < self.sample_count() {
            Some((self.inputs.row(index), self.labels[index]))
        } else {
            None
        }
    }
}

/// Both partitions of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedData {
    pub train: SplitArrays,
    pub test:  SplitArrays,
}

impl PreparedData {
    /// Total number of samples across both partitions
    pub fn total_samples(&self) -> usize {
        self.train.sample_count() + self.test.sample_count()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_sample_access() {
        let split = SplitArrays::new(array![[1, 2, 0], [3, 0, 0]], array![1, 0]);

        assert_eq!(split.sample_count(), 2);
        assert_eq!(split.sequence_length(), 3);

        let (row, label) = split.sample(1).unwrap();
        assert_eq!(row, array![3, 0, 0]);
        assert_eq!(label, 0);

        assert!(split.sample(2).is_none());
    }

    #[test]
    #[should_panic]
    fn test_misaligned_arrays_panic() {
        // 2 input rows but 3 labels
        let _ = SplitArrays::new(array![[1, 2], [3, 4]], array![1, 0, 1]);
    }

    #[test]
    fn test_total_samples() {
        let train = SplitArrays::new(array![[1, 0]], array![0]);
        let test  = SplitArrays::new(array![[2, 0], [3, 0]], array![1, 0]);
        let data  = PreparedData { train, test };
        assert_eq!(data.total_samples(), 3);
    }
}

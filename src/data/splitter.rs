// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Randomly shuffles records and splits them into two sets:
//   - Training set: the vocabulary is built from this one
//   - Test set:     held out, encoded with the training vocabulary
//
// The shuffle is driven by an explicitly seeded StdRng rather
// than ambient randomness: the same seed over the same input
// always yields bit-identical partitions, which is what makes
// experiments reproducible.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom,
// the standard unbiased shuffle algorithm.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffle `records` with the given seed and split into (train, test).
///
/// # Arguments
/// * `records`       - All available records (consumed by this function)
/// * `test_fraction` - Proportion held out for test, e.g. 0.5 = 50%
/// * `seed`          - Shuffle seed; equal seeds give equal partitions
///
/// # Returns
/// A tuple (train_records, test_records). Every input record lands in
/// exactly one of the two, and `test.len() == round(n * test_fraction)`
/// clamped to the dataset size.
pub fn split_train_test<T>(mut records: Vec<T>, test_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(seed);

    // Fisher-Yates shuffle — every permutation is equally likely
    records.shuffle(&mut rng);

    // e.g. 100 records * 0.5 = 50 → last 50 are test
    let total = records.len();
    let test_count = ((total as f64) * test_fraction).round() as usize;

    // Clamp to valid range to avoid panics on tiny datasets
    let test_count = test_count.min(total);

    // split_off(n) removes elements [n..] from the Vec and returns them
    // After this: records = [0..total-test_count], test = the rest
    let test = records.split_off(total - test_count);

    tracing::debug!(
        "Dataset split: {} train, {} test ({}% / {}%)",
        records.len(),
        test.len(),
        (records.len() * 100) / total.max(1),
        (test.len()    * 100) / total.max(1),
    );

    (records, test)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, test)     = split_train_test(items, 0.2, 42);
        assert_eq!(train.len(), 80);
        assert_eq!(test.len(),  20);
    }

    #[test]
    fn test_all_items_preserved() {
        // No items should be lost or duplicated by the split
        let items: Vec<usize> = (0..50).collect();
        let (train, test)     = split_train_test(items, 0.3, 7);
        assert_eq!(train.len() + test.len(), 50);

        let mut all: Vec<usize> = train.into_iter().chain(test).collect();
        all.sort_unstable();
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_dataset() {
        let items: Vec<usize> = Vec::new();
        let (train, test)     = split_train_test(items, 0.5, 42);
        assert!(train.is_empty());
        assert!(test.is_empty());
    }

    #[test]
    fn test_zero_fraction_keeps_everything_in_train() {
        let items: Vec<usize> = (0..10).collect();
        let (train, test)     = split_train_test(items, 0.0, 42);
        assert_eq!(train.len(), 10);
        assert!(test.is_empty());
    }

    #[test]
    fn test_full_fraction_keeps_everything_in_test() {
        let items: Vec<usize> = (0..10).collect();
        let (train, test)     = split_train_test(items, 1.0, 42);
        assert!(train.is_empty());
        assert_eq!(test.len(), 10);
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let items: Vec<usize> = (0..200).collect();
        let first  = split_train_test(items.clone(), 0.5, 42);
        let second = split_train_test(items, 0.5, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let items: Vec<usize> = (0..200).collect();
        let (train_a, _) = split_train_test(items.clone(), 0.5, 1);
        let (train_b, _) = split_train_test(items, 0.5, 2);
        // 200 items make an identical shuffle astronomically unlikely
        assert_ne!(train_a, train_b);
    }
}

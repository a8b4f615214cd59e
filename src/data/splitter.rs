// ============================================================
// Layer 4 — Train/Validation/Test Splitter
// ============================================================
// Randomly shuffles the items of one class and slices them
// into three contiguous groups:
//
//   shuffled: [ t t t t t t t | v | x x ]
//               └── train ──┘  val  test
//
// Group sizes come from SplitRatios::counts (floor for train
// and val, remainder for test).
//
// The random source is passed in by the caller. The same seed
// and the same input order always give the same assignment.
// Nothing here touches a process-wide generator.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use rand::{seq::SliceRandom, Rng};
use std::path::PathBuf;

use crate::domain::{
    partition::ClassPartition,
    ratios::{SplitCounts, SplitRatios},
};

/// Shuffle `items` with `rng` and split them into (train, val, test).
///
/// # Arguments
/// * `items`  - All eligible items of one class (consumed)
/// * `ratios` - Fractions for each split
/// * `rng`    - Caller-owned random source
pub fn shuffle_and_split<T, R>(
    mut items: Vec<T>,
    ratios:    &SplitRatios,
    rng:       &mut R,
) -> (Vec<T>, Vec<T>, Vec<T>)
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);

    let counts = ratios.counts(items.len());
    split_by_counts(items, &counts)
}

/// Slice `items` into three contiguous groups sized by `counts`.
/// `counts.total` must equal `items.len()`.
pub fn split_by_counts<T>(mut items: Vec<T>, counts: &SplitCounts) -> (Vec<T>, Vec<T>, Vec<T>) {
    debug_assert_eq!(items.len(), counts.total);

    // split_off(n) keeps [0..n) in place and returns [n..)
    let mut rest = items.split_off(counts.train.min(items.len()));
    let test     = rest.split_off(counts.val.min(rest.len()));

    (items, rest, test)
}

/// Shuffle and partition the listed items of one class.
pub fn partition_class<R>(
    class:  &str,
    items:  Vec<PathBuf>,
    ratios: &SplitRatios,
    rng:    &mut R,
) -> ClassPartition
where
    R: Rng + ?Sized,
{
    let (train, val, test) = shuffle_and_split(items, ratios, rng);

    let partition = ClassPartition {
        class: class.to_string(),
        train,
        val,
        test,
    };

    tracing::debug!(
        "Partitioned '{}': {} train, {} val, {} test",
        class,
        partition.train.len(),
        partition.val.len(),
        partition.test.len(),
    );

    partition
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn numbered(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("img_{i:03}.png"))).collect()
    }

    #[test]
    fn test_correct_split_sizes() {
        let mut rng = StdRng::seed_from_u64(42);
        let (train, val, test) =
            shuffle_and_split((0..100).collect::<Vec<usize>>(), &SplitRatios::new(0.7, 0.1, 0.2), &mut rng);
        assert_eq!(train.len(), 70);
        assert_eq!(val.len(), 10);
        assert_eq!(test.len(), 20);
    }

    #[test]
    fn test_all_items_preserved_and_disjoint() {
        let mut rng   = StdRng::seed_from_u64(7);
        let items     = numbered(53);
        let partition = partition_class("covid", items.clone(), &SplitRatios::default(), &mut rng);

        assert_eq!(partition.total(), 53);

        let train: HashSet<_> = partition.train.iter().collect();
        let val:   HashSet<_> = partition.val.iter().collect();
        let test:  HashSet<_> = partition.test.iter().collect();
        assert!(train.is_disjoint(&val));
        assert!(train.is_disjoint(&test));
        assert!(val.is_disjoint(&test));

        let union: HashSet<_> = train.union(&val).chain(test.iter()).cloned().collect();
        let original: HashSet<_> = items.iter().collect();
        assert_eq!(union, original);
    }

    #[test]
    fn test_empty_dataset() {
        let mut rng   = StdRng::seed_from_u64(42);
        let partition = partition_class("normal", Vec::new(), &SplitRatios::default(), &mut rng);
        assert_eq!(partition.total(), 0);
        assert!(partition.train.is_empty());
        assert!(partition.val.is_empty());
        assert!(partition.test.is_empty());
    }

    #[test]
    fn test_same_seed_same_assignment() {
        let ratios = SplitRatios::default();
        let a = partition_class("covid", numbered(40), &ratios, &mut StdRng::seed_from_u64(42));
        let b = partition_class("covid", numbered(40), &ratios, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shared_rng_advances_between_classes() {
        // One generator threaded through two classes: the second class
        // sees a different part of the sequence than a fresh generator would.
        let ratios = SplitRatios::default();
        let mut shared = StdRng::seed_from_u64(42);
        let first  = partition_class("a", numbered(30), &ratios, &mut shared);
        let second = partition_class("b", numbered(30), &ratios, &mut shared);

        let fresh = partition_class("b", numbered(30), &ratios, &mut StdRng::seed_from_u64(42));
        assert_eq!(first.train, fresh.train);
        assert_ne!(second.train, fresh.train);
    }

    #[test]
    fn test_split_by_counts_is_contiguous() {
        let counts = SplitCounts { total: 6, train: 3, val: 2, test: 1 };
        let (train, val, test) = split_by_counts(vec![1, 2, 3, 4, 5, 6], &counts);
        assert_eq!(train, vec![1, 2, 3]);
        assert_eq!(val, vec![4, 5]);
        assert_eq!(test, vec![6]);
    }
}

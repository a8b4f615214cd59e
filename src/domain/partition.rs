// ============================================================
// Layer 3 — ClassPartition Domain Type
// ============================================================
// The result of splitting one class: three contiguous,
// non-overlapping groups of file paths taken from the
// shuffled listing, in train → val → test order.
//
// A partition is derived, never stored. It is rebuilt on
// every run from the source listing, the ratios, and the
// random source.
//
// Reference: Rust Book §5 (Structs), §8 (Vectors)

use std::path::PathBuf;

use crate::domain::split::Split;

/// Split assignment for every eligible file of one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPartition {
    /// Class name, i.e. the subdirectory name
    pub class: String,

    pub train: Vec<PathBuf>,
    pub val:   Vec<PathBuf>,
    pub test:  Vec<PathBuf>,
}

impl ClassPartition {
    /// Files assigned to one split
    pub fn files(&self, split: Split) -> &[PathBuf] {
        match split {
            Split::Train => &self.train,
            Split::Val   => &self.val,
            Split::Test  => &self.test,
        }
    }

    pub fn total(&self) -> usize {
        self.train.len() + self.val.len() + self.test.len()
    }

    /// The human-readable per-class report line:
    ///   Class: covid | Total: 10 | Train: 7 | Val: 1 | Test: 2
    pub fn summary_line(&self) -> String {
        format!(
            "Class: {} | Total: {} | Train: {} | Val: {} | Test: {}",
            self.class,
            self.total(),
            self.train.len(),
            self.val.len(),
            self.test.len(),
        )
    }
}

// ============================================================
// Layer 3 — Split Ratios and Split Counts
// ============================================================
// SplitRatios holds the fraction of each class that goes to
// each split. SplitCounts is what those fractions turn into
// for a class with a concrete number of files.
//
// Count formula (per class with `total` eligible files):
//   train = floor(total * train_ratio)
//   val   = floor(total * val_ratio)
//   test  = total - train - val
//
// The test ratio never enters the formula: test absorbs
// whatever the two floors leave behind, so no file is lost
// to rounding. Example with total = 10 and 0.7 / 0.1 / 0.2:
//   train = 7, val = 1, test = 2
//
// The ratios are expected to sum to 1.0 but this is not
// enforced. If train + val exceeds 1.0 the counts are
// clamped in slice order (train first, then val), so
// train + val + test == total holds for any valid input.
//
// Reference: Rust Book §5 (Structs), §9 (Error Handling)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::domain::split::Split;

/// Tolerance used when checking that the ratios sum to 1.0
pub const RATIO_SUM_TOLERANCE: f64 = 1e-6;

/// Fraction of a class's files allocated to each split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitRatios {
    pub train: f64,
    pub val:   f64,
    pub test:  f64,
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self { train: 0.7, val: 0.1, test: 0.2 }
    }
}

impl SplitRatios {
    pub fn new(train: f64, val: f64, test: f64) -> Self {
        Self { train, val, test }
    }

    /// Ratio configured for one split
    pub fn get(&self, split: Split) -> f64 {
        match split {
            Split::Train => self.train,
            Split::Val   => self.val,
            Split::Test  => self.test,
        }
    }

    pub fn sum(&self) -> f64 {
        self.train + self.val + self.test
    }

    /// True when the three ratios add up to 1.0 (within tolerance)
    pub fn sums_to_one(&self) -> bool {
        (self.sum() - 1.0).abs() <= RATIO_SUM_TOLERANCE
    }

    /// Reject ratios that are not a fraction in [0, 1].
    /// The sum is deliberately not checked here.
    pub fn validate(&self) -> Result<()> {
        for split in Split::ALL {
            let r = self.get(split);
            if !r.is_finite() || !(0.0..=1.0).contains(&r) {
                bail!("Ratio for '{}' must be within [0, 1], got {}", split, r);
            }
        }
        Ok(())
    }

    /// Turn the ratios into concrete counts for a class of `total` files.
    pub fn counts(&self, total: usize) -> SplitCounts {
        let train = floor_share(total, self.train).min(total);
        let val   = floor_share(total, self.val).min(total - train);
        let test  = total - train - val;

        SplitCounts { total, train, val, test }
    }
}

/// floor(total * ratio), never negative
fn floor_share(total: usize, ratio: f64) -> usize {
    let share = (total as f64 * ratio).floor();
    if share <= 0.0 { 0 } else { share as usize }
}

/// Number of files per split for one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitCounts {
    pub total: usize,
    pub train: usize,
    pub val:   usize,
    pub test:  usize,
}

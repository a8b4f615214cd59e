// ============================================================
// Layer 3 — Split Domain Type
// ============================================================
// The three dataset splits a class is divided into.
//
// Each split maps to a directory name in the destination tree:
//   Split::Train → "train"
//   Split::Val   → "val"
//   Split::Test  → "test"
//
// Split::ALL fixes the canonical order: items are sliced
// into train first, then val, and whatever remains is test.
// Copies are performed in the same order.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use std::fmt;

/// One of the three disjoint subsets a class is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Val,
    Test,
}

impl Split {
    /// All splits in slicing (and copying) order
    pub const ALL: [Split; 3] = [Split::Train, Split::Val, Split::Test];

    /// Directory name used under the destination root
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val   => "val",
            Split::Test  => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

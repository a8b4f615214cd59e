// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to the outside world only
// through these two traits:
//
//   ItemSource    — where the per-class file listing comes from
//                   (ClassDirLister reads src_root/<class>/)
//   SplitReporter — where the per-class summary goes
//                   (ConsoleReporter in the CLI prints it)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use std::path::PathBuf;

use crate::domain::partition::ClassPartition;

// ─── ItemSource ───────────────────────────────────────────────────────────────
/// Anything that can list the eligible dataset items of a class.
pub trait ItemSource {
    /// List the items of one class in a stable order.
    /// Fails if the class cannot be read at all.
    fn list_items(&self, class: &str) -> Result<Vec<PathBuf>>;
}

// ─── SplitReporter ────────────────────────────────────────────────────────────
/// Receives progress from a split run.
pub trait SplitReporter {
    /// Called once per class, after partitioning and before copying.
    fn class_partitioned(&mut self, partition: &ClassPartition);

    /// Called once after every class has been processed.
    fn finished(&mut self) {}
}

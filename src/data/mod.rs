// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// From a class directory to a split assignment:
//
//   src_root/<class>/
//       │
//       ▼
//   ClassDirLister   → eligible files, sorted by name
//       │
//       ▼
//   partition_class  → seeded shuffle, sliced train/val/test
//       │
//       ▼
//   ClassPartition   → handed to the copier (Layer 6)
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Lists eligible files of a class directory
pub mod lister;

/// Shuffles and splits items into train/val/test
pub mod splitter;

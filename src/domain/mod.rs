// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits describing a dataset
// split. No file I/O happens here.
//
//   split.rs     — the Split enum (train / val / test)
//   ratios.rs    — SplitRatios and the count formula
//   partition.rs — ClassPartition, one class's assignment
//   traits.rs    — ItemSource and SplitReporter seams
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The three splits and their directory names
pub mod split;

// Ratios and the floor-based count formula
pub mod ratios;

// Per-class split assignment
pub mod partition;

// Core abstractions (traits) that other layers implement
pub mod traits;

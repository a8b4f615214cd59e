// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the other layers to split a dataset. No
// printing happens here: progress goes out through the
// SplitReporter trait and the CLI decides how to show it.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The split / dry-run workflow
pub mod split_use_case;

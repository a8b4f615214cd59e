// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that writes to or reads configuration from disk:
//
//   layout.rs      — creates dst_root/<split>/<class>/ folders
//   copier.rs      — copies one split of one class into place
//   config_file.rs — SplitConfig ⇄ JSON
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Destination directory tree creation
pub mod layout;

/// Per-split file copying
pub mod copier;

/// JSON config loading and rendering
pub mod config_file;

// ============================================================
// Layer 6 — Destination Layout
// ============================================================
// Creates the destination directory tree:
//
//   dst_root/
//     train/  covid/  normal/  virus/
//     val/    covid/  normal/  virus/
//     test/   covid/  normal/  virus/
//
// Idempotent: create_dir_all succeeds when the directory is
// already there, and existing files inside are left alone.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::split::Split;

/// Destination directory for one (split, class) pair
pub fn split_class_dir(dst_root: &Path, split: Split, class: &str) -> PathBuf {
    dst_root.join(split.as_str()).join(class)
}

/// Ensure `dst_root/<split>/<class>` exists for every split and class.
pub fn prepare_destination<S: AsRef<str>>(dst_root: &Path, classes: &[S]) -> Result<()> {
    for split in Split::ALL {
        for class in classes {
            let dir = split_class_dir(dst_root, split, class.as_ref());

            // Like `mkdir -p`
            fs::create_dir_all(&dir)
                .with_context(|| format!("Cannot create directory '{}'", dir.display()))?;

            tracing::debug!("Ensured directory '{}'", dir.display());
        }
    }

    Ok(())
}

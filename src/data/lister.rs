// ============================================================
// Layer 4 — Class Directory Lister
// ============================================================
// Lists the dataset items of one class from disk.
//
// Source layout:
//   src_root/
//     covid/
//       img_001.png   ← eligible
//       img_002.jpg   ← eligible
//       README        ← skipped (no extension)
//       .DS_Store     ← skipped (no extension, dotfile)
//       thumbs/       ← skipped (not a regular file)
//     normal/
//       ...
//
// Only entries directly under src_root/<class> are looked at;
// subdirectories are never descended into.
//
// The listing is sorted by file name so the shuffle input does
// not depend on the order the OS happens to enumerate entries.
//
// Reference: Rust Book §9 (Error Handling)
//            std::fs::read_dir documentation

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::traits::ItemSource;

/// Lists eligible files from `root/<class>/`.
/// Implements the ItemSource trait from Layer 3.
pub struct ClassDirLister {
    root: PathBuf,
}

impl ClassDirLister {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the items of one class
    pub fn class_dir(&self, class: &str) -> PathBuf {
        self.root.join(class)
    }
}

impl ItemSource for ClassDirLister {
    fn list_items(&self, class: &str) -> Result<Vec<PathBuf>> {
        let dir = self.class_dir(class);

        let mut items   = Vec::new();
        let mut skipped = 0usize;

        for entry in fs::read_dir(&dir)
            .with_context(|| format!("Cannot read class directory '{}'", dir.display()))?
        {
            let entry = entry
                .with_context(|| format!("Cannot list entry in '{}'", dir.display()))?;
            let path  = entry.path();

            if path.is_file() && has_extension(&path) {
                items.push(path);
            } else {
                skipped += 1;
            }
        }

        items.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        tracing::debug!(
            "Listed {} eligible files in '{}' ({} entries skipped)",
            items.len(),
            dir.display(),
            skipped,
        );

        Ok(items)
    }
}

/// True when the file name has a non-empty extension.
/// "scan.png" → true, "README" → false, ".hidden" → false, "scan." → false
pub fn has_extension(path: &Path) -> bool {
    path.extension().map_or(false, |ext| !ext.is_empty())
}

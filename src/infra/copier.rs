// ============================================================
// Layer 6 — File Copier
// ============================================================
// Copies the files of one split of one class into
//   dst_root/<split>/<class>/<file name>
//
// Files are copied one at a time in the order given. The
// source is never modified or removed. An existing file with
// the same name at the destination is overwritten.
//
// Any I/O failure (unreadable source, unwritable destination,
// disk full) is returned immediately with the offending paths
// attached. Nothing is retried.
//
// Reference: std::fs::copy documentation
//            Rust Book §9 (Error Handling with anyhow)

use anyhow::{Context, Result};
use std::{fs, path::{Path, PathBuf}};

use crate::domain::split::Split;
use crate::infra::layout::split_class_dir;

/// Copy `files` into `dst_root/<split>/<class>/`, keeping file names.
/// Returns the number of files copied.
pub fn copy_files(
    files:    &[PathBuf],
    dst_root: &Path,
    split:    Split,
    class:    &str,
) -> Result<usize> {
    let dest_dir = split_class_dir(dst_root, split, class);

    for src in files {
        let name = src
            .file_name()
            .with_context(|| format!("'{}' has no file name", src.display()))?;
        let dest = dest_dir.join(name);

        fs::copy(src, &dest).with_context(|| {
            format!("Cannot copy '{}' to '{}'", src.display(), dest.display())
        })?;

        tracing::debug!("Copied '{}' → '{}'", src.display(), dest.display());
    }

    Ok(files.len())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::layout::prepare_destination;

    #[test]
    fn test_copies_into_split_class_dir() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        prepare_destination(dst.path(), &["covid"]).unwrap();

        let a = src.path().join("a.png");
        let b = src.path().join("b.png");
        fs::write(&a, b"aaa").unwrap();
        fs::write(&b, b"bbb").unwrap();

        let copied = copy_files(&[a.clone(), b], dst.path(), Split::Val, "covid").unwrap();

        assert_eq!(copied, 2);
        let out = dst.path().join("val").join("covid");
        assert_eq!(fs::read(out.join("a.png")).unwrap(), b"aaa");
        assert_eq!(fs::read(out.join("b.png")).unwrap(), b"bbb");
        // source untouched
        assert_eq!(fs::read(&a).unwrap(), b"aaa");
    }

    #[test]
    fn test_empty_list_copies_nothing() {
        let dst = tempfile::tempdir().unwrap();
        let copied = copy_files(&[], dst.path(), Split::Test, "virus").unwrap();
        assert_eq!(copied, 0);
        assert!(!dst.path().join("test").exists());
    }

    #[test]
    fn test_missing_source_is_error() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        prepare_destination(dst.path(), &["covid"]).unwrap();

        let missing = src.path().join("gone.png");
        let err = copy_files(&[missing], dst.path(), Split::Train, "covid").unwrap_err();
        assert!(err.to_string().contains("gone.png"));
    }

    #[test]
    fn test_missing_destination_dir_is_error() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        let a   = src.path().join("a.png");
        fs::write(&a, b"a").unwrap();

        // prepare_destination was never called
        assert!(copy_files(&[a], dst.path(), Split::Train, "covid").is_err());
    }
}

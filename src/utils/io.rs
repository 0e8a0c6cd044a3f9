//! File I/O primitives with consistent error handling.
//!
//! Wraps `std::fs` with `Error::internal_io` formatting that carries the
//! operation context, so every stage reports failures the same way.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read file contents with standardized error handling.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Write content to file with standardized error handling.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Create a directory (and parents) if it does not exist.
pub fn ensure_dir(dir: &Path, operation: &str) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))?;
    }
    Ok(())
}

/// Remove a directory tree if present, then recreate it empty.
///
/// The package root is rebuilt from scratch on every run; stale files from a
/// previous run must never leak into the archive.
pub fn reset_dir(dir: &Path, operation: &str) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)
            .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))?;
    }
    fs::create_dir_all(dir)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Copy a single file, overwriting the destination.
///
/// A missing source is an asset error, not an internal I/O error.
pub fn copy_file(src: &Path, dest: &Path, operation: &str) -> Result<()> {
    if !src.is_file() {
        return Err(Error::asset_not_found(src.display().to_string()));
    }
    if let Some(parent) = dest.parent() {
        ensure_dir(parent, operation)?;
    }
    fs::copy(src, dest)
        .map(|_| ())
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Copy a file or an entire directory tree, overwriting existing entries.
pub fn copy_recursive(src: &Path, dest: &Path, operation: &str) -> Result<()> {
    if src.is_file() {
        return copy_file(src, dest, operation);
    }
    if !src.is_dir() {
        return Err(Error::asset_not_found(src.display().to_string()));
    }

    ensure_dir(dest, operation)?;
    let entries = fs::read_dir(src)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))?;
    for entry in entries {
        let entry =
            entry.map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))?;
        let child_src = entry.path();
        let child_dest = dest.join(entry.file_name());
        if child_src.is_dir() {
            copy_recursive(&child_src, &child_dest, operation)?;
        } else {
            fs::copy(&child_src, &child_dest)
                .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))?;
        }
    }
    Ok(())
}

/// List the entry names of a directory in sorted order.
///
/// Directory enumeration order is platform-dependent; sorting makes the
/// packaging order deterministic.
pub fn sorted_dir_names(dir: &Path, operation: &str) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))?;
        names.push(entry.file_name().to_string_lossy().to_string());
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn read_file_returns_error_for_missing_file() {
        let result = read_file(Path::new("/nonexistent/path.txt"), "test read");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn copy_file_overwrites_destination() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("a.txt");
        let dest = dir.path().join("b.txt");
        fs::write(&src, "new").unwrap();
        fs::write(&dest, "old").unwrap();

        copy_file(&src, &dest, "test copy").unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn copy_file_missing_source_is_asset_error() {
        let dir = TempDir::new().unwrap();
        let result = copy_file(
            &dir.path().join("missing.txt"),
            &dir.path().join("out.txt"),
            "test copy",
        );
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "asset.not_found");
    }

    #[test]
    fn copy_recursive_copies_nested_tree() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("nested")).unwrap();
        let mut f = File::create(src.join("nested").join("file.txt")).unwrap();
        writeln!(f, "content").unwrap();

        let dest = dir.path().join("dest");
        copy_recursive(&src, &dest, "test copy").unwrap();

        let copied = fs::read_to_string(dest.join("nested").join("file.txt")).unwrap();
        assert!(copied.contains("content"));
    }

    #[test]
    fn reset_dir_clears_previous_contents() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("pkg");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("stale.txt"), "stale").unwrap();

        reset_dir(&target, "test reset").unwrap();
        assert!(target.exists());
        assert!(!target.join("stale.txt").exists());
    }

    #[test]
    fn sorted_dir_names_is_deterministic() {
        let dir = TempDir::new().unwrap();
        for name in ["b", "a", "c"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        let names = sorted_dir_names(dir.path(), "test list").unwrap();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}

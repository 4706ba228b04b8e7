//! Filesystem helpers
//!
//! Recursive tree copies with name-based exclusion, plus small read/write
//! helpers for the JSON documents the tools patch.

use crate::error::{Error, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursive directory copier
pub struct TreeCopier {
    exclude_names: Vec<String>,
}

impl Default for TreeCopier {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeCopier {
    /// Copier that copies everything
    pub fn new() -> Self {
        Self {
            exclude_names: Vec::new(),
        }
    }

    /// Skip entries (files or directories) with any of these names, at any depth
    pub fn exclude(mut self, names: &[&str]) -> Self {
        self.exclude_names = names.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Copy `src` into `dest`, creating `dest` if needed. Existing files are
    /// overwritten. Returns the number of files copied.
    pub fn copy(&self, src: &Path, dest: &Path) -> Result<usize> {
        if !src.is_dir() {
            return Err(Error::directory_not_found(src));
        }

        std::fs::create_dir_all(dest)?;
        let mut copied = 0;

        // The root itself is never subject to exclusion.
        let walker = WalkDir::new(src)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e.file_name().to_str().unwrap_or("")));

        for entry in walker {
            let entry = entry?;
            let relative = entry
                .path()
                .strip_prefix(src)
                .map_err(|e| Error::io(format!("Path outside copy root: {}", e)))?;
            let target = dest.join(relative);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target)?;
            } else {
                std::fs::copy(entry.path(), &target)?;
                copied += 1;
            }
        }

        tracing::debug!(
            src = %src.display(),
            dest = %dest.display(),
            files = copied,
            "Copied directory tree"
        );
        Ok(copied)
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.exclude_names.iter().any(|n| n == name)
    }
}

/// Copy a single file, creating the destination's parent directories
pub fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::copy(src, dest)?;
    Ok(())
}

/// Remove a directory tree if it exists. Returns whether anything was removed.
pub fn remove_dir_if_exists(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    std::fs::remove_dir_all(path)?;
    Ok(true)
}

/// Read and parse a JSON document
pub fn read_json(path: &Path) -> Result<Value> {
    if !path.is_file() {
        return Err(Error::file_not_found(path));
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        Error::invalid_format(format!("Invalid JSON in {}: {}", path.display(), e)).with_source(e)
    })
}

/// Write a JSON document pretty-printed with two-space indentation
pub fn write_json(path: &Path, value: &Value) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Resolve `path` against `root` unless it is already absolute
pub fn resolve(root: &Path, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

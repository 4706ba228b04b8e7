//! Web asset staging
//!
//! Capacitor packages whatever sits in the staging directory (`webDir`).
//! The directory is rebuilt from scratch on every build. Every path taken
//! from the config must stay below the project root.

use pwa_core::error::Result;
use pwa_core::fs::{copy_file, remove_dir_if_exists, TreeCopier};
use pwa_core::validation::validate_project_path;
use std::path::{Path, PathBuf};

/// Directory Capacitor generates the Android project into
pub const ANDROID_DIR: &str = "android";

/// Result of copying a list of entries into staging
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopySummary {
    /// Entries copied
    pub copied: Vec<String>,
    /// Entries that did not exist and were skipped
    pub missing: Vec<String>,
}

impl CopySummary {
    /// Whether any entry was skipped
    pub fn has_missing(&self) -> bool {
        !self.missing.is_empty()
    }
}

/// Remove the staging directory and the generated Android project.
/// Returns the directories that were removed.
pub fn clean(root: &Path, web_dir: &str) -> Result<Vec<PathBuf>> {
    validate_project_path("webDir", web_dir)?;
    let mut removed = Vec::new();
    for dir in [root.join(web_dir), root.join(ANDROID_DIR)] {
        if remove_dir_if_exists(&dir)? {
            tracing::debug!(dir = %dir.display(), "Removed generated directory");
            removed.push(dir);
        }
    }
    Ok(removed)
}

/// Create an empty staging directory
pub fn recreate(staging: &Path) -> Result<()> {
    std::fs::create_dir_all(staging)?;
    Ok(())
}

/// Copy individual files from `root` into `staging`, keeping their relative
/// paths. Missing files are skipped.
pub fn copy_files(root: &Path, staging: &Path, files: &[String]) -> Result<CopySummary> {
    let mut summary = CopySummary::default();
    for file in files {
        validate_project_path("filesToCopy entry", file)?;
        let src = root.join(file);
        if src.is_file() {
            copy_file(&src, &staging.join(file))?;
            summary.copied.push(file.clone());
        } else {
            tracing::warn!(file = %file, "File listed in filesToCopy is missing");
            summary.missing.push(file.clone());
        }
    }
    Ok(summary)
}

/// Copy folders recursively from `root` into `staging`. Missing folders
/// are skipped.
pub fn copy_folders(root: &Path, staging: &Path, folders: &[String]) -> Result<CopySummary> {
    let copier = TreeCopier::new();
    let mut summary = CopySummary::default();
    for folder in folders {
        validate_project_path("foldersToCopy entry", folder)?;
        let src = root.join(folder);
        if src.is_dir() {
            copier.copy(&src, &staging.join(folder))?;
            summary.copied.push(folder.clone());
        } else {
            tracing::warn!(folder = %folder, "Folder listed in foldersToCopy is missing");
            summary.missing.push(folder.clone());
        }
    }
    Ok(summary)
}

//! Installing generated launcher icons into the Android project

use pwa_core::error::Result;
use pwa_core::fs::TreeCopier;
use pwa_image::ANDROID_ICONS_DIR;
use std::path::Path;

/// Resource directory of the app module, relative to `android/`
pub const RES_DIR: &str = "app/src/main/res";

/// What [`install_launcher_icons`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconInstall {
    /// `android-icons/` does not exist
    NotGenerated,
    /// Copied these `mipmap-*` buckets
    Installed(Vec<String>),
}

/// Copy every `android-icons/mipmap-*` directory over the matching
/// directory in the app's resources
pub fn install_launcher_icons(root: &Path, android_dir: &Path) -> Result<IconInstall> {
    let icons_dir = root.join(ANDROID_ICONS_DIR);
    if !icons_dir.is_dir() {
        return Ok(IconInstall::NotGenerated);
    }

    let mut buckets: Vec<String> = std::fs::read_dir(&icons_dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("mipmap-"))
        .collect();
    buckets.sort();

    let res_dir = android_dir.join(RES_DIR);
    let copier = TreeCopier::new();
    for bucket in &buckets {
        copier.copy(&icons_dir.join(bucket), &res_dir.join(bucket))?;
    }

    tracing::debug!(buckets = buckets.len(), "Installed launcher icons");
    Ok(IconInstall::Installed(buckets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_not_generated() {
        let dir = TempDir::new().unwrap();
        let result = install_launcher_icons(dir.path(), &dir.path().join("android")).unwrap();
        assert_eq!(result, IconInstall::NotGenerated);
    }

    #[test]
    fn test_installs_mipmap_buckets() {
        let dir = TempDir::new().unwrap();
        for bucket in ["mipmap-mdpi", "mipmap-hdpi"] {
            let bucket_dir = dir.path().join(ANDROID_ICONS_DIR).join(bucket);
            std::fs::create_dir_all(&bucket_dir).unwrap();
            std::fs::write(bucket_dir.join("ic_launcher.png"), "png").unwrap();
        }
        std::fs::create_dir_all(dir.path().join(ANDROID_ICONS_DIR).join("notes")).unwrap();

        let android = dir.path().join("android");
        let existing = android.join(RES_DIR).join("mipmap-mdpi");
        std::fs::create_dir_all(&existing).unwrap();
        std::fs::write(existing.join("ic_launcher.png"), "old").unwrap();

        let result = install_launcher_icons(dir.path(), &android).unwrap();

        assert_eq!(
            result,
            IconInstall::Installed(vec!["mipmap-hdpi".to_string(), "mipmap-mdpi".to_string()])
        );
        assert_eq!(std::fs::read_to_string(existing.join("ic_launcher.png")).unwrap(), "png");
        assert!(android.join(RES_DIR).join("mipmap-hdpi/ic_launcher.png").is_file());
        assert!(!android.join(RES_DIR).join("notes").exists());
    }
}

//! Web app manifest icon list.

use crate::detect::ImageFormat;
use crate::icons::{pwa_icon_name, PWA_ICONS_DIR, PWA_SIZES};
use crate::{ImageError, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;

/// Smallest icon size advertised as maskable
pub const MASKABLE_MIN_SIZE: u32 = 192;

/// One entry of the manifest's `icons` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    /// Path relative to the manifest
    pub src: String,
    /// `"{N}x{N}"`
    pub sizes: String,
    /// MIME type
    #[serde(rename = "type")]
    pub mime_type: String,
    /// `any` or `any maskable`
    pub purpose: String,
}

impl ManifestIcon {
    fn for_size(size: u32) -> Self {
        Self {
            src: format!("{}/{}", PWA_ICONS_DIR, pwa_icon_name(size)),
            sizes: format!("{size}x{size}"),
            mime_type: ImageFormat::Png.mime_type().to_string(),
            purpose: purpose_for(size).to_string(),
        }
    }
}

/// Manifest `purpose` for an icon of `size` pixels.
pub fn purpose_for(size: u32) -> &'static str {
    if size >= MASKABLE_MIN_SIZE {
        "any maskable"
    } else {
        "any"
    }
}

/// Icon entries for every PWA size, smallest first.
pub fn manifest_icons() -> Vec<ManifestIcon> {
    PWA_SIZES.iter().map(|&size| ManifestIcon::for_size(size)).collect()
}

/// Values used when no manifest exists yet.
#[derive(Debug, Clone, Default)]
pub struct ManifestSeed {
    /// App name, also used as short name
    pub name: String,
    /// App description
    pub description: String,
    /// `theme_color`
    pub theme_color: String,
    /// `background_color`
    pub background_color: String,
}

impl ManifestSeed {
    /// A fresh manifest without icons
    pub fn to_manifest(&self) -> Value {
        json!({
            "name": self.name,
            "short_name": self.name,
            "description": self.description,
            "start_url": "/",
            "display": "standalone",
            "theme_color": self.theme_color,
            "background_color": self.background_color,
        })
    }
}

/// What [`update_manifest`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestUpdate {
    /// The manifest did not exist and was built from the seed
    pub created: bool,
    /// Number of icon entries written
    pub icons: usize,
}

/// Replace the `icons` array of the manifest at `path`, creating the
/// manifest from `seed` when it is missing. Other keys keep their values
/// and order.
pub fn update_manifest(path: &Path, seed: &ManifestSeed) -> Result<ManifestUpdate> {
    let created = !path.exists();
    let mut manifest = if created {
        seed.to_manifest()
    } else {
        serde_json::from_str(&std::fs::read_to_string(path)?)?
    };

    let object = manifest.as_object_mut().ok_or_else(|| {
        ImageError::InvalidData(format!("{} must contain a JSON object", path.display()))
    })?;

    let icons = manifest_icons();
    let count = icons.len();
    object.insert("icons".to_string(), serde_json::to_value(icons)?);

    std::fs::write(path, serde_json::to_string_pretty(&manifest)?)?;
    tracing::debug!(path = %path.display(), created, icons = count, "Updated manifest icons");

    Ok(ManifestUpdate {
        created,
        icons: count,
    })
}

//! Icon generation for the PWA builder.
//!
//! This crate provides:
//! - Source image format detection from magic bytes
//! - "cover" and "contain" square resizing
//! - The fixed PWA / Android launcher icon matrix
//! - Web manifest icon list rewriting

#![warn(missing_docs)]

mod detect;
mod error;
pub mod icons;
pub mod manifest;

#[cfg(feature = "processing")]
mod resize;

pub use detect::{detect_format, ImageFormat};
pub use error::{ImageError, Result};
pub use icons::{
    foreground_size, icon_plan, pwa_icon_name, Fit, IconGenerator, IconSpec, LauncherIcon,
    ANDROID_BUCKETS, ANDROID_ICONS_DIR, PWA_ICONS_DIR, PWA_SIZES,
};
pub use manifest::{manifest_icons, purpose_for, update_manifest, ManifestIcon, ManifestSeed, ManifestUpdate};

#[cfg(feature = "processing")]
pub use resize::resize_square;

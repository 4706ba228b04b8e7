//! The icon matrix and its generator.
//!
//! One square source image yields:
//! - `icons/icon-{N}x{N}.png` for every entry of [`PWA_SIZES`]
//! - `android-icons/mipmap-{bucket}/ic_launcher.png`, `ic_launcher_round.png`
//!   and `ic_launcher_foreground.png` for every entry of [`ANDROID_BUCKETS`]

use crate::detect::{detect_format, ImageFormat};
use crate::{ImageError, Result};
use std::path::{Path, PathBuf};

/// Web manifest icon sizes
pub const PWA_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// Android launcher density buckets and their nominal icon size
pub const ANDROID_BUCKETS: [(&str, u32); 5] = [
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

/// Output directory for PWA icons, relative to the project root
pub const PWA_ICONS_DIR: &str = "icons";

/// Output directory for Android launcher icons, relative to the project root
pub const ANDROID_ICONS_DIR: &str = "android-icons";

/// Adaptive-icon foreground layers are drawn 20% larger than the bucket size.
pub fn foreground_size(size: u32) -> u32 {
    size * 6 / 5
}

/// How the source is fitted into the square output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Scale to fill, crop the overflow around the centre
    Cover,
    /// Scale to fit, pad with transparency
    Contain,
}

/// Kind of Android launcher icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherIcon {
    /// `ic_launcher.png`
    Launcher,
    /// `ic_launcher_round.png`
    Round,
    /// `ic_launcher_foreground.png`
    Foreground,
}

impl LauncherIcon {
    /// All launcher icons, in generation order
    pub const ALL: [LauncherIcon; 3] = [
        LauncherIcon::Launcher,
        LauncherIcon::Round,
        LauncherIcon::Foreground,
    ];

    /// File name inside a `mipmap-*` directory
    pub fn file_name(&self) -> &'static str {
        match self {
            LauncherIcon::Launcher => "ic_launcher.png",
            LauncherIcon::Round => "ic_launcher_round.png",
            LauncherIcon::Foreground => "ic_launcher_foreground.png",
        }
    }

    fn size_for(&self, bucket_size: u32) -> u32 {
        match self {
            LauncherIcon::Foreground => foreground_size(bucket_size),
            _ => bucket_size,
        }
    }

    fn fit(&self) -> Fit {
        match self {
            LauncherIcon::Foreground => Fit::Contain,
            _ => Fit::Cover,
        }
    }
}

/// One output file of the icon matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    /// Output path
    pub path: PathBuf,
    /// Width and height in pixels
    pub size: u32,
    /// Fit mode
    pub fit: Fit,
}

/// File name of a PWA icon, e.g. `icon-192x192.png`
pub fn pwa_icon_name(size: u32) -> String {
    format!("icon-{size}x{size}.png")
}

/// The full icon matrix: 8 PWA icons followed by 3 launcher icons per
/// Android bucket.
pub fn icon_plan(icons_dir: &Path, android_dir: &Path) -> Vec<IconSpec> {
    let pwa = PWA_SIZES.iter().map(|&size| IconSpec {
        path: icons_dir.join(pwa_icon_name(size)),
        size,
        fit: Fit::Cover,
    });

    let android = ANDROID_BUCKETS.iter().flat_map(|&(bucket, size)| {
        let mipmap = android_dir.join(format!("mipmap-{bucket}"));
        LauncherIcon::ALL.into_iter().map(move |icon| IconSpec {
            path: mipmap.join(icon.file_name()),
            size: icon.size_for(size),
            fit: icon.fit(),
        })
    });

    pwa.chain(android).collect()
}

/// Generates the icon matrix for a project.
#[derive(Debug, Clone)]
pub struct IconGenerator {
    source: PathBuf,
    icons_dir: PathBuf,
    android_dir: PathBuf,
}

impl IconGenerator {
    /// Generator writing into the standard directories under `root`.
    /// A relative `source` is resolved against `root`.
    pub fn new(root: &Path, source: impl AsRef<Path>) -> Self {
        Self {
            source: root.join(source.as_ref()),
            icons_dir: root.join(PWA_ICONS_DIR),
            android_dir: root.join(ANDROID_ICONS_DIR),
        }
    }

    /// Source image path
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Every file [`generate`](Self::generate) writes
    pub fn plan(&self) -> Vec<IconSpec> {
        icon_plan(&self.icons_dir, &self.android_dir)
    }

    /// Check the source exists and is in a decodable format.
    pub fn check_source(&self) -> Result<ImageFormat> {
        let bytes = self.read_source()?;
        let format = detect_format(&bytes)?;
        if !format.is_decodable() {
            return Err(ImageError::UnsupportedFormat(format.mime_type().to_string()));
        }
        Ok(format)
    }

    fn read_source(&self) -> Result<Vec<u8>> {
        if !self.source.is_file() {
            return Err(ImageError::SourceNotFound(self.source.clone()));
        }
        Ok(std::fs::read(&self.source)?)
    }

    /// Write the whole matrix, calling `on_icon` after each file.
    /// Existing files are overwritten.
    #[cfg(feature = "processing")]
    pub fn generate<F>(&self, mut on_icon: F) -> Result<Vec<IconSpec>>
    where
        F: FnMut(&IconSpec),
    {
        self.check_source()?;
        let source = image::open(&self.source)?;
        let (width, height) = image::GenericImageView::dimensions(&source);
        tracing::debug!(source = %self.source.display(), width, height, "Loaded source icon");

        let plan = self.plan();
        for spec in &plan {
            if let Some(parent) = spec.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let icon = crate::resize::resize_square(&source, spec.size, spec.fit);
            icon.save_with_format(&spec.path, image::ImageFormat::Png)?;
            tracing::trace!(path = %spec.path.display(), size = spec.size, "Wrote icon");
            on_icon(spec);
        }

        Ok(plan)
    }

    /// Image processing is compiled out: validates the source, then fails.
    #[cfg(not(feature = "processing"))]
    pub fn generate<F>(&self, _on_icon: F) -> Result<Vec<IconSpec>>
    where
        F: FnMut(&IconSpec),
    {
        self.check_source()?;
        Err(ImageError::ProcessingUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_foreground_size() {
        assert_eq!(foreground_size(48), 57);
        assert_eq!(foreground_size(72), 86);
        assert_eq!(foreground_size(96), 115);
        assert_eq!(foreground_size(144), 172);
        assert_eq!(foreground_size(192), 230);
    }

    #[test]
    fn test_icon_plan_shape() {
        let plan = icon_plan(Path::new("icons"), Path::new("android-icons"));
        assert_eq!(plan.len(), 8 + 5 * 3);

        assert_eq!(plan[0].path, PathBuf::from("icons/icon-72x72.png"));
        assert_eq!(plan[7].path, PathBuf::from("icons/icon-512x512.png"));
        assert!(plan[..8].iter().all(|spec| spec.fit == Fit::Cover));

        let fg = plan
            .iter()
            .find(|spec| spec.path == Path::new("android-icons/mipmap-xxxhdpi/ic_launcher_foreground.png"))
            .unwrap();
        assert_eq!(fg.size, 230);
        assert_eq!(fg.fit, Fit::Contain);

        let round = plan
            .iter()
            .find(|spec| spec.path == Path::new("android-icons/mipmap-mdpi/ic_launcher_round.png"))
            .unwrap();
        assert_eq!(round.size, 48);
        assert_eq!(round.fit, Fit::Cover);
    }

    #[test]
    fn test_missing_source() {
        let dir = TempDir::new().unwrap();
        let generator = IconGenerator::new(dir.path(), "source-icon.png");
        let err = generator.generate(|_| {}).unwrap_err();
        assert!(matches!(err, ImageError::SourceNotFound(_)));
        assert!(!dir.path().join(PWA_ICONS_DIR).exists());
    }

    #[test]
    fn test_non_image_source() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("source-icon.png"), "not an image at all").unwrap();
        let generator = IconGenerator::new(dir.path(), "source-icon.png");
        assert!(matches!(generator.check_source(), Err(ImageError::UnknownFormat)));
    }

    #[cfg(feature = "processing")]
    mod processing {
        use super::*;
        use image::{Rgba, RgbaImage};

        fn write_source(dir: &Path, width: u32, height: u32) {
            RgbaImage::from_pixel(width, height, Rgba([76, 175, 80, 255]))
                .save(dir.join("source-icon.png"))
                .unwrap();
        }

        #[test]
        fn test_generate_matrix() {
            let dir = TempDir::new().unwrap();
            write_source(dir.path(), 300, 200);

            let generator = IconGenerator::new(dir.path(), "source-icon.png");
            let mut seen = 0;
            let written = generator.generate(|_| seen += 1).unwrap();

            assert_eq!(written.len(), 23);
            assert_eq!(seen, 23);
            for spec in &written {
                let dims = image::image_dimensions(&spec.path).unwrap();
                assert_eq!(dims, (spec.size, spec.size), "{}", spec.path.display());
            }
            assert_eq!(
                image::image_dimensions(dir.path().join("icons/icon-512x512.png")).unwrap(),
                (512, 512)
            );
            assert_eq!(
                image::image_dimensions(dir.path().join("android-icons/mipmap-mdpi/ic_launcher_foreground.png"))
                    .unwrap(),
                (57, 57)
            );
        }

        #[test]
        fn test_foreground_is_padded() {
            let dir = TempDir::new().unwrap();
            write_source(dir.path(), 300, 150);

            IconGenerator::new(dir.path(), "source-icon.png").generate(|_| {}).unwrap();

            let fg = image::open(dir.path().join("android-icons/mipmap-xhdpi/ic_launcher_foreground.png"))
                .unwrap()
                .to_rgba8();
            assert_eq!(fg.get_pixel(0, 0)[3], 0);
            assert_eq!(fg.get_pixel(57, 57)[3], 255);

            let launcher = image::open(dir.path().join("android-icons/mipmap-xhdpi/ic_launcher.png"))
                .unwrap()
                .to_rgba8();
            assert_eq!(launcher.get_pixel(0, 0)[3], 255);
        }

        #[test]
        fn test_generate_is_idempotent() {
            let dir = TempDir::new().unwrap();
            write_source(dir.path(), 128, 128);
            let generator = IconGenerator::new(dir.path(), "source-icon.png");

            generator.generate(|_| {}).unwrap();
            let first = std::fs::read(dir.path().join("icons/icon-192x192.png")).unwrap();
            generator.generate(|_| {}).unwrap();
            let second = std::fs::read(dir.path().join("icons/icon-192x192.png")).unwrap();

            assert_eq!(first, second);
        }
    }
}

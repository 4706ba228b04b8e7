//! Error types for the image crate.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for image operations.
pub type Result<T> = std::result::Result<T, ImageError>;

/// Errors that can occur during icon generation.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Source image missing
    #[error("Source icon not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Unknown image format
    #[error("Unknown image format")]
    UnknownFormat,

    /// Recognised but not decodable by this build
    #[error("Unsupported source format: {0}")]
    UnsupportedFormat(String),

    /// Invalid image data
    #[error("Invalid image data: {0}")]
    InvalidData(String),

    /// Built without the `processing` feature
    #[error("Image processing support is not available in this build")]
    ProcessingUnavailable,

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Manifest (de)serialization error
    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    /// Image processing error
    #[cfg(feature = "processing")]
    #[error("Image processing error: {0}")]
    ProcessingError(#[from] image::ImageError),
}

impl From<ImageError> for pwa_core::Error {
    fn from(err: ImageError) -> Self {
        use pwa_core::ErrorCode;

        let error = match &err {
            ImageError::SourceNotFound(path) => pwa_core::Error::file_not_found(path)
                .with_suggestion("Set \"sourceIcon\" in build-config.json or add source-icon.png"),
            ImageError::UnknownFormat | ImageError::UnsupportedFormat(_) | ImageError::InvalidData(_) => {
                pwa_core::Error::new(ErrorCode::ImageError, err.to_string())
                    .with_suggestion("Use a PNG, JPEG, GIF or WebP source icon")
            }
            ImageError::ProcessingUnavailable => pwa_core::Error::new(ErrorCode::ImageError, err.to_string())
                .with_suggestion("Rebuild with the `processing` feature enabled"),
            ImageError::IoError(_) => pwa_core::Error::new(ErrorCode::IoError, err.to_string()),
            _ => pwa_core::Error::new(ErrorCode::ImageError, err.to_string()),
        };
        error.with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwa_core::ErrorCode;

    #[test]
    fn test_into_core_error() {
        let err: pwa_core::Error = ImageError::SourceNotFound(PathBuf::from("icon.png")).into();
        assert_eq!(err.code, ErrorCode::FileNotFound);
        assert!(err.suggestion.is_some());

        let err: pwa_core::Error = ImageError::ProcessingUnavailable.into();
        assert_eq!(err.code, ErrorCode::ImageError);
    }
}

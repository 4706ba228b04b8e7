//! Square icon resizing with the image crate.

use crate::icons::Fit;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};

/// Resize `img` to a `size`×`size` square.
///
/// - [`Fit::Cover`] scales to fill the square and crops the overflow
///   around the centre.
/// - [`Fit::Contain`] scales to fit inside the square, preserving aspect
///   ratio, and centres the result on a transparent canvas.
pub fn resize_square(img: &DynamicImage, size: u32, fit: Fit) -> DynamicImage {
    match fit {
        Fit::Cover => img.resize_to_fill(size, size, FilterType::Lanczos3),
        Fit::Contain => {
            let scaled = img.resize(size, size, FilterType::Lanczos3).to_rgba8();
            let mut canvas = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
            let x = (size - scaled.width()) / 2;
            let y = (size - scaled.height()) / 2;
            imageops::overlay(&mut canvas, &scaled, i64::from(x), i64::from(y));
            DynamicImage::ImageRgba8(canvas)
        }
    }
}

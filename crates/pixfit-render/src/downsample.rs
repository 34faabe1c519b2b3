//! Thumbnail decoding: downsample an image to a target pixel size from
//! a byte buffer or a file path.
//!
//! Downsampling never upscales. An image already within the target
//! size decodes at its native dimensions.

use std::path::Path;

use log::debug;

use crate::decode::decode;
use crate::error::RenderError;
use crate::types::{FilterType, PixelImage};

/// Decode image bytes and shrink the result so its longest edge is at
/// most `max_edge` pixels, preserving aspect ratio.
///
/// # Errors
///
/// Returns `RenderError::ZeroTarget` when `max_edge` is 0 and decode
/// errors for malformed bytes.
pub fn downsample(
    bytes: &[u8],
    max_edge: u32,
    filter: FilterType,
) -> Result<PixelImage, RenderError> {
    if max_edge == 0 {
        return Err(RenderError::ZeroTarget);
    }

    let image = decode(bytes)?;

    // Already fits: keep native dimensions
    if image.width <= max_edge && image.height <= max_edge {
        return Ok(image);
    }

    let (new_width, new_height) = fit_within(image.width, image.height, max_edge);
    debug!(
        "downsampling {}x{} -> {}x{}",
        image.width, image.height, new_width, new_height
    );

    let rgba = image.to_rgba_image().ok_or(RenderError::NoPixelBacking)?;
    let resized = image::imageops::resize(&rgba, new_width, new_height, filter.to_image_filter());

    Ok(PixelImage::from_rgba_image(resized))
}

/// Read an image file and downsample it to `max_edge` pixels.
///
/// # Errors
///
/// Returns `RenderError::Io` when the file cannot be read, plus any
/// error [`downsample`] can produce.
pub fn downsample_file<P: AsRef<Path>>(
    path: P,
    max_edge: u32,
    filter: FilterType,
) -> Result<PixelImage, RenderError> {
    let bytes = std::fs::read(path).map_err(|e| RenderError::Io(e.to_string()))?;
    downsample(&bytes, max_edge, filter)
}

/// Calculate dimensions that fit within `max_edge` while preserving
/// aspect ratio. The longest edge becomes exactly `max_edge`; the other
/// is rounded but never below 1.
fn fit_within(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let ratio = f64::from(width) / f64::from(height);

    if width >= height {
        // Landscape or square: constrain by width
        let new_height = (f64::from(max_edge) / ratio).round() as u32;
        (max_edge, new_height.max(1))
    } else {
        // Portrait: constrain by height
        let new_width = (f64::from(max_edge) * ratio).round() as u32;
        (new_width.max(1), max_edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let buf = image::RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, 64, 255])
        });
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(buf)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_downsample_landscape() {
        let bytes = png_bytes(600, 400);
        let img = downsample(&bytes, 300, FilterType::Bilinear).unwrap();

        assert_eq!(img.width, 300);
        assert_eq!(img.height, 200);
    }

    #[test]
    fn test_downsample_portrait() {
        let bytes = png_bytes(400, 600);
        let img = downsample(&bytes, 300, FilterType::Bilinear).unwrap();

        assert_eq!(img.width, 200);
        assert_eq!(img.height, 300);
    }

    #[test]
    fn test_downsample_never_upscales() {
        let bytes = png_bytes(50, 30);
        let img = downsample(&bytes, 256, FilterType::Bilinear).unwrap();

        assert_eq!(img.width, 50);
        assert_eq!(img.height, 30);
    }

    #[test]
    fn test_downsample_zero_target_error() {
        let bytes = png_bytes(50, 30);
        assert!(matches!(
            downsample(&bytes, 0, FilterType::Bilinear),
            Err(RenderError::ZeroTarget)
        ));
    }

    #[test]
    fn test_downsample_invalid_bytes() {
        assert!(downsample(&[1, 2, 3], 128, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_downsample_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        std::fs::write(&path, png_bytes(640, 480)).unwrap();

        let img = downsample_file(&path, 320, FilterType::Bilinear).unwrap();
        assert_eq!(img.width, 320);
        assert_eq!(img.height, 240);
    }

    #[test]
    fn test_downsample_file_missing() {
        let result = downsample_file("/nonexistent/file.png", 128, FilterType::Bilinear);
        assert!(matches!(result, Err(RenderError::Io(_))));
    }

    #[test]
    fn test_fit_within_landscape() {
        assert_eq!(fit_within(6000, 4000, 2560), (2560, 1707));
    }

    #[test]
    fn test_fit_within_portrait() {
        assert_eq!(fit_within(4000, 6000, 2560), (1707, 2560));
    }

    #[test]
    fn test_fit_within_square() {
        assert_eq!(fit_within(4000, 4000, 256), (256, 256));
    }

    #[test]
    fn test_fit_within_extreme_ratio_keeps_min_dimension() {
        let (w, h) = fit_within(10000, 10, 100);
        assert_eq!(w, 100);
        assert!(h >= 1);
    }

    #[test]
    fn test_fit_within_zero_input() {
        assert_eq!(fit_within(0, 0, 256), (0, 0));
    }
}

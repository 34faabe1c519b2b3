//! Image decoding with EXIF orientation handling.
//!
//! Format detection is delegated to the image crate's guessed-format
//! reader, so anything the enabled codecs cover (JPEG, PNG) decodes
//! through the same path.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;
use log::debug;

use crate::error::RenderError;
use crate::types::{ImageInfo, Orientation, PixelImage};

/// Decode an image from bytes, applying EXIF orientation correction.
///
/// # Errors
///
/// Returns `RenderError::CorruptedImage` if the bytes cannot be decoded.
pub fn decode(bytes: &[u8]) -> Result<PixelImage, RenderError> {
    // Extract EXIF orientation before the pixel decode consumes the buffer
    let orientation = extract_orientation(bytes);

    let img = decode_dynamic(bytes)?;
    let oriented = apply_orientation(img, orientation);

    debug!(
        "decoded {}x{} image (orientation {:?})",
        oriented.width(),
        oriented.height(),
        orientation
    );

    Ok(PixelImage::from_rgba_image(oriented.into_rgba8()))
}

/// Decode an image from bytes without applying EXIF orientation.
///
/// Use this when orientation is handled separately or the image is
/// already correctly oriented.
pub fn decode_no_orientation(bytes: &[u8]) -> Result<PixelImage, RenderError> {
    let img = decode_dynamic(bytes)?;
    Ok(PixelImage::from_rgba_image(img.into_rgba8()))
}

/// Extract the EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is present or the
/// orientation tag cannot be read.
pub fn orientation_of(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

/// Read the display metadata of an image without decoding its pixels.
///
/// Dimensions come from the format header, orientation from EXIF. The
/// pixel-density factor is not recorded in the bytes themselves; it
/// starts at 1.0 and callers that know the asset scale (e.g. a `@2x`
/// resource) override it before using [`ImageInfo::oriented_size`].
///
/// # Errors
///
/// Returns `RenderError::CorruptedImage` if the header cannot be read.
pub fn info_of(bytes: &[u8]) -> Result<ImageInfo, RenderError> {
    let orientation = extract_orientation(bytes);

    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| RenderError::CorruptedImage(e.to_string()))?;
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| RenderError::CorruptedImage(e.to_string()))?;

    Ok(ImageInfo {
        width,
        height,
        orientation,
        density: 1.0,
    })
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, RenderError> {
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| RenderError::CorruptedImage(e.to_string()))?;

    reader
        .decode()
        .map_err(|e| RenderError::CorruptedImage(e.to_string()))
}

fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply an EXIF orientation transformation to a decoded image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encode a small RGBA test image as PNG bytes.
    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let buf = image::RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        });
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(buf)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_valid_png() {
        let bytes = png_bytes(8, 5);
        let img = decode(&bytes).unwrap();
        assert_eq!(img.width, 8);
        assert_eq!(img.height, 5);
        assert_eq!(img.pixels.len(), 8 * 5 * 4);
    }

    #[test]
    fn test_decode_no_orientation() {
        let bytes = png_bytes(3, 3);
        let img = decode_no_orientation(&bytes).unwrap();
        assert_eq!(img.width, 3);
        assert_eq!(img.height, 3);
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result = decode(&[0x00, 0x01, 0x02, 0x03]);
        match result {
            Err(RenderError::CorruptedImage(_)) => {}
            other => panic!("Expected CorruptedImage error, got: {other:?}"),
        }
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = png_bytes(8, 8);
        assert!(decode(&bytes[0..20]).is_err());
    }

    #[test]
    fn test_orientation_of_no_exif() {
        // PNGs written by the image crate carry no EXIF block.
        let bytes = png_bytes(2, 2);
        assert_eq!(orientation_of(&bytes), Orientation::Normal);
    }

    #[test]
    fn test_orientation_of_invalid_data() {
        assert_eq!(orientation_of(&[0x00, 0x01, 0x02]), Orientation::Normal);
    }

    #[test]
    fn test_apply_orientation_rotate90_swaps_dimensions() {
        let buf = image::RgbaImage::from_pixel(2, 1, image::Rgba([255, 0, 0, 255]));
        let img = DynamicImage::ImageRgba8(buf);

        let result = apply_orientation(img, Orientation::Rotate90CW);
        assert_eq!(result.into_rgba8().dimensions(), (1, 2));
    }

    #[test]
    fn test_apply_orientation_rotate180_reverses_pixels() {
        let mut buf = image::RgbaImage::new(2, 1);
        buf.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        buf.put_pixel(1, 0, image::Rgba([0, 255, 0, 255]));
        let img = DynamicImage::ImageRgba8(buf);

        let result = apply_orientation(img, Orientation::Rotate180).into_rgba8();
        assert_eq!(result.get_pixel(0, 0).0, [0, 255, 0, 255]);
        assert_eq!(result.get_pixel(1, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_info_of_reads_header_dimensions() {
        let bytes = png_bytes(24, 10);
        let info = info_of(&bytes).unwrap();

        assert_eq!(info.width, 24);
        assert_eq!(info.height, 10);
        assert_eq!(info.orientation, Orientation::Normal);
        assert_eq!(info.density, 1.0);
    }

    #[test]
    fn test_info_of_invalid_bytes() {
        assert!(matches!(
            info_of(&[0x00, 0x01, 0x02, 0x03]),
            Err(RenderError::CorruptedImage(_))
        ));
    }

    #[test]
    fn test_info_density_drives_point_space_crop() {
        // A 2x-density asset: 32x16 pixels is 16x8 points. A point-space
        // center crop computed from the info lands on the right pixels.
        let bytes = png_bytes(32, 16);
        let img = decode(&bytes).unwrap();

        let mut info = info_of(&bytes).unwrap();
        info.density = 2.0;
        assert_eq!(info.oriented_size(), pixfit_geometry::Size::new(16.0, 8.0));

        let rect = pixfit_geometry::crop_rect(
            info.oriented_size(),
            pixfit_geometry::Size::new(8.0, 8.0),
            pixfit_geometry::Anchor::CENTER,
        );
        let out = crate::ops::crop_to(&img, rect, info.density);
        assert_eq!((out.width, out.height), (16, 16));
        // Crop starts at pixel x = 8: red channel there encodes x % 256
        assert_eq!(out.pixels[0], 8);
    }

    #[test]
    fn test_decode_on_worker_thread() {
        // Decode is a pure function of its bytes; result handoff across
        // threads is plain value movement.
        let bytes = png_bytes(16, 16);
        let handle = std::thread::spawn(move || decode(&bytes).unwrap());
        let img = handle.join().unwrap();
        assert_eq!(img.width, 16);
        assert_eq!(img.height, 16);
    }
}

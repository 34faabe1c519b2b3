//! Pixel cropping from point-space crop rectangles.

use pixfit_geometry::{crop_rect, Anchor, Rect, Size};

use crate::types::PixelImage;

/// Crop an image to a point-space rectangle.
///
/// `density` is the image's pixel-density factor (pixels per point);
/// the rectangle is uniformly scaled by it before touching pixel data.
/// The scaled rectangle is intersected with the pixel bounds, so any
/// rectangle is accepted. The output is at least 1x1.
pub fn crop_to(image: &PixelImage, rect: Rect, density: f64) -> PixelImage {
    let bounds = Rect::from_size(image.size());
    let px_rect = rect.scaled(density).intersect(&bounds);

    let px_left = (px_rect.x.round() as u32).min(image.width.saturating_sub(1));
    let px_top = (px_rect.y.round() as u32).min(image.height.saturating_sub(1));
    let px_right = ((px_rect.max_x().round()) as u32).min(image.width);
    let px_bottom = ((px_rect.max_y().round()) as u32).min(image.height);

    // Ensure minimum dimensions
    let out_width = px_right.saturating_sub(px_left).max(1);
    let out_height = px_bottom.saturating_sub(px_top).max(1);

    // Fast path: full-bounds crop returns a clone
    if px_left == 0 && px_top == 0 && out_width == image.width && out_height == image.height {
        return image.clone();
    }

    let mut output = vec![0u8; (out_width * out_height * 4) as usize];

    // Copy pixel data row by row
    for y in 0..out_height {
        let src_y = px_top + y;
        let src_row_start = ((src_y * image.width + px_left) * 4) as usize;
        let dst_row_start = (y * out_width * 4) as usize;
        let row_len = (out_width * 4) as usize;

        output[dst_row_start..dst_row_start + row_len]
            .copy_from_slice(&image.pixels[src_row_start..src_row_start + row_len]);
    }

    PixelImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}

/// Crop a window of `desired` pixels out of an image, aligned by
/// `anchor`.
///
/// The window placement comes from [`crop_rect`] against the pixel
/// dimensions; near the edges the output is smaller than `desired`,
/// exactly as the policy documents.
pub fn crop_anchored(image: &PixelImage, desired: Size, anchor: Anchor) -> PixelImage {
    let rect = crop_rect(image.size(), desired, anchor);
    crop_to(image, rect, 1.0)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

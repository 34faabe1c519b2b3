//! Pixel resizing through the fit policy.

use pixfit_geometry::{fit_size, FitMode, Size};

use crate::error::RenderError;
use crate::types::{FilterType, PixelImage};

/// Resize an image into `desired` pixels according to `mode`.
///
/// The target dimensions come from [`fit_size`]: `FitMode::None`
/// stretches to `desired` exactly, `AspectFit` letterboxes within it,
/// `AspectFill` covers it (the result then overflows `desired` and is
/// expected to be cropped, e.g. via [`crate::ops::crop_anchored`]).
///
/// # Errors
///
/// Returns `RenderError::ZeroTarget` when `desired` has a zero
/// dimension and `RenderError::NoPixelBacking` when the pixel buffer
/// does not match its dimensions.
pub fn resize_to(
    image: &PixelImage,
    desired: Size,
    mode: FitMode,
    filter: FilterType,
) -> Result<PixelImage, RenderError> {
    if desired.is_degenerate() {
        return Err(RenderError::ZeroTarget);
    }

    let target = fit_size(image.size(), desired, mode);
    let width = (target.width.round() as u32).max(1);
    let height = (target.height.round() as u32).max(1);

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgba = image.to_rgba_image().ok_or(RenderError::NoPixelBacking)?;
    let resized = image::imageops::resize(&rgba, width, height, filter.to_image_filter());

    Ok(PixelImage::from_rgba_image(resized))
}

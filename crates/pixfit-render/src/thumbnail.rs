//! One-call thumbnail rendering: fill-resize, anchored crop, optional
//! rounded corners.

use pixfit_geometry::{Anchor, FitMode, RadiusSpec, Size};
use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::ops::{crop_anchored, resize_to, round_corners};
use crate::types::{FilterType, PixelImage};

/// Parameters for [`render_thumbnail`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThumbnailSpec {
    /// Target size in pixels.
    pub size: Size,
    /// Which part of the source survives the crop.
    pub anchor: Anchor,
    /// Corner rounding; `None` leaves the image rectangular.
    pub radius: Option<RadiusSpec>,
    /// Resampling filter.
    pub filter: FilterType,
}

impl Default for ThumbnailSpec {
    fn default() -> Self {
        Self {
            size: Size::new(256.0, 256.0),
            anchor: Anchor::CENTER,
            radius: None,
            filter: FilterType::Bilinear,
        }
    }
}

/// Render a thumbnail of `image` per `spec`.
///
/// The source is aspect-fill resized to cover `spec.size`, the overflow
/// is cropped away at `spec.anchor`, and corners are masked when a
/// radius is given. The result matches `spec.size` (rounded to whole
/// pixels) for any non-degenerate source.
pub fn render_thumbnail(
    image: &PixelImage,
    spec: &ThumbnailSpec,
) -> Result<PixelImage, RenderError> {
    let covered = resize_to(image, spec.size, FitMode::AspectFill, spec.filter)?;
    let cropped = crop_anchored(&covered, spec.size, spec.anchor);

    Ok(match spec.radius {
        Some(radius) => round_corners(&cropped, radius),
        None => cropped,
    })
}

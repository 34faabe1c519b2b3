//! Rounded-corner masking via the alpha channel.

use std::ops::Range;

use pixfit_geometry::RadiusSpec;

use crate::types::PixelImage;

/// Apply a rounded-rectangle alpha mask to an image.
///
/// The radius spec is resolved against the image's pixel size, then
/// clamped to half the shorter side so an oversized spec degrades to a
/// capsule shape instead of a self-intersecting path. That clamp is
/// this renderer's policy; the geometry resolution itself applies none.
///
/// Coverage is computed per pixel in the four corner squares only, with
/// a 1px antialiased edge on the arc. A resolved radius of zero or less
/// returns the image unchanged.
pub fn round_corners(image: &PixelImage, spec: RadiusSpec) -> PixelImage {
    let mut img = image.clone();
    let (w, h) = (img.width, img.height);
    if w == 0 || h == 0 {
        return img;
    }

    let resolved = spec.resolve(img.size());
    let max_radius = f64::from(w.min(h)) / 2.0;
    let radius = resolved.min(max_radius);
    if radius <= 0.0 {
        return img;
    }

    let r = radius.ceil() as u32;
    let outer = radius;
    let inner = (radius - 1.0).max(0.0);
    let outer2 = outer * outer;
    let inner2 = inner * inner;

    // Corner regions are clipped at the midlines so they stay disjoint
    // even when the corner squares would overlap (odd dimensions at
    // maximum radius); no pixel is ever ramped twice.
    let x_split = w.div_ceil(2);
    let y_split = h.div_ceil(2);
    let left = 0..r.min(x_split);
    let right = w.saturating_sub(r).max(x_split)..w;
    let top = 0..r.min(y_split);
    let bottom = h.saturating_sub(r).max(y_split)..h;

    let mut mask_corner = |xs: Range<u32>, ys: Range<u32>, cx: f64, cy: f64| {
        for y in ys {
            for x in xs.clone() {
                let dx = (f64::from(x) + 0.5) - cx;
                let dy = (f64::from(y) + 0.5) - cy;
                let d2 = dx * dx + dy * dy;

                if d2 <= inner2 {
                    continue; // fully inside the arc
                }

                let idx = ((y * w + x) * 4 + 3) as usize;
                if d2 >= outer2 {
                    img.pixels[idx] = 0;
                } else {
                    // Linear ramp between inner and outer radii
                    let t = ((outer - d2.sqrt()) / (outer - inner)).clamp(0.0, 1.0);
                    let a = f64::from(img.pixels[idx]) * t;
                    img.pixels[idx] = a.round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    };

    let rf = radius;
    // Top-left
    mask_corner(left.clone(), top.clone(), rf, rf);
    // Top-right
    mask_corner(right.clone(), top, f64::from(w) - rf, rf);
    // Bottom-left
    mask_corner(left, bottom.clone(), rf, f64::from(h) - rf);
    // Bottom-right
    mask_corner(right, bottom, f64::from(w) - rf, f64::from(h) - rf);

    img
}

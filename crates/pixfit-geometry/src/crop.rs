//! Crop policy: position a crop window inside a source by a fractional
//! anchor and clip it to the source bounds.

use crate::size::{Anchor, Rect, Size};

/// Compute the crop rectangle of `desired` size within `source`,
/// aligned by `anchor`.
///
/// The anchor is clamped into [0, 1] per component. The candidate
/// window is placed so the anchor point of the window coincides with
/// the same fractional point of the source bounds: an anchor of
/// (0.5, 0.5) centers the window, (0, 0) pins it to the top-left,
/// (1, 1) to the bottom-right.
///
/// The candidate is then intersected with the source bounds, so the
/// result may be smaller than `desired` when the window would extend
/// past an edge. Callers must not assume the output size equals
/// `desired` exactly.
///
/// The result is in the same point space as the inputs; apply
/// [`Rect::scaled`] with the image's pixel-density factor before
/// indexing actual pixel data.
pub fn crop_rect(source: Size, desired: Size, anchor: Anchor) -> Rect {
    let anchor = anchor.clamped();
    let x = anchor.x * source.width - anchor.x * desired.width;
    let y = anchor.y * source.height - anchor.y * desired.height;
    let candidate = Rect::new(x, y, desired.width, desired.height);
    candidate.intersect(&Rect::from_size(source))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

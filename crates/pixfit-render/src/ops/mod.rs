//! Pixel operations driven by the geometry policies: resize, crop, and
//! rounded-corner masking.

mod crop;
mod resize;
mod round;

pub use crop::{crop_anchored, crop_to};
pub use resize::resize_to;
pub use round::round_corners;

//! Pixfit Geometry - sizing math for image fitting
//!
//! This crate holds the pure, platform-independent half of Pixfit:
//! aspect-ratio-aware resize, anchor-based crop-rectangle computation,
//! and corner-radius resolution. Everything here is a total function of
//! its numeric inputs; there is no pixel data, no I/O, and no shared
//! state, so every operation is safe to call from any thread.
//!
//! Pixel-level work (decoding, resampling, masking) lives in
//! `pixfit-render`, which consumes these policies.

pub mod crop;
pub mod fit;
pub mod radius;
pub mod size;

pub use crop::crop_rect;
pub use fit::{fit_size, FitMode};
pub use radius::RadiusSpec;
pub use size::{Anchor, Rect, Size};

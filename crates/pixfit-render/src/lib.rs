//! Pixfit Render - pixel-level image fitting
//!
//! This crate is the rendering half of Pixfit. It owns everything the
//! geometry core deliberately excludes: decoding bytes into pixel
//! buffers, downsampling at a target pixel size, resampling, cropping
//! pixel data, and masking rounded corners. Sizing decisions are
//! delegated to `pixfit-geometry` so they stay testable without any
//! pixel data.
//!
//! # Threading
//!
//! Every function here is synchronous and operates only on its
//! arguments. Decoding and downsampling are safe to run on a worker
//! thread; marshaling results back to a UI-owning thread is the
//! caller's responsibility.

pub mod decode;
pub mod downsample;
pub mod error;
pub mod ops;
pub mod thumbnail;
pub mod types;

pub use decode::{decode, decode_no_orientation, info_of, orientation_of};
pub use downsample::{downsample, downsample_file};
pub use error::RenderError;
pub use ops::{crop_anchored, crop_to, resize_to, round_corners};
pub use thumbnail::{render_thumbnail, ThumbnailSpec};
pub use types::{FilterType, ImageInfo, Orientation, PixelImage};

//! Error taxonomy for rendering operations.

use thiserror::Error;

/// Errors raised by decode, downsample, and resampling operations.
///
/// The geometry policies this crate consumes are total functions and
/// never fail; every failure here comes from pixel I/O.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The byte buffer is not a recognized image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image data is corrupted or incomplete.
    #[error("Corrupted or incomplete image data: {0}")]
    CorruptedImage(String),

    /// A pixel buffer did not match its declared dimensions.
    #[error("Image has no usable pixel backing")]
    NoPixelBacking,

    /// I/O error while reading an image file.
    #[error("I/O error: {0}")]
    Io(String),

    /// A target size with a zero dimension was requested.
    #[error("Target size has a zero dimension")]
    ZeroTarget,
}

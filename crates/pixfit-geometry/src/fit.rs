//! Resize policy: map a source size and a desired size to a target size.

use serde::{Deserialize, Serialize};

use crate::size::Size;

/// How a source size maps into a desired size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FitMode {
    /// Take the desired size verbatim, ignoring the source aspect ratio.
    None,
    /// Scale uniformly so the source fits entirely within the desired
    /// size. The result is at most the desired size on both axes.
    #[default]
    AspectFit,
    /// Scale uniformly so the source covers the desired size entirely.
    /// The result is at least the desired size on both axes; the caller
    /// is expected to crop the overflow.
    AspectFill,
}

/// Compute the target size for resizing `source` into `desired`.
///
/// `AspectFit` applies the smaller of the two axis scale factors
/// (`desired.width / source.width`, `desired.height / source.height`)
/// to both axes; `AspectFill` applies the larger. Both preserve the
/// source aspect ratio.
///
/// A source with a zero dimension cannot produce a finite scale factor;
/// in the aspect modes it yields `desired` verbatim rather than a NaN
/// or infinite size.
pub fn fit_size(source: Size, desired: Size, mode: FitMode) -> Size {
    match mode {
        FitMode::None => desired,
        FitMode::AspectFit | FitMode::AspectFill => {
            if source.is_degenerate() {
                return desired;
            }
            let sx = desired.width / source.width;
            let sy = desired.height / source.height;
            let factor = match mode {
                FitMode::AspectFit => sx.min(sy),
                _ => sx.max(sy),
            };
            source.scaled(factor)
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

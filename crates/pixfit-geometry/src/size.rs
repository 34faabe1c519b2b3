//! Core value types: `Size`, `Rect`, and `Anchor`.
//!
//! All coordinates are in abstract points (not pixels). Converting a
//! point-space rectangle to pixel space is a uniform scale by the
//! image's pixel-density factor via [`Rect::scaled`].

use serde::{Deserialize, Serialize};

/// A width/height pair. Components are non-negative by convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    ///
    /// Returns 1.0 when height is zero. The guard is on height only:
    /// a zero width with a non-zero height yields a ratio of 0.0. This
    /// asymmetry is preserved from the original behavior this port
    /// tracks; callers that need a symmetric guard must add their own.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0.0 {
            return 1.0;
        }
        self.width / self.height
    }

    /// True if either dimension is zero (degenerate for fitting math).
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Uniformly scale both dimensions.
    pub fn scaled(&self, factor: f64) -> Size {
        Size::new(self.width * factor, self.height * factor)
    }
}

/// An axis-aligned rectangle: origin plus size. Origin may be negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin covering `size`.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Uniformly scale origin and size, e.g. points to pixels by the
    /// image's pixel-density factor.
    pub fn scaled(&self, factor: f64) -> Rect {
        Rect::new(
            self.x * factor,
            self.y * factor,
            self.width * factor,
            self.height * factor,
        )
    }

    /// Standard rectangle intersection.
    ///
    /// Disjoint rectangles produce a zero-area rectangle anchored at the
    /// clipped origin; that is a valid (degenerate) result, not an error.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());
        Rect::new(x, y, (max_x - x).max(0.0), (max_y - y).max(0.0))
    }
}

/// A fractional position within a rectangle.
///
/// (0, 0) is the top-left corner, (1, 1) the bottom-right, (0.5, 0.5)
/// the center. Components are clamped into [0, 1] before use, so any
/// finite values may be stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub const TOP_LEFT: Anchor = Anchor { x: 0.0, y: 0.0 };
    pub const CENTER: Anchor = Anchor { x: 0.5, y: 0.5 };
    pub const BOTTOM_RIGHT: Anchor = Anchor { x: 1.0, y: 1.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both components clamped into [0, 1].
    pub fn clamped(&self) -> Anchor {
        Anchor::new(self.x.clamp(0.0, 1.0), self.y.clamp(0.0, 1.0))
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Anchor::CENTER
    }
}

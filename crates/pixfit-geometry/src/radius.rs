//! Corner-radius resolution: symbolic radius specs against a reference size.

use serde::{Deserialize, Serialize};

use crate::size::Size;

/// A symbolic corner radius, resolved against a concrete reference size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RadiusSpec {
    /// An absolute radius in points.
    Points(f64),
    /// A fraction of the reference width.
    WidthFraction(f64),
    /// A fraction of the reference height.
    HeightFraction(f64),
}

impl RadiusSpec {
    /// Resolve to an absolute radius.
    ///
    /// No clamping is applied: a fraction above 1.0 or a point value
    /// larger than half the shorter side resolves as written and will
    /// describe a self-intersecting rounded rect. Renderers decide
    /// their own clamping policy.
    pub fn resolve(&self, reference: Size) -> f64 {
        match *self {
            RadiusSpec::Points(v) => v,
            RadiusSpec::WidthFraction(f) => reference.width * f,
            RadiusSpec::HeightFraction(f) => reference.height * f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_ignores_reference() {
        assert_eq!(RadiusSpec::Points(10.0).resolve(Size::new(300.0, 300.0)), 10.0);
        assert_eq!(RadiusSpec::Points(10.0).resolve(Size::ZERO), 10.0);
    }

    #[test]
    fn test_width_fraction() {
        assert_eq!(
            RadiusSpec::WidthFraction(0.25).resolve(Size::new(400.0, 100.0)),
            100.0
        );
    }

    #[test]
    fn test_height_fraction() {
        assert_eq!(
            RadiusSpec::HeightFraction(0.5).resolve(Size::new(300.0, 300.0)),
            150.0
        );
    }

    #[test]
    fn test_no_clamping_applied() {
        // Out-of-range specs resolve as written; clamping is the
        // renderer's call.
        assert_eq!(
            RadiusSpec::WidthFraction(2.0).resolve(Size::new(100.0, 100.0)),
            200.0
        );
        assert_eq!(
            RadiusSpec::Points(9999.0).resolve(Size::new(10.0, 10.0)),
            9999.0
        );
    }
}

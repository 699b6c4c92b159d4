mod arc;
mod cubic;
mod quadratic;

pub use arc::Arc;
pub use cubic::CubicBezier;
pub use quadratic::QuadraticBezier;

use crate::math::{Point2, Vector2};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// The `[0, 1]` domain shared by all Bézier curves.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Maps a normalized parameter `s` in `[0, 1]` onto this domain.
    #[must_use]
    pub fn lerp(&self, s: f64) -> f64 {
        self.t_min + (self.t_max - self.t_min) * s
    }
}

/// Trait for parametric curves in the plane.
///
/// Evaluation is total: parameters outside [`Curve::domain`] extrapolate
/// rather than fail.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// First derivative with respect to `t`.
    fn derivative(&self, t: f64) -> Vector2;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_maps_unit_interval() {
        let d = CurveDomain::new(2.0, -2.0);
        assert!((d.lerp(0.0) - 2.0).abs() < 1e-12);
        assert!((d.lerp(0.5)).abs() < 1e-12);
        assert!((d.lerp(1.0) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn unit_domain() {
        assert_eq!(CurveDomain::unit(), CurveDomain::new(0.0, 1.0));
    }
}

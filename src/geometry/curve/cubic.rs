use crate::math::bezier_2d::{cubic_derivative, evaluate_cubic};
use crate::math::{Point2, Vector2};

use super::{Curve, CurveDomain};

/// A cubic Bézier segment.
///
/// `p0` and `p3` lie on the curve; `p1` and `p2` steer it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
}

impl CubicBezier {
    /// Creates a new cubic segment from its four control points.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Returns the on-curve start point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.p0
    }

    /// Returns the on-curve end point.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.p3
    }

    /// Returns the control polygon in order.
    #[must_use]
    pub fn control_points(&self) -> [Point2; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }
}

impl Curve for CubicBezier {
    fn evaluate(&self, t: f64) -> Point2 {
        evaluate_cubic(t, &self.p0, &self.p1, &self.p2, &self.p3)
    }

    fn derivative(&self, t: f64) -> Vector2 {
        cubic_derivative(t, &self.p0, &self.p1, &self.p2, &self.p3)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn sample() -> CubicBezier {
        CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(3.0, -1.0),
            Point2::new(4.0, 0.0),
        )
    }

    #[test]
    fn evaluate_midpoint() {
        assert_abs_diff_eq!(sample().evaluate(0.5), Point2::new(2.0, 0.375), epsilon = 1e-12);
    }

    #[test]
    fn endpoints_are_exact() {
        let c = sample();
        assert_eq!(c.evaluate(0.0), c.start());
        assert_eq!(c.evaluate(1.0), c.end());
    }

    #[test]
    fn end_tangents_follow_control_arms() {
        let c = sample();
        assert_abs_diff_eq!(c.derivative(0.0), (c.p1 - c.p0) * 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.derivative(1.0), (c.p3 - c.p2) * 3.0, epsilon = 1e-12);
    }

    #[test]
    fn domain_is_unit() {
        assert_eq!(sample().domain(), CurveDomain::unit());
    }
}

use crate::math::bezier_2d::{evaluate_quadratic, quadratic_derivative};
use crate::math::{Point2, Vector2};

use super::{Curve, CurveDomain};

/// A quadratic Bézier segment with one off-curve control point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
}

impl QuadraticBezier {
    /// Creates a new quadratic segment from its three control points.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2) -> Self {
        Self { p0, p1, p2 }
    }

    /// Returns the on-curve start point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.p0
    }

    /// Returns the on-curve end point.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.p2
    }

    /// Returns the control polygon in order.
    #[must_use]
    pub fn control_points(&self) -> [Point2; 3] {
        [self.p0, self.p1, self.p2]
    }
}

impl Curve for QuadraticBezier {
    fn evaluate(&self, t: f64) -> Point2 {
        evaluate_quadratic(t, &self.p0, &self.p1, &self.p2)
    }

    fn derivative(&self, t: f64) -> Vector2 {
        quadratic_derivative(t, &self.p0, &self.p1, &self.p2)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }
}

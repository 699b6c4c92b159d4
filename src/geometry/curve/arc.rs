use crate::error::{GeometryError, Result};
use crate::math::arc_2d::{arc_point_at, arc_tangent_at};
use crate::math::{Point2, Vector2};
use crate::operations::SegmentArc;

use super::{CubicBezier, Curve, CurveDomain};

/// A circular arc in the plane.
///
/// Sweeps from `start_angle` to `end_angle` (radians). The angles are not
/// normalized: a negative sweep runs clockwise, and a sweep larger than a
/// full turn wraps around the circle more than once.
///
/// The [`Curve`] parameter is the angle itself, so the domain is
/// `[start_angle, end_angle]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point2,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if the radius is not a
    /// positive finite number, or the center or either angle is non-finite.
    pub fn new(center: Point2, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidArgument(format!(
                "arc radius must be positive and finite, got {radius}"
            ))
            .into());
        }
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(GeometryError::InvalidArgument(format!(
                "arc center must be finite, got ({}, {})",
                center.x, center.y
            ))
            .into());
        }
        if !start_angle.is_finite() || !end_angle.is_finite() {
            return Err(GeometryError::InvalidArgument(format!(
                "arc angles must be finite, got {start_angle} .. {end_angle}"
            ))
            .into());
        }

        Ok(Self {
            center,
            radius,
            start_angle,
            end_angle,
        })
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the start angle in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the end angle in radians.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Signed sweep, `end_angle - start_angle`.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Returns the point on the underlying circle at `angle`.
    #[must_use]
    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        arc_point_at(&self.center, self.radius, angle)
    }

    /// Returns the on-curve start point.
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.point_at_angle(self.start_angle)
    }

    /// Returns the on-curve end point.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.point_at_angle(self.end_angle)
    }

    /// Approximates the arc with cubic segments of at most 90° each.
    ///
    /// Shorthand for [`SegmentArc::new`] with default parameters.
    ///
    /// # Errors
    ///
    /// See [`SegmentArc::execute`].
    pub fn to_cubic_beziers(&self) -> Result<Vec<CubicBezier>> {
        SegmentArc::new(*self).execute()
    }
}

impl Curve for Arc {
    fn evaluate(&self, t: f64) -> Point2 {
        self.point_at_angle(t)
    }

    fn derivative(&self, t: f64) -> Vector2 {
        arc_tangent_at(t) * self.radius
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(self.start_angle, self.end_angle)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ArcbezError;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn endpoints_on_circle() {
        let arc = Arc::new(Point2::new(1.0, 1.0), 2.0, 0.0, FRAC_PI_2).unwrap();
        let s = arc.start_point();
        let e = arc.end_point();
        assert!((s - Point2::new(3.0, 1.0)).norm() < 1e-12);
        assert!((e - Point2::new(1.0, 3.0)).norm() < 1e-12);
    }

    #[test]
    fn negative_sweep_is_clockwise() {
        let arc = Arc::new(Point2::origin(), 1.0, PI, 0.0).unwrap();
        assert!((arc.sweep() + PI).abs() < 1e-12);
    }

    #[test]
    fn domain_is_angle_range() {
        let arc = Arc::new(Point2::origin(), 1.0, -1.0, 4.0).unwrap();
        assert_eq!(arc.domain(), CurveDomain::new(-1.0, 4.0));
    }

    #[test]
    fn derivative_scales_with_radius() {
        let arc = Arc::new(Point2::origin(), 3.0, 0.0, PI).unwrap();
        let d = arc.derivative(0.0);
        assert!(d.x.abs() < 1e-12);
        assert!((d.y - 3.0).abs() < 1e-12);
    }

    #[test]
    fn zero_radius_is_invalid() {
        let r = Arc::new(Point2::origin(), 0.0, 0.0, 1.0);
        assert!(matches!(
            r,
            Err(ArcbezError::Geometry(GeometryError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn negative_radius_is_invalid() {
        assert!(Arc::new(Point2::origin(), -2.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn non_finite_inputs_are_invalid() {
        assert!(Arc::new(Point2::origin(), f64::NAN, 0.0, 1.0).is_err());
        assert!(Arc::new(Point2::origin(), f64::INFINITY, 0.0, 1.0).is_err());
        assert!(Arc::new(Point2::new(f64::NAN, 0.0), 1.0, 0.0, 1.0).is_err());
        assert!(Arc::new(Point2::origin(), 1.0, 0.0, f64::INFINITY).is_err());
    }
}

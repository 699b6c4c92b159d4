//! 2D Bézier evaluation in Bernstein form.
//!
//! All functions are total over real `t`: values outside `[0, 1]`
//! extrapolate the curve, and non-finite inputs propagate as non-finite
//! outputs.

use super::{Point2, Vector2};

/// Evaluates a quadratic Bézier at `t`.
///
/// `B(t) = (1-t)^2 P0 + 2(1-t)t P1 + t^2 P2`
#[must_use]
pub fn evaluate_quadratic(t: f64, p0: &Point2, p1: &Point2, p2: &Point2) -> Point2 {
    let mt = 1.0 - t;
    let b0 = mt * mt;
    let b1 = 2.0 * mt * t;
    let b2 = t * t;
    Point2::from(p0.coords * b0 + p1.coords * b1 + p2.coords * b2)
}

/// Evaluates a cubic Bézier at `t`.
///
/// `B(t) = (1-t)^3 P0 + 3(1-t)^2 t P1 + 3(1-t) t^2 P2 + t^3 P3`
#[must_use]
pub fn evaluate_cubic(t: f64, p0: &Point2, p1: &Point2, p2: &Point2, p3: &Point2) -> Point2 {
    let mt = 1.0 - t;
    let b0 = mt * mt * mt;
    let b1 = 3.0 * mt * mt * t;
    let b2 = 3.0 * mt * t * t;
    let b3 = t * t * t;
    Point2::from(p0.coords * b0 + p1.coords * b1 + p2.coords * b2 + p3.coords * b3)
}

/// First derivative of a quadratic Bézier at `t`.
#[must_use]
pub fn quadratic_derivative(t: f64, p0: &Point2, p1: &Point2, p2: &Point2) -> Vector2 {
    ((p1 - p0) * (1.0 - t) + (p2 - p1) * t) * 2.0
}

/// First derivative of a cubic Bézier at `t`.
#[must_use]
pub fn cubic_derivative(t: f64, p0: &Point2, p1: &Point2, p2: &Point2, p3: &Point2) -> Vector2 {
    let mt = 1.0 - t;
    ((p1 - p0) * (mt * mt) + (p2 - p1) * (2.0 * mt * t) + (p3 - p2) * (t * t)) * 3.0
}

//! 2D circular arc math utilities.
//!
//! Angles are radians measured counter-clockwise from the +X axis.
//! A sweep is the signed difference `end_angle - start_angle`:
//! - `sweep > 0`: counter-clockwise arc
//! - `sweep < 0`: clockwise arc

use std::f64::consts::FRAC_PI_2;

use super::{Point2, Vector2};

/// Largest angular span a single cubic segment may cover.
pub const MAX_SEGMENT_SPAN: f64 = FRAC_PI_2;

/// Evaluates the point on a circle at `angle`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, angle: f64) -> Point2 {
    let (sin, cos) = angle.sin_cos();
    center + Vector2::new(cos, sin) * radius
}

/// Unit tangent of a circle at `angle`, pointing towards increasing angle.
///
/// Clockwise arcs keep this direction; the sign of the sweep is carried by
/// [`tangent_length`] instead.
#[must_use]
pub fn arc_tangent_at(angle: f64) -> Vector2 {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(-sin, cos)
}

/// Control-arm length, as a fraction of the radius, for a cubic that
/// approximates a circular arc of the given `sweep`.
///
/// `alpha = (4/3) * tan(sweep / 4)`. The result has the sign of `sweep`.
/// For a quarter turn this is `0.55228...`.
#[must_use]
pub fn tangent_length(sweep: f64) -> f64 {
    4.0 / 3.0 * (sweep / 4.0).tan()
}

/// Number of cubic segments needed so none spans more than
/// [`MAX_SEGMENT_SPAN`]. The value is already rounded up.
///
/// Returns `0.0` for a zero sweep; callers decide how to treat that.
#[must_use]
pub fn segment_count_for_sweep(sweep: f64) -> f64 {
    (sweep.abs() / MAX_SEGMENT_SPAN).ceil()
}

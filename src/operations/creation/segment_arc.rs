use tracing::{debug, trace, warn};

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{Arc, CubicBezier};
use crate::math::arc_2d::{arc_tangent_at, segment_count_for_sweep, tangent_length};
use crate::math::Point2;

/// Largest tolerated ratio between the spacing of doubles at the arc's
/// angle magnitude and the per-segment step.
const MAX_STEP_ROUNDING: f64 = 1e-6;

/// Parameters controlling arc segmentation.
#[derive(Debug, Clone, Copy)]
pub struct SegmentParams {
    /// Upper bound on the number of cubic segments a single arc may produce.
    ///
    /// Sweeps that would need more are reported as
    /// [`GeometryError::NumericDegeneracy`] instead of allocating without
    /// limit. Must be at least 1.
    pub max_segments: usize,
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self {
            max_segments: 65_536,
        }
    }
}

/// Splits a circular arc into cubic Bézier segments of at most 90° each.
///
/// Each segment spans the same signed angle `delta`. Its inner control
/// points sit on the end tangents at `(4/3) * tan(delta / 4) * radius`
/// from the end points, which keeps the radial error of a quarter-turn
/// segment under 0.03% of the radius.
pub struct SegmentArc {
    arc: Arc,
    params: SegmentParams,
}

impl SegmentArc {
    /// Creates a new `SegmentArc` operation with default parameters.
    #[must_use]
    pub fn new(arc: Arc) -> Self {
        Self::with_params(arc, SegmentParams::default())
    }

    /// Creates a new `SegmentArc` operation with explicit parameters.
    #[must_use]
    pub fn with_params(arc: Arc, params: SegmentParams) -> Self {
        Self { arc, params }
    }

    /// Executes the segmentation, returning segments ordered from the
    /// start angle to the end angle.
    ///
    /// Boundary points are computed once and shared, so `p3` of each
    /// segment is bit-identical to `p0` of the next. The last boundary is
    /// the end angle itself.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::InvalidArgument`] if the start and end angles are
    ///   equal.
    /// - [`GeometryError::NumericDegeneracy`] if the sweep needs more than
    ///   `max_segments` segments, or the per-segment step is not large
    ///   against the rounding of angles at the arc's magnitude.
    /// - [`OperationError::InvalidInput`] if `max_segments` is zero.
    #[allow(clippy::float_cmp, clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Vec<CubicBezier>> {
        let arc = &self.arc;
        let start = arc.start_angle();
        let end = arc.end_angle();
        let sweep = arc.sweep();

        if sweep == 0.0 {
            return Err(GeometryError::InvalidArgument(format!(
                "zero-length arc: start and end angle are both {start}"
            ))
            .into());
        }

        let count = self.segment_count(sweep)?;
        let delta = sweep / count as f64;

        // Boundaries `start + i * delta` round to multiples of this spacing.
        let spacing = start.abs().max(end.abs()) * f64::EPSILON;
        if spacing > delta.abs() * MAX_STEP_ROUNDING {
            warn!(start, end, delta, "arc step lost to floating-point precision");
            return Err(GeometryError::NumericDegeneracy(format!(
                "segment span {delta} is not resolvable at angle magnitude {}",
                start.abs().max(end.abs())
            ))
            .into());
        }

        let arm = tangent_length(delta) * arc.radius();
        debug!(sweep, segments = count, delta, "segmenting arc");

        let mut segments = Vec::with_capacity(count);
        let mut theta0 = start;
        let mut p0 = arc.point_at_angle(theta0);
        for i in 1..=count {
            let theta1 = if i == count {
                end
            } else {
                start + i as f64 * delta
            };
            let p3 = arc.point_at_angle(theta1);
            let p1: Point2 = p0 + arc_tangent_at(theta0) * arm;
            let p2: Point2 = p3 - arc_tangent_at(theta1) * arm;
            trace!(index = i - 1, theta0, theta1, "emitting cubic segment");
            segments.push(CubicBezier::new(p0, p1, p2, p3));

            theta0 = theta1;
            p0 = p3;
        }

        Ok(segments)
    }

    /// Number of segments for `sweep`, bounded by `max_segments`.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn segment_count(&self, sweep: f64) -> Result<usize> {
        if self.params.max_segments == 0 {
            return Err(OperationError::InvalidInput(
                "max_segments must be at least 1".to_owned(),
            )
            .into());
        }

        let count = segment_count_for_sweep(sweep);

        let limit = self.params.max_segments as f64;
        if count > limit {
            warn!(sweep, limit = self.params.max_segments, "arc sweep too large to segment");
            return Err(GeometryError::NumericDegeneracy(format!(
                "sweep {sweep} needs {count} segments, limit is {}",
                self.params.max_segments
            ))
            .into());
        }

        Ok((count as usize).max(1))
    }
}

/// Approximates the arc `center`, `radius`, `start_angle..end_angle` with
/// cubic Bézier segments of at most 90° each.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidArgument`] for a non-positive or
/// non-finite radius, non-finite center or angles, or equal angles, and
/// [`GeometryError::NumericDegeneracy`] for sweeps that cannot be split
/// meaningfully.
pub fn segment_arc(
    center: Point2,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> Result<Vec<CubicBezier>> {
    let arc = Arc::new(center, radius, start_angle, end_angle)?;
    SegmentArc::new(arc).execute()
}

use crate::error::{OperationError, Result};
use crate::geometry::{Arc, CubicBezier};
use crate::tessellation::{SamplePath, SampleParams};

/// Measures how far a cubic approximation strays from its arc.
///
/// Returns the largest `| |B(t) - center| - radius |` over all samples of
/// all segments.
pub struct RadialDeviation<'a> {
    arc: &'a Arc,
    segments: &'a [CubicBezier],
    params: SampleParams,
}

impl<'a> RadialDeviation<'a> {
    /// Creates a new `RadialDeviation` query.
    #[must_use]
    pub fn new(arc: &'a Arc, segments: &'a [CubicBezier], params: SampleParams) -> Self {
        Self {
            arc,
            segments,
            params,
        }
    }

    /// Executes the query, returning the maximum radial deviation.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no segments to measure.
    pub fn execute(&self) -> Result<f64> {
        if self.segments.is_empty() {
            return Err(
                OperationError::InvalidInput("no segments to measure".into()).into(),
            );
        }

        let center = self.arc.center();
        let radius = self.arc.radius();
        Ok(SamplePath::new(self.segments, self.params)
            .points()
            .map(|p| ((p - center).norm() - radius).abs())
            .fold(0.0, f64::max))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_8, PI};

    use super::*;
    use crate::error::ArcbezError;
    use crate::geometry::Curve;
    use crate::math::Point2;

    fn measure(arc: &Arc, samples: usize) -> f64 {
        let segs = arc.to_cubic_beziers().unwrap();
        RadialDeviation::new(arc, &segs, SampleParams::new(samples).unwrap())
            .execute()
            .unwrap()
    }

    #[test]
    fn quarter_turn_error_ceiling() {
        let arc = Arc::new(Point2::origin(), 1.0, 0.0, FRAC_PI_2).unwrap();
        let err = measure(&arc, 201);
        assert!(err < 0.003, "err={err}");
        // Known maximum for this constant is about 2.7e-4 of the radius.
        assert!(err > 2.0e-4 && err < 2.8e-4, "err={err}");
    }

    #[test]
    fn error_scales_with_radius() {
        let unit = Arc::new(Point2::origin(), 1.0, 0.0, 1.5 * PI).unwrap();
        let big = Arc::new(Point2::new(4.0, -2.0), 25.0, 0.0, 1.5 * PI).unwrap();
        let ratio = measure(&big, 101) / measure(&unit, 101);
        assert!((ratio - 25.0).abs() < 1e-6, "ratio={ratio}");
    }

    #[test]
    fn shorter_spans_are_more_accurate() {
        let quarter = Arc::new(Point2::origin(), 1.0, 0.0, FRAC_PI_2).unwrap();
        let eighth = Arc::new(Point2::origin(), 1.0, 0.0, 2.0 * FRAC_PI_8).unwrap();
        assert!(measure(&eighth, 101) < measure(&quarter, 101) / 10.0);
    }

    #[test]
    fn quarter_circle_constant_is_not_used_for_other_spans() {
        // A 60° segment built with the 0.5523 quarter-circle arm length would
        // bulge well outside the circle.
        let arc = Arc::new(Point2::origin(), 1.0, 0.0, PI / 3.0).unwrap();
        let segs = arc.to_cubic_beziers().unwrap();
        let arm = (segs[0].p1 - segs[0].p0).norm();
        assert!((arm - 4.0 / 3.0 * (PI / 12.0).tan()).abs() < 1e-12, "arm={arm}");
        let mid = segs[0].evaluate(0.5);
        assert!((mid.coords.norm() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn empty_segments_fail() {
        let arc = Arc::new(Point2::origin(), 1.0, 0.0, 1.0).unwrap();
        let r = RadialDeviation::new(&arc, &[], SampleParams::default()).execute();
        assert!(matches!(
            r,
            Err(ArcbezError::Operation(OperationError::InvalidInput(_)))
        ));
    }
}

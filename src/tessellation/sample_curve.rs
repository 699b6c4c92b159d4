use std::iter::FusedIterator;

use crate::geometry::{Curve, CurveDomain};
use crate::math::Point2;

use super::{sample_parameter, Polyline, SampleParams};

/// Samples a single curve at evenly spaced parameters over its domain.
pub struct SampleCurve<'a, C: Curve> {
    curve: &'a C,
    params: SampleParams,
}

impl<'a, C: Curve> SampleCurve<'a, C> {
    /// Creates a new `SampleCurve` operation.
    #[must_use]
    pub fn new(curve: &'a C, params: SampleParams) -> Self {
        Self { curve, params }
    }

    /// Returns a lazy iterator over the sampled points.
    ///
    /// Each call starts a fresh pass from the first sample.
    #[must_use]
    pub fn points(&self) -> CurveSamples<'a, C> {
        CurveSamples {
            curve: self.curve,
            domain: self.curve.domain(),
            index: 0,
            count: self.params.samples_per_segment(),
        }
    }

    /// Executes the sampling, collecting every point into a polyline.
    #[must_use]
    pub fn execute(&self) -> Polyline {
        self.points().collect()
    }
}

/// Iterator over the samples of one curve, created by [`SampleCurve::points`].
pub struct CurveSamples<'a, C: Curve> {
    curve: &'a C,
    domain: CurveDomain,
    index: usize,
    count: usize,
}

impl<C: Curve> Clone for CurveSamples<'_, C> {
    fn clone(&self) -> Self {
        Self {
            curve: self.curve,
            domain: self.domain,
            index: self.index,
            count: self.count,
        }
    }
}

impl<C: Curve> Iterator for CurveSamples<'_, C> {
    type Item = Point2;

    fn next(&mut self) -> Option<Point2> {
        if self.index >= self.count {
            return None;
        }
        let s = sample_parameter(self.index, self.count);
        self.index += 1;
        Some(self.curve.evaluate(self.domain.lerp(s)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<C: Curve> ExactSizeIterator for CurveSamples<'_, C> {}

impl<C: Curve> FusedIterator for CurveSamples<'_, C> {}

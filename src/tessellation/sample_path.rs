use std::iter::FusedIterator;

use crate::geometry::Curve;
use crate::math::Point2;

use super::{sample_parameter, Polyline, SampleParams};

/// Samples an ordered sequence of curve segments, such as the output of
/// [`SegmentArc`](crate::operations::SegmentArc).
///
/// Every segment contributes `samples_per_segment` points in traversal
/// order. Joints shared between segments are emitted once by each side.
pub struct SamplePath<'a, C: Curve> {
    segments: &'a [C],
    params: SampleParams,
}

impl<'a, C: Curve> SamplePath<'a, C> {
    /// Creates a new `SamplePath` operation.
    #[must_use]
    pub fn new(segments: &'a [C], params: SampleParams) -> Self {
        Self { segments, params }
    }

    /// Returns a lazy iterator over the sampled points.
    ///
    /// Each call starts a fresh pass from the first segment.
    #[must_use]
    pub fn points(&self) -> PathSamples<'a, C> {
        PathSamples {
            segments: self.segments,
            per_segment: self.params.samples_per_segment(),
            segment: 0,
            sample: 0,
        }
    }

    /// Executes the sampling, collecting every point into a polyline.
    #[must_use]
    pub fn execute(&self) -> Polyline {
        self.points().collect()
    }
}

/// Iterator over the samples of a segment sequence, created by
/// [`SamplePath::points`].
pub struct PathSamples<'a, C: Curve> {
    segments: &'a [C],
    per_segment: usize,
    segment: usize,
    sample: usize,
}

impl<C: Curve> Clone for PathSamples<'_, C> {
    fn clone(&self) -> Self {
        Self {
            segments: self.segments,
            per_segment: self.per_segment,
            segment: self.segment,
            sample: self.sample,
        }
    }
}

impl<C: Curve> Iterator for PathSamples<'_, C> {
    type Item = Point2;

    fn next(&mut self) -> Option<Point2> {
        let curve = self.segments.get(self.segment)?;
        let domain = curve.domain();
        let s = sample_parameter(self.sample, self.per_segment);
        let point = curve.evaluate(domain.lerp(s));

        self.sample += 1;
        if self.sample >= self.per_segment {
            self.sample = 0;
            self.segment += 1;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .segments
            .len()
            .saturating_sub(self.segment)
            .saturating_mul(self.per_segment)
            .saturating_sub(self.sample);
        (remaining, Some(remaining))
    }
}

impl<C: Curve> ExactSizeIterator for PathSamples<'_, C> {}

impl<C: Curve> FusedIterator for PathSamples<'_, C> {}

mod sample_curve;
mod sample_path;
mod sample_params;

pub use sample_curve::{CurveSamples, SampleCurve};
pub use sample_path::{PathSamples, SamplePath};
pub use sample_params::SampleParams;

use crate::math::Point2;

/// An ordered run of sampled curve points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the polyline has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first `count` points, clamped to the polyline length.
    ///
    /// Progressive renderers draw `revealed(0)`, `revealed(1)`, ... to show
    /// the curve being traced.
    #[must_use]
    pub fn revealed(&self, count: usize) -> &[Point2] {
        &self.points[..count.min(self.points.len())]
    }
}

impl FromIterator<Point2> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Normalized parameter of sample `index` out of `count`, evenly spaced
/// over `[0, 1]` with both ends included.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn sample_parameter(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    if index + 1 == count {
        return 1.0;
    }
    index as f64 / (count - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_span_unit_interval() {
        assert!(sample_parameter(0, 5).abs() < f64::EPSILON);
        assert!((sample_parameter(2, 5) - 0.5).abs() < f64::EPSILON);
        assert!((sample_parameter(4, 5) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_sample_sits_at_start() {
        assert!(sample_parameter(0, 1).abs() < f64::EPSILON);
    }

    #[test]
    fn revealed_is_clamped_prefix() {
        let line: Polyline = (0..4).map(|i| Point2::new(f64::from(i), 0.0)).collect();
        assert_eq!(line.len(), 4);
        assert!(line.revealed(0).is_empty());
        assert_eq!(line.revealed(2), &line.points[..2]);
        assert_eq!(line.revealed(10).len(), 4);
    }
}

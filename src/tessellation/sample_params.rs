use crate::error::{Result, TessellationError};

/// Sampling density for curve tessellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleParams {
    samples_per_segment: usize,
}

impl SampleParams {
    /// Creates sampling parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples_per_segment` is zero.
    pub fn new(samples_per_segment: usize) -> Result<Self> {
        if samples_per_segment == 0 {
            return Err(TessellationError::InvalidParameters(
                "samples per segment must be at least 1".to_owned(),
            )
            .into());
        }
        Ok(Self {
            samples_per_segment,
        })
    }

    /// Returns the number of samples taken on each curve segment.
    #[must_use]
    pub fn samples_per_segment(&self) -> usize {
        self.samples_per_segment
    }
}

impl Default for SampleParams {
    fn default() -> Self {
        Self {
            samples_per_segment: 50,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ArcbezError;

    #[test]
    fn default_density() {
        assert_eq!(SampleParams::default().samples_per_segment(), 50);
    }

    #[test]
    fn single_sample_is_allowed() {
        assert_eq!(SampleParams::new(1).unwrap().samples_per_segment(), 1);
    }

    #[test]
    fn zero_samples_fails() {
        assert!(matches!(
            SampleParams::new(0),
            Err(ArcbezError::Tessellation(TessellationError::InvalidParameters(_)))
        ));
    }
}

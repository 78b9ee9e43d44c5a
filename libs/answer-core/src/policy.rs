//! Tunable matching parameters.

use crate::error::{GradingError, Result};
use serde::{Deserialize, Serialize};

/// Similarity threshold applied to compacted answers up to `max_len` characters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBand {
    pub max_len: usize,
    pub threshold: f64,
}

impl ThresholdBand {
    pub const fn new(max_len: usize, threshold: f64) -> Self {
        Self { max_len, threshold }
    }
}

/// Matching policy with configurable tolerances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchPolicy {
    /// Largest absolute difference accepted between two single numbers.
    pub numeric_tolerance: f64,
    /// Length bands checked in order; the first band whose `max_len` covers
    /// the longer compacted answer supplies the threshold.
    pub threshold_bands: Vec<ThresholdBand>,
    /// Threshold for answers longer than every band.
    pub fallback_threshold: f64,
    /// ASCII-word candidates this short never get typo tolerance.
    pub short_word_max_len: usize,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            numeric_tolerance: 0.01,
            threshold_bands: vec![
                ThresholdBand::new(3, 1.0),
                ThresholdBand::new(5, 0.8),
                ThresholdBand::new(8, 0.75),
            ],
            fallback_threshold: 0.72,
            short_word_max_len: 3,
        }
    }
}

impl MatchPolicy {
    /// Similarity threshold for a compacted answer length.
    pub fn threshold_for(&self, length: usize) -> f64 {
        self.threshold_bands
            .iter()
            .find(|band| length <= band.max_len)
            .map(|band| band.threshold)
            .unwrap_or(self.fallback_threshold)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.numeric_tolerance.is_finite() || self.numeric_tolerance < 0.0 {
            return Err(GradingError::InvalidTolerance {
                value: self.numeric_tolerance,
            });
        }

        let thresholds = self
            .threshold_bands
            .iter()
            .map(|band| band.threshold)
            .chain(std::iter::once(self.fallback_threshold));
        for value in thresholds {
            if !(0.0..=1.0).contains(&value) {
                return Err(GradingError::InvalidThreshold { value });
            }
        }

        for (index, pair) in self.threshold_bands.windows(2).enumerate() {
            if pair[1].max_len <= pair[0].max_len {
                return Err(GradingError::UnorderedBands {
                    index: index + 1,
                    max_len: pair[1].max_len,
                });
            }
        }

        Ok(())
    }
}

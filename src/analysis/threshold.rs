//! Quality thresholds for generated output.

use super::statistics::OutputStatistics;
use serde::{Deserialize, Serialize};

/// Quality thresholds for output analysis.
///
/// The limits are only meaningful for large samples. Samples smaller
/// than `min_sample_size` are never judged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityThresholds {
    /// Fewest bytes a sample needs before it is judged.
    pub min_sample_size: usize,
    /// Maximum acceptable bit bias (absolute value).
    pub max_bit_bias: f64,
    /// Minimum acceptable variance.
    pub min_variance: f64,
    /// Maximum acceptable autocorrelation (absolute value).
    pub max_autocorrelation: f64,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        // Uniform bytes have variance ~5461
        Self {
            min_sample_size: 1024,
            max_bit_bias: 0.05,
            min_variance: 4000.0,
            max_autocorrelation: 0.2,
        }
    }
}

impl QualityThresholds {
    /// Tighter thresholds for large samples.
    pub fn conservative() -> Self {
        Self {
            min_sample_size: 16 * 1024,
            max_bit_bias: 0.01,
            min_variance: 5000.0,
            max_autocorrelation: 0.05,
        }
    }

    /// Judges a sample, or declines if it is too small.
    pub fn assess(&self, stats: &OutputStatistics) -> Assessment {
        if stats.sample_size < self.min_sample_size {
            return Assessment::Inconclusive {
                sample_size: stats.sample_size,
                required: self.min_sample_size,
            };
        }

        match self.check(stats) {
            Ok(()) => Assessment::Passed,
            Err(violation) => Assessment::Failed(violation),
        }
    }

    /// Checks statistics against the limits, whatever the sample size.
    pub fn check(&self, stats: &OutputStatistics) -> Result<(), ThresholdViolation> {
        if stats.bit_bias.abs() > self.max_bit_bias {
            return Err(ThresholdViolation::BitBias {
                observed: stats.bit_bias,
                threshold: self.max_bit_bias,
            });
        }

        if stats.variance < self.min_variance {
            return Err(ThresholdViolation::LowVariance {
                observed: stats.variance,
                threshold: self.min_variance,
            });
        }

        if stats.autocorrelation.abs() > self.max_autocorrelation {
            return Err(ThresholdViolation::HighAutocorrelation {
                observed: stats.autocorrelation,
                threshold: self.max_autocorrelation,
            });
        }

        Ok(())
    }
}

/// Outcome of [`QualityThresholds::assess`].
#[derive(Debug, Clone)]
pub enum Assessment {
    /// Every statistic is within its limit.
    Passed,
    /// A statistic is out of its limit.
    Failed(ThresholdViolation),
    /// The sample is too small to judge.
    Inconclusive {
        /// Bytes in the sample.
        sample_size: usize,
        /// Bytes needed for a verdict.
        required: usize,
    },
}

impl Assessment {
    /// True only for [`Assessment::Failed`].
    pub fn is_failure(&self) -> bool {
        matches!(self, Assessment::Failed(_))
    }
}

/// Threshold violation types.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ThresholdViolation {
    /// Too many or too few set bits.
    #[error("bit bias {observed:.4} exceeds threshold {threshold:.4}")]
    BitBias {
        /// Measured bias.
        observed: f64,
        /// Configured limit.
        threshold: f64,
    },

    /// Byte values too concentrated.
    #[error("variance {observed:.2} below threshold {threshold:.2}")]
    LowVariance {
        /// Measured variance.
        observed: f64,
        /// Configured limit.
        threshold: f64,
    },

    /// Consecutive bytes track each other.
    #[error("autocorrelation {observed:.4} exceeds threshold {threshold:.4}")]
    HighAutocorrelation {
        /// Measured autocorrelation.
        observed: f64,
        /// Configured limit.
        threshold: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salted_output_passes() {
        let bytes = crate::secure_random_bytes(8192).unwrap();
        let stats = OutputStatistics::analyze(&bytes);
        assert!(matches!(
            QualityThresholds::default().assess(&stats),
            Assessment::Passed
        ));
    }

    #[test]
    fn test_small_os_samples_never_fail() {
        let thresholds = QualityThresholds::default();
        for _ in 0..1000 {
            let bytes = crate::system_random_bytes(32).unwrap();
            let assessment = thresholds.assess(&OutputStatistics::analyze(&bytes));
            assert!(!assessment.is_failure());
            assert!(matches!(
                assessment,
                Assessment::Inconclusive { sample_size: 32, required: 1024 }
            ));
        }
    }

    #[test]
    fn test_minimum_size_sample_is_judged() {
        let stats = OutputStatistics::analyze(&[0xFF; 1024]);
        assert!(matches!(
            QualityThresholds::default().assess(&stats),
            Assessment::Failed(ThresholdViolation::BitBias { .. })
        ));
    }

    #[test]
    fn test_biased_data_fails() {
        let stats = OutputStatistics::analyze(&[0xFF; 1000]);
        assert!(matches!(
            QualityThresholds::default().check(&stats),
            Err(ThresholdViolation::BitBias { .. })
        ));
    }

    #[test]
    fn test_constant_data_fails_variance() {
        // Unbiased bits but a single repeated byte value
        let stats = OutputStatistics::analyze(&[0xAA; 1000]);
        assert!(matches!(
            QualityThresholds::default().check(&stats),
            Err(ThresholdViolation::LowVariance { .. })
        ));
    }

    #[test]
    fn test_ramp_fails_autocorrelation() {
        // Slow ramp: unbiased and spread out, but consecutive bytes track each other
        let data: Vec<u8> = (0..4096u32).map(|i| (i / 16) as u8).collect();
        let stats = OutputStatistics::analyze(&data);
        assert!(matches!(
            QualityThresholds::default().check(&stats),
            Err(ThresholdViolation::HighAutocorrelation { .. })
        ));
    }
}

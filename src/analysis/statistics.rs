//! Statistical tests over byte buffers.
//!
//! These tests are sanity checks to detect obvious problems,
//! not proofs of entropy quality.

/// Statistical test results.
#[derive(Debug, Clone)]
pub struct OutputStatistics {
    /// Bit bias as deviation from 0.5, in [-0.5, 0.5].
    pub bit_bias: f64,
    /// Byte-level variance.
    pub variance: f64,
    /// Lag-1 autocorrelation.
    pub autocorrelation: f64,
    /// Number of bytes analyzed.
    pub sample_size: usize,
}

impl OutputStatistics {
    /// Runs all statistical tests on `data`.
    pub fn analyze(data: &[u8]) -> Self {
        Self {
            bit_bias: Self::compute_bit_bias(data),
            variance: Self::compute_variance(data),
            autocorrelation: Self::compute_autocorrelation(data),
            sample_size: data.len(),
        }
    }

    fn compute_bit_bias(data: &[u8]) -> f64 {
        if data.is_empty() {
            return 0.0;
        }
        let ones: u64 = data.iter().map(|b| u64::from(b.count_ones())).sum();
        let total = (data.len() * 8) as f64;
        (ones as f64 / total) - 0.5
    }

    fn compute_variance(data: &[u8]) -> f64 {
        if data.is_empty() {
            return 0.0;
        }

        let n = data.len() as f64;
        let mean = data.iter().map(|&b| f64::from(b)).sum::<f64>() / n;
        data.iter().map(|&b| (f64::from(b) - mean).powi(2)).sum::<f64>() / n
    }

    /// Correlation between consecutive bytes.
    fn compute_autocorrelation(data: &[u8]) -> f64 {
        if data.len() < 2 {
            return 0.0;
        }

        let n = data.len() as f64;
        let mean = data.iter().map(|&b| f64::from(b)).sum::<f64>() / n;
        let variance: f64 = data.iter().map(|&b| (f64::from(b) - mean).powi(2)).sum();

        if variance == 0.0 {
            return 1.0; // Constant data
        }

        let covariance: f64 = data
            .windows(2)
            .map(|w| (f64::from(w[0]) - mean) * (f64::from(w[1]) - mean))
            .sum();

        covariance / variance
    }
}

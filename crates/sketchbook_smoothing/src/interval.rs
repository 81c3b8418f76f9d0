//! Confidence interval for the mean using Student's t-distribution.

use super::SmoothingError;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::{debug, instrument};

/// Two-sided confidence interval for the mean of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize, Deserialize, new)]
pub struct ConfidenceInterval {
    /// Sample mean.
    mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    std_dev: f64,
    /// Distance from the mean to either bound.
    half_width: f64,
    /// Confidence level, e.g. 0.95.
    level: f64,
}

impl ConfidenceInterval {
    /// Lower bound around the mean.
    pub fn lower(&self) -> f64 {
        self.mean - self.half_width
    }

    /// Upper bound around the mean.
    pub fn upper(&self) -> f64 {
        self.mean + self.half_width
    }
}

/// Computes the `level` confidence interval for the mean of `values`.
///
/// Half-width is `t · s / √n` where `t` is the `(1 + level) / 2` quantile of
/// Student's t with `n - 1` degrees of freedom.
///
/// # Errors
///
/// - `SmoothingError::InsufficientSamples` for fewer than 2 values
/// - `SmoothingError::InvalidConfidence` unless `0 < level < 1`
#[instrument(skip(values), fields(len = values.len()))]
pub fn confidence_interval(
    values: &[f64],
    level: f64,
) -> Result<ConfidenceInterval, SmoothingError> {
    let n = values.len();
    if n < 2 {
        return Err(SmoothingError::InsufficientSamples(n));
    }
    if !(level > 0.0 && level < 1.0) {
        return Err(SmoothingError::InvalidConfidence(level));
    }

    let count = n as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1.0);
    let std_dev = variance.sqrt();

    let t = t_quantile((1.0 + level) / 2.0, count - 1.0)?;
    let half_width = t * std_dev / count.sqrt();
    debug!(mean, std_dev, t, half_width, "Confidence interval computed");

    Ok(ConfidenceInterval::new(mean, std_dev, half_width, level))
}

/// Quantile of the standard Student's t-distribution.
fn t_quantile(p: f64, degrees_of_freedom: f64) -> Result<f64, SmoothingError> {
    let dist = StudentsT::new(0.0, 1.0, degrees_of_freedom)
        .map_err(|e| SmoothingError::Distribution(e.to_string()))?;
    Ok(dist.inverse_cdf(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_t_quantile_matches_tables() {
        assert!((t_quantile(0.975, 99.0).unwrap() - 1.984).abs() < 1e-3);
        assert!((t_quantile(0.975, 4.0).unwrap() - 2.776).abs() < 1e-3);
    }

    #[test]
    fn test_interval_of_known_sample() {
        // mean 3, s = sqrt(2.5)
        let ci = confidence_interval(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.95).unwrap();
        assert!((ci.mean() - 3.0).abs() < 1e-12);
        assert!((ci.std_dev() - 2.5_f64.sqrt()).abs() < 1e-12);
        let expected = 2.776 * 2.5_f64.sqrt() / 5.0_f64.sqrt();
        assert!((ci.half_width() - expected).abs() < 1e-3);
        assert!((ci.upper() - ci.lower() - 2.0 * ci.half_width()).abs() < 1e-12);
    }

    #[test]
    fn test_constant_sample_has_zero_width() {
        let ci = confidence_interval(&[4.0; 10], 0.9).unwrap();
        assert_eq!(*ci.half_width(), 0.0);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            confidence_interval(&[1.0], 0.95),
            Err(SmoothingError::InsufficientSamples(1))
        );
        assert_eq!(
            confidence_interval(&[1.0, 2.0], 1.0),
            Err(SmoothingError::InvalidConfidence(1.0))
        );
    }
}

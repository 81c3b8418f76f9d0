//! Raw samples, their moving average and a confidence band, ready to plot.

use super::interval::{ConfidenceInterval, confidence_interval};
use super::moving_average::moving_average;
use super::SmoothingError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A smoothed view of one noisy series.
///
/// `smoothed_x`, `smoothed`, `lower` and `upper` share one length:
/// `x.len() - window + 1`.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct SmoothedSeries {
    /// Sample positions.
    x: Vec<f64>,
    /// Sample values.
    y: Vec<f64>,
    /// Moving-average window in samples.
    window: usize,
    /// Position of each smoothed value: the mean x of its window.
    smoothed_x: Vec<f64>,
    /// Moving average of `y`.
    smoothed: Vec<f64>,
    /// `smoothed - half_width`.
    lower: Vec<f64>,
    /// `smoothed + half_width`.
    upper: Vec<f64>,
    /// Interval for the mean of `y`.
    interval: ConfidenceInterval,
}

impl SmoothedSeries {
    /// Smooths `y` with a `window`-sample moving average and bands it with
    /// the `level` confidence interval of its mean.
    ///
    /// Each smoothed value is placed at the centre of the window it averages,
    /// so the curve lines up with the data for any window or spacing.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` and `y` differ in length, the window does not
    /// fit, or the interval cannot be computed.
    #[instrument(skip(x, y), fields(samples = y.len()))]
    pub fn build(
        x: Vec<f64>,
        y: Vec<f64>,
        window: usize,
        level: f64,
    ) -> Result<Self, SmoothingError> {
        if x.len() != y.len() {
            return Err(SmoothingError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        let smoothed = moving_average(&y, window)?;
        let smoothed_x = moving_average(&x, window)?;
        let interval = confidence_interval(&y, level)?;

        let half_width = *interval.half_width();
        let lower = smoothed.iter().map(|s| s - half_width).collect();
        let upper = smoothed.iter().map(|s| s + half_width).collect();

        info!(
            window,
            points = smoothed.len(),
            half_width,
            "Smoothed series built"
        );

        Ok(Self {
            x,
            y,
            window,
            smoothed_x,
            smoothed,
            lower,
            upper,
            interval,
        })
    }

    /// Raw samples as `(x, y)` pairs.
    pub fn points(&self) -> Vec<(f64, f64)> {
        pair(&self.x, &self.y)
    }

    /// Moving average as `(x, y)` pairs.
    pub fn smoothed_points(&self) -> Vec<(f64, f64)> {
        pair(&self.smoothed_x, &self.smoothed)
    }

    /// Lower band as `(x, y)` pairs.
    pub fn lower_points(&self) -> Vec<(f64, f64)> {
        pair(&self.smoothed_x, &self.lower)
    }

    /// Upper band as `(x, y)` pairs.
    pub fn upper_points(&self) -> Vec<(f64, f64)> {
        pair(&self.smoothed_x, &self.upper)
    }

    /// Smallest and largest value over the samples and the band.
    pub fn y_bounds(&self) -> (f64, f64) {
        self.y
            .iter()
            .chain(&self.lower)
            .chain(&self.upper)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            })
    }

    /// First and last sample position.
    pub fn x_bounds(&self) -> (f64, f64) {
        let first = self.x.first().copied().unwrap_or_default();
        let last = self.x.last().copied().unwrap_or_default();
        (first, last)
    }
}

fn pair(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter().copied().zip(ys.iter().copied()).collect()
}

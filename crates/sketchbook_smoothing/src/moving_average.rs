//! Uniform moving average in "valid" convolution mode.

use super::SmoothingError;
use tracing::instrument;

/// Averages every full window of `window` consecutive values.
///
/// Output has `values.len() - window + 1` entries; entry `i` is the mean of
/// `values[i..i + window]`. Partial windows at the edges are dropped.
///
/// # Errors
///
/// Returns `SmoothingError::InvalidWindow` if `window` is zero or longer
/// than `values`.
#[instrument(skip(values), fields(len = values.len()))]
pub fn moving_average(values: &[f64], window: usize) -> Result<Vec<f64>, SmoothingError> {
    if window == 0 || window > values.len() {
        return Err(SmoothingError::InvalidWindow {
            window,
            len: values.len(),
        });
    }
    let width = window as f64;
    Ok(values
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / width)
        .collect())
}

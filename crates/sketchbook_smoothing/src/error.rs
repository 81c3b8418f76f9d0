//! Smoothing error types.

/// Error computing a smoothed series.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum SmoothingError {
    /// Window is zero or longer than the data.
    #[display("Window of {} samples does not fit {} data points", window, len)]
    InvalidWindow {
        /// Requested window size.
        window: usize,
        /// Number of data points.
        len: usize,
    },

    /// Too few samples for a sample standard deviation.
    #[display("Need at least 2 samples, got {}", _0)]
    InsufficientSamples(usize),

    /// Confidence level outside the open interval (0, 1).
    #[display("Confidence level {} must lie strictly between 0 and 1", _0)]
    InvalidConfidence(f64),

    /// x and y series differ in length.
    #[display("x has {} samples but y has {}", x_len, y_len)]
    LengthMismatch {
        /// Number of x samples.
        x_len: usize,
        /// Number of y samples.
        y_len: usize,
    },

    /// A distribution rejected its parameters.
    #[display("Distribution error: {}", _0)]
    Distribution(String),
}

impl std::error::Error for SmoothingError {}

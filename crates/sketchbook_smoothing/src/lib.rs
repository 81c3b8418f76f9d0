//! Moving-average smoothing with a confidence band.
//!
//! Generates noisy `sin(x)` samples, smooths them with a uniform moving
//! average and bands the curve with a Student's t confidence interval for
//! the mean.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use sketchbook_smoothing::{SmoothedSeries, linspace, noisy_sine};
//!
//! let x = linspace(0.0, 10.0, 100);
//! let y = noisy_sine(&x, 0.1, &mut StdRng::seed_from_u64(7)).unwrap();
//! let series = SmoothedSeries::build(x, y, 5, 0.95).unwrap();
//! assert_eq!(series.smoothed().len(), 96);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod interval;
mod moving_average;
mod series;
mod signal;

pub use error::SmoothingError;
pub use interval::{ConfidenceInterval, confidence_interval};
pub use moving_average::moving_average;
pub use series::SmoothedSeries;
pub use signal::{linspace, noisy_sine};

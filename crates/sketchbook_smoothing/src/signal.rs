//! Synthetic sample generation.

use super::SmoothingError;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::instrument;

/// Returns `n` evenly spaced samples from `start` to `stop`, both included.
///
/// `n == 1` yields `[start]`; `n == 0` yields nothing.
#[instrument]
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Evaluates `sin(x)` at every sample and adds Gaussian noise.
///
/// # Errors
///
/// Returns `SmoothingError::Distribution` for a negative or non-finite
/// `noise_std`.
#[instrument(skip(x, rng), fields(samples = x.len()))]
pub fn noisy_sine<R: Rng + ?Sized>(
    x: &[f64],
    noise_std: f64,
    rng: &mut R,
) -> Result<Vec<f64>, SmoothingError> {
    let noise =
        Normal::new(0.0, noise_std).map_err(|e| SmoothingError::Distribution(e.to_string()))?;
    Ok(x.iter().map(|xi| xi.sin() + noise.sample(rng)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_linspace_includes_endpoints() {
        let x = linspace(0.0, 10.0, 100);
        assert_eq!(x.len(), 100);
        assert_eq!(x[0], 0.0);
        assert!((x[99] - 10.0).abs() < 1e-12);
        assert!((x[1] - 10.0 / 99.0).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn test_zero_noise_is_pure_sine() {
        let x = linspace(0.0, 3.0, 7);
        let mut rng = StdRng::seed_from_u64(1);
        let y = noisy_sine(&x, 0.0, &mut rng).unwrap();
        for (xi, yi) in x.iter().zip(&y) {
            assert!((xi.sin() - yi).abs() < 1e-12);
        }
    }

    #[test]
    fn test_seeded_noise_is_reproducible() {
        let x = linspace(0.0, 10.0, 50);
        let a = noisy_sine(&x, 0.1, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = noisy_sine(&x, 0.1, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_negative_noise_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = noisy_sine(&[0.0], -1.0, &mut rng);
        assert!(matches!(result, Err(SmoothingError::Distribution(_))));
    }
}

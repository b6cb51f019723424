//! Mean family: arithmetic, geometric, harmonic, quadratic and weighted.

use crate::error::{ensure_same_len, Error, Result};
use crate::math::statistics::to_finite;

/// Arithmetic mean, `Σx / n`.
///
/// ```rust
/// use physica::math::averages::arithmetic_mean;
/// assert_eq!(arithmetic_mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
/// ```
pub fn arithmetic_mean<T: Copy + Into<f64>>(values: &[T]) -> Result<f64> {
    let values = to_finite("values", values)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Geometric mean, `(Πx)^(1/n)`. Every element must be strictly positive.
///
/// Computed through logarithms so long sequences do not overflow the
/// intermediate product.
pub fn geometric_mean<T: Copy + Into<f64>>(values: &[T]) -> Result<f64> {
    let values = to_finite("values", values)?;
    for &v in &values {
        if v <= 0.0 {
            return Err(Error::NotPositive {
                name: "values",
                value: v,
            });
        }
    }
    let log_sum: f64 = values.iter().map(|v| v.ln()).sum();
    Ok((log_sum / values.len() as f64).exp())
}

/// Harmonic mean, `n / Σ(1/x)`. Every element must be strictly positive.
pub fn harmonic_mean<T: Copy + Into<f64>>(values: &[T]) -> Result<f64> {
    let values = to_finite("values", values)?;
    let mut reciprocal_sum = 0.0;
    for &v in &values {
        if v <= 0.0 {
            return Err(Error::NotPositive {
                name: "values",
                value: v,
            });
        }
        reciprocal_sum += 1.0 / v;
    }
    Ok(values.len() as f64 / reciprocal_sum)
}

/// Quadratic mean (root mean square), `sqrt(Σx² / n)`.
pub fn quadratic_mean<T: Copy + Into<f64>>(values: &[T]) -> Result<f64> {
    let values = to_finite("values", values)?;
    let square_sum: f64 = values.iter().map(|v| v * v).sum();
    Ok((square_sum / values.len() as f64).sqrt())
}

/// Weighted arithmetic mean, `Σ(wx) / Σw`.
///
/// Weights must be non-negative with a strictly positive sum, paired
/// one-to-one with the values.
///
/// ```rust
/// use physica::math::averages::weighted_mean;
/// assert_eq!(weighted_mean(&[1.0, 10.0], &[3.0, 1.0]).unwrap(), 3.25);
/// ```
pub fn weighted_mean<T: Copy + Into<f64>>(values: &[T], weights: &[f64]) -> Result<f64> {
    ensure_same_len("values", values, "weights", weights)?;
    let values = to_finite("values", values)?;
    let weights = to_finite("weights", weights)?;
    let mut weight_sum = 0.0;
    let mut weighted_sum = 0.0;
    for (&v, &w) in values.iter().zip(&weights) {
        if w < 0.0 {
            return Err(Error::Negative {
                name: "weights",
                value: w,
            });
        }
        weight_sum += w;
        weighted_sum += w * v;
    }
    if weight_sum <= 0.0 {
        return Err(Error::Undefined(
            "weighted mean is undefined for an all-zero weight sum".to_string(),
        ));
    }
    Ok(weighted_sum / weight_sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn arithmetic_mean_of_integers() {
        assert_eq!(arithmetic_mean(&[2u32, 4, 6]).unwrap(), 4.0);
    }

    #[test]
    fn geometric_mean_known_value() {
        assert_relative_eq!(
            geometric_mean(&[1.0, 4.0, 16.0]).unwrap(),
            4.0,
            max_relative = 1e-12
        );
        assert!(geometric_mean(&[1.0, 0.0]).is_err());
        assert!(geometric_mean(&[1.0, -2.0]).is_err());
    }

    #[test]
    fn harmonic_mean_known_value() {
        // Classic two-speed average: 60 and 30 → 40.
        assert_relative_eq!(
            harmonic_mean(&[60.0, 30.0]).unwrap(),
            40.0,
            max_relative = 1e-12
        );
        assert!(harmonic_mean(&[1.0, 0.0]).is_err());
    }

    #[test]
    fn quadratic_mean_known_value() {
        assert_relative_eq!(
            quadratic_mean(&[3.0, 4.0]).unwrap(),
            (12.5f64).sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn weighted_mean_validation() {
        assert!(weighted_mean(&[1.0, 2.0], &[1.0]).is_err());
        assert!(weighted_mean(&[1.0, 2.0], &[1.0, -1.0]).is_err());
        assert!(weighted_mean(&[1.0, 2.0], &[0.0, 0.0]).is_err());
    }

    #[test]
    fn uniform_weights_reduce_to_arithmetic_mean() {
        let values = [3.0, 5.0, 9.0];
        assert_relative_eq!(
            weighted_mean(&values, &[2.0, 2.0, 2.0]).unwrap(),
            arithmetic_mean(&values).unwrap(),
            max_relative = 1e-12
        );
    }

    proptest! {
        #[test]
        fn prop_mean_inequality_chain(values in proptest::collection::vec(0.1..1e3f64, 1..30)) {
            // harmonic ≤ geometric ≤ arithmetic ≤ quadratic
            let h = harmonic_mean(&values).unwrap();
            let g = geometric_mean(&values).unwrap();
            let a = arithmetic_mean(&values).unwrap();
            let q = quadratic_mean(&values).unwrap();
            let slack = 1e-9 * a.max(1.0);
            prop_assert!(h <= g + slack);
            prop_assert!(g <= a + slack);
            prop_assert!(a <= q + slack);
        }
    }
}

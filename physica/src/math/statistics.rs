//! Descriptive statistics over generic numeric sequences.
//!
//! Every function is generic over `T: Copy + Into<f64>`, the "convertible to
//! a 64-bit float" capability: integers and `f32` samples work directly
//! without the caller pre-converting. Elements are converted once up front
//! and must all be finite; NaN would poison the orderings these statistics
//! rely on.

use crate::error::{ensure_not_empty, Error, Result};

/// Smallest element of the sequence.
///
/// ```rust
/// use physica::math::statistics::min;
/// assert_eq!(min(&[3, 1, 4, 1, 5]).unwrap(), 1.0);
/// ```
pub fn min<T: Copy + Into<f64>>(values: &[T]) -> Result<f64> {
    let values = to_finite("values", values)?;
    Ok(values.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Largest element of the sequence.
pub fn max<T: Copy + Into<f64>>(values: &[T]) -> Result<f64> {
    let values = to_finite("values", values)?;
    Ok(values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Median of the sequence.
///
/// For an odd number of elements this is the middle order statistic; for an
/// even number it is the mean of the two middle order statistics.
///
/// ```rust
/// use physica::math::statistics::median;
/// assert_eq!(median(&[5.0, 1.0, 3.0]).unwrap(), 3.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
/// ```
pub fn median<T: Copy + Into<f64>>(values: &[T]) -> Result<f64> {
    let mut values = to_finite("values", values)?;
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = values.len();
    if n % 2 == 0 {
        Ok((values[n / 2 - 1] + values[n / 2]) / 2.0)
    } else {
        Ok(values[n / 2])
    }
}

/// Population variance (denominator `n`).
pub fn population_variance<T: Copy + Into<f64>>(values: &[T]) -> Result<f64> {
    let values = to_finite("values", values)?;
    Ok(sum_of_squared_deviations(&values) / values.len() as f64)
}

/// Sample variance with Bessel's correction (denominator `n - 1`).
///
/// Undefined for fewer than two samples.
pub fn sample_variance<T: Copy + Into<f64>>(values: &[T]) -> Result<f64> {
    let values = to_finite("values", values)?;
    if values.len() < 2 {
        return Err(Error::Undefined(
            "sample variance needs at least two elements".to_string(),
        ));
    }
    Ok(sum_of_squared_deviations(&values) / (values.len() - 1) as f64)
}

/// Population standard deviation, `sqrt(population_variance)`.
pub fn population_std_dev<T: Copy + Into<f64>>(values: &[T]) -> Result<f64> {
    population_variance(values).map(f64::sqrt)
}

/// Sample standard deviation, `sqrt(sample_variance)`.
pub fn sample_std_dev<T: Copy + Into<f64>>(values: &[T]) -> Result<f64> {
    sample_variance(values).map(f64::sqrt)
}

fn sum_of_squared_deviations(values: &[f64]) -> f64 {
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum()
}

/// Converts a generic sequence to `f64`, rejecting empty input and
/// non-finite elements.
pub(crate) fn to_finite<T: Copy + Into<f64>>(
    name: &'static str,
    values: &[T],
) -> Result<Vec<f64>> {
    ensure_not_empty(name, values)?;
    let converted: Vec<f64> = values.iter().map(|&v| v.into()).collect();
    for &v in &converted {
        if !v.is_finite() {
            return Err(Error::NotFinite { name, value: v });
        }
    }
    Ok(converted)
}

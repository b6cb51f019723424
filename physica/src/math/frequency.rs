//! Frequency analysis: modes, percentiles and quantiles.
//!
//! Percentile and quantile use the inclusive linear-interpolation definition
//! (rank `p/100 · (n − 1)` between the bracketing order statistics) — the
//! same estimator spreadsheets and R's default type 7 produce.

use crate::error::{ensure_in_range, Result};
use crate::math::statistics::to_finite;
use std::collections::HashMap;

/// All values attaining the maximal multiplicity, in ascending order.
///
/// Values are compared exactly (`0.0` and `-0.0` count as the same value).
/// A sequence where every value occurs once is "all modes": every distinct
/// value comes back.
///
/// ```rust
/// use physica::math::frequency::modes;
/// assert_eq!(modes(&[1.0, 2.0, 2.0, 3.0, 3.0]).unwrap(), vec![2.0, 3.0]);
/// assert_eq!(modes(&[7.0, 7.0, 1.0]).unwrap(), vec![7.0]);
/// ```
pub fn modes<T: Copy + Into<f64>>(values: &[T]) -> Result<Vec<f64>> {
    let values = to_finite("values", values)?;
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for &v in &values {
        // Fold -0.0 into 0.0 so the two zeros count as one value.
        let normalized = if v == 0.0 { 0.0f64 } else { v };
        *counts.entry(normalized.to_bits()).or_insert(0) += 1;
    }
    let top = counts.values().copied().max().unwrap_or(0);
    let mut result: Vec<f64> = counts
        .into_iter()
        .filter(|&(_, count)| count == top)
        .map(|(bits, _)| f64::from_bits(bits))
        .collect();
    result.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    Ok(result)
}

/// The `p`-th percentile, `p` in `[0, 100]`, by inclusive linear
/// interpolation.
///
/// ```rust
/// use physica::math::frequency::percentile;
/// let data = [15.0, 20.0, 35.0, 40.0, 50.0];
/// assert_eq!(percentile(&data, 50.0).unwrap(), 35.0);
/// assert_eq!(percentile(&data, 25.0).unwrap(), 20.0);
/// assert_eq!(percentile(&data, 100.0).unwrap(), 50.0);
/// ```
pub fn percentile<T: Copy + Into<f64>>(values: &[T], p: f64) -> Result<f64> {
    ensure_in_range("p", p, 0.0, 100.0)?;
    let mut values = to_finite("values", values)?;
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    Ok(interpolate_rank(&values, p / 100.0 * (values.len() - 1) as f64))
}

/// The `q`-quantile, `q` in `[0, 1]`. Same estimator as [`percentile`].
pub fn quantile<T: Copy + Into<f64>>(values: &[T], q: f64) -> Result<f64> {
    ensure_in_range("q", q, 0.0, 1.0)?;
    let mut values = to_finite("values", values)?;
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    Ok(interpolate_rank(&values, q * (values.len() - 1) as f64))
}

fn interpolate_rank(sorted: &[f64], rank: f64) -> f64 {
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let fraction = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn single_mode() {
        assert_eq!(modes(&[1, 2, 2, 3]).unwrap(), vec![2.0]);
    }

    #[test]
    fn uniform_data_returns_every_value() {
        assert_eq!(modes(&[3.0, 1.0, 2.0]).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn negative_zero_counts_with_positive_zero() {
        assert_eq!(modes(&[-0.0, 0.0, 1.0]).unwrap(), vec![0.0]);
    }

    #[test]
    fn percentile_interpolates_between_order_statistics() {
        let data = [1.0, 2.0, 3.0, 4.0];
        // rank = 0.9 · 3 = 2.7 → between 3.0 and 4.0
        assert_relative_eq!(percentile(&data, 90.0).unwrap(), 3.7, max_relative = 1e-12);
        assert_eq!(percentile(&data, 0.0).unwrap(), 1.0);
        assert_eq!(percentile(&data, 100.0).unwrap(), 4.0);
    }

    #[test]
    fn percentile_range_is_enforced() {
        assert!(percentile(&[1.0], -0.1).is_err());
        assert!(percentile(&[1.0], 100.1).is_err());
        assert!(quantile(&[1.0], 1.5).is_err());
    }

    #[test]
    fn quantile_matches_percentile() {
        let data = [9.0, 4.0, 7.0, 1.0, 5.0];
        assert_eq!(
            quantile(&data, 0.25).unwrap(),
            percentile(&data, 25.0).unwrap()
        );
    }

    #[test]
    fn median_is_the_half_quantile() {
        let data = [4.0, 1.0, 3.0, 2.0];
        assert_eq!(
            quantile(&data, 0.5).unwrap(),
            crate::math::statistics::median(&data).unwrap()
        );
    }

    proptest! {
        #[test]
        fn prop_percentile_is_monotone(
            values in proptest::collection::vec(-1e6..1e6f64, 1..40),
            a in 0.0..100.0f64,
            b in 0.0..100.0f64,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                percentile(&values, lo).unwrap() <= percentile(&values, hi).unwrap() + 1e-9
            );
        }

        #[test]
        fn prop_percentile_within_data_range(
            values in proptest::collection::vec(-1e6..1e6f64, 1..40),
            p in 0.0..100.0f64,
        ) {
            let v = percentile(&values, p).unwrap();
            let lo = crate::math::statistics::min(&values).unwrap();
            let hi = crate::math::statistics::max(&values).unwrap();
            prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9);
        }
    }
}

//! Real n-th roots: a direct form with a documented NaN contract, a safe
//! form that errors instead, and a Newton–Raphson iteration.

use crate::error::{ensure_finite, ensure_positive, Error, Result};

/// Default convergence tolerance for [`newton_nth_root`].
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default iteration cap for [`newton_nth_root`].
pub const DEFAULT_MAX_ITERATIONS: u32 = 64;

/// Real `degree`-th root of `radicand`.
///
/// An even-degree root of a negative radicand has no real value; this
/// function returns NaN for that case (documented contract — use
/// [`safe_nth_root`] for an error instead). An odd-degree root of a negative
/// radicand is the negative real root.
///
/// ```rust
/// use physica::math::roots::nth_root;
/// assert_eq!(nth_root(27.0, 3).unwrap(), 3.0);
/// assert_eq!(nth_root(-27.0, 3).unwrap(), -3.0);
/// assert!(nth_root(-16.0, 2).unwrap().is_nan());
/// ```
pub fn nth_root(radicand: f64, degree: u32) -> Result<f64> {
    ensure_finite("radicand", radicand)?;
    ensure_degree(degree)?;
    if radicand < 0.0 {
        if degree % 2 == 0 {
            return Ok(f64::NAN);
        }
        return Ok(-(-radicand).powf(1.0 / degree as f64));
    }
    Ok(radicand.powf(1.0 / degree as f64))
}

/// Real `degree`-th root of `radicand`, failing where no real root exists.
///
/// ```rust
/// use physica::math::roots::safe_nth_root;
/// assert_eq!(safe_nth_root(-8.0, 3).unwrap(), -2.0);
/// assert!(safe_nth_root(-8.0, 2).is_err());
/// ```
pub fn safe_nth_root(radicand: f64, degree: u32) -> Result<f64> {
    ensure_finite("radicand", radicand)?;
    ensure_degree(degree)?;
    if radicand < 0.0 && degree % 2 == 0 {
        return Err(Error::Undefined(format!(
            "no real root of degree {degree} for negative radicand {radicand}"
        )));
    }
    nth_root(radicand, degree)
}

/// Newton–Raphson iteration for the real `degree`-th root.
///
/// Seeds at `max(|radicand|, 1)` and steps
/// `y ← ((degree − 1)·y + radicand / y^(degree−1)) / degree` until the step
/// falls below `tolerance` or `max_iterations` is reached. Cap exhaustion is
/// not an error: the best estimate so far is returned (best-effort
/// contract). Only argument validation can fail.
///
/// `tolerance` must be finite and strictly positive; `max_iterations` at
/// least 1. An even-degree root of a negative radicand is rejected like in
/// [`safe_nth_root`].
///
/// ```rust
/// use physica::math::roots::{newton_nth_root, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
/// let root = newton_nth_root(2.0, 2, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn newton_nth_root(
    radicand: f64,
    degree: u32,
    tolerance: f64,
    max_iterations: u32,
) -> Result<f64> {
    ensure_finite("radicand", radicand)?;
    ensure_degree(degree)?;
    ensure_positive("tolerance", tolerance)?;
    if max_iterations == 0 {
        return Err(Error::NotPositive {
            name: "max_iterations",
            value: 0.0,
        });
    }
    if radicand < 0.0 && degree % 2 == 0 {
        return Err(Error::Undefined(format!(
            "no real root of degree {degree} for negative radicand {radicand}"
        )));
    }
    if radicand == 0.0 {
        return Ok(0.0);
    }

    // Iterate on the magnitude; odd-degree roots of negatives follow by
    // sign symmetry.
    let magnitude = radicand.abs();
    let n = degree as f64;
    let mut estimate = magnitude.max(1.0);
    for iteration in 0..max_iterations {
        let previous = estimate;
        estimate = ((n - 1.0) * estimate + magnitude / estimate.powi(degree as i32 - 1)) / n;
        log::trace!(
            "newton_nth_root: iteration {iteration}, estimate {estimate}, step {}",
            (estimate - previous).abs()
        );
        if (estimate - previous).abs() < tolerance {
            break;
        }
    }
    Ok(estimate.copysign(radicand))
}

fn ensure_degree(degree: u32) -> Result<u32> {
    if degree == 0 {
        return Err(Error::NotPositive {
            name: "degree",
            value: 0.0,
        });
    }
    Ok(degree)
}

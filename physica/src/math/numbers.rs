//! Number-set predicates with an explicit epsilon tolerance.
//!
//! Floating-point data rarely hits integers exactly, so each predicate takes
//! the tolerance it should apply. The tolerance itself is validated (finite,
//! non-negative); a non-finite *subject* value is not an error — it is simply
//! not an integer, not natural and not between any bounds, matching IEEE
//! comparison semantics.

use crate::error::{ensure_finite, ensure_tolerance, Result};

/// Whether `a` and `b` differ by at most `tolerance`.
///
/// ```rust
/// use physica::math::numbers::approx_eq;
/// assert!(approx_eq(0.1 + 0.2, 0.3, 1e-12).unwrap());
/// assert!(!approx_eq(0.1, 0.2, 1e-12).unwrap());
/// ```
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> Result<bool> {
    ensure_tolerance("tolerance", tolerance)?;
    if !a.is_finite() || !b.is_finite() {
        return Ok(false);
    }
    Ok((a - b).abs() <= tolerance)
}

/// Whether `value` is within `tolerance` of some integer.
pub fn is_integer(value: f64, tolerance: f64) -> Result<bool> {
    ensure_tolerance("tolerance", tolerance)?;
    if !value.is_finite() {
        return Ok(false);
    }
    Ok((value - value.round()).abs() <= tolerance)
}

/// Whether `value` is within `tolerance` of a natural number (0, 1, 2, ...).
pub fn is_natural(value: f64, tolerance: f64) -> Result<bool> {
    Ok(is_integer(value, tolerance)? && value.round() >= 0.0)
}

/// Whether `value` is within `tolerance` of an even integer.
///
/// ```rust
/// use physica::math::numbers::is_even;
/// assert!(is_even(4.0 + 1e-12, 1e-9).unwrap());
/// assert!(!is_even(3.0, 1e-9).unwrap());
/// ```
pub fn is_even(value: f64, tolerance: f64) -> Result<bool> {
    if !is_integer(value, tolerance)? {
        return Ok(false);
    }
    Ok(value.round() % 2.0 == 0.0)
}

/// Whether `value` is within `tolerance` of an odd integer.
pub fn is_odd(value: f64, tolerance: f64) -> Result<bool> {
    if !is_integer(value, tolerance)? {
        return Ok(false);
    }
    Ok(value.round() % 2.0 != 0.0)
}

/// Whether `value` lies in the closed interval spanned by `bound_a` and
/// `bound_b`, widened by `tolerance` on both sides.
///
/// The bounds may be given in either order.
///
/// ```rust
/// use physica::math::numbers::is_between;
/// assert!(is_between(5.0, 10.0, 0.0, 0.0).unwrap());
/// assert!(is_between(10.000001, 0.0, 10.0, 1e-3).unwrap());
/// ```
pub fn is_between(value: f64, bound_a: f64, bound_b: f64, tolerance: f64) -> Result<bool> {
    ensure_tolerance("tolerance", tolerance)?;
    ensure_finite("bound_a", bound_a)?;
    ensure_finite("bound_b", bound_b)?;
    if !value.is_finite() {
        return Ok(false);
    }
    let lo = bound_a.min(bound_b);
    let hi = bound_a.max(bound_b);
    Ok(value >= lo - tolerance && value <= hi + tolerance)
}

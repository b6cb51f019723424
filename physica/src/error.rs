//! Error types for formula evaluation.
//!
//! Every fallible function in this crate reports why it rejected its
//! arguments through the single [`Error`] enum. Failures are local to the
//! call: there is no retry, no partial result and no global error state.
//! Messages always name the offending parameter so the caller can tell
//! which precondition was violated.

/// Result type for formula evaluation.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type describing why a formula rejected its arguments.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A parameter that must be a finite number was NaN or infinite.
    #[error("`{name}` must be finite, got {value}")]
    NotFinite {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A physically non-negative parameter (mass, radius, coefficient, ...)
    /// was negative.
    #[error("`{name}` must be non-negative, got {value}")]
    Negative {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A parameter that must be strictly positive was zero or negative.
    #[error("`{name}` must be positive, got {value}")]
    NotPositive {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A parameter used as a divisor was zero.
    #[error("`{name}` must not be zero")]
    ZeroDivisor {
        /// Name of the offending parameter.
        name: &'static str,
    },

    /// A sequence parameter contained no elements.
    #[error("`{name}` must not be empty")]
    EmptyInput {
        /// Name of the offending parameter.
        name: &'static str,
    },

    /// Two paired sequences had different lengths.
    #[error("`{left}` and `{right}` must have the same length ({left_len} vs {right_len})")]
    LengthMismatch {
        /// Name of the first sequence.
        left: &'static str,
        /// Name of the second sequence.
        right: &'static str,
        /// Length of the first sequence.
        left_len: usize,
        /// Length of the second sequence.
        right_len: usize,
    },

    /// A parameter lay outside its closed range.
    #[error("`{name}` must be within [{min}, {max}], got {value}")]
    OutOfRange {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Lower bound of the accepted range.
        min: f64,
        /// Upper bound of the accepted range.
        max: f64,
    },

    /// An integer input would overflow the 64-bit result.
    #[error("`{name}` = {value} exceeds the largest overflow-safe input {limit}")]
    Overflow {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: u64,
        /// Largest accepted value.
        limit: u64,
    },

    /// The requested quantity is mathematically undefined for these inputs.
    #[error("{0}")]
    Undefined(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation helpers
//
// Every module follows the same shape: validate the scalar/sequence inputs,
// then apply the closed-form formula. These helpers implement the validation
// half so the formula bodies stay small.
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NotFinite { name, value })
    }
}

pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::Negative { name, value })
    }
}

pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(Error::NotPositive { name, value })
    }
}

/// A divisor must be finite and non-zero; the sign does not matter.
pub(crate) fn ensure_divisor(name: &'static str, value: f64) -> Result<f64> {
    ensure_finite(name, value)?;
    if value != 0.0 {
        Ok(value)
    } else {
        Err(Error::ZeroDivisor { name })
    }
}

/// Tolerances must be finite and non-negative.
pub(crate) fn ensure_tolerance(name: &'static str, value: f64) -> Result<f64> {
    ensure_non_negative(name, value)
}

pub(crate) fn ensure_not_empty<T>(name: &'static str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        Err(Error::EmptyInput { name })
    } else {
        Ok(())
    }
}

pub(crate) fn ensure_same_len<A, B>(
    left: &'static str,
    left_values: &[A],
    right: &'static str,
    right_values: &[B],
) -> Result<()> {
    if left_values.len() == right_values.len() {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            left,
            right,
            left_len: left_values.len(),
            right_len: right_values.len(),
        })
    }
}

pub(crate) fn ensure_in_range(
    name: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64> {
    ensure_finite(name, value)?;
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(Error::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_parameter() {
        let err = ensure_non_negative("mass", -1.0).unwrap_err();
        assert_eq!(err.to_string(), "`mass` must be non-negative, got -1");

        let err = ensure_divisor("time", 0.0).unwrap_err();
        assert_eq!(err.to_string(), "`time` must not be zero");
    }

    #[test]
    fn finite_check_rejects_nan_and_infinities() {
        assert!(ensure_finite("x", f64::NAN).is_err());
        assert!(ensure_finite("x", f64::INFINITY).is_err());
        assert!(ensure_finite("x", f64::NEG_INFINITY).is_err());
        assert_eq!(ensure_finite("x", 1.5), Ok(1.5));
    }

    #[test]
    fn positive_rejects_zero_but_non_negative_accepts_it() {
        assert!(ensure_positive("volume", 0.0).is_err());
        assert_eq!(ensure_non_negative("mass", 0.0), Ok(0.0));
    }

    #[test]
    fn length_mismatch_reports_both_lengths() {
        let err = ensure_same_len("masses", &[1.0, 2.0], "positions", &[1.0]).unwrap_err();
        assert_eq!(
            err,
            Error::LengthMismatch {
                left: "masses",
                right: "positions",
                left_len: 2,
                right_len: 1,
            }
        );
    }

    #[test]
    fn range_check_is_inclusive() {
        assert_eq!(ensure_in_range("p", 0.0, 0.0, 100.0), Ok(0.0));
        assert_eq!(ensure_in_range("p", 100.0, 0.0, 100.0), Ok(100.0));
        assert!(ensure_in_range("p", 100.5, 0.0, 100.0).is_err());
    }
}

//! Angle utilities: conversion, wrapping, shortest differences, interpolation
//! and arc containment.
//!
//! Degrees and radians get separate entry points rather than a unit
//! parameter; each function name says which it expects. Wrapping uses
//! Euclidean remainders so the canonical ranges hold for negative inputs too:
//! `[0, 360)` for the unsigned wrap and `(-180, 180]` for the signed wrap.
//!
//! Wrapping is undefined for NaN and infinities, so those inputs are
//! rejected rather than silently producing NaN.

use crate::error::{ensure_finite, Result};
use std::f64::consts::TAU;

const FULL_TURN_DEG: f64 = 360.0;
const HALF_TURN_DEG: f64 = 180.0;

/// Converts an angle in degrees to radians.
///
/// ```rust
/// use physica::math::angle::degrees_to_radians;
/// assert!((degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts an angle in radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Wraps an angle into `[0, 360)` degrees.
///
/// Idempotent: wrapping an already-wrapped angle returns it unchanged.
///
/// ```rust
/// use physica::math::angle::wrap_degrees;
/// assert_eq!(wrap_degrees(370.0).unwrap(), 10.0);
/// assert_eq!(wrap_degrees(-90.0).unwrap(), 270.0);
/// ```
pub fn wrap_degrees(angle: f64) -> Result<f64> {
    ensure_finite("angle", angle)?;
    Ok(wrap_unsigned(angle, FULL_TURN_DEG))
}

/// Wraps an angle into `[0, 2π)` radians.
pub fn wrap_radians(angle: f64) -> Result<f64> {
    ensure_finite("angle", angle)?;
    Ok(wrap_unsigned(angle, TAU))
}

/// Wraps an angle into `(-180, 180]` degrees.
///
/// ```rust
/// use physica::math::angle::wrap_degrees_signed;
/// assert_eq!(wrap_degrees_signed(270.0).unwrap(), -90.0);
/// assert_eq!(wrap_degrees_signed(-180.0).unwrap(), 180.0);
/// ```
pub fn wrap_degrees_signed(angle: f64) -> Result<f64> {
    ensure_finite("angle", angle)?;
    Ok(wrap_signed(angle, FULL_TURN_DEG))
}

/// Wraps an angle into `(-π, π]` radians.
pub fn wrap_radians_signed(angle: f64) -> Result<f64> {
    ensure_finite("angle", angle)?;
    Ok(wrap_signed(angle, TAU))
}

/// Signed shortest rotation from `from` to `to`, in `(-180, 180]` degrees.
///
/// A positive result means the shortest way around is counter-clockwise
/// (increasing angle).
///
/// ```rust
/// use physica::math::angle::shortest_delta_degrees;
/// assert_eq!(shortest_delta_degrees(350.0, 10.0).unwrap(), 20.0);
/// assert_eq!(shortest_delta_degrees(10.0, 350.0).unwrap(), -20.0);
/// ```
pub fn shortest_delta_degrees(from: f64, to: f64) -> Result<f64> {
    ensure_finite("from", from)?;
    ensure_finite("to", to)?;
    Ok(wrap_signed(to - from, FULL_TURN_DEG))
}

/// Interpolates between two angles along the shortest arc.
///
/// `t = 0` returns `from` (wrapped), `t = 1` returns `to` (wrapped); values
/// outside `[0, 1]` extrapolate along the same arc. The result is wrapped
/// into `[0, 360)`.
///
/// ```rust
/// use physica::math::angle::lerp_degrees;
/// assert_eq!(lerp_degrees(350.0, 10.0, 0.5).unwrap(), 0.0);
/// ```
pub fn lerp_degrees(from: f64, to: f64, t: f64) -> Result<f64> {
    ensure_finite("t", t)?;
    let delta = shortest_delta_degrees(from, to)?;
    Ok(wrap_unsigned(from + delta * t, FULL_TURN_DEG))
}

/// Whether `angle` lies on the arc swept from `start` to `end` in the
/// direction of increasing angle.
///
/// All three angles are wrapped first. When the raw sweep `end - start`
/// covers a full turn or more the arc contains every angle; a zero-width
/// arc contains only its endpoint.
///
/// ```rust
/// use physica::math::angle::is_within_arc_degrees;
/// // Arc from 350° to 20° passes through 0°.
/// assert!(is_within_arc_degrees(5.0, 350.0, 20.0).unwrap());
/// assert!(!is_within_arc_degrees(340.0, 350.0, 20.0).unwrap());
/// ```
pub fn is_within_arc_degrees(angle: f64, start: f64, end: f64) -> Result<bool> {
    ensure_finite("angle", angle)?;
    ensure_finite("start", start)?;
    ensure_finite("end", end)?;
    if (end - start).abs() >= FULL_TURN_DEG {
        return Ok(true);
    }
    let span = wrap_unsigned(end - start, FULL_TURN_DEG);
    let offset = wrap_unsigned(angle - start, FULL_TURN_DEG);
    Ok(offset <= span)
}

#[inline]
fn wrap_unsigned(angle: f64, full_turn: f64) -> f64 {
    let wrapped = angle.rem_euclid(full_turn);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if wrapped >= full_turn {
        0.0
    } else {
        wrapped
    }
}

#[inline]
fn wrap_signed(angle: f64, full_turn: f64) -> f64 {
    let half = full_turn * 0.5;
    half - wrap_unsigned(half - angle, full_turn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn degree_radian_roundtrip() {
        assert_abs_diff_eq!(radians_to_degrees(degrees_to_radians(123.4)), 123.4, epsilon = 1e-12);
    }

    #[test]
    fn wrap_covers_negative_angles() {
        assert_eq!(wrap_degrees(-360.0).unwrap(), 0.0);
        assert_eq!(wrap_degrees(-1.0).unwrap(), 359.0);
        assert_eq!(wrap_degrees(720.0).unwrap(), 0.0);
    }

    #[test]
    fn wrap_rejects_non_finite() {
        assert!(wrap_degrees(f64::NAN).is_err());
        assert!(wrap_radians(f64::INFINITY).is_err());
    }

    #[test]
    fn signed_wrap_boundaries() {
        assert_eq!(wrap_degrees_signed(180.0).unwrap(), 180.0);
        assert_eq!(wrap_degrees_signed(-180.0).unwrap(), 180.0);
        assert_eq!(wrap_degrees_signed(181.0).unwrap(), -179.0);
        assert_eq!(wrap_degrees_signed(0.0).unwrap(), 0.0);
    }

    #[test]
    fn shortest_delta_crosses_zero() {
        assert_eq!(shortest_delta_degrees(0.0, 180.0).unwrap(), 180.0);
        assert_eq!(shortest_delta_degrees(90.0, 90.0).unwrap(), 0.0);
        assert_abs_diff_eq!(shortest_delta_degrees(359.0, 1.0).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp_degrees(10.0, 50.0, 0.0).unwrap(), 10.0);
        assert_eq!(lerp_degrees(10.0, 50.0, 1.0).unwrap(), 50.0);
        assert_eq!(lerp_degrees(10.0, 50.0, 0.5).unwrap(), 30.0);
    }

    #[test]
    fn arc_containment_full_and_empty_sweeps() {
        // Raw sweep of a full turn or more contains everything.
        assert!(is_within_arc_degrees(123.0, 0.0, 360.0).unwrap());
        assert!(is_within_arc_degrees(123.0, 90.0, 500.0).unwrap());
        // Zero-width arc contains only its endpoint.
        assert!(is_within_arc_degrees(90.0, 90.0, 90.0).unwrap());
        assert!(!is_within_arc_degrees(91.0, 90.0, 90.0).unwrap());
    }

    #[test]
    fn arc_endpoints_are_inclusive() {
        assert!(is_within_arc_degrees(350.0, 350.0, 20.0).unwrap());
        assert!(is_within_arc_degrees(20.0, 350.0, 20.0).unwrap());
    }

    proptest! {
        #[test]
        fn prop_wrap_range_and_idempotence(angle in -1e6..1e6f64) {
            let wrapped = wrap_degrees(angle).unwrap();
            prop_assert!((0.0..360.0).contains(&wrapped));
            prop_assert_eq!(wrap_degrees(wrapped).unwrap(), wrapped);
        }

        #[test]
        fn prop_signed_wrap_range(angle in -1e6..1e6f64) {
            let wrapped = wrap_degrees_signed(angle).unwrap();
            prop_assert!(wrapped > -180.0 && wrapped <= 180.0);
        }

        #[test]
        fn prop_shortest_delta_magnitude(from in -720.0..720.0f64, to in -720.0..720.0f64) {
            let delta = shortest_delta_degrees(from, to).unwrap();
            prop_assert!(delta.abs() <= 180.0);
            // Applying the delta lands on the target (mod 360).
            let landed = wrap_degrees(from + delta).unwrap();
            let target = wrap_degrees(to).unwrap();
            prop_assert!((landed - target).abs() < 1e-6 || (landed - target).abs() > 359.999);
        }
    }
}

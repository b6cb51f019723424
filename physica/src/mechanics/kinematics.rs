//! Linear kinematics under constant acceleration.
//!
//! The standard relations `s = v·t`, `v = v₀ + a·t`, `s = v₀·t + ½at²`,
//! `v² = v₀² + 2as` and their inverses. Signs follow a single 1D axis:
//! positive quantities point along it, negative against it.

use crate::error::{ensure_divisor, Error, Result};

/// Displacement at constant velocity, `s = v·t`.
#[inline]
pub fn displacement_uniform(velocity: f64, time: f64) -> f64 {
    velocity * time
}

/// Velocity after accelerating for `time`, `v = v₀ + a·t`.
#[inline]
pub fn final_velocity(initial_velocity: f64, acceleration: f64, time: f64) -> f64 {
    initial_velocity + acceleration * time
}

/// Displacement under constant acceleration, `s = v₀·t + ½at²`.
///
/// ```rust
/// use physica::mechanics::kinematics::displacement;
/// // Free fall from rest for 2 s at g ≈ 9.81 m/s².
/// assert!((displacement(0.0, 9.81, 2.0) - 19.62).abs() < 1e-12);
/// ```
#[inline]
pub fn displacement(initial_velocity: f64, acceleration: f64, time: f64) -> f64 {
    initial_velocity * time + 0.5 * acceleration * time * time
}

/// Final speed from the time-free relation `v² = v₀² + 2as`.
///
/// Returns the non-negative magnitude. When `v₀² + 2as` is negative the
/// motion never reaches the given displacement and the result is undefined —
/// an error, not NaN.
///
/// ```rust
/// use physica::mechanics::kinematics::final_speed_from_displacement;
/// assert_eq!(final_speed_from_displacement(3.0, 4.0, 2.0).unwrap(), 5.0);
/// assert!(final_speed_from_displacement(1.0, -2.0, 10.0).is_err());
/// ```
pub fn final_speed_from_displacement(
    initial_velocity: f64,
    acceleration: f64,
    displacement: f64,
) -> Result<f64> {
    let squared = initial_velocity * initial_velocity + 2.0 * acceleration * displacement;
    if squared < 0.0 {
        return Err(Error::Undefined(format!(
            "v0^2 + 2as = {squared} is negative; the displacement is never reached"
        )));
    }
    Ok(squared.sqrt())
}

/// Average velocity over an interval, `v̄ = s / t`. `time` must be non-zero.
pub fn average_velocity(displacement: f64, time: f64) -> Result<f64> {
    ensure_divisor("time", time)?;
    Ok(displacement / time)
}

/// Constant acceleration producing a velocity change over `time`,
/// `a = (v − v₀) / t`. `time` must be non-zero.
pub fn acceleration_from_velocity_change(
    initial_velocity: f64,
    final_velocity: f64,
    time: f64,
) -> Result<f64> {
    ensure_divisor("time", time)?;
    Ok((final_velocity - initial_velocity) / time)
}

/// Time to change velocity under constant acceleration,
/// `t = (v − v₀) / a`. `acceleration` must be non-zero.
pub fn time_to_reach_velocity(
    initial_velocity: f64,
    final_velocity: f64,
    acceleration: f64,
) -> Result<f64> {
    ensure_divisor("acceleration", acceleration)?;
    Ok((final_velocity - initial_velocity) / acceleration)
}

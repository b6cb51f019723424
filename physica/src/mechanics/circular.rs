//! Circular kinematics: the angular mirror of the linear relations plus
//! period/frequency conversions and centripetal scalars.
//!
//! Angular position φ is in radians, angular velocity ω in rad/s, angular
//! acceleration α in rad/s². Period and frequency are magnitudes: a body
//! spinning clockwise has the same period as its counter-clockwise twin, so
//! those conversions take the absolute value and always return non-negative
//! results.

use crate::error::{ensure_divisor, ensure_non_negative, ensure_positive, Error, Result};
use std::f64::consts::TAU;

/// Angle swept at constant angular velocity, `φ = ω·t`.
#[inline]
pub fn angle_uniform(angular_velocity: f64, time: f64) -> f64 {
    angular_velocity * time
}

/// Angular velocity after accelerating for `time`, `ω = ω₀ + α·t`.
#[inline]
pub fn final_angular_velocity(
    initial_angular_velocity: f64,
    angular_acceleration: f64,
    time: f64,
) -> f64 {
    initial_angular_velocity + angular_acceleration * time
}

/// Angle swept under constant angular acceleration, `φ = ω₀·t + ½αt²`.
#[inline]
pub fn angle_swept(
    initial_angular_velocity: f64,
    angular_acceleration: f64,
    time: f64,
) -> f64 {
    initial_angular_velocity * time + 0.5 * angular_acceleration * time * time
}

/// Final angular speed from the time-free relation `ω² = ω₀² + 2αφ`.
///
/// Returns the non-negative magnitude; a negative `ω₀² + 2αφ` means the
/// rotation never sweeps the given angle and is an error, not NaN.
pub fn final_angular_speed_from_angle(
    initial_angular_velocity: f64,
    angular_acceleration: f64,
    angle: f64,
) -> Result<f64> {
    let squared =
        initial_angular_velocity * initial_angular_velocity + 2.0 * angular_acceleration * angle;
    if squared < 0.0 {
        return Err(Error::Undefined(format!(
            "w0^2 + 2*alpha*phi = {squared} is negative; the angle is never swept"
        )));
    }
    Ok(squared.sqrt())
}

/// Rotation period from angular velocity, `T = 2π / |ω|`. Non-negative
/// regardless of rotation direction; `angular_velocity` must be non-zero.
///
/// ```rust
/// use physica::mechanics::circular::period;
/// use std::f64::consts::TAU;
/// assert_eq!(period(-TAU).unwrap(), 1.0);
/// ```
pub fn period(angular_velocity: f64) -> Result<f64> {
    ensure_divisor("angular_velocity", angular_velocity)?;
    Ok(TAU / angular_velocity.abs())
}

/// Frequency from period, `f = 1 / |T|`. `period` must be non-zero.
pub fn frequency_from_period(period: f64) -> Result<f64> {
    ensure_divisor("period", period)?;
    Ok(1.0 / period.abs())
}

/// Frequency from angular velocity, `f = |ω| / 2π`.
#[inline]
pub fn frequency(angular_velocity: f64) -> f64 {
    angular_velocity.abs() / TAU
}

/// Angular speed from period, `ω = 2π / |T|`. `period` must be non-zero.
pub fn angular_velocity_from_period(period: f64) -> Result<f64> {
    ensure_divisor("period", period)?;
    Ok(TAU / period.abs())
}

/// Angular speed from frequency, `ω = 2π·f`. `frequency` must be
/// non-negative.
pub fn angular_velocity_from_frequency(frequency: f64) -> Result<f64> {
    ensure_non_negative("frequency", frequency)?;
    Ok(TAU * frequency)
}

/// Tangential speed at radius `r`, `v = ω·r`. `radius` must be non-negative.
pub fn tangential_speed(angular_velocity: f64, radius: f64) -> Result<f64> {
    ensure_non_negative("radius", radius)?;
    Ok(angular_velocity * radius)
}

/// Centripetal acceleration from tangential speed, `a = v² / r`. `radius`
/// must be strictly positive (it divides).
pub fn centripetal_acceleration(speed: f64, radius: f64) -> Result<f64> {
    ensure_positive("radius", radius)?;
    Ok(speed * speed / radius)
}

/// Centripetal acceleration from angular velocity, `a = ω²·r`. `radius` must
/// be non-negative.
pub fn centripetal_acceleration_angular(angular_velocity: f64, radius: f64) -> Result<f64> {
    ensure_non_negative("radius", radius)?;
    Ok(angular_velocity * angular_velocity * radius)
}

//! Momentum: linear momentum and system totals, impulse, and angular
//! momentum by lever-arm decomposition.

use crate::error::{ensure_non_negative, ensure_not_empty, ensure_same_len, Result};
use crate::vector::{Vec2, Vec3};

/// Linear momentum, `p = m·v`. `mass` must be non-negative.
pub fn momentum(mass: f64, velocity: f64) -> Result<f64> {
    ensure_non_negative("mass", mass)?;
    Ok(mass * velocity)
}

/// Linear momentum in the plane, componentwise `m·v`.
pub fn momentum_2d(mass: f64, velocity: Vec2) -> Result<Vec2> {
    ensure_non_negative("mass", mass)?;
    Ok(Vec2::new(mass * velocity.x, mass * velocity.y))
}

/// Linear momentum in space, componentwise `m·v`.
pub fn momentum_3d(mass: f64, velocity: Vec3) -> Result<Vec3> {
    ensure_non_negative("mass", mass)?;
    Ok(Vec3::new(mass * velocity.x, mass * velocity.y, mass * velocity.z))
}

/// Total momentum of a 1D system, `Σ mᵢ·vᵢ` over paired masses and
/// velocities.
pub fn total_momentum_1d(masses: &[f64], velocities: &[f64]) -> Result<f64> {
    ensure_not_empty("masses", masses)?;
    ensure_same_len("masses", masses, "velocities", velocities)?;
    let mut total = 0.0;
    for (&m, &v) in masses.iter().zip(velocities) {
        ensure_non_negative("masses", m)?;
        total += m * v;
    }
    Ok(total)
}

/// Total momentum of a planar system.
pub fn total_momentum_2d(masses: &[f64], velocities: &[Vec2]) -> Result<Vec2> {
    ensure_not_empty("masses", masses)?;
    ensure_same_len("masses", masses, "velocities", velocities)?;
    let mut total_x = 0.0;
    let mut total_y = 0.0;
    for (&m, v) in masses.iter().zip(velocities) {
        ensure_non_negative("masses", m)?;
        total_x += m * v.x;
        total_y += m * v.y;
    }
    Ok(Vec2::new(total_x, total_y))
}

/// Total momentum of a spatial system.
pub fn total_momentum_3d(masses: &[f64], velocities: &[Vec3]) -> Result<Vec3> {
    ensure_not_empty("masses", masses)?;
    ensure_same_len("masses", masses, "velocities", velocities)?;
    let mut total_x = 0.0;
    let mut total_y = 0.0;
    let mut total_z = 0.0;
    for (&m, v) in masses.iter().zip(velocities) {
        ensure_non_negative("masses", m)?;
        total_x += m * v.x;
        total_y += m * v.y;
        total_z += m * v.z;
    }
    Ok(Vec3::new(total_x, total_y, total_z))
}

/// Impulse of a constant force over an interval, `J = F·Δt`. `duration`
/// must be non-negative.
pub fn impulse(force: f64, duration: f64) -> Result<f64> {
    ensure_non_negative("duration", duration)?;
    Ok(force * duration)
}

/// Impulse of a constant planar force, componentwise `F·Δt`.
pub fn impulse_2d(force: Vec2, duration: f64) -> Result<Vec2> {
    ensure_non_negative("duration", duration)?;
    Ok(Vec2::new(force.x * duration, force.y * duration))
}

/// Impulse of a constant spatial force, componentwise `F·Δt`.
pub fn impulse_3d(force: Vec3, duration: f64) -> Result<Vec3> {
    ensure_non_negative("duration", duration)?;
    Ok(Vec3::new(force.x * duration, force.y * duration, force.z * duration))
}

/// Signed angular momentum about a pivot by lever-arm decomposition,
/// `L = m·v·r·sin θ`, where `θ` is the angle between the lever arm and the
/// velocity. Positive is counter-clockwise.
///
/// ```rust
/// use physica::mechanics::momentum::angular_momentum;
/// use std::f64::consts::FRAC_PI_2;
/// // Velocity perpendicular to the arm gives the full m·v·r.
/// assert!((angular_momentum(2.0, 3.0, 4.0, FRAC_PI_2).unwrap() - 24.0).abs() < 1e-12);
/// ```
pub fn angular_momentum(mass: f64, speed: f64, arm: f64, angle: f64) -> Result<f64> {
    ensure_non_negative("mass", mass)?;
    ensure_non_negative("arm", arm)?;
    Ok(mass * speed * arm * angle.sin())
}

/// Magnitude of the angular momentum, `|L| = m·v·r·|sin θ|`. `speed` is a
/// magnitude here and must be non-negative.
pub fn angular_momentum_magnitude(mass: f64, speed: f64, arm: f64, angle: f64) -> Result<f64> {
    ensure_non_negative("mass", mass)?;
    ensure_non_negative("speed", speed)?;
    ensure_non_negative("arm", arm)?;
    Ok(mass * speed * arm * angle.sin().abs())
}

//! Projectile motion over level ground.
//!
//! Horizontal/vertical decomposition composed with the constant-acceleration
//! relations, plus the trajectory with time eliminated. The launch angle is
//! in radians measured from the horizontal; `gravity` is the downward field
//! strength and is an explicit strictly-positive parameter — pass
//! [`crate::constants::STANDARD_GRAVITY`] for Earth.

use crate::error::{ensure_non_negative, ensure_positive, Error, Result};
use crate::vector::Vec2;

/// Velocity components at launch: `(v·cos θ, v·sin θ)`.
///
/// `speed` must be non-negative; direction comes from the angle.
pub fn velocity_components(speed: f64, angle: f64) -> Result<Vec2> {
    ensure_non_negative("speed", speed)?;
    Ok(Vec2::new(speed * angle.cos(), speed * angle.sin()))
}

/// Position `t` seconds after launch from the origin.
///
/// ```rust
/// use physica::constants::STANDARD_GRAVITY;
/// use physica::mechanics::projectile::position;
/// use std::f64::consts::FRAC_PI_4;
///
/// let p = position(10.0, FRAC_PI_4, STANDARD_GRAVITY, 0.5).unwrap();
/// assert!(p.x > 0.0 && p.y > 0.0);
/// ```
pub fn position(speed: f64, angle: f64, gravity: f64, time: f64) -> Result<Vec2> {
    ensure_non_negative("speed", speed)?;
    ensure_positive("gravity", gravity)?;
    let vx = speed * angle.cos();
    let vy = speed * angle.sin();
    Ok(Vec2::new(
        vx * time,
        vy * time - 0.5 * gravity * time * time,
    ))
}

/// Time until the projectile returns to launch height,
/// `t = 2·v·sin θ / g`.
pub fn time_of_flight(speed: f64, angle: f64, gravity: f64) -> Result<f64> {
    ensure_non_negative("speed", speed)?;
    ensure_positive("gravity", gravity)?;
    Ok(2.0 * speed * angle.sin() / gravity)
}

/// Greatest height above launch, `h = (v·sin θ)² / 2g`.
pub fn max_height(speed: f64, angle: f64, gravity: f64) -> Result<f64> {
    ensure_non_negative("speed", speed)?;
    ensure_positive("gravity", gravity)?;
    let vy = speed * angle.sin();
    Ok(vy * vy / (2.0 * gravity))
}

/// Horizontal distance to return to launch height,
/// `R = v²·sin 2θ / g`.
pub fn range(speed: f64, angle: f64, gravity: f64) -> Result<f64> {
    ensure_non_negative("speed", speed)?;
    ensure_positive("gravity", gravity)?;
    Ok(speed * speed * (2.0 * angle).sin() / gravity)
}

/// Height of the trajectory at horizontal distance `x`, with time
/// eliminated: `y = x·tan θ − g·x² / (2·v²·cos²θ)`.
///
/// Undefined for a vertical launch (zero horizontal velocity), where the
/// trajectory is not a function of `x`.
///
/// ```rust
/// use physica::constants::STANDARD_GRAVITY;
/// use physica::mechanics::projectile::{height_at, range};
/// use std::f64::consts::FRAC_PI_4;
///
/// // The trajectory returns to zero height at the full range.
/// let r = range(20.0, FRAC_PI_4, STANDARD_GRAVITY).unwrap();
/// let y = height_at(r, 20.0, FRAC_PI_4, STANDARD_GRAVITY).unwrap();
/// assert!(y.abs() < 1e-9);
/// ```
pub fn height_at(x: f64, speed: f64, angle: f64, gravity: f64) -> Result<f64> {
    ensure_non_negative("speed", speed)?;
    ensure_positive("gravity", gravity)?;
    let vx = speed * angle.cos();
    if vx == 0.0 {
        return Err(Error::Undefined(
            "trajectory is undefined for zero horizontal velocity".to_string(),
        ));
    }
    Ok(x * angle.tan() - gravity * x * x / (2.0 * vx * vx))
}

//! Newtonian dynamics: force/weight relations, inclines, springs and
//! dampers, drag, and the work–energy quantities.
//!
//! Restoring and resistive forces (springs, dampers, drag) return the force
//! acting *on* the body, so they carry a minus sign relative to the
//! displacement or velocity. Vector variants apply the same law per
//! component.

use crate::error::{ensure_divisor, ensure_non_negative, ensure_positive, Result};
use crate::vector::{Vec2, Vec3};

/// Newton's second law, `F = m·a`. `mass` must be non-negative.
pub fn force(mass: f64, acceleration: f64) -> Result<f64> {
    ensure_non_negative("mass", mass)?;
    Ok(mass * acceleration)
}

/// Weight of a mass in a gravity field, `W = m·g`.
pub fn weight(mass: f64, gravity: f64) -> Result<f64> {
    ensure_non_negative("mass", mass)?;
    ensure_non_negative("gravity", gravity)?;
    Ok(mass * gravity)
}

/// Normal force on a frictionless incline of `angle` radians,
/// `N = m·g·cos θ`.
pub fn normal_force_on_incline(mass: f64, angle: f64, gravity: f64) -> Result<f64> {
    ensure_non_negative("mass", mass)?;
    ensure_non_negative("gravity", gravity)?;
    Ok(mass * gravity * angle.cos())
}

/// Gravity component along an incline of `angle` radians, pulling
/// down-slope: `m·g·sin θ`.
pub fn gravity_along_incline(mass: f64, angle: f64, gravity: f64) -> Result<f64> {
    ensure_non_negative("mass", mass)?;
    ensure_non_negative("gravity", gravity)?;
    Ok(mass * gravity * angle.sin())
}

/// Kinetic friction magnitude, `F = μ·N`. Both inputs non-negative.
pub fn kinetic_friction(coefficient: f64, normal_force: f64) -> Result<f64> {
    ensure_non_negative("coefficient", coefficient)?;
    ensure_non_negative("normal_force", normal_force)?;
    Ok(coefficient * normal_force)
}

// ─────────────────────────────────────────────────────────────────────────────
// Springs and dampers (Hooke's law, linear damping)
// ─────────────────────────────────────────────────────────────────────────────

/// Hooke's law restoring force, `F = −k·x`. `stiffness` must be
/// non-negative.
pub fn spring_force(stiffness: f64, displacement: f64) -> Result<f64> {
    ensure_non_negative("stiffness", stiffness)?;
    Ok(-stiffness * displacement)
}

/// Hooke's law in the plane, componentwise `−k·x`.
pub fn spring_force_2d(stiffness: f64, displacement: Vec2) -> Result<Vec2> {
    ensure_non_negative("stiffness", stiffness)?;
    Ok(Vec2::new(-stiffness * displacement.x, -stiffness * displacement.y))
}

/// Hooke's law in space, componentwise `−k·x`.
pub fn spring_force_3d(stiffness: f64, displacement: Vec3) -> Result<Vec3> {
    ensure_non_negative("stiffness", stiffness)?;
    Ok(Vec3::new(
        -stiffness * displacement.x,
        -stiffness * displacement.y,
        -stiffness * displacement.z,
    ))
}

/// Linear damping force, `F = −c·v`. `damping` must be non-negative.
pub fn damping_force(damping: f64, velocity: f64) -> Result<f64> {
    ensure_non_negative("damping", damping)?;
    Ok(-damping * velocity)
}

/// Linear damping in the plane, componentwise `−c·v`.
pub fn damping_force_2d(damping: f64, velocity: Vec2) -> Result<Vec2> {
    ensure_non_negative("damping", damping)?;
    Ok(Vec2::new(-damping * velocity.x, -damping * velocity.y))
}

/// Linear damping in space, componentwise `−c·v`.
pub fn damping_force_3d(damping: f64, velocity: Vec3) -> Result<Vec3> {
    ensure_non_negative("damping", damping)?;
    Ok(Vec3::new(
        -damping * velocity.x,
        -damping * velocity.y,
        -damping * velocity.z,
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// Drag
// ─────────────────────────────────────────────────────────────────────────────

/// Linear (Stokes) drag, `F = −b·v`.
pub fn linear_drag(coefficient: f64, velocity: f64) -> Result<f64> {
    ensure_non_negative("coefficient", coefficient)?;
    Ok(-coefficient * velocity)
}

/// Quadratic drag, `F = −c·|v|·v`: magnitude grows with v², direction
/// always opposes the motion.
pub fn quadratic_drag(coefficient: f64, velocity: f64) -> Result<f64> {
    ensure_non_negative("coefficient", coefficient)?;
    Ok(-coefficient * velocity.abs() * velocity)
}

/// Quadratic drag in the plane, `F = −c·|v|·v`.
pub fn quadratic_drag_2d(coefficient: f64, velocity: Vec2) -> Result<Vec2> {
    ensure_non_negative("coefficient", coefficient)?;
    let speed = (velocity.x * velocity.x + velocity.y * velocity.y).sqrt();
    Ok(Vec2::new(
        -coefficient * speed * velocity.x,
        -coefficient * speed * velocity.y,
    ))
}

/// Quadratic drag in space, `F = −c·|v|·v`.
pub fn quadratic_drag_3d(coefficient: f64, velocity: Vec3) -> Result<Vec3> {
    ensure_non_negative("coefficient", coefficient)?;
    let speed =
        (velocity.x * velocity.x + velocity.y * velocity.y + velocity.z * velocity.z).sqrt();
    Ok(Vec3::new(
        -coefficient * speed * velocity.x,
        -coefficient * speed * velocity.y,
        -coefficient * speed * velocity.z,
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// Incline composite
// ─────────────────────────────────────────────────────────────────────────────

/// Acceleration of a block on a rough incline under an applied force.
///
/// The along-slope axis is positive **up** the incline. The driving force is
/// `applied − m·g·sin θ`; friction `μ·m·g·cos θ` opposes it. While the
/// driving force stays within the friction threshold the block does not
/// move and the acceleration is zero.
///
/// ```rust
/// use physica::mechanics::dynamics::incline_acceleration;
/// // Frictionless free slide: a = −g·sin θ.
/// let a = incline_acceleration(2.0, 0.5, 0.0, 0.0, 9.8).unwrap();
/// assert!((a + 9.8 * 0.5f64.sin()).abs() < 1e-12);
/// // Enough friction holds the block still.
/// let a = incline_acceleration(2.0, 0.1, 0.0, 0.9, 9.8).unwrap();
/// assert_eq!(a, 0.0);
/// ```
pub fn incline_acceleration(
    mass: f64,
    angle: f64,
    applied_force: f64,
    coefficient: f64,
    gravity: f64,
) -> Result<f64> {
    ensure_positive("mass", mass)?;
    ensure_non_negative("coefficient", coefficient)?;
    ensure_non_negative("gravity", gravity)?;
    let driving = applied_force - mass * gravity * angle.sin();
    let threshold = coefficient * mass * gravity * angle.cos();
    if driving.abs() <= threshold {
        return Ok(0.0);
    }
    Ok((driving - driving.signum() * threshold) / mass)
}

// ─────────────────────────────────────────────────────────────────────────────
// Work and energy
// ─────────────────────────────────────────────────────────────────────────────

/// Work of a constant force along a straight path, `W = F·d·cos θ`.
#[inline]
pub fn work(force: f64, distance: f64, angle: f64) -> f64 {
    force * distance * angle.cos()
}

/// Kinetic energy, `E = ½·m·v²`. `mass` must be non-negative.
pub fn kinetic_energy(mass: f64, speed: f64) -> Result<f64> {
    ensure_non_negative("mass", mass)?;
    Ok(0.5 * mass * speed * speed)
}

/// Gravitational potential energy relative to a datum, `E = m·g·h`.
/// Negative heights (below the datum) are allowed.
pub fn potential_energy(mass: f64, height: f64, gravity: f64) -> Result<f64> {
    ensure_non_negative("mass", mass)?;
    ensure_non_negative("gravity", gravity)?;
    Ok(mass * gravity * height)
}

/// Elastic energy stored in a spring, `E = ½·k·x²`.
pub fn elastic_energy(stiffness: f64, displacement: f64) -> Result<f64> {
    ensure_non_negative("stiffness", stiffness)?;
    Ok(0.5 * stiffness * displacement * displacement)
}

/// Average power, `P = W / t`. `time` must be non-zero.
pub fn power(work: f64, time: f64) -> Result<f64> {
    ensure_divisor("time", time)?;
    Ok(work / time)
}

/// Instantaneous power of a force moving at `speed`, `P = F·v`.
#[inline]
pub fn power_from_force(force: f64, speed: f64) -> f64 {
    force * speed
}

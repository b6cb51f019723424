//! Rotational dynamics: torque, moment of inertia, and centripetal vectors
//! directed toward a rotation center.
//!
//! The vector forms normalize the offset from the body position to the
//! center, then scale along that direction. A body sitting exactly on the
//! center has no defined direction — that case fails rather than producing
//! NaN components.

use crate::error::{ensure_non_negative, ensure_positive, Error, Result};
use crate::vector::{Vec2, Vec3};

/// Torque of a force applied perpendicular to the lever arm, `τ = F·r`.
/// `arm` must be non-negative; sign comes from the force.
pub fn torque(force: f64, arm: f64) -> Result<f64> {
    ensure_non_negative("arm", arm)?;
    Ok(force * arm)
}

/// Torque of a force applied at `angle` to the lever arm, `τ = F·r·sin θ`.
pub fn torque_at_angle(force: f64, arm: f64, angle: f64) -> Result<f64> {
    ensure_non_negative("arm", arm)?;
    Ok(force * arm * angle.sin())
}

/// Moment of inertia of a point mass, `I = m·r²`.
pub fn moment_of_inertia_point(mass: f64, radius: f64) -> Result<f64> {
    ensure_non_negative("mass", mass)?;
    ensure_non_negative("radius", radius)?;
    Ok(mass * radius * radius)
}

/// Angular acceleration from torque, `α = τ / I`. `inertia` must be
/// strictly positive.
pub fn angular_acceleration(torque: f64, inertia: f64) -> Result<f64> {
    ensure_positive("inertia", inertia)?;
    Ok(torque / inertia)
}

/// Rotational kinetic energy, `E = ½·I·ω²`.
pub fn rotational_kinetic_energy(inertia: f64, angular_velocity: f64) -> Result<f64> {
    ensure_non_negative("inertia", inertia)?;
    Ok(0.5 * inertia * angular_velocity * angular_velocity)
}

// ─────────────────────────────────────────────────────────────────────────────
// Centripetal vectors
// ─────────────────────────────────────────────────────────────────────────────

/// Unit vector from `position` toward `center`.
///
/// Undefined when the two points coincide.
///
/// ```rust
/// use physica::mechanics::rotation::direction_to_center;
/// use physica::Vec2;
/// let u = direction_to_center(Vec2::new(3.0, 0.0), Vec2::new(0.0, 0.0)).unwrap();
/// assert_eq!(u, Vec2::new(-1.0, 0.0));
/// ```
pub fn direction_to_center(position: Vec2, center: Vec2) -> Result<Vec2> {
    let dx = center.x - position.x;
    let dy = center.y - position.y;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance == 0.0 {
        return Err(Error::Undefined(
            "direction is undefined when the position coincides with the center".to_string(),
        ));
    }
    Ok(Vec2::new(dx / distance, dy / distance))
}

/// Unit vector from `position` toward `center` in space.
pub fn direction_to_center_3d(position: Vec3, center: Vec3) -> Result<Vec3> {
    let dx = center.x - position.x;
    let dy = center.y - position.y;
    let dz = center.z - position.z;
    let distance = (dx * dx + dy * dy + dz * dz).sqrt();
    if distance == 0.0 {
        return Err(Error::Undefined(
            "direction is undefined when the position coincides with the center".to_string(),
        ));
    }
    Ok(Vec3::new(dx / distance, dy / distance, dz / distance))
}

/// Centripetal acceleration vector for a body circling `center` at `speed`,
/// `a = (v² / r)·û` with `û` pointing at the center.
pub fn centripetal_acceleration_vector(
    position: Vec2,
    center: Vec2,
    speed: f64,
) -> Result<Vec2> {
    ensure_non_negative("speed", speed)?;
    let dx = center.x - position.x;
    let dy = center.y - position.y;
    let radius = (dx * dx + dy * dy).sqrt();
    if radius == 0.0 {
        return Err(Error::Undefined(
            "centripetal acceleration is undefined at the rotation center".to_string(),
        ));
    }
    let magnitude = speed * speed / radius;
    Ok(Vec2::new(magnitude * dx / radius, magnitude * dy / radius))
}

/// Centripetal acceleration vector in space.
pub fn centripetal_acceleration_vector_3d(
    position: Vec3,
    center: Vec3,
    speed: f64,
) -> Result<Vec3> {
    ensure_non_negative("speed", speed)?;
    let dx = center.x - position.x;
    let dy = center.y - position.y;
    let dz = center.z - position.z;
    let radius = (dx * dx + dy * dy + dz * dz).sqrt();
    if radius == 0.0 {
        return Err(Error::Undefined(
            "centripetal acceleration is undefined at the rotation center".to_string(),
        ));
    }
    let magnitude = speed * speed / radius;
    Ok(Vec3::new(
        magnitude * dx / radius,
        magnitude * dy / radius,
        magnitude * dz / radius,
    ))
}

/// Centripetal force vector, `F = m·a` along the center direction.
pub fn centripetal_force_vector(
    mass: f64,
    position: Vec2,
    center: Vec2,
    speed: f64,
) -> Result<Vec2> {
    ensure_non_negative("mass", mass)?;
    let a = centripetal_acceleration_vector(position, center, speed)?;
    Ok(Vec2::new(mass * a.x, mass * a.y))
}

/// Centripetal force vector in space.
pub fn centripetal_force_vector_3d(
    mass: f64,
    position: Vec3,
    center: Vec3,
    speed: f64,
) -> Result<Vec3> {
    ensure_non_negative("mass", mass)?;
    let a = centripetal_acceleration_vector_3d(position, center, speed)?;
    Ok(Vec3::new(mass * a.x, mass * a.y, mass * a.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn torque_forms() {
        assert_eq!(torque(10.0, 0.5).unwrap(), 5.0);
        assert_eq!(torque(-10.0, 0.5).unwrap(), -5.0);
        assert!(torque(10.0, -0.5).is_err());
        assert_abs_diff_eq!(
            torque_at_angle(10.0, 0.5, std::f64::consts::FRAC_PI_2).unwrap(),
            5.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn point_inertia_and_angular_acceleration() {
        let i = moment_of_inertia_point(2.0, 3.0).unwrap();
        assert_eq!(i, 18.0);
        assert_eq!(angular_acceleration(36.0, i).unwrap(), 2.0);
        assert!(angular_acceleration(1.0, 0.0).is_err());
        assert_eq!(rotational_kinetic_energy(18.0, 2.0).unwrap(), 36.0);
    }

    #[test]
    fn direction_is_unit_length() {
        let u = direction_to_center(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0)).unwrap();
        assert_relative_eq!((u.x * u.x + u.y * u.y).sqrt(), 1.0, max_relative = 1e-12);
        assert_abs_diff_eq!(u.x, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(u.y, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn coincident_position_fails() {
        let p = Vec2::new(2.0, 2.0);
        assert!(direction_to_center(p, p).is_err());
        assert!(centripetal_acceleration_vector(p, p, 1.0).is_err());
        let q = Vec3::new(1.0, 2.0, 3.0);
        assert!(direction_to_center_3d(q, q).is_err());
    }

    #[test]
    fn acceleration_magnitude_matches_scalar_form() {
        let position = Vec2::new(3.0, 0.0);
        let center = Vec2::new(0.0, 0.0);
        let a = centripetal_acceleration_vector(position, center, 6.0).unwrap();
        // v²/r = 36/3 = 12, pointing in −x.
        assert_abs_diff_eq!(a.x, -12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn force_scales_acceleration_by_mass() {
        let position = Vec3::new(0.0, 2.0, 0.0);
        let center = Vec3::new(0.0, 0.0, 0.0);
        let f = centripetal_force_vector_3d(3.0, position, center, 4.0).unwrap();
        // v²/r = 8 toward −y, times mass 3.
        assert_abs_diff_eq!(f.y, -24.0, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_direction_is_normalized(
            px in -100.0..100.0f64, py in -100.0..100.0f64,
            cx in -100.0..100.0f64, cy in -100.0..100.0f64,
        ) {
            prop_assume!((px - cx).abs() > 1e-6 || (py - cy).abs() > 1e-6);
            let u = direction_to_center(Vec2::new(px, py), Vec2::new(cx, cy)).unwrap();
            let norm = (u.x * u.x + u.y * u.y).sqrt();
            prop_assert!((norm - 1.0).abs() < 1e-9);
        }

        #[test]
        fn prop_centripetal_points_at_the_center(
            px in -100.0..100.0f64, py in -100.0..100.0f64,
            speed in 0.0..50.0f64,
        ) {
            prop_assume!(px.abs() > 1e-3 || py.abs() > 1e-3);
            let a = centripetal_acceleration_vector(
                Vec2::new(px, py),
                Vec2::new(0.0, 0.0),
                speed,
            ).unwrap();
            // a is anti-parallel to the position vector.
            let cross = a.x * py - a.y * px;
            prop_assert!(cross.abs() < 1e-6);
            prop_assert!(a.x * px + a.y * py <= 1e-12);
        }
    }
}

//! Statics: weighted centers, equilibrium checks, moments/levers and static
//! friction.
//!
//! Center of mass, centroid, center of gravity and resultant location all
//! share one algorithmic core — a weighted average of positions — and differ
//! only in the weight policy. Mass-like interpretations require non-negative
//! weights with a positive total; force-like interpretations accept signed
//! weights and are undefined when the total cancels to zero. The core is
//! implemented once per dimensionality and reused by all four, so the
//! interpretations cannot drift apart.

use crate::error::{
    ensure_divisor, ensure_non_negative, ensure_not_empty, ensure_same_len, ensure_tolerance,
    Error, Result,
};
use crate::vector::{Vec2, Vec3};

/// Default tolerance for the equilibrium checks, in the unit of the summed
/// quantity.
pub const DEFAULT_EQUILIBRIUM_TOLERANCE: f64 = 1e-9;

/// How a weighted-center interpretation constrains its weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WeightPolicy {
    /// Weights must be non-negative and sum to a positive total
    /// (mass, geometric measure).
    NonNegative,
    /// Weights may carry either sign; only a zero total is undefined
    /// (force, signed weight).
    Signed,
}

fn checked_total(weights: &[f64], policy: WeightPolicy, name: &'static str) -> Result<f64> {
    let mut total = 0.0;
    for &w in weights {
        if !w.is_finite() {
            return Err(Error::NotFinite { name, value: w });
        }
        if policy == WeightPolicy::NonNegative && w < 0.0 {
            return Err(Error::Negative { name, value: w });
        }
        total += w;
    }
    if total == 0.0 {
        return Err(Error::Undefined(format!(
            "`{name}` sum to zero; the weighted center is undefined"
        )));
    }
    Ok(total)
}

// ─────────────────────────────────────────────────────────────────────────────
// Weighted-center cores, one per dimensionality
// ─────────────────────────────────────────────────────────────────────────────

fn weighted_center_1d(
    weights: &[f64],
    positions: &[f64],
    policy: WeightPolicy,
    name: &'static str,
) -> Result<f64> {
    ensure_not_empty(name, weights)?;
    ensure_same_len(name, weights, "positions", positions)?;
    let total = checked_total(weights, policy, name)?;
    let moment: f64 = weights.iter().zip(positions).map(|(w, x)| w * x).sum();
    Ok(moment / total)
}

fn weighted_center_2d(
    weights: &[f64],
    positions: &[Vec2],
    policy: WeightPolicy,
    name: &'static str,
) -> Result<Vec2> {
    ensure_not_empty(name, weights)?;
    ensure_same_len(name, weights, "positions", positions)?;
    let total = checked_total(weights, policy, name)?;
    let mut moment_x = 0.0;
    let mut moment_y = 0.0;
    for (w, p) in weights.iter().zip(positions) {
        moment_x += w * p.x;
        moment_y += w * p.y;
    }
    Ok(Vec2::new(moment_x / total, moment_y / total))
}

fn weighted_center_3d(
    weights: &[f64],
    positions: &[Vec3],
    policy: WeightPolicy,
    name: &'static str,
) -> Result<Vec3> {
    ensure_not_empty(name, weights)?;
    ensure_same_len(name, weights, "positions", positions)?;
    let total = checked_total(weights, policy, name)?;
    let mut moment_x = 0.0;
    let mut moment_y = 0.0;
    let mut moment_z = 0.0;
    for (w, p) in weights.iter().zip(positions) {
        moment_x += w * p.x;
        moment_y += w * p.y;
        moment_z += w * p.z;
    }
    Ok(Vec3::new(moment_x / total, moment_y / total, moment_z / total))
}

// ─────────────────────────────────────────────────────────────────────────────
// The four physical interpretations
// ─────────────────────────────────────────────────────────────────────────────

/// Center of mass of point masses on a line, `Σmx / Σm`.
///
/// Masses must be non-negative and not all zero.
///
/// ```rust
/// use physica::mechanics::statics::center_of_mass_1d;
/// // Two-body case reduces to (m1·x1 + m2·x2) / (m1 + m2).
/// assert_eq!(center_of_mass_1d(&[2.0, 6.0], &[0.0, 4.0]).unwrap(), 3.0);
/// ```
pub fn center_of_mass_1d(masses: &[f64], positions: &[f64]) -> Result<f64> {
    weighted_center_1d(masses, positions, WeightPolicy::NonNegative, "masses")
}

/// Center of mass of point masses in the plane.
pub fn center_of_mass_2d(masses: &[f64], positions: &[Vec2]) -> Result<Vec2> {
    weighted_center_2d(masses, positions, WeightPolicy::NonNegative, "masses")
}

/// Center of mass of point masses in space.
pub fn center_of_mass_3d(masses: &[f64], positions: &[Vec3]) -> Result<Vec3> {
    weighted_center_3d(masses, positions, WeightPolicy::NonNegative, "masses")
}

/// Centroid of weighted geometric elements (lengths, areas, volumes) on a
/// line. Measures must be non-negative and not all zero.
pub fn centroid_1d(measures: &[f64], positions: &[f64]) -> Result<f64> {
    weighted_center_1d(measures, positions, WeightPolicy::NonNegative, "measures")
}

/// Centroid of weighted geometric elements in the plane.
pub fn centroid_2d(measures: &[f64], positions: &[Vec2]) -> Result<Vec2> {
    weighted_center_2d(measures, positions, WeightPolicy::NonNegative, "measures")
}

/// Centroid of weighted geometric elements in space.
pub fn centroid_3d(measures: &[f64], positions: &[Vec3]) -> Result<Vec3> {
    weighted_center_3d(measures, positions, WeightPolicy::NonNegative, "measures")
}

/// Center of gravity from signed weight values on a line.
///
/// Weights may point either way; a zero total weight leaves the center
/// physically undefined and fails.
pub fn center_of_gravity_1d(weights: &[f64], positions: &[f64]) -> Result<f64> {
    weighted_center_1d(weights, positions, WeightPolicy::Signed, "weights")
}

/// Center of gravity from signed weight values in the plane.
pub fn center_of_gravity_2d(weights: &[f64], positions: &[Vec2]) -> Result<Vec2> {
    weighted_center_2d(weights, positions, WeightPolicy::Signed, "weights")
}

/// Center of gravity from signed weight values in space.
pub fn center_of_gravity_3d(weights: &[f64], positions: &[Vec3]) -> Result<Vec3> {
    weighted_center_3d(weights, positions, WeightPolicy::Signed, "weights")
}

/// Line of action of the resultant of parallel signed forces on a line.
///
/// Undefined (fails) when the forces cancel: a pure couple has no resultant
/// location.
pub fn resultant_position_1d(forces: &[f64], positions: &[f64]) -> Result<f64> {
    weighted_center_1d(forces, positions, WeightPolicy::Signed, "forces")
}

/// Resultant location for parallel signed forces applied in the plane.
pub fn resultant_position_2d(forces: &[f64], positions: &[Vec2]) -> Result<Vec2> {
    weighted_center_2d(forces, positions, WeightPolicy::Signed, "forces")
}

/// Resultant location for parallel signed forces applied in space.
pub fn resultant_position_3d(forces: &[f64], positions: &[Vec3]) -> Result<Vec3> {
    weighted_center_3d(forces, positions, WeightPolicy::Signed, "forces")
}

// ─────────────────────────────────────────────────────────────────────────────
// Equilibrium checks
// ─────────────────────────────────────────────────────────────────────────────

/// Whether signed collinear forces sum to zero within `tolerance`.
///
/// An empty set is trivially in equilibrium: the sum of zero terms is zero.
///
/// ```rust
/// use physica::mechanics::statics::{is_force_equilibrium_1d, DEFAULT_EQUILIBRIUM_TOLERANCE};
/// assert!(is_force_equilibrium_1d(&[], DEFAULT_EQUILIBRIUM_TOLERANCE).unwrap());
/// assert!(is_force_equilibrium_1d(&[5.0, -5.0], DEFAULT_EQUILIBRIUM_TOLERANCE).unwrap());
/// ```
pub fn is_force_equilibrium_1d(forces: &[f64], tolerance: f64) -> Result<bool> {
    ensure_tolerance("tolerance", tolerance)?;
    let sum: f64 = forces.iter().sum();
    Ok(sum.abs() <= tolerance)
}

/// Whether planar forces sum to zero within `tolerance` in both components.
pub fn is_force_equilibrium_2d(forces: &[Vec2], tolerance: f64) -> Result<bool> {
    ensure_tolerance("tolerance", tolerance)?;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for f in forces {
        sum_x += f.x;
        sum_y += f.y;
    }
    Ok(sum_x.abs() <= tolerance && sum_y.abs() <= tolerance)
}

/// Whether signed moments about a common axis sum to zero within
/// `tolerance`. An empty set is trivially in equilibrium.
pub fn is_moment_equilibrium(moments: &[f64], tolerance: f64) -> Result<bool> {
    ensure_tolerance("tolerance", tolerance)?;
    let sum: f64 = moments.iter().sum();
    Ok(sum.abs() <= tolerance)
}

// ─────────────────────────────────────────────────────────────────────────────
// Moments and levers
// ─────────────────────────────────────────────────────────────────────────────

/// Moment of a force about a pivot, `M = F·d`. Signs multiply through.
#[inline]
pub fn moment(force: f64, arm: f64) -> f64 {
    force * arm
}

/// Moment of a force applied at `angle` to the lever arm, `M = F·d·sin θ`.
#[inline]
pub fn moment_at_angle(force: f64, arm: f64, angle: f64) -> f64 {
    force * arm * angle.sin()
}

/// Lever law: force needed at `balance_arm` to balance `force` at `arm`,
/// `F₂ = F₁·d₁ / d₂`. A zero-length balance arm cannot carry any moment.
pub fn balancing_force(force: f64, arm: f64, balance_arm: f64) -> Result<f64> {
    ensure_divisor("balance_arm", balance_arm)?;
    Ok(force * arm / balance_arm)
}

// ─────────────────────────────────────────────────────────────────────────────
// Static friction
// ─────────────────────────────────────────────────────────────────────────────

/// Slip threshold of static friction, `F_max = μ·N`. Both the coefficient
/// and the normal force must be non-negative.
pub fn max_static_friction(coefficient: f64, normal_force: f64) -> Result<f64> {
    ensure_non_negative("coefficient", coefficient)?;
    ensure_non_negative("normal_force", normal_force)?;
    Ok(coefficient * normal_force)
}

/// Self-adjusting static friction under an applied tangential force.
///
/// Below the slip threshold friction exactly cancels the applied force;
/// above it the magnitude saturates at `μ·N`. The sign always opposes the
/// applied force.
///
/// ```rust
/// use physica::mechanics::statics::static_friction_force;
/// // Threshold is 0.5 · 20 = 10 N.
/// assert_eq!(static_friction_force(4.0, 0.5, 20.0).unwrap(), -4.0);
/// assert_eq!(static_friction_force(-25.0, 0.5, 20.0).unwrap(), 10.0);
/// ```
pub fn static_friction_force(
    applied_force: f64,
    coefficient: f64,
    normal_force: f64,
) -> Result<f64> {
    let limit = max_static_friction(coefficient, normal_force)?;
    if applied_force == 0.0 {
        return Ok(0.0);
    }
    let magnitude = applied_force.abs().min(limit);
    Ok(-applied_force.signum() * magnitude)
}

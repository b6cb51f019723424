//! Simply supported 1D beam statics: support reactions, internal force
//! section functions and diagram sampling.
//!
//! Sign conventions:
//!
//! - Transverse loads act **downward** for positive values; reactions are
//!   returned **positive upward**.
//! - Shear is positive when the material left of the cut pushes the right
//!   part upward; bending moment is positive sagging.
//! - Axial loads are positive toward +x; internal normal force is positive
//!   in tension.
//!
//! Section functions use the **left-limit convention**: a point load,
//! reaction or distributed segment contributes to the section sum only from
//! positions *strictly less than* the query point, so at a discontinuity the
//! value just left of the jump is returned. Evaluating infinitesimally past
//! a point load therefore shows the full drop.
//!
//! Distributed loads are uniform segments (UDLs). For the reaction solve
//! each segment reduces to its static equivalent: a point force of
//! `intensity × length` acting at the segment centroid.

use crate::error::{ensure_finite, Error, Result};
use serde::{Deserialize, Serialize};

/// A concentrated force on the beam axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Position along the beam axis.
    pub position: f64,
    /// Force value. Downward positive for transverse loads; toward +x for
    /// axial loads.
    pub force: f64,
}

impl PointLoad {
    /// Creates a concentrated force.
    #[inline]
    pub const fn new(position: f64, force: f64) -> Self {
        Self { position, force }
    }
}

/// A uniform distributed load over the segment `[start, end]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniformLoad {
    /// Left edge of the loaded segment.
    pub start: f64,
    /// Right edge of the loaded segment; must exceed `start`.
    pub end: f64,
    /// Load per unit length, downward positive.
    pub intensity: f64,
}

impl UniformLoad {
    /// Creates a uniform distributed load.
    #[inline]
    pub const fn new(start: f64, end: f64, intensity: f64) -> Self {
        Self { start, end, intensity }
    }

    /// Length of the loaded segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Total force of the segment, `intensity × length`.
    #[inline]
    pub fn total_force(&self) -> f64 {
        self.intensity * self.length()
    }

    /// Position of the static equivalent point force (segment midpoint).
    #[inline]
    pub fn centroid(&self) -> f64 {
        0.5 * (self.start + self.end)
    }
}

fn ensure_valid_segments(uniform_loads: &[UniformLoad]) -> Result<()> {
    for udl in uniform_loads {
        ensure_finite("start", udl.start)?;
        ensure_finite("end", udl.end)?;
        ensure_finite("intensity", udl.intensity)?;
        if udl.end <= udl.start {
            return Err(Error::Undefined(format!(
                "distributed segment [{}, {}] has non-positive length",
                udl.start, udl.end
            )));
        }
    }
    Ok(())
}

/// Reactions `(r_a, r_b)` of a beam on two supports, positive upward.
///
/// Each distributed segment is reduced to its equivalent point load, then
/// the two equilibrium equations are solved by the lever law:
/// `R_B = ΣM_A / span`, `R_A = ΣF − R_B`. The supports must sit at distinct
/// positions.
///
/// ```rust
/// use physica::mechanics::beam::{support_reactions, PointLoad};
///
/// // A 10 N load midway between supports splits evenly.
/// let loads = [PointLoad::new(2.0, 10.0)];
/// let (r_a, r_b) = support_reactions(&loads, &[], 0.0, 4.0).unwrap();
/// assert_eq!((r_a, r_b), (5.0, 5.0));
///
/// // Moving it toward support A shifts the share.
/// let loads = [PointLoad::new(1.0, 10.0)];
/// let (r_a, r_b) = support_reactions(&loads, &[], 0.0, 4.0).unwrap();
/// assert_eq!((r_a, r_b), (7.5, 2.5));
/// ```
pub fn support_reactions(
    point_loads: &[PointLoad],
    uniform_loads: &[UniformLoad],
    support_a: f64,
    support_b: f64,
) -> Result<(f64, f64)> {
    ensure_finite("support_a", support_a)?;
    ensure_finite("support_b", support_b)?;
    ensure_valid_segments(uniform_loads)?;
    let span = support_b - support_a;
    if span == 0.0 {
        return Err(Error::ZeroDivisor { name: "span" });
    }

    let mut total_force = 0.0;
    let mut moment_about_a = 0.0;
    for load in point_loads {
        ensure_finite("position", load.position)?;
        ensure_finite("force", load.force)?;
        total_force += load.force;
        moment_about_a += load.force * (load.position - support_a);
    }
    for udl in uniform_loads {
        let equivalent = udl.total_force();
        total_force += equivalent;
        moment_about_a += equivalent * (udl.centroid() - support_a);
    }

    let r_b = moment_about_a / span;
    let r_a = total_force - r_b;
    log::debug!(
        "support_reactions: total load {total_force}, moment about A {moment_about_a}, \
         span {span} -> reactions ({r_a}, {r_b})"
    );
    Ok((r_a, r_b))
}

/// Internal normal force at `x` from axial point loads (positive toward
/// +x), tension positive.
///
/// Left-limit convention: only loads strictly left of `x` enter the sum.
pub fn normal_force_at(x: f64, axial_loads: &[PointLoad]) -> Result<f64> {
    ensure_finite("x", x)?;
    let mut sum = 0.0;
    for load in axial_loads {
        ensure_finite("position", load.position)?;
        ensure_finite("force", load.force)?;
        if load.position < x {
            sum += load.force;
        }
    }
    // Equilibrium of the left segment: the cut carries the negated sum.
    Ok(-sum)
}

/// Internal shear force at `x` (left-limit value).
///
/// Solves the reactions, then sums the upward forces strictly left of `x`.
pub fn shear_force_at(
    x: f64,
    point_loads: &[PointLoad],
    uniform_loads: &[UniformLoad],
    support_a: f64,
    support_b: f64,
) -> Result<f64> {
    let (r_a, r_b) = support_reactions(point_loads, uniform_loads, support_a, support_b)?;
    ensure_finite("x", x)?;
    Ok(section_shear(
        x,
        point_loads,
        uniform_loads,
        support_a,
        r_a,
        support_b,
        r_b,
    ))
}

/// Internal bending moment at `x` (left-limit value), positive sagging.
pub fn bending_moment_at(
    x: f64,
    point_loads: &[PointLoad],
    uniform_loads: &[UniformLoad],
    support_a: f64,
    support_b: f64,
) -> Result<f64> {
    let (r_a, r_b) = support_reactions(point_loads, uniform_loads, support_a, support_b)?;
    ensure_finite("x", x)?;
    Ok(section_moment(
        x,
        point_loads,
        uniform_loads,
        support_a,
        r_a,
        support_b,
        r_b,
    ))
}

/// Shear force sampled at each query point, in the given order.
///
/// The query points are taken as supplied — no sorting, no deduplication —
/// so callers control the sampling pattern of the diagram.
pub fn shear_diagram(
    xs: &[f64],
    point_loads: &[PointLoad],
    uniform_loads: &[UniformLoad],
    support_a: f64,
    support_b: f64,
) -> Result<Vec<f64>> {
    let (r_a, r_b) = support_reactions(point_loads, uniform_loads, support_a, support_b)?;
    let mut values = Vec::with_capacity(xs.len());
    for &x in xs {
        ensure_finite("xs", x)?;
        values.push(section_shear(
            x,
            point_loads,
            uniform_loads,
            support_a,
            r_a,
            support_b,
            r_b,
        ));
    }
    Ok(values)
}

/// Bending moment sampled at each query point, in the given order.
pub fn bending_moment_diagram(
    xs: &[f64],
    point_loads: &[PointLoad],
    uniform_loads: &[UniformLoad],
    support_a: f64,
    support_b: f64,
) -> Result<Vec<f64>> {
    let (r_a, r_b) = support_reactions(point_loads, uniform_loads, support_a, support_b)?;
    let mut values = Vec::with_capacity(xs.len());
    for &x in xs {
        ensure_finite("xs", x)?;
        values.push(section_moment(
            x,
            point_loads,
            uniform_loads,
            support_a,
            r_a,
            support_b,
            r_b,
        ));
    }
    Ok(values)
}

fn section_shear(
    x: f64,
    point_loads: &[PointLoad],
    uniform_loads: &[UniformLoad],
    support_a: f64,
    r_a: f64,
    support_b: f64,
    r_b: f64,
) -> f64 {
    let mut shear = 0.0;
    if support_a < x {
        shear += r_a;
    }
    if support_b < x {
        shear += r_b;
    }
    for load in point_loads {
        if load.position < x {
            shear -= load.force;
        }
    }
    for udl in uniform_loads {
        // Loaded length left of the cut: none before the segment, partial
        // inside it, the full length past it.
        let covered = (x.min(udl.end) - udl.start).max(0.0);
        shear -= udl.intensity * covered;
    }
    shear
}

fn section_moment(
    x: f64,
    point_loads: &[PointLoad],
    uniform_loads: &[UniformLoad],
    support_a: f64,
    r_a: f64,
    support_b: f64,
    r_b: f64,
) -> f64 {
    let mut moment = 0.0;
    if support_a < x {
        moment += r_a * (x - support_a);
    }
    if support_b < x {
        moment += r_b * (x - support_b);
    }
    for load in point_loads {
        if load.position < x {
            moment -= load.force * (x - load.position);
        }
    }
    for udl in uniform_loads {
        if x <= udl.start {
            continue;
        }
        if x <= udl.end {
            // Partial segment: resultant w·(x−start) at half that distance
            // back from the cut.
            let covered = x - udl.start;
            moment -= udl.intensity * covered * covered * 0.5;
        } else {
            moment -= udl.total_force() * (x - udl.centroid());
        }
    }
    moment
}

//! First law of thermodynamics, `ΔU = Q − W`, with its algebraic
//! rearrangements and a tolerance-based balance check.
//!
//! Sign convention: `Q` is heat added **to** the system, `W` is work done
//! **by** the system.

use crate::error::{ensure_tolerance, Result};

/// Internal energy change, `ΔU = Q − W`.
#[inline]
pub fn internal_energy_change(heat: f64, work: f64) -> f64 {
    heat - work
}

/// Heat transferred to the system, `Q = ΔU + W`.
#[inline]
pub fn heat_transferred(internal_energy_change: f64, work: f64) -> f64 {
    internal_energy_change + work
}

/// Work done by the system, `W = Q − ΔU`.
#[inline]
pub fn work_done(heat: f64, internal_energy_change: f64) -> f64 {
    heat - internal_energy_change
}

/// Whether the three quantities satisfy the first law within `tolerance`,
/// i.e. the residual `|ΔU − (Q − W)|` is at most `tolerance`.
///
/// ```rust
/// use physica::thermo::first_law::is_energy_balanced;
/// assert!(is_energy_balanced(30.0, 50.0, 20.0, 1e-9).unwrap());
/// assert!(!is_energy_balanced(31.0, 50.0, 20.0, 1e-9).unwrap());
/// ```
pub fn is_energy_balanced(
    internal_energy_change: f64,
    heat: f64,
    work: f64,
    tolerance: f64,
) -> Result<bool> {
    ensure_tolerance("tolerance", tolerance)?;
    let residual = internal_energy_change - (heat - work);
    Ok(residual.abs() <= tolerance)
}

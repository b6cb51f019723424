//! State-variable helpers: density, specific volume, and generic
//! conversions between extensive (total) and intensive (per-mass)
//! quantities.

use crate::error::{ensure_non_negative, ensure_positive, Result};

/// Density, `ρ = m / V`. `volume` must be strictly positive.
pub fn density(mass: f64, volume: f64) -> Result<f64> {
    ensure_non_negative("mass", mass)?;
    ensure_positive("volume", volume)?;
    Ok(mass / volume)
}

/// Specific volume, `v = V / m`. `mass` must be strictly positive.
pub fn specific_volume(volume: f64, mass: f64) -> Result<f64> {
    ensure_non_negative("volume", volume)?;
    ensure_positive("mass", mass)?;
    Ok(volume / mass)
}

/// Converts any extensive quantity to its per-mass (specific) form,
/// `x = X / m`. Works for energy, enthalpy, entropy, heat capacity, ...
///
/// ```rust
/// use physica::thermo::state::specific_quantity;
/// // 500 kJ in a 2 kg system is 250 kJ/kg.
/// assert_eq!(specific_quantity(500e3, 2.0).unwrap(), 250e3);
/// ```
pub fn specific_quantity(total: f64, mass: f64) -> Result<f64> {
    ensure_positive("mass", mass)?;
    Ok(total / mass)
}

/// Converts a per-mass (specific) quantity back to its extensive form,
/// `X = x·m`. `mass` must be non-negative.
pub fn total_quantity(specific: f64, mass: f64) -> Result<f64> {
    ensure_non_negative("mass", mass)?;
    Ok(specific * mass)
}

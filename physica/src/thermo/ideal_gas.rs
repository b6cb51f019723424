//! Ideal gas law in its molar (`PV = nRT`) and mass-based
//! (`PV = m·R_s·T`) forms, with every rearrangement and the density
//! relations.
//!
//! Pressures are absolute pascals, volumes cubic metres, temperatures
//! kelvin. The two forms are bridged by the specific gas constant
//! `R_s = R / M`.

use crate::constants::MOLAR_GAS_CONSTANT;
use crate::error::{ensure_non_negative, ensure_positive, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Molar form: PV = nRT
// ─────────────────────────────────────────────────────────────────────────────

/// Pressure of an ideal gas, `P = nRT / V`.
///
/// ```rust
/// use physica::thermo::ideal_gas::pressure;
/// // One mole at 0 °C in 22.4 L is about one atmosphere.
/// let p = pressure(1.0, 273.15, 0.0224).unwrap();
/// assert!((p - 101_325.0).abs() / 101_325.0 < 1e-3);
/// ```
pub fn pressure(moles: f64, temperature: f64, volume: f64) -> Result<f64> {
    ensure_non_negative("moles", moles)?;
    ensure_positive("temperature", temperature)?;
    ensure_positive("volume", volume)?;
    Ok(moles * MOLAR_GAS_CONSTANT * temperature / volume)
}

/// Volume of an ideal gas, `V = nRT / P`.
pub fn volume(moles: f64, temperature: f64, pressure: f64) -> Result<f64> {
    ensure_non_negative("moles", moles)?;
    ensure_positive("temperature", temperature)?;
    ensure_positive("pressure", pressure)?;
    Ok(moles * MOLAR_GAS_CONSTANT * temperature / pressure)
}

/// Temperature of an ideal gas, `T = PV / nR`.
pub fn temperature(pressure: f64, volume: f64, moles: f64) -> Result<f64> {
    ensure_non_negative("pressure", pressure)?;
    ensure_positive("volume", volume)?;
    ensure_positive("moles", moles)?;
    Ok(pressure * volume / (moles * MOLAR_GAS_CONSTANT))
}

/// Amount of substance, `n = PV / RT`.
pub fn amount_of_substance(pressure: f64, volume: f64, temperature: f64) -> Result<f64> {
    ensure_non_negative("pressure", pressure)?;
    ensure_positive("volume", volume)?;
    ensure_positive("temperature", temperature)?;
    Ok(pressure * volume / (MOLAR_GAS_CONSTANT * temperature))
}

// ─────────────────────────────────────────────────────────────────────────────
// Mass form: PV = m·R_s·T
// ─────────────────────────────────────────────────────────────────────────────

/// Pressure from the mass form, `P = m·R_s·T / V`.
pub fn pressure_mass(
    mass: f64,
    specific_gas_constant: f64,
    temperature: f64,
    volume: f64,
) -> Result<f64> {
    ensure_non_negative("mass", mass)?;
    ensure_positive("specific_gas_constant", specific_gas_constant)?;
    ensure_positive("temperature", temperature)?;
    ensure_positive("volume", volume)?;
    Ok(mass * specific_gas_constant * temperature / volume)
}

/// Volume from the mass form, `V = m·R_s·T / P`.
pub fn volume_mass(
    mass: f64,
    specific_gas_constant: f64,
    temperature: f64,
    pressure: f64,
) -> Result<f64> {
    ensure_non_negative("mass", mass)?;
    ensure_positive("specific_gas_constant", specific_gas_constant)?;
    ensure_positive("temperature", temperature)?;
    ensure_positive("pressure", pressure)?;
    Ok(mass * specific_gas_constant * temperature / pressure)
}

/// Temperature from the mass form, `T = PV / (m·R_s)`.
pub fn temperature_mass(
    pressure: f64,
    volume: f64,
    mass: f64,
    specific_gas_constant: f64,
) -> Result<f64> {
    ensure_non_negative("pressure", pressure)?;
    ensure_positive("volume", volume)?;
    ensure_positive("mass", mass)?;
    ensure_positive("specific_gas_constant", specific_gas_constant)?;
    Ok(pressure * volume / (mass * specific_gas_constant))
}

/// Gas mass from the mass form, `m = PV / (R_s·T)`.
pub fn gas_mass(
    pressure: f64,
    volume: f64,
    specific_gas_constant: f64,
    temperature: f64,
) -> Result<f64> {
    ensure_non_negative("pressure", pressure)?;
    ensure_positive("volume", volume)?;
    ensure_positive("specific_gas_constant", specific_gas_constant)?;
    ensure_positive("temperature", temperature)?;
    Ok(pressure * volume / (specific_gas_constant * temperature))
}

/// Specific gas constant from the molar mass, `R_s = R / M`.
/// `molar_mass` is in kg/mol and must be strictly positive.
///
/// ```rust
/// use physica::thermo::ideal_gas::specific_gas_constant;
/// // Dry air, M ≈ 0.028965 kg/mol → R_s ≈ 287 J/(kg·K).
/// let r = specific_gas_constant(0.028_965).unwrap();
/// assert!((r - 287.0).abs() < 0.2);
/// ```
pub fn specific_gas_constant(molar_mass: f64) -> Result<f64> {
    ensure_positive("molar_mass", molar_mass)?;
    Ok(MOLAR_GAS_CONSTANT / molar_mass)
}

// ─────────────────────────────────────────────────────────────────────────────
// Density relations
// ─────────────────────────────────────────────────────────────────────────────

/// Density of an ideal gas, `ρ = P / (R_s·T)`.
pub fn density(pressure: f64, specific_gas_constant: f64, temperature: f64) -> Result<f64> {
    ensure_non_negative("pressure", pressure)?;
    ensure_positive("specific_gas_constant", specific_gas_constant)?;
    ensure_positive("temperature", temperature)?;
    Ok(pressure / (specific_gas_constant * temperature))
}

/// Pressure from density, `P = ρ·R_s·T`.
pub fn pressure_from_density(
    density: f64,
    specific_gas_constant: f64,
    temperature: f64,
) -> Result<f64> {
    ensure_non_negative("density", density)?;
    ensure_positive("specific_gas_constant", specific_gas_constant)?;
    ensure_positive("temperature", temperature)?;
    Ok(density * specific_gas_constant * temperature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn one_mole_at_stp() {
        let p = pressure(1.0, 273.15, 0.0224).unwrap();
        assert_relative_eq!(p, 101_325.0, max_relative = 1e-3);
    }

    #[test]
    fn molar_rearrangements_invert_each_other() {
        let (n, t, v) = (2.5, 310.0, 0.05);
        let p = pressure(n, t, v).unwrap();
        assert_relative_eq!(volume(n, t, p).unwrap(), v, max_relative = 1e-12);
        assert_relative_eq!(temperature(p, v, n).unwrap(), t, max_relative = 1e-12);
        assert_relative_eq!(amount_of_substance(p, v, t).unwrap(), n, max_relative = 1e-12);
    }

    #[test]
    fn mass_rearrangements_invert_each_other() {
        let (m, r_s, t, v) = (1.2, 287.05, 293.15, 1.0);
        let p = pressure_mass(m, r_s, t, v).unwrap();
        assert_relative_eq!(volume_mass(m, r_s, t, p).unwrap(), v, max_relative = 1e-12);
        assert_relative_eq!(temperature_mass(p, v, m, r_s).unwrap(), t, max_relative = 1e-12);
        assert_relative_eq!(gas_mass(p, v, r_s, t).unwrap(), m, max_relative = 1e-12);
    }

    #[test]
    fn specific_constant_bridges_the_two_forms() {
        // n moles of molar mass M weigh n·M; both forms must agree.
        let (n, molar_mass, t, v) = (3.0, 0.028, 300.0, 0.1);
        let r_s = specific_gas_constant(molar_mass).unwrap();
        let p_molar = pressure(n, t, v).unwrap();
        let p_mass = pressure_mass(n * molar_mass, r_s, t, v).unwrap();
        assert_relative_eq!(p_molar, p_mass, max_relative = 1e-12);
    }

    #[test]
    fn density_relations_are_mutually_inverse() {
        let (p, r_s, t) = (101_325.0, 287.05, 288.15);
        let rho = density(p, r_s, t).unwrap();
        // Sea-level air is about 1.225 kg/m³.
        assert_relative_eq!(rho, 1.225, max_relative = 1e-3);
        assert_relative_eq!(
            pressure_from_density(rho, r_s, t).unwrap(),
            p,
            max_relative = 1e-12
        );
    }

    #[test]
    fn invalid_state_variables_are_rejected() {
        assert!(pressure(-1.0, 300.0, 1.0).is_err());
        assert!(pressure(1.0, 0.0, 1.0).is_err());
        assert!(pressure(1.0, 300.0, 0.0).is_err());
        assert!(specific_gas_constant(0.0).is_err());
        assert!(density(1.0, 287.0, -10.0).is_err());
    }

    proptest! {
        #[test]
        fn prop_pressure_scales_linearly_with_amount(
            n in 0.1..100.0f64,
            t in 1.0..1000.0f64,
            v in 0.001..10.0f64,
        ) {
            let single = pressure(n, t, v).unwrap();
            let double = pressure(2.0 * n, t, v).unwrap();
            prop_assert!((double - 2.0 * single).abs() <= 1e-9 * double.abs());
        }
    }
}

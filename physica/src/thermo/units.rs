//! Temperature and pressure unit conversion as closed, tag-dispatched
//! families.
//!
//! Each family routes through one canonical unit — kelvin for temperature,
//! pascal for pressure — and re-derives the target from there, so any pair
//! of units converts consistently through the same two steps. The unit tags
//! are closed enums matched exhaustively; there is no unreachable-tag path.
//!
//! Temperatures below absolute zero and negative absolute pressures are
//! physically meaningless and rejected.

use crate::constants::{ABSOLUTE_ZERO_CELSIUS, STANDARD_ATMOSPHERE};
use crate::error::{ensure_finite, Error, Result};
use serde::{Deserialize, Serialize};

/// Pascals per bar (exact).
pub const PASCALS_PER_BAR: f64 = 100_000.0;

/// Pascals per standard atmosphere (exact).
pub const PASCALS_PER_ATMOSPHERE: f64 = STANDARD_ATMOSPHERE;

/// Pascals per conventional millimetre of mercury.
pub const PASCALS_PER_MMHG: f64 = 133.322_387_415;

/// Temperature scale tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    /// Kelvin, the canonical unit.
    Kelvin,
    /// Degrees Celsius.
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

/// Pressure unit tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    /// Pascal, the canonical unit.
    Pascal,
    /// Bar (100 kPa).
    Bar,
    /// Standard atmosphere (101.325 kPa).
    Atmosphere,
    /// Conventional millimetre of mercury.
    MillimeterOfMercury,
}

// ─────────────────────────────────────────────────────────────────────────────
// Temperature
// ─────────────────────────────────────────────────────────────────────────────

/// Converts a temperature in `unit` to kelvin.
///
/// Anything that lands below 0 K is below absolute zero and rejected.
///
/// ```rust
/// use physica::thermo::units::{to_kelvin, TemperatureUnit};
/// assert_eq!(to_kelvin(0.0, TemperatureUnit::Celsius).unwrap(), 273.15);
/// assert_eq!(to_kelvin(32.0, TemperatureUnit::Fahrenheit).unwrap(), 273.15);
/// assert!(to_kelvin(-300.0, TemperatureUnit::Celsius).is_err());
/// ```
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> Result<f64> {
    ensure_finite("value", value)?;
    let kelvin = match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value - ABSOLUTE_ZERO_CELSIUS,
        TemperatureUnit::Fahrenheit => (value - 32.0) / 1.8 - ABSOLUTE_ZERO_CELSIUS,
    };
    if kelvin < 0.0 {
        return Err(Error::Negative {
            name: "temperature in kelvin",
            value: kelvin,
        });
    }
    Ok(kelvin)
}

/// Converts a temperature in kelvin to `unit`. `kelvin` must be
/// non-negative.
pub fn from_kelvin(kelvin: f64, unit: TemperatureUnit) -> Result<f64> {
    ensure_finite("kelvin", kelvin)?;
    if kelvin < 0.0 {
        return Err(Error::Negative {
            name: "kelvin",
            value: kelvin,
        });
    }
    Ok(match unit {
        TemperatureUnit::Kelvin => kelvin,
        TemperatureUnit::Celsius => kelvin + ABSOLUTE_ZERO_CELSIUS,
        TemperatureUnit::Fahrenheit => (kelvin + ABSOLUTE_ZERO_CELSIUS) * 1.8 + 32.0,
    })
}

/// Converts a temperature between any two scales, routing through kelvin.
pub fn convert_temperature(
    value: f64,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> Result<f64> {
    from_kelvin(to_kelvin(value, from)?, to)
}

/// `°C → K`.
pub fn celsius_to_kelvin(celsius: f64) -> Result<f64> {
    to_kelvin(celsius, TemperatureUnit::Celsius)
}

/// `K → °C`.
pub fn kelvin_to_celsius(kelvin: f64) -> Result<f64> {
    from_kelvin(kelvin, TemperatureUnit::Celsius)
}

/// `°F → K`.
pub fn fahrenheit_to_kelvin(fahrenheit: f64) -> Result<f64> {
    to_kelvin(fahrenheit, TemperatureUnit::Fahrenheit)
}

/// `K → °F`.
pub fn kelvin_to_fahrenheit(kelvin: f64) -> Result<f64> {
    from_kelvin(kelvin, TemperatureUnit::Fahrenheit)
}

/// `°C → °F`.
pub fn celsius_to_fahrenheit(celsius: f64) -> Result<f64> {
    convert_temperature(celsius, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit)
}

/// `°F → °C`.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> Result<f64> {
    convert_temperature(fahrenheit, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius)
}

// ─────────────────────────────────────────────────────────────────────────────
// Pressure
// ─────────────────────────────────────────────────────────────────────────────

/// Converts an absolute pressure in `unit` to pascals. Negative absolute
/// pressures are rejected.
///
/// ```rust
/// use physica::thermo::units::{to_pascal, PressureUnit};
/// assert_eq!(to_pascal(1.0, PressureUnit::Atmosphere).unwrap(), 101_325.0);
/// assert_eq!(to_pascal(2.0, PressureUnit::Bar).unwrap(), 200_000.0);
/// ```
pub fn to_pascal(value: f64, unit: PressureUnit) -> Result<f64> {
    ensure_finite("value", value)?;
    let pascal = match unit {
        PressureUnit::Pascal => value,
        PressureUnit::Bar => value * PASCALS_PER_BAR,
        PressureUnit::Atmosphere => value * PASCALS_PER_ATMOSPHERE,
        PressureUnit::MillimeterOfMercury => value * PASCALS_PER_MMHG,
    };
    if pascal < 0.0 {
        return Err(Error::Negative {
            name: "pressure in pascal",
            value: pascal,
        });
    }
    Ok(pascal)
}

/// Converts an absolute pressure in pascals to `unit`. `pascal` must be
/// non-negative.
pub fn from_pascal(pascal: f64, unit: PressureUnit) -> Result<f64> {
    ensure_finite("pascal", pascal)?;
    if pascal < 0.0 {
        return Err(Error::Negative {
            name: "pascal",
            value: pascal,
        });
    }
    Ok(match unit {
        PressureUnit::Pascal => pascal,
        PressureUnit::Bar => pascal / PASCALS_PER_BAR,
        PressureUnit::Atmosphere => pascal / PASCALS_PER_ATMOSPHERE,
        PressureUnit::MillimeterOfMercury => pascal / PASCALS_PER_MMHG,
    })
}

/// Converts a pressure between any two units, routing through pascal.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> Result<f64> {
    from_pascal(to_pascal(value, from)?, to)
}

/// `bar → Pa`.
pub fn bar_to_pascal(bar: f64) -> Result<f64> {
    to_pascal(bar, PressureUnit::Bar)
}

/// `Pa → bar`.
pub fn pascal_to_bar(pascal: f64) -> Result<f64> {
    from_pascal(pascal, PressureUnit::Bar)
}

/// `atm → Pa`.
pub fn atmosphere_to_pascal(atmosphere: f64) -> Result<f64> {
    to_pascal(atmosphere, PressureUnit::Atmosphere)
}

/// `Pa → atm`.
pub fn pascal_to_atmosphere(pascal: f64) -> Result<f64> {
    from_pascal(pascal, PressureUnit::Atmosphere)
}

/// `mmHg → Pa`.
pub fn mmhg_to_pascal(mmhg: f64) -> Result<f64> {
    to_pascal(mmhg, PressureUnit::MillimeterOfMercury)
}

/// `Pa → mmHg`.
pub fn pascal_to_mmhg(pascal: f64) -> Result<f64> {
    from_pascal(pascal, PressureUnit::MillimeterOfMercury)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn fixed_points_of_the_three_scales() {
        assert_eq!(celsius_to_kelvin(0.0).unwrap(), 273.15);
        assert_eq!(celsius_to_kelvin(-273.15).unwrap(), 0.0);
        assert_abs_diff_eq!(fahrenheit_to_celsius(212.0).unwrap(), 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(celsius_to_fahrenheit(-40.0).unwrap(), -40.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            fahrenheit_to_kelvin(32.0).unwrap(),
            273.15,
            epsilon = 1e-12
        );
    }

    #[test]
    fn below_absolute_zero_is_rejected() {
        assert!(celsius_to_kelvin(-273.16).is_err());
        assert!(fahrenheit_to_kelvin(-460.0).is_err());
        assert!(from_kelvin(-1.0, TemperatureUnit::Celsius).is_err());
        assert!(to_kelvin(f64::NAN, TemperatureUnit::Kelvin).is_err());
    }

    #[test]
    fn identity_conversions() {
        assert_eq!(
            convert_temperature(300.0, TemperatureUnit::Kelvin, TemperatureUnit::Kelvin).unwrap(),
            300.0
        );
        assert_eq!(
            convert_pressure(5.0, PressureUnit::Bar, PressureUnit::Bar).unwrap(),
            5.0
        );
    }

    #[test]
    fn pressure_fixed_ratios() {
        assert_eq!(bar_to_pascal(1.0).unwrap(), 100_000.0);
        assert_eq!(atmosphere_to_pascal(1.0).unwrap(), 101_325.0);
        assert_relative_eq!(mmhg_to_pascal(760.0).unwrap(), 101_325.0, max_relative = 1e-6);
        assert_relative_eq!(
            convert_pressure(1.0, PressureUnit::Atmosphere, PressureUnit::Bar).unwrap(),
            1.013_25,
            max_relative = 1e-12
        );
    }

    #[test]
    fn negative_absolute_pressure_is_rejected() {
        assert!(bar_to_pascal(-1.0).is_err());
        assert!(from_pascal(-1.0, PressureUnit::Bar).is_err());
        assert_eq!(to_pascal(0.0, PressureUnit::Bar).unwrap(), 0.0);
    }

    #[test]
    fn unit_tags_serialize_by_name() {
        let json = serde_json::to_string(&PressureUnit::MillimeterOfMercury).unwrap();
        assert_eq!(json, "\"MillimeterOfMercury\"");
        let back: TemperatureUnit = serde_json::from_str("\"Celsius\"").unwrap();
        assert_eq!(back, TemperatureUnit::Celsius);
    }

    proptest! {
        #[test]
        fn prop_celsius_kelvin_roundtrip(kelvin in 0.0..2e4f64) {
            let celsius = kelvin_to_celsius(kelvin).unwrap();
            let back = celsius_to_kelvin(celsius).unwrap();
            prop_assert!((back - kelvin).abs() <= 1e-9 * kelvin.max(1.0));
        }

        #[test]
        fn prop_fahrenheit_roundtrip(kelvin in 0.0..2e4f64) {
            let f = kelvin_to_fahrenheit(kelvin).unwrap();
            let back = fahrenheit_to_kelvin(f).unwrap();
            prop_assert!((back - kelvin).abs() <= 1e-9 * kelvin.max(1.0));
        }

        #[test]
        fn prop_pressure_roundtrip_through_any_pair(value in 0.0..1e4f64) {
            for unit in [
                PressureUnit::Pascal,
                PressureUnit::Bar,
                PressureUnit::Atmosphere,
                PressureUnit::MillimeterOfMercury,
            ] {
                let pa = to_pascal(value, unit).unwrap();
                let back = from_pascal(pa, unit).unwrap();
                prop_assert!((back - value).abs() <= 1e-9 * value.max(1.0));
            }
        }
    }
}

//! Physical constants used across the formula modules.
//!
//! Defined values follow the 2019 SI redefinition where a constant is exact
//! (speed of light, Planck, Boltzmann, Avogadro, elementary charge); measured
//! values use CODATA 2018. Pure data, no logic.

/// Standard gravitational acceleration at the Earth's surface, m/s². Exact by
/// convention (3rd CGPM, 1901).
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// Newtonian constant of gravitation, m³/(kg·s²). CODATA 2018.
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Molar gas constant R, J/(mol·K). Exact since the 2019 SI redefinition
/// (product of the Boltzmann and Avogadro constants).
pub const MOLAR_GAS_CONSTANT: f64 = 8.314_462_618;

/// Avogadro constant, 1/mol. Exact.
pub const AVOGADRO_CONSTANT: f64 = 6.022_140_76e23;

/// Boltzmann constant, J/K. Exact.
pub const BOLTZMANN_CONSTANT: f64 = 1.380_649e-23;

/// Planck constant, J·s. Exact.
pub const PLANCK_CONSTANT: f64 = 6.626_070_15e-34;

/// Speed of light in vacuum, m/s. Exact.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Elementary charge, C. Exact.
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Absolute zero expressed in degrees Celsius.
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Standard atmosphere, Pa. Exact by definition.
pub const STANDARD_ATMOSPHERE: f64 = 101_325.0;

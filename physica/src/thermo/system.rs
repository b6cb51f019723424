//! Thermodynamic system and process classification.
//!
//! [`SystemKind`] encodes which exchanges with the surroundings each system
//! type permits as a fixed lookup. [`is_process_satisfied`] checks whether
//! two observed states are compatible with an idealized process's defining
//! equality within a tolerance.

use crate::error::{ensure_positive, ensure_tolerance, Result};
use serde::{Deserialize, Serialize};

/// What a system may exchange with its surroundings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRules {
    /// Matter may cross the boundary.
    pub mass: bool,
    /// Heat may cross the boundary.
    pub heat: bool,
    /// Work may be done across the boundary.
    pub work: bool,
}

impl ExchangeRules {
    /// Whether any energy crosses the boundary (as heat or work).
    #[inline]
    pub const fn energy(&self) -> bool {
        self.heat || self.work
    }
}

/// Classification of a thermodynamic system by its boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemKind {
    /// Exchanges both matter and energy with the surroundings.
    Open,
    /// Exchanges energy but not matter.
    Closed,
    /// Exchanges neither matter nor energy.
    Isolated,
}

impl SystemKind {
    /// The fixed exchange permissions of this system type.
    pub const fn exchange_rules(self) -> ExchangeRules {
        match self {
            SystemKind::Open => ExchangeRules {
                mass: true,
                heat: true,
                work: true,
            },
            SystemKind::Closed => ExchangeRules {
                mass: false,
                heat: true,
                work: true,
            },
            SystemKind::Isolated => ExchangeRules {
                mass: false,
                heat: false,
                work: false,
            },
        }
    }

    /// Whether matter may cross the boundary.
    #[inline]
    pub const fn exchanges_mass(self) -> bool {
        self.exchange_rules().mass
    }

    /// Whether heat may cross the boundary.
    #[inline]
    pub const fn exchanges_heat(self) -> bool {
        self.exchange_rules().heat
    }

    /// Whether work may be done across the boundary.
    #[inline]
    pub const fn exchanges_work(self) -> bool {
        self.exchange_rules().work
    }

    /// Whether any energy may cross the boundary.
    #[inline]
    pub const fn exchanges_energy(self) -> bool {
        self.exchange_rules().energy()
    }

    /// Lowercase label for display and serialization contexts.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SystemKind::Open => "open",
            SystemKind::Closed => "closed",
            SystemKind::Isolated => "isolated",
        }
    }
}

/// Idealized process classification by the state variable it holds fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessKind {
    /// Constant temperature.
    Isothermal,
    /// Constant pressure.
    Isobaric,
    /// Constant volume.
    Isochoric,
    /// No heat exchange.
    Adiabatic,
}

impl ProcessKind {
    /// Lowercase label for display and serialization contexts.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProcessKind::Isothermal => "isothermal",
            ProcessKind::Isobaric => "isobaric",
            ProcessKind::Isochoric => "isochoric",
            ProcessKind::Adiabatic => "adiabatic",
        }
    }
}

/// An observed equilibrium state of a gas: absolute pressure (Pa), volume
/// (m³) and temperature (K), all strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GasState {
    /// Absolute pressure, Pa.
    pub pressure: f64,
    /// Volume, m³.
    pub volume: f64,
    /// Temperature, K.
    pub temperature: f64,
}

impl GasState {
    /// Creates a state after validating that all three variables are
    /// strictly positive.
    pub fn new(pressure: f64, volume: f64, temperature: f64) -> Result<Self> {
        ensure_positive("pressure", pressure)?;
        ensure_positive("volume", volume)?;
        ensure_positive("temperature", temperature)?;
        Ok(Self {
            pressure,
            volume,
            temperature,
        })
    }

    fn validate(&self) -> Result<()> {
        Self::new(self.pressure, self.volume, self.temperature).map(|_| ())
    }
}

/// Whether two states are compatible with `process` within `tolerance`.
///
/// Isothermal compares temperatures, isobaric pressures, isochoric volumes.
/// **Adiabatic always returns `true`**: its defining condition is Q = 0,
/// which cannot be observed from two states alone — a known limitation of
/// this check, preserved as documented rather than guessed around.
///
/// ```rust
/// use physica::thermo::system::{is_process_satisfied, GasState, ProcessKind};
/// let a = GasState::new(100_000.0, 1.0, 300.0).unwrap();
/// let b = GasState::new(50_000.0, 2.0, 300.0).unwrap();
/// assert!(is_process_satisfied(ProcessKind::Isothermal, &a, &b, 1e-9).unwrap());
/// assert!(!is_process_satisfied(ProcessKind::Isobaric, &a, &b, 1e-9).unwrap());
/// ```
pub fn is_process_satisfied(
    process: ProcessKind,
    from: &GasState,
    to: &GasState,
    tolerance: f64,
) -> Result<bool> {
    ensure_tolerance("tolerance", tolerance)?;
    from.validate()?;
    to.validate()?;
    let satisfied = match process {
        ProcessKind::Isothermal => (from.temperature - to.temperature).abs() <= tolerance,
        ProcessKind::Isobaric => (from.pressure - to.pressure).abs() <= tolerance,
        ProcessKind::Isochoric => (from.volume - to.volume).abs() <= tolerance,
        // Q = 0 is not part of the state signature; nothing to check.
        ProcessKind::Adiabatic => true,
    };
    Ok(satisfied)
}

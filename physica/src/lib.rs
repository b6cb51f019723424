//! # physica
//!
//! Stateless, closed-form formula library for classical mechanics
//! (kinematics, statics, dynamics), thermodynamics, unit conversion,
//! descriptive statistics, combinatorics, angle utilities and color-space
//! conversion.
//!
//! Every public entry point is a pure function: scalar or small-struct
//! inputs in, a scalar or small-struct result out, computed from a
//! closed-form physical or mathematical equation. Invalid arguments
//! (negative mass, zero divisor, out-of-domain percentile, ...) are rejected
//! with a descriptive [`Error`] naming the offending parameter — never with
//! NaN, except where a function explicitly documents a NaN contract.
//!
//! There is no state, no I/O and no shared data: every function is safe to
//! call from any number of threads simultaneously.
//!
//! # Modules
//!
//! - [`math`] — angles, number predicates, combinatorics, statistics,
//!   frequency analysis, means and real roots.
//! - [`mechanics`] — linear/circular/projectile kinematics, statics
//!   (weighted centers, equilibrium, beams, friction), dynamics, rotation
//!   and momentum.
//! - [`thermo`] — first law, ideal gas law, state variables, system and
//!   process classification, temperature/pressure conversion.
//! - [`color`] — RGB↔HSV↔HSL conversion.
//! - [`constants`] — physical constants.
//!
//! # Quick start
//!
//! ```rust
//! use physica::mechanics::beam::{support_reactions, PointLoad};
//! use physica::thermo::units::celsius_to_kelvin;
//!
//! let loads = [PointLoad::new(2.0, 10.0)];
//! let (r_a, r_b) = support_reactions(&loads, &[], 0.0, 4.0)?;
//! assert_eq!((r_a, r_b), (5.0, 5.0));
//!
//! assert_eq!(celsius_to_kelvin(25.0)?, 298.15);
//! # Ok::<(), physica::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod color;
pub mod constants;
pub mod error;
pub mod math;
pub mod mechanics;
pub mod thermo;
pub mod vector;

pub use error::{Error, Result};
pub use vector::{Vec2, Vec3};

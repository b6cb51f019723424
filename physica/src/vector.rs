//! Fixed-size coordinate groups for 2D and 3D formulas.
//!
//! [`Vec2`] and [`Vec3`] are plain value structs, not vector-algebra types:
//! they carry no arithmetic operators on purpose. Every formula that needs
//! vector arithmetic computes it from the components inline, so the numeric
//! content of each equation stays visible at the call site.

use serde::{Deserialize, Serialize};

/// A pair of Cartesian components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vec2 {
    /// Creates a component pair.
    ///
    /// ```rust
    /// use physica::Vec2;
    /// let v = Vec2::new(3.0, 4.0);
    /// assert_eq!(v.x, 3.0);
    /// assert_eq!(v.y, 4.0);
    /// ```
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A triple of Cartesian components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// First component.
    pub x: f64,
    /// Second component.
    pub y: f64,
    /// Third component.
    pub z: f64,
}

impl Vec3 {
    /// Creates a component triple.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let v = Vec2::new(1.5, -2.5);
        let json = serde_json::to_string(&v).unwrap();
        let back: Vec2 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);

        let v = Vec3::new(1.0, 2.0, 3.0);
        let json = serde_json::to_string(&v).unwrap();
        let back: Vec3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(Vec2::default(), Vec2::new(0.0, 0.0));
        assert_eq!(Vec3::default(), Vec3::new(0.0, 0.0, 0.0));
    }
}

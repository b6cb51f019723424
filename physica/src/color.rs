//! Color-space conversion between RGB, HSV and HSL.
//!
//! RGB↔HSV and RGB↔HSL use the standard piecewise hue-sector formulas.
//! HSV↔HSL deliberately do **not** re-derive through RGB: they apply the
//! closed-form algebraic identities between the two cylindrical spaces, so
//! the pair stays mutually consistent by construction.
//!
//! Hue is in degrees and wrapped into `[0, 360)`; saturation, value and
//! lightness are fractions in `[0, 1]` and validated on every conversion
//! that consumes them. Byte channels round to the nearest value, so an
//! RGB→HSV→RGB round trip may move each channel by at most one step.

use crate::error::{ensure_finite, ensure_in_range, Result};
use serde::{Deserialize, Serialize};

/// A color as 8-bit RGB channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates an RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A color as hue (degrees), saturation and value (fractions).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation, `[0, 1]`.
    pub s: f64,
    /// Value (brightness), `[0, 1]`.
    pub v: f64,
}

impl Hsv {
    /// Creates an HSV color.
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

/// A color as hue (degrees), saturation and lightness (fractions).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation, `[0, 1]`.
    pub s: f64,
    /// Lightness, `[0, 1]`.
    pub l: f64,
}

impl Hsl {
    /// Creates an HSL color.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

fn wrap_hue(h: f64) -> Result<f64> {
    ensure_finite("h", h)?;
    let wrapped = h.rem_euclid(360.0);
    if wrapped >= 360.0 {
        Ok(0.0)
    } else {
        Ok(wrapped)
    }
}

fn hue_from_channels(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    60.0 * sector
}

fn channel_to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Converts an RGB color to HSV.
///
/// Grey colors (zero chroma) report hue 0; black reports saturation 0.
///
/// ```rust
/// use physica::color::{rgb_to_hsv, Rgb};
/// let hsv = rgb_to_hsv(Rgb::new(255, 0, 0));
/// assert_eq!((hsv.h, hsv.s, hsv.v), (0.0, 1.0, 1.0));
/// ```
pub fn rgb_to_hsv(color: Rgb) -> Hsv {
    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    Hsv {
        h: hue_from_channels(r, g, b, max, delta),
        s: if max == 0.0 { 0.0 } else { delta / max },
        v: max,
    }
}

/// Converts an HSV color to RGB.
///
/// The hue is wrapped into `[0, 360)`; saturation and value must be in
/// `[0, 1]`.
pub fn hsv_to_rgb(color: Hsv) -> Result<Rgb> {
    let h = wrap_hue(color.h)?;
    let s = ensure_in_range("s", color.s, 0.0, 1.0)?;
    let v = ensure_in_range("v", color.v, 0.0, 1.0)?;

    let chroma = v * s;
    let sector = h / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let (r1, g1, b1) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = v - chroma;
    Ok(Rgb {
        r: channel_to_byte(r1 + m),
        g: channel_to_byte(g1 + m),
        b: channel_to_byte(b1 + m),
    })
}

/// Converts an RGB color to HSL.
pub fn rgb_to_hsl(color: Rgb) -> Hsl {
    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = 0.5 * (max + min);
    Hsl {
        h: hue_from_channels(r, g, b, max, delta),
        s: if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        },
        l,
    }
}

/// Converts an HSL color to RGB.
pub fn hsl_to_rgb(color: Hsl) -> Result<Rgb> {
    let h = wrap_hue(color.h)?;
    let s = ensure_in_range("s", color.s, 0.0, 1.0)?;
    let l = ensure_in_range("l", color.l, 0.0, 1.0)?;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sector = h / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let (r1, g1, b1) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - 0.5 * chroma;
    Ok(Rgb {
        r: channel_to_byte(r1 + m),
        g: channel_to_byte(g1 + m),
        b: channel_to_byte(b1 + m),
    })
}

/// Converts HSV to HSL by the closed-form identity
/// `L = V·(1 − S/2)`, `S_l = (V − L) / min(L, 1 − L)` (zero at the
/// lightness extremes).
pub fn hsv_to_hsl(color: Hsv) -> Result<Hsl> {
    let h = wrap_hue(color.h)?;
    let s = ensure_in_range("s", color.s, 0.0, 1.0)?;
    let v = ensure_in_range("v", color.v, 0.0, 1.0)?;

    let l = v * (1.0 - s / 2.0);
    let s_l = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };
    Ok(Hsl { h, s: s_l, l })
}

/// Converts HSL to HSV by the inverse identity
/// `V = L + S·min(L, 1 − L)`, `S_v = 2·(1 − L/V)` (zero for black).
pub fn hsl_to_hsv(color: Hsl) -> Result<Hsv> {
    let h = wrap_hue(color.h)?;
    let s = ensure_in_range("s", color.s, 0.0, 1.0)?;
    let l = ensure_in_range("l", color.l, 0.0, 1.0)?;

    let v = l + s * l.min(1.0 - l);
    let s_v = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    Ok(Hsv { h, s: s_v, v })
}

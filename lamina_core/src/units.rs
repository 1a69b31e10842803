//! # Unit Types
//!
//! Type-safe wrappers for the units that cross the client/backend boundary,
//! plus the SI-prefix metric formatter used by every live preview.
//!
//! ## Design Philosophy
//!
//! Simple newtype wrappers rather than a full units library:
//! - The backend speaks plain SI (Pa, m, degrees)
//! - JSON serialization stays clean (just numbers)
//! - Display conversions (GPa, MPa) are explicit `From` impls
//!
//! ## Example
//!
//! ```rust
//! use lamina_core::units::{format_metric, Gigapascals, Pascals};
//!
//! let e1 = Pascals(140e9);
//! let gpa: Gigapascals = e1.into();
//! assert_eq!(gpa.0, 140.0);
//!
//! assert_eq!(format_metric(140e9, "Pa"), "140 GPa");
//! assert_eq!(format_metric(0.000125, "m"), "125 µm");
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Stress / Modulus Units
// ============================================================================

/// Stress or modulus in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress or modulus in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

/// Stress or modulus in gigapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gigapascals(pub f64);

impl From<Pascals> for Megapascals {
    fn from(pa: Pascals) -> Self {
        Megapascals(pa.0 / 1e6)
    }
}

impl From<Megapascals> for Pascals {
    fn from(mpa: Megapascals) -> Self {
        Pascals(mpa.0 * 1e6)
    }
}

impl From<Pascals> for Gigapascals {
    fn from(pa: Pascals) -> Self {
        Gigapascals(pa.0 / 1e9)
    }
}

impl From<Gigapascals> for Pascals {
    fn from(gpa: Gigapascals) -> Self {
        Pascals(gpa.0 * 1e9)
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0 * PI / 180.0)
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0 * 180.0 / PI)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }
    };
}

impl_arithmetic!(Pascals);
impl_arithmetic!(Megapascals);
impl_arithmetic!(Gigapascals);
impl_arithmetic!(Meters);
impl_arithmetic!(Degrees);
impl_arithmetic!(Radians);

// ============================================================================
// Metric Formatter
// ============================================================================

/// SI prefix picked by [`format_metric`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiPrefix {
    Giga,
    Mega,
    Kilo,
    None,
    Milli,
    Micro,
    Nano,
}

impl SiPrefix {
    /// Choose the prefix for an absolute magnitude.
    ///
    /// Large prefixes are checked first, so anything below 1e-6 is nano even
    /// when it is vanishingly small.
    pub fn for_magnitude(abs: f64) -> Self {
        if abs >= 1e9 {
            SiPrefix::Giga
        } else if abs >= 1e6 {
            SiPrefix::Mega
        } else if abs >= 1e3 {
            SiPrefix::Kilo
        } else if abs < 1e-6 {
            SiPrefix::Nano
        } else if abs < 1e-3 {
            SiPrefix::Micro
        } else if abs < 1.0 {
            SiPrefix::Milli
        } else {
            SiPrefix::None
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SiPrefix::Giga => "G",
            SiPrefix::Mega => "M",
            SiPrefix::Kilo => "k",
            SiPrefix::None => "",
            SiPrefix::Milli => "m",
            SiPrefix::Micro => "µ",
            SiPrefix::Nano => "n",
        }
    }

    /// Scale a magnitude into this prefix.
    pub fn scale(&self, abs: f64) -> f64 {
        match self {
            SiPrefix::Giga => abs / 1e9,
            SiPrefix::Mega => abs / 1e6,
            SiPrefix::Kilo => abs / 1e3,
            SiPrefix::None => abs,
            SiPrefix::Milli => abs * 1e3,
            SiPrefix::Micro => abs * 1e6,
            SiPrefix::Nano => abs * 1e9,
        }
    }
}

/// Round to `decimals` places with ties going away from zero.
pub fn round_half_away(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Fixed-point text with exactly `decimals` places, ties rounded away from zero.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let rounded = round_half_away(value, decimals);
    // avoid "-0.00"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", decimals, rounded)
}

/// Format a number with at most `decimals` decimal places, trailing zeros removed.
pub fn trim_decimals(value: f64, decimals: usize) -> String {
    let fixed = to_fixed(value, decimals);
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Scale a raw SI value to a human-readable string, e.g. `140e9, "Pa"` → `"140 GPa"`.
///
/// Non-finite values give an empty string and zero gives `"0 <unit>"`.
pub fn format_metric(value: f64, unit: &str) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value == 0.0 {
        return format!("0 {}", unit);
    }

    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    let prefix = SiPrefix::for_magnitude(abs);

    format!(
        "{}{} {}{}",
        sign,
        trim_decimals(prefix.scale(abs), 3),
        prefix.symbol(),
        unit
    )
}

/// [`format_metric`] for raw field text; empty or non-numeric text gives `""`.
pub fn format_metric_str(raw: &str, unit: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(value) => format_metric(value, unit),
        Err(_) => String::new(),
    }
}

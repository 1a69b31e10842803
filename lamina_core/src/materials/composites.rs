//! Built-in composite presets
//!
//! Typical unidirectional prepreg properties used to seed the material
//! library. Values are SI (Pa, m).

use crate::laminate::{MaterialConstants, StrengthLimits};
use crate::units::{Degrees, Meters, Pascals};

use super::MaterialPreset;

/// Default ply thickness of a prepreg layer
pub const DEFAULT_PLY_THICKNESS: Meters = Meters(0.125e-3);

/// Carbon/Epoxy (T300/5208 class)
pub fn carbon_epoxy() -> MaterialPreset {
    MaterialPreset {
        key: "carbon".to_string(),
        material: MaterialConstants {
            e1: Pascals(140e9),
            e2: Pascals(10e9),
            g12: Pascals(5e9),
            v12: 0.3,
            name: "Carbon/Epoxy".to_string(),
        },
        limits: StrengthLimits {
            xt: Pascals(1500e6),
            xc: Pascals(1200e6),
            yt: Pascals(50e6),
            yc: Pascals(250e6),
            s: Pascals(70e6),
        },
        stack: vec![Degrees(0.0), Degrees(45.0), Degrees(-45.0), Degrees(90.0)],
        symmetric: true,
        ply_thickness: DEFAULT_PLY_THICKNESS,
    }
}

/// Glass/Epoxy (E-glass class)
pub fn glass_epoxy() -> MaterialPreset {
    MaterialPreset {
        key: "glass".to_string(),
        material: MaterialConstants {
            e1: Pascals(43e9),
            e2: Pascals(10e9),
            g12: Pascals(4.5e9),
            v12: 0.29,
            name: "Glass/Epoxy".to_string(),
        },
        limits: StrengthLimits {
            xt: Pascals(1062e6),
            xc: Pascals(610e6),
            yt: Pascals(31e6),
            yc: Pascals(118e6),
            s: Pascals(72e6),
        },
        stack: vec![Degrees(0.0), Degrees(90.0)],
        symmetric: true,
        ply_thickness: Meters(0.2e-3),
    }
}

//! # Materials Library
//!
//! Named presets that fill every form field at once: ply constants,
//! strength allowables and a starting layup.
//!
//! The library is a plain value passed to whoever needs it (form controller,
//! GUI, CLI). Built-ins come from [`composites`]; extra presets can be added
//! from the settings file and replace built-ins with the same key.
//!
//! ## Example
//!
//! ```rust
//! use lamina_core::materials::MaterialLibrary;
//!
//! let library = MaterialLibrary::default();
//! let carbon = library.get("carbon").unwrap();
//! assert_eq!(carbon.material.name, "Carbon/Epoxy");
//! assert!(library.get("unobtainium").is_err());
//! ```

pub mod composites;

use serde::{Deserialize, Serialize};

use crate::errors::{LaminaError, LaminaResult};
use crate::laminate::{MaterialConstants, StrengthLimits};
use crate::units::{Degrees, Meters};

/// One selectable entry of the materials library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPreset {
    /// Lookup key used by the CLI and settings file (e.g. "carbon")
    pub key: String,
    pub material: MaterialConstants,
    pub limits: StrengthLimits,
    /// Starting layup
    pub stack: Vec<Degrees>,
    #[serde(default)]
    pub symmetric: bool,
    #[serde(default = "default_ply_thickness")]
    pub ply_thickness: Meters,
}

fn default_ply_thickness() -> Meters {
    composites::DEFAULT_PLY_THICKNESS
}

impl MaterialPreset {
    pub fn display_name(&self) -> &str {
        &self.material.name
    }
}

impl std::fmt::Display for MaterialPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Ordered collection of presets.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialLibrary {
    presets: Vec<MaterialPreset>,
}

impl MaterialLibrary {
    /// Library with only the built-in presets
    pub fn builtin() -> Self {
        MaterialLibrary {
            presets: vec![composites::carbon_epoxy(), composites::glass_epoxy()],
        }
    }

    /// Add presets, replacing any existing entry with the same key.
    pub fn with_presets(mut self, extra: impl IntoIterator<Item = MaterialPreset>) -> Self {
        for preset in extra {
            match self.presets.iter_mut().find(|p| p.key == preset.key) {
                Some(existing) => *existing = preset,
                None => self.presets.push(preset),
            }
        }
        self
    }

    /// Look up a preset by key (case-insensitive)
    pub fn get(&self, key: &str) -> LaminaResult<&MaterialPreset> {
        self.presets
            .iter()
            .find(|p| p.key.eq_ignore_ascii_case(key))
            .ok_or_else(|| LaminaError::material_not_found(key))
    }

    pub fn presets(&self) -> &[MaterialPreset] {
        &self.presets
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.key.as_str())
    }

    /// First preset, used to seed a fresh form
    pub fn first(&self) -> Option<&MaterialPreset> {
        self.presets.first()
    }
}

impl Default for MaterialLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

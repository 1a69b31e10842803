//! # Settings
//!
//! Optional TOML settings shared by the GUI and CLI. Every section has
//! defaults, so an empty or missing file is valid.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//! timeout_secs = 30
//!
//! [ui]
//! toast_seconds = 5.0
//! dark_mode = false
//! polar_component = "ex"
//!
//! [[materials]]
//! key = "kevlar"
//! # ... same shape as a built-in preset
//! ```
//!
//! Lookup order: explicit path, `$LAMINA_CONFIG`, `./lamina.toml`.
//! `$LAMINA_API_URL` overrides `api.base_url` afterwards.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{LaminaError, LaminaResult};
use crate::feedback::DEFAULT_TOAST_SECONDS;
use crate::laminate::ModulusComponent;
use crate::materials::{MaterialLibrary, MaterialPreset};

pub const CONFIG_ENV: &str = "LAMINA_CONFIG";
pub const API_URL_ENV: &str = "LAMINA_API_URL";
pub const DEFAULT_CONFIG_FILE: &str = "lamina.toml";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Desktop front-end preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// How long a toast stays before it starts fading
    pub toast_seconds: f32,
    pub dark_mode: bool,
    /// Modulus plotted on the polar chart at startup
    pub polar_component: ModulusComponent,
}

impl Default for UiSettings {
    fn default() -> Self {
        UiSettings {
            toast_seconds: DEFAULT_TOAST_SECONDS,
            dark_mode: false,
            polar_component: ModulusComponent::Ex,
        }
    }
}

impl UiSettings {
    /// Toast lifetime, at least half a second. Values `Duration` can't hold
    /// (`inf`, `nan`, overflow) fall back to the default.
    pub fn toast_duration(&self) -> Duration {
        let fallback = Duration::from_secs_f32(DEFAULT_TOAST_SECONDS);
        if self.toast_seconds.is_nan() {
            return fallback;
        }
        Duration::try_from_secs_f32(self.toast_seconds.max(0.5)).unwrap_or(fallback)
    }
}

/// All settings, as read from `lamina.toml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub ui: UiSettings,
    /// Extra presets, merged over the built-ins by key
    pub materials: Vec<MaterialPreset>,
}

impl Settings {
    /// Parse settings text; `origin` names the source in errors.
    pub fn from_toml_str(text: &str, origin: &str) -> LaminaResult<Self> {
        toml::from_str(text).map_err(|e| LaminaError::config(origin, e.to_string()))
    }

    pub fn load_from(path: &Path) -> LaminaResult<Self> {
        let origin = path.display().to_string();
        let text = std::fs::read_to_string(path)
            .map_err(|e| LaminaError::config(origin.clone(), e.to_string()))?;
        Self::from_toml_str(&text, &origin)
    }

    /// Which file to read, if any.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.is_file().then_some(local)
    }

    /// Load settings following the lookup order, then apply `$LAMINA_API_URL`.
    pub fn load(explicit: Option<&Path>) -> LaminaResult<Self> {
        let settings = match Self::resolve_path(explicit) {
            Some(path) => {
                debug!("Loading settings from {}", path.display());
                Self::load_from(&path)?
            }
            None => {
                debug!("No settings file, using defaults");
                Self::default()
            }
        };
        Ok(settings.with_base_url(std::env::var(API_URL_ENV).ok()))
    }

    /// Replace the base URL when `url` is a non-empty string.
    pub fn with_base_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.api.base_url = url;
        }
        self
    }

    /// Built-in presets plus the ones from the settings file.
    pub fn library(&self) -> MaterialLibrary {
        MaterialLibrary::builtin().with_presets(self.materials.iter().cloned())
    }
}

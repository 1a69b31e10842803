//! # lamina_core - Composite Laminate Client Engine
//!
//! `lamina_core` holds everything the Lamina front ends share: the request
//! and response payloads of the laminate backend, the form controller with
//! its live previews, the HTTP client, chart layout and drawing, result text
//! formatting and UI feedback state. The GUI and CLI are thin shells around
//! it.
//!
//! ## Design Philosophy
//!
//! - **Backend does the math**: laminate theory runs server-side; this crate
//!   validates only what the user can fix immediately (the ply stack)
//! - **JSON-First**: payload types mirror the backend's JSON field names
//! - **Injected seams**: [`client::LaminateApi`] for the backend,
//!   [`gateway::ResultSink`] for result delivery, [`chart::ChartCanvas`] for
//!   drawing
//! - **Rich Errors**: one [`LaminaError`] enum, no string matching
//!
//! ## Quick Start
//!
//! ```rust
//! use lamina_core::form::{Field, LaminateForm};
//! use lamina_core::materials::MaterialLibrary;
//!
//! let library = MaterialLibrary::default();
//! let mut form = LaminateForm::from_preset(library.get("glass").unwrap());
//! form.edit(Field::Stack, "0, 45, -45, 90");
//!
//! let body = serde_json::to_string(&form.laminate_input().unwrap()).unwrap();
//! assert!(body.contains("\"symmetry\":true"));
//! ```
//!
//! ## Modules
//!
//! - [`laminate`] - backend payloads
//! - [`form`] - form controller and previews
//! - [`stack`] - ply stack parsing and summary
//! - [`materials`] - preset library
//! - [`client`] - backend trait and HTTP implementation
//! - [`gateway`] - one request per user action
//! - [`chart`] - polar and envelope charts
//! - [`report`] - result text and ABD matrix formatting
//! - [`feedback`] - toasts, busy buttons, copy confirmation
//! - [`units`] - unit newtypes and the metric formatter
//! - [`config`] - settings file
//! - [`logging`] - `tracing` subscriber setup
//! - [`errors`] - structured error types

pub mod chart;
pub mod client;
pub mod config;
pub mod errors;
pub mod feedback;
pub mod form;
pub mod gateway;
pub mod laminate;
pub mod logging;
pub mod materials;
pub mod report;
pub mod stack;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use client::{HttpClient, LaminateApi};
pub use config::Settings;
pub use errors::{LaminaError, LaminaResult};
pub use form::{Field, LaminateForm, Selection};
pub use gateway::{ActionResult, Gateway, ResultSink};
pub use laminate::{
    CalculateResponse, EnvelopePoint, FailureRequest, LaminateInput, ModulusComponent, PolarSample,
};
pub use materials::{MaterialLibrary, MaterialPreset};
pub use units::format_metric;

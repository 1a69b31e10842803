//! UI module for Lamina GUI
//!
//! # Panel Structure
//! - `toolbar` - Title, materials preset picker, action buttons, theme toggle
//! - `input_panel` - Left panel: material constants, layup, strength limits
//! - `results_panel` - Right panel: constants, ABD matrix, polar and envelope plots
//! - `status_bar` - Bottom line: backend URL, last update, status message
//! - `toasts` - Transient notifications stacked over the window
//!
//! # Shared Components
//! - `shared/charts` - Canvas programs for both plots

pub mod toolbar;
pub mod input_panel;
pub mod results_panel;
pub mod status_bar;
pub mod toasts;

pub mod shared;

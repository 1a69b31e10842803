//! # Laminate Form Controller
//!
//! Holds the raw text of every input field and derives everything the input
//! panel shows from it: per-field metric previews, the ply-stack preview,
//! and the "current selection" indicator of the materials library.
//!
//! Field text is kept verbatim. Numbers are only parsed when a request body
//! is built; unparseable numeric fields become `NaN`, which serializes as
//! JSON `null` so the backend reports them with its own field messages. The
//! ply stack is the one field validated client-side.
//!
//! ## Example
//!
//! ```rust
//! use lamina_core::form::{Field, LaminateForm, Selection};
//! use lamina_core::materials::MaterialLibrary;
//!
//! let library = MaterialLibrary::default();
//! let mut form = LaminateForm::from_preset(library.get("carbon").unwrap());
//! assert_eq!(form.preview(Field::E1), "140 GPa");
//!
//! form.edit(Field::E1, "150e9");
//! assert_eq!(form.selection(), &Selection::Custom);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::LaminaResult;
use crate::laminate::{FailureRequest, LaminateInput, MaterialConstants, StrengthLimits};
use crate::materials::MaterialPreset;
use crate::stack::{parse_stack, StackPreview};
use crate::units::{format_metric_str, trim_decimals, Meters, Pascals};

/// Name sent to the backend for hand-edited material constants
pub const CUSTOM_MATERIAL_NAME: &str = "Custom";

/// Every text field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    E1,
    E2,
    G12,
    V12,
    Stack,
    Thickness,
    Xt,
    Xc,
    Yt,
    Yc,
    S,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::E1,
        Field::E2,
        Field::G12,
        Field::V12,
        Field::Stack,
        Field::Thickness,
        Field::Xt,
        Field::Xc,
        Field::Yt,
        Field::Yc,
        Field::S,
    ];

    /// Material constants section
    pub const MATERIAL: [Field; 4] = [Field::E1, Field::E2, Field::G12, Field::V12];

    /// Strength allowables section
    pub const LIMITS: [Field; 5] = [Field::Xt, Field::Xc, Field::Yt, Field::Yc, Field::S];

    /// Identifier matching the backend's field names
    pub fn id(&self) -> &'static str {
        match self {
            Field::E1 => "E1",
            Field::E2 => "E2",
            Field::G12 => "G12",
            Field::V12 => "v12",
            Field::Stack => "stack",
            Field::Thickness => "thickness",
            Field::Xt => "Xt",
            Field::Xc => "Xc",
            Field::Yt => "Yt",
            Field::Yc => "Yc",
            Field::S => "S",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::E1 => "E1 (Pa)",
            Field::E2 => "E2 (Pa)",
            Field::G12 => "G12 (Pa)",
            Field::V12 => "v12",
            Field::Stack => "Ply angles (deg)",
            Field::Thickness => "Ply thickness (m)",
            Field::Xt => "Xt (Pa)",
            Field::Xc => "Xc (Pa)",
            Field::Yt => "Yt (Pa)",
            Field::Yc => "Yc (Pa)",
            Field::S => "S (Pa)",
        }
    }

    /// Unit of the live preview; `None` for dimensionless or non-numeric fields
    pub fn preview_unit(&self) -> Option<&'static str> {
        match self {
            Field::V12 | Field::Stack => None,
            Field::Thickness => Some("m"),
            _ => Some("Pa"),
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// State of the materials-library indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// Fields still hold the preset with this key
    Preset(String),
    /// At least one field was edited by hand
    Custom,
}

/// Raw form state.
#[derive(Debug, Clone, PartialEq)]
pub struct LaminateForm {
    values: [String; 11],
    symmetric: bool,
    selection: Selection,
    material_name: String,
}

impl LaminateForm {
    /// Empty form in the `Custom` state
    pub fn new() -> Self {
        LaminateForm {
            values: Default::default(),
            symmetric: false,
            selection: Selection::Custom,
            material_name: CUSTOM_MATERIAL_NAME.to_string(),
        }
    }

    /// Form filled from a preset
    pub fn from_preset(preset: &MaterialPreset) -> Self {
        let mut form = Self::new();
        form.apply_preset(preset);
        form
    }

    /// Overwrite every field with the preset and select it.
    ///
    /// This is the only path back from `Custom` to a named selection.
    pub fn apply_preset(&mut self, preset: &MaterialPreset) {
        let m = &preset.material;
        let l = &preset.limits;

        self.set(Field::E1, number_text(m.e1.0));
        self.set(Field::E2, number_text(m.e2.0));
        self.set(Field::G12, number_text(m.g12.0));
        self.set(Field::V12, number_text(m.v12));
        self.set(
            Field::Stack,
            preset
                .stack
                .iter()
                .map(|a| trim_decimals(a.0, 3))
                .collect::<Vec<_>>()
                .join(", "),
        );
        self.set(Field::Thickness, number_text(preset.ply_thickness.0));
        self.set(Field::Xt, number_text(l.xt.0));
        self.set(Field::Xc, number_text(l.xc.0));
        self.set(Field::Yt, number_text(l.yt.0));
        self.set(Field::Yc, number_text(l.yc.0));
        self.set(Field::S, number_text(l.s.0));

        self.symmetric = preset.symmetric;
        self.material_name = m.name.clone();
        self.selection = Selection::Preset(preset.key.clone());
    }

    /// Manual edit of one field; always switches the selection to `Custom`.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.set(field, value.into());
        self.mark_custom();
    }

    /// Manual toggle of the symmetry checkbox; also switches to `Custom`.
    pub fn set_symmetric(&mut self, symmetric: bool) {
        self.symmetric = symmetric;
        self.mark_custom();
    }

    fn set(&mut self, field: Field, value: String) {
        self.values[field.index()] = value;
    }

    fn mark_custom(&mut self) {
        self.selection = Selection::Custom;
        self.material_name = CUSTOM_MATERIAL_NAME.to_string();
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn symmetric(&self) -> bool {
        self.symmetric
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Text of the selection indicator: preset name or "Custom"
    pub fn selection_label(&self) -> &str {
        match self.selection {
            Selection::Preset(_) => &self.material_name,
            Selection::Custom => CUSTOM_MATERIAL_NAME,
        }
    }

    /// Live metric preview of a field ("140 GPa"); empty for unitless fields
    pub fn preview(&self, field: Field) -> String {
        match field.preview_unit() {
            Some(unit) => format_metric_str(self.value(field), unit),
            None => String::new(),
        }
    }

    /// Live ply-stack preview
    pub fn stack_preview(&self) -> StackPreview {
        StackPreview::build(
            self.value(Field::Stack),
            self.symmetric,
            self.value(Field::Thickness),
        )
    }

    /// Request body for `/api/calculate` and `/api/polar`.
    ///
    /// Fails only on the ply stack.
    pub fn laminate_input(&self) -> LaminaResult<LaminateInput> {
        let stack = parse_stack(self.value(Field::Stack))?;

        Ok(LaminateInput {
            material: MaterialConstants {
                e1: Pascals(self.number(Field::E1)),
                e2: Pascals(self.number(Field::E2)),
                g12: Pascals(self.number(Field::G12)),
                v12: self.number(Field::V12),
                name: self.material_name.clone(),
            },
            stack,
            symmetry: self.symmetric,
            thickness: Meters(self.number(Field::Thickness)),
        })
    }

    /// Strength allowables as entered
    pub fn limits(&self) -> StrengthLimits {
        StrengthLimits {
            xt: Pascals(self.number(Field::Xt)),
            xc: Pascals(self.number(Field::Xc)),
            yt: Pascals(self.number(Field::Yt)),
            yc: Pascals(self.number(Field::Yc)),
            s: Pascals(self.number(Field::S)),
        }
    }

    /// Request body for `/api/failure`
    pub fn failure_request(&self) -> LaminaResult<FailureRequest> {
        Ok(FailureRequest {
            laminate: self.laminate_input()?,
            limits: self.limits(),
        })
    }

    fn number(&self, field: Field) -> f64 {
        self.value(field).trim().parse().unwrap_or(f64::NAN)
    }
}

impl Default for LaminateForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Field text for a preset value: plain decimals for ordinary magnitudes,
/// exponent notation for moduli and strengths.
fn number_text(value: f64) -> String {
    let abs = value.abs();
    if abs != 0.0 && !(1e-3..1e4).contains(&abs) {
        format!("{:e}", value)
    } else {
        trim_decimals(value, 6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LaminaError;
    use crate::materials::MaterialLibrary;
    use crate::units::Degrees;

    fn carbon_form() -> LaminateForm {
        let library = MaterialLibrary::default();
        LaminateForm::from_preset(library.get("carbon").unwrap())
    }

    #[test]
    fn test_preset_fills_fields() {
        let form = carbon_form();
        assert_eq!(form.value(Field::E1), "1.4e11");
        assert_eq!(form.value(Field::V12), "0.3");
        assert_eq!(form.value(Field::Stack), "0, 45, -45, 90");
        assert_eq!(form.value(Field::Thickness), "1.25e-4");
        assert!(form.symmetric());
        assert_eq!(form.selection(), &Selection::Preset("carbon".to_string()));
        assert_eq!(form.selection_label(), "Carbon/Epoxy");
    }

    #[test]
    fn test_previews() {
        let form = carbon_form();
        assert_eq!(form.preview(Field::E1), "140 GPa");
        assert_eq!(form.preview(Field::Xt), "1.5 GPa");
        assert_eq!(form.preview(Field::Yt), "50 MPa");
        assert_eq!(form.preview(Field::Thickness), "125 µm");
        assert_eq!(form.preview(Field::V12), "");
    }

    #[test]
    fn test_edit_switches_to_custom_until_preset_chosen() {
        let library = MaterialLibrary::default();
        let mut form = carbon_form();

        form.edit(Field::E2, "11e9");
        assert_eq!(form.selection(), &Selection::Custom);
        assert_eq!(form.selection_label(), "Custom");
        assert_eq!(form.preview(Field::E2), "11 GPa");

        // further edits keep it custom
        form.edit(Field::E2, "10e9");
        assert_eq!(form.selection(), &Selection::Custom);

        form.apply_preset(library.get("glass").unwrap());
        assert_eq!(form.selection(), &Selection::Preset("glass".to_string()));
        assert_eq!(form.value(Field::E1), "4.3e10");
    }

    #[test]
    fn test_symmetry_toggle_is_an_edit() {
        let mut form = carbon_form();
        form.set_symmetric(false);
        assert!(!form.symmetric());
        assert_eq!(form.selection(), &Selection::Custom);
    }

    #[test]
    fn test_laminate_input_from_preset() {
        let input = carbon_form().laminate_input().unwrap();
        assert_eq!(input.material.e1, Pascals(140e9));
        assert_eq!(input.material.name, "Carbon/Epoxy");
        assert_eq!(input.stack.len(), 4);
        assert_eq!(input.stack[2], Degrees(-45.0));
        assert!(input.symmetry);
        assert!((input.thickness.0 - 0.125e-3).abs() < 1e-15);
    }

    #[test]
    fn test_custom_name_after_edit() {
        let mut form = carbon_form();
        form.edit(Field::G12, "6e9");
        let input = form.laminate_input().unwrap();
        assert_eq!(input.material.name, CUSTOM_MATERIAL_NAME);
        assert_eq!(input.material.g12, Pascals(6e9));
    }

    #[test]
    fn test_bad_stack_blocks_request() {
        let mut form = carbon_form();
        form.edit(Field::Stack, "0,abc");
        assert_eq!(
            form.laminate_input().unwrap_err(),
            LaminaError::invalid_angle("abc")
        );
        assert!(form.failure_request().is_err());
        assert!(!form.stack_preview().is_valid());
    }

    #[test]
    fn test_unparseable_number_left_to_backend() {
        let mut form = carbon_form();
        form.edit(Field::E1, "lots");
        let input = form.laminate_input().unwrap();
        assert!(input.material.e1.0.is_nan());
        let body = serde_json::to_value(&input).unwrap();
        assert!(body["material"]["E1"].is_null());
    }

    #[test]
    fn test_failure_request_limits() {
        let request = carbon_form().failure_request().unwrap();
        assert_eq!(request.limits.xt, Pascals(1500e6));
        assert_eq!(request.limits.s, Pascals(70e6));
    }
}

//! # Ply Stack Parsing
//!
//! Turns the free-text layup field ("0, 45, -45, 90" or "0 45 -45 90") into
//! ply angles and derives the preview shown next to the field: one badge per
//! ply, a `Sym` marker, layup notation and total laminate thickness.

use serde::{Deserialize, Serialize};

use crate::errors::{LaminaError, LaminaResult};
use crate::units::{format_metric, trim_decimals, Degrees, Meters};

/// Split the layup text on commas and whitespace and parse every token.
///
/// The first non-numeric token is reported as [`LaminaError::InvalidAngle`];
/// text without any token is [`LaminaError::EmptyStack`].
pub fn parse_stack(text: &str) -> LaminaResult<Vec<Degrees>> {
    let mut angles = Vec::new();

    for token in text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        match token.parse::<f64>() {
            Ok(angle) if angle.is_finite() => angles.push(Degrees(angle)),
            _ => return Err(LaminaError::invalid_angle(token)),
        }
    }

    if angles.is_empty() {
        return Err(LaminaError::EmptyStack);
    }

    Ok(angles)
}

/// Number of plies actually laid up.
pub fn effective_ply_count(entered: usize, symmetric: bool) -> usize {
    entered * if symmetric { 2 } else { 1 }
}

/// Total laminate thickness: `ply_count × (symmetric ? 2 : 1) × ply_thickness`.
pub fn total_thickness(entered: usize, symmetric: bool, ply_thickness: Meters) -> Meters {
    ply_thickness * effective_ply_count(entered, symmetric) as f64
}

/// Short layup notation, e.g. `[0/90/45]s`.
pub fn layup_notation(angles: &[Degrees], symmetric: bool) -> String {
    let body = angles
        .iter()
        .map(|a| trim_decimals(a.0, 3))
        .collect::<Vec<_>>()
        .join("/");
    format!("[{}]{}", body, if symmetric { "s" } else { "" })
}

/// Derived view of a valid ply stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackSummary {
    /// Angles as entered (before mirroring)
    pub angles: Vec<Degrees>,
    pub symmetric: bool,
    /// `None` when the ply thickness field is not a positive number
    pub total_thickness: Option<Meters>,
}

impl StackSummary {
    /// One label per entered ply, e.g. `"45°"`
    pub fn badges(&self) -> Vec<String> {
        self.angles
            .iter()
            .map(|a| format!("{}°", trim_decimals(a.0, 3)))
            .collect()
    }

    pub fn effective_ply_count(&self) -> usize {
        effective_ply_count(self.angles.len(), self.symmetric)
    }

    pub fn notation(&self) -> String {
        layup_notation(&self.angles, self.symmetric)
    }

    /// `"Sym"` marker for symmetric layups
    pub fn symmetry_indicator(&self) -> Option<&'static str> {
        self.symmetric.then_some("Sym")
    }

    /// One-line summary, e.g. `[0/90/45]s · 6 plies · 6 mm`
    pub fn describe(&self) -> String {
        let mut text = format!("{} · {} plies", self.notation(), self.effective_ply_count());
        if let Some(total) = self.total_thickness {
            text.push_str(" · ");
            text.push_str(&format_metric(total.0, "m"));
        }
        text
    }
}

/// Live preview state of the layup field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StackPreview {
    Valid(StackSummary),
    /// Field is marked invalid and `message` names the offending token
    Invalid { message: String },
}

impl StackPreview {
    /// Build the preview from the raw layup text, symmetry flag and ply thickness text.
    pub fn build(stack_text: &str, symmetric: bool, ply_thickness_text: &str) -> Self {
        match parse_stack(stack_text) {
            Ok(angles) => {
                let total_thickness = ply_thickness_text
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|t| t.is_finite() && *t > 0.0)
                    .map(|t| total_thickness(angles.len(), symmetric, Meters(t)));

                StackPreview::Valid(StackSummary {
                    angles,
                    symmetric,
                    total_thickness,
                })
            }
            Err(e) => StackPreview::Invalid { message: e.to_string() },
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, StackPreview::Valid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commas_and_spaces() {
        let angles = parse_stack("0, 45,-45 90").unwrap();
        assert_eq!(
            angles,
            vec![Degrees(0.0), Degrees(45.0), Degrees(-45.0), Degrees(90.0)]
        );
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        let err = parse_stack("0,abc,90").unwrap_err();
        assert_eq!(err, LaminaError::invalid_angle("abc"));
        assert_eq!(err.to_string(), "Invalid angle: \"abc\"");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_stack("  , ,").unwrap_err(), LaminaError::EmptyStack);
        assert_eq!(parse_stack("").unwrap_err(), LaminaError::EmptyStack);
    }

    #[test]
    fn test_symmetric_total_thickness() {
        let preview = StackPreview::build("0,90,45", true, "0.001");
        let StackPreview::Valid(summary) = preview else {
            panic!("expected a valid preview");
        };
        assert_eq!(summary.effective_ply_count(), 6);
        let total = summary.total_thickness.unwrap();
        assert!((total.0 - 0.006).abs() < 1e-12);
        assert_eq!(summary.symmetry_indicator(), Some("Sym"));
        assert_eq!(summary.badges(), vec!["0°", "90°", "45°"]);
        assert_eq!(summary.notation(), "[0/90/45]s");
        assert_eq!(summary.describe(), "[0/90/45]s · 6 plies · 6 mm");
    }

    #[test]
    fn test_non_symmetric_without_thickness() {
        let StackPreview::Valid(summary) = StackPreview::build("0 90", false, "") else {
            panic!("expected a valid preview");
        };
        assert_eq!(summary.effective_ply_count(), 2);
        assert_eq!(summary.total_thickness, None);
        assert_eq!(summary.symmetry_indicator(), None);
        assert_eq!(summary.describe(), "[0/90] · 2 plies");
    }

    #[test]
    fn test_invalid_preview_message() {
        let preview = StackPreview::build("0,abc", false, "0.001");
        assert!(!preview.is_valid());
        assert_eq!(
            preview,
            StackPreview::Invalid {
                message: "Invalid angle: \"abc\"".to_string()
            }
        );
    }
}

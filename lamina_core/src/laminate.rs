//! # Laminate Payloads
//!
//! Request and response types exchanged with the laminate backend. Field
//! names match the backend's JSON exactly (`E1`, `ABD`, `Ex`, ...), so every
//! type here round-trips through `serde_json` without custom code.
//!
//! ## Structure
//!
//! ```text
//! POST /api/calculate  LaminateInput  -> CalculateResponse { properties, ABD }
//! POST /api/polar      LaminateInput  -> [PolarSample]
//! POST /api/failure    FailureRequest -> [EnvelopePoint]
//! ```
//!
//! All payloads are transient: they live for one user action.

use serde::{Deserialize, Serialize};

use crate::units::{Degrees, Meters, Pascals};

/// Orthotropic ply constants sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialConstants {
    /// Longitudinal modulus
    #[serde(rename = "E1")]
    pub e1: Pascals,
    /// Transverse modulus
    #[serde(rename = "E2")]
    pub e2: Pascals,
    /// In-plane shear modulus
    #[serde(rename = "G12")]
    pub g12: Pascals,
    /// Major Poisson's ratio
    pub v12: f64,
    /// Display name, "Custom" for hand-edited values
    pub name: String,
}

/// Material plus layup: the body of `/api/calculate` and `/api/polar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaminateInput {
    pub material: MaterialConstants,
    /// Ply angles, bottom to top
    pub stack: Vec<Degrees>,
    /// Mirror the stack about the midplane
    pub symmetry: bool,
    /// Thickness of a single ply
    pub thickness: Meters,
}

/// Lamina strength allowables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthLimits {
    /// Longitudinal tensile strength
    pub xt: Pascals,
    /// Longitudinal compressive strength
    pub xc: Pascals,
    /// Transverse tensile strength
    pub yt: Pascals,
    /// Transverse compressive strength
    pub yc: Pascals,
    /// In-plane shear strength
    pub s: Pascals,
}

/// Body of `/api/failure`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureRequest {
    pub laminate: LaminateInput,
    pub limits: StrengthLimits,
}

/// Equivalent in-plane engineering constants of the laminate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineeringConstants {
    #[serde(rename = "Ex")]
    pub ex: Pascals,
    #[serde(rename = "Ey")]
    pub ey: Pascals,
    #[serde(rename = "Gxy")]
    pub gxy: Pascals,
    pub vxy: f64,
}

/// 6x6 ABD stiffness matrix, kept opaque.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbdMatrix(pub Vec<Vec<f64>>);

impl AbdMatrix {
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.0
    }

    /// True when the payload has the expected 6x6 shape.
    pub fn is_6x6(&self) -> bool {
        self.0.len() == 6 && self.0.iter().all(|row| row.len() == 6)
    }
}

/// Response of `/api/calculate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub properties: EngineeringConstants,
    #[serde(rename = "ABD")]
    pub abd: AbdMatrix,
}

/// One direction of the polar stiffness sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarSample {
    pub angle: Degrees,
    #[serde(rename = "Ex")]
    pub ex: Pascals,
    #[serde(rename = "Ey")]
    pub ey: Pascals,
    #[serde(rename = "Gxy")]
    pub gxy: Pascals,
}

/// Which modulus of a [`PolarSample`] is plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModulusComponent {
    #[default]
    Ex,
    Ey,
    Gxy,
}

impl ModulusComponent {
    pub const ALL: &'static [ModulusComponent] = &[
        ModulusComponent::Ex,
        ModulusComponent::Ey,
        ModulusComponent::Gxy,
    ];

    /// Pick this component out of a sample
    pub fn value(&self, sample: &PolarSample) -> Pascals {
        match self {
            ModulusComponent::Ex => sample.ex,
            ModulusComponent::Ey => sample.ey,
            ModulusComponent::Gxy => sample.gxy,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModulusComponent::Ex => "Ex",
            ModulusComponent::Ey => "Ey",
            ModulusComponent::Gxy => "Gxy",
        }
    }
}

impl std::fmt::Display for ModulusComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A `[sigma_x, sigma_y]` point on the failure boundary, in Pa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopePoint(pub f64, pub f64);

impl EnvelopePoint {
    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> LaminateInput {
        LaminateInput {
            material: MaterialConstants {
                e1: Pascals(140e9),
                e2: Pascals(10e9),
                g12: Pascals(5e9),
                v12: 0.3,
                name: "Carbon/Epoxy".to_string(),
            },
            stack: vec![Degrees(0.0), Degrees(90.0)],
            symmetry: true,
            thickness: Meters(0.000125),
        }
    }

    #[test]
    fn test_laminate_input_field_names() {
        let value = serde_json::to_value(sample_input()).unwrap();
        assert!(value["material"]["E1"].is_number());
        assert!(value["material"]["G12"].is_number());
        assert_eq!(value["material"]["v12"], 0.3);
        assert_eq!(value["stack"], serde_json::json!([0.0, 90.0]));
        assert_eq!(value["symmetry"], true);
    }

    #[test]
    fn test_unparseable_number_serializes_as_null() {
        let mut input = sample_input();
        input.material.e1 = Pascals(f64::NAN);
        let value = serde_json::to_value(&input).unwrap();
        assert!(value["material"]["E1"].is_null());
    }

    #[test]
    fn test_calculate_response_parsing() {
        let body = serde_json::json!({
            "properties": {"Ex": 7.5e10, "Ey": 7.5e10, "Gxy": 5e9, "vxy": 0.04},
            "ABD": vec![vec![1.0; 6]; 6],
        });
        let response: CalculateResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.properties.ex, Pascals(7.5e10));
        assert_eq!(response.properties.vxy, 0.04);
        assert!(response.abd.is_6x6());
    }

    #[test]
    fn test_polar_sample_and_component() {
        let sample: PolarSample = serde_json::from_value(serde_json::json!({
            "angle": 10.0, "Ex": 1.0e11, "Ey": 2.0e10, "Gxy": 0
        }))
        .unwrap();
        assert_eq!(ModulusComponent::Ex.value(&sample), Pascals(1.0e11));
        assert_eq!(ModulusComponent::Gxy.value(&sample), Pascals(0.0));
    }

    #[test]
    fn test_envelope_points_are_pairs() {
        let points: Vec<EnvelopePoint> =
            serde_json::from_str("[[100.0, 0.0], [0.0, -50.5]]").unwrap();
        assert_eq!(points[1].x(), 0.0);
        assert_eq!(points[1].y(), -50.5);
        assert_eq!(serde_json::to_string(&points[0]).unwrap(), "[100.0,0.0]");
    }

    #[test]
    fn test_failure_request_shape() {
        let request = FailureRequest {
            laminate: sample_input(),
            limits: StrengthLimits {
                xt: Pascals(1500e6),
                xc: Pascals(1200e6),
                yt: Pascals(50e6),
                yc: Pascals(250e6),
                s: Pascals(70e6),
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value["laminate"]["material"].is_object());
        assert!(value["limits"]["s"].is_number());
    }
}

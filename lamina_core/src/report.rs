//! Result text formatting
//!
//! Plain-text renditions of a calculation result. The same strings back the
//! GUI result panels, the clipboard and the CLI output.

use crate::laminate::{AbdMatrix, EngineeringConstants};
use crate::units::{round_half_away, to_fixed, Gigapascals, Pascals};

/// Column width of one ABD matrix entry
pub const MATRIX_CELL_WIDTH: usize = 11;

/// One labelled engineering constant ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantLine {
    pub label: &'static str,
    pub title: &'static str,
    pub value: String,
}

impl std::fmt::Display for ConstantLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

fn gpa(value: Pascals) -> String {
    format!("{} GPa", to_fixed(Gigapascals::from(value).0, 2))
}

/// Ex, Ey, Gxy in GPa with two decimals and vxy with three.
pub fn constant_lines(props: &EngineeringConstants) -> Vec<ConstantLine> {
    vec![
        ConstantLine {
            label: "Ex",
            title: "Longitudinal Modulus",
            value: gpa(props.ex),
        },
        ConstantLine {
            label: "Ey",
            title: "Transverse Modulus",
            value: gpa(props.ey),
        },
        ConstantLine {
            label: "Gxy",
            title: "Shear Modulus",
            value: gpa(props.gxy),
        },
        ConstantLine {
            label: "vxy",
            title: "Poisson's Ratio",
            value: to_fixed(props.vxy, 3),
        },
    ]
}

/// Copyable text, one `label: value` per line.
pub fn constants_text(props: &EngineeringConstants) -> String {
    constant_lines(props)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Exponential notation with two fraction digits and an explicit exponent
/// sign, e.g. `1.23e+10`, `-4.50e-3`, `0.00e+0`.
pub fn to_exponential(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if value == 0.0 {
        return "0.00e+0".to_string();
    }

    let mut exponent = value.abs().log10().floor() as i32;
    let mut mantissa = round_half_away(scale_by_power_of_ten(value, -exponent), 2);
    if mantissa.abs() >= 10.0 {
        exponent += 1;
        mantissa = round_half_away(scale_by_power_of_ten(value, -exponent), 2);
    } else if mantissa.abs() < 1.0 {
        exponent -= 1;
        mantissa = round_half_away(scale_by_power_of_ten(value, -exponent), 2);
    }

    let sign = if exponent < 0 { "-" } else { "+" };
    format!("{:.2}e{}{}", mantissa, sign, exponent.abs())
}

// Multiplying by 10^n for negative n goes through an inexact reciprocal.
fn scale_by_power_of_ten(value: f64, power: i32) -> f64 {
    if power >= 0 {
        value * 10f64.powi(power)
    } else {
        value / 10f64.powi(-power)
    }
}

/// ABD matrix as right-aligned columns, two spaces between cells.
pub fn format_matrix(matrix: &AbdMatrix) -> String {
    matrix
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| format!("{:>width$}", to_exponential(*v), width = MATRIX_CELL_WIDTH))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

//! Terminal rendering of backend results.

use serde::Serialize;

use lamina_core::chart::{ChartPalette, ChartSize, EnvelopeChart, PolarChart, SvgCanvas};
use lamina_core::errors::{LaminaError, LaminaResult};
use lamina_core::gateway::ResultSink;
use lamina_core::laminate::{CalculateResponse, EnvelopePoint, ModulusComponent, PolarSample};
use lamina_core::report;
use lamina_core::units::{format_metric, to_fixed, Megapascals, Pascals};

/// Collects what one command prints and, for plots, the SVG document.
#[derive(Debug)]
pub struct TerminalSink {
    json: bool,
    component: ModulusComponent,
    pub output: LaminaResult<String>,
    pub svg: Option<String>,
}

impl TerminalSink {
    pub fn new(json: bool, component: ModulusComponent) -> Self {
        Self {
            json,
            component,
            output: Ok(String::new()),
            svg: None,
        }
    }

    fn render_json<T: Serialize>(&mut self, value: &T) {
        self.output = serde_json::to_string_pretty(value)
            .map_err(|e| LaminaError::internal(format!("JSON output failed: {}", e)));
    }
}

fn mpa(value: f64) -> String {
    to_fixed(Megapascals::from(Pascals(value)).0, 1)
}

/// Constants block followed by the ABD matrix
pub fn calculation_text(result: &CalculateResponse) -> String {
    format!(
        "Engineering Constants\n{}\n\nABD Matrix\n{}",
        report::constants_text(&result.properties),
        report::format_matrix(&result.abd)
    )
}

/// One row per sample with all three moduli
pub fn polar_text(samples: &[PolarSample]) -> String {
    let mut lines = vec![format!("{:>7}  {:>12}  {:>12}  {:>12}", "angle", "Ex", "Ey", "Gxy")];
    lines.extend(samples.iter().map(|s| {
        format!(
            "{:>7}  {:>12}  {:>12}  {:>12}",
            format!("{}°", s.angle.0),
            format_metric(s.ex.0, "Pa"),
            format_metric(s.ey.0, "Pa"),
            format_metric(s.gxy.0, "Pa"),
        )
    }));
    lines.join("\n")
}

/// Boundary points in MPa
pub fn envelope_text(points: &[EnvelopePoint]) -> String {
    let mut lines = vec![format!("{:>12}  {:>12}", "sigma_x MPa", "sigma_y MPa")];
    lines.extend(
        points
            .iter()
            .map(|p| format!("{:>12}  {:>12}", mpa(p.x()), mpa(p.y()))),
    );
    lines.join("\n")
}

impl ResultSink for TerminalSink {
    fn show_calculation(&mut self, result: CalculateResponse) {
        if self.json {
            self.render_json(&result);
        } else {
            self.output = Ok(calculation_text(&result));
        }
    }

    fn show_polar(&mut self, samples: Vec<PolarSample>) {
        let chart = PolarChart::new(&samples, self.component);
        let mut canvas = SvgCanvas::new(ChartSize::default());
        chart.draw(&mut canvas, ChartSize::default(), &ChartPalette::light());
        self.svg = Some(canvas.finish());

        if self.json {
            self.render_json(&samples);
        } else {
            self.output = Ok(polar_text(&samples));
        }
    }

    fn show_envelope(&mut self, points: Vec<EnvelopePoint>) {
        let chart = EnvelopeChart::new(&points);
        let mut canvas = SvgCanvas::new(ChartSize::default());
        chart.draw(&mut canvas, ChartSize::default(), &ChartPalette::light());
        self.svg = Some(canvas.finish());

        if self.json {
            self.render_json(&points);
        } else {
            self.output = Ok(envelope_text(&points));
        }
    }
}

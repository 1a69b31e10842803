//! Result regions of the window and the sink that fills them.

use chrono::{DateTime, Local};

use lamina_core::gateway::ResultSink;
use lamina_core::laminate::{CalculateResponse, EnvelopePoint, PolarSample};
use lamina_core::report;

/// Which result region a copy button belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Constants,
    Matrix,
}

/// Latest successful result per region; `None` shows the empty state.
#[derive(Debug, Clone, Default)]
pub struct Results {
    pub calculation: Option<CalculateResponse>,
    pub polar: Option<Vec<PolarSample>>,
    pub envelope: Option<Vec<EnvelopePoint>>,
    pub last_updated: Option<DateTime<Local>>,
}

impl Results {
    /// Text a copy button puts on the clipboard; empty when the region is.
    pub fn copy_text(&self, target: CopyTarget) -> String {
        match (target, &self.calculation) {
            (CopyTarget::Constants, Some(calc)) => report::constants_text(&calc.properties),
            (CopyTarget::Matrix, Some(calc)) => report::format_matrix(&calc.abd),
            (_, None) => String::new(),
        }
    }

    fn touch(&mut self) {
        self.last_updated = Some(Local::now());
    }
}

impl ResultSink for Results {
    fn show_calculation(&mut self, result: CalculateResponse) {
        self.calculation = Some(result);
        self.touch();
    }

    fn show_polar(&mut self, samples: Vec<PolarSample>) {
        self.polar = Some(samples);
        self.touch();
    }

    fn show_envelope(&mut self, points: Vec<EnvelopePoint>) {
        self.envelope = Some(points);
        self.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lamina_core::laminate::{AbdMatrix, EngineeringConstants};
    use lamina_core::units::Pascals;

    fn calculation() -> CalculateResponse {
        CalculateResponse {
            properties: EngineeringConstants {
                ex: Pascals(140e9),
                ey: Pascals(10e9),
                gxy: Pascals(5e9),
                vxy: 0.3,
            },
            abd: AbdMatrix(vec![vec![1.0; 6]; 6]),
        }
    }

    #[test]
    fn test_empty_regions_copy_nothing() {
        let results = Results::default();
        assert_eq!(results.copy_text(CopyTarget::Constants), "");
        assert_eq!(results.copy_text(CopyTarget::Matrix), "");
    }

    #[test]
    fn test_each_sink_method_fills_one_region() {
        let mut results = Results::default();
        results.show_envelope(vec![EnvelopePoint(1.0, 2.0)]);
        assert!(results.calculation.is_none());
        assert!(results.polar.is_none());
        assert!(results.last_updated.is_some());

        results.show_calculation(calculation());
        assert!(results.copy_text(CopyTarget::Constants).starts_with("Ex: 140.00 GPa"));
        assert_eq!(results.copy_text(CopyTarget::Matrix).lines().count(), 6);
    }
}

//! Failure envelope plot
//!
//! Both axes share the symmetric domain `[-L, L]` with
//! `L = 1.2 × max(|sigma_x|, |sigma_y|)`, so the origin sits in the middle of
//! the plot area and the envelope keeps its aspect ratio on a square chart.

use crate::laminate::EnvelopePoint;
use crate::units::{to_fixed, Megapascals, Pascals};

use super::scale::{LinearScale, MIN_SPAN};
use super::{Anchor, ChartCanvas, ChartPalette, ChartSize, Label, LineStyle, Point2, Rgba};

pub const ENVELOPE_MARGIN: f32 = 50.0;
pub const LIMIT_PADDING: f64 = 1.2;
pub const AXIS_TICK_COUNT: usize = 5;

pub const X_AXIS_TITLE: &str = "Sigma X (MPa)";
pub const Y_AXIS_TITLE: &str = "Sigma Y (MPa)";

const TICK_LENGTH: f32 = 6.0;
const LABEL_SIZE: f32 = 11.0;
const TITLE_SIZE: f32 = 12.0;
const Y_TITLE_OFFSET: f32 = 38.0;

pub const CURVE_STROKE: Rgba = Rgba::rgb8(0xe7, 0x4c, 0x3c);
pub const CURVE_FILL: Rgba = Rgba::rgb8(231, 76, 60).with_alpha(0.3);

/// Axis tick label in whole MPa.
pub fn mpa_label(value: Pascals) -> String {
    to_fixed(Megapascals::from(value).0, 0)
}

/// A tick on one axis: domain value, pixel offset along the axis, label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub position: f32,
    pub label: String,
}

/// Inner plot rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PlotArea {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Everything needed to draw one envelope chart.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeLayout {
    /// `L` as computed from the data, 0 for no data
    pub limit: f64,
    pub area: PlotArea,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    /// Pixel position of (0, 0)
    pub origin: Point2,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub outline: Vec<Point2>,
}

/// Closed failure boundary in stress space.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeChart {
    points: Vec<EnvelopePoint>,
}

impl EnvelopeChart {
    pub fn new(points: &[EnvelopePoint]) -> Self {
        EnvelopeChart {
            points: points.to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `1.2 × max |coordinate|` over finite values, 0 when there are none.
    pub fn limit(&self) -> f64 {
        let max = self
            .points
            .iter()
            .flat_map(|p| [p.x().abs(), p.y().abs()])
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max);
        LIMIT_PADDING * max
    }

    pub fn layout(&self, size: ChartSize) -> EnvelopeLayout {
        let area = PlotArea {
            left: ENVELOPE_MARGIN,
            top: ENVELOPE_MARGIN,
            width: (size.width - 2.0 * ENVELOPE_MARGIN).max(0.0),
            height: (size.height - 2.0 * ENVELOPE_MARGIN).max(0.0),
        };

        let limit = self.limit();
        let half = limit.max(MIN_SPAN);
        let x_scale = LinearScale::new((-half, half), (area.left as f64, area.right() as f64));
        let y_scale = LinearScale::new((-half, half), (area.bottom() as f64, area.top as f64));

        let axis_ticks = |scale: &LinearScale| -> Vec<AxisTick> {
            if limit <= 0.0 {
                return Vec::new();
            }
            scale
                .ticks(AXIS_TICK_COUNT)
                .into_iter()
                .map(|value| AxisTick {
                    value,
                    position: scale.map(value) as f32,
                    label: mpa_label(Pascals(value)),
                })
                .collect()
        };

        let outline = self
            .points
            .iter()
            .filter(|p| p.x().is_finite() && p.y().is_finite())
            .map(|p| Point2::new(x_scale.map(p.x()) as f32, y_scale.map(p.y()) as f32))
            .collect();

        EnvelopeLayout {
            limit,
            area,
            origin: Point2::new(x_scale.map(0.0) as f32, y_scale.map(0.0) as f32),
            x_ticks: axis_ticks(&x_scale),
            y_ticks: axis_ticks(&y_scale),
            x_scale,
            y_scale,
            outline,
        }
    }

    /// Render into `canvas`. An empty point list draws axes only.
    pub fn draw(&self, canvas: &mut impl ChartCanvas, size: ChartSize, palette: &ChartPalette) {
        let layout = self.layout(size);
        let area = layout.area;
        let axis = LineStyle::solid(palette.axis, 1.0);
        let zero = LineStyle::dashed(palette.grid, 1.0);

        // bottom axis
        canvas.line(
            Point2::new(area.left, area.bottom()),
            Point2::new(area.right(), area.bottom()),
            &axis,
        );
        for tick in &layout.x_ticks {
            canvas.line(
                Point2::new(tick.position, area.bottom()),
                Point2::new(tick.position, area.bottom() + TICK_LENGTH),
                &axis,
            );
            canvas.text(&Label {
                text: tick.label.clone(),
                position: Point2::new(tick.position, area.bottom() + TICK_LENGTH + 8.0),
                color: palette.text,
                size: LABEL_SIZE,
                anchor: Anchor::Middle,
                rotation: 0.0,
            });
        }

        // left axis
        canvas.line(
            Point2::new(area.left, area.top),
            Point2::new(area.left, area.bottom()),
            &axis,
        );
        for tick in &layout.y_ticks {
            canvas.line(
                Point2::new(area.left - TICK_LENGTH, tick.position),
                Point2::new(area.left, tick.position),
                &axis,
            );
            canvas.text(&Label {
                text: tick.label.clone(),
                position: Point2::new(area.left - TICK_LENGTH - 3.0, tick.position),
                color: palette.text,
                size: LABEL_SIZE,
                anchor: Anchor::End,
                rotation: 0.0,
            });
        }

        canvas.text(&Label {
            text: X_AXIS_TITLE.to_string(),
            position: Point2::new(area.left + area.width / 2.0, area.bottom() + 38.0),
            color: palette.text,
            size: TITLE_SIZE,
            anchor: Anchor::Middle,
            rotation: 0.0,
        });
        canvas.text(&Label {
            text: Y_AXIS_TITLE.to_string(),
            position: Point2::new(area.left - Y_TITLE_OFFSET, area.top + area.height / 2.0),
            color: palette.text,
            size: TITLE_SIZE,
            anchor: Anchor::Middle,
            rotation: -90.0,
        });

        canvas.line(
            Point2::new(area.left, layout.origin.y),
            Point2::new(area.right(), layout.origin.y),
            &zero,
        );
        canvas.line(
            Point2::new(layout.origin.x, area.top),
            Point2::new(layout.origin.x, area.bottom()),
            &zero,
        );

        if !layout.outline.is_empty() {
            canvas.polygon(
                &layout.outline,
                CURVE_FILL,
                &LineStyle::solid(CURVE_STROKE, 2.0),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::recording::{RecordingCanvas, Shape};
    use super::*;

    fn square() -> Vec<EnvelopePoint> {
        vec![
            EnvelopePoint(100.0, 0.0),
            EnvelopePoint(0.0, 100.0),
            EnvelopePoint(-100.0, 0.0),
            EnvelopePoint(0.0, -100.0),
        ]
    }

    #[test]
    fn test_limit_pads_largest_coordinate() {
        let chart = EnvelopeChart::new(&square());
        assert!((chart.limit() - 120.0).abs() < 1e-9);
        assert_eq!(EnvelopeChart::new(&[]).limit(), 0.0);
    }

    #[test]
    fn test_layout_square() {
        let layout = EnvelopeChart::new(&square()).layout(ChartSize::default());
        assert_eq!(layout.area.width, 300.0);
        assert_eq!(layout.origin, Point2::new(200.0, 200.0));

        let values: Vec<f64> = layout.x_ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![-100.0, -50.0, 0.0, 50.0, 100.0]);

        // +sigma_y maps upwards
        let top = layout.outline[1];
        assert!((top.x - 200.0).abs() < 1e-3);
        assert!((top.y - 75.0).abs() < 1e-3);
    }

    #[test]
    fn test_tick_labels_in_mpa() {
        let points = vec![EnvelopePoint(1500e6, -250e6), EnvelopePoint(-1200e6, 50e6)];
        let layout = EnvelopeChart::new(&points).layout(ChartSize::default());
        let labels: Vec<&str> = layout.x_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["-1000", "0", "1000"]);
    }

    #[test]
    fn test_mpa_label_rounding() {
        assert_eq!(mpa_label(Pascals(-1e5)), "0");
        assert_eq!(mpa_label(Pascals(1.6e6)), "2");
        assert_eq!(mpa_label(Pascals(2.5e6)), "3");
        assert_eq!(mpa_label(Pascals(-2.5e6)), "-3");
    }

    #[test]
    fn test_empty_envelope_draws_axes() {
        let mut canvas = RecordingCanvas::default();
        let chart = EnvelopeChart::new(&[]);
        chart.draw(&mut canvas, ChartSize::default(), &ChartPalette::light());

        assert!(canvas.polygons().is_empty());
        let texts = canvas.texts();
        assert!(texts.contains(&X_AXIS_TITLE));
        assert!(texts.contains(&Y_AXIS_TITLE));

        let layout = chart.layout(ChartSize::default());
        assert!(layout.x_ticks.is_empty());
        assert!(layout.origin.x.is_finite() && layout.origin.y.is_finite());
    }

    #[test]
    fn test_y_title_rotated_along_left_axis() {
        let mut canvas = RecordingCanvas::default();
        EnvelopeChart::new(&square()).draw(
            &mut canvas,
            ChartSize::default(),
            &ChartPalette::light(),
        );
        let labels: Vec<&Label> = canvas
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Text(label) => Some(label),
                _ => None,
            })
            .collect();

        let y_title = labels.iter().find(|l| l.text == Y_AXIS_TITLE).unwrap();
        assert_eq!(y_title.rotation, -90.0);
        assert_eq!(y_title.anchor, Anchor::Middle);
        assert_eq!(y_title.position, Point2::new(12.0, 200.0));

        let x_title = labels.iter().find(|l| l.text == X_AXIS_TITLE).unwrap();
        assert_eq!(x_title.rotation, 0.0);
        assert!(labels
            .iter()
            .filter(|l| l.text != Y_AXIS_TITLE)
            .all(|l| l.rotation == 0.0));
    }

    #[test]
    fn test_zero_lines_are_dashed() {
        let mut canvas = RecordingCanvas::default();
        EnvelopeChart::new(&square()).draw(
            &mut canvas,
            ChartSize::default(),
            &ChartPalette::light(),
        );
        let dashed: Vec<_> = canvas
            .lines()
            .into_iter()
            .filter(|(_, _, style)| style.dash.is_some())
            .collect();
        assert_eq!(dashed.len(), 2);
        assert_eq!(canvas.polygons().len(), 1);
    }
}

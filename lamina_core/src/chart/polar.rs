//! Polar stiffness plot
//!
//! Angles run clockwise from 12 o'clock: a sample at angle θ and modulus m
//! sits at `(cx + r·sin θ, cy − r·cos θ)` where `r = scale(m)`. The radial
//! scale spans `0..max` of the plotted component and maps onto
//! `0..radius`, with `radius = min(width, height) / 2 − 40`.

use crate::laminate::{ModulusComponent, PolarSample};
use crate::units::{to_fixed, Degrees, Gigapascals, Pascals, Radians};

use super::scale::LinearScale;
use super::{Anchor, ChartCanvas, ChartPalette, ChartSize, Label, LineStyle, Point2, Rgba};

pub const POLAR_MARGIN: f32 = 40.0;
pub const RADIAL_TICK_COUNT: usize = 5;
pub const SPOKE_STEP: u32 = 45;

const SPOKE_LABEL_OFFSET: f32 = 6.0;
const LABEL_SIZE: f32 = 11.0;

pub const CURVE_STROKE: Rgba = Rgba::rgb8(0x34, 0x98, 0xdb);
pub const CURVE_FILL: Rgba = Rgba::rgb8(52, 152, 219).with_alpha(0.3);

/// Pixel position of a direction/magnitude pair.
pub fn polar_point(center: Point2, radius: f32, angle: Degrees) -> Point2 {
    let theta = Radians::from(angle).0;
    Point2 {
        x: center.x + radius * theta.sin() as f32,
        y: center.y - radius * theta.cos() as f32,
    }
}

/// Ring label, e.g. `"140.0 GPa"`.
pub fn gpa_label(value: Pascals) -> String {
    format!("{} GPa", to_fixed(Gigapascals::from(value).0, 1))
}

/// A dashed grid circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub value: f64,
    pub radius: f32,
    pub label: String,
}

/// A radial guide line from the center to the outer radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Spoke {
    pub angle: Degrees,
    pub end: Point2,
    pub label: String,
    pub label_position: Point2,
    pub anchor: Anchor,
}

/// Everything needed to draw one polar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarLayout {
    pub center: Point2,
    pub radius: f32,
    pub scale: LinearScale,
    pub rings: Vec<Ring>,
    pub spokes: Vec<Spoke>,
    /// Curve vertices in sample order; drawn as a closed polygon
    pub outline: Vec<Point2>,
}

/// Polar plot of one modulus component over the angle sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarChart {
    samples: Vec<PolarSample>,
    component: ModulusComponent,
}

impl PolarChart {
    pub fn new(samples: &[PolarSample], component: ModulusComponent) -> Self {
        PolarChart {
            samples: samples.to_vec(),
            component,
        }
    }

    pub fn component(&self) -> ModulusComponent {
        self.component
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest finite value of the plotted component, 0 when there is none.
    pub fn max_modulus(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| self.component.value(s).0)
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }

    pub fn layout(&self, size: ChartSize) -> PolarLayout {
        let center = Point2::new(size.width / 2.0, size.height / 2.0);
        let radius = (size.width.min(size.height) / 2.0 - POLAR_MARGIN).max(0.0);
        let max = self.max_modulus();
        let scale = LinearScale::new((0.0, max), (0.0, radius as f64));

        // Collapsed data gets no rings: every tick would round to "0.0 GPa".
        let rings = if max > 0.0 {
            scale
                .ticks(RADIAL_TICK_COUNT)
                .into_iter()
                .filter(|v| *v > 0.0)
                .map(|value| Ring {
                    value,
                    radius: scale.map(value) as f32,
                    label: gpa_label(Pascals(value)),
                })
                .collect()
        } else {
            Vec::new()
        };

        let spokes = (0..360)
            .step_by(SPOKE_STEP as usize)
            .map(|deg| {
                let angle = Degrees(deg as f64);
                let anchor = match deg {
                    0 | 180 => Anchor::Middle,
                    d if d < 180 => Anchor::Start,
                    _ => Anchor::End,
                };
                Spoke {
                    angle,
                    end: polar_point(center, radius, angle),
                    label: format!("{}°", deg),
                    label_position: polar_point(center, radius + SPOKE_LABEL_OFFSET, angle),
                    anchor,
                }
            })
            .collect();

        let outline = self
            .samples
            .iter()
            .map(|s| {
                let value = self.component.value(s).0;
                let r = if value.is_finite() { scale.map(value) } else { 0.0 };
                polar_point(center, r as f32, s.angle)
            })
            .collect();

        PolarLayout {
            center,
            radius,
            scale,
            rings,
            spokes,
            outline,
        }
    }

    /// Render into `canvas`. An empty sample list draws only the grid.
    pub fn draw(&self, canvas: &mut impl ChartCanvas, size: ChartSize, palette: &ChartPalette) {
        let layout = self.layout(size);
        let grid = LineStyle::dashed(palette.grid, 1.0);
        let spoke_style = LineStyle::solid(palette.spoke, 1.0);

        for ring in &layout.rings {
            canvas.circle(layout.center, ring.radius, &grid);
            canvas.text(&Label {
                text: ring.label.clone(),
                position: Point2::new(layout.center.x, layout.center.y - ring.radius - 4.0),
                color: palette.text,
                size: LABEL_SIZE,
                anchor: Anchor::Middle,
                rotation: 0.0,
            });
        }

        for spoke in &layout.spokes {
            canvas.line(layout.center, spoke.end, &spoke_style);
            canvas.text(&Label {
                text: spoke.label.clone(),
                position: spoke.label_position,
                color: palette.text,
                size: LABEL_SIZE,
                anchor: spoke.anchor,
                rotation: 0.0,
            });
        }

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
    use super::super::recording::RecordingCanvas;
    use super::*;

    fn sample(angle: f64, ex: f64, ey: f64) -> PolarSample {
        PolarSample {
            angle: Degrees(angle),
            ex: Pascals(ex),
            ey: Pascals(ey),
            gxy: Pascals(5e9),
        }
    }

    fn close(a: Point2, b: Point2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn test_polar_point_clockwise_from_top() {
        let c = Point2::new(200.0, 200.0);
        assert!(close(polar_point(c, 10.0, Degrees(0.0)), Point2::new(200.0, 190.0)));
        assert!(close(polar_point(c, 10.0, Degrees(90.0)), Point2::new(210.0, 200.0)));
        assert!(close(polar_point(c, 10.0, Degrees(180.0)), Point2::new(200.0, 210.0)));
        assert!(close(polar_point(c, 10.0, Degrees(270.0)), Point2::new(190.0, 200.0)));
    }

    #[test]
    fn test_layout_geometry() {
        let samples = [sample(0.0, 140e9, 10e9), sample(90.0, 10e9, 140e9)];
        let layout = PolarChart::new(&samples, ModulusComponent::Ex).layout(ChartSize::default());

        assert_eq!(layout.center, Point2::new(200.0, 200.0));
        assert_eq!(layout.radius, 160.0);
        // max sample sits on the outer radius, straight up
        assert!(close(layout.outline[0], Point2::new(200.0, 40.0)));
        assert!(layout.outline[1].x > 200.0);
        assert!((layout.outline[1].y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_rings_skip_zero_and_label_in_gpa() {
        let samples = [sample(0.0, 140e9, 10e9)];
        let layout = PolarChart::new(&samples, ModulusComponent::Ex).layout(ChartSize::default());
        assert!(layout.rings.iter().all(|r| r.value > 0.0));
        assert_eq!(layout.rings.first().map(|r| r.label.as_str()), Some("20.0 GPa"));
        assert_eq!(layout.rings.last().map(|r| r.label.as_str()), Some("140.0 GPa"));
    }

    #[test]
    fn test_gpa_label_ties_round_up() {
        assert_eq!(gpa_label(Pascals(1.25e9)), "1.3 GPa");
        assert_eq!(gpa_label(Pascals(62.5e9)), "62.5 GPa");
    }

    #[test]
    fn test_spokes_every_45_degrees() {
        let layout = PolarChart::new(&[], ModulusComponent::Ex).layout(ChartSize::default());
        let labels: Vec<&str> = layout.spokes.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["0°", "45°", "90°", "135°", "180°", "225°", "270°", "315°"]
        );
    }

    #[test]
    fn test_component_selects_domain() {
        let samples = [sample(0.0, 140e9, 10e9), sample(90.0, 10e9, 30e9)];
        let ey = PolarChart::new(&samples, ModulusComponent::Ey);
        assert_eq!(ey.max_modulus(), 30e9);
        let layout = ey.layout(ChartSize::default());
        assert!(close(layout.outline[1], Point2::new(360.0, 200.0)));
    }

    #[test]
    fn test_empty_draws_grid_only() {
        let mut canvas = RecordingCanvas::default();
        PolarChart::new(&[], ModulusComponent::Ex).draw(
            &mut canvas,
            ChartSize::default(),
            &ChartPalette::light(),
        );
        assert!(canvas.polygons().is_empty());
        assert!(canvas.circles().is_empty());
        assert_eq!(canvas.lines().len(), 8);
    }

    #[test]
    fn test_draw_curve_and_dashed_rings() {
        let samples: Vec<PolarSample> = (0..36)
            .map(|i| sample(i as f64 * 10.0, 50e9 + i as f64 * 1e9, 10e9))
            .collect();
        let mut canvas = RecordingCanvas::default();
        PolarChart::new(&samples, ModulusComponent::Ex).draw(
            &mut canvas,
            ChartSize::default(),
            &ChartPalette::light(),
        );

        let polygons = canvas.polygons();
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].len(), 36);
        assert!(canvas
            .circles()
            .iter()
            .all(|(_, _, style)| style.dash.is_some()));
        assert!(canvas.texts().iter().any(|t| t.ends_with("GPa")));
    }

    #[test]
    fn test_degenerate_samples_stay_finite() {
        let samples = [sample(0.0, 0.0, 0.0), sample(90.0, 0.0, 0.0)];
        let layout = PolarChart::new(&samples, ModulusComponent::Ex).layout(ChartSize::default());
        assert!(layout.rings.is_empty());
        assert!(layout.outline.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn test_same_angle_samples_collapse_to_one_ray() {
        let samples = [
            sample(30.0, 40e9, 10e9),
            sample(30.0, 80e9, 10e9),
            sample(30.0, 120e9, 10e9),
        ];
        let chart = PolarChart::new(&samples, ModulusComponent::Ex);
        let layout = chart.layout(ChartSize::default());

        assert_eq!(layout.outline.len(), 3);
        let direction = polar_point(layout.center, 1.0, Degrees(30.0));
        let (dx, dy) = (direction.x - layout.center.x, direction.y - layout.center.y);
        for p in &layout.outline {
            assert!(p.x.is_finite() && p.y.is_finite());
            let (px, py) = (p.x - layout.center.x, p.y - layout.center.y);
            // collinear with the 30° direction
            assert!((px * dy - py * dx).abs() < 1e-2);
            assert!(px * dx + py * dy >= 0.0);
        }
        assert!(close(layout.outline[2], polar_point(layout.center, layout.radius, Degrees(30.0))));

        let mut canvas = RecordingCanvas::default();
        chart.draw(&mut canvas, ChartSize::default(), &ChartPalette::light());
        assert_eq!(canvas.polygons().len(), 1);
    }
}

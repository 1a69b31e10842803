//! # Charts
//!
//! Backend-independent rendering of the two result charts. A chart computes
//! its layout in pixel space and then issues primitive drawing calls against
//! a [`ChartCanvas`]. The GUI implements the trait on top of an iced canvas
//! frame and the CLI on top of [`svg::SvgCanvas`], so both draw the same
//! picture from the same code.
//!
//! ## Structure
//!
//! - [`scale`] - linear scales and nice tick values
//! - [`polar`] - polar stiffness plot (angle clockwise from 12 o'clock)
//! - [`envelope`] - failure envelope in the sigma_x / sigma_y plane
//! - [`svg`] - standalone SVG output

pub mod envelope;
pub mod polar;
pub mod scale;
pub mod svg;

pub use envelope::{EnvelopeChart, EnvelopeLayout};
pub use polar::{PolarChart, PolarLayout};
pub use scale::LinearScale;
pub use svg::SvgCanvas;

/// Default square chart size in pixels
pub const DEFAULT_CHART_SIZE: f32 = 400.0;

/// Dash pattern shared by grid and zero lines
pub const GRID_DASH: [f32; 2] = [3.0, 3.0];

/// A point in pixel space, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Point2 { x, y }
    }
}

/// Straight-alpha color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Rgba {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Rgba { a, ..self }
    }
}

/// Outline style for lines, circles and polygons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Rgba,
    pub width: f32,
    /// `[dash, gap]` lengths, solid when `None`
    pub dash: Option<[f32; 2]>,
}

impl LineStyle {
    pub const fn solid(color: Rgba, width: f32) -> Self {
        LineStyle {
            color,
            width,
            dash: None,
        }
    }

    pub const fn dashed(color: Rgba, width: f32) -> Self {
        LineStyle {
            color,
            width,
            dash: Some(GRID_DASH),
        }
    }
}

/// Horizontal text alignment relative to the label position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    Start,
    #[default]
    Middle,
    End,
}

/// A text label; `position` is the anchor point on the text's vertical center.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Point2,
    pub color: Rgba,
    pub size: f32,
    pub anchor: Anchor,
    /// Clockwise degrees about `position`; `-90.0` reads bottom to top
    pub rotation: f32,
}

/// Pixel size of the drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSize {
    pub width: f32,
    pub height: f32,
}

impl ChartSize {
    pub const fn new(width: f32, height: f32) -> Self {
        ChartSize { width, height }
    }

    pub const fn square(side: f32) -> Self {
        ChartSize {
            width: side,
            height: side,
        }
    }
}

impl Default for ChartSize {
    fn default() -> Self {
        ChartSize::square(DEFAULT_CHART_SIZE)
    }
}

/// Colors that depend on the surrounding theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPalette {
    pub text: Rgba,
    pub axis: Rgba,
    pub grid: Rgba,
    pub spoke: Rgba,
}

impl ChartPalette {
    pub const fn light() -> Self {
        ChartPalette {
            text: Rgba::rgb8(0x33, 0x33, 0x33),
            axis: Rgba::rgb8(0x33, 0x33, 0x33),
            grid: Rgba::rgb8(0xcc, 0xcc, 0xcc),
            spoke: Rgba::rgb8(0xdd, 0xdd, 0xdd),
        }
    }

    pub const fn dark() -> Self {
        ChartPalette {
            text: Rgba::rgb8(0xdd, 0xdd, 0xdd),
            axis: Rgba::rgb8(0xbb, 0xbb, 0xbb),
            grid: Rgba::rgb8(0x66, 0x66, 0x66),
            spoke: Rgba::rgb8(0x55, 0x55, 0x55),
        }
    }
}

impl Default for ChartPalette {
    fn default() -> Self {
        ChartPalette::light()
    }
}

/// Drawing surface a chart renders into.
pub trait ChartCanvas {
    fn line(&mut self, from: Point2, to: Point2, style: &LineStyle);

    fn circle(&mut self, center: Point2, radius: f32, style: &LineStyle);

    /// Closed polygon, filled then outlined.
    fn polygon(&mut self, points: &[Point2], fill: Rgba, outline: &LineStyle);

    fn text(&mut self, label: &Label);
}

/// Canvas that records calls, for layout assertions in tests.
#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Shape {
        Line(Point2, Point2, LineStyle),
        Circle(Point2, f32, LineStyle),
        Polygon(Vec<Point2>, Rgba),
        Text(Label),
    }

    #[derive(Debug, Default)]
    pub struct RecordingCanvas {
        pub shapes: Vec<Shape>,
    }

    impl RecordingCanvas {
        pub fn texts(&self) -> Vec<&str> {
            self.shapes
                .iter()
                .filter_map(|s| match s {
                    Shape::Text(label) => Some(label.text.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn circles(&self) -> Vec<(Point2, f32, LineStyle)> {
            self.shapes
                .iter()
                .filter_map(|s| match s {
                    Shape::Circle(c, r, style) => Some((*c, *r, *style)),
                    _ => None,
                })
                .collect()
        }

        pub fn polygons(&self) -> Vec<&Vec<Point2>> {
            self.shapes
                .iter()
                .filter_map(|s| match s {
                    Shape::Polygon(points, _) => Some(points),
                    _ => None,
                })
                .collect()
        }

        pub fn lines(&self) -> Vec<(Point2, Point2, LineStyle)> {
            self.shapes
                .iter()
                .filter_map(|s| match s {
                    Shape::Line(a, b, style) => Some((*a, *b, *style)),
                    _ => None,
                })
                .collect()
        }
    }

    impl ChartCanvas for RecordingCanvas {
        fn line(&mut self, from: Point2, to: Point2, style: &LineStyle) {
            self.shapes.push(Shape::Line(from, to, *style));
        }

        fn circle(&mut self, center: Point2, radius: f32, style: &LineStyle) {
            self.shapes.push(Shape::Circle(center, radius, *style));
        }

        fn polygon(&mut self, points: &[Point2], fill: Rgba, _outline: &LineStyle) {
            self.shapes.push(Shape::Polygon(points.to_vec(), fill));
        }

        fn text(&mut self, label: &Label) {
            self.shapes.push(Shape::Text(label.clone()));
        }
    }
}

//! Canvas programs for the polar stiffness plot and the failure envelope
//!
//! Both charts are laid out by `lamina_core::chart`; this module only
//! translates the primitive calls into iced canvas paths.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Frame, Geometry, LineDash, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Theme, Vector};

use lamina_core::chart::{
    Anchor, ChartCanvas, ChartPalette, ChartSize, EnvelopeChart, Label, LineStyle, Point2,
    PolarChart, Rgba,
};

use crate::Message;

fn color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}

fn point(p: Point2) -> Point {
    Point::new(p.x, p.y)
}

fn stroke(style: &LineStyle) -> Stroke<'_> {
    let stroke = Stroke::default()
        .with_color(color(style.color))
        .with_width(style.width);

    match &style.dash {
        Some(segments) => Stroke {
            line_dash: LineDash {
                segments,
                offset: 0,
            },
            ..stroke
        },
        None => stroke,
    }
}

fn palette(theme: &Theme) -> ChartPalette {
    if theme.extended_palette().is_dark {
        ChartPalette::dark()
    } else {
        ChartPalette::light()
    }
}

/// [`ChartCanvas`] backed by an iced canvas frame
pub struct FrameCanvas<'a> {
    frame: &'a mut Frame,
}

impl<'a> FrameCanvas<'a> {
    pub fn new(frame: &'a mut Frame) -> Self {
        Self { frame }
    }
}

impl ChartCanvas for FrameCanvas<'_> {
    fn line(&mut self, from: Point2, to: Point2, style: &LineStyle) {
        let path = Path::line(point(from), point(to));
        self.frame.stroke(&path, stroke(style));
    }

    fn circle(&mut self, center: Point2, radius: f32, style: &LineStyle) {
        let path = Path::circle(point(center), radius);
        self.frame.stroke(&path, stroke(style));
    }

    fn polygon(&mut self, points: &[Point2], fill: Rgba, outline: &LineStyle) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        let path = Path::new(|builder| {
            builder.move_to(point(*first));
            for p in rest {
                builder.line_to(point(*p));
            }
            builder.close();
        });
        self.frame.fill(&path, color(fill));
        self.frame.stroke(&path, stroke(outline));
    }

    fn text(&mut self, label: &Label) {
        let align_x = match label.anchor {
            Anchor::Start => Horizontal::Left,
            Anchor::Middle => Horizontal::Center,
            Anchor::End => Horizontal::Right,
        };

        let text = Text {
            content: label.text.clone(),
            position: point(label.position),
            color: color(label.color),
            size: iced::Pixels(label.size),
            align_x: align_x.into(),
            align_y: Vertical::Center,
            ..Text::default()
        };

        if label.rotation == 0.0 {
            self.frame.fill_text(text);
            return;
        }

        // rotate about the anchor point, then draw at the new origin
        self.frame.with_save(|frame| {
            frame.translate(Vector::new(label.position.x, label.position.y));
            frame.rotate(label.rotation.to_radians());
            frame.fill_text(Text {
                position: Point::ORIGIN,
                ..text
            });
        });
    }
}

/// Canvas program drawing a [`PolarChart`]
pub struct PolarPlot {
    chart: PolarChart,
}

impl PolarPlot {
    pub fn new(chart: PolarChart) -> Self {
        Self { chart }
    }
}

impl canvas::Program<Message> for PolarPlot {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = ChartSize::new(bounds.width, bounds.height);

        self.chart
            .draw(&mut FrameCanvas::new(&mut frame), size, &palette(theme));

        vec![frame.into_geometry()]
    }
}

/// Canvas program drawing an [`EnvelopeChart`]
pub struct EnvelopePlot {
    chart: EnvelopeChart,
}

impl EnvelopePlot {
    pub fn new(chart: EnvelopeChart) -> Self {
        Self { chart }
    }
}

impl canvas::Program<Message> for EnvelopePlot {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        // square plot area, centered horizontally
        let side = bounds.width.min(bounds.height);
        frame.translate(Vector::new((bounds.width - side) / 2.0, 0.0));

        self.chart.draw(
            &mut FrameCanvas::new(&mut frame),
            ChartSize::square(side),
            &palette(theme),
        );

        vec![frame.into_geometry()]
    }
}

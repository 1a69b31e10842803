//! SVG output for charts, used by the CLI `--svg` flag.

use std::fmt::Write;

use super::{Anchor, ChartCanvas, ChartSize, Label, LineStyle, Point2, Rgba};

/// Accumulates chart primitives into a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    size: ChartSize,
    body: String,
}

impl SvgCanvas {
    pub fn new(size: ChartSize) -> Self {
        SvgCanvas {
            size,
            body: String::new(),
        }
    }

    /// Close the document and return it.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.size.width,
            h = self.size.height,
            body = self.body
        )
    }
}

fn color(c: Rgba) -> String {
    let r = (c.r * 255.0).round() as u8;
    let g = (c.g * 255.0).round() as u8;
    let b = (c.b * 255.0).round() as u8;
    if c.a >= 1.0 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("rgba({},{},{},{})", r, g, b, c.a)
    }
}

fn stroke_attrs(style: &LineStyle) -> String {
    let mut attrs = format!(
        "stroke=\"{}\" stroke-width=\"{}\"",
        color(style.color),
        style.width
    );
    if let Some([dash, gap]) = style.dash {
        let _ = write!(attrs, " stroke-dasharray=\"{},{}\"", dash, gap);
    }
    attrs
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl ChartCanvas for SvgCanvas {
    fn line(&mut self, from: Point2, to: Point2, style: &LineStyle) {
        let _ = writeln!(
            self.body,
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>",
            from.x,
            from.y,
            to.x,
            to.y,
            stroke_attrs(style)
        );
    }

    fn circle(&mut self, center: Point2, radius: f32, style: &LineStyle) {
        let _ = writeln!(
            self.body,
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"none\" {}/>",
            center.x,
            center.y,
            radius,
            stroke_attrs(style)
        );
    }

    fn polygon(&mut self, points: &[Point2], fill: Rgba, outline: &LineStyle) {
        let points = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            self.body,
            "  <polygon points=\"{}\" fill=\"{}\" {}/>",
            points,
            color(fill),
            stroke_attrs(outline)
        );
    }

    fn text(&mut self, label: &Label) {
        let anchor = match label.anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        };
        let transform = if label.rotation == 0.0 {
            String::new()
        } else {
            format!(
                " transform=\"rotate({} {:.2} {:.2})\"",
                label.rotation, label.position.x, label.position.y
            )
        };
        let _ = writeln!(
            self.body,
            "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{}\" text-anchor=\"{}\" dominant-baseline=\"middle\"{} fill=\"{}\">{}</text>",
            label.position.x,
            label.position.y,
            label.size,
            anchor,
            transform,
            color(label.color),
            escape(&label.text)
        );
    }
}

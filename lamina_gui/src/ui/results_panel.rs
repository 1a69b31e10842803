//! Results Panel (Right Side)
//!
//! Four regions, each replaced independently by its action:
//! - Engineering constants (Calculate)
//! - ABD matrix (Calculate)
//! - Stiffness polar plot (Plot Stiffness Polar)
//! - Failure envelope (Plot Failure Envelope)

use iced::widget::{
    button, column, container, pick_list, row, scrollable, text, tooltip, Canvas, Column, Space,
};
use iced::{Alignment, Element, Font, Length, Padding};

use lamina_core::chart::{EnvelopeChart, PolarChart, DEFAULT_CHART_SIZE};
use lamina_core::feedback::CopyButton;
use lamina_core::laminate::{CalculateResponse, ModulusComponent};
use lamina_core::report;

use super::shared::charts::{EnvelopePlot, PolarPlot};
use crate::results::CopyTarget;
use crate::{App, Message};

/// Render the results panel
///
/// This panel uses the complementary ratio (1 - input_ratio).
pub fn view_results_panel(app: &App, input_ratio: f32) -> Element<'_, Message> {
    let calculation = app.results.calculation.as_ref();

    let content = column![
        view_constants(calculation, &app.copy_constants),
        Space::new().height(12),
        view_matrix(calculation, &app.copy_matrix),
        Space::new().height(12),
        view_polar(app),
        Space::new().height(12),
        view_envelope(app),
    ]
    .padding(8);

    let portion = ((1.0 - input_ratio) * 100.0) as u16;

    container(scrollable(content))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn empty_state(message: &str) -> Element<'_, Message> {
    text(message).size(11).color([0.5, 0.5, 0.5]).into()
}

fn section_header<'a>(
    title: &'a str,
    copy: Option<(&'a CopyButton, CopyTarget)>,
) -> Element<'a, Message> {
    let header = row![text(title).size(14), Space::new().width(Length::Fill)]
        .align_y(Alignment::Center);

    match copy {
        Some((state, target)) => header
            .push(
                button(text(state.label()).size(10))
                    .on_press(Message::Copy(target))
                    .padding(Padding::from([2, 8]))
                    .style(button::secondary),
            )
            .into(),
        None => header.into(),
    }
}

fn view_constants<'a>(
    calculation: Option<&'a CalculateResponse>,
    copy: &'a CopyButton,
) -> Column<'a, Message> {
    let Some(calc) = calculation else {
        return column![
            section_header("Engineering Constants", None),
            empty_state("Run Calculate Properties to see Ex, Ey, Gxy and vxy"),
        ]
        .spacing(6);
    };

    report::constant_lines(&calc.properties).into_iter().fold(
        column![section_header("Engineering Constants", Some((copy, CopyTarget::Constants)))]
            .spacing(6),
        |section, line| {
            let value = row![
                text(format!("{}:", line.label)).size(12).width(Length::Fixed(50.0)),
                text(line.value).size(12),
            ];
            section.push(tooltip(value, text(line.title).size(10), tooltip::Position::Top))
        },
    )
}

fn view_matrix<'a>(
    calculation: Option<&'a CalculateResponse>,
    copy: &'a CopyButton,
) -> Column<'a, Message> {
    let section = match calculation {
        Some(calc) => column![
            section_header("ABD Matrix", Some((copy, CopyTarget::Matrix))),
            container(
                text(report::format_matrix(&calc.abd))
                    .size(11)
                    .font(Font::MONOSPACE)
            )
            .padding(6)
            .style(container::bordered_box),
        ],
        None => column![
            section_header("ABD Matrix", None),
            empty_state("No matrix computed yet"),
        ],
    };
    section.spacing(6)
}

fn view_polar(app: &App) -> Column<'_, Message> {
    let picker = pick_list(
        ModulusComponent::ALL,
        Some(app.polar_component),
        Message::PolarComponentSelected,
    )
    .text_size(11)
    .padding(Padding::from([2, 8]));

    let header = row![
        text("Stiffness Polar").size(14),
        Space::new().width(Length::Fill),
        picker,
    ]
    .align_y(Alignment::Center);

    let body: Element<'_, Message> = match &app.results.polar {
        Some(samples) => {
            let chart = PolarChart::new(samples, app.polar_component);
            if chart.is_empty() {
                empty_state("Backend returned no polar samples")
            } else {
                Canvas::new(PolarPlot::new(chart))
                    .width(Length::Fill)
                    .height(Length::Fixed(DEFAULT_CHART_SIZE))
                    .into()
            }
        }
        None => empty_state("Run Plot Stiffness Polar to draw the modulus against angle"),
    };

    column![header, body].spacing(6)
}

fn view_envelope(app: &App) -> Column<'_, Message> {
    let body: Element<'_, Message> = match &app.results.envelope {
        Some(points) => {
            let chart = EnvelopeChart::new(points);
            if chart.is_empty() {
                empty_state("Backend returned no envelope points")
            } else {
                Canvas::new(EnvelopePlot::new(chart))
                    .width(Length::Fill)
                    .height(Length::Fixed(DEFAULT_CHART_SIZE))
                    .into()
            }
        }
        None => empty_state("Run Plot Failure Envelope to draw the first-ply failure boundary"),
    };

    column![text("Failure Envelope").size(14), body].spacing(6)
}

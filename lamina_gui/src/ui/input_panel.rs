//! Input Panel (Left)
//!
//! Three sections, each field showing a live metric preview:
//! - Material constants (E1, E2, G12, v12)
//! - Layup: ply angles with badges and notation, symmetry, ply thickness
//! - Strength limits (Xt, Xc, Yt, Yc, S)

use iced::widget::{
    checkbox, column, container, row, scrollable, text, text_input, Column, Row, Space,
};
use iced::{Alignment, Color, Element, Length, Padding};

use lamina_core::form::Field;
use lamina_core::stack::StackPreview;

use super::shared::{labeled_input, LABEL_WIDTH};
use crate::{App, Message};

const INVALID_COLOR: Color = Color::from_rgb(0.8, 0.2, 0.2);

/// Render the input panel
///
/// The `ratio` parameter determines the relative size of this panel vs results panel.
pub fn view_input_panel(app: &App, ratio: f32) -> Element<'_, Message> {
    let panel = column![
        view_field_section(app, "Material Properties", &Field::MATERIAL),
        Space::new().height(10),
        view_layup_section(app),
        Space::new().height(10),
        view_field_section(app, "Strength Limits", &Field::LIMITS),
    ]
    .padding(8);

    let portion = (ratio * 100.0) as u16;

    container(scrollable(panel))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn field_row(app: &App, field: Field) -> Element<'_, Message> {
    labeled_input(
        field.label(),
        app.form.value(field),
        app.form.preview(field),
        move |value| Message::FieldChanged(field, value),
    )
}

fn view_field_section<'a>(app: &'a App, title: &'a str, fields: &[Field]) -> Column<'a, Message> {
    fields.iter().fold(
        column![text(title).size(14), Space::new().height(4)].spacing(6),
        |section, &field| section.push(field_row(app, field)),
    )
}

fn view_layup_section(app: &App) -> Column<'_, Message> {
    let preview = app.form.stack_preview();
    let invalid = !preview.is_valid();

    let stack_input = text_input("0, 45, -45, 90", app.form.value(Field::Stack))
        .on_input(|value| Message::FieldChanged(Field::Stack, value))
        .width(Length::Fill)
        .padding(4)
        .size(11)
        .style(move |theme, status| {
            let mut style = text_input::default(theme, status);
            if invalid {
                style.border.color = INVALID_COLOR;
                style.border.width = 1.5;
            }
            style
        });

    let stack_row = row![
        text(Field::Stack.label()).size(11).width(Length::Fixed(LABEL_WIDTH)),
        stack_input,
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let symmetry = checkbox(app.form.symmetric())
        .label("Symmetric layup")
        .on_toggle(Message::SymmetryToggled)
        .text_size(11);

    column![
        text("Layup").size(14),
        Space::new().height(4),
        stack_row,
        view_stack_preview(preview),
        symmetry,
        field_row(app, Field::Thickness),
    ]
    .spacing(6)
}

fn view_stack_preview(preview: StackPreview) -> Element<'static, Message> {
    match preview {
        StackPreview::Valid(summary) => {
            let badges = summary
                .badges()
                .into_iter()
                .fold(Row::new().spacing(4), |badges, badge| {
                    badges.push(
                        container(text(badge).size(10))
                            .padding(Padding::from([2, 6]))
                            .style(container::bordered_box),
                    )
                });

            let badges = match summary.symmetry_indicator() {
                Some(sym) => badges.push(text(sym).size(10).color([0.2, 0.5, 0.8])),
                None => badges,
            };

            column![
                badges.align_y(Alignment::Center),
                text(summary.describe()).size(10).color([0.45, 0.45, 0.45]),
            ]
            .spacing(4)
            .padding(Padding::ZERO.left(LABEL_WIDTH + 6.0))
            .into()
        }
        StackPreview::Invalid { message } => text(message)
            .size(10)
            .color(INVALID_COLOR)
            .into(),
    }
}

//! Shared UI components reusable across panels
//!
//! Contains:
//! - `charts` - Canvas programs for the polar and envelope plots
//! - `labeled_input` - Label + text input row used by every form section

pub mod charts;

use iced::widget::{row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Label column width shared by all form rows
pub const LABEL_WIDTH: f32 = 90.0;

/// A label, a text input and an optional preview to its right
pub fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    preview: String,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
        text(preview)
            .size(10)
            .color([0.45, 0.45, 0.45])
            .width(Length::Fixed(90.0)),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}

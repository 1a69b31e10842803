//! Toolbar component
//!
//! Contains the materials preset picker, the three backend actions and the
//! dark mode toggle.

use iced::widget::{button, pick_list, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use lamina_core::feedback::Action;

use crate::{App, Message};

/// Render the toolbar
pub fn view_toolbar(app: &App) -> Element<'_, Message> {
    let presets = pick_list(app.preset_choices(), app.selected_choice(), Message::PresetSelected)
        .placeholder("Custom")
        .text_size(11)
        .padding(Padding::from([4, 8]));

    let current = text(format!("Current: {}", app.form.selection_label()))
        .size(11)
        .color([0.45, 0.45, 0.45]);

    let actions = Action::ALL.iter().fold(row![].spacing(4), |row, &action| {
        let control = app.controls.get(action);
        row.push(
            button(text(control.label().to_string()).size(11))
                .on_press_maybe((!control.is_disabled()).then_some(Message::Run(action)))
                .padding(Padding::from([4, 10]))
                .style(button::primary),
        )
    });

    let theme_label = if app.dark_mode { "Light Mode" } else { "Dark Mode" };
    let theme_button = button(text(theme_label).size(11))
        .on_press(Message::ToggleDarkMode)
        .padding(Padding::from([4, 8]))
        .style(button::secondary);

    row![
        text("Lamina").size(22),
        Space::new().width(12),
        presets,
        current,
        Space::new().width(Length::Fill),
        actions,
        Space::new().width(8),
        theme_button,
    ]
    .spacing(8)
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}

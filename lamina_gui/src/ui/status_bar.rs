//! Status Bar (Bottom)
//!
//! Displays the backend URL, the time of the last result and status messages.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::{App, Message};

/// Render the status bar
pub fn view_status_bar(app: &App) -> Element<'_, Message> {
    let updated = match app.results.last_updated {
        Some(at) => format!("Updated {}", at.format("%H:%M:%S")),
        None => "No results yet".to_string(),
    };

    let backend = if app.gateway.is_some() {
        text(format!("Backend: {}", app.base_url)).size(10)
    } else {
        text(format!("Backend: {} (unavailable)", app.base_url))
            .size(10)
            .color([0.6, 0.3, 0.0])
    };

    row![
        backend,
        Space::new().width(16),
        text(updated).size(10),
        Space::new().width(Length::Fill),
        text(&app.status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}

//! Toast overlay (bottom right)
//!
//! Toasts stack oldest first; clicking one dismisses it and each fades out
//! through its opacity once its lifetime is over.

use iced::widget::{button, column, container, text, Column, Space};
use iced::{border, Alignment, Background, Color, Element, Length};

use lamina_core::feedback::{Toast, ToastKind, ToastQueue};

use crate::Message;

const TOAST_WIDTH: f32 = 300.0;

fn background(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Info => Color::from_rgb(0.20, 0.45, 0.75),
        ToastKind::Success => Color::from_rgb(0.18, 0.60, 0.32),
        ToastKind::Error => Color::from_rgb(0.78, 0.22, 0.20),
    }
}

fn view_toast(toast: &Toast) -> Element<'_, Message> {
    let opacity = toast.opacity();
    let fill = background(toast.kind).scale_alpha(opacity);
    let foreground = Color::WHITE.scale_alpha(opacity);

    button(text(&toast.message).size(12))
        .on_press(Message::DismissToast(toast.id))
        .width(Length::Fill)
        .padding(10)
        .style(move |_theme, _status| button::Style {
            background: Some(Background::Color(fill)),
            text_color: foreground,
            border: border::rounded(4),
            ..button::Style::default()
        })
        .into()
}

/// Render the toast stack, or nothing when the queue is empty
pub fn view_toasts(toasts: &ToastQueue) -> Element<'_, Message> {
    if toasts.is_empty() {
        return Space::new().into();
    }

    let stack: Column<'_, Message> = toasts
        .iter()
        .fold(column![].spacing(6).width(Length::Fixed(TOAST_WIDTH)), |col, toast| {
            col.push(view_toast(toast))
        });

    container(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(16)
        .align_x(Alignment::End)
        .align_y(Alignment::End)
        .into()
}

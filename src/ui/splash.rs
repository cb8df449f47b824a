use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use super::{filled, PRIMARY};
use crate::Message;

pub fn view<'a>() -> Element<'a, Message> {
    let badge = container(text("🍴").size(72))
        .padding(32)
        .style(|_theme| filled(iced::Color::WHITE, 999.0));

    let content = column![
        badge,
        text("BITE").size(48).color(iced::Color::WHITE),
        text("Best Ideas To Eat").size(16).color(iced::Color::WHITE),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme| filled(PRIMARY, 0.0))
        .into()
}

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use super::{card, filled, page, plain, primary, INK, MUTED, PRIMARY};
use crate::state::data::SLIDES;
use crate::state::onboarding::{Message as OnboardingMessage, Onboarding};
use crate::Message;

pub fn view(onboarding: &Onboarding) -> Element<'_, Message> {
    let slide = SLIDES[onboarding.current()];

    let skip = row![
        Space::with_width(Length::Fill),
        button(text("Skip").size(14))
            .on_press(Message::Onboarding(OnboardingMessage::Skip))
            .style(plain),
    ];

    let illustration = container(text(slide.title).size(32).color(INK))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(320.0))
        .style(card);

    let dots = row(SLIDES.iter().enumerate().map(|(index, _)| {
        let active = index == onboarding.current();
        let color = if active { PRIMARY } else { iced::Color { a: 0.3, ..MUTED } };
        container(Space::new(Length::Fixed(if active { 24.0 } else { 8.0 }), Length::Fixed(8.0)))
            .style(move |_theme| filled(color, 4.0))
            .into()
    }))
    .spacing(8);

    let next_label = if onboarding.is_last() { "Get Started" } else { "Next  →" };

    let content = column![
        skip,
        illustration,
        text(slide.title).size(28).color(INK),
        text(slide.description).size(16).color(MUTED),
        Space::with_height(Length::Fill),
        dots,
        button(container(text(next_label).size(16)).center_x(Length::Fill))
            .on_press(Message::Onboarding(OnboardingMessage::Next))
            .width(Length::Fill)
            .padding(16)
            .style(primary),
    ]
    .spacing(20)
    .padding(24)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(page)
        .into()
}

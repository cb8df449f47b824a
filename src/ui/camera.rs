use iced::widget::{button, canvas, column, container, row, stack, text, Space};
use iced::{Alignment, Color, Element, Length};

use super::viewfinder::Viewfinder;
use super::{back_button, card, filled, pill, primary, ACCENT, INK, MUTED, NIGHT};
use crate::state::camera::{Camera, Message as CameraMessage, Stage};
use crate::state::navigation::Transition;
use crate::Message;

pub fn view(camera: &Camera) -> Element<'_, Message> {
    let preview = canvas(Viewfinder { stage: camera.stage() })
        .width(Length::Fill)
        .height(Length::Fill);

    let header = row![
        back_button(Message::Navigate(Transition::BackToHome), Color::WHITE),
        Space::with_width(Length::Fill),
        text("Scan Ingredients").size(18).color(Color::WHITE),
        Space::with_width(Length::Fill),
    ]
    .align_y(Alignment::Center)
    .padding(20);

    let footer: Element<'_, Message> = match camera.stage() {
        Stage::Ready => shutter(true, "Point at your ingredients"),
        Stage::Capturing => shutter(false, "Analyzing ingredients..."),
        Stage::Results => results(camera),
    };

    let overlay = column![header, Space::with_height(Length::Fill), footer];

    container(stack![preview, overlay])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| filled(NIGHT, 0.0))
        .into()
}

fn shutter<'a>(enabled: bool, hint: &'a str) -> Element<'a, Message> {
    let button = button(Space::new(Length::Fixed(56.0), Length::Fixed(56.0)))
        .padding(6)
        .style(pill(enabled));

    let button = if enabled {
        button.on_press(Message::Camera(CameraMessage::Capture))
    } else {
        button
    };

    column![text(hint).size(14).color(Color::WHITE), button]
        .spacing(16)
        .padding(32)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .into()
}

fn results(camera: &Camera) -> Element<'_, Message> {
    let detected = column(camera.detected().iter().map(|ingredient| {
        row![
            container(Space::new(Length::Fixed(10.0), Length::Fixed(10.0)))
                .style(|_theme| filled(ACCENT, 999.0)),
            text(ingredient.name).size(16).color(INK),
            Space::with_width(Length::Fill),
            text(format!("{}%", ingredient.confidence)).size(14).color(MUTED),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
    }))
    .spacing(12);

    let actions = row![
        button(container(text("Retake")).center_x(Length::Fill))
            .on_press(Message::Camera(CameraMessage::Retake))
            .width(Length::Fill)
            .padding(14)
            .style(pill(false)),
        button(container(text("Find Recipes")).center_x(Length::Fill))
            .on_press(Message::Navigate(Transition::ConfirmCapture))
            .width(Length::Fill)
            .padding(14)
            .style(primary),
    ]
    .spacing(12);

    container(
        column![
            text(format!("{} ingredients detected", camera.detected().len()))
                .size(20)
                .color(INK),
            detected,
            actions,
        ]
        .spacing(20),
    )
    .padding(24)
    .width(Length::Fill)
    .style(card)
    .into()
}

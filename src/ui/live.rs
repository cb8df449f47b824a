use iced::widget::{button, column, container, row, scrollable, text, text_input, Space};
use iced::{Alignment, Color, Element, Length};

use super::{back_button, card, filled, pill, INK, MUTED, NIGHT, PRIMARY};
use crate::state::data::{Participant, PARTICIPANTS};
use crate::state::live::{format_elapsed, LiveSession, Message as LiveMessage};
use crate::state::navigation::Transition;
use crate::Message;

pub fn view(session: &LiveSession) -> Element<'_, Message> {
    let host = PARTICIPANTS[0];

    let timer = container(
        text(format!("● LIVE  {}", format_elapsed(session.elapsed_secs())))
            .size(14)
            .color(Color::WHITE),
    )
    .padding([6, 12])
    .style(|_theme| filled(PRIMARY, 999.0));

    let header = row![
        back_button(Message::Navigate(Transition::BackToHome), Color::WHITE),
        Space::with_width(Length::Fill),
        timer,
        Space::with_width(Length::Fill),
        text(format!("{} cooking", PARTICIPANTS.len())).size(14).color(Color::WHITE),
    ]
    .align_y(Alignment::Center);

    let main_tile = tile(host, session.is_video_off(), Length::FillPortion(3));

    let guests = row(PARTICIPANTS[1..]
        .iter()
        .map(|&participant| tile(participant, false, Length::Fill)))
    .spacing(8)
    .height(Length::FillPortion(2));

    let controls = row![
        toggle(if session.is_muted() { "Unmute" } else { "Mute" }, session.is_muted(), LiveMessage::MuteToggled),
        toggle(
            if session.is_video_off() { "Start Video" } else { "Stop Video" },
            session.is_video_off(),
            LiveMessage::VideoToggled,
        ),
        toggle("Chat", session.is_chat_open(), LiveMessage::ChatToggled),
    ]
    .spacing(12);

    let mut content = column![header, main_tile, guests].spacing(12).padding(12);

    if session.is_chat_open() {
        content = content.push(chat(session));
    }

    content = content.push(container(controls).center_x(Length::Fill));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| filled(NIGHT, 0.0))
        .into()
}

fn tile<'a>(participant: Participant, video_off: bool, height: Length) -> Element<'a, Message> {
    let label = if participant.is_host {
        format!("{} (Host)", participant.name)
    } else {
        participant.name.to_string()
    };

    let body: Element<'a, Message> = if video_off {
        text("Camera off").size(14).color(MUTED).into()
    } else {
        text(participant.name.chars().next().unwrap_or('?').to_string())
            .size(40)
            .color(Color::WHITE)
            .into()
    };

    container(
        column![
            container(body).center_x(Length::Fill).center_y(Length::Fill),
            text(label).size(12).color(Color::WHITE),
        ]
        .padding(10),
    )
    .width(Length::Fill)
    .height(height)
    .style(|_theme| filled(Color { a: 0.25, ..PRIMARY }, 16.0))
    .into()
}

fn toggle<'a>(label: &'a str, active: bool, message: LiveMessage) -> Element<'a, Message> {
    button(text(label).size(14))
        .on_press(Message::Live(message))
        .padding([12, 18])
        .style(pill(active))
        .into()
}

fn chat(session: &LiveSession) -> Element<'_, Message> {
    let messages = column(session.chat().iter().map(|line| {
        column![
            row![
                text(line.user.as_str()).size(13).color(PRIMARY),
                Space::with_width(Length::Fill),
                text(line.time.as_str()).size(11).color(MUTED),
            ],
            text(line.message.as_str()).size(14).color(INK),
        ]
        .spacing(2)
        .into()
    }))
    .spacing(10);

    let input = row![
        text_input("Say something...", session.chat_input())
            .on_input(|input| Message::Live(LiveMessage::ChatInputChanged(input)))
            .padding(10),
        button(text("Send").size(14))
            .padding([10, 16])
            .style(pill(true)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    container(
        column![
            scrollable(messages).height(Length::Fixed(160.0)),
            input,
        ]
        .spacing(12),
    )
    .padding(16)
    .width(Length::Fill)
    .style(card)
    .into()
}

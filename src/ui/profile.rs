use iced::widget::{button, column, container, row, scrollable, text, toggler, Space};
use iced::{Alignment, Color, Element, Length};

use super::{back_button, card, filled, page, ACCENT, DANGER, INK, MUTED, PRIMARY};
use crate::state::data::{MenuItem, PROFILE_MENU, PROFILE_STATS};
use crate::state::navigation::Transition;
use crate::state::profile::{Message as ProfileMessage, Profile};
use crate::Message;

pub fn view(profile: &Profile) -> Element<'_, Message> {
    let identity = row![
        container(text("JD").size(24).color(PRIMARY))
            .padding(18)
            .style(|_theme| filled(Color::WHITE, 999.0)),
        column![
            text("Jane Doe").size(24).color(Color::WHITE),
            text("Home cook · Pasta lover").size(14).color(Color::WHITE),
        ]
        .spacing(4),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let header = container(
        column![
            back_button(Message::Navigate(Transition::BackToHome), Color::WHITE),
            identity,
        ]
        .spacing(24),
    )
    .padding(24)
    .width(Length::Fill)
    .style(|_theme| filled(PRIMARY, 0.0));

    let stats = container(
        row(PROFILE_STATS.iter().map(|stat| {
            column![
                text(stat.value).size(22).color(INK),
                text(stat.label).size(12).color(MUTED),
            ]
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .into()
        })),
    )
    .padding(20)
    .style(card);

    let premium = container(
        row![
            column![
                text("BITE Premium").size(16).color(Color::WHITE),
                text(if profile.subscribed() { "Active subscription" } else { "Unlock exclusive recipes" })
                    .size(12)
                    .color(Color::WHITE),
            ]
            .spacing(4),
            Space::with_width(Length::Fill),
            toggler(profile.subscribed())
                .on_toggle(|enabled| Message::Profile(ProfileMessage::SubscriptionToggled(enabled))),
        ]
        .align_y(Alignment::Center),
    )
    .padding(20)
    .style(|_theme| filled(ACCENT, 20.0));

    let menu = container(
        column(PROFILE_MENU.iter().map(|&item| menu_row(item, profile))).spacing(18),
    )
    .padding(20)
    .style(card);

    let logout = button(
        container(text("Log Out").size(16).color(DANGER)).center_x(Length::Fill),
    )
    .on_press(Message::Navigate(Transition::Logout))
    .width(Length::Fill)
    .padding(16)
    .style(|_theme, _status| iced::widget::button::Style {
        background: Some(Color { a: 0.08, ..DANGER }.into()),
        text_color: DANGER,
        border: iced::Border {
            radius: 16.0.into(),
            ..iced::Border::default()
        },
        ..iced::widget::button::Style::default()
    });

    let body = column![stats, premium, menu, logout].spacing(20).padding(20);

    container(scrollable(column![header, body]).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(page)
        .into()
}

fn menu_row(item: MenuItem, profile: &Profile) -> Element<'_, Message> {
    let trailing: Element<'_, Message> = if item.has_toggle {
        toggler(profile.notifications())
            .on_toggle(|enabled| Message::Profile(ProfileMessage::NotificationsToggled(enabled)))
            .into()
    } else if let Some(badge) = item.badge {
        container(text(badge).size(12).color(Color::WHITE))
            .padding([2, 10])
            .style(|_theme| filled(PRIMARY, 999.0))
            .into()
    } else {
        text("›").size(18).color(MUTED).into()
    };

    row![
        text(item.label).size(16).color(INK),
        Space::with_width(Length::Fill),
        trailing,
    ]
    .align_y(Alignment::Center)
    .into()
}

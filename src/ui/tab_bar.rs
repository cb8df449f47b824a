use iced::widget::{button, container, row, text};
use iced::{Alignment, Element, Length};

use super::{card, pill};
use crate::state::navigation::{Tab, Transition};
use crate::Message;

/// Bottom navigation, shown only on tab-bound screens
pub fn view<'a>(active: Tab) -> Element<'a, Message> {
    let tabs = row(Tab::ALL.into_iter().map(|tab| {
        button(container(text(tab.label()).size(13)).center_x(Length::Fill))
            .on_press(Message::Navigate(Transition::SelectTab(tab)))
            .width(Length::Fill)
            .padding([12, 8])
            .style(pill(tab == active))
            .into()
    }))
    .spacing(8)
    .align_y(Alignment::Center);

    container(tabs)
        .padding([12, 16])
        .width(Length::Fill)
        .style(card)
        .into()
}

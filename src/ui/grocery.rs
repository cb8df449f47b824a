use iced::widget::{button, canvas, checkbox, column, container, row, scrollable, text, Space};
use iced::{Alignment, Color, Element, Length};

use super::swipe::SwipeHandle;
use super::{back_button, card, filled, heading, page, pill, primary, ACCENT, INK, MUTED, PRIMARY};
use crate::state::data::GroceryItem;
use crate::state::grocery::{GroceryList, Message as GroceryMessage};
use crate::state::navigation::Transition;
use crate::Message;

/// Category tag colors
fn category_color(category: &str) -> Color {
    match category {
        "Grains" => PRIMARY,
        "Dairy" => ACCENT,
        "Produce" => super::PRIMARY_LIGHT,
        "Oils" => Color { r: 1.0, g: 0.706, b: 0.627, a: 1.0 },
        "Spices" => Color { r: 0.239, g: 0.729, b: 0.663, a: 1.0 },
        _ => MUTED,
    }
}

pub fn view(list: &GroceryList) -> Element<'_, Message> {
    let header = column![
        back_button(Message::Navigate(Transition::BackToHome), INK),
        heading(
            "Grocery List",
            Some("Drag the handle left to remove an item"),
        ),
        text(format!("{} of {} items collected", list.checked_count(), list.items().len()))
            .size(14)
            .color(ACCENT),
    ]
    .spacing(12);

    let items: Element<'_, Message> = if list.items().is_empty() {
        container(text("Your list is empty").size(16).color(MUTED))
            .padding(32)
            .center_x(Length::Fill)
            .into()
    } else {
        column(list.items().iter().map(item_row)).spacing(12).into()
    };

    let summary = container(
        column![
            row![
                text("Total").size(16).color(MUTED),
                Space::with_width(Length::Fill),
                text(format!("${:.2}", list.total_price())).size(22).color(INK),
            ]
            .align_y(Alignment::Center),
            container(text("🚚  Delivery in 30-45 min").size(14).color(INK))
                .padding(12)
                .width(Length::Fill)
                .style(|_theme| filled(Color { a: 0.12, ..PRIMARY }, 14.0)),
            // Ordering is not available; the button is display only
            button(
                container(text(format!("Order Now - ${:.2}", list.total_price())).size(16))
                    .center_x(Length::Fill)
            )
            .width(Length::Fill)
            .padding(16)
            .style(primary),
        ]
        .spacing(14),
    )
    .padding(20)
    .style(card);

    container(
        column![
            scrollable(column![header, items].spacing(20).padding(20)).height(Length::Fill),
            container(summary).padding(16),
        ],
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(page)
    .into()
}

fn item_row(item: &GroceryItem) -> Element<'_, Message> {
    let id = item.id;
    let tag_color = category_color(item.category);

    let details = column![
        text(item.name).size(16).color(if item.checked { MUTED } else { INK }),
        row![
            text(item.amount).size(12).color(MUTED),
            container(text(item.category).size(11).color(tag_color))
                .padding([2, 8])
                .style(move |_theme| filled(Color { a: 0.15, ..tag_color }, 999.0)),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    ]
    .spacing(4)
    .width(Length::Fill);

    let quantity = row![
        button(text("−").size(16))
            .on_press(Message::Grocery(GroceryMessage::QuantityChanged(id, -1)))
            .padding([2, 10])
            .style(pill(false)),
        text(item.quantity.to_string()).size(16).color(INK),
        button(text("+").size(16))
            .on_press(Message::Grocery(GroceryMessage::QuantityChanged(id, 1)))
            .padding([2, 10])
            .style(pill(true)),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let price = text(format!("${:.2}", item.price * f64::from(item.quantity)))
        .size(14)
        .color(PRIMARY);

    let content = row![
        checkbox("", item.checked).on_toggle(move |_| Message::Grocery(GroceryMessage::Toggled(id))),
        details,
        column![price, quantity].spacing(6).align_x(Alignment::End),
        canvas(SwipeHandle { item_id: id })
            .width(Length::Fixed(110.0))
            .height(Length::Fixed(32.0)),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(card)
        .into()
}

use iced::widget::{button, column, container, row, scrollable, stack, text, text_input, Space};
use iced::alignment::{Horizontal, Vertical};
use iced::{Alignment, Element, Length, Padding, Pixels};
use iced_aw::Wrap;

use super::{card, filled, heading, page, pill, primary, ACCENT, INK, MUTED, PRIMARY};
use crate::state::data::{Recipe, CATEGORIES, RECIPES};
use crate::state::home::{Home, Message as HomeMessage};
use crate::state::navigation::{Screen, Transition};
use crate::Message;

/// Width of a recipe card in the two-column grid
const CARD_WIDTH: f32 = 180.0;

pub fn view(home: &Home) -> Element<'_, Message> {
    let avatar = container(text("JD").size(16).color(iced::Color::WHITE))
        .padding(14)
        .style(|_theme| filled(PRIMARY, 999.0));

    let header = row![
        heading("Discover", Some("Find your next favorite recipe")),
        Space::with_width(Length::Fill),
        avatar,
    ]
    .align_y(Alignment::Center);

    let search = text_input("Search recipes...", home.search())
        .on_input(|input| Message::Home(HomeMessage::SearchChanged(input)))
        .padding(14);

    let categories = scrollable(
        row(CATEGORIES.iter().map(|&category| {
            button(text(category).size(14))
                .on_press(Message::Home(HomeMessage::CategorySelected(category)))
                .padding([8, 18])
                .style(pill(home.category() == category))
                .into()
        }))
        .spacing(8),
    )
    .direction(scrollable::Direction::Horizontal(scrollable::Scrollbar::new()));

    let grid = Wrap::with_elements(RECIPES.into_iter().map(recipe_card).collect())
        .spacing(Pixels(16.0))
        .line_spacing(Pixels(16.0));

    let feed = scrollable(
        column![header, search, categories, grid]
            .spacing(20)
            .padding(Padding {
                bottom: 96.0,
                ..Padding::new(24.0)
            }),
    )
    .height(Length::Fill);

    let add = container(
        button(text("+").size(28).color(iced::Color::WHITE))
            .on_press(Message::Navigate(Transition::Navigate(Screen::Camera)))
            .padding([10, 22])
            .style(primary),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Bottom)
    .padding(24);

    container(stack![feed, add])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(page)
        .into()
}

fn recipe_card<'a>(recipe: Recipe) -> Element<'a, Message> {
    let thumbnail = container(text(recipe.time).size(12).color(INK))
        .padding(12)
        .width(Length::Fill)
        .height(Length::Fixed(120.0))
        .align_x(Horizontal::Right)
        .style(|_theme| filled(iced::Color { a: 0.15, ..PRIMARY }, 16.0));

    let details = column![
        text(recipe.title).size(16).color(INK),
        row![
            text(recipe.category).size(12).color(ACCENT),
            Space::with_width(Length::Fill),
            text(format!("♥ {}", recipe.likes)).size(12).color(MUTED),
        ],
    ]
    .spacing(6);

    button(container(column![thumbnail, details].spacing(10)).padding(10).style(card))
        .on_press(Message::Navigate(Transition::SelectRecipe(recipe.id)))
        .padding(0)
        .width(Length::Fixed(CARD_WIDTH))
        .style(super::plain)
        .into()
}

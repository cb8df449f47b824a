use iced::widget::{button, checkbox, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length};

use super::{back_button, card, filled, page, pill, primary, ACCENT, INK, MUTED, PRIMARY, SURFACE};
use crate::state::navigation::Transition;
use crate::state::recipe::{Message as RecipeMessage, RecipeView, Section};
use crate::Message;

pub fn view(view: &RecipeView) -> Element<'_, Message> {
    let recipe = view.recipe();

    let hero = container(
        row![
            back_button(Message::Navigate(Transition::BackToHome), SURFACE),
            Space::with_width(Length::Fill),
            like_button(view),
        ]
        .align_y(Alignment::Center),
    )
    .padding(20)
    .height(Length::Fixed(220.0))
    .width(Length::Fill)
    .style(|_theme| filled(PRIMARY, 0.0));

    let facts = row![
        fact("Time", recipe.time.to_string()),
        fact("Servings", recipe.servings.to_string()),
        fact("Level", recipe.difficulty.to_string()),
    ]
    .spacing(12);

    let summary = container(
        column![
            text(recipe.title).size(26).color(INK),
            text(format!("by {}", recipe.author)).size(14).color(MUTED),
            facts,
            text(recipe.description).size(14).color(MUTED),
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Length::Fill)
    .style(card);

    let (checked, ingredient_total) = view.ingredient_progress();
    let (completed, step_total) = view.step_progress();

    let sections = row![
        section_button(
            format!("Ingredients ({checked}/{ingredient_total})"),
            Section::Ingredients,
            view.section(),
        ),
        section_button(
            format!("Steps ({completed}/{step_total})"),
            Section::Steps,
            view.section(),
        ),
    ]
    .spacing(8);

    let list: Element<'_, Message> = match view.section() {
        Section::Ingredients => column(recipe.ingredients.iter().enumerate().map(
            |(index, &(name, amount))| {
                row![
                    checkbox(name, view.is_ingredient_checked(index))
                        .on_toggle(move |_| Message::Recipe(RecipeMessage::IngredientToggled(index))),
                    Space::with_width(Length::Fill),
                    text(amount).size(14).color(MUTED),
                ]
                .align_y(Alignment::Center)
                .into()
            },
        ))
        .spacing(14)
        .into(),
        Section::Steps => column(recipe.steps.iter().enumerate().map(|(index, &instruction)| {
            let done = view.is_step_completed(index);
            button(
                row![
                    container(text(if done { "✓".to_string() } else { (index + 1).to_string() }).size(14))
                        .padding([6, 12])
                        .style(move |_theme| filled(if done { ACCENT } else { PRIMARY }, 999.0)),
                    text(instruction).size(14).color(if done { MUTED } else { INK }),
                ]
                .spacing(12)
                .align_y(Alignment::Center),
            )
            .on_press(Message::Recipe(RecipeMessage::StepToggled(index)))
            .style(super::plain)
            .into()
        }))
        .spacing(10)
        .into(),
    };

    // Not wired to the grocery list yet
    let add_to_grocery = button(container(text("Add to Grocery")).center_x(Length::Fill))
        .width(Length::Fill)
        .padding(14)
        .style(primary);

    let body = column![summary, sections, container(list).padding(8), add_to_grocery]
        .spacing(20)
        .padding(20);

    container(scrollable(column![hero, body]).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(page)
        .into()
}

fn like_button(view: &RecipeView) -> Element<'_, Message> {
    let heart = if view.is_liked() { "♥" } else { "♡" };
    button(text(heart).size(16))
        .on_press(Message::Recipe(RecipeMessage::LikeToggled))
        .padding([6, 14])
        .style(pill(view.is_liked()))
        .into()
}

fn fact<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    container(
        column![
            text(value).size(16).color(INK),
            text(label).size(12).color(MUTED),
        ]
        .spacing(2)
        .align_x(Alignment::Center),
    )
    .padding(10)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(|_theme| filled(super::BACKGROUND, 14.0))
    .into()
}

fn section_button<'a>(label: String, section: Section, current: Section) -> Element<'a, Message> {
    button(container(text(label).size(14)).center_x(Length::Fill))
        .on_press(Message::Recipe(RecipeMessage::SectionSelected(section)))
        .width(Length::Fill)
        .padding(12)
        .style(pill(section == current))
        .into()
}

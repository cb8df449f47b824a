/// User interface module
///
/// One view function per screen plus the bottom tab bar. Views only read
/// state and emit messages. The shared palette and widget styles live here.
///
/// Custom-drawn widgets:
/// - `viewfinder.rs` - camera preview with grid overlay
/// - `swipe.rs` - drag-to-delete handle for grocery rows
/// - `transition.rs` - screen entry animations

pub mod auth;
pub mod camera;
pub mod grocery;
pub mod home;
pub mod live;
pub mod onboarding;
pub mod profile;
pub mod recipe;
pub mod splash;
pub mod swipe;
pub mod tab_bar;
pub mod transition;
pub mod viewfinder;

use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Element, Shadow, Theme, Vector};

use crate::Message;

/// Brand orange
pub const PRIMARY: Color = Color { r: 1.0, g: 0.416, b: 0.239, a: 1.0 };
/// Lighter orange used for gradients and accents
pub const PRIMARY_LIGHT: Color = Color { r: 1.0, g: 0.549, b: 0.420, a: 1.0 };
/// Teal accent
pub const ACCENT: Color = Color { r: 0.165, g: 0.616, b: 0.561, a: 1.0 };
/// Headline text
pub const INK: Color = Color { r: 0.188, g: 0.220, b: 0.255, a: 1.0 };
/// Secondary text
pub const MUTED: Color = Color { r: 0.439, g: 0.439, b: 0.439, a: 1.0 };
/// Page background
pub const BACKGROUND: Color = Color { r: 0.949, g: 0.957, b: 0.953, a: 1.0 };
pub const SURFACE: Color = Color::WHITE;
/// Destructive actions
pub const DANGER: Color = Color { r: 0.831, g: 0.094, b: 0.239, a: 1.0 };
/// Camera and live-session backdrop
pub const NIGHT: Color = Color { r: 0.102, g: 0.102, b: 0.102, a: 1.0 };

/// White rounded card with a soft shadow
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            radius: 20.0.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color { a: 0.08, ..Color::BLACK },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..container::Style::default()
    }
}

/// Full-bleed page background
pub fn page(_theme: &Theme) -> container::Style {
    filled(BACKGROUND, 0.0)
}

/// Solid fill with rounded corners
pub fn filled(color: Color, radius: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Pill-shaped button, orange when active
pub fn pill(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match (active, status) {
            (true, button::Status::Hovered) => PRIMARY_LIGHT,
            (true, _) => PRIMARY,
            (false, button::Status::Hovered) => Color { a: 0.9, ..BACKGROUND },
            (false, _) => BACKGROUND,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: if active { Color::WHITE } else { MUTED },
            border: Border {
                radius: 999.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Main call-to-action button
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    pill(true)(theme, status)
}

/// Transparent button that only shows its content
pub fn plain(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => PRIMARY,
            _ => INK,
        },
        ..button::Style::default()
    }
}

/// Round back arrow used in screen headers
pub fn back_button<'a>(on_press: Message, tint: Color) -> Element<'a, Message> {
    button(text("←").size(20).color(tint))
        .on_press(on_press)
        .padding([6, 12])
        .style(move |_theme, _status| button::Style {
            background: Some(Background::Color(Color { a: 0.2, ..tint })),
            text_color: tint,
            border: Border {
                radius: 999.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        })
        .into()
}

/// Screen title with an optional subtitle
pub fn heading<'a>(title: &'a str, subtitle: Option<&'a str>) -> Element<'a, Message> {
    let title = text(title).size(28).color(INK);
    match subtitle {
        Some(subtitle) => iced::widget::column![title, text(subtitle).size(14).color(MUTED)]
            .spacing(4)
            .into(),
        None => title.into(),
    }
}

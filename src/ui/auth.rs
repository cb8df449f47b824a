use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use super::{back_button, heading, page, plain, primary, INK, MUTED, PRIMARY};
use crate::state::auth::{AuthForm, Message as AuthMessage};
use crate::state::navigation::Transition;
use crate::Message;

pub fn login(form: &AuthForm) -> Element<'_, Message> {
    let fields = column![
        field("Email", "you@example.com", form.email(), AuthMessage::EmailChanged, false),
        field("Password", "Enter your password", form.password(), AuthMessage::PasswordChanged, true),
    ]
    .spacing(16);

    let switch = row![
        text("Don't have an account?").size(14).color(MUTED),
        button(text("Sign Up").size(14).color(PRIMARY))
            .on_press(Message::Navigate(Transition::SwitchToSignUp))
            .style(plain),
    ]
    .align_y(Alignment::Center);

    layout(
        Message::Navigate(Transition::BackFromOnboardingGate),
        heading("Welcome Back!", Some("Sign in to continue cooking")),
        fields.into(),
        submit("Log In", Message::Navigate(Transition::Login)),
        switch.into(),
    )
}

pub fn sign_up(form: &AuthForm) -> Element<'_, Message> {
    let fields = column![
        field("Full Name", "Jane Doe", form.name(), AuthMessage::NameChanged, false),
        field("Email", "you@example.com", form.email(), AuthMessage::EmailChanged, false),
        field("Password", "Create a password", form.password(), AuthMessage::PasswordChanged, true),
    ]
    .spacing(16);

    let switch = row![
        text("Already have an account?").size(14).color(MUTED),
        button(text("Log In").size(14).color(PRIMARY))
            .on_press(Message::Navigate(Transition::SwitchToLogin))
            .style(plain),
    ]
    .align_y(Alignment::Center);

    layout(
        Message::Navigate(Transition::BackFromSignUp),
        heading("Create Account", Some("Join the BITE community")),
        fields.into(),
        submit("Sign Up", Message::Navigate(Transition::SignUp)),
        switch.into(),
    )
}

fn layout<'a>(
    back: Message,
    title: Element<'a, Message>,
    fields: Element<'a, Message>,
    submit: Element<'a, Message>,
    switch: Element<'a, Message>,
) -> Element<'a, Message> {
    let content = column![
        back_button(back, INK),
        title,
        fields,
        submit,
        container(switch).center_x(Length::Fill),
    ]
    .spacing(28)
    .padding(24)
    .max_width(480);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .style(page)
        .into()
}

fn field<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: fn(String) -> AuthMessage,
    secure: bool,
) -> Element<'a, Message> {
    column![
        text(label).size(14).color(INK),
        text_input(placeholder, value)
            .on_input(move |input| Message::Auth(on_input(input)))
            .secure(secure)
            .padding(14),
    ]
    .spacing(6)
    .into()
}

fn submit<'a>(label: &'a str, on_press: Message) -> Element<'a, Message> {
    button(container(text(label).size(16)).center_x(Length::Fill))
        .on_press(on_press)
        .width(Length::Fill)
        .padding(16)
        .style(primary)
        .into()
}

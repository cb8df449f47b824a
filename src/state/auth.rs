/// Login and sign-up form contents
///
/// The fields are held for display only. Nothing is validated or sent
/// anywhere; submitting always succeeds.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
}

#[derive(Debug, Default)]
pub struct AuthForm {
    name: String,
    email: String,
    password: String,
}

impl AuthForm {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::NameChanged(name) => self.name = name,
            Message::EmailChanged(email) => self.email = email,
            Message::PasswordChanged(password) => self.password = password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_update() {
        let mut form = AuthForm::default();
        form.update(Message::EmailChanged("jane@example.com".to_string()));
        form.update(Message::PasswordChanged("secret".to_string()));
        form.update(Message::NameChanged("Jane".to_string()));
        assert_eq!(form.email(), "jane@example.com");
        assert_eq!(form.password(), "secret");
        assert_eq!(form.name(), "Jane");
    }
}

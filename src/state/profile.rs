/// Profile screen toggles

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NotificationsToggled(bool),
    SubscriptionToggled(bool),
}

#[derive(Debug)]
pub struct Profile {
    notifications: bool,
    subscribed: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            notifications: true,
            subscribed: true,
        }
    }
}

impl Profile {
    pub fn notifications(&self) -> bool {
        self.notifications
    }

    pub fn subscribed(&self) -> bool {
        self.subscribed
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::NotificationsToggled(enabled) => self.notifications = enabled,
            Message::SubscriptionToggled(enabled) => self.subscribed = enabled,
        }
    }
}

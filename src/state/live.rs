/// Live cooking session state
///
/// Media controls are local toggles only; nothing is captured or streamed.
/// The chat draft is kept but never sent.

use super::data::{initial_chat, ChatMessage};

/// Elapsed time the session shows when the screen opens
pub const INITIAL_ELAPSED_SECS: u64 = 1245;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    MuteToggled,
    VideoToggled,
    ChatToggled,
    ChatInputChanged(String),
}

#[derive(Debug)]
pub struct LiveSession {
    muted: bool,
    video_off: bool,
    chat_open: bool,
    chat_input: String,
    chat: Vec<ChatMessage>,
    elapsed_secs: u64,
}

impl Default for LiveSession {
    fn default() -> Self {
        Self {
            muted: false,
            video_off: false,
            chat_open: false,
            chat_input: String::new(),
            chat: initial_chat(),
            elapsed_secs: INITIAL_ELAPSED_SECS,
        }
    }
}

impl LiveSession {
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_video_off(&self) -> bool {
        self.video_off
    }

    pub fn is_chat_open(&self) -> bool {
        self.chat_open
    }

    pub fn chat_input(&self) -> &str {
        &self.chat_input
    }

    pub fn chat(&self) -> &[ChatMessage] {
        &self.chat
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// One second of session time passed
    pub fn tick(&mut self) {
        self.elapsed_secs += 1;
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::MuteToggled => self.muted = !self.muted,
            Message::VideoToggled => self.video_off = !self.video_off,
            Message::ChatToggled => self.chat_open = !self.chat_open,
            Message::ChatInputChanged(input) => self.chat_input = input,
        }
    }
}

/// Format elapsed seconds as `m:ss`
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(INITIAL_ELAPSED_SECS), "20:45");
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(61), "1:01");
        assert_eq!(format_elapsed(3600), "60:00");
    }

    #[test]
    fn test_tick() {
        let mut session = LiveSession::default();
        session.tick();
        session.tick();
        assert_eq!(session.elapsed_secs(), 1247);
    }

    #[test]
    fn test_toggles() {
        let mut session = LiveSession::default();
        session.update(Message::MuteToggled);
        session.update(Message::VideoToggled);
        session.update(Message::ChatToggled);
        assert!(session.is_muted());
        assert!(session.is_video_off());
        assert!(session.is_chat_open());

        session.update(Message::MuteToggled);
        assert!(!session.is_muted());
    }

    #[test]
    fn test_chat_draft_is_kept() {
        let mut session = LiveSession::default();
        session.update(Message::ChatInputChanged("Smells great".to_string()));
        assert_eq!(session.chat_input(), "Smells great");
        assert_eq!(session.chat().len(), 3);
    }
}

/// Onboarding carousel state

use super::data::SLIDES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Next,
    Skip,
}

/// What the carousel asks of the application after handling a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Stay,
    Completed,
}

#[derive(Debug, Default)]
pub struct Onboarding {
    current: usize,
}

impl Onboarding {
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= SLIDES.len()
    }

    pub fn update(&mut self, message: Message) -> Outcome {
        match message {
            Message::Next if self.is_last() => Outcome::Completed,
            Message::Next => {
                self.current += 1;
                Outcome::Stay
            }
            Message::Skip => Outcome::Completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_after_last_slide() {
        let mut onboarding = Onboarding::default();
        assert_eq!(onboarding.update(Message::Next), Outcome::Stay);
        assert_eq!(onboarding.update(Message::Next), Outcome::Stay);
        assert!(onboarding.is_last());
        assert_eq!(onboarding.update(Message::Next), Outcome::Completed);
        assert_eq!(onboarding.current(), 2);
    }

    #[test]
    fn test_skip_completes_immediately() {
        let mut onboarding = Onboarding::default();
        assert_eq!(onboarding.update(Message::Skip), Outcome::Completed);
    }

    #[test]
    fn test_skip_keeps_current_slide() {
        let mut onboarding = Onboarding::default();
        onboarding.update(Message::Next);
        assert_eq!(onboarding.update(Message::Skip), Outcome::Completed);
        assert_eq!(onboarding.current(), 1);
    }
}

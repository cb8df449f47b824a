/// Screen entry animations
///
/// Each screen enters with the class reported by the Navigator. The shell
/// restarts the animation whenever the screen changes and feeds it window
/// frames until it settles.
use std::time::{Duration, Instant};

use iced::widget::{container, stack, Space};
use iced::{Element, Length, Padding};

use super::{filled, BACKGROUND};
use crate::state::navigation::ScreenTransition;
use crate::Message;

/// Length of every entry animation
pub const DURATION: Duration = Duration::from_millis(300);

/// Distance in pixels a sliding or rising screen travels
const TRAVEL: f32 = 100.0;

/// Inset in pixels a zooming screen starts from
const ZOOM_INSET: f32 = 24.0;

#[derive(Debug, Clone, Copy)]
pub struct Animation {
    kind: ScreenTransition,
    started: Instant,
    now: Instant,
}

impl Animation {
    pub fn start(kind: ScreenTransition, now: Instant) -> Self {
        Self {
            kind,
            started: now,
            now,
        }
    }

    /// Record a new frame time
    pub fn advance(&mut self, now: Instant) {
        self.now = now;
    }

    pub fn is_running(&self) -> bool {
        self.now.saturating_duration_since(self.started) < DURATION
    }

    /// Eased progress from 0.0 (just entered) to 1.0 (settled)
    pub fn progress(&self) -> f32 {
        let elapsed = self.now.saturating_duration_since(self.started);
        let t = (elapsed.as_secs_f32() / DURATION.as_secs_f32()).clamp(0.0, 1.0);
        // ease-out cubic
        1.0 - (1.0 - t).powi(3)
    }

    /// Wrap a screen in its entry animation for the current frame
    pub fn apply<'a>(&self, content: Element<'a, Message>) -> Element<'a, Message> {
        if !self.is_running() {
            return content;
        }

        let remaining = 1.0 - self.progress();
        let offset = match self.kind {
            ScreenTransition::Fade => Padding::ZERO,
            ScreenTransition::Slide => Padding {
                left: TRAVEL * remaining,
                ..Padding::ZERO
            },
            ScreenTransition::Rise => Padding {
                top: TRAVEL * remaining,
                ..Padding::ZERO
            },
            ScreenTransition::Zoom => Padding::new(ZOOM_INSET * remaining),
        };

        let shifted = container(content)
            .padding(offset)
            .width(Length::Fill)
            .height(Length::Fill);

        let veil = container(Space::new(Length::Fill, Length::Fill))
            .style(move |_theme| filled(iced::Color { a: remaining, ..BACKGROUND }, 0.0));

        stack![shifted, veil].into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bounds() {
        let start = Instant::now();
        let mut animation = Animation::start(ScreenTransition::Slide, start);
        assert_eq!(animation.progress(), 0.0);
        assert!(animation.is_running());

        animation.advance(start + DURATION / 2);
        let halfway = animation.progress();
        assert!(halfway > 0.5 && halfway < 1.0);

        animation.advance(start + DURATION);
        assert_eq!(animation.progress(), 1.0);
        assert!(!animation.is_running());
    }

    #[test]
    fn test_frame_before_start_is_clamped() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut animation = Animation::start(ScreenTransition::Zoom, start);
        animation.advance(start - Duration::from_millis(10));
        assert_eq!(animation.progress(), 0.0);
        assert!(animation.is_running());
    }
}

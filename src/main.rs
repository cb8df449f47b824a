use std::time::{Duration, Instant};

use iced::widget::{column, container};
use iced::{Element, Length, Size, Subscription, Task, Theme};
use tracing::{debug, info};

mod config;
mod error;
mod state;
mod ui;

use config::Config;
use state::data::DetectedIngredient;
use state::navigation::{Navigator, Screen, ScreenTransition, Transition};
use state::{auth, camera, grocery, home, live, onboarding, profile, recipe, Screens};
use ui::transition::Animation;

/// Main application state
struct Bite {
    config: Config,
    /// Single owner of what is on screen
    navigator: Navigator,
    /// Local state of each screen
    screens: Screens,
    /// Entry animation of the current screen
    screen_animation: Animation,
    /// Entry animation of the tab bar
    tab_bar_animation: Animation,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// A view asked the Navigator for a transition
    Navigate(Transition),
    /// Splash delay is over
    SplashElapsed,
    Auth(auth::Message),
    Onboarding(onboarding::Message),
    Home(home::Message),
    Recipe(recipe::Message),
    Camera(camera::Message),
    /// Background ingredient analysis finished for a capture generation
    CaptureAnalyzed(u64, Vec<DetectedIngredient>),
    Live(live::Message),
    /// One second passed on the Live screen
    LiveTick,
    Grocery(grocery::Message),
    Profile(profile::Message),
    /// Animation frame
    Frame(Instant),
}

impl Bite {
    /// Create a new instance of the application
    fn new(config: Config) -> (Self, Task<Message>) {
        let navigator = Navigator::new();
        let now = Instant::now();

        info!(screen = ?navigator.screen(), "🍴 BITE started");

        let splash = Task::perform(
            splash_elapsed(config.splash_delay()),
            |()| Message::SplashElapsed,
        );

        (
            Bite {
                screen_animation: Animation::start(navigator.transition(), now),
                tab_bar_animation: Animation::start(ScreenTransition::Rise, now),
                navigator,
                screens: Screens::default(),
                config,
            },
            splash,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(transition) => self.navigate(transition),
            Message::SplashElapsed => self.navigate(Transition::CompleteSplash),
            Message::Auth(message) => self.screens.auth.update(message),
            Message::Onboarding(message) => {
                if self.screens.onboarding.update(message) == onboarding::Outcome::Completed {
                    self.navigate(Transition::CompleteOnboarding);
                }
            }
            Message::Home(message) => self.screens.home.update(message),
            Message::Recipe(message) => self.screens.recipe.update(message),
            Message::Camera(message) => {
                if let Some(generation) = self.screens.camera.update(message) {
                    debug!(generation, "📸 capture taken, analyzing");
                    return Task::perform(
                        camera::analyze_capture(generation, self.config.capture_delay()),
                        |(generation, detected)| Message::CaptureAnalyzed(generation, detected),
                    );
                }
            }
            Message::CaptureAnalyzed(generation, detected) => {
                debug!(generation, count = detected.len(), "ingredients detected");
                self.screens.camera.analysis_complete(generation, detected);
            }
            Message::Live(message) => self.screens.live.update(message),
            Message::LiveTick => self.screens.live.tick(),
            Message::Grocery(message) => {
                debug!(?message, "grocery");
                self.screens.grocery.update(message);
            }
            Message::Profile(message) => self.screens.profile.update(message),
            Message::Frame(now) => {
                self.screen_animation.advance(now);
                self.tab_bar_animation.advance(now);
            }
        }

        Task::none()
    }

    /// Apply a transition and start the screen it lands on afresh
    fn navigate(&mut self, transition: Transition) {
        let from = self.navigator.state();

        match transition {
            Transition::CompleteSplash => self.navigator.complete_splash(),
            Transition::CompleteOnboarding => self.navigator.complete_onboarding(),
            Transition::Login => {
                self.navigator.login();
                info!("✅ logged in");
            }
            Transition::SignUp => {
                self.navigator.sign_up();
                info!("✅ signed up");
            }
            Transition::SwitchToSignUp => self.navigator.switch_to_sign_up(),
            Transition::SwitchToLogin => self.navigator.switch_to_login(),
            Transition::BackFromOnboardingGate => self.navigator.back_from_onboarding_gate(),
            Transition::BackFromSignUp => self.navigator.back_from_sign_up(),
            Transition::SelectRecipe(id) => {
                self.navigator.select_recipe(id);
                debug!(recipe = ?self.navigator.selected_recipe_id(), "recipe opened");
            }
            Transition::Navigate(target) => self.navigator.navigate(target),
            Transition::SelectTab(tab) => self.navigator.select_tab(tab),
            Transition::BackToHome => self.navigator.back_to_home(),
            Transition::ConfirmCapture => self.navigator.confirm_capture(),
            Transition::Logout => {
                self.navigator.logout();
                info!("👋 logged out");
            }
        }

        let to = self.navigator.state();

        if to.screen == from.screen {
            return;
        }

        let now = Instant::now();
        self.screens.enter(to.screen);
        self.screen_animation = Animation::start(to.screen.transition(), now);

        if to.screen.has_bottom_nav() && !from.screen.has_bottom_nav() {
            self.tab_bar_animation = Animation::start(ScreenTransition::Rise, now);
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let screen = match self.navigator.screen() {
            Screen::Splash => ui::splash::view(),
            Screen::Onboarding => ui::onboarding::view(&self.screens.onboarding),
            Screen::Login => ui::auth::login(&self.screens.auth),
            Screen::SignUp => ui::auth::sign_up(&self.screens.auth),
            Screen::Home => ui::home::view(&self.screens.home),
            Screen::RecipeDetail => ui::recipe::view(&self.screens.recipe),
            Screen::Camera => ui::camera::view(&self.screens.camera),
            Screen::Live => ui::live::view(&self.screens.live),
            Screen::Grocery => ui::grocery::view(&self.screens.grocery),
            Screen::Profile => ui::profile::view(&self.screens.profile),
        };

        let mut layout = column![container(self.screen_animation.apply(screen)).height(Length::Fill)];

        if self.navigator.show_bottom_nav() {
            let tab_bar = ui::tab_bar::view(self.navigator.active_tab());
            layout = layout.push(self.tab_bar_animation.apply(tab_bar));
        }

        layout.into()
    }

    /// Timers: the live-session clock and animation frames
    fn subscription(&self) -> Subscription<Message> {
        let live = if self.navigator.screen() == Screen::Live {
            iced::time::every(Duration::from_secs(1)).map(|_| Message::LiveTick)
        } else {
            Subscription::none()
        };

        let frames = if self.screen_animation.is_running() || self.tab_bar_animation.is_running() {
            iced::window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        };

        Subscription::batch([live, frames])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.config.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bite=info".into()),
        )
        .init();

    let config = Config::load();
    let window = Size::new(config.window_width, config.window_height);

    iced::application("BITE", Bite::update, Bite::view)
        .subscription(Bite::subscription)
        .theme(Bite::theme)
        .window_size(window)
        .centered()
        .run_with(move || Bite::new(config))
}

/// Hold the splash screen for its configured time
async fn splash_elapsed(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> Bite {
        Bite::new(Config::default()).0
    }

    #[test]
    fn test_splash_elapsed_moves_to_onboarding() {
        let mut bite = app();
        let _ = bite.update(Message::SplashElapsed);
        assert_eq!(bite.navigator.screen(), Screen::Onboarding);
    }

    #[test]
    fn test_onboarding_completion_reaches_login() {
        let mut bite = app();
        let _ = bite.update(Message::SplashElapsed);
        let _ = bite.update(Message::Onboarding(onboarding::Message::Skip));
        assert_eq!(bite.navigator.screen(), Screen::Login);
    }

    #[test]
    fn test_entering_a_screen_resets_its_state() {
        let mut bite = app();
        let _ = bite.update(Message::Navigate(Transition::SelectTab(state::navigation::Tab::Grocery)));
        let _ = bite.update(Message::Grocery(grocery::Message::Removed(1)));
        assert_eq!(bite.screens.grocery.items().len(), 7);

        // Re-selecting the tab keeps the list
        let _ = bite.update(Message::Navigate(Transition::SelectTab(state::navigation::Tab::Grocery)));
        assert_eq!(bite.screens.grocery.items().len(), 7);

        let _ = bite.update(Message::Navigate(Transition::BackToHome));
        let _ = bite.update(Message::Navigate(Transition::SelectTab(state::navigation::Tab::Grocery)));
        assert_eq!(bite.screens.grocery.items().len(), 8);
    }

    #[test]
    fn test_live_tick_advances_timer() {
        let mut bite = app();
        let _ = bite.update(Message::Navigate(Transition::SelectTab(state::navigation::Tab::Live)));
        let _ = bite.update(Message::LiveTick);
        assert_eq!(bite.screens.live.elapsed_secs(), live::INITIAL_ELAPSED_SECS + 1);
    }

    #[test]
    fn test_camera_confirm_returns_home() {
        let mut bite = app();
        let _ = bite.update(Message::Navigate(Transition::Login));
        let _ = bite.update(Message::Navigate(Transition::Navigate(Screen::Camera)));
        let _ = bite.update(Message::Camera(camera::Message::Capture));
        let _ = bite.update(Message::CaptureAnalyzed(1, state::data::DETECTED_INGREDIENTS.to_vec()));
        assert_eq!(bite.screens.camera.stage(), camera::Stage::Results);

        let _ = bite.update(Message::Navigate(Transition::ConfirmCapture));
        assert_eq!(bite.navigator.screen(), Screen::Home);
        assert!(bite.navigator.show_bottom_nav());
    }

    #[test]
    fn test_analysis_from_before_reentering_camera_is_ignored() {
        let mut bite = app();
        let _ = bite.update(Message::Navigate(Transition::Login));
        let _ = bite.update(Message::Navigate(Transition::Navigate(Screen::Camera)));
        let _ = bite.update(Message::Camera(camera::Message::Capture));

        let _ = bite.update(Message::Navigate(Transition::BackToHome));
        let _ = bite.update(Message::Navigate(Transition::Navigate(Screen::Camera)));
        assert_eq!(bite.screens.camera.stage(), camera::Stage::Ready);
        let _ = bite.update(Message::Camera(camera::Message::Capture));

        // The first capture's analysis lands while the second is in flight
        let _ = bite.update(Message::CaptureAnalyzed(1, state::data::DETECTED_INGREDIENTS.to_vec()));
        assert_eq!(bite.screens.camera.stage(), camera::Stage::Capturing);
        assert!(bite.screens.camera.detected().is_empty());

        let _ = bite.update(Message::CaptureAnalyzed(2, state::data::DETECTED_INGREDIENTS.to_vec()));
        assert_eq!(bite.screens.camera.stage(), camera::Stage::Results);
    }

    #[tokio::test]
    async fn test_splash_elapsed_waits() {
        let started = Instant::now();
        splash_elapsed(Duration::from_millis(5)).await;
        assert!(started.elapsed() >= Duration::from_millis(5));
    }
}

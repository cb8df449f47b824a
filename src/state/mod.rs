/// State management module
///
/// This module holds all application state:
/// - Screen navigation, the single owner of what is on screen (navigation.rs)
/// - The built-in catalog and shared data structures (data.rs)
/// - Per-screen state that lives only while its screen is shown
///   (auth, onboarding, home, recipe, camera, live, grocery, profile)

pub mod navigation;
pub mod data;
pub mod auth;
pub mod onboarding;
pub mod home;
pub mod recipe;
pub mod camera;
pub mod live;
pub mod grocery;
pub mod profile;

use navigation::Screen;

/// Local state of every screen
///
/// A screen's state starts fresh each time the screen is entered.
#[derive(Debug, Default)]
pub struct Screens {
    pub auth: auth::AuthForm,
    pub onboarding: onboarding::Onboarding,
    pub home: home::Home,
    pub recipe: recipe::RecipeView,
    pub camera: camera::Camera,
    pub live: live::LiveSession,
    pub grocery: grocery::GroceryList,
    pub profile: profile::Profile,
}

impl Screens {
    /// Reset the state belonging to a screen that is being entered
    pub fn enter(&mut self, screen: Screen) {
        match screen {
            Screen::Splash => {}
            Screen::Onboarding => self.onboarding = Default::default(),
            Screen::Login | Screen::SignUp => self.auth = Default::default(),
            Screen::Home => self.home = Default::default(),
            Screen::RecipeDetail => self.recipe = Default::default(),
            Screen::Camera => self.camera.reset(),
            Screen::Live => self.live = Default::default(),
            Screen::Grocery => self.grocery = Default::default(),
            Screen::Profile => self.profile = Default::default(),
        }
    }
}

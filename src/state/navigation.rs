/// Screen navigation
///
/// The Navigator is the single owner of "what is on screen": the current
/// screen, the highlighted bottom tab and the last recipe the user opened.
/// Views never mutate this state directly; they emit messages which the
/// application maps onto the named operations below.
///
/// Every operation is accepted from any screen.

use tracing::debug;

/// Top-level views, exactly one of which is rendered at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Splash,
    Onboarding,
    Login,
    SignUp,
    Home,
    RecipeDetail,
    Camera,
    Live,
    Grocery,
    Profile,
}

impl Screen {
    /// Whether the bottom tab bar accompanies this screen
    pub fn has_bottom_nav(self) -> bool {
        matches!(
            self,
            Screen::Home | Screen::Live | Screen::Grocery | Screen::Profile
        )
    }

    /// Animation class used when this screen enters or leaves
    pub fn transition(self) -> ScreenTransition {
        match self {
            Screen::Splash | Screen::Home | Screen::Live => ScreenTransition::Fade,
            Screen::Onboarding
            | Screen::Login
            | Screen::SignUp
            | Screen::Grocery
            | Screen::Profile => ScreenTransition::Slide,
            Screen::RecipeDetail => ScreenTransition::Rise,
            Screen::Camera => ScreenTransition::Zoom,
        }
    }
}

/// Bottom navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Home,
    Live,
    Grocery,
    Profile,
}

impl Tab {
    /// Tabs in tab-bar order
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Live, Tab::Grocery, Tab::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Live => "Live",
            Tab::Grocery => "Grocery",
            Tab::Profile => "Profile",
        }
    }

    /// The screen a tab routes to
    pub fn screen(self) -> Screen {
        match self {
            Tab::Home => Screen::Home,
            Tab::Live => Screen::Live,
            Tab::Grocery => Screen::Grocery,
            Tab::Profile => Screen::Profile,
        }
    }
}

/// Entry/exit animation class of a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Opacity only
    Fade,
    /// Enters from the right, leaves to the left
    Slide,
    /// Springs up from below (also used by the tab bar)
    Rise,
    /// Scales in from 90%
    Zoom,
}

/// Snapshot of the navigation state handed to views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub screen: Screen,
    pub active_tab: Tab,
    /// Set when a recipe is opened from Home, never cleared
    pub selected_recipe_id: Option<u32>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            screen: Screen::Splash,
            active_tab: Tab::Home,
            selected_recipe_id: None,
        }
    }
}

/// Every request a view can make of the Navigator
///
/// `ConfirmCapture` and `BackToHome` currently share an effect but are kept
/// apart so camera confirmation can grow its own behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    CompleteSplash,
    CompleteOnboarding,
    Login,
    SignUp,
    SwitchToSignUp,
    SwitchToLogin,
    BackFromOnboardingGate,
    BackFromSignUp,
    SelectRecipe(u32),
    Navigate(Screen),
    SelectTab(Tab),
    BackToHome,
    ConfirmCapture,
    Logout,
}

/// The transition table
///
/// Pure function from a state and a request to the next state. Guards, if
/// they are ever wanted, belong here.
pub fn apply(state: NavigationState, transition: Transition) -> NavigationState {
    let mut next = state;

    match transition {
        Transition::CompleteSplash => next.screen = Screen::Onboarding,
        Transition::CompleteOnboarding => next.screen = Screen::Login,
        Transition::Login | Transition::SignUp => {
            next.screen = Screen::Home;
            next.active_tab = Tab::Home;
        }
        Transition::SwitchToSignUp => next.screen = Screen::SignUp,
        Transition::SwitchToLogin => next.screen = Screen::Login,
        Transition::BackFromOnboardingGate => next.screen = Screen::Onboarding,
        Transition::BackFromSignUp => next.screen = Screen::Login,
        Transition::SelectRecipe(id) => {
            next.selected_recipe_id = Some(id);
            next.screen = Screen::RecipeDetail;
        }
        Transition::Navigate(target) => next.screen = target,
        Transition::SelectTab(tab) => {
            next.active_tab = tab;
            next.screen = tab.screen();
        }
        Transition::BackToHome | Transition::ConfirmCapture => {
            next.screen = Screen::Home;
            next.active_tab = Tab::Home;
        }
        Transition::Logout => {
            next.screen = Screen::Login;
            next.active_tab = Tab::Home;
        }
    }

    next
}

/// Owner of the application's navigation state
#[derive(Debug, Default)]
pub struct Navigator {
    state: NavigationState,
}

impl Navigator {
    /// Start at the splash screen with the Home tab selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only snapshot for rendering
    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen
    }

    pub fn active_tab(&self) -> Tab {
        self.state.active_tab
    }

    pub fn selected_recipe_id(&self) -> Option<u32> {
        self.state.selected_recipe_id
    }

    /// Whether the bottom tab bar is visible
    pub fn show_bottom_nav(&self) -> bool {
        self.state.screen.has_bottom_nav()
    }

    /// Animation class of the current screen
    pub fn transition(&self) -> ScreenTransition {
        self.state.screen.transition()
    }

    /// Apply a transition through the table
    pub fn dispatch(&mut self, transition: Transition) {
        let from = self.state.screen;
        self.state = apply(self.state, transition);
        debug!(
            ?transition,
            ?from,
            to = ?self.state.screen,
            tab = ?self.state.active_tab,
            "navigation"
        );
    }

    /// Splash finished
    pub fn complete_splash(&mut self) {
        self.dispatch(Transition::CompleteSplash);
    }

    /// Onboarding finished or skipped
    pub fn complete_onboarding(&mut self) {
        self.dispatch(Transition::CompleteOnboarding);
    }

    pub fn login(&mut self) {
        self.dispatch(Transition::Login);
    }

    pub fn sign_up(&mut self) {
        self.dispatch(Transition::SignUp);
    }

    pub fn switch_to_sign_up(&mut self) {
        self.dispatch(Transition::SwitchToSignUp);
    }

    pub fn switch_to_login(&mut self) {
        self.dispatch(Transition::SwitchToLogin);
    }

    /// Login's back button
    pub fn back_from_onboarding_gate(&mut self) {
        self.dispatch(Transition::BackFromOnboardingGate);
    }

    pub fn back_from_sign_up(&mut self) {
        self.dispatch(Transition::BackFromSignUp);
    }

    /// Open a recipe
    pub fn select_recipe(&mut self, id: u32) {
        self.dispatch(Transition::SelectRecipe(id));
    }

    /// Jump to an arbitrary screen without touching the tab
    pub fn navigate(&mut self, target: Screen) {
        self.dispatch(Transition::Navigate(target));
    }

    /// Tab bar press
    pub fn select_tab(&mut self, tab: Tab) {
        self.dispatch(Transition::SelectTab(tab));
    }

    pub fn back_to_home(&mut self) {
        self.dispatch(Transition::BackToHome);
    }

    /// Detected ingredients accepted
    pub fn confirm_capture(&mut self) {
        self.dispatch(Transition::ConfirmCapture);
    }

    pub fn logout(&mut self) {
        self.dispatch(Transition::Logout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SCREENS: [Screen; 10] = [
        Screen::Splash,
        Screen::Onboarding,
        Screen::Login,
        Screen::SignUp,
        Screen::Home,
        Screen::RecipeDetail,
        Screen::Camera,
        Screen::Live,
        Screen::Grocery,
        Screen::Profile,
    ];

    fn at(screen: Screen) -> Navigator {
        let mut nav = Navigator::new();
        nav.navigate(screen);
        nav
    }

    #[test]
    fn test_initial_state() {
        let nav = Navigator::new();
        assert_eq!(nav.screen(), Screen::Splash);
        assert_eq!(nav.active_tab(), Tab::Home);
        assert_eq!(nav.selected_recipe_id(), None);
        assert!(!nav.show_bottom_nav());
    }

    #[test]
    fn test_bottom_nav_follows_screen() {
        let mut nav = at(Screen::Login);
        nav.login();
        assert!(nav.show_bottom_nav());

        nav.select_recipe(7);
        assert!(!nav.show_bottom_nav());
    }

    #[test]
    fn test_select_tab_routes_to_screen() {
        for tab in Tab::ALL {
            let mut nav = at(Screen::RecipeDetail);
            nav.select_tab(tab);
            assert_eq!(nav.active_tab(), tab);
            assert_eq!(nav.screen(), tab.screen());
        }
    }

    #[test]
    fn test_recipe_id_retained_after_leaving_detail() {
        let mut nav = at(Screen::Home);
        nav.select_recipe(42);
        assert_eq!(nav.screen(), Screen::RecipeDetail);
        assert_eq!(nav.selected_recipe_id(), Some(42));

        nav.back_to_home();
        assert_eq!(nav.screen(), Screen::Home);
        assert_eq!(nav.active_tab(), Tab::Home);
        assert_eq!(nav.selected_recipe_id(), Some(42));
    }

    #[test]
    fn test_auth_loop() {
        let mut nav = Navigator::new();
        nav.complete_splash();
        assert_eq!(nav.screen(), Screen::Onboarding);
        nav.complete_onboarding();
        assert_eq!(nav.screen(), Screen::Login);
        nav.switch_to_sign_up();
        assert_eq!(nav.screen(), Screen::SignUp);
        nav.switch_to_login();
        assert_eq!(nav.screen(), Screen::Login);
        nav.login();
        assert_eq!(nav.screen(), Screen::Home);
        assert_eq!(nav.active_tab(), Tab::Home);
    }

    #[test]
    fn test_back_buttons_on_auth_screens() {
        let mut nav = at(Screen::SignUp);
        nav.back_from_sign_up();
        assert_eq!(nav.screen(), Screen::Login);

        nav.back_from_onboarding_gate();
        assert_eq!(nav.screen(), Screen::Onboarding);

        let mut nav = at(Screen::SignUp);
        nav.sign_up();
        assert_eq!(nav.screen(), Screen::Home);
        assert_eq!(nav.active_tab(), Tab::Home);
    }

    #[test]
    fn test_logout_loop() {
        let mut nav = Navigator::new();
        nav.select_tab(Tab::Profile);
        assert_eq!(nav.active_tab(), Tab::Profile);

        nav.logout();
        assert_eq!(nav.screen(), Screen::Login);
        assert_eq!(nav.active_tab(), Tab::Home);

        nav.login();
        assert_eq!(nav.screen(), Screen::Home);
        assert_eq!(nav.active_tab(), Tab::Home);
    }

    #[test]
    fn test_confirm_capture_matches_back_to_home() {
        let mut camera = at(Screen::Home);
        camera.select_recipe(3);
        camera.select_tab(Tab::Grocery);
        camera.navigate(Screen::Camera);

        let before = camera.state();
        let confirmed = apply(before, Transition::ConfirmCapture);
        let backed = apply(before, Transition::BackToHome);

        assert_eq!(confirmed, backed);
        assert_eq!(confirmed.screen, Screen::Home);
        assert_eq!(confirmed.active_tab, Tab::Home);
        assert_eq!(confirmed.selected_recipe_id, Some(3));
    }

    #[test]
    fn test_navigate_keeps_tab() {
        let mut nav = Navigator::new();
        nav.select_tab(Tab::Live);
        nav.navigate(Screen::Camera);
        assert_eq!(nav.screen(), Screen::Camera);
        assert_eq!(nav.active_tab(), Tab::Live);
    }

    #[test]
    fn test_transition_classes() {
        assert_eq!(Screen::Splash.transition(), ScreenTransition::Fade);
        assert_eq!(Screen::Login.transition(), ScreenTransition::Slide);
        assert_eq!(Screen::RecipeDetail.transition(), ScreenTransition::Rise);
        assert_eq!(Screen::Camera.transition(), ScreenTransition::Zoom);

        let mut nav = at(Screen::Home);
        nav.navigate(Screen::Camera);
        assert_eq!(nav.transition(), ScreenTransition::Zoom);
    }

    fn any_screen() -> impl Strategy<Value = Screen> {
        proptest::sample::select(SCREENS.to_vec())
    }

    fn any_tab() -> impl Strategy<Value = Tab> {
        proptest::sample::select(Tab::ALL.to_vec())
    }

    fn any_transition() -> impl Strategy<Value = Transition> {
        prop_oneof![
            Just(Transition::CompleteSplash),
            Just(Transition::CompleteOnboarding),
            Just(Transition::Login),
            Just(Transition::SignUp),
            Just(Transition::SwitchToSignUp),
            Just(Transition::SwitchToLogin),
            Just(Transition::BackFromOnboardingGate),
            Just(Transition::BackFromSignUp),
            any::<u32>().prop_map(Transition::SelectRecipe),
            any_screen().prop_map(Transition::Navigate),
            any_tab().prop_map(Transition::SelectTab),
            Just(Transition::BackToHome),
            Just(Transition::ConfirmCapture),
            Just(Transition::Logout),
        ]
    }

    proptest! {
        #[test]
        fn prop_bottom_nav_is_derived(transitions in prop::collection::vec(any_transition(), 0..40)) {
            let mut nav = Navigator::new();
            for transition in transitions {
                nav.dispatch(transition);
                let expected = matches!(
                    nav.screen(),
                    Screen::Home | Screen::Live | Screen::Grocery | Screen::Profile
                );
                prop_assert_eq!(nav.show_bottom_nav(), expected);
            }
        }

        #[test]
        fn prop_select_tab_couples_screen(
            transitions in prop::collection::vec(any_transition(), 0..20),
            tab in any_tab(),
        ) {
            let mut nav = Navigator::new();
            for transition in transitions {
                nav.dispatch(transition);
            }
            let recipe = nav.selected_recipe_id();
            nav.select_tab(tab);
            prop_assert_eq!(nav.active_tab(), tab);
            prop_assert_eq!(nav.screen(), tab.screen());
            prop_assert_eq!(nav.selected_recipe_id(), recipe);
        }

        #[test]
        fn prop_every_transition_accepted_anywhere(screen in any_screen(), transition in any_transition()) {
            let mut nav = at(screen);
            nav.dispatch(transition);
            prop_assert!(SCREENS.contains(&nav.screen()));
        }
    }
}

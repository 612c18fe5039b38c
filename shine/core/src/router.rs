//! View Router
//!
//! The shared application context: which screen is showing, which
//! personality is active, and the celebration overlay. Surfaces receive the
//! context explicitly and send [`UiAction`]s back; there is no global state.
//!
//! Navigation is unguarded: every view is reachable from every other view.

use crate::celebration::CelebrationOverlay;
use crate::events::UiAction;
use crate::personality::PersonalityVariant;

/// The top-level screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewState {
    /// Home screen
    #[default]
    Dashboard,
    /// Chat screen
    Conversation,
    /// Growth story screen
    Progress,
}

impl ViewState {
    /// All views in navigation-bar order
    pub const ALL: [ViewState; 3] = [Self::Dashboard, Self::Conversation, Self::Progress];

    /// Short label for the navigation bar
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Home",
            Self::Conversation => "Talk",
            Self::Progress => "Growth",
        }
    }

    /// Next view in bar order (wraps)
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Dashboard => Self::Conversation,
            Self::Conversation => Self::Progress,
            Self::Progress => Self::Dashboard,
        }
    }
}

/// Side effects the owner of the context must carry out
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouterEffect {
    /// Propagate the new personality to dependents (the conversation)
    PersonalityChanged(PersonalityVariant),
    /// Shut down
    Quit,
}

/// Shared application context
#[derive(Clone, Debug, Default)]
pub struct AppContext {
    view: ViewState,
    personality: PersonalityVariant,
    celebration: CelebrationOverlay,
}

impl AppContext {
    /// Context starting on the dashboard with `personality`
    #[must_use]
    pub fn new(personality: PersonalityVariant) -> Self {
        Self {
            view: ViewState::Dashboard,
            personality,
            celebration: CelebrationOverlay::default(),
        }
    }

    /// Active screen
    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Active personality
    #[must_use]
    pub fn personality(&self) -> PersonalityVariant {
        self.personality
    }

    /// The overlay
    #[must_use]
    pub fn celebration(&self) -> &CelebrationOverlay {
        &self.celebration
    }

    /// Overlay visibility flag
    #[must_use]
    pub fn celebration_visible(&self) -> bool {
        self.celebration.is_visible()
    }

    /// Switch screens unconditionally
    pub fn navigate_to(&mut self, view: ViewState) {
        if self.view != view {
            tracing::debug!(from = ?self.view, to = ?view, "navigate");
        }
        self.view = view;
    }

    /// Change the shared personality
    pub fn set_personality(&mut self, personality: PersonalityVariant) {
        self.personality = personality;
    }

    /// Open the overlay
    pub fn show_celebration(&mut self) {
        self.celebration.show();
    }

    /// Close the overlay
    pub fn hide_celebration(&mut self) {
        self.celebration.close();
    }

    /// Apply an action, returning any effect the caller must handle
    pub fn apply(&mut self, action: UiAction) -> Option<RouterEffect> {
        match action {
            UiAction::Navigate(view) => {
                self.navigate_to(view);
                None
            }
            UiAction::SelectPersonality(personality) => {
                self.set_personality(personality);
                Some(RouterEffect::PersonalityChanged(personality))
            }
            UiAction::ShowCelebration => {
                self.show_celebration();
                None
            }
            UiAction::HideCelebration => {
                self.hide_celebration();
                None
            }
            UiAction::ContinueJourney => {
                self.celebration.continue_journey();
                None
            }
            UiAction::ShareAchievement => {
                self.celebration.share();
                None
            }
            UiAction::QuickAction(quick) => {
                tracing::info!(action = quick.label(), "quick action");
                self.navigate_to(ViewState::Conversation);
                None
            }
            UiAction::AvatarClicked => {
                tracing::debug!(personality = ?self.personality, "avatar clicked");
                None
            }
            UiAction::Quit => Some(RouterEffect::Quit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::QuickAction;

    #[test]
    fn test_initial_state() {
        let ctx = AppContext::default();
        assert_eq!(ctx.view(), ViewState::Dashboard);
        assert_eq!(ctx.personality(), PersonalityVariant::Friend);
        assert!(!ctx.celebration_visible());
    }

    #[test]
    fn test_any_view_reachable_from_any_view() {
        let mut ctx = AppContext::default();
        for from in ViewState::ALL {
            for to in ViewState::ALL {
                ctx.navigate_to(from);
                ctx.navigate_to(to);
                assert_eq!(ctx.view(), to);
            }
        }
    }

    #[test]
    fn test_select_personality_reports_change() {
        let mut ctx = AppContext::default();
        let effect = ctx.apply(UiAction::SelectPersonality(PersonalityVariant::Coach));
        assert_eq!(
            effect,
            Some(RouterEffect::PersonalityChanged(PersonalityVariant::Coach))
        );
        assert_eq!(ctx.personality(), PersonalityVariant::Coach);
    }

    #[test]
    fn test_celebration_actions() {
        let mut ctx = AppContext::default();
        ctx.apply(UiAction::ShowCelebration);
        assert!(ctx.celebration_visible());
        ctx.apply(UiAction::ShareAchievement);
        assert!(ctx.celebration_visible());
        ctx.apply(UiAction::ContinueJourney);
        assert!(!ctx.celebration_visible());

        ctx.show_celebration();
        ctx.apply(UiAction::HideCelebration);
        assert!(!ctx.celebration_visible());
    }

    #[test]
    fn test_quick_action_opens_conversation() {
        let mut ctx = AppContext::default();
        assert_eq!(ctx.apply(UiAction::QuickAction(QuickAction::Spark)), None);
        assert_eq!(ctx.view(), ViewState::Conversation);
    }

    #[test]
    fn test_quit_is_an_effect() {
        let mut ctx = AppContext::default();
        assert_eq!(ctx.apply(UiAction::Quit), Some(RouterEffect::Quit));
    }

    #[test]
    fn test_view_cycle() {
        assert_eq!(ViewState::Progress.next(), ViewState::Dashboard);
        assert_eq!(ViewState::Dashboard.next(), ViewState::Conversation);
    }
}

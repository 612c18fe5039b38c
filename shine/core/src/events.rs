//! UI Actions
//!
//! Everything a surface can ask the router to do. Surfaces translate raw
//! input (keys, clicks) into these values; they never mutate shared state
//! themselves.

use crate::dashboard::QuickAction;
use crate::personality::PersonalityVariant;
use crate::router::ViewState;

/// A request from a surface to the router
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    /// Switch the active screen
    Navigate(ViewState),
    /// The personality picker chose a variant
    SelectPersonality(PersonalityVariant),
    /// Open the celebration overlay
    ShowCelebration,
    /// Close the celebration overlay (close button)
    HideCelebration,
    /// Close the celebration overlay ("Continue Learning Journey")
    ContinueJourney,
    /// "Share Your Success"
    ShareAchievement,
    /// A dashboard shortcut was pressed
    QuickAction(QuickAction),
    /// An avatar badge was clicked
    AvatarClicked,
    /// Leave the application
    Quit,
}

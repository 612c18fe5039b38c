//! Celebration Overlay
//!
//! A two-state modal. Something outside the overlay opens it; the overlay
//! closes itself through its close or continue actions. Transitions are
//! instantaneous, there are no intermediate states.
//!
//! ```text
//!            show()
//!   Hidden ─────────► Visible ──┐ share() (stays)
//!     ▲                 │  ◄────┘
//!     └─────────────────┘
//!     close() / continue_journey()
//! ```

use serde::{Deserialize, Serialize};

use crate::tokens::{ColorToken, GradientToken};

/// Kind of achievement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    /// A sudden leap forward
    Breakthrough,
    /// A planned goal reached
    Milestone,
    /// Consistent practice over days
    Streak,
}

impl AchievementCategory {
    /// Lowercase label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Breakthrough => "breakthrough",
            Self::Milestone => "milestone",
            Self::Streak => "streak",
        }
    }

    /// Card background gradient
    #[must_use]
    pub fn gradient(self) -> GradientToken {
        match self {
            Self::Breakthrough => GradientToken::Success,
            Self::Milestone => GradientToken::Professional,
            Self::Streak => GradientToken::Friend,
        }
    }

    /// Accent color for icons and badges
    #[must_use]
    pub fn accent(self) -> ColorToken {
        match self {
            Self::Breakthrough => ColorToken::Success,
            Self::Milestone => ColorToken::ProfessionalLight,
            Self::Streak => ColorToken::Friend,
        }
    }

    /// Single-cell glyph shown above the title
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Breakthrough => '▲',
            Self::Milestone => '★',
            Self::Streak => '✹',
        }
    }
}

/// A static description of something the user achieved
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementRecord {
    /// Short title
    pub title: String,
    /// One or two sentences
    pub description: String,
    /// Kind of achievement
    pub category: AchievementCategory,
}

impl AchievementRecord {
    /// Create a record
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: AchievementCategory,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
        }
    }

    /// The record shown by the celebration overlay
    #[must_use]
    pub fn featured() -> Self {
        Self::new(
            "Conversation Catalyst",
            "You've successfully initiated 5 meaningful conversations this week! Your \
             confidence is radiating through every interaction.",
            AchievementCategory::Milestone,
        )
    }
}

/// Overlay visibility
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    /// Not drawn
    #[default]
    Hidden,
    /// Drawn above the active view
    Visible,
}

/// The celebration modal's state machine
#[derive(Clone, Debug)]
pub struct CelebrationOverlay {
    state: OverlayState,
    achievement: AchievementRecord,
    /// Incremented on every Hidden→Visible transition
    openings: u32,
}

impl CelebrationOverlay {
    /// Create a hidden overlay for `achievement`
    #[must_use]
    pub fn new(achievement: AchievementRecord) -> Self {
        Self {
            state: OverlayState::Hidden,
            achievement,
            openings: 0,
        }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Whether the overlay is drawn
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state == OverlayState::Visible
    }

    /// How many times the overlay has been opened (surfaces restart their
    /// entrance effects when this changes)
    #[must_use]
    pub fn openings(&self) -> u32 {
        self.openings
    }

    /// The achievement, only while visible
    #[must_use]
    pub fn payload(&self) -> Option<&AchievementRecord> {
        match self.state {
            OverlayState::Visible => Some(&self.achievement),
            OverlayState::Hidden => None,
        }
    }

    /// Hidden → Visible
    pub fn show(&mut self) {
        if self.state == OverlayState::Hidden {
            self.openings = self.openings.wrapping_add(1);
            tracing::debug!(title = %self.achievement.title, "celebration shown");
        }
        self.state = OverlayState::Visible;
    }

    /// Visible → Hidden via the close button
    pub fn close(&mut self) {
        self.state = OverlayState::Hidden;
    }

    /// Visible → Hidden via "Continue Learning Journey"
    pub fn continue_journey(&mut self) {
        self.state = OverlayState::Hidden;
    }

    /// "Share Your Success" - records the request, overlay stays open
    pub fn share(&self) {
        if self.is_visible() {
            tracing::info!(title = %self.achievement.title, "sharing achievement");
        }
    }
}

impl Default for CelebrationOverlay {
    fn default() -> Self {
        Self::new(AchievementRecord::featured())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden_without_payload() {
        let overlay = CelebrationOverlay::default();
        assert_eq!(overlay.state(), OverlayState::Hidden);
        assert!(overlay.payload().is_none());
    }

    #[test]
    fn test_show_then_close() {
        let mut overlay = CelebrationOverlay::default();
        overlay.show();
        assert!(overlay.is_visible());
        assert_eq!(
            overlay.payload().map(|a| a.title.as_str()),
            Some("Conversation Catalyst")
        );

        overlay.close();
        assert!(!overlay.is_visible());
        assert!(overlay.payload().is_none());
    }

    #[test]
    fn test_continue_hides() {
        let mut overlay = CelebrationOverlay::default();
        overlay.show();
        overlay.continue_journey();
        assert_eq!(overlay.state(), OverlayState::Hidden);
    }

    #[test]
    fn test_share_keeps_overlay_open() {
        let mut overlay = CelebrationOverlay::default();
        overlay.show();
        overlay.share();
        assert!(overlay.is_visible());
    }

    #[test]
    fn test_openings_count_only_real_transitions() {
        let mut overlay = CelebrationOverlay::default();
        overlay.show();
        overlay.show();
        assert_eq!(overlay.openings(), 1);
        overlay.close();
        overlay.show();
        assert_eq!(overlay.openings(), 2);
    }

    #[test]
    fn test_category_mapping() {
        assert_eq!(AchievementCategory::Breakthrough.gradient(), GradientToken::Success);
        assert_eq!(AchievementCategory::Milestone.gradient(), GradientToken::Professional);
        assert_eq!(AchievementCategory::Streak.gradient(), GradientToken::Friend);
        assert_eq!(AchievementCategory::Streak.label(), "streak");
    }
}

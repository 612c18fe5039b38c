//! Dashboard Data
//!
//! Greeting, stat cards and quick actions for the home screen.

use serde::{Deserialize, Serialize};

/// The assistant's line under the hero avatar
pub const HERO_MESSAGE: &str = "I'm feeling particularly insightful today. What conversation \
adventure shall we embark on together?";

/// Direction a stat is moving
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    /// Improving (shows a +12% badge)
    Up,
    /// Declining
    Down,
    /// No badge
    Neutral,
}

/// Which icon a stat card shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatKind {
    /// Time remaining
    Clock,
    /// Streak
    Flame,
    /// Breakthroughs
    Sparkles,
}

/// A number with a caption
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    /// Icon
    pub kind: StatKind,
    /// Big number
    pub value: &'static str,
    /// Caption
    pub label: &'static str,
    /// Trend badge
    pub trend: Trend,
}

/// Shortcut buttons on the dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickAction {
    /// Begin Transformation
    Transform,
    /// Quick Spark
    Spark,
    /// Focus Session
    Focus,
}

impl QuickAction {
    /// All actions in display order
    pub const ALL: [QuickAction; 3] = [Self::Transform, Self::Spark, Self::Focus];

    /// Button title
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Transform => "Begin Transformation",
            Self::Spark => "Quick Spark",
            Self::Focus => "Focus Session",
        }
    }

    /// Button caption
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Transform => "Start your personalized learning journey with AI guidance",
            Self::Spark => "Jump into a 5-minute conversation boost",
            Self::Focus => "Work on specific skills with targeted practice",
        }
    }

    /// Drawn with the hero gradient
    #[must_use]
    pub fn is_primary(self) -> bool {
        matches!(self, Self::Transform)
    }
}

/// Everything the dashboard shows
#[derive(Clone, Debug)]
pub struct DashboardData {
    /// Name in the greeting
    pub user_name: String,
    /// Three stat cards
    pub stats: Vec<StatCard>,
}

impl DashboardData {
    /// Sample stats for `user_name`
    #[must_use]
    pub fn sample(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            stats: vec![
                StatCard {
                    kind: StatKind::Clock,
                    value: "47",
                    label: "minutes of brilliance remaining",
                    trend: Trend::Up,
                },
                StatCard {
                    kind: StatKind::Flame,
                    value: "12",
                    label: "day confidence streak",
                    trend: Trend::Up,
                },
                StatCard {
                    kind: StatKind::Sparkles,
                    value: "8",
                    label: "breakthrough moments this week",
                    trend: Trend::Neutral,
                },
            ],
        }
    }

    /// "Welcome, {name}"
    #[must_use]
    pub fn greeting(&self) -> String {
        format!("Welcome, {}", self.user_name)
    }

    /// Line under the greeting
    #[must_use]
    pub fn tagline(&self) -> &'static str {
        "Ready to discover your voice today?"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_uses_name() {
        let data = DashboardData::sample("Ana");
        assert_eq!(data.greeting(), "Welcome, Ana");
    }

    #[test]
    fn test_only_first_two_stats_trend_up() {
        let data = DashboardData::sample("Sarah");
        let trends: Vec<_> = data.stats.iter().map(|s| s.trend).collect();
        assert_eq!(trends, vec![Trend::Up, Trend::Up, Trend::Neutral]);
    }

    #[test]
    fn test_transform_is_the_primary_action() {
        let primary: Vec<_> = QuickAction::ALL
            .into_iter()
            .filter(|a| a.is_primary())
            .collect();
        assert_eq!(primary, vec![QuickAction::Transform]);
    }
}

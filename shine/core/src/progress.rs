//! Progress Data
//!
//! The fixed sample data behind the progress screen: a week of confidence
//! scores, the achievement list, and three learning goals. Nothing here is
//! mutable after construction.

use chrono::{Duration as ChronoDuration, Local, NaiveDate};

use crate::celebration::{AchievementCategory, AchievementRecord};
use crate::tokens::GradientToken;

/// One day of the weekly confidence arc
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeeklyConfidence {
    /// Day name
    pub day: &'static str,
    /// Confidence score, 0..=100
    pub confidence: u8,
    /// What happened that day
    pub highlight: &'static str,
    /// Bar tint
    pub tint: GradientToken,
}

/// An achievement with the date it was earned
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatedAchievement {
    /// The achievement itself
    pub record: AchievementRecord,
    /// When it was earned
    pub date: NaiveDate,
}

/// A goal with completion percentage
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LearningGoal {
    /// Goal name
    pub title: &'static str,
    /// Completion, 0..=100
    pub percent: u8,
    /// Status note under the bar
    pub note: &'static str,
}

/// Everything the progress screen shows
#[derive(Clone, Debug)]
pub struct ProgressData {
    /// Monday..Friday
    pub week: Vec<WeeklyConfidence>,
    /// Most recent last
    pub achievements: Vec<DatedAchievement>,
    /// Exactly three goals
    pub goals: Vec<LearningGoal>,
}

impl DatedAchievement {
    /// Date as month/day/year without padding, e.g. `5/17/2024`
    #[must_use]
    pub fn date_label(&self) -> String {
        self.date.format("%-m/%-d/%Y").to_string()
    }
}

impl ProgressData {
    /// Sample data with achievement dates relative to `today`
    #[must_use]
    pub fn sample_for(today: NaiveDate) -> Self {
        let week = vec![
            WeeklyConfidence {
                day: "Monday",
                confidence: 80,
                highlight: "Discovered 'articulate'",
                tint: GradientToken::Friend,
            },
            WeeklyConfidence {
                day: "Tuesday",
                confidence: 70,
                highlight: "8-minute flowing conversation",
                tint: GradientToken::Professional,
            },
            WeeklyConfidence {
                day: "Wednesday",
                confidence: 100,
                highlight: "Initiated small talk",
                tint: GradientToken::Coach,
            },
            WeeklyConfidence {
                day: "Thursday",
                confidence: 80,
                highlight: "Nailed job interview prep",
                tint: GradientToken::Success,
            },
            WeeklyConfidence {
                day: "Friday",
                confidence: 100,
                highlight: "Confidence breakthrough!",
                tint: GradientToken::Hero,
            },
        ];

        let achievements = vec![
            DatedAchievement {
                record: AchievementRecord::new(
                    "Conversation Catalyst",
                    "Initiated 5 conversations this week",
                    AchievementCategory::Milestone,
                ),
                date: today - ChronoDuration::days(1),
            },
            DatedAchievement {
                record: AchievementRecord::new(
                    "Vocabulary Virtuoso",
                    "Mastered 15 new sophisticated words",
                    AchievementCategory::Breakthrough,
                ),
                date: today - ChronoDuration::days(2),
            },
            DatedAchievement {
                record: AchievementRecord::new(
                    "Confidence Streak",
                    "12 days of consistent practice",
                    AchievementCategory::Streak,
                ),
                date: today,
            },
        ];

        let goals = vec![
            LearningGoal {
                title: "Job Interview Mastery",
                percent: 85,
                note: "3 more practice sessions to complete",
            },
            LearningGoal {
                title: "Vocabulary Expansion",
                percent: 92,
                note: "12 new words learned this week",
            },
            LearningGoal {
                title: "Confidence Building",
                percent: 78,
                note: "Breakthrough moment achieved!",
            },
        ];

        Self {
            week,
            achievements,
            goals,
        }
    }

    /// Sample data dated from the local calendar day
    #[must_use]
    pub fn sample() -> Self {
        Self::sample_for(Local::now().date_naive())
    }

    /// Mean weekly confidence, rounded down
    #[must_use]
    pub fn average_confidence(&self) -> u8 {
        if self.week.is_empty() {
            return 0;
        }
        let total: u32 = self.week.iter().map(|d| u32::from(d.confidence)).sum();
        (total / self.week.len() as u32) as u8
    }
}

impl Default for ProgressData {
    fn default() -> Self {
        Self::sample()
    }
}

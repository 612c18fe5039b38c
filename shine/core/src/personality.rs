//! Assistant Personalities
//!
//! The three voice presets the user can pick for their coach. A personality
//! drives the avatar's colors and is stamped onto every assistant turn the
//! conversation produces.
//!
//! Styling is an exhaustive `match` on the variant: adding a personality
//! fails to compile until it has a style.

use serde::{Deserialize, Serialize};

use crate::tokens::{AnimationToken, ColorToken, GradientToken};

/// One of the three assistant voice presets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityVariant {
    /// Warm, encouraging, supportive
    #[default]
    Friend,
    /// Structured, precise, authoritative
    Professional,
    /// Motivational, energetic, goal-focused
    Coach,
}

/// Visual configuration for a personality
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersonalityStyle {
    /// Gradient used for the avatar ring
    pub gradient: GradientToken,
    /// Accent color for labels and highlights
    pub accent: ColorToken,
    /// Idle animation the avatar plays
    pub idle_animation: AnimationToken,
}

impl PersonalityVariant {
    /// All variants, in picker order
    pub const ALL: [PersonalityVariant; 3] = [Self::Friend, Self::Professional, Self::Coach];

    /// Display label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Friend => "Friend",
            Self::Professional => "Professional",
            Self::Coach => "Coach",
        }
    }

    /// Short description shown under the label in the picker
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Friend => "Warm, encouraging, supportive",
            Self::Professional => "Structured, precise, authoritative",
            Self::Coach => "Motivational, energetic, goal-focused",
        }
    }

    /// Lowercase key, as used in config files and the "{key} mode" caption
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Friend => "friend",
            Self::Professional => "professional",
            Self::Coach => "coach",
        }
    }

    /// Parse a personality key (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "friend" => Some(Self::Friend),
            "professional" => Some(Self::Professional),
            "coach" => Some(Self::Coach),
            _ => None,
        }
    }

    /// Style lookup
    #[must_use]
    pub fn style(self) -> PersonalityStyle {
        match self {
            Self::Friend => PersonalityStyle {
                gradient: GradientToken::Friend,
                accent: ColorToken::Friend,
                idle_animation: AnimationToken::AvatarBreathe,
            },
            Self::Professional => PersonalityStyle {
                gradient: GradientToken::Professional,
                accent: ColorToken::ProfessionalLight,
                idle_animation: AnimationToken::LiquidFloat,
            },
            Self::Coach => PersonalityStyle {
                gradient: GradientToken::Coach,
                accent: ColorToken::Coach,
                idle_animation: AnimationToken::ConfidencePulse,
            },
        }
    }

    /// Next variant in picker order (wraps)
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Friend => Self::Professional,
            Self::Professional => Self::Coach,
            Self::Coach => Self::Friend,
        }
    }

    /// Previous variant in picker order (wraps)
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::Friend => Self::Coach,
            Self::Professional => Self::Friend,
            Self::Coach => Self::Professional,
        }
    }
}

impl std::fmt::Display for PersonalityVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

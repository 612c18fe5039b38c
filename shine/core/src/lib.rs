//! Shine Core - Headless State for the Shine Confidence Coach
//!
//! This crate owns everything Shine does that is not drawing: which screen is
//! active, the personality the user picked, the conversation log and its
//! delayed replies, the celebration modal, the sample dashboard and progress
//! data, the design-token vocabulary, and configuration loading.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                         UI Surface                            │
//! │   ┌───────────────────────────────────────────────────────┐   │
//! │   │  TUI (ratatui)  keys/mouse ──► UiAction               │   │
//! │   └───────────────────────────┬───────────────────────────┘   │
//! └───────────────────────────────┼───────────────────────────────┘
//!                                 │ AppContext::apply
//! ┌───────────────────────────────┼───────────────────────────────┐
//! │                          SHINE CORE                           │
//! │  ┌────────────┐  ┌────────────┴──┐  ┌──────────────────────┐  │
//! │  │ Dashboard  │  │  AppContext   │  │  Conversation        │  │
//! │  │ Progress   │  │  view         │  │  turns, draft        │  │
//! │  │ (samples)  │  │  personality ─┼─►│  ReplyScheduler      │  │
//! │  └────────────┘  │  celebration  │  │  (tokio timers)      │  │
//! │                  └───────────────┘  └──────────────────────┘  │
//! │  tokens: ColorToken, GradientToken, AnimationToken, ...       │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`AppContext`]: current view, personality, and celebration overlay
//! - [`UiAction`]: requests a surface sends to the router
//! - [`Conversation`]: the chat log with scheduled assistant replies
//! - [`CelebrationOverlay`]: Hidden/Visible modal state machine
//! - [`PersonalityVariant`]: Friend, Professional or Coach
//! - [`ShineConfig`]: resolved configuration
//!
//! # Module Overview
//!
//! - [`celebration`]: Achievement records and the overlay state machine
//! - [`config`]: TOML + environment configuration
//! - [`conversation`]: Chat log, draft input, listening flag
//! - [`dashboard`]: Greeting, stat cards, quick actions
//! - [`events`]: Actions from surfaces to the router
//! - [`messages`]: Chat turns and their identifiers
//! - [`personality`]: Assistant personalities and their styling
//! - [`progress`]: Weekly confidence, achievements, learning goals
//! - [`reply`]: Cancellable delayed replies
//! - [`router`]: The shared application context
//! - [`tokens`]: Design-token names and animation timing
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod celebration;
pub mod config;
pub mod conversation;
pub mod dashboard;
pub mod events;
pub mod messages;
pub mod personality;
pub mod progress;
pub mod reply;
pub mod router;
pub mod tokens;

// Re-exports for convenience
pub use celebration::{AchievementCategory, AchievementRecord, CelebrationOverlay, OverlayState};
pub use config::{
    default_config_path, load_config, load_config_from_path, load_config_or_default, parse_config,
    ConfigError,
    ConfigSource, ShineConfig, ThemeChoice,
};
pub use conversation::{Conversation, INPUT_PLACEHOLDER, SUGGESTIONS};
pub use dashboard::{DashboardData, QuickAction, StatCard, StatKind, Trend, HERO_MESSAGE};
pub use events::UiAction;
pub use messages::{ChatTurn, Sender, TurnId};
pub use personality::{PersonalityStyle, PersonalityVariant};
pub use progress::{DatedAchievement, LearningGoal, ProgressData, WeeklyConfidence};
pub use reply::{ReplyScheduler, ScheduledReply, CANNED_REPLY, DEFAULT_REPLY_DELAY};
pub use router::{AppContext, RouterEffect, ViewState};
pub use tokens::{
    AnimationSpec, AnimationToken, ColorToken, EasingFunction, GradientToken, ShadowToken,
};

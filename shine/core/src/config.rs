//! TOML Configuration File Support
//!
//! Optional configuration at `~/.config/shine/shine.toml`.
//!
//! # Configuration Priority
//!
//! Values are resolved with the following priority (highest first):
//! 1. Environment variables (`SHINE_*`)
//! 2. TOML configuration file
//! 3. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [profile]
//! user_name = "Sarah"
//! personality = "friend"        # friend | professional | coach
//!
//! [conversation]
//! reply_delay_ms = 1500         # 1..=60000
//!
//! [display]
//! theme = "dark"                # dark | light
//! frame_ms = 100                # 16..=1000
//! ```

use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::personality::PersonalityVariant;
use crate::reply::DEFAULT_REPLY_DELAY;

/// Accepted reply delays, in milliseconds
pub const REPLY_DELAY_RANGE_MS: RangeInclusive<u64> = 1..=60_000;

/// Accepted frame intervals, in milliseconds
pub const FRAME_MS_RANGE: RangeInclusive<u64> = 16..=1000;

/// Frame interval used when nothing overrides it
pub const DEFAULT_FRAME_MS: u64 = 100;

/// Name shown in the greeting when nothing overrides it
pub const DEFAULT_USER_NAME: &str = "Sarah";

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range or unknown
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Where the effective configuration came from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// At least one value came from the environment
    Env,
    /// Loaded from the TOML file
    File,
    /// Built-in defaults
    #[default]
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Env => write!(f, "environment"),
            ConfigSource::File => write!(f, "config file"),
            ConfigSource::Default => write!(f, "defaults"),
        }
    }
}

/// Terminal palette selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Deep navy background
    #[default]
    Dark,
    /// Near-white background
    Light,
}

impl ThemeChoice {
    /// Parse a lowercase theme name
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

// =============================================================================
// TOML Structures
// =============================================================================

/// `[profile]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileToml {
    /// Name in the dashboard greeting
    pub user_name: Option<String>,
    /// Initial personality (`friend`, `professional`, `coach`)
    pub personality: Option<String>,
}

/// `[conversation]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationToml {
    /// Delay before the canned reply arrives
    pub reply_delay_ms: Option<u64>,
}

/// `[display]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayToml {
    /// `dark` or `light`
    pub theme: Option<String>,
    /// Minimum time between redraws
    pub frame_ms: Option<u64>,
}

/// Top-level TOML configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShineToml {
    /// Who the user is
    pub profile: ProfileToml,
    /// Chat behavior
    pub conversation: ConversationToml,
    /// Rendering
    pub display: DisplayToml,
}

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Effective configuration after merging defaults, file and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShineConfig {
    /// Name in the dashboard greeting
    pub user_name: String,
    /// Personality the app starts with
    pub personality: PersonalityVariant,
    /// Delay before each canned reply
    pub reply_delay: Duration,
    /// Terminal palette
    pub theme: ThemeChoice,
    /// Minimum time between redraws
    pub frame_ms: u64,
    source: ConfigSource,
}

impl Default for ShineConfig {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            personality: PersonalityVariant::default(),
            reply_delay: DEFAULT_REPLY_DELAY,
            theme: ThemeChoice::default(),
            frame_ms: DEFAULT_FRAME_MS,
            source: ConfigSource::Default,
        }
    }
}

impl ShineConfig {
    /// Where the configuration came from
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Frame interval as a duration
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/shine/shine.toml`, or `None` when no config
/// directory can be determined.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("shine").join("shine.toml"))
}

/// Load configuration from the default path, then apply the environment
pub fn load_config() -> Result<ShineConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from `path` (if it exists), then apply the environment
///
/// A missing file is not an error: defaults are used.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<ShineConfig, ConfigError> {
    let mut config = load_file_config(path)?;
    apply_env_config(&mut config);
    Ok(config)
}

/// Like [`load_config`], but a rejected file falls back to defaults
///
/// The environment still applies on top of the fallback. The rejection is
/// handed back so the caller can report it.
pub fn load_config_or_default() -> (ShineConfig, Option<ConfigError>) {
    load_or_default_with(default_config_path(), |key| std::env::var(key).ok())
}

fn load_or_default_with<F>(
    path: Option<PathBuf>,
    lookup: F,
) -> (ShineConfig, Option<ConfigError>)
where
    F: Fn(&str) -> Option<String>,
{
    let (mut config, error) = match load_file_config(path) {
        Ok(config) => (config, None),
        Err(e) => (ShineConfig::default(), Some(e)),
    };
    apply_env_overrides(&mut config, lookup);
    (config, error)
}

fn load_file_config(path: Option<PathBuf>) -> Result<ShineConfig, ConfigError> {
    let mut config = ShineConfig::default();

    if let Some(path) = path {
        if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
                path: path.clone(),
                source: e,
            })?;
            let toml: ShineToml = toml::from_str(&contents)?;
            apply_toml_config(&mut config, &toml)?;
            config.source = ConfigSource::File;
            tracing::info!(path = %path.display(), "Loaded configuration from file");
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
        }
    }

    Ok(config)
}

/// Parse a TOML string into a configuration (no environment applied)
pub fn parse_config(contents: &str) -> Result<ShineConfig, ConfigError> {
    let toml: ShineToml = toml::from_str(contents)?;
    let mut config = ShineConfig::default();
    apply_toml_config(&mut config, &toml)?;
    config.source = ConfigSource::File;
    Ok(config)
}

fn parse_personality(value: &str) -> Result<PersonalityVariant, ConfigError> {
    PersonalityVariant::parse(value).ok_or_else(|| {
        ConfigError::Validation(format!(
            "unknown personality '{value}' (expected friend, professional or coach)"
        ))
    })
}

fn check_range(name: &str, value: u64, range: &RangeInclusive<u64>) -> Result<u64, ConfigError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::Validation(format!(
            "{name} = {value} is outside {}..={}",
            range.start(),
            range.end()
        )))
    }
}

/// Apply TOML values to the config, rejecting anything out of range
fn apply_toml_config(config: &mut ShineConfig, toml: &ShineToml) -> Result<(), ConfigError> {
    if let Some(name) = &toml.profile.user_name {
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::Validation("user_name must not be empty".into()));
        }
        config.user_name = name.to_string();
    }
    if let Some(personality) = &toml.profile.personality {
        config.personality = parse_personality(personality)?;
    }
    if let Some(ms) = toml.conversation.reply_delay_ms {
        let ms = check_range("reply_delay_ms", ms, &REPLY_DELAY_RANGE_MS)?;
        config.reply_delay = Duration::from_millis(ms);
    }
    if let Some(theme) = &toml.display.theme {
        config.theme = ThemeChoice::parse(theme).ok_or_else(|| {
            ConfigError::Validation(format!("unknown theme '{theme}' (expected dark or light)"))
        })?;
    }
    if let Some(ms) = toml.display.frame_ms {
        config.frame_ms = check_range("frame_ms", ms, &FRAME_MS_RANGE)?;
    }
    Ok(())
}

/// Apply `SHINE_*` environment overrides
fn apply_env_config(config: &mut ShineConfig) {
    apply_env_overrides(config, |key| std::env::var(key).ok());
}

/// Apply overrides from any key lookup
///
/// Unusable values are ignored with a warning; the environment never turns a
/// valid configuration into an error.
fn apply_env_overrides<F>(config: &mut ShineConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(name) = lookup("SHINE_USER_NAME") {
        let name = name.trim();
        if !name.is_empty() {
            config.user_name = name.to_string();
            config.source = ConfigSource::Env;
        }
    }
    if let Some(value) = lookup("SHINE_PERSONALITY") {
        match PersonalityVariant::parse(&value) {
            Some(personality) => {
                config.personality = personality;
                config.source = ConfigSource::Env;
            }
            None => tracing::warn!(value = %value, "Ignoring unknown SHINE_PERSONALITY"),
        }
    }
    if let Some(value) = lookup("SHINE_REPLY_DELAY_MS") {
        match value.parse::<u64>() {
            Ok(ms) if REPLY_DELAY_RANGE_MS.contains(&ms) => {
                config.reply_delay = Duration::from_millis(ms);
                config.source = ConfigSource::Env;
            }
            _ => tracing::warn!(value = %value, "Ignoring invalid SHINE_REPLY_DELAY_MS"),
        }
    }
    if let Some(value) = lookup("SHINE_THEME") {
        match ThemeChoice::parse(&value) {
            Some(theme) => {
                config.theme = theme;
                config.source = ConfigSource::Env;
            }
            None => tracing::warn!(value = %value, "Ignoring unknown SHINE_THEME"),
        }
    }
}

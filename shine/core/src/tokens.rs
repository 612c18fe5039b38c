//! Design Tokens
//!
//! Surface-agnostic names for the colors, gradients, shadows and animations
//! the views are styled with. The core only knows token *names* and animation
//! timing; each surface resolves names to its own values (the TUI maps colors
//! to terminal RGB, gradients to two-stop blends, shadows to border styles).
//!
//! ```text
//! view code ──(ColorToken::Success)──► Theme::color() ──► Color::Rgb(..)
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

// ============================================================================
// Color / Gradient / Shadow tokens
// ============================================================================

/// Named color slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorToken {
    /// Page background
    Background,
    /// Default text
    Foreground,
    /// Brand primary
    Primary,
    /// Lighter primary used for glows
    PrimaryGlow,
    /// Text drawn on primary
    PrimaryForeground,
    /// Positive/growth accent
    Success,
    /// Lighter success used for glows
    SuccessGlow,
    /// Text drawn on success
    SuccessForeground,
    /// Subdued surfaces
    Muted,
    /// Secondary text
    MutedForeground,
    /// Card surface
    Card,
    /// Text on cards
    CardForeground,
    /// Hairlines and card borders
    Border,
    /// Friend personality base
    Friend,
    /// Friend personality light
    FriendLight,
    /// Friend personality dark
    FriendDark,
    /// Professional personality base
    Professional,
    /// Professional personality light
    ProfessionalLight,
    /// Professional personality dark
    ProfessionalDark,
    /// Coach personality base
    Coach,
    /// Coach personality light
    CoachLight,
    /// Coach personality dark
    CoachDark,
    /// Celebration highlight text
    Celebration,
}

/// Named two-stop gradient
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradientToken {
    /// Primary brand gradient
    Primary,
    /// Success gradient (user bubbles, progress bars)
    Success,
    /// Warm champagne (user avatar)
    Champagne,
    /// Glass card fill
    Glass,
    /// Hero gradient (active nav button, primary actions)
    Hero,
    /// Friend avatar
    Friend,
    /// Professional avatar
    Professional,
    /// Coach avatar
    Coach,
}

impl GradientToken {
    /// Start and end color of the gradient
    #[must_use]
    pub fn stops(self) -> (ColorToken, ColorToken) {
        match self {
            Self::Primary => (ColorToken::Primary, ColorToken::PrimaryGlow),
            Self::Success => (ColorToken::Success, ColorToken::SuccessGlow),
            Self::Champagne => (ColorToken::FriendLight, ColorToken::Card),
            Self::Glass => (ColorToken::Card, ColorToken::Muted),
            Self::Hero => (ColorToken::Primary, ColorToken::Success),
            Self::Friend => (ColorToken::FriendLight, ColorToken::FriendDark),
            Self::Professional => (ColorToken::ProfessionalLight, ColorToken::ProfessionalDark),
            Self::Coach => (ColorToken::CoachLight, ColorToken::CoachDark),
        }
    }
}

/// Named elevation style
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShadowToken {
    /// Soft card elevation
    Elegant,
    /// Frosted glass outline
    Glass,
    /// Accent glow (selected items)
    Glow,
    /// Strong celebration glow
    Celebration,
}

// ============================================================================
// Animation tokens
// ============================================================================

/// Easing curve applied to animation progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EasingFunction {
    /// Constant speed
    #[default]
    Linear,
    /// Slow start, fast end
    EaseIn,
    /// Fast start, slow end
    EaseOut,
    /// Slow start and end
    EaseInOut,
    /// Overshoot then settle
    EaseOutBack,
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(2),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::EaseOutBack => {
                let c1 = 1.701_58;
                let c3 = c1 + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
            }
        }
    }
}

/// Named animation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationToken {
    /// Gentle vertical bob
    LiquidFloat,
    /// Expanding glow ring
    ConfidencePulse,
    /// Spin-and-scale entrance for celebration content
    CelebrationBurst,
    /// Slow scale/brightness breathing for avatars
    AvatarBreathe,
    /// Shimmer sweeping across progress bars
    ProgressFlow,
    /// Entrance: fade while rising
    FadeInUp,
    /// Entrance: grow into place
    ScaleIn,
}

impl AnimationToken {
    /// Timing specification for this animation
    #[must_use]
    pub fn spec(self) -> AnimationSpec {
        match self {
            Self::LiquidFloat => AnimationSpec::looping("liquid-float", 4000, EasingFunction::EaseInOut),
            Self::ConfidencePulse => {
                AnimationSpec::looping("confidence-pulse", 2000, EasingFunction::EaseInOut)
            }
            Self::CelebrationBurst => {
                AnimationSpec::oneshot("celebration-burst", 600, EasingFunction::EaseOutBack)
            }
            Self::AvatarBreathe => AnimationSpec::looping("avatar-breathe", 3000, EasingFunction::EaseInOut),
            Self::ProgressFlow => AnimationSpec::looping("progress-flow", 2000, EasingFunction::EaseInOut),
            Self::FadeInUp => AnimationSpec::oneshot("fade-in-up", 300, EasingFunction::EaseOut),
            Self::ScaleIn => AnimationSpec::oneshot("scale-in", 200, EasingFunction::EaseOut),
        }
    }
}

/// Animation timing - describes WHAT an animation is, not how to draw it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationSpec {
    /// Animation name
    pub name: &'static str,
    /// Length of one cycle
    pub duration: Duration,
    /// Whether the animation repeats
    pub looping: bool,
    /// Easing curve
    pub easing: EasingFunction,
}

impl AnimationSpec {
    /// A repeating animation
    #[must_use]
    pub fn looping(name: &'static str, duration_ms: u64, easing: EasingFunction) -> Self {
        Self {
            name,
            duration: Duration::from_millis(duration_ms),
            looping: true,
            easing,
        }
    }

    /// An animation that plays once and holds its last frame
    #[must_use]
    pub fn oneshot(name: &'static str, duration_ms: u64, easing: EasingFunction) -> Self {
        Self {
            name,
            duration: Duration::from_millis(duration_ms),
            looping: false,
            easing,
        }
    }

    /// Linear progress (0.0..=1.0) through the current cycle
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let cycle = self.duration.as_secs_f32();
        let t = elapsed.as_secs_f32() / cycle;
        if self.looping {
            t.fract()
        } else {
            t.min(1.0)
        }
    }

    /// Eased value at `elapsed`
    ///
    /// Looping animations are symmetric (0 → 1 → 0 over one cycle), matching
    /// the `0%, 100% / 50%` keyframe shape of the breathing and pulse effects.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> f32 {
        let t = self.progress(elapsed);
        if self.looping {
            let half = if t < 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
            self.easing.apply(half)
        } else {
            self.easing.apply(t)
        }
    }

    /// Whether a one-shot animation has finished
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        !self.looping && elapsed >= self.duration
    }
}

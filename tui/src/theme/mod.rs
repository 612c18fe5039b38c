//! Theme and Colors
//!
//! Resolves the core's design-token names to terminal colors. Two palettes
//! ship: a deep navy dark theme (default) and a near-white light theme.
//!
//! Gradients cannot be painted in a terminal cell, so they are sampled:
//! [`Theme::gradient_at`] blends the two stops for a position along the
//! gradient, and widgets call it per cell or per row.

use ratatui::style::{Color, Modifier, Style};

use shine_core::{ColorToken, GradientToken, ShadowToken, ThemeChoice};

/// Concrete colors for every [`ColorToken`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub primary_glow: Color,
    pub primary_foreground: Color,
    pub success: Color,
    pub success_glow: Color,
    pub success_foreground: Color,
    pub muted: Color,
    pub muted_foreground: Color,
    pub card: Color,
    pub card_foreground: Color,
    pub border: Color,
    pub friend: Color,
    pub friend_light: Color,
    pub friend_dark: Color,
    pub professional: Color,
    pub professional_light: Color,
    pub professional_dark: Color,
    pub coach: Color,
    pub coach_light: Color,
    pub coach_dark: Color,
    pub celebration: Color,
}

// ============================================================================
// Dark palette
// ============================================================================

pub const DARK: Palette = Palette {
    background: Color::Rgb(14, 17, 33),
    foreground: Color::Rgb(236, 238, 245),
    primary: Color::Rgb(99, 102, 241),
    primary_glow: Color::Rgb(139, 142, 255),
    primary_foreground: Color::Rgb(255, 255, 255),
    success: Color::Rgb(16, 185, 129),
    success_glow: Color::Rgb(52, 211, 153),
    success_foreground: Color::Rgb(6, 30, 22),
    muted: Color::Rgb(38, 42, 66),
    muted_foreground: Color::Rgb(148, 153, 184),
    card: Color::Rgb(24, 28, 50),
    card_foreground: Color::Rgb(226, 229, 240),
    border: Color::Rgb(55, 60, 90),
    friend: Color::Rgb(244, 114, 182),
    friend_light: Color::Rgb(251, 182, 206),
    friend_dark: Color::Rgb(190, 24, 93),
    professional: Color::Rgb(59, 130, 246),
    professional_light: Color::Rgb(147, 197, 253),
    professional_dark: Color::Rgb(30, 64, 175),
    coach: Color::Rgb(249, 115, 22),
    coach_light: Color::Rgb(253, 186, 116),
    coach_dark: Color::Rgb(194, 65, 12),
    celebration: Color::Rgb(250, 204, 21),
};

// ============================================================================
// Light palette
// ============================================================================

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(248, 249, 252),
    foreground: Color::Rgb(17, 24, 39),
    primary: Color::Rgb(79, 70, 229),
    primary_glow: Color::Rgb(129, 140, 248),
    primary_foreground: Color::Rgb(255, 255, 255),
    success: Color::Rgb(5, 150, 105),
    success_glow: Color::Rgb(16, 185, 129),
    success_foreground: Color::Rgb(255, 255, 255),
    muted: Color::Rgb(229, 231, 240),
    muted_foreground: Color::Rgb(100, 106, 130),
    card: Color::Rgb(255, 255, 255),
    card_foreground: Color::Rgb(30, 35, 55),
    border: Color::Rgb(210, 214, 228),
    friend: Color::Rgb(219, 39, 119),
    friend_light: Color::Rgb(244, 114, 182),
    friend_dark: Color::Rgb(157, 23, 77),
    professional: Color::Rgb(37, 99, 235),
    professional_light: Color::Rgb(96, 165, 250),
    professional_dark: Color::Rgb(30, 58, 138),
    coach: Color::Rgb(234, 88, 12),
    coach_light: Color::Rgb(251, 146, 60),
    coach_dark: Color::Rgb(154, 52, 18),
    celebration: Color::Rgb(202, 138, 4),
};

/// Token resolver for one palette
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    choice: ThemeChoice,
    palette: &'static Palette,
}

impl Theme {
    /// Theme for a configured choice
    pub fn new(choice: ThemeChoice) -> Self {
        let palette = match choice {
            ThemeChoice::Dark => &DARK,
            ThemeChoice::Light => &LIGHT,
        };
        Self { choice, palette }
    }

    /// Which palette is active
    pub fn choice(&self) -> ThemeChoice {
        self.choice
    }

    /// Resolve a color token
    pub fn color(&self, token: ColorToken) -> Color {
        let p = self.palette;
        match token {
            ColorToken::Background => p.background,
            ColorToken::Foreground => p.foreground,
            ColorToken::Primary => p.primary,
            ColorToken::PrimaryGlow => p.primary_glow,
            ColorToken::PrimaryForeground => p.primary_foreground,
            ColorToken::Success => p.success,
            ColorToken::SuccessGlow => p.success_glow,
            ColorToken::SuccessForeground => p.success_foreground,
            ColorToken::Muted => p.muted,
            ColorToken::MutedForeground => p.muted_foreground,
            ColorToken::Card => p.card,
            ColorToken::CardForeground => p.card_foreground,
            ColorToken::Border => p.border,
            ColorToken::Friend => p.friend,
            ColorToken::FriendLight => p.friend_light,
            ColorToken::FriendDark => p.friend_dark,
            ColorToken::Professional => p.professional,
            ColorToken::ProfessionalLight => p.professional_light,
            ColorToken::ProfessionalDark => p.professional_dark,
            ColorToken::Coach => p.coach,
            ColorToken::CoachLight => p.coach_light,
            ColorToken::CoachDark => p.coach_dark,
            ColorToken::Celebration => p.celebration,
        }
    }

    /// Both stops of a gradient
    pub fn gradient(&self, token: GradientToken) -> (Color, Color) {
        let (start, end) = token.stops();
        (self.color(start), self.color(end))
    }

    /// Color at position `t` (0.0 = start, 1.0 = end) along a gradient
    pub fn gradient_at(&self, token: GradientToken, t: f32) -> Color {
        let (start, end) = self.gradient(token);
        blend(start, end, t)
    }

    /// Outline color standing in for an elevation shadow
    pub fn shadow(&self, token: ShadowToken) -> Color {
        match token {
            ShadowToken::Elegant => self.palette.border,
            ShadowToken::Glass => blend(self.palette.border, self.palette.foreground, 0.15),
            ShadowToken::Glow => self.palette.success_glow,
            ShadowToken::Celebration => self.palette.celebration,
        }
    }

    /// Plain text on the background
    pub fn text(&self) -> Style {
        Style::default().fg(self.palette.foreground)
    }

    /// Secondary text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.palette.muted_foreground)
    }

    /// Section headings ("text-hero")
    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.palette.primary_glow)
            .add_modifier(Modifier::BOLD)
    }

    /// Card surface
    pub fn card(&self) -> Style {
        Style::default()
            .bg(self.palette.card)
            .fg(self.palette.card_foreground)
    }

    /// Foreground-only style for a token
    pub fn fg(&self, token: ColorToken) -> Style {
        Style::default().fg(self.color(token))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeChoice::default())
    }
}

/// Linear blend between two colors
///
/// Only RGB colors blend; anything else snaps to the nearer endpoint.
pub fn blend(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (a, b) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |x: u8, y: u8| -> u8 {
                let v = f32::from(x) + (f32::from(y) - f32::from(x)) * t;
                v.round().clamp(0.0, 255.0) as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => a,
        _ => b,
    }
}

/// Scale an RGB color's brightness (1.0 = unchanged)
pub fn brighten(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let scale = |c: u8| (f32::from(c) * factor).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}

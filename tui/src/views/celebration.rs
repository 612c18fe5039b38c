//! Celebration Overlay View
//!
//! Draws the achievement card over a backdrop of twinkling sparkles. The
//! sparkle field is random and regenerated every time the overlay opens;
//! the card bursts in on the overlay's own animation clock.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Widget;

use shine_core::{
    AchievementRecord, AnimationSpec, AnimationToken, CelebrationOverlay, ColorToken,
    EasingFunction, ShadowToken, UiAction,
};

use super::{HitMap, Target};
use crate::avatar::AnimationEngine;
use crate::icons::Icon;
use crate::theme::{blend, Theme};
use crate::widgets::{Button, Card, TextBlock};

/// Sparkles in the backdrop
pub const SPARKLE_COUNT: usize = 20;

const CARD_WIDTH: u16 = 60;
const CARD_HEIGHT: u16 = 19;

const HEADLINE: &str = "Incredible Achievement!";
const SHARE_LABEL: &str = "Share Your Success";
const CONTINUE_LABEL: &str = "Continue Learning Journey";
const FOOTER: &str = "You're building incredible momentum!";

/// One backdrop sparkle, positioned as a fraction of the screen
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sparkle {
    pub x: f32,
    pub y: f32,
    pub delay: Duration,
    pub duration: Duration,
}

impl Sparkle {
    fn random(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0.0..1.0),
            y: rng.gen_range(0.0..1.0),
            delay: Duration::from_millis(rng.gen_range(0..2000)),
            duration: Duration::from_millis(rng.gen_range(2000..5000)),
        }
    }

    /// Twinkle brightness at `clock`, or `None` before the sparkle starts
    fn brightness(&self, clock: &AnimationEngine) -> Option<f32> {
        let millis = self.duration.as_millis() as u64;
        let spec = AnimationSpec::looping("sparkle", millis, EasingFunction::EaseInOut);
        clock.sample_delayed(&spec, self.delay)
    }
}

/// The overlay's drawable state
#[derive(Debug, Default)]
pub struct CelebrationView {
    sparkles: Vec<Sparkle>,
    /// Opening count the sparkles were generated for
    generation: u32,
    hits: HitMap,
}

impl CelebrationView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }

    /// New sparkle field when the overlay has been opened again
    ///
    /// Returns whether the field was regenerated.
    pub fn sync(&mut self, overlay: &CelebrationOverlay) -> bool {
        if overlay.openings() == self.generation {
            return false;
        }
        self.generation = overlay.openings();
        let mut rng = rand::thread_rng();
        self.sparkles = (0..SPARKLE_COUNT).map(|_| Sparkle::random(&mut rng)).collect();
        true
    }

    pub fn target_at(&self, x: u16, y: u16) -> Option<Target> {
        self.hits.target_at(x, y)
    }

    /// Keys: Enter continues, `s` shares, `x` closes
    pub fn handle_key(&self, key: KeyEvent) -> Option<Target> {
        let action = match key.code {
            KeyCode::Enter => UiAction::ContinueJourney,
            KeyCode::Char('s') => UiAction::ShareAchievement,
            KeyCode::Esc | KeyCode::Char('x') => UiAction::HideCelebration,
            _ => return None,
        };
        Some(Target::Action(action))
    }

    /// Draw into the overlay layer; clears it while the overlay is hidden
    pub fn render(
        &mut self,
        buf: &mut Buffer,
        overlay: &CelebrationOverlay,
        theme: &Theme,
        clock: &AnimationEngine,
    ) {
        self.hits.clear();
        buf.reset();
        let Some(achievement) = overlay.payload() else {
            return;
        };
        let area = buf.area;

        buf.set_style(area, Style::default().bg(theme.color(ColorToken::Background)));
        self.render_sparkles(buf, theme, clock);

        let burst = clock.sample(AnimationToken::CelebrationBurst).clamp(0.3, 1.1);
        let width = ((f32::from(CARD_WIDTH) * burst) as u16).min(area.width);
        let height = ((f32::from(CARD_HEIGHT) * burst) as u16).min(area.height);
        let card = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );
        Card::new(*theme)
            .gradient(achievement.category.gradient())
            .shadow(ShadowToken::Celebration)
            .thick()
            .render(card, buf);

        self.render_card_content(buf, Card::inner(card), achievement, theme, clock);
    }

    fn render_sparkles(&self, buf: &mut Buffer, theme: &Theme, clock: &AnimationEngine) {
        let area = buf.area;
        let dim = theme.color(ColorToken::Muted);
        let bright = theme.color(ColorToken::Success);
        for sparkle in &self.sparkles {
            let Some(level) = sparkle.brightness(clock) else {
                continue;
            };
            let x = area.x + (sparkle.x * f32::from(area.width.saturating_sub(1))) as u16;
            let y = area.y + (sparkle.y * f32::from(area.height.saturating_sub(1))) as u16;
            let glyph = if level < 0.33 {
                "·"
            } else if level < 0.66 {
                Icon::Award.glyph()
            } else {
                Icon::Sparkles.glyph()
            };
            buf.set_string(x, y, glyph, Style::default().fg(blend(dim, bright, level)));
        }
    }

    fn render_card_content(
        &mut self,
        buf: &mut Buffer,
        inner: Rect,
        achievement: &AchievementRecord,
        theme: &Theme,
        clock: &AnimationEngine,
    ) {
        // Wait for the burst to settle before drawing text
        if inner.height + 2 < CARD_HEIGHT || inner.width < 20 {
            return;
        }
        let light = theme.fg(ColorToken::PrimaryForeground);
        let centered = |y: u16| Rect::new(inner.x, inner.y + y, inner.width, 1);

        let close = Rect::new(inner.right().saturating_sub(3), inner.y, 3, 1);
        Line::from(Icon::Close.glyph())
            .style(light.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .render(close, buf);
        self.hits.push(close, Target::Action(UiAction::HideCelebration));

        let float = clock.sample(AnimationToken::LiquidFloat);
        let glyph_row = if float > 0.5 { 1 } else { 2 };
        Line::from(achievement.category.glyph().to_string())
            .style(theme.fg(achievement.category.accent()).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .render(centered(glyph_row), buf);

        let pulse = clock.sample(AnimationToken::ConfidencePulse);
        let trophy = blend(
            theme.color(ColorToken::PrimaryForeground),
            theme.color(ColorToken::Celebration),
            pulse,
        );
        Line::from(Icon::Trophy.glyph())
            .style(Style::default().fg(trophy).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .render(centered(4), buf);

        Line::from(HEADLINE)
            .style(light.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .render(centered(6), buf);
        Line::from(achievement.title.as_str())
            .style(light)
            .alignment(Alignment::Center)
            .render(centered(7), buf);
        TextBlock::new(&achievement.description)
            .style(light)
            .alignment(Alignment::Center)
            .render(
                Rect::new(inner.x + 2, inner.y + 8, inner.width.saturating_sub(4), 3),
                buf,
            );

        let wide = |y: u16| Rect::new(inner.x + 3, inner.y + y, inner.width.saturating_sub(6), 1);

        let share_label = format!("{} {SHARE_LABEL}", Icon::Share.glyph());
        let share = wide(12);
        Button::new(&share_label, light.bg(theme.shadow(ShadowToken::Glass))).render(share, buf);
        self.hits.push(share, Target::Action(UiAction::ShareAchievement));

        let proceed = wide(14);
        Button::new(
            CONTINUE_LABEL,
            Style::default()
                .fg(theme.color(ColorToken::Primary))
                .bg(theme.color(ColorToken::PrimaryForeground)),
        )
        .render(proceed, buf);
        self.hits.push(proceed, Target::Action(UiAction::ContinueJourney));

        Line::from(format!("{FOOTER} {}", Icon::Sparkles.glyph()))
            .style(light.add_modifier(Modifier::DIM))
            .alignment(Alignment::Center)
            .render(centered(16), buf);
    }
}

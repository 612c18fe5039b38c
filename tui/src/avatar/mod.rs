//! Avatar System
//!
//! The assistant's face is a round badge painted in its personality's
//! gradient: an outer ring sampled from the gradient top to bottom, a softer
//! inner glow, and a bright core. The badge is stateless; callers pass a
//! breathing phase (the `avatar-breathe` token) when it should pulse.
//!
//! - [`Avatar`]: the badge widget
//! - [`AvatarSize`]: Small, Medium, Large, Hero
//! - [`PersonalityPicker`]: the three-card personality selector
//! - [`AnimationEngine`]: elapsed-time clock for token animations

mod animation;
mod picker;
mod sizes;
mod sprites;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use shine_core::PersonalityVariant;

pub use animation::AnimationEngine;
pub use picker::{PersonalityPicker, CARD_HEIGHT as PICKER_CARD_HEIGHT};
pub use sizes::AvatarSize;
pub use sprites::{build_frame, ColoredCell, Frame};

use crate::theme::{blend, brighten, Theme};

const WHITE: Color = Color::Rgb(255, 255, 255);

/// A personality badge
#[derive(Clone, Copy, Debug)]
pub struct Avatar {
    personality: PersonalityVariant,
    size: AvatarSize,
    theme: Theme,
    /// 0.0 = at rest, 1.0 = fully inhaled
    breath: f32,
}

impl Avatar {
    /// Create a badge at rest
    pub fn new(personality: PersonalityVariant, size: AvatarSize, theme: Theme) -> Self {
        Self {
            personality,
            size,
            theme,
            breath: 0.0,
        }
    }

    /// Set the breathing phase (0.0..=1.0)
    pub fn breathing(mut self, phase: f32) -> Self {
        self.breath = phase.clamp(0.0, 1.0);
        self
    }

    /// Size (width, height) the badge occupies
    pub fn bounds(&self) -> (u16, u16) {
        self.size.max_bounds()
    }

    /// Where the badge lands when rendered into `area` (its click target)
    pub fn hit_area(&self, area: Rect) -> Rect {
        let (w, h) = self.bounds();
        let w = w.min(area.width);
        let h = h.min(area.height);
        Rect::new(
            area.x + (area.width - w) / 2,
            area.y + (area.height - h) / 2,
            w,
            h,
        )
    }

    /// Palette keyed by the pattern letters in [`AvatarSize::pattern`]
    fn palette(&self) -> Vec<(char, char, Color)> {
        let gradient = self.personality.style().gradient;
        let top = self.theme.gradient_at(gradient, 0.0);
        let mid = self.theme.gradient_at(gradient, 0.5);
        let bottom = self.theme.gradient_at(gradient, 1.0);

        // Breathing lifts the inner glow toward white
        let glow = blend(mid, WHITE, 0.15 + 0.15 * self.breath);
        let core = brighten(blend(mid, WHITE, 0.35), 1.0 + 0.1 * self.breath);

        vec![
            ('a', '▄', top),
            ('A', '█', top),
            ('B', '█', mid),
            ('C', '█', bottom),
            ('c', '▀', bottom),
            ('g', '█', glow),
            ('o', '█', core),
        ]
    }

    /// Build the badge sprite
    pub fn frame(&self) -> Frame {
        build_frame(self.size.pattern(), &self.palette())
    }
}

impl Widget for Avatar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.frame().draw_centered(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shine_core::ThemeChoice;

    fn theme() -> Theme {
        Theme::new(ThemeChoice::Dark)
    }

    #[test]
    fn test_render_is_deterministic() {
        let avatar = Avatar::new(PersonalityVariant::Coach, AvatarSize::Medium, theme());
        let mut a = Buffer::empty(Rect::new(0, 0, 12, 6));
        let mut b = Buffer::empty(Rect::new(0, 0, 12, 6));
        avatar.render(a.area, &mut a);
        avatar.render(b.area, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_personalities_paint_different_rings() {
        let ring = |p| {
            Avatar::new(p, AvatarSize::Small, theme())
                .frame()
                .get(0, 1)
                .fg
        };
        assert_ne!(
            ring(PersonalityVariant::Friend),
            ring(PersonalityVariant::Professional)
        );
        assert_ne!(
            ring(PersonalityVariant::Professional),
            ring(PersonalityVariant::Coach)
        );
    }

    #[test]
    fn test_breathing_brightens_glow() {
        let rest = Avatar::new(PersonalityVariant::Friend, AvatarSize::Medium, theme());
        let inhaled = rest.breathing(1.0);
        // (1, 1) is inner glow in the medium pattern
        assert_ne!(rest.frame().get(2, 1).fg, inhaled.frame().get(2, 1).fg);
        assert_eq!(rest.frame().get(0, 2).fg, inhaled.frame().get(0, 2).fg);
    }

    #[test]
    fn test_hit_area_is_centered_badge() {
        let avatar = Avatar::new(PersonalityVariant::Friend, AvatarSize::Small, theme());
        assert_eq!(avatar.hit_area(Rect::new(10, 10, 10, 5)), Rect::new(12, 11, 6, 3));
    }

    #[test]
    fn test_fits_inside_max_bounds() {
        for size in [
            AvatarSize::Small,
            AvatarSize::Medium,
            AvatarSize::Large,
            AvatarSize::Hero,
        ] {
            let frame = Avatar::new(PersonalityVariant::Friend, size, theme()).frame();
            assert_eq!((frame.width, frame.height), size.max_bounds());
        }
    }
}

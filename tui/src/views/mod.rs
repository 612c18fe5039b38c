//! Views
//!
//! One module per screen plus the navigation bar and the celebration
//! overlay. Views draw into a layer-local buffer and record where their
//! clickable regions landed in a [`HitMap`]; the app turns a mouse click
//! into a [`Target`] through that map.

pub mod celebration;
pub mod conversation;
pub mod dashboard;
pub mod nav;
pub mod progress;

use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::style::Style;

use shine_core::{AnimationToken, PersonalityVariant, UiAction};

use crate::avatar::AnimationEngine;
use crate::theme::{blend, Theme};

/// Something a click or key can activate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Forward to the router
    Action(UiAction),
    /// Copy a suggestion into the draft
    Suggestion(usize),
    /// Voice button
    ToggleMic,
    /// Send button
    Send,
    /// A personality picker card
    Personality(PersonalityVariant),
}

/// Clickable regions of one layer, in layer-local coordinates
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Target)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: Target) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    /// Topmost target at a position (regions pushed later win)
    pub fn target_at(&self, x: u16, y: u16) -> Option<Target> {
        self.regions
            .iter()
            .rev()
            .find(|(r, _)| x >= r.x && x < r.right() && y >= r.y && y < r.bottom())
            .map(|(_, t)| *t)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Per-frame rendering inputs
#[derive(Clone, Copy)]
pub struct RenderCtx<'a> {
    pub theme: Theme,
    /// Runs forever; drives looping tokens
    pub ambient: &'a AnimationEngine,
    /// Restarted on every navigation; drives entrances
    pub entrance: &'a AnimationEngine,
}

impl RenderCtx<'_> {
    /// Sample a token on the clock it belongs to
    pub fn sample(&self, token: AnimationToken) -> f32 {
        if token.spec().looping {
            self.ambient.sample(token)
        } else {
            self.entrance.sample(token)
        }
    }

    /// Fade-in-up progress for the `index`th item of a staggered list
    pub fn stagger(&self, index: usize, step: Duration) -> f32 {
        let delay = step * index as u32;
        self.entrance
            .sample_delayed(&AnimationToken::FadeInUp.spec(), delay)
            .unwrap_or(0.0)
    }

    /// `style` with its foreground faded in from the background
    pub fn fade(&self, style: Style, t: f32) -> Style {
        let bg = self.theme.color(shine_core::ColorToken::Background);
        match style.fg {
            Some(fg) => style.fg(blend(bg, fg, t)),
            None => style,
        }
    }
}

//! Personality Picker
//!
//! Three cards, one per personality. The picker remembers which variant is
//! selected and where the keyboard cursor is; choosing a card reports the
//! variant to the caller, who forwards it to the router.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use shine_core::{ColorToken, PersonalityVariant, ShadowToken};

use super::{Avatar, AvatarSize};
use crate::theme::Theme;
use crate::widgets::TextBlock;

/// Height of one picker card
pub const CARD_HEIGHT: u16 = 15;

/// Selection state for the three personality cards
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PersonalityPicker {
    selected: PersonalityVariant,
    cursor: PersonalityVariant,
}

impl PersonalityPicker {
    /// Picker with `selected` chosen and the cursor on it
    pub fn new(selected: PersonalityVariant) -> Self {
        Self {
            selected,
            cursor: selected,
        }
    }

    /// Currently chosen variant
    pub fn selected(&self) -> PersonalityVariant {
        self.selected
    }

    /// Variant under the keyboard cursor
    pub fn cursor(&self) -> PersonalityVariant {
        self.cursor
    }

    /// Follow a selection made elsewhere without reporting it
    pub fn sync(&mut self, selected: PersonalityVariant) {
        if self.selected != selected {
            self.selected = selected;
            self.cursor = selected;
        }
    }

    /// Select `variant` and report it through `on_change`
    pub fn choose<F>(&mut self, variant: PersonalityVariant, on_change: F)
    where
        F: FnOnce(PersonalityVariant),
    {
        self.selected = variant;
        self.cursor = variant;
        on_change(variant);
    }

    /// Handle ←/→ (move cursor) and Enter/Space (choose)
    ///
    /// Returns whether the key was consumed.
    pub fn handle_key<F>(&mut self, key: KeyEvent, on_change: F) -> bool
    where
        F: FnOnce(PersonalityVariant),
    {
        match key.code {
            KeyCode::Left => {
                self.cursor = self.cursor.previous();
                true
            }
            KeyCode::Right => {
                self.cursor = self.cursor.next();
                true
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.choose(self.cursor, on_change);
                true
            }
            _ => false,
        }
    }

    /// Card rectangles, in variant order
    pub fn card_areas(area: Rect) -> [Rect; 3] {
        let [a, b, c] = Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .spacing(1)
            .areas(area);
        [a, b, c]
    }

    /// Draw the three cards; returns their rectangles for hit testing
    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        breath: f32,
    ) -> [(Rect, PersonalityVariant); 3] {
        let areas = Self::card_areas(area);
        let mut hits = [(Rect::default(), PersonalityVariant::Friend); 3];

        for (i, (card, variant)) in areas.into_iter().zip(PersonalityVariant::ALL).enumerate() {
            self.render_card(card, buf, theme, variant, breath);
            hits[i] = (card, variant);
        }
        hits
    }

    fn render_card(
        &self,
        card: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        variant: PersonalityVariant,
        breath: f32,
    ) {
        let selected = variant == self.selected;
        let border = if selected {
            theme.shadow(ShadowToken::Glow)
        } else {
            theme.shadow(ShadowToken::Glass)
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(Style::default().fg(border))
            .style(theme.card());
        if variant == self.cursor {
            block = block.title_bottom(
                ratatui::text::Line::from("▴").alignment(Alignment::Center),
            );
        }
        let inner = block.inner(card);
        block.render(card, buf);

        let [avatar_area, label_area, desc_area] = Layout::vertical([
            Constraint::Length(AvatarSize::Large.max_bounds().1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .spacing(1)
        .areas(inner);

        let phase = if selected { breath } else { 0.0 };
        Avatar::new(variant, AvatarSize::Large, *theme)
            .breathing(phase)
            .render(avatar_area, buf);

        let label_style = theme
            .fg(ColorToken::CardForeground)
            .add_modifier(Modifier::BOLD);
        TextBlock::new(variant.label())
            .style(label_style)
            .alignment(Alignment::Center)
            .render(label_area, buf);
        TextBlock::new(variant.description())
            .style(theme.fg(ColorToken::MutedForeground))
            .alignment(Alignment::Center)
            .render(desc_area, buf);
    }
}

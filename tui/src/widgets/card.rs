//! Cards and Buttons
//!
//! The two surfaces every screen is built from. A card is a rounded block on
//! the card color or on a gradient; a button is a padded one-line label.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Widget};
use unicode_width::UnicodeWidthStr;

use shine_core::{GradientToken, ShadowToken};

use crate::theme::Theme;

/// A bordered surface
pub struct Card {
    theme: Theme,
    border: Color,
    border_type: BorderType,
    gradient: Option<GradientToken>,
}

impl Card {
    /// Glass card on the card color
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            border: theme.shadow(ShadowToken::Glass),
            border_type: BorderType::Rounded,
            gradient: None,
        }
    }

    /// Outline color from an elevation token
    pub fn shadow(mut self, token: ShadowToken) -> Self {
        self.border = self.theme.shadow(token);
        self
    }

    /// Heavy outline
    pub fn thick(mut self) -> Self {
        self.border_type = BorderType::Thick;
        self
    }

    /// Fill with a left-to-right gradient instead of the card color
    pub fn gradient(mut self, token: GradientToken) -> Self {
        self.gradient = Some(token);
        self
    }

    /// Area left inside the border
    pub fn inner(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }
}

impl Widget for Card {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        Clear.render(area, buf);
        match self.gradient {
            Some(token) => fill_gradient(area, buf, &self.theme, token),
            None => buf.set_style(area, self.theme.card()),
        }

        Block::default()
            .borders(Borders::ALL)
            .border_type(self.border_type)
            .border_style(Style::default().fg(self.border))
            .render(area, buf);
    }
}

/// Paint a horizontal gradient background across `area`
pub fn fill_gradient(area: Rect, buf: &mut Buffer, theme: &Theme, token: GradientToken) {
    let span = area.width.saturating_sub(1).max(1);
    for col in 0..area.width {
        let bg = theme.gradient_at(token, f32::from(col) / f32::from(span));
        for row in 0..area.height {
            buf[(area.x + col, area.y + row)].set_bg(bg);
        }
    }
}

/// A one-line clickable label
pub struct Button<'a> {
    label: &'a str,
    style: Style,
    gradient: Option<(GradientToken, Theme)>,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, style: Style) -> Self {
        Self {
            label,
            style,
            gradient: None,
        }
    }

    /// Hero-style button on a gradient
    pub fn gradient(mut self, token: GradientToken, theme: Theme) -> Self {
        self.gradient = Some((token, theme));
        self
    }

    /// Cells the button needs including padding
    pub fn width(&self) -> u16 {
        self.label.width() as u16 + 4
    }

    /// Rect of the button centered in `area` on row `y`
    pub fn centered(&self, area: Rect, y: u16) -> Rect {
        let w = self.width().min(area.width);
        Rect::new(area.x + (area.width - w) / 2, y, w, 1)
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        buf.set_style(area, self.style);
        if let Some((token, theme)) = self.gradient {
            fill_gradient(area, buf, &theme, token);
        }
        let line = Line::from(self.label)
            .style(self.style.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        line.render(area, buf);
    }
}

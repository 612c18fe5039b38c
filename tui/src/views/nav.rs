//! Navigation Bar
//!
//! A floating pill at the bottom of the screen with one button per view.
//! Cells outside the pill stay transparent so the view shows through.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use shine_core::{ColorToken, GradientToken, ShadowToken, UiAction, ViewState};

use super::{HitMap, Target};
use crate::icons::Icon;
use crate::theme::Theme;
use crate::widgets::{Button, Card};

/// Rows the bar occupies
pub const NAV_HEIGHT: u16 = 3;

const HINT: &str = "F1-F3 switch · Tab next · Esc quit";

#[derive(Debug, Default)]
pub struct NavBar {
    hits: HitMap,
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Button label for a view
    fn label(view: ViewState) -> String {
        format!("{} {}", Icon::for_view(view).glyph(), view.label())
    }

    /// Width of the pill including its border
    pub fn pill_width() -> u16 {
        let buttons: u16 = ViewState::ALL
            .iter()
            .map(|v| Self::label(*v).width() as u16 + 4)
            .sum();
        buttons + ViewState::ALL.len() as u16 + 1
    }

    pub fn target_at(&self, x: u16, y: u16) -> Option<Target> {
        self.hits.target_at(x, y)
    }

    pub fn render(&mut self, buf: &mut Buffer, active: ViewState, theme: &Theme) {
        self.hits.clear();
        let area = buf.area;
        buf.reset();

        let width = Self::pill_width().min(area.width);
        let pill = Rect::new(
            area.x + (area.width - width) / 2,
            area.y,
            width,
            NAV_HEIGHT.min(area.height),
        );
        Card::new(*theme).shadow(ShadowToken::Glass).render(pill, buf);

        let mut x = pill.x + 1;
        let y = pill.y + 1;
        for view in ViewState::ALL {
            let label = Self::label(view);
            let button = if view == active {
                Button::new(&label, theme.fg(ColorToken::PrimaryForeground))
                    .gradient(GradientToken::Hero, *theme)
            } else {
                Button::new(&label, theme.muted().bg(theme.color(ColorToken::Card)))
            };
            let rect = Rect::new(x, y, button.width(), 1).intersection(pill);
            button.render(rect, buf);
            self.hits.push(rect, Target::Action(UiAction::Navigate(view)));
            x += rect.width + 1;
        }

        let hint_width = HINT.width() as u16;
        if pill.right() + hint_width + 2 <= area.right() {
            Line::from(HINT)
                .style(Style::default().fg(theme.color(ColorToken::MutedForeground)))
                .render(
                    Rect::new(area.right() - hint_width - 1, pill.y + 1, hint_width, 1),
                    buf,
                );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn draw(nav: &mut NavBar, active: ViewState, width: u16) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, NAV_HEIGHT));
        nav.render(&mut buf, active, &Theme::default());
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_shows_all_views() {
        let mut nav = NavBar::new();
        let buf = draw(&mut nav, ViewState::Dashboard, 80);
        let middle = row(&buf, 1);
        assert!(middle.contains("⌂ Home"));
        assert!(middle.contains("◎ Talk"));
        assert!(middle.contains("▆ Growth"));
    }

    #[test]
    fn test_buttons_navigate() {
        let mut nav = NavBar::new();
        let buf = draw(&mut nav, ViewState::Dashboard, 80);
        let middle = row(&buf, 1);
        let col = middle.chars().position(|c| c == 'T').map(|c| c as u16);
        let Some(col) = col else {
            panic!("Talk label missing");
        };
        assert_eq!(
            nav.target_at(col, 1),
            Some(Target::Action(UiAction::Navigate(ViewState::Conversation)))
        );
        assert_eq!(nav.target_at(0, 1), None);
    }

    #[test]
    fn test_outside_pill_is_transparent() {
        let mut nav = NavBar::new();
        let buf = draw(&mut nav, ViewState::Progress, 120);
        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(0, 0)].bg, Color::Reset);
    }

    #[test]
    fn test_active_button_is_highlighted() {
        let mut nav = NavBar::new();
        let home = draw(&mut nav, ViewState::Dashboard, 80);
        let talk = draw(&mut nav, ViewState::Conversation, 80);
        let x = (80 - NavBar::pill_width()) / 2 + 2;
        assert_ne!(home[(x, 1)].bg, talk[(x, 1)].bg);
    }
}

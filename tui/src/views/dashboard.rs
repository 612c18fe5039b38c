//! Dashboard View
//!
//! The home screen: greeting, the hero avatar with its opening line, three
//! stat cards, three quick actions and the personality picker. Taller than
//! most terminals, so it renders into an off-screen buffer and scrolls.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use shine_core::{
    AnimationToken, AppContext, ColorToken, DashboardData, GradientToken, QuickAction,
    ShadowToken, StatCard, Trend, UiAction, HERO_MESSAGE,
};

use super::{HitMap, RenderCtx, Target};
use crate::avatar::{Avatar, AvatarSize, PersonalityPicker, PICKER_CARD_HEIGHT};
use crate::icons::Icon;
use crate::widgets::{Card, TextBlock, Viewport};

const MARGIN: u16 = 2;
const HEADER_HEIGHT: u16 = 4;
const HERO_HEIGHT: u16 = 11;
const STAT_HEIGHT: u16 = 6;
const ACTION_HEIGHT: u16 = 6;
const PICKER_SECTION_HEIGHT: u16 = PICKER_CARD_HEIGHT + 7;
const GAP: u16 = 1;

const PICKER_TITLE: &str = "Choose Your AI Companion";
const PICKER_SUBTITLE: &str =
    "Each personality offers a unique learning experience tailored to your goals";
const TREND_BADGE: &str = "+12%";

/// Where each section lands for a given width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub hero: Rect,
    pub stats: Rect,
    pub actions: Rect,
    pub picker: Rect,
    /// Total content height
    pub height: u16,
}

impl DashboardLayout {
    pub fn new(width: u16) -> Self {
        let x = MARGIN.min(width / 2);
        let w = width.saturating_sub(2 * x);
        let mut y = 1;
        let mut next = |height: u16| {
            let rect = Rect::new(x, y, w, height);
            y += height + GAP;
            rect
        };

        let header = next(HEADER_HEIGHT - GAP);
        let hero = next(HERO_HEIGHT);
        let stats = next(STAT_HEIGHT);
        let actions = next(ACTION_HEIGHT);
        let picker = next(PICKER_SECTION_HEIGHT);

        Self {
            header,
            hero,
            stats,
            actions,
            picker,
            height: picker.bottom() + GAP,
        }
    }
}

/// Home screen
#[derive(Debug, Default)]
pub struct DashboardView {
    viewport: Viewport,
    hits: HitMap,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll the page (positive = down)
    pub fn scroll(&mut self, delta: i32) {
        self.viewport.scroll(delta);
    }

    pub fn reset_scroll(&mut self) {
        self.viewport.reset();
    }

    pub fn scroll_offset(&self) -> u16 {
        self.viewport.offset
    }

    /// Clickable target at a layer-local position
    pub fn target_at(&self, area: Rect, x: u16, y: u16) -> Option<Target> {
        let (cx, cy) = self.viewport.to_content(area, x, y)?;
        self.hits.target_at(cx, cy)
    }

    /// Keys: 1/2/3 quick actions, ←/→ Enter picker, ↑/↓ PgUp/PgDn scroll
    pub fn handle_key(&mut self, key: KeyEvent, picker: &mut PersonalityPicker) -> Option<Target> {
        match key.code {
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                Some(Target::Action(UiAction::QuickAction(QuickAction::ALL[index])))
            }
            KeyCode::Up => {
                self.scroll(-1);
                None
            }
            KeyCode::Down => {
                self.scroll(1);
                None
            }
            KeyCode::PageUp => {
                self.scroll(-10);
                None
            }
            KeyCode::PageDown => {
                self.scroll(10);
                None
            }
            _ => {
                let mut chosen = None;
                picker.handle_key(key, |v| chosen = Some(v));
                chosen.map(|v| Target::Action(UiAction::SelectPersonality(v)))
            }
        }
    }

    /// Draw into a layer buffer
    pub fn render(
        &mut self,
        target: &mut Buffer,
        data: &DashboardData,
        ctx: &AppContext,
        picker: &PersonalityPicker,
        rctx: &RenderCtx<'_>,
    ) {
        let window = target.area;
        let layout = DashboardLayout::new(window.width);
        let mut content = Buffer::empty(Rect::new(0, 0, window.width, layout.height));
        content.set_style(content.area, Style::default().bg(rctx.theme.color(ColorToken::Background)));

        self.hits.clear();
        self.render_header(&mut content, layout.header, data, rctx);
        self.render_hero(&mut content, layout.hero, ctx, rctx);
        self.render_stats(&mut content, layout.stats, data, rctx);
        self.render_actions(&mut content, layout.actions, rctx);
        self.render_picker(&mut content, layout.picker, picker, rctx);

        self.viewport.blit(&content, target, window);
    }

    fn render_header(&self, buf: &mut Buffer, area: Rect, data: &DashboardData, rctx: &RenderCtx<'_>) {
        let theme = rctx.theme;
        let fade = rctx.sample(AnimationToken::FadeInUp);
        let heading = Line::from(vec![
            Span::styled(
                format!("{} ", Icon::Sparkles.glyph()),
                rctx.fade(theme.fg(ColorToken::Celebration), fade),
            ),
            Span::styled(data.greeting(), rctx.fade(theme.heading(), fade)),
        ]);
        heading.render(Rect::new(area.x, area.y, area.width, 1), buf);
        TextBlock::new(data.tagline())
            .style(rctx.fade(theme.muted(), fade))
            .render(Rect::new(area.x, area.y + 1, area.width, 1), buf);
    }

    fn render_hero(&mut self, buf: &mut Buffer, area: Rect, ctx: &AppContext, rctx: &RenderCtx<'_>) {
        let theme = rctx.theme;
        Card::new(theme).shadow(ShadowToken::Elegant).render(area, buf);
        let inner = Card::inner(area);

        let (avatar_w, _) = AvatarSize::Hero.max_bounds();
        let [avatar_area, message_area] =
            Layout::horizontal([Constraint::Length(avatar_w + 2), Constraint::Min(1)])
                .spacing(2)
                .areas(inner);

        let avatar = Avatar::new(ctx.personality(), AvatarSize::Hero, theme)
            .breathing(rctx.sample(AnimationToken::AvatarBreathe));
        self.hits
            .push(avatar.hit_area(avatar_area), Target::Action(UiAction::AvatarClicked));
        avatar.render(avatar_area, buf);

        let [mode_area, quote_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(message_area);
        Line::from(vec![
            Span::styled("AI Companion", theme.heading()),
            Span::styled(
                format!("  {} mode", ctx.personality().label()),
                theme.fg(ctx.personality().style().accent),
            ),
        ])
        .render(mode_area, buf);

        let quote = format!("\u{201c}{HERO_MESSAGE}\u{201d}");
        TextBlock::new(&quote)
            .style(
                theme
                    .fg(ColorToken::Celebration)
                    .add_modifier(Modifier::ITALIC),
            )
            .render(quote_area, buf);
    }

    fn render_stats(&self, buf: &mut Buffer, area: Rect, data: &DashboardData, rctx: &RenderCtx<'_>) {
        let cards: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .spacing(1)
            .areas(area);
        for (index, (rect, stat)) in cards.into_iter().zip(&data.stats).enumerate() {
            let fade = rctx.stagger(index, Duration::from_millis(100));
            render_stat(buf, rect, stat, rctx, fade);
        }
    }

    fn render_actions(&mut self, buf: &mut Buffer, area: Rect, rctx: &RenderCtx<'_>) {
        let theme = rctx.theme;
        let cards: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .spacing(1)
            .areas(area);

        for (index, (rect, action)) in cards.into_iter().zip(QuickAction::ALL).enumerate() {
            let card = Card::new(theme);
            let (card, title_style, body_style) = if action.is_primary() {
                let fg = theme.fg(ColorToken::PrimaryForeground);
                (
                    card.gradient(GradientToken::Hero).shadow(ShadowToken::Glow),
                    fg.add_modifier(Modifier::BOLD),
                    fg,
                )
            } else {
                (
                    card,
                    theme
                        .fg(ColorToken::CardForeground)
                        .add_modifier(Modifier::BOLD),
                    theme.fg(ColorToken::MutedForeground),
                )
            };
            card.render(rect, buf);

            let inner = Card::inner(rect);
            let title = format!(
                "{} {}  [{}]",
                Icon::for_quick_action(action).glyph(),
                action.label(),
                index + 1
            );
            Line::from(title)
                .style(title_style)
                .render(Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1), buf);
            TextBlock::new(action.description()).style(body_style).render(
                Rect::new(
                    inner.x + 1,
                    inner.y + 1,
                    inner.width.saturating_sub(2),
                    inner.height.saturating_sub(1),
                ),
                buf,
            );

            self.hits
                .push(rect, Target::Action(UiAction::QuickAction(action)));
        }
    }

    fn render_picker(
        &mut self,
        buf: &mut Buffer,
        area: Rect,
        picker: &PersonalityPicker,
        rctx: &RenderCtx<'_>,
    ) {
        let theme = rctx.theme;
        Card::new(theme).render(area, buf);
        let inner = Card::inner(area);

        TextBlock::new(PICKER_TITLE)
            .style(theme.heading())
            .alignment(Alignment::Center)
            .render(Rect::new(inner.x, inner.y, inner.width, 1), buf);
        TextBlock::new(PICKER_SUBTITLE)
            .style(theme.muted())
            .alignment(Alignment::Center)
            .render(Rect::new(inner.x, inner.y + 1, inner.width, 2), buf);

        let cards = Rect::new(
            inner.x + 1,
            inner.y + 4,
            inner.width.saturating_sub(2),
            PICKER_CARD_HEIGHT,
        );
        let breath = rctx.sample(AnimationToken::AvatarBreathe);
        for (rect, variant) in picker.render(cards, buf, &theme, breath) {
            self.hits.push(rect, Target::Personality(variant));
        }
    }
}

fn render_stat(buf: &mut Buffer, area: Rect, stat: &StatCard, rctx: &RenderCtx<'_>, fade: f32) {
    let theme = rctx.theme;
    Card::new(theme).render(area, buf);
    let inner = Card::inner(area);
    let body = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);
    if body.is_empty() {
        return;
    }

    Line::from(vec![
        Span::styled(
            format!("{} ", Icon::for_stat(stat.kind).glyph()),
            rctx.fade(theme.fg(ColorToken::Success), fade),
        ),
        Span::styled(
            stat.value,
            rctx.fade(
                theme
                    .fg(ColorToken::CardForeground)
                    .add_modifier(Modifier::BOLD),
                fade,
            ),
        ),
    ])
    .render(Rect::new(body.x, body.y, body.width, 1), buf);

    if stat.trend == Trend::Up {
        let badge = format!("{} {TREND_BADGE}", Icon::TrendingUp.glyph());
        Line::from(badge)
            .style(theme.fg(ColorToken::Success))
            .alignment(Alignment::Right)
            .render(Rect::new(body.x, body.y, body.width, 1), buf);
    }

    TextBlock::new(stat.label)
        .style(rctx.fade(theme.muted(), fade))
        .render(
            Rect::new(body.x, body.y + 1, body.width, body.height.saturating_sub(1)),
            buf,
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::AnimationEngine;
    use crate::theme::Theme;
    use crossterm::event::KeyModifiers;
    use shine_core::PersonalityVariant;

    fn text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(view: &mut DashboardView, width: u16, height: u16) -> Buffer {
        let ambient = AnimationEngine::new();
        let entrance = AnimationEngine::new();
        let rctx = RenderCtx {
            theme: Theme::default(),
            ambient: &ambient,
            entrance: &entrance,
        };
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        view.render(
            &mut buf,
            &DashboardData::sample("Sarah"),
            &AppContext::default(),
            &PersonalityPicker::default(),
            &rctx,
        );
        buf
    }

    #[test]
    fn test_layout_stacks_sections() {
        let layout = DashboardLayout::new(100);
        assert!(layout.hero.y > layout.header.bottom());
        assert!(layout.stats.y > layout.hero.bottom());
        assert!(layout.actions.y > layout.stats.bottom());
        assert!(layout.picker.y > layout.actions.bottom());
        assert_eq!(layout.height, layout.picker.bottom() + GAP);
        assert_eq!(layout.hero.width, 96);
    }

    #[test]
    fn test_renders_greeting_and_stats() {
        let mut view = DashboardView::new();
        let buf = draw(&mut view, 100, 40);
        let screen = text(&buf);
        assert!(screen.contains("Welcome, Sarah"));
        assert!(screen.contains("47"));
        assert!(screen.contains(TREND_BADGE));
        assert!(screen.contains("Begin Transformation"));
    }

    #[test]
    fn test_quick_action_is_clickable() {
        let mut view = DashboardView::new();
        let _ = draw(&mut view, 100, 40);
        let layout = DashboardLayout::new(100);
        let target = view.target_at(
            Rect::new(0, 0, 100, 40),
            layout.actions.x + 2,
            layout.actions.y + 2,
        );
        assert_eq!(
            target,
            Some(Target::Action(UiAction::QuickAction(QuickAction::Transform)))
        );
    }

    #[test]
    fn test_scrolled_picker_cards_are_clickable() {
        let mut view = DashboardView::new();
        view.scroll(100);
        let _ = draw(&mut view, 100, 40);
        let layout = DashboardLayout::new(100);
        assert_eq!(view.scroll_offset(), layout.height - 40);

        // Last card row, a few columns into the first picker card
        let y = layout.height - 40;
        let card_row = layout.picker.y + 6 - y;
        let target = view.target_at(Rect::new(0, 0, 100, 40), layout.picker.x + 4, card_row);
        assert_eq!(target, Some(Target::Personality(PersonalityVariant::Friend)));
    }

    #[test]
    fn test_number_keys_trigger_quick_actions() {
        let mut view = DashboardView::new();
        let mut picker = PersonalityPicker::default();
        let key = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(
            view.handle_key(key, &mut picker),
            Some(Target::Action(UiAction::QuickAction(QuickAction::Spark)))
        );
    }

    #[test]
    fn test_picker_keys_select_personality() {
        let mut view = DashboardView::new();
        let mut picker = PersonalityPicker::default();
        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(view.handle_key(right, &mut picker), None);
        assert_eq!(
            view.handle_key(enter, &mut picker),
            Some(Target::Action(UiAction::SelectPersonality(
                PersonalityVariant::Professional
            )))
        );
    }
}

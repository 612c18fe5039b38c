//! Progress View
//!
//! "Your Growth Story": the weekly confidence list, the achievement list and
//! the learning goals. Read-only apart from the celebrate button, which asks
//! the router to open the celebration overlay.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use shine_core::{
    AnimationToken, ColorToken, DatedAchievement, GradientToken, LearningGoal, ProgressData,
    UiAction, WeeklyConfidence,
};

use super::{HitMap, RenderCtx, Target};
use crate::icons::Icon;
use crate::theme::blend;
use crate::widgets::{Button, Card, GradientBar, TextBlock, Viewport};

const MARGIN: u16 = 2;
const HEADER_HEIGHT: u16 = 3;
const DAY_ROWS: u16 = 3;
const ACHIEVEMENT_ROWS: u16 = 5;
const GOAL_ROWS: u16 = 4;
const GAP: u16 = 1;

const TITLE: &str = "Your Growth Story";
const SUBTITLE: &str = "Every step forward is a victory worth celebrating";
const EXPLORE_LABEL: &str = "Explore Your Growth Story";
const SCHEDULE_LABEL: &str = "Schedule Next Learning Session";
const CELEBRATE_LABEL: &str = "★ Celebrate Recent Achievement";

/// Section rectangles for a given width and data set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressLayout {
    pub header: Rect,
    pub week: Rect,
    pub achievements: Rect,
    pub goals: Rect,
    pub celebrate_row: u16,
    pub height: u16,
}

impl ProgressLayout {
    pub fn new(width: u16, data: &ProgressData) -> Self {
        let x = MARGIN.min(width / 2);
        let w = width.saturating_sub(2 * x);

        let header = Rect::new(x, 1, w, HEADER_HEIGHT - GAP);

        // Title, blank, days, blank, button
        let week_inner = 2 + DAY_ROWS * data.week.len() as u16 + 2;
        let week = Rect::new(x, header.bottom() + GAP, w, week_inner + 2);

        let achievements_inner = 2 + ACHIEVEMENT_ROWS * data.achievements.len() as u16;
        let goals_inner = 2 + GOAL_ROWS * data.goals.len() as u16 + 1;
        let column_height = achievements_inner.max(goals_inner) + 2;
        let [left, right] = Layout::horizontal([Constraint::Ratio(1, 2); 2])
            .spacing(1)
            .areas(Rect::new(x, week.bottom() + GAP, w, column_height));

        let celebrate_row = left.bottom() + GAP;
        Self {
            header,
            week,
            achievements: left,
            goals: right,
            celebrate_row,
            height: celebrate_row + 2,
        }
    }
}

/// Growth story screen
#[derive(Debug, Default)]
pub struct ProgressView {
    viewport: Viewport,
    hits: HitMap,
}

impl ProgressView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&mut self, delta: i32) {
        self.viewport.scroll(delta);
    }

    pub fn reset_scroll(&mut self) {
        self.viewport.reset();
    }

    /// Clickable target at a layer-local position
    pub fn target_at(&self, area: Rect, x: u16, y: u16) -> Option<Target> {
        let (cx, cy) = self.viewport.to_content(area, x, y)?;
        self.hits.target_at(cx, cy)
    }

    /// Keys: Enter or `c` celebrates, ↑/↓ PgUp/PgDn scroll
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Target> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('c') => Some(Target::Action(UiAction::ShowCelebration)),
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
            _ => None,
        }
    }

    pub fn render(&mut self, target: &mut Buffer, data: &ProgressData, rctx: &RenderCtx<'_>) {
        let window = target.area;
        let layout = ProgressLayout::new(window.width, data);
        let mut content = Buffer::empty(Rect::new(0, 0, window.width, layout.height));
        content.set_style(
            content.area,
            Style::default().bg(rctx.theme.color(ColorToken::Background)),
        );

        self.hits.clear();
        render_header(&mut content, layout.header, rctx);
        render_week(&mut content, layout.week, &data.week, rctx);
        render_achievements(&mut content, layout.achievements, &data.achievements, rctx);
        render_goals(&mut content, layout.goals, &data.goals, rctx);

        let button = Button::new(CELEBRATE_LABEL, rctx.theme.fg(ColorToken::PrimaryForeground))
            .gradient(GradientToken::Hero, rctx.theme);
        let rect = button.centered(
            Rect::new(0, 0, window.width, layout.height),
            layout.celebrate_row,
        );
        button.render(rect, &mut content);
        self.hits.push(rect, Target::Action(UiAction::ShowCelebration));

        self.viewport.blit(&content, target, window);
    }
}

fn render_header(buf: &mut Buffer, area: Rect, rctx: &RenderCtx<'_>) {
    let fade = rctx.sample(AnimationToken::FadeInUp);
    let title = format!("{} {TITLE}", Icon::BarChart.glyph());
    TextBlock::new(&title)
        .style(rctx.fade(rctx.theme.heading(), fade))
        .alignment(Alignment::Center)
        .render(Rect::new(area.x, area.y, area.width, 1), buf);
    TextBlock::new(SUBTITLE)
        .style(rctx.fade(rctx.theme.muted(), fade))
        .alignment(Alignment::Center)
        .render(Rect::new(area.x, area.y + 1, area.width, 1), buf);
}

/// Card title with a leading icon; the icon pulses when `pulse` is set
fn section_title(buf: &mut Buffer, area: Rect, icon: Icon, title: &str, pulse: f32, rctx: &RenderCtx<'_>) {
    let theme = rctx.theme;
    let icon_color = blend(
        theme.color(ColorToken::Success),
        theme.color(ColorToken::SuccessGlow),
        pulse,
    );
    Line::from(vec![
        Span::styled(format!("{} ", icon.glyph()), Style::default().fg(icon_color)),
        Span::styled(title.to_string(), theme.heading()),
    ])
    .render(Rect::new(area.x, area.y, area.width, 1), buf);
}

fn render_week(buf: &mut Buffer, area: Rect, week: &[WeeklyConfidence], rctx: &RenderCtx<'_>) {
    let theme = rctx.theme;
    Card::new(theme).render(area, buf);
    let inner = Card::inner(area);
    let body = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);

    section_title(
        buf,
        body,
        Icon::TrendingUp,
        "This Week's Transformation",
        rctx.sample(AnimationToken::ConfidencePulse),
        rctx,
    );

    let shimmer = rctx.sample(AnimationToken::ProgressFlow);
    let label_width = week.iter().map(|d| d.day.len()).max().unwrap_or(0) as u16 + 3;
    for (index, day) in week.iter().enumerate() {
        let y = body.y + 2 + DAY_ROWS * index as u16;
        let fade = rctx.stagger(index, Duration::from_millis(100));
        let row = Rect::new(body.x, y, body.width, 1);

        Line::from(vec![
            Span::styled(
                format!("{} {:<width$}", Icon::Sparkles.glyph(), day.day, width = usize::from(label_width - 2)),
                rctx.fade(theme.muted(), fade),
            ),
            Span::styled(day.highlight, rctx.fade(theme.fg(ColorToken::CardForeground), fade)),
        ])
        .render(row, buf);
        Line::from(format!("{}%", day.confidence))
            .style(theme.fg(ColorToken::Success).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Right)
            .render(row, buf);

        GradientBar::new(day.confidence, day.tint, theme)
            .shimmer(shimmer)
            .render(Rect::new(body.x, y + 1, body.width, 1), buf);
    }

    // Decorative, like the original card's footer button
    let button = Button::new(EXPLORE_LABEL, theme.fg(ColorToken::PrimaryForeground))
        .gradient(GradientToken::Hero, theme);
    let rect = button.centered(body, inner.bottom().saturating_sub(1));
    button.render(rect, buf);
}

fn render_achievements(
    buf: &mut Buffer,
    area: Rect,
    achievements: &[DatedAchievement],
    rctx: &RenderCtx<'_>,
) {
    let theme = rctx.theme;
    Card::new(theme).render(area, buf);
    let inner = Card::inner(area);
    let body = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);

    section_title(buf, body, Icon::Award, "Achievement Constellation", 0.0, rctx);

    for (index, achievement) in achievements.iter().enumerate() {
        let y = body.y + 2 + ACHIEVEMENT_ROWS * index as u16;
        let fade = rctx.stagger(index, Duration::from_millis(150));
        let record = &achievement.record;
        let accent = theme.color(record.category.accent());
        let row = Rect::new(body.x, y, body.width, 1);

        Line::from(vec![
            Span::styled(
                format!("{} ", record.category.glyph()),
                rctx.fade(Style::default().fg(accent), fade),
            ),
            Span::styled(
                record.title.as_str(),
                rctx.fade(
                    theme
                        .fg(ColorToken::CardForeground)
                        .add_modifier(Modifier::BOLD),
                    fade,
                ),
            ),
        ])
        .render(row, buf);
        Line::from(achievement.date_label())
            .style(theme.muted())
            .alignment(Alignment::Right)
            .render(row, buf);

        TextBlock::new(&record.description)
            .style(rctx.fade(theme.muted(), fade))
            .render(Rect::new(body.x + 2, y + 1, body.width.saturating_sub(2), 2), buf);

        let badge = format!(" {} ", record.category.label());
        Line::from(badge)
            .style(
                Style::default()
                    .fg(theme.color(ColorToken::Background))
                    .bg(accent),
            )
            .render(Rect::new(body.x + 2, y + 3, body.width.saturating_sub(2), 1), buf);
    }
}

fn render_goals(buf: &mut Buffer, area: Rect, goals: &[LearningGoal], rctx: &RenderCtx<'_>) {
    let theme = rctx.theme;
    Card::new(theme).render(area, buf);
    let inner = Card::inner(area);
    let body = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);

    section_title(
        buf,
        body,
        Icon::Target,
        "Learning Goals",
        rctx.sample(AnimationToken::AvatarBreathe),
        rctx,
    );

    let shimmer = rctx.sample(AnimationToken::ProgressFlow);
    for (index, goal) in goals.iter().enumerate() {
        let y = body.y + 2 + GOAL_ROWS * index as u16;
        let row = Rect::new(body.x, y, body.width, 1);

        Line::from(goal.title)
            .style(theme.fg(ColorToken::CardForeground))
            .render(row, buf);
        Line::from(format!("{}%", goal.percent))
            .style(theme.fg(ColorToken::Success))
            .alignment(Alignment::Right)
            .render(row, buf);
        GradientBar::new(goal.percent, GradientToken::Success, theme)
            .shimmer(shimmer)
            .render(Rect::new(body.x, y + 1, body.width, 1), buf);
        TextBlock::new(goal.note)
            .style(theme.muted())
            .render(Rect::new(body.x, y + 2, body.width, 1), buf);
    }

    let button = Button::new(SCHEDULE_LABEL, theme.card());
    let rect = button.centered(body, inner.bottom().saturating_sub(1));
    button.render(rect, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::AnimationEngine;
    use crate::theme::Theme;
    use crossterm::event::KeyModifiers;

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

    fn draw(view: &mut ProgressView, width: u16, height: u16) -> Buffer {
        let ambient = AnimationEngine::new();
        let entrance = AnimationEngine::new();
        let rctx = RenderCtx {
            theme: Theme::default(),
            ambient: &ambient,
            entrance: &entrance,
        };
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        view.render(&mut buf, &ProgressData::sample(), &rctx);
        buf
    }

    #[test]
    fn test_layout_fits_all_sections() {
        let data = ProgressData::sample();
        let layout = ProgressLayout::new(100, &data);
        assert_eq!(layout.week.height, 2 + 2 + 15 + 2);
        assert_eq!(layout.achievements.y, layout.goals.y);
        assert!(layout.celebrate_row > layout.achievements.bottom());
        assert!(layout.height > layout.celebrate_row);
    }

    #[test]
    fn test_renders_week_and_goals() {
        let mut view = ProgressView::new();
        let buf = draw(&mut view, 100, 70);
        let screen = text(&buf);
        assert!(screen.contains(TITLE));
        assert!(screen.contains("Monday"));
        assert!(screen.contains("Confidence breakthrough!"));
        assert!(screen.contains("Vocabulary Virtuoso"));
        assert!(screen.contains("Job Interview Mastery"));
        assert!(screen.contains("85%"));
        assert!(screen.contains("Celebrate Recent Achievement"));
    }

    #[test]
    fn test_celebrate_button_is_clickable() {
        let mut view = ProgressView::new();
        let _ = draw(&mut view, 100, 70);
        let layout = ProgressLayout::new(100, &ProgressData::sample());
        let target = view.target_at(Rect::new(0, 0, 100, 70), 50, layout.celebrate_row);
        assert_eq!(target, Some(Target::Action(UiAction::ShowCelebration)));
        assert_eq!(view.target_at(Rect::new(0, 0, 100, 70), 50, 0), None);
    }

    #[test]
    fn test_keys_celebrate() {
        let mut view = ProgressView::new();
        for code in [KeyCode::Enter, KeyCode::Char('c')] {
            assert_eq!(
                view.handle_key(KeyEvent::new(code, KeyModifiers::NONE)),
                Some(Target::Action(UiAction::ShowCelebration))
            );
        }
        assert_eq!(
            view.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            None
        );
    }
}

//! Conversation View
//!
//! Header with the breathing avatar, the message list anchored to the
//! bottom, suggestion chips, and the input row (voice toggle, draft, send).
//!
//! Messages are laid out into an off-screen buffer as tall as the whole
//! conversation and the bottom of it is copied into the layer, offset by
//! however far the user has scrolled back.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{StatefulWidget, Widget};
use unicode_width::UnicodeWidthStr;

use shine_core::{
    AnimationToken, ChatTurn, ColorToken, Conversation, GradientToken, ShadowToken, UiAction,
    INPUT_PLACEHOLDER, SUGGESTIONS,
};

use super::{HitMap, RenderCtx, Target};
use crate::avatar::{Avatar, AvatarSize};
use crate::icons::Icon;
use crate::theme::blend;
use crate::widgets::{Button, Card, TextBlock, TextBlockState, Viewport};

const HEADER_HEIGHT: u16 = 7;
const INPUT_HEIGHT: u16 = 5;
const SUGGESTION_HEIGHT: u16 = 1;
const BUTTON_WIDTH: u16 = 5;
/// Column reserved for the avatar or initial badge beside a bubble
const GUTTER: u16 = 7;

/// Regions of the conversation screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversationLayout {
    pub header: Rect,
    pub messages: Rect,
    pub suggestions: Rect,
    pub input: Rect,
}

impl ConversationLayout {
    pub fn new(area: Rect) -> Self {
        let [header, messages, suggestions, input] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(SUGGESTION_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
        ])
        .spacing(1)
        .areas(area.inner(Margin::new(2, 0)));
        Self {
            header,
            messages,
            suggestions,
            input,
        }
    }
}

/// Chat screen
#[derive(Debug, Default)]
pub struct ConversationView {
    /// Rows scrolled back from the newest message
    scroll_back: u16,
    hits: HitMap,
    input: TextBlockState,
}

impl ConversationView {
    pub fn new() -> Self {
        Self {
            input: TextBlockState::tail(),
            ..Self::default()
        }
    }

    /// Scroll the message list (positive = toward older messages)
    pub fn scroll_back(&mut self, rows: i32) {
        let next = i32::from(self.scroll_back) + rows;
        self.scroll_back = next.clamp(0, i32::from(u16::MAX)) as u16;
    }

    /// Jump to the newest message
    pub fn follow(&mut self) {
        self.scroll_back = 0;
    }

    pub fn target_at(&self, x: u16, y: u16) -> Option<Target> {
        self.hits.target_at(x, y)
    }

    /// Typing edits the draft directly; everything else becomes a target
    ///
    /// Enter sends, Ctrl-T toggles the microphone, Alt-1..3 picks a
    /// suggestion, ↑/↓ PgUp/PgDn scroll.
    pub fn handle_key(&mut self, key: KeyEvent, conversation: &mut Conversation) -> Option<Target> {
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => Some(Target::Send),
            KeyCode::Char('t') if ctrl => Some(Target::ToggleMic),
            KeyCode::Char(c @ '1'..='3') if alt => Some(Target::Suggestion(c as usize - '1' as usize)),
            KeyCode::Char(c) if !ctrl && !alt => {
                conversation.push_char(c);
                None
            }
            KeyCode::Backspace => {
                conversation.pop_char();
                None
            }
            KeyCode::Up => {
                self.scroll_back(1);
                None
            }
            KeyCode::Down => {
                self.scroll_back(-1);
                None
            }
            KeyCode::PageUp => {
                self.scroll_back(10);
                None
            }
            KeyCode::PageDown => {
                self.scroll_back(-10);
                None
            }
            _ => None,
        }
    }

    pub fn render(
        &mut self,
        buf: &mut Buffer,
        conversation: &Conversation,
        user_name: &str,
        rctx: &RenderCtx<'_>,
    ) {
        let area = buf.area;
        buf.set_style(area, Style::default().bg(rctx.theme.color(ColorToken::Background)));
        let layout = ConversationLayout::new(area);

        self.hits.clear();
        self.render_header(buf, layout.header, conversation, rctx);
        self.render_messages(buf, layout.messages, conversation.turns(), user_name, rctx);
        self.render_suggestions(buf, layout.suggestions, rctx);
        self.render_input(buf, layout.input, conversation, rctx);
    }

    fn render_header(
        &mut self,
        buf: &mut Buffer,
        area: Rect,
        conversation: &Conversation,
        rctx: &RenderCtx<'_>,
    ) {
        let theme = rctx.theme;
        Card::new(theme).shadow(ShadowToken::Elegant).render(area, buf);
        let inner = Card::inner(area);

        let (avatar_w, _) = AvatarSize::Medium.max_bounds();
        let [avatar_area, title_area, volume_area] = Layout::horizontal([
            Constraint::Length(avatar_w + 2),
            Constraint::Min(1),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .spacing(1)
        .areas(inner);

        let personality = conversation.personality();
        let avatar = Avatar::new(personality, AvatarSize::Medium, theme)
            .breathing(rctx.sample(AnimationToken::AvatarBreathe));
        self.hits
            .push(avatar.hit_area(avatar_area), Target::Action(UiAction::AvatarClicked));
        avatar.render(avatar_area, buf);

        let mid = title_area.y + title_area.height / 2;
        Line::from("AI Companion")
            .style(theme.heading())
            .render(Rect::new(title_area.x, mid.saturating_sub(1), title_area.width, 1), buf);
        Line::from(format!("{} mode", personality.label()))
            .style(theme.muted())
            .render(Rect::new(title_area.x, mid, title_area.width, 1), buf);

        Button::new(Icon::Volume.glyph(), theme.card())
            .render(Rect::new(volume_area.x, mid, volume_area.width, 1), buf);
    }

    fn render_messages(
        &mut self,
        buf: &mut Buffer,
        area: Rect,
        turns: &[ChatTurn],
        user_name: &str,
        rctx: &RenderCtx<'_>,
    ) {
        if area.is_empty() {
            return;
        }
        let initial = user_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();

        let heights: Vec<u16> = turns.iter().map(|t| turn_height(t, area.width)).collect();
        let total: u16 = heights.iter().sum();
        let mut content = Buffer::empty(Rect::new(0, 0, area.width, total.max(area.height)));

        // Short conversations sit at the bottom, like a chat log
        let mut y = content.area.height - total;
        for (turn, height) in turns.iter().zip(&heights) {
            let rect = Rect::new(0, y, area.width, *height);
            if turn.is_user() {
                render_user_turn(&mut content, rect, turn, &initial, rctx);
            } else {
                render_assistant_turn(&mut content, rect, turn, rctx);
            }
            y += height;
        }

        let max_back = Viewport::max_offset(content.area.height, area.height);
        self.scroll_back = self.scroll_back.min(max_back);
        let mut viewport = Viewport {
            offset: max_back - self.scroll_back,
        };
        viewport.blit(&content, buf, area);
    }

    fn render_suggestions(&mut self, buf: &mut Buffer, area: Rect, rctx: &RenderCtx<'_>) {
        let theme = rctx.theme;
        let style = Style::default()
            .fg(theme.color(ColorToken::CardForeground))
            .bg(theme.color(ColorToken::Card));

        let mut x = area.x;
        for (index, text) in SUGGESTIONS.iter().enumerate() {
            let label = format!("{} {text}", Icon::for_suggestion(index).glyph());
            let chip = Button::new(&label, style);
            let width = chip.width();
            if x + width > area.right() {
                break;
            }
            let rect = Rect::new(x, area.y, width, 1);
            chip.render(rect, buf);
            self.hits.push(rect, Target::Suggestion(index));
            x += width + 1;
        }
    }

    fn render_input(
        &mut self,
        buf: &mut Buffer,
        area: Rect,
        conversation: &Conversation,
        rctx: &RenderCtx<'_>,
    ) {
        let theme = rctx.theme;
        Card::new(theme).render(area, buf);
        let inner = Card::inner(area);
        let [mic_area, text_area, send_area] = Layout::horizontal([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(1),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .spacing(1)
        .areas(inner);

        let mic_row = Rect::new(mic_area.x, mic_area.y + mic_area.height / 2, mic_area.width, 1);
        let mic = if conversation.is_listening() {
            let pulse = rctx.sample(AnimationToken::ConfidencePulse);
            let bg = blend(
                theme.color(ColorToken::Success),
                theme.color(ColorToken::SuccessGlow),
                pulse,
            );
            Button::new(
                Icon::Mic.glyph(),
                Style::default()
                    .fg(theme.color(ColorToken::SuccessForeground))
                    .bg(bg),
            )
        } else {
            Button::new(Icon::MicOff.glyph(), theme.card())
        };
        mic.render(mic_row, buf);
        self.hits.push(mic_area, Target::ToggleMic);

        let (text, style) = if conversation.draft().is_empty() {
            (INPUT_PLACEHOLDER, theme.muted().add_modifier(Modifier::ITALIC))
        } else {
            (conversation.draft(), theme.fg(ColorToken::CardForeground))
        };
        self.input.follow_tail = true;
        StatefulWidget::render(
            TextBlock::new(text).style(style),
            text_area,
            buf,
            &mut self.input,
        );

        let send_row = Rect::new(send_area.x, send_area.y + send_area.height / 2, send_area.width, 1);
        let send = Button::new(Icon::Send.glyph(), theme.fg(ColorToken::PrimaryForeground));
        if conversation.can_send() {
            send.gradient(GradientToken::Hero, theme).render(send_row, buf);
        } else {
            send.render(send_row, buf);
        }
        self.hits.push(send_area, Target::Send);
    }
}

fn bubble_width(area_width: u16) -> u16 {
    (area_width.saturating_sub(GUTTER) * 3 / 4).max(12)
}

/// Wrapped text width and line count for a turn's bubble
fn bubble_text(turn: &ChatTurn, area_width: u16) -> (u16, Vec<String>) {
    let max_text = bubble_width(area_width).saturating_sub(4).max(1);
    let lines = TextBlock::wrapped_lines(turn.content(), max_text);
    let widest = lines.iter().map(|l| l.width() as u16).max().unwrap_or(0);
    (widest, lines)
}

/// Rows a turn occupies: bubble, timestamp, gap
fn turn_height(turn: &ChatTurn, area_width: u16) -> u16 {
    let (_, lines) = bubble_text(turn, area_width);
    let bubble = lines.len() as u16 + 2;
    bubble.max(AvatarSize::Small.max_bounds().1) + 2
}

fn render_assistant_turn(
    buf: &mut Buffer,
    area: Rect,
    turn: &ChatTurn,
    rctx: &RenderCtx<'_>,
) {
    let theme = rctx.theme;
    // Drawn in the personality captured when the reply was scheduled
    let personality = turn.personality().unwrap_or_default();
    let (avatar_w, avatar_h) = AvatarSize::Small.max_bounds();
    Avatar::new(personality, AvatarSize::Small, theme)
        .render(Rect::new(area.x, area.y, avatar_w, avatar_h), buf);

    let (widest, lines) = bubble_text(turn, area.width);
    let bubble = Rect::new(
        area.x + GUTTER,
        area.y,
        (widest + 4).min(area.width.saturating_sub(GUTTER)),
        lines.len() as u16 + 2,
    );
    Card::new(theme).render(bubble, buf);
    let text_area = Rect::new(
        bubble.x + 2,
        bubble.y + 1,
        bubble.width.saturating_sub(4),
        lines.len() as u16,
    );
    Widget::render(
        TextBlock::new(turn.content()).style(theme.fg(ColorToken::CardForeground)),
        text_area,
        buf,
    );

    Line::from(vec![
        Span::styled(turn.time_label(), theme.muted()),
        Span::styled(format!("  {}", Icon::Volume.glyph()), theme.muted()),
    ])
    .render(Rect::new(bubble.x + 1, bubble.bottom(), bubble.width, 1), buf);
}

fn render_user_turn(
    buf: &mut Buffer,
    area: Rect,
    turn: &ChatTurn,
    initial: &str,
    rctx: &RenderCtx<'_>,
) {
    let theme = rctx.theme;
    let fg = theme.fg(ColorToken::SuccessForeground);

    let badge = Rect::new(area.right().saturating_sub(3), area.y, 3, 1);
    Line::from(initial)
        .style(
            Style::default()
                .fg(theme.color(ColorToken::PrimaryForeground))
                .bg(theme.color(ColorToken::Primary))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .render(badge, buf);

    let (widest, lines) = bubble_text(turn, area.width);
    let width = (widest + 4).min(area.width.saturating_sub(GUTTER));
    let bubble = Rect::new(
        area.right().saturating_sub(GUTTER + width),
        area.y,
        width,
        lines.len() as u16 + 2,
    );
    Card::new(theme)
        .gradient(GradientToken::Success)
        .shadow(ShadowToken::Glow)
        .render(bubble, buf);
    let text_area = Rect::new(
        bubble.x + 2,
        bubble.y + 1,
        bubble.width.saturating_sub(4),
        lines.len() as u16,
    );
    Widget::render(TextBlock::new(turn.content()).style(fg), text_area, buf);

    Line::from(turn.time_label())
        .style(theme.muted())
        .alignment(Alignment::Right)
        .render(Rect::new(bubble.x, bubble.bottom(), bubble.width.saturating_sub(1), 1), buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::AnimationEngine;
    use crate::theme::Theme;
    use shine_core::{PersonalityVariant, DEFAULT_REPLY_DELAY};

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

    fn draw(view: &mut ConversationView, conversation: &Conversation) -> Buffer {
        let ambient = AnimationEngine::new();
        let entrance = AnimationEngine::new();
        let rctx = RenderCtx {
            theme: Theme::default(),
            ambient: &ambient,
            entrance: &entrance,
        };
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 40));
        view.render(&mut buf, conversation, "Sarah", &rctx);
        buf
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_renders_header_and_placeholder() {
        let conversation = Conversation::new(PersonalityVariant::Coach, DEFAULT_REPLY_DELAY);
        let mut view = ConversationView::new();
        let screen = text(&draw(&mut view, &conversation));
        assert!(screen.contains("AI Companion"));
        assert!(screen.contains("Coach mode"));
        assert!(screen.contains(INPUT_PLACEHOLDER));
    }

    #[test]
    fn test_opening_turns_are_shown_with_times() {
        let conversation =
            Conversation::with_opening(PersonalityVariant::Friend, DEFAULT_REPLY_DELAY);
        let mut view = ConversationView::new();
        let screen = text(&draw(&mut view, &conversation));
        assert!(screen.contains("Really? I wasn't sure if I used it correctly."));
        for turn in conversation.turns() {
            assert!(screen.contains(&turn.time_label()));
        }
        // User badge
        assert!(screen.contains(" S "));
    }

    #[test]
    fn test_typing_edits_draft() {
        let mut conversation = Conversation::new(PersonalityVariant::Friend, DEFAULT_REPLY_DELAY);
        let mut view = ConversationView::new();
        for c in "hey".chars() {
            assert_eq!(view.handle_key(key(KeyCode::Char(c), KeyModifiers::NONE), &mut conversation), None);
        }
        view.handle_key(key(KeyCode::Backspace, KeyModifiers::NONE), &mut conversation);
        assert_eq!(conversation.draft(), "he");

        let screen = text(&draw(&mut view, &conversation));
        assert!(!screen.contains(INPUT_PLACEHOLDER));
    }

    #[test]
    fn test_keys_map_to_targets() {
        let mut conversation = Conversation::new(PersonalityVariant::Friend, DEFAULT_REPLY_DELAY);
        let mut view = ConversationView::new();
        assert_eq!(
            view.handle_key(key(KeyCode::Enter, KeyModifiers::NONE), &mut conversation),
            Some(Target::Send)
        );
        assert_eq!(
            view.handle_key(key(KeyCode::Char('t'), KeyModifiers::CONTROL), &mut conversation),
            Some(Target::ToggleMic)
        );
        assert_eq!(
            view.handle_key(key(KeyCode::Char('2'), KeyModifiers::ALT), &mut conversation),
            Some(Target::Suggestion(1))
        );
        assert_eq!(conversation.draft(), "");
    }

    #[test]
    fn test_suggestion_chips_are_clickable() {
        let conversation = Conversation::new(PersonalityVariant::Friend, DEFAULT_REPLY_DELAY);
        let mut view = ConversationView::new();
        let _ = draw(&mut view, &conversation);
        let layout = ConversationLayout::new(Rect::new(0, 0, 100, 40));
        assert_eq!(
            view.target_at(layout.suggestions.x + 1, layout.suggestions.y),
            Some(Target::Suggestion(0))
        );
        assert_eq!(
            view.target_at(layout.input.x + 2, layout.input.y + 2),
            Some(Target::ToggleMic)
        );
        assert_eq!(
            view.target_at(layout.input.right() - 3, layout.input.y + 2),
            Some(Target::Send)
        );
    }

    #[test]
    fn test_scroll_back_is_clamped_to_content() {
        let conversation =
            Conversation::with_opening(PersonalityVariant::Friend, DEFAULT_REPLY_DELAY);
        let mut view = ConversationView::new();
        view.scroll_back(500);
        let _ = draw(&mut view, &conversation);
        // Three short turns fit the window, so there is nothing to scroll
        assert_eq!(view.scroll_back, 0);
    }
}

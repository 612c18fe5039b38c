//! TextBlock Widget
//!
//! A borderless, word-wrapped text region. Rendered statefully it scrolls
//! (optionally pinned to the last line, for the message input); rendered
//! as a plain widget it shows the first lines that fit.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{StatefulWidget, Widget};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

/// State for a scrollable text block
#[derive(Debug, Default)]
pub struct TextBlockState {
    /// Scroll offset (lines from top)
    pub scroll_offset: usize,
    /// Total content lines after the last render
    pub total_lines: usize,
    /// Keep the last line in view
    pub follow_tail: bool,
}

impl TextBlockState {
    /// State pinned to the last line
    pub fn tail() -> Self {
        Self {
            follow_tail: true,
            ..Self::default()
        }
    }

    /// Scroll by delta (positive = down); stops following the tail
    pub fn scroll(&mut self, delta: i32) {
        let new_offset = self.scroll_offset as i64 + i64::from(delta);
        self.scroll_offset = new_offset.max(0) as usize;
        self.follow_tail = false;
    }
}

/// A borderless, word-wrapped text block
pub struct TextBlock<'a> {
    content: &'a str,
    style: Style,
    alignment: Alignment,
}

impl<'a> TextBlock<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            style: Style::default(),
            alignment: Alignment::Left,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Lines `content` occupies when wrapped to `width`
    pub fn wrapped_lines(content: &str, width: u16) -> Vec<String> {
        let width = usize::from(width.max(1));
        content
            .lines()
            .flat_map(|line| {
                if line.is_empty() {
                    vec![String::new()]
                } else {
                    wrap(line, width)
                        .into_iter()
                        .map(|cow| cow.to_string())
                        .collect()
                }
            })
            .collect()
    }

    /// Height `content` needs at `width`
    pub fn measure(content: &str, width: u16) -> u16 {
        Self::wrapped_lines(content, width).len() as u16
    }

    fn draw_line(&self, area: Rect, y: u16, line: &str, buf: &mut Buffer) {
        let line_width = (line.width() as u16).min(area.width);
        let x = match self.alignment {
            Alignment::Left => area.x,
            Alignment::Center => area.x + (area.width - line_width) / 2,
            Alignment::Right => area.x + area.width - line_width,
        };
        buf.set_stringn(x, y, line, usize::from(area.width), self.style);
    }
}

impl StatefulWidget for TextBlock<'_> {
    type State = TextBlockState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }
        let wrapped = Self::wrapped_lines(self.content, area.width);
        state.total_lines = wrapped.len();

        let max_scroll = state.total_lines.saturating_sub(usize::from(area.height));
        state.scroll_offset = if state.follow_tail {
            max_scroll
        } else {
            state.scroll_offset.min(max_scroll)
        };

        for (i, line) in wrapped
            .iter()
            .skip(state.scroll_offset)
            .take(usize::from(area.height))
            .enumerate()
        {
            self.draw_line(area, area.y + i as u16, line, buf);
        }
    }
}

impl Widget for TextBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut state = TextBlockState::default();
        StatefulWidget::render(self, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_wraps_to_width() {
        assert_eq!(
            TextBlock::wrapped_lines("one two three", 7),
            vec!["one two", "three"]
        );
        assert_eq!(TextBlock::measure("a\n\nb", 10), 3);
    }

    #[test]
    fn test_center_alignment() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 7, 1));
        Widget::render(
            TextBlock::new("abc").alignment(Alignment::Center),
            buf.area,
            &mut buf,
        );
        assert_eq!(row(&buf, 0), "  abc  ");
    }

    #[test]
    fn test_follow_tail_shows_last_lines() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        let mut state = TextBlockState::tail();
        StatefulWidget::render(
            TextBlock::new("aa bb cc dd"),
            buf.area,
            &mut buf,
            &mut state,
        );
        assert_eq!(state.total_lines, 4);
        assert_eq!(state.scroll_offset, 2);
        assert_eq!(row(&buf, 0), "cc  ");
        assert_eq!(row(&buf, 1), "dd  ");
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        let mut state = TextBlockState::default();
        state.scroll(10);
        StatefulWidget::render(TextBlock::new("aa bb cc"), buf.area, &mut buf, &mut state);
        assert_eq!(state.scroll_offset, 1);
        assert!(!state.follow_tail);
    }
}

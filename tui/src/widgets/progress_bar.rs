//! Gradient Progress Bar
//!
//! A one-row bar: the filled part is sampled across a gradient token, the
//! rest is a muted track. An optional shimmer (the `progress-flow` token)
//! sweeps a highlight across the filled part.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use shine_core::{ColorToken, GradientToken};

use crate::theme::{blend, Theme};

const FILLED: &str = "█";
const TRACK: &str = "░";

/// Horizontal percentage bar
pub struct GradientBar {
    percent: u8,
    gradient: GradientToken,
    theme: Theme,
    shimmer: Option<f32>,
}

impl GradientBar {
    pub fn new(percent: u8, gradient: GradientToken, theme: Theme) -> Self {
        Self {
            percent: percent.min(100),
            gradient,
            theme,
            shimmer: None,
        }
    }

    /// Shimmer position along the filled part (0.0..=1.0)
    pub fn shimmer(mut self, position: f32) -> Self {
        self.shimmer = Some(position.clamp(0.0, 1.0));
        self
    }

    /// Cells filled at `width`
    pub fn filled_cells(&self, width: u16) -> u16 {
        (u32::from(width) * u32::from(self.percent) / 100) as u16
    }
}

impl Widget for GradientBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let filled = self.filled_cells(area.width);
        let track = Style::default().fg(self.theme.color(ColorToken::Muted));
        let highlight = self.theme.color(ColorToken::PrimaryForeground);

        for i in 0..area.width {
            let x = area.x + i;
            if i < filled {
                let t = if filled > 1 {
                    f32::from(i) / f32::from(filled - 1)
                } else {
                    0.0
                };
                let mut color = self.theme.gradient_at(self.gradient, t);
                if let Some(pos) = self.shimmer {
                    let distance = (t - pos).abs();
                    if distance < 0.15 {
                        color = blend(color, highlight, 0.35 * (1.0 - distance / 0.15));
                    }
                }
                buf.set_string(x, area.y, FILLED, Style::default().fg(color));
            } else {
                buf.set_string(x, area.y, TRACK, track);
            }
        }
    }
}

//! Scrolling Viewport
//!
//! Views taller than the terminal render into an off-screen buffer of their
//! full height; the viewport copies the visible window into the layer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Vertical scroll position for a tall view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    /// First content row shown
    pub offset: u16,
}

impl Viewport {
    /// Scroll by `delta` rows (positive = down); clamped on the next blit
    pub fn scroll(&mut self, delta: i32) {
        let next = i32::from(self.offset) + delta;
        self.offset = next.clamp(0, i32::from(u16::MAX)) as u16;
    }

    /// Back to the top
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Largest offset that still fills the window
    pub fn max_offset(content_height: u16, window_height: u16) -> u16 {
        content_height.saturating_sub(window_height)
    }

    /// Copy the visible rows of `content` into `target` at `area`
    ///
    /// Clamps the offset to the content first.
    pub fn blit(&mut self, content: &Buffer, target: &mut Buffer, area: Rect) {
        self.offset = self
            .offset
            .min(Self::max_offset(content.area.height, area.height));

        let src = content.area;
        for row in 0..area.height {
            let sy = src.y + self.offset + row;
            if sy >= src.bottom() {
                break;
            }
            for col in 0..area.width.min(src.width) {
                let cell = &content[(src.x + col, sy)];
                target[(area.x + col, area.y + row)] = cell.clone();
            }
        }
    }

    /// Translate a window position to content coordinates
    pub fn to_content(&self, area: Rect, x: u16, y: u16) -> Option<(u16, u16)> {
        let inside = x >= area.x && x < area.right() && y >= area.y && y < area.bottom();
        inside.then(|| (x - area.x, y - area.y + self.offset))
    }
}

//! Sprite Definitions
//!
//! Blocky pixel art using Unicode block elements and colors.
//! Each cell has its own foreground color, so a badge can carry a gradient
//! ring and a lighter glow inside it.

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

/// A single colored cell in a sprite
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColoredCell {
    /// The character to display
    pub ch: char,
    /// Foreground color
    pub fg: Color,
}

impl ColoredCell {
    /// Create a new colored cell
    pub const fn new(ch: char, fg: Color) -> Self {
        Self { ch, fg }
    }

    /// Empty/transparent cell
    pub const fn empty() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }

    /// Check if cell is empty/transparent
    pub fn is_empty(&self) -> bool {
        self.ch == ' '
    }
}

/// A rendered sprite with per-cell coloring
#[derive(Clone, Debug)]
pub struct Frame {
    /// 2D grid of colored cells (row-major)
    pub cells: Vec<Vec<ColoredCell>>,
    /// Width in terminal cells
    pub width: u16,
    /// Height in terminal cells
    pub height: u16,
}

impl Frame {
    /// Create a frame from a grid of colored cells
    pub fn new(cells: Vec<Vec<ColoredCell>>) -> Self {
        let height = cells.len() as u16;
        let width = cells.iter().map(|row| row.len() as u16).max().unwrap_or(0);

        Self {
            cells,
            width,
            height,
        }
    }

    /// Get cell at position (returns empty if out of bounds)
    pub fn get(&self, x: u16, y: u16) -> &ColoredCell {
        static EMPTY: ColoredCell = ColoredCell::empty();
        self.cells
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .unwrap_or(&EMPTY)
    }

    /// Draw the frame centered in `area`, skipping transparent cells
    ///
    /// Returns the rectangle actually covered by the sprite.
    pub fn draw_centered(&self, area: Rect, buf: &mut Buffer) -> Rect {
        let x_offset = area.width.saturating_sub(self.width) / 2;
        let y_offset = area.height.saturating_sub(self.height) / 2;
        let placed = Rect::new(
            area.x + x_offset,
            area.y + y_offset,
            self.width.min(area.width),
            self.height.min(area.height),
        );

        for (row_idx, row) in self.cells.iter().enumerate() {
            let y = placed.y + row_idx as u16;
            if y >= area.y + area.height {
                break;
            }

            for (col_idx, cell) in row.iter().enumerate() {
                let x = placed.x + col_idx as u16;
                if x >= area.x + area.width {
                    break;
                }
                if cell.is_empty() {
                    continue;
                }
                buf[(x, y)]
                    .set_char(cell.ch)
                    .set_style(Style::default().fg(cell.fg));
            }
        }

        placed
    }
}

// ============================================================================
// Sprite Builder Helpers
// ============================================================================

/// Parse a sprite definition using a color map
///
/// Format: each character in the pattern maps to a (char, Color) in the palette.
/// Special: ' ' (space) is always transparent.
///
/// Example:
/// ```ignore
/// let palette = [('A', '█', RING), ('g', '█', GLOW), ('o', '█', CORE)];
/// let pattern = [
///     " AAAA ",
///     "AgoogA",
///     " AAAA ",
/// ];
/// ```
pub fn build_frame(pattern: &[&str], palette: &[(char, char, Color)]) -> Frame {
    let color_map: HashMap<char, (char, Color)> = palette
        .iter()
        .map(|&(key, ch, color)| (key, (ch, color)))
        .collect();

    let cells: Vec<Vec<ColoredCell>> = pattern
        .iter()
        .map(|line| {
            line.chars()
                .map(|c| {
                    if c == ' ' {
                        ColoredCell::empty()
                    } else if let Some(&(ch, color)) = color_map.get(&c) {
                        ColoredCell::new(ch, color)
                    } else {
                        // Unknown key - show as-is in default color
                        ColoredCell::new(c, Color::Reset)
                    }
                })
                .collect()
        })
        .collect();

    Frame::new(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::Rgb(255, 0, 0);

    #[test]
    fn test_build_frame_maps_palette() {
        let frame = build_frame(&[" x ", "xyx"], &[('x', '█', RED)]);
        assert_eq!(frame.width, 3);
        assert_eq!(frame.height, 2);
        assert!(frame.get(0, 0).is_empty());
        assert_eq!(frame.get(1, 0), &ColoredCell::new('█', RED));
        // Unknown keys fall through untouched
        assert_eq!(frame.get(1, 1).ch, 'y');
        assert!(frame.get(9, 9).is_empty());
    }

    #[test]
    fn test_draw_centered() {
        let frame = build_frame(&["xx"], &[('x', '#', RED)]);
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 3));
        let placed = frame.draw_centered(buf.area, &mut buf);
        assert_eq!(placed, Rect::new(2, 1, 2, 1));
        assert_eq!(buf[(2, 1)].symbol(), "#");
        assert_eq!(buf[(1, 1)].symbol(), " ");
    }
}

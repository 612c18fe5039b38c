//! Layered Compositor
//!
//! Manages z-ordered layers for rendering. Each layer has its own buffer
//! and can be positioned, resized, shown and hidden independently.
//!
//! Shine uses three layers: the active view, the navigation bar floating
//! over it, and the celebration overlay above everything. The compositor
//! also answers "which layer is under the mouse", so a click on the overlay
//! never reaches the view behind it.

mod layer;

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

pub use layer::Layer;

/// Unique identifier for a layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(u32);

/// The compositor manages all layers and composites them together
pub struct Compositor {
    /// All layers by ID
    layers: HashMap<LayerId, Layer>,
    /// Layers sorted by z-index for rendering
    render_order: Vec<LayerId>,
    /// Next layer ID to assign
    next_id: u32,
    /// Output buffer (composited result)
    output: Buffer,
    /// Total area
    area: Rect,
}

impl Compositor {
    /// Create a new compositor for the given area
    pub fn new(area: Rect) -> Self {
        Self {
            layers: HashMap::new(),
            render_order: Vec::new(),
            next_id: 0,
            output: Buffer::empty(area),
            area,
        }
    }

    /// Create a new layer and return its ID
    pub fn create_layer(&mut self, bounds: Rect, z_index: i32) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;

        let layer = Layer::new(id, bounds, z_index);
        self.layers.insert(id, layer);
        self.update_render_order();

        id
    }

    /// Get mutable access to a layer's buffer for rendering
    pub fn layer_buffer_mut(&mut self, id: LayerId) -> Option<&mut Buffer> {
        self.layers.get_mut(&id).map(|l| &mut l.buffer)
    }

    /// Screen bounds of a layer
    pub fn layer_bounds(&self, id: LayerId) -> Option<Rect> {
        self.layers.get(&id).map(|l| l.bounds)
    }

    /// Move and resize a layer in one step (clears its buffer)
    pub fn place_layer(&mut self, id: LayerId, bounds: Rect) {
        if let Some(layer) = self.layers.get_mut(&id) {
            if layer.bounds != bounds {
                layer.bounds = bounds;
                // Buffer uses origin coordinates
                layer.buffer = Buffer::empty(Rect::new(0, 0, bounds.width, bounds.height));
            }
        }
    }

    /// Set layer visibility
    pub fn set_visible(&mut self, id: LayerId, visible: bool) {
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.visible = visible;
        }
    }

    /// Whether a layer is currently shown
    pub fn is_visible(&self, id: LayerId) -> bool {
        self.layers.get(&id).is_some_and(|l| l.visible)
    }

    /// Resize the entire compositor
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.output = Buffer::empty(area);
    }

    /// Total area
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Composite all visible layers into the output buffer
    pub fn composite(&mut self) -> &Buffer {
        self.output.reset();

        // Back to front
        for id in &self.render_order {
            if let Some(layer) = self.layers.get(id) {
                if layer.visible {
                    Self::blit_layer(&mut self.output, &self.area, layer);
                }
            }
        }

        &self.output
    }

    /// Composite and copy the result into a frame buffer
    pub fn render_into(&mut self, target: &mut Buffer) {
        let output = self.composite();
        let width = target.area.width.min(output.area.width);
        let height = target.area.height.min(output.area.height);
        let (ox, oy) = (target.area.x, target.area.y);

        for y in 0..height {
            for x in 0..width {
                let idx = output.index_of(x, y);
                if idx < output.content.len() {
                    target[(ox + x, oy + y)] = output.content[idx].clone();
                }
            }
        }
    }

    /// Blit a layer onto the output buffer
    ///
    /// A cell is transparent only when it is a blank with no background, so
    /// painted panels occlude what lies beneath even where they hold spaces.
    fn blit_layer(output: &mut Buffer, area: &Rect, layer: &Layer) {
        let lb = &layer.bounds;

        for ly in 0..lb.height {
            for lx in 0..lb.width {
                let dst_x = lb.x + lx;
                let dst_y = lb.y + ly;

                if dst_x >= area.width || dst_y >= area.height {
                    continue;
                }

                let src_idx = layer.buffer.index_of(lx, ly);
                if src_idx >= layer.buffer.content.len() {
                    continue;
                }

                let src_cell = &layer.buffer.content[src_idx];
                if src_cell.symbol() == " " && src_cell.bg == Color::Reset {
                    continue;
                }

                let dst_idx = output.index_of(dst_x, dst_y);
                if dst_idx < output.content.len() {
                    output.content[dst_idx] = src_cell.clone();
                }
            }
        }
    }

    /// Find the topmost visible layer at a given position (for mouse events)
    pub fn layer_at(&self, x: u16, y: u16) -> Option<LayerId> {
        // Front to back
        for &id in self.render_order.iter().rev() {
            if let Some(layer) = self.layers.get(&id) {
                if layer.visible && layer.contains(x, y) {
                    return Some(id);
                }
            }
        }
        None
    }

    /// Convert a screen position to a layer's local coordinates
    pub fn to_local(&self, id: LayerId, x: u16, y: u16) -> Option<(u16, u16)> {
        self.layers.get(&id).and_then(|l| l.to_local(x, y))
    }

    /// Update render order based on z-indices
    fn update_render_order(&mut self) {
        self.render_order = self.layers.keys().copied().collect();
        self.render_order.sort_by_key(|id| {
            let z = self.layers.get(id).map_or(0, |l| l.z_index);
            (z, id.0)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    fn symbol_at(buf: &Buffer, x: u16, y: u16) -> String {
        buf[(x, y)].symbol().to_string()
    }

    #[test]
    fn test_front_layer_wins() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 10, 3));
        let back = compositor.create_layer(Rect::new(0, 0, 10, 3), 0);
        let front = compositor.create_layer(Rect::new(2, 1, 3, 1), 10);

        compositor
            .layer_buffer_mut(back)
            .unwrap()
            .set_string(0, 1, "aaaaaaaaaa", Style::default());
        compositor
            .layer_buffer_mut(front)
            .unwrap()
            .set_string(0, 0, "bbb", Style::default());

        let out = compositor.composite();
        assert_eq!(symbol_at(out, 1, 1), "a");
        assert_eq!(symbol_at(out, 2, 1), "b");
        assert_eq!(symbol_at(out, 4, 1), "b");
        assert_eq!(symbol_at(out, 5, 1), "a");
    }

    #[test]
    fn test_render_into_offset_frame() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 4, 2));
        let layer = compositor.create_layer(Rect::new(0, 0, 4, 2), 0);
        compositor
            .layer_buffer_mut(layer)
            .unwrap()
            .set_string(0, 1, "wxyz", Style::default());

        let mut frame = Buffer::empty(Rect::new(5, 3, 4, 2));
        compositor.render_into(&mut frame);
        assert_eq!(symbol_at(&frame, 5, 4), "w");
        assert_eq!(symbol_at(&frame, 8, 4), "z");
        assert_eq!(symbol_at(&frame, 5, 3), " ");
    }

    #[test]
    fn test_blank_cells_are_transparent_unless_painted() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 4, 1));
        let back = compositor.create_layer(Rect::new(0, 0, 4, 1), 0);
        let front = compositor.create_layer(Rect::new(0, 0, 4, 1), 1);

        compositor
            .layer_buffer_mut(back)
            .unwrap()
            .set_string(0, 0, "xxxx", Style::default());
        let buf = compositor.layer_buffer_mut(front).unwrap();
        buf.set_string(1, 0, " ", Style::default().bg(Color::Rgb(1, 2, 3)));

        let out = compositor.composite();
        assert_eq!(symbol_at(out, 0, 0), "x");
        assert_eq!(symbol_at(out, 1, 0), " ");
    }

    #[test]
    fn test_hidden_layers_are_skipped() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 4, 1));
        let overlay = compositor.create_layer(Rect::new(0, 0, 4, 1), 100);
        compositor
            .layer_buffer_mut(overlay)
            .unwrap()
            .set_string(0, 0, "zz", Style::default());
        compositor.set_visible(overlay, false);

        assert_eq!(symbol_at(compositor.composite(), 0, 0), " ");
        assert_eq!(compositor.layer_at(0, 0), None);
    }

    #[test]
    fn test_layer_at_picks_topmost() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 20, 10));
        let view = compositor.create_layer(Rect::new(0, 0, 20, 10), 0);
        let nav = compositor.create_layer(Rect::new(5, 8, 10, 2), 10);

        assert_eq!(compositor.layer_at(6, 9), Some(nav));
        assert_eq!(compositor.layer_at(1, 9), Some(view));
        assert_eq!(compositor.to_local(nav, 6, 9), Some((1, 1)));
        assert_eq!(compositor.to_local(nav, 1, 1), None);
    }

    #[test]
    fn test_place_layer_resets_buffer() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 20, 10));
        let id = compositor.create_layer(Rect::new(0, 0, 5, 5), 0);
        compositor.place_layer(id, Rect::new(2, 2, 8, 3));
        let buf = compositor.layer_buffer_mut(id).unwrap();
        assert_eq!(buf.area, Rect::new(0, 0, 8, 3));
        assert_eq!(compositor.layer_bounds(id), Some(Rect::new(2, 2, 8, 3)));
    }
}

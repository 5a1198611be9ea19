//! Layered Compositor
//!
//! Manages z-ordered layers for rendering. Each layer has its own buffer
//! and can be positioned, resized and hidden independently.
//!
//! Layers may sit partly off-screen: a page sliding out keeps its full
//! buffer and only the visible part is blitted. Opaque layers (the theme
//! backgrounds) copy every cell; the rest let blanks show through and keep
//! the background underneath when they have none of their own.

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

        let layer = Layer::new(bounds, z_index);
        self.layers.insert(id, layer);
        self.update_render_order();

        id
    }

    /// Create an opaque layer
    pub fn create_opaque_layer(&mut self, bounds: Rect, z_index: i32) -> LayerId {
        let id = self.create_layer(bounds, z_index);
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.opaque = true;
        }
        id
    }

    /// Get mutable access to a layer's buffer for rendering
    pub fn layer_buffer_mut(&mut self, id: LayerId) -> Option<&mut Buffer> {
        self.layers.get_mut(&id).map(|l| &mut l.buffer)
    }

    /// Move a layer to a new position (negative = partly off-screen)
    pub fn move_layer(&mut self, id: LayerId, x: i32, y: i32) {
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.x = x;
            layer.y = y;
        }
    }

    /// Resize a layer
    pub fn resize_layer(&mut self, id: LayerId, width: u16, height: u16) {
        if let Some(layer) = self.layers.get_mut(&id) {
            // Buffer uses origin coordinates
            layer.buffer = Buffer::empty(Rect::new(0, 0, width, height));
        }
    }

    /// Set layer visibility
    pub fn set_visible(&mut self, id: LayerId, visible: bool) {
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.visible = visible;
        }
    }

    /// Resize the entire compositor
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.output = Buffer::empty(area);
    }

    /// Composite all visible layers into the output buffer
    pub fn composite(&mut self) -> &Buffer {
        // Clear output
        self.output.reset();

        // Render layers in z-order (back to front)
        for id in &self.render_order {
            if let Some(layer) = self.layers.get(id) {
                if layer.visible {
                    Self::blit_layer(&mut self.output, self.area, layer);
                }
            }
        }

        &self.output
    }

    /// Blit a layer onto the output buffer
    fn blit_layer(output: &mut Buffer, area: Rect, layer: &Layer) {
        let w = i32::from(area.width);

        for dst_y in layer.visible_rows(area.height) {
            let Ok(ly) = u16::try_from(dst_y - layer.y) else {
                continue;
            };
            for lx in 0..layer.width() {
                let dst_x = layer.x + i32::from(lx);
                if dst_x < 0 || dst_x >= w {
                    continue;
                }

                let src_idx = layer.buffer.index_of(lx, ly);
                let Some(src) = layer.buffer.content.get(src_idx) else {
                    continue;
                };
                // Both coordinates were range-checked against the u16 area
                let dst_idx = output.index_of(dst_x as u16, dst_y as u16);
                let Some(dst) = output.content.get_mut(dst_idx) else {
                    continue;
                };

                if layer.opaque {
                    *dst = src.clone();
                } else if src.symbol() != " " || src.bg != Color::Reset {
                    // Transparent layers keep whatever background is below
                    dst.set_symbol(src.symbol());
                    dst.fg = src.fg;
                    dst.modifier = src.modifier;
                    if src.bg != Color::Reset {
                        dst.bg = src.bg;
                    }
                }
            }
        }
    }

    /// Update render order based on z-indices
    fn update_render_order(&mut self) {
        self.render_order = self.layers.keys().copied().collect();
        self.render_order
            .sort_by_key(|id| self.layers.get(id).map_or(0, |l| l.z_index));
    }
}

//! Layer - A single compositable layer

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// A single layer in the compositor
pub struct Layer {
    /// Z-order (higher = in front)
    pub z_index: i32,
    /// Screen column of the layer's left edge (may be off-screen)
    pub x: i32,
    /// Screen row of the layer's top edge (may be off-screen)
    pub y: i32,
    /// Whether the layer is visible
    pub visible: bool,
    /// Opaque layers copy every cell, blanks included
    pub opaque: bool,
    /// The layer's render buffer
    pub buffer: Buffer,
}

impl Layer {
    /// Create a new layer
    pub fn new(bounds: Rect, z_index: i32) -> Self {
        // The buffer always starts at (0,0); the position is kept separately
        // so slides can go negative
        Self {
            z_index,
            x: i32::from(bounds.x),
            y: i32::from(bounds.y),
            visible: true,
            opaque: false,
            buffer: Buffer::empty(Rect::new(0, 0, bounds.width, bounds.height)),
        }
    }

    /// Layer width in cells
    pub fn width(&self) -> u16 {
        self.buffer.area.width
    }

    /// Layer height in cells
    pub fn height(&self) -> u16 {
        self.buffer.area.height
    }

    /// Screen rows this layer covers, clipped to `0..screen_height`
    pub fn visible_rows(&self, screen_height: u16) -> std::ops::Range<i32> {
        let top = self.y.max(0);
        let bottom = (self.y + i32::from(self.height())).min(i32::from(screen_height));
        top..bottom.max(top)
    }
}

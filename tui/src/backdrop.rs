//! Floating Backdrop
//!
//! A handful of small squares drifting slowly upward behind the pages.
//! Purely decorative; placement is random, motion is a function of elapsed
//! time so frames stay reproducible for a given seed.

use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::style::Style;

use crate::theme::{lerp_color, Palette};

/// Squares on screen
pub const SQUARE_COUNT: usize = 14;

const GLYPHS: [&str; 4] = ["▪", "▫", "■", "□"];

#[derive(Clone, Copy, Debug)]
struct Square {
    /// Horizontal position, fraction of the width
    x: f32,
    /// Vertical position at t = 0, fraction of the height
    y: f32,
    /// Upward drift, heights per second
    speed: f32,
    glyph: usize,
    /// 0 = accent, 1 = accent_alt, 2 = highlight
    tint: usize,
}

/// The drifting squares
#[derive(Clone, Debug)]
pub struct FloatingSquares {
    squares: Vec<Square>,
}

impl FloatingSquares {
    /// Scatter `count` squares using `rng`
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let squares = (0..count)
            .map(|_| Square {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(0.0..1.0),
                speed: rng.gen_range(0.01..0.04),
                glyph: rng.gen_range(0..GLYPHS.len()),
                tint: rng.gen_range(0..3),
            })
            .collect();
        Self { squares }
    }

    /// Cell positions at `elapsed` seconds for a `width` x `height` area
    pub fn positions(&self, elapsed: f32, width: u16, height: u16) -> Vec<(u16, u16)> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        self.squares
            .iter()
            .map(|s| Self::cell(s, elapsed, width, height))
            .collect()
    }

    /// Draw into `buf` (cleared first)
    pub fn render(&self, buf: &mut Buffer, palette: &Palette, elapsed: f32) {
        buf.reset();
        let area = buf.area;
        if area.width == 0 || area.height == 0 {
            return;
        }

        for square in &self.squares {
            let (x, y) = Self::cell(square, elapsed, area.width, area.height);
            let tint = match square.tint {
                0 => palette.accent,
                1 => palette.accent_alt,
                _ => palette.highlight,
            };
            // Faded most of the way into the background
            let color = lerp_color(tint, palette.bg, 0.65);
            buf.set_string(x, y, GLYPHS[square.glyph], Style::default().fg(color));
        }
    }

    fn cell(square: &Square, elapsed: f32, width: u16, height: u16) -> (u16, u16) {
        let y = (square.y - elapsed * square.speed).rem_euclid(1.0);
        let col = (square.x * f32::from(width)) as u16;
        let row = (y * f32::from(height)) as u16;
        (col.min(width - 1), row.min(height - 1))
    }
}

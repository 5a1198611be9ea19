//! Page Views
//!
//! Each page draws itself into a full-screen layer buffer. Views only read
//! from the [`Portfolio`]; anything clickable is registered on the
//! [`HitMap`] while drawing, so hit regions always match what is on screen.

mod chrome;
mod contact;
mod hero;
mod projects;

use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

use portfolio_core::{PageId, Portfolio};

use crate::input::{Action, HitMap};
use crate::theme::Palette;

pub use chrome::{render_chrome, render_notices, NOTICE_WIDTH};

/// Rows reserved at the top (header) and bottom (key hints)
pub const CHROME_ROWS: u16 = 2;

/// Columns reserved on the right for the page dots
pub const DOTS_COLUMNS: u16 = 4;

/// What a view needs to draw one frame
pub struct ViewContext<'a> {
    pub portfolio: &'a Portfolio,
    pub palette: Palette,
    pub now: Instant,
}

/// A layer buffer plus the (optional) hit map for its regions
///
/// Pages sliding in or out get no hit map: they are not where they appear
/// to be for long enough to click.
pub struct Canvas<'a> {
    pub buf: &'a mut Buffer,
    hits: Option<&'a mut HitMap>,
}

impl<'a> Canvas<'a> {
    pub fn new(buf: &'a mut Buffer, hits: Option<&'a mut HitMap>) -> Self {
        Self { buf, hits }
    }

    pub fn area(&self) -> Rect {
        self.buf.area
    }

    /// Write `text` at (x, y), clipped to the buffer; returns the width written
    pub fn text(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        let area = self.buf.area;
        if x >= area.right() || y >= area.bottom() {
            return 0;
        }
        let max = usize::from(area.right() - x);
        let (end, _) = self.buf.set_stringn(x, y, text, max, style);
        end - x
    }

    /// Write `text` so that it ends at column `right`
    pub fn text_right(&mut self, right: u16, y: u16, text: &str, style: Style) -> Rect {
        let width = display_width(text);
        let x = right.saturating_sub(width);
        let written = self.text(x, y, text, style);
        Rect::new(x, y, written, 1)
    }

    /// Paint `area` with a style (background fills)
    pub fn fill(&mut self, area: Rect, style: Style) {
        let area = area.intersection(self.buf.area);
        if !area.is_empty() {
            self.buf.set_style(area, style);
        }
    }

    /// Register a clickable region
    pub fn hit(&mut self, area: Rect, action: impl Into<Action>) {
        if let Some(hits) = self.hits.as_deref_mut() {
            hits.push(area.intersection(self.buf.area), action);
        }
    }
}

/// Display width of a string in terminal cells
pub fn display_width(text: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(text)).unwrap_or(u16::MAX)
}

/// Content area of a page inside the chrome
pub fn content_area(screen: Rect) -> Rect {
    Rect::new(
        screen.x + 2,
        screen.y + CHROME_ROWS,
        screen.width.saturating_sub(2 + DOTS_COLUMNS + 1),
        screen.height.saturating_sub(CHROME_ROWS * 2),
    )
}

/// Draw `page` into `canvas`
pub fn render_page(page: PageId, ctx: &ViewContext<'_>, canvas: &mut Canvas<'_>) {
    canvas.buf.reset();
    let area = content_area(canvas.area());
    if area.width < 10 || area.height < 3 {
        return;
    }
    match page {
        PageId::Hero => hero::render(ctx, canvas, area),
        PageId::Projects => projects::render(ctx, canvas, area),
        PageId::Contact => contact::render(ctx, canvas, area),
    }
}

/// Wrap `text` to `width` columns, at most `max_lines` lines
pub(crate) fn wrap_lines(text: &str, width: u16, max_lines: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    textwrap::wrap(text, usize::from(width))
        .into_iter()
        .take(max_lines)
        .map(|line| line.into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_clipped() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 1));
        let mut canvas = Canvas::new(&mut buf, None);
        assert_eq!(canvas.text(2, 0, "hello", Style::default()), 3);
        assert_eq!(canvas.text(9, 0, "x", Style::default()), 0);
        assert_eq!(canvas.text(0, 4, "x", Style::default()), 0);
        assert_eq!(buf[(4, 0)].symbol(), "l");
    }

    #[test]
    fn test_hits_only_with_map() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
        let mut hits = HitMap::new();
        {
            let mut canvas = Canvas::new(&mut buf, Some(&mut hits));
            canvas.hit(Rect::new(0, 0, 3, 1), Action::Quit);
            // Clipped to the buffer, empty after clipping
            canvas.hit(Rect::new(20, 0, 3, 1), Action::Quit);
        }
        assert_eq!(hits.len(), 1);

        let mut canvas = Canvas::new(&mut buf, None);
        canvas.hit(Rect::new(0, 0, 3, 1), Action::Quit);
    }

    #[test]
    fn test_wrap_lines_limits() {
        let lines = wrap_lines("one two three four five six", 9, 2);
        assert_eq!(lines, vec!["one two", "three"]);
        assert!(wrap_lines("anything", 0, 3).is_empty());
    }
}

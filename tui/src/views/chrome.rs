//! Fixed chrome: header, theme button, page dots, key hints and notices

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use portfolio_core::{NavDirection, NoticeLevel, PageId, SurfaceEvent};

use super::{display_width, Canvas, ViewContext, DOTS_COLUMNS};

/// Widest a notice gets
pub const NOTICE_WIDTH: u16 = 48;

pub fn render_chrome(ctx: &ViewContext<'_>, canvas: &mut Canvas<'_>) {
    canvas.buf.reset();
    let area = canvas.area();
    if area.width < 20 || area.height < 5 {
        return;
    }
    let p = &ctx.palette;
    let nav = ctx.portfolio.navigation();
    let page = nav.current_page();

    // Header
    let w = canvas.text(
        2,
        0,
        &ctx.portfolio.profile().name,
        Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
    );
    canvas.text(2 + w, 0, &format!(" / {}", page.title()), Style::default().fg(p.muted));

    let label = if ctx.portfolio.theme().is_dark() {
        " ☾ Dark "
    } else {
        " ☀ Light "
    };
    let button = canvas.text_right(
        area.right().saturating_sub(2),
        0,
        label,
        Style::default().fg(p.text).bg(p.surface),
    );
    canvas.hit(button, SurfaceEvent::ToggleTheme);

    // Page dots, centered on the right edge, with step arrows around them
    let dots_x = area.right().saturating_sub(DOTS_COLUMNS - 1);
    let count = u16::try_from(PageId::COUNT).unwrap_or(3);
    let top = (area.height / 2).saturating_sub(count + 1);

    canvas.text(dots_x, top, "▲", Style::default().fg(p.muted));
    canvas.hit(
        Rect::new(dots_x, top, 1, 1),
        SurfaceEvent::Navigate {
            direction: NavDirection::Retreat,
        },
    );
    for target in PageId::ALL {
        let y = top + 2 + u16::try_from(target.index()).unwrap_or(0) * 2 - 1;
        let (dot, color) = if target == page {
            ("●", p.accent)
        } else {
            ("○", p.muted)
        };
        canvas.text(dots_x, y, dot, Style::default().fg(color));
        canvas.hit(Rect::new(dots_x, y, 1, 1), SurfaceEvent::NavigateTo { page: target });
    }
    let down = top + count * 2 + 1;
    canvas.text(dots_x, down, "▼", Style::default().fg(p.muted));
    canvas.hit(
        Rect::new(dots_x, down, 1, 1),
        SurfaceEvent::Navigate {
            direction: NavDirection::Advance,
        },
    );

    // Key hints
    let hints = match page {
        PageId::Hero => "j/k pages · Tab editor · 1-3 jump · t theme · q quit",
        PageId::Projects => "←/→ category · ↑/↓ select · PgUp/PgDn pages · t theme · q quit",
        PageId::Contact => {
            "Tab next field · Ctrl-S send · PgUp/PgDn pages · Ctrl-T theme · Esc quit"
        }
    };
    canvas.text(2, area.bottom() - 1, hints, Style::default().fg(p.muted));
}

/// Notices stacked under the theme button, newest at the bottom
pub fn render_notices(ctx: &ViewContext<'_>, canvas: &mut Canvas<'_>) {
    canvas.buf.reset();
    let area = canvas.area();
    let p = &ctx.palette;
    let width = NOTICE_WIDTH.min(area.width.saturating_sub(4));
    if width < 8 {
        return;
    }
    let x = area.right().saturating_sub(width + 2);

    let mut y = 2;
    for notice in ctx.portfolio.notices().active() {
        if y >= area.bottom().saturating_sub(1) {
            break;
        }
        let (icon, color) = match notice.level {
            NoticeLevel::Success => ("✓", p.success),
            NoticeLevel::Error => ("✗", p.error),
            NoticeLevel::Info => ("…", p.highlight),
        };
        let rect = Rect::new(x, y, width, 1);
        canvas.fill(rect, Style::default().bg(p.surface));

        let iw = canvas.text(x + 1, y, icon, Style::default().fg(color).bg(p.surface));
        let room = width.saturating_sub(iw + 4);
        let text = truncate(&notice.text, room);
        canvas.text(x + 2 + iw, y, &text, Style::default().fg(p.text).bg(p.surface));
        canvas.text(x + width - 2, y, "×", Style::default().fg(p.muted).bg(p.surface));
        canvas.hit(rect, SurfaceEvent::DismissNotice { id: notice.id });

        y += 2;
    }
}

/// Cut `text` to `width` cells, marking the cut with an ellipsis
fn truncate(text: &str, width: u16) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = display_width(ch.encode_utf8(&mut [0; 4]));
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Message sent!", 6), "Messa…");
        assert_eq!(truncate("abc", 0), "…");
    }
}

//! Projects page: category bar and project cards

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use portfolio_core::SurfaceEvent;

use super::{display_width, wrap_lines, Canvas, ViewContext};

/// Rows per card: title, two description lines, technologies, spacer
const CARD_ROWS: u16 = 5;

pub(super) fn render(ctx: &ViewContext<'_>, canvas: &mut Canvas<'_>, area: Rect) {
    let p = &ctx.palette;
    let showcase = ctx.portfolio.projects();
    let mut y = area.y;

    let w = canvas.text(
        area.x,
        y,
        "Projects",
        Style::default().fg(p.text).add_modifier(Modifier::BOLD),
    );
    canvas.text(area.x + w + 2, y, "Selected work", Style::default().fg(p.muted));
    y += 2;

    // Category bar
    let mut x = area.x;
    for filter in showcase.categories() {
        let label = format!(" {} ", filter.label());
        let width = display_width(&label);
        if x + width > area.right() {
            break;
        }
        let style = if filter == showcase.filter() {
            Style::default()
                .fg(p.bg)
                .bg(p.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(p.muted)
        };
        canvas.text(x, y, &label, style);
        canvas.hit(
            Rect::new(x, y, width, 1),
            SurfaceEvent::SelectCategory {
                filter: filter.clone(),
            },
        );
        x += width + 1;
    }
    y += 2;

    let projects = showcase.filtered();
    if projects.is_empty() {
        canvas.text(
            area.x,
            y,
            "No projects in this category yet.",
            Style::default().fg(p.muted),
        );
        return;
    }

    // Leave a row for the selected project's link
    let list_bottom = area.bottom().saturating_sub(1);
    let visible = usize::from(list_bottom.saturating_sub(y) / CARD_ROWS).max(1);
    let cursor = showcase.cursor();
    let first = cursor.saturating_sub(visible - 1);
    let text_width = area.width.saturating_sub(3);

    for (index, project) in projects.iter().enumerate().skip(first).take(visible) {
        if y >= list_bottom {
            break;
        }
        let selected = index == cursor;
        let card = Rect::new(area.x, y, area.width, CARD_ROWS - 1);
        if selected {
            for row in 0..card.height {
                canvas.text(area.x, y + row, "▌", Style::default().fg(p.accent));
            }
        }

        let title_style = if selected {
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(p.text).add_modifier(Modifier::BOLD)
        };
        let tw = canvas.text(area.x + 2, y, &project.title, title_style);
        if project.featured {
            canvas.text(area.x + 2 + tw + 1, y, "★", Style::default().fg(p.highlight));
        }

        for (row, line) in wrap_lines(&project.description, text_width, 2)
            .iter()
            .enumerate()
        {
            let row = u16::try_from(row).unwrap_or(0);
            canvas.text(area.x + 2, y + 1 + row, line, Style::default().fg(p.muted));
        }

        let tech = project.technologies.join(" · ");
        canvas.text(area.x + 2, y + 3, &tech, Style::default().fg(p.accent_alt));

        // Clicking a card highlights it
        let delta = i32::try_from(index).unwrap_or(i32::MAX) - i32::try_from(cursor).unwrap_or(0);
        canvas.hit(card, SurfaceEvent::MoveProjectCursor { delta });

        y += CARD_ROWS;
    }

    if let Some(project) = showcase.selected() {
        if !project.link.is_empty() {
            let link = format!("↗ {}", project.link);
            canvas.text(area.x, area.bottom() - 1, &link, Style::default().fg(p.highlight));
        }
    }
}

//! Contact page: details on the left, the message form on the right

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use portfolio_core::ContactField;

use super::{display_width, wrap_lines, Canvas, ViewContext};
use crate::input::{focus_field, Action};

/// Narrowest content width that shows details and form side by side
const SPLIT_MIN_WIDTH: u16 = 72;

pub(super) fn render(ctx: &ViewContext<'_>, canvas: &mut Canvas<'_>, area: Rect) {
    let form_area = if area.width >= SPLIT_MIN_WIDTH {
        let left_width = area.width * 2 / 5;
        render_details(ctx, canvas, Rect::new(area.x, area.y, left_width, area.height));
        Rect::new(
            area.x + left_width + 2,
            area.y,
            area.width - left_width - 2,
            area.height,
        )
    } else {
        let p = &ctx.palette;
        canvas.text(
            area.x,
            area.y,
            "Get in touch",
            Style::default().fg(p.text).add_modifier(Modifier::BOLD),
        );
        Rect::new(area.x, area.y + 2, area.width, area.height.saturating_sub(2))
    };
    render_form(ctx, canvas, form_area);
}

fn render_details(ctx: &ViewContext<'_>, canvas: &mut Canvas<'_>, area: Rect) {
    let p = &ctx.palette;
    let profile = ctx.portfolio.profile();
    let mut y = area.y;

    canvas.text(
        area.x,
        y,
        "Get in touch",
        Style::default().fg(p.text).add_modifier(Modifier::BOLD),
    );
    y += 1;
    for line in wrap_lines(
        "Have a project in mind or just want to say hi? My inbox is open.",
        area.width,
        3,
    ) {
        canvas.text(area.x, y, &line, Style::default().fg(p.muted));
        y += 1;
    }
    y += 1;

    let rows = [
        ("Email", profile.email.as_str()),
        ("Phone", profile.phone.as_str()),
        ("GitHub", profile.github.as_str()),
        ("LinkedIn", profile.linkedin.as_str()),
    ];
    for (label, value) in rows.into_iter().filter(|(_, v)| !v.is_empty()) {
        if y + 1 >= area.bottom() {
            break;
        }
        canvas.text(area.x, y, label, Style::default().fg(p.muted));
        canvas.text(area.x, y + 1, value, Style::default().fg(p.accent));
        y += 3;
    }
}

fn render_form(ctx: &ViewContext<'_>, canvas: &mut Canvas<'_>, area: Rect) {
    let p = &ctx.palette;
    let form = ctx.portfolio.contact_form();
    let sending = ctx.portfolio.is_sending();

    // Two single-line fields, the message takes what is left above the button
    let message_height = area.height.saturating_sub(3 + 3 + 2).max(3);
    let fields = [
        (ContactField::Name, 3),
        (ContactField::Email, 3),
        (ContactField::Message, message_height),
    ];

    let mut y = area.y;
    for (field, height) in fields {
        if y >= area.bottom() {
            return;
        }
        let height = height.min(area.bottom() - y);
        let rect = Rect::new(area.x, y, area.width, height);
        let focused = form.focus() == field;
        let border = if focused { p.accent } else { p.border };

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", field.label()))
            .title_style(Style::default().fg(if focused { p.accent } else { p.muted }))
            .style(Style::default().bg(p.surface))
            .render(rect, canvas.buf);
        canvas.hit(rect, focus_field(field));

        let inner = Rect::new(
            rect.x + 1,
            rect.y + 1,
            rect.width.saturating_sub(2),
            rect.height.saturating_sub(2),
        );
        render_value(canvas, form.value(field), focused && !sending, inner, ctx);
        y += height;
    }

    y += 1;
    if y < area.bottom() {
        let (label, style) = if sending {
            (
                "[ Sending... ]",
                Style::default().fg(p.muted).add_modifier(Modifier::DIM),
            )
        } else {
            (
                "[ Send Message ]",
                Style::default()
                    .fg(p.bg)
                    .bg(p.accent)
                    .add_modifier(Modifier::BOLD),
            )
        };
        let w = canvas.text(area.x, y, label, style);
        if !sending {
            canvas.hit(Rect::new(area.x, y, w, 1), Action::SubmitContact);
        }
        let hint = "Ctrl-S to send";
        if display_width(hint) + w + 2 <= area.width {
            canvas.text_right(area.right(), y, hint, Style::default().fg(p.muted));
        }
    }
}

/// Field contents, scrolled so the end (where typing happens) stays visible
fn render_value(
    canvas: &mut Canvas<'_>,
    value: &str,
    show_cursor: bool,
    inner: Rect,
    ctx: &ViewContext<'_>,
) {
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let p = &ctx.palette;
    let style = Style::default().fg(p.text).bg(p.surface);
    let width = usize::from(inner.width.saturating_sub(1)).max(1);

    let mut lines: Vec<String> = value
        .split('\n')
        .flat_map(|segment| {
            if segment.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(segment, width)
                    .into_iter()
                    .map(|line| line.into_owned())
                    .collect()
            }
        })
        .collect();
    if lines.is_empty() {
        lines.push(String::new());
    }

    let rows = usize::from(inner.height);
    let skip = lines.len().saturating_sub(rows);
    let mut last = (inner.x, inner.y);
    for (row, line) in lines.iter().skip(skip).enumerate() {
        let y = inner.y + u16::try_from(row).unwrap_or(0);
        let w = canvas.text(inner.x, y, line, style);
        last = (inner.x + w, y);
    }

    if show_cursor {
        canvas.text(last.0, last.1, "▏", Style::default().fg(p.accent).bg(p.surface));
    }
}

//! Hero page: introduction, counting stats, skills and the editor panel

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use portfolio_core::{EditorView, SurfaceEvent};

use super::{display_width, wrap_lines, Canvas, ViewContext};
use crate::theme::Palette;

/// Narrowest content width that still fits the editor panel beside the text
const SPLIT_MIN_WIDTH: u16 = 84;

#[derive(Clone, Copy)]
enum Tok {
    Plain,
    Keyword,
    Str,
    Tag,
    Punct,
}

const CODE: &[&[(&str, Tok)]] = &[
    &[("const ", Tok::Keyword), ("Portfolio", Tok::Plain), (" = () => {", Tok::Punct)],
    &[
        ("  const ", Tok::Keyword),
        ("[theme, setTheme]", Tok::Plain),
        (" = useState(", Tok::Punct),
        ("'dark'", Tok::Str),
        (");", Tok::Punct),
    ],
    &[("  return ", Tok::Keyword), ("(", Tok::Punct)],
    &[("    <main ", Tok::Tag), ("className", Tok::Plain), ("={theme}>", Tok::Punct)],
    &[("      <Hero ", Tok::Tag), ("stats", Tok::Plain), (" />", Tok::Tag)],
    &[("      <Projects ", Tok::Tag), ("featured", Tok::Plain), (" />", Tok::Tag)],
    &[("      <Contact ", Tok::Tag), ("/>", Tok::Tag)],
    &[("    </main>", Tok::Tag)],
    &[("  );", Tok::Punct)],
    &[("};", Tok::Punct)],
    &[],
    &[("export default ", Tok::Keyword), ("Portfolio", Tok::Plain), (";", Tok::Punct)],
];

pub(super) fn render(ctx: &ViewContext<'_>, canvas: &mut Canvas<'_>, area: Rect) {
    if area.width >= SPLIT_MIN_WIDTH && area.height >= 12 {
        let left_width = area.width * 9 / 20;
        let left = Rect::new(area.x, area.y, left_width, area.height);
        let right = Rect::new(
            area.x + left_width + 2,
            area.y,
            area.width - left_width - 2,
            area.height.min(18),
        );
        render_intro(ctx, canvas, left);
        render_editor(ctx, canvas, right);
    } else {
        render_intro(ctx, canvas, area);
    }
}

fn render_intro(ctx: &ViewContext<'_>, canvas: &mut Canvas<'_>, area: Rect) {
    let p = &ctx.palette;
    let profile = ctx.portfolio.profile();
    let bottom = area.bottom();
    let mut y = area.y + area.height.saturating_sub(14) / 3;

    canvas.text(area.x, y, "Hi, I'm", Style::default().fg(p.muted));
    y += 1;
    canvas.text(
        area.x,
        y,
        &profile.name,
        Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
    );
    y += 1;
    canvas.text(area.x, y, &profile.role, Style::default().fg(p.text));
    y += 2;

    for line in wrap_lines(&profile.tagline, area.width, 4) {
        if y >= bottom {
            return;
        }
        canvas.text(area.x, y, &line, Style::default().fg(p.muted));
        y += 1;
    }
    y += 1;

    // Stats count up from zero each time the page is entered
    let mut x = area.x;
    for (stat, value) in ctx.portfolio.hero_stats(ctx.now) {
        let number = format!("{value}+");
        let w = canvas.text(
            x,
            y,
            &number,
            Style::default().fg(p.highlight).add_modifier(Modifier::BOLD),
        );
        let label = format!(" {}", stat.label);
        let lw = canvas.text(x + w, y, &label, Style::default().fg(p.muted));
        x += w + lw + 3;
    }
    y += 2;

    let mut x = area.x;
    for skill in &profile.skills {
        let chip = format!("[{skill}]");
        let w = display_width(&chip);
        if x + w > area.right() {
            x = area.x;
            y += 1;
        }
        if y >= bottom {
            return;
        }
        canvas.text(x, y, &chip, Style::default().fg(p.accent_alt));
        x += w + 1;
    }
}

fn render_editor(ctx: &ViewContext<'_>, canvas: &mut Canvas<'_>, area: Rect) {
    let p = &ctx.palette;
    let editor = ctx.portfolio.editor();

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border))
        .style(Style::default().bg(p.surface))
        .render(area, canvas.buf);

    // Window controls and tabs
    let bar_y = area.y + 1;
    let mut x = area.x + 2;
    for color in [p.error, p.highlight, p.success] {
        canvas.text(x, bar_y, "●", Style::default().fg(color).bg(p.surface));
        x += 2;
    }
    x += 1;
    for view in EditorView::ALL {
        let selected = view == editor.selected_view();
        let style = if selected {
            Style::default()
                .fg(p.accent)
                .bg(p.surface)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(p.muted).bg(p.surface)
        };
        let label = format!(" {} ", view.filename());
        let w = canvas.text(x, bar_y, &label, style);
        canvas.hit(Rect::new(x, bar_y, w, 1), SurfaceEvent::ShowEditorView { view });
        x += w + 1;
    }

    let body = Rect::new(
        area.x + 2,
        area.y + 3,
        area.width.saturating_sub(4),
        area.height.saturating_sub(4),
    );
    match editor.active_view() {
        Some(EditorView::Code) => render_code(canvas, p, body),
        Some(EditorView::Design) => render_design(canvas, p, body),
        // Mid-switch: the panel stays empty for a moment
        None => {}
    }
}

fn render_code(canvas: &mut Canvas<'_>, p: &Palette, body: Rect) {
    for (i, line) in CODE.iter().enumerate() {
        let Ok(row) = u16::try_from(i) else { break };
        let y = body.y + row;
        if y >= body.bottom() {
            break;
        }
        let number = format!("{:>2} ", i + 1);
        let gutter = Style::default().fg(p.border).bg(p.surface);
        let mut x = body.x + canvas.text(body.x, y, &number, gutter);
        for (text, tok) in *line {
            let fg = match tok {
                Tok::Plain => p.text,
                Tok::Keyword => p.accent_alt,
                Tok::Str => p.highlight,
                Tok::Tag => p.accent,
                Tok::Punct => p.muted,
            };
            x += canvas.text(x, y, text, Style::default().fg(fg).bg(p.surface));
        }
    }
}

fn render_design(canvas: &mut Canvas<'_>, p: &Palette, body: Rect) {
    if body.width < 12 || body.height < 6 {
        return;
    }
    let frame = Style::default().fg(p.muted).bg(p.surface);
    canvas.text(body.x, body.y, "Frame · Portfolio / Hero", frame);

    let w = body.width;
    // Nav bar
    canvas.fill(Rect::new(body.x, body.y + 2, w, 1), Style::default().bg(p.border));
    canvas.text(body.x + 1, body.y + 2, "▪ Logo", Style::default().fg(p.text).bg(p.border));
    // Headline blocks
    canvas.fill(
        Rect::new(body.x, body.y + 4, w * 3 / 5, 1),
        Style::default().bg(p.accent),
    );
    canvas.fill(
        Rect::new(body.x, body.y + 5, w * 2 / 5, 1),
        Style::default().bg(p.accent_alt),
    );
    // Two cards
    let card_w = w.saturating_sub(2) / 2;
    let card_y = body.y + 7;
    let card_h = body.bottom().saturating_sub(card_y).min(4);
    for i in 0..2 {
        let card = Rect::new(body.x + i * (card_w + 2), card_y, card_w, card_h);
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.highlight).bg(p.surface))
            .render(card.intersection(canvas.area()), canvas.buf);
    }
}

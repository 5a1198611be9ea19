//! Integration Tests for the terminal surface
//!
//! These drive a real [`App`] with crossterm events and inspect the
//! composited buffer. No terminal is needed: the app is built for a fixed
//! size and `compose(now)` returns the frame that would be drawn.
//!
//! Tests cover:
//! - Page rendering and page changes from keys, wheel and drags
//! - The theme button and the two-background theme slide
//! - Contact form typing and validation notices
//! - Tiny terminals and resizes

use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pretty_assertions::assert_eq;
use ratatui::buffer::Buffer;

use portfolio_core::{
    ContactField, ContactService, MemoryStorage, PageId, Portfolio, PortfolioConfig, SurfaceEvent,
};
use portfolio_tui::theme::{DARK_BG, LIGHT_BG};
use portfolio_tui::App;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

// ============================================================================
// Helpers
// ============================================================================

fn app(now: Instant) -> App {
    let portfolio = Portfolio::new(
        &PortfolioConfig::default(),
        MemoryStorage::new().shared(),
        ContactService::unconfigured("Gustavo"),
        Some(true),
        now,
    );
    App::with_size(portfolio, WIDTH, HEIGHT)
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn screen_text(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Update and compose, returning the screen as text
fn frame(app: &mut App, now: Instant) -> String {
    app.update(now);
    screen_text(app.compose(now))
}

fn find(buf: &Buffer, symbol: &str) -> Option<(u16, u16)> {
    (0..buf.area.height)
        .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
        .find(|&(x, y)| buf[(x, y)].symbol() == symbol)
}

// ============================================================================
// Pages
// ============================================================================

#[test]
fn test_hero_page_renders() {
    let t0 = Instant::now();
    let mut app = app(t0);
    let text = frame(&mut app, t0);

    assert!(text.contains("Hi, I'm"));
    assert!(text.contains("Gustavo"));
    assert!(text.contains("Portfolio.tsx"));
    assert!(text.contains("[React]"));
    assert!(text.contains("j/k pages"));
}

#[test]
fn test_page_down_slides_to_projects() {
    let t0 = Instant::now();
    let mut app = app(t0);
    frame(&mut app, t0);

    app.handle_terminal_event(key(KeyCode::PageDown), t0);
    assert_eq!(app.portfolio().navigation().current_page(), PageId::Projects);

    // Mid-slide nothing is clickable on the pages, but the frame still draws
    let mid = t0 + Duration::from_millis(200);
    frame(&mut app, mid);

    let done = t0 + Duration::from_millis(450);
    let text = frame(&mut app, done);
    assert!(text.contains("Selected work"));
    assert!(text.contains("Featured"));
    assert!(!text.contains("Hi, I'm"));
}

#[test]
fn test_wheel_notches_respect_cooldown() {
    let t0 = Instant::now();
    let mut app = app(t0);
    frame(&mut app, t0);

    for ms in [0, 50, 100, 300] {
        app.handle_terminal_event(
            mouse(MouseEventKind::ScrollDown, 10, 10),
            t0 + Duration::from_millis(ms),
        );
    }
    assert_eq!(app.portfolio().navigation().current_page(), PageId::Projects);

    frame(&mut app, t0 + Duration::from_millis(650));
    app.handle_terminal_event(
        mouse(MouseEventKind::ScrollUp, 10, 10),
        t0 + Duration::from_millis(650),
    );
    assert_eq!(app.portfolio().navigation().current_page(), PageId::Hero);
}

#[test]
fn test_drag_up_is_a_swipe() {
    let t0 = Instant::now();
    let mut app = app(t0);
    frame(&mut app, t0);

    // Row 27 has no clickable region on the hero page
    app.handle_terminal_event(mouse(MouseEventKind::Down(MouseButton::Left), 40, 27), t0);
    app.handle_terminal_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 25), t0);
    assert_eq!(app.portfolio().navigation().current_page(), PageId::Hero);

    app.handle_terminal_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 23), t0);
    assert_eq!(app.portfolio().navigation().current_page(), PageId::Projects);

    // One swipe, one page: further travel does nothing
    app.handle_terminal_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 10), t0);
    app.handle_terminal_event(mouse(MouseEventKind::Up(MouseButton::Left), 40, 10), t0);
    assert_eq!(app.portfolio().navigation().current_page(), PageId::Projects);
}

#[test]
fn test_click_ends_a_lost_drag() {
    let t0 = Instant::now();
    let mut app = app(t0);
    frame(&mut app, t0);

    // The release of this drag never arrives
    app.handle_terminal_event(mouse(MouseEventKind::Down(MouseButton::Left), 40, 27), t0);

    let buf = app.compose(t0).clone();
    let (x, y) = find(&buf, "☾").expect("theme button");
    app.handle_terminal_event(mouse(MouseEventKind::Down(MouseButton::Left), x, y), t0);
    assert!(!app.portfolio().theme().is_dark());

    app.handle_terminal_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 20), t0);
    assert_eq!(app.portfolio().navigation().current_page(), PageId::Hero);
}

#[test]
fn test_page_dot_click_jumps() {
    let t0 = Instant::now();
    let mut app = app(t0);
    frame(&mut app, t0);

    // The third dot on the right edge is the contact page
    let buf = app.compose(t0).clone();
    let dots: Vec<(u16, u16)> = (0..HEIGHT)
        .flat_map(|y| (0..WIDTH).map(move |x| (x, y)))
        .filter(|&(x, y)| x >= WIDTH - 4 && matches!(buf[(x, y)].symbol(), "●" | "○"))
        .collect();
    assert_eq!(dots.len(), 3);
    let (x, y) = dots[2];

    app.handle_terminal_event(mouse(MouseEventKind::Down(MouseButton::Left), x, y), t0);
    assert_eq!(app.portfolio().navigation().current_page(), PageId::Contact);
}

// ============================================================================
// Theme
// ============================================================================

#[test]
fn test_theme_button_toggles() {
    let t0 = Instant::now();
    let mut app = app(t0);
    frame(&mut app, t0);
    assert!(app.portfolio().theme().is_dark());

    let buf = app.compose(t0).clone();
    let (x, y) = find(&buf, "☾").expect("theme button");
    app.handle_terminal_event(mouse(MouseEventKind::Down(MouseButton::Left), x, y), t0);
    assert!(!app.portfolio().theme().is_dark());

    // Mid-change the old background is on the left, the new on the right
    let mid = app.compose(t0 + Duration::from_millis(200));
    assert_eq!(mid[(0, HEIGHT / 2)].bg, DARK_BG);
    assert_eq!(mid[(WIDTH - 1, HEIGHT / 2)].bg, LIGHT_BG);

    let done = t0 + Duration::from_millis(400);
    app.update(done);
    let settled = app.compose(done);
    assert_eq!(settled[(0, HEIGHT / 2)].bg, LIGHT_BG);
    assert!(screen_text(settled).contains("Light"));
}

#[test]
fn test_t_key_is_typed_on_contact_page() {
    let t0 = Instant::now();
    let mut app = app(t0);
    app.handle_terminal_event(key(KeyCode::F(3)), t0);
    frame(&mut app, t0 + Duration::from_millis(450));

    app.handle_terminal_event(key(KeyCode::Char('t')), t0 + Duration::from_millis(450));
    assert!(app.portfolio().theme().is_dark());
    assert_eq!(app.portfolio().contact_form().value(ContactField::Name), "t");

    app.handle_terminal_event(ctrl('t'), t0 + Duration::from_millis(460));
    assert!(!app.portfolio().theme().is_dark());
}

// ============================================================================
// Contact
// ============================================================================

#[test]
fn test_contact_form_typing_and_validation() {
    let t0 = Instant::now();
    let mut app = app(t0);
    app.handle_terminal_event(key(KeyCode::F(3)), t0);
    let now = t0 + Duration::from_millis(450);
    frame(&mut app, now);

    for c in "Ada".chars() {
        app.handle_terminal_event(key(KeyCode::Char(c)), now);
    }
    app.handle_terminal_event(key(KeyCode::Tab), now);
    for c in "not-an-email".chars() {
        app.handle_terminal_event(key(KeyCode::Char(c)), now);
    }

    let text = frame(&mut app, now);
    assert!(text.contains("Ada"));
    assert!(text.contains("not-an-email"));
    assert!(text.contains("Send Message"));

    app.handle_terminal_event(ctrl('s'), now);
    assert!(!app.portfolio().is_sending());
    let text = frame(&mut app, now);
    assert!(text.contains("Message is required"));

    // Notices expire on their own
    let text = frame(&mut app, now + Duration::from_secs(6));
    assert!(!text.contains("Message is required"));
}

#[test]
fn test_clicking_a_field_focuses_it() {
    let t0 = Instant::now();
    let mut app = app(t0);
    app.handle_terminal_event(key(KeyCode::F(3)), t0);
    let now = t0 + Duration::from_millis(450);
    frame(&mut app, now);

    let buf = app.compose(now).clone();
    let text = screen_text(&buf);
    let row = text
        .lines()
        .position(|line| line.contains(" Message "))
        .expect("message field");
    let column = text.lines().nth(row).and_then(|l| l.find(" Message ")).unwrap_or(0);
    // Title row of the block; the row below is inside it
    let x = u16::try_from(text.lines().nth(row).unwrap()[..column].chars().count()).unwrap();
    let y = u16::try_from(row).unwrap() + 1;

    app.handle_terminal_event(mouse(MouseEventKind::Down(MouseButton::Left), x + 2, y), now);
    assert_eq!(app.portfolio().contact_form().focus(), ContactField::Message);
}

// ============================================================================
// Terminal
// ============================================================================

#[test]
fn test_tiny_terminal_and_resize() {
    let t0 = Instant::now();
    let portfolio = Portfolio::new(
        &PortfolioConfig::default(),
        MemoryStorage::new().shared(),
        ContactService::unconfigured("Gustavo"),
        None,
        t0,
    );
    let mut app = App::with_size(portfolio, 8, 3);
    let mut now = t0;
    for page in [PageId::Projects, PageId::Contact, PageId::Hero] {
        app.apply(SurfaceEvent::NavigateTo { page }.into(), now);
        app.compose(now + Duration::from_millis(100));
        now += Duration::from_secs(1);
        app.update(now);
        app.compose(now);
    }
    assert_eq!(app.portfolio().navigation().current_page(), PageId::Hero);

    app.handle_terminal_event(Event::Resize(60, 20), now);
    let buf = app.compose(now);
    assert_eq!((buf.area.width, buf.area.height), (60, 20));
}

#[test]
fn test_escape_quits() {
    let t0 = Instant::now();
    let mut app = app(t0);
    assert!(app.is_running());
    app.handle_terminal_event(key(KeyCode::Esc), t0);
    assert!(!app.is_running());
}

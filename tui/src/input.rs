//! Terminal Input Mapping
//!
//! Turns crossterm key and mouse events into [`Action`]s. The mapping is
//! page-aware (the contact page captures printable keys for its form) but
//! holds no state of its own: thresholds and cooldowns belong to the core,
//! so a wheel notch is reported as a raw delta and a left-button drag as a
//! touch sequence.
//!
//! | key                   | hero / projects        | contact               |
//! |-----------------------|------------------------|-----------------------|
//! | `PgDn` / `PgUp`       | advance / retreat      | advance / retreat     |
//! | `j` `k` `↓` `↑` Space | navigate (hero)        | field focus (`↓` `↑`) |
//! | `1` `2` `3`, `F1-F3`  | jump to page           | `F1-F3` only          |
//! | `t`, `Ctrl-T`         | toggle theme           | `Ctrl-T` only         |
//! | `Tab`                 | editor tab / category  | next field            |
//! | `Ctrl-S`              |                        | send message          |
//! | `q`, `Esc`, `Ctrl-C`  | quit                   | `Esc`, `Ctrl-C`       |

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use portfolio_core::{ContactField, EditorView, NavDirection, PageId, SurfaceEvent};

/// Wheel delta reported for one terminal scroll notch
///
/// Terminals only say "one notch"; this is what a browser reports for one.
pub const WHEEL_NOTCH: f32 = 100.0;

/// Pixels per terminal row when a drag is reported as touch movement
pub const ROW_PIXELS: f32 = 16.0;

/// What the app should do in response to input
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Forward to the portfolio
    Surface(SurfaceEvent),
    /// Validate and send the contact form
    SubmitContact,
    /// Leave the app
    Quit,
}

impl From<SurfaceEvent> for Action {
    fn from(event: SurfaceEvent) -> Self {
        Self::Surface(event)
    }
}

fn navigate(direction: NavDirection) -> Option<Action> {
    Some(SurfaceEvent::Navigate { direction }.into())
}

fn navigate_to(page: PageId) -> Option<Action> {
    Some(SurfaceEvent::NavigateTo { page }.into())
}

fn show_editor(view: EditorView) -> Option<Action> {
    Some(SurfaceEvent::ShowEditorView { view }.into())
}

/// Map a key press on `page`
///
/// `editor` is the hero's selected tab, used to cycle it with `Tab`.
pub fn map_key(key: KeyEvent, page: PageId, editor: EditorView) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Keys that mean the same thing on every page
    match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Char('c') if ctrl => return Some(Action::Quit),
        KeyCode::Char('t') if ctrl => return Some(SurfaceEvent::ToggleTheme.into()),
        KeyCode::PageDown => return navigate(NavDirection::Advance),
        KeyCode::PageUp => return navigate(NavDirection::Retreat),
        KeyCode::F(n @ 1..=3) => return navigate_to(PageId::from_index(usize::from(n - 1))),
        _ => {}
    }

    match page {
        PageId::Contact => map_contact_key(key, ctrl),
        PageId::Hero | PageId::Projects if ctrl => None,
        PageId::Hero => match key.code {
            KeyCode::Down | KeyCode::Char('j' | ' ') => navigate(NavDirection::Advance),
            KeyCode::Up | KeyCode::Char('k') => navigate(NavDirection::Retreat),
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => show_editor(editor.next()),
            KeyCode::Char('c') => show_editor(EditorView::Code),
            KeyCode::Char('d') => show_editor(EditorView::Design),
            code => map_common_key(code),
        },
        PageId::Projects => match key.code {
            KeyCode::Char(' ') => navigate(NavDirection::Advance),
            KeyCode::Down | KeyCode::Char('j') => {
                Some(SurfaceEvent::MoveProjectCursor { delta: 1 }.into())
            }
            KeyCode::Up | KeyCode::Char('k') => {
                Some(SurfaceEvent::MoveProjectCursor { delta: -1 }.into())
            }
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
                Some(SurfaceEvent::NextCategory.into())
            }
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
                Some(SurfaceEvent::PrevCategory.into())
            }
            code => map_common_key(code),
        },
    }
}

fn map_common_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('t') => Some(SurfaceEvent::ToggleTheme.into()),
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            navigate_to(PageId::from_index(index))
        }
        _ => None,
    }
}

fn map_contact_key(key: KeyEvent, ctrl: bool) -> Option<Action> {
    match key.code {
        KeyCode::Char('s') if ctrl => Some(Action::SubmitContact),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(ch) => Some(SurfaceEvent::ContactInput { ch }.into()),
        KeyCode::Backspace => Some(SurfaceEvent::ContactBackspace.into()),
        KeyCode::Tab | KeyCode::Down => Some(SurfaceEvent::ContactFocusNext.into()),
        KeyCode::BackTab | KeyCode::Up => Some(SurfaceEvent::ContactFocusPrev.into()),
        // Single-line fields drop the newline
        KeyCode::Enter => Some(SurfaceEvent::ContactInput { ch: '\n' }.into()),
        _ => None,
    }
}

/// Map a mouse event
///
/// A left press on a registered region triggers that region's action.
/// Anywhere else it starts a touch, so dragging the page behaves like a swipe.
pub fn map_mouse(mouse: MouseEvent, hits: &HitMap) -> Option<Action> {
    let y = f32::from(mouse.row) * ROW_PIXELS;
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(SurfaceEvent::Wheel { delta_y: WHEEL_NOTCH }.into()),
        MouseEventKind::ScrollUp => Some(SurfaceEvent::Wheel { delta_y: -WHEEL_NOTCH }.into()),
        MouseEventKind::Down(MouseButton::Left) => match hits.hit(mouse.column, mouse.row) {
            Some(action) => Some(action.clone()),
            None => Some(SurfaceEvent::TouchStart { y }.into()),
        },
        MouseEventKind::Drag(MouseButton::Left) => Some(SurfaceEvent::TouchMove { y }.into()),
        MouseEventKind::Up(MouseButton::Left) => Some(SurfaceEvent::TouchEnd.into()),
        _ => None,
    }
}

/// Clickable screen regions registered while rendering
///
/// Later registrations win, matching the paint order.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Action)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every region (start of a frame)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register a region
    pub fn push(&mut self, area: Rect, action: impl Into<Action>) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, action.into()));
        }
    }

    /// Action of the topmost region containing the point
    pub fn hit(&self, x: u16, y: u16) -> Option<&Action> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| {
                x >= area.x && x < area.right() && y >= area.y && y < area.bottom()
            })
            .map(|(_, action)| action)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Region action for focusing a form field
pub fn focus_field(field: ContactField) -> Action {
    SurfaceEvent::ContactFocus { field }.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        for page in PageId::ALL {
            assert_eq!(map_key(key(KeyCode::Esc), page, EditorView::Code), Some(Action::Quit));
            assert_eq!(map_key(ctrl('c'), page, EditorView::Code), Some(Action::Quit));
        }
        assert_eq!(
            map_key(key(KeyCode::Char('q')), PageId::Hero, EditorView::Code),
            Some(Action::Quit)
        );
        // On the contact page q is just a letter
        assert_eq!(
            map_key(key(KeyCode::Char('q')), PageId::Contact, EditorView::Code),
            Some(SurfaceEvent::ContactInput { ch: 'q' }.into())
        );
    }

    #[test]
    fn test_page_keys_work_everywhere() {
        for page in PageId::ALL {
            assert_eq!(
                map_key(key(KeyCode::PageDown), page, EditorView::Code),
                navigate(NavDirection::Advance)
            );
            assert_eq!(
                map_key(key(KeyCode::F(3)), page, EditorView::Code),
                navigate_to(PageId::Contact)
            );
            assert_eq!(
                map_key(ctrl('t'), page, EditorView::Code),
                Some(SurfaceEvent::ToggleTheme.into())
            );
        }
    }

    #[test]
    fn test_hero_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char('j')), PageId::Hero, EditorView::Code),
            navigate(NavDirection::Advance)
        );
        assert_eq!(
            map_key(key(KeyCode::Up), PageId::Hero, EditorView::Code),
            navigate(NavDirection::Retreat)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('2')), PageId::Hero, EditorView::Code),
            navigate_to(PageId::Projects)
        );
        assert_eq!(
            map_key(key(KeyCode::Tab), PageId::Hero, EditorView::Code),
            Some(SurfaceEvent::ShowEditorView { view: EditorView::Design }.into())
        );
        assert_eq!(
            map_key(key(KeyCode::Tab), PageId::Hero, EditorView::Design),
            Some(SurfaceEvent::ShowEditorView { view: EditorView::Code }.into())
        );
    }

    #[test]
    fn test_projects_keys() {
        assert_eq!(
            map_key(key(KeyCode::Down), PageId::Projects, EditorView::Code),
            Some(SurfaceEvent::MoveProjectCursor { delta: 1 }.into())
        );
        assert_eq!(
            map_key(key(KeyCode::Left), PageId::Projects, EditorView::Code),
            Some(SurfaceEvent::PrevCategory.into())
        );
        assert_eq!(
            map_key(key(KeyCode::Char('t')), PageId::Projects, EditorView::Code),
            Some(SurfaceEvent::ToggleTheme.into())
        );
    }

    #[test]
    fn test_keys_shared_by_hero_and_projects() {
        for page in [PageId::Hero, PageId::Projects] {
            let on_page = |code| map_key(key(code), page, EditorView::Code);
            assert_eq!(on_page(KeyCode::Char(' ')), navigate(NavDirection::Advance));
            assert_eq!(on_page(KeyCode::PageUp), navigate(NavDirection::Retreat));
            assert_eq!(on_page(KeyCode::Char('3')), navigate_to(PageId::Contact));
            assert_eq!(
                on_page(KeyCode::Char('t')),
                Some(SurfaceEvent::ToggleTheme.into())
            );
            assert_eq!(on_page(KeyCode::Char('q')), Some(Action::Quit));
        }
    }

    #[test]
    fn test_contact_keys() {
        let on_contact = |k| map_key(k, PageId::Contact, EditorView::Code);
        assert_eq!(on_contact(ctrl('s')), Some(Action::SubmitContact));
        assert_eq!(
            on_contact(key(KeyCode::Char('1'))),
            Some(SurfaceEvent::ContactInput { ch: '1' }.into())
        );
        assert_eq!(
            on_contact(key(KeyCode::Tab)),
            Some(SurfaceEvent::ContactFocusNext.into())
        );
        assert_eq!(
            on_contact(key(KeyCode::BackTab)),
            Some(SurfaceEvent::ContactFocusPrev.into())
        );
        assert_eq!(
            on_contact(key(KeyCode::Enter)),
            Some(SurfaceEvent::ContactInput { ch: '\n' }.into())
        );
        assert_eq!(
            on_contact(key(KeyCode::Char('t'))),
            Some(SurfaceEvent::ContactInput { ch: 't' }.into())
        );
        assert_eq!(
            on_contact(key(KeyCode::Down)),
            Some(SurfaceEvent::ContactFocusNext.into())
        );
        assert_eq!(on_contact(ctrl('x')), None);
    }

    #[test]
    fn test_wheel_notches() {
        let hits = HitMap::new();
        assert_eq!(
            map_mouse(mouse(MouseEventKind::ScrollDown, 0, 0), &hits),
            Some(SurfaceEvent::Wheel { delta_y: WHEEL_NOTCH }.into())
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::ScrollUp, 0, 0), &hits),
            Some(SurfaceEvent::Wheel { delta_y: -WHEEL_NOTCH }.into())
        );
    }

    #[test]
    fn test_drag_is_a_touch_sequence() {
        let hits = HitMap::new();
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 10), &hits),
            Some(SurfaceEvent::TouchStart { y: 160.0 }.into())
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 6), &hits),
            Some(SurfaceEvent::TouchMove { y: 96.0 }.into())
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, 6), &hits),
            Some(SurfaceEvent::TouchEnd.into())
        );
    }

    #[test]
    fn test_press_on_region_triggers_action() {
        let mut hits = HitMap::new();
        hits.push(Rect::new(10, 0, 8, 1), SurfaceEvent::ToggleTheme);
        hits.push(Rect::new(12, 0, 2, 1), focus_field(ContactField::Email));

        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 0), &hits),
            Some(SurfaceEvent::ToggleTheme.into())
        );
        // Later registration is on top
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 12, 0), &hits),
            Some(focus_field(ContactField::Email))
        );
        assert_eq!(hits.hit(18, 0), None);

        hits.clear();
        assert!(hits.is_empty());
    }
}

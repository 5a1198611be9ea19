//! Surface Events
//!
//! Events sent from a front end to the [`Portfolio`](crate::Portfolio).
//!
//! Surfaces are "dumb" renderers: they report what the user did (a wheel
//! delta, a finger position, a key that maps to an action) and never decide
//! what it means. Thresholds, cooldowns and state live in the core.

use crate::contact::ContactField;
use crate::editor::EditorView;
use crate::notices::NoticeId;
use crate::pages::{NavDirection, PageId};
use crate::projects::CategoryFilter;

/// Events from a surface to the portfolio
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceEvent {
    // ============================================
    // Gesture Events
    // ============================================
    /// Mouse wheel / trackpad scroll
    Wheel {
        /// Vertical delta, positive = scroll down
        delta_y: f32,
    },

    /// Finger (or pointer) pressed
    TouchStart {
        /// Vertical position in pixels
        y: f32,
    },

    /// Finger moved while pressed
    TouchMove {
        /// Vertical position in pixels
        y: f32,
    },

    /// Finger lifted
    TouchEnd,

    // ============================================
    // Direct Navigation
    // ============================================
    /// Step one page (keyboard, nav arrows)
    Navigate {
        /// Which way
        direction: NavDirection,
    },

    /// Jump to a page (page dots, number keys)
    NavigateTo {
        /// Target page
        page: PageId,
    },

    /// Theme button pressed
    ToggleTheme,

    // ============================================
    // Projects Page
    // ============================================
    /// Category bar entry chosen
    SelectCategory {
        /// The chosen filter
        filter: CategoryFilter,
    },

    /// Next entry in the category bar
    NextCategory,

    /// Previous entry in the category bar
    PrevCategory,

    /// Move the project highlight
    MoveProjectCursor {
        /// Rows to move, negative = up
        delta: i32,
    },

    // ============================================
    // Hero Page
    // ============================================
    /// Editor tab chosen
    ShowEditorView {
        /// The chosen tab
        view: EditorView,
    },

    // ============================================
    // Contact Page
    // ============================================
    /// Character typed into the focused field
    ContactInput {
        /// The character
        ch: char,
    },

    /// Backspace in the focused field
    ContactBackspace,

    /// Focus a specific field (mouse click)
    ContactFocus {
        /// The field
        field: ContactField,
    },

    /// Focus the next field
    ContactFocusNext,

    /// Focus the previous field
    ContactFocusPrev,

    /// Close a notice early
    DismissNotice {
        /// Which notice
        id: NoticeId,
    },
}

impl SurfaceEvent {
    /// Whether this event is a continuous gesture signal
    #[must_use]
    pub fn is_gesture(&self) -> bool {
        matches!(
            self,
            Self::Wheel { .. } | Self::TouchStart { .. } | Self::TouchMove { .. } | Self::TouchEnd
        )
    }
}

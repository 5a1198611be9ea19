//! Theme Controller
//!
//! Single source of truth for dark/light mode.
//!
//! The initial theme is resolved once, when the controller is built:
//! persisted value, then the OS-level preference, then dark. Whatever was
//! chosen is written back so the next session starts without a flash of the
//! wrong theme.

use std::time::{Duration, Instant};

use crate::animation::ThemeTransition;
use crate::storage::{persist, SharedStorage, THEME_KEY};
use crate::timer::DeferredTimer;

/// Default cross-fade length
pub const DEFAULT_THEME_TRANSITION: Duration = Duration::from_millis(400);

/// Where the initial theme came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeOrigin {
    /// Restored from storage
    Persisted,
    /// Derived from the OS/terminal preference
    Preference,
    /// Nothing known, dark by default
    Default,
}

/// Observable theme state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    /// Dark mode on?
    pub is_dark: bool,
    /// Whether a cross-fade is in flight
    pub transitioning: bool,
}

/// Owner of [`ThemeState`]
pub struct ThemeController {
    state: ThemeState,
    origin: ThemeOrigin,
    transition_duration: Duration,
    storage: SharedStorage,
    clear_timer: DeferredTimer,
    transition: Option<ThemeTransition>,
}

fn theme_name(is_dark: bool) -> &'static str {
    if is_dark {
        "dark"
    } else {
        "light"
    }
}

impl ThemeController {
    /// Resolve the initial theme and build the controller
    ///
    /// `prefers_dark` is the OS-level signal (`None` when unavailable); it is
    /// consulted only when nothing is persisted.
    #[must_use]
    pub fn new(
        storage: SharedStorage,
        prefers_dark: Option<bool>,
        transition_duration: Duration,
    ) -> Self {
        let persisted = storage.get(THEME_KEY).and_then(|v| match v.as_str() {
            "dark" => Some(true),
            "light" => Some(false),
            other => {
                tracing::warn!(value = other, "Ignoring persisted theme");
                None
            }
        });

        let (is_dark, origin) = match (persisted, prefers_dark) {
            (Some(dark), _) => (dark, ThemeOrigin::Persisted),
            (None, Some(dark)) => (dark, ThemeOrigin::Preference),
            (None, None) => (true, ThemeOrigin::Default),
        };

        if origin != ThemeOrigin::Persisted {
            persist(storage.as_ref(), THEME_KEY, theme_name(is_dark));
        }
        tracing::debug!(theme = theme_name(is_dark), ?origin, "Theme initialized");

        Self {
            state: ThemeState {
                is_dark,
                transitioning: false,
            },
            origin,
            transition_duration,
            storage,
            clear_timer: DeferredTimer::new(),
            transition: None,
        }
    }

    /// Flip between dark and light
    ///
    /// Returns `false` (and does nothing) while a cross-fade is in flight.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.state.transitioning {
            tracing::trace!("Theme toggle dropped");
            return false;
        }

        let from_dark = self.state.is_dark;
        self.state.is_dark = !from_dark;
        self.state.transitioning = true;
        self.transition = Some(ThemeTransition {
            from_dark,
            to_dark: self.state.is_dark,
            started: now,
            duration: self.transition_duration,
        });

        if self.clear_timer.schedule(now, self.transition_duration) {
            tracing::debug!("Replaced pending theme timer");
        }
        persist(self.storage.as_ref(), THEME_KEY, theme_name(self.state.is_dark));

        tracing::debug!(theme = theme_name(self.state.is_dark), "Theme toggled");
        true
    }

    /// Dispatch the deferred "cross-fade finished" callback when due
    pub fn update(&mut self, now: Instant) {
        if self.clear_timer.poll(now) {
            self.state.transitioning = false;
            self.transition = None;
        }
    }

    /// Dark mode on?
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.state.is_dark
    }

    /// Whether a cross-fade is in flight
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.state.transitioning
    }

    /// Snapshot of the full state
    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.state
    }

    /// Where the initial theme came from
    #[must_use]
    pub fn origin(&self) -> ThemeOrigin {
        self.origin
    }

    /// The cross-fade in flight, for the presentation layer
    #[must_use]
    pub fn transition(&self) -> Option<&ThemeTransition> {
        self.transition.as_ref()
    }

    /// Pending clear deadline (at most one ever exists)
    #[must_use]
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.clear_timer.deadline()
    }
}

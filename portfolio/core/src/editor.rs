//! Hero Editor Panel
//!
//! The hero page shows a mock editor that alternates between a code view and
//! a design view. Each switch briefly hides the panel, then reveals the next
//! view. Picking a tab by hand switches immediately and restarts the rotation.

use std::time::{Duration, Instant};

use crate::timer::DeferredTimer;

/// Default time between automatic switches
pub const DEFAULT_ROTATE_INTERVAL: Duration = Duration::from_secs(5);

/// Default hidden gap during a switch
pub const DEFAULT_SWITCH_DURATION: Duration = Duration::from_millis(300);

/// The two editor tabs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EditorView {
    /// Source listing
    #[default]
    Code,
    /// Layout mock-up
    Design,
}

impl EditorView {
    /// Tab order
    pub const ALL: [EditorView; 2] = [EditorView::Code, EditorView::Design];

    /// Tab label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            EditorView::Code => "Code",
            EditorView::Design => "Design",
        }
    }

    /// File name shown in the title bar
    #[must_use]
    pub fn filename(self) -> &'static str {
        match self {
            EditorView::Code => "Portfolio.tsx",
            EditorView::Design => "Portfolio.fig",
        }
    }

    /// The tab after this one
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            EditorView::Code => EditorView::Design,
            EditorView::Design => EditorView::Code,
        }
    }
}

/// Rotating code/design panel
#[derive(Debug)]
pub struct EditorShowcase {
    current: EditorView,
    pending: Option<EditorView>,
    rotate_interval: Duration,
    switch_duration: Duration,
    rotate_timer: DeferredTimer,
    reveal_timer: DeferredTimer,
}

impl EditorShowcase {
    /// Start on the code view; the first rotation is due one interval after `now`
    #[must_use]
    pub fn new(now: Instant, rotate_interval: Duration, switch_duration: Duration) -> Self {
        let mut rotate_timer = DeferredTimer::new();
        rotate_timer.schedule(now, rotate_interval);
        Self {
            current: EditorView::Code,
            pending: None,
            rotate_interval,
            switch_duration,
            rotate_timer,
            reveal_timer: DeferredTimer::new(),
        }
    }

    /// Switch to `view` by hand and restart the rotation interval
    ///
    /// Returns `false` if `view` is already showing.
    pub fn show(&mut self, view: EditorView, now: Instant) -> bool {
        self.rotate_timer.schedule(now, self.rotate_interval);
        if self.pending.is_none() && self.current == view {
            return false;
        }
        self.begin_switch(view, now);
        true
    }

    /// Fire due rotation and reveal timers
    pub fn update(&mut self, now: Instant) {
        if self.reveal_timer.poll(now) {
            if let Some(view) = self.pending.take() {
                self.current = view;
            }
        }
        if self.rotate_timer.poll(now) {
            let next = self.pending.unwrap_or(self.current).next();
            self.begin_switch(next, now);
            self.rotate_timer.schedule(now, self.rotate_interval);
        }
    }

    /// The visible view, `None` while the panel is hidden mid-switch
    #[must_use]
    pub fn active_view(&self) -> Option<EditorView> {
        match self.pending {
            Some(_) => None,
            None => Some(self.current),
        }
    }

    /// The tab that is (or is about to be) selected
    #[must_use]
    pub fn selected_view(&self) -> EditorView {
        self.pending.unwrap_or(self.current)
    }

    /// Whether the panel is hidden mid-switch
    #[must_use]
    pub fn is_switching(&self) -> bool {
        self.pending.is_some()
    }

    /// When the next automatic switch is due
    #[must_use]
    pub fn next_rotation(&self) -> Option<Instant> {
        self.rotate_timer.deadline()
    }

    fn begin_switch(&mut self, view: EditorView, now: Instant) {
        self.pending = Some(view);
        self.reveal_timer.schedule(now, self.switch_duration);
        tracing::trace!(view = view.label(), "Editor switching");
    }
}

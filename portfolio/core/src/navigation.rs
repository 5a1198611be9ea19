//! Page Navigation Controller
//!
//! Single source of truth for which page is visible and whether a page
//! transition is in flight.
//!
//! # Guarding
//!
//! A navigation request is accepted only when
//! - no transition is in flight, and
//! - at least `cooldown` has passed since the previous accepted navigation.
//!
//! Anything else is dropped, never queued. Rapid scrolling therefore
//! collapses to at most one page change per cooldown window.
//!
//! # Commit model
//!
//! `current` flips as soon as a request is accepted; the outgoing page is
//! kept in the [`PageTransition`] record so the surface can animate between
//! the two. Exactly one page is authoritative at any instant.

use std::time::{Duration, Instant};

use crate::animation::PageTransition;
use crate::pages::{NavDirection, PageId};
use crate::storage::{persist, SharedStorage, CURRENT_PAGE_KEY};
use crate::timer::DeferredTimer;

/// Default minimum time between accepted navigations
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(600);

/// Default length of the page slide
pub const DEFAULT_PAGE_TRANSITION: Duration = Duration::from_millis(400);

/// Navigation timing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationConfig {
    /// Minimum time between two accepted navigations
    pub cooldown: Duration,
    /// How long `transitioning` stays set after an accepted navigation
    pub transition_duration: Duration,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            cooldown: DEFAULT_COOLDOWN,
            transition_duration: DEFAULT_PAGE_TRANSITION,
        }
    }
}

/// Observable navigation state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    /// The authoritative page
    pub current: PageId,
    /// Direction of the last accepted navigation (`None` before the first)
    pub direction: Option<NavDirection>,
    /// Whether a transition is in flight
    pub transitioning: bool,
}

/// Owner of [`NavigationState`]
pub struct PageNavigationController {
    state: NavigationState,
    config: NavigationConfig,
    storage: SharedStorage,
    clear_timer: DeferredTimer,
    last_accepted: Option<Instant>,
    transition: Option<PageTransition>,
}

impl PageNavigationController {
    /// Create the controller, restoring the persisted page if there is one
    ///
    /// Unknown stored values fall back to [`PageId::Hero`].
    #[must_use]
    pub fn new(storage: SharedStorage, config: NavigationConfig) -> Self {
        let current = match storage.get(CURRENT_PAGE_KEY) {
            Some(stored) => stored.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring persisted page");
                PageId::Hero
            }),
            None => PageId::Hero,
        };
        tracing::debug!(page = %current, "Navigation initialized");

        Self {
            state: NavigationState {
                current,
                direction: None,
                transitioning: false,
            },
            config,
            storage,
            clear_timer: DeferredTimer::new(),
            last_accepted: None,
            transition: None,
        }
    }

    /// Step once in `direction`
    ///
    /// Returns `true` if the request was accepted.
    pub fn navigate(&mut self, direction: NavDirection, now: Instant) -> bool {
        if !self.can_navigate(now) {
            tracing::trace!(?direction, "Navigation dropped");
            return false;
        }
        let next = self.state.current.successor(direction);
        self.commit(next, direction, now);
        true
    }

    /// Jump straight to `target`, travelling the shorter way round
    ///
    /// Jumping to the current page is a no-op and never starts a transition.
    pub fn navigate_to(&mut self, target: PageId, now: Instant) -> bool {
        let Some(direction) = self.state.current.shortest_direction_to(target) else {
            return false;
        };
        if !self.can_navigate(now) {
            tracing::trace!(%target, "Navigation dropped");
            return false;
        }
        self.commit(target, direction, now);
        true
    }

    /// Dispatch the deferred "transition finished" callback when due
    pub fn update(&mut self, now: Instant) {
        if self.clear_timer.poll(now) {
            self.state.transitioning = false;
            self.transition = None;
        }
    }

    /// Whether a request made at `now` would be accepted
    #[must_use]
    pub fn can_navigate(&self, now: Instant) -> bool {
        if self.state.transitioning {
            return false;
        }
        match self.last_accepted {
            Some(last) => now.saturating_duration_since(last) >= self.config.cooldown,
            None => true,
        }
    }

    /// The authoritative page
    #[must_use]
    pub fn current_page(&self) -> PageId {
        self.state.current
    }

    /// Whether a transition is in flight
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.state.transitioning
    }

    /// Direction of the last accepted navigation
    #[must_use]
    pub fn direction(&self) -> Option<NavDirection> {
        self.state.direction
    }

    /// Snapshot of the full state
    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// The transition in flight, for the presentation layer
    #[must_use]
    pub fn transition(&self) -> Option<&PageTransition> {
        self.transition.as_ref()
    }

    /// Active timing configuration
    #[must_use]
    pub fn config(&self) -> NavigationConfig {
        self.config
    }

    fn commit(&mut self, next: PageId, direction: NavDirection, now: Instant) {
        let from = self.state.current;
        self.state = NavigationState {
            current: next,
            direction: Some(direction),
            transitioning: true,
        };
        self.last_accepted = Some(now);
        self.transition = Some(PageTransition {
            from,
            to: next,
            direction,
            started: now,
            duration: self.config.transition_duration,
        });
        self.clear_timer.schedule(now, self.config.transition_duration);
        persist(self.storage.as_ref(), CURRENT_PAGE_KEY, next.as_str());

        tracing::debug!(%from, to = %next, ?direction, "Navigated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FailingStorage, MemoryStorage, Storage};
    use std::sync::Arc;

    const SETTLE: Duration = Duration::from_millis(700);

    fn controller() -> (PageNavigationController, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let nav = PageNavigationController::new(storage.clone(), NavigationConfig::default());
        (nav, storage)
    }

    #[test]
    fn test_starts_on_hero() {
        let (nav, _) = controller();
        assert_eq!(nav.current_page(), PageId::Hero);
        assert_eq!(nav.direction(), None);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn test_restores_persisted_page() {
        let storage = MemoryStorage::with_entries([(CURRENT_PAGE_KEY, "contact")]).shared();
        let nav = PageNavigationController::new(storage, NavigationConfig::default());
        assert_eq!(nav.current_page(), PageId::Contact);
    }

    #[test]
    fn test_garbage_persisted_page_falls_back() {
        let storage = MemoryStorage::with_entries([(CURRENT_PAGE_KEY, "blog")]).shared();
        let nav = PageNavigationController::new(storage, NavigationConfig::default());
        assert_eq!(nav.current_page(), PageId::Hero);
    }

    #[test]
    fn test_full_cycle_with_settling() {
        let (mut nav, storage) = controller();
        let mut now = Instant::now();

        for expected in [PageId::Projects, PageId::Contact, PageId::Hero] {
            assert!(nav.navigate(NavDirection::Advance, now));
            now += SETTLE;
            nav.update(now);
            assert_eq!(nav.current_page(), expected);
            assert!(!nav.is_transitioning());
            assert_eq!(storage.get(CURRENT_PAGE_KEY).as_deref(), Some(expected.as_str()));
        }
    }

    #[test]
    fn test_burst_collapses_to_one_transition() {
        let (mut nav, _) = controller();
        let t0 = Instant::now();

        let accepted = (0..5)
            .filter(|i| nav.navigate(NavDirection::Advance, t0 + Duration::from_millis(i * 20)))
            .count();

        assert_eq!(accepted, 1);
        assert_eq!(nav.current_page(), PageId::Projects);
    }

    #[test]
    fn test_cooldown_outlasts_transition() {
        let (mut nav, _) = controller();
        let t0 = Instant::now();
        assert!(nav.navigate(NavDirection::Advance, t0));

        // Transition is over, but the cooldown still holds
        let t1 = t0 + Duration::from_millis(450);
        nav.update(t1);
        assert!(!nav.is_transitioning());
        assert!(!nav.navigate(NavDirection::Advance, t1));

        let t2 = t0 + DEFAULT_COOLDOWN;
        assert!(nav.navigate(NavDirection::Advance, t2));
        assert_eq!(nav.current_page(), PageId::Contact);
    }

    #[test]
    fn test_rejected_while_transitioning_even_after_cooldown() {
        let config = NavigationConfig {
            cooldown: Duration::from_millis(100),
            transition_duration: Duration::from_millis(500),
        };
        let mut nav = PageNavigationController::new(MemoryStorage::new().shared(), config);
        let t0 = Instant::now();
        assert!(nav.navigate(NavDirection::Retreat, t0));

        let t1 = t0 + Duration::from_millis(200);
        nav.update(t1);
        assert!(nav.is_transitioning());
        assert!(!nav.navigate(NavDirection::Retreat, t1));
        assert_eq!(nav.current_page(), PageId::Contact);
    }

    #[test]
    fn test_navigate_to_current_is_noop() {
        let (mut nav, _) = controller();
        let now = Instant::now();
        assert!(!nav.navigate_to(PageId::Hero, now));
        assert!(!nav.is_transitioning());
        assert!(nav.transition().is_none());

        // Also a no-op while transitioning
        assert!(nav.navigate(NavDirection::Advance, now));
        assert!(!nav.navigate_to(PageId::Projects, now));
    }

    #[test]
    fn test_navigate_to_picks_shorter_direction() {
        let (mut nav, _) = controller();
        let now = Instant::now();
        assert!(nav.navigate_to(PageId::Contact, now));
        assert_eq!(nav.current_page(), PageId::Contact);
        assert_eq!(nav.direction(), Some(NavDirection::Retreat));

        let later = now + SETTLE;
        nav.update(later);
        assert!(nav.navigate_to(PageId::Hero, later));
        assert_eq!(nav.direction(), Some(NavDirection::Advance));
    }

    #[test]
    fn test_transition_record() {
        let (mut nav, _) = controller();
        let t0 = Instant::now();
        nav.navigate(NavDirection::Advance, t0);

        let tr = nav.transition().copied().unwrap();
        assert_eq!(tr.from, PageId::Hero);
        assert_eq!(tr.to, PageId::Projects);
        assert_eq!(tr.direction, NavDirection::Advance);
        assert_eq!(tr.duration, DEFAULT_PAGE_TRANSITION);

        nav.update(t0 + DEFAULT_PAGE_TRANSITION);
        assert!(nav.transition().is_none());
    }

    #[test]
    fn test_write_failure_keeps_navigation() {
        let storage = FailingStorage::with_entries([(CURRENT_PAGE_KEY, "projects")]).shared();
        let mut nav = PageNavigationController::new(storage.clone(), NavigationConfig::default());
        assert_eq!(nav.current_page(), PageId::Projects);

        let t0 = Instant::now();
        assert!(nav.navigate(NavDirection::Advance, t0));
        assert_eq!(nav.current_page(), PageId::Contact);
        assert!(nav.is_transitioning());
        assert_eq!(storage.get(CURRENT_PAGE_KEY).as_deref(), Some("projects"));

        nav.update(t0 + SETTLE);
        assert!(nav.navigate_to(PageId::Hero, t0 + SETTLE));
        assert_eq!(nav.current_page(), PageId::Hero);
    }
}

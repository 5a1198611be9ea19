//! Input Gesture Router
//!
//! Converts continuous wheel and touch signals into discrete navigation
//! intents and forwards them to the [`PageNavigationController`].
//!
//! - Wheel: per event, no accumulation. `|deltaY|` below the threshold is
//!   trackpad noise and ignored; the sign picks the direction.
//! - Touch: the start position is recorded on touch-start. The first move
//!   that travels at least `min_swipe_distance` emits one intent; the rest of
//!   that touch sequence is ignored until touch-end.
//!
//! The cooldown lives in the controller, not here.

use std::time::Instant;

use crate::navigation::PageNavigationController;
use crate::pages::NavDirection;

/// Default wheel noise threshold (units of `deltaY`)
pub const DEFAULT_WHEEL_THRESHOLD: f32 = 30.0;

/// Default minimum swipe distance (pixels)
pub const DEFAULT_MIN_SWIPE_DISTANCE: f32 = 50.0;

/// Gesture thresholds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Minimum `|deltaY|` for a wheel event to count
    pub wheel_threshold: f32,
    /// Minimum vertical travel for a swipe to count
    pub min_swipe_distance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            wheel_threshold: DEFAULT_WHEEL_THRESHOLD,
            min_swipe_distance: DEFAULT_MIN_SWIPE_DISTANCE,
        }
    }
}

/// State of the current touch sequence
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum TouchState {
    /// No finger down
    #[default]
    Idle,
    /// Finger down at `start_y`, nothing emitted yet
    Tracking { start_y: f32 },
    /// This sequence already emitted its intent
    Spent,
}

/// Wheel/touch → navigation intent router
#[derive(Clone, Debug, Default)]
pub struct GestureRouter {
    config: GestureConfig,
    touch: TouchState,
}

impl GestureRouter {
    /// Create a router with the given thresholds
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            touch: TouchState::Idle,
        }
    }

    /// Direction for a wheel delta, if it clears the threshold
    #[must_use]
    pub fn wheel_intent(&self, delta_y: f32) -> Option<NavDirection> {
        if !delta_y.is_finite() || delta_y.abs() < self.config.wheel_threshold || delta_y == 0.0 {
            return None;
        }
        Some(if delta_y > 0.0 {
            NavDirection::Advance
        } else {
            NavDirection::Retreat
        })
    }

    /// Handle a wheel event
    ///
    /// Returns `true` if a navigation was accepted.
    pub fn on_wheel(
        &mut self,
        delta_y: f32,
        nav: &mut PageNavigationController,
        now: Instant,
    ) -> bool {
        match self.wheel_intent(delta_y) {
            Some(direction) => nav.navigate(direction, now),
            None => {
                tracing::trace!(delta_y, "Wheel below threshold");
                false
            }
        }
    }

    /// Finger down at vertical position `y`
    pub fn on_touch_start(&mut self, y: f32) {
        self.touch = if y.is_finite() {
            TouchState::Tracking { start_y: y }
        } else {
            TouchState::Idle
        };
    }

    /// Finger moved to vertical position `y`
    ///
    /// Returns `true` if a navigation was accepted.
    pub fn on_touch_move(
        &mut self,
        y: f32,
        nav: &mut PageNavigationController,
        now: Instant,
    ) -> bool {
        let TouchState::Tracking { start_y } = self.touch else {
            return false;
        };
        if !y.is_finite() {
            return false;
        }

        // Finger moving up (positive distance) scrolls content forward
        let distance = start_y - y;
        if distance == 0.0 || distance.abs() < self.config.min_swipe_distance {
            return false;
        }

        self.touch = TouchState::Spent;
        let direction = if distance > 0.0 {
            NavDirection::Advance
        } else {
            NavDirection::Retreat
        };
        nav.navigate(direction, now)
    }

    /// Finger lifted
    pub fn on_touch_end(&mut self) {
        self.touch = TouchState::Idle;
    }

    /// Whether a touch sequence is being tracked
    #[must_use]
    pub fn is_tracking_touch(&self) -> bool {
        matches!(self.touch, TouchState::Tracking { .. })
    }

    /// Active thresholds
    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationConfig;
    use crate::pages::PageId;
    use crate::storage::MemoryStorage;
    use std::time::Duration;

    fn setup() -> (GestureRouter, PageNavigationController) {
        (
            GestureRouter::new(GestureConfig::default()),
            PageNavigationController::new(
                MemoryStorage::new().shared(),
                NavigationConfig::default(),
            ),
        )
    }

    #[test]
    fn test_small_wheel_delta_ignored() {
        let (mut router, mut nav) = setup();
        assert!(!router.on_wheel(5.0, &mut nav, Instant::now()));
        assert_eq!(nav.current_page(), PageId::Hero);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn test_large_positive_wheel_advances_once() {
        let (mut router, mut nav) = setup();
        assert!(router.on_wheel(120.0, &mut nav, Instant::now()));
        assert_eq!(nav.current_page(), PageId::Projects);
        assert_eq!(nav.direction(), Some(NavDirection::Advance));
    }

    #[test]
    fn test_negative_wheel_retreats() {
        let (mut router, mut nav) = setup();
        assert!(router.on_wheel(-100.0, &mut nav, Instant::now()));
        assert_eq!(nav.current_page(), PageId::Contact);
    }

    #[test]
    fn test_wheel_edge_values() {
        let (router, _) = setup();
        assert_eq!(router.wheel_intent(29.9), None);
        assert_eq!(router.wheel_intent(30.0), Some(NavDirection::Advance));
        assert_eq!(router.wheel_intent(-30.0), Some(NavDirection::Retreat));
        assert_eq!(router.wheel_intent(f32::NAN), None);
        assert_eq!(router.wheel_intent(f32::INFINITY), None);
    }

    #[test]
    fn test_swipe_emits_once_per_sequence() {
        let (mut router, mut nav) = setup();
        let t0 = Instant::now();

        router.on_touch_start(400.0);
        assert!(!router.on_touch_move(380.0, &mut nav, t0));
        assert!(router.on_touch_move(340.0, &mut nav, t0));
        assert_eq!(nav.current_page(), PageId::Projects);

        // Far past cooldown, but the same finger is spent
        let later = t0 + Duration::from_secs(2);
        nav.update(later);
        assert!(!router.on_touch_move(100.0, &mut nav, later));
        assert_eq!(nav.current_page(), PageId::Projects);

        router.on_touch_end();
        router.on_touch_start(100.0);
        assert!(router.on_touch_move(200.0, &mut nav, later));
        assert_eq!(nav.current_page(), PageId::Hero);
    }

    #[test]
    fn test_move_without_start_ignored() {
        let (mut router, mut nav) = setup();
        assert!(!router.on_touch_move(0.0, &mut nav, Instant::now()));
        router.on_touch_start(10.0);
        router.on_touch_end();
        assert!(!router.on_touch_move(500.0, &mut nav, Instant::now()));
        assert_eq!(nav.current_page(), PageId::Hero);
    }

    #[test]
    fn test_zero_length_swipe_ignored() {
        let (mut router, mut nav) = setup();
        router.on_touch_start(250.0);
        assert!(!router.on_touch_move(250.0, &mut nav, Instant::now()));
        assert!(router.is_tracking_touch());
    }
}

//! Animation Records - Surface-Agnostic Transition Descriptions
//!
//! The controllers only decide *that* a page or theme change happened and
//! for how long it is "in flight". This module describes those changes in a
//! way any surface can play back: the terminal slides rows, a GUI could run
//! real tweens. The playback engine itself is not part of the core.
//!
//! ```text
//! PageNavigationController ─▶ PageTransition  ─┐
//!                                              ├─▶ surface samples Tweens per frame
//! ThemeController          ─▶ ThemeTransition ─┘
//! ```

mod timing;

pub use timing::{EasingFunction, Tween};

use std::time::{Duration, Instant};

use crate::pages::{NavDirection, PageId};

/// A page change in flight
///
/// Both `from` and `to` must be presentable until [`PageTransition::is_finished`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageTransition {
    /// Page being left
    pub from: PageId,
    /// Page being entered (already current)
    pub to: PageId,
    /// Direction of travel, decides which way content slides
    pub direction: NavDirection,
    /// Start instant
    pub started: Instant,
    /// Length of the visual transition
    pub duration: Duration,
}

impl PageTransition {
    /// Exit/enter curve for page slides
    pub const EASING: EasingFunction = EasingFunction::Ease;

    /// Tween driving the slide
    #[must_use]
    pub fn tween(&self) -> Tween {
        Tween::new(self.started, self.duration, Self::EASING)
    }

    /// Eased progress in `[0, 1]`
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        self.tween().progress(now)
    }

    /// Whether the slide has completed
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.tween().is_finished(now)
    }

    /// Vertical offsets (outgoing, incoming) for a viewport `height` units tall
    ///
    /// Advancing pushes the old page up and brings the new one from below;
    /// retreating is the mirror image.
    #[must_use]
    pub fn offsets(&self, now: Instant, height: f32) -> (f32, f32) {
        let p = self.progress(now);
        let sign = self.direction.sign() as f32;
        let outgoing = -sign * height * p;
        let incoming = sign * height * (1.0 - p);
        (outgoing, incoming)
    }
}

/// A theme change in flight
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeTransition {
    /// Theme being left
    pub from_dark: bool,
    /// Theme being entered (already current)
    pub to_dark: bool,
    /// Start instant
    pub started: Instant,
    /// Length of the cross-fade
    pub duration: Duration,
}

impl ThemeTransition {
    /// Cross-fade curve
    pub const EASING: EasingFunction = EasingFunction::Standard;

    /// Tween driving the cross-fade
    #[must_use]
    pub fn tween(&self) -> Tween {
        Tween::new(self.started, self.duration, Self::EASING)
    }

    /// Eased progress in `[0, 1]`
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        self.tween().progress(now)
    }

    /// Whether the cross-fade has completed
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.tween().is_finished(now)
    }

    /// Horizontal slide for a viewport `width` units wide: (outgoing, incoming)
    ///
    /// The old theme leaves to the left while the new one arrives from the right.
    #[must_use]
    pub fn offsets(&self, now: Instant, width: f32) -> (f32, f32) {
        let p = self.progress(now);
        (-width * p, width * (1.0 - p))
    }
}

/// A number that counts up from zero to its target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    /// Final value
    pub end: u32,
    tween: Tween,
}

impl CountUp {
    /// Start counting at `started`, reaching `end` after `duration`
    #[must_use]
    pub fn new(end: u32, started: Instant, duration: Duration) -> Self {
        Self {
            end,
            tween: Tween::new(started, duration, EasingFunction::EaseOutQuad),
        }
    }

    /// Value to display at `now` (snapped to whole numbers)
    #[must_use]
    pub fn value(&self, now: Instant) -> u32 {
        let v = self.tween.lerp(now, 0.0, self.end as f32);
        (v.round() as u32).min(self.end)
    }
}

//! Easing and Tween Timing
//!
//! Frame-rate independent progress curves. A surface samples a [`Tween`]
//! with the frame's `Instant` and gets an eased fraction in `[0, 1]`.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Easing functions for smooth animation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
pub enum EasingFunction {
    /// No easing (constant speed)
    #[default]
    Linear,

    /// Quadratic ease in and out (`power2.inOut`)
    EaseInOutQuad,

    /// Quadratic ease out (`power2.out`)
    EaseOutQuad,

    /// Cubic ease out (`power3.out`)
    EaseOutCubic,

    /// Sine ease in and out (`sine.inOut`), used for floating decorations
    EaseInOutSine,

    /// CSS `ease`: cubic-bezier(0.25, 0.1, 0.25, 1.0)
    Ease,

    /// Material standard curve: cubic-bezier(0.4, 0.0, 0.2, 1.0)
    Standard,

    /// Arbitrary CSS-style cubic bézier with control points (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOutSine => -((std::f32::consts::PI * t).cos() - 1.0) / 2.0,
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Self::Standard => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

/// Evaluate a cubic bézier timing curve at time fraction `x`
///
/// The curve runs from (0,0) to (1,1); x1 and x2 must lie in `[0, 1]` so the
/// curve is a function of x. Solves for the curve parameter with a few
/// Newton steps, falling back to bisection.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let x1 = x1.clamp(0.0, 1.0);
    let x2 = x2.clamp(0.0, 1.0);

    // B(s) = 3(1-s)^2 s p1 + 3(1-s) s^2 p2 + s^3
    let sample = |p1: f32, p2: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };
    let slope = |p1: f32, p2: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    };

    let mut s = x;
    for _ in 0..8 {
        let err = sample(x1, x2, s) - x;
        if err.abs() < 1e-5 {
            return sample(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let value = sample(x1, x2, s);
        if (value - x).abs() < 1e-5 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    sample(y1, y2, s)
}

/// A single timed interpolation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    /// When the tween started
    pub started: Instant,
    /// Delay before progress begins
    pub delay: Duration,
    /// Length of the tween (after the delay)
    pub duration: Duration,
    /// Progress curve
    pub easing: EasingFunction,
}

impl Tween {
    /// Start a tween now
    #[must_use]
    pub fn new(started: Instant, duration: Duration, easing: EasingFunction) -> Self {
        Self {
            started,
            delay: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// Hold at zero progress for `delay` first
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Raw (un-eased) fraction of the tween that has elapsed
    #[must_use]
    pub fn linear_progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (active.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased progress in `[0, 1]`
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        self.easing.apply(self.linear_progress(now))
    }

    /// Interpolate between two values
    #[must_use]
    pub fn lerp(&self, now: Instant, from: f32, to: f32) -> f32 {
        from + (to - from) * self.progress(now)
    }

    /// Whether the tween has run to completion
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.delay + self.duration
    }
}

//! Time-based interpolation primitives
//!
//! Everything takes an explicit `Instant` so tests can drive the clock.

use std::time::{Duration, Instant};

/// Easing curves used by the header animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` through the curve
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// Linear interpolation
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// A running animation clock: start instant, duration, curve
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    pub fn new(duration: Duration, easing: Easing, now: Instant) -> Self {
        Self {
            start: now,
            duration,
            easing,
        }
    }

    /// Eased progress in `[0, 1]`
    pub fn progress(&self, now: Instant) -> f32 {
        self.easing.apply(self.raw_progress(now))
    }

    /// Linear progress in `[0, 1]`
    pub fn raw_progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

/// A float that can snap or glide to a new target.
///
/// Retargeting mid-flight starts the new tween from the current sampled
/// value, so motion stays continuous.
#[derive(Debug, Clone, Copy)]
pub struct FloatAnim {
    from: f32,
    to: f32,
    tween: Option<Tween>,
}

impl FloatAnim {
    pub fn new(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            tween: None,
        }
    }

    /// Jump straight to `target`
    pub fn set(&mut self, target: f32) {
        self.from = target;
        self.to = target;
        self.tween = None;
    }

    /// Glide to `target` over `duration`
    pub fn animate_to(&mut self, target: f32, duration: Duration, easing: Easing, now: Instant) {
        self.from = self.value(now);
        self.to = target;
        self.tween = Some(Tween::new(duration, easing, now));
    }

    pub fn value(&self, now: Instant) -> f32 {
        match &self.tween {
            Some(tween) => lerp(self.from, self.to, tween.progress(now)),
            None => self.to,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.tween.map(|t| !t.is_complete(now)).unwrap_or(false)
    }
}

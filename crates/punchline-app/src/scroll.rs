//! Scroll position and pull-to-refresh release detection.
//!
//! One scalar position drives everything. Positive values first collapse
//! the header toward its minimum height, then scroll the feed. Negative
//! values stretch the header past its natural height, which is the pull
//! gesture. Progress handed to the parallax math is derived from the
//! same scalar, so the header and the feed can never disagree.
//!
//! Keyboards have no touch-up event, so a pull "releases" when no pull
//! input has arrived for a short quiet period. A release from beyond the
//! clamp point triggers a refresh; either way the header springs back.

use std::time::{Duration, Instant};

use punchline_core::{Easing, FloatAnim, HeaderLayout, CLAMP_PROGRESS};

/// Header rows added per pull key press.
pub const PULL_STEP: f32 = 0.5;

/// Quiet period after the last pull input before the pull releases.
pub const RELEASE_AFTER: Duration = Duration::from_millis(350);

const SPRING_BACK: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct ScrollModel {
    position: FloatAnim,
    last_pull_input: Option<Instant>,
}

impl Default for ScrollModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollModel {
    pub fn new() -> Self {
        Self {
            position: FloatAnim::new(0.0),
            last_pull_input: None,
        }
    }

    /// Raw scroll scalar. Negative while pulling.
    pub fn value(&self, now: Instant) -> f32 {
        self.position.value(now)
    }

    pub fn is_pulling(&self, now: Instant) -> bool {
        self.value(now) < 0.0
    }

    /// Header progress: 1.0 at rest, above while pulled, toward 0.0 as
    /// the header collapses into the title bar.
    pub fn progress(&self, layout: HeaderLayout, now: Instant) -> f32 {
        let span = layout.span() as f32;
        let s = self.value(now);
        (span - s.min(span)) / span
    }

    /// Rows the header currently occupies.
    pub fn header_rows(&self, layout: HeaderLayout, now: Instant) -> u16 {
        let rows = layout.natural as f32 - self.value(now);
        rows.round().max(layout.min as f32) as u16
    }

    /// Rows the feed has scrolled past its top, once the header is
    /// fully collapsed.
    pub fn feed_offset(&self, layout: HeaderLayout, now: Instant) -> u16 {
        (self.value(now) - layout.span() as f32).max(0.0).round() as u16
    }

    /// One step up: scroll the feed back, or pull once already at the top.
    pub fn scroll_up(&mut self, now: Instant) {
        let current = self.value(now);
        if current > 0.0 {
            self.position.set((current - 1.0).max(0.0));
        } else {
            self.position.set(current - PULL_STEP);
            self.last_pull_input = Some(now);
        }
    }

    /// One step down. From a pull this releases instead of stepping.
    pub fn scroll_down(&mut self, max: f32, now: Instant) {
        let current = self.value(now);
        if current < 0.0 {
            self.release(now);
        } else {
            self.position.set((current + 1.0).min(max));
        }
    }

    pub fn to_top(&mut self) {
        self.last_pull_input = None;
        self.position.set(0.0);
    }

    pub fn to_bottom(&mut self, max: f32) {
        self.last_pull_input = None;
        self.position.set(max.max(0.0));
    }

    fn release(&mut self, now: Instant) {
        self.last_pull_input = None;
        self.position
            .animate_to(0.0, SPRING_BACK, Easing::EaseOut, now);
    }

    /// Clock pass. Detects a pull whose input has gone quiet, springs the
    /// header back, and reports whether the release crossed the refresh
    /// threshold.
    pub fn tick(&mut self, layout: HeaderLayout, now: Instant) -> bool {
        let Some(last) = self.last_pull_input else {
            return false;
        };
        if now.duration_since(last) < RELEASE_AFTER {
            return false;
        }
        let triggered = self.progress(layout, now) >= CLAMP_PROGRESS;
        self.release(now);
        triggered
    }
}

//! Scroll-progress mapping for the header scene
//!
//! Progress `p` is the header's current height over its natural height:
//! 1.0 at rest, above 1.0 while pulled, below 1.0 while collapsing into
//! the title bar. Everything that moves with the pull is computed here:
//! mountain band offsets, tree bends, the resting plane's tilt, the
//! collapsed-bar fade and the send-button slide.
//!
//! The band math is a stateless piecewise function of `p`. Layers can
//! never be stranded at a stale offset by a discontinuous jump in `p`.

use std::time::{Duration, Instant};

use crate::geometry::Point;
use crate::motion::{Easing, FloatAnim};

/// Progress at which the bands reach full extension. Also the release
/// threshold for triggering a refresh.
pub const CLAMP_PROGRESS: f32 = 1.3;

/// Progress below which the collapsed title bar is fully opaque and the
/// send button slides away.
pub const COLLAPSE_THRESHOLD: f32 = 0.03;

/// Progress at which the collapsed title bar has fully faded out.
pub const FADE_END: f32 = 0.25;

const FADE_DIVISOR: f32 = 0.22;

const MOUNTAIN_TRAVEL_RATIO: f32 = 0.07;
const BUTTON_REST_RATIO: f32 = 0.014;
const BUTTON_HIDDEN_RATIO: f32 = 0.078;
const BUTTON_SLIDE: Duration = Duration::from_millis(200);

const MAX_PLANE_ROTATION: f32 = -std::f32::consts::FRAC_PI_4;

const WIGGLE_DURATION: Duration = Duration::from_millis(900);
const WIGGLE_AMPLITUDE: f32 = 0.35;
const WIGGLE_HZ: f32 = 3.0;

/// A travel range for one animated offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub from: f32,
    pub to: f32,
}

impl Boundary {
    pub const fn new(from: f32, to: f32) -> Self {
        Self { from, to }
    }
}

/// Vertical offsets for the three mountain depth bands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountainOffsets {
    pub front: f32,
    pub mid: f32,
    pub back: f32,
}

/// The rest offset all mountain layers share, derived from scene width
pub fn mountain_travel(scene_width: f32) -> f32 {
    (-MOUNTAIN_TRAVEL_RATIO * scene_width).floor()
}

/// The send button's rest and hidden offsets, derived from scene width
pub fn button_boundary(scene_width: f32) -> Boundary {
    Boundary::new(
        (BUTTON_REST_RATIO * scene_width).floor(),
        -(BUTTON_HIDDEN_RATIO * scene_width).floor(),
    )
}

/// Band offsets at progress `p`.
///
/// `from` is the shared rest offset (negative, see [`mountain_travel`]).
/// The front band finishes its travel first, then the mid band, then the
/// back band, which is what separates the layers into depth planes:
///
/// - `p < 1.0`: everything rests at `from`
/// - `[1.0, 1.1)`: all bands glide `from -> 0`
/// - `[1.1, 1.2)`: front parked at 0; mid and back glide `0 -> |from|`
/// - `[1.2, 1.3)`: mid parked; back glides `|from| -> 2|from|`
/// - `>= 1.3`: fully extended, no further movement
pub fn mountain_offsets(p: f32, from: f32) -> MountainOffsets {
    let d = from.abs();

    if p < 1.0 {
        MountainOffsets {
            front: from,
            mid: from,
            back: from,
        }
    } else if p < 1.1 {
        let c = (1.1 - p) / 0.1 * from;
        MountainOffsets {
            front: c,
            mid: c,
            back: c,
        }
    } else if p < 1.2 {
        let c = d + (1.2 - p) / 0.1 * from;
        MountainOffsets {
            front: 0.0,
            mid: c,
            back: c,
        }
    } else if p < CLAMP_PROGRESS {
        MountainOffsets {
            front: 0.0,
            mid: d,
            back: 2.0 * d + (CLAMP_PROGRESS - p) / 0.1 * from,
        }
    } else {
        MountainOffsets {
            front: 0.0,
            mid: d,
            back: 2.0 * d,
        }
    }
}

/// Foreground tree lean at progress `p`. Background trees use the
/// negated value, so the two rows part as the header stretches.
pub fn tree_bend(p: f32) -> f32 {
    p - 1.0
}

/// Tilt of the plane glyph resting on the send button
pub fn plane_rotation(p: f32) -> f32 {
    (p - 1.0).max(0.0) * MAX_PLANE_ROTATION
}

/// Collapsed-bar opacity: 1 when the header is nearly collapsed, fading
/// out entirely by `p = 0.25`.
pub fn panel_opacity(p: f32) -> f32 {
    if p <= COLLAPSE_THRESHOLD {
        1.0
    } else if p >= FADE_END {
        0.0
    } else {
        (FADE_END - p) / FADE_DIVISOR
    }
}

/// Baseline the foreground trees stand on, tracking the front mountains
pub fn fg_tree_base(fg_mountain_height: f32, front_offset: f32) -> f32 {
    fg_mountain_height + front_offset - (0.15 * fg_mountain_height).floor()
}

/// Baseline the background trees stand on, tracking the mid mountains
pub fn bg_tree_base(mid_mountain_height: f32, mid_offset: f32) -> f32 {
    mid_mountain_height + mid_offset - (0.1 * mid_mountain_height).floor()
}

// ─────────────────────────────────────────────────────────────────────────────
// Screen configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Header sizing for a given terminal, in rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    /// Height at rest (progress 1.0)
    pub natural: u16,
    /// Height when fully collapsed (progress 0.0 territory)
    pub min: u16,
}

const MIN_HEADER_ROWS: u16 = 4;

impl HeaderLayout {
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        let by_width = (0.28 * cols as f32).round() as u16;
        let cap = (0.45 * rows as f32).floor() as u16;
        let natural = by_width.min(cap).max(MIN_HEADER_ROWS + 2);
        Self {
            natural,
            min: MIN_HEADER_ROWS,
        }
    }

    /// Rows of travel between collapsed and natural height
    pub fn span(&self) -> u16 {
        self.natural - self.min
    }
}

/// Drawable scene size in braille dot space (2 dots per cell column,
/// 4 per cell row)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneMetrics {
    pub width: f32,
    pub height: f32,
}

impl SceneMetrics {
    pub fn from_cells(cols: u16, rows: u16) -> Self {
        Self {
            width: cols as f32 * 2.0,
            height: rows as f32 * 4.0,
        }
    }
}

/// Radius of the send button in dot space
pub fn button_radius(scene: SceneMetrics) -> f32 {
    (0.14 * scene.height).min(0.08 * scene.width).max(3.0)
}

/// Center of the send button. `slide_offset` lifts the button above the
/// scene floor at rest and pushes it below the floor when the header
/// collapses (see [`button_boundary`]).
pub fn button_center(scene: SceneMetrics, slide_offset: f32) -> Point {
    Point::new(
        scene.width / 2.0,
        scene.height - button_radius(scene) - slide_offset,
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Stateful pieces: button slide + landing wiggle
// ─────────────────────────────────────────────────────────────────────────────

/// The parts of the header that carry history between layout passes:
/// the send-button slide (it only re-animates when its target flips)
/// and the one-shot tree wiggle played when a flight starts.
#[derive(Debug, Clone)]
pub struct HeaderParallax {
    button_offset: FloatAnim,
    wiggle_until: Option<Instant>,
}

impl HeaderParallax {
    pub fn new(scene_width: f32) -> Self {
        Self {
            button_offset: FloatAnim::new(button_boundary(scene_width).from),
            wiggle_until: None,
        }
    }

    /// Layout pass: retarget the button slide when `p` crosses the
    /// collapse threshold. Retargeting only happens when the target
    /// actually differs, so repeated passes on the same side are free.
    pub fn apply(&mut self, p: f32, boundary: Boundary, now: Instant) {
        let target = if p <= COLLAPSE_THRESHOLD {
            boundary.to
        } else {
            boundary.from
        };
        if self.button_offset.target() != target {
            self.button_offset
                .animate_to(target, BUTTON_SLIDE, Easing::EaseInOut, now);
        }
    }

    pub fn button_offset(&self, now: Instant) -> f32 {
        self.button_offset.value(now)
    }

    /// Start the one-shot wiggle. While it plays, progress-driven bends
    /// are suppressed in favor of the decaying wobble.
    pub fn arm_wiggle(&mut self, now: Instant) {
        self.wiggle_until = Some(now + WIGGLE_DURATION);
    }

    pub fn is_wiggling(&self, now: Instant) -> bool {
        self.wiggle_until.map(|t| now < t).unwrap_or(false)
    }

    /// Bends for the (foreground, background) tree rows at progress `p`
    pub fn tree_bends(&self, p: f32, now: Instant) -> (f32, f32) {
        if let Some(until) = self.wiggle_until {
            if now < until {
                let remaining = until.saturating_duration_since(now).as_secs_f32();
                let duration = WIGGLE_DURATION.as_secs_f32();
                let t = duration - remaining;
                let decay = remaining / duration;
                let wobble = WIGGLE_AMPLITUDE
                    * decay
                    * (t * WIGGLE_HZ * std::f32::consts::TAU).sin();
                return (wobble, wobble);
            }
        }
        let bend = tree_bend(p);
        (bend, -bend)
    }
}

//! Refresh flight sequencer
//!
//! Owns the three-phase plane flight and the contract between animation
//! and fetch: the plane flies off, the header waits for the result, the
//! plane flies back in and lands. `finish_refresh` may arrive while the
//! fly-out is still running; the result is parked in a single slot and
//! delivered when the fly-out boundary passes. The animation always
//! completes, joke or no joke.
//!
//! ```text
//! Idle ──start──▶ FlyingOut ──tick──▶ AwaitingResult ──finish──▶ FlyingIn ──tick──▶ Idle
//!                     │                     │                        │
//!                  (finish: park)       (cancel)                 (cancel)
//! ```
//!
//! Callers drive the clock: `tick` advances the active leg and fires at
//! most one boundary per call.

use std::time::{Duration, Instant};

use crate::geometry::{quad_point, Point};
use crate::joke::Joke;
use crate::motion::{lerp, Easing, Tween};
use crate::parallax::SceneMetrics;

pub const FLY_OUT_DURATION: Duration = Duration::from_millis(500);
pub const FLY_IN_SWEEP_DURATION: Duration = Duration::from_millis(500);
pub const FLY_IN_GLIDE_DURATION: Duration = Duration::from_millis(800);

/// Scale the plane shrinks to as it leaves the scene
pub const SHRUNK_SCALE: f32 = 0.2;

const TAKEOFF_ROTATION: f32 = -std::f32::consts::FRAC_PI_4;

/// Where the sequencer is in the cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPhase {
    #[default]
    Idle,

    /// Plane is arcing off the top-right of the scene
    FlyingOut,

    /// Plane parked off-screen, waiting for `finish_refresh`
    AwaitingResult,

    /// Plane sweeping back across and gliding onto the button
    FlyingIn,
}

/// What a sequencer call tells the caller to do
#[derive(Debug, Clone, PartialEq)]
pub enum SequencerEvent {
    /// A cycle started: begin the fetch, switch the button to Loading,
    /// wiggle the trees
    RefreshRequested,

    /// The cycle was torn down: abort the fetch, restore the button
    CancelRequested,

    /// The landing glide began: fade the close glyph out
    GlideStarted,

    /// The cycle completed; `Some` carries the fetched joke
    Finished(Option<Joke>),
}

/// Geometry snapshot flights are planned against
#[derive(Debug, Clone, Copy)]
pub struct FlightFrame {
    pub scene: SceneMetrics,
    pub button_center: Point,
}

#[derive(Debug, Clone, Copy)]
enum FlightPath {
    Quad {
        start: Point,
        control: Point,
        end: Point,
    },
    Line {
        start: Point,
        end: Point,
    },
}

impl FlightPath {
    fn at(&self, t: f32) -> Point {
        match *self {
            FlightPath::Quad {
                start,
                control,
                end,
            } => quad_point(start, control, end, t),
            FlightPath::Line { start, end } => {
                Point::new(lerp(start.x, end.x, t), lerp(start.y, end.y, t))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlightLeg {
    Out,
    InSweep,
    InGlide,
}

/// The flying copy of the plane glyph. Exists only while a cycle runs.
#[derive(Debug, Clone)]
pub struct DetachedPlane {
    path: FlightPath,
    scale_from: f32,
    scale_to: f32,
    rotation: f32,
    mirrored: bool,
    tween: Tween,
    leg: FlightLeg,
}

impl DetachedPlane {
    pub fn position(&self, now: Instant) -> Point {
        self.path.at(self.tween.progress(now))
    }

    pub fn scale(&self, now: Instant) -> f32 {
        lerp(self.scale_from, self.scale_to, self.tween.progress(now))
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn mirrored(&self) -> bool {
        self.mirrored
    }
}

/// The deferred-completion slot. One deep; the last write wins.
#[derive(Debug, Clone)]
struct PendingFinish {
    joke: Option<Joke>,
}

#[derive(Debug, Clone, Default)]
pub struct RefreshSequencer {
    phase: RefreshPhase,
    plane: Option<DetachedPlane>,
    /// Result that arrived while the fly-out was still running
    pending: Option<PendingFinish>,
    /// Result being carried home by the fly-in
    landing: Option<PendingFinish>,
}

impl RefreshSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RefreshPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == RefreshPhase::Idle
    }

    /// The flying plane, if a cycle is running
    pub fn plane(&self) -> Option<&DetachedPlane> {
        self.plane.as_ref()
    }

    /// Launch a cycle. Ignored unless idle: one cycle at a time.
    pub fn start_refresh(
        &mut self,
        frame: FlightFrame,
        now: Instant,
    ) -> Option<SequencerEvent> {
        if self.phase != RefreshPhase::Idle {
            tracing::debug!(phase = ?self.phase, "refresh already running, ignoring start");
            return None;
        }

        let w = frame.scene.width;
        let h = frame.scene.height;

        self.plane = Some(DetachedPlane {
            path: FlightPath::Quad {
                start: frame.button_center,
                control: Point::new(0.6 * w, -0.3 * h),
                end: Point::new(1.1 * w, -0.45 * h),
            },
            scale_from: 1.0,
            scale_to: SHRUNK_SCALE,
            rotation: TAKEOFF_ROTATION,
            mirrored: false,
            tween: Tween::new(FLY_OUT_DURATION, Easing::EaseIn, now),
            leg: FlightLeg::Out,
        });
        self.phase = RefreshPhase::FlyingOut;

        Some(SequencerEvent::RefreshRequested)
    }

    /// Deliver the fetch result. During the fly-out the result parks in
    /// the pending slot (overwriting any earlier one) and is replayed at
    /// the fly-out boundary. Both success and failure land here: the
    /// animation completes either way.
    pub fn finish_refresh(
        &mut self,
        joke: Option<Joke>,
        frame: FlightFrame,
        now: Instant,
    ) -> Option<SequencerEvent> {
        match self.phase {
            RefreshPhase::FlyingOut => {
                self.pending = Some(PendingFinish { joke });
                None
            }
            RefreshPhase::AwaitingResult => {
                self.begin_fly_in(joke, frame, now);
                None
            }
            RefreshPhase::FlyingIn | RefreshPhase::Idle => {
                tracing::debug!(phase = ?self.phase, "finish ignored, nothing to deliver to");
                None
            }
        }
    }

    /// Tear the cycle down. The plane vanishes, the parked result is
    /// dropped, and neither fly-in boundary will ever fire, so the
    /// completion is never delivered. Exactly one `CancelRequested` per
    /// running cycle.
    pub fn cancel_refresh(&mut self) -> Option<SequencerEvent> {
        if self.phase == RefreshPhase::Idle {
            return None;
        }

        self.plane = None;
        self.pending = None;
        self.landing = None;
        self.phase = RefreshPhase::Idle;

        Some(SequencerEvent::CancelRequested)
    }

    /// Advance the active leg. Fires at most one boundary per call.
    pub fn tick(&mut self, frame: FlightFrame, now: Instant) -> Option<SequencerEvent> {
        let done = match &self.plane {
            Some(plane) => plane.tween.is_complete(now),
            None => return None,
        };
        if !done {
            return None;
        }

        let leg = self.plane.as_ref().map(|p| p.leg);
        match (self.phase, leg) {
            (RefreshPhase::FlyingOut, Some(FlightLeg::Out)) => {
                // Plane parks off-screen; replay a result that arrived early
                self.phase = RefreshPhase::AwaitingResult;
                if let Some(parked) = self.pending.take() {
                    self.begin_fly_in(parked.joke, frame, now);
                }
                None
            }
            (RefreshPhase::FlyingIn, Some(FlightLeg::InSweep)) => {
                self.begin_glide(frame, now);
                Some(SequencerEvent::GlideStarted)
            }
            (RefreshPhase::FlyingIn, Some(FlightLeg::InGlide)) => {
                let joke = self.landing.take().and_then(|p| p.joke);
                self.plane = None;
                self.phase = RefreshPhase::Idle;
                Some(SequencerEvent::Finished(joke))
            }
            // Parked in AwaitingResult: the Out leg stays complete, nothing to do
            _ => None,
        }
    }

    fn begin_fly_in(&mut self, joke: Option<Joke>, frame: FlightFrame, now: Instant) {
        let w = frame.scene.width;
        let h = frame.scene.height;

        self.plane = Some(DetachedPlane {
            path: FlightPath::Quad {
                start: Point::new(1.1 * w, -0.4 * h),
                control: Point::new(0.4 * w, -0.8 * h),
                end: Point::new(-0.4 * w, frame.button_center.y),
            },
            scale_from: SHRUNK_SCALE,
            scale_to: 1.0,
            rotation: 0.0,
            mirrored: true,
            tween: Tween::new(FLY_IN_SWEEP_DURATION, Easing::EaseIn, now),
            leg: FlightLeg::InSweep,
        });
        self.landing = Some(PendingFinish { joke });
        self.phase = RefreshPhase::FlyingIn;
    }

    fn begin_glide(&mut self, frame: FlightFrame, now: Instant) {
        let w = frame.scene.width;

        self.plane = Some(DetachedPlane {
            path: FlightPath::Line {
                start: Point::new(-0.4 * w, frame.button_center.y),
                end: frame.button_center,
            },
            scale_from: 1.0,
            scale_to: 1.0,
            rotation: 0.0,
            mirrored: true,
            tween: Tween::new(FLY_IN_GLIDE_DURATION, Easing::EaseOut, now),
            leg: FlightLeg::InGlide,
        });
    }
}

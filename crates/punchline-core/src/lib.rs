//! # punchline-core - Core Domain Types
//!
//! Foundation crate for Punchline. Provides the joke model, the header
//! scene geometry, the scroll-progress parallax math, the send-button
//! state machine and the refresh flight sequencer, plus error handling
//! and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Jokes (`joke`)
//! - [`Joke`] - Question + punchline pair, with strict delimiter parsing
//! - [`seed_jokes()`] - The rows the feed starts with
//! - [`EMOTICONS`] - Row decorations
//!
//! ### Geometry (`geometry`)
//! - [`Point`], [`Bounds`], [`PathSegment`] - Scene-space path vocabulary
//! - [`mountain_silhouette()`], [`paper_plane()`], [`tree()`],
//!   [`close_glyph()`] - Ratio-driven shape builders
//!
//! ### Motion (`motion`)
//! - [`Easing`], [`Tween`], [`FloatAnim`] - Instant-driven interpolation
//!
//! ### Parallax (`parallax`)
//! - [`mountain_offsets()`] - Stateless band math for the three depth planes
//! - [`panel_opacity()`], [`tree_bend()`], [`plane_rotation()`] - Pull-driven fades and tilts
//! - [`HeaderLayout`], [`SceneMetrics`] - Terminal-derived screen configuration
//! - [`HeaderParallax`] - Button slide + landing wiggle state
//!
//! ### Button (`button`)
//! - [`MailButton`], [`ButtonState`], [`ButtonVisual`] - Send-button state and visuals
//!
//! ### Sequencer (`sequencer`)
//! - [`RefreshSequencer`] - Three-phase flight with deferred completion
//! - [`RefreshPhase`], [`SequencerEvent`], [`FlightFrame`], [`DetachedPlane`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use punchline_core::prelude::*;
//! ```

pub mod button;
pub mod error;
pub mod geometry;
pub mod joke;
pub mod logging;
pub mod motion;
pub mod parallax;
pub mod sequencer;

/// Prelude for common imports used throughout all Punchline crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use button::{ButtonState, ButtonVisual, MailButton};
pub use error::{Error, Result, ResultExt};
pub use geometry::{
    close_glyph, mountain_silhouette, paper_plane, quad_point, tree, Bounds, MountainRatios,
    PathSegment, Point,
};
pub use joke::{seed_jokes, Joke, EMOTICONS};
pub use motion::{lerp, Easing, FloatAnim, Tween};
pub use parallax::{
    bg_tree_base, button_boundary, button_center, button_radius, fg_tree_base, mountain_offsets,
    mountain_travel, panel_opacity, plane_rotation, tree_bend, Boundary, HeaderLayout,
    HeaderParallax, MountainOffsets, SceneMetrics, CLAMP_PROGRESS, COLLAPSE_THRESHOLD, FADE_END,
};
pub use sequencer::{
    DetachedPlane, FlightFrame, RefreshPhase, RefreshSequencer, SequencerEvent,
    FLY_IN_GLIDE_DURATION, FLY_IN_SWEEP_DURATION, FLY_OUT_DURATION, SHRUNK_SCALE,
};

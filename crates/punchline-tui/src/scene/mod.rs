//! The hand-drawn landscape scene.
//!
//! `canvas` provides the braille drawing surface, `painter` composites
//! the parallax layers onto it each frame.

pub mod canvas;
pub mod painter;

pub use canvas::BrailleCanvas;
pub use painter::render_scene;

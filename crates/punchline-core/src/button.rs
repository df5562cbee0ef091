//! Send-button state and visuals
//!
//! The badge at the foot of the header: a circle carrying a paper-plane
//! glyph normally and a close (X) glyph while a refresh runs. All
//! transitions are crossfades or transform tweens; rendering samples
//! [`MailButton::visual`] each frame.

use std::time::{Duration, Instant};

use crate::geometry::{Bounds, Point};
use crate::motion::{Easing, FloatAnim};

const STATE_FADE: Duration = Duration::from_millis(200);
const PRESS_FADE: Duration = Duration::from_millis(200);

const PRESSED_SCALE: f32 = 0.9;
const PRESSED_ROTATION: f32 = -0.1;
const PRESSED_ICON_OPACITY: f32 = 0.4;
const SHADOW_OPACITY: f32 = 0.7;
const PRESSED_SHADOW_OPACITY: f32 = 0.3;

/// Which glyph the button is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Paper plane; pressing opens compose
    #[default]
    Default,

    /// Close glyph; pressing cancels the running refresh
    Loading,
}

/// Snapshot handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonVisual {
    pub scale: f32,
    pub rotation: f32,
    pub plane_opacity: f32,
    pub close_opacity: f32,
    pub shadow_opacity: f32,
}

#[derive(Debug, Clone)]
pub struct MailButton {
    state: ButtonState,
    pressed: bool,
    plane_opacity: FloatAnim,
    close_opacity: FloatAnim,
    scale: FloatAnim,
    rotation: FloatAnim,
    icon_dim: FloatAnim,
    shadow_opacity: FloatAnim,
}

impl Default for MailButton {
    fn default() -> Self {
        Self::new()
    }
}

impl MailButton {
    pub fn new() -> Self {
        Self {
            state: ButtonState::Default,
            pressed: false,
            plane_opacity: FloatAnim::new(1.0),
            close_opacity: FloatAnim::new(0.0),
            scale: FloatAnim::new(1.0),
            rotation: FloatAnim::new(0.0),
            icon_dim: FloatAnim::new(1.0),
            shadow_opacity: FloatAnim::new(SHADOW_OPACITY),
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == ButtonState::Loading
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Switch glyphs. Setting the current state again is a no-op.
    pub fn set_state(&mut self, state: ButtonState, animated: bool, now: Instant) {
        if state == self.state {
            return;
        }
        self.state = state;

        let (plane, close) = match state {
            ButtonState::Default => (1.0, 0.0),
            ButtonState::Loading => (0.0, 1.0),
        };

        if animated {
            self.plane_opacity
                .animate_to(plane, STATE_FADE, Easing::EaseInOut, now);
            self.close_opacity
                .animate_to(close, STATE_FADE, Easing::EaseInOut, now);
        } else {
            self.plane_opacity.set(plane);
            self.close_opacity.set(close);
        }
    }

    pub fn toggle_state(&mut self, animated: bool, now: Instant) {
        let next = match self.state {
            ButtonState::Default => ButtonState::Loading,
            ButtonState::Loading => ButtonState::Default,
        };
        self.set_state(next, animated, now);
    }

    /// Drive only the close glyph, leaving `state` alone. Used at the
    /// fly-in handoff where the X fades out before the plane lands.
    pub fn show_close(&mut self, visible: bool, animated: bool, now: Instant) {
        let target = if visible { 1.0 } else { 0.0 };
        if animated {
            self.close_opacity
                .animate_to(target, STATE_FADE, Easing::EaseInOut, now);
        } else {
            self.close_opacity.set(target);
        }
    }

    pub fn press(&mut self, now: Instant) {
        if self.pressed {
            return;
        }
        self.pressed = true;
        self.scale
            .animate_to(PRESSED_SCALE, PRESS_FADE, Easing::EaseOut, now);
        self.rotation
            .animate_to(PRESSED_ROTATION, PRESS_FADE, Easing::EaseOut, now);
        self.icon_dim
            .animate_to(PRESSED_ICON_OPACITY, PRESS_FADE, Easing::EaseOut, now);
        self.shadow_opacity
            .animate_to(PRESSED_SHADOW_OPACITY, PRESS_FADE, Easing::EaseOut, now);
    }

    pub fn release(&mut self, now: Instant) {
        if !self.pressed {
            return;
        }
        self.pressed = false;
        self.scale.animate_to(1.0, PRESS_FADE, Easing::EaseOut, now);
        self.rotation
            .animate_to(0.0, PRESS_FADE, Easing::EaseOut, now);
        self.icon_dim
            .animate_to(1.0, PRESS_FADE, Easing::EaseOut, now);
        self.shadow_opacity
            .animate_to(SHADOW_OPACITY, PRESS_FADE, Easing::EaseOut, now);
    }

    /// Circular hit area of radius `bounds.width / 2`, not the square box.
    pub fn hit_test(point: Point, bounds: Bounds) -> bool {
        let center = bounds.center();
        let radius = bounds.width / 2.0;
        let dx = point.x - center.x;
        let dy = point.y - center.y;
        dx * dx + dy * dy <= radius * radius
    }

    pub fn visual(&self, now: Instant) -> ButtonVisual {
        let dim = self.icon_dim.value(now);
        ButtonVisual {
            scale: self.scale.value(now),
            rotation: self.rotation.value(now),
            plane_opacity: self.plane_opacity.value(now) * dim,
            close_opacity: self.close_opacity.value(now) * dim,
            shadow_opacity: self.shadow_opacity.value(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled(now: Instant) -> Instant {
        now + Duration::from_secs(1)
    }

    #[test]
    fn test_new_button_shows_plane() {
        let now = Instant::now();
        let button = MailButton::new();
        let v = button.visual(now);

        assert_eq!(button.state(), ButtonState::Default);
        assert_eq!(v.plane_opacity, 1.0);
        assert_eq!(v.close_opacity, 0.0);
        assert_eq!(v.scale, 1.0);
        assert_eq!(v.shadow_opacity, SHADOW_OPACITY);
    }

    #[test]
    fn test_set_state_crossfades_glyphs() {
        let now = Instant::now();
        let mut button = MailButton::new();
        button.set_state(ButtonState::Loading, true, now);

        // mid-fade both glyphs are partially visible
        let mid = button.visual(now + Duration::from_millis(100));
        assert!(mid.plane_opacity > 0.0 && mid.plane_opacity < 1.0);
        assert!(mid.close_opacity > 0.0 && mid.close_opacity < 1.0);

        let done = button.visual(settled(now));
        assert_eq!(done.plane_opacity, 0.0);
        assert_eq!(done.close_opacity, 1.0);
    }

    #[test]
    fn test_set_state_unanimated_snaps() {
        let now = Instant::now();
        let mut button = MailButton::new();
        button.set_state(ButtonState::Loading, false, now);

        let v = button.visual(now);
        assert_eq!(v.plane_opacity, 0.0);
        assert_eq!(v.close_opacity, 1.0);
    }

    #[test]
    fn test_set_same_state_is_noop() {
        let now = Instant::now();
        let mut button = MailButton::new();
        button.set_state(ButtonState::Loading, false, now);
        button.show_close(false, false, now);

        // re-setting Loading must not resurrect the close glyph
        button.set_state(ButtonState::Loading, false, now);
        assert_eq!(button.visual(now).close_opacity, 0.0);
    }

    #[test]
    fn test_toggle_state_flips() {
        let now = Instant::now();
        let mut button = MailButton::new();
        button.toggle_state(false, now);
        assert_eq!(button.state(), ButtonState::Loading);
        button.toggle_state(false, now);
        assert_eq!(button.state(), ButtonState::Default);
    }

    #[test]
    fn test_press_transforms_and_release_restores() {
        let now = Instant::now();
        let mut button = MailButton::new();
        button.press(now);

        let v = button.visual(settled(now));
        assert_eq!(v.scale, PRESSED_SCALE);
        assert_eq!(v.rotation, PRESSED_ROTATION);
        assert_eq!(v.plane_opacity, PRESSED_ICON_OPACITY);
        assert_eq!(v.shadow_opacity, PRESSED_SHADOW_OPACITY);

        let later = settled(now);
        button.release(later);
        let v = button.visual(settled(later));
        assert_eq!(v.scale, 1.0);
        assert_eq!(v.rotation, 0.0);
        assert_eq!(v.plane_opacity, 1.0);
        assert_eq!(v.shadow_opacity, SHADOW_OPACITY);
    }

    #[test]
    fn test_hit_test_circle_not_box() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);

        assert!(MailButton::hit_test(Point::new(5.0, 5.0), bounds));
        assert!(MailButton::hit_test(Point::new(5.0, 0.5), bounds));
        // corners of the box lie outside the circle
        assert!(!MailButton::hit_test(Point::new(0.5, 0.5), bounds));
        assert!(!MailButton::hit_test(Point::new(9.5, 9.5), bounds));
        // well outside
        assert!(!MailButton::hit_test(Point::new(20.0, 5.0), bounds));
    }

    #[test]
    fn test_show_close_leaves_state_alone() {
        let now = Instant::now();
        let mut button = MailButton::new();
        button.set_state(ButtonState::Loading, false, now);
        button.show_close(false, true, now);

        assert_eq!(button.state(), ButtonState::Loading);
        assert_eq!(button.visual(settled(now)).close_opacity, 0.0);
    }
}

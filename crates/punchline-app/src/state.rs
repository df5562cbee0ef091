//! Application state.
//!
//! Owned by the event loop, mutated only through
//! [`crate::handler::update`].

use std::time::{Duration, Instant};

use punchline_core::{
    button_boundary, button_center, Boundary, FlightFrame, HeaderLayout, HeaderParallax,
    MailButton, RefreshSequencer, SceneMetrics,
};

use crate::config::Settings;
use crate::feed::Feed;
use crate::scroll::ScrollModel;

/// How long the pressed visual holds for a keyboard press, which has no
/// key-up to wait for.
const PRESS_HOLD: Duration = Duration::from_millis(150);

/// How long a transient status notice stays visible.
const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Rows one feed entry occupies: question, answer, stamp, separator.
pub const FEED_ROW_HEIGHT: u16 = 4;

/// Rows reserved for the status bar at the bottom.
pub const STATUS_BAR_ROWS: u16 = 1;

/// Which surface owns key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// The feed with the header scene above it
    #[default]
    Feed,

    /// Share overlay
    Compose,

    /// Quit confirmation dialog
    ConfirmDialog,
}

/// A transient one-line status message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    until: Instant,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub ui_mode: UiMode,
    pub feed: Feed,
    pub scroll: ScrollModel,
    pub button: MailButton,
    pub sequencer: RefreshSequencer,
    pub parallax: HeaderParallax,
    pub layout: HeaderLayout,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
    notice: Option<Notice>,
    release_button_at: Option<Instant>,
    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), 80, 24)
    }

    pub fn with_settings(settings: Settings, cols: u16, rows: u16) -> Self {
        let layout = HeaderLayout::for_terminal(cols, rows);
        let scene = SceneMetrics::from_cells(cols, layout.natural);
        Self {
            settings,
            ui_mode: UiMode::default(),
            feed: Feed::with_seeds(),
            scroll: ScrollModel::new(),
            button: MailButton::new(),
            sequencer: RefreshSequencer::new(),
            parallax: HeaderParallax::new(scene.width),
            layout,
            terminal_cols: cols,
            terminal_rows: rows,
            notice: None,
            release_button_at: None,
            quitting: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    /// Quit, or open the confirmation dialog when configured to ask.
    pub fn request_quit(&mut self) {
        if self.settings.behavior.confirm_quit {
            self.ui_mode = UiMode::ConfirmDialog;
        } else {
            self.quitting = true;
        }
    }

    pub fn confirm_quit(&mut self) {
        self.quitting = true;
    }

    pub fn cancel_quit(&mut self) {
        if self.ui_mode == UiMode::ConfirmDialog {
            self.ui_mode = UiMode::Feed;
        }
    }

    pub fn force_quit(&mut self) {
        self.quitting = true;
    }

    /// Recompute everything derived from the terminal size. The button
    /// slide restarts from rest.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.terminal_cols = cols;
        self.terminal_rows = rows;
        self.layout = HeaderLayout::for_terminal(cols, rows);
        let scene = SceneMetrics::from_cells(cols, self.layout.natural);
        self.parallax = HeaderParallax::new(scene.width);
    }

    // ───── Derived geometry ─────

    /// Header progress right now; see [`ScrollModel::progress`].
    pub fn progress(&self, now: Instant) -> f32 {
        self.scroll.progress(self.layout, now)
    }

    /// Rows the header occupies right now.
    pub fn header_rows(&self, now: Instant) -> u16 {
        self.scroll
            .header_rows(self.layout, now)
            .min(self.terminal_rows.saturating_sub(STATUS_BAR_ROWS))
    }

    /// Drawable scene for the current header area, in dot space.
    pub fn scene(&self, now: Instant) -> SceneMetrics {
        SceneMetrics::from_cells(self.terminal_cols, self.header_rows(now))
    }

    /// Travel range for the send-button slide.
    pub fn button_boundary(&self) -> Boundary {
        button_boundary(self.terminal_cols as f32 * 2.0)
    }

    /// Geometry snapshot a flight gets planned against.
    pub fn flight_frame(&self, now: Instant) -> FlightFrame {
        let scene = self.scene(now);
        FlightFrame {
            scene,
            button_center: button_center(scene, self.parallax.button_offset(now)),
        }
    }

    /// Upper bound for the scroll scalar: the header's collapse span
    /// plus however far the feed content overflows its viewport.
    pub fn max_scroll(&self) -> f32 {
        let viewport = self
            .terminal_rows
            .saturating_sub(self.layout.min + STATUS_BAR_ROWS);
        let content = self.feed.len() as u16 * FEED_ROW_HEIGHT;
        (self.layout.span() + content.saturating_sub(viewport)) as f32
    }

    // ───── Transients ─────

    /// Press the button visually and schedule the matching release.
    pub fn press_button(&mut self, now: Instant) {
        self.button.press(now);
        self.release_button_at = Some(now + PRESS_HOLD);
    }

    pub fn set_notice(&mut self, text: impl Into<String>, now: Instant) {
        self.notice = Some(Notice {
            text: text.into(),
            until: now + NOTICE_DURATION,
        });
    }

    pub fn notice(&self, now: Instant) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|n| now < n.until)
            .map(|n| n.text.as_str())
    }

    /// Clock pass for short-lived visuals: finish the keyboard press,
    /// drop an expired notice, retarget the button slide when the header
    /// crosses the collapse threshold.
    pub fn tick_transients(&mut self, now: Instant) {
        if let Some(at) = self.release_button_at {
            if now >= at {
                self.button.release(now);
                self.release_button_at = None;
            }
        }
        if let Some(notice) = &self.notice {
            if now >= notice.until {
                self.notice = None;
            }
        }
        let progress = self.progress(now);
        let boundary = self.button_boundary();
        self.parallax.apply(progress, boundary, now);
    }
}

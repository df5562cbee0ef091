//! Semantic style builders for the paper-landscape theme.

use punchline_core::sequencer::RefreshPhase;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Block builders ---
pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Color arithmetic ---

/// Scale an RGB color toward black. Opacity 1.0 keeps the color,
/// 0.0 extinguishes it. Named colors pass through untouched.
pub fn faded(color: Color, opacity: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let t = opacity.clamp(0.0, 1.0);
            Color::Rgb(
                (r as f32 * t).round() as u8,
                (g as f32 * t).round() as u8,
                (b as f32 * t).round() as u8,
            )
        }
        other => other,
    }
}

/// Channel-wise lerp between two RGB colors. Falls back to `to` when
/// either side is a named color.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let t = t.clamp(0.0, 1.0);
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ => to,
    }
}

// --- Phase indicator mapping ---

/// Refresh phase indicator for the status bar.
///
/// Returns `(icon_char, label, Style)` for the given phase.
pub fn phase_indicator(phase: RefreshPhase) -> (&'static str, &'static str, Style) {
    match phase {
        RefreshPhase::Idle => ("○", "Idle", Style::default().fg(palette::TEXT_MUTED)),
        RefreshPhase::FlyingOut => (
            "➤",
            "Sending",
            Style::default()
                .fg(palette::STATUS_YELLOW)
                .add_modifier(Modifier::BOLD),
        ),
        RefreshPhase::AwaitingResult => (
            "…",
            "Fetching",
            Style::default()
                .fg(palette::STATUS_YELLOW)
                .add_modifier(Modifier::BOLD),
        ),
        RefreshPhase::FlyingIn => (
            "➤",
            "Returning",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_accent_bold_has_modifier() {
        let style = accent_bold();
        assert_eq!(style.fg, Some(palette::ACCENT));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_modal_block_constructs() {
        let _block = modal_block("Share");
    }

    #[test]
    fn test_faded_full_opacity_is_identity() {
        assert_eq!(
            faded(Color::Rgb(200, 100, 50), 1.0),
            Color::Rgb(200, 100, 50)
        );
    }

    #[test]
    fn test_faded_scales_channels() {
        assert_eq!(faded(Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(faded(Color::Rgb(200, 100, 50), 0.0), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_faded_clamps_opacity() {
        assert_eq!(
            faded(Color::Rgb(200, 100, 50), 1.7),
            Color::Rgb(200, 100, 50)
        );
        assert_eq!(faded(Color::Rgb(200, 100, 50), -0.3), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_faded_passes_named_colors_through() {
        assert_eq!(faded(Color::Yellow, 0.2), Color::Yellow);
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(100, 200, 40);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
    }

    #[test]
    fn test_blend_midpoint() {
        let a = Color::Rgb(0, 100, 200);
        let b = Color::Rgb(100, 200, 0);
        assert_eq!(blend(a, b, 0.5), Color::Rgb(50, 150, 100));
    }

    #[test]
    fn test_phase_indicator_all_phases_covered() {
        for phase in [
            RefreshPhase::Idle,
            RefreshPhase::FlyingOut,
            RefreshPhase::AwaitingResult,
            RefreshPhase::FlyingIn,
        ] {
            let (icon, label, _style) = phase_indicator(phase);
            assert!(!icon.is_empty());
            assert!(!label.is_empty());
        }
    }

    #[test]
    fn test_phase_indicator_busy_phases_are_bold() {
        let (_, _, sending) = phase_indicator(RefreshPhase::FlyingOut);
        let (_, _, fetching) = phase_indicator(RefreshPhase::AwaitingResult);
        assert!(sending.add_modifier.contains(Modifier::BOLD));
        assert!(fetching.add_modifier.contains(Modifier::BOLD));
    }
}

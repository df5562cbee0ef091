//! Color palette for the paper-landscape theme.
//!
//! Scene colors are RGB so the painter can fade and blend them while
//! layers collapse. Chrome (text, borders, status) stays on named
//! terminal colors to respect the user's scheme.

#![allow(dead_code)]

use ratatui::style::Color;

// --- Scene layers (back to front) ---
pub const SKY: Color = Color::Rgb(183, 65, 50); // Terracotta backdrop
pub const MOUNTAIN_BACK: Color = Color::Rgb(205, 110, 84);
pub const MOUNTAIN_MID: Color = Color::Rgb(224, 148, 116);
pub const MOUNTAIN_FRONT: Color = Color::Rgb(246, 237, 225); // Paper cream
pub const TREE_BACK: Color = Color::Rgb(237, 191, 163);
pub const TREE_FRONT: Color = Color::Rgb(252, 248, 240);

// --- Send button ---
pub const BUTTON_DISC: Color = Color::Rgb(252, 248, 240);
pub const BUTTON_GLYPH: Color = Color::Rgb(183, 65, 50); // Plane/close strokes on the disc
pub const PLANE_FLIGHT: Color = Color::Rgb(255, 255, 255); // Detached plane during a cycle

// --- Collapsed title bar ---
pub const BAR_BG: Color = Color::Rgb(142, 48, 37);
pub const BAR_TITLE: Color = Color::Rgb(252, 248, 240);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(231, 111, 81);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Rgb(231, 111, 81);

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Effects ---
pub const SHADOW: Color = Color::Black;
pub const DIM_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(30, 30, 40);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_constants_are_valid() {
        let _: Color = ACCENT;
        let _: Color = SKY;
        let _: Color = STATUS_YELLOW;
    }

    #[test]
    fn test_scene_layers_are_rgb() {
        // The painter fades scene colors channel-wise, which only works
        // on RGB values
        for color in [
            SKY,
            MOUNTAIN_BACK,
            MOUNTAIN_MID,
            MOUNTAIN_FRONT,
            TREE_BACK,
            TREE_FRONT,
            BUTTON_DISC,
            BUTTON_GLYPH,
            PLANE_FLIGHT,
            BAR_BG,
            BAR_TITLE,
        ] {
            match color {
                Color::Rgb(_, _, _) => {}
                other => panic!("scene color {other:?} should be RGB"),
            }
        }
    }

    #[test]
    fn test_front_layers_brighter_than_back() {
        // Depth reads through brightness: nearer layers are lighter
        fn luma(c: Color) -> u32 {
            match c {
                Color::Rgb(r, g, b) => r as u32 + g as u32 + b as u32,
                _ => 0,
            }
        }
        assert!(luma(MOUNTAIN_FRONT) > luma(MOUNTAIN_MID));
        assert!(luma(MOUNTAIN_MID) > luma(MOUNTAIN_BACK));
        assert!(luma(TREE_FRONT) > luma(TREE_BACK));
    }
}

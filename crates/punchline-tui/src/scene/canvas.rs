//! Braille-based drawing canvas for the landscape scene.
//!
//! Each terminal character cell represents a 2x4 grid of braille dots,
//! providing 2x horizontal and 4x vertical sub-character resolution.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

// ── Braille canvas ────────────────────────────────────────────────────────────

/// Braille dot bit positions indexed by [y % 4][x % 2].
///
/// Unicode braille standard (U+2800–U+28FF):
///
/// ```text
/// Dot 1 (0x01) | Dot 4 (0x08)
/// Dot 2 (0x02) | Dot 5 (0x10)
/// Dot 3 (0x04) | Dot 6 (0x20)
/// Dot 7 (0x40) | Dot 8 (0x80)
/// ```
///
/// Each entry: BRAILLE_BIT_MAP[row_within_cell][col_within_cell]
pub(crate) const BRAILLE_BIT_MAP: [[u8; 2]; 4] = [
    [0x01, 0x08], // row 0: dot 1, dot 4
    [0x02, 0x10], // row 1: dot 2, dot 5
    [0x04, 0x20], // row 2: dot 3, dot 6
    [0x40, 0x80], // row 3: dot 7, dot 8
];

/// A braille-based drawing canvas.
///
/// Each character cell is a 2x4 grid of dots (Unicode braille, U+2800–U+28FF).
/// Coordinates are in "dot space": x ranges 0..width*2, y ranges 0..height*4.
///
/// Coordinates are signed because parallax layers slide above and below
/// the visible scene; dots outside the canvas are silently dropped.
pub struct BrailleCanvas {
    /// Braille dot-pattern per cell: cells[row][col].
    cells: Vec<Vec<u8>>,
    /// Character columns.
    width: usize,
    /// Character rows.
    height: usize,
}

impl BrailleCanvas {
    /// Create a blank braille canvas with the given character dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![0u8; width]; height],
            width,
            height,
        }
    }

    /// True if no dot has been set.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&b| b == 0))
    }

    /// Set a dot at `(x, y)` in dot-space coordinates.
    ///
    /// Out-of-bounds coordinates (negative included) are silently ignored.
    pub fn set(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 {
            return;
        }
        let col = (x / 2) as usize;
        let row = (y / 4) as usize;
        if col >= self.width || row >= self.height {
            return;
        }
        let bit = BRAILLE_BIT_MAP[(y % 4) as usize][(x % 2) as usize];
        self.cells[row][col] |= bit;
    }

    /// Fill a horizontal span of dots on scanline `y`, inclusive on both ends.
    pub fn fill_span(&mut self, y: i32, x0: i32, x1: i32) {
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in lo..=hi {
            self.set(x, y);
        }
    }

    /// Draw a line between two dot-space points (Bresenham).
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Render the canvas into a ratatui [`Buffer`] at the given position.
    ///
    /// Each non-empty cell is rendered as a Unicode braille character
    /// (U+2800 base + dot pattern). All cells in this canvas share the same
    /// `color`; empty cells are left untouched so earlier layers show
    /// through. Callers drawing multiple overlapping layers composite them
    /// by rendering one canvas per color, back to front.
    pub fn render_to_buffer(&self, buf: &mut Buffer, area: Rect, color: Color) {
        let style = Style::default().fg(color);
        for row in 0..self.height {
            let y = area.y + row as u16;
            if y >= area.bottom() {
                break;
            }
            for col in 0..self.width {
                let x = area.x + col as u16;
                if x >= area.right() {
                    break;
                }
                let bits = self.cells[row][col];
                if bits != 0 {
                    let ch = char::from_u32(0x2800 + bits as u32).unwrap_or('\u{2800}');
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_char(ch).set_style(style);
                    }
                }
            }
        }
    }

    #[cfg(test)]
    fn bits_at(&self, col: usize, row: usize) -> u8 {
        self.cells[row][col]
    }
}

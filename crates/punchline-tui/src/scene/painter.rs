//! Rasterizes the landscape header into braille canvases.
//!
//! The scene is composited per color layer, back to front: sky, the
//! three mountain bands, background trees, foreground trees, the send
//! button and finally the detached plane. Each layer gets its own
//! canvas so a single cell never mixes two colors; later layers
//! override earlier ones only where they have dots.
//!
//! Layer placement works in "elevation": height in dots above the scene
//! floor. A band's parallax offset minus the shared rest offset is its
//! current elevation, so everything sits on the floor at rest and rises
//! as the header stretches, deeper bands rising further.

use std::time::Instant;

use punchline_app::AppState;
use punchline_core::geometry::{quad_point, Bounds, PathSegment, Point};
use punchline_core::parallax::{
    bg_tree_base, button_center, button_radius, fg_tree_base, mountain_offsets, mountain_travel,
    panel_opacity, plane_rotation, SceneMetrics,
};
use punchline_core::{close_glyph, mountain_silhouette, paper_plane, tree, MountainRatios};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use super::canvas::BrailleCanvas;
use crate::theme::{palette, styles};

// ── Scene composition ─────────────────────────────────────────────────────────

/// Band heights as fractions of scene height.
const BACK_HEIGHT: f32 = 0.85;
const MID_HEIGHT: f32 = 0.62;
const FRONT_HEIGHT: f32 = 0.45;

/// Ridge boxes per band: (x, width, left_y, peak_x, right_y).
/// Positions and widths are fractions of scene width, the rest are
/// silhouette ratios. Boxes overhang the edges so the bands meet the
/// sides at every parallax offset.
const BACK_RIDGES: [(f32, f32, f32, f32, f32); 2] = [
    (-0.08, 0.64, 0.6, 0.4, 1.0),
    (0.42, 0.7, 1.0, 0.55, 0.55),
];
const MID_RIDGES: [(f32, f32, f32, f32, f32); 3] = [
    (-0.12, 0.52, 0.5, 0.45, 1.0),
    (0.3, 0.5, 1.0, 0.5, 0.85),
    (0.68, 0.48, 0.9, 0.6, 0.5),
];
const FRONT_RIDGES: [(f32, f32, f32, f32, f32); 2] = [
    (-0.15, 0.68, 0.55, 0.5, 1.0),
    (0.42, 0.75, 1.0, 0.55, 0.7),
];

/// Tree trunk positions as fractions of scene width.
const FG_TREES: [f32; 3] = [0.15, 0.38, 0.85];
const BG_TREES: [f32; 4] = [0.08, 0.28, 0.6, 0.93];

/// Tree heights as fractions of scene height; canopy width follows.
const FG_TREE_HEIGHT: f32 = 0.4;
const BG_TREE_HEIGHT: f32 = 0.26;
const TREE_ASPECT: f32 = 0.6;

/// Side of the square glyph box, as a multiple of the button radius.
const GLYPH_SIDE_RATIO: f32 = 1.5;

/// Glyphs below this opacity are not worth a canvas pass.
const MIN_GLYPH_OPACITY: f32 = 0.05;

const TITLE: &str = "Punchline";

/// Draw the whole header scene for the current instant.
pub fn render_scene(state: &AppState, now: Instant, area: Rect, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    fill_sky(buf, area);

    let scene = SceneMetrics::from_cells(area.width, area.height);
    let p = state.progress(now);
    let travel = mountain_travel(scene.width);
    let offsets = mountain_offsets(p, travel);
    let (fg_bend, bg_bend) = state.parallax.tree_bends(p, now);

    render_band(
        buf,
        area,
        scene,
        BACK_HEIGHT,
        &BACK_RIDGES,
        offsets.back - travel,
        palette::MOUNTAIN_BACK,
    );
    render_band(
        buf,
        area,
        scene,
        MID_HEIGHT,
        &MID_RIDGES,
        offsets.mid - travel,
        palette::MOUNTAIN_MID,
    );
    render_trees(
        buf,
        area,
        scene,
        &BG_TREES,
        BG_TREE_HEIGHT,
        bg_tree_base(MID_HEIGHT * scene.height, offsets.mid),
        bg_bend,
        palette::TREE_BACK,
    );
    render_band(
        buf,
        area,
        scene,
        FRONT_HEIGHT,
        &FRONT_RIDGES,
        offsets.front - travel,
        palette::MOUNTAIN_FRONT,
    );
    render_trees(
        buf,
        area,
        scene,
        &FG_TREES,
        FG_TREE_HEIGHT,
        fg_tree_base(FRONT_HEIGHT * scene.height, offsets.front),
        fg_bend,
        palette::TREE_FRONT,
    );
    render_button(buf, area, scene, state, p, now);
    render_flight(buf, area, scene, state, now);
    render_title_bar(buf, area, p);
}

fn fill_sky(buf: &mut Buffer, area: Rect) {
    let style = Style::default().bg(palette::SKY);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ');
                cell.set_style(style);
            }
        }
    }
}

/// One mountain band: its ridge silhouettes plus solid ground from the
/// ridge floor down to the scene floor, so a risen band never shows a
/// gap underneath.
#[allow(clippy::too_many_arguments)]
fn render_band(
    buf: &mut Buffer,
    area: Rect,
    scene: SceneMetrics,
    height_ratio: f32,
    ridges: &[(f32, f32, f32, f32, f32)],
    elevation: f32,
    color: ratatui::style::Color,
) {
    let mut canvas = BrailleCanvas::new(area.width as usize, area.height as usize);
    let band_height = height_ratio * scene.height;
    let bottom = scene.height - elevation;

    for &(x, width, left_y, peak_x, right_y) in ridges {
        let bounds = Bounds::new(
            x * scene.width,
            bottom - band_height,
            width * scene.width,
            band_height,
        );
        fill_path(
            &mut canvas,
            &mountain_silhouette(MountainRatios::new(left_y, peak_x, right_y), bounds),
        );
    }

    for y in bottom.round() as i32..scene.height as i32 {
        canvas.fill_span(y, 0, scene.width as i32);
    }

    canvas.render_to_buffer(buf, area, color);
}

#[allow(clippy::too_many_arguments)]
fn render_trees(
    buf: &mut Buffer,
    area: Rect,
    scene: SceneMetrics,
    trunks: &[f32],
    height_ratio: f32,
    base_elevation: f32,
    bend: f32,
    color: ratatui::style::Color,
) {
    let mut canvas = BrailleCanvas::new(area.width as usize, area.height as usize);
    let tree_height = height_ratio * scene.height;
    let tree_width = TREE_ASPECT * tree_height;
    let feet = scene.height - base_elevation;

    for &cx in trunks {
        let bounds = Bounds::new(
            cx * scene.width - tree_width / 2.0,
            feet - tree_height,
            tree_width,
            tree_height,
        );
        fill_path(&mut canvas, &tree(bounds, bend));
    }

    canvas.render_to_buffer(buf, area, color);
}

/// The send button: a filled disc with the plane or close glyph
/// crossfading on top of it.
fn render_button(
    buf: &mut Buffer,
    area: Rect,
    scene: SceneMetrics,
    state: &AppState,
    p: f32,
    now: Instant,
) {
    let visual = state.button.visual(now);
    let center = button_center(scene, state.parallax.button_offset(now));
    let radius = button_radius(scene) * visual.scale;

    if radius < 1.0 || center.y - radius >= scene.height {
        return;
    }

    let mut disc = BrailleCanvas::new(area.width as usize, area.height as usize);
    fill_disc(&mut disc, center, radius);
    disc.render_to_buffer(buf, area, palette::BUTTON_DISC);

    let side = GLYPH_SIDE_RATIO * radius;
    let glyph_box = Bounds::new(center.x - side / 2.0, center.y - side / 2.0, side, side);

    if visual.plane_opacity > MIN_GLYPH_OPACITY {
        let color = styles::blend(
            palette::BUTTON_DISC,
            palette::BUTTON_GLYPH,
            visual.plane_opacity,
        );
        let rotation = plane_rotation(p) + visual.rotation;
        draw_glyph(
            buf,
            area,
            &paper_plane(glyph_box),
            center,
            rotation,
            false,
            color,
        );
    }
    if visual.close_opacity > MIN_GLYPH_OPACITY {
        let color = styles::blend(
            palette::BUTTON_DISC,
            palette::BUTTON_GLYPH,
            visual.close_opacity,
        );
        draw_glyph(
            buf,
            area,
            &close_glyph(glyph_box),
            center,
            visual.rotation,
            false,
            color,
        );
    }
}

/// The detached plane riding its flight path.
fn render_flight(buf: &mut Buffer, area: Rect, scene: SceneMetrics, state: &AppState, now: Instant) {
    let Some(plane) = state.sequencer.plane() else {
        return;
    };

    let position = plane.position(now);
    let side = GLYPH_SIDE_RATIO * button_radius(scene) * plane.scale(now);
    if side < 1.0 {
        return;
    }

    let glyph_box = Bounds::new(
        position.x - side / 2.0,
        position.y - side / 2.0,
        side,
        side,
    );
    draw_glyph(
        buf,
        area,
        &paper_plane(glyph_box),
        position,
        plane.rotation(),
        plane.mirrored(),
        palette::PLANE_FLIGHT,
    );
}

/// Title bar fading in over the top row as the header collapses.
fn render_title_bar(buf: &mut Buffer, area: Rect, p: f32) {
    let opacity = panel_opacity(p);
    if opacity <= 0.0 {
        return;
    }

    let bg = styles::blend(palette::SKY, palette::BAR_BG, opacity);
    let fg = styles::blend(bg, palette::BAR_TITLE, opacity);
    let style = Style::default().bg(bg);
    let y = area.top();
    for x in area.left()..area.right() {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(' ');
            cell.set_style(style);
        }
    }

    let title_x = area.left() + area.width.saturating_sub(TITLE.len() as u16) / 2;
    buf.set_string(title_x, y, TITLE, Style::default().fg(fg).bg(bg));
}

// ── Rasterization ─────────────────────────────────────────────────────────────

const QUAD_STEPS: usize = 12;

/// Flatten segments into polylines, quadratics sampled at fixed steps.
/// The bool marks rings that were explicitly closed.
fn flatten(segments: &[PathSegment]) -> Vec<(Vec<Point>, bool)> {
    let mut paths = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for segment in segments {
        match *segment {
            PathSegment::MoveTo(p) => {
                if current.len() > 1 {
                    paths.push((std::mem::take(&mut current), false));
                } else {
                    current.clear();
                }
                current.push(p);
            }
            PathSegment::LineTo(p) => current.push(p),
            PathSegment::QuadTo { control, to } => {
                if let Some(&from) = current.last() {
                    for i in 1..=QUAD_STEPS {
                        current.push(quad_point(from, control, to, i as f32 / QUAD_STEPS as f32));
                    }
                }
            }
            PathSegment::Close => {
                if current.len() > 1 {
                    paths.push((std::mem::take(&mut current), true));
                } else {
                    current.clear();
                }
            }
        }
    }
    if current.len() > 1 {
        paths.push((current, false));
    }
    paths
}

/// Fill every closed ring of a path; open polylines are stroked.
fn fill_path(canvas: &mut BrailleCanvas, segments: &[PathSegment]) {
    for (points, closed) in flatten(segments) {
        if closed {
            fill_ring(canvas, &points);
        } else {
            stroke_polyline(canvas, &points, false);
        }
    }
}

/// Rasterize a path as strokes/fills after rotating and mirroring it
/// about `pivot`, on a fresh canvas rendered in `color`.
#[allow(clippy::too_many_arguments)]
fn draw_glyph(
    buf: &mut Buffer,
    area: Rect,
    segments: &[PathSegment],
    pivot: Point,
    rotation: f32,
    mirrored: bool,
    color: ratatui::style::Color,
) {
    let mut canvas = BrailleCanvas::new(area.width as usize, area.height as usize);
    for (mut points, closed) in flatten(segments) {
        transform_points(&mut points, pivot, rotation, mirrored);
        if closed {
            fill_ring(&mut canvas, &points);
        } else {
            stroke_polyline(&mut canvas, &points, false);
        }
    }
    canvas.render_to_buffer(buf, area, color);
}

/// Mirror (horizontally) and rotate points about a pivot. With y
/// growing downward, positive rotation turns clockwise on screen.
fn transform_points(points: &mut [Point], pivot: Point, rotation: f32, mirrored: bool) {
    let (sin, cos) = rotation.sin_cos();
    for p in points.iter_mut() {
        let mut dx = p.x - pivot.x;
        let dy = p.y - pivot.y;
        if mirrored {
            dx = -dx;
        }
        p.x = pivot.x + dx * cos - dy * sin;
        p.y = pivot.y + dx * sin + dy * cos;
    }
}

/// Even-odd scanline fill of one ring, sampling dot centers.
fn fill_ring(canvas: &mut BrailleCanvas, ring: &[Point]) {
    if ring.len() < 3 {
        return;
    }

    let min_y = ring.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = ring.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);

    let mut crossings: Vec<f32> = Vec::new();
    for y in min_y.floor() as i32..max_y.ceil() as i32 {
        let sample = y as f32 + 0.5;
        crossings.clear();

        for i in 0..ring.len() {
            let a = ring[i];
            let b = ring[(i + 1) % ring.len()];
            if (a.y <= sample) != (b.y <= sample) {
                let t = (sample - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }

        crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        for pair in crossings.chunks_exact(2) {
            canvas.fill_span(y, pair[0].round() as i32, pair[1].round() as i32);
        }
    }
}

/// Scanline fill of a disc, sampling dot centers.
fn fill_disc(canvas: &mut BrailleCanvas, center: Point, radius: f32) {
    let min_y = (center.y - radius).floor() as i32;
    let max_y = (center.y + radius).ceil() as i32;
    for y in min_y..max_y {
        let sample = y as f32 + 0.5;
        let dy = sample - center.y;
        let reach = radius * radius - dy * dy;
        if reach <= 0.0 {
            continue;
        }
        let half = reach.sqrt();
        canvas.fill_span(
            y,
            (center.x - half).round() as i32,
            (center.x + half).round() as i32,
        );
    }
}

fn stroke_polyline(canvas: &mut BrailleCanvas, points: &[Point], closed: bool) {
    if points.len() < 2 {
        return;
    }
    for pair in points.windows(2) {
        line_between(canvas, pair[0], pair[1]);
    }
    if closed {
        line_between(canvas, points[points.len() - 1], points[0]);
    }
}

fn line_between(canvas: &mut BrailleCanvas, a: Point, b: Point) {
    canvas.line(
        a.x.round() as i32,
        a.y.round() as i32,
        b.x.round() as i32,
        b.y.round() as i32,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use punchline_app::AppState;

    fn render(state: &AppState, now: Instant, rows: u16) -> (Buffer, Rect) {
        let area = Rect::new(0, 0, 80, rows);
        let mut buf = Buffer::empty(area);
        render_scene(state, now, area, &mut buf);
        (buf, area)
    }

    fn row_text(buf: &Buffer, area: Rect, y: u16) -> String {
        (area.left()..area.right())
            .map(|x| buf[(x, y)].symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    fn is_braille(symbol: &str) -> bool {
        symbol
            .chars()
            .next()
            .map(|c| ('\u{2800}'..='\u{28FF}').contains(&c))
            .unwrap_or(false)
    }

    #[test]
    fn test_scene_fills_sky_background() {
        let now = Instant::now();
        let state = AppState::new();
        let (buf, area) = render(&state, now, 10);

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                assert_eq!(buf[(x, y)].bg, palette::SKY, "cell ({x},{y})");
            }
        }
    }

    #[test]
    fn test_scene_draws_braille_layers() {
        let now = Instant::now();
        let state = AppState::new();
        let (buf, area) = render(&state, now, 10);

        let braille_cells = (area.top()..area.bottom())
            .flat_map(|y| (area.left()..area.right()).map(move |x| (x, y)))
            .filter(|&(x, y)| is_braille(buf[(x, y)].symbol()))
            .count();
        // mountains and trees cover a good share of the canvas
        assert!(braille_cells > 100, "only {braille_cells} braille cells");
    }

    #[test]
    fn test_button_disc_rendered_near_bottom_center() {
        let now = Instant::now();
        let state = AppState::new();
        let (buf, area) = render(&state, now, 10);

        let found = (area.bottom().saturating_sub(3)..area.bottom())
            .flat_map(|y| (35u16..45).map(move |x| (x, y)))
            .any(|(x, y)| {
                let cell = &buf[(x, y)];
                is_braille(cell.symbol())
                    && (cell.fg == palette::BUTTON_DISC || cell.fg == palette::BUTTON_GLYPH)
            });
        assert!(found, "no disc cells near the bottom center");
    }

    #[test]
    fn test_collapsed_header_shows_title() {
        let now = Instant::now();
        let mut state = AppState::new();
        state.scroll.to_bottom(state.max_scroll());
        let rows = state.header_rows(now);
        assert_eq!(rows, state.layout.min);

        let (buf, area) = render(&state, now, rows);
        assert!(row_text(&buf, area, 0).contains(TITLE));
    }

    #[test]
    fn test_title_absent_at_rest() {
        let now = Instant::now();
        let state = AppState::new();
        let (buf, area) = render(&state, now, 10);
        assert!(!row_text(&buf, area, 0).contains(TITLE));
    }

    #[test]
    fn test_pull_moves_the_landscape() {
        let now = Instant::now();
        let rest = AppState::new();
        let (rest_buf, area) = render(&rest, now, 10);

        let mut pulled = AppState::new();
        for _ in 0..4 {
            pulled.scroll.scroll_up(now);
        }
        assert!(pulled.progress(now) > 1.0);
        let (pulled_buf, _) = render(&pulled, now, 10);

        let differs = (area.top()..area.bottom()).any(|y| {
            (area.left()..area.right())
                .any(|x| rest_buf[(x, y)].symbol() != pulled_buf[(x, y)].symbol())
        });
        assert!(differs, "pulling left the scene unchanged");
    }

    #[test]
    fn test_flight_renders_detached_plane() {
        let now = Instant::now();
        let mut state = AppState::new();
        let frame = state.flight_frame(now);
        state.sequencer.start_refresh(frame, now);

        let (buf, area) = render(&state, now, 10);
        let found = (area.top()..area.bottom())
            .flat_map(|y| (area.left()..area.right()).map(move |x| (x, y)))
            .any(|(x, y)| buf[(x, y)].fg == palette::PLANE_FLIGHT);
        assert!(found, "no detached plane cells");
    }

    #[test]
    fn test_zero_area_is_a_no_op() {
        let now = Instant::now();
        let state = AppState::new();
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        render_scene(&state, now, area, &mut buf);
    }
}

//! Resolution-independent shape construction
//!
//! Every shape is built from a bounding box plus ratio parameters and
//! emitted as a list of [`PathSegment`]s for the renderer to rasterize.
//! Nothing here knows about cells, dots or colors.

/// A point in scene space (braille dot coordinates, f32 for tweening)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned box in scene space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.max_x() && p.y >= self.y && p.y < self.max_y()
    }
}

/// Minimal path vocabulary. Quadratics are flattened by the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, to: Point },
    Close,
}

/// Evaluate a quadratic Bezier at `t` in `[0, 1]`
pub fn quad_point(p0: Point, control: Point, p1: Point, t: f32) -> Point {
    let u = 1.0 - t;
    Point::new(
        u * u * p0.x + 2.0 * u * t * control.x + t * t * p1.x,
        u * u * p0.y + 2.0 * u * t * control.y + t * t * p1.y,
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Mountains
// ─────────────────────────────────────────────────────────────────────────────

/// Shape parameters for one mountain silhouette, each in `[0, 1]`.
///
/// `left_y`/`right_y` are where the ridge meets the left/right edge
/// (0 = top of the box), `peak_x` is the horizontal peak position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountainRatios {
    left_y: f32,
    peak_x: f32,
    right_y: f32,
}

impl MountainRatios {
    /// Out-of-range inputs are clamped into `[0, 1]`.
    pub fn new(left_y: f32, peak_x: f32, right_y: f32) -> Self {
        Self {
            left_y: left_y.clamp(0.0, 1.0),
            peak_x: peak_x.clamp(0.0, 1.0),
            right_y: right_y.clamp(0.0, 1.0),
        }
    }

    pub fn left_y(&self) -> f32 {
        self.left_y
    }

    pub fn peak_x(&self) -> f32 {
        self.peak_x
    }

    pub fn right_y(&self) -> f32 {
        self.right_y
    }
}

impl Default for MountainRatios {
    fn default() -> Self {
        Self {
            left_y: 0.5,
            peak_x: 0.5,
            right_y: 0.5,
        }
    }
}

/// Closed mountain polygon: floor, up the left edge, over the peak, down
/// the right edge, back along the floor.
pub fn mountain_silhouette(ratios: MountainRatios, bounds: Bounds) -> Vec<PathSegment> {
    let Bounds {
        x,
        y,
        width: w,
        height: h,
    } = bounds;

    vec![
        PathSegment::MoveTo(Point::new(x, y + h)),
        PathSegment::LineTo(Point::new(x, y + ratios.left_y() * h)),
        PathSegment::LineTo(Point::new(x + ratios.peak_x() * w, y)),
        PathSegment::LineTo(Point::new(x + w, y + ratios.right_y() * h)),
        PathSegment::LineTo(Point::new(x + w, y + h)),
        PathSegment::Close,
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Paper plane + close glyph
// ─────────────────────────────────────────────────────────────────────────────

/// Plane outline on a 56-unit design grid, nose pointing right.
const PLANE_POINTS: [(f32, f32); 6] = [
    (16.0, 14.0),
    (46.0, 29.0),
    (16.0, 42.0),
    (16.0, 29.0),
    (38.0, 29.0),
    (16.0, 23.0),
];

const PLANE_GRID: f32 = 56.0;

/// The paper-plane glyph scaled into `bounds`, as a closed polygon.
pub fn paper_plane(bounds: Bounds) -> Vec<PathSegment> {
    let map = |(px, py): (f32, f32)| {
        Point::new(
            bounds.x + px / PLANE_GRID * bounds.width,
            bounds.y + py / PLANE_GRID * bounds.height,
        )
    };

    let mut segments = Vec::with_capacity(PLANE_POINTS.len() + 1);
    segments.push(PathSegment::MoveTo(map(PLANE_POINTS[0])));
    for p in &PLANE_POINTS[1..] {
        segments.push(PathSegment::LineTo(map(*p)));
    }
    segments.push(PathSegment::Close);
    segments
}

/// Close (X) glyph: two open strokes across the middle of `bounds`.
pub fn close_glyph(bounds: Bounds) -> Vec<PathSegment> {
    let at = |fx: f32, fy: f32| {
        Point::new(
            bounds.x + fx * bounds.width,
            bounds.y + fy * bounds.height,
        )
    };

    vec![
        PathSegment::MoveTo(at(0.35, 0.35)),
        PathSegment::LineTo(at(0.65, 0.65)),
        PathSegment::MoveTo(at(0.35, 0.65)),
        PathSegment::LineTo(at(0.65, 0.35)),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Trees
// ─────────────────────────────────────────────────────────────────────────────

const CANOPY_BASE: f32 = 0.65;
const TRUNK_HALF_WIDTH: f32 = 0.06;

/// A conifer anchored to the bottom of `bounds`.
///
/// `bend` leans the canopy apex sideways, approximating a rotation about
/// the trunk base: positive bends right, negative left.
pub fn tree(bounds: Bounds, bend: f32) -> Vec<PathSegment> {
    let Bounds {
        x,
        y,
        width: w,
        height: h,
    } = bounds;

    let base_y = y + CANOPY_BASE * h;
    let apex = Point::new(x + 0.5 * w + bend.sin() * h * 0.6, y);
    let trunk_left = x + (0.5 - TRUNK_HALF_WIDTH) * w;
    let trunk_right = x + (0.5 + TRUNK_HALF_WIDTH) * w;

    vec![
        // canopy
        PathSegment::MoveTo(Point::new(x, base_y)),
        PathSegment::LineTo(apex),
        PathSegment::LineTo(Point::new(x + w, base_y)),
        PathSegment::Close,
        // trunk
        PathSegment::MoveTo(Point::new(trunk_left, base_y)),
        PathSegment::LineTo(Point::new(trunk_right, base_y)),
        PathSegment::LineTo(Point::new(trunk_right, y + h)),
        PathSegment::LineTo(Point::new(trunk_left, y + h)),
        PathSegment::Close,
    ]
}

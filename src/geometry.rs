//! Rectangles of the drawing surface.
//!
//! The origin is the top-left corner and `y` grows downwards.  Widths
//! and heights are not required to be positive: a partition fed with
//! out-of-range proportions may produce inverted rectangles.

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    /// Rectangle of size `width` × `height` anchored at the origin.
    pub fn from_size(width: f64, height: f64) -> Self {
        Rect { x: 0., y: 0., width, height }
    }

    /// Square of side `side` centred at (`cx`, `cy`).
    pub fn centered_square(cx: f64, cy: f64, side: f64) -> Self {
        let half = side / 2.;
        Rect { x: cx - half, y: cy - half, width: side, height: side }
    }

    pub fn min_x(&self) -> f64 { self.x.min(self.x + self.width) }
    pub fn min_y(&self) -> f64 { self.y.min(self.y + self.height) }
    pub fn max_x(&self) -> f64 { self.x.max(self.x + self.width) }
    pub fn max_y(&self) -> f64 { self.y.max(self.y + self.height) }
    pub fn mid_x(&self) -> f64 { self.x + self.width / 2. }
    pub fn mid_y(&self) -> f64 { self.y + self.height / 2. }

    /// The longest side.
    pub fn max_side(&self) -> f64 { self.width.max(self.height) }

    /// Signed area (negative for rectangles inverted along one axis).
    pub fn area(&self) -> f64 { self.width * self.height }

    /// Same origin and height, new width.
    pub fn with_width(self, width: f64) -> Self { Rect { width, ..self } }

    /// Same origin and width, new height.
    pub fn with_height(self, height: f64) -> Self { Rect { height, ..self } }

    /// The same region with non-negative width and height.
    pub fn normalized(&self) -> Self {
        Rect { x: self.min_x(), y: self.min_y(),
               width: self.width.abs(), height: self.height.abs() }
    }

    /// Whether `other` lies within `self` (both normalized).
    pub fn contains(&self, other: &Rect) -> bool {
        let eps = 1e-9 * self.max_side().abs().max(1.);
        other.min_x() >= self.min_x() - eps && other.max_x() <= self.max_x() + eps
            && other.min_y() >= self.min_y() - eps
            && other.max_y() <= self.max_y() + eps
    }
}

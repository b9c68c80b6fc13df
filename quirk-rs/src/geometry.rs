//! Points and axis-aligned rectangles in canvas coordinates (y grows downward).

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_by(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An axis-aligned rectangle given by its top-left corner and its size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// A square of side `2 * radius` centered on `center`.
    pub fn centered_square_with_radius(center: Point, radius: f64) -> Self {
        Self::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.y)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.x, self.bottom())
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// The four corners, clockwise from the top-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    pub fn shifted_by(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Grow (positive `padding`) or shrink (negative `padding`) the rectangle on every side.
    ///
    /// Shrinking never produces a negative size; the rectangle collapses onto its center instead.
    pub fn padded_by(&self, padding: f64) -> Self {
        let w = (self.w + padding * 2.0).max(0.0);
        let h = (self.h + padding * 2.0).max(0.0);
        let c = self.center();
        Self::new(c.x - w / 2.0, c.y - h / 2.0, w, h)
    }

    pub fn skip_top(&self, amount: f64) -> Self {
        let amount = amount.min(self.h);
        Self::new(self.x, self.y + amount, self.w, self.h - amount)
    }

    pub fn skip_bottom(&self, amount: f64) -> Self {
        Self::new(self.x, self.y, self.w, (self.h - amount).max(0.0))
    }

    pub fn skip_left(&self, amount: f64) -> Self {
        let amount = amount.min(self.w);
        Self::new(self.x + amount, self.y, self.w - amount, self.h)
    }

    pub fn skip_right(&self, amount: f64) -> Self {
        Self::new(self.x, self.y, (self.w - amount).max(0.0), self.h)
    }

    pub fn top_half(&self) -> Self {
        self.skip_bottom(self.h / 2.0)
    }

    pub fn bottom_half(&self) -> Self {
        self.skip_top(self.h / 2.0)
    }

    pub fn with_h(&self, h: f64) -> Self {
        Self::new(self.x, self.y, self.w, h)
    }

    /// Split the rectangle into horizontal bands, one per proportion, from top to bottom.
    pub fn split_rows(&self, proportions: &[f64]) -> Vec<Self> {
        let mut y = self.y;
        proportions
            .iter()
            .map(|p| {
                let band = Self::new(self.x, y, self.w, self.h * p);
                y += band.h;
                band
            })
            .collect()
    }

    /// Inclusive of the top/left edges, exclusive of the bottom/right edges.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.right() && p.y < self.bottom()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }

    /// True when the rectangle has no paintable area or can't be painted at all.
    pub fn is_degenerate(&self) -> bool {
        !self.is_finite() || self.w <= 0.0 || self.h <= 0.0
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// The same rectangle shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Fraction of this rectangle's height lying inside the vertical band
    /// `[band_top, band_bottom]`. Returns 0.0 for a degenerate rectangle.
    ///
    /// Sections span the full page width, so vertical overlap is the
    /// visibility measure used by the reveal engine.
    pub fn visible_fraction(&self, band_top: f64, band_bottom: f64) -> f64 {
        if self.h <= 0.0 || band_bottom <= band_top {
            return 0.0;
        }
        let overlap = (self.bottom().min(band_bottom) - self.y.max(band_top)).max(0.0);
        overlap / self.h
    }
}

/// The visible window onto the page, in page units.
///
/// `y` is the scroll offset (distance from the top of the page to the top
/// of the window). Renderers translate page units to cells or points;
/// `dpr` carries the device pixel ratio for backends that need it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    pub fn new(y: f64, width: f64, height: f64) -> Self {
        Self {
            y,
            width,
            height,
            dpr: 1.0,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

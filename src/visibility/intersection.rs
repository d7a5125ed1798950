use crate::foundation::core::{Point, Rect};

/// Visible window onto the page, in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, self.scroll_y, self.width, self.scroll_y + self.height)
    }

    /// Whether any part of `bounds` is on screen (edges touching do not count).
    pub fn overlaps(&self, bounds: Rect) -> bool {
        let v = self.rect();
        bounds.y0 < v.y1 && bounds.y1 > v.y0 && bounds.x0 < v.x1 && bounds.x1 > v.x0
    }
}

/// Fraction of `target`'s area inside `viewport`, in `0..=1`.
///
/// A zero-area target counts as fully visible when it sits inside the
/// viewport (edges inclusive) and invisible otherwise.
pub fn intersection_ratio(target: Rect, viewport: Rect) -> f64 {
    let area = target.area();
    if area <= 0.0 {
        return if contains_inclusive(viewport, target.origin()) {
            1.0
        } else {
            0.0
        };
    }
    let overlap = target.intersect(viewport).area();
    (overlap / area).clamp(0.0, 1.0)
}

fn contains_inclusive(r: Rect, p: Point) -> bool {
    p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
}

//! Axis-aligned bounding boxes in canvas cells.
//!
//! A box covers rows `[row, row + height)` and columns
//! `[column, column + width)`.  A single cell is a 1x1 box.  Boxes with a
//! zero or negative extent cover nothing and never collide.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub row: f64,
    pub column: f64,
    pub height: f64,
    pub width: f64,
}

impl Rect {
    pub fn new(row: f64, column: f64, height: f64, width: f64) -> Self {
        Self {
            row,
            column,
            height,
            width,
        }
    }

    /// The 1x1 box of a single cell.
    pub fn point(row: f64, column: f64) -> Self {
        Self::new(row, column, 1.0, 1.0)
    }

    pub fn is_empty(&self) -> bool {
        self.height <= 0.0 || self.width <= 0.0
    }

    pub fn center(&self) -> (f64, f64) {
        (self.row + self.height / 2.0, self.column + self.width / 2.0)
    }
}

/// True when the two boxes share at least one cell.
pub fn has_collision(a: &Rect, b: &Rect) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    overlaps(a.row, a.height, b.row, b.height) && overlaps(a.column, a.width, b.column, b.width)
}

#[inline]
fn overlaps(start_a: f64, len_a: f64, start_b: f64, len_b: f64) -> bool {
    start_a < start_b + len_b && start_b < start_a + len_a
}

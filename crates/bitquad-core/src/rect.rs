//! Rect - Rectangle regions
//!
//! A `Rect` is an origin plus a size. The far edges are exclusive:
//! `right()` and `bottom()` name the first column and row *outside* the
//! rectangle. Every rectangle in the workspace (scanner input, quadrant
//! split, leaf bounds) uses this one convention.
//!
//! Inclusive corner pairs, as used by hand-written test tables, are
//! converted once at the boundary with [`Rect::from_corners`].

use std::fmt;

/// A rectangle region
///
/// Small and `Copy`; passed by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Rect {
    /// Create a new rectangle from origin and size
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle from two inclusive corner points
    ///
    /// The corners may be given in either order. `from_corners(0, 0, 0, 0)`
    /// is the single pixel at the origin.
    ///
    /// # Panics
    ///
    /// Panics if the corners span all `2^32` columns or rows, since that
    /// width or height does not fit in a `u32`.
    pub fn from_corners(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        let (left, right) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (top, bottom) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        let w = (right - left).checked_add(1);
        let h = (bottom - top).checked_add(1);
        match (w, h) {
            (Some(w), Some(h)) => Self {
                x: left,
                y: top,
                w,
                h,
            },
            _ => panic!("corners ({x0}, {y0}) and ({x1}, {y1}) span more than u32::MAX pixels"),
        }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> u64 {
        self.x as u64 + self.w as u64
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.h as u64
    }

    /// Rightmost column inside the rectangle
    ///
    /// Meaningless for an empty rectangle.
    #[inline]
    pub fn last_x(&self) -> u32 {
        self.x + self.w.saturating_sub(1)
    }

    /// Bottom row inside the rectangle
    #[inline]
    pub fn last_y(&self) -> u32 {
        self.y + self.h.saturating_sub(1)
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Check if the rectangle is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x && (x as u64) < self.right() && y >= self.y && (y as u64) < self.bottom()
    }

    /// Check if this rectangle contains another
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Check if this rectangle shares at least one pixel with another
    pub fn overlaps(&self, other: &Rect) -> bool {
        (self.x as u64) < other.right()
            && self.right() > other.x as u64
            && (self.y as u64) < other.bottom()
            && self.bottom() > other.y as u64
    }

    /// Split into quadrants in top-left, top-right, bottom-left,
    /// bottom-right order
    ///
    /// The left column gets `w / 2` pixels and the right column the rest;
    /// rows are split the same way. An axis of length 1 is not split, so a
    /// one-pixel-wide or one-pixel-tall rectangle yields two halves, and a
    /// single pixel yields itself. Empty rectangles yield nothing.
    pub fn quadrants(&self) -> Vec<Rect> {
        if self.is_empty() {
            return Vec::new();
        }

        let cols = if self.w >= 2 {
            let left = self.w / 2;
            vec![(self.x, left), (self.x + left, self.w - left)]
        } else {
            vec![(self.x, self.w)]
        };
        let rows = if self.h >= 2 {
            let top = self.h / 2;
            vec![(self.y, top), (self.y + top, self.h - top)]
        } else {
            vec![(self.y, self.h)]
        };

        let mut out = Vec::with_capacity(cols.len() * rows.len());
        for &(y, h) in &rows {
            for &(x, w) in &cols {
                out.push(Rect::new(x, y, w, h));
            }
        }
        out
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} {}x{}", self.x, self.y, self.w, self.h)
    }
}

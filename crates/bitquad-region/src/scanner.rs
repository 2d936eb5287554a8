//! Region scanners
//!
//! A scanner answers one question about a rectangle of a [`Bitmap`]: is
//! it all white, all black, or mixed. The quadtree builder asks this once
//! per candidate node, so the answer has to be cheap for large pure
//! regions and stop early on mixed ones.
//!
//! Two strategies are provided:
//!
//! - [`NaiveScanner`] walks the rectangle row by row and returns as soon
//!   as it sees a pixel that differs from the first one.
//! - [`IntegralScanner`] precomputes a summed-area table of white pixels
//!   for one bitmap, after which every query is four table lookups.
//!
//! Both give identical answers for every valid rectangle.

use crate::error::{RegionError, RegionResult};
use bitquad_core::{Bitmap, Pixel, Rect, RegionColor};

/// Classifies rectangular regions of a bitmap
pub trait RegionScanner {
    /// Classify `rect` as white, black or mixed
    ///
    /// # Errors
    ///
    /// Returns an error if `rect` is empty or reaches outside `bitmap`.
    fn classify(&self, bitmap: &Bitmap, rect: Rect) -> RegionResult<RegionColor>;

    /// True if every pixel in `rect` is white
    fn is_white(&self, bitmap: &Bitmap, rect: Rect) -> RegionResult<bool> {
        Ok(self.classify(bitmap, rect)? == RegionColor::White)
    }

    /// True if every pixel in `rect` is black
    fn is_black(&self, bitmap: &Bitmap, rect: Rect) -> RegionResult<bool> {
        Ok(self.classify(bitmap, rect)? == RegionColor::Black)
    }
}

/// Pixel-by-pixel scanner with early exit
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveScanner;

impl RegionScanner for NaiveScanner {
    fn classify(&self, bitmap: &Bitmap, rect: Rect) -> RegionResult<RegionColor> {
        bitmap.check_rect(rect)?;

        let first = bitmap.get(rect.x, rect.y);
        let (x0, x1) = (rect.x as usize, rect.right() as usize);
        for y in rect.y..=rect.last_y() {
            // Both colors seen as soon as one pixel differs from the first
            if bitmap.row(y)[x0..x1].iter().any(|&p| p != first) {
                return Ok(RegionColor::Mixed);
            }
        }

        Ok(first.into())
    }
}

/// Summed-area table scanner
///
/// Borrows the bitmap it was built from and only classifies that bitmap;
/// any other bitmap, even one of the same size, is rejected with
/// [`RegionError::ScannerMismatch`]. The table holds
/// `(width + 1) * (height + 1)` counts so that row 0 and column 0 are zero.
#[derive(Debug, Clone)]
pub struct IntegralScanner<'a> {
    bitmap: &'a Bitmap,
    width: u32,
    height: u32,
    table: Vec<u64>,
}

impl<'a> IntegralScanner<'a> {
    /// Precompute white-pixel counts for `bitmap`
    pub fn new(bitmap: &'a Bitmap) -> Self {
        let width = bitmap.width();
        let height = bitmap.height();
        let stride = width as usize + 1;
        let mut table = vec![0u64; stride * (height as usize + 1)];

        for y in 0..height as usize {
            let mut row_sum = 0u64;
            for (x, &p) in bitmap.row(y as u32).iter().enumerate() {
                if p == Pixel::White {
                    row_sum += 1;
                }
                table[(y + 1) * stride + x + 1] = table[y * stride + x + 1] + row_sum;
            }
        }

        Self {
            bitmap,
            width,
            height,
            table,
        }
    }

    /// The bitmap this table was built for
    pub fn bitmap(&self) -> &'a Bitmap {
        self.bitmap
    }

    /// Get the width of the bitmap this table was built for
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height of the bitmap this table was built for
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of white pixels in `rect`
    ///
    /// # Errors
    ///
    /// Returns an error if `rect` is empty or outside the table.
    pub fn white_count(&self, rect: Rect) -> RegionResult<u64> {
        if rect.is_empty() {
            return Err(bitquad_core::Error::EmptyRect(rect).into());
        }
        if rect.right() > self.width as u64 || rect.bottom() > self.height as u64 {
            return Err(bitquad_core::Error::RectOutOfBounds {
                rect,
                width: self.width,
                height: self.height,
            }
            .into());
        }
        Ok(self.sum(rect))
    }

    #[inline]
    fn sum(&self, rect: Rect) -> u64 {
        let stride = self.width as usize + 1;
        let (x0, y0) = (rect.x as usize, rect.y as usize);
        let (x1, y1) = (rect.right() as usize, rect.bottom() as usize);
        self.table[y1 * stride + x1] + self.table[y0 * stride + x0]
            - self.table[y0 * stride + x1]
            - self.table[y1 * stride + x0]
    }
}

impl RegionScanner for IntegralScanner<'_> {
    fn classify(&self, bitmap: &Bitmap, rect: Rect) -> RegionResult<RegionColor> {
        if !std::ptr::eq(bitmap, self.bitmap) {
            return Err(RegionError::ScannerMismatch {
                expected: (self.width, self.height),
                actual: (bitmap.width(), bitmap.height()),
            });
        }
        bitmap.check_rect(rect)?;

        let white = self.sum(rect);
        Ok(if white == 0 {
            RegionColor::Black
        } else if white == rect.area() {
            RegionColor::White
        } else {
            RegionColor::Mixed
        })
    }
}

//! Bitmap - Two-valued raster image
//!
//! A [`Bitmap`] owns a dense, row-major array of [`Pixel`]s, one byte per
//! pixel. It is built once, from an [`ImageSource`] or a text grid, and
//! never mutated afterwards; scanners and builders borrow it read-only.
//!
//! # Pixel layout
//!
//! The pixel at `(x, y)` lives at index `x + width * y`.

use crate::error::{Error, Result};
use crate::pixel::Pixel;
use crate::rect::Rect;

/// A rectangular source of channel intensities
///
/// Implementations must be total over `0..width() x 0..height()` and
/// return the same value for the same coordinate every time. Only one
/// channel is consulted; a decoder for a color format reports its red
/// channel.
pub trait ImageSource {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Channel intensity at `(x, y)`
    fn intensity(&self, x: u32, y: u32) -> u32;
}

/// A black and white image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Bitmap {
    /// Create a bitmap from a row-major pixel buffer
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero and
    /// [`Error::DimensionMismatch`] if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a bitmap with every pixel set to `pixel`
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        })
    }

    /// Threshold an image source into a bitmap
    ///
    /// Any non-zero intensity becomes [`Pixel::White`]; zero becomes
    /// [`Pixel::Black`].
    pub fn from_source<S: ImageSource + ?Sized>(source: &S) -> Result<Self> {
        let width = source.width();
        let height = source.height();
        check_dimensions(width, height)?;

        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(Pixel::from_intensity(source.intensity(x, y)));
            }
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a bitmap from rows of `'0'` (black) and `'1'` (white)
    ///
    /// Rows are listed top to bottom.
    ///
    /// ```
    /// use bitquad_core::{Bitmap, Pixel};
    ///
    /// let bmp = Bitmap::from_rows(&["000", "100", "011"]).unwrap();
    /// assert_eq!(bmp.get(0, 1), Pixel::White);
    /// assert_eq!(bmp.get(0, 0), Pixel::Black);
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        check_dimensions(width as u32, height as u32)?;

        let mut pixels = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let count = line.chars().count();
            if count != width {
                return Err(Error::RaggedRows {
                    row,
                    expected: width,
                    actual: count,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pixel = Pixel::from_grid_char(ch).ok_or(Error::InvalidGridChar { ch, row, col })?;
                pixels.push(pixel);
            }
        }

        Ok(Self {
            width: width as u32,
            height: height as u32,
            pixels,
        })
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The rectangle covering the whole bitmap
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Get the pixel at `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`. Use [`Bitmap::try_get`]
    /// when the coordinate is not known to be valid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Pixel {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} bitmap",
            self.width,
            self.height
        );
        self.pixels[x as usize + self.width as usize * y as usize]
    }

    /// Get the pixel at `(x, y)`, or `None` if out of bounds
    #[inline]
    pub fn try_get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x < self.width && y < self.height {
            Some(self.pixels[x as usize + self.width as usize * y as usize])
        } else {
            None
        }
    }

    /// Get one row of pixels
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Pixel] {
        assert!(y < self.height, "row {y} out of bounds for height {}", self.height);
        let start = self.width as usize * y as usize;
        &self.pixels[start..start + self.width as usize]
    }

    /// All pixels in row-major order
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Number of white pixels
    pub fn count_white(&self) -> u64 {
        self.pixels.iter().filter(|p| p.is_white()).count() as u64
    }

    /// Verify that `rect` is non-empty and lies inside the bitmap
    ///
    /// # Errors
    ///
    /// [`Error::EmptyRect`] for a zero-area rectangle and
    /// [`Error::RectOutOfBounds`] for one reaching past the right or
    /// bottom edge.
    pub fn check_rect(&self, rect: Rect) -> Result<()> {
        if rect.is_empty() {
            return Err(Error::EmptyRect(rect));
        }
        if rect.right() > self.width as u64 || rect.bottom() > self.height as u64 {
            return Err(Error::RectOutOfBounds {
                rect,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Render the bitmap back to `'0'`/`'1'` rows
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| self.row(y).iter().map(|p| p.to_grid_char()).collect())
            .collect()
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(())
}

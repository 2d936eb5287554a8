//! Pixel values and region colors
//!
//! A [`Pixel`] is what a bitmap stores: exactly one of two symbols.
//! A [`RegionColor`] is what a scanner reports about a rectangle of
//! pixels, and adds a third state for rectangles holding both symbols.
//! The two are kept as separate enums so that `Mixed` can never be
//! written into a bitmap.

use std::fmt;

/// A single bitmap pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pixel {
    /// Zero intensity (ink)
    #[default]
    Black,
    /// Any non-zero intensity
    White,
}

impl Pixel {
    /// Threshold a channel intensity: zero is black, anything else white
    #[inline]
    pub fn from_intensity(value: u32) -> Self {
        if value != 0 { Pixel::White } else { Pixel::Black }
    }

    /// Parse a text-grid cell (`'1'` white, `'0'` black)
    #[inline]
    pub fn from_grid_char(ch: char) -> Option<Self> {
        match ch {
            '1' => Some(Pixel::White),
            '0' => Some(Pixel::Black),
            _ => None,
        }
    }

    /// The text-grid character for this pixel
    #[inline]
    pub fn to_grid_char(self) -> char {
        match self {
            Pixel::White => '1',
            Pixel::Black => '0',
        }
    }

    #[inline]
    pub fn is_white(self) -> bool {
        self == Pixel::White
    }

    #[inline]
    pub fn is_black(self) -> bool {
        self == Pixel::Black
    }
}

/// Classification of a rectangular region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionColor {
    /// Every pixel in the region is white
    White,
    /// Every pixel in the region is black
    Black,
    /// The region holds at least one pixel of each color
    Mixed,
}

impl RegionColor {
    /// True for `White` and `Black`
    #[inline]
    pub fn is_pure(self) -> bool {
        self != RegionColor::Mixed
    }

    /// Lowercase name used in tree dumps
    pub fn name(self) -> &'static str {
        match self {
            RegionColor::White => "white",
            RegionColor::Black => "black",
            RegionColor::Mixed => "mixed",
        }
    }
}

impl From<Pixel> for RegionColor {
    #[inline]
    fn from(pixel: Pixel) -> Self {
        match pixel {
            Pixel::White => RegionColor::White,
            Pixel::Black => RegionColor::Black,
        }
    }
}

impl fmt::Display for RegionColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_intensity() {
        assert_eq!(Pixel::from_intensity(0), Pixel::Black);
        assert_eq!(Pixel::from_intensity(1), Pixel::White);
        assert_eq!(Pixel::from_intensity(0xffff), Pixel::White);
    }

    #[test]
    fn test_grid_chars() {
        assert_eq!(Pixel::from_grid_char('1'), Some(Pixel::White));
        assert_eq!(Pixel::from_grid_char('0'), Some(Pixel::Black));
        assert_eq!(Pixel::from_grid_char('x'), None);
        assert_eq!(Pixel::White.to_grid_char(), '1');
        assert_eq!(Pixel::Black.to_grid_char(), '0');
    }

    #[test]
    fn test_region_color_from_pixel() {
        assert_eq!(RegionColor::from(Pixel::White), RegionColor::White);
        assert_eq!(RegionColor::from(Pixel::Black), RegionColor::Black);
        assert!(RegionColor::White.is_pure());
        assert!(RegionColor::Black.is_pure());
        assert!(!RegionColor::Mixed.is_pure());
        assert_eq!(RegionColor::Mixed.to_string(), "mixed");
    }
}

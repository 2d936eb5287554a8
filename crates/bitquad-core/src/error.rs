//! Error types for bitquad-core
//!
//! Construction failures (bad dimensions, malformed text grids) and
//! geometry violations (degenerate or out-of-range rectangles) are all
//! reported through [`Error`]. Single-pixel access through
//! [`Bitmap::get`](crate::Bitmap::get) is the exception: an out-of-range
//! coordinate there is a caller bug and panics.

use thiserror::Error;

/// bitquad core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Width or height is zero
    #[error("invalid bitmap dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match width * height
    #[error("pixel buffer length mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Rectangle with zero width or height
    #[error("empty rectangle: {0}")]
    EmptyRect(crate::Rect),

    /// Rectangle reaches outside the bitmap
    #[error("rectangle {rect} out of bounds for {width}x{height} bitmap")]
    RectOutOfBounds {
        rect: crate::Rect,
        width: u32,
        height: u32,
    },

    /// Character in a text grid that is neither '0' nor '1'
    #[error("invalid grid character {ch:?} at row {row}, column {col}")]
    InvalidGridChar { ch: char, row: usize, col: usize },

    /// Text grid rows have different lengths
    #[error("ragged grid: row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

//! bitquad-core - Basic data structures for bitmap quadtrees
//!
//! This crate provides the data the rest of the workspace operates on:
//!
//! - [`Pixel`] - A two-valued pixel (black or white)
//! - [`RegionColor`] - The tri-state classification of a rectangle
//! - [`Rect`] - Rectangle regions (origin + size, exclusive far edge)
//! - [`Bitmap`] - The immutable black and white image
//! - [`ImageSource`] - What a decoder must provide to build a [`Bitmap`]

pub mod bitmap;
pub mod error;
pub mod pixel;
pub mod rect;

pub use bitmap::{Bitmap, ImageSource};
pub use error::{Error, Result};
pub use pixel::{Pixel, RegionColor};
pub use rect::Rect;

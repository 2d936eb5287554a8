//! bitquad - Quadtree decomposition of two-valued bitmaps
//!
//! # Overview
//!
//! A [`Bitmap`] holds black and white pixels. A region scanner classifies
//! any rectangle of it as white, black or mixed, and the quadtree builder
//! uses those answers to split the bitmap into single-color regions:
//!
//! - Bitmaps, rectangles and colors ([`bitquad_core`])
//! - Region scanners and quadtree construction ([`region`])
//! - PNG and PNM decoding into bitmaps ([`io`])
//!
//! # Example
//!
//! ```
//! use bitquad::{Bitmap, RegionColor};
//! use bitquad::region::build_quadtree;
//!
//! let bmp = Bitmap::from_rows(&["000", "100", "011"]).unwrap();
//! let root = build_quadtree(&bmp, 1).unwrap();
//! assert_eq!(root.color(), RegionColor::Mixed);
//! assert_eq!(root.leaves().map(|l| l.bounds().area()).sum::<u64>(), 9);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use bitquad_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use bitquad_io as io;
pub use bitquad_region as region;

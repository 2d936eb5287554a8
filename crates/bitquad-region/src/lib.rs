//! bitquad-region - Region classification and quadtree construction
//!
//! This crate provides:
//!
//! - **Region scanners** - Decide whether a rectangle of a bitmap is all
//!   white, all black or mixed ([`NaiveScanner`], [`IntegralScanner`])
//! - **Quadtree construction** - Recursively partition a bitmap into
//!   single-color regions ([`QuadtreeBuilder`], [`build_quadtree`])
//!
//! # Examples
//!
//! ## Classifying a region
//!
//! ```
//! use bitquad_core::{Bitmap, Rect, RegionColor};
//! use bitquad_region::{NaiveScanner, RegionScanner};
//!
//! let bmp = Bitmap::from_rows(&["000", "100", "011"]).unwrap();
//! let scanner = NaiveScanner;
//!
//! // Corners are inclusive: (1,2)-(2,2) is the "11" at the bottom right
//! let rect = Rect::from_corners(1, 2, 2, 2);
//! assert_eq!(scanner.classify(&bmp, rect).unwrap(), RegionColor::White);
//! assert!(scanner.is_white(&bmp, rect).unwrap());
//! assert_eq!(scanner.classify(&bmp, bmp.bounds()).unwrap(), RegionColor::Mixed);
//! ```
//!
//! ## Building a quadtree
//!
//! ```
//! use bitquad_core::Bitmap;
//! use bitquad_region::{QuadtreeBuilder, QuadtreeOptions};
//!
//! let bmp = Bitmap::from_rows(&["000", "100", "011"]).unwrap();
//! let builder = QuadtreeBuilder::new(QuadtreeOptions::new(1));
//! let root = builder.build(&bmp).unwrap();
//!
//! let area: u64 = root.leaves().map(|leaf| leaf.bounds().area()).sum();
//! assert_eq!(area, 9);
//! ```

pub mod error;
pub mod quadtree;
pub mod scanner;

// Re-export core types
pub use bitquad_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export scanner types
pub use scanner::{IntegralScanner, NaiveScanner, RegionScanner};

// Re-export quadtree types and functions
pub use quadtree::{
    Leaves, QuadNode, QuadtreeBuilder, QuadtreeOptions, QuadtreeStats, build_quadtree,
};

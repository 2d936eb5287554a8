//! Quadtree - Hierarchical bitmap region decomposition
//!
//! A quadtree recursively divides a bitmap into four quadrants until
//! every region is a single color. Each [`QuadNode`] records the bounds
//! of its region and the scanner's classification of it.
//!
//! # Partitioning
//!
//! Starting from the full bitmap, each candidate rectangle is classified:
//!
//! - White or black: the rectangle becomes a leaf.
//! - Mixed and no larger than `min_region_size` in both directions: the
//!   rectangle becomes a *mixed leaf*. This is the only kind of leaf that
//!   is not a single color.
//! - Mixed otherwise: the rectangle is split with [`Rect::quadrants`] and
//!   each part is partitioned in top-left, top-right, bottom-left,
//!   bottom-right order.
//!
//! Left and top halves get `w / 2` and `h / 2` pixels, the right and
//! bottom halves the remainder. A side of length 1 is never split, so a
//! mixed strip one pixel wide or tall has two children instead of four.
//!
//! With the default `min_region_size` of 1 every leaf is pure, since a
//! single pixel cannot be mixed.
//!
//! # Examples
//!
//! ```
//! use bitquad_core::{Bitmap, RegionColor};
//! use bitquad_region::build_quadtree;
//!
//! let bmp = Bitmap::from_rows(&["0011", "0011", "1111", "1111"]).unwrap();
//! let root = build_quadtree(&bmp, 1).unwrap();
//!
//! assert_eq!(root.color(), RegionColor::Mixed);
//! assert_eq!(root.children().len(), 4);
//! assert_eq!(root.leaf_count(), 4);
//! assert!(root.children().iter().all(|c| c.is_leaf()));
//! ```

use crate::error::{RegionError, RegionResult};
use crate::scanner::{NaiveScanner, RegionScanner};
use bitquad_core::{Bitmap, Rect, RegionColor};
use std::fmt;

/// Options for quadtree construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadtreeOptions {
    /// Mixed regions at most this size in both directions are not split
    pub min_region_size: u32,
    /// Build the four quadrants of large regions on the rayon thread pool
    pub parallel: bool,
    /// Smallest region area (in pixels) that is forked in parallel mode
    pub parallel_min_area: u64,
}

impl Default for QuadtreeOptions {
    fn default() -> Self {
        Self {
            min_region_size: 1,
            parallel: false,
            parallel_min_area: 4096,
        }
    }
}

impl QuadtreeOptions {
    /// Create new options with the specified resolution floor
    pub fn new(min_region_size: u32) -> Self {
        Self {
            min_region_size,
            ..Default::default()
        }
    }

    /// Set the resolution floor
    pub fn with_min_region_size(mut self, size: u32) -> Self {
        self.min_region_size = size;
        self
    }

    /// Enable or disable parallel construction
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the smallest area that is built in parallel
    pub fn with_parallel_min_area(mut self, area: u64) -> Self {
        self.parallel_min_area = area;
        self
    }

    fn validate(&self) -> RegionResult<()> {
        if self.min_region_size == 0 {
            return Err(RegionError::InvalidParameters(
                "min_region_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// One region of a quadtree
///
/// A node is a leaf iff it has no children. Internal nodes are always
/// `Mixed`, and their children partition the node's bounds exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadNode {
    bounds: Rect,
    color: RegionColor,
    children: Vec<QuadNode>,
}

impl QuadNode {
    fn leaf(bounds: Rect, color: RegionColor) -> Self {
        Self {
            bounds,
            color,
            children: Vec::new(),
        }
    }

    fn internal(bounds: Rect, children: Vec<QuadNode>) -> Self {
        Self {
            bounds,
            color: RegionColor::Mixed,
            children,
        }
    }

    /// The region covered by this node
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The classification of the region
    #[inline]
    pub fn color(&self) -> RegionColor {
        self.color
    }

    /// Child nodes in top-left, top-right, bottom-left, bottom-right order
    #[inline]
    pub fn children(&self) -> &[QuadNode] {
        &self.children
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True for a mixed leaf left at the resolution floor
    #[inline]
    pub fn is_floor_leaf(&self) -> bool {
        self.is_leaf() && self.color == RegionColor::Mixed
    }

    /// Depth-first iterator over the leaves, in child order
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    /// Total number of nodes, this one included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(QuadNode::node_count).sum::<usize>()
    }

    /// Number of leaves below (or at) this node
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Number of levels below this node (a lone leaf has depth 0)
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Find the leaf covering `(x, y)`
    ///
    /// Returns `None` if the point lies outside this node's bounds.
    pub fn find_leaf(&self, x: u32, y: u32) -> Option<&QuadNode> {
        if !self.bounds.contains_point(x, y) {
            return None;
        }
        let mut node = self;
        while !node.is_leaf() {
            node = node
                .children
                .iter()
                .find(|c| c.bounds.contains_point(x, y))?;
        }
        Some(node)
    }

    /// Summary counts for the subtree rooted here
    pub fn stats(&self) -> QuadtreeStats {
        let mut stats = QuadtreeStats {
            depth: self.depth(),
            ..Default::default()
        };
        self.accumulate(&mut stats);
        stats
    }

    fn accumulate(&self, stats: &mut QuadtreeStats) {
        stats.nodes += 1;
        if !self.is_leaf() {
            for child in &self.children {
                child.accumulate(stats);
            }
            return;
        }

        stats.leaves += 1;
        let area = self.bounds.area();
        match self.color {
            RegionColor::White => {
                stats.white_leaves += 1;
                stats.white_area += area;
            }
            RegionColor::Black => {
                stats.black_leaves += 1;
                stats.black_area += area;
            }
            RegionColor::Mixed => {
                stats.mixed_leaves += 1;
                stats.mixed_area += area;
            }
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{} {}", "", self.bounds, self.color, indent = level * 2)?;
        for child in &self.children {
            child.write_indented(f, level + 1)?;
        }
        Ok(())
    }
}

/// One line per node, children indented two spaces below their parent
impl fmt::Display for QuadNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// Iterator over the leaves of a quadtree
pub struct Leaves<'a> {
    stack: Vec<&'a QuadNode>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a QuadNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if node.is_leaf() {
                return Some(node);
            }
            self.stack.extend(node.children.iter().rev());
        }
        None
    }
}

/// Summary counts of a quadtree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuadtreeStats {
    pub nodes: usize,
    pub leaves: usize,
    pub white_leaves: usize,
    pub black_leaves: usize,
    /// Mixed leaves left at the resolution floor
    pub mixed_leaves: usize,
    pub depth: usize,
    pub white_area: u64,
    pub black_area: u64,
    pub mixed_area: u64,
}

/// Builds a quadtree from a bitmap using a region scanner as the oracle
#[derive(Debug, Clone)]
pub struct QuadtreeBuilder<S = NaiveScanner> {
    scanner: S,
    options: QuadtreeOptions,
}

impl QuadtreeBuilder<NaiveScanner> {
    /// Create a builder using the [`NaiveScanner`]
    pub fn new(options: QuadtreeOptions) -> Self {
        Self {
            scanner: NaiveScanner,
            options,
        }
    }
}

impl Default for QuadtreeBuilder<NaiveScanner> {
    fn default() -> Self {
        Self::new(QuadtreeOptions::default())
    }
}

impl<S: RegionScanner + Sync> QuadtreeBuilder<S> {
    /// Create a builder with a custom scanner
    pub fn with_scanner(scanner: S, options: QuadtreeOptions) -> Self {
        Self { scanner, options }
    }

    /// Get the options
    pub fn options(&self) -> &QuadtreeOptions {
        &self.options
    }

    /// Get the scanner
    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    /// Partition `bitmap` and return the root node
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or the scanner rejects
    /// a rectangle. No partial tree is returned.
    pub fn build(&self, bitmap: &Bitmap) -> RegionResult<QuadNode> {
        self.options.validate()?;

        let root = self.partition(bitmap, bitmap.bounds())?;

        if log::log_enabled!(log::Level::Debug) {
            let stats = root.stats();
            log::debug!(
                "quadtree {}x{} (min region {}): {} nodes, {} leaves, depth {}",
                bitmap.width(),
                bitmap.height(),
                self.options.min_region_size,
                stats.nodes,
                stats.leaves,
                stats.depth
            );
        }

        Ok(root)
    }

    fn partition(&self, bitmap: &Bitmap, rect: Rect) -> RegionResult<QuadNode> {
        let color = self.scanner.classify(bitmap, rect)?;
        if color.is_pure() {
            return Ok(QuadNode::leaf(rect, color));
        }

        let floor = self.options.min_region_size;
        if rect.w <= floor && rect.h <= floor {
            log::trace!("mixed leaf at resolution floor: {}", rect);
            return Ok(QuadNode::leaf(rect, RegionColor::Mixed));
        }

        let fork = self.options.parallel && rect.area() >= self.options.parallel_min_area;
        let children = self.partition_all(bitmap, &rect.quadrants(), fork)?;
        Ok(QuadNode::internal(rect, children))
    }

    fn partition_all(&self, bitmap: &Bitmap, parts: &[Rect], fork: bool) -> RegionResult<Vec<QuadNode>> {
        match *parts {
            [tl, tr, bl, br] if fork => {
                let ((tl, tr), (bl, br)) = rayon::join(
                    || {
                        rayon::join(
                            || self.partition(bitmap, tl),
                            || self.partition(bitmap, tr),
                        )
                    },
                    || {
                        rayon::join(
                            || self.partition(bitmap, bl),
                            || self.partition(bitmap, br),
                        )
                    },
                );
                Ok(vec![tl?, tr?, bl?, br?])
            }
            [a, b] if fork => {
                let (a, b) = rayon::join(|| self.partition(bitmap, a), || self.partition(bitmap, b));
                Ok(vec![a?, b?])
            }
            _ => parts.iter().map(|&r| self.partition(bitmap, r)).collect(),
        }
    }
}

/// Build a quadtree with the [`NaiveScanner`]
///
/// # Arguments
///
/// * `bitmap` - Source bitmap
/// * `min_region_size` - Resolution floor (at least 1)
pub fn build_quadtree(bitmap: &Bitmap, min_region_size: u32) -> RegionResult<QuadNode> {
    QuadtreeBuilder::new(QuadtreeOptions::new(min_region_size)).build(bitmap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::IntegralScanner;
    use bitquad_core::Pixel;

    fn checkerboard(width: u32, height: u32) -> Bitmap {
        let pixels = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| {
                    if (x + y) % 2 == 0 {
                        Pixel::White
                    } else {
                        Pixel::Black
                    }
                })
            })
            .collect();
        Bitmap::new(width, height, pixels).unwrap()
    }

    fn assert_partition(node: &QuadNode) {
        if node.is_leaf() {
            return;
        }
        assert_eq!(node.color(), RegionColor::Mixed);
        let area: u64 = node.children().iter().map(|c| c.bounds().area()).sum();
        assert_eq!(area, node.bounds().area());
        for (i, a) in node.children().iter().enumerate() {
            assert!(node.bounds().contains_rect(&a.bounds()));
            for b in &node.children()[i + 1..] {
                assert!(!a.bounds().overlaps(&b.bounds()));
            }
            assert_partition(a);
        }
    }

    #[test]
    fn test_uniform_bitmap_is_single_leaf() {
        let bmp = Bitmap::filled(16, 9, Pixel::White).unwrap();
        let root = build_quadtree(&bmp, 1).unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.color(), RegionColor::White);
        assert_eq!(root.bounds(), bmp.bounds());
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn test_three_by_three_grid() {
        let bmp = Bitmap::from_rows(&["000", "100", "011"]).unwrap();
        let root = build_quadtree(&bmp, 1).unwrap();

        assert_eq!(root.color(), RegionColor::Mixed);
        let kids = root.children();
        assert_eq!(kids.len(), 4);
        assert_eq!(kids[0].bounds(), Rect::new(0, 0, 1, 1));
        assert_eq!(kids[0].color(), RegionColor::Black);
        assert_eq!(kids[1].bounds(), Rect::new(1, 0, 2, 1));
        assert_eq!(kids[1].color(), RegionColor::Black);
        assert_eq!(kids[2].bounds(), Rect::new(0, 1, 1, 2));
        assert_eq!(kids[2].children().len(), 2);
        assert_eq!(kids[3].bounds(), Rect::new(1, 1, 2, 2));
        assert_eq!(kids[3].children().len(), 4);

        assert_eq!(root.leaf_count(), 8);
        let covered: u64 = root.leaves().map(|l| l.bounds().area()).sum();
        assert_eq!(covered, 9);
        assert!(root.leaves().all(|l| l.color().is_pure()));
        assert_partition(&root);
    }

    #[test]
    fn test_floor_produces_mixed_leaves() {
        let bmp = checkerboard(4, 4);
        let root = build_quadtree(&bmp, 2).unwrap();
        assert_eq!(root.children().len(), 4);
        assert!(root.children().iter().all(QuadNode::is_floor_leaf));

        let stats = root.stats();
        assert_eq!(stats.mixed_leaves, 4);
        assert_eq!(stats.mixed_area, 16);
        assert_eq!(stats.depth, 1);
    }

    #[test]
    fn test_floor_one_always_pure() {
        let bmp = checkerboard(7, 5);
        let root = build_quadtree(&bmp, 1).unwrap();
        assert_eq!(root.leaf_count(), 35);
        assert!(root.leaves().all(|l| l.bounds().area() == 1 && l.color().is_pure()));
        assert_partition(&root);
    }

    #[test]
    fn test_zero_min_region_size_rejected() {
        let bmp = checkerboard(2, 2);
        assert!(matches!(
            build_quadtree(&bmp, 0),
            Err(RegionError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_thin_strip() {
        let bmp = Bitmap::from_rows(&["1", "0", "0", "1", "1"]).unwrap();
        let root = build_quadtree(&bmp, 1).unwrap();
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[0].bounds(), Rect::new(0, 0, 1, 2));
        assert_eq!(root.children()[1].bounds(), Rect::new(0, 2, 1, 3));
        assert_partition(&root);
        let covered: u64 = root.leaves().map(|l| l.bounds().area()).sum();
        assert_eq!(covered, 5);
    }

    #[test]
    fn test_find_leaf() {
        let bmp = Bitmap::from_rows(&["000", "100", "011"]).unwrap();
        let root = build_quadtree(&bmp, 1).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                let leaf = root.find_leaf(x, y).unwrap();
                assert!(leaf.bounds().contains_point(x, y));
                assert_eq!(leaf.color(), RegionColor::from(bmp.get(x, y)));
            }
        }
        assert!(root.find_leaf(3, 0).is_none());
    }

    #[test]
    fn test_deterministic() {
        let bmp = checkerboard(13, 11);
        let a = build_quadtree(&bmp, 1).unwrap();
        let b = build_quadtree(&bmp, 1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let bmp = checkerboard(37, 29);
        let seq = build_quadtree(&bmp, 1).unwrap();
        let options = QuadtreeOptions::default()
            .with_parallel(true)
            .with_parallel_min_area(1);
        let par = QuadtreeBuilder::new(options).build(&bmp).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn test_integral_scanner_builds_same_tree() {
        let bmp = Bitmap::from_rows(&["00110", "00111", "11000", "10000", "00001"]).unwrap();
        let naive = build_quadtree(&bmp, 1).unwrap();
        let builder = QuadtreeBuilder::with_scanner(IntegralScanner::new(&bmp), QuadtreeOptions::default());
        assert_eq!(builder.build(&bmp).unwrap(), naive);
    }

    #[test]
    fn test_display() {
        let bmp = Bitmap::from_rows(&["01", "11"]).unwrap();
        let root = build_quadtree(&bmp, 1).unwrap();
        assert_eq!(
            root.to_string(),
            "0,0 2x2 mixed\n  0,0 1x1 black\n  1,0 1x1 white\n  0,1 1x1 white\n  1,1 1x1 white\n"
        );
    }
}

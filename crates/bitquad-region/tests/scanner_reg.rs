//! Region scanner regression test
//!
//! Classifies rectangles given by inclusive corner pairs on small grids,
//! with both scanners, and checks `is_white` / `is_black` against the
//! three-way classification.
//!
//! Run with:
//! ```
//! cargo test -p bitquad-region --test scanner_reg
//! ```

use bitquad_core::{Bitmap, Rect, RegionColor};
use bitquad_region::{IntegralScanner, NaiveScanner, RegionScanner};
use bitquad_test::RegParams;

/// (min_x, min_y, max_x, max_y, expected)
type Case<T> = (u32, u32, u32, u32, T);

fn as_f64(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

#[test]
fn scanner_is_white() {
    let mut rp = RegParams::new("scanner_white");

    let bmp = Bitmap::from_rows(&["000", "100", "011"]).unwrap();
    let integral = IntegralScanner::new(&bmp);

    let cases: [Case<bool>; 7] = [
        (0, 0, 2, 2, false),
        (1, 1, 2, 2, false),
        (0, 1, 0, 1, true),
        (0, 0, 0, 0, false),
        (1, 0, 1, 0, false),
        (1, 0, 2, 1, false),
        (1, 2, 2, 2, true),
    ];

    for &(x0, y0, x1, y1, expected) in &cases {
        let rect = Rect::from_corners(x0, y0, x1, y1);
        let naive = NaiveScanner.is_white(&bmp, rect).expect("naive is_white");
        let fast = integral.is_white(&bmp, rect).expect("integral is_white");
        eprintln!("  is_white({}) = {}", rect, naive);
        rp.compare_values(as_f64(expected), as_f64(naive), 0.0);
        rp.compare_values(as_f64(expected), as_f64(fast), 0.0);
    }

    assert!(rp.cleanup(), "scanner is_white test failed");
}

#[test]
fn scanner_is_black() {
    let mut rp = RegParams::new("scanner_black");

    let bmp = Bitmap::from_rows(&["111", "011", "100"]).unwrap();
    let integral = IntegralScanner::new(&bmp);

    let cases: [Case<bool>; 8] = [
        (0, 0, 2, 2, false),
        (1, 1, 2, 2, false),
        (0, 1, 0, 1, true),
        (0, 0, 0, 0, false),
        (1, 0, 1, 0, false),
        (1, 0, 2, 1, false),
        (1, 2, 2, 2, true),
        (2, 2, 2, 2, true),
    ];

    for &(x0, y0, x1, y1, expected) in &cases {
        let rect = Rect::from_corners(x0, y0, x1, y1);
        let naive = NaiveScanner.is_black(&bmp, rect).expect("naive is_black");
        let fast = integral.is_black(&bmp, rect).expect("integral is_black");
        eprintln!("  is_black({}) = {}", rect, naive);
        rp.compare_values(as_f64(expected), as_f64(naive), 0.0);
        rp.compare_values(as_f64(expected), as_f64(fast), 0.0);
    }

    assert!(rp.cleanup(), "scanner is_black test failed");
}

#[test]
fn scanner_classify() {
    let mut rp = RegParams::new("scanner_classify");

    let bmp = Bitmap::from_rows(&["111", "011", "100"]).unwrap();
    let integral = IntegralScanner::new(&bmp);

    let cases: [Case<RegionColor>; 6] = [
        (0, 0, 2, 2, RegionColor::Mixed),
        (1, 1, 2, 2, RegionColor::Mixed),
        (0, 1, 0, 1, RegionColor::Black),
        (0, 0, 0, 0, RegionColor::White),
        (1, 0, 1, 0, RegionColor::White),
        (1, 0, 2, 1, RegionColor::White),
    ];

    for &(x0, y0, x1, y1, expected) in &cases {
        let rect = Rect::from_corners(x0, y0, x1, y1);
        let naive = NaiveScanner.classify(&bmp, rect).expect("naive classify");
        let fast = integral.classify(&bmp, rect).expect("integral classify");
        eprintln!("  classify({}) = {}", rect, naive);
        rp.compare_strings(expected.name().as_bytes(), naive.name().as_bytes());
        rp.compare_strings(expected.name().as_bytes(), fast.name().as_bytes());
    }

    // Inclusive corners given in either order name the same rectangle
    let swapped = NaiveScanner
        .classify(&bmp, Rect::from_corners(2, 1, 1, 0))
        .expect("swapped corners");
    rp.compare_strings(b"white", swapped.name().as_bytes());

    assert!(rp.cleanup(), "scanner classify test failed");
}

#[test]
fn scanner_invalid_rects() {
    let mut rp = RegParams::new("scanner_invalid");

    let bmp = Bitmap::from_rows(&["01", "10"]).unwrap();
    let integral = IntegralScanner::new(&bmp);

    let bad = [
        Rect::new(0, 0, 0, 2),
        Rect::new(0, 0, 2, 0),
        Rect::new(1, 1, 2, 1),
        Rect::new(2, 0, 1, 1),
        Rect::new(u32::MAX, 0, 1, 1),
    ];
    for rect in bad {
        rp.compare_values(1.0, as_f64(NaiveScanner.classify(&bmp, rect).is_err()), 0.0);
        rp.compare_values(1.0, as_f64(integral.classify(&bmp, rect).is_err()), 0.0);
    }

    // Same size, different pixels: the table describes `bmp` only
    let inverted = Bitmap::from_rows(&["10", "01"]).unwrap();
    let result = integral.classify(&inverted, Rect::new(0, 0, 1, 1));
    rp.compare_values(1.0, as_f64(result.is_err()), 0.0);
    let naive = NaiveScanner.classify(&inverted, Rect::new(0, 0, 1, 1)).unwrap();
    rp.compare_strings(b"white", naive.name().as_bytes());

    assert!(rp.cleanup(), "scanner invalid rect test failed");
}

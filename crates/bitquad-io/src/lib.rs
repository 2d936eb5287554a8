//! bitquad-io - Image decoding for bitquad
//!
//! Decoders turn encoded images into a [`Raster`], a single intensity
//! channel that implements [`ImageSource`](bitquad_core::ImageSource).
//! The `read_bitmap*` helpers then threshold that raster into a
//! [`Bitmap`]: zero is black, anything else white.
//!
//! # Supported formats
//!
//! | Format | Feature | Notes |
//! |--------|---------|-------|
//! | PNG | `png-format` | all color types; red channel or palette red |
//! | PNM | `pnm` | P1-P6; PBM ink (`1`) is black |
//!
//! # Examples
//!
//! ```
//! use bitquad_core::Pixel;
//!
//! let bmp = bitquad_io::read_bitmap_mem(b"P1\n2 1\n1 0\n").unwrap();
//! assert_eq!(bmp.get(0, 0), Pixel::Black);
//! assert_eq!(bmp.get(1, 0), Pixel::White);
//! ```

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;
mod raster;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use raster::Raster;

use bitquad_core::Bitmap;
use std::path::Path;

/// Decode an in-memory image into a raster
pub fn read_raster_mem(data: &[u8]) -> IoResult<Raster> {
    let format = detect_format_from_bytes(data)?;
    let raster = match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(std::io::Cursor::new(data))?,
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(data)?,
        #[allow(unreachable_patterns)]
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "{:?} support not enabled",
                other
            )));
        }
    };

    log::debug!(
        "decoded {:?} image {}x{}",
        format,
        bitquad_core::ImageSource::width(&raster),
        bitquad_core::ImageSource::height(&raster)
    );
    Ok(raster)
}

/// Decode an image file into a raster
pub fn read_raster<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let data = std::fs::read(path.as_ref())?;
    read_raster_mem(&data)
}

/// Decode an in-memory image and threshold it into a bitmap
pub fn read_bitmap_mem(data: &[u8]) -> IoResult<Bitmap> {
    let raster = read_raster_mem(data)?;
    Ok(Bitmap::from_source(&raster)?)
}

/// Decode an image file and threshold it into a bitmap
pub fn read_bitmap<P: AsRef<Path>>(path: P) -> IoResult<Bitmap> {
    let raster = read_raster(path)?;
    Ok(Bitmap::from_source(&raster)?)
}

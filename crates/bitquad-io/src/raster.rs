//! Decoded intensity plane
//!
//! Decoders do not produce a [`Bitmap`](bitquad_core::Bitmap) directly.
//! They produce a [`Raster`]: one channel of the source image (gray, or
//! red for color formats) at its native precision. Thresholding into a
//! bitmap happens in `Bitmap::from_source`.

use crate::{IoError, IoResult};
use bitquad_core::ImageSource;

/// A single-channel image, one `u16` sample per pixel, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    samples: Vec<u16>,
}

impl Raster {
    /// Create a raster from row-major samples
    pub fn new(width: u32, height: u32, samples: Vec<u16>) -> IoResult<Self> {
        let expected = width as usize * height as usize;
        if width == 0 || height == 0 {
            return Err(IoError::InvalidData(format!(
                "zero image dimension: {}x{}",
                width, height
            )));
        }
        if samples.len() != expected {
            return Err(IoError::InvalidData(format!(
                "sample count {} does not match {}x{}",
                samples.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Get the sample at `(x, y)`, or `None` if out of bounds
    pub fn get(&self, x: u32, y: u32) -> Option<u16> {
        if x < self.width && y < self.height {
            Some(self.samples[x as usize + self.width as usize * y as usize])
        } else {
            None
        }
    }

    /// All samples in row-major order
    pub fn samples(&self) -> &[u16] {
        &self.samples
    }
}

impl ImageSource for Raster {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn intensity(&self, x: u32, y: u32) -> u32 {
        self.samples[x as usize + self.width as usize * y as usize] as u32
    }
}

//! PNM (Portable Any Map) format support
//!
//! Reads PBM (P1 plain, P4 raw), PGM (P2 plain, P5 raw) and PPM
//! (P3 plain, P6 raw) into a [`Raster`], and writes bitmaps as plain PBM.
//!
//! PBM stores ink as `1`, so a set bit decodes to intensity 0 (black) and
//! a clear bit to intensity 1 (white). PPM images keep only the red
//! channel. Samples wider than 8 bits (maxval > 255) are read as
//! big-endian pairs.

use crate::{IoError, IoResult, Raster};
use bitquad_core::{Bitmap, Pixel};
use std::io::{Read, Write};

/// Read a PNM image from a reader.
///
/// # Arguments
/// * `reader` - Source positioned at the `P1`..`P6` magic
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<Raster> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(IoError::Io)?;

    let mut hdr = Tokens { data: &data, pos: 0 };
    let kind = hdr.magic()?;
    let width = hdr.uint("width")?;
    let height = hdr.uint("height")?;
    if width == 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "zero PNM dimension: {}x{}",
            width, height
        )));
    }

    let maxval = match kind {
        b'1' | b'4' => 1,
        _ => {
            let maxval = hdr.uint("maxval")?;
            if maxval == 0 || maxval > 65535 {
                return Err(IoError::InvalidData(format!(
                    "PNM maxval out of range: {}",
                    maxval
                )));
            }
            maxval
        }
    };

    let count = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| too_large(width, height))?;
    let samples = match kind {
        b'1' => {
            // Every plain bit takes at least one byte
            let mut out = Vec::with_capacity(count.min(hdr.remaining()));
            for _ in 0..count {
                out.push(ink_to_intensity(hdr.bit()?));
            }
            out
        }
        b'2' => plain_samples(&mut hdr, count, 1)?,
        b'3' => plain_samples(&mut hdr, count, 3)?,
        b'4' => {
            hdr.end_of_header()?;
            let stride = (width as usize).div_ceil(8);
            let len = stride
                .checked_mul(height as usize)
                .ok_or_else(|| too_large(width, height))?;
            let raw = hdr.take(len)?;
            let mut out = Vec::with_capacity(count);
            for row in raw.chunks(stride) {
                for x in 0..width as usize {
                    let bit = (row[x / 8] >> (7 - (x % 8))) & 1;
                    out.push(ink_to_intensity(bit));
                }
            }
            out
        }
        b'5' => {
            hdr.end_of_header()?;
            raw_samples(&mut hdr, (width, height), 1, maxval)?
        }
        b'6' => {
            hdr.end_of_header()?;
            raw_samples(&mut hdr, (width, height), 3, maxval)?
        }
        _ => unreachable!("magic() only accepts P1..P6"),
    };

    Raster::new(width, height, samples)
}

/// Write a bitmap as plain PBM (P1)
///
/// White pixels are written as `0` and black pixels as `1`, one image
/// row per line.
pub fn write_pbm<W: Write>(bitmap: &Bitmap, mut writer: W) -> IoResult<()> {
    writeln!(writer, "P1")?;
    writeln!(writer, "{} {}", bitmap.width(), bitmap.height())?;
    for y in 0..bitmap.height() {
        let line: String = bitmap
            .row(y)
            .iter()
            .map(|&p| if p == Pixel::Black { '1' } else { '0' })
            .collect();
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

fn too_large(width: u32, height: u32) -> IoError {
    IoError::InvalidData(format!("PNM dimensions too large: {}x{}", width, height))
}

#[inline]
fn ink_to_intensity(bit: u8) -> u16 {
    if bit != 0 { 0 } else { 1 }
}

fn plain_samples(hdr: &mut Tokens<'_>, count: usize, channels: usize) -> IoResult<Vec<u16>> {
    let mut out = Vec::with_capacity(count.min(hdr.remaining()));
    for _ in 0..count {
        let first = hdr.uint("sample")?;
        for _ in 1..channels {
            hdr.uint("sample")?;
        }
        out.push(first.min(u16::MAX as u32) as u16);
    }
    Ok(out)
}

fn raw_samples(
    hdr: &mut Tokens<'_>,
    (width, height): (u32, u32),
    channels: usize,
    maxval: u32,
) -> IoResult<Vec<u16>> {
    let bytes_per_sample = if maxval > 255 { 2 } else { 1 };
    let step = channels * bytes_per_sample;
    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|count| count.checked_mul(step))
        .ok_or_else(|| too_large(width, height))?;
    let raw = hdr.take(len)?;
    Ok(raw
        .chunks(step)
        .map(|px| {
            if bytes_per_sample == 2 {
                u16::from_be_bytes([px[0], px[1]])
            } else {
                px[0] as u16
            }
        })
        .collect())
}

/// Cursor over PNM header tokens and pixel data
struct Tokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn magic(&mut self) -> IoResult<u8> {
        match self.data {
            [b'P', kind @ b'1'..=b'6', ..] => {
                self.pos = 2;
                Ok(*kind)
            }
            _ => Err(IoError::InvalidData("not a PNM file".to_string())),
        }
    }

    /// Skip whitespace and `#` comments
    fn skip_space(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if b == b'#' {
                while let Some(&c) = self.data.get(self.pos) {
                    if c == b'\n' || c == b'\r' {
                        break;
                    }
                    self.pos += 1;
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn uint(&mut self, what: &str) -> IoResult<u32> {
        self.skip_space();
        let start = self.pos;
        while self.data.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(IoError::InvalidData(format!("PNM: expected {}", what)));
        }
        // Digits only, so this is valid UTF-8
        std::str::from_utf8(&self.data[start..self.pos])
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| IoError::InvalidData(format!("PNM: {} too large", what)))
    }

    /// One plain-PBM bit; digits need not be separated
    fn bit(&mut self) -> IoResult<u8> {
        self.skip_space();
        match self.data.get(self.pos) {
            Some(&b @ (b'0' | b'1')) => {
                self.pos += 1;
                Ok(b - b'0')
            }
            Some(&b) => Err(IoError::InvalidData(format!(
                "PBM: unexpected byte {:#04x} in pixel data",
                b
            ))),
            None => Err(IoError::InvalidData("PBM: truncated pixel data".to_string())),
        }
    }

    /// Consume the single whitespace byte that ends a raw header
    fn end_of_header(&mut self) -> IoResult<()> {
        match self.data.get(self.pos) {
            Some(b) if b.is_ascii_whitespace() => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(IoError::InvalidData(
                "PNM: missing whitespace after header".to_string(),
            )),
        }
    }

    /// Bytes left after the cursor
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, len: usize) -> IoResult<&'a [u8]> {
        if len > self.remaining() {
            return Err(IoError::InvalidData(format!(
                "PNM: truncated pixel data, need {} bytes, have {}",
                len,
                self.remaining()
            )));
        }
        let end = self.pos + len;
        let data: &'a [u8] = self.data;
        let slice = &data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitquad_core::ImageSource;

    #[test]
    fn test_read_plain_pbm() {
        let src = b"P1\n# a comment\n3 2\n0 1 0\n110\n";
        let raster = read_pnm(&src[..]).unwrap();
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        // Ink (1) is black
        assert_eq!(raster.samples(), &[1, 0, 1, 0, 0, 1]);
    }

    #[test]
    fn test_read_raw_pbm() {
        // 10 pixels wide: two bytes per row, last 6 bits padding
        let mut src = b"P4\n10 2\n".to_vec();
        src.extend_from_slice(&[0b1000_0000, 0b0100_0000, 0b0000_0000, 0b1100_0000]);
        let raster = read_pnm(&src[..]).unwrap();
        let bmp = Bitmap::from_source(&raster).unwrap();
        assert_eq!(bmp.to_rows(), vec!["0111111110", "1111111100"]);
    }

    #[test]
    fn test_read_raw_pgm_16bit() {
        let mut src = b"P5 2 1 65535\n".to_vec();
        src.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]);
        let raster = read_pnm(&src[..]).unwrap();
        assert_eq!(raster.samples(), &[0, 1]);
        assert_eq!(raster.intensity(1, 0), 1);
    }

    #[test]
    fn test_read_ppm_keeps_red() {
        let plain = b"P3 2 1 255\n0 255 255  9 0 0\n";
        assert_eq!(read_pnm(&plain[..]).unwrap().samples(), &[0, 9]);

        let mut raw = b"P6\n2 1\n255\n".to_vec();
        raw.extend_from_slice(&[0, 200, 200, 40, 0, 0]);
        assert_eq!(read_pnm(&raw[..]).unwrap().samples(), &[0, 40]);
    }

    #[test]
    fn test_read_errors() {
        assert!(read_pnm(&b"P7 1 1 255\n"[..]).is_err());
        assert!(read_pnm(&b"P1\n0 3\n"[..]).is_err());
        assert!(read_pnm(&b"P1\n2 2\n0 1 0\n"[..]).is_err());
        assert!(read_pnm(&b"P5\n2 2\n255\n\x00\x00\x00"[..]).is_err());
        assert!(read_pnm(&b"P2\n1 1\n0\n5\n"[..]).is_err());
        assert!(read_pnm(&b"P1\n2 1\n0 2\n"[..]).is_err());
    }

    #[test]
    fn test_read_huge_header_fails_cleanly() {
        let cases: [&[u8]; 6] = [
            b"P1\n4000000000 4000000000\n0\n",
            b"P2\n4000000000 4000000000\n255\n0\n",
            b"P3\n4000000000 4000000000\n255\n0 0 0\n",
            b"P4\n4000000000 4000000000\n\x00",
            b"P5\n4000000000 4000000000\n255\n\x00",
            b"P6\n4000000000 4000000000\n255\n\x00\x00\x00",
        ];
        for src in cases {
            let err = read_pnm(src).unwrap_err();
            assert!(matches!(err, IoError::InvalidData(_)), "{:?}", err);
        }

        // Large enough to abort if preallocated, small enough not to overflow
        let err = read_pnm(&b"P2\n100000 100000\n255\n0 0\n"[..]).unwrap_err();
        assert!(matches!(err, IoError::InvalidData(_)));
    }

    #[test]
    fn test_write_pbm() {
        let bmp = Bitmap::from_rows(&["01", "10"]).unwrap();
        let mut out = Vec::new();
        write_pbm(&bmp, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "P1\n2 2\n10\n01\n");

        let back = Bitmap::from_source(&read_pnm(&b"P1\n2 2\n10\n01\n"[..]).unwrap()).unwrap();
        assert_eq!(back, bmp);
    }
}

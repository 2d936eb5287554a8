//! PNG image format support
//!
//! Decodes any PNG color type into a single-channel [`Raster`]: gray
//! images keep their gray samples, color images keep red, and indexed
//! images are looked up in the palette's red column. Alpha is ignored.
//! Samples keep their native precision (1 to 16 bits).

use crate::{IoError, IoResult, Raster};
use png::{BitDepth, ColorType, Decoder};
use std::io::{BufRead, Seek};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let palette = reader.info().palette.as_ref().map(|p| p.to_vec());

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let color_type = output_info.color_type;
    let bits = match output_info.bit_depth {
        BitDepth::One => 1,
        BitDepth::Two => 2,
        BitDepth::Four => 4,
        BitDepth::Eight => 8,
        BitDepth::Sixteen => 16,
    };
    let channels = color_type.samples();
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut samples = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..(y + 1) * bytes_per_row];
        for x in 0..width as usize {
            let value = match bits {
                16 => {
                    let idx = x * channels * 2;
                    u16::from_be_bytes([row[idx], row[idx + 1]])
                }
                8 => row[x * channels] as u16,
                _ => {
                    // Packed gray or palette index, MSB first
                    let bit_pos = x * bits;
                    let shift = 8 - bits - (bit_pos % 8);
                    ((row[bit_pos / 8] >> shift) & ((1u8 << bits) - 1)) as u16
                }
            };
            samples.push(value);
        }
    }

    if color_type == ColorType::Indexed {
        let palette = palette
            .ok_or_else(|| IoError::DecodeError("indexed PNG without palette".to_string()))?;
        for s in samples.iter_mut() {
            let index = *s as usize;
            let red = palette.get(index * 3).ok_or_else(|| {
                IoError::DecodeError(format!("palette index {} out of range", index))
            })?;
            *s = *red as u16;
        }
    }

    log::trace!(
        "PNG {}x{} {:?} {}-bit -> {} samples",
        width,
        height,
        color_type,
        bits,
        samples.len()
    );

    Raster::new(width, height, samples)
}

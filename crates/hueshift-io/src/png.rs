//! PNG format support.
//!
//! Provides reading and writing of 8-bit PNG files. PNG is the lossless
//! companion to JPEG here: tests and fixtures use it because decoded
//! bytes survive a write/read cycle exactly.
//!
//! Alpha channels are dropped on read (the workspace pipeline is
//! 3-channel); grayscale expands to 3 channels. Output is always 8-bit
//! RGB.
//!
//! # Example
//!
//! ```rust,ignore
//! use hueshift_io::png;
//!
//! let image = png::read("input.png")?;
//! png::write("output.png", &image)?;
//! ```

use crate::{IoError, IoResult};
use hueshift_core::BgrImage;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<BgrImage> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let width = info.width;
    let height = info.height;
    let frame = &buf[..info.buffer_size()];

    let rgb: Vec<u8> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => frame.to_vec(),
        (png::ColorType::Rgba, png::BitDepth::Eight) => {
            // Drop alpha
            frame
                .chunks(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect()
        }
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            frame.iter().flat_map(|&g| [g, g, g]).collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => {
            frame.chunks(2).flat_map(|ga| [ga[0]; 3]).collect()
        }
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    BgrImage::from_rgb(width, height, &rgb).map_err(|e| IoError::DecodeError(e.to_string()))
}

/// Writes an image to an 8-bit RGB PNG file.
pub fn write<P: AsRef<Path>>(path: P, image: &BgrImage) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer
        .write_image_data(&image.to_rgb())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

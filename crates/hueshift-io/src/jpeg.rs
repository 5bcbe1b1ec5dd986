//! JPEG format support.
//!
//! Provides reading and writing of JPEG files - the universal lossy
//! format for photographic images.
//!
//! # Overview
//!
//! JPEG supports 8-bit per channel only. Decoded grayscale and CMYK
//! images are expanded/converted to 3 channels so every decode yields a
//! [`BgrImage`].
//!
//! # Architecture
//!
//! Two approaches are provided:
//!
//! 1. **Struct + Trait**: [`JpegReader`] / [`JpegWriter`] implementing
//!    [`ImageReader`] / [`ImageWriter`], configured via
//!    [`JpegWriterOptions`].
//! 2. **Convenience functions**: [`read()`] and [`write()`] with
//!    defaults.
//!
//! # Example
//!
//! ```rust,ignore
//! use hueshift_io::jpeg;
//!
//! let image = jpeg::read("photo.jpg")?;
//! jpeg::write("output.jpg", &image)?;
//! ```

use crate::{ImageReader, ImageWriter, IoError, IoResult};
use hueshift_core::BgrImage;
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

// ============================================================================
// Reader Options
// ============================================================================

/// Options for reading JPEG files.
///
/// Currently minimal - JPEG reading is mostly automatic.
#[derive(Debug, Clone, Default)]
pub struct JpegReaderOptions {
    /// Reserved for future use.
    _reserved: (),
}

// ============================================================================
// Writer Options
// ============================================================================

/// Options for writing JPEG files.
#[derive(Debug, Clone)]
pub struct JpegWriterOptions {
    /// Quality level 1-100. Higher = better quality, larger files.
    /// Default: 90 (good balance for most uses).
    pub quality: u8,
}

impl Default for JpegWriterOptions {
    fn default() -> Self {
        Self { quality: 90 }
    }
}

// ============================================================================
// JpegReader
// ============================================================================

/// JPEG file reader.
///
/// Decodes RGB, grayscale and CMYK JPEGs into 3-channel [`BgrImage`]s.
#[derive(Debug, Clone, Default)]
pub struct JpegReader {
    #[allow(dead_code)]
    options: JpegReaderOptions,
}

impl JpegReader {
    /// Creates a new reader with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Internal read implementation.
    fn read_impl<R: std::io::Read>(&self, reader: R) -> IoResult<BgrImage> {
        let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(reader));
        let pixels = decoder
            .decode()
            .map_err(|e| IoError::DecodeError(e.to_string()))?;

        let info = decoder
            .info()
            .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

        let width = info.width as u32;
        let height = info.height as u32;

        // Normalize to interleaved RGB
        let rgb: Vec<u8> = match info.pixel_format {
            jpeg_decoder::PixelFormat::RGB24 => pixels,
            jpeg_decoder::PixelFormat::L8 => {
                pixels.iter().flat_map(|&g| [g, g, g]).collect()
            }
            jpeg_decoder::PixelFormat::L16 => {
                // Keep the high byte
                pixels.chunks(2).flat_map(|l16| [l16[0]; 3]).collect()
            }
            jpeg_decoder::PixelFormat::CMYK32 => pixels
                .chunks(4)
                .flat_map(|cmyk| {
                    let c = cmyk[0] as f32 / 255.0;
                    let m = cmyk[1] as f32 / 255.0;
                    let y = cmyk[2] as f32 / 255.0;
                    let k = cmyk[3] as f32 / 255.0;

                    let r = ((1.0 - c) * (1.0 - k) * 255.0) as u8;
                    let g = ((1.0 - m) * (1.0 - k) * 255.0) as u8;
                    let b = ((1.0 - y) * (1.0 - k) * 255.0) as u8;

                    [r, g, b]
                })
                .collect(),
        };

        BgrImage::from_rgb(width, height, &rgb)
            .map_err(|e| IoError::DecodeError(e.to_string()))
    }
}

impl ImageReader for JpegReader {
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<BgrImage> {
        let file = File::open(path.as_ref())?;
        self.read_impl(file)
    }

    fn read_from_memory(&self, data: &[u8]) -> IoResult<BgrImage> {
        self.read_impl(Cursor::new(data))
    }
}

// ============================================================================
// JpegWriter
// ============================================================================

/// JPEG file writer.
///
/// Encodes [`BgrImage`]s as baseline JPEG with configurable quality.
#[derive(Debug, Clone, Default)]
pub struct JpegWriter {
    options: JpegWriterOptions,
}

impl JpegWriter {
    /// Creates a new writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with the given options.
    pub fn with_options(options: JpegWriterOptions) -> Self {
        Self { options }
    }
}

impl ImageWriter for JpegWriter {
    fn write<P: AsRef<Path>>(&self, path: P, image: &BgrImage) -> IoResult<()> {
        let encoder = jpeg_encoder::Encoder::new_file(path.as_ref(), self.options.quality)
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        let (width, height) = clamp_dims(image)?;
        encoder
            .encode(&image.to_rgb(), width, height, jpeg_encoder::ColorType::Rgb)
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        Ok(())
    }

    fn write_to_memory(&self, image: &BgrImage) -> IoResult<Vec<u8>> {
        let mut buf = Vec::new();
        let encoder = jpeg_encoder::Encoder::new(&mut buf, self.options.quality);
        let (width, height) = clamp_dims(image)?;
        encoder
            .encode(&image.to_rgb(), width, height, jpeg_encoder::ColorType::Rgb)
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        Ok(buf)
    }
}

/// JPEG dimensions are 16-bit; reject anything larger.
fn clamp_dims(image: &BgrImage) -> IoResult<(u16, u16)> {
    let width = u16::try_from(image.width)
        .map_err(|_| IoError::EncodeError(format!("width {} exceeds JPEG limit", image.width)))?;
    let height = u16::try_from(image.height).map_err(|_| {
        IoError::EncodeError(format!("height {} exceeds JPEG limit", image.height))
    })?;
    Ok((width, height))
}

// ============================================================================
// Convenience functions
// ============================================================================

/// Reads a JPEG file with default options.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<BgrImage> {
    JpegReader::new().read(path)
}

/// Writes a JPEG file with default options.
pub fn write<P: AsRef<Path>>(path: P, image: &BgrImage) -> IoResult<()> {
    JpegWriter::new().write(path, image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip_dimensions() {
        let mut img = BgrImage::new(16, 8).unwrap();
        for px in img.data.chunks_exact_mut(3) {
            px.copy_from_slice(&[0, 0, 255]); // solid red
        }

        let bytes = JpegWriter::new().write_to_memory(&img).unwrap();
        let back = JpegReader::new().read_from_memory(&bytes).unwrap();
        assert_eq!(back.dimensions(), (16, 8));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = JpegReader::new().read_from_memory(&[0u8; 32]).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }

    #[test]
    fn test_quality_option() {
        let img = BgrImage::from_vec(4, 4, vec![200u8; 48]).unwrap();
        let low = JpegWriter::with_options(JpegWriterOptions { quality: 10 })
            .write_to_memory(&img)
            .unwrap();
        let high = JpegWriter::with_options(JpegWriterOptions { quality: 95 })
            .write_to_memory(&img)
            .unwrap();
        assert!(!low.is_empty());
        assert!(!high.is_empty());
    }
}

//! 8-bit BGR image buffer.
//!
//! [`BgrImage`] is the interchange type of the workspace: decoders produce
//! it, operations consume it, encoders and the viewer read from it.
//! Channel order is blue-green-red, interleaved, row-major.

use crate::error::{Error, Result};

/// Number of channels in a [`BgrImage`].
pub const CHANNELS: usize = 3;

/// An 8-bit, 3-channel image in blue-green-red channel order.
///
/// Pixel data is stored interleaved (`B G R B G R ...`), row-major, with
/// no padding between rows. Dimensions are fixed at construction.
///
/// # Example
///
/// ```
/// use hueshift_core::BgrImage;
///
/// let mut img = BgrImage::new(4, 2).unwrap();
/// img.set_pixel(0, 0, [255, 0, 0]).unwrap(); // pure blue
/// assert_eq!(img.pixel(0, 0).unwrap(), [255, 0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgrImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Interleaved BGR sample data, `width * height * 3` bytes.
    pub data: Vec<u8>,
}

impl BgrImage {
    /// Creates a zero-filled (black) image with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero
    /// or the buffer size would overflow `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let size = checked_size(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; size],
        })
    }

    /// Creates an image from an existing interleaved BGR buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data.len()` does not equal
    /// `width * height * 3`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let size = checked_size(width, height)?;
        if data.len() != size {
            return Err(Error::buffer_size(size, data.len()));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates an image from an interleaved RGB buffer, swapping to BGR.
    ///
    /// Decoders hand out RGB; this is the boundary where the workspace's
    /// BGR convention takes over.
    pub fn from_rgb(width: u32, height: u32, rgb: &[u8]) -> Result<Self> {
        let size = checked_size(width, height)?;
        if rgb.len() != size {
            return Err(Error::buffer_size(size, rgb.len()));
        }
        let mut data = Vec::with_capacity(size);
        for px in rgb.chunks_exact(CHANNELS) {
            data.extend_from_slice(&[px[2], px[1], px[0]]);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Returns the image as an interleaved RGB byte buffer.
    ///
    /// Used by encoders and the viewer, both of which expect RGB order.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(CHANNELS) {
            rgb.extend_from_slice(&[px[2], px[1], px[0]]);
        }
        rgb
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Returns the `[B, G, R]` triple at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates exceed the
    /// image dimensions.
    pub fn pixel(&self, x: u32, y: u32) -> Result<[u8; 3]> {
        let idx = self.offset(x, y)?;
        Ok([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Sets the `[B, G, R]` triple at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates exceed the
    /// image dimensions.
    pub fn set_pixel(&mut self, x: u32, y: u32, bgr: [u8; 3]) -> Result<()> {
        let idx = self.offset(x, y)?;
        self.data[idx..idx + CHANNELS].copy_from_slice(&bgr);
        Ok(())
    }

    /// Byte offset of the pixel at (x, y).
    fn offset(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        Ok(((y as usize) * (self.width as usize) + (x as usize)) * CHANNELS)
    }
}

/// Validates dimensions and computes the sample buffer size.
fn checked_size(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(
            width,
            height,
            "dimensions must be non-zero",
        ));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "buffer size overflow"))
}

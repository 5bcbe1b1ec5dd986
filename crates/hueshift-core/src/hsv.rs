//! HSV image representation and BGR↔HSV conversion.
//!
//! Uses the compressed 8-bit convention: hue on `[0, 180)` (one unit is
//! two degrees), saturation and value on `[0, 255]`. Hue is circular and
//! wraps modulo [`HUE_SCALE`].

use crate::error::{Error, Result};
use crate::image::{BgrImage, CHANNELS};

/// Modulus of the 8-bit hue scale (hue values live in `[0, HUE_SCALE)`).
pub const HUE_SCALE: u8 = 180;

/// An 8-bit hue/saturation/value view of an image.
///
/// Stored interleaved (`H S V H S V ...`), row-major, same geometry as
/// the [`BgrImage`] it was derived from. Constructed via
/// [`BgrImage::to_hsv`]; converted back with [`HsvImage::to_bgr`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HsvImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Interleaved HSV sample data, `width * height * 3` bytes.
    pub data: Vec<u8>,
}

impl HsvImage {
    /// Creates an HSV image from an existing interleaved buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data.len()` does not equal
    /// `width * height * 3`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * CHANNELS;
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "dimensions must be non-zero",
            ));
        }
        if data.len() != expected {
            return Err(Error::buffer_size(expected, data.len()));
        }
        Ok(Self {
            width,
            height,
            data,
        })
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

    /// Returns the `[H, S, V]` triple at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates exceed the
    /// image dimensions.
    pub fn pixel(&self, x: u32, y: u32) -> Result<[u8; 3]> {
        let idx = self.offset(x, y)?;
        Ok([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Sets the `[H, S, V]` triple at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates exceed the
    /// image dimensions.
    pub fn set_pixel(&mut self, x: u32, y: u32, hsv: [u8; 3]) -> Result<()> {
        let idx = self.offset(x, y)?;
        self.data[idx..idx + CHANNELS].copy_from_slice(&hsv);
        Ok(())
    }

    /// Converts back to BGR, producing a new image of identical size.
    pub fn to_bgr(&self) -> BgrImage {
        let mut data = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(CHANNELS) {
            data.extend_from_slice(&hsv_to_bgr([px[0], px[1], px[2]]));
        }
        BgrImage {
            width: self.width,
            height: self.height,
            data,
        }
    }

    fn offset(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        Ok(((y as usize) * (self.width as usize) + (x as usize)) * CHANNELS)
    }
}

impl BgrImage {
    /// Converts to the HSV representation, producing a new image of
    /// identical size.
    pub fn to_hsv(&self) -> HsvImage {
        let mut data = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(CHANNELS) {
            data.extend_from_slice(&bgr_to_hsv([px[0], px[1], px[2]]));
        }
        HsvImage {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// Converts a single `[B, G, R]` pixel to `[H, S, V]`.
///
/// Hue comes out on the `[0, 180)` scale, saturation and value on
/// `[0, 255]`. Achromatic pixels (zero chroma) get hue 0.
pub fn bgr_to_hsv(bgr: [u8; 3]) -> [u8; 3] {
    let b = bgr[0] as f32;
    let g = bgr[1] as f32;
    let r = bgr[2] as f32;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max > 0.0 { 255.0 * delta / max } else { 0.0 };

    let h_deg = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (g - b) / delta
    } else if max == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };
    let h_deg = if h_deg < 0.0 { h_deg + 360.0 } else { h_deg };

    // Compress 360 degrees into [0, 180); 359+ rounds up and wraps to 0.
    let h = ((h_deg / 2.0).round() as u16) % (HUE_SCALE as u16);

    [h as u8, s.round() as u8, v.round() as u8]
}

/// Converts a single `[H, S, V]` pixel back to `[B, G, R]`.
///
/// Accepts hue on the `[0, 180)` scale; out-of-range hues are reduced
/// modulo [`HUE_SCALE`] first.
pub fn hsv_to_bgr(hsv: [u8; 3]) -> [u8; 3] {
    let h_deg = ((hsv[0] % HUE_SCALE) as f32) * 2.0;
    let s = hsv[1] as f32 / 255.0;
    let v = hsv[2] as f32 / 255.0;

    let c = v * s;
    let hp = h_deg / 60.0;
    let x = c * (1.0 - ((hp % 2.0) - 1.0).abs());
    let m = v - c;

    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [
        ((b1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((r1 + m) * 255.0).round() as u8,
    ]
}

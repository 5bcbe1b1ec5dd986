//! Per-pixel selection masks.
//!
//! A [`Mask`] is a byte grid matching the image geometry, 255 where a
//! pixel is selected and 0 elsewhere. Masks are transient: computed once
//! per operation and discarded.

use crate::band::HueBand;
use hueshift_core::HsvImage;

/// Byte value of a selected mask cell.
pub const MASK_SET: u8 = 255;

/// A byte mask with the same geometry as an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    /// Mask width in pixels.
    pub width: u32,
    /// Mask height in pixels.
    pub height: u32,
    /// One byte per pixel, row-major, 0 or [`MASK_SET`].
    pub data: Vec<u8>,
}

impl Mask {
    /// Returns `true` if the cell at linear pixel index `idx` is set.
    #[inline]
    pub fn is_set(&self, idx: usize) -> bool {
        self.data[idx] != 0
    }

    /// Number of selected pixels.
    pub fn count_set(&self) -> usize {
        self.data.iter().filter(|&&b| b != 0).count()
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Computes the band-membership mask of an HSV image.
///
/// Selection depends on hue only; saturation and value are left
/// unconstrained (full `0..=255` range), matching an `inRange` call with
/// maximal S/V bounds.
pub fn hue_mask(image: &HsvImage, band: &HueBand) -> Mask {
    let data = image
        .data
        .chunks_exact(3)
        .map(|px| if band.contains(px[0]) { MASK_SET } else { 0 })
        .collect();
    Mask {
        width: image.width,
        height: image.height,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_pixel_image() -> HsvImage {
        // Pixel 0: hue 5, pixel 1: hue 45
        HsvImage::from_vec(2, 1, vec![5, 255, 255, 45, 200, 100]).unwrap()
    }

    #[test]
    fn test_mask_selects_by_hue_only() {
        let img = two_pixel_image();
        let mask = hue_mask(&img, &HueBand::centered(0, 10));
        assert_eq!(mask.data, vec![MASK_SET, 0]);
        assert_eq!(mask.count_set(), 1);
    }

    #[test]
    fn test_mask_ignores_saturation_and_value() {
        // Same hue, extreme S/V values: all selected
        let img = HsvImage::from_vec(3, 1, vec![10, 0, 0, 10, 255, 0, 10, 0, 255]).unwrap();
        let mask = hue_mask(&img, &HueBand::centered(10, 0));
        assert_eq!(mask.count_set(), 3);
    }

    #[test]
    fn test_mask_matches_image_geometry() {
        let img = two_pixel_image();
        let mask = hue_mask(&img, &HueBand::centered(90, 10));
        assert_eq!(mask.dimensions(), img.dimensions());
        assert_eq!(mask.count_set(), 0);
    }
}

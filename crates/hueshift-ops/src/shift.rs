//! In-band hue rotation.
//!
//! Rotates the hue channel of masked pixels by a fixed amount modulo the
//! 180-value hue scale. Saturation and value are never touched, and
//! unmasked pixels pass through byte-identical.
//!
//! Note that applying the rotation twice with the same band does not
//! restore the original image: the first pass moves selected hues out of
//! the band, so a second pass over the same band selects different
//! pixels. Recovering the original hues requires a band centered on the
//! shifted target, `(h + 90) mod 180`.

use crate::error::{OpsError, OpsResult};
use crate::mask::Mask;
use hueshift_core::{HsvImage, HUE_SCALE};
use tracing::trace;

/// Rotation that maps every hue to its complementary color on the
/// 180-value scale.
pub const COMPLEMENT_SHIFT: u8 = 90;

/// Rotates the hue of masked pixels by `degrees` (in hue-scale units,
/// i.e. half-degrees), modulo 180.
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] if the mask geometry differs from
/// the image.
pub fn rotate_hue(image: &mut HsvImage, mask: &Mask, degrees: u8) -> OpsResult<()> {
    if mask.dimensions() != image.dimensions() {
        return Err(OpsError::SizeMismatch(format!(
            "mask {}x{} vs image {}x{}",
            mask.width, mask.height, image.width, image.height
        )));
    }

    let shift = (degrees % HUE_SCALE) as u16;
    let mut touched = 0usize;
    for (idx, px) in image.data.chunks_exact_mut(3).enumerate() {
        if mask.is_set(idx) {
            px[0] = (((px[0] as u16) + shift) % (HUE_SCALE as u16)) as u8;
            touched += 1;
        }
    }
    trace!(touched, shift, "rotated hues");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::band::HueBand;
    use crate::mask::hue_mask;

    #[test]
    fn test_in_band_pixel_rotates_by_90() {
        // HSV (0,255,255), target 0, half-width 10 -> (90,255,255)
        let mut img = HsvImage::from_vec(1, 1, vec![0, 255, 255]).unwrap();
        let mask = hue_mask(&img, &HueBand::centered(0, 10));
        rotate_hue(&mut img, &mask, COMPLEMENT_SHIFT).unwrap();
        assert_eq!(img.pixel(0, 0).unwrap(), [90, 255, 255]);
    }

    #[test]
    fn test_out_of_band_pixel_untouched() {
        // HSV (45,200,100) is outside [0,10]
        let mut img = HsvImage::from_vec(1, 1, vec![45, 200, 100]).unwrap();
        let mask = hue_mask(&img, &HueBand::centered(0, 10));
        rotate_hue(&mut img, &mask, COMPLEMENT_SHIFT).unwrap();
        assert_eq!(img.pixel(0, 0).unwrap(), [45, 200, 100]);
    }

    #[test]
    fn test_rotation_wraps_modulo_scale() {
        let mut img = HsvImage::from_vec(1, 1, vec![120, 10, 10]).unwrap();
        let mask = hue_mask(&img, &HueBand::centered(120, 0));
        rotate_hue(&mut img, &mask, COMPLEMENT_SHIFT).unwrap();
        // 120 + 90 = 210 -> 30
        assert_eq!(img.pixel(0, 0).unwrap(), [30, 10, 10]);
    }

    #[test]
    fn test_saturation_and_value_never_change() {
        let mut img =
            HsvImage::from_vec(2, 1, vec![10, 1, 2, 170, 254, 253]).unwrap();
        let mask = hue_mask(&img, &HueBand::centered(90, 180));
        rotate_hue(&mut img, &mask, COMPLEMENT_SHIFT).unwrap();
        assert_eq!(img.pixel(0, 0).unwrap()[1..], [1, 2]);
        assert_eq!(img.pixel(1, 0).unwrap()[1..], [254, 253]);
    }

    #[test]
    fn test_zero_width_band_touches_exact_hue_only() {
        let mut img =
            HsvImage::from_vec(3, 1, vec![44, 9, 9, 45, 9, 9, 46, 9, 9]).unwrap();
        let mask = hue_mask(&img, &HueBand::centered(45, 0));
        rotate_hue(&mut img, &mask, COMPLEMENT_SHIFT).unwrap();
        assert_eq!(img.pixel(0, 0).unwrap(), [44, 9, 9]);
        assert_eq!(img.pixel(1, 0).unwrap(), [135, 9, 9]);
        assert_eq!(img.pixel(2, 0).unwrap(), [46, 9, 9]);
    }

    #[test]
    fn test_mismatched_mask_rejected() {
        let mut img = HsvImage::from_vec(2, 1, vec![0u8; 6]).unwrap();
        let other = HsvImage::from_vec(1, 2, vec![0u8; 6]).unwrap();
        let mask = hue_mask(&other, &HueBand::centered(0, 10));
        assert!(rotate_hue(&mut img, &mask, COMPLEMENT_SHIFT).is_err());
    }

    #[test]
    fn test_double_shift_is_not_involution() {
        // Shifting twice with the same band does not restore the input;
        // the shifted hue lands outside the original band.
        let mut img = HsvImage::from_vec(1, 1, vec![5, 100, 100]).unwrap();
        let band = HueBand::centered(0, 10);

        let mask = hue_mask(&img, &band);
        rotate_hue(&mut img, &mask, COMPLEMENT_SHIFT).unwrap();
        let mask = hue_mask(&img, &band);
        rotate_hue(&mut img, &mask, COMPLEMENT_SHIFT).unwrap();
        assert_eq!(img.pixel(0, 0).unwrap(), [95, 100, 100]);

        // The covering band around the shifted target does restore it.
        let mask = hue_mask(&img, &HueBand::centered(90, 10));
        rotate_hue(&mut img, &mask, COMPLEMENT_SHIFT).unwrap();
        assert_eq!(img.pixel(0, 0).unwrap(), [5, 100, 100]);
    }
}

//! Image concatenation.

use crate::error::{OpsError, OpsResult};
use hueshift_core::BgrImage;

/// Concatenates two images side by side (left, then right).
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] if the heights differ.
///
/// # Example
///
/// ```
/// use hueshift_core::BgrImage;
/// use hueshift_ops::hconcat;
///
/// let a = BgrImage::new(4, 3).unwrap();
/// let b = BgrImage::new(2, 3).unwrap();
/// let out = hconcat(&a, &b).unwrap();
/// assert_eq!(out.dimensions(), (6, 3));
/// ```
pub fn hconcat(left: &BgrImage, right: &BgrImage) -> OpsResult<BgrImage> {
    if left.height != right.height {
        return Err(OpsError::SizeMismatch(format!(
            "heights differ: {} vs {}",
            left.height, right.height
        )));
    }

    let width = left
        .width
        .checked_add(right.width)
        .ok_or_else(|| OpsError::InvalidDimensions("combined width overflow".into()))?;
    let left_row = left.width as usize * 3;
    let right_row = right.width as usize * 3;

    let mut data = Vec::with_capacity((left.data.len()) + (right.data.len()));
    for y in 0..left.height as usize {
        data.extend_from_slice(&left.data[y * left_row..(y + 1) * left_row]);
        data.extend_from_slice(&right.data[y * right_row..(y + 1) * right_row]);
    }

    BgrImage::from_vec(width, left.height, data)
        .map_err(|e| OpsError::InvalidDimensions(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hconcat_layout() {
        let mut a = BgrImage::new(1, 2).unwrap();
        let mut b = BgrImage::new(2, 2).unwrap();
        a.set_pixel(0, 0, [1, 1, 1]).unwrap();
        a.set_pixel(0, 1, [2, 2, 2]).unwrap();
        b.set_pixel(0, 0, [3, 3, 3]).unwrap();
        b.set_pixel(1, 1, [4, 4, 4]).unwrap();

        let out = hconcat(&a, &b).unwrap();
        assert_eq!(out.dimensions(), (3, 2));
        assert_eq!(out.pixel(0, 0).unwrap(), [1, 1, 1]);
        assert_eq!(out.pixel(1, 0).unwrap(), [3, 3, 3]);
        assert_eq!(out.pixel(0, 1).unwrap(), [2, 2, 2]);
        assert_eq!(out.pixel(2, 1).unwrap(), [4, 4, 4]);
    }

    #[test]
    fn test_height_mismatch_rejected() {
        let a = BgrImage::new(2, 2).unwrap();
        let b = BgrImage::new(2, 3).unwrap();
        assert!(matches!(
            hconcat(&a, &b),
            Err(OpsError::SizeMismatch(_))
        ));
    }
}

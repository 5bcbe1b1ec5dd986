//! The hue-range shifter pipeline.
//!
//! Loads an image, rotates the hue of every pixel whose hue falls in a
//! band around a target hue by 90 (on the 0-180 scale), and returns the
//! result in the original BGR ordering.
//!
//! Failures never escape this module's public entry point:
//! [`shift_hue_range`] catches everything at the boundary, logs it, and
//! returns `None`. Callers that want the error kind use
//! [`try_shift_hue_range`].

use crate::band::HueBand;
use crate::mask::hue_mask;
use crate::shift::{rotate_hue, COMPLEMENT_SHIFT};
use hueshift_core::BgrImage;
use hueshift_io::IoError;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, error};

/// Failure kinds of the shifter pipeline.
#[derive(Debug, Error)]
pub enum ShiftError {
    /// The image file was missing, unreadable, corrupt, or in an
    /// unsupported format.
    #[error("failed to load image: {0}")]
    Load(#[from] IoError),

    /// Any other failure during processing.
    #[error("processing failed: {0}")]
    Generic(String),
}

impl From<crate::error::OpsError> for ShiftError {
    fn from(e: crate::error::OpsError) -> Self {
        Self::Generic(e.to_string())
    }
}

/// Result type of the shifter pipeline.
pub type ShiftResult<T> = Result<T, ShiftError>;

/// Runs the shifter and reports the failure kind on error.
///
/// Steps: decode, convert to HSV, build the band
/// `[max(0, h-x), min(180, h+x)]` from the normalized target, mask on
/// hue only, rotate masked hues by 90, convert back to BGR.
///
/// # Errors
///
/// [`ShiftError::Load`] on any decode failure, [`ShiftError::Generic`]
/// on any processing failure.
pub fn try_shift_hue_range(
    path: &Path,
    target_hue: i32,
    half_width: u32,
) -> ShiftResult<BgrImage> {
    let image = hueshift_io::read(path)?;
    let mut hsv = image.to_hsv();

    let band = HueBand::centered(target_hue, half_width);
    let mask = hue_mask(&hsv, &band);
    debug!(
        lower = band.lower,
        upper = band.upper,
        selected = mask.count_set(),
        total = hsv.pixel_count(),
        "hue band computed"
    );

    rotate_hue(&mut hsv, &mask, COMPLEMENT_SHIFT)?;
    Ok(hsv.to_bgr())
}

/// Runs the shifter, logging any failure and returning `None`.
///
/// This is the boundary-guarded entry point: no error propagates past
/// it. Callers must check for `None` and treat it as a reportable,
/// non-fatal failure.
pub fn shift_hue_range(path: &Path, target_hue: i32, half_width: u32) -> Option<BgrImage> {
    match try_shift_hue_range(path, target_hue, half_width) {
        Ok(image) => Some(image),
        Err(e) => {
            error!(path = %path.display(), "{e}");
            None
        }
    }
}

//! Image resize and resampling.
//!
//! Separable two-pass resampling (horizontal then vertical) over 8-bit
//! BGR images, with a selection of interpolation filters.
//!
//! # Filters
//!
//! - [`Filter::Nearest`] - fastest, no interpolation (blocky)
//! - [`Filter::Bilinear`] - linear interpolation, the preview default
//! - [`Filter::Bicubic`] - Mitchell-Netravali cubic
//! - [`Filter::Lanczos3`] - sinc-based, best for large downscales

use crate::error::{OpsError, OpsResult};
use hueshift_core::BgrImage;

const CHANNELS: usize = 3;

/// Resampling filter for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Nearest-neighbor (fastest, no interpolation).
    Nearest,
    /// Bilinear interpolation (smooth, fast).
    #[default]
    Bilinear,
    /// Bicubic interpolation (sharper than bilinear).
    Bicubic,
    /// Lanczos-3 (high quality, best for downscaling).
    Lanczos3,
}

impl Filter {
    /// Returns the support radius for this filter.
    #[inline]
    pub fn support(&self) -> f32 {
        match self {
            Filter::Nearest => 0.5,
            Filter::Bilinear => 1.0,
            Filter::Bicubic => 2.0,
            Filter::Lanczos3 => 3.0,
        }
    }

    /// Evaluates the filter kernel at position x.
    #[inline]
    pub fn weight(&self, x: f32) -> f32 {
        match self {
            Filter::Nearest => {
                if x.abs() < 0.5 {
                    1.0
                } else {
                    0.0
                }
            }
            Filter::Bilinear => {
                let ax = x.abs();
                if ax < 1.0 { 1.0 - ax } else { 0.0 }
            }
            Filter::Bicubic => mitchell_weight(x),
            Filter::Lanczos3 => lanczos_weight(x, 3.0),
        }
    }
}

/// Mitchell-Netravali kernel with B = C = 1/3.
#[inline]
fn mitchell_weight(x: f32) -> f32 {
    const B: f32 = 1.0 / 3.0;
    const C: f32 = 1.0 / 3.0;

    let ax = x.abs();
    if ax < 1.0 {
        ((12.0 - 9.0 * B - 6.0 * C) * ax * ax * ax
            + (-18.0 + 12.0 * B + 6.0 * C) * ax * ax
            + (6.0 - 2.0 * B))
            / 6.0
    } else if ax < 2.0 {
        ((-B - 6.0 * C) * ax * ax * ax
            + (6.0 * B + 30.0 * C) * ax * ax
            + (-12.0 * B - 48.0 * C) * ax
            + (8.0 * B + 24.0 * C))
            / 6.0
    } else {
        0.0
    }
}

/// Windowed-sinc Lanczos kernel.
#[inline]
fn lanczos_weight(x: f32, a: f32) -> f32 {
    let ax = x.abs();
    if ax < 1e-8 {
        1.0
    } else if ax < a {
        let pi_x = std::f32::consts::PI * ax;
        let pi_x_a = pi_x / a;
        (pi_x.sin() / pi_x) * (pi_x_a.sin() / pi_x_a)
    } else {
        0.0
    }
}

/// Resizes an image to `dst_w` x `dst_h`.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] if either target dimension
/// is zero.
///
/// # Example
///
/// ```
/// use hueshift_core::BgrImage;
/// use hueshift_ops::{resize, Filter};
///
/// let img = BgrImage::new(16, 16).unwrap();
/// let out = resize(&img, 32, 32, Filter::Bilinear).unwrap();
/// assert_eq!(out.dimensions(), (32, 32));
/// ```
pub fn resize(image: &BgrImage, dst_w: u32, dst_h: u32, filter: Filter) -> OpsResult<BgrImage> {
    if dst_w == 0 || dst_h == 0 {
        return Err(OpsError::InvalidDimensions(
            "destination size must be > 0".into(),
        ));
    }
    if (dst_w, dst_h) == image.dimensions() {
        return Ok(image.clone());
    }

    let src_w = image.width as usize;
    let src_h = image.height as usize;
    let src: Vec<f32> = image.data.iter().map(|&b| b as f32).collect();

    // Horizontal pass, then vertical
    let temp = resample_rows(&src, src_w, src_h, dst_w as usize, filter);
    let out = resample_cols(&temp, dst_w as usize, src_h, dst_h as usize, filter);

    let data = out
        .iter()
        .map(|&v| v.round().clamp(0.0, 255.0) as u8)
        .collect();
    BgrImage::from_vec(dst_w, dst_h, data)
        .map_err(|e| OpsError::InvalidDimensions(e.to_string()))
}

/// Computes the source taps and normalized weights for one destination
/// coordinate along an axis of `src_len` samples.
fn taps(dst: usize, src_len: usize, scale: f32, filter: Filter) -> (usize, usize, f32) {
    let support = filter.support() * scale.max(1.0);
    let center = (dst as f32 + 0.5) * scale - 0.5;
    let lo = ((center - support).floor() as isize).max(0) as usize;
    let hi = ((center + support).ceil() as usize).min(src_len - 1);
    (lo, hi, center)
}

fn resample_rows(
    src: &[f32],
    src_w: usize,
    src_h: usize,
    dst_w: usize,
    filter: Filter,
) -> Vec<f32> {
    let mut dst = vec![0.0f32; dst_w * src_h * CHANNELS];
    let scale = src_w as f32 / dst_w as f32;
    let norm = scale.max(1.0);

    for y in 0..src_h {
        let row = &src[y * src_w * CHANNELS..(y + 1) * src_w * CHANNELS];
        for x in 0..dst_w {
            let (lo, hi, center) = taps(x, src_w, scale, filter);
            let mut acc = [0.0f32; CHANNELS];
            let mut weight_sum = 0.0f32;
            for sx in lo..=hi {
                let w = filter.weight((sx as f32 - center) / norm);
                weight_sum += w;
                for c in 0..CHANNELS {
                    acc[c] += row[sx * CHANNELS + c] * w;
                }
            }
            let out = (y * dst_w + x) * CHANNELS;
            if weight_sum > 0.0 {
                for c in 0..CHANNELS {
                    dst[out + c] = acc[c] / weight_sum;
                }
            }
        }
    }
    dst
}

fn resample_cols(
    src: &[f32],
    width: usize,
    src_h: usize,
    dst_h: usize,
    filter: Filter,
) -> Vec<f32> {
    let mut dst = vec![0.0f32; width * dst_h * CHANNELS];
    let scale = src_h as f32 / dst_h as f32;
    let norm = scale.max(1.0);

    for y in 0..dst_h {
        let (lo, hi, center) = taps(y, src_h, scale, filter);
        for x in 0..width {
            let mut acc = [0.0f32; CHANNELS];
            let mut weight_sum = 0.0f32;
            for sy in lo..=hi {
                let w = filter.weight((sy as f32 - center) / norm);
                weight_sum += w;
                let idx = (sy * width + x) * CHANNELS;
                for c in 0..CHANNELS {
                    acc[c] += src[idx + c] * w;
                }
            }
            let out = (y * width + x) * CHANNELS;
            if weight_sum > 0.0 {
                for c in 0..CHANNELS {
                    dst[out + c] = acc[c] / weight_sum;
                }
            }
        }
    }
    dst
}

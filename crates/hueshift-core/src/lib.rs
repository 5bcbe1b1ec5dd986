//! # hueshift-core
//!
//! Core types for hue-band image processing.
//!
//! This crate provides the foundational types used throughout the hueshift
//! workspace:
//!
//! - [`BgrImage`] - 8-bit, 3-channel image in blue-green-red channel order
//! - [`HsvImage`] - 8-bit hue/saturation/value view of an image
//! - [`bgr_to_hsv`] / [`hsv_to_bgr`] - per-pixel color space conversion
//!
//! ## Conventions
//!
//! The hue channel uses the compressed 8-bit convention: hue lives on a
//! `[0, 180)` scale (half the usual 360 degrees), saturation and value on
//! `[0, 255]`. Hue is circular and wraps modulo 180.
//!
//! Images are immutable in dimensions once constructed; color space
//! conversion produces a new image rather than mutating in place.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies. All other hueshift crates depend on `hueshift-core`:
//!
//! ```text
//! hueshift-core (this crate)
//!    ^
//!    |
//!    +-- hueshift-io  (image file I/O)
//!    +-- hueshift-ops (band masking, hue rotation, resize)
//!    +-- hueshift-view (preview window)
//!    +-- hueshift-cli (driver)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod hsv;
pub mod image;

pub use error::{Error, Result};
pub use hsv::{bgr_to_hsv, hsv_to_bgr, HsvImage, HUE_SCALE};
pub use image::BgrImage;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use hueshift_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::hsv::{bgr_to_hsv, hsv_to_bgr, HsvImage, HUE_SCALE};
    pub use crate::image::BgrImage;
}

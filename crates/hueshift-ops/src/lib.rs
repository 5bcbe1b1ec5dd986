//! # hueshift-ops
//!
//! Image operations for the hue-band shifting pipeline.
//!
//! # Modules
//!
//! - [`band`] - hue band selection (target hue + half-width, clamped)
//! - [`mask`] - per-pixel band-membership masks
//! - [`shift`] - in-band hue rotation
//! - [`shifter`] - the boundary-guarded load/convert/shift pipeline
//! - [`resize`] - image scaling and resampling
//! - [`stack`] - side-by-side concatenation
//!
//! # Example
//!
//! ```rust,ignore
//! use hueshift_ops::shifter::shift_hue_range;
//!
//! // Rotate hues within 10 of red by 90 (red -> cyan)
//! let Some(result) = shift_hue_range("photo.jpg".as_ref(), 0, 10) else {
//!     eprintln!("failed to generate the output image");
//!     return;
//! };
//! ```
//!
//! All operations are synchronous and single-threaded; each call owns
//! its data and no state crosses invocations.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;

pub mod band;
pub mod mask;
pub mod resize;
pub mod shift;
pub mod shifter;
pub mod stack;

pub use band::HueBand;
pub use error::{OpsError, OpsResult};
pub use mask::{hue_mask, Mask};
pub use resize::{resize, Filter};
pub use shift::{rotate_hue, COMPLEMENT_SHIFT};
pub use shifter::{shift_hue_range, try_shift_hue_range, ShiftError, ShiftResult};
pub use stack::hconcat;

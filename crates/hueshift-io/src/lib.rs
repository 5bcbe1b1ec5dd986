//! # hueshift-io
//!
//! Image file I/O for the hueshift pipeline.
//!
//! This crate provides reading and writing of the formats the tool works
//! with:
//!
//! - **JPEG** - the input/output format of the original tool
//! - **PNG** - lossless, used for fixtures and exact-byte tests
//!
//! # Architecture
//!
//! The crate uses a trait-based design for extensibility:
//!
//! - [`ImageReader`] - Trait for format readers
//! - [`ImageWriter`] - Trait for format writers
//! - [`read`] / [`write`] - High-level functions with format auto-detection
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hueshift_io::{read, write};
//!
//! // Read any supported format (auto-detected)
//! let image = read("input.jpg")?;
//!
//! // Write to a different format
//! write("output.png", &image)?;
//! ```
//!
//! # Supported Formats
//!
//! | Format | Read | Write | Bit Depths | Notes |
//! |--------|------|-------|------------|-------|
//! | JPEG | Yes | Yes | 8 | Quality setting; gray/CMYK expanded |
//! | PNG | Yes | Yes | 8 | Alpha dropped on read |
//!
//! # Feature Flags
//!
//! - `jpeg` - JPEG support (default)
//! - `png` - PNG support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;
mod traits;

#[cfg(feature = "jpeg")]
pub mod jpeg;

#[cfg(feature = "png")]
pub mod png;

pub use detect::Format;
pub use error::{IoError, IoResult};
pub use traits::{ImageReader, ImageWriter};

use hueshift_core::BgrImage;
use std::path::Path;
use tracing::debug;

/// Reads an image from a file, auto-detecting the format.
///
/// The format is detected by magic bytes with an extension fallback.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The format is not supported
/// - The file is corrupted
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<BgrImage> {
    let path = path.as_ref();
    let format = Format::detect(path)?;
    debug!(path = %path.display(), ?format, "reading image");

    match format {
        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::read(path),

        #[cfg(feature = "png")]
        Format::Png => png::read(path),

        _ => Err(IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }
}

/// Writes an image to a file, detecting format from extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be created
/// - The format is not supported for writing
pub fn write<P: AsRef<Path>>(path: P, image: &BgrImage) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    debug!(path = %path.display(), ?format, "writing image");

    match format {
        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::write(path, image),

        #[cfg(feature = "png")]
        Format::Png => png::write(path, image),

        _ => Err(IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }
}

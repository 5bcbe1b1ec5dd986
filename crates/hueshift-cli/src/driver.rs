//! The driver: resolve paths, run the shifter, preview, save.

use crate::config::ShiftConfig;
use anyhow::{bail, Context, Result};
use hueshift_ops::{hconcat, resize, shift_hue_range, Filter};
use std::fs;
use tracing::{info, warn};

/// Side length both preview panes are resized to before concatenation.
pub const PREVIEW_SIZE: u32 = 1024;

/// Runtime options that shape the driver run but not the transform.
#[derive(Debug, Clone, Copy)]
pub struct DriverOptions {
    /// Resample filter for the preview panes.
    pub filter: Filter,
    /// Whether to open the preview window.
    pub show_preview: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            filter: Filter::Bilinear,
            show_preview: true,
        }
    }
}

/// Runs the full pipeline: shift, preview, save.
///
/// If the shifter produces no result the driver reports failure and
/// performs no display or save.
pub fn run(config: &ShiftConfig, options: &DriverOptions) -> Result<()> {
    let input_path = config.input_path();
    let output_path = config.output_path();
    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        hue = config.target_hue,
        half_width = config.half_width,
        "starting hue-range shift"
    );

    let Some(shifted) = shift_hue_range(&input_path, config.target_hue, config.half_width)
    else {
        bail!("failed to generate the output image");
    };

    let input_image = hueshift_io::read(&input_path)
        .with_context(|| format!("failed to load: {}", input_path.display()))?;

    // Side-by-side before/after preview
    let left = resize(&input_image, PREVIEW_SIZE, PREVIEW_SIZE, options.filter)?;
    let right = resize(&shifted, PREVIEW_SIZE, PREVIEW_SIZE, options.filter)?;
    let combined = hconcat(&left, &right)?;
    info!(
        width = combined.width,
        height = combined.height,
        "preview assembled"
    );

    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("failed to create: {}", config.output_dir.display()))?;

    if options.show_preview {
        #[cfg(feature = "viewer")]
        if hueshift_view::run(&combined, "Input and Output Images") != 0 {
            warn!("preview window failed; continuing with save");
        }

        #[cfg(not(feature = "viewer"))]
        warn!("built without the viewer feature; skipping preview");
    }

    hueshift_io::write(&output_path, &shifted)
        .with_context(|| format!("failed to save: {}", output_path.display()))?;
    info!(output = %output_path.display(), "done");

    Ok(())
}

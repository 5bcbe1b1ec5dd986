//! # hueshift-view
//!
//! Preview window for hueshift results.
//!
//! Shows a single in-memory [`BgrImage`] scaled to fit an 800x800
//! window and blocks until the user presses any key or closes the
//! window. This mirrors the show-then-wait-for-keypress step of the
//! original tool.
//!
//! # Quick Start
//!
//! ```ignore
//! use hueshift_core::BgrImage;
//!
//! let image = BgrImage::new(64, 64).unwrap();
//! let exit_code = hueshift_view::run(&image, "Input and Output Images");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod app;

pub use app::PreviewApp;

use hueshift_core::BgrImage;

/// Initial window size, matching the original tool's preview window.
const WINDOW_SIZE: f32 = 800.0;

/// Opens the preview window and blocks until a key press or close.
///
/// # Arguments
/// * `image` - Image to display
/// * `title` - Window title
///
/// # Returns
/// Exit code: 0 for success, 1 if the window could not be created.
pub fn run(image: &BgrImage, title: &str) -> i32 {
    tracing::debug!(
        width = image.width,
        height = image.height,
        "opening preview window"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([WINDOW_SIZE, WINDOW_SIZE]),
        ..Default::default()
    };

    let color_image = app::to_color_image(image);
    let result = eframe::run_native(
        title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(PreviewApp::new(color_image)))),
    );

    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: failed to open preview window: {e}");
            1
        }
    }
}

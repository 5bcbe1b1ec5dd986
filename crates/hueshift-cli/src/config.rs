//! Driver configuration.
//!
//! [`ShiftConfig`] replaces the original tool's compile-time constants
//! with an explicit structure passed into the driver, so the pipeline
//! is reusable without source edits. The defaults are the original
//! constants.

use std::path::{Path, PathBuf};

/// Suffix inserted before the output extension.
const OUTPUT_SUFFIX: &str = "_output";

/// Configuration for one driver run.
#[derive(Debug, Clone)]
pub struct ShiftConfig {
    /// Directory the input file name is resolved against.
    pub input_dir: PathBuf,
    /// Directory the output is written to (created if missing).
    pub output_dir: PathBuf,
    /// Input image file name.
    pub input_file: String,
    /// Target hue on the 0-180 scale; out-of-range values wrap.
    pub target_hue: i32,
    /// Half-width of the hue band.
    pub half_width: u32,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("Input_Images"),
            output_dir: PathBuf::from("Output_Images"),
            input_file: "Image_005.jpg".into(),
            target_hue: 0,
            half_width: 10,
        }
    }
}

impl ShiftConfig {
    /// Full path of the input image.
    pub fn input_path(&self) -> PathBuf {
        self.input_dir.join(&self.input_file)
    }

    /// Full path of the output image.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(output_filename(&self.input_file))
    }
}

/// Derives the output file name from the input file name: the input's
/// stem plus `_output.jpg`.
pub fn output_filename(input: &str) -> String {
    let stem = Path::new(input)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(input);
    format!("{stem}{OUTPUT_SUFFIX}.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_filename() {
        assert_eq!(output_filename("Image_005.jpg"), "Image_005_output.jpg");
        assert_eq!(output_filename("photo.png"), "photo_output.jpg");
        assert_eq!(output_filename("noext"), "noext_output.jpg");
        assert_eq!(output_filename("a.b.c.jpeg"), "a.b.c_output.jpg");
    }

    #[test]
    fn test_paths_resolve_against_directories() {
        let config = ShiftConfig {
            input_dir: PathBuf::from("in"),
            output_dir: PathBuf::from("out"),
            input_file: "x.jpg".into(),
            ..Default::default()
        };
        assert_eq!(config.input_path(), PathBuf::from("in/x.jpg"));
        assert_eq!(config.output_path(), PathBuf::from("out/x_output.jpg"));
    }
}

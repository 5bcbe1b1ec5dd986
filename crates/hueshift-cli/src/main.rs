//! hueshift - shift a band of hues to their complements
//!
//! Loads one image, rotates the hue of every pixel within a band around
//! a target hue by 90 (on the 0-180 hue scale), previews input and
//! output side by side, and saves the result.

use anyhow::Result;
use clap::Parser;
use hueshift_ops::Filter;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod driver;

use config::ShiftConfig;
use driver::DriverOptions;

#[derive(Parser)]
#[command(name = "hueshift")]
#[command(author, version, about = "Shift a band of hues to their complements")]
#[command(long_about = "
Shifts the hue of pixels whose hue falls within a band around a target
hue by 90 on the 0-180 hue scale, mapping them to their complementary
colors. Shows input and output side by side until a key is pressed,
then writes <input_stem>_output.jpg to the output directory.

Examples:
  hueshift                                  # defaults: Input_Images/Image_005.jpg, hue 0
  hueshift photo.jpg --hue 120 --range 15   # shift blues
  hueshift -i shots -o graded photo.jpg     # custom directories
  hueshift photo.jpg --no-view              # skip the preview window
")]
struct Cli {
    /// Input image file name, resolved against the input directory
    #[arg(default_value = "Image_005.jpg")]
    input: String,

    /// Input directory
    #[arg(short = 'i', long, default_value = "Input_Images")]
    input_dir: PathBuf,

    /// Output directory (created if missing)
    #[arg(short = 'o', long, default_value = "Output_Images")]
    output_dir: PathBuf,

    /// Target hue on the 0-180 scale (out-of-range values wrap)
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    hue: i32,

    /// Half-width of the hue band
    #[arg(short = 'r', long = "range", default_value = "10")]
    half_width: u32,

    /// Preview filter: nearest, bilinear, bicubic, lanczos
    #[arg(short, long, default_value = "bilinear")]
    filter: String,

    /// Skip the preview window
    #[arg(long)]
    no_view: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_filter(name: &str) -> Filter {
    match name.to_lowercase().as_str() {
        "nearest" => Filter::Nearest,
        "bilinear" | "linear" => Filter::Bilinear,
        "bicubic" | "cubic" => Filter::Bicubic,
        "lanczos" | "lanczos3" => Filter::Lanczos3,
        _ => Filter::Bilinear,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ShiftConfig {
        input_dir: cli.input_dir,
        output_dir: cli.output_dir,
        input_file: cli.input,
        target_hue: cli.hue,
        half_width: cli.half_width,
    };
    let options = DriverOptions {
        filter: parse_filter(&cli.filter),
        show_preview: !cli.no_view,
    };

    driver::run(&config, &options)
}

use clap::Parser;
use std::path::PathBuf;

use pixelart::{DEFAULT_PIXEL_SIZE, DOWNLOAD_FILE_NAME, MAX_PIXEL_SIZE, MIN_PIXEL_SIZE, PixelShape};

#[derive(Parser, Debug)]
#[command(name = "pixelart", version, about = "PIXELART CLI: turn photos into wallpaper-sized pixel art")]
pub struct CliArgs {
    /// Input PNG/JPEG image (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing PNG/JPEG images (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output PNG filename (single file mode)
    #[arg(short, long, default_value = DOWNLOAD_FILE_NAME)]
    pub output: PathBuf,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Cell size in pixels (5 to 50)
    #[arg(
        short = 's',
        long,
        default_value_t = DEFAULT_PIXEL_SIZE,
        value_parser = clap::value_parser!(u32).range(MIN_PIXEL_SIZE as i64..=MAX_PIXEL_SIZE as i64)
    )]
    pub pixel_size: u32,

    /// Cell shape (square, circle or star)
    #[arg(long, value_enum, default_value_t = PixelShape::Square)]
    pub shape: PixelShape,

    /// Load pixel size and shape from a preset file (overrides --pixel-size/--shape)
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue processing other files when one fails
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}

//! Shared types and enums used across PIXELART.
//! Includes the cell `PixelShape`, the `Bitmap` alias and the fixed output
//! constants (wallpaper bounds, download name and MIME type).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// In-memory RGB bitmap every pipeline stage works on.
pub type Bitmap = image::RgbImage;

/// Maximum output width after resizing (common smartphone wallpaper width).
pub const MAX_WIDTH: u32 = 1080;
/// Maximum output height after resizing.
pub const MAX_HEIGHT: u32 = 2400;

/// Smallest cell size offered to users.
pub const MIN_PIXEL_SIZE: u32 = 5;
/// Largest cell size offered to users.
pub const MAX_PIXEL_SIZE: u32 = 50;
pub const DEFAULT_PIXEL_SIZE: u32 = 20;

pub const DOWNLOAD_FILE_NAME: &str = "pixel_art.png";
pub const OUTPUT_MIME_TYPE: &str = "image/png";

/// Shape each cell is rendered as.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    Default,
    ValueEnum,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PixelShape {
    #[default]
    Square,
    Circle,
    Star,
}

impl PixelShape {
    pub const ALL: [PixelShape; 3] = [PixelShape::Square, PixelShape::Circle, PixelShape::Star];

    pub fn as_str(&self) -> &'static str {
        match self {
            PixelShape::Square => "square",
            PixelShape::Circle => "circle",
            PixelShape::Star => "star",
        }
    }
}

impl std::fmt::Display for PixelShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PixelShape::Square => write!(f, "Square"),
            PixelShape::Circle => write!(f, "Circle"),
            PixelShape::Star => write!(f, "Star"),
        }
    }
}

/// Input encodings accepted by the decoder.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum InputFormat {
    Png,
    Jpeg,
}

impl InputFormat {
    pub const EXTENSIONS: [&'static str; 3] = ["png", "jpg", "jpeg"];

    pub fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Png => Some(InputFormat::Png),
            image::ImageFormat::Jpeg => Some(InputFormat::Jpeg),
            _ => None,
        }
    }

    /// True when the path carries one of the accepted extensions (case-insensitive).
    pub fn matches_extension(path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                Self::EXTENSIONS
                    .iter()
                    .any(|accepted| e.eq_ignore_ascii_case(accepted))
            })
            .unwrap_or(false)
    }
}

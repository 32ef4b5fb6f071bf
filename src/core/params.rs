use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::{DEFAULT_PIXEL_SIZE, MAX_PIXEL_SIZE, MIN_PIXEL_SIZE, PixelShape};

/// Pixelation parameters suitable for preset files, the CLI and the GUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelArtParams {
    /// Cell edge length in pixels
    pub pixel_size: u32,
    pub shape: PixelShape,
}

impl Default for PixelArtParams {
    fn default() -> Self {
        Self {
            pixel_size: DEFAULT_PIXEL_SIZE,
            shape: PixelShape::Square,
        }
    }
}

impl PixelArtParams {
    pub fn new(pixel_size: u32, shape: PixelShape) -> Self {
        Self { pixel_size, shape }
    }

    /// Reject cell sizes outside the range offered to users.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PIXEL_SIZE..=MAX_PIXEL_SIZE).contains(&self.pixel_size) {
            return Err(Error::InvalidArgument {
                arg: "pixel_size",
                value: self.pixel_size.to_string(),
            });
        }
        Ok(())
    }
}

/// Write `params` as a preset: a commented header followed by pretty JSON.
pub fn save_preset(path: &Path, params: &PixelArtParams) -> Result<()> {
    let mut content = String::new();
    content.push_str("// ==========================================\n");
    content.push_str("// PIXELART Configuration Preset\n");
    content.push_str("// ==========================================\n");
    content.push_str(&format!("// Version: {}\n", env!("CARGO_PKG_VERSION")));
    content.push_str(&format!("// Generated: {}\n", chrono::Utc::now().to_rfc3339()));
    content.push_str("// Note: input/output paths are not included in presets\n");
    content.push_str("// ==========================================\n\n");
    content.push_str(&serde_json::to_string_pretty(params)?);
    content.push('\n');

    fs::write(path, content)?;
    info!("Preset saved to: {:?}", path);
    Ok(())
}

/// Read a preset written by [`save_preset`]; anything before the first `{` is ignored.
pub fn load_preset(path: &Path) -> Result<PixelArtParams> {
    let content = fs::read_to_string(path)?;
    let json_start = content.find('{').ok_or_else(|| {
        Error::Processing(format!(
            "Invalid preset file {:?}: no JSON content found",
            path
        ))
    })?;

    let params: PixelArtParams = serde_json::from_str(&content[json_start..])?;
    params.validate()?;

    info!("Preset loaded from: {:?}", path);
    Ok(params)
}

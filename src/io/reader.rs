use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Bitmap, InputFormat};

/// Decode PNG or JPEG bytes into an RGB bitmap.
///
/// The format is sniffed from the content, not taken from a file name.
/// Alpha is dropped and greyscale is expanded to RGB.
pub fn decode_image(bytes: &[u8]) -> Result<(Bitmap, InputFormat)> {
    let format = image::guess_format(bytes)?;
    let input_format =
        InputFormat::from_image_format(format).ok_or_else(|| Error::UnsupportedFormat {
            format: format!("{:?}", format),
        })?;

    let decoded = image::load_from_memory_with_format(bytes, format)?;
    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(Error::ZeroDimension {
            width: decoded.width(),
            height: decoded.height(),
        });
    }

    debug!(
        "Decoded {:?} image {}x{} ({:?})",
        input_format,
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Ok((decoded.to_rgb8(), input_format))
}

pub fn read_image_bytes(path: &Path) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}

pub fn open_image(path: &Path) -> Result<(Bitmap, InputFormat)> {
    decode_image(&read_image_bytes(path)?)
}

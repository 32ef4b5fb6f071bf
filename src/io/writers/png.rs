use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::types::Bitmap;

fn write_rgb_png<W: Write>(writer: W, image: &Bitmap) -> Result<()> {
    let encoder = PngEncoder::new(writer);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(())
}

/// Encode to an in-memory PNG byte stream.
pub fn encode_png(image: &Bitmap) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    write_rgb_png(&mut bytes, image)?;
    debug!(
        "Encoded {}x{} PNG ({} bytes)",
        image.width(),
        image.height(),
        bytes.len()
    );
    Ok(bytes)
}

pub fn write_png(output: &Path, image: &Bitmap) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    write_rgb_png(&mut writer, image)?;
    writer.flush()?;
    Ok(())
}

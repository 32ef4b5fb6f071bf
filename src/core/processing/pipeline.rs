use tracing::info;

use crate::core::params::PixelArtParams;
use crate::core::processing::pixelate::pixelate_in_place;
use crate::core::processing::resize::resize_to_wallpaper;
use crate::error::Result;
use crate::io::reader::decode_image;
use crate::io::writers::encode_png;
use crate::types::{Bitmap, InputFormat};

/// Everything one pass of the pipeline produces.
#[derive(Debug, Clone)]
pub struct PixelArt {
    /// Decoded input before resizing
    pub original: Bitmap,
    pub input_format: InputFormat,
    /// Resized and pixelated bitmap
    pub image: Bitmap,
    /// `image` encoded as PNG
    pub png: Vec<u8>,
    pub params: PixelArtParams,
}

impl PixelArt {
    pub fn resized(&self) -> bool {
        self.original.dimensions() != self.image.dimensions()
    }
}

/// Resize to wallpaper bounds and pixelate; the input is not modified.
pub fn render_pixel_art(image: &Bitmap, params: &PixelArtParams) -> Result<Bitmap> {
    params.validate()?;
    let mut resized = resize_to_wallpaper(image)?;
    pixelate_in_place(&mut resized, params.pixel_size, params.shape)?;
    Ok(resized)
}

/// decode -> resize -> pixelate -> encode
pub fn process_image_bytes(bytes: &[u8], params: &PixelArtParams) -> Result<PixelArt> {
    params.validate()?;

    let (original, input_format) = decode_image(bytes)?;
    info!(
        "Input {:?} {}x{}, pixel size {}, shape {}",
        input_format,
        original.width(),
        original.height(),
        params.pixel_size,
        params.shape
    );

    let image = render_pixel_art(&original, params)?;
    let png = encode_png(&image)?;

    Ok(PixelArt {
        original,
        input_format,
        image,
        png,
        params: *params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::PixelShape;
    use image::Rgb;

    #[test]
    fn solid_red_square_end_to_end() {
        let img = Bitmap::from_pixel(40, 40, Rgb([255, 0, 0]));
        let bytes = encode_png(&img).unwrap();

        let art = process_image_bytes(&bytes, &PixelArtParams::new(20, PixelShape::Square)).unwrap();
        assert!(!art.resized());
        assert_eq!(art.image, img);

        let decoded = image::load_from_memory(&art.png).unwrap().to_rgb8();
        assert_eq!(decoded, art.image);
    }

    #[test]
    fn oversized_input_is_resized_before_pixelation() {
        let img = Bitmap::from_pixel(2160, 100, Rgb([0, 0, 255]));
        let out = render_pixel_art(&img, &PixelArtParams::new(10, PixelShape::Circle)).unwrap();
        assert_eq!(out.dimensions(), (1080, 50));
    }

    #[test]
    fn invalid_params_fail_before_decoding() {
        let result = process_image_bytes(b"junk", &PixelArtParams::new(2, PixelShape::Star));
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn non_image_bytes_fail() {
        let result = process_image_bytes(b"hello world", &PixelArtParams::default());
        assert!(result.is_err());
    }
}

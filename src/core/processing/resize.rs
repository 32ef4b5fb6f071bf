use crate::error::{Error, Result};
use crate::types::{Bitmap, MAX_HEIGHT, MAX_WIDTH};
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::{debug, info};

/// Compute the largest size that fits within `max_width` x `max_height`
/// while keeping the aspect ratio. Never scales up.
pub fn calculate_fit_dimensions(
    original_width: u32,
    original_height: u32,
    max_width: u32,
    max_height: u32,
) -> Result<(u32, u32)> {
    if original_width == 0 || original_height == 0 {
        return Err(Error::ZeroDimension {
            width: original_width,
            height: original_height,
        });
    }

    let aspect_ratio = original_width as f64 / original_height as f64;
    let (mut width, mut height) = (original_width, original_height);

    // Width first, then height against the (possibly) adjusted value
    if width > max_width {
        width = max_width;
        height = (width as f64 / aspect_ratio) as u32;
    }
    if height > max_height {
        height = max_height;
        width = (height as f64 * aspect_ratio) as u32;
    }

    if width == 0 || height == 0 {
        return Err(Error::ZeroDimension { width, height });
    }
    Ok((width, height))
}

pub fn resize_rgb_image(image: &Bitmap, target_width: u32, target_height: u32) -> Result<Bitmap> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        image.width(),
        image.height(),
        image.as_raw().clone(),
        PixelType::U8x3,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    Bitmap::from_raw(target_width, target_height, dst_image.into_vec()).ok_or_else(|| {
        Error::Resize(format!(
            "resized buffer does not match {}x{}",
            target_width, target_height
        ))
    })
}

/// Scale `image` down to fit the given bounds. Images that already fit are
/// returned as an unscaled copy.
pub fn resize_to_fit(image: &Bitmap, max_width: u32, max_height: u32) -> Result<Bitmap> {
    let (original_width, original_height) = image.dimensions();
    let (new_width, new_height) =
        calculate_fit_dimensions(original_width, original_height, max_width, max_height)?;

    if (new_width, new_height) == (original_width, original_height) {
        debug!(
            "Image {}x{} already fits within {}x{}, skipping resize",
            original_width, original_height, max_width, max_height
        );
        return Ok(image.clone());
    }

    info!(
        "Original size: {}x{}, New size: {}x{}",
        original_width, original_height, new_width, new_height
    );
    resize_rgb_image(image, new_width, new_height)
}

/// [`resize_to_fit`] with the smartphone wallpaper bounds.
pub fn resize_to_wallpaper(image: &Bitmap) -> Result<Bitmap> {
    resize_to_fit(image, MAX_WIDTH, MAX_HEIGHT)
}

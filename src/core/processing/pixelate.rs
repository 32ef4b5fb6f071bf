use tracing::{debug, info};

use crate::core::processing::grid::{CellGrid, average_color};
use crate::core::processing::shapes::{PixelWrite, render_cell};
use crate::error::{Error, Result};
use crate::types::{Bitmap, PixelShape};

/// Apply shape writes to the bitmap. Out-of-range writes are ignored.
pub fn apply_writes(image: &mut Bitmap, writes: &[PixelWrite]) {
    let (width, height) = image.dimensions();
    for w in writes {
        if w.x < width && w.y < height {
            image.put_pixel(w.x, w.y, w.color);
        }
    }
}

/// Pixelate `image` in place.
///
/// Cells are visited in raster order; each cell's average is taken from the
/// buffer as it stands at that point, then its shape is painted over it.
/// Pixels a circle or star does not cover keep their current value.
pub fn pixelate_in_place(image: &mut Bitmap, cell_size: u32, shape: PixelShape) -> Result<()> {
    if cell_size == 0 {
        return Err(Error::InvalidArgument {
            arg: "pixel_size",
            value: cell_size.to_string(),
        });
    }

    let (width, height) = image.dimensions();
    let grid = CellGrid::new(width, height, cell_size);
    info!(
        "Pixelating {}x{} image: {} cells of {}px as {}",
        width,
        height,
        grid.columns() as u64 * grid.rows() as u64,
        cell_size,
        shape
    );

    let mut painted = 0usize;
    for cell in grid {
        let Some(color) = average_color(image, &cell) else {
            continue;
        };
        let writes = render_cell(&cell, color, shape, cell_size, width, height);
        painted += writes.len();
        apply_writes(image, &writes);
    }

    debug!("Pixelation wrote {} pixels", painted);
    Ok(())
}

/// Pixelated copy of `image`; the input is left untouched.
pub fn pixelate(image: &Bitmap, cell_size: u32, shape: PixelShape) -> Result<Bitmap> {
    let mut output = image.clone();
    pixelate_in_place(&mut output, cell_size, shape)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    /// Flat colour of the cell containing `(x, y)` under square pixelation.
    fn cell_color_at(image: &Bitmap, cell_size: u32, x: u32, y: u32) -> Option<Rgb<u8>> {
        let (width, height) = image.dimensions();
        let cell = CellGrid::new(width, height, cell_size).find(|c| c.contains(x, y))?;
        average_color(image, &cell)
    }

    fn gradient(width: u32, height: u32) -> Bitmap {
        Bitmap::from_fn(width, height, |x, y| {
            Rgb([
                (x * 7 % 256) as u8,
                (y * 13 % 256) as u8,
                ((x + y) * 3 % 256) as u8,
            ])
        })
    }

    #[test]
    fn uniform_red_is_unchanged() {
        let img = Bitmap::from_pixel(40, 40, Rgb([255, 0, 0]));
        let out = pixelate(&img, 20, PixelShape::Square).unwrap();
        assert_eq!(out.dimensions(), (40, 40));
        assert_eq!(out, img);
    }

    #[test]
    fn square_mode_paints_every_pixel_with_its_cell_average() {
        for &(w, h, s) in &[(40, 30, 20), (23, 17, 5), (64, 64, 7), (9, 50, 50)] {
            let img = gradient(w, h);
            let out = pixelate(&img, s, PixelShape::Square).unwrap();
            assert_eq!(out.dimensions(), img.dimensions());
            for (x, y, p) in out.enumerate_pixels() {
                assert_eq!(Some(*p), cell_color_at(&img, s, x, y), "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn circle_keeps_corner_pixels() {
        let img = gradient(40, 40);
        let out = pixelate(&img, 20, PixelShape::Circle).unwrap();
        assert_eq!(out.get_pixel(0, 0), img.get_pixel(0, 0));
        assert_eq!(out.get_pixel(39, 39), img.get_pixel(39, 39));
        assert_eq!(Some(*out.get_pixel(10, 10)), cell_color_at(&img, 20, 10, 10));
        assert_eq!(Some(*out.get_pixel(30, 30)), cell_color_at(&img, 20, 30, 30));
    }

    #[test]
    fn star_paints_cell_centres() {
        let img = gradient(60, 45);
        let out = pixelate(&img, 15, PixelShape::Star).unwrap();
        assert_eq!(out.dimensions(), (60, 45));
        for (cx, cy) in [(7, 7), (22, 7), (52, 37)] {
            assert_eq!(Some(*out.get_pixel(cx, cy)), cell_color_at(&img, 15, cx, cy));
        }
        assert_eq!(out.get_pixel(0, 0), img.get_pixel(0, 0));
    }

    #[test]
    fn zero_cell_size_is_rejected() {
        let mut img = gradient(4, 4);
        assert!(matches!(
            pixelate_in_place(&mut img, 0, PixelShape::Square),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn cell_larger_than_image() {
        let img = gradient(3, 2);
        let out = pixelate(&img, 50, PixelShape::Square).unwrap();
        let avg = cell_color_at(&img, 50, 0, 0).unwrap();
        assert!(out.pixels().all(|p| *p == avg));
    }

    #[test]
    fn apply_writes_ignores_out_of_range() {
        let mut img = Bitmap::new(2, 2);
        let c = Rgb([1, 2, 3]);
        apply_writes(
            &mut img,
            &[PixelWrite { x: 1, y: 1, color: c }, PixelWrite { x: 2, y: 0, color: c }],
        );
        assert_eq!(*img.get_pixel(1, 1), c);
        assert_eq!(*img.get_pixel(0, 0), Rgb([0, 0, 0]));
    }
}

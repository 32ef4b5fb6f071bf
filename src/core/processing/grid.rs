//! Grid partitioning and per-cell colour averaging.
use image::Rgb;

use crate::types::Bitmap;

/// Grid-aligned region of the bitmap processed as one pixelation unit.
///
/// The origin sits on a multiple of the cell size; `width`/`height` are the
/// extent clipped to the bitmap, so edge cells may be narrower or shorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Cell {
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Raster-order iterator over the cells covering a `width` x `height` bitmap.
#[derive(Debug, Clone)]
pub struct CellGrid {
    width: u32,
    height: u32,
    cell_size: u32,
    next_x: u32,
    next_y: u32,
}

impl CellGrid {
    /// `cell_size` must be non-zero; a zero-area bitmap yields no cells.
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        assert!(cell_size > 0, "cell size must be positive");
        Self {
            width,
            height,
            cell_size,
            next_x: 0,
            next_y: 0,
        }
    }

    pub fn columns(&self) -> u32 {
        self.width.div_ceil(self.cell_size)
    }

    pub fn rows(&self) -> u32 {
        self.height.div_ceil(self.cell_size)
    }
}

impl Iterator for CellGrid {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.width == 0 || self.next_y >= self.height {
            return None;
        }

        let cell = Cell {
            x: self.next_x,
            y: self.next_y,
            width: self.cell_size.min(self.width - self.next_x),
            height: self.cell_size.min(self.height - self.next_y),
        };

        self.next_x = self.next_x.saturating_add(self.cell_size);
        if self.next_x >= self.width {
            self.next_x = 0;
            self.next_y = self.next_y.saturating_add(self.cell_size);
        }
        Some(cell)
    }
}

/// Mean colour of the cell, each channel floor-divided by the pixel count.
/// Returns `None` for an empty cell.
pub fn average_color(image: &Bitmap, cell: &Cell) -> Option<Rgb<u8>> {
    let count = cell.pixel_count();
    if count == 0 {
        return None;
    }

    let mut sums = [0u64; 3];
    for py in cell.y..cell.y + cell.height {
        for px in cell.x..cell.x + cell.width {
            let Rgb([r, g, b]) = *image.get_pixel(px, py);
            sums[0] += r as u64;
            sums[1] += g as u64;
            sums[2] += b as u64;
        }
    }

    Some(Rgb([
        (sums[0] / count) as u8,
        (sums[1] / count) as u8,
        (sums[2] / count) as u8,
    ]))
}

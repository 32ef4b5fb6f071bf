//! Geometry for the cell shapes. Rendering is a pure function from a cell,
//! its colour and the shape to the list of pixel writes; applying the writes
//! to a bitmap happens in `pixelate`.
use std::f64::consts::PI;

use image::Rgb;

use crate::core::processing::grid::Cell;
use crate::types::PixelShape;

/// Number of star points.
pub const STAR_POINTS: usize = 5;

/// A single output pixel assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelWrite {
    pub x: u32,
    pub y: u32,
    pub color: Rgb<u8>,
}

/// Vertices of a five-pointed star, alternating outer and inner radius.
///
/// Outer vertex `i` sits at `PI/2 + i * 2PI/5`, the following inner vertex a
/// further `PI/5` along. Coordinates are `(cx + r cos a, cy + r sin a)` with
/// the image's y axis pointing down.
pub fn star_vertices(cx: f64, cy: f64, outer: f64, inner: f64) -> [(f64, f64); 2 * STAR_POINTS] {
    let mut points = [(0.0, 0.0); 2 * STAR_POINTS];
    for i in 0..STAR_POINTS {
        let angle = PI / 2.0 + i as f64 * 2.0 * PI / STAR_POINTS as f64;
        points[2 * i] = (cx + outer * angle.cos(), cy + outer * angle.sin());
        let angle = angle + PI / STAR_POINTS as f64;
        points[2 * i + 1] = (cx + inner * angle.cos(), cy + inner * angle.sin());
    }
    points
}

/// Star geometry for a cell: centre and radii derive from the configured
/// `cell_size`, not the clipped extent, so edge-cell stars can overflow.
pub fn cell_star(cell: &Cell, cell_size: u32) -> [(f64, f64); 2 * STAR_POINTS] {
    let half = cell_size / 2;
    let center_x = (cell.x + half) as f64;
    let center_y = (cell.y + half) as f64;
    let outer_radius = half;
    let inner_radius = outer_radius / 2;
    star_vertices(center_x, center_y, outer_radius as f64, inner_radius as f64)
}

/// Even-odd test of a point against a closed polygon.
pub fn point_in_polygon(x: f64, y: f64, polygon: &[(f64, f64)]) -> bool {
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (xi, yi) = polygon[i];
        let (xj, yj) = polygon[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Pixels covered when rendering `shape` for `cell`.
///
/// Circle and star coverage is decided at pixel centres. Pixels outside
/// `[0, image_width) x [0, image_height)` are dropped.
pub fn render_cell(
    cell: &Cell,
    color: Rgb<u8>,
    shape: PixelShape,
    cell_size: u32,
    image_width: u32,
    image_height: u32,
) -> Vec<PixelWrite> {
    let write = |x, y| PixelWrite { x, y, color };

    match shape {
        PixelShape::Square => {
            let mut writes = Vec::with_capacity(cell.pixel_count() as usize);
            for y in cell.y..cell.y + cell.height {
                for x in cell.x..cell.x + cell.width {
                    writes.push(write(x, y));
                }
            }
            writes
        }
        PixelShape::Circle => {
            // Inscribed in the clipped box: an ellipse for non-square edge cells
            let rx = cell.width as f64 / 2.0;
            let ry = cell.height as f64 / 2.0;
            let cx = cell.x as f64 + rx;
            let cy = cell.y as f64 + ry;

            let mut writes = Vec::new();
            for y in cell.y..cell.y + cell.height {
                for x in cell.x..cell.x + cell.width {
                    let dx = (x as f64 + 0.5 - cx) / rx;
                    let dy = (y as f64 + 0.5 - cy) / ry;
                    if dx * dx + dy * dy <= 1.0 {
                        writes.push(write(x, y));
                    }
                }
            }
            writes
        }
        PixelShape::Star => {
            let polygon = cell_star(cell, cell_size);

            let (mut min_x, mut min_y) = (f64::MAX, f64::MAX);
            let (mut max_x, mut max_y) = (f64::MIN, f64::MIN);
            for &(px, py) in &polygon {
                min_x = min_x.min(px);
                min_y = min_y.min(py);
                max_x = max_x.max(px);
                max_y = max_y.max(py);
            }

            let x_start = min_x.floor().max(0.0) as u32;
            let y_start = min_y.floor().max(0.0) as u32;
            let x_end = (max_x.ceil().max(0.0) as u32).min(image_width);
            let y_end = (max_y.ceil().max(0.0) as u32).min(image_height);

            let mut writes = Vec::new();
            for y in y_start..y_end {
                for x in x_start..x_end {
                    if point_in_polygon(x as f64 + 0.5, y as f64 + 0.5, &polygon) {
                        writes.push(write(x, y));
                    }
                }
            }
            writes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    fn full_cell(size: u32) -> Cell {
        Cell { x: 0, y: 0, width: size, height: size }
    }

    fn covered(writes: &[PixelWrite], x: u32, y: u32) -> bool {
        writes.iter().any(|w| w.x == x && w.y == y)
    }

    #[test]
    fn star_has_ten_alternating_vertices() {
        let (cx, cy, outer, inner) = (10.0, 10.0, 10.0, 5.0);
        let vertices = star_vertices(cx, cy, outer, inner);
        assert_eq!(vertices.len(), 10);

        for (i, &(x, y)) in vertices.iter().enumerate() {
            let r = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
            let expected = if i % 2 == 0 { outer } else { inner };
            assert!((r - expected).abs() < 1e-9, "vertex {} at radius {}", i, r);
        }
    }

    #[test]
    fn star_vertex_angles_step_by_pi_over_five() {
        let vertices = star_vertices(0.0, 0.0, 4.0, 2.0);
        // First outer vertex at PI/2: straight along +y
        assert!(vertices[0].0.abs() < 1e-9);
        assert!((vertices[0].1 - 4.0).abs() < 1e-9);

        for (i, &(x, y)) in vertices.iter().enumerate() {
            let expected = PI / 2.0 + i as f64 * PI / 5.0;
            let diff = (y.atan2(x) - expected).rem_euclid(2.0 * PI);
            assert!(diff < 1e-9 || (2.0 * PI - diff) < 1e-9, "vertex {} angle off", i);
        }
    }

    #[test]
    fn cell_star_uses_configured_size() {
        // Clipped edge cell still gets a star sized by the configured cell
        let cell = Cell { x: 20, y: 0, width: 3, height: 20 };
        let vertices = cell_star(&cell, 20);
        assert!((vertices[0].0 - 30.0).abs() < 1e-9);
        assert!((vertices[0].1 - 20.0).abs() < 1e-9);
    }

    #[test]
    fn point_in_polygon_square() {
        let square = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
        assert!(point_in_polygon(2.0, 2.0, &square));
        assert!(!point_in_polygon(5.0, 2.0, &square));
        assert!(!point_in_polygon(-0.5, 3.0, &square));
    }

    #[test]
    fn square_covers_cell_exactly() {
        let cell = Cell { x: 5, y: 10, width: 3, height: 2 };
        let writes = render_cell(&cell, RED, PixelShape::Square, 5, 100, 100);
        assert_eq!(writes.len(), 6);
        assert!(writes.iter().all(|w| cell.contains(w.x, w.y) && w.color == RED));
    }

    #[test]
    fn circle_leaves_corners_and_covers_center() {
        let cell = full_cell(20);
        let writes = render_cell(&cell, RED, PixelShape::Circle, 20, 20, 20);
        assert!(covered(&writes, 10, 10));
        assert!(covered(&writes, 0, 10));
        assert!(covered(&writes, 10, 19));
        assert!(!covered(&writes, 0, 0));
        assert!(!covered(&writes, 19, 19));
        assert!(writes.len() < 400);
        assert!(writes.iter().all(|w| cell.contains(w.x, w.y)));
    }

    #[test]
    fn circle_on_clipped_cell_is_ellipse() {
        let cell = Cell { x: 20, y: 0, width: 4, height: 20 };
        let writes = render_cell(&cell, RED, PixelShape::Circle, 20, 24, 20);
        assert!(writes.iter().all(|w| cell.contains(w.x, w.y)));
        // Spans the full clipped width at mid-height and nearly the full height
        assert!((20..24).all(|x| covered(&writes, x, 10)));
        assert!(covered(&writes, 21, 0) && covered(&writes, 21, 19));
        assert!(!covered(&writes, 20, 0));
    }

    #[test]
    fn one_pixel_circle_is_not_empty() {
        let cell = Cell { x: 3, y: 3, width: 1, height: 1 };
        let writes = render_cell(&cell, RED, PixelShape::Circle, 5, 4, 4);
        assert_eq!(writes, vec![PixelWrite { x: 3, y: 3, color: RED }]);
    }

    #[test]
    fn star_covers_center_not_corners() {
        let cell = full_cell(20);
        let writes = render_cell(&cell, RED, PixelShape::Star, 20, 20, 20);
        assert!(covered(&writes, 10, 10));
        assert!(covered(&writes, 9, 9));
        assert!(!covered(&writes, 0, 0));
        assert!(!covered(&writes, 19, 0));
        assert!(!covered(&writes, 0, 19));
        assert!(!covered(&writes, 19, 19));
        assert!(writes.iter().all(|w| w.color == RED));
    }

    #[test]
    fn star_writes_are_clipped_to_image() {
        // Edge cell 2px wide; the star is centred past the right border
        let cell = Cell { x: 20, y: 0, width: 2, height: 20 };
        let writes = render_cell(&cell, RED, PixelShape::Star, 20, 22, 20);
        assert!(writes.iter().all(|w| w.x < 22 && w.y < 20));
    }

    #[test]
    fn star_fully_outside_image_writes_nothing() {
        // Centre at (30, 10) with radius 10; inner region starts at x=25
        let cell = Cell { x: 20, y: 0, width: 1, height: 20 };
        let writes = render_cell(&cell, RED, PixelShape::Star, 20, 21, 20);
        assert!(writes.is_empty());
    }
}

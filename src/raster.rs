//! Filled shape primitives over an RGBA canvas
//!
//! Shapes are addressed with inclusive integer boxes `[x0, y0, x1, y1]`, so a box
//! covers `x1 - x0 + 1` columns. Fills overwrite pixels with the given color as-is:
//! there is no alpha compositing and no anti-aliasing, which keeps the output
//! palette limited to the colors actually drawn. Anything outside the canvas is
//! clipped.

use image::{Rgba, RgbaImage};

/// Inclusive pixel box `[x0, y0, x1, y1]`
pub type BoxI = [i32; 4];

/// Clip an inclusive box to the canvas, returning the covered pixel ranges
fn clip(img: &RgbaImage, [x0, y0, x1, y1]: BoxI) -> Option<(u32, u32, u32, u32)> {
    if x1 < x0 || y1 < y0 || img.width() == 0 || img.height() == 0 {
        return None;
    }

    let max_x = img.width() as i64 - 1;
    let max_y = img.height() as i64 - 1;
    let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);

    if x1 < 0 || y1 < 0 || x0 > max_x || y0 > max_y {
        return None;
    }

    Some((
        x0.max(0) as u32,
        y0.max(0) as u32,
        x1.min(max_x) as u32,
        y1.min(max_y) as u32,
    ))
}

/// Fill every pixel of the box
pub fn fill_rect(img: &mut RgbaImage, bbox: BoxI, color: Rgba<u8>) {
    let Some((x0, y0, x1, y1)) = clip(img, bbox) else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            img.put_pixel(x, y, color);
        }
    }
}

/// Fill the ellipse inscribed in the box
///
/// A pixel is covered when its centre lies inside or on the ellipse that spans
/// the box's full pixel area.
pub fn fill_ellipse(img: &mut RgbaImage, bbox: BoxI, color: Rgba<u8>) {
    let Some((px0, py0, px1, py1)) = clip(img, bbox) else {
        return;
    };

    let [x0, y0, x1, y1] = bbox.map(f64::from);
    let center_x = (x0 + x1 + 1.0) / 2.0;
    let center_y = (y0 + y1 + 1.0) / 2.0;
    let radius_x = (x1 - x0 + 1.0) / 2.0;
    let radius_y = (y1 - y0 + 1.0) / 2.0;

    for y in py0..=py1 {
        let dy = (y as f64 + 0.5 - center_y) / radius_y;
        for x in px0..=px1 {
            let dx = (x as f64 + 0.5 - center_x) / radius_x;
            if dx * dx + dy * dy <= 1.0 {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill a box with rounded corners
///
/// The radius is clamped to half of the shorter side; a zero radius gives a plain
/// rectangle.
pub fn fill_rounded_rect(img: &mut RgbaImage, bbox: BoxI, radius: i32, color: Rgba<u8>) {
    let Some((px0, py0, px1, py1)) = clip(img, bbox) else {
        return;
    };

    let [x0, y0, x1, y1] = bbox.map(f64::from);
    let width = x1 - x0 + 1.0;
    let height = y1 - y0 + 1.0;
    let radius = f64::from(radius.max(0)).min(width / 2.0).min(height / 2.0);

    // Corner circle centres sit on this inner rectangle
    let inner_left = x0 + radius;
    let inner_right = x1 + 1.0 - radius;
    let inner_top = y0 + radius;
    let inner_bottom = y1 + 1.0 - radius;

    for y in py0..=py1 {
        let cy = y as f64 + 0.5;
        let dy = cy - cy.clamp(inner_top, inner_bottom);
        for x in px0..=px1 {
            let cx = x as f64 + 0.5;
            let dx = cx - cx.clamp(inner_left, inner_right);
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill a convex polygon, edges included
///
/// Only points inside the vertices' bounding box are tested, so a polygon that
/// collapses to a point or a line covers just that point or segment.
pub fn fill_polygon(img: &mut RgbaImage, points: &[(i32, i32)], color: Rgba<u8>) {
    if points.is_empty() {
        return;
    }

    let bbox = points.iter().fold(
        [i32::MAX, i32::MAX, i32::MIN, i32::MIN],
        |[x0, y0, x1, y1], &(x, y)| [x0.min(x), y0.min(y), x1.max(x), y1.max(y)],
    );
    let Some((px0, py0, px1, py1)) = clip(img, bbox) else {
        return;
    };

    for y in py0..=py1 {
        for x in px0..=px1 {
            if contains_point(points, x as i64, y as i64) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Whether the point lies inside or on the boundary of a convex polygon
fn contains_point(points: &[(i32, i32)], x: i64, y: i64) -> bool {
    let mut has_positive = false;
    let mut has_negative = false;

    for (i, &(ax, ay)) in points.iter().enumerate() {
        let (bx, by) = points[(i + 1) % points.len()];
        let (ax, ay, bx, by) = (ax as i64, ay as i64, bx as i64, by as i64);
        let cross = (bx - ax) * (y - ay) - (by - ay) * (x - ax);

        has_positive |= cross > 0;
        has_negative |= cross < 0;
        if has_positive && has_negative {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn covered(img: &RgbaImage) -> usize {
        img.pixels().filter(|p| **p != CLEAR).count()
    }

    #[test]
    fn rect_bounds_are_inclusive() {
        let mut img = RgbaImage::new(10, 10);
        fill_rect(&mut img, [2, 3, 4, 5], RED);

        assert_eq!(covered(&img), 9);
        assert_eq!(*img.get_pixel(2, 3), RED);
        assert_eq!(*img.get_pixel(4, 5), RED);
        assert_eq!(*img.get_pixel(5, 5), CLEAR);
    }

    #[test]
    fn shapes_are_clipped_to_canvas() {
        let mut img = RgbaImage::new(8, 8);
        fill_rect(&mut img, [-5, -5, 2, 2], RED);
        fill_ellipse(&mut img, [4, 4, 11, 11], RED);
        fill_rect(&mut img, [20, 20, 30, 30], RED);

        assert_eq!(*img.get_pixel(0, 0), RED);
        assert_eq!(*img.get_pixel(7, 7), RED);
    }

    #[test]
    fn inverted_box_draws_nothing() {
        let mut img = RgbaImage::new(8, 8);
        fill_rect(&mut img, [5, 5, 4, 6], RED);
        fill_ellipse(&mut img, [5, 5, 6, 4], RED);
        fill_rounded_rect(&mut img, [6, 1, 2, 3], 1, RED);

        assert_eq!(covered(&img), 0);
    }

    #[test]
    fn ellipse_fills_centre_and_leaves_corners() {
        let mut img = RgbaImage::new(21, 21);
        fill_ellipse(&mut img, [0, 0, 20, 20], RED);

        assert_eq!(*img.get_pixel(10, 10), RED);
        assert_eq!(*img.get_pixel(0, 10), RED);
        assert_eq!(*img.get_pixel(10, 20), RED);
        assert_eq!(*img.get_pixel(0, 0), CLEAR);
        assert_eq!(*img.get_pixel(20, 20), CLEAR);
    }

    #[test]
    fn single_pixel_ellipse() {
        let mut img = RgbaImage::new(4, 4);
        fill_ellipse(&mut img, [1, 1, 1, 1], RED);

        assert_eq!(covered(&img), 1);
        assert_eq!(*img.get_pixel(1, 1), RED);
    }

    #[test]
    fn rounded_rect_cuts_corners() {
        let mut img = RgbaImage::new(20, 20);
        fill_rounded_rect(&mut img, [0, 0, 19, 19], 6, RED);

        assert_eq!(*img.get_pixel(0, 0), CLEAR);
        assert_eq!(*img.get_pixel(19, 0), CLEAR);
        assert_eq!(*img.get_pixel(10, 0), RED);
        assert_eq!(*img.get_pixel(0, 10), RED);
        assert_eq!(*img.get_pixel(10, 10), RED);
    }

    #[test]
    fn rounded_rect_with_zero_radius_matches_rect() {
        let mut rounded = RgbaImage::new(12, 12);
        let mut plain = RgbaImage::new(12, 12);
        fill_rounded_rect(&mut rounded, [1, 2, 9, 7], 0, RED);
        fill_rect(&mut plain, [1, 2, 9, 7], RED);

        assert_eq!(rounded, plain);
    }

    #[test]
    fn oversized_radius_is_clamped() {
        // Width 5, height 11: a radius of 50 behaves like 2.5, a capsule
        let mut img = RgbaImage::new(16, 16);
        fill_rounded_rect(&mut img, [2, 2, 6, 12], 50, RED);

        assert_eq!(*img.get_pixel(4, 7), RED);
        assert_eq!(*img.get_pixel(4, 2), RED);
        assert_eq!(*img.get_pixel(2, 2), CLEAR);
        assert_eq!(*img.get_pixel(7, 7), CLEAR);
    }

    #[test]
    fn triangle_includes_edges_and_vertices() {
        let mut img = RgbaImage::new(12, 12);
        fill_polygon(&mut img, &[(5, 1), (1, 9), (9, 9)], RED);

        assert_eq!(*img.get_pixel(5, 1), RED);
        assert_eq!(*img.get_pixel(1, 9), RED);
        assert_eq!(*img.get_pixel(5, 9), RED);
        assert_eq!(*img.get_pixel(5, 5), RED);
        assert_eq!(*img.get_pixel(1, 1), CLEAR);
        assert_eq!(*img.get_pixel(5, 10), CLEAR);
    }

    #[test]
    fn winding_order_does_not_matter() {
        let mut clockwise = RgbaImage::new(12, 12);
        let mut counter = RgbaImage::new(12, 12);
        fill_polygon(&mut clockwise, &[(5, 1), (9, 9), (1, 9)], RED);
        fill_polygon(&mut counter, &[(5, 1), (1, 9), (9, 9)], RED);

        assert_eq!(clockwise, counter);
    }

    #[test]
    fn degenerate_polygon_stays_small() {
        let mut img = RgbaImage::new(10, 10);
        fill_polygon(&mut img, &[(4, 6), (4, 6), (4, 6)], RED);
        assert_eq!(covered(&img), 1);

        let mut line = RgbaImage::new(10, 10);
        fill_polygon(&mut line, &[(1, 1), (3, 3), (5, 5)], RED);
        assert_eq!(covered(&line), 5);
    }

    #[test]
    fn empty_canvas_is_ignored() {
        let mut img = RgbaImage::new(0, 0);
        fill_rect(&mut img, [0, 0, 3, 3], RED);
        fill_ellipse(&mut img, [0, 0, 3, 3], RED);
        fill_rounded_rect(&mut img, [0, 0, 3, 3], 1, RED);
        fill_polygon(&mut img, &[(0, 0), (3, 0), (0, 3)], RED);

        assert_eq!(img.dimensions(), (0, 0));
    }
}

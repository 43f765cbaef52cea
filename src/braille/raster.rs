use super::BrailleCanvas;
use crate::map::{PixelPoint, Rgba, Stroke};

/// Strokes at least this wide are drawn three dots thick
const THICK_WIDTH: f32 = 2.0;

#[inline(always)]
pub fn to_pixel(p: PixelPoint) -> (i32, i32) {
    (p.x().round() as i32, p.y().round() as i32)
}

/// Visit every dot of a line using Bresenham's algorithm
fn walk_line(x0: i32, y0: i32, x1: i32, y1: i32, mut visit: impl FnMut(i32, i32)) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        visit(x, y);

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;

        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }

        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Draw a line using Bresenham's algorithm
pub fn draw_line(canvas: &mut BrailleCanvas, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    walk_line(x0, y0, x1, y1, |x, y| canvas.set_pixel_signed(x, y, color));
}

/// Draw a thicker line (used for wide strokes)
pub fn draw_thick_line(canvas: &mut BrailleCanvas, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    draw_line(canvas, x0, y0, x1, y1, color);
    draw_line(canvas, x0 + 1, y0, x1 + 1, y1, color);
    draw_line(canvas, x0, y0 + 1, x1, y1 + 1, color);
}

/// Whether the dash pattern is "on" at `distance` dots along the path.
/// Odd-length patterns repeat twice per period, so on/off alternate.
fn dash_on(pattern: &[f32], width: f32, distance: f32) -> bool {
    let repeats = if pattern.len() % 2 == 1 { 2 } else { 1 };
    let period: f32 = pattern.iter().sum::<f32>() * width * repeats as f32;
    if pattern.is_empty() || period <= 0.0 {
        return true;
    }

    let mut pos = distance % period;
    for (i, len) in pattern.iter().cycle().take(pattern.len() * repeats).enumerate() {
        let len = len * width;
        if pos < len {
            return i % 2 == 0;
        }
        pos -= len;
    }
    true
}

/// Stroke an open path. Dash phase runs continuously across segments.
pub fn stroke_path(canvas: &mut BrailleCanvas, points: &[PixelPoint], stroke: &Stroke) {
    let thick = stroke.width >= THICK_WIDTH;
    let color = stroke.color;

    if let [only] = points {
        let (x, y) = to_pixel(*only);
        canvas.set_pixel_signed(x, y, color);
        return;
    }

    let mut distance = 0.0f32;
    for pair in points.windows(2) {
        let (x0, y0) = to_pixel(pair[0]);
        let (x1, y1) = to_pixel(pair[1]);

        match stroke.dash {
            None if thick => draw_thick_line(canvas, x0, y0, x1, y1, color),
            None => draw_line(canvas, x0, y0, x1, y1, color),
            Some(pattern) => {
                let mut first = true;
                walk_line(x0, y0, x1, y1, |x, y| {
                    // Segment joints are shared with the previous segment
                    if !first || distance == 0.0 {
                        if dash_on(pattern, stroke.width, distance) {
                            canvas.set_pixel_signed(x, y, color);
                            if thick {
                                canvas.set_pixel_signed(x + 1, y, color);
                                canvas.set_pixel_signed(x, y + 1, color);
                            }
                        }
                        distance += 1.0;
                    }
                    first = false;
                });
            }
        }
    }
}

/// Fill a polygon with an even-odd scanline, sampling dot centers
pub fn fill_polygon(canvas: &mut BrailleCanvas, points: &[PixelPoint], color: Rgba) {
    if points.len() < 3 {
        stroke_path(canvas, points, &Stroke::solid(color, 1.0));
        return;
    }

    let (min_y, max_y) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.y()), hi.max(p.y())));
    let first_row = min_y.floor().max(0.0) as i64;
    let last_row = max_y.ceil().min(canvas.pixel_height() as f64 - 1.0) as i64;
    let max_x = canvas.pixel_width() as f64 - 1.0;

    let mut crossings: Vec<f64> = Vec::new();
    for row in first_row..=last_row {
        let sy = row as f64 + 0.5;
        crossings.clear();

        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            let (ay, by) = (a.y(), b.y());
            if (ay <= sy && by > sy) || (by <= sy && ay > sy) {
                let t = (sy - ay) / (by - ay);
                crossings.push(a.x() + t * (b.x() - a.x()));
            }
        }

        crossings.sort_by(|a, b| a.total_cmp(b));
        for span in crossings.chunks_exact(2) {
            let start = (span[0] - 0.5).ceil().max(0.0);
            let end = (span[1] - 0.5).floor().min(max_x);
            if start > end {
                continue;
            }
            for x in start as i64..=end as i64 {
                canvas.set_pixel(x as usize, row as usize, color);
            }
        }
    }
}

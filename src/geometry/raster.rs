use crate::point::{Color, Line, Point};

/// Rasterizes a segment into evenly spaced integer positions.
///
/// Takes `max(|dx|, |dy|)` steps and emits `steps + 1` positions by linear
/// interpolation, truncating each coordinate toward zero. Both endpoints are
/// always included; a zero-length segment yields exactly the start position.
pub fn rasterize_segment(start: (i32, i32), end: (i32, i32)) -> Vec<(i32, i32)> {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;

    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        return vec![start];
    }

    let x_step = dx as f32 / steps as f32;
    let y_step = dy as f32 / steps as f32;

    let mut x = start.0 as f32;
    let mut y = start.1 as f32;

    let mut positions = Vec::with_capacity(steps as usize + 1);
    for _ in 0..=steps {
        positions.push((x as i32, y as i32));
        x += x_step;
        y += y_step;
    }

    positions
}

/// Rasterizes a buffered run of segments into committed points of one color.
pub fn rasterize_lines(lines: &[Line], color: Color) -> Vec<Point> {
    let mut points = Vec::new();
    for line in lines {
        for pos in rasterize_segment(line.start, line.end) {
            points.push(Point::new(pos, color));
        }
    }
    points
}

//! Software rasterization primitives
//!
//! Pure functions producing ordered point or vertex sequences; given the same
//! inputs they always return the same sequence, so they are safe to call from
//! any number of draw invocations. The line and outline-circle routines use
//! incremental integer error terms only; the filled circle is the one place
//! floating trig is allowed.

use glam::{IVec2, Vec2};

/// Rasterize a line segment with Bresenham's algorithm
///
/// Emits both endpoints and exactly `max(|dx|, |dy|) + 1` points, stepping at
/// most one unit per axis between consecutive points (8-connected, no gaps).
/// The sign terms make the same loop cover all eight slope octants.
pub fn line(from: IVec2, to: IVec2) -> Vec<IVec2> {
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut points = Vec::with_capacity((dx.max(dy) + 1) as usize);
    let (mut x, mut y) = (from.x, from.y);
    loop {
        points.push(IVec2::new(x, y));
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    points
}

/// Rasterize a circle outline with the midpoint algorithm
///
/// One octant is computed with the integer decision term starting at `1 - r`;
/// the other seven come from reflection. Radii below 1 degenerate to the
/// center point rather than looping or underflowing.
pub fn circle_outline(center: IVec2, r: i32) -> Vec<IVec2> {
    if r < 1 {
        return vec![center];
    }

    let mut points = Vec::new();
    let mut x = 0;
    let mut y = r;
    let mut d = 1 - r;
    while x <= y {
        push_octant_points(&mut points, center, x, y);
        x += 1;
        if d < 0 {
            d += 2 * x + 1;
        } else {
            y -= 1;
            d += 2 * (x - y) + 1;
        }
    }
    points
}

fn push_octant_points(points: &mut Vec<IVec2>, c: IVec2, x: i32, y: i32) {
    points.push(IVec2::new(c.x + x, c.y + y));
    points.push(IVec2::new(c.x - x, c.y + y));
    points.push(IVec2::new(c.x + x, c.y - y));
    points.push(IVec2::new(c.x - x, c.y - y));
    points.push(IVec2::new(c.x + y, c.y + x));
    points.push(IVec2::new(c.x - y, c.y + x));
    points.push(IVec2::new(c.x + y, c.y - x));
    points.push(IVec2::new(c.x - y, c.y - x));
}

/// Build a triangle-fan vertex sequence for a filled circle
///
/// Center vertex plus 361 perimeter samples at 1-degree increments. The last
/// sample reuses the 0-degree angle so the fan closes exactly.
pub fn filled_circle(center: Vec2, r: f32) -> Vec<Vec2> {
    let mut fan = Vec::with_capacity(362);
    fan.push(center);
    for i in 0..=360u32 {
        let angle = (i % 360) as f32 * std::f32::consts::PI / 180.0;
        fan.push(center + r * Vec2::new(angle.cos(), angle.sin()));
    }
    fan
}

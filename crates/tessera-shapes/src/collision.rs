//! Collision queries between points, lines, circles, triangles, polygons
//! and rectangles.
//!
//! All functions are pure and allocation-free. Rectangles are used with
//! their raw `x`, `y`, `width`, `height` as given.

use glam::Vec2;
use tessera_core::Rect;

/// Whether `point` lies in the half-open box `[x, x + w) x [y, y + h)`.
pub fn point_in_rect(point: Vec2, rec: Rect) -> bool {
    point.x >= rec.x
        && point.x < rec.x + rec.width
        && point.y >= rec.y
        && point.y < rec.y + rec.height
}

/// Whether `point` lies within `radius` of `center`, boundary included.
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    circles_collide(point, 0.0, center, radius)
}

/// Whether `point` lies strictly inside the triangle. Points on an edge and
/// degenerate triangles never collide.
pub fn point_in_triangle(point: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> bool {
    let denominator = (p2.y - p3.y) * (p1.x - p3.x) + (p3.x - p2.x) * (p1.y - p3.y);
    if denominator == 0.0 {
        return false;
    }
    let alpha = ((p2.y - p3.y) * (point.x - p3.x) + (p3.x - p2.x) * (point.y - p3.y)) / denominator;
    let beta = ((p3.y - p1.y) * (point.x - p3.x) + (p1.x - p3.x) * (point.y - p3.y)) / denominator;
    let gamma = 1.0 - alpha - beta;

    alpha > 0.0 && beta > 0.0 && gamma > 0.0
}

/// Even-odd test of `point` against the polygon outlined by `points`.
///
/// The outline is closed implicitly: the edge from the last point back to
/// the first is tested too. Lists that already repeat the first point
/// produce a zero-length closing edge, which never counts as a crossing.
/// Fewer than 3 points never collide.
pub fn point_in_polygon(point: Vec2, points: &[Vec2]) -> bool {
    if points.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut previous = points[points.len() - 1];
    for &current in points {
        let straddles = (previous.y >= point.y && current.y < point.y)
            || (previous.y < point.y && current.y >= point.y);
        if straddles {
            let crossing =
                (current.x - previous.x) * (point.y - previous.y) / (current.y - previous.y) + previous.x;
            if point.x < crossing {
                inside = !inside;
            }
        }
        previous = current;
    }
    inside
}

/// Whether two rectangles overlap with positive area. Touching edges do
/// not count.
pub fn rects_intersect(a: Rect, b: Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Whether two circles touch or overlap.
pub fn circles_collide(center1: Vec2, radius1: f32, center2: Vec2, radius2: f32) -> bool {
    center1.distance(center2) <= radius1 + radius2
}

/// Whether a circle touches or overlaps a rectangle.
pub fn circle_rect_collide(center: Vec2, radius: f32, rec: Rect) -> bool {
    let half_width = rec.width / 2.0;
    let half_height = rec.height / 2.0;
    let dx = (center.x - (rec.x + half_width)).abs();
    let dy = (center.y - (rec.y + half_height)).abs();

    if dx > half_width + radius || dy > half_height + radius {
        return false;
    }
    if dx <= half_width || dy <= half_height {
        return true;
    }

    let corner = Vec2::new(dx - half_width, dy - half_height);
    corner.length_squared() <= radius * radius
}

/// Intersection point of segments `start1..end1` and `start2..end2`.
///
/// Parallel (or nearly parallel) segments return `None`. The bounds check
/// is skipped on any axis where a segment has no extent, so axis-aligned
/// segments are handled exactly.
pub fn lines_intersect(start1: Vec2, end1: Vec2, start2: Vec2, end2: Vec2) -> Option<Vec2> {
    let div = (end2.y - start2.y) * (end1.x - start1.x) - (end2.x - start2.x) * (end1.y - start1.y);
    if div.abs() < f32::EPSILON {
        return None;
    }

    let cross1 = start1.x * end1.y - start1.y * end1.x;
    let cross2 = start2.x * end2.y - start2.y * end2.x;
    let xi = ((start2.x - end2.x) * cross1 - (start1.x - end1.x) * cross2) / div;
    let yi = ((start2.y - end2.y) * cross1 - (start1.y - end1.y) * cross2) / div;

    let outside = |value: f32, a: f32, b: f32| (a - b).abs() > f32::EPSILON && (value < a.min(b) || value > a.max(b));

    if outside(xi, start1.x, end1.x)
        || outside(xi, start2.x, end2.x)
        || outside(yi, start1.y, end1.y)
        || outside(yi, start2.y, end2.y)
    {
        return None;
    }

    Some(Vec2::new(xi, yi))
}

/// Whether `point` lies on the segment `p1..p2` within `threshold` pixels.
///
/// The distance test scales the cross product by the segment's dominant
/// axis extent, then the point must fall between the endpoints along that
/// axis.
pub fn point_on_line(point: Vec2, p1: Vec2, p2: Vec2, threshold: f32) -> bool {
    let dc = point - p1;
    let dl = p2 - p1;
    let cross = dc.x * dl.y - dc.y * dl.x;

    if cross.abs() >= threshold * dl.x.abs().max(dl.y.abs()) {
        return false;
    }

    if dl.x.abs() >= dl.y.abs() {
        if dl.x > 0.0 {
            p1.x <= point.x && point.x <= p2.x
        } else {
            p2.x <= point.x && point.x <= p1.x
        }
    } else if dl.y > 0.0 {
        p1.y <= point.y && point.y <= p2.y
    } else {
        p2.y <= point.y && point.y <= p1.y
    }
}

/// The overlapping region of two rectangles, or [`Rect::ZERO`] when they do
/// not overlap.
pub fn collision_rect(a: Rect, b: Rect) -> Rect {
    let left = a.x.max(b.x);
    let right = (a.x + a.width).min(b.x + b.width);
    let top = a.y.max(b.y);
    let bottom = (a.y + a.height).min(b.y + b.height);

    if left < right && top < bottom {
        Rect::new(left, top, right - left, bottom - top)
    } else {
        Rect::ZERO
    }
}

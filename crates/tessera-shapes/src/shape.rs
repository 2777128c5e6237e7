//! High-level shape descriptions.
//!
//! A [`Shape`] is plain data: it can be drawn with
//! [`ShapeRenderer::draw_shape`](crate::ShapeRenderer::draw_shape), measured
//! with [`Shape::bounds`] and hit-tested with [`Shape::contains`].

use glam::Vec2;
use tessera_core::Rect;

use crate::collision::{point_in_circle, point_in_polygon, point_in_rect, point_in_triangle};
use crate::tessellator::{ArcSpec, MIN_RADIUS, Segments, arc_point};

/// A 2D shape that can be drawn or hit-tested.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A filled circle.
    Circle {
        /// Center point
        center: Vec2,
        /// Radius
        radius: f32,
    },
    /// A pie slice of a circle.
    Sector(ArcSpec),
    /// An axis-aligned ellipse.
    Ellipse {
        /// Center point
        center: Vec2,
        /// Radii (horizontal, vertical)
        radii: Vec2,
    },
    /// An annulus, optionally limited to an angular range.
    Ring {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        start_angle: f32,
        end_angle: f32,
        segments: Segments,
    },
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// A rectangle with rounded corners.
    RoundedRect {
        rect: Rect,
        /// Corner radius as a fraction of half the shorter side, in `[0, 1]`
        roundness: f32,
        segments: Segments,
    },
    /// A triangle given by its three vertices.
    Triangle([Vec2; 3]),
    /// A convex polygon drawn as a fan around its first point.
    Polygon {
        /// Vertices of the polygon
        points: Vec<Vec2>,
    },
    /// A regular polygon with n sides.
    RegularPolygon {
        center: Vec2,
        sides: u32,
        radius: f32,
        /// Rotation in degrees
        rotation: f32,
    },
    /// A straight line segment with thickness.
    Line {
        start: Vec2,
        end: Vec2,
        thickness: f32,
    },
}

impl Shape {
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Shape::Circle { center, radius }
    }

    pub fn sector(center: Vec2, radius: f32, start_angle: f32, end_angle: f32) -> Self {
        Shape::Sector(ArcSpec::new(center, radius, start_angle, end_angle))
    }

    pub fn ellipse(center: Vec2, radii: Vec2) -> Self {
        Shape::Ellipse { center, radii }
    }

    /// A full 360 degree ring.
    pub fn ring(center: Vec2, inner_radius: f32, outer_radius: f32) -> Self {
        Shape::Ring {
            center,
            inner_radius,
            outer_radius,
            start_angle: 0.0,
            end_angle: 360.0,
            segments: Segments::Auto,
        }
    }

    pub fn rect(position: Vec2, size: Vec2) -> Self {
        Shape::Rect(Rect::from_position_size(position, size))
    }

    pub fn rounded_rect(position: Vec2, size: Vec2, roundness: f32) -> Self {
        Shape::RoundedRect {
            rect: Rect::from_position_size(position, size),
            roundness,
            segments: Segments::Auto,
        }
    }

    pub fn triangle(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Shape::Triangle([a, b, c])
    }

    pub fn polygon(points: Vec<Vec2>) -> Self {
        Shape::Polygon { points }
    }

    pub fn regular_polygon(center: Vec2, sides: u32, radius: f32) -> Self {
        Shape::RegularPolygon {
            center,
            sides,
            radius,
            rotation: 0.0,
        }
    }

    pub fn line(start: Vec2, end: Vec2, thickness: f32) -> Self {
        Shape::Line {
            start,
            end,
            thickness,
        }
    }

    /// Axis-aligned bounding box.
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Circle { center, radius } => square_bounds(*center, radius.abs()),
            Shape::Sector(arc) => square_bounds(arc.center, arc.radius.abs()),
            Shape::Ellipse { center, radii } => {
                let radii = radii.abs();
                Rect::from_position_size(*center - radii, radii * 2.0)
            }
            Shape::Ring {
                center,
                inner_radius,
                outer_radius,
                ..
            } => square_bounds(*center, inner_radius.abs().max(outer_radius.abs())),
            Shape::Rect(rect) | Shape::RoundedRect { rect, .. } => *rect,
            Shape::Triangle(points) => points_bounds(points),
            Shape::Polygon { points } => points_bounds(points),
            Shape::RegularPolygon {
                center,
                sides,
                radius,
                rotation,
            } => points_bounds(&regular_polygon_points(*center, *sides, *radius, *rotation)),
            Shape::Line {
                start,
                end,
                thickness,
            } => {
                let half = thickness.abs() * 0.5;
                points_bounds(&[*start, *end]).expand(half)
            }
        }
    }

    /// Whether `point` is inside the filled shape.
    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            Shape::Circle { center, radius } => point_in_circle(point, *center, *radius),
            Shape::Sector(arc) => {
                let arc = arc.normalized();
                point_in_circle(point, arc.center, arc.radius)
                    && angle_in_range(point - arc.center, arc.start_angle, arc.end_angle)
            }
            Shape::Ellipse { center, radii } => {
                if radii.x == 0.0 || radii.y == 0.0 {
                    return false;
                }
                ((point - *center) / *radii).length_squared() <= 1.0
            }
            Shape::Ring {
                center,
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
                ..
            } => {
                let (inner, outer) = if outer_radius < inner_radius {
                    (*outer_radius, *inner_radius)
                } else {
                    (*inner_radius, *outer_radius)
                };
                let distance = point.distance(*center);
                let (start, end) = if end_angle < start_angle {
                    (*end_angle, *start_angle)
                } else {
                    (*start_angle, *end_angle)
                };
                distance >= inner.max(0.0)
                    && distance <= outer
                    && angle_in_range(point - *center, start, end)
            }
            Shape::Rect(rect) => point_in_rect(point, *rect),
            Shape::RoundedRect {
                rect, roundness, ..
            } => {
                if !point_in_rect(point, *rect) {
                    return false;
                }
                let radius = corner_radius(rect, *roundness);
                if radius <= 0.0 {
                    return true;
                }
                // Distance to the rect shrunk by the corner radius
                let nearest = point.clamp(
                    Vec2::new(rect.x + radius, rect.y + radius),
                    Vec2::new(rect.right() - radius, rect.bottom() - radius),
                );
                point.distance(nearest) <= radius
            }
            Shape::Triangle([a, b, c]) => point_in_triangle(point, *a, *b, *c),
            Shape::Polygon { points } => point_in_polygon(point, points),
            Shape::RegularPolygon {
                center,
                sides,
                radius,
                rotation,
            } => point_in_polygon(
                point,
                &regular_polygon_points(*center, *sides, *radius, *rotation),
            ),
            Shape::Line {
                start,
                end,
                thickness,
            } => distance_to_segment(point, *start, *end) <= thickness.abs() * 0.5,
        }
    }
}

/// Corner radius of a rounded rectangle, or 0 when it draws square.
pub(crate) fn corner_radius(rect: &Rect, roundness: f32) -> f32 {
    if roundness <= 0.0 || rect.width < 1.0 || rect.height < 1.0 {
        return 0.0;
    }
    rect.width.min(rect.height) * roundness.min(1.0) / 2.0
}

/// Vertices of a regular polygon, starting at `rotation` degrees.
/// Fewer than 3 sides are raised to 3.
pub(crate) fn regular_polygon_points(center: Vec2, sides: u32, radius: f32, rotation: f32) -> Vec<Vec2> {
    let sides = sides.max(3);
    let step = 360.0 / sides as f32;
    (0..sides)
        .map(|i| arc_point(center, radius, rotation + step * i as f32))
        .collect()
}

fn square_bounds(center: Vec2, radius: f32) -> Rect {
    let radius = radius.max(MIN_RADIUS);
    Rect::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
}

fn points_bounds(points: &[Vec2]) -> Rect {
    let Some(first) = points.first() else {
        return Rect::ZERO;
    };
    let (min, max) = points
        .iter()
        .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
    Rect::from_position_size(min, max - min)
}

/// Whether the direction `offset` falls within `[start, end]` degrees,
/// with the range walked clockwise in y-down space.
fn angle_in_range(offset: Vec2, start: f32, end: f32) -> bool {
    if end - start >= 360.0 || offset == Vec2::ZERO {
        return true;
    }
    let angle = offset.y.atan2(offset.x).to_degrees();
    let relative = (angle - start).rem_euclid(360.0);
    relative <= end - start
}

fn distance_to_segment(point: Vec2, start: Vec2, end: Vec2) -> f32 {
    let segment = end - start;
    let length_squared = segment.length_squared();
    if length_squared == 0.0 {
        return point.distance(start);
    }
    let t = ((point - start).dot(segment) / length_squared).clamp(0.0, 1.0);
    point.distance(start + segment * t)
}

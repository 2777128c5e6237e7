//! Thick curve flattening.
//!
//! Samples a curve at evenly spaced parameters and offsets every sample by
//! half the thickness along the local perpendicular, producing the two rims
//! of a ribbon interleaved as a triangle strip.

use glam::Vec2;

use crate::curve::CurveSampler;

/// Default number of subdivisions for bezier lines.
pub const BEZIER_LINE_DIVISIONS: u32 = 24;

/// Denominator floor for coincident samples.
const MIN_SEGMENT_LENGTH: f32 = 1e-6;

/// Points of a thick line, alternating left and right rim.
///
/// Always holds `2 * divisions + 2` points: one rim pair for the start
/// point plus one per division.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexStrip {
    points: Vec<Vec2>,
}

impl VertexStrip {
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The `(left, right)` rim pairs in order along the curve.
    pub fn pairs(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn into_points(self) -> Vec<Vec2> {
        self.points
    }
}

/// Flatten `curve` into a strip of constant `thickness`.
///
/// `divisions` of zero is treated as one.
///
/// # Example
///
/// ```
/// use glam::Vec2;
/// use tessera_shapes::{QuadraticBezier, flatten_thick};
///
/// let curve = QuadraticBezier::new(Vec2::ZERO, Vec2::new(5.0, 10.0), Vec2::new(10.0, 0.0));
/// let strip = flatten_thick(&curve, 2.0, 24);
/// assert_eq!(strip.len(), 50);
/// ```
pub fn flatten_thick<C: CurveSampler + ?Sized>(
    curve: &C,
    thickness: f32,
    divisions: u32,
) -> VertexStrip {
    let divisions = divisions.max(1);
    let mut points = Vec::with_capacity(2 * divisions as usize + 2);
    let mut previous = curve.start();

    for i in 1..=divisions {
        let current = if i == divisions {
            curve.end()
        } else {
            curve.eval(i as f32 / divisions as f32)
        };

        let delta = current - previous;
        let size = 0.5 * thickness / delta.length().max(MIN_SEGMENT_LENGTH);
        let offset = Vec2::new(delta.y, -delta.x) * size;

        if i == 1 {
            points.push(previous + offset);
            points.push(previous - offset);
        }
        points.push(current + offset);
        points.push(current - offset);

        previous = current;
    }

    VertexStrip { points }
}

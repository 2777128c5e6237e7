//! Adaptive arc tessellation.
//!
//! Picks how many straight segments approximate a circular arc so that the
//! distance between each chord and the true arc stays below an error rate.
//! The same count drives circles, sectors, rings and rounded-rectangle
//! corners.

use glam::Vec2;
use tessera_core::math::DEG2RAD;

/// Maximum chord-to-arc deviation in pixels.
pub const SMOOTH_CIRCLE_ERROR_RATE: f32 = 0.5;

/// Radii at or below zero are raised to this before any computation.
pub const MIN_RADIUS: f32 = 0.1;

/// Upper bound on segments for a full circle, and on any resolved or
/// requested segment count.
pub const MAX_CIRCLE_SEGMENTS: f32 = 8192.0;

/// Spans beyond one full turn retrace the same circle and are cut to this.
pub const MAX_ARC_SPAN: f32 = 360.0;

/// Segment count request for curved shapes.
///
/// `Fixed(n)` below the minimum the arc needs (one segment per started
/// quarter turn) is treated like `Auto`. `Fixed(0)` draws nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Segments {
    /// Derive the count from the radius and error rate.
    #[default]
    Auto,
    /// Use exactly this many segments when enough for the arc.
    Fixed(u32),
}

impl From<u32> for Segments {
    fn from(count: u32) -> Self {
        Segments::Fixed(count)
    }
}

impl From<Option<u32>> for Segments {
    fn from(count: Option<u32>) -> Self {
        count.map_or(Segments::Auto, Segments::Fixed)
    }
}

/// Which rounded-rectangle primitive a corner count is computed for.
///
/// Outlines get twice the density of fills for the same radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerStyle {
    Fill,
    Outline,
}

/// A circular arc to tessellate. Angles are in degrees, measured clockwise
/// from the positive x axis in y-down screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub center: Vec2,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub segments: Segments,
}

impl ArcSpec {
    pub fn new(center: Vec2, radius: f32, start_angle: f32, end_angle: f32) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
            segments: Segments::Auto,
        }
    }

    /// A full 0..360 circle.
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self::new(center, radius, 0.0, 360.0)
    }

    pub fn with_segments(mut self, segments: impl Into<Segments>) -> Self {
        self.segments = segments.into();
        self
    }

    /// Swap reversed angles and clamp the radius.
    pub fn normalized(self) -> Self {
        let (start_angle, end_angle) = ordered(self.start_angle, self.end_angle);
        Self {
            radius: clamp_radius(self.radius),
            start_angle,
            end_angle,
            ..self
        }
    }

    /// Angular span in degrees, always non-negative.
    pub fn span(&self) -> f32 {
        (self.end_angle - self.start_angle).abs()
    }
}

/// Result of segment resolution: walk `segments` steps of `step` degrees
/// from `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegments {
    pub start: f32,
    pub segments: u32,
    pub step: f32,
}

impl ArcSegments {
    /// Whether the arc has nothing to emit.
    pub fn is_empty(&self) -> bool {
        self.segments == 0
    }

    /// The `segments + 1` boundary angles, low to high.
    pub fn angles(&self) -> impl Iterator<Item = f32> + '_ {
        (0..=self.segments).map(move |i| self.start + self.step * i as f32)
    }

    /// The `segments + 1` boundary points on a circle of `radius`.
    ///
    /// An empty arc yields nothing.
    pub fn points(&self, center: Vec2, radius: f32) -> Vec<Vec2> {
        if self.is_empty() {
            return Vec::new();
        }
        self.angles()
            .map(|angle| arc_point(center, radius, angle))
            .collect()
    }
}

/// Point on the circle at `angle_deg`.
#[inline]
pub fn arc_point(center: Vec2, radius: f32, angle_deg: f32) -> Vec2 {
    let (sin, cos) = (angle_deg * DEG2RAD).sin_cos();
    center + Vec2::new(cos, sin) * radius
}

fn ordered(start: f32, end: f32) -> (f32, f32) {
    if end < start { (end, start) } else { (start, end) }
}

fn clamp_radius(radius: f32) -> f32 {
    if radius.is_finite() {
        radius.max(MIN_RADIUS)
    } else {
        MIN_RADIUS
    }
}

/// Computes segment counts for arcs under a configurable error rate.
///
/// # Example
///
/// ```
/// use tessera_shapes::{Segments, Tessellator};
///
/// let tessellator = Tessellator::new();
/// let arc = tessellator.arc_segments(50.0, 0.0, 360.0, Segments::Auto).unwrap();
/// assert!(arc.segments >= 4);
/// assert_eq!(arc.step * arc.segments as f32, 360.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tessellator {
    /// Maximum chord-to-arc deviation (smaller = more segments)
    pub error_rate: f32,
}

impl Default for Tessellator {
    fn default() -> Self {
        Self::new()
    }
}

impl Tessellator {
    pub fn new() -> Self {
        Self {
            error_rate: SMOOTH_CIRCLE_ERROR_RATE,
        }
    }

    /// Create a tessellator with a custom error rate.
    ///
    /// Non-positive or non-finite rates fall back to the default.
    pub fn with_error_rate(error_rate: f32) -> Self {
        if error_rate.is_finite() && error_rate > 0.0 {
            Self { error_rate }
        } else {
            tracing::debug!("Invalid error rate {error_rate}, using default");
            Self::new()
        }
    }

    /// Largest angle (radians) one chord may cover on a circle of `radius`.
    ///
    /// Radii at or below the error rate allow a half turn per chord.
    pub fn max_chord_angle(&self, radius: f32) -> f32 {
        let ratio = (1.0 - self.error_rate / radius).clamp(0.0, 1.0);
        (2.0 * ratio * ratio - 1.0).clamp(-1.0, 1.0).acos()
    }

    /// Chords needed for a full circle of `radius`, before truncation.
    fn circle_divisions(&self, radius: f32) -> f32 {
        let th = self.max_chord_angle(radius);
        if th > 0.0 {
            (std::f32::consts::TAU / th).ceil().min(MAX_CIRCLE_SEGMENTS)
        } else {
            MAX_CIRCLE_SEGMENTS
        }
    }

    /// Resolve the segment count and angular step for an arc.
    ///
    /// Returns `None` only for `Segments::Fixed(0)`. A zero span resolves to
    /// zero segments. Spans are cut to one full turn and counts never exceed
    /// [`MAX_CIRCLE_SEGMENTS`].
    pub fn arc_segments(
        &self,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        segments: Segments,
    ) -> Option<ArcSegments> {
        let requested = match segments {
            Segments::Fixed(0) => return None,
            Segments::Fixed(count) => count,
            Segments::Auto => 0,
        };

        let (start, end) = ordered(start_angle, end_angle);
        let span = end - start;
        if !span.is_finite() || span <= 0.0 {
            return Some(ArcSegments {
                start,
                segments: 0,
                step: 0.0,
            });
        }
        let span = span.min(MAX_ARC_SPAN);

        let radius = clamp_radius(radius);
        let min_segments = (span / 90.0).ceil() as u32;

        let count = if requested < min_segments {
            let derived = (span * self.circle_divisions(radius) / 360.0) as u32;
            let derived = if derived == 0 { min_segments } else { derived };
            derived.max(min_segments)
        } else {
            requested
        };
        let count = count.min(MAX_CIRCLE_SEGMENTS as u32);

        Some(ArcSegments {
            start,
            segments: count,
            step: span / count as f32,
        })
    }

    /// Resolve the segments of a whole [`ArcSpec`].
    pub fn arc(&self, arc: &ArcSpec) -> Option<ArcSegments> {
        self.arc_segments(arc.radius, arc.start_angle, arc.end_angle, arc.segments)
    }

    /// Segments per rounded-rectangle corner, shared by all four corners.
    ///
    /// Requests below 4 are derived from the radius; `Fixed(0)` returns
    /// `None`.
    pub fn corner_segments(
        &self,
        radius: f32,
        segments: Segments,
        style: CornerStyle,
    ) -> Option<u32> {
        let requested = match segments {
            Segments::Fixed(0) => return None,
            Segments::Fixed(count) => count,
            Segments::Auto => 0,
        };
        if requested >= 4 {
            return Some(requested.min(MAX_CIRCLE_SEGMENTS as u32));
        }

        let divisor = match style {
            CornerStyle::Fill => 4.0,
            CornerStyle::Outline => 2.0,
        };
        let derived = (self.circle_divisions(clamp_radius(radius)) / divisor) as u32;
        Some(if derived == 0 { 4 } else { derived })
    }
}

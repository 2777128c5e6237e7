//! Shape renderer: turns shape calls into immediate-mode vertex batches.

use glam::Vec2;
use tessera_core::Rect;
use tessera_core::math::DEG2RAD;
use tessera_core::profiling::profile_function;
use tessera_render::{BackendFeatures, Color, DrawMode, ImmediateBackend, resolve_draw_mode};

use crate::curve::{CubicBezier, CurveSampler, EasedLine, QuadraticBezier};
use crate::emit::{FillEmitter, LineEmitter, UvLayout};
use crate::flatten::{BEZIER_LINE_DIVISIONS, flatten_thick};
use crate::shape::{Shape, corner_radius, regular_polygon_points};
use crate::tessellator::{
    ArcSegments, ArcSpec, CornerStyle, MIN_RADIUS, SMOOTH_CIRCLE_ERROR_RATE, Segments,
    Tessellator,
};
use crate::texture::ShapeTexture;

/// Angular step of the fixed-resolution ellipse, gradient circle and
/// circle outline.
const FIXED_STEP_DEGREES: f32 = 10.0;
const FIXED_STEPS: u32 = 36;

/// Corner start angles of a rounded rectangle: top-left, top-right,
/// bottom-right, bottom-left.
const CORNER_ANGLES: [f32; 4] = [180.0, 270.0, 0.0, 90.0];

/// Configuration for creating a [`ShapeRenderer`].
///
/// # Example
///
/// ```
/// use tessera_render::DrawMode;
/// use tessera_shapes::ShapeRendererDescriptor;
///
/// let desc = ShapeRendererDescriptor::default()
///     .with_name("HUD")
///     .with_error_rate(0.25)
///     .with_draw_mode(DrawMode::Triangles);
/// assert_eq!(desc.bezier_divisions, 24);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeRendererDescriptor {
    /// Name for the renderer (used in log messages).
    pub name: String,
    /// Maximum chord-to-arc deviation in pixels.
    pub error_rate: f32,
    /// Subdivisions used when flattening bezier lines.
    pub bezier_divisions: u32,
    /// Force a draw mode. `None` picks the best one the backend supports.
    pub draw_mode: Option<DrawMode>,
}

impl Default for ShapeRendererDescriptor {
    fn default() -> Self {
        Self {
            name: "Shapes".to_string(),
            error_rate: SMOOTH_CIRCLE_ERROR_RATE,
            bezier_divisions: BEZIER_LINE_DIVISIONS,
            draw_mode: None,
        }
    }
}

impl ShapeRendererDescriptor {
    /// Set the renderer name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the tessellation error rate.
    pub fn with_error_rate(mut self, error_rate: f32) -> Self {
        self.error_rate = error_rate;
        self
    }

    /// Set the number of bezier subdivisions.
    pub fn with_bezier_divisions(mut self, divisions: u32) -> Self {
        self.bezier_divisions = divisions;
        self
    }

    /// Force a draw mode instead of detecting one.
    pub fn with_draw_mode(mut self, mode: DrawMode) -> Self {
        self.draw_mode = Some(mode);
        self
    }
}

/// Immediate-mode 2D shape renderer.
///
/// Owns its backend and the texture binding used by textured fills. Every
/// draw call emits complete batches: the backend never sees a `begin`
/// without its `end`.
///
/// # Example
///
/// ```
/// use glam::Vec2;
/// use tessera_render::{Color, VertexBatcher};
/// use tessera_shapes::{Segments, ShapeRenderer};
///
/// let mut shapes = ShapeRenderer::new(VertexBatcher::new());
/// shapes.draw_circle(Vec2::new(100.0, 100.0), 25.0, Color::RED);
/// shapes.draw_ring(Vec2::new(200.0, 100.0), 10.0, 20.0, 0.0, 270.0, Segments::Auto, Color::BLUE);
///
/// let calls = shapes.into_backend().finish().unwrap();
/// // Both fills share kind and texture, so they land in one draw call
/// assert_eq!(calls.len(), 1);
/// ```
pub struct ShapeRenderer<B: ImmediateBackend> {
    backend: B,
    descriptor: ShapeRendererDescriptor,
    draw_mode: DrawMode,
    texture: ShapeTexture,
    tessellator: Tessellator,
}

impl<B: ImmediateBackend> ShapeRenderer<B> {
    /// Create a renderer with default configuration.
    pub fn new(backend: B) -> Self {
        Self::with_descriptor(backend, ShapeRendererDescriptor::default())
    }

    /// Create a renderer with explicit configuration.
    pub fn with_descriptor(backend: B, descriptor: ShapeRendererDescriptor) -> Self {
        let mut features = backend.features();
        features.set(BackendFeatures::QUADS, backend.supports_quads());
        let draw_mode = resolve_draw_mode(features, descriptor.draw_mode);

        tracing::info!("{} renderer using draw mode: {}", descriptor.name, draw_mode);

        Self {
            backend,
            draw_mode,
            texture: ShapeTexture::WHITE_PIXEL,
            tessellator: Tessellator::with_error_rate(descriptor.error_rate),
            descriptor,
        }
    }

    /// The draw mode selected at construction.
    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub fn descriptor(&self) -> &ShapeRendererDescriptor {
        &self.descriptor
    }

    pub fn tessellator(&self) -> &Tessellator {
        &self.tessellator
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consume the renderer and return its backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Set the texture sampled by textured fills. Invalid bindings reset to
    /// the white pixel.
    pub fn set_shapes_texture(&mut self, texture: ShapeTexture) {
        self.texture = if texture.is_valid() {
            texture
        } else {
            tracing::debug!("Invalid shapes texture {:?}, using white pixel", texture.texture);
            ShapeTexture::WHITE_PIXEL
        };
    }

    /// The current shapes texture binding.
    pub fn shapes_texture(&self) -> ShapeTexture {
        self.texture
    }

    /// Restore the default white pixel binding.
    pub fn reset_shapes_texture(&mut self) {
        self.texture = ShapeTexture::WHITE_PIXEL;
    }

    fn fill(&mut self) -> FillEmitter<'_, B> {
        FillEmitter::begin(&mut self.backend, self.draw_mode, &self.texture)
    }

    fn lines(&mut self) -> LineEmitter<'_, B> {
        LineEmitter::begin(&mut self.backend)
    }

    // ====================
    // Pixels and lines
    // ====================

    /// Draw a 1x1 pixel at the rounded position.
    pub fn draw_pixel(&mut self, position: Vec2, color: Color) {
        let p = position.round();
        let mut fill = self.fill();
        fill.color(color);
        fill.quad([p, p + Vec2::Y, p + Vec2::ONE, p + Vec2::X]);
    }

    /// Draw a one pixel wide line.
    pub fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color) {
        let mut lines = self.lines();
        lines.color(color);
        lines.line(start, end);
    }

    /// Draw a line with thickness. Zero length or thickness draws nothing.
    pub fn draw_line_ex(&mut self, start: Vec2, end: Vec2, thickness: f32, color: Color) {
        let delta = end - start;
        let length = delta.length();
        if length <= 0.0 || thickness <= 0.0 {
            return;
        }

        let scale = thickness / (2.0 * length);
        let radius = Vec2::new(-scale * delta.y, scale * delta.x);
        let strip = [start - radius, start + radius, end - radius, end + radius];
        self.draw_triangle_strip(&strip, color);
    }

    /// Draw connected line segments through `points`.
    pub fn draw_line_strip(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 2 {
            return;
        }
        let mut lines = self.lines();
        lines.color(color);
        lines.polyline(points);
    }

    /// Draw a thick S-shaped line, eased in and out on the y axis.
    pub fn draw_line_bezier(&mut self, start: Vec2, end: Vec2, thickness: f32, color: Color) {
        self.draw_thick_curve(&EasedLine::new(start, end), thickness, color);
    }

    /// Draw a thick quadratic bezier line.
    pub fn draw_line_bezier_quad(
        &mut self,
        start: Vec2,
        end: Vec2,
        control: Vec2,
        thickness: f32,
        color: Color,
    ) {
        self.draw_thick_curve(&QuadraticBezier::new(start, control, end), thickness, color);
    }

    /// Draw a thick cubic bezier line.
    pub fn draw_line_bezier_cubic(
        &mut self,
        start: Vec2,
        end: Vec2,
        start_control: Vec2,
        end_control: Vec2,
        thickness: f32,
        color: Color,
    ) {
        self.draw_thick_curve(
            &CubicBezier::new(start, start_control, end_control, end),
            thickness,
            color,
        );
    }

    fn draw_thick_curve(&mut self, curve: &dyn CurveSampler, thickness: f32, color: Color) {
        profile_function!();
        let strip = flatten_thick(curve, thickness, self.descriptor.bezier_divisions);
        self.draw_triangle_strip(strip.points(), color);
    }

    // ====================
    // Circles and ellipses
    // ====================

    /// Draw a filled circle.
    pub fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.draw_circle_sector(center, radius, 0.0, 360.0, Segments::Fixed(FIXED_STEPS), color);
    }

    /// Draw a filled pie slice. Angles are in degrees.
    pub fn draw_circle_sector(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        segments: impl Into<Segments>,
        color: Color,
    ) {
        profile_function!();
        let arc = ArcSpec::new(center, radius, start_angle, end_angle)
            .with_segments(segments)
            .normalized();
        let Some(resolved) = self.tessellator.arc(&arc) else {
            return;
        };
        if resolved.is_empty() {
            return;
        }
        tracing::trace!("Sector: {} segments of {} degrees", resolved.segments, resolved.step);

        let rim = resolved.points(arc.center, arc.radius);
        let mut fill = self.fill();
        fill.color(color);
        fill.fan(arc.center, &rim);
    }

    /// Draw the outline of a pie slice, including the two radial caps.
    pub fn draw_circle_sector_lines(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        segments: impl Into<Segments>,
        color: Color,
    ) {
        let arc = ArcSpec::new(center, radius, start_angle, end_angle)
            .with_segments(segments)
            .normalized();
        let Some(resolved) = self.tessellator.arc(&arc) else {
            return;
        };
        let rim = resolved.points(arc.center, arc.radius);
        let (Some(&first), Some(&last)) = (rim.first(), rim.last()) else {
            return;
        };

        let mut lines = self.lines();
        lines.color(color);
        lines.line(arc.center, first);
        lines.polyline(&rim);
        lines.line(arc.center, last);
    }

    /// Draw a circle shaded from `inner` at the center to `outer` at the rim.
    pub fn draw_circle_gradient(&mut self, center: Vec2, radius: f32, inner: Color, outer: Color) {
        let rim = fixed_ellipse_points(center, Vec2::splat(radius));
        let mut fill = self.fill();
        for pair in rim.windows(2) {
            fill.triangle_colored([center, pair[1], pair[0]], [inner, outer, outer]);
        }
    }

    /// Draw a circle outline.
    pub fn draw_circle_lines(&mut self, center: Vec2, radius: f32, color: Color) {
        let rim = fixed_ellipse_points(center, Vec2::splat(radius));
        let mut lines = self.lines();
        lines.color(color);
        lines.polyline(&rim);
    }

    /// Draw a filled axis-aligned ellipse.
    pub fn draw_ellipse(&mut self, center: Vec2, radius_h: f32, radius_v: f32, color: Color) {
        let rim = fixed_ellipse_points(center, Vec2::new(radius_h, radius_v));
        let mut fill = self.fill();
        fill.color(color);
        for pair in rim.windows(2) {
            fill.triangle(center, pair[1], pair[0]);
        }
    }

    /// Draw an ellipse outline.
    pub fn draw_ellipse_lines(&mut self, center: Vec2, radius_h: f32, radius_v: f32, color: Color) {
        let rim = fixed_ellipse_points(center, Vec2::new(radius_h, radius_v));
        let mut lines = self.lines();
        lines.color(color);
        for pair in rim.windows(2) {
            lines.line(pair[1], pair[0]);
        }
    }

    // ====================
    // Rings
    // ====================

    /// Draw a filled ring between two radii.
    ///
    /// Equal angles draw nothing. A non-positive inner radius draws a
    /// sector instead, with the segment count derived from the outer
    /// radius.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_ring(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        start_angle: f32,
        end_angle: f32,
        segments: impl Into<Segments>,
        color: Color,
    ) {
        profile_function!();
        let Some((inner, outer, resolved)) =
            self.resolve_ring(inner_radius, outer_radius, start_angle, end_angle, segments.into())
        else {
            return;
        };

        if inner <= 0.0 {
            self.draw_circle_sector(
                center,
                outer,
                start_angle,
                end_angle,
                Segments::Fixed(resolved.segments),
                color,
            );
            return;
        }

        let outer_rim = resolved.points(center, outer);
        let inner_rim = resolved.points(center, inner);
        let mut fill = self.fill();
        fill.color(color);
        fill.set_uv_layout(UvLayout::Ring);
        for i in 0..resolved.segments as usize {
            fill.quad([outer_rim[i], inner_rim[i], inner_rim[i + 1], outer_rim[i + 1]]);
        }
    }

    /// Draw a ring outline: both arcs plus the two radial caps.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_ring_lines(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        start_angle: f32,
        end_angle: f32,
        segments: impl Into<Segments>,
        color: Color,
    ) {
        let Some((inner, outer, resolved)) =
            self.resolve_ring(inner_radius, outer_radius, start_angle, end_angle, segments.into())
        else {
            return;
        };

        if inner <= 0.0 {
            self.draw_circle_sector_lines(
                center,
                outer,
                start_angle,
                end_angle,
                Segments::Fixed(resolved.segments),
                color,
            );
            return;
        }

        let outer_rim = resolved.points(center, outer);
        let inner_rim = resolved.points(center, inner);
        let last = outer_rim.len() - 1;

        let mut lines = self.lines();
        lines.color(color);
        lines.line(outer_rim[0], inner_rim[0]);
        for i in 0..last {
            lines.line(outer_rim[i], outer_rim[i + 1]);
            lines.line(inner_rim[i], inner_rim[i + 1]);
        }
        lines.line(outer_rim[last], inner_rim[last]);
    }

    /// Normalize ring radii and resolve its segments from the outer radius.
    fn resolve_ring(
        &self,
        inner_radius: f32,
        outer_radius: f32,
        start_angle: f32,
        end_angle: f32,
        segments: Segments,
    ) -> Option<(f32, f32, ArcSegments)> {
        if start_angle == end_angle {
            return None;
        }

        let (mut inner, mut outer) = (inner_radius, outer_radius);
        if outer < inner {
            std::mem::swap(&mut inner, &mut outer);
            if outer <= 0.0 {
                outer = MIN_RADIUS;
            }
        }

        let resolved = self
            .tessellator
            .arc_segments(outer, start_angle, end_angle, segments)?;
        if resolved.is_empty() {
            return None;
        }
        Some((inner, outer, resolved))
    }

    // ====================
    // Rectangles
    // ====================

    /// Draw a filled rectangle.
    pub fn draw_rectangle(&mut self, rec: Rect, color: Color) {
        self.draw_rectangle_pro(rec, Vec2::ZERO, 0.0, color);
    }

    /// Draw a filled rectangle from position and size.
    pub fn draw_rectangle_v(&mut self, position: Vec2, size: Vec2, color: Color) {
        self.draw_rectangle_pro(Rect::from_position_size(position, size), Vec2::ZERO, 0.0, color);
    }

    /// Draw a filled rectangle rotated by `rotation` degrees around
    /// `origin`, which is relative to the rectangle's position.
    pub fn draw_rectangle_pro(&mut self, rec: Rect, origin: Vec2, rotation: f32, color: Color) {
        let corners = rectangle_corners(rec, origin, rotation);
        let mut fill = self.fill();
        fill.color(color);
        fill.quad(corners);
    }

    /// Draw a rectangle shaded from `top` to `bottom`.
    pub fn draw_rectangle_gradient_v(&mut self, rec: Rect, top: Color, bottom: Color) {
        self.draw_rectangle_gradient_ex(rec, top, bottom, bottom, top);
    }

    /// Draw a rectangle shaded from `left` to `right`.
    pub fn draw_rectangle_gradient_h(&mut self, rec: Rect, left: Color, right: Color) {
        self.draw_rectangle_gradient_ex(rec, left, left, right, right);
    }

    /// Draw a rectangle with one color per corner, counter-clockwise from
    /// the top-left.
    pub fn draw_rectangle_gradient_ex(
        &mut self,
        rec: Rect,
        top_left: Color,
        bottom_left: Color,
        bottom_right: Color,
        top_right: Color,
    ) {
        let corners = rectangle_corners(rec, Vec2::ZERO, 0.0);
        let mut fill = self.fill();
        fill.quad_colored(corners, [top_left, bottom_left, bottom_right, top_right]);
    }

    /// Draw a one pixel rectangle outline.
    pub fn draw_rectangle_lines(&mut self, rec: Rect, color: Color) {
        let Rect {
            x,
            y,
            width,
            height,
        } = rec;
        match self.draw_mode {
            DrawMode::Quads => {
                self.draw_rectangle(Rect::new(x, y, width, 1.0), color);
                self.draw_rectangle(Rect::new(x + width - 1.0, y + 1.0, 1.0, height - 2.0), color);
                self.draw_rectangle(Rect::new(x, y + height - 1.0, width, 1.0), color);
                self.draw_rectangle(Rect::new(x, y + 1.0, 1.0, height - 2.0), color);
            }
            DrawMode::Triangles => {
                let corners = [
                    Vec2::new(x + 1.0, y + 1.0),
                    Vec2::new(x + width, y + 1.0),
                    Vec2::new(x + width, y + height),
                    Vec2::new(x + 1.0, y + height),
                    Vec2::new(x + 1.0, y + 1.0),
                ];
                let mut lines = self.lines();
                lines.color(color);
                lines.polyline(&corners);
            }
        }
    }

    /// Draw a rectangle outline of the given thickness, inside `rec`.
    ///
    /// A thickness larger than a side is reduced to half the shorter side.
    pub fn draw_rectangle_lines_ex(&mut self, rec: Rect, thickness: f32, color: Color) {
        let mut thickness = thickness;
        if thickness > rec.width || thickness > rec.height {
            thickness = rec.width.min(rec.height) / 2.0;
            tracing::debug!("Outline thickness clamped to {thickness}");
        }

        let Rect {
            x,
            y,
            width,
            height,
        } = rec;
        let top = Rect::new(x, y, width, thickness);
        let bottom = Rect::new(x, y - thickness + height, width, thickness);
        let left = Rect::new(x, y + thickness, thickness, height - thickness * 2.0);
        let right = Rect::new(x - thickness + width, y + thickness, thickness, height - thickness * 2.0);

        self.draw_rectangle(top, color);
        self.draw_rectangle(bottom, color);
        self.draw_rectangle(left, color);
        self.draw_rectangle(right, color);
    }

    /// Draw a filled rectangle with rounded corners.
    ///
    /// `roundness` in `[0, 1]` scales the corner radius up to half the
    /// shorter side. Zero roundness, or a side under one pixel, draws a
    /// plain rectangle.
    pub fn draw_rectangle_rounded(
        &mut self,
        rec: Rect,
        roundness: f32,
        segments: impl Into<Segments>,
        color: Color,
    ) {
        profile_function!();
        if roundness <= 0.0 || rec.width < 1.0 || rec.height < 1.0 {
            self.draw_rectangle(rec, color);
            return;
        }

        let radius = corner_radius(&rec, roundness);
        if radius <= 0.0 {
            return;
        }
        let Some(corner_segments) =
            self.tessellator
                .corner_segments(radius, segments.into(), CornerStyle::Fill)
        else {
            return;
        };

        //   P0 ____________ P1
        //    / |          | \
        // P7 /_|__________|_\ P2
        //   |  |P8      P9|  |
        //   |__|__________|__|
        // P6 \ |P11    P10| / P3
        //     \|__________|/
        //   P5              P4
        let (l, t, r, b) = (rec.x, rec.y, rec.right(), rec.bottom());
        let p = [
            Vec2::new(l + radius, t),
            Vec2::new(r - radius, t),
            Vec2::new(r, t + radius),
            Vec2::new(r, b - radius),
            Vec2::new(r - radius, b),
            Vec2::new(l + radius, b),
            Vec2::new(l, b - radius),
            Vec2::new(l, t + radius),
            Vec2::new(l + radius, t + radius),
            Vec2::new(r - radius, t + radius),
            Vec2::new(r - radius, b - radius),
            Vec2::new(l + radius, b - radius),
        ];
        let centers = [p[8], p[9], p[10], p[11]];
        let corners = corner_arcs(corner_segments);
        tracing::trace!("Rounded rect: radius {radius}, {corner_segments} segments per corner");

        let mut fill = self.fill();
        fill.color(color);
        for (arc, center) in corners.iter().zip(centers) {
            fill.fan(center, &arc.points(center, radius));
        }
        // Top, right, bottom, left and middle bodies
        fill.quad([p[0], p[8], p[9], p[1]]);
        fill.quad([p[2], p[9], p[10], p[3]]);
        fill.quad([p[11], p[5], p[4], p[10]]);
        fill.quad([p[7], p[6], p[11], p[8]]);
        fill.quad([p[8], p[11], p[10], p[9]]);
    }

    /// Draw a rounded rectangle outline of the given thickness, outside
    /// `rec`.
    pub fn draw_rectangle_rounded_lines(
        &mut self,
        rec: Rect,
        roundness: f32,
        segments: impl Into<Segments>,
        thickness: f32,
        color: Color,
    ) {
        profile_function!();
        let thickness = thickness.max(0.0);
        if roundness <= 0.0 {
            self.draw_rectangle_lines_ex(rec.expand(thickness), thickness, color);
            return;
        }

        let radius = rec.width.min(rec.height) * roundness.min(1.0) / 2.0;
        if radius <= 0.0 {
            return;
        }
        let Some(corner_segments) =
            self.tessellator
                .corner_segments(radius, segments.into(), CornerStyle::Outline)
        else {
            return;
        };

        let inner = radius;
        let outer = radius + thickness;
        let (l, t, r, b) = (rec.x, rec.y, rec.right(), rec.bottom());

        // P0..P7 lie on the outer edge, P8..P15 on the inner edge
        let p = [
            Vec2::new(l + inner, t - thickness),
            Vec2::new(r - inner, t - thickness),
            Vec2::new(r + thickness, t + inner),
            Vec2::new(r + thickness, b - inner),
            Vec2::new(r - inner, b + thickness),
            Vec2::new(l + inner, b + thickness),
            Vec2::new(l - thickness, b - inner),
            Vec2::new(l - thickness, t + inner),
            Vec2::new(l + inner, t),
            Vec2::new(r - inner, t),
            Vec2::new(r, t + inner),
            Vec2::new(r, b - inner),
            Vec2::new(r - inner, b),
            Vec2::new(l + inner, b),
            Vec2::new(l, b - inner),
            Vec2::new(l, t + inner),
        ];
        let centers = [
            Vec2::new(l + inner, t + inner),
            Vec2::new(r - inner, t + inner),
            Vec2::new(r - inner, b - inner),
            Vec2::new(l + inner, b - inner),
        ];
        let corners = corner_arcs(corner_segments);

        if thickness > 1.0 {
            let mut fill = self.fill();
            fill.color(color);
            fill.set_uv_layout(UvLayout::Band);
            for (arc, center) in corners.iter().zip(centers) {
                let inner_rim = arc.points(center, inner);
                let outer_rim = arc.points(center, outer);
                for i in 0..corner_segments as usize {
                    fill.quad([inner_rim[i], inner_rim[i + 1], outer_rim[i + 1], outer_rim[i]]);
                }
            }
            fill.set_uv_layout(UvLayout::Rect);
            fill.quad([p[0], p[8], p[9], p[1]]);
            fill.quad([p[2], p[10], p[11], p[3]]);
            fill.quad([p[13], p[5], p[4], p[12]]);
            fill.quad([p[15], p[7], p[6], p[14]]);
        } else {
            let mut lines = self.lines();
            lines.color(color);
            for (arc, center) in corners.iter().zip(centers) {
                lines.polyline(&arc.points(center, outer));
            }
            for i in (0..8).step_by(2) {
                lines.line(p[i], p[i + 1]);
            }
        }
    }

    // ====================
    // Triangles and polygons
    // ====================

    /// Draw a filled triangle. Vertices should be counter-clockwise.
    pub fn draw_triangle(&mut self, v1: Vec2, v2: Vec2, v3: Vec2, color: Color) {
        let mut fill = self.fill();
        fill.color(color);
        fill.triangle(v1, v2, v3);
    }

    /// Draw a triangle outline.
    pub fn draw_triangle_lines(&mut self, v1: Vec2, v2: Vec2, v3: Vec2, color: Color) {
        let mut lines = self.lines();
        lines.color(color);
        lines.polyline(&[v1, v2, v3, v1]);
    }

    /// Draw a triangle fan around `points[0]`. Needs at least 3 points.
    pub fn draw_triangle_fan(&mut self, points: &[Vec2], color: Color) {
        let [center, rest @ ..] = points else {
            return;
        };
        if rest.len() < 2 {
            return;
        }
        let mut fill = self.fill();
        fill.color(color);
        for pair in rest.windows(2) {
            fill.triangle(*center, pair[0], pair[1]);
        }
    }

    /// Draw a triangle strip: every point forms a triangle with the two
    /// before it. Needs at least 3 points.
    pub fn draw_triangle_strip(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let mut fill = self.fill();
        fill.color(color);
        for i in 2..points.len() {
            if i % 2 == 0 {
                fill.triangle(points[i], points[i - 2], points[i - 1]);
            } else {
                fill.triangle(points[i], points[i - 1], points[i - 2]);
            }
        }
    }

    /// Draw a filled regular polygon. Fewer than 3 sides draw a triangle.
    pub fn draw_poly(&mut self, center: Vec2, sides: u32, radius: f32, rotation: f32, color: Color) {
        let rim = closed(regular_polygon_points(center, sides, radius, rotation));
        let mut fill = self.fill();
        fill.color(color);
        for pair in rim.windows(2) {
            fill.triangle(center, pair[1], pair[0]);
        }
    }

    /// Draw a regular polygon outline.
    pub fn draw_poly_lines(&mut self, center: Vec2, sides: u32, radius: f32, rotation: f32, color: Color) {
        let rim = closed(regular_polygon_points(center, sides, radius, rotation));
        let mut lines = self.lines();
        lines.color(color);
        lines.polyline(&rim);
    }

    /// Draw a regular polygon outline of the given thickness, inside the
    /// polygon.
    pub fn draw_poly_lines_ex(
        &mut self,
        center: Vec2,
        sides: u32,
        radius: f32,
        rotation: f32,
        thickness: f32,
        color: Color,
    ) {
        let sides = sides.max(3);
        let exterior = 360.0 / sides as f32 * DEG2RAD;
        let inner_radius = radius - thickness * (exterior / 2.0).cos();

        let outer_rim = closed(regular_polygon_points(center, sides, radius, rotation));
        let inner_rim = closed(regular_polygon_points(center, sides, inner_radius, rotation));

        let mut fill = self.fill();
        fill.color(color);
        fill.set_uv_layout(UvLayout::PolyOutline);
        for i in 0..sides as usize {
            fill.quad([outer_rim[i], inner_rim[i], inner_rim[i + 1], outer_rim[i + 1]]);
        }
    }

    // ====================
    // Shape descriptions
    // ====================

    /// Draw a [`Shape`] filled with `color`.
    pub fn draw_shape(&mut self, shape: &Shape, color: Color) {
        match shape {
            Shape::Circle { center, radius } => self.draw_circle(*center, *radius, color),
            Shape::Sector(arc) => self.draw_circle_sector(
                arc.center,
                arc.radius,
                arc.start_angle,
                arc.end_angle,
                arc.segments,
                color,
            ),
            Shape::Ellipse { center, radii } => self.draw_ellipse(*center, radii.x, radii.y, color),
            Shape::Ring {
                center,
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
                segments,
            } => self.draw_ring(
                *center,
                *inner_radius,
                *outer_radius,
                *start_angle,
                *end_angle,
                *segments,
                color,
            ),
            Shape::Rect(rect) => self.draw_rectangle(*rect, color),
            Shape::RoundedRect {
                rect,
                roundness,
                segments,
            } => self.draw_rectangle_rounded(*rect, *roundness, *segments, color),
            Shape::Triangle([a, b, c]) => self.draw_triangle(*a, *b, *c, color),
            Shape::Polygon { points } => self.draw_triangle_fan(points, color),
            Shape::RegularPolygon {
                center,
                sides,
                radius,
                rotation,
            } => self.draw_poly(*center, *sides, *radius, *rotation, color),
            Shape::Line {
                start,
                end,
                thickness,
            } => self.draw_line_ex(*start, *end, *thickness, color),
        }
    }
}

/// The four corners of `rec` rotated by `rotation` degrees around
/// `position + origin`, in the order top-left, bottom-left, bottom-right,
/// top-right.
fn rectangle_corners(rec: Rect, origin: Vec2, rotation: f32) -> [Vec2; 4] {
    let offsets = [
        Vec2::ZERO,
        Vec2::new(0.0, rec.height),
        Vec2::new(rec.width, rec.height),
        Vec2::new(rec.width, 0.0),
    ];
    let position = rec.position();

    if rotation == 0.0 {
        offsets.map(|offset| position - origin + offset)
    } else {
        let rotation = Vec2::from_angle(rotation * DEG2RAD);
        offsets.map(|offset| position + rotation.rotate(offset - origin))
    }
}

/// 37 points at 10 degree steps around an ellipse, first and last equal.
fn fixed_ellipse_points(center: Vec2, radii: Vec2) -> Vec<Vec2> {
    (0..=FIXED_STEPS)
        .map(|i| {
            let (sin, cos) = ((i as f32 * FIXED_STEP_DEGREES) * DEG2RAD).sin_cos();
            center + Vec2::new(cos, sin) * radii
        })
        .collect()
}

fn corner_arcs(segments: u32) -> [ArcSegments; 4] {
    let step = 90.0 / segments as f32;
    CORNER_ANGLES.map(|start| ArcSegments {
        start,
        segments,
        step,
    })
}

fn closed(mut points: Vec<Vec2>) -> Vec<Vec2> {
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_render::{PrimitiveKind, TextureId};
    use tessera_test_utils::{MockBackend, assert_vec2_eq};

    fn quads() -> (MockBackend, ShapeRenderer<MockBackend>) {
        let mock = MockBackend::new();
        (mock.clone(), ShapeRenderer::new(mock))
    }

    fn triangles() -> (MockBackend, ShapeRenderer<MockBackend>) {
        let mock = MockBackend::new();
        let desc = ShapeRendererDescriptor::default().with_draw_mode(DrawMode::Triangles);
        (mock.clone(), ShapeRenderer::with_descriptor(mock, desc))
    }

    #[test]
    fn test_descriptor_defaults() {
        let desc = ShapeRendererDescriptor::default();
        assert_eq!(desc.name, "Shapes");
        assert_eq!(desc.error_rate, SMOOTH_CIRCLE_ERROR_RATE);
        assert_eq!(desc.bezier_divisions, BEZIER_LINE_DIVISIONS);
        assert!(desc.draw_mode.is_none());
    }

    #[test]
    fn test_draw_mode_detection() {
        let (_, shapes) = quads();
        assert_eq!(shapes.draw_mode(), DrawMode::Quads);

        let shapes = ShapeRenderer::new(MockBackend::with_features(BackendFeatures::TEXTURES));
        assert_eq!(shapes.draw_mode(), DrawMode::Triangles);

        let (_, shapes) = triangles();
        assert_eq!(shapes.draw_mode(), DrawMode::Triangles);
    }

    #[test]
    fn test_invalid_error_rate_uses_default() {
        let desc = ShapeRendererDescriptor::default().with_error_rate(-1.0);
        let shapes = ShapeRenderer::with_descriptor(MockBackend::new(), desc);
        assert_eq!(shapes.tessellator().error_rate, SMOOTH_CIRCLE_ERROR_RATE);
    }

    #[test]
    fn test_pixel_rounds_position() {
        let (mock, mut shapes) = quads();
        shapes.draw_pixel(Vec2::new(9.6, 3.2), Color::RED);

        let positions = mock.positions();
        assert_eq!(
            positions,
            vec![
                Vec2::new(10.0, 3.0),
                Vec2::new(10.0, 4.0),
                Vec2::new(11.0, 4.0),
                Vec2::new(11.0, 3.0),
            ]
        );
    }

    #[test]
    fn test_line_is_one_segment() {
        let (mock, mut shapes) = quads();
        shapes.draw_line(Vec2::ZERO, Vec2::new(5.0, 5.0), Color::WHITE);

        assert_eq!(mock.count_begins(PrimitiveKind::Lines), 1);
        assert_eq!(mock.positions(), vec![Vec2::ZERO, Vec2::new(5.0, 5.0)]);
        // Lines never touch the texture binding
        assert_eq!(mock.count_texture_binds(), 0);
    }

    #[test]
    fn test_line_ex_strip() {
        let (mock, mut shapes) = triangles();
        shapes.draw_line_ex(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, Color::WHITE);

        let positions = mock.positions();
        assert_eq!(positions.len(), 6);
        assert_vec2_eq!(positions[0], Vec2::new(10.0, -1.0));
        assert_vec2_eq!(positions[1], Vec2::new(0.0, -1.0));
        assert_vec2_eq!(positions[2], Vec2::new(0.0, 1.0));
        assert_vec2_eq!(positions[3], Vec2::new(10.0, 1.0));
        assert_vec2_eq!(positions[4], Vec2::new(10.0, -1.0));
        assert_vec2_eq!(positions[5], Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_degenerate_lines_draw_nothing() {
        let (mock, mut shapes) = quads();
        shapes.draw_line_ex(Vec2::ONE, Vec2::ONE, 4.0, Color::WHITE);
        shapes.draw_line_ex(Vec2::ZERO, Vec2::ONE, 0.0, Color::WHITE);
        shapes.draw_line_strip(&[Vec2::ONE], Color::WHITE);
        assert!(mock.is_empty());
    }

    #[test]
    fn test_line_strip_segments() {
        let (mock, mut shapes) = quads();
        let points = [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y];
        shapes.draw_line_strip(&points, Color::WHITE);
        assert_eq!(mock.count_vertices(), 6);
    }

    #[test]
    fn test_bezier_vertex_counts() {
        let (mock, mut shapes) = triangles();
        shapes.draw_line_bezier_quad(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            Vec2::new(50.0, 80.0),
            3.0,
            Color::WHITE,
        );
        // 50 strip points make 48 triangles
        assert_eq!(mock.count_vertices(), 48 * 3);

        let (mock, mut shapes) = quads();
        let desc = ShapeRendererDescriptor::default().with_bezier_divisions(4);
        let mut custom = ShapeRenderer::with_descriptor(mock.clone(), desc);
        custom.draw_line_bezier(Vec2::ZERO, Vec2::new(40.0, 40.0), 2.0, Color::WHITE);
        // 10 strip points make 8 triangles, each sent as a quad
        assert_eq!(mock.count_vertices(), 8 * 4);

        shapes.draw_line_bezier_cubic(
            Vec2::ZERO,
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 10.0),
            1.0,
            Color::WHITE,
        );
        assert!(mock.is_balanced());
    }

    #[test]
    fn test_circle_vertex_counts() {
        let (mock, mut shapes) = quads();
        shapes.draw_circle(Vec2::ZERO, 10.0, Color::RED);
        // 36 triangles merged pairwise
        assert_eq!(mock.count_vertices(), 18 * 4);

        let (mock, mut shapes) = triangles();
        shapes.draw_circle(Vec2::ZERO, 10.0, Color::RED);
        assert_eq!(mock.count_vertices(), 36 * 3);
    }

    #[test]
    fn test_sector_quads_with_odd_tail() {
        let (mock, mut shapes) = quads();
        shapes.draw_circle_sector(Vec2::ZERO, 10.0, 0.0, 90.0, Segments::Fixed(3), Color::RED);

        let batches = mock.batches();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].kind, PrimitiveKind::Quads);
        assert_eq!(batches[0].texture, TextureId::WHITE_PIXEL);

        let positions = batches[0].positions();
        assert_eq!(positions.len(), 8);
        assert_vec2_eq!(positions[0], Vec2::ZERO);
        assert_vec2_eq!(positions[1], Vec2::new(5.0, 8.660254));
        assert_vec2_eq!(positions[3], Vec2::new(10.0, 0.0));
        // Tail quad closes on the center
        assert_vec2_eq!(positions[5], Vec2::new(0.0, 10.0));
        assert_vec2_eq!(positions[7], Vec2::ZERO);
    }

    #[test]
    fn test_sector_triangles() {
        let (mock, mut shapes) = triangles();
        shapes.draw_circle_sector(Vec2::ZERO, 10.0, 90.0, 0.0, Segments::Fixed(3), Color::RED);

        let positions = mock.positions();
        assert_eq!(positions.len(), 9);
        assert_vec2_eq!(positions[0], Vec2::ZERO);
        assert_vec2_eq!(positions[1], Vec2::new(8.660254, 5.0));
        assert_vec2_eq!(positions[2], Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_zero_segments_draw_nothing() {
        let (mock, mut shapes) = quads();
        shapes.draw_circle_sector(Vec2::ZERO, 10.0, 0.0, 90.0, Segments::Fixed(0), Color::RED);
        shapes.draw_circle_sector_lines(Vec2::ZERO, 10.0, 0.0, 90.0, Segments::Fixed(0), Color::RED);
        shapes.draw_rectangle_rounded(Rect::new(0.0, 0.0, 50.0, 50.0), 0.5, Segments::Fixed(0), Color::RED);
        assert!(mock.is_empty());
    }

    #[test]
    fn test_sector_lines_include_caps() {
        let (mock, mut shapes) = quads();
        shapes.draw_circle_sector_lines(Vec2::ZERO, 10.0, 0.0, 90.0, Segments::Fixed(3), Color::RED);

        let positions = mock.positions();
        assert_eq!(positions.len(), 2 + 3 * 2 + 2);
        assert_vec2_eq!(positions[0], Vec2::ZERO);
        assert_vec2_eq!(positions[1], Vec2::new(10.0, 0.0));
        assert_vec2_eq!(positions[8], Vec2::ZERO);
        assert_vec2_eq!(positions[9], Vec2::new(0.0, 10.0));
    }

    #[test]
    fn test_circle_gradient_colors() {
        let (mock, mut shapes) = triangles();
        shapes.draw_circle_gradient(Vec2::ZERO, 10.0, Color::WHITE, Color::BLUE);

        let batch = &mock.batches()[0];
        assert_eq!(batch.vertices.len(), 36 * 3);
        assert_eq!(batch.vertices[0].color, Color::WHITE);
        assert_eq!(batch.vertices[1].color, Color::BLUE);
        assert_eq!(batch.vertices[2].color, Color::BLUE);
        assert_vec2_eq!(batch.vertices[1].position, Vec2::new(9.848078, 1.736482));
    }

    #[test]
    fn test_outlines_use_ten_degree_steps() {
        let (mock, mut shapes) = quads();
        shapes.draw_circle_lines(Vec2::ZERO, 10.0, Color::RED);
        assert_eq!(mock.count_vertices(), 72);

        mock.clear_calls();
        shapes.draw_ellipse_lines(Vec2::ZERO, 20.0, 10.0, Color::RED);
        let positions = mock.positions();
        assert_eq!(positions.len(), 72);
        assert_vec2_eq!(positions[1], Vec2::new(20.0, 0.0));
    }

    #[test]
    fn test_ellipse_radii() {
        let (mock, mut shapes) = triangles();
        shapes.draw_ellipse(Vec2::new(100.0, 100.0), 20.0, 10.0, Color::RED);

        let positions = mock.positions();
        assert_eq!(positions.len(), 36 * 3);
        // Last triangle ends on the 350 to 360 degree chord
        assert_vec2_eq!(positions[positions.len() - 2], Vec2::new(120.0, 100.0));
        // 90 degrees lies on the vertical radius
        assert_vec2_eq!(positions[3 * 8 + 1], Vec2::new(100.0, 110.0));
    }

    #[test]
    fn test_ring_quads() {
        let (mock, mut shapes) = quads();
        shapes.draw_ring(Vec2::ZERO, 5.0, 10.0, 0.0, 90.0, Segments::Fixed(2), Color::RED);

        let positions = mock.positions();
        assert_eq!(positions.len(), 8);
        assert_vec2_eq!(positions[0], Vec2::new(10.0, 0.0));
        assert_vec2_eq!(positions[1], Vec2::new(5.0, 0.0));
        assert_vec2_eq!(positions[2], Vec2::new(3.535534, 3.535534));
        assert_vec2_eq!(positions[3], Vec2::new(7.071068, 7.071068));
    }

    #[test]
    fn test_ring_swaps_radii() {
        let (expected, mut shapes) = quads();
        shapes.draw_ring(Vec2::ZERO, 5.0, 10.0, 0.0, 180.0, Segments::Auto, Color::RED);

        let (swapped, mut shapes) = quads();
        shapes.draw_ring(Vec2::ZERO, 10.0, 5.0, 0.0, 180.0, Segments::Auto, Color::RED);

        assert_eq!(expected.positions(), swapped.positions());
    }

    #[test]
    fn test_ring_equal_angles_draw_nothing() {
        let (mock, mut shapes) = quads();
        shapes.draw_ring(Vec2::ZERO, 5.0, 10.0, 45.0, 45.0, Segments::Auto, Color::RED);
        shapes.draw_ring_lines(Vec2::ZERO, 5.0, 10.0, 45.0, 45.0, Segments::Auto, Color::RED);
        assert!(mock.is_empty());
    }

    #[test]
    fn test_ring_lines() {
        let (mock, mut shapes) = quads();
        shapes.draw_ring_lines(Vec2::ZERO, 5.0, 10.0, 0.0, 90.0, Segments::Fixed(2), Color::RED);

        let positions = mock.positions();
        assert_eq!(positions.len(), 2 + 2 * 4 + 2);
        assert_vec2_eq!(positions[0], Vec2::new(10.0, 0.0));
        assert_vec2_eq!(positions[1], Vec2::new(5.0, 0.0));
        assert_vec2_eq!(positions[10], Vec2::new(0.0, 10.0));
        assert_vec2_eq!(positions[11], Vec2::new(0.0, 5.0));
    }

    #[test]
    fn test_rectangle_corner_order() {
        let (mock, mut shapes) = quads();
        shapes.draw_rectangle(Rect::new(10.0, 20.0, 30.0, 40.0), Color::RED);

        assert_eq!(
            mock.positions(),
            vec![
                Vec2::new(10.0, 20.0),
                Vec2::new(10.0, 60.0),
                Vec2::new(40.0, 60.0),
                Vec2::new(40.0, 20.0),
            ]
        );

        mock.clear_calls();
        shapes.draw_rectangle_v(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), Color::RED);
        assert_eq!(mock.positions()[2], Vec2::new(40.0, 60.0));
    }

    #[test]
    fn test_rectangle_pro_origin_and_rotation() {
        let (mock, mut shapes) = quads();
        shapes.draw_rectangle_pro(Rect::new(50.0, 50.0, 10.0, 10.0), Vec2::new(5.0, 5.0), 0.0, Color::RED);
        assert_eq!(mock.positions()[0], Vec2::new(45.0, 45.0));

        mock.clear_calls();
        shapes.draw_rectangle_pro(Rect::new(0.0, 0.0, 10.0, 20.0), Vec2::ZERO, 90.0, Color::RED);
        let positions = mock.positions();
        assert_vec2_eq!(positions[0], Vec2::ZERO);
        assert_vec2_eq!(positions[1], Vec2::new(-20.0, 0.0));
        assert_vec2_eq!(positions[2], Vec2::new(-20.0, 10.0));
        assert_vec2_eq!(positions[3], Vec2::new(0.0, 10.0));
    }

    #[test]
    fn test_rectangle_gradients() {
        let (mock, mut shapes) = quads();
        let rec = Rect::new(0.0, 0.0, 10.0, 10.0);

        shapes.draw_rectangle_gradient_v(rec, Color::RED, Color::BLUE);
        let colors: Vec<_> = mock.batches()[0].vertices.iter().map(|v| v.color).collect();
        assert_eq!(colors, vec![Color::RED, Color::BLUE, Color::BLUE, Color::RED]);

        mock.clear_calls();
        shapes.draw_rectangle_gradient_h(rec, Color::RED, Color::BLUE);
        let colors: Vec<_> = mock.batches()[0].vertices.iter().map(|v| v.color).collect();
        assert_eq!(colors, vec![Color::RED, Color::RED, Color::BLUE, Color::BLUE]);
    }

    #[test]
    fn test_rectangle_lines_per_mode() {
        let (mock, mut shapes) = quads();
        shapes.draw_rectangle_lines(Rect::new(0.0, 0.0, 10.0, 10.0), Color::RED);
        assert_eq!(mock.count_begins(PrimitiveKind::Quads), 4);
        assert_eq!(mock.positions()[4], Vec2::new(9.0, 1.0));

        let (mock, mut shapes) = triangles();
        shapes.draw_rectangle_lines(Rect::new(0.0, 0.0, 10.0, 10.0), Color::RED);
        assert_eq!(mock.count_begins(PrimitiveKind::Lines), 1);
        let positions = mock.positions();
        assert_eq!(positions.len(), 8);
        assert_eq!(positions[0], Vec2::new(1.0, 1.0));
        assert_eq!(positions[7], Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_rectangle_lines_ex_clamps_thickness() {
        let (mock, mut shapes) = quads();
        shapes.draw_rectangle_lines_ex(Rect::new(0.0, 0.0, 10.0, 4.0), 6.0, Color::RED);

        let batches = mock.batches();
        assert_eq!(batches.len(), 4);
        // Top edge is half the shorter side thick
        assert_eq!(batches[0].positions()[1], Vec2::new(0.0, 2.0));
        // Bottom edge starts at y + height - thickness
        assert_eq!(batches[1].positions()[0], Vec2::new(0.0, 2.0));
        // Right edge sits inside the rectangle
        assert_eq!(batches[3].positions()[0], Vec2::new(8.0, 2.0));
    }

    #[test]
    fn test_rounded_without_roundness_is_rectangle() {
        let rec = Rect::new(5.0, 5.0, 40.0, 20.0);

        let (expected, mut shapes) = quads();
        shapes.draw_rectangle(rec, Color::RED);

        let (rounded, mut shapes) = quads();
        shapes.draw_rectangle_rounded(rec, 0.0, Segments::Auto, Color::RED);

        assert_eq!(expected.calls(), rounded.calls());
    }

    #[test]
    fn test_rounded_vertex_counts() {
        let rec = Rect::new(0.0, 0.0, 100.0, 50.0);

        let (mock, mut shapes) = quads();
        shapes.draw_rectangle_rounded(rec, 1.0, Segments::Fixed(4), Color::RED);
        // 4 corners of 2 merged quads plus 5 body quads
        assert_eq!(mock.count_vertices(), (4 * 2 + 5) * 4);
        assert_eq!(mock.count_begins(PrimitiveKind::Quads), 1);

        let (mock, mut shapes) = triangles();
        shapes.draw_rectangle_rounded(rec, 1.0, Segments::Fixed(4), Color::RED);
        assert_eq!(mock.count_vertices(), (4 * 4 + 5 * 2) * 3);
    }

    #[test]
    fn test_rounded_corner_geometry() {
        let (mock, mut shapes) = triangles();
        shapes.draw_rectangle_rounded(Rect::new(0.0, 0.0, 100.0, 50.0), 1.0, Segments::Fixed(4), Color::RED);

        // Top-left corner fan starts at 180 degrees around (25, 25)
        let positions = mock.positions();
        assert_vec2_eq!(positions[0], Vec2::new(25.0, 25.0));
        assert_vec2_eq!(positions[2], Vec2::new(0.0, 25.0));
    }

    #[test]
    fn test_rounded_lines() {
        let rec = Rect::new(0.0, 0.0, 100.0, 50.0);

        let (mock, mut shapes) = quads();
        shapes.draw_rectangle_rounded_lines(rec, 0.5, Segments::Fixed(4), 1.0, Color::RED);
        assert_eq!(mock.count_begins(PrimitiveKind::Lines), 1);
        assert_eq!(mock.count_vertices(), 4 * 4 * 2 + 4 * 2);

        mock.clear_calls();
        shapes.draw_rectangle_rounded_lines(rec, 0.5, Segments::Fixed(4), 3.0, Color::RED);
        assert_eq!(mock.count_begins(PrimitiveKind::Quads), 1);
        assert_eq!(mock.count_vertices(), (4 * 4 + 4) * 4);
        // First band quad starts on the inner radius
        assert_vec2_eq!(mock.positions()[0], Vec2::new(0.0, 12.5));
    }

    #[test]
    fn test_rounded_lines_without_roundness() {
        let (mock, mut shapes) = quads();
        shapes.draw_rectangle_rounded_lines(Rect::new(0.0, 0.0, 20.0, 20.0), 0.0, Segments::Fixed(4), 2.0, Color::RED);

        let batches = mock.batches();
        assert_eq!(batches.len(), 4);
        // Outline grows outwards by the thickness
        assert_eq!(batches[0].positions()[0], Vec2::new(-2.0, -2.0));
        assert_eq!(batches[0].positions()[3], Vec2::new(22.0, -2.0));
    }

    #[test]
    fn test_triangle_in_quad_mode() {
        let (mock, mut shapes) = quads();
        let (a, b, c) = (Vec2::ZERO, Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0));
        shapes.draw_triangle(a, b, c, Color::RED);
        assert_eq!(mock.positions(), vec![a, b, b, c]);

        mock.clear_calls();
        shapes.draw_triangle_lines(a, b, c, Color::RED);
        assert_eq!(mock.positions(), vec![a, b, b, c, c, a]);
    }

    #[test]
    fn test_triangle_strip_winding() {
        let (mock, mut shapes) = triangles();
        let points = [Vec2::ZERO, Vec2::Y, Vec2::X, Vec2::ONE];
        shapes.draw_triangle_strip(&points, Color::RED);

        assert_eq!(
            mock.positions(),
            vec![Vec2::X, Vec2::ZERO, Vec2::Y, Vec2::ONE, Vec2::X, Vec2::Y]
        );
    }

    #[test]
    fn test_triangle_fan() {
        let (mock, mut shapes) = triangles();
        shapes.draw_triangle_fan(&[Vec2::ZERO, Vec2::X], Color::RED);
        assert!(mock.is_empty());

        let points = [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y];
        shapes.draw_triangle_fan(&points, Color::RED);
        assert_eq!(
            mock.positions(),
            vec![Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::ZERO, Vec2::ONE, Vec2::Y]
        );
    }

    #[test]
    fn test_poly_raises_sides() {
        let (one, mut shapes) = triangles();
        shapes.draw_poly(Vec2::ZERO, 1, 10.0, 0.0, Color::RED);

        let (three, mut shapes) = triangles();
        shapes.draw_poly(Vec2::ZERO, 3, 10.0, 0.0, Color::RED);

        assert_eq!(one.positions(), three.positions());
        assert_eq!(three.count_vertices(), 9);
    }

    #[test]
    fn test_poly_lines() {
        let (mock, mut shapes) = quads();
        shapes.draw_poly_lines(Vec2::ZERO, 4, 10.0, 0.0, Color::RED);

        let positions = mock.positions();
        assert_eq!(positions.len(), 8);
        assert_vec2_eq!(positions[0], Vec2::new(10.0, 0.0));
        assert_vec2_eq!(positions[7], Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_poly_lines_ex() {
        let (mock, mut shapes) = quads();
        shapes.draw_poly_lines_ex(Vec2::ZERO, 4, 10.0, 0.0, 2.0, Color::RED);

        let positions = mock.positions();
        assert_eq!(positions.len(), 4 * 4);
        // Inner radius is 10 - 2 * cos(45 degrees)
        assert_vec2_eq!(positions[1], Vec2::new(10.0 - std::f32::consts::SQRT_2, 0.0));
    }

    #[test]
    fn test_texture_binding() {
        let (mock, mut shapes) = quads();
        let texture = ShapeTexture::new(TextureId(7), 64, 64, Rect::new(0.0, 0.0, 32.0, 32.0));
        shapes.set_shapes_texture(texture);
        assert_eq!(shapes.shapes_texture(), texture);

        shapes.draw_rectangle(Rect::new(0.0, 0.0, 10.0, 10.0), Color::RED);
        let batch = &mock.batches()[0];
        assert_eq!(batch.texture, TextureId(7));
        assert_eq!(batch.vertices[2].tex_coord, Vec2::new(0.5, 0.5));
        // Binding is released after the batch
        assert_eq!(mock.bound_texture(), TextureId::NONE);

        shapes.reset_shapes_texture();
        assert_eq!(shapes.shapes_texture(), ShapeTexture::WHITE_PIXEL);
    }

    #[test]
    fn test_invalid_texture_falls_back() {
        let (_, mut shapes) = quads();
        let invalid = ShapeTexture {
            texture: TextureId(3),
            source: Rect::ZERO,
            width: 16,
            height: 16,
        };
        shapes.set_shapes_texture(invalid);
        assert_eq!(shapes.shapes_texture(), ShapeTexture::WHITE_PIXEL);
    }

    #[test]
    fn test_triangle_mode_never_binds_texture() {
        let (mock, mut shapes) = triangles();
        shapes.draw_circle(Vec2::ZERO, 10.0, Color::RED);
        shapes.draw_rectangle(Rect::new(0.0, 0.0, 10.0, 10.0), Color::RED);
        assert_eq!(mock.count_texture_binds(), 0);
        assert_eq!(mock.count_begins(PrimitiveKind::Triangles), 2);
    }

    #[test]
    fn test_draw_shape_matches_direct_call() {
        let (direct, mut shapes) = quads();
        shapes.draw_circle(Vec2::new(5.0, 5.0), 8.0, Color::RED);

        let (described, mut shapes) = quads();
        shapes.draw_shape(&Shape::circle(Vec2::new(5.0, 5.0), 8.0), Color::RED);

        assert_eq!(direct.calls(), described.calls());
    }

    #[test]
    fn test_every_call_is_balanced() {
        let (mock, mut shapes) = quads();
        let rec = Rect::new(0.0, 0.0, 40.0, 30.0);
        shapes.draw_circle(Vec2::ZERO, 5.0, Color::RED);
        shapes.draw_ring(Vec2::ZERO, 0.0, 5.0, 0.0, 120.0, Segments::Auto, Color::RED);
        shapes.draw_rectangle_rounded(rec, 0.3, Segments::Auto, Color::RED);
        shapes.draw_rectangle_rounded_lines(rec, 0.3, Segments::Auto, 4.0, Color::RED);
        shapes.draw_poly_lines_ex(Vec2::ZERO, 6, 10.0, 30.0, 2.0, Color::RED);
        shapes.draw_line_bezier(Vec2::ZERO, Vec2::ONE * 30.0, 2.0, Color::RED);
        assert!(mock.is_balanced());
        assert_eq!(mock.count_all_begins(), mock.count_ends());
    }
}

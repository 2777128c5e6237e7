//! Scoped emitters shared by all shape functions.
//!
//! A [`FillEmitter`] opens one batch for filled geometry and closes it when
//! dropped. Shapes describe themselves through `triangle`, `quad` and `fan`;
//! the emitter maps those onto textured quads or flat triangles depending on
//! the renderer's [`DrawMode`].

use glam::Vec2;
use tessera_render::{Color, DrawMode, ImmediateBackend, PrimitiveKind, TextureId};

use crate::texture::ShapeTexture;

/// Which corner of the texture source region each vertex of an emitted quad
/// samples.
///
/// Quads from different shapes wind through their corners differently, so
/// each layout keeps a textured region upright on its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum UvLayout {
    /// Top-left, bottom-left, bottom-right, top-right.
    #[default]
    Rect,
    /// Ring segment `(outer, inner, inner next, outer next)`.
    Ring,
    /// Band segment `(inner, inner next, outer next, outer)`.
    Band,
    /// Polygon outline side `(outer, inner, inner next, outer next)`.
    PolyOutline,
    /// Merged fan pair `(center, p2, p1, p0)`.
    FanPair,
    /// Odd fan tail `(center, p1, p0, center)`.
    FanTail,
}

impl UvLayout {
    /// Indices into [`ShapeTexture::quad_tex_coords`] per emitted vertex.
    fn corners(self) -> [usize; 4] {
        match self {
            UvLayout::Rect => [0, 1, 2, 3],
            UvLayout::Ring => [1, 0, 3, 2],
            UvLayout::Band | UvLayout::FanPair => [0, 3, 2, 1],
            UvLayout::PolyOutline => [1, 0, 2, 3],
            UvLayout::FanTail => [0, 2, 1, 3],
        }
    }
}

/// Batch guard for filled geometry.
pub(crate) struct FillEmitter<'a, B: ImmediateBackend> {
    backend: &'a mut B,
    mode: DrawMode,
    tex_coords: [[f32; 2]; 4],
    layout: UvLayout,
}

impl<'a, B: ImmediateBackend> FillEmitter<'a, B> {
    pub(crate) fn begin(backend: &'a mut B, mode: DrawMode, texture: &ShapeTexture) -> Self {
        if mode == DrawMode::Quads {
            backend.set_texture(texture.texture);
        }
        backend.begin(mode.fill_primitive());
        if mode == DrawMode::Quads {
            backend.normal(0.0, 0.0, 1.0);
        }
        Self {
            backend,
            mode,
            tex_coords: texture.quad_tex_coords(),
            layout: UvLayout::Rect,
        }
    }

    /// Texture corner layout for subsequent `quad` calls.
    pub(crate) fn set_uv_layout(&mut self, layout: UvLayout) {
        self.layout = layout;
    }

    pub(crate) fn color(&mut self, color: Color) {
        self.backend.color(color);
    }

    /// Emit one triangle. In quad mode it becomes the degenerate quad
    /// `(a, b, b, c)`.
    pub(crate) fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        match self.mode {
            DrawMode::Quads => self.raw_quad([a, b, b, c], UvLayout::Rect),
            DrawMode::Triangles => {
                for p in [a, b, c] {
                    self.backend.vertex2(p.x, p.y);
                }
            }
        }
    }

    /// Emit one triangle with a color per vertex.
    pub(crate) fn triangle_colored(&mut self, points: [Vec2; 3], colors: [Color; 3]) {
        let [a, b, c] = points;
        let [ca, cb, cc] = colors;
        match self.mode {
            DrawMode::Quads => {
                self.raw_quad_colored([a, b, b, c], [ca, cb, cb, cc], UvLayout::Rect)
            }
            DrawMode::Triangles => {
                for (p, color) in points.into_iter().zip(colors) {
                    self.backend.color(color);
                    self.backend.vertex2(p.x, p.y);
                }
            }
        }
    }

    /// Emit the quad `a, b, c, d` (in winding order). In triangle mode it is
    /// split into `(a, b, c)` and `(a, c, d)`.
    pub(crate) fn quad(&mut self, points: [Vec2; 4]) {
        match self.mode {
            DrawMode::Quads => self.raw_quad(points, self.layout),
            DrawMode::Triangles => {
                let [a, b, c, d] = points;
                for p in [a, b, c, a, c, d] {
                    self.backend.vertex2(p.x, p.y);
                }
            }
        }
    }

    /// Emit a quad with a color per corner.
    pub(crate) fn quad_colored(&mut self, points: [Vec2; 4], colors: [Color; 4]) {
        match self.mode {
            DrawMode::Quads => self.raw_quad_colored(points, colors, self.layout),
            DrawMode::Triangles => {
                for i in [0, 1, 2, 0, 2, 3] {
                    self.backend.color(colors[i]);
                    self.backend.vertex2(points[i].x, points[i].y);
                }
            }
        }
    }

    /// Emit the fan of triangles `(center, rim[i + 1], rim[i])`.
    ///
    /// In quad mode adjacent triangles are merged pairwise into
    /// `(center, rim[i + 2], rim[i + 1], rim[i])`, and an odd last triangle
    /// becomes `(center, rim[i + 1], rim[i], center)`.
    pub(crate) fn fan(&mut self, center: Vec2, rim: &[Vec2]) {
        if rim.len() < 2 {
            return;
        }
        match self.mode {
            DrawMode::Quads => {
                let triangles = rim.len() - 1;
                for window in rim.windows(3).step_by(2).take(triangles / 2) {
                    self.raw_quad([center, window[2], window[1], window[0]], UvLayout::FanPair);
                }
                if triangles % 2 == 1 {
                    let last = rim.len() - 1;
                    self.raw_quad([center, rim[last], rim[last - 1], center], UvLayout::FanTail);
                }
            }
            DrawMode::Triangles => {
                for window in rim.windows(2) {
                    self.triangle(center, window[1], window[0]);
                }
            }
        }
    }

    fn raw_quad(&mut self, points: [Vec2; 4], layout: UvLayout) {
        for (p, corner) in points.into_iter().zip(layout.corners()) {
            let [u, v] = self.tex_coords[corner];
            self.backend.tex_coord(u, v);
            self.backend.vertex2(p.x, p.y);
        }
    }

    fn raw_quad_colored(&mut self, points: [Vec2; 4], colors: [Color; 4], layout: UvLayout) {
        for ((p, corner), color) in points.into_iter().zip(layout.corners()).zip(colors) {
            let [u, v] = self.tex_coords[corner];
            self.backend.color(color);
            self.backend.tex_coord(u, v);
            self.backend.vertex2(p.x, p.y);
        }
    }
}

impl<B: ImmediateBackend> Drop for FillEmitter<'_, B> {
    fn drop(&mut self) {
        self.backend.end();
        if self.mode == DrawMode::Quads {
            self.backend.set_texture(TextureId::NONE);
        }
    }
}

/// Batch guard for line segments.
pub(crate) struct LineEmitter<'a, B: ImmediateBackend> {
    backend: &'a mut B,
}

impl<'a, B: ImmediateBackend> LineEmitter<'a, B> {
    pub(crate) fn begin(backend: &'a mut B) -> Self {
        backend.begin(PrimitiveKind::Lines);
        Self { backend }
    }

    pub(crate) fn color(&mut self, color: Color) {
        self.backend.color(color);
    }

    pub(crate) fn line(&mut self, from: Vec2, to: Vec2) {
        self.backend.vertex2(from.x, from.y);
        self.backend.vertex2(to.x, to.y);
    }

    /// Lines between consecutive points, without closing the loop.
    pub(crate) fn polyline(&mut self, points: &[Vec2]) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1]);
        }
    }
}

impl<B: ImmediateBackend> Drop for LineEmitter<'_, B> {
    fn drop(&mut self) {
        self.backend.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::Rect;
    use tessera_test_utils::{BackendCall, MockBackend};

    #[test]
    fn test_fill_guard_balances_quads() {
        let mut mock = MockBackend::new();
        {
            let mut fill = FillEmitter::begin(&mut mock, DrawMode::Quads, &ShapeTexture::WHITE_PIXEL);
            fill.color(Color::RED);
            fill.triangle(Vec2::ZERO, Vec2::X, Vec2::Y);
        }
        let calls = mock.calls();
        assert_eq!(calls[0], BackendCall::SetTexture(TextureId::WHITE_PIXEL));
        assert_eq!(calls[1], BackendCall::Begin(PrimitiveKind::Quads));
        assert_eq!(calls[2], BackendCall::Normal(0.0, 0.0, 1.0));
        assert_eq!(calls[calls.len() - 2], BackendCall::End);
        assert_eq!(calls[calls.len() - 1], BackendCall::SetTexture(TextureId::NONE));
        assert!(mock.is_balanced());

        let batch = &mock.batches()[0];
        assert_eq!(batch.positions(), vec![Vec2::ZERO, Vec2::X, Vec2::X, Vec2::Y]);
    }

    #[test]
    fn test_quad_split_in_triangle_mode() {
        let mut mock = MockBackend::new();
        {
            let mut fill =
                FillEmitter::begin(&mut mock, DrawMode::Triangles, &ShapeTexture::WHITE_PIXEL);
            fill.quad([Vec2::ZERO, Vec2::Y, Vec2::ONE, Vec2::X]);
        }
        assert_eq!(mock.count_texture_binds(), 0);
        assert_eq!(
            mock.positions(),
            vec![Vec2::ZERO, Vec2::Y, Vec2::ONE, Vec2::ZERO, Vec2::ONE, Vec2::X]
        );
    }

    #[test]
    fn test_fan_odd_tail() {
        let rim = [Vec2::X, Vec2::ONE, Vec2::Y, -Vec2::X];
        let center = Vec2::ZERO;

        let mut mock = MockBackend::new();
        {
            let mut fill = FillEmitter::begin(&mut mock, DrawMode::Quads, &ShapeTexture::WHITE_PIXEL);
            fill.fan(center, &rim);
        }
        // 3 triangles: one merged pair plus the odd tail
        assert_eq!(
            mock.positions(),
            vec![center, rim[2], rim[1], rim[0], center, rim[3], rim[2], center]
        );

        let mut mock = MockBackend::new();
        {
            let mut fill =
                FillEmitter::begin(&mut mock, DrawMode::Triangles, &ShapeTexture::WHITE_PIXEL);
            fill.fan(center, &rim);
        }
        assert_eq!(mock.count_vertices(), 9);
    }

    #[test]
    fn test_fill_begins_with_mode_primitive() {
        for mode in [DrawMode::Quads, DrawMode::Triangles] {
            let mut mock = MockBackend::new();
            FillEmitter::begin(&mut mock, mode, &ShapeTexture::WHITE_PIXEL);
            assert_eq!(mock.count_begins(mode.fill_primitive()), 1);
            assert!(mock.is_balanced());
        }
    }

    #[test]
    fn test_uv_layouts() {
        let texture = ShapeTexture::new(TextureId(5), 4, 4, Rect::new(0.0, 0.0, 4.0, 4.0));
        let (tl, bl, br, tr) = (Vec2::ZERO, Vec2::Y, Vec2::ONE, Vec2::X);
        let square = [Vec2::ZERO, Vec2::Y, Vec2::ONE, Vec2::X];

        let mut mock = MockBackend::new();
        {
            let mut fill = FillEmitter::begin(&mut mock, DrawMode::Quads, &texture);
            fill.quad(square);
            fill.set_uv_layout(UvLayout::Ring);
            fill.quad(square);
            fill.fan(Vec2::ZERO, &[Vec2::X, Vec2::ONE, Vec2::Y, -Vec2::X]);
        }
        let uvs: Vec<Vec2> = mock.batches()[0].vertices.iter().map(|v| v.tex_coord).collect();
        assert_eq!(&uvs[0..4], &[tl, bl, br, tr]);
        assert_eq!(&uvs[4..8], &[bl, tl, tr, br]);
        // Fans ignore the current layout
        assert_eq!(&uvs[8..12], &[tl, tr, br, bl]);
        assert_eq!(&uvs[12..16], &[tl, br, bl, tr]);
    }

    #[test]
    fn test_line_guard() {
        let mut mock = MockBackend::new();
        {
            let mut lines = LineEmitter::begin(&mut mock);
            lines.polyline(&[Vec2::ZERO, Vec2::X, Vec2::ONE]);
        }
        assert_eq!(mock.count_begins(PrimitiveKind::Lines), 1);
        assert_eq!(mock.count_vertices(), 4);
        assert!(mock.is_balanced());
    }
}

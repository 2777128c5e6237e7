//! The immediate-mode emission contract.

use crate::{BackendFeatures, Color, PrimitiveKind, TextureId};

/// An immediate-mode vertex sink.
///
/// Geometry is streamed vertex by vertex between [`begin`](Self::begin) and
/// [`end`](Self::end). State set with [`color`](Self::color),
/// [`tex_coord`](Self::tex_coord) and [`normal`](Self::normal) applies to
/// every vertex emitted afterwards until it is changed again.
///
/// Implementations must flush the batch on `end`. Shape code always pairs
/// `begin` with `end` and restores the texture to [`TextureId::NONE`] after a
/// textured batch.
///
/// # Example
///
/// ```
/// use tessera_render::{Color, ImmediateBackend, PrimitiveKind, VertexBatcher};
///
/// let mut backend = VertexBatcher::new();
/// backend.begin(PrimitiveKind::Lines);
/// backend.color(Color::RED);
/// backend.vertex2(0.0, 0.0);
/// backend.vertex2(10.0, 0.0);
/// backend.end();
///
/// let calls = backend.finish().unwrap();
/// assert_eq!(calls[0].vertices.len(), 2);
/// ```
pub trait ImmediateBackend {
    /// Capabilities of this backend, queried once when a renderer is created.
    fn features(&self) -> BackendFeatures {
        BackendFeatures::standard()
    }

    /// Whether `PrimitiveKind::Quads` batches are assembled natively.
    fn supports_quads(&self) -> bool {
        self.features().contains(BackendFeatures::QUADS)
    }

    /// Bind a texture for the following batch. [`TextureId::NONE`] unbinds.
    fn set_texture(&mut self, texture: TextureId);

    /// Open a batch of the given primitive kind.
    fn begin(&mut self, kind: PrimitiveKind);

    /// Close the current batch.
    fn end(&mut self);

    /// Set the color of subsequent vertices.
    fn color(&mut self, color: Color);

    /// Set the texture coordinate of subsequent vertices.
    fn tex_coord(&mut self, u: f32, v: f32);

    /// Set the normal of subsequent vertices.
    fn normal(&mut self, x: f32, y: f32, z: f32);

    /// Append one vertex to the current batch.
    fn vertex2(&mut self, x: f32, y: f32);
}

impl<B: ImmediateBackend + ?Sized> ImmediateBackend for &mut B {
    fn features(&self) -> BackendFeatures {
        (**self).features()
    }

    fn supports_quads(&self) -> bool {
        (**self).supports_quads()
    }

    fn set_texture(&mut self, texture: TextureId) {
        (**self).set_texture(texture);
    }

    fn begin(&mut self, kind: PrimitiveKind) {
        (**self).begin(kind);
    }

    fn end(&mut self) {
        (**self).end();
    }

    fn color(&mut self, color: Color) {
        (**self).color(color);
    }

    fn tex_coord(&mut self, u: f32, v: f32) {
        (**self).tex_coord(u, v);
    }

    fn normal(&mut self, x: f32, y: f32, z: f32) {
        (**self).normal(x, y, z);
    }

    fn vertex2(&mut self, x: f32, y: f32) {
        (**self).vertex2(x, y);
    }
}

impl<B: ImmediateBackend + ?Sized> ImmediateBackend for Box<B> {
    fn features(&self) -> BackendFeatures {
        (**self).features()
    }

    fn supports_quads(&self) -> bool {
        (**self).supports_quads()
    }

    fn set_texture(&mut self, texture: TextureId) {
        (**self).set_texture(texture);
    }

    fn begin(&mut self, kind: PrimitiveKind) {
        (**self).begin(kind);
    }

    fn end(&mut self) {
        (**self).end();
    }

    fn color(&mut self, color: Color) {
        (**self).color(color);
    }

    fn tex_coord(&mut self, u: f32, v: f32) {
        (**self).tex_coord(u, v);
    }

    fn normal(&mut self, x: f32, y: f32, z: f32) {
        (**self).normal(x, y, z);
    }

    fn vertex2(&mut self, x: f32, y: f32) {
        (**self).vertex2(x, y);
    }
}

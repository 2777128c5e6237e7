//! A CPU-side [`ImmediateBackend`] that collects vertices into draw calls.
//!
//! The batcher is the reference backend: it accepts the immediate-mode
//! stream produced by shape code and groups consecutive batches sharing a
//! primitive kind and texture into a single [`DrawCall`]. The resulting
//! vertex data is `Pod` and can be uploaded to any graphics API.

use crate::{
    BackendFeatures, Color, DrawCall, ImmediateBackend, PrimitiveKind, ShapeVertex, TextureId,
};

/// Error returned by [`VertexBatcher::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// `begin` was called without a matching `end`.
    UnclosedBatch { kind: PrimitiveKind },
    /// A batch ended with a vertex count that is not a multiple of the
    /// primitive size. The trailing vertices were discarded.
    IncompletePrimitive {
        kind: PrimitiveKind,
        vertex_count: usize,
    },
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchError::UnclosedBatch { kind } => {
                write!(f, "{kind} batch was opened but never closed")
            }
            BatchError::IncompletePrimitive { kind, vertex_count } => write!(
                f,
                "{kind} batch ended with {vertex_count} vertices, not a multiple of {}",
                kind.vertices_per_primitive()
            ),
        }
    }
}

impl std::error::Error for BatchError {}

/// Counters describing the stream a batcher received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Number of `begin`/`end` pairs received.
    pub batches: usize,
    /// Number of vertices accepted.
    pub vertices: usize,
    /// Vertices emitted outside a batch or cut from incomplete primitives.
    pub dropped_vertices: usize,
}

#[derive(Debug)]
struct OpenBatch {
    kind: PrimitiveKind,
    texture: TextureId,
    vertices: Vec<ShapeVertex>,
}

/// Collects immediate-mode geometry into merged [`DrawCall`]s.
///
/// # Example
///
/// ```
/// use tessera_render::{Color, ImmediateBackend, PrimitiveKind, VertexBatcher};
///
/// let mut batcher = VertexBatcher::new();
/// for offset in [0.0, 10.0] {
///     batcher.begin(PrimitiveKind::Triangles);
///     batcher.color(Color::BLUE);
///     batcher.vertex2(offset, 0.0);
///     batcher.vertex2(offset, 5.0);
///     batcher.vertex2(offset + 5.0, 0.0);
///     batcher.end();
/// }
///
/// // Both batches share kind and texture, so they merge.
/// let calls = batcher.finish().unwrap();
/// assert_eq!(calls.len(), 1);
/// assert_eq!(calls[0].vertices.len(), 6);
/// ```
#[derive(Debug)]
pub struct VertexBatcher {
    features: BackendFeatures,
    calls: Vec<DrawCall>,
    open: Option<OpenBatch>,
    texture: TextureId,
    color: Color,
    tex_coord: [f32; 2],
    normal: [f32; 3],
    stats: BatchStats,
    error: Option<BatchError>,
}

impl Default for VertexBatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexBatcher {
    /// Create a batcher supporting quads and textures.
    pub fn new() -> Self {
        Self::with_features(BackendFeatures::QUADS | BackendFeatures::TEXTURES)
    }

    /// Create a batcher advertising the given features.
    ///
    /// Without [`BackendFeatures::TEXTURES`] every call is recorded with
    /// [`TextureId::NONE`].
    pub fn with_features(features: BackendFeatures) -> Self {
        Self {
            features,
            calls: Vec::new(),
            open: None,
            texture: TextureId::NONE,
            color: Color::WHITE,
            tex_coord: [0.0, 0.0],
            normal: [0.0, 0.0, 1.0],
            stats: BatchStats::default(),
            error: None,
        }
    }

    /// Draw calls collected so far.
    pub fn draw_calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn stats(&self) -> BatchStats {
        self.stats
    }

    /// The most recently set normal.
    pub fn current_normal(&self) -> [f32; 3] {
        self.normal
    }

    /// Whether a batch is currently open.
    pub fn is_recording(&self) -> bool {
        self.open.is_some()
    }

    /// Drop all collected geometry and reset state.
    pub fn clear(&mut self) {
        self.calls.clear();
        self.open = None;
        self.texture = TextureId::NONE;
        self.color = Color::WHITE;
        self.tex_coord = [0.0, 0.0];
        self.normal = [0.0, 0.0, 1.0];
        self.stats = BatchStats::default();
        self.error = None;
    }

    /// Consume the batcher and return its draw calls.
    ///
    /// Fails if a batch is still open or if any batch ended mid-primitive.
    pub fn finish(self) -> Result<Vec<DrawCall>, BatchError> {
        if let Some(open) = &self.open {
            return Err(BatchError::UnclosedBatch { kind: open.kind });
        }
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(self.calls)
    }

    fn record_error(&mut self, error: BatchError) {
        tracing::warn!("{error}");
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

impl ImmediateBackend for VertexBatcher {
    fn features(&self) -> BackendFeatures {
        self.features
    }

    fn set_texture(&mut self, texture: TextureId) {
        self.texture = if self.features.contains(BackendFeatures::TEXTURES) {
            texture
        } else {
            TextureId::NONE
        };
    }

    fn begin(&mut self, kind: PrimitiveKind) {
        if let Some(open) = &self.open {
            tracing::warn!(
                "begin({kind}) called while a {} batch is open; closing it",
                open.kind
            );
            self.end();
        }
        self.open = Some(OpenBatch {
            kind,
            texture: self.texture,
            vertices: Vec::new(),
        });
    }

    fn end(&mut self) {
        let Some(mut open) = self.open.take() else {
            tracing::warn!("end() called without an open batch");
            return;
        };
        self.stats.batches += 1;

        let per_primitive = open.kind.vertices_per_primitive();
        let remainder = open.vertices.len() % per_primitive;
        if remainder != 0 {
            self.record_error(BatchError::IncompletePrimitive {
                kind: open.kind,
                vertex_count: open.vertices.len(),
            });
            open.vertices.truncate(open.vertices.len() - remainder);
            self.stats.dropped_vertices += remainder;
        }
        if open.vertices.is_empty() {
            return;
        }
        self.stats.vertices += open.vertices.len();

        match self.calls.last_mut() {
            Some(last) if last.kind == open.kind && last.texture == open.texture => {
                last.vertices.append(&mut open.vertices);
            }
            _ => self.calls.push(DrawCall {
                kind: open.kind,
                texture: open.texture,
                vertices: open.vertices,
            }),
        }
    }

    fn color(&mut self, color: Color) {
        self.color = color;
    }

    fn tex_coord(&mut self, u: f32, v: f32) {
        self.tex_coord = [u, v];
    }

    fn normal(&mut self, x: f32, y: f32, z: f32) {
        self.normal = [x, y, z];
    }

    fn vertex2(&mut self, x: f32, y: f32) {
        let vertex = ShapeVertex {
            position: [x, y],
            tex_coord: self.tex_coord,
            color: self.color,
        };
        match &mut self.open {
            Some(open) => open.vertices.push(vertex),
            None => {
                tracing::warn!("vertex2({x}, {y}) emitted outside a batch; dropped");
                self.stats.dropped_vertices += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_triangle(batcher: &mut VertexBatcher, color: Color) {
        batcher.begin(PrimitiveKind::Triangles);
        batcher.color(color);
        batcher.vertex2(0.0, 0.0);
        batcher.vertex2(0.0, 1.0);
        batcher.vertex2(1.0, 0.0);
        batcher.end();
    }

    #[test]
    fn test_merge_same_kind() {
        let mut batcher = VertexBatcher::new();
        emit_triangle(&mut batcher, Color::RED);
        emit_triangle(&mut batcher, Color::GREEN);
        let stats = batcher.stats();
        let calls = batcher.finish().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].vertices.len(), 6);
        assert_eq!(calls[0].vertices[0].color, Color::RED);
        assert_eq!(calls[0].vertices[5].color, Color::GREEN);
        assert_eq!(stats.batches, 2);
        assert_eq!(stats.vertices, 6);
    }

    #[test]
    fn test_texture_change_splits_calls() {
        let mut batcher = VertexBatcher::new();
        batcher.set_texture(TextureId(7));
        emit_triangle(&mut batcher, Color::RED);
        batcher.set_texture(TextureId::NONE);
        emit_triangle(&mut batcher, Color::RED);
        let calls = batcher.finish().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].texture, TextureId(7));
        assert_eq!(calls[1].texture, TextureId::NONE);
    }

    #[test]
    fn test_textures_ignored_without_feature() {
        let mut batcher = VertexBatcher::with_features(BackendFeatures::QUADS);
        batcher.set_texture(TextureId(7));
        emit_triangle(&mut batcher, Color::RED);
        let calls = batcher.finish().unwrap();
        assert_eq!(calls[0].texture, TextureId::NONE);
    }

    #[test]
    fn test_state_is_sticky() {
        let mut batcher = VertexBatcher::new();
        batcher.begin(PrimitiveKind::Lines);
        batcher.color(Color::BLUE);
        batcher.tex_coord(0.5, 0.25);
        batcher.vertex2(0.0, 0.0);
        batcher.vertex2(1.0, 0.0);
        batcher.end();
        let calls = batcher.finish().unwrap();
        for vertex in &calls[0].vertices {
            assert_eq!(vertex.color, Color::BLUE);
            assert_eq!(vertex.tex_coord, [0.5, 0.25]);
        }
    }

    #[test]
    fn test_unclosed_batch() {
        let mut batcher = VertexBatcher::new();
        batcher.begin(PrimitiveKind::Quads);
        batcher.vertex2(0.0, 0.0);
        assert!(batcher.is_recording());
        assert_eq!(
            batcher.finish(),
            Err(BatchError::UnclosedBatch {
                kind: PrimitiveKind::Quads
            })
        );
    }

    #[test]
    fn test_incomplete_primitive() {
        let mut batcher = VertexBatcher::new();
        batcher.begin(PrimitiveKind::Triangles);
        batcher.vertex2(0.0, 0.0);
        batcher.vertex2(1.0, 0.0);
        batcher.vertex2(1.0, 1.0);
        batcher.vertex2(2.0, 2.0);
        batcher.end();
        assert_eq!(batcher.draw_calls()[0].vertices.len(), 3);
        assert_eq!(batcher.stats().dropped_vertices, 1);
        assert!(matches!(
            batcher.finish(),
            Err(BatchError::IncompletePrimitive {
                vertex_count: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_vertex_outside_batch_dropped() {
        let mut batcher = VertexBatcher::new();
        batcher.vertex2(1.0, 1.0);
        batcher.end();
        assert_eq!(batcher.stats().dropped_vertices, 1);
        assert!(batcher.finish().unwrap().is_empty());
    }

    #[test]
    fn test_empty_batch_discarded() {
        let mut batcher = VertexBatcher::new();
        batcher.begin(PrimitiveKind::Lines);
        batcher.end();
        assert_eq!(batcher.stats().batches, 1);
        assert!(batcher.finish().unwrap().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut batcher = VertexBatcher::new();
        emit_triangle(&mut batcher, Color::RED);
        batcher.clear();
        assert!(batcher.draw_calls().is_empty());
        assert_eq!(batcher.stats(), BatchStats::default());
    }
}

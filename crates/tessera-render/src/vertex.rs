//! Vertex and draw call types produced by [`VertexBatcher`](crate::VertexBatcher).

use bytemuck::{Pod, Zeroable};

use crate::{Color, PrimitiveKind, TextureId};

/// A 2D vertex with texture coordinate and color.
///
/// ```text
/// Offset | Field     | Size
/// -------|-----------|------
/// 0      | position  | 8 bytes ([f32; 2])
/// 8      | tex_coord | 8 bytes ([f32; 2])
/// 16     | color     | 4 bytes (RGBA8)
/// Total: 20 bytes
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct ShapeVertex {
    pub position: [f32; 2],
    pub tex_coord: [f32; 2],
    pub color: Color,
}

static_assertions::assert_eq_size!(ShapeVertex, [u8; 20]);

impl ShapeVertex {
    pub fn position(&self) -> glam::Vec2 {
        glam::Vec2::from(self.position)
    }
}

/// A run of vertices sharing the same primitive kind and texture.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub kind: PrimitiveKind,
    pub texture: TextureId,
    pub vertices: Vec<ShapeVertex>,
}

impl DrawCall {
    /// Number of complete primitives in this call.
    pub fn primitive_count(&self) -> usize {
        self.vertices.len() / self.kind.vertices_per_primitive()
    }

    /// Indices expanding this call into a triangle list.
    ///
    /// Quads `(v0, v1, v2, v3)` become `(v0, v1, v2)` and `(v0, v2, v3)`.
    /// Line calls have no triangle representation and yield no indices.
    pub fn triangle_indices(&self) -> Vec<u32> {
        let count = self.vertices.len() as u32;
        match self.kind {
            PrimitiveKind::Lines => Vec::new(),
            PrimitiveKind::Triangles => (0..count - count % 3).collect(),
            PrimitiveKind::Quads => {
                let mut indices = Vec::with_capacity((count as usize / 4) * 6);
                for base in (0..count - count % 4).step_by(4) {
                    indices.extend_from_slice(&[
                        base,
                        base + 1,
                        base + 2,
                        base,
                        base + 2,
                        base + 3,
                    ]);
                }
                indices
            }
        }
    }
}

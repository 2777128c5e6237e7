//! Primitive and resource identifiers shared by backends and shape code.

/// Kind of primitive assembled from the vertices of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Every 2 vertices form a line segment.
    Lines,
    /// Every 3 vertices form a triangle.
    Triangles,
    /// Every 4 vertices form a quad (emitted in fan order: v0, v1, v2, v3).
    Quads,
}

impl PrimitiveKind {
    /// Number of vertices making up one primitive.
    pub const fn vertices_per_primitive(self) -> usize {
        match self {
            PrimitiveKind::Lines => 2,
            PrimitiveKind::Triangles => 3,
            PrimitiveKind::Quads => 4,
        }
    }
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimitiveKind::Lines => write!(f, "Lines"),
            PrimitiveKind::Triangles => write!(f, "Triangles"),
            PrimitiveKind::Quads => write!(f, "Quads"),
        }
    }
}

/// Opaque handle of a texture owned by the backend.
///
/// Id `0` means "no texture"; id `1` is the backend's built-in 1x1 white pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u32);

impl TextureId {
    /// No texture bound.
    pub const NONE: TextureId = TextureId(0);
    /// The 1x1 white pixel every backend provides at startup.
    pub const WHITE_PIXEL: TextureId = TextureId(1);

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_per_primitive() {
        assert_eq!(PrimitiveKind::Lines.vertices_per_primitive(), 2);
        assert_eq!(PrimitiveKind::Triangles.vertices_per_primitive(), 3);
        assert_eq!(PrimitiveKind::Quads.vertices_per_primitive(), 4);
    }

    #[test]
    fn test_texture_none() {
        assert!(TextureId::NONE.is_none());
        assert!(!TextureId::WHITE_PIXEL.is_none());
        assert_eq!(TextureId::default(), TextureId::NONE);
    }
}

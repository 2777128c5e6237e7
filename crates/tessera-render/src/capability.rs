//! Draw mode selection.
//!
//! Filled shapes are emitted either as textured quads (so they batch with
//! other draws that use the same atlas texture) or as flat triangles. The
//! choice is made once, when a renderer is created, from the backend's
//! advertised [`BackendFeatures`] or an explicit override.

use crate::features::BackendFeatures;
use crate::types::PrimitiveKind;

/// How filled shapes are submitted to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// Textured quads using the shapes texture binding. Requires
    /// [`BackendFeatures::QUADS`].
    Quads,
    /// Color-only triangles. Supported by every backend.
    Triangles,
}

impl DrawMode {
    /// Primitive kind used for filled geometry in this mode.
    pub const fn fill_primitive(self) -> PrimitiveKind {
        match self {
            DrawMode::Quads => PrimitiveKind::Quads,
            DrawMode::Triangles => PrimitiveKind::Triangles,
        }
    }
}

impl std::fmt::Display for DrawMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawMode::Quads => write!(f, "Quads (textured)"),
            DrawMode::Triangles => write!(f, "Triangles (flat)"),
        }
    }
}

/// Pick the best draw mode the backend supports.
pub fn detect_draw_mode(features: BackendFeatures) -> DrawMode {
    if features.contains(BackendFeatures::QUADS | BackendFeatures::TEXTURES) {
        DrawMode::Quads
    } else {
        DrawMode::Triangles
    }
}

/// Resolve the draw mode for a renderer.
///
/// An override is honoured unless the backend cannot assemble quads, in
/// which case the triangle path is used instead.
pub fn resolve_draw_mode(features: BackendFeatures, mode_override: Option<DrawMode>) -> DrawMode {
    match mode_override {
        Some(DrawMode::Quads) if !features.contains(BackendFeatures::QUADS) => {
            tracing::warn!("Quads draw mode requested but the backend lacks quad support");
            DrawMode::Triangles
        }
        Some(mode) => mode,
        None => detect_draw_mode(features),
    }
}

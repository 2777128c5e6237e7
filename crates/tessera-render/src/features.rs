//! Backend feature flags.

use bitflags::bitflags;

bitflags! {
    /// Capabilities an immediate-mode backend can advertise.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BackendFeatures: u32 {
        /// The backend assembles `PrimitiveKind::Quads` batches natively.
        const QUADS = 1 << 0;

        /// Texture coordinates and texture binding are honoured.
        /// Without this, texture state is ignored and shapes render flat.
        const TEXTURES = 1 << 1;

        /// Per-vertex normals are stored.
        const NORMALS = 1 << 2;
    }
}

impl BackendFeatures {
    /// What a typical desktop immediate-mode layer supports.
    pub fn standard() -> Self {
        Self::QUADS | Self::TEXTURES | Self::NORMALS
    }
}

impl Default for BackendFeatures {
    fn default() -> Self {
        Self::standard()
    }
}

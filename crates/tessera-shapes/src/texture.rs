//! Texture binding used by the textured-quad fill path.

use tessera_core::Rect;
use tessera_render::TextureId;

/// Texture and source region sampled by filled shapes.
///
/// Pointing this at a white region of an atlas that is also used for text
/// or sprites lets shapes share the same draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeTexture {
    pub texture: TextureId,
    /// Region of the texture in pixels.
    pub source: Rect,
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
}

impl Default for ShapeTexture {
    fn default() -> Self {
        Self::WHITE_PIXEL
    }
}

impl ShapeTexture {
    /// The backend's built-in 1x1 white pixel.
    pub const WHITE_PIXEL: ShapeTexture = ShapeTexture {
        texture: TextureId::WHITE_PIXEL,
        source: Rect::new(0.0, 0.0, 1.0, 1.0),
        width: 1,
        height: 1,
    };

    /// Build a binding, falling back to [`ShapeTexture::WHITE_PIXEL`] when
    /// the texture id, source size or texture size is zero.
    pub fn new(texture: TextureId, width: u32, height: u32, source: Rect) -> Self {
        let binding = Self {
            texture,
            source,
            width,
            height,
        };
        if binding.is_valid() {
            binding
        } else {
            tracing::debug!("Invalid shapes texture {texture:?} {source:?}, using white pixel");
            Self::WHITE_PIXEL
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.texture.is_none()
            && self.source.width != 0.0
            && self.source.height != 0.0
            && self.width != 0
            && self.height != 0
    }

    /// Normalized `(u0, v0, u1, v1)` of the source region.
    pub fn uv_rect(&self) -> [f32; 4] {
        let w = self.width as f32;
        let h = self.height as f32;
        [
            self.source.x / w,
            self.source.y / h,
            (self.source.x + self.source.width) / w,
            (self.source.y + self.source.height) / h,
        ]
    }

    /// Texture coordinates for the four corners of an emitted quad, in the
    /// order top-left, bottom-left, bottom-right, top-right.
    pub fn quad_tex_coords(&self) -> [[f32; 2]; 4] {
        let [u0, v0, u1, v1] = self.uv_rect();
        [[u0, v0], [u0, v1], [u1, v1], [u1, v0]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_white_pixel() {
        let binding = ShapeTexture::default();
        assert_eq!(binding.texture, TextureId(1));
        assert_eq!(binding.uv_rect(), [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_invalid_resets() {
        let source = Rect::new(0.0, 0.0, 8.0, 8.0);
        assert_eq!(
            ShapeTexture::new(TextureId::NONE, 64, 64, source),
            ShapeTexture::WHITE_PIXEL
        );
        assert_eq!(
            ShapeTexture::new(TextureId(4), 64, 64, Rect::new(0.0, 0.0, 0.0, 8.0)),
            ShapeTexture::WHITE_PIXEL
        );
        assert_eq!(
            ShapeTexture::new(TextureId(4), 0, 64, source),
            ShapeTexture::WHITE_PIXEL
        );
    }

    #[test]
    fn test_uv_rect() {
        let binding = ShapeTexture::new(TextureId(4), 64, 32, Rect::new(16.0, 8.0, 16.0, 8.0));
        assert_eq!(binding.uv_rect(), [0.25, 0.25, 0.5, 0.5]);
        assert_eq!(
            binding.quad_tex_coords(),
            [[0.25, 0.25], [0.25, 0.5], [0.5, 0.5], [0.5, 0.25]]
        );
    }
}

/// SIMD-friendly math types re-exported from [`glam`].
///
/// Shape code works on [`Vec2`] for positions and directions, and on
/// [`Mat2`] for rotations.
///
/// ```
/// use tessera_core::math::Vec2;
///
/// let center = Vec2::new(100.0, 100.0);
/// let rim = center + Vec2::from_angle(0.0) * 25.0;
/// assert_eq!(rim, Vec2::new(125.0, 100.0));
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

/// Packed vector types for vertex buffers.
///
/// These are `#[repr(C)]` and [`bytemuck::Pod`], so a slice of them can be
/// cast to bytes and handed to a graphics API as-is.
pub mod packed {
    use bytemuck::{Pod, Zeroable};

    /// A 2D vector with guaranteed `#[repr(C)]` layout.
    ///
    /// ```text
    /// Offset | Field | Size
    /// -------|-------|------
    /// 0      | x     | 4 bytes (f32)
    /// 4      | y     | 4 bytes (f32)
    /// Total: 8 bytes
    /// ```
    #[repr(C)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
    pub struct Vec2 {
        pub x: f32,
        pub y: f32,
    }

    impl From<glam::Vec2> for Vec2 {
        fn from(v: glam::Vec2) -> Self {
            Self { x: v.x, y: v.y }
        }
    }

    impl From<Vec2> for glam::Vec2 {
        fn from(v: Vec2) -> Self {
            glam::Vec2::new(v.x, v.y)
        }
    }

    static_assertions::assert_eq_size!(Vec2, [f32; 2]);
}

/// Degrees to radians factor used by all angle-based shape code.
pub const DEG2RAD: f32 = std::f32::consts::PI / 180.0;

/// Radians to degrees factor.
pub const RAD2DEG: f32 = 180.0 / std::f32::consts::PI;

pub use fast::*;
pub use packed::Vec2 as PackedVec2;

//! Tessera - immediate-mode 2D shapes on the CPU
//!
//! Tessera turns shape calls (circles, rings, rounded rectangles, thick
//! bezier lines, polygons) into vertex batches for any backend that speaks
//! a begin/vertex/end protocol, and answers collision queries on the same
//! primitives.
//!
//! - [`core`]: logging, configuration, profiling and math
//! - [`render`]: the [`ImmediateBackend`](render::ImmediateBackend) contract
//!   and the CPU [`VertexBatcher`](render::VertexBatcher)
//! - [`shapes`]: tessellation, the [`ShapeRenderer`](shapes::ShapeRenderer)
//!   and collision functions
//!
//! # Quick Start
//!
//! ```
//! use tessera::prelude::*;
//!
//! tessera::init(&Config::default());
//!
//! let mut shapes = ShapeRenderer::new(VertexBatcher::new());
//! shapes.draw_circle(Vec2::new(64.0, 64.0), 32.0, Color::RED);
//! shapes.draw_rectangle_rounded(Rect::new(0.0, 0.0, 128.0, 48.0), 0.5, Segments::Auto, Color::BLUE);
//!
//! let draw_calls = shapes.into_backend().finish().unwrap();
//! for call in &draw_calls {
//!     let _indices = call.triangle_indices();
//! }
//! ```

pub use tessera_core as core;
pub use tessera_core::math;
pub use tessera_render as render;
pub use tessera_shapes as shapes;

use tessera_core::Config;

/// Apply a [`Config`]: installs the `tracing` subscriber and, when enabled,
/// the profiler.
pub fn init(config: &Config) {
    config.apply();
    tracing::debug!(
        "Tessera {} initialized (profiling: {:?})",
        env!("CARGO_PKG_VERSION"),
        config.profiling
    );
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use tessera_core::math::Vec2;
    pub use tessera_core::{Config, ProfilingMode, Rect};

    pub use tessera_render::{
        BackendFeatures, Color, DrawCall, DrawMode, ImmediateBackend, PrimitiveKind, ShapeVertex,
        TextureId, VertexBatcher,
    };

    pub use tessera_shapes::{
        ArcSpec, Segments, Shape, ShapeRenderer, ShapeRendererDescriptor, ShapeTexture,
        Tessellator,
    };

    // Collision queries
    pub use tessera_shapes::{
        circle_rect_collide, circles_collide, collision_rect, lines_intersect, point_in_circle,
        point_in_polygon, point_in_rect, point_in_triangle, point_on_line, rects_intersect,
    };
}

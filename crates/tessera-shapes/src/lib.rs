//! Tessera Shapes - CPU tessellation of 2D shapes
//!
//! This crate provides:
//! - Immediate-mode drawing of lines, circles, rings, rectangles, rounded
//!   rectangles, triangles and regular polygons through [`ShapeRenderer`]
//! - Adaptive arc tessellation driven by a maximum chord error
//! - Thick bezier lines flattened into triangle strips
//! - Collision queries between points, rectangles, circles, triangles,
//!   polygons and line segments
//!
//! Geometry is streamed into any [`tessera_render::ImmediateBackend`]. With a
//! quad-capable backend every fill is a textured quad batch sampling the
//! shapes texture, so shapes and sprites can share one draw call.
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use tessera_core::Rect;
//! use tessera_render::{Color, VertexBatcher};
//! use tessera_shapes::{Segments, ShapeRenderer};
//!
//! let mut shapes = ShapeRenderer::new(VertexBatcher::new());
//!
//! shapes.draw_rectangle_rounded(Rect::new(10.0, 10.0, 200.0, 80.0), 0.25, Segments::Auto, Color::GRAY);
//! shapes.draw_circle_lines(Vec2::new(110.0, 50.0), 30.0, Color::RED);
//! shapes.draw_line_bezier(Vec2::ZERO, Vec2::new(300.0, 200.0), 4.0, Color::BLUE);
//!
//! let draw_calls = shapes.into_backend().finish().unwrap();
//! assert!(!draw_calls.is_empty());
//! ```

// Tessellation
mod curve;
mod emit;
mod flatten;
mod tessellator;

// Shapes and rendering
mod renderer;
mod shape;
mod texture;

// Queries
mod collision;

// Re-exports
pub use curve::*;
pub use flatten::*;
pub use tessellator::*;

pub use renderer::*;
pub use shape::Shape;
pub use texture::*;

pub use collision::*;

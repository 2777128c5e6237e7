//! Immediate-mode backend abstraction for Tessera.
//!
//! Shape tessellation in `tessera-shapes` never talks to a graphics API
//! directly. It streams vertices into an [`ImmediateBackend`], a small
//! begin/vertex/end contract modelled on classic immediate-mode GL. This
//! crate defines that contract together with:
//!
//! - [`Color`]: 8-bit RGBA color
//! - [`BackendFeatures`] and [`DrawMode`]: capability detection for choosing
//!   between textured quads and flat triangles
//! - [`VertexBatcher`]: a CPU backend that groups the stream into
//!   [`DrawCall`]s of `Pod` [`ShapeVertex`] data

mod backend;
mod batcher;
mod capability;
mod color;
mod features;
mod types;
mod vertex;

pub use backend::ImmediateBackend;
pub use batcher::{BatchError, BatchStats, VertexBatcher};
pub use capability::{DrawMode, detect_draw_mode, resolve_draw_mode};
pub use color::Color;
pub use features::BackendFeatures;
pub use types::{PrimitiveKind, TextureId};
pub use vertex::{DrawCall, ShapeVertex};

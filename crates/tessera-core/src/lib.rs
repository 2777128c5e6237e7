//! Tessera Core
//!
//! This crate contains the shared foundation of the Tessera shape renderer:
//! logging and profiling setup, configuration, math re-exports and the
//! [`Rect`](geometry::Rect) primitive used by both drawing and collision code.

pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;

pub use config::{Config, ProfilingMode};
pub use geometry::Rect;

//! Test utilities for Tessera.
//!
//! This crate provides testing infrastructure for shape tessellation code:
//!
//! - `MockBackend` - an [`ImmediateBackend`](tessera_render::ImmediateBackend)
//!   that records every call for later verification (requires `mock` feature)
//! - [`approx`] - float comparison helpers for geometry assertions
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use tessera_render::{Color, ImmediateBackend, PrimitiveKind};
//! use tessera_test_utils::MockBackend;
//!
//! let mut mock = MockBackend::new();
//! let log = mock.clone();
//!
//! mock.begin(PrimitiveKind::Lines);
//! mock.color(Color::RED);
//! mock.vertex2(0.0, 0.0);
//! mock.vertex2(5.0, 5.0);
//! mock.end();
//!
//! // Clones share the same call log
//! assert_eq!(log.count_begins(PrimitiveKind::Lines), 1);
//! assert_eq!(log.count_vertices(), 2);
//! assert!(log.is_balanced());
//! # }
//! ```
//!
//! # Shared Call Log
//!
//! Shape renderers take ownership of their backend. `MockBackend` keeps its
//! log behind `Arc<Mutex<..>>` so a test can hold a clone and inspect the
//! recorded stream after handing the original to the renderer.

pub mod approx;
#[cfg(feature = "mock")]
pub mod mock_backend;

pub use approx::*;
#[cfg(feature = "mock")]
pub use mock_backend::*;

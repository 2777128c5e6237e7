//! Recording mock of [`ImmediateBackend`].

use std::sync::Arc;

use glam::Vec2;
use parking_lot::Mutex;
use tessera_render::{BackendFeatures, Color, ImmediateBackend, PrimitiveKind, TextureId};

/// Records a backend call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    SetTexture(TextureId),
    Begin(PrimitiveKind),
    End,
    Color(Color),
    TexCoord(f32, f32),
    Normal(f32, f32, f32),
    Vertex(f32, f32),
}

/// A vertex reconstructed from the recorded state stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockVertex {
    pub position: Vec2,
    pub color: Color,
    pub tex_coord: Vec2,
}

/// One `begin`..`end` span reconstructed from the call log.
#[derive(Debug, Clone, PartialEq)]
pub struct MockBatch {
    pub kind: PrimitiveKind,
    pub texture: TextureId,
    pub vertices: Vec<MockVertex>,
}

impl MockBatch {
    /// Vertex positions only.
    pub fn positions(&self) -> Vec<Vec2> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    /// Number of complete primitives in the batch.
    pub fn primitive_count(&self) -> usize {
        self.vertices.len() / self.kind.vertices_per_primitive()
    }
}

/// Mock implementation of [`ImmediateBackend`] for testing.
///
/// # Borrow Checking Pattern: Shared Log
///
/// Renderers own their backend, so the test loses direct access once the
/// mock is moved in. The call log lives in an `Arc<Mutex<Vec<BackendCall>>>`;
/// cloning the mock shares the log, and the clone stays readable.
///
/// ## Why Mutex instead of RefCell?
/// - `Mutex` keeps the mock `Send + Sync`, so renderers built on it can be
///   moved across test threads
/// - `parking_lot::Mutex` has less overhead than `std::sync::Mutex`
///
/// # Example
///
/// ```rust
/// use tessera_render::{ImmediateBackend, PrimitiveKind};
/// use tessera_test_utils::MockBackend;
///
/// let mut mock = MockBackend::new();
/// mock.begin(PrimitiveKind::Triangles);
/// mock.vertex2(0.0, 0.0);
/// mock.vertex2(1.0, 0.0);
/// mock.vertex2(0.0, 1.0);
/// mock.end();
///
/// let batches = mock.batches();
/// assert_eq!(batches.len(), 1);
/// assert_eq!(batches[0].primitive_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockBackend {
    /// Recorded calls for verification
    calls: Arc<Mutex<Vec<BackendCall>>>,
    features: BackendFeatures,
}

impl MockBackend {
    /// Create a mock advertising [`BackendFeatures::standard`].
    pub fn new() -> Self {
        Self::with_features(BackendFeatures::standard())
    }

    /// Create a mock advertising the given features.
    pub fn with_features(features: BackendFeatures) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            features,
        }
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().clone()
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Count `begin` calls for a primitive kind.
    pub fn count_begins(&self, kind: PrimitiveKind) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, BackendCall::Begin(k) if *k == kind))
            .count()
    }

    /// Count all `begin` calls.
    pub fn count_all_begins(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, BackendCall::Begin(_)))
            .count()
    }

    /// Count `end` calls.
    pub fn count_ends(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, BackendCall::End))
            .count()
    }

    /// Count emitted vertices.
    pub fn count_vertices(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, BackendCall::Vertex(..)))
            .count()
    }

    /// Count `set_texture` calls.
    pub fn count_texture_binds(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, BackendCall::SetTexture(_)))
            .count()
    }

    /// Whether the log contains no calls at all.
    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    /// Whether every `begin` is closed by an `end` before the next `begin`.
    pub fn is_balanced(&self) -> bool {
        let mut open = false;
        for call in self.calls.lock().iter() {
            match call {
                BackendCall::Begin(_) if open => return false,
                BackendCall::Begin(_) => open = true,
                BackendCall::End if !open => return false,
                BackendCall::End => open = false,
                _ => {}
            }
        }
        !open
    }

    /// The texture bound after the last recorded call.
    pub fn bound_texture(&self) -> TextureId {
        self.calls
            .lock()
            .iter()
            .rev()
            .find_map(|call| match call {
                BackendCall::SetTexture(id) => Some(*id),
                _ => None,
            })
            .unwrap_or(TextureId::NONE)
    }

    /// All emitted vertex positions in order, across batches.
    pub fn positions(&self) -> Vec<Vec2> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                BackendCall::Vertex(x, y) => Some(Vec2::new(*x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Replay the log into `begin`..`end` spans with resolved vertex state.
    ///
    /// Vertices emitted outside a batch are ignored.
    pub fn batches(&self) -> Vec<MockBatch> {
        let mut batches = Vec::new();
        let mut current: Option<MockBatch> = None;
        let mut texture = TextureId::NONE;
        let mut color = Color::WHITE;
        let mut tex_coord = Vec2::ZERO;

        for call in self.calls.lock().iter() {
            match *call {
                BackendCall::SetTexture(id) => texture = id,
                BackendCall::Begin(kind) => {
                    if let Some(batch) = current.take() {
                        batches.push(batch);
                    }
                    current = Some(MockBatch {
                        kind,
                        texture,
                        vertices: Vec::new(),
                    });
                }
                BackendCall::End => {
                    if let Some(batch) = current.take() {
                        batches.push(batch);
                    }
                }
                BackendCall::Color(c) => color = c,
                BackendCall::TexCoord(u, v) => tex_coord = Vec2::new(u, v),
                BackendCall::Normal(..) => {}
                BackendCall::Vertex(x, y) => {
                    if let Some(batch) = current.as_mut() {
                        batch.vertices.push(MockVertex {
                            position: Vec2::new(x, y),
                            color,
                            tex_coord,
                        });
                    }
                }
            }
        }
        if let Some(batch) = current {
            batches.push(batch);
        }
        batches
    }

    fn record(&self, call: BackendCall) {
        self.calls.lock().push(call);
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ImmediateBackend for MockBackend {
    fn features(&self) -> BackendFeatures {
        self.features
    }

    fn set_texture(&mut self, texture: TextureId) {
        self.record(BackendCall::SetTexture(texture));
    }

    fn begin(&mut self, kind: PrimitiveKind) {
        self.record(BackendCall::Begin(kind));
    }

    fn end(&mut self) {
        self.record(BackendCall::End);
    }

    fn color(&mut self, color: Color) {
        self.record(BackendCall::Color(color));
    }

    fn tex_coord(&mut self, u: f32, v: f32) {
        self.record(BackendCall::TexCoord(u, v));
    }

    fn normal(&mut self, x: f32, y: f32, z: f32) {
        self.record(BackendCall::Normal(x, y, z));
    }

    fn vertex2(&mut self, x: f32, y: f32) {
        self.record(BackendCall::Vertex(x, y));
    }
}

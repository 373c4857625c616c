//! GPU-resident indexed meshes.
//!
//! An [IndexedMesh] owns a vertex array, a vertex buffer, and an index buffer on some [Backend].
//! Vertices are flat `f32` arrays whose stride decides which attributes (position, color, texture
//! coordinate) are present; see [VertexLayout].

mod attribute;
pub use attribute::*;

pub mod backend;
pub use backend::{Backend, RecordingBackend};

mod buffer;
pub use buffer::*;

mod error;
pub use error::*;

mod primitive;
pub use primitive::*;

pub mod shape;

//! The seam between meshes and the graphics API that stores them.
//!
//! [Backend] mirrors the handful of OpenGL entry points a mesh needs. Methods take `&self`: like
//! OpenGL itself, a backend is an implicit, thread-bound context, and any state it tracks lives
//! behind interior mutability.

#[cfg(feature = "gl")]
mod gl;
#[cfg(feature = "gl")]
pub use gl::GlBackend;

mod record;
pub use record::*;

use std::fmt::Debug;

use crate::{attribute::AttributeBinding, buffer::BufferType, Error};

/// A graphics context capable of storing and drawing indexed meshes.
pub trait Backend {
    /// Handle to a vertex array object: the saved binding of a vertex buffer, an index buffer,
    /// and an attribute layout.
    type VertexArray: Copy + Debug;
    /// Handle to a region of GPU memory.
    type Buffer: Copy + Debug;

    fn create_vertex_array(&self) -> Result<Self::VertexArray, Error>;
    fn create_buffer(&self) -> Result<Self::Buffer, Error>;

    fn bind_vertex_array(&self, array: Option<Self::VertexArray>);
    fn bind_buffer(&self, target: BufferType, buffer: Option<Self::Buffer>);

    /// Replace the contents of the buffer bound to `target` with `data`, which will be written once
    /// and drawn many times.
    fn buffer_data(&self, target: BufferType, data: &[u8]);

    /// Describe where an attribute lives within the bound vertex buffer.
    fn vertex_attrib_pointer(&self, binding: &AttributeBinding);
    fn enable_vertex_attrib_array(&self, slot: u32);

    /// Draw `count` `u32` indices from the bound index buffer as a triangle list, starting at its
    /// beginning. `count` is at most `i32::MAX`.
    fn draw_elements(&self, count: u32);

    fn delete_vertex_array(&self, array: Self::VertexArray);
    fn delete_buffer(&self, buffer: Self::Buffer);
}

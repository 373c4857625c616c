use glow::HasContext;

use super::Backend;
use crate::{attribute::AttributeBinding, buffer::BufferType, Error};

/// [Backend] over an OpenGL context loaded through [glow].
pub struct GlBackend(glow::Context);

impl std::fmt::Debug for GlBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlBackend")
            .field("version", self.0.version())
            .finish()
    }
}

impl GlBackend {
    /// # Safety
    ///
    /// `gl` must be current on the calling thread for as long as this backend, or any mesh
    /// created through it, is used.
    pub unsafe fn new(gl: glow::Context) -> Self {
        Self(gl)
    }

    pub fn gl(&self) -> &glow::Context {
        &self.0
    }

    pub fn into_inner(self) -> glow::Context {
        self.0
    }
}

impl Backend for GlBackend {
    type VertexArray = <glow::Context as HasContext>::VertexArray;
    type Buffer = <glow::Context as HasContext>::Buffer;

    fn create_vertex_array(&self) -> Result<Self::VertexArray, Error> {
        unsafe { self.0.create_vertex_array() }.map_err(Error::Backend)
    }

    fn create_buffer(&self) -> Result<Self::Buffer, Error> {
        unsafe { self.0.create_buffer() }.map_err(Error::Backend)
    }

    fn bind_vertex_array(&self, array: Option<Self::VertexArray>) {
        unsafe { self.0.bind_vertex_array(array) }
    }

    fn bind_buffer(&self, target: BufferType, buffer: Option<Self::Buffer>) {
        unsafe { self.0.bind_buffer(target.to_gl(), buffer) }
    }

    fn buffer_data(&self, target: BufferType, data: &[u8]) {
        unsafe {
            self.0
                .buffer_data_u8_slice(target.to_gl(), data, glow::STATIC_DRAW)
        }
    }

    fn vertex_attrib_pointer(&self, binding: &AttributeBinding) {
        unsafe {
            self.0.vertex_attrib_pointer_f32(
                binding.slot,
                binding.ty.size_elements() as i32,
                glow::FLOAT,
                false,
                // VertexLayout keeps strides within i32
                binding.stride as i32,
                binding.offset as i32,
            )
        }
    }

    fn enable_vertex_attrib_array(&self, slot: u32) {
        unsafe { self.0.enable_vertex_attrib_array(slot) }
    }

    fn draw_elements(&self, count: u32) {
        debug_assert!(i32::try_from(count).is_ok());
        unsafe {
            self.0
                .draw_elements(glow::TRIANGLES, count as i32, glow::UNSIGNED_INT, 0)
        }
    }

    fn delete_vertex_array(&self, array: Self::VertexArray) {
        unsafe { self.0.delete_vertex_array(array) }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { self.0.delete_buffer(buffer) }
    }
}

use std::{fmt::Debug, ops::Deref};

use crate::{attribute::VertexLayout, backend::Backend, buffer::BufferType, Error};

/// The backend objects owned by one [IndexedMesh].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandles<A, B> {
    pub vertex_array: A,
    pub vertex_buffer: B,
    pub index_buffer: B,
}

type HandlesOf<B> = MeshHandles<<B as Backend>::VertexArray, <B as Backend>::Buffer>;

/// Indexed vertex data uploaded to a [Backend], ready to be drawn as a triangle list.
///
/// The mesh owns its vertex array and both buffers. They are deleted exactly once, either by
/// [close](Self::close) or when the mesh is dropped.
pub struct IndexedMesh<C>
where
    C: Deref,
    C::Target: Backend,
{
    ctx: C,
    handles: HandlesOf<C::Target>,
    layout: VertexLayout,
    index_count: u32,
    released: bool,
}

impl<C> IndexedMesh<C>
where
    C: Deref,
    C::Target: Backend,
{
    /// Upload `vertices` and `indices` and configure the attribute layout implied by `stride`.
    ///
    /// `vertices` is a flat list of `stride`-component vertices; `indices` lists the vertices of
    /// each triangle, 3 per triangle.
    ///
    /// # Errors
    ///
    /// * [`EmptyIndices`](Error::EmptyIndices) if `indices` is empty
    /// * [`StrideTooSmall`](Error::StrideTooSmall) if `stride` < 3
    /// * [`StrideTooLarge`](Error::StrideTooLarge) if a vertex's byte size overflows an `i32`
    /// * [`RaggedVertices`](Error::RaggedVertices) if `vertices` isn't a whole number of vertices
    /// * [`PartialTriangle`](Error::PartialTriangle) if `indices` isn't a multiple of 3 long
    /// * [`TooManyIndices`](Error::TooManyIndices) if `indices` is longer than `i32::MAX`
    /// * [`IndexOutOfRange`](Error::IndexOutOfRange) if an index names a vertex that doesn't exist
    /// * [`Backend`](Error::Backend) if the backend fails to allocate an object; anything
    ///   allocated before the failure is released first
    ///
    /// Every input is checked before anything is allocated.
    #[tracing::instrument(
        skip(ctx, vertices, indices),
        fields(vertices = vertices.len(), indices = indices.len())
    )]
    pub fn new(ctx: C, vertices: &[f32], stride: u32, indices: &[u32]) -> Result<Self, Error> {
        if indices.is_empty() {
            return Err(Error::EmptyIndices.logged());
        }
        let layout = VertexLayout::from_stride(stride)?;
        let vertex_count = layout.vertex_count(vertices)?;
        let index_count = Self::index_count_of(indices)?;
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(Error::IndexOutOfRange {
                index,
                vertices: vertex_count,
            }
            .logged());
        }

        let handles = Self::allocate(&*ctx)?;
        // owned from here on, so the handles are released even if a backend call unwinds
        let mesh = Self {
            ctx,
            handles,
            layout,
            index_count,
            released: false,
        };
        let gl = mesh.context();

        gl.bind_vertex_array(Some(handles.vertex_array));

        gl.bind_buffer(BufferType::Array, Some(handles.vertex_buffer));
        gl.buffer_data(BufferType::Array, bytemuck::cast_slice(vertices));

        gl.bind_buffer(BufferType::ElementArray, Some(handles.index_buffer));
        gl.buffer_data(BufferType::ElementArray, bytemuck::cast_slice(indices));

        for binding in layout.bindings() {
            gl.vertex_attrib_pointer(&binding);
            gl.enable_vertex_attrib_array(binding.slot);
        }

        tracing::debug!(?handles, index_count, "created mesh");
        Ok(mesh)
    }

    /// Length of `indices`, if it's a whole number of triangles that fits in one draw call.
    fn index_count_of(indices: &[u32]) -> Result<u32, Error> {
        if indices.len() % 3 != 0 {
            return Err(Error::PartialTriangle(indices.len()).logged());
        }
        i32::try_from(indices.len())
            .map(|count| count as u32)
            .map_err(|_| Error::TooManyIndices(indices.len()).logged())
    }

    /// Allocate the vertex array, vertex buffer, and index buffer, in that order.
    fn allocate(gl: &C::Target) -> Result<HandlesOf<C::Target>, Error> {
        let vertex_array = gl.create_vertex_array().map_err(Error::logged)?;
        let vertex_buffer = match gl.create_buffer() {
            Ok(b) => b,
            Err(e) => {
                gl.delete_vertex_array(vertex_array);
                return Err(e.logged());
            }
        };
        let index_buffer = match gl.create_buffer() {
            Ok(b) => b,
            Err(e) => {
                gl.delete_vertex_array(vertex_array);
                gl.delete_buffer(vertex_buffer);
                return Err(e.logged());
            }
        };
        Ok(MeshHandles {
            vertex_array,
            vertex_buffer,
            index_buffer,
        })
    }

    /// Bind this mesh's vertex array, making it the target of subsequent draw calls.
    #[inline]
    pub fn bind(&self) {
        self.ctx.bind_vertex_array(Some(self.handles.vertex_array));
    }

    /// Draw every index of this mesh.
    pub fn draw(&self) {
        self.bind();
        self.ctx.draw_elements(self.index_count);
    }

    /// Release this mesh's backend objects now rather than at the end of its scope.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if std::mem::replace(&mut self.released, true) {
            return;
        }
        self.ctx.delete_vertex_array(self.handles.vertex_array);
        self.ctx.delete_buffer(self.handles.vertex_buffer);
        self.ctx.delete_buffer(self.handles.index_buffer);
        tracing::debug!(handles = ?self.handles, "released mesh");
    }

    #[inline(always)]
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    #[inline(always)]
    pub fn layout(&self) -> VertexLayout {
        self.layout
    }

    #[inline(always)]
    pub fn stride(&self) -> u32 {
        self.layout.stride()
    }

    #[inline(always)]
    pub fn handles(&self) -> &HandlesOf<C::Target> {
        &self.handles
    }

    pub fn context(&self) -> &C::Target {
        &self.ctx
    }
}

impl<C> Drop for IndexedMesh<C>
where
    C: Deref,
    C::Target: Backend,
{
    fn drop(&mut self) {
        self.release();
    }
}

impl<C> Debug for IndexedMesh<C>
where
    C: Deref,
    C::Target: Backend,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexedMesh")
            .field("handles", &self.handles)
            .field("layout", &self.layout)
            .field("index_count", &self.index_count)
            .finish_non_exhaustive()
    }
}

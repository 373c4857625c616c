/// Errors related to [IndexedMeshes](crate::IndexedMesh).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Cannot construct a mesh from an empty index list; at least one index is required")]
    EmptyIndices,
    #[error("Vertex stride of {0} is too small to hold a position (3 components)")]
    StrideTooSmall(u32),
    #[error("Vertex stride of {0} components does not fit in a signed 32-bit byte count")]
    StrideTooLarge(u32),
    #[error("Vertex data of length {len} is not a whole number of vertices of stride {stride}")]
    RaggedVertices { len: usize, stride: u32 },
    #[error("Expected {expected} vertices, found {found}")]
    VertexCount { expected: usize, found: usize },
    #[error("Index list of length {0} is not a whole number of triangles")]
    PartialTriangle(usize),
    #[error("Index list of length {0} does not fit in a single draw call")]
    TooManyIndices(usize),
    #[error("Vertex index out of range: 0..{vertices} ∌ {index}")]
    IndexOutOfRange { index: u32, vertices: usize },
    #[error("Graphics backend error: {0}")]
    Backend(String),
}

impl Error {
    /// Emit `self` as an error event, then hand it back for returning.
    pub(crate) fn logged(self) -> Self {
        tracing::error!(error = %self, "mesh construction failed");
        self
    }
}

/// The binding point a buffer is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferType {
    /// Per-vertex attribute data
    Array,
    /// Vertex indices
    ElementArray,
}

impl BufferType {
    pub const fn to_gl(self) -> u32 {
        match self {
            Self::Array => 34962,
            Self::ElementArray => 34963,
        }
    }
}

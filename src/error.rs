/// Errors related to [Vectors](crate::Vector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Component index out of bounds: 0..{len} ∌ {index}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("Attempted to normalize a vector of length zero")]
    ZeroLength,
}

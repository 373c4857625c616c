//! Vertex attribute layout.
//!
//! Vertices are read from a flat `f32` array with a fixed attribute order: position (3), color
//! (4), texture coordinate (2). Which attributes are present is decided by the stride alone:
//!
//! | stride | attributes |
//! |---|---|
//! | 3 | position |
//! | 4..=7 | position, color |
//! | 8.. | position, color, texcoord |
//!
//! The thresholds match the `layout (location = N)` bindings shaders are written against.

use std::mem::size_of;

use static_assertions::const_assert_eq;

use crate::Error;

/// Bytes per vertex component; every attribute is made of `f32`s.
const COMPONENT_SIZE: u32 = size_of::<f32>() as u32;

/// The shape of a single attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Vec2,
    Vec3,
    Vec4,
}

impl AttributeType {
    pub const fn size_elements(self) -> usize {
        match self {
            AttributeType::Vec2 => 2,
            AttributeType::Vec3 => 3,
            AttributeType::Vec4 => 4,
        }
    }
}

/// What a vertex attribute means, and where it lives within a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeUsage {
    Position,
    Color,
    Texcoord,
}

impl AttributeUsage {
    pub const ALL: [AttributeUsage; 3] = [Self::Position, Self::Color, Self::Texcoord];

    /// Shader input location of this attribute.
    pub const fn slot(self) -> u32 {
        match self {
            Self::Position => 0,
            Self::Color => 1,
            Self::Texcoord => 2,
        }
    }

    pub const fn ty(self) -> AttributeType {
        match self {
            Self::Position => AttributeType::Vec3,
            Self::Color => AttributeType::Vec4,
            Self::Texcoord => AttributeType::Vec2,
        }
    }

    /// Offset of this attribute from the start of a vertex, in components.
    pub const fn offset(self) -> usize {
        match self {
            Self::Position => 0,
            Self::Color => 3,
            Self::Texcoord => 7,
        }
    }

    /// Whether vertices of `stride` components carry this attribute.
    pub const fn present_in(self, stride: u32) -> bool {
        // an attribute is present once the stride passes the end of the one before it
        stride as usize > self.offset()
    }
}

// attributes are packed back to back
const_assert_eq!(
    AttributeUsage::Position.offset() + AttributeUsage::Position.ty().size_elements(),
    AttributeUsage::Color.offset()
);
const_assert_eq!(
    AttributeUsage::Color.offset() + AttributeUsage::Color.ty().size_elements(),
    AttributeUsage::Texcoord.offset()
);
const_assert_eq!(
    AttributeUsage::Texcoord.offset() + AttributeUsage::Texcoord.ty().size_elements(),
    VertexLayout::FULL_STRIDE as usize
);

/// Everything a backend needs to point one shader input at a vertex buffer of `f32`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeBinding {
    pub usage: AttributeUsage,
    pub slot: u32,
    pub ty: AttributeType,
    /// Distance between consecutive vertices, in bytes; at most `i32::MAX`
    pub stride: u32,
    /// Offset of the first value from the start of the buffer, in bytes
    pub offset: u32,
}

/// Stride-driven interpretation of a flat `f32` vertex array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexLayout {
    stride: u32,
}

impl VertexLayout {
    /// Smallest stride that can hold a position
    pub const MIN_STRIDE: u32 = 3;
    /// Stride of a vertex carrying every attribute
    pub const FULL_STRIDE: u32 = 9;

    /// Construct a layout for vertices `stride` components long.
    ///
    /// # Errors
    ///
    /// * [`StrideTooSmall`](Error::StrideTooSmall) if `stride` < [Self::MIN_STRIDE]
    /// * [`StrideTooLarge`](Error::StrideTooLarge) if a vertex of `stride` components takes more
    ///   than `i32::MAX` bytes, which graphics APIs can't express
    pub fn from_stride(stride: u32) -> Result<Self, Error> {
        if stride < Self::MIN_STRIDE {
            return Err(Error::StrideTooSmall(stride).logged());
        }
        let fits = stride
            .checked_mul(COMPONENT_SIZE)
            .is_some_and(|bytes| i32::try_from(bytes).is_ok());
        if !fits {
            return Err(Error::StrideTooLarge(stride).logged());
        }
        Ok(Self { stride })
    }

    /// Components per vertex.
    #[inline(always)]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Bytes per vertex.
    #[inline]
    pub fn stride_bytes(&self) -> u32 {
        // bounded by from_stride
        self.stride * COMPONENT_SIZE
    }

    #[inline]
    pub fn has(&self, usage: AttributeUsage) -> bool {
        usage.present_in(self.stride)
    }

    /// Number of whole vertices in `vertices`.
    ///
    /// # Errors
    ///
    /// * [`RaggedVertices`](Error::RaggedVertices) if `vertices` doesn't divide evenly by the stride
    pub fn vertex_count(&self, vertices: &[f32]) -> Result<usize, Error> {
        let stride = self.stride as usize;
        if vertices.len() % stride != 0 {
            return Err(Error::RaggedVertices {
                len: vertices.len(),
                stride: self.stride,
            }
            .logged());
        }
        Ok(vertices.len() / stride)
    }

    /// The bindings for every attribute present in this layout, in slot order.
    pub fn bindings(&self) -> impl Iterator<Item = AttributeBinding> {
        let layout = *self;
        AttributeUsage::ALL
            .into_iter()
            .filter(move |usage| layout.has(*usage))
            .map(move |usage| AttributeBinding {
                usage,
                slot: usage.slot(),
                ty: usage.ty(),
                stride: layout.stride_bytes(),
                offset: usage.offset() as u32 * COMPONENT_SIZE,
            })
    }
}

//! Common 2D shapes.
//!
//! Coordinates are on the Cartesian plane: the origin is the center of the viewport, y points up,
//! and both axes span `-1.0..=1.0`.

use std::ops::Deref;

use crate::{attribute::VertexLayout, backend::Backend, Error, IndexedMesh};

/// Draw order of a lone triangle.
pub const TRIANGLE_INDICES: [u32; 3] = [0, 1, 2];

/// Draw order of a quad whose vertices are given top-left, bottom-left, top-right, bottom-right.
pub const QUAD_INDICES: [u32; 6] = [
    0, 1, 3, // top left, bottom left, bottom right
    0, 2, 3, // top left, top right, bottom right
];

/// A position-only triangle.
pub fn triangle<C>(ctx: C, vertices: [f32; 9]) -> Result<IndexedMesh<C>, Error>
where
    C: Deref,
    C::Target: Backend,
{
    triangle_with_indices(ctx, vertices, TRIANGLE_INDICES)
}

/// A position-only triangle, drawn in the order given by `indices`.
pub fn triangle_with_indices<C>(
    ctx: C,
    vertices: [f32; 9],
    indices: [u32; 3],
) -> Result<IndexedMesh<C>, Error>
where
    C: Deref,
    C::Target: Backend,
{
    IndexedMesh::new(ctx, &vertices, VertexLayout::MIN_STRIDE, &indices)
}

/// A quad from 4 vertices of `stride` components, ordered top-left, bottom-left, top-right,
/// bottom-right.
///
/// # Errors
///
/// * [`VertexCount`](Error::VertexCount) if `vertices` doesn't hold exactly 4 vertices
/// * anything [IndexedMesh::new] returns
pub fn rectangle<C>(ctx: C, vertices: &[f32], stride: u32) -> Result<IndexedMesh<C>, Error>
where
    C: Deref,
    C::Target: Backend,
{
    rectangle_with_indices(ctx, vertices, stride, QUAD_INDICES)
}

/// A quad from 4 vertices of `stride` components, drawn in the order given by `indices`.
pub fn rectangle_with_indices<C>(
    ctx: C,
    vertices: &[f32],
    stride: u32,
    indices: [u32; 6],
) -> Result<IndexedMesh<C>, Error>
where
    C: Deref,
    C::Target: Backend,
{
    let found = VertexLayout::from_stride(stride)?.vertex_count(vertices)?;
    if found != 4 {
        return Err(Error::VertexCount { expected: 4, found }.logged());
    }
    IndexedMesh::new(ctx, vertices, stride, &indices)
}

/// Position-only vertices of the axis-aligned rectangle whose top-left corner is `position`.
pub fn rectangle_vertices([x, y]: [f32; 2], [width, height]: [f32; 2]) -> [f32; 12] {
    #[rustfmt::skip]
    let res = [
        x,         y,          0.0, // top left
        x,         y - height, 0.0, // bottom left
        x + width, y,          0.0, // top right
        x + width, y - height, 0.0, // bottom right
    ];
    res
}

/// A position-only rectangle whose top-left corner is `position`.
pub fn rectangle_from_bounds<C>(
    ctx: C,
    position: [f32; 2],
    dimensions: [f32; 2],
) -> Result<IndexedMesh<C>, Error>
where
    C: Deref,
    C::Target: Backend,
{
    rectangle(
        ctx,
        &rectangle_vertices(position, dimensions),
        VertexLayout::MIN_STRIDE,
    )
}

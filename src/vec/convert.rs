//! Conversions between vectors of different arities.
//!
//! Widening is also available implicitly, through `From` a smaller vector plus its trailing
//! components: `Vec3::from((vec2(1, 2), 3))`. Narrowing is only ever explicit.

use super::Vector;

/// Construct a `Vector<T, N>` from the components of `v` followed by `extra`.
///
/// `N` must equal `M + K`; anything else fails to compile.
#[inline]
pub fn widen<T: Copy, const M: usize, const K: usize, const N: usize>(
    v: Vector<T, M>,
    extra: [T; K],
) -> Vector<T, N> {
    const { assert!(M + K == N, "widened arity must be the sum of its parts") };
    Vector::from_fn(|i| if i < M { v.0[i] } else { extra[i - M] })
}

/// Construct a `Vector<T, N>` from the first `N` components of `v`, discarding the rest.
///
/// `N` must not exceed `M`; anything else fails to compile.
#[inline]
pub fn truncate<T: Copy, const M: usize, const N: usize>(v: Vector<T, M>) -> Vector<T, N> {
    const { assert!(N <= M, "cannot truncate a vector to a larger arity") };
    Vector::from_fn(|i| v.0[i])
}

/// Flatten a sequence of vectors into their components, in order.
///
/// Useful for packing per-vertex attributes into the flat arrays a GPU buffer expects.
pub fn flatten<T: Copy, const N: usize>(vectors: impl IntoIterator<Item = Vector<T, N>>) -> Vec<T> {
    vectors.into_iter().flat_map(Vector::into_array).collect()
}

impl<T: Copy, const M: usize> Vector<T, M> {
    /// See [widen].
    #[inline]
    pub fn widen<const K: usize, const N: usize>(self, extra: [T; K]) -> Vector<T, N> {
        widen(self, extra)
    }

    /// See [truncate].
    #[inline]
    pub fn truncate<const N: usize>(self) -> Vector<T, N> {
        truncate(self)
    }
}

impl<T: Copy> From<(Vector<T, 1>, T)> for Vector<T, 2> {
    #[inline]
    fn from((v, y): (Vector<T, 1>, T)) -> Self {
        widen(v, [y])
    }
}

impl<T: Copy> From<(Vector<T, 1>, T, T)> for Vector<T, 3> {
    #[inline]
    fn from((v, y, z): (Vector<T, 1>, T, T)) -> Self {
        widen(v, [y, z])
    }
}

impl<T: Copy> From<(Vector<T, 2>, T)> for Vector<T, 3> {
    #[inline]
    fn from((v, z): (Vector<T, 2>, T)) -> Self {
        widen(v, [z])
    }
}

impl<T: Copy> From<(Vector<T, 1>, T, T, T)> for Vector<T, 4> {
    #[inline]
    fn from((v, y, z, w): (Vector<T, 1>, T, T, T)) -> Self {
        widen(v, [y, z, w])
    }
}

impl<T: Copy> From<(Vector<T, 2>, T, T)> for Vector<T, 4> {
    #[inline]
    fn from((v, z, w): (Vector<T, 2>, T, T)) -> Self {
        widen(v, [z, w])
    }
}

impl<T: Copy> From<(Vector<T, 3>, T)> for Vector<T, 4> {
    #[inline]
    fn from((v, w): (Vector<T, 3>, T)) -> Self {
        widen(v, [w])
    }
}

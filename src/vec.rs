mod convert;
mod interop;
mod metric;
mod ops;

pub use convert::*;

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use num_traits::AsPrimitive;
use tetrad_common::Number;

use crate::Error;

/// An ordered tuple of `N` components of type `T`.
///
/// The component count is part of the type; there is no way to resize a vector in place. Use
/// [widen] and [truncate] to move between arities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

pub type Vec1<T> = Vector<T, 1>;
pub type Vec2<T> = Vector<T, 2>;
pub type Vec3<T> = Vector<T, 3>;
pub type Vec4<T> = Vector<T, 4>;

#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

impl<T, const N: usize> Vector<T, N> {
    /// Number of components in this vector type.
    pub const LEN: usize = N;

    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        Self(components)
    }

    /// Construct a vector whose `i`th component is `f(i)`.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self(std::array::from_fn(f))
    }

    /// Borrow the component at `index`.
    ///
    /// # Errors
    ///
    /// * [`IndexOutOfBounds`](Error::IndexOutOfBounds) if `index >= N`
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.0.get(index).ok_or_else(|| out_of_bounds::<N>(index))
    }

    /// Mutably borrow the component at `index`.
    ///
    /// # Errors
    ///
    /// * [`IndexOutOfBounds`](Error::IndexOutOfBounds) if `index >= N`
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.0.get_mut(index).ok_or_else(|| out_of_bounds::<N>(index))
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline(always)]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Apply `f` to each component.
    #[inline]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }
}

fn out_of_bounds<const N: usize>(index: usize) -> Error {
    #[cfg(feature = "tracing")]
    tracing::trace!(index, len = N, "vector component access out of bounds");
    Error::IndexOutOfBounds { index, len: N }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Construct a vector with every component set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// Convert each component to `U`, as with `as`.
    ///
    /// This is how vectors of differing component types are combined: `a + b.cast()`.
    #[inline]
    pub fn cast<U: Copy + 'static>(self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
    {
        self.map(|c| c.as_())
    }
}

impl<T: Number, const N: usize> Vector<T, N> {
    #[inline]
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

macro_rules! impl_accessors {
    ($N:literal => $($name:ident, $name_mut:ident: $i:literal);+) => {
        impl<T: Copy> Vector<T, $N> {
            $(
                #[inline(always)]
                pub fn $name(&self) -> T {
                    self.0[$i]
                }
            )+
        }

        impl<T> Vector<T, $N> {
            $(
                #[inline(always)]
                pub fn $name_mut(&mut self) -> &mut T {
                    &mut self.0[$i]
                }
            )+
        }
    };
}

impl_accessors!(1 => x, x_mut: 0);
impl_accessors!(2 => x, x_mut: 0; y, y_mut: 1);
impl_accessors!(3 => x, x_mut: 0; y, y_mut: 1; z, z_mut: 2);
impl_accessors!(4 => x, x_mut: 0; y, y_mut: 1; z, z_mut: 2; w, w_mut: 3);

/// # Panics
///
/// * `index >= N`; use [Vector::get] to handle that case instead.
impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self(components)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'v, T, const N: usize> IntoIterator for &'v Vector<T, N> {
    type Item = &'v T;
    type IntoIter = std::slice::Iter<'v, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            c.fmt(f)?;
        }
        f.write_str(")")
    }
}

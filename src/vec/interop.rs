//! Conversions to and from [nalgebra] types.

use nalgebra::{Point, SVector, Scalar};

use super::Vector;

impl<T: Scalar, const N: usize> From<Vector<T, N>> for SVector<T, N> {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        SVector::from(value.0)
    }
}

impl<T: Scalar, const N: usize> From<SVector<T, N>> for Vector<T, N> {
    #[inline]
    fn from(value: SVector<T, N>) -> Self {
        Vector::from_fn(|i| value[i].clone())
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for Point<T, N> {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        Point::from(value.0)
    }
}

impl<T: Scalar, const N: usize> From<Point<T, N>> for Vector<T, N> {
    #[inline]
    fn from(value: Point<T, N>) -> Self {
        Vector::from_fn(|i| value[i].clone())
    }
}

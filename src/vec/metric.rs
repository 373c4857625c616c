use tetrad_common::{Number, Real};

use super::Vector;
use crate::Error;

impl<T: Number, const N: usize> Vector<T, N> {
    /// Sum of the products of corresponding components.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.0
            .iter()
            .zip(&rhs.0)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: Real, const N: usize> Vector<T, N> {
    /// Euclidean norm. For a single-component vector, this is the absolute value of that
    /// component.
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        (*other - *self).length()
    }

    /// Construct a vector pointing the same way as `self`, with a [length](Self::length) of 1.
    ///
    /// # Errors
    ///
    /// * [`ZeroLength`](Error::ZeroLength) if `self` has length 0, as there is no direction to
    ///   preserve
    pub fn normalized(&self) -> Result<Self, Error> {
        let len = self.length();
        if len == T::zero() {
            #[cfg(feature = "tracing")]
            tracing::debug!(vector = ?self, "refusing to normalize zero-length vector");
            return Err(Error::ZeroLength);
        }
        Ok(self.map(|c| c / len))
    }
}

impl<T: Number> Vector<T, 3> {
    /// A vector orthogonal to both `self` and `rhs`, following the right-hand rule.
    ///
    /// With unsigned component types this can underflow.
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = rhs.0;
        Vector([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

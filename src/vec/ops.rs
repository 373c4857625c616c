use std::ops::Neg;

use tetrad_common::{impl_add_sub, impl_mul_div, item_with, Number};

use super::Vector;

/// Combine each component of `rhs` into the matching component of `lhs`; components of `lhs`
/// past `M` are left as they are.
#[inline]
fn zip_assign<T: Copy, const N: usize, const M: usize>(
    lhs: &mut [T; N],
    rhs: [T; M],
    f: impl Fn(T, T) -> T,
) {
    const { assert!(M <= N, "right-hand vector has more components than the left") };
    for (l, r) in lhs.iter_mut().zip(rhs) {
        *l = f(*l, r);
    }
}

// vector (op) vector, for right-hand arities up to the left-hand arity
impl_add_sub!([T: Number, const N: usize, const M: usize] self: Vector<T, N>, rhs: Vector<T, M>;
    ({
        let mut res = self.to_owned();
        zip_assign(&mut res.0, rhs.to_owned().0, |a, b| a + b);
        res
    }; zip_assign(&mut self.0, rhs.to_owned().0, |a, b| a + b));
    ({
        let mut res = self.to_owned();
        zip_assign(&mut res.0, rhs.to_owned().0, |a, b| a - b);
        res
    }; zip_assign(&mut self.0, rhs.to_owned().0, |a, b| a - b)));

// vector (op) scalar, broadcast over every component
item_with! {S: f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize =>
impl_add_sub! {[const N: usize] self: Vector<S, N>, rhs: S;
    (self.map(|c| c + rhs.to_owned()); self.0.iter_mut().for_each(|c| *c += rhs.to_owned()));
    (self.map(|c| c - rhs.to_owned()); self.0.iter_mut().for_each(|c| *c -= rhs.to_owned()))}
}

item_with! {S: f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize =>
impl_mul_div! {[const N: usize] self: Vector<S, N>, rhs: S;
    (self.map(|c| c * rhs.to_owned()); self.0.iter_mut().for_each(|c| *c *= rhs.to_owned()));
    (self.map(|c| c / rhs.to_owned()); self.0.iter_mut().for_each(|c| *c /= rhs.to_owned()))}
}

impl<T: Number + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}

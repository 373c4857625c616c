//! Color vectors.
//!
//! Colors are plain [Vectors](Vector); these aliases only name the intent.

use crate::{widen, Vector};

pub type Rgb<C> = Vector<C, 3>;
pub type Rgba<C> = Vector<C, 4>;

#[inline]
pub const fn rgb<C>(r: C, g: C, b: C) -> Rgb<C> {
    Vector::new([r, g, b])
}

#[inline]
pub const fn rgba<C>(r: C, g: C, b: C, a: C) -> Rgba<C> {
    Vector::new([r, g, b, a])
}

impl<C: Copy> Vector<C, 3> {
    /// Append an alpha channel to an [Rgb] color.
    #[inline]
    pub fn with_alpha(self, alpha: C) -> Rgba<C> {
        widen(self, [alpha])
    }
}

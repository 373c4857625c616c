use std::fmt::Debug;

use num_traits::{Num, NumCast};

pub mod macros;

/// Trait for types which can act as the components of a vector.
pub trait Number: Num + NumCast + PartialOrd + Copy + Debug + 'static {}
impl<P> Number for P where P: Num + NumCast + PartialOrd + Copy + Debug + 'static {}

/// Trait for floating-point component types, so that metric operations can be generic over
/// {f32, f64}.
pub trait Real: Number + num_traits::Float {}
impl<P> Real for P where P: Number + num_traits::Float {}

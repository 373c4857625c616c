//! Fixed-arity numeric vectors for positions, colors, and texture coordinates.
//!
//! A single generic [Vector] covers every arity; [Vec1] through [Vec4] name the ones that come up
//! in vertex data. Widening ([widen], or `From` a smaller vector plus trailing components) and
//! narrowing ([truncate]) are spelled out as conversions, so dropping data never happens by
//! accident.
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod color;
pub mod error;
mod vec;

pub use error::Error;
pub use vec::*;

pub use tetrad_common::{Number, Real};

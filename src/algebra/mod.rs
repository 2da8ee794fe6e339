//! Floating point support for option values.
//!
//! Option vectors and floating point solver parameters are generic over
//! any type implementing [`FloatT`].  Implementations are provided for
//! `f32` and `f64`.

mod floats;
pub use floats::*;

//! MOSEK options resolver implementation.
//!
//! This module provides the [resolver](MosekOptionsResolver) for MOSEK
//! parameters together with its [settings](ResolverSettings) and the
//! [options vector](OptionsVector) it consumes.

mod print;
mod resolver;
mod settings;
mod vector;

pub use resolver::*;
pub use settings::*;
pub use vector::*;

//configure serde I/O
#[cfg(feature = "serde")]
mod json;

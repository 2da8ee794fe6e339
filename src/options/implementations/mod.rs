//! Resolver implementations.
//!
//! Only MOSEK is currently supported.

pub mod mosek;

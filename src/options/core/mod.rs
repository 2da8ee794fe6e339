// package together all of the following and re-export
// in a partially flattened structure :
// : parameter values and mappings
// : symbolic constants
// : user hooks
// : resolver traits and errors

pub mod hooks;
pub mod symbols;
pub mod traits;

mod params;
mod settings;
pub use params::*;
pub use settings::*;

use crate::algebra::*;
use crate::options::OptionsVector;
use thiserror::Error;

/// Second input of the resolver: where option values beyond the
/// defaults come from.
#[derive(Debug, Clone, Copy, Default)]
pub enum Selector<'a, T: FloatT> {
    /// defaults only
    #[default]
    None,
    /// derive options from an options vector.  A non-zero hook selector
    /// field in the vector additionally runs the corresponding hook.
    Vector(&'a OptionsVector<T>),
    /// run the named hook on the defaults
    HookName(&'a str),
}

impl<'a, T: FloatT> From<&'a OptionsVector<T>> for Selector<'a, T> {
    fn from(v: &'a OptionsVector<T>) -> Self {
        Selector::Vector(v)
    }
}

impl<'a, T: FloatT> From<&'a str> for Selector<'a, T> {
    fn from(name: &'a str) -> Self {
        Selector::HookName(name)
    }
}

/// Error type returned by option resolution.
///
/// Malformed options vector entries are never an error.   Only problems
/// with the external collaborators are reported.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The symbol table could not be obtained
    #[error("unable to obtain solver symbol table")]
    SymbolTable(#[from] symbols::SymbolTableError),
    /// The symbol table lacks a constant the resolver requires
    #[error("symbol table has no entry for {0}")]
    MissingSymbol(&'static str),
    /// A requested hook is missing or failed
    #[error("user options hook \"{name}\" failed")]
    Hook {
        name: String,
        #[source]
        source: hooks::HookError,
    },
}

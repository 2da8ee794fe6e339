//! Options resolver main module.
//!
//! This module contains the main types and traits for resolving solver
//! parameters.  Parameters are built up from four sources, each able to
//! replace values set by the ones before it:
//!
//! 1. built-in defaults
//! 2. an [options vector](OptionsVector), when one is given as the selector
//! 3. a user hook, either named directly by the selector or chosen by the
//!    options vector
//! 4. an explicit override mapping
//!
//! The [MOSEK implementation](crate::options::implementations::mosek) is
//! exposed at the top level of this module.

// internal module structure
pub(crate) mod core;
pub mod implementations;

//Here we expose only part of the internals
//and rearrange public modules a bit to give a more
//user friendly API

pub use crate::options::core::{ParamValue, ParameterMapping, ResolveError, Selector, SettingsError};

//symbol tables and hooks
pub use crate::options::core::hooks::{
    hook_name, BoxedHookFn, HookError, HookFn, HookInvoker, HookRegistry,
};
pub use crate::options::core::symbols::{
    MosekSymbols, Optimizer, SymbolTable, SymbolTableError, SymbolTableProvider,
};

//user facing traits required to interact with the resolver
pub use crate::options::core::traits;
pub use crate::options::core::traits::{OptionsPrint, OptionsResolver, Settings};
#[cfg(feature = "serde")]
pub use crate::options::core::traits::ParamsJSONReadWrite;

pub use crate::options::implementations::mosek;
pub use crate::options::implementations::mosek::*;

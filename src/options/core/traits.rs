//! Required traits for types providing an options resolver implementation.
//!
//! Users normally need none of these directly.  The
//! [MOSEK implementation](crate::options::implementations::mosek) provides
//! a resolver and settings implementing them.

use super::{ParameterMapping, ResolveError, Selector, SettingsError};
use crate::algebra::*;

/// Settings for an options resolver.
pub trait Settings<T: FloatT> {
    /// Checks that the settings are valid.
    fn validate(&self) -> Result<(), SettingsError>;

    /// Whether resolved options should be echoed to the print target.
    fn verbose(&self) -> bool;
}

/// Produces a solver parameter mapping from a selector and overrides.
pub trait OptionsResolver<T: FloatT> {
    /// Resolve parameters.  Sources are applied in the order defaults,
    /// options vector, user hook and finally `overrides`, with later
    /// sources replacing values from earlier ones.
    fn resolve(
        &self,
        overrides: Option<&ParameterMapping<T>>,
        selector: Selector<'_, T>,
    ) -> Result<ParameterMapping<T>, ResolveError>;
}

/// Printing of resolved options.
pub trait OptionsPrint<T: FloatT> {
    /// Print a listing of `params`.   Does nothing unless the
    /// resolver settings are verbose.
    fn print_options(&mut self, params: &ParameterMapping<T>) -> std::io::Result<()>;
}

/// Reading and writing of resolved parameters as JSON.
#[cfg(feature = "serde")]
pub trait ParamsJSONReadWrite: Sized {
    /// Write the parameters to a file
    fn write_to_file(&self, file: &mut std::fs::File) -> Result<(), std::io::Error>;

    /// Read parameters previously written with `write_to_file`
    fn read_from_file(file: &mut std::fs::File) -> Result<Self, std::io::Error>;
}

//! __mosek-options__ resolves the parameter set passed to the MOSEK
//! optimizer from several, possibly conflicting, sources:
//!
//! * built-in defaults,
//! * a MATPOWER options vector,
//! * a user supplied hook that may rewrite the parameters arbitrarily,
//! * an explicit override mapping, which always wins.
//!
//! The resolver only decides *which* value wins.  It does not check that
//! the resolved parameters make sense to the solver, and it never calls the
//! solver itself.
//!
//! ```
//! use mosek_options::options::*;
//!
//! fn tighter_gap(
//!     mut params: ParameterMapping<f64>,
//!     _ppopt: Option<&OptionsVector<f64>>,
//! ) -> Result<ParameterMapping<f64>, HookError> {
//!     params.set_float(MSK_DPAR_INTPNT_TOL_REL_GAP, 1e-10);
//!     Ok(params)
//! }
//!
//! let mut hooks = HookRegistry::new();
//! hooks.register_numbered("mosek_user_options_", 3, tighter_gap);
//!
//! let resolver =
//!     MosekOptionsResolver::new(MosekSymbols, hooks, ResolverSettings::default()).unwrap();
//!
//! let ppopt = OptionsVectorBuilder::default().user_opt(3.).build().unwrap();
//! let overrides: ParameterMapping<f64> = [(MSK_IPAR_OPTIMIZER, 4)].into_iter().collect();
//!
//! let params = resolver
//!     .resolve(Some(&overrides), Selector::Vector(&ppopt))
//!     .unwrap();
//! assert_eq!(params.get(MSK_IPAR_OPTIMIZER), Some(&ParamValue::Int(4)));
//! assert_eq!(params.get(MSK_DPAR_INTPNT_TOL_REL_GAP), Some(&ParamValue::Float(1e-10)));
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
pub mod io;
pub mod options;

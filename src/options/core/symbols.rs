//! Symbolic solver constants.
//!
//! Enumeration choices in an options vector are encoded as integers whose
//! meaning is given by the solver's table of symbolic constants.  The
//! resolver consumes the table through [`SymbolTableProvider`].

use lazy_static::lazy_static;
use std::collections::HashMap;
use thiserror::Error;

/// Error type returned by a [`SymbolTableProvider`] that cannot supply
/// its table.
#[derive(Error, Debug)]
pub enum SymbolTableError {
    /// The provider's backing source is not available (e.g. no solver
    /// installation or license)
    #[error("symbol table unavailable: {0}")]
    Unavailable(String),
}

/// Mapping from symbolic constant name to its integer code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: HashMap<String, i32>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a constant
    pub fn insert(&mut self, name: impl Into<String>, code: i32) -> Option<i32> {
        self.symbols.insert(name.into(), code)
    }

    pub fn get(&self, name: &str) -> Option<i32> {
        self.symbols.get(name).copied()
    }

    pub fn remove(&mut self, name: &str) -> Option<i32> {
        self.symbols.remove(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, i32)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (K, i32)>>(iter: I) -> Self {
        let symbols = iter.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self { symbols }
    }
}

/// Source of the solver's symbolic constants.
///
/// The table is requested once per resolution.  Implementations that query
/// an external solver installation should return
/// [`SymbolTableError::Unavailable`] when it cannot be reached.
pub trait SymbolTableProvider {
    fn symbol_table(&self) -> Result<SymbolTable, SymbolTableError>;
}

impl SymbolTableProvider for SymbolTable {
    fn symbol_table(&self) -> Result<SymbolTable, SymbolTableError> {
        Ok(self.clone())
    }
}

impl<P: SymbolTableProvider + ?Sized> SymbolTableProvider for &P {
    fn symbol_table(&self) -> Result<SymbolTable, SymbolTableError> {
        (**self).symbol_table()
    }
}

// ---------------------------------------------------------
// MOSEK optimizer selection
// ---------------------------------------------------------

/// Optimizers that may be selected through an options vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optimizer {
    /// let the solver choose
    Free,
    /// interior point
    Intpnt,
    PrimalSimplex,
    DualSimplex,
    PrimalDualSimplex,
    /// simplex with automatic choice of primal or dual
    FreeSimplex,
    Concurrent,
}

impl Optimizer {
    /// The permitted optimizer choices
    pub const ALL: [Optimizer; 7] = [
        Optimizer::Free,
        Optimizer::Intpnt,
        Optimizer::PrimalSimplex,
        Optimizer::DualSimplex,
        Optimizer::PrimalDualSimplex,
        Optimizer::FreeSimplex,
        Optimizer::Concurrent,
    ];

    /// Name of the symbolic constant for this optimizer
    pub fn symbol(&self) -> &'static str {
        match self {
            Optimizer::Free => "MSK_OPTIMIZER_FREE",
            Optimizer::Intpnt => "MSK_OPTIMIZER_INTPNT",
            Optimizer::PrimalSimplex => "MSK_OPTIMIZER_PRIMAL_SIMPLEX",
            Optimizer::DualSimplex => "MSK_OPTIMIZER_DUAL_SIMPLEX",
            Optimizer::PrimalDualSimplex => "MSK_OPTIMIZER_PRIMAL_DUAL_SIMPLEX",
            Optimizer::FreeSimplex => "MSK_OPTIMIZER_FREE_SIMPLEX",
            Optimizer::Concurrent => "MSK_OPTIMIZER_CONCURRENT",
        }
    }
}

impl std::fmt::Display for Optimizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ---------------------------------------------------------
// built-in MOSEK constants
// ---------------------------------------------------------

lazy_static! {
    // symbolic constants as defined by MOSEK 7
    static ref MOSEK_SYMBOLS: SymbolTable = [
        ("MSK_OFF", 0),
        ("MSK_ON", 1),
        ("MSK_OPTIMIZER_FREE", 0),
        ("MSK_OPTIMIZER_INTPNT", 1),
        ("MSK_OPTIMIZER_CONIC", 2),
        ("MSK_OPTIMIZER_PRIMAL_SIMPLEX", 3),
        ("MSK_OPTIMIZER_DUAL_SIMPLEX", 4),
        ("MSK_OPTIMIZER_PRIMAL_DUAL_SIMPLEX", 5),
        ("MSK_OPTIMIZER_FREE_SIMPLEX", 6),
        ("MSK_OPTIMIZER_NETWORK_PRIMAL_SIMPLEX", 7),
        ("MSK_OPTIMIZER_MIXED_INT_CONIC", 8),
        ("MSK_OPTIMIZER_MIXED_INT", 9),
        ("MSK_OPTIMIZER_CONCURRENT", 10),
        ("MSK_PRESOLVE_MODE_OFF", 0),
        ("MSK_PRESOLVE_MODE_ON", 1),
        ("MSK_PRESOLVE_MODE_FREE", 2),
    ]
    .into_iter()
    .collect();
}

/// Built-in table of MOSEK symbolic constants.
///
/// Use this when no solver installation is available to query.  The codes
/// match the MOSEK 7 release.
#[derive(Debug, Clone, Copy, Default)]
pub struct MosekSymbols;

impl MosekSymbols {
    /// Look up a single constant in the built-in table
    pub fn code(name: &str) -> Option<i32> {
        MOSEK_SYMBOLS.get(name)
    }
}

impl SymbolTableProvider for MosekSymbols {
    fn symbol_table(&self) -> Result<SymbolTable, SymbolTableError> {
        Ok(MOSEK_SYMBOLS.clone())
    }
}

#[test]
fn test_builtin_symbols() {
    let sc = MosekSymbols.symbol_table().unwrap();
    for opt in Optimizer::ALL {
        assert!(sc.get(opt.symbol()).is_some(), "missing {}", opt);
    }
    assert_eq!(MosekSymbols::code("MSK_OPTIMIZER_FREE"), Some(0));
    assert_eq!(MosekSymbols::code("MSK_OPTIMIZER_CONCURRENT"), Some(10));
    assert_eq!(MosekSymbols::code("MSK_OPTIMIZER_BOGUS"), None);
}

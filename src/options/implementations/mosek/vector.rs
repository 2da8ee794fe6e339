use crate::algebra::*;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

// zero-based positions of the MOSEK related entries
// in a MATPOWER options vector
const IDX_OPF_VIOLATION: usize = 15;
const IDX_VERBOSE: usize = 30;
const IDX_MOSEK_LP_ALG: usize = 110;
const IDX_MOSEK_MAX_IT: usize = 111;
const IDX_MOSEK_GAP_TOL: usize = 112;
const IDX_MOSEK_MAX_TIME: usize = 113;
const IDX_MOSEK_NUM_THREADS: usize = 114;
const IDX_MOSEK_OPT: usize = 115;

/// Minimum length of a MATPOWER options vector containing all MOSEK entries
pub const PPOPT_MIN_LEN: usize = IDX_MOSEK_OPT + 1;

/// Error type returned when reading an options vector from a slice
#[derive(Error, Debug)]
pub enum VectorError {
    #[error("options vector has {len} entries, at least {min} required")]
    TooShort { len: usize, min: usize },
}

/// The MOSEK related entries of a MATPOWER options vector.
///
/// Integer quantities are stored as floats, as in the vector itself.  A
/// value of zero in any of the optional fields means "use the solver
/// default".  Builder defaults match MATPOWER's own defaults.

#[derive(Builder, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OptionsVector<T: FloatT> {
    ///output verbosity level (not used by the resolver)
    #[builder(default = "(1.).as_T()")]
    pub verbose: T,

    ///constraint violation tolerance.  The primal feasibility
    ///tolerance is derived from this value
    #[builder(default = "(5e-6).as_T()")]
    pub opf_violation: T,

    ///optimizer code, interpreted through the solver symbol table
    #[builder(default = "T::zero()")]
    pub lp_alg: T,

    ///interior point iteration limit
    #[builder(default = "T::zero()")]
    pub max_it: T,

    ///interior point relative gap tolerance
    #[builder(default = "T::zero()")]
    pub gap_tol: T,

    ///optimizer time limit (seconds)
    #[builder(default = "T::zero()")]
    pub max_time: T,

    ///interior point thread count
    #[builder(default = "T::zero()")]
    pub num_threads: T,

    ///user hook selector.  A non-zero value `n` runs the hook
    ///registered as `hook_prefix` followed by `n`
    #[builder(default = "T::zero()")]
    pub user_opt: T,
}

impl<T> Default for OptionsVector<T>
where
    T: FloatT,
{
    fn default() -> OptionsVector<T> {
        OptionsVectorBuilder::<T>::default().build().unwrap()
    }
}

impl<T> OptionsVector<T>
where
    T: FloatT,
{
    /// Read the MOSEK entries from a full MATPOWER options vector
    pub fn from_ppopt(ppopt: &[T]) -> Result<Self, VectorError> {
        if ppopt.len() < PPOPT_MIN_LEN {
            return Err(VectorError::TooShort {
                len: ppopt.len(),
                min: PPOPT_MIN_LEN,
            });
        }
        Ok(Self {
            verbose: ppopt[IDX_VERBOSE],
            opf_violation: ppopt[IDX_OPF_VIOLATION],
            lp_alg: ppopt[IDX_MOSEK_LP_ALG],
            max_it: ppopt[IDX_MOSEK_MAX_IT],
            gap_tol: ppopt[IDX_MOSEK_GAP_TOL],
            max_time: ppopt[IDX_MOSEK_MAX_TIME],
            num_threads: ppopt[IDX_MOSEK_NUM_THREADS],
            user_opt: ppopt[IDX_MOSEK_OPT],
        })
    }

    /// Write the MOSEK entries into a full MATPOWER options vector,
    /// leaving all other entries untouched
    pub fn write_ppopt(&self, ppopt: &mut [T]) -> Result<(), VectorError> {
        if ppopt.len() < PPOPT_MIN_LEN {
            return Err(VectorError::TooShort {
                len: ppopt.len(),
                min: PPOPT_MIN_LEN,
            });
        }
        ppopt[IDX_VERBOSE] = self.verbose;
        ppopt[IDX_OPF_VIOLATION] = self.opf_violation;
        ppopt[IDX_MOSEK_LP_ALG] = self.lp_alg;
        ppopt[IDX_MOSEK_MAX_IT] = self.max_it;
        ppopt[IDX_MOSEK_GAP_TOL] = self.gap_tol;
        ppopt[IDX_MOSEK_MAX_TIME] = self.max_time;
        ppopt[IDX_MOSEK_NUM_THREADS] = self.num_threads;
        ppopt[IDX_MOSEK_OPT] = self.user_opt;
        Ok(())
    }
}

#[test]
fn test_from_ppopt() {
    let mut ppopt = vec![0.0f64; 124];
    ppopt[15] = 5e-6;
    ppopt[30] = 2.;
    ppopt[110] = 1.;
    ppopt[111] = 150.;
    ppopt[115] = 3.;

    let v = OptionsVector::from_ppopt(&ppopt).unwrap();
    assert_eq!(v.opf_violation, 5e-6);
    assert_eq!(v.verbose, 2.);
    assert_eq!(v.lp_alg, 1.);
    assert_eq!(v.max_it, 150.);
    assert_eq!(v.gap_tol, 0.);
    assert_eq!(v.user_opt, 3.);

    let mut out = vec![-1.0f64; PPOPT_MIN_LEN];
    v.write_ppopt(&mut out).unwrap();
    assert_eq!(out[111], 150.);
    assert_eq!(out[0], -1.);

    assert!(matches!(
        OptionsVector::<f64>::from_ppopt(&ppopt[..100]),
        Err(VectorError::TooShort { len: 100, min: 116 })
    ));
}

#[test]
fn test_vector_defaults() {
    let v = OptionsVector::<f64>::default();
    assert_eq!(v.verbose, 1.);
    assert_eq!(v.opf_violation, 5e-6);
    assert_eq!(v.user_opt, 0.);

    let v = OptionsVectorBuilder::<f32>::default()
        .num_threads(4.)
        .build()
        .unwrap();
    assert_eq!(v.num_threads, 4.);
    assert_eq!(v.max_time, 0.);
}

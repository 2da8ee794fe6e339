use super::*;
use crate::algebra::*;
use crate::io::PrintTarget;
use num_traits::Zero;
use crate::options::core::{
    hooks::{hook_name, HookInvoker, HookRegistry},
    symbols::{MosekSymbols, Optimizer, SymbolTable, SymbolTableProvider},
    traits::{OptionsResolver, Settings},
    ParameterMapping, ResolveError, Selector, SettingsError,
};

/// optimizer selection
pub const MSK_IPAR_OPTIMIZER: &str = "MSK_IPAR_OPTIMIZER";
/// interior point primal feasibility tolerance
pub const MSK_DPAR_INTPNT_TOL_PFEAS: &str = "MSK_DPAR_INTPNT_TOL_PFEAS";
/// interior point iteration limit
pub const MSK_IPAR_INTPNT_MAX_ITERATIONS: &str = "MSK_IPAR_INTPNT_MAX_ITERATIONS";
/// interior point relative gap tolerance
pub const MSK_DPAR_INTPNT_TOL_REL_GAP: &str = "MSK_DPAR_INTPNT_TOL_REL_GAP";
/// optimizer time limit
pub const MSK_DPAR_OPTIMIZER_MAX_TIME: &str = "MSK_DPAR_OPTIMIZER_MAX_TIME";
/// interior point thread count
pub const MSK_IPAR_INTPNT_NUM_THREADS: &str = "MSK_IPAR_INTPNT_NUM_THREADS";

/// Options resolver for the MOSEK solver.
///
/// Holds the symbol table provider, the hook invoker and the resolver
/// settings.  Resolution itself does not modify the resolver, so a single
/// resolver may be shared between threads when `S` and `H` allow it.
///
/// ```
/// use mosek_options::options::*;
///
/// let resolver = MosekOptionsResolver::<f64>::default();
/// let vector = OptionsVectorBuilder::default()
///     .lp_alg(1.)
///     .max_it(150.)
///     .build()
///     .unwrap();
/// let params = resolver.resolve(None, Selector::Vector(&vector)).unwrap();
/// assert_eq!(params.get(MSK_IPAR_OPTIMIZER), Some(&ParamValue::Int(1)));
/// assert_eq!(params.get(MSK_IPAR_INTPNT_MAX_ITERATIONS), Some(&ParamValue::Int(150)));
/// ```
#[derive(Debug)]
pub struct MosekOptionsResolver<T, S = MosekSymbols, H = HookRegistry<T>>
where
    T: FloatT,
{
    pub settings: ResolverSettings<T>,
    pub symbols: S,
    pub hooks: H,

    pub(crate) stream: PrintTarget,
}

impl<T, S, H> MosekOptionsResolver<T, S, H>
where
    T: FloatT,
    S: SymbolTableProvider,
    H: HookInvoker<T>,
{
    pub fn new(symbols: S, hooks: H, settings: ResolverSettings<T>) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            settings,
            symbols,
            hooks,
            stream: PrintTarget::default(),
        })
    }
}

impl<T> Default for MosekOptionsResolver<T>
where
    T: FloatT,
{
    fn default() -> Self {
        Self {
            settings: ResolverSettings::default(),
            symbols: MosekSymbols,
            hooks: HookRegistry::default(),
            stream: PrintTarget::default(),
        }
    }
}

impl<T, S, H> OptionsResolver<T> for MosekOptionsResolver<T, S, H>
where
    T: FloatT,
    S: SymbolTableProvider,
    H: HookInvoker<T>,
{
    fn resolve(
        &self,
        overrides: Option<&ParameterMapping<T>>,
        selector: Selector<'_, T>,
    ) -> Result<ParameterMapping<T>, ResolveError> {
        resolve_options(
            &self.symbols,
            &self.hooks,
            &self.settings,
            overrides,
            selector,
        )
    }
}

/// Resolve MOSEK parameters without constructing a resolver.
///
/// Sources are applied in order: the default optimizer choice, entries
/// derived from an options vector, a user hook (named directly or selected
/// by the vector) and finally `overrides`.   The hook result replaces the
/// parameters wholesale, while overrides are applied key by key.
pub fn resolve_options<T, S, H>(
    symbols: &S,
    hooks: &H,
    settings: &ResolverSettings<T>,
    overrides: Option<&ParameterMapping<T>>,
    selector: Selector<'_, T>,
) -> Result<ParameterMapping<T>, ResolveError>
where
    T: FloatT,
    S: SymbolTableProvider + ?Sized,
    H: HookInvoker<T> + ?Sized,
{
    let sc = symbols.symbol_table()?;

    let (vector, hook) = match selector {
        Selector::None => (None, None),
        Selector::HookName("") => (None, None),
        Selector::HookName(name) => (None, Some(name.to_string())),
        Selector::Vector(v) => (Some(v), user_hook_name(v.user_opt, &settings.hook_prefix)),
    };

    let mut opt = ParameterMapping::new();

    match vector {
        Some(v) => {
            opt.set(MSK_IPAR_OPTIMIZER, select_optimizer(&sc, v.lp_alg)?);
            apply_vector(&mut opt, v, settings);
        }
        None => {
            opt.set(MSK_IPAR_OPTIMIZER, symbol_code(&sc, Optimizer::Free)?);
        }
    }

    if let Some(name) = hook {
        opt = match hooks.invoke(&name, opt, vector) {
            Ok(opt) => opt,
            Err(source) => return Err(ResolveError::Hook { name, source }),
        };
    }

    if let Some(overrides) = overrides {
        opt.apply_overrides(overrides);
    }

    Ok(opt)
}

fn symbol_code(sc: &SymbolTable, optimizer: Optimizer) -> Result<i32, ResolveError> {
    sc.get(optimizer.symbol())
        .ok_or(ResolveError::MissingSymbol(optimizer.symbol()))
}

// an optimizer code outside of the permitted set falls
// back to the free optimizer rather than failing.  Every permitted
// code must be present in the table, whatever code was requested
fn select_optimizer<T: FloatT>(sc: &SymbolTable, lp_alg: T) -> Result<i32, ResolveError> {
    let permitted = Optimizer::ALL
        .iter()
        .map(|&optimizer| symbol_code(sc, optimizer))
        .collect::<Result<Vec<i32>, ResolveError>>()?;
    let free = symbol_code(sc, Optimizer::Free)?;

    match lp_alg.as_exact_i32() {
        Some(code) if permitted.contains(&code) => Ok(code),
        _ => Ok(free),
    }
}

fn apply_vector<T: FloatT>(
    opt: &mut ParameterMapping<T>,
    v: &OptionsVector<T>,
    settings: &ResolverSettings<T>,
) {
    opt.set_float(
        MSK_DPAR_INTPNT_TOL_PFEAS,
        v.opf_violation / settings.violation_scale,
    );

    // zero entries leave the solver default in place
    if !v.max_it.is_zero() {
        if let Some(max_it) = v.max_it.as_exact_i32() {
            opt.set(MSK_IPAR_INTPNT_MAX_ITERATIONS, max_it);
        }
    }
    if !v.gap_tol.is_zero() {
        opt.set_float(MSK_DPAR_INTPNT_TOL_REL_GAP, v.gap_tol);
    }
    if !v.max_time.is_zero() {
        opt.set_float(MSK_DPAR_OPTIMIZER_MAX_TIME, v.max_time);
    }
    if !v.num_threads.is_zero() {
        if let Some(num_threads) = v.num_threads.as_exact_i32() {
            opt.set(MSK_IPAR_INTPNT_NUM_THREADS, num_threads);
        }
    }
}

fn user_hook_name<T: FloatT>(user_opt: T, prefix: &str) -> Option<String> {
    if user_opt.is_zero() {
        return None;
    }
    match user_opt.as_exact_i64() {
        Some(code) => Some(hook_name(prefix, code)),
        None => Some(format!("{}{}", prefix, user_opt)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::core::hooks::HookError;
    use crate::options::core::symbols::SymbolTableError;
    use crate::options::ParamValue;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Unavailable;
    impl SymbolTableProvider for Unavailable {
        fn symbol_table(&self) -> Result<SymbolTable, SymbolTableError> {
            Err(SymbolTableError::Unavailable("no license".to_string()))
        }
    }

    #[derive(Default)]
    struct CountingHooks {
        calls: AtomicUsize,
    }
    impl HookInvoker<f64> for CountingHooks {
        fn invoke(
            &self,
            _name: &str,
            params: ParameterMapping<f64>,
            _vector: Option<&OptionsVector<f64>>,
        ) -> Result<ParameterMapping<f64>, HookError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(params)
        }
    }

    #[test]
    fn test_user_hook_name() {
        assert_eq!(user_hook_name(0.0f64, "p_"), None);
        assert_eq!(user_hook_name(3.0f64, "p_").as_deref(), Some("p_3"));
        assert_eq!(user_hook_name(-2.0f64, "p_").as_deref(), Some("p_-2"));
        assert_eq!(user_hook_name(1.5f64, "p_").as_deref(), Some("p_1.5"));
    }

    #[test]
    fn test_select_optimizer() {
        let sc = MosekSymbols.symbol_table().unwrap();
        assert_eq!(select_optimizer(&sc, 4.0f64).unwrap(), 4);
        assert_eq!(select_optimizer(&sc, 10.0f64).unwrap(), 10);
        // conic and mixed integer optimizers are not permitted
        assert_eq!(select_optimizer(&sc, 2.0f64).unwrap(), 0);
        assert_eq!(select_optimizer(&sc, 9.0f64).unwrap(), 0);
        assert_eq!(select_optimizer(&sc, 1.5f64).unwrap(), 0);
        assert_eq!(select_optimizer(&sc, f64::NAN).unwrap(), 0);
    }

    #[test]
    fn test_symbol_table_failures() {
        let hooks = CountingHooks::default();
        let settings = ResolverSettings::<f64>::default();

        let err = resolve_options(&Unavailable, &hooks, &settings, None, Selector::None)
            .unwrap_err();
        assert!(matches!(err, ResolveError::SymbolTable(_)));

        let mut sc = MosekSymbols.symbol_table().unwrap();
        sc.remove("MSK_OPTIMIZER_CONCURRENT");

        // not needed without a vector
        assert!(resolve_options(&sc, &hooks, &settings, None, Selector::None).is_ok());

        // needed with a vector, for any requested optimizer code
        for lp_alg in [0., 1., 4., 10., 11., f64::NAN] {
            let v = OptionsVector {
                lp_alg,
                user_opt: 1.,
                ..OptionsVector::default()
            };
            let err = resolve_options(&sc, &hooks, &settings, None, Selector::Vector(&v))
                .unwrap_err();
            assert!(
                matches!(err, ResolveError::MissingSymbol("MSK_OPTIMIZER_CONCURRENT")),
                "lp_alg = {}",
                lp_alg
            );
        }
        assert_eq!(hooks.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_hook_name() {
        let hooks = CountingHooks::default();
        let settings = ResolverSettings::<f64>::default();

        let opt = resolve_options(&MosekSymbols, &hooks, &settings, None, Selector::HookName(""))
            .unwrap();
        assert_eq!(hooks.calls.load(Ordering::SeqCst), 0);
        assert_eq!(opt.len(), 1);
        assert_eq!(opt.get(MSK_IPAR_OPTIMIZER).and_then(|v| v.as_int()), Some(0));

        let opt = resolve_options(&MosekSymbols, &hooks, &settings, None, Selector::HookName("h"))
            .unwrap();
        assert_eq!(hooks.calls.load(Ordering::SeqCst), 1);
        assert_eq!(opt.len(), 1);
    }

    #[test]
    fn test_vector_without_hook() {
        let hooks = CountingHooks::default();
        let settings = ResolverSettings::<f64>::default();
        let v = OptionsVector {
            opf_violation: 500.,
            num_threads: 2.5,
            ..OptionsVector::default()
        };

        let opt =
            resolve_options(&MosekSymbols, &hooks, &settings, None, Selector::Vector(&v)).unwrap();

        assert_eq!(hooks.calls.load(Ordering::SeqCst), 0);
        assert_eq!(opt.len(), 2);
        assert_eq!(opt.get(MSK_IPAR_OPTIMIZER), Some(&ParamValue::Int(0)));
        assert_eq!(
            opt.get(MSK_DPAR_INTPNT_TOL_PFEAS),
            Some(&ParamValue::Float(1.))
        );
        // fractional thread counts are ignored
        assert!(!opt.contains(MSK_IPAR_INTPNT_NUM_THREADS));
    }
}

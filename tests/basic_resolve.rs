use mosek_options::options::*;
use std::sync::Mutex;

// hook invoker that records every call and returns the mapping unchanged
#[derive(Default)]
struct RecordingHooks {
    calls: Mutex<Vec<(String, bool)>>,
}

impl HookInvoker<f64> for RecordingHooks {
    fn invoke(
        &self,
        name: &str,
        params: ParameterMapping<f64>,
        vector: Option<&OptionsVector<f64>>,
    ) -> Result<ParameterMapping<f64>, HookError> {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), vector.is_some()));
        Ok(params)
    }
}

fn resolver() -> MosekOptionsResolver<f64, MosekSymbols, RecordingHooks> {
    MosekOptionsResolver::new(
        MosekSymbols,
        RecordingHooks::default(),
        ResolverSettings::default(),
    )
    .unwrap()
}

fn code(optimizer: Optimizer) -> i32 {
    MosekSymbols::code(optimizer.symbol()).unwrap()
}

#[test]
fn test_no_selector() {
    let resolver = resolver();
    let params = resolver.resolve(None, Selector::None).unwrap();

    assert_eq!(params.len(), 1);
    assert_eq!(
        params.get(MSK_IPAR_OPTIMIZER),
        Some(&ParamValue::Int(code(Optimizer::Free)))
    );
    assert!(resolver.hooks.calls.lock().unwrap().is_empty());
}

#[test]
fn test_vector_without_hook_selector() {
    let resolver = resolver();

    for lp_alg in [0., 1., 3., 4., 5., 6., 10.] {
        let v = OptionsVectorBuilder::default()
            .lp_alg(lp_alg)
            .max_it(100.)
            .build()
            .unwrap();
        resolver.resolve(None, Selector::Vector(&v)).unwrap();
    }
    assert!(resolver.hooks.calls.lock().unwrap().is_empty());
}

#[test]
fn test_permitted_optimizers() {
    let resolver = resolver();

    for optimizer in Optimizer::ALL {
        let v = OptionsVectorBuilder::default()
            .lp_alg(code(optimizer) as f64)
            .build()
            .unwrap();
        let params = resolver.resolve(None, Selector::Vector(&v)).unwrap();
        assert_eq!(
            params.get(MSK_IPAR_OPTIMIZER),
            Some(&ParamValue::Int(code(optimizer))),
            "{}",
            optimizer
        );
    }
}

#[test]
fn test_unrecognized_optimizer() {
    let resolver = resolver();
    let free = ParamValue::Int(code(Optimizer::Free));

    // conic, mixed integer, out of range and malformed codes
    for lp_alg in [2., 7., 8., 9., 11., -1., 1e9, 3.5, f64::NAN, f64::INFINITY] {
        let v = OptionsVectorBuilder::default()
            .lp_alg(lp_alg)
            .build()
            .unwrap();
        let params = resolver.resolve(None, Selector::Vector(&v)).unwrap();
        assert_eq!(params.get(MSK_IPAR_OPTIMIZER), Some(&free), "lp_alg = {}", lp_alg);
    }
}

#[test]
fn test_feasibility_tolerance_scaling() {
    let resolver = resolver();

    let v = OptionsVectorBuilder::default()
        .opf_violation(500.)
        .build()
        .unwrap();
    let params = resolver.resolve(None, Selector::Vector(&v)).unwrap();
    assert_eq!(
        params.get(MSK_DPAR_INTPNT_TOL_PFEAS),
        Some(&ParamValue::Float(1.))
    );

    // MATPOWER default violation maps to MOSEK default tolerance
    let v = OptionsVector::default();
    let params = resolver.resolve(None, Selector::Vector(&v)).unwrap();
    let pfeas = params.get(MSK_DPAR_INTPNT_TOL_PFEAS).unwrap().as_float().unwrap();
    assert!((pfeas - 1e-8).abs() < 1e-20);
}

#[test]
fn test_custom_violation_scale() {
    let settings = ResolverSettingsBuilder::default()
        .violation_scale(100.)
        .build()
        .unwrap();
    let resolver =
        MosekOptionsResolver::<f64, _, _>::new(MosekSymbols, RecordingHooks::default(), settings)
            .unwrap();

    let v = OptionsVectorBuilder::default()
        .opf_violation(500.)
        .build()
        .unwrap();
    let params = resolver.resolve(None, Selector::Vector(&v)).unwrap();
    assert_eq!(
        params.get(MSK_DPAR_INTPNT_TOL_PFEAS),
        Some(&ParamValue::Float(5.))
    );
}

#[test]
fn test_optional_fields_zero() {
    let resolver = resolver();
    let v = OptionsVector::default();
    let params = resolver.resolve(None, Selector::Vector(&v)).unwrap();

    assert_eq!(params.len(), 2);
    assert!(!params.contains(MSK_IPAR_INTPNT_MAX_ITERATIONS));
    assert!(!params.contains(MSK_DPAR_INTPNT_TOL_REL_GAP));
    assert!(!params.contains(MSK_DPAR_OPTIMIZER_MAX_TIME));
    assert!(!params.contains(MSK_IPAR_INTPNT_NUM_THREADS));
}

#[test]
fn test_optional_fields_set() {
    let resolver = resolver();
    let v = OptionsVectorBuilder::default()
        .max_it(250.)
        .gap_tol(1e-9)
        .max_time(30.)
        .num_threads(4.)
        .build()
        .unwrap();
    let params = resolver.resolve(None, Selector::Vector(&v)).unwrap();

    assert_eq!(params.len(), 6);
    assert_eq!(
        params.get(MSK_IPAR_INTPNT_MAX_ITERATIONS),
        Some(&ParamValue::Int(250))
    );
    assert_eq!(
        params.get(MSK_DPAR_INTPNT_TOL_REL_GAP),
        Some(&ParamValue::Float(1e-9))
    );
    assert_eq!(
        params.get(MSK_DPAR_OPTIMIZER_MAX_TIME),
        Some(&ParamValue::Float(30.))
    );
    assert_eq!(
        params.get(MSK_IPAR_INTPNT_NUM_THREADS),
        Some(&ParamValue::Int(4))
    );

    // each field is independent of the others
    let v = OptionsVectorBuilder::default()
        .max_time(30.)
        .build()
        .unwrap();
    let params = resolver.resolve(None, Selector::Vector(&v)).unwrap();
    assert_eq!(params.len(), 3);
    assert!(params.contains(MSK_DPAR_OPTIMIZER_MAX_TIME));
}

#[test]
fn test_vector_from_ppopt() {
    let resolver = resolver();

    let mut ppopt = vec![0.0; 124];
    ppopt[15] = 5e-6;
    ppopt[110] = 1.;
    ppopt[111] = 80.;
    let v = OptionsVector::from_ppopt(&ppopt).unwrap();

    let params = resolver.resolve(None, Selector::Vector(&v)).unwrap();
    assert_eq!(
        params.get(MSK_IPAR_OPTIMIZER),
        Some(&ParamValue::Int(code(Optimizer::Intpnt)))
    );
    assert_eq!(
        params.get(MSK_IPAR_INTPNT_MAX_ITERATIONS),
        Some(&ParamValue::Int(80))
    );
}

#[test]
fn test_resolve_is_repeatable() {
    let resolver = resolver();
    let v = OptionsVectorBuilder::default()
        .lp_alg(4.)
        .num_threads(2.)
        .build()
        .unwrap();

    let first = resolver.resolve(None, Selector::Vector(&v)).unwrap();
    let second = resolver.resolve(None, Selector::Vector(&v)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_resolve_from_threads() {
    let resolver = MosekOptionsResolver::<f64>::default();

    std::thread::scope(|s| {
        for threads in 1..=4 {
            let resolver = &resolver;
            s.spawn(move || {
                let v = OptionsVectorBuilder::default()
                    .num_threads(threads as f64)
                    .build()
                    .unwrap();
                let params = resolver.resolve(None, Selector::Vector(&v)).unwrap();
                assert_eq!(
                    params.get(MSK_IPAR_INTPNT_NUM_THREADS),
                    Some(&ParamValue::Int(threads))
                );
            });
        }
    });
}

#[test]
fn test_symbol_table_unavailable() {
    struct NoInstallation;
    impl SymbolTableProvider for NoInstallation {
        fn symbol_table(&self) -> Result<SymbolTable, SymbolTableError> {
            Err(SymbolTableError::Unavailable("mosek not found".to_string()))
        }
    }

    let resolver = MosekOptionsResolver::<f64, _, _>::new(
        NoInstallation,
        RecordingHooks::default(),
        ResolverSettings::default(),
    )
    .unwrap();

    let v = OptionsVectorBuilder::default()
        .user_opt(1.)
        .build()
        .unwrap();

    assert!(matches!(
        resolver.resolve(None, Selector::None),
        Err(ResolveError::SymbolTable(_))
    ));
    assert!(matches!(
        resolver.resolve(None, Selector::Vector(&v)),
        Err(ResolveError::SymbolTable(_))
    ));
    assert!(resolver.hooks.calls.lock().unwrap().is_empty());
}

#[test]
fn test_custom_symbol_table() {
    // a table with codes shifted from the built-in ones
    let sc: SymbolTable = Optimizer::ALL
        .iter()
        .enumerate()
        .map(|(i, opt)| (opt.symbol(), 100 + i as i32))
        .collect();

    let resolver = MosekOptionsResolver::<f64, _, _>::new(
        sc,
        RecordingHooks::default(),
        ResolverSettings::default(),
    )
    .unwrap();

    let params = resolver.resolve(None, Selector::None).unwrap();
    assert_eq!(params.get(MSK_IPAR_OPTIMIZER), Some(&ParamValue::Int(100)));

    let v = OptionsVectorBuilder::default().lp_alg(103.).build().unwrap();
    let params = resolver.resolve(None, Selector::Vector(&v)).unwrap();
    assert_eq!(params.get(MSK_IPAR_OPTIMIZER), Some(&ParamValue::Int(103)));

    // built-in code for dual simplex is not valid in this table
    let v = OptionsVectorBuilder::default().lp_alg(4.).build().unwrap();
    let params = resolver.resolve(None, Selector::Vector(&v)).unwrap();
    assert_eq!(params.get(MSK_IPAR_OPTIMIZER), Some(&ParamValue::Int(100)));
}

#[test]
fn test_bad_settings_rejected() {
    let settings = ResolverSettings::<f64> {
        hook_prefix: String::new(),
        ..ResolverSettings::default()
    };
    assert!(matches!(
        MosekOptionsResolver::new(MosekSymbols, RecordingHooks::default(), settings),
        Err(SettingsError::BadFieldValue("hook_prefix"))
    ));
}

use super::params::ParameterMapping;
use crate::algebra::*;
use crate::options::OptionsVector;
use std::collections::HashMap;
use thiserror::Error;

/// Error type returned when a user hook cannot be run.
#[derive(Error, Debug)]
pub enum HookError {
    /// No hook is registered under the requested name
    #[error("no hook registered as \"{0}\"")]
    NotFound(String),
    /// The hook ran and reported a failure
    #[error("hook failed: {0}")]
    Failed(String),
}

/// Signature of a user hook implemented as a plain function.
///
/// The hook receives the current parameters and, when the resolver was
/// driven by an options vector, that vector.  The returned mapping replaces
/// the current parameters entirely.
pub type HookFn<T> =
    fn(ParameterMapping<T>, Option<&OptionsVector<T>>) -> Result<ParameterMapping<T>, HookError>;

/// Signature of a user hook implemented as a closure.
pub type BoxedHookFn<T> = Box<
    dyn Fn(ParameterMapping<T>, Option<&OptionsVector<T>>) -> Result<ParameterMapping<T>, HookError>
        + Send
        + Sync,
>;

// ---------------------------------
// enum for managing hooks
// ---------------------------------

pub(crate) enum Hook<T: FloatT> {
    Rust(HookFn<T>),
    Boxed(BoxedHookFn<T>),
}

impl<T> Hook<T>
where
    T: FloatT,
{
    fn call(
        &self,
        params: ParameterMapping<T>,
        vector: Option<&OptionsVector<T>>,
    ) -> Result<ParameterMapping<T>, HookError> {
        match self {
            Hook::Rust(f) => f(params, vector),
            Hook::Boxed(f) => f(params, vector),
        }
    }
}

impl<T: FloatT> std::fmt::Debug for Hook<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hook::Rust(_) => write!(f, "Hook::Rust"),
            Hook::Boxed(_) => write!(f, "Hook::Boxed"),
        }
    }
}

/// Runs user hooks by name.
///
/// The resolver only ever asks for a hook by name; how hooks are found and
/// executed is up to the implementation.  [`HookRegistry`] is the standard
/// implementation.
pub trait HookInvoker<T: FloatT> {
    fn invoke(
        &self,
        name: &str,
        params: ParameterMapping<T>,
        vector: Option<&OptionsVector<T>>,
    ) -> Result<ParameterMapping<T>, HookError>;
}

impl<T: FloatT, H: HookInvoker<T> + ?Sized> HookInvoker<T> for &H {
    fn invoke(
        &self,
        name: &str,
        params: ParameterMapping<T>,
        vector: Option<&OptionsVector<T>>,
    ) -> Result<ParameterMapping<T>, HookError> {
        (**self).invoke(name, params, vector)
    }
}

/// Explicit table of user hooks, keyed by name.
///
/// Populate the registry before resolving.  Hooks selected through an
/// options vector are looked up under `prefix + code`, e.g.
/// `"mosek_user_options_3"`; see [`register_numbered`](HookRegistry::register_numbered).
#[derive(Debug)]
pub struct HookRegistry<T: FloatT> {
    hooks: HashMap<String, Hook<T>>,
}

impl<T: FloatT> Default for HookRegistry<T> {
    fn default() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }
}

impl<T> HookRegistry<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function hook, replacing any hook of the same name
    pub fn register(&mut self, name: impl Into<String>, hook: HookFn<T>) -> &mut Self {
        self.hooks.insert(name.into(), Hook::Rust(hook));
        self
    }

    /// Register a closure hook, replacing any hook of the same name
    pub fn register_boxed<F>(&mut self, name: impl Into<String>, hook: F) -> &mut Self
    where
        F: Fn(
                ParameterMapping<T>,
                Option<&OptionsVector<T>>,
            ) -> Result<ParameterMapping<T>, HookError>
            + Send
            + Sync
            + 'static,
    {
        self.hooks.insert(name.into(), Hook::Boxed(Box::new(hook)));
        self
    }

    /// Register a function hook under the name an options vector with
    /// hook selector `code` will request
    pub fn register_numbered(&mut self, prefix: &str, code: i64, hook: HookFn<T>) -> &mut Self {
        self.register(hook_name(prefix, code), hook)
    }

    pub fn unregister(&mut self, name: &str) -> bool {
        self.hooks.remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl<T> HookInvoker<T> for HookRegistry<T>
where
    T: FloatT,
{
    fn invoke(
        &self,
        name: &str,
        params: ParameterMapping<T>,
        vector: Option<&OptionsVector<T>>,
    ) -> Result<ParameterMapping<T>, HookError> {
        match self.hooks.get(name) {
            Some(hook) => hook.call(params, vector),
            None => Err(HookError::NotFound(name.to_string())),
        }
    }
}

/// Name of the hook requested by a hook selector code
pub fn hook_name(prefix: &str, code: i64) -> String {
    format!("{}{}", prefix, code)
}

#[test]
fn test_registry_invoke() {
    fn drop_all(
        _params: ParameterMapping<f64>,
        _vector: Option<&OptionsVector<f64>>,
    ) -> Result<ParameterMapping<f64>, HookError> {
        Ok(ParameterMapping::new())
    }

    let mut hooks = HookRegistry::<f64>::new();
    hooks.register_numbered("mosek_user_options_", 3, drop_all);
    hooks.register_boxed("threads", |mut params, _| {
        params.set("MSK_IPAR_INTPNT_NUM_THREADS", 8);
        Ok(params)
    });
    assert_eq!(hooks.len(), 2);
    assert!(hooks.contains("mosek_user_options_3"));

    let mut params = ParameterMapping::new();
    params.set("MSK_IPAR_OPTIMIZER", 0);

    let out = hooks
        .invoke("mosek_user_options_3", params.clone(), None)
        .unwrap();
    assert!(out.is_empty());

    let out = hooks.invoke("threads", params.clone(), None).unwrap();
    assert_eq!(out.len(), 2);

    assert!(matches!(
        hooks.invoke("mosek_user_options_4", params, None),
        Err(HookError::NotFound(name)) if name == "mosek_user_options_4"
    ));

    assert!(hooks.unregister("threads"));
    assert!(!hooks.unregister("threads"));
}

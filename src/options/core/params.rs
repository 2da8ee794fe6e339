use crate::algebra::*;
use std::collections::hash_map::{self, HashMap};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A single solver parameter value.
///
/// MOSEK distinguishes integer (`MSK_IPAR_*`), floating point (`MSK_DPAR_*`)
/// and string (`MSK_SPAR_*`) parameters.  Enumeration choices such as the
/// optimizer selection are carried as their integer codes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub enum ParamValue<T> {
    /// integer or enumeration code
    Int(i32),
    /// floating point value
    Float(T),
    /// string value
    Str(String),
}

impl<T: FloatT> ParamValue<T> {
    /// Returns the integer value, if this is an `Int`
    pub fn as_int(&self) -> Option<i32> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the floating point value, if this is a `Float`
    pub fn as_float(&self) -> Option<T> {
        match self {
            ParamValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string value, if this is a `Str`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl<T> From<i32> for ParamValue<T> {
    fn from(v: i32) -> Self {
        ParamValue::Int(v)
    }
}

impl<T> From<&str> for ParamValue<T> {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl<T> From<String> for ParamValue<T> {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

impl<T: FloatT> std::fmt::Display for ParamValue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Float(v) => write!(f, "{:e}", v),
            ParamValue::Str(v) => write!(f, "\"{}\"", v),
        }
    }
}

/// Mapping from solver parameter name to value.
///
/// Keys are unique and the last write to a key wins.  The mapping is
/// unordered; use [`sorted`](ParameterMapping::sorted) when a
/// deterministic ordering is needed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct ParameterMapping<T> {
    params: HashMap<String, ParamValue<T>>,
}

impl<T> Default for ParameterMapping<T> {
    fn default() -> Self {
        Self {
            params: HashMap::new(),
        }
    }
}

impl<T> ParameterMapping<T>
where
    T: FloatT,
{
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, returning any value it replaces
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue<T>>,
    ) -> Option<ParamValue<T>> {
        self.params.insert(name.into(), value.into())
    }

    /// Set a floating point parameter
    pub fn set_float(&mut self, name: impl Into<String>, value: T) -> Option<ParamValue<T>> {
        self.params.insert(name.into(), ParamValue::Float(value))
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue<T>> {
        self.params.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ParamValue<T>> {
        self.params.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, ParamValue<T>> {
        self.params.iter()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, String, ParamValue<T>> {
        self.params.keys()
    }

    /// Entries ordered by parameter name
    pub fn sorted(&self) -> Vec<(&String, &ParamValue<T>)> {
        use itertools::Itertools;
        self.params.iter().sorted_by(|a, b| a.0.cmp(b.0)).collect()
    }

    /// Overwrite entries with every entry of `overrides`.   Keys not
    /// already present are added.
    pub fn apply_overrides(&mut self, overrides: &ParameterMapping<T>) {
        for (name, value) in overrides.iter() {
            self.params.insert(name.clone(), value.clone());
        }
    }

    pub(crate) fn values_mut(&mut self) -> hash_map::ValuesMut<'_, String, ParamValue<T>> {
        self.params.values_mut()
    }
}

impl<T, K, V> FromIterator<(K, V)> for ParameterMapping<T>
where
    T: FloatT,
    K: Into<String>,
    V: Into<ParamValue<T>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let params = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { params }
    }
}

impl<'a, T> IntoIterator for &'a ParameterMapping<T> {
    type Item = (&'a String, &'a ParamValue<T>);
    type IntoIter = hash_map::Iter<'a, String, ParamValue<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

#[test]
fn test_apply_overrides() {
    let mut params = ParameterMapping::<f64>::new();
    params.set("MSK_IPAR_OPTIMIZER", 1);
    params.set_float("MSK_DPAR_INTPNT_TOL_PFEAS", 1e-8);

    let overrides: ParameterMapping<f64> = [
        ("MSK_IPAR_OPTIMIZER", ParamValue::Int(4)),
        ("MSK_SPAR_PARAM_WRITE_FILE_NAME", ParamValue::from("out.par")),
    ]
    .into_iter()
    .collect();

    params.apply_overrides(&overrides);

    assert_eq!(params.len(), 3);
    assert_eq!(params.get("MSK_IPAR_OPTIMIZER").unwrap().as_int(), Some(4));
    assert_eq!(params.get("MSK_IPAR_OPTIMIZER").unwrap().as_float(), None);
    assert_eq!(
        params.get("MSK_DPAR_INTPNT_TOL_PFEAS").unwrap().as_float(),
        Some(1e-8)
    );
    assert_eq!(
        params.get("MSK_SPAR_PARAM_WRITE_FILE_NAME").unwrap().as_str(),
        Some("out.par")
    );
}

#[test]
fn test_sorted_entries() {
    let mut params = ParameterMapping::<f64>::new();
    params.set("MSK_IPAR_OPTIMIZER", 0);
    params.set("MSK_IPAR_INTPNT_NUM_THREADS", 4);
    params.set_float("MSK_DPAR_OPTIMIZER_MAX_TIME", 60.);

    let names: Vec<&str> = params.sorted().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "MSK_DPAR_OPTIMIZER_MAX_TIME",
            "MSK_IPAR_INTPNT_NUM_THREADS",
            "MSK_IPAR_OPTIMIZER"
        ]
    );
}

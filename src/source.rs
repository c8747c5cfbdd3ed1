//! Where raw variable values come from.
//!
//! The resolver only needs "name in, string out". [`ProcessEnv`] reads the
//! real process environment; [`MapSource`] serves a fixed set of values,
//! which keeps tests from racing on process-global state.

use std::collections::HashMap;

/// A read-only key to string lookup.
pub trait Source: Send + Sync {
    /// The value for `key`, or `None` if it is not set.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The process environment.
///
/// Values that are not valid unicode are treated as unset.
#[derive(Debug, Copy, Clone, Default)]
pub struct ProcessEnv;

impl Source for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var_os(key).and_then(|v| v.into_string().ok())
    }
}

/// A fixed, in-memory set of variables.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    vars: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Source for MapSource {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

//! Registered default values.
//!
//! [`Defaults`] maps variable names to tagged numeric values. It is what
//! [`Env::get`](crate::Env::get) falls back to when a variable is unset or
//! does not parse. There is one process-wide instance behind
//! [`Defaults::global`], and any number of independent instances can be
//! created and handed to an [`Env`](crate::Env).
//!
//! # Example
//!
//! ```
//! use typed_env::{Defaults, Var};
//!
//! const WORKERS: Var<usize> = Var::new("TYPED_ENV_DOC_WORKERS");
//!
//! let defaults = Defaults::new();
//! defaults.set(&WORKERS, 4);
//! assert_eq!(defaults.get(&WORKERS), Ok(Some(4)));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use parking_lot::RwLock;

use crate::error::EnvError;
use crate::numeric::{Numeric, Value};
use crate::var::Var;

static GLOBAL: LazyLock<Defaults> = LazyLock::new(Defaults::new);

/// Name to default value mapping.
///
/// Thread-safe via internal RwLock. Entries are only ever inserted or
/// overwritten, never removed.
pub struct Defaults {
    values: RwLock<HashMap<String, Value>>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self::new()
    }
}

impl Defaults {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry used by [`Var::get`] and [`set_default`](crate::set_default).
    pub fn global() -> &'static Defaults {
        &GLOBAL
    }

    /// Register `value` as the default for `var`, replacing any previous one.
    ///
    /// Holds the write lock for the duration of the insert. When two threads
    /// race on the same name, whichever takes the lock last wins.
    pub fn set<T: Numeric>(&self, var: &Var<T>, value: T) {
        let previous = self
            .values
            .write()
            .insert(var.name().to_string(), value.into_value());

        match previous {
            Some(old) => tracing::debug!(
                name = var.name(),
                kind = %T::KIND,
                previous_kind = %old.kind(),
                %value,
                "overwrote default"
            ),
            None => tracing::debug!(name = var.name(), kind = %T::KIND, %value, "registered default"),
        }
    }

    /// Look up the default for `var`.
    ///
    /// Returns `Ok(None)` when nothing is registered, and
    /// [`EnvError::TypeMismatch`] when the stored value has another kind
    /// than `T` (e.g. registered through a `Var<i32>` and read through a
    /// `Var<u64>` with the same name).
    pub fn get<T: Numeric>(&self, var: &Var<T>) -> Result<Option<T>, EnvError> {
        let Some(stored) = self.values.read().get(var.name()).copied() else {
            return Ok(None);
        };

        T::from_value(stored)
            .map(Some)
            .ok_or_else(|| EnvError::TypeMismatch {
                name: var.name().to_string(),
                expected: T::KIND,
                found: stored.kind(),
            })
    }

    /// Whether a default is registered under `name`, of any kind.
    pub fn contains(&self, name: &str) -> bool {
        self.values.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl fmt::Debug for Defaults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.values.read();
        f.debug_map()
            .entries(values.iter().map(|(name, value)| (name, value.kind())))
            .finish()
    }
}

//! Resolution of typed variables against a source and a default registry.
//!
//! [`Env`] bundles the two things a lookup depends on: where raw values come
//! from ([`Source`]) and which [`Defaults`] to fall back to. The fallback
//! chains all follow the same rule: sources are tried strictly in the order
//! given and the first one that yields a value wins.
//!
//! | operation           | tries, in order                                  |
//! |---------------------|--------------------------------------------------|
//! | [`Env::try_get`]    | the variable                                     |
//! | [`Env::get`]        | the variable, its registered default, zero       |
//! | [`Env::get_or`]     | the variable, each non-zero alternative, zero    |
//! | [`Env::or`]         | each variable, zero                              |
//!
//! # Example
//!
//! ```
//! use typed_env::{Defaults, Env, MapSource, Var};
//!
//! const RETRIES: Var<u32> = Var::new("RETRIES");
//! const BACKOFF_MS: Var<u64> = Var::new("BACKOFF_MS");
//!
//! let source = MapSource::new().with("BACKOFF_MS", "oops");
//! let defaults = Defaults::new();
//! defaults.set(&BACKOFF_MS, 250);
//!
//! let env = Env::new(&source, &defaults);
//! assert_eq!(env.get(&BACKOFF_MS), 250);
//! assert_eq!(env.get_or(&RETRIES, &[0, 3]), 3);
//! ```

use std::fmt;

use crate::error::EnvError;
use crate::numeric::Numeric;
use crate::registry::Defaults;
use crate::source::{ProcessEnv, Source};
use crate::var::Var;

/// A source of raw values paired with a default registry.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    source: &'a dyn Source,
    defaults: &'a Defaults,
}

impl<'a> Env<'a> {
    pub fn new(source: &'a dyn Source, defaults: &'a Defaults) -> Self {
        Self { source, defaults }
    }

    /// The process environment together with [`Defaults::global`].
    pub fn process() -> Env<'static> {
        Env {
            source: &ProcessEnv,
            defaults: Defaults::global(),
        }
    }

    pub fn defaults(&self) -> &'a Defaults {
        self.defaults
    }

    /// The raw value of `var`, or `""` if unset.
    ///
    /// Unset and set-to-empty are not distinguished.
    pub fn raw<T: Numeric>(&self, var: &Var<T>) -> String {
        self.source.lookup(var.name()).unwrap_or_default()
    }

    /// Parse `var`, reporting why it has no value.
    pub fn parse<T: Numeric>(&self, var: &Var<T>) -> Result<T, EnvError> {
        let raw = self.raw(var);
        if raw.is_empty() {
            return Err(EnvError::Missing {
                name: var.name().to_string(),
            });
        }

        T::parse(&raw).map_err(|reason| EnvError::Invalid {
            name: var.name().to_string(),
            raw,
            kind: T::KIND,
            reason,
        })
    }

    /// The parsed value of `var`, or `None` if it is unset, empty or does not
    /// parse as `T`.
    pub fn try_get<T: Numeric>(&self, var: &Var<T>) -> Option<T> {
        self.parse(var).ok()
    }

    /// The parsed value of `var`; otherwise its registered default; otherwise
    /// zero.
    ///
    /// # Panics
    ///
    /// If the default registered under this name has a different type than
    /// `T`. Use [`Env::get_checked`] to handle that case.
    pub fn get<T: Numeric>(&self, var: &Var<T>) -> T {
        match self.get_checked(var) {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(name = var.name(), error = %err, "registered default has the wrong type");
                panic!("{err}");
            }
        }
    }

    /// Like [`Env::get`], but a registered default of the wrong type is
    /// returned as [`EnvError::TypeMismatch`].
    ///
    /// The default is only consulted when parsing fails, so a mismatched
    /// default goes unnoticed while the variable itself is valid.
    pub fn get_checked<T: Numeric>(&self, var: &Var<T>) -> Result<T, EnvError> {
        match self.parse(var) {
            Ok(value) => Ok(value),
            Err(err) => {
                let default = self.defaults.get(var)?;
                tracing::trace!(
                    name = var.name(),
                    reason = %err,
                    has_default = default.is_some(),
                    "falling back to registered default"
                );
                Ok(default.unwrap_or(T::ZERO))
            }
        }
    }

    /// The parsed value of `var`; otherwise the first alternative that is not
    /// zero; otherwise zero.
    ///
    /// A zero alternative counts as no alternative.
    pub fn get_or<T: Numeric>(&self, var: &Var<T>, alternatives: &[T]) -> T {
        match self.parse(var) {
            Ok(value) => value,
            Err(err) => {
                tracing::trace!(name = var.name(), reason = %err, "falling back to alternatives");
                alternatives
                    .iter()
                    .copied()
                    .find(|alt| !alt.is_zero())
                    .unwrap_or(T::ZERO)
            }
        }
    }

    /// The parsed value of the first of `vars` that has one, or zero.
    ///
    /// Registered defaults are not consulted.
    pub fn or<T: Numeric>(&self, vars: &[Var<T>]) -> T {
        for var in vars {
            match self.parse(var) {
                Ok(value) => return value,
                Err(err) => tracing::trace!(name = var.name(), reason = %err, "trying next variable"),
            }
        }
        T::ZERO
    }

    /// Register a default in this environment's registry.
    pub fn set_default<T: Numeric>(&self, var: &Var<T>, value: T) {
        self.defaults.set(var, value);
    }
}

impl fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Env")
            .field("defaults", self.defaults)
            .finish_non_exhaustive()
    }
}

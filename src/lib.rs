//! Typed environment variables
//!
//! Reads numeric environment variables through typed handles, with three
//! ways to fall back when a variable is unset or malformed:
//!
//! - **Registered defaults**: [`Var::get`] falls back to the value set with
//!   [`set_default`], then to zero
//! - **Inline alternatives**: [`Var::get_or`] falls back to the first non-zero
//!   value passed in, then to zero
//! - **Other variables**: [`or`] takes the first of several variables that
//!   parses, then zero
//!
//! Nothing here returns an error for a missing or malformed value; use
//! [`Var::try_get`] or [`Var::parse`] to tell the cases apart.
//!
//! ```
//! use typed_env::{or, set_default, Var};
//!
//! const PORT: Var<u16> = Var::new("TYPED_ENV_DOC_PORT");
//! const LEGACY_PORT: Var<u16> = Var::new("TYPED_ENV_DOC_LEGACY_PORT");
//!
//! std::env::set_var("TYPED_ENV_DOC_LEGACY_PORT", "9000");
//!
//! set_default(&PORT, 8080);
//! assert_eq!(PORT.get(), 8080);
//! assert_eq!(or(&[PORT, LEGACY_PORT]), 9000);
//! ```
//!
//! The free functions and the methods on [`Var`] use the process environment
//! and the global [`Defaults`]. [`Env`] resolves against any [`Source`] and
//! registry instead.

pub mod env;
pub mod error;
pub mod numeric;
pub mod registry;
pub mod source;
pub mod var;

pub use env::Env;
pub use error::EnvError;
pub use numeric::{Numeric, NumericKind, ParseFailure, Value};
pub use registry::Defaults;
pub use source::{MapSource, ProcessEnv, Source};
pub use var::Var;

/// The parsed value of the first of `vars` that has one, or zero.
///
/// Registered defaults are not consulted. Resolves against [`Env::process`].
pub fn or<T: Numeric>(vars: &[Var<T>]) -> T {
    Env::process().or(vars)
}

/// Register `value` as the default for `var` in [`Defaults::global`].
///
/// Safe to call from multiple threads. The last write for a name wins.
pub fn set_default<T: Numeric>(var: &Var<T>, value: T) {
    Defaults::global().set(var, value);
}

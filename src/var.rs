//! Typed handles to environment variables.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::env::Env;
use crate::error::EnvError;
use crate::numeric::Numeric;

/// An environment variable expected to hold a `T`.
///
/// A `Var` is just a name with a type attached. It carries no state, so two
/// handles with the same name and type are interchangeable, and handles are
/// usually declared as constants:
///
/// ```
/// use typed_env::Var;
///
/// const PORT: Var<u16> = Var::new("PORT");
/// const TIMEOUT_MS: Var<u64> = Var::new("TIMEOUT_MS");
///
/// let timeout = TIMEOUT_MS.get_or(&[5000]);
/// # let _ = (PORT, timeout);
/// ```
///
/// The methods here resolve against [`Env::process`], i.e. the process
/// environment and the global [`Defaults`](crate::Defaults). Use an [`Env`]
/// directly to resolve against something else.
pub struct Var<T: Numeric> {
    name: Cow<'static, str>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Numeric> Var<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            _marker: PhantomData,
        }
    }

    /// Handle for a name only known at runtime.
    pub fn from_string(name: String) -> Self {
        Self {
            name: Cow::Owned(name),
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw value, or `""` if unset.
    pub fn raw(&self) -> String {
        Env::process().raw(self)
    }

    /// The parsed value, or `None` if unset, empty or unparsable.
    pub fn try_get(&self) -> Option<T> {
        Env::process().try_get(self)
    }

    /// Like [`Var::try_get`], but says why the value is missing.
    pub fn parse(&self) -> Result<T, EnvError> {
        Env::process().parse(self)
    }

    /// The parsed value, falling back to the registered default, then zero.
    ///
    /// # Panics
    ///
    /// If the registered default for this name was set through a `Var` of a
    /// different type. See [`Var::get_checked`].
    pub fn get(&self) -> T {
        Env::process().get(self)
    }

    /// Like [`Var::get`], returning [`EnvError::TypeMismatch`] instead of
    /// panicking.
    pub fn get_checked(&self) -> Result<T, EnvError> {
        Env::process().get_checked(self)
    }

    /// The parsed value, falling back to the first non-zero alternative,
    /// then zero.
    pub fn get_or(&self, alternatives: &[T]) -> T {
        Env::process().get_or(self, alternatives)
    }
}

impl<T: Numeric> Clone for Var<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Numeric> PartialEq for Var<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T: Numeric> Eq for Var<T> {}

impl<T: Numeric> Hash for Var<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<T: Numeric> fmt::Debug for Var<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Var<{}>({:?})", T::KIND, self.name)
    }
}

impl<T: Numeric> fmt::Display for Var<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const LEVEL: Var<u8> = Var::new("LEVEL");

    #[test]
    fn test_same_name_is_same_var() {
        let runtime = Var::<u8>::from_string("LEVEL".to_string());
        assert_eq!(LEVEL, runtime);

        let set: HashSet<Var<u8>> = [LEVEL, runtime].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(LEVEL.to_string(), "LEVEL");
        assert_eq!(format!("{LEVEL:?}"), "Var<u8>(\"LEVEL\")");
        assert_eq!(format!("{:?}", Var::<f64>::new("X")), "Var<f64>(\"X\")");
    }

    #[test]
    fn test_var_is_send_and_sync() {
        fn assert_send_sync<V: Send + Sync>() {}
        assert_send_sync::<Var<f32>>();
        assert_send_sync::<Var<i128>>();
    }
}

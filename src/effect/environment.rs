//! Keyed environments for [`EnvironmentReader`](super::EnvironmentReader).
//!
//! An environment is usually a configuration mapping. The [`Environment`]
//! trait gives readers one way to look keys up and one way to fail when a
//! key is missing, whatever map type the caller keeps its settings in.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::error::MissingEnvironmentKey;

/// A keyed, read-only environment.
///
/// # Examples
///
/// ```rust
/// use monadic::effect::Environment;
/// use std::collections::HashMap;
///
/// let environment = HashMap::from([("name".to_string(), "Beta".to_string())]);
/// assert_eq!(environment.require("name").unwrap(), "Beta");
/// assert_eq!(environment.require("port").unwrap_err().key, "port");
/// ```
pub trait Environment {
    /// The type stored under each key.
    type Value;

    /// Looks a key up, returning `None` if it is not present.
    fn lookup(&self, key: &str) -> Option<&Self::Value>;

    /// Looks a key up, failing with [`MissingEnvironmentKey`] if it is not
    /// present.
    ///
    /// # Errors
    ///
    /// Returns [`MissingEnvironmentKey`] naming `key` when the lookup fails.
    fn require(&self, key: &str) -> Result<&Self::Value, MissingEnvironmentKey> {
        self.lookup(key).ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(key, "environment key not found");

            MissingEnvironmentKey::new(key)
        })
    }
}

impl<K, V, H> Environment for HashMap<K, V, H>
where
    K: Borrow<str> + Hash + Eq,
    H: BuildHasher,
{
    type Value = V;

    fn lookup(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V> Environment for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
{
    type Value = V;

    fn lookup(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    type Value = E::Value;

    fn lookup(&self, key: &str) -> Option<&Self::Value> {
        (**self).lookup(key)
    }
}

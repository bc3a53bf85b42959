//! Error types for the effect system.
//!
//! Only [`EnvironmentReader`](super::EnvironmentReader) has an error channel
//! of its own. Every other container either models failure in-band
//! (`OptionalValue`) or passes the wrapped computation's failure through
//! untouched (`DeferredEffect`).

use thiserror::Error;

/// Represents a lookup of a key the environment does not contain.
///
/// Raised when an [`EnvironmentReader`](super::EnvironmentReader) is run,
/// never when it is constructed.
///
/// # Examples
///
/// ```rust
/// use monadic::effect::MissingEnvironmentKey;
///
/// let error = MissingEnvironmentKey::new("name");
/// assert_eq!(error.key, "name");
/// assert_eq!(format!("{error}"), "missing environment key `name`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("missing environment key `{key}`")]
pub struct MissingEnvironmentKey {
    /// The key that was requested.
    pub key: String,
}

impl MissingEnvironmentKey {
    /// Creates an error for the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

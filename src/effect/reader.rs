//! Environment Reader - computation that depends on an environment.
//!
//! An `EnvironmentReader<E, T>` wraps a function from an environment `E`
//! (usually a configuration mapping) to a result `T`. Readers compose without
//! ever seeing the environment; it is supplied once, explicitly, when the
//! composed reader is [`run`](EnvironmentReader::run). There is no implicit
//! or default environment.
//!
//! # Failure
//!
//! A reader may look up keys that the environment does not have. Such a
//! lookup fails with [`MissingEnvironmentKey`] at `run` time. Constructing a
//! reader never inspects the environment, and a missing key is never
//! replaced by a default.
//!
//! # Laws
//!
//! ## Functor Laws
//!
//! - Identity: `reader.map(|x| x) == reader`
//! - Composition: `reader.map(f).map(g) == reader.map(|x| g(f(x)))`
//!
//! ## Monad Laws
//!
//! - Left Identity: `EnvironmentReader::pure(a).bind(f) == f(a)`
//! - Right Identity: `m.bind(EnvironmentReader::pure) == m`
//! - Associativity: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//!
//! Equality means equal results for every environment.
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::{Environment, EnvironmentReader, MissingEnvironmentKey};
//! use std::collections::HashMap;
//!
//! type Config = HashMap<String, String>;
//!
//! let greet = EnvironmentReader::of(|config: &Config| {
//!     Ok(format!("Hi, {}", config.require("name")?))
//! });
//!
//! let config = HashMap::from([("name".to_string(), "Beta".to_string())]);
//! assert_eq!(greet.run(&config), Ok("Hi, Beta".to_string()));
//!
//! let empty = Config::new();
//! assert_eq!(greet.run(&empty), Err(MissingEnvironmentKey::new("name")));
//! ```

#![forbid(unsafe_code)]

use std::fmt;
use std::sync::Arc;

use super::environment::Environment;
use super::error::MissingEnvironmentKey;

type ReaderFunction<E, T> = dyn Fn(&E) -> Result<T, MissingEnvironmentKey> + Send + Sync;

/// A computation that reads from an environment of type `E`.
///
/// # Type Parameters
///
/// - `E`: The environment type (read-only context)
/// - `T`: The result type
pub struct EnvironmentReader<E, T>
where
    E: 'static,
    T: 'static,
{
    run_function: Arc<ReaderFunction<E, T>>,
}

impl<E, T> EnvironmentReader<E, T>
where
    E: 'static,
    T: 'static,
{
    /// Wraps a function of the environment that may fail on a missing key.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the environment and produces a result
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::{Environment, EnvironmentReader};
    /// use std::collections::BTreeMap;
    ///
    /// let port = EnvironmentReader::of(|config: &BTreeMap<String, u16>| {
    ///     config.require("port").copied()
    /// });
    /// let config = BTreeMap::from([("port".to_string(), 8080)]);
    /// assert_eq!(port.run(&config), Ok(8080));
    /// ```
    pub fn of<F>(function: F) -> Self
    where
        F: Fn(&E) -> Result<T, MissingEnvironmentKey> + Send + Sync + 'static,
    {
        Self {
            run_function: Arc::new(function),
        }
    }

    /// Wraps an infallible projection of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::EnvironmentReader;
    ///
    /// let doubled = EnvironmentReader::asks(|environment: &i32| environment * 2);
    /// assert_eq!(doubled.run(&21), Ok(42));
    /// ```
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(&E) -> T + Send + Sync + 'static,
    {
        Self::of(move |environment| Ok(projection(environment)))
    }

    /// Creates a reader that ignores the environment.
    pub fn pure(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::of(move |_| Ok(value.clone()))
    }

    /// Runs the reader against an explicitly supplied environment.
    ///
    /// # Errors
    ///
    /// Returns [`MissingEnvironmentKey`] if the computation needs a key the
    /// environment does not contain.
    pub fn run(&self, environment: &E) -> Result<T, MissingEnvironmentKey> {
        (self.run_function)(environment)
    }

    /// Maps a function over the result.
    ///
    /// The composed reader computes `g(f(environment))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::EnvironmentReader;
    ///
    /// let reader = EnvironmentReader::asks(|environment: &i32| *environment)
    ///     .map(|value| value.to_string());
    /// assert_eq!(reader.run(&42), Ok("42".to_string()));
    /// ```
    pub fn map<U, G>(self, function: G) -> EnvironmentReader<E, U>
    where
        G: Fn(T) -> U + Send + Sync + 'static,
        U: 'static,
    {
        let original_function = self.run_function;
        EnvironmentReader::of(move |environment| original_function(environment).map(&function))
    }

    /// Alias for `map`.
    pub fn fmap<U, G>(self, function: G) -> EnvironmentReader<E, U>
    where
        G: Fn(T) -> U + Send + Sync + 'static,
        U: 'static,
    {
        self.map(function)
    }

    /// Chains this reader with a function producing another reader.
    ///
    /// Both stages read the same environment. A missing key in the first
    /// stage stops the chain before `function` is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::EnvironmentReader;
    ///
    /// let reader = EnvironmentReader::asks(|environment: &i32| *environment)
    ///     .bind(|value| EnvironmentReader::asks(move |environment: &i32| value + environment));
    /// assert_eq!(reader.run(&10), Ok(20));
    /// ```
    pub fn bind<U, F>(self, function: F) -> EnvironmentReader<E, U>
    where
        F: Fn(T) -> EnvironmentReader<E, U> + Send + Sync + 'static,
        U: 'static,
    {
        let original_function = self.run_function;
        EnvironmentReader::of(move |environment| {
            let value = original_function(environment)?;
            function(value).run(environment)
        })
    }

    /// Alias for `bind` to match Rust's naming conventions.
    pub fn and_then<U, F>(self, function: F) -> EnvironmentReader<E, U>
    where
        F: Fn(T) -> EnvironmentReader<E, U> + Send + Sync + 'static,
        U: 'static,
    {
        self.bind(function)
    }

    /// Sequences two readers, discarding the first result.
    ///
    /// The first reader still runs, so its missing keys still fail.
    #[must_use]
    pub fn then<U: 'static>(self, next: EnvironmentReader<E, U>) -> EnvironmentReader<E, U> {
        let original_function = self.run_function;
        EnvironmentReader::of(move |environment| {
            original_function(environment)?;
            next.run(environment)
        })
    }

    /// Combines two readers over the same environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::EnvironmentReader;
    /// use std::collections::HashMap;
    ///
    /// type ConfigReader = EnvironmentReader<HashMap<String, String>, String>;
    ///
    /// let host = ConfigReader::key("host");
    /// let port = ConfigReader::key("port");
    /// let address = host.map2(port, |host, port| format!("{host}:{port}"));
    ///
    /// let config = HashMap::from([
    ///     ("host".to_string(), "localhost".to_string()),
    ///     ("port".to_string(), "8080".to_string()),
    /// ]);
    /// assert_eq!(address.run(&config), Ok("localhost:8080".to_string()));
    /// ```
    pub fn map2<U, V, F>(self, other: EnvironmentReader<E, U>, function: F) -> EnvironmentReader<E, V>
    where
        F: Fn(T, U) -> V + Send + Sync + 'static,
        U: 'static,
        V: 'static,
    {
        let original_function = self.run_function;
        EnvironmentReader::of(move |environment| {
            let first = original_function(environment)?;
            let second = other.run(environment)?;
            Ok(function(first, second))
        })
    }

    /// Runs a reader against a modified copy of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::EnvironmentReader;
    ///
    /// let reader = EnvironmentReader::asks(|environment: &i32| *environment);
    /// let shifted = EnvironmentReader::local(|environment: &i32| environment + 100, reader);
    /// assert_eq!(shifted.run(&1), Ok(101));
    /// ```
    pub fn local<M>(modifier: M, computation: Self) -> Self
    where
        M: Fn(&E) -> E + Send + Sync + 'static,
    {
        Self::of(move |environment| computation.run(&modifier(environment)))
    }
}

impl<E> EnvironmentReader<E, E>
where
    E: Clone + 'static,
{
    /// Creates a reader that returns the whole environment.
    #[must_use]
    pub fn ask() -> Self {
        Self::of(|environment: &E| Ok(environment.clone()))
    }
}

impl<E> EnvironmentReader<E, E::Value>
where
    E: Environment + 'static,
    E::Value: Clone + 'static,
{
    /// Creates a reader that returns the value stored under `name`.
    ///
    /// Running it against an environment without `name` fails with
    /// [`MissingEnvironmentKey`].
    pub fn key(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::of(move |environment: &E| environment.require(&name).cloned())
    }
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<E, T> Clone for EnvironmentReader<E, T>
where
    E: 'static,
    T: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Arc::clone(&self.run_function),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<E, T> fmt::Display for EnvironmentReader<E, T>
where
    E: 'static,
    T: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<EnvironmentReader>")
    }
}

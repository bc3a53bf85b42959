//! Logged Value - computation with an accumulated log.
//!
//! A `LoggedValue<T, L>` pairs a result with an ordered log of entries.
//! Chaining with [`bind`](LoggedValue::bind) concatenates logs: the entries
//! already recorded always come before the entries the continuation adds, no
//! matter how deeply chains are nested. Entries are stored as given and never
//! interpreted.
//!
//! # Laws
//!
//! - Left Identity: `LoggedValue::of(a).bind(f) == f(a)`
//! - Right Identity: `m.bind(LoggedValue::of) == m`
//! - Associativity: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//! - Log Ordering: `m.bind(f).log() == m.log() ++ f(m.result()).log()`
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::LoggedValue;
//!
//! fn add(x: i32, y: i32) -> LoggedValue<i32> {
//!     let result = x + y;
//!     LoggedValue::logged(result, format!("Adding {x} and {y} to get {result}."))
//! }
//!
//! fn multiply(x: i32, y: i32) -> LoggedValue<i32> {
//!     let result = x * y;
//!     LoggedValue::logged(result, format!("Multiplying {x} and {y} to get {result}."))
//! }
//!
//! let computation = add(2, 3).bind(|sum| multiply(sum, 4));
//! assert_eq!(*computation.result(), 20);
//! assert_eq!(
//!     computation.log(),
//!     ["Adding 2 and 3 to get 5.", "Multiplying 5 and 4 to get 20."]
//! );
//! ```

#![forbid(unsafe_code)]

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A result together with the log entries produced while computing it.
///
/// # Type Parameters
///
/// - `T`: The result type
/// - `L`: The log entry type, `String` by default
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoggedValue<T, L = String> {
    /// The result value.
    result: T,
    /// The accumulated entries, oldest first.
    log: Vec<L>,
}

impl<T, L> LoggedValue<T, L> {
    /// Creates a value with an empty log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::LoggedValue;
    ///
    /// let value: LoggedValue<i32> = LoggedValue::of(42);
    /// assert!(value.log().is_empty());
    /// ```
    pub const fn of(value: T) -> Self {
        Self {
            result: value,
            log: Vec::new(),
        }
    }

    /// Alias for `of`.
    pub const fn pure(value: T) -> Self {
        Self::of(value)
    }

    /// Creates a value with an existing log.
    pub const fn new(result: T, log: Vec<L>) -> Self {
        Self { result, log }
    }

    /// Creates a value with a single log entry.
    pub fn logged(result: T, entry: impl Into<L>) -> Self {
        Self {
            result,
            log: vec![entry.into()],
        }
    }

    /// Returns the result.
    pub const fn result(&self) -> &T {
        &self.result
    }

    /// Returns the log, oldest entry first.
    pub fn log(&self) -> &[L] {
        &self.log
    }

    /// Splits into the result and the log.
    pub fn into_parts(self) -> (T, Vec<L>) {
        (self.result, self.log)
    }

    /// Appends one entry to the end of the log, keeping the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::LoggedValue;
    ///
    /// let value: LoggedValue<i32> = LoggedValue::of(1).tell("first").tell("second");
    /// assert_eq!(value.log(), ["first", "second"]);
    /// ```
    #[must_use]
    pub fn tell(mut self, entry: impl Into<L>) -> Self {
        self.log.push(entry.into());
        self
    }

    /// Chains this value with a function producing another logged value.
    ///
    /// The resulting log is this log followed by the continuation's log.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the result and produces a new `LoggedValue`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::LoggedValue;
    ///
    /// let first: LoggedValue<i32> = LoggedValue::logged(10, "first");
    /// let chained = first.bind(|value| LoggedValue::logged(value * 2, "second"));
    /// assert_eq!(*chained.result(), 20);
    /// assert_eq!(chained.log(), ["first", "second"]);
    /// ```
    pub fn bind<U, F>(self, function: F) -> LoggedValue<U, L>
    where
        F: FnOnce(T) -> LoggedValue<U, L>,
    {
        let LoggedValue { result, mut log } = self;
        let next = function(result);
        log.extend(next.log);
        LoggedValue {
            result: next.result,
            log,
        }
    }

    /// Alias for `bind` to match Rust's naming conventions.
    pub fn and_then<U, F>(self, function: F) -> LoggedValue<U, L>
    where
        F: FnOnce(T) -> LoggedValue<U, L>,
    {
        self.bind(function)
    }

    /// Maps a function over the result, leaving the log untouched.
    pub fn fmap<U, F>(self, function: F) -> LoggedValue<U, L>
    where
        F: FnOnce(T) -> U,
    {
        LoggedValue {
            result: function(self.result),
            log: self.log,
        }
    }

    /// Sequences two logged values, discarding the first result.
    #[must_use]
    pub fn then<U>(self, next: LoggedValue<U, L>) -> LoggedValue<U, L> {
        self.bind(move |_| next)
    }

    /// Combines two logged values with a function, keeping both logs in order.
    pub fn map2<U, V, F>(self, other: LoggedValue<U, L>, function: F) -> LoggedValue<V, L>
    where
        F: FnOnce(T, U) -> V,
    {
        self.bind(move |first| other.fmap(move |second| function(first, second)))
    }
}

#[cfg(feature = "tracing")]
impl<T, L: fmt::Display> LoggedValue<T, L> {
    /// Replays every log entry as a `tracing` event, oldest first.
    pub fn emit_log(&self) {
        for (position, entry) in self.log.iter().enumerate() {
            tracing::info!(position, "{entry}");
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display, L> fmt::Display for LoggedValue<T, L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "LoggedValue({}, {} entries)", self.result, self.log.len())
    }
}

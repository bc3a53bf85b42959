//! Optional Value - computation that may have no result.
//!
//! `OptionalValue<T>` is either `Present(T)` or `Absent`. Absence is carried
//! in-band: chaining with [`bind`](OptionalValue::bind) skips every later step
//! once a value is missing, so callers never write the null check themselves.
//!
//! # Laws
//!
//! ## Monad Laws
//!
//! - Left Identity: `OptionalValue::of(a).bind(f) == f(a)`
//! - Right Identity: `m.bind(OptionalValue::of) == m`
//! - Associativity: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//!
//! ## Short-Circuit
//!
//! `OptionalValue::empty().bind(f) == OptionalValue::empty()` and `f` is
//! never called.
//!
//! # Combining
//!
//! [`combine`](OptionalValue::combine) keeps the first *truthy* value. A
//! present value that is falsy (`0`, `""`, an empty collection, `false`) is
//! replaced by the other operand, exactly like a logical OR over the wrapped
//! values. Use [`or_else`](OptionalValue::or_else) when only absence should
//! trigger the fallback.
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::OptionalValue;
//!
//! fn add_one(x: i32) -> OptionalValue<i32> {
//!     OptionalValue::of(x + 1)
//! }
//!
//! fn double(x: i32) -> OptionalValue<i32> {
//!     OptionalValue::of(x * 2)
//! }
//!
//! assert_eq!(OptionalValue::of(3).bind(add_one).bind(double), OptionalValue::of(8));
//! assert_eq!(OptionalValue::empty().bind(add_one).bind(double), OptionalValue::empty());
//! assert_eq!(
//!     OptionalValue::empty().bind(add_one).bind(double).or_else(10),
//!     OptionalValue::of(10)
//! );
//! assert_eq!(OptionalValue::empty() | OptionalValue::of(1), OptionalValue::of(1));
//! ```

#![forbid(unsafe_code)]

use std::fmt;
use std::ops::BitOr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::typeclass::Truthy;

/// A value that is either present or absent.
///
/// # Type Parameters
///
/// - `T`: The type of the wrapped value
///
/// # Examples
///
/// ```rust
/// use monadic::effect::OptionalValue;
///
/// let present = OptionalValue::of(42);
/// let absent: OptionalValue<i32> = OptionalValue::empty();
///
/// assert!(present.is_present());
/// assert!(absent.is_absent());
/// assert_eq!(present.to_string(), "Just 42");
/// assert_eq!(absent.to_string(), "Nothing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OptionalValue<T> {
    /// No value.
    #[default]
    Absent,
    /// A value of type `T`.
    Present(T),
}

impl<T> OptionalValue<T> {
    /// Wraps a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::OptionalValue;
    ///
    /// assert_eq!(OptionalValue::of(3), OptionalValue::Present(3));
    /// ```
    pub const fn of(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates the absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::OptionalValue;
    ///
    /// let absent: OptionalValue<String> = OptionalValue::empty();
    /// assert_eq!(absent, OptionalValue::Absent);
    /// ```
    pub const fn empty() -> Self {
        Self::Absent
    }

    /// Returns `true` if a value is present.
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the wrapped value.
    pub const fn as_ref(&self) -> OptionalValue<&T> {
        match self {
            Self::Present(value) => OptionalValue::Present(value),
            Self::Absent => OptionalValue::Absent,
        }
    }

    /// Chains this value with a function that produces another `OptionalValue`.
    ///
    /// If this value is absent, `function` is not called and the result is
    /// absent. Otherwise the result is whatever `function` returns.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the value and produces a new `OptionalValue`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::OptionalValue;
    ///
    /// let half = |x: i32| if x % 2 == 0 { OptionalValue::of(x / 2) } else { OptionalValue::empty() };
    ///
    /// assert_eq!(OptionalValue::of(8).bind(half).bind(half), OptionalValue::of(2));
    /// assert_eq!(OptionalValue::of(6).bind(half).bind(half), OptionalValue::empty());
    /// ```
    pub fn bind<U, F>(self, function: F) -> OptionalValue<U>
    where
        F: FnOnce(T) -> OptionalValue<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => OptionalValue::Absent,
        }
    }

    /// Alias for `bind` to match Rust's naming conventions.
    pub fn and_then<U, F>(self, function: F) -> OptionalValue<U>
    where
        F: FnOnce(T) -> OptionalValue<U>,
    {
        self.bind(function)
    }

    /// Maps a function over the present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::OptionalValue;
    ///
    /// assert_eq!(OptionalValue::of(21).fmap(|x| x * 2), OptionalValue::of(42));
    /// assert_eq!(OptionalValue::<i32>::empty().fmap(|x| x * 2), OptionalValue::empty());
    /// ```
    pub fn fmap<U, F>(self, function: F) -> OptionalValue<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => OptionalValue::Present(function(value)),
            Self::Absent => OptionalValue::Absent,
        }
    }

    /// Replaces absence with a default value.
    ///
    /// A present value is returned unchanged, even if it is falsy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::OptionalValue;
    ///
    /// assert_eq!(OptionalValue::empty().or_else(10), OptionalValue::of(10));
    /// assert_eq!(OptionalValue::of(0).or_else(10), OptionalValue::of(0));
    /// ```
    #[must_use]
    pub fn or_else(self, default: T) -> Self {
        match self {
            Self::Absent => Self::Present(default),
            present @ Self::Present(_) => present,
        }
    }

    /// Replaces absence with a lazily computed default value.
    #[must_use]
    pub fn or_else_with<F>(self, default: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Absent => Self::Present(default()),
            present @ Self::Present(_) => present,
        }
    }

    /// Keeps this value if it is present and passes `is_usable`, otherwise
    /// returns `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::OptionalValue;
    ///
    /// let positive = |x: &i32| *x > 0;
    /// assert_eq!(OptionalValue::of(-1).combine_by(OptionalValue::of(5), positive), OptionalValue::of(5));
    /// assert_eq!(OptionalValue::of(2).combine_by(OptionalValue::of(5), positive), OptionalValue::of(2));
    /// ```
    #[must_use]
    pub fn combine_by<P>(self, other: Self, is_usable: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let usable = match &self {
            Self::Present(value) => is_usable(value),
            Self::Absent => false,
        };
        if usable { self } else { other }
    }

    /// Returns the wrapped value or `default` if absent.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Converts into a standard `Option`.
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T: Truthy> OptionalValue<T> {
    /// Keeps the first truthy value of the two operands.
    ///
    /// If this value is present and truthy it is returned. Otherwise `other`
    /// is returned unchanged, whether or not it is present. A present but
    /// falsy value such as `0` or `""` is therefore replaced by `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::OptionalValue;
    ///
    /// assert_eq!(OptionalValue::empty().combine(OptionalValue::of(1)), OptionalValue::of(1));
    /// assert_eq!(OptionalValue::of(3).combine(OptionalValue::of(99)), OptionalValue::of(3));
    /// assert_eq!(OptionalValue::of(0).combine(OptionalValue::of(7)), OptionalValue::of(7));
    /// assert_eq!(OptionalValue::of(0).combine(OptionalValue::empty()), OptionalValue::empty());
    /// ```
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        self.combine_by(other, Truthy::is_truthy)
    }
}

impl<T: Truthy> BitOr for OptionalValue<T> {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        self.combine(other)
    }
}

impl<T> From<Option<T>> for OptionalValue<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Absent, Self::Present)
    }
}

impl<T> From<OptionalValue<T>> for Option<T> {
    fn from(value: OptionalValue<T>) -> Self {
        match value {
            OptionalValue::Present(value) => Some(value),
            OptionalValue::Absent => None,
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for OptionalValue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Just {value}"),
            Self::Absent => write!(formatter, "Nothing"),
        }
    }
}

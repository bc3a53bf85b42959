//! Truthy type class - a domain predicate for "is this value usable".
//!
//! `OptionalValue::combine` picks the first *usable* value out of two
//! candidates. What counts as usable is decided by this trait rather than by
//! an implicit language rule: zero numbers, `false`, empty strings and empty
//! collections are falsy, everything else is truthy.
//!
//! # Laws
//!
//! `is_truthy` must be a pure function of the value: calling it twice on the
//! same value returns the same answer.
//!
//! # Examples
//!
//! ```rust
//! use monadic::typeclass::Truthy;
//!
//! assert!(42_i32.is_truthy());
//! assert!(!0_i64.is_truthy());
//! assert!(!"".is_truthy());
//! assert!("text".is_truthy());
//! assert!(!Vec::<i32>::new().is_truthy());
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// A type class for values that can be judged usable or unusable.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::Truthy;
///
/// #[derive(Clone)]
/// struct Port(u16);
///
/// impl Truthy for Port {
///     fn is_truthy(&self) -> bool {
///         self.0 != 0
///     }
/// }
///
/// assert!(Port(8080).is_truthy());
/// assert!(!Port(0).is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value is usable.
    fn is_truthy(&self) -> bool;

    /// Returns `true` if the value is not usable.
    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

macro_rules! impl_truthy_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

// NaN is truthy: only an exact zero (of either sign) is falsy.
macro_rules! impl_truthy_for_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl Truthy for $float {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0.0
                }
            }
        )*
    };
}

impl_truthy_for_float!(f32, f64);

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for VecDeque<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, H> Truthy for HashMap<K, V, H> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, H> Truthy for HashSet<T, H> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Truthy for BTreeMap<K, V> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for BTreeSet<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

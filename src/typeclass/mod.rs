//! Type class traits shared by the effect containers.
//!
//! - [`Truthy`]: the usability predicate behind `OptionalValue::combine`
//!
//! # Examples
//!
//! ```rust
//! use monadic::typeclass::Truthy;
//!
//! assert!(String::from("hello").is_truthy());
//! assert!(!String::new().is_truthy());
//! ```

mod truthy;

pub use truthy::Truthy;

//! # monadic
//!
//! Composable effect containers for Rust.
//!
//! ## Overview
//!
//! Each container lets a caller chain transformations on a value while the
//! container handles one effect on its own:
//!
//! - **`OptionalValue`**: absence, with short-circuiting `bind`
//! - **`DeferredEffect`**: side effects deferred until `invoke`
//! - **`EnvironmentReader`**: configuration supplied explicitly at `run`
//! - **`LoggedValue`**: an append-only log concatenated in call order
//! - **`StateStep`**: state threaded from one step to the next
//!
//! ## Feature Flags
//!
//! - `typeclass`: The `Truthy` trait
//! - `effect`: The effect containers (default)
//! - `serde`: `Serialize`/`Deserialize` for data-carrying containers
//! - `tracing`: Trace spans and events for invocations, lookups and logs
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! let result = OptionalValue::of(3)
//!     .bind(|x| OptionalValue::of(x + 1))
//!     .bind(|x| OptionalValue::of(x * 2));
//! assert_eq!(result, OptionalValue::of(8));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monadic::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;

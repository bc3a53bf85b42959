//! Effect containers for composable computations.
//!
//! Each container threads one kind of auxiliary payload through a chain of
//! operations so the caller does not have to:
//!
//! - [`OptionalValue`]: absence of a value
//! - [`DeferredEffect`]: side effects that run only when invoked
//! - [`EnvironmentReader`]: an explicitly supplied environment
//! - [`LoggedValue`]: an ordered, append-only log
//! - [`StateStep`]: a state value passed from step to step
//!
//! The containers share a documented `bind` contract (take the wrapped
//! value, return a new container) but no common trait.
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::{DeferredEffect, LoggedValue, OptionalValue, StateStep};
//!
//! let optional = OptionalValue::of(3).bind(|x| OptionalValue::of(x + 1));
//! assert_eq!(optional, OptionalValue::of(4));
//!
//! let logged: LoggedValue<i32> = LoggedValue::of(1).tell("start").bind(|x| LoggedValue::logged(x * 2, "doubled"));
//! assert_eq!(logged.log(), ["start", "doubled"]);
//!
//! let state: StateStep<i32, i32> = StateStep::get().bind(|s| StateStep::put(s + 1).then(StateStep::pure(s)));
//! assert_eq!(state.run(5), (5, 6));
//!
//! let deferred = DeferredEffect::pure(10).and_then(|x| DeferredEffect::pure(x + 1));
//! assert_eq!(deferred.invoke(), 11);
//! ```

// =============================================================================
// Errors
// =============================================================================

mod error;

pub use error::MissingEnvironmentKey;

// =============================================================================
// Containers
// =============================================================================

mod deferred;
mod logged;
mod optional;
mod reader;
mod state;

pub use deferred::DeferredEffect;
pub use logged::LoggedValue;
pub use optional::OptionalValue;
pub use reader::EnvironmentReader;
pub use state::StateStep;

// =============================================================================
// Environments and Counters
// =============================================================================

mod counter;
mod environment;

pub use counter::{CounterSession, CounterState, counter_step};
pub use environment::Environment;

// =============================================================================
// Thread Safety
// =============================================================================

static_assertions::assert_impl_all!(OptionalValue<i32>: Send, Sync);
static_assertions::assert_impl_all!(DeferredEffect<String>: Send, Sync);
static_assertions::assert_impl_all!(EnvironmentReader<std::collections::HashMap<String, String>, String>: Send, Sync);
static_assertions::assert_impl_all!(LoggedValue<i32>: Send, Sync);
static_assertions::assert_impl_all!(StateStep<CounterState<i32>, i32>: Send, Sync);
static_assertions::assert_impl_all!(CounterSession<i32>: Send, Sync);

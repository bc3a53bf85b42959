//! A counting state machine built on [`StateStep`].
//!
//! Each step records how many inputs have been seen and which input came
//! last. Feeding an input returns the *previous* input and moves the state to
//! `(count + 1, input)`. Starting from `(0, 0)` and feeding `0, 1, 2, 3, 4`
//! yields results `0, 0, 1, 2, 3` with counts `1, 2, 3, 4, 5`.
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::CounterSession;
//!
//! let mut session = CounterSession::new(0);
//! let mut results = Vec::new();
//! for input in 0..5 {
//!     let (result, next) = session.advance(input);
//!     results.push((result, next.count()));
//!     session = next;
//! }
//! assert_eq!(results, vec![(0, 1), (0, 2), (1, 3), (2, 4), (3, 5)]);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::state::StateStep;

/// The state threaded through [`counter_step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CounterState<T> {
    /// Number of inputs consumed so far.
    pub count: u64,
    /// The most recent input, or the seed before any input.
    pub last_value: T,
}

impl<T> CounterState<T> {
    /// Creates a state with a zero count.
    pub const fn new(last_value: T) -> Self {
        Self {
            count: 0,
            last_value,
        }
    }
}

/// Creates the step that consumes `input`.
///
/// The step returns the previous `last_value` and moves to
/// `{ count + 1, last_value: input }`. The count saturates at `u64::MAX`.
///
/// # Examples
///
/// ```rust
/// use monadic::effect::{counter_step, CounterState};
///
/// let chain = counter_step(1).bind(|first| counter_step(2).fmap(move |second| (first, second)));
/// let (results, state) = chain.run(CounterState::new(0));
/// assert_eq!(results, (0, 1));
/// assert_eq!(state, CounterState { count: 2, last_value: 2 });
/// ```
pub fn counter_step<T>(input: T) -> StateStep<CounterState<T>, T>
where
    T: Clone + Send + Sync + 'static,
{
    StateStep::new(move |state: CounterState<T>| {
        let next = CounterState {
            count: state.count.saturating_add(1),
            last_value: input.clone(),
        };
        (state.last_value, next)
    })
}

/// The latest state of a counter, held by the caller between steps.
///
/// [`advance`](CounterSession::advance) consumes the session and returns the
/// session to use next, so an outdated session cannot be advanced by
/// mistake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSession<T> {
    state: CounterState<T>,
}

impl<T> CounterSession<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Starts a session with a zero count and `seed` as the last value.
    pub const fn new(seed: T) -> Self {
        Self {
            state: CounterState::new(seed),
        }
    }

    /// Resumes a session from a saved state.
    pub const fn from_state(state: CounterState<T>) -> Self {
        Self { state }
    }

    /// Feeds one input, returning the previous input and the next session.
    #[must_use]
    pub fn advance(self, input: T) -> (T, Self) {
        let (result, state) = counter_step(input).run(self.state);
        (result, Self { state })
    }

    /// Number of inputs consumed so far.
    pub const fn count(&self) -> u64 {
        self.state.count
    }

    /// The current state.
    pub const fn state(&self) -> &CounterState<T> {
        &self.state
    }

    /// Ends the session, returning its state.
    pub fn into_state(self) -> CounterState<T> {
        self.state
    }
}

impl<T: fmt::Display> fmt::Display for CounterSession<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "CounterSession(count: {}, last: {})",
            self.state.count, self.state.last_value
        )
    }
}

//! State Step - computation that threads a state value.
//!
//! A `StateStep<S, T>` encapsulates a function `S -> (T, S)`: given the
//! current state it produces a result and the next state. Steps compose with
//! [`bind`](StateStep::bind), which feeds the state produced by one step into
//! the next, strictly in order. A step never reads or writes anything other
//! than the state it is handed, so running it twice on the same state gives
//! the same pair.
//!
//! # Laws
//!
//! ## Monad Laws
//!
//! - Left Identity: `StateStep::pure(a).bind(f) == f(a)`
//! - Right Identity: `m.bind(StateStep::pure) == m`
//! - Associativity: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//!
//! ## State Laws
//!
//! - Get Put: `get().bind(put) == pure(())`
//! - Put Get: `put(s).then(get())` returns `s`
//! - Put Put: `put(s1).then(put(s2)) == put(s2)`
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::StateStep;
//!
//! fn increment() -> StateStep<i32, ()> {
//!     StateStep::modify(|count| count + 1)
//! }
//!
//! let computation = increment()
//!     .then(increment())
//!     .then(increment())
//!     .then(StateStep::get());
//!
//! let (count, _) = computation.run(0);
//! assert_eq!(count, 3);
//! ```

#![forbid(unsafe_code)]

use std::fmt;
use std::sync::Arc;

type Transition<S, T> = dyn Fn(S) -> (T, S) + Send + Sync;

/// A computation that, given a state `S`, returns a result `T` and a new state.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `T`: The result type
///
/// # Examples
///
/// ```rust
/// use monadic::effect::StateStep;
///
/// let computation: StateStep<i32, i32> = StateStep::get()
///     .bind(|current| StateStep::put(current + 1).then(StateStep::pure(current)));
///
/// assert_eq!(computation.run(10), (10, 11));
/// ```
pub struct StateStep<S, T>
where
    S: 'static,
    T: 'static,
{
    transition: Arc<Transition<S, T>>,
}

impl<S, T> StateStep<S, T>
where
    S: 'static,
    T: 'static,
{
    /// Creates a step from a state transition function.
    ///
    /// # Arguments
    ///
    /// * `transition` - A function from the current state to `(result, new_state)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::StateStep;
    ///
    /// let step: StateStep<i32, i32> = StateStep::new(|s| (s * 2, s + 1));
    /// assert_eq!(step.run(10), (20, 11));
    /// ```
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (T, S) + Send + Sync + 'static,
    {
        Self {
            transition: Arc::new(transition),
        }
    }

    /// Alias for `pure`.
    pub fn of(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::pure(value)
    }

    /// Runs the step on `state`, returning the result and the new state.
    pub fn run(&self, state: S) -> (T, S) {
        (self.transition)(state)
    }

    /// Runs the step and keeps only the result.
    pub fn eval(&self, state: S) -> T {
        self.run(state).0
    }

    /// Runs the step and keeps only the new state.
    pub fn exec(&self, state: S) -> S {
        self.run(state).1
    }

    /// Creates a step that returns `value` and leaves the state untouched.
    pub fn pure(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Maps a function over the result.
    pub fn fmap<U, F>(self, function: F) -> StateStep<S, U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        U: 'static,
    {
        let transition = self.transition;
        StateStep::new(move |state| {
            let (result, new_state) = transition(state);
            (function(result), new_state)
        })
    }

    /// Chains this step with a function that produces the next step.
    ///
    /// Running the chain on `s` computes `(r1, s1) = self.run(s)` and then
    /// `function(r1).run(s1)`.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the result and produces the next step
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::StateStep;
    ///
    /// let step: StateStep<i32, i32> = StateStep::new(|s| (s, s + 1));
    /// let chained = step.bind(|value| StateStep::new(move |s: i32| (value + s, s * 2)));
    /// // First: (10, 11), then with state 11: (10 + 11, 22)
    /// assert_eq!(chained.run(10), (21, 22));
    /// ```
    pub fn bind<U, F>(self, function: F) -> StateStep<S, U>
    where
        F: Fn(T) -> StateStep<S, U> + Send + Sync + 'static,
        U: 'static,
    {
        let transition = self.transition;
        StateStep::new(move |state| {
            let (result, intermediate_state) = transition(state);
            function(result).run(intermediate_state)
        })
    }

    /// Alias for `bind` to match Rust's naming conventions.
    pub fn and_then<U, F>(self, function: F) -> StateStep<S, U>
    where
        F: Fn(T) -> StateStep<S, U> + Send + Sync + 'static,
        U: 'static,
    {
        self.bind(function)
    }

    /// Sequences two steps, discarding the first result.
    #[must_use]
    pub fn then<U: 'static>(self, next: StateStep<S, U>) -> StateStep<S, U> {
        let transition = self.transition;
        StateStep::new(move |state| {
            let (_, intermediate_state) = transition(state);
            next.run(intermediate_state)
        })
    }

    /// Combines two steps with a binary function, running `self` first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::StateStep;
    ///
    /// let first: StateStep<i32, i32> = StateStep::new(|s| (s, s + 1));
    /// let second: StateStep<i32, i32> = StateStep::new(|s| (s * 2, s + 1));
    /// let combined = first.map2(second, |a, b| a + b);
    /// // first: (10, 11), second with 11: (22, 12)
    /// assert_eq!(combined.run(10), (32, 12));
    /// ```
    pub fn map2<U, V, F>(self, other: StateStep<S, U>, function: F) -> StateStep<S, V>
    where
        F: Fn(T, U) -> V + Send + Sync + 'static,
        U: 'static,
        V: 'static,
    {
        let transition = self.transition;
        StateStep::new(move |state| {
            let (first, intermediate_state) = transition(state);
            let (second, final_state) = other.run(intermediate_state);
            (function(first, second), final_state)
        })
    }

    /// Creates a step that projects a value out of the state.
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> T + Send + Sync + 'static,
    {
        Self::new(move |state| (projection(&state), state))
    }
}

impl<S> StateStep<S, S>
where
    S: Clone + 'static,
{
    /// Creates a step that returns the current state unchanged.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> StateStep<S, ()>
where
    S: 'static,
{
    /// Creates a step that replaces the state.
    pub fn put(new_state: S) -> Self
    where
        S: Clone + Send + Sync,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Creates a step that transforms the state.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + Send + Sync + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<S, T> Clone for StateStep<S, T>
where
    S: 'static,
    T: 'static,
{
    fn clone(&self) -> Self {
        Self {
            transition: Arc::clone(&self.transition),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<S, T> fmt::Display for StateStep<S, T>
where
    S: 'static,
    T: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<StateStep>")
    }
}

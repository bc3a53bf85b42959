//! Deferred Effect - side effects that run only on request.
//!
//! A `DeferredEffect<T>` describes a computation that may touch the outside
//! world (read a file, print, query a clock) without performing it. Nothing
//! happens until [`invoke`](DeferredEffect::invoke) is called, and composing
//! two effects with [`and_then`](DeferredEffect::and_then) is itself deferred.
//!
//! Every call to `invoke` re-runs the whole chain; results are not cached.
//!
//! # Failures
//!
//! The wrapper adds no error channel. A thunk that can fail returns a
//! `Result` and the caller of `invoke` receives it unchanged. A panic inside
//! the thunk unwinds through `invoke`.
//!
//! # Laws
//!
//! - Left Identity: `DeferredEffect::pure(a).and_then(f) == f(a)`
//! - Right Identity: `m.and_then(DeferredEffect::pure) == m`
//! - Associativity: `m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))`
//!
//! Equality is observational: both sides produce the same value and the
//! same side effects when invoked.
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::DeferredEffect;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let reads = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&reads);
//!
//! let read = DeferredEffect::of(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     "contents".to_string()
//! });
//! let length = read.and_then(|text| DeferredEffect::pure(text.len()));
//!
//! // Nothing has run yet
//! assert_eq!(reads.load(Ordering::SeqCst), 0);
//!
//! assert_eq!(length.invoke(), 8);
//! assert_eq!(length.invoke(), 8);
//! assert_eq!(reads.load(Ordering::SeqCst), 2);
//! ```

#![forbid(unsafe_code)]

use std::fmt;
use std::sync::Arc;

/// A suspended computation that produces a `T` when invoked.
///
/// # Type Parameters
///
/// - `T`: The type of the value produced by the effect.
pub struct DeferredEffect<T> {
    /// The wrapped thunk. Shared so the effect can be cloned and invoked
    /// any number of times.
    thunk: Arc<dyn Fn() -> T + Send + Sync>,
}

impl<T: 'static> DeferredEffect<T> {
    /// Wraps a zero-argument computation without running it.
    ///
    /// # Arguments
    ///
    /// * `thunk` - The computation to defer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::DeferredEffect;
    ///
    /// let effect = DeferredEffect::of(|| 10 + 20);
    /// assert_eq!(effect.invoke(), 30);
    /// ```
    pub fn of<F>(thunk: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            thunk: Arc::new(thunk),
        }
    }

    /// Alias for `of`.
    pub fn new<F>(thunk: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::of(thunk)
    }

    /// Wraps a plain value in an effect that performs nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::DeferredEffect;
    ///
    /// assert_eq!(DeferredEffect::pure(42).invoke(), 42);
    /// ```
    pub fn pure(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::of(move || value.clone())
    }

    /// Runs the effect now and returns its result.
    ///
    /// Each call runs the wrapped computation again.
    pub fn invoke(&self) -> T {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("deferred_effect.invoke").entered();

        (self.thunk)()
    }

    /// Transforms the result of the effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::DeferredEffect;
    ///
    /// let effect = DeferredEffect::pure(21).fmap(|x| x * 2);
    /// assert_eq!(effect.invoke(), 42);
    /// ```
    pub fn fmap<U, F>(self, function: F) -> DeferredEffect<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        U: 'static,
    {
        let thunk = self.thunk;
        DeferredEffect::of(move || function(thunk()))
    }

    /// Sequences this effect with a function producing the next effect.
    ///
    /// The returned effect, when invoked, invokes this effect, passes the
    /// result to `function` and invokes the effect it returns. Building the
    /// chain runs nothing.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the result and returns the next effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::DeferredEffect;
    ///
    /// let effect = DeferredEffect::pure(10).and_then(|x| DeferredEffect::pure(x + 5));
    /// assert_eq!(effect.invoke(), 15);
    /// ```
    pub fn and_then<U, F>(self, function: F) -> DeferredEffect<U>
    where
        F: Fn(T) -> DeferredEffect<U> + Send + Sync + 'static,
        U: 'static,
    {
        let thunk = self.thunk;
        DeferredEffect::of(move || {
            let value = thunk();
            function(value).invoke()
        })
    }

    /// Alias for `and_then`.
    pub fn bind<U, F>(self, function: F) -> DeferredEffect<U>
    where
        F: Fn(T) -> DeferredEffect<U> + Send + Sync + 'static,
        U: 'static,
    {
        self.and_then(function)
    }

    /// Sequences two effects, discarding the result of the first.
    ///
    /// The first effect still runs for its side effects.
    #[must_use]
    pub fn then<U: 'static>(self, next: DeferredEffect<U>) -> DeferredEffect<U> {
        let thunk = self.thunk;
        DeferredEffect::of(move || {
            thunk();
            next.invoke()
        })
    }

    /// Combines two effects with a function, running `self` first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::DeferredEffect;
    ///
    /// let effect = DeferredEffect::pure(10).map2(DeferredEffect::pure(20), |a, b| a + b);
    /// assert_eq!(effect.invoke(), 30);
    /// ```
    pub fn map2<U, V, F>(self, other: DeferredEffect<U>, function: F) -> DeferredEffect<V>
    where
        F: Fn(T, U) -> V + Send + Sync + 'static,
        U: 'static,
        V: 'static,
    {
        let thunk = self.thunk;
        DeferredEffect::of(move || {
            let first = thunk();
            let second = other.invoke();
            function(first, second)
        })
    }

    /// Combines two effects into a tuple.
    #[must_use]
    pub fn product<U: 'static>(self, other: DeferredEffect<U>) -> DeferredEffect<(T, U)> {
        self.map2(other, |first, second| (first, second))
    }
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<T> Clone for DeferredEffect<T> {
    fn clone(&self) -> Self {
        Self {
            thunk: Arc::clone(&self.thunk),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T> fmt::Display for DeferredEffect<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<DeferredEffect>")
    }
}

impl<T> fmt::Debug for DeferredEffect<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("DeferredEffect").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    fn test_display_deferred_effect() {
        let effect = DeferredEffect::pure(1);
        assert_eq!(format!("{effect}"), "<DeferredEffect>");
    }

    #[rstest]
    fn deferred_effect_pure_and_invoke() {
        assert_eq!(DeferredEffect::pure(42).invoke(), 42);
    }

    #[rstest]
    fn deferred_effect_fmap() {
        assert_eq!(DeferredEffect::pure(21).fmap(|x| x * 2).invoke(), 42);
    }

    #[rstest]
    fn deferred_effect_then_runs_both() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let first = DeferredEffect::of(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let effect = first.then(DeferredEffect::pure(20));

        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert_eq!(effect.invoke(), 20);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn deferred_effect_product() {
        let effect = DeferredEffect::pure(10).product(DeferredEffect::pure("ten"));
        assert_eq!(effect.invoke(), (10, "ten"));
    }

    #[rstest]
    fn deferred_effect_clone_shares_thunk() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let effect = DeferredEffect::of(move || counter.fetch_add(1, Ordering::SeqCst));
        let cloned = effect.clone();

        assert_eq!(effect.invoke(), 0);
        assert_eq!(cloned.invoke(), 1);
    }
}

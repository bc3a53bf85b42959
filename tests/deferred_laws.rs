#![cfg(feature = "effect")]
//! Property-based tests for `DeferredEffect` laws.
//!
//! - Left Identity: pure(a).and_then(f) == f(a)
//! - Right Identity: m.and_then(pure) == m
//! - Associativity: m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))
//! - Laziness: building a chain runs nothing

use monadic::effect::DeferredEffect;
use proptest::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn counted(value: i32, runs: &Arc<AtomicUsize>) -> DeferredEffect<i32> {
    let runs = Arc::clone(runs);
    DeferredEffect::of(move || {
        runs.fetch_add(1, Ordering::SeqCst);
        value
    })
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity Law: pure(a).and_then(f) == f(a)
    #[test]
    fn prop_deferred_left_identity(value: i32) {
        let function = |n: i32| DeferredEffect::pure(n.wrapping_mul(2));

        let left_result = DeferredEffect::pure(value).and_then(function).invoke();
        let right_result = function(value).invoke();

        prop_assert_eq!(left_result, right_result);
    }

    /// Right Identity Law: m.and_then(pure) == m, including side effects.
    #[test]
    fn prop_deferred_right_identity(value: i32) {
        let left_runs = Arc::new(AtomicUsize::new(0));
        let right_runs = Arc::new(AtomicUsize::new(0));

        let left_result = counted(value, &left_runs).and_then(DeferredEffect::pure).invoke();
        let right_result = counted(value, &right_runs).invoke();

        prop_assert_eq!(left_result, right_result);
        prop_assert_eq!(left_runs.load(Ordering::SeqCst), right_runs.load(Ordering::SeqCst));
    }

    /// Associativity Law: m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))
    #[test]
    fn prop_deferred_associativity(value: i32) {
        let function1 = |n: i32| DeferredEffect::pure(n.wrapping_add(1));
        let function2 = |n: i32| DeferredEffect::pure(n.wrapping_mul(2));

        let left_result = DeferredEffect::pure(value)
            .and_then(function1)
            .and_then(function2)
            .invoke();
        let right_result = DeferredEffect::pure(value)
            .and_then(move |x| function1(x).and_then(function2))
            .invoke();

        prop_assert_eq!(left_result, right_result);
    }
}

// =============================================================================
// Laziness
// =============================================================================

proptest! {
    /// A chain of any depth performs no effect until invoked, and each
    /// invocation performs every effect once.
    #[test]
    fn prop_deferred_chain_is_lazy(depth in 1usize..20) {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut effect = counted(0, &runs);
        for _ in 0..depth {
            let runs = Arc::clone(&runs);
            effect = effect.and_then(move |n| counted(n + 1, &runs));
        }

        prop_assert_eq!(runs.load(Ordering::SeqCst), 0);
        prop_assert_eq!(effect.invoke(), i32::try_from(depth).unwrap());
        prop_assert_eq!(runs.load(Ordering::SeqCst), depth + 1);
    }
}

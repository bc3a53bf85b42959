#![cfg(feature = "effect")]
//! Property-based tests for `StateStep` laws.
//!
//! ## Monad Laws
//! - Left Identity: pure(a).bind(f) == f(a)
//! - Right Identity: m.bind(pure) == m
//! - Associativity: m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//!
//! ## State Laws
//! - Get Put Law: get().bind(put) == pure(())
//! - Put Get Law: put(s).then(get()) returns s
//! - Put Put Law: put(s1).then(put(s2)) == put(s2)
//!
//! ## Determinism
//! - run(s) == run(s)

use monadic::effect::{CounterState, StateStep, counter_step};
use proptest::prelude::*;

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Monad Left Identity Law: pure(a).bind(f) == f(a)
    #[test]
    fn prop_state_monad_left_identity(value in -1000i32..1000i32, initial_state in -1000i32..1000i32) {
        let function = |a: i32| StateStep::new(move |s: i32| (a.wrapping_add(s), s.wrapping_add(1)));

        let left: StateStep<i32, i32> = StateStep::pure(value).bind(function);
        let right: StateStep<i32, i32> = function(value);

        prop_assert_eq!(left.run(initial_state), right.run(initial_state));
    }

    /// Monad Right Identity Law: m.bind(pure) == m
    #[test]
    fn prop_state_monad_right_identity(initial_state in -1000i32..1000i32) {
        let step: StateStep<i32, i32> = StateStep::new(|s: i32| (s.wrapping_mul(2), s.wrapping_add(1)));
        let right_identity = step.clone().bind(StateStep::pure);

        prop_assert_eq!(step.run(initial_state), right_identity.run(initial_state));
    }

    /// Monad Associativity Law: m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
    #[test]
    fn prop_state_monad_associativity(initial_state in -100i32..100i32) {
        let function1 = |a: i32| StateStep::new(move |s: i32| (a.wrapping_add(s), s.wrapping_add(1)));
        let function2 = |b: i32| StateStep::new(move |s: i32| (b.wrapping_mul(s), s.wrapping_mul(2)));

        let step: StateStep<i32, i32> = StateStep::new(|s: i32| (s, s));

        let left = step.clone().bind(function1).bind(function2);
        let right = step.bind(move |x| function1(x).bind(function2));

        prop_assert_eq!(left.run(initial_state), right.run(initial_state));
    }
}

// =============================================================================
// State Laws
// =============================================================================

proptest! {
    /// Get Put Law: get().bind(put) == pure(())
    #[test]
    fn prop_state_get_put(initial_state in -1000i32..1000i32) {
        let left: StateStep<i32, ()> = StateStep::get().bind(StateStep::put);
        let right: StateStep<i32, ()> = StateStep::pure(());

        prop_assert_eq!(left.run(initial_state), right.run(initial_state));
    }

    /// Put Get Law: put(s).then(get()) returns s
    #[test]
    fn prop_state_put_get(initial_state in -1000i32..1000i32, new_state in -1000i32..1000i32) {
        let step: StateStep<i32, i32> = StateStep::put(new_state).then(StateStep::get());
        prop_assert_eq!(step.run(initial_state), (new_state, new_state));
    }

    /// Put Put Law: put(s1).then(put(s2)) == put(s2)
    #[test]
    fn prop_state_put_put(initial_state: i32, first: i32, second: i32) {
        let left: StateStep<i32, ()> = StateStep::put(first).then(StateStep::put(second));
        let right: StateStep<i32, ()> = StateStep::put(second);

        prop_assert_eq!(left.run(initial_state), right.run(initial_state));
    }
}

// =============================================================================
// Determinism
// =============================================================================

proptest! {
    /// Running a counter chain twice from the same state gives the same pair.
    #[test]
    fn prop_counter_chain_is_deterministic(
        inputs in prop::collection::vec(-100i32..100i32, 1..10),
        seed in -100i32..100i32,
    ) {
        let mut chain: StateStep<CounterState<i32>, Vec<i32>> = StateStep::pure(Vec::new());
        for input in inputs.clone() {
            chain = chain.bind(move |results| {
                counter_step(input).fmap(move |result| {
                    let mut results = results.clone();
                    results.push(result);
                    results
                })
            });
        }

        let initial = CounterState::new(seed);
        let first_run = chain.run(initial);
        let second_run = chain.run(initial);
        prop_assert_eq!(&first_run, &second_run);

        let (results, final_state) = first_run;
        prop_assert_eq!(final_state.count, inputs.len() as u64);
        prop_assert_eq!(final_state.last_value, *inputs.last().unwrap());
        prop_assert_eq!(results[0], seed);
        prop_assert_eq!(&results[1..], &inputs[..inputs.len() - 1]);
    }
}

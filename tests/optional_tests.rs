#![cfg(feature = "effect")]
//! Unit tests for `OptionalValue`.
//!
//! Covers construction, chaining, fallback and the truthiness-based
//! combination rule, including the falsy-but-present cases.

use monadic::effect::OptionalValue;
use monadic::typeclass::Truthy;
use rstest::rstest;
use std::cell::Cell;

fn add_one(x: i32) -> OptionalValue<i32> {
    OptionalValue::of(x + 1)
}

fn double(x: i32) -> OptionalValue<i32> {
    OptionalValue::of(x * 2)
}

// =============================================================================
// Chaining
// =============================================================================

#[rstest]
fn chain_on_present_value() {
    assert_eq!(OptionalValue::of(3).bind(add_one).bind(double), OptionalValue::of(8));
}

#[rstest]
fn chain_on_absent_value() {
    assert_eq!(OptionalValue::empty().bind(add_one).bind(double), OptionalValue::empty());
}

#[rstest]
fn chain_then_fallback() {
    let result = OptionalValue::empty().bind(add_one).bind(double).or_else(10);
    assert_eq!(result, OptionalValue::of(10));
}

#[rstest]
fn bind_returns_continuation_result_as_is() {
    let result = OptionalValue::of(1).bind(|_| OptionalValue::<String>::empty());
    assert!(result.is_absent());
}

#[rstest]
fn absent_skips_call_counting_stub() {
    let calls = Cell::new(0_u32);
    let stub = |x: i32| {
        calls.set(calls.get() + 1);
        OptionalValue::of(x)
    };

    let _ = OptionalValue::of(1).bind(stub);
    assert_eq!(calls.get(), 1);

    let result = OptionalValue::<i32>::empty().bind(stub).bind(stub);
    assert_eq!(result, OptionalValue::empty());
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Combination
// =============================================================================

#[rstest]
fn combine_empty_with_present() {
    assert_eq!(OptionalValue::empty() | OptionalValue::of(1), OptionalValue::of(1));
}

#[rstest]
fn combine_first_truthy_wins() {
    assert_eq!(OptionalValue::of(3).combine(OptionalValue::of(99)), OptionalValue::of(3));
}

#[rstest]
#[case(OptionalValue::of(0), OptionalValue::of(7), OptionalValue::of(7))]
#[case(OptionalValue::of(0), OptionalValue::of(0), OptionalValue::of(0))]
#[case(OptionalValue::of(0), OptionalValue::empty(), OptionalValue::empty())]
fn combine_replaces_falsy_present_value(
    #[case] left: OptionalValue<i64>,
    #[case] right: OptionalValue<i64>,
    #[case] expected: OptionalValue<i64>,
) {
    assert_eq!(left.combine(right), expected);
}

#[rstest]
#[case("", "fallback", "fallback")]
#[case("value", "fallback", "value")]
fn combine_strings(#[case] left: &str, #[case] right: &str, #[case] expected: &str) {
    let combined = OptionalValue::of(left.to_string()) | OptionalValue::of(right.to_string());
    assert_eq!(combined, OptionalValue::of(expected.to_string()));
}

#[rstest]
fn combine_with_custom_truthiness() {
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Port(u16);

    impl Truthy for Port {
        fn is_truthy(&self) -> bool {
            self.0 != 0
        }
    }

    let unset = OptionalValue::of(Port(0));
    assert_eq!(unset.combine(OptionalValue::of(Port(8080))), OptionalValue::of(Port(8080)));
}

#[rstest]
fn combine_by_uses_given_predicate() {
    let negative = OptionalValue::of(-5);
    let result = negative.combine_by(OptionalValue::of(5), |value| *value >= 0);
    assert_eq!(result, OptionalValue::of(5));
}

#[rstest]
fn or_else_keeps_falsy_present_value() {
    assert_eq!(OptionalValue::of(0).or_else(10), OptionalValue::of(0));
}

// =============================================================================
// Conversions and Display
// =============================================================================

#[rstest]
#[case(OptionalValue::of(8), "Just 8")]
#[case(OptionalValue::empty(), "Nothing")]
fn display(#[case] value: OptionalValue<i32>, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[rstest]
fn unwrap_or_and_into_option() {
    assert_eq!(OptionalValue::of(2).unwrap_or(9), 2);
    assert_eq!(OptionalValue::empty().unwrap_or(9), 9);
    assert_eq!(OptionalValue::of("x").into_option(), Some("x"));
    let option: Option<i32> = OptionalValue::empty().into();
    assert_eq!(option, None);
}

#[rstest]
fn as_ref_borrows_value() {
    let value = OptionalValue::of(String::from("owned"));
    assert_eq!(value.as_ref().fmap(String::len), OptionalValue::of(5));
    assert!(value.is_present());
}

//! Maybe Projection Laws
//!
//! Every Maybe operation evaluated on both variants.

use crate::test_utils::*;

// =============================================================================
// Present
// =============================================================================

#[test]
fn test_just_projections() {
    let v = String::from("value");
    let m = just(v.clone());

    assert!(m.is_present());
    assert!(!m.is_absent());
    assert_eq!(m.clone().force_unwrap(), v);
    assert_eq!(m.clone().unwrap_or(String::from("default")), v);
    assert_eq!(m.to_vec(), vec![v]);
}

#[test]
fn test_just_or_returns_self() {
    assert_eq!(just(1).or(just(2)), just(1));
    assert_eq!(just(1).or(nothing()), just(1));
}

// =============================================================================
// Absent
// =============================================================================

#[test]
fn test_nothing_projections() {
    let m: Maybe<i32> = nothing();

    assert!(!m.is_present());
    assert!(m.is_absent());
    assert_eq!(m.unwrap_or(7), 7);
    assert_eq!(m.to_vec(), Vec::<i32>::new());
    assert_eq!(m.unwrap_or_default(), 0);
}

#[test]
fn test_nothing_or_returns_alternative() {
    assert_eq!(nothing().or(just(2)), just(2));
    assert_eq!(nothing::<i32>().or(nothing()), nothing());
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn test_or_idempotent() {
    for m in [just(1), nothing()] {
        assert_eq!(m.or(just(5)).or(just(5)), m.or(just(5)));
    }
}

#[test]
fn test_unwrap_or_repeatable() {
    let m: Maybe<u8> = nothing();
    assert_eq!(m.unwrap_or(3), m.unwrap_or(3));
}

//! Property-Based Tests
//!
//! The projection laws checked over arbitrary values.

use crate::test_utils::*;
use proptest::prelude::*;

fn arb_maybe() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn arb_opt() -> impl Strategy<Value = Opt<i32>> {
    any::<Option<i32>>().prop_map(Opt::from)
}

proptest! {
    #[test]
    fn prop_just_projections(v: i32, d: i32) {
        let m = just(v);
        prop_assert!(m.is_present());
        prop_assert_eq!(m.force_unwrap(), v);
        prop_assert_eq!(m.unwrap_or(d), v);
        prop_assert_eq!(m.to_vec(), vec![v]);
    }

    #[test]
    fn prop_nothing_projections(d: i32) {
        let m: Maybe<i32> = nothing();
        prop_assert!(m.is_absent());
        prop_assert_eq!(m.unwrap_or(d), d);
        prop_assert!(m.to_vec().is_empty());
    }

    #[test]
    fn prop_some_projections(v: i32, d: i32) {
        let o = some(v);
        prop_assert!(o.is_some());
        prop_assert_eq!(o.unwrap(), v);
        prop_assert_eq!(o.unwrap_or(d), v);
        prop_assert_eq!(o.or(d), o);
    }

    #[test]
    fn prop_none_projections(d: i32) {
        let o: Opt<i32> = none();
        prop_assert!(o.is_none());
        prop_assert_eq!(o.unwrap_or(d), d);
        prop_assert_eq!(o.unwrap_or_default(), 0);
        prop_assert_eq!(o.or(d), some(d));
    }

    #[test]
    fn prop_filter_matches_predicate(o in arb_opt(), threshold: i32) {
        let kept = o.filter(|v| *v > threshold);
        match o {
            Opt::Some(v) if v > threshold => {
                prop_assert_eq!(kept, some(v));
            }
            _ => {
                prop_assert_eq!(kept, none());
            }
        }
    }

    #[test]
    fn prop_xor_matches_presence_count(a in arb_opt(), b in arb_opt()) {
        let r = a.xor(b);
        prop_assert_eq!(r.is_some(), a.is_some() != b.is_some());
        if a.is_some() && b.is_none() {
            prop_assert_eq!(r, a);
        }
        if a.is_none() && b.is_some() {
            prop_assert_eq!(r, b);
        }
    }

    #[test]
    fn prop_xor_with_self_is_none(a in arb_opt()) {
        prop_assert_eq!(a.xor(a), none());
    }

    #[test]
    fn prop_maybe_or_idempotent(m in arb_maybe(), alt in arb_maybe()) {
        prop_assert_eq!(m.or(alt).or(alt), m.or(alt));
    }

    #[test]
    fn prop_opt_ops_idempotent(o in arb_opt(), d: i32) {
        prop_assert_eq!(o.or(d).or(d), o.or(d));
        prop_assert_eq!(o.filter(|v| v % 2 == 0).filter(|v| v % 2 == 0), o.filter(|v| v % 2 == 0));
        prop_assert_eq!(o.unwrap_or(d), o.unwrap_or(d));
        prop_assert_eq!(o.unwrap_or_else(|| d), o.unwrap_or_else(|| d));
        prop_assert_eq!(o.unwrap_or_default(), o.unwrap_or_default());
        prop_assert_eq!(some(o.unwrap_or_else(|| d)).unwrap_or_else(|| d), o.unwrap_or_else(|| d));
    }

    #[test]
    fn prop_sequence_round_trip(head: i32, rest in prop::collection::vec(any::<i32>(), 0..8)) {
        let mut seq = vec![head];
        seq.extend(rest);
        let m: Maybe<i32> = sequence_to_optional(seq);
        prop_assert_eq!(m, just(head));
    }

    #[test]
    fn prop_collect_present_order(xs in prop::collection::vec(arb_maybe(), 0..32)) {
        let expected: Vec<i32> = xs.iter().filter_map(|m| Option::<i32>::from(*m)).collect();
        prop_assert_eq!(collect_present(xs), expected);
    }

    #[test]
    fn prop_convert_preserves_variant(m in arb_maybe()) {
        let o: Opt<i32> = convert(m);
        prop_assert_eq!(o.is_some(), m.is_present());
        let back: Maybe<i32> = convert(o);
        prop_assert_eq!(back, m);
    }

    #[test]
    fn prop_flatten_nested(inner in arb_opt(), outer_present: bool) {
        let nested = if outer_present { some(inner) } else { none() };
        let expected = if outer_present { inner } else { none() };
        prop_assert_eq!(flatten(nested), expected);
    }
}

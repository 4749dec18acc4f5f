//! Free-function combinators over any [`Optional`]
//!
//! - `match_optional`: two-way dispatch
//! - `sequence_to_optional` / `collect_present` / `map_rejecting`: sequence boundary
//! - `fold_optional`: default-or-transform
//! - `flatten`: collapse nested optionality
//! - `convert`: move between optional families
//! - `map_sequence`: plain element-wise map
//!
//! Callbacks run synchronously, at most once per element, in input order.

use crate::traits::Optional;

/// Call `present` with the value if there is one, otherwise `absent`
///
/// Exactly one branch executes.
pub fn match_optional<O, R, P, A>(value: O, present: P, absent: A) -> R
where
    O: Optional,
    P: FnOnce(O::Item) -> R,
    A: FnOnce() -> R,
{
    value.fold(present, absent)
}

/// First element of `seq` as a present value, or absent when `seq` is empty
///
/// Elements past the first are never pulled from the iterator.
pub fn sequence_to_optional<O, I>(seq: I) -> O
where
    O: Optional,
    I: IntoIterator<Item = O::Item>,
{
    match seq.into_iter().next() {
        Some(first) => O::present(first),
        None => O::absent(),
    }
}

/// Values of the present entries, in input order; absent entries are dropped
pub fn collect_present<O, I>(seq: I) -> Vec<O::Item>
where
    O: Optional,
    I: IntoIterator<Item = O>,
{
    let mut out = Vec::new();
    for entry in seq {
        entry.fold(|v| out.push(v), || ());
    }
    out
}

/// Map every element through `f`, keeping only the present results
///
/// Order-preserving; the result is never longer than the input.
pub fn map_rejecting<T, O, F, I>(f: F, seq: I) -> Vec<O::Item>
where
    O: Optional,
    F: FnMut(T) -> O,
    I: IntoIterator<Item = T>,
{
    collect_present(seq.into_iter().map(f))
}

/// `f(value)` when present, `default` when absent
///
/// `f` is not invoked in the absent case.
pub fn fold_optional<O, U, F>(default: U, f: F, optional: O) -> U
where
    O: Optional,
    F: FnOnce(O::Item) -> U,
{
    optional.fold(f, move || default)
}

/// Collapse two layers of optionality into one
///
/// `present(present(v))` becomes `present(v)`; both `present(absent)` and
/// `absent` become `absent`.
pub fn flatten<O>(optional: O) -> O::Item
where
    O: Optional,
    O::Item: Optional,
{
    optional.fold(|inner| inner, <O::Item as Optional>::absent)
}

/// Re-wrap `from` in another optional family, keeping variant and value
pub fn convert<A, B>(from: A) -> B
where
    A: Optional,
    B: Optional<Item = A::Item>,
{
    from.fold(B::present, B::absent)
}

/// Plain element-wise map over a sequence
pub fn map_sequence<T, U, F, I>(f: F, seq: I) -> Vec<U>
where
    F: FnMut(T) -> U,
    I: IntoIterator<Item = T>,
{
    seq.into_iter().map(f).collect()
}

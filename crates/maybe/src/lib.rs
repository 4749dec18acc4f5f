//! The `Maybe` optional family
//!
//! - Maybe: `Just(T)` / `Nothing`
//! - just / nothing: constructor shorthands
//! - match_maybe: two-way dispatch
//!
//! The sequence helpers (`collect_present`, `map_rejecting`, ...) live in
//! `optkit-core` and accept a `Maybe` through the `Optional` trait.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod maybe;

pub use maybe::{just, match_maybe, nothing, Maybe};

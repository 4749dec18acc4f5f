//! The `Opt` optional family
//!
//! - Opt: `Opt::Some(T)` / `Opt::None`
//! - some / none: constructor shorthands
//! - match_strict: two-way dispatch
//!
//! `Opt` implements `optkit_core::Optional`, so every free-function
//! combinator in `optkit-core` accepts it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod opt;

pub use opt::{match_strict, none, some, Opt};

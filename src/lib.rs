//! optkit - optional-value containers and combinators
//!
//! Two optional families share one capability trait:
//!
//! - [`Maybe`]: `Just(T)` / `Nothing`, list-style (`to_vec`, `or` over containers)
//! - [`Opt`]: `Opt::Some(T)` / `Opt::None`, with `filter`, `xor`, eager and lazy fallbacks
//! - [`Optional`]: the trait both implement; the free functions below accept either
//!
//! # Quick Start
//!
//! ```
//! use optkit::{collect_present, just, nothing, some, Opt};
//!
//! let values = collect_present(vec![just(1), nothing(), just(2)]);
//! assert_eq!(values, vec![1, 2]);
//!
//! let port: Opt<u16> = Opt::None;
//! assert_eq!(port.or(8080), some(8080));
//! ```
//!
//! # Failure
//!
//! `Maybe::force_unwrap` and `Opt::unwrap` panic on an empty container.
//! With the `unwrap-trace` feature (default) an `error!` event is emitted first.
//! Use `try_force_unwrap` / `try_unwrap` to get an [`Error`] instead.

pub use optkit_core::{
    collect_present, convert, fail, flatten, fold_optional, map_rejecting, map_sequence,
    match_optional, sequence_to_optional, Error, Optional, Result,
};
pub use optkit_maybe::{just, match_maybe, nothing, Maybe};
pub use optkit_option::{match_strict, none, some, Opt};

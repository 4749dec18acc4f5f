//! Core types and traits for optkit
//!
//! This crate defines what both optional families share:
//! - Optional: the capability trait (constructors, presence test, `fold`)
//! - Combinators: free functions written against `Optional` only
//! - Error: the fatal unwrap errors and the `fail` helper that raises them

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod combinators;
pub mod error;
pub mod traits;

pub use combinators::{
    collect_present, convert, flatten, fold_optional, map_rejecting, map_sequence,
    match_optional, sequence_to_optional,
};
pub use error::{fail, Error, Result};
pub use traits::Optional;

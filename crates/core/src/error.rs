//! Error types for optkit
//!
//! Absence is data, not an error. The only failures in the workspace are
//! the unconditional unwraps on an absent container, and those are fatal:
//! `force_unwrap`/`unwrap` route through [`fail`], which panics.
//! The same values are returned by the `try_*` unwrap variants for callers
//! that prefer to propagate them with `?`.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for optkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for optional-value containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// `force_unwrap` called on a `Maybe` holding nothing
    #[error("called `force_unwrap` on an absent Maybe<{type_name}>")]
    UnwrapOnAbsent {
        /// Name of the element type
        type_name: &'static str,
    },

    /// `unwrap` called on an `Opt` holding nothing
    #[error("called `unwrap` on a None Opt<{type_name}>")]
    UnwrapOnNone {
        /// Name of the element type
        type_name: &'static str,
    },
}

impl Error {
    /// Unwrap-on-absent error for element type `T`
    pub fn unwrap_on_absent<T>() -> Self {
        Error::UnwrapOnAbsent {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Unwrap-on-none error for element type `T`
    pub fn unwrap_on_none<T>() -> Self {
        Error::UnwrapOnNone {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Name of the element type the failed unwrap was asked for
    pub fn type_name(&self) -> &'static str {
        match self {
            Error::UnwrapOnAbsent { type_name } | Error::UnwrapOnNone { type_name } => type_name,
        }
    }
}

/// Raise the fatal unwrap signal
///
/// Never returns. The panic location reported is the caller's.
#[track_caller]
#[cold]
pub fn fail(err: Error) -> ! {
    #[cfg(feature = "unwrap-trace")]
    tracing::error!(type_name = err.type_name(), error = %err, "unwrap on empty container");

    panic!("{}", err)
}

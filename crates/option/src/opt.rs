//! The `Opt` family: a Rust-style optional value
//!
//! `Opt<T>` is either `Opt::Some(T)` or `Opt::None`. Compared with
//! `Maybe`, it carries more unwrap strategies, predicate filtering,
//! eager and lazy fallbacks, and exclusive-or combination.
//!
//! ## Laziness
//!
//! | Operation        | Argument            | Evaluated        |
//! |------------------|---------------------|------------------|
//! | `or`             | value `T`           | by the caller    |
//! | `unwrap_or`      | value `T`           | by the caller    |
//! | `or_else`        | `FnOnce() -> Opt`   | only when `None` |
//! | `unwrap_or_else` | `FnOnce() -> T`     | only when `None` |
//! | `filter`         | `FnOnce(&T) -> bool`| only when `Some` |

use optkit_core::{fail, Error, Optional, Result};

/// A value that is either `Opt::Some(T)` or `Opt::None`
///
/// The variant never changes after construction. `None` never produces a
/// `T` except through `unwrap_or_default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Opt<T> {
    /// Holds exactly one value
    Some(T),
    /// Holds no value
    None,
}

/// Shorthand for `Opt::Some(value)`
#[inline]
pub fn some<T>(value: T) -> Opt<T> {
    Opt::Some(value)
}

/// Shorthand for `Opt::None`
#[inline]
pub fn none<T>() -> Opt<T> {
    Opt::None
}

impl<T> Opt<T> {
    // =========================================================================
    // Presence
    // =========================================================================

    /// True for `Some`
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Opt::Some(_))
    }

    /// True for `None`
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    // =========================================================================
    // Unwrapping
    // =========================================================================

    /// Return the contained value
    ///
    /// # Panics
    ///
    /// Panics with [`Error::UnwrapOnNone`] if `self` is `None`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Opt::Some(v) => v,
            Opt::None => fail(Error::unwrap_on_none::<T>()),
        }
    }

    /// Return the contained value, or `Error::UnwrapOnNone`
    pub fn try_unwrap(self) -> Result<T> {
        match self {
            Opt::Some(v) => Ok(v),
            Opt::None => Err(Error::unwrap_on_none::<T>()),
        }
    }

    /// Return the contained value, or `default` for `None`
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Opt::Some(v) => v,
            Opt::None => default,
        }
    }

    /// Return the contained value, or call `f` for `None`
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Opt::Some(v) => v,
            Opt::None => f(),
        }
    }

    /// Return the contained value, or `T::default()` for `None`
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Opt::Some(v) => v,
            Opt::None => T::default(),
        }
    }

    // =========================================================================
    // Fallbacks
    // =========================================================================

    /// `self` if it is `Some`, otherwise `Some(default)`
    #[inline]
    pub fn or(self, default: T) -> Opt<T> {
        match self {
            Opt::Some(_) => self,
            Opt::None => Opt::Some(default),
        }
    }

    /// `self` if it is `Some`, otherwise the result of `f`
    #[inline]
    pub fn or_else<F>(self, f: F) -> Opt<T>
    where
        F: FnOnce() -> Opt<T>,
    {
        match self {
            Opt::Some(_) => self,
            Opt::None => f(),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Keep the value only if `predicate` holds for it
    ///
    /// `predicate` is called once for `Some` and never for `None`.
    pub fn filter<P>(self, predicate: P) -> Opt<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Opt::Some(v) => {
                if predicate(&v) {
                    Opt::Some(v)
                } else {
                    Opt::None
                }
            }
            Opt::None => Opt::None,
        }
    }

    /// `Some` when exactly one of `self` and `other` is `Some`, else `None`
    pub fn xor(self, other: Opt<T>) -> Opt<T> {
        match (self, other) {
            (Opt::Some(v), Opt::None) | (Opt::None, Opt::Some(v)) => Opt::Some(v),
            _ => Opt::None,
        }
    }

    /// Transform the contained value
    pub fn map<U, F>(self, f: F) -> Opt<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Opt::Some(v) => Opt::Some(f(v)),
            Opt::None => Opt::None,
        }
    }

    /// Chain a computation that may itself produce `None`
    pub fn and_then<U, F>(self, f: F) -> Opt<U>
    where
        F: FnOnce(T) -> Opt<U>,
    {
        match self {
            Opt::Some(v) => f(v),
            Opt::None => Opt::None,
        }
    }

    /// Borrow the contained value
    #[inline]
    pub const fn as_ref(&self) -> Opt<&T> {
        match self {
            Opt::Some(v) => Opt::Some(v),
            Opt::None => Opt::None,
        }
    }

    /// Iterate over the zero or one contained values
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        Option::<&T>::from(self.as_ref()).into_iter()
    }
}

impl<T> Default for Opt<T> {
    fn default() -> Self {
        Opt::None
    }
}

impl<T> Optional for Opt<T> {
    type Item = T;

    #[inline]
    fn present(value: T) -> Self {
        Opt::Some(value)
    }

    #[inline]
    fn absent() -> Self {
        Opt::None
    }

    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }

    fn fold<R, P, A>(self, present: P, absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self {
            Opt::Some(v) => present(v),
            Opt::None => absent(),
        }
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Opt::Some(v),
            None => Opt::None,
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(value: Opt<T>) -> Self {
        match value {
            Opt::Some(v) => Some(v),
            Opt::None => None,
        }
    }
}

impl<T> IntoIterator for Opt<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Option::<T>::from(self).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Opt<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Dispatch on an `Opt`: `some(v)` for `Some(v)`, `none()` for `None`
///
/// Exactly one branch executes.
pub fn match_strict<T, R, S, N>(optional: Opt<T>, some: S, none: N) -> R
where
    S: FnOnce(T) -> R,
    N: FnOnce() -> R,
{
    match optional {
        Opt::Some(v) => some(v),
        Opt::None => none(),
    }
}

//! The `Maybe` family: a list-style optional value
//!
//! `Maybe<T>` is either `Just(T)` or `Nothing`. Its surface follows the
//! list-oriented tradition: presence tests, unwrapping with and without a
//! default, conversion to and from a sequence, and an `or` that picks
//! between two whole containers.
//!
//! ## `or` vs. `Opt::or`
//!
//! `Maybe::or` takes an alternative *container* and returns a container.
//! The Option family's `or` takes a raw *value*. Both evaluate their
//! argument eagerly; see `unwrap_or_else` for the lazy form.

use optkit_core::{fail, Error, Optional, Result};

/// A value that is either `Just(T)` or `Nothing`
///
/// The variant never changes after construction; every combinator
/// consumes `self` and returns a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// Holds exactly one value
    Just(T),
    /// Holds no value
    Nothing,
}

/// Shorthand for `Maybe::Just(value)`
#[inline]
pub fn just<T>(value: T) -> Maybe<T> {
    Maybe::Just(value)
}

/// Shorthand for `Maybe::Nothing`
#[inline]
pub fn nothing<T>() -> Maybe<T> {
    Maybe::Nothing
}

impl<T> Maybe<T> {
    // =========================================================================
    // Presence
    // =========================================================================

    /// True for `Just`
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// True for `Nothing`
    #[inline]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    // =========================================================================
    // Unwrapping
    // =========================================================================

    /// Return the contained value
    ///
    /// # Panics
    ///
    /// Panics with [`Error::UnwrapOnAbsent`] if `self` is `Nothing`.
    #[track_caller]
    pub fn force_unwrap(self) -> T {
        match self {
            Maybe::Just(v) => v,
            Maybe::Nothing => fail(Error::unwrap_on_absent::<T>()),
        }
    }

    /// Return the contained value, or `Error::UnwrapOnAbsent`
    pub fn try_force_unwrap(self) -> Result<T> {
        match self {
            Maybe::Just(v) => Ok(v),
            Maybe::Nothing => Err(Error::unwrap_on_absent::<T>()),
        }
    }

    /// Return the contained value, or `default` for `Nothing`
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Just(v) => v,
            Maybe::Nothing => default,
        }
    }

    /// Return the contained value, or call `f` for `Nothing`
    ///
    /// `f` runs only in the `Nothing` case.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Just(v) => v,
            Maybe::Nothing => f(),
        }
    }

    /// Return the contained value, or `T::default()` for `Nothing`
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    // =========================================================================
    // Sequences
    // =========================================================================

    /// `[v]` for `Just(v)`, `[]` for `Nothing`
    pub fn to_vec(self) -> Vec<T> {
        match self {
            Maybe::Just(v) => vec![v],
            Maybe::Nothing => Vec::new(),
        }
    }

    /// Iterate over the zero or one contained values
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        Option::<&T>::from(self.as_ref()).into_iter()
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// `self` if it is `Just`, otherwise `alternative`
    ///
    /// The alternative is built by the caller before the call.
    #[inline]
    pub fn or(self, alternative: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Just(_) => self,
            Maybe::Nothing => alternative,
        }
    }

    /// Transform the contained value
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Just(v) => Maybe::Just(f(v)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Chain a computation that may itself produce `Nothing`
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Just(v) => f(v),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Borrow the contained value
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Just(v) => Maybe::Just(v),
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<T> Optional for Maybe<T> {
    type Item = T;

    #[inline]
    fn present(value: T) -> Self {
        Maybe::Just(value)
    }

    #[inline]
    fn absent() -> Self {
        Maybe::Nothing
    }

    #[inline]
    fn is_present(&self) -> bool {
        Maybe::is_present(self)
    }

    fn fold<R, P, A>(self, present: P, absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self {
            Maybe::Just(v) => present(v),
            Maybe::Nothing => absent(),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Maybe::Just(v),
            None => Maybe::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Just(v) => Some(v),
            Maybe::Nothing => None,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Option::<T>::from(self).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects the first element, like `sequence_to_optional`
impl<T> FromIterator<T> for Maybe<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        optkit_core::sequence_to_optional(iter)
    }
}

/// Dispatch on a `Maybe`: `just(v)` for `Just(v)`, `nothing()` for `Nothing`
pub fn match_maybe<T, R, J, N>(value: Maybe<T>, just: J, nothing: N) -> R
where
    J: FnOnce(T) -> R,
    N: FnOnce() -> R,
{
    optkit_core::match_optional(value, just, nothing)
}

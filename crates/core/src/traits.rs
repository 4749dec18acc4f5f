//! The shared capability both optional families implement
//!
//! The free-function combinators in [`crate::combinators`] are written
//! against this trait only, so they work for `Maybe<T>`, `Opt<T>`,
//! and any other two-state container that implements it.

/// A container that holds exactly one `Item` or nothing
///
/// The variant is fixed at construction. `fold` is the exhaustive
/// eliminator: it consumes the container and runs exactly one of its two
/// callbacks.
///
/// # Examples
///
/// ```
/// use optkit_core::Optional;
///
/// fn describe<O: Optional<Item = i32>>(o: O) -> String {
///     o.fold(|v| format!("got {}", v), || "nothing".to_string())
/// }
/// ```
pub trait Optional: Sized {
    /// The contained value type
    type Item;

    /// Wrap a value in the present variant
    fn present(value: Self::Item) -> Self;

    /// Build the absent variant
    fn absent() -> Self;

    /// True when a value is held
    fn is_present(&self) -> bool;

    /// True when no value is held
    #[inline]
    fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Consume the container, calling `present` with the value or `absent`
    fn fold<R, P, A>(self, present: P, absent: A) -> R
    where
        P: FnOnce(Self::Item) -> R,
        A: FnOnce() -> R;
}

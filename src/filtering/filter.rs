//! Filtering traits.

/// immutable, pure filter (2 successive equal inputs -> 2 equal outputs)
///
/// `detect` returns `true` for items that are kept.
pub trait Filter<T> {
    fn detect(&self, item: T) -> bool;
}

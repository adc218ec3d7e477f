//! Nested values with a closed set of shapes.
//!
//! A [Nested] value is a scalar, a sequence of nested values, or a mapping
//! from keys to nested values. The shape is fixed when the value is built, so
//! recursive helpers such as [deep_min] match on it instead of probing what
//! the value can do.

use std::hash::Hash;

use super::invertible_map::FxIndexMap;

#[derive(Debug, Clone)]
pub enum Nested<K, T> {
    Scalar(T),
    Sequence(Vec<Nested<K, T>>),
    /// Entries keep their insertion order.
    Mapping(FxIndexMap<K, Nested<K, T>>),
}

impl<K, T> Nested<K, T> {
    pub fn scalar(value: T) -> Self { Nested::Scalar(value) }

    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Nested<K, T>>,
    {
        Nested::Sequence(items.into_iter().collect())
    }

    pub fn mapping<I>(entries: I) -> Self
    where
        K: Hash + Eq,
        I: IntoIterator<Item = (K, Nested<K, T>)>,
    {
        Nested::Mapping(entries.into_iter().collect())
    }

    /// Count the scalars anywhere inside the value.
    pub fn scalar_count(&self) -> usize {
        match self {
            Nested::Scalar(_) => 1,
            Nested::Sequence(items) => items.iter().map(Nested::scalar_count).sum(),
            Nested::Mapping(entries) => entries.values().map(Nested::scalar_count).sum(),
        }
    }

    pub fn deep_min(&self) -> Option<&T>
    where
        T: Ord,
    {
        deep_min(self)
    }
}

/// Find the smallest scalar in a nested value.
///
/// A scalar is its own minimum. For a mapping only the values are searched,
/// never the keys. Empty containers contribute nothing, so `None` means there
/// is no scalar anywhere in `value`.
pub fn deep_min<K, T: Ord>(value: &Nested<K, T>) -> Option<&T> {
    match value {
        Nested::Scalar(x) => Some(x),
        Nested::Sequence(items) => items.iter().filter_map(|item| deep_min(item)).min(),
        Nested::Mapping(entries) => entries.values().filter_map(|item| deep_min(item)).min(),
    }
}

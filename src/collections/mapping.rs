//! Mapping capabilities.
//!
//! [Mapping] and [MutableMapping] describe what a key-value container can do,
//! so that helpers like [delete_min_key] can be written once for the standard
//! maps and for [InvertibleMap] alike.
//!
//! Lookups return owned values. [InvertibleMap] keeps its storage behind
//! shared cells and cannot hand out plain references.

use std::{
    collections::{BTreeMap, HashMap},
    convert::Infallible,
    hash::{BuildHasher, Hash},
};

use indexmap::IndexMap;

use super::invertible_map::{InvertibleMap, InvertibleMapError};

/// A read-only key-value container.
pub trait Mapping {
    type Key;
    type Value;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool { self.len() == 0 }

    fn contains(&self, key: &Self::Key) -> bool;

    /// Get a copy of the value bound to `key`.
    fn lookup(&self, key: &Self::Key) -> Option<Self::Value>;

    /// Collect the keys, in the container's iteration order.
    fn key_list(&self) -> Vec<Self::Key>;
}

/// A key-value container that can be updated.
pub trait MutableMapping: Mapping {
    /// The error returned when an assignment is refused.
    type Error;

    /// Bind `key` to `value`, returning the previous value of `key`.
    fn assign(
        &mut self,
        key: Self::Key,
        value: Self::Value,
    ) -> Result<Option<Self::Value>, Self::Error>;

    /// Remove `key`, returning its value if it was present.
    fn discard(&mut self, key: &Self::Key) -> Option<Self::Value>;

    fn clear_all(&mut self);
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn len(&self) -> usize { HashMap::len(self) }

    fn contains(&self, key: &K) -> bool { self.contains_key(key) }

    fn lookup(&self, key: &K) -> Option<V> { self.get(key).cloned() }

    fn key_list(&self) -> Vec<K> { self.keys().cloned().collect() }
}

impl<K, V, S> MutableMapping for HashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    type Error = Infallible;

    fn assign(&mut self, key: K, value: V) -> Result<Option<V>, Infallible> {
        Ok(self.insert(key, value))
    }

    fn discard(&mut self, key: &K) -> Option<V> { self.remove(key) }

    fn clear_all(&mut self) { self.clear() }
}

impl<K, V> Mapping for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn len(&self) -> usize { BTreeMap::len(self) }

    fn contains(&self, key: &K) -> bool { self.contains_key(key) }

    fn lookup(&self, key: &K) -> Option<V> { self.get(key).cloned() }

    fn key_list(&self) -> Vec<K> { self.keys().cloned().collect() }
}

impl<K, V> MutableMapping for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    type Error = Infallible;

    fn assign(&mut self, key: K, value: V) -> Result<Option<V>, Infallible> {
        Ok(self.insert(key, value))
    }

    fn discard(&mut self, key: &K) -> Option<V> { self.remove(key) }

    fn clear_all(&mut self) { self.clear() }
}

impl<K, V, S> Mapping for IndexMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn len(&self) -> usize { IndexMap::len(self) }

    fn contains(&self, key: &K) -> bool { self.contains_key(key) }

    fn lookup(&self, key: &K) -> Option<V> { self.get(key).cloned() }

    fn key_list(&self) -> Vec<K> { self.keys().cloned().collect() }
}

impl<K, V, S> MutableMapping for IndexMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    type Error = Infallible;

    fn assign(&mut self, key: K, value: V) -> Result<Option<V>, Infallible> {
        Ok(self.insert(key, value))
    }

    // keep the order of the remaining entries
    fn discard(&mut self, key: &K) -> Option<V> { self.shift_remove(key) }

    fn clear_all(&mut self) { self.clear() }
}

impl<K, V> Mapping for InvertibleMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
{
    type Key = K;
    type Value = V;

    fn len(&self) -> usize { InvertibleMap::len(self) }

    fn contains(&self, key: &K) -> bool { self.contains_key(key) }

    fn lookup(&self, key: &K) -> Option<V> { self.try_get(key) }

    fn key_list(&self) -> Vec<K> { self.keys().collect() }
}

impl<K, V> MutableMapping for InvertibleMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
{
    type Error = InvertibleMapError<K, V>;

    fn assign(&mut self, key: K, value: V) -> Result<Option<V>, Self::Error> {
        self.insert(key, value)
    }

    fn discard(&mut self, key: &K) -> Option<V> { self.pop(key) }

    fn clear_all(&mut self) { self.clear() }
}

/// Remove the smallest key from any mutable mapping.
///
/// # Returns
///
/// - `Some((key, value))` with the removed entry.
/// - `None` if the mapping is empty, in which case nothing happens.
pub fn delete_min_key<M>(map: &mut M) -> Option<(M::Key, M::Value)>
where
    M: MutableMapping + ?Sized,
    M::Key: Ord,
{
    let key = map.key_list().into_iter().min()?;
    let value = map.discard(&key)?;
    Some((key, value))
}

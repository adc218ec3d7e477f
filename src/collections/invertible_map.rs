//! Invertible (one-to-one) map.
//!
//! [InvertibleMap] keeps a forward map and its inverse in lockstep. Every
//! value is bound to exactly one key, and an update that would bind a value
//! to a second key is rejected before anything is written.
//!
//! The two sides are stored separately and shared by reference. The handle
//! returned by [InvertibleMap::inverse] holds the same two maps with their
//! roles swapped, so edits made through either handle are visible through the
//! other.
//!
//! ```rust
//! use invmap::collections::InvertibleMap;
//!
//! let mut colors = InvertibleMap::try_from([(1, "red"), (2, "green")]).unwrap();
//! let mut codes = colors.inverse();
//!
//! assert_eq!(codes.get(&"green"), Ok(2));
//!
//! // The inverse is a live view, not a copy.
//! codes.remove(&"red").unwrap();
//! codes.insert("blue", 1).unwrap();
//! assert_eq!(colors.get(&1), Ok("blue"));
//! assert!(!colors.contains_value(&"red"));
//!
//! // Binding a value to a second key is refused, from either side.
//! assert!(colors.insert(3, "green").is_err());
//! assert!(codes.insert("green", 1).is_err());
//! assert_eq!(colors.len(), 2);
//! ```
//!
//! # Threading
//!
//! The storage lives behind [Rc] and [RefCell], so the map is neither `Send`
//! nor `Sync`. Each operation validates first and then writes both sides
//! without yielding, so no observer on the same thread sees a half-applied
//! update.

use std::{
    cell::RefCell,
    collections::HashMap,
    fmt,
    hash::{BuildHasher, BuildHasherDefault, Hash},
    rc::Rc,
};

use indexmap::IndexMap;
use rustc_hash::FxHasher;
use thiserror::Error;

pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// One side of the map, shared between a handle and its inverse.
type Side<K, V> = Rc<RefCell<FxIndexMap<K, V>>>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvertibleMapError<K, V> {
    /// The key is not in the map.
    #[error("key not found: {0:?}")]
    KeyNotFound(K),

    /// Two different keys would share one value.
    ///
    /// `existing` is the key that already holds `value`, `offending` is the
    /// key whose update was refused.
    #[error("not invertible: keys {existing:?} and {offending:?} both map to {value:?}")]
    NotInvertible { existing: K, offending: K, value: V },
}

pub type InvertibleMapResult<T, K, V> = Result<T, InvertibleMapError<K, V>>;

/// A mutable bijective map with a live inverse view.
///
/// Keys iterate in insertion order. Re-binding an existing key to a new value
/// keeps the key in place.
pub struct InvertibleMap<K, V> {
    forward: Side<K, V>,
    backward: Side<V, K>,
}

impl<K, V> InvertibleMap<K, V> {
    pub fn new() -> Self { Self::from_sides(FxIndexMap::default(), FxIndexMap::default()) }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_sides(
            FxIndexMap::with_capacity_and_hasher(capacity, Default::default()),
            FxIndexMap::with_capacity_and_hasher(capacity, Default::default()),
        )
    }

    /// Wrap an already consistent pair of maps. No bijection check is done.
    fn from_sides(forward: FxIndexMap<K, V>, backward: FxIndexMap<V, K>) -> Self {
        Self {
            forward: Rc::new(RefCell::new(forward)),
            backward: Rc::new(RefCell::new(backward)),
        }
    }

    /// Get the inverse view of the map.
    ///
    /// The returned handle uses the backward map as its forward map and vice
    /// versa. Nothing is copied, and calling `inverse` on the result gives a
    /// handle equivalent to `self`.
    pub fn inverse(&self) -> InvertibleMap<V, K> {
        InvertibleMap {
            forward: Rc::clone(&self.backward),
            backward: Rc::clone(&self.forward),
        }
    }

    /// Get another handle to the same storage, in the same orientation.
    pub fn share(&self) -> Self {
        Self {
            forward: Rc::clone(&self.forward),
            backward: Rc::clone(&self.backward),
        }
    }

    /// Check if two handles in the same orientation alias one storage.
    pub fn shares_storage(&self, other: &Self) -> bool { Rc::ptr_eq(&self.forward, &other.forward) }

    pub fn len(&self) -> usize { self.forward.borrow().len() }

    pub fn is_empty(&self) -> bool { self.forward.borrow().is_empty() }

    /// Iterate over the keys in insertion order.
    pub fn keys(&self) -> Keys<K, V> {
        Keys(Cursor {
            side: Rc::clone(&self.forward),
            pos: 0,
        })
    }

    /// Iterate over the values, in the insertion order of their keys.
    pub fn values(&self) -> Values<K, V> {
        Values(Cursor {
            side: Rc::clone(&self.forward),
            pos: 0,
        })
    }

    /// Iterate over the `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<K, V> {
        Iter(Cursor {
            side: Rc::clone(&self.forward),
            pos: 0,
        })
    }
}

impl<K, V> InvertibleMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
{
    /// Build a map from seed pairs, applied in iteration order.
    ///
    /// # Returns
    ///
    /// - `Ok(map)` if the pairs form a one-to-one mapping.
    /// - `Err(NotInvertible)` naming the first key that held the shared
    ///   value, the later key, and the value itself.
    ///
    /// A repeated key is re-bound, the same as [InvertibleMap::insert].
    pub fn try_from_iter<I>(seed: I) -> InvertibleMapResult<Self, K, V>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let seed = seed.into_iter();
        let mut map = Self::with_capacity(seed.size_hint().0);
        map.extend_checked(seed)?;
        Ok(map)
    }

    /// Get the value bound to `key`.
    pub fn get<Q>(&self, key: &Q) -> InvertibleMapResult<V, K, V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        self.try_get(key)
            .ok_or_else(|| InvertibleMapError::KeyNotFound(key.to_owned()))
    }

    pub fn try_get<Q>(&self, key: &Q) -> Option<V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.borrow().get(key).cloned()
    }

    pub fn get_or<Q>(&self, key: &Q, default: V) -> V
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.try_get(key).unwrap_or(default)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.borrow().contains_key(key)
    }

    /// Check if some key is bound to `value`. Answered by the inverse index.
    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        V: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.backward.borrow().contains_key(value)
    }

    /// Bind `key` to `value`.
    ///
    /// If `value` is already bound to another key, nothing changes and
    /// `NotInvertible` is returned. If `key` was bound to a different value,
    /// that value is released from the inverse side first.
    ///
    /// # Returns
    ///
    /// The value `key` was bound to before the call, if any.
    pub fn insert(&mut self, key: K, value: V) -> InvertibleMapResult<Option<V>, K, V> {
        let mut forward = self.forward.borrow_mut();
        let mut backward = self.backward.borrow_mut();

        if let Some(existing) = backward.get(&value) {
            if *existing != key {
                return Err(InvertibleMapError::NotInvertible {
                    existing: existing.clone(),
                    offending: key,
                    value,
                });
            }
        }

        // drop the stale reverse link before re-binding the key
        if let Some(old_value) = forward.get(&key) {
            if *old_value != value {
                backward.shift_remove(old_value);
            }
        }

        let old_value = forward.insert(key.clone(), value.clone());
        backward.insert(value, key);

        Ok(old_value)
    }

    /// Remove `key` and its value from both sides.
    pub fn remove<Q>(&mut self, key: &Q) -> InvertibleMapResult<V, K, V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        self.pop(key)
            .ok_or_else(|| InvertibleMapError::KeyNotFound(key.to_owned()))
    }

    /// Remove `key` if present, returning its value.
    pub fn pop<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let value = self.forward.borrow_mut().shift_remove(key)?;
        self.backward.borrow_mut().shift_remove(&value);
        Some(value)
    }

    /// Remove the most recently inserted entry.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let (key, value) = self.forward.borrow_mut().pop()?;
        self.backward.borrow_mut().shift_remove(&value);
        Some((key, value))
    }

    /// Get the value of `key`, binding it to `default` first if it is absent.
    pub fn entry_or_insert(&mut self, key: K, default: V) -> InvertibleMapResult<V, K, V> {
        if let Some(value) = self.try_get(&key) {
            return Ok(value);
        }
        self.insert(key, default.clone())?;
        Ok(default)
    }

    /// Insert every pair in order, stopping at the first conflict.
    ///
    /// Pairs inserted before the conflict stay in the map.
    pub fn extend_checked<I>(&mut self, pairs: I) -> InvertibleMapResult<(), K, V>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in pairs {
            self.insert(key, value)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.forward.borrow_mut().clear();
        self.backward.borrow_mut().clear();
    }

    /// Copy the map into fresh storage, detached from `self` and its inverse.
    pub fn deep_clone(&self) -> Self {
        Self::from_sides(self.forward.borrow().clone(), self.backward.borrow().clone())
    }
}

impl<K, V> Default for InvertibleMap<K, V> {
    fn default() -> Self { Self::new() }
}

/// Maps are equal when they hold the same entries, whatever the order.
impl<K, V> PartialEq for InvertibleMap<K, V>
where
    K: Hash + Eq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool { *self.forward.borrow() == *other.forward.borrow() }
}

impl<K, V> Eq for InvertibleMap<K, V>
where
    K: Hash + Eq,
    V: Eq,
{
}

impl<K, V> fmt::Debug for InvertibleMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvertibleMap(")?;
        f.debug_map().entries(self.forward.borrow().iter()).finish()?;
        write!(f, ")")
    }
}

impl<K, V, const N: usize> TryFrom<[(K, V); N]> for InvertibleMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
{
    type Error = InvertibleMapError<K, V>;

    fn try_from(seed: [(K, V); N]) -> Result<Self, Self::Error> { Self::try_from_iter(seed) }
}

/// The conflicting keys reported on failure depend on the seed's iteration
/// order, which is unspecified for [HashMap].
impl<K, V, S> TryFrom<HashMap<K, V, S>> for InvertibleMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
{
    type Error = InvertibleMapError<K, V>;

    fn try_from(seed: HashMap<K, V, S>) -> Result<Self, Self::Error> { Self::try_from_iter(seed) }
}

impl<K, V, S> TryFrom<IndexMap<K, V, S>> for InvertibleMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Error = InvertibleMapError<K, V>;

    fn try_from(seed: IndexMap<K, V, S>) -> Result<Self, Self::Error> { Self::try_from_iter(seed) }
}

impl<K, V> IntoIterator for &InvertibleMap<K, V>
where
    K: Clone,
    V: Clone,
{
    type Item = (K, V);
    type IntoIter = Iter<K, V>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// A position in the forward side, read one entry at a time.
///
/// The cursor holds its own handle to the storage and only borrows it inside
/// [Cursor::advance]. Mutating the map while a cursor is alive is allowed, but
/// what the cursor yields afterwards is unspecified.
struct Cursor<K, V> {
    side: Side<K, V>,
    pos: usize,
}

impl<K, V> Cursor<K, V> {
    fn advance<T>(&mut self, f: impl FnOnce(&K, &V) -> T) -> Option<T> {
        let item = self.side.borrow().get_index(self.pos).map(|(k, v)| f(k, v))?;
        self.pos += 1;
        Some(item)
    }
}

/// Iterator over the keys of an [InvertibleMap].
pub struct Keys<K, V>(Cursor<K, V>);

/// Iterator over the values of an [InvertibleMap].
pub struct Values<K, V>(Cursor<K, V>);

/// Iterator over the entries of an [InvertibleMap].
pub struct Iter<K, V>(Cursor<K, V>);

impl<K: Clone, V> Iterator for Keys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> { self.0.advance(|k, _| k.clone()) }
}

impl<K, V: Clone> Iterator for Values<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> { self.0.advance(|_, v| v.clone()) }
}

impl<K: Clone, V: Clone> Iterator for Iter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> { self.0.advance(|k, v| (k.clone(), v.clone())) }
}

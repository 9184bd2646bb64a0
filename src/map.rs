//! Ordered map type for sequence entries and record fields.
//!
//! This module provides [`FieldMap`], a wrapper around [`IndexMap`] keyed by
//! [`Key`]. Insertion order is load-bearing for the exporter: it decides both the
//! order of rendered entry lines and the order in which nested sequences receive
//! their `&<id>` numbers.
//!
//! ## Examples
//!
//! ```rust
//! use value_exporter::{FieldMap, Key, Value};
//!
//! let mut map = FieldMap::new();
//! map.insert("name", Value::from("Alice"));
//! map.insert(0, Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get(&Key::from("name")).and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::{Key, Value};
use indexmap::IndexMap;

/// An ordered map of [`Key`]s to [`Value`]s.
///
/// # Examples
///
/// ```rust
/// use value_exporter::{FieldMap, Key, Value};
///
/// let mut map = FieldMap::new();
/// map.insert("first", Value::from(1));
/// map.insert("second", Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec![Key::from("first"), Key::from("second")]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldMap(IndexMap<Key, Value>);

impl FieldMap {
    /// Creates an empty `FieldMap`.
    #[must_use]
    pub fn new() -> Self {
        FieldMap(IndexMap::new())
    }

    /// Creates an empty `FieldMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FieldMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// Re-inserting an existing key replaces its value in place and keeps the
    /// key's original position. The old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_exporter::{FieldMap, Value};
    ///
    /// let mut map = FieldMap::new();
    /// assert!(map.insert("key", Value::from(42)).is_none());
    /// assert!(map.insert("key", Value::from(43)).is_some());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: impl Into<Key>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.0.get(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns `true` if the map holds the key.
    #[must_use]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.0.iter()
    }
}

impl IntoIterator for FieldMap {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(Key, Value)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        FieldMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacing_keeps_position() {
        let mut map = FieldMap::new();
        map.insert("a", Value::from(1));
        map.insert("b", Value::from(2));
        map.insert("a", Value::from(3));

        let entries: Vec<_> = map.iter().map(|(k, v)| (k.clone(), v.as_i64())).collect();
        assert_eq!(
            entries,
            vec![(Key::from("a"), Some(3)), (Key::from("b"), Some(2))]
        );
    }

    #[test]
    fn test_int_and_string_keys_are_distinct() {
        let mut map = FieldMap::new();
        map.insert(0, Value::from("int"));
        map.insert("0", Value::from("string"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut map: FieldMap = vec![
            (Key::from("x"), Value::from(1)),
            (Key::from("y"), Value::from(2)),
            (Key::from("z"), Value::from(3)),
        ]
        .into_iter()
        .collect();

        assert!(map.remove(&Key::from("y")).is_some());
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec![Key::from("x"), Key::from("z")]);
    }
}

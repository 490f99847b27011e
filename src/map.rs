//! Insertion-ordered object map.
//!
//! [`Map`] wraps [`IndexMap`] so that object members keep the order in which
//! they were inserted (or parsed). Two behaviors depend on this:
//!
//! - regex path tokens select the *first* matching member in iteration order
//! - tuple-to-series reshaping emits one column per key in first-seen order
//!
//! ## Examples
//!
//! ```rust
//! use nds_path::{Map, Value};
//!
//! let mut map = Map::new();
//! map.insert("x1".to_string(), Value::from(1));
//! map.insert("y2".to_string(), Value::from(2));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["x1", "y2"]);
//! ```

use crate::Value;
use indexmap::IndexMap;

/// An ordered map of string keys to [`Value`]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map(IndexMap<String, Value>);

impl Map {
    /// Creates an empty `Map`.
    #[must_use]
    pub fn new() -> Self {
        Map(IndexMap::new())
    }

    /// Creates an empty `Map` with room for `capacity` members.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map(IndexMap::with_capacity(capacity))
    }

    /// Inserts a member.
    ///
    /// Re-inserting an existing key replaces its value but keeps its original
    /// position; the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nds_path::{Map, Value};
    ///
    /// let mut map = Map::new();
    /// map.insert("a".to_string(), Value::from(1));
    /// map.insert("b".to_string(), Value::from(2));
    /// assert!(map.insert("a".to_string(), Value::from(3)).is_some());
    /// assert_eq!(map.keys().next().map(String::as_str), Some("a"));
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the first member whose key satisfies `pred`, in insertion order.
    pub fn find<F>(&self, mut pred: F) -> Option<(&String, &Value)>
    where
        F: FnMut(&str) -> bool,
    {
        self.0.iter().find(|(k, _)| pred(k))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the members, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Map(IndexMap::from_iter(iter))
    }
}

use std::slice;

use crate::collections::Map;
use crate::error::{Error, Result};

/// Flat key/value store backed by a plain entry vector.
///
/// Every operation is a linear scan, which is the point: this is the chain
/// bucket behind [`ChainMap`](crate::collections::ChainMap), and under the
/// load factor a bucket holds a handful of entries at most. At that size a
/// branch-free scan over contiguous pairs beats another hash layer.
///
/// Removal shifts the tail down so iteration order stays insertion order.
#[derive(Debug, Clone)]
pub struct ArrayMap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> ArrayMap<K, V> {
    pub fn new() -> Self {
        ArrayMap { entries: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ArrayMap {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(pair_refs)
    }
}

impl<K, V> ArrayMap<K, V>
where
    K: Eq,
{
    pub fn get(&self, key: &K) -> Result<&V> {
        match self.position(key) {
            Some(index) => Ok(&self.entries[index].1),
            None => Err(Error::KeyNotFound),
        }
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        match self.position(key) {
            Some(index) => Ok(&mut self.entries[index].1),
            None => Err(Error::KeyNotFound),
        }
    }

    /// Upsert; returns the value the key previously held, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &K) -> Result<V> {
        match self.position(key) {
            Some(index) => Ok(self.entries.remove(index).1),
            None => Err(Error::KeyNotFound),
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl<K, V> Default for ArrayMap<K, V> {
    fn default() -> Self {
        ArrayMap::new()
    }
}

impl<K, V> Map<K, V> for ArrayMap<K, V>
where
    K: Eq,
{
    fn len(&self) -> usize {
        ArrayMap::len(self)
    }

    fn get(&self, key: &K) -> Result<&V> {
        ArrayMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        ArrayMap::get_mut(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        ArrayMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Result<V> {
        ArrayMap::remove(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        ArrayMap::contains_key(self, key)
    }
}

impl<K, V> IntoIterator for ArrayMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a ArrayMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = std::iter::Map<slice::Iter<'a, (K, V)>, fn(&'a (K, V)) -> (&'a K, &'a V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().map(pair_refs)
    }
}

fn pair_refs<K, V>(entry: &(K, V)) -> (&K, &V) {
    (&entry.0, &entry.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get() {
        let mut map = ArrayMap::new();
        assert_eq!(map.insert("a", 1), None);
        assert_eq!(map.insert("b", 2), None);
        assert_eq!(map.get(&"a"), Ok(&1));
        assert_eq!(map.get(&"b"), Ok(&2));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn insert_existing_key_replaces_value() {
        let mut map = ArrayMap::new();
        map.insert("a", 1);
        assert_eq!(map.insert("a", 10), Some(1));
        assert_eq!(map.get(&"a"), Ok(&10));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn get_and_remove_report_missing_keys() {
        let mut map: ArrayMap<&str, i32> = ArrayMap::new();
        assert_eq!(map.get(&"missing"), Err(Error::KeyNotFound));
        assert_eq!(map.remove(&"missing"), Err(Error::KeyNotFound));
        map.insert("a", 1);
        assert_eq!(map.get(&"missing"), Err(Error::KeyNotFound));
    }

    #[test]
    fn remove_shifts_and_preserves_order() {
        let mut map = ArrayMap::new();
        for (i, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
            map.insert(key, i);
        }
        assert_eq!(map.remove(&"b"), Ok(1));
        let keys: Vec<&str> = map.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["a", "c", "d"]);
        assert!(!map.contains_key(&"b"));
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut map = ArrayMap::new();
        map.insert("count", 1);
        if let Ok(value) = map.get_mut(&"count") {
            *value += 9;
        }
        assert_eq!(map.get(&"count"), Ok(&10));
    }

    #[test]
    fn owned_iteration_yields_all_entries() {
        let mut map = ArrayMap::new();
        map.insert(1u32, "one");
        map.insert(2, "two");
        let entries: Vec<(u32, &str)> = map.into_iter().collect();
        assert_eq!(entries, vec![(1, "one"), (2, "two")]);
    }
}

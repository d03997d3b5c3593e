use std::fmt;
use std::hash::Hash;

use crate::collections::ChainMap;
use crate::error::Result;

/// Presence-only view of a [`ChainMap`]: membership is exactly "the key is
/// present", with unit values carrying no payload.
#[derive(Clone)]
pub struct ChainSet<T> {
    map: ChainMap<T, ()>,
}

impl<T> ChainSet<T> {
    pub fn new() -> Self {
        ChainSet { map: ChainMap::new() }
    }

    /// A set with a caller-chosen starting capacity, for the common case of
    /// building many small sets.
    pub fn with_capacity(capacity: usize) -> Self {
        ChainSet {
            map: ChainMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<T> ChainSet<T>
where
    T: Eq + Hash,
{
    /// Adds the item; returns whether it was newly inserted.
    pub fn insert(&mut self, item: T) -> bool {
        self.map.insert(item, ()).is_none()
    }

    /// Fails with [`Error::KeyNotFound`](crate::error::Error) if the item is
    /// not a member.
    pub fn remove(&mut self, item: &T) -> Result<()> {
        self.map.remove(item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.map.contains_key(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.map.iter().map(|(item, _)| item)
    }
}

impl<T> Default for ChainSet<T> {
    fn default() -> Self {
        ChainSet::new()
    }
}

impl<T> fmt::Debug for ChainSet<T>
where
    T: fmt::Debug + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for ChainSet<T>
where
    T: Eq + Hash,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.insert(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn membership_follows_insert_and_remove() {
        let mut set = ChainSet::with_capacity(313);
        assert!(set.insert("a"));
        assert!(set.insert("b"));
        assert!(!set.insert("a"), "re-inserting a member is a no-op");
        assert_eq!(set.len(), 2);
        assert!(set.contains(&"a"));

        assert_eq!(set.remove(&"a"), Ok(()));
        assert!(!set.contains(&"a"));
        assert_eq!(set.remove(&"a"), Err(Error::KeyNotFound));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iteration_yields_each_member_once() {
        let mut set = ChainSet::with_capacity(313);
        set.extend(0..50u32);
        set.extend(25..75u32);
        let mut members: Vec<u32> = set.iter().copied().collect();
        members.sort_unstable();
        assert_eq!(members, (0..75).collect::<Vec<u32>>());
    }
}

use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use super::{BucketKey, Iter, KeyNotFound, ValueNotFound, ZeroCapacity};
use crate::collections::contiguous::Array;
use crate::collections::linked::LinkedList;
use crate::util::fmt::{DebugRaw, DebugWith};
use crate::util::result::ResultExtension;

/// A map of keys to values, with a fixed number of buckets chosen at construction.
///
/// Each key is placed in the bucket given by [`BucketKey::bucket`], and entries which share a
/// bucket are chained together in a [`LinkedList`], newest first. The table is never resized, so
/// chains grow linearly once the number of entries exceeds the capacity.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashTable.
/// - `c`: The number of entries in the bucket for the key in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(c)` |
/// | `get` | `O(c)` |
/// | `remove` | `O(c)` |
/// | `contains` | `O(c)` |
/// | `find_key` | `O(n)` |
///
/// With a well distributed set of keys, `c` is roughly `n / cap`.
pub struct HashTable<K: BucketKey + Eq, V> {
    pub(crate) buckets: Array<LinkedList<Entry<K, V>>>,
    pub(crate) len: usize,
}

pub(crate) struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K: BucketKey + Eq, V> HashTable<K, V> {
    /// Creates a new HashTable with exactly `cap` empty buckets.
    ///
    /// # Panics
    /// Panics if `cap` is zero, or if the memory layout size exceeds [`isize::MAX`].
    #[track_caller]
    pub fn with_cap(cap: usize) -> HashTable<K, V> {
        Self::try_with_cap(cap).throw()
    }

    /// Creates a new HashTable with exactly `cap` empty buckets.
    ///
    /// # Errors
    /// Returns [`ZeroCapacity`] if `cap` is zero.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub fn try_with_cap(cap: usize) -> Result<HashTable<K, V>, ZeroCapacity> {
        if cap == 0 {
            return Err(ZeroCapacity);
        }

        Ok(HashTable {
            buckets: Array::repeat_default(cap),
            len: 0,
        })
    }

    /// Returns the number of entries in the HashTable.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashTable contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets in the HashTable.
    pub const fn cap(&self) -> usize {
        self.buckets.size()
    }

    /// Associates `value` with `key`. If the key already has an entry, its value is replaced in
    /// place and the previous value is returned. Otherwise, a new entry is added to the front of
    /// the key's bucket.
    ///
    /// # Examples
    /// ```
    /// # use structure_bench::collections::hash::HashTable;
    /// let mut table = HashTable::with_cap(5);
    /// assert_eq!(table.insert(0, "a"), None);
    /// assert_eq!(table.insert(0, "b"), Some("a"));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.index_for(&key);
        let chain = &mut self.buckets[index];

        if let Some(existing) = chain.iter_mut().find(|entry| entry.key == key) {
            return Some(mem::replace(&mut existing.value, value));
        }

        chain.push_front(Entry { key, value });
        self.len += 1;
        None
    }

    /// Removes the entry for `key`, returning its value.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if there is no entry for `key`.
    pub fn remove(&mut self, key: &K) -> Result<V, KeyNotFound> {
        let index = self.index_for(key);
        let entry = self.buckets[index]
            .remove_first(|entry| entry.key == *key)
            .ok_or(KeyNotFound)?;

        self.len -= 1;
        Ok(entry.value)
    }

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if there is no entry for `key`.
    pub fn get(&self, key: &K) -> Result<&V, KeyNotFound> {
        self.chain_for(key)
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| &entry.value)
            .ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if there is no entry for `key`.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, KeyNotFound> {
        let index = self.index_for(key);

        self.buckets[index]
            .iter_mut()
            .find(|entry| entry.key == *key)
            .map(|entry| &mut entry.value)
            .ok_or(KeyNotFound)
    }

    /// Returns true if there is an entry for `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_ok()
    }

    /// Finds a key associated with `value`, checking every bucket in order and each chain from
    /// newest to oldest. The first matching entry is used.
    ///
    /// # Errors
    /// Returns [`ValueNotFound`] if no entry has an equal value.
    pub fn find_key(&self, value: &V) -> Result<&K, ValueNotFound>
    where
        V: PartialEq,
    {
        self.iter()
            .find(|(_, existing)| *existing == value)
            .map(|(key, _)| key)
            .ok_or(ValueNotFound)
    }

    /// Returns an iterator over all entries, one bucket at a time.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns the number of entries in the bucket at `index`, or None if there is no such bucket.
    pub fn bucket_len(&self, index: usize) -> Option<usize> {
        self.buckets.get(index).map(LinkedList::len)
    }

    /// Returns an iterator over the entries in the bucket at `index`, newest first, or None if
    /// there is no such bucket.
    pub fn bucket(&self, index: usize) -> Option<impl Iterator<Item = (&K, &V)>> {
        self.buckets
            .get(index)
            .map(|chain| chain.iter().map(|entry| (&entry.key, &entry.value)))
    }

    pub(crate) fn index_for(&self, key: &K) -> usize {
        key.bucket(self.cap())
    }

    pub(crate) fn chain_for(&self, key: &K) -> &LinkedList<Entry<K, V>> {
        &self.buckets[self.index_for(key)]
    }
}

impl<K: BucketKey + Eq, V> Extend<(K, V)> for HashTable<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: BucketKey + Eq + Debug, V: Debug> Debug for HashTable<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("buckets", &DebugWith(|f| f.debug_list().entries(
                self.buckets.iter()
                    .map(|chain| DebugRaw(
                        chain.iter().fold(String::new(), |out, Entry { key, value }| {
                            match out.is_empty() {
                                true => format!("({key:?}: {value:?})"),
                                false => format!("{out} -> ({key:?}: {value:?})"),
                            }
                        })
                    ))
                    .map(|chain| match chain.0.is_empty() {
                        true => DebugRaw("-".into()),
                        false => chain,
                    })
            ).finish()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<K: BucketKey + Eq + Debug, V: Debug> Display for HashTable<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}

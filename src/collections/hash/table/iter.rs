use std::iter::FusedIterator;
use std::slice;

use super::{BucketKey, Entry, HashTable};
use crate::collections::linked::LinkedList;
use crate::collections::linked::list;

impl<'a, K: BucketKey + Eq, V> IntoIterator for &'a HashTable<K, V> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            remaining: self.len,
        }
    }
}

/// An iterator over the entries of a [`HashTable`], visiting each bucket in order and each chain
/// from newest to oldest.
pub struct Iter<'a, K, V> {
    pub(crate) buckets: slice::Iter<'a, LinkedList<Entry<K, V>>>,
    pub(crate) chain: Option<list::Iter<'a, Entry<K, V>>>,
    pub(crate) remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some((&entry.key, &entry.value));
            }

            // The current chain is exhausted, so move on to the next bucket.
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

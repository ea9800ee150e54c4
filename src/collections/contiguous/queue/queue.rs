use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use super::Iter;
use crate::collections::contiguous::Array;
use crate::util::fmt::{DebugRaw, DebugWith};

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A first in, first out collection, stored in a circular buffer.
///
/// Elements are enqueued at the back and dequeued from the front, with both ends wrapping around
/// the end of the underlying [`Array`]. When the Queue is full, it grows by a factor of 2 and the
/// elements are moved so that the front is at index 0 again.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `enqueue` | `O(1)`*, `O(n)` |
/// | `dequeue` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `get` | `O(1)` |
/// | `search` | `O(n)` |
/// | `selection_sort` | `O(n^2)` |
///
/// \* If the Queue is full, `enqueue` will take `O(n)`.
pub struct Queue<T> {
    pub(crate) arr: Array<Option<T>>,
    pub(crate) front: usize,
    pub(crate) len: usize,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue without allocating.
    pub fn new() -> Queue<T> {
        Queue {
            arr: Array::new(),
            front: 0,
            len: 0,
        }
    }

    /// Creates a new, empty Queue which can hold `cap` elements before growing.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Queue<T> {
        Queue {
            arr: Array::repeat_default(cap),
            front: 0,
            len: 0,
        }
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the Queue can hold without growing.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns true if the next enqueue will have to grow the Queue.
    pub const fn is_full(&self) -> bool {
        self.len == self.cap()
    }

    /// Adds `value` to the back of the Queue, growing it if necessary.
    pub fn enqueue(&mut self, value: T) {
        if self.is_full() {
            self.grow();
        }

        let back = self.physical_index(self.len);
        self.arr[back] = Some(value);
        self.len += 1;
    }

    /// Removes and returns the element at the front of the Queue, or None if it is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.arr[self.front].take();
        self.front = (self.front + 1) % self.cap();
        self.len -= 1;

        debug_assert!(value.is_some());
        value
    }

    /// Returns a reference to the element at the front of the Queue, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the element `index` places from the front, if there is one.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        self.arr[self.physical_index(index)].as_ref()
    }

    /// Drops every element in the Queue, keeping its capacity.
    pub fn clear(&mut self) {
        while self.dequeue().is_some() {}
        self.front = 0;
    }

    /// Returns an iterator over the Queue from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Converts a position relative to the front into an index of the underlying Array.
    pub(crate) const fn physical_index(&self, index: usize) -> usize {
        (self.front + index) % self.cap()
    }

    /// Grows the underlying Array by the growth factor, moving the front of the Queue to index 0.
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_CAP);
        let mut new_arr = Array::repeat_default(new_cap);

        for i in 0..self.len {
            let index = self.physical_index(i);
            new_arr[i] = self.arr[index].take();
        }

        // The old Array only contains None now.
        drop(mem::replace(&mut self.arr, new_arr));
        self.front = 0;
    }
}

impl<T: PartialEq> Queue<T> {
    /// Searches the Queue from front to back, returning the position (relative to the front) of
    /// the first element equal to `value`.
    pub fn search(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }
}

impl<T: Ord> Queue<T> {
    /// Sorts the Queue in place with a selection sort, so that the smallest element is at the
    /// front. Each pass finds the minimum of the unsorted remainder and swaps it into place.
    pub fn selection_sort(&mut self) {
        for i in 0..self.len {
            let mut min = i;
            for j in (i + 1)..self.len {
                if self.get(j) < self.get(min) {
                    min = j;
                }
            }

            if min != i {
                let (a, b) = (self.physical_index(i), self.physical_index(min));
                self.arr.swap(a, b);
            }
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("slots", &DebugWith(|f| f.debug_list().entries(
                self.arr.iter().map(|slot| DebugRaw(match slot {
                    Some(value) => format!("{value:?}"),
                    None => "-".into(),
                }))
            ).finish()))
            .field("front", &self.front)
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

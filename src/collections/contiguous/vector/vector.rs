use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Array;
use crate::util::fmt::DebugWith;
use crate::util::result::ResultExtension;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A dynamic array: a variable size contiguous collection, based on [`Array<T>`].
///
/// When full, the capacity of a Vector is multiplied by a growth factor of 2 (with a minimum
/// capacity of 2 once anything is allocated).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `search` | `O(n)` |
/// | `bubble_sort` | `O(n^2)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use structure_bench::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub fn new() -> Vector<T> {
        Vector {
            arr: Array::new_uninit(0),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(cap),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use structure_bench::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.arr[self.len].write(value);
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning it if the Vector isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        // Decrement len before reading, so the value is no longer considered initialized.
        self.len -= 1;

        // SAFETY: All values below the previous len are initialized, and this value is now outside
        // of len so it won't be read or dropped again.
        Some(unsafe { self.arr[self.len].assume_init_read() })
    }

    /// Inserts the provided value at the given index, moving all following values one place to
    /// the right.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use structure_bench::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(4, 200);
    /// assert_eq!(&*vec, &[0, 100, 1, 2, 200]);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, moving all following values one place to
    /// the right.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        if self.len == self.cap() {
            self.grow();
        }

        let base = self.arr.as_mut_ptr();
        // SAFETY: index <= len < cap, so both ranges are within the allocation. ptr::copy handles
        // the overlap, and the slot at index is overwritten before it is read again.
        unsafe {
            ptr::copy(base.add(index), base.add(index + 1), self.len - index);
        }
        self.arr[index].write(value);
        self.len += 1;

        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        // SAFETY: index < len, so the value is initialized. It is moved out before the gap is
        // filled, so it is never duplicated.
        let value = unsafe { self.arr[index].assume_init_read() };

        let base = self.arr.as_mut_ptr();
        // SAFETY: Both ranges lie within the first len elements.
        unsafe {
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
        }
        self.len -= 1;

        Ok(value)
    }

    /// Drops every element of the Vector, keeping its capacity.
    pub fn clear(&mut self) {
        let len = self.len;
        // Set len first, so a panicking drop can't cause a double drop.
        self.len = 0;

        // SAFETY: The first len elements were initialized and are no longer tracked.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.arr.as_mut_ptr().cast::<T>(),
                len,
            ));
        }
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).expect("Capacity overflow!");

        if new_cap <= self.cap() {
            return;
        }

        self.arr.realloc(new_cap);
    }

    /// Grows the internal Array by the growth factor, to allow for the insertion of at least one
    /// more element.
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_CAP);
        self.arr.realloc(new_cap);
    }
}

impl<T: PartialEq> Vector<T> {
    /// Searches the Vector from front to back, returning the index of the first element equal to
    /// `value`.
    pub fn search(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }
}

impl<T: Ord> Vector<T> {
    /// Sorts the Vector in ascending order with a bubble sort. Each pass swaps adjacent elements
    /// which are out of order, leaving the largest remaining element at the end.
    pub fn bubble_sort(&mut self) {
        let len = self.len;

        for pass in 0..len.saturating_sub(1) {
            for i in 0..(len - pass - 1) {
                if self[i] > self[i + 1] {
                    self.swap(i, i + 1);
                }
            }
        }
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // The Array of MaybeUninit won't drop any values itself.
        self.clear();
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len elements are initialized, and MaybeUninit<T> has the same layout
        // as T.
        unsafe { slice::from_raw_parts(self.arr.as_ptr().cast::<T>(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and the mutable borrow guarantees unique access.
        unsafe { slice::from_raw_parts_mut(self.arr.as_mut_ptr().cast::<T>(), self.len) }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Vector::with_cap(self.len);
        vec.extend(self.iter().cloned());
        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(iter);
        vec
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &DebugWith(|f| f.debug_list().entries(self.iter()).finish()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};
use std::ptr;
use std::slice;

use super::Vector;
use crate::collections::contiguous::Array;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        // Steal the Array, leaving an empty one behind so that dropping self does nothing.
        self.len = 0;
        let arr = mem::replace(&mut self.arr, Array::new_uninit(0));

        IntoIter {
            arr,
            front: 0,
            back,
        }
    }
}

/// An owned iterator over the elements of a [`Vector`].
pub struct IntoIter<T> {
    // Elements in front..back are initialized and still owned by the iterator.
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        // SAFETY: front < back, so the value is initialized and owned. Incrementing front gives up
        // ownership of it.
        let value = unsafe { self.arr[self.front].assume_init_read() };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        // SAFETY: The old back - 1 was initialized and owned, and is now outside of the range.
        Some(unsafe { self.arr[self.back].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = &mut self.arr[self.front..self.back];
        // SAFETY: The remaining range is initialized and owned by the iterator.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                remaining.as_mut_ptr().cast::<T>(),
                remaining.len(),
            ));
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

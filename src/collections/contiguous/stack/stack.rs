use std::fmt::{self, Debug, Display, Formatter};
use std::iter::Rev;
use std::slice;

use crate::collections::contiguous::Vector;

/// A last in, first out collection, storing its elements in a [`Vector`] with the top of the stack
/// at the end.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Stack.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `search` | `O(n)` |
/// | `reverse` | `O(n)` |
///
/// \* If the underlying Vector needs to grow, `push` will take `O(n)`.
pub struct Stack<T> {
    pub(crate) vec: Vector<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack without allocating.
    pub fn new() -> Stack<T> {
        Stack {
            vec: Vector::new(),
        }
    }

    /// Creates a new, empty Stack which can hold `cap` elements before reallocating.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Stack<T> {
        Stack {
            vec: Vector::with_cap(cap),
        }
    }

    /// Returns the number of elements in the Stack.
    pub const fn len(&self) -> usize {
        self.vec.len()
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Returns the number of elements the Stack can hold without growing.
    pub const fn cap(&self) -> usize {
        self.vec.cap()
    }

    /// Returns true if the next push will have to grow the Stack.
    pub const fn is_full(&self) -> bool {
        self.len() == self.cap()
    }

    /// Pushes `value` onto the top of the Stack, growing it if necessary.
    pub fn push(&mut self, value: T) {
        self.vec.push(value);
    }

    /// Removes and returns the value on the top of the Stack, or None if it is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }

    /// Returns a reference to the value on the top of the Stack, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.vec.last()
    }

    /// Reverses the order of the Stack in place, so that the bottom element ends up on top.
    pub fn reverse(&mut self) {
        self.vec.reverse();
    }

    /// Returns an iterator over the Stack from top to bottom.
    pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.vec.iter().rev()
    }
}

impl<T: PartialEq> Stack<T> {
    /// Searches the Stack from the bottom up, returning the position of the first element equal to
    /// `value`, where the bottom of the Stack has position 0.
    pub fn search(&self, value: &T) -> Option<usize> {
        self.vec.search(value)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes each item in turn, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            vec: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.vec.extend(iter);
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top_to_bottom", &self.iter().collect::<Vector<_>>())
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use super::{Iter, IterMut, Link, Node, NodePtr};
use crate::util::result::ResultExtension;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;

/// A list with links in one direction, from the head to the tail.
///
/// The list keeps a handle to its tail as well as its head, so appending is as cheap as
/// prepending. Anything else that refers to a position requires walking the list from the head.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `get` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `remove` | `O(i)` |
/// | `search` | `O(n)` |
/// | `remove_first` | `O(n)` |
/// | `reverse` | `O(n)` |
/// | `insertion_sort` | `O(n^2)` |
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: Linked nodes are live while the list is borrowed.
        self.head.map(|head| unsafe { &head.node().value })
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: Linked nodes are live, and the list is mutably borrowed.
        self.head.map(|head| unsafe { &mut head.node_mut().value })
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: Linked nodes are live while the list is borrowed.
        self.tail.map(|tail| unsafe { &tail.node().value })
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: Linked nodes are live, and the list is mutably borrowed.
        self.tail.map(|tail| unsafe { &mut tail.node_mut().value })
    }

    /// Adds the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        let node = NodePtr::from_node(Node {
            value,
            next: self.head,
        });

        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Adds the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) {
        let node = NodePtr::from_node(Node {
            value,
            next: None,
        });

        match self.tail {
            // SAFETY: The tail is live and nothing else refers to it during this statement.
            Some(tail) => unsafe { tail.node_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;

        // SAFETY: The head is live, and it is unlinked below, so the handle is never used again.
        let node = unsafe { head.take_node() };

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;

        Some(node.value)
    }

    /// Returns a reference to the element at `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&T> {
        // SAFETY: Linked nodes are live while the list is borrowed.
        self.node_at(index).map(|node| unsafe { &node.node().value })
    }

    /// Returns a mutable reference to the element at `index`, if there is one.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        // SAFETY: Linked nodes are live, and the list is mutably borrowed.
        self.node_at(index).map(|node| unsafe { &mut node.node_mut().value })
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// # Panics
    /// Panics if `index > len`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let error = IndexOutOfBounds { index, len: self.len };

        match index {
            0 => self.push_front(value),
            i if i == self.len => self.push_back(value),
            i if i > self.len => return Err(error),
            i => {
                let prev = self.node_at(i - 1).ok_or(error)?;

                // SAFETY: prev is live and no other reference to it exists.
                unsafe {
                    let prev = prev.node_mut();
                    prev.next = Some(NodePtr::from_node(Node {
                        value,
                        next: prev.next,
                    }));
                }
                self.len += 1;
            },
        }

        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let error = IndexOutOfBounds { index, len: self.len };

        if index >= self.len {
            return Err(error);
        }
        if index == 0 {
            return self.pop_front().ok_or(error);
        }

        let prev = self.node_at(index - 1).ok_or(error)?;

        // SAFETY: prev is live and, because index < len, is followed by the node being removed.
        // That node is unlinked before it is taken, so its handle isn't used again.
        let node = unsafe {
            let target = prev.node().next.ok_or(error)?;
            let node = target.take_node();
            prev.node_mut().next = node.next;
            node
        };

        if node.next.is_none() {
            self.tail = Some(prev);
        }
        self.len -= 1;

        Ok(node.value)
    }

    /// Removes and returns the first element for which `predicate` returns true.
    pub fn remove_first<F>(&mut self, mut predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut prev: Link<T> = None;
        let mut current = self.head;

        while let Some(node) = current {
            // SAFETY: Linked nodes are live while the list is borrowed.
            let (matches, next) = unsafe {
                let node = node.node();
                (predicate(&node.value), node.next)
            };

            if matches {
                match prev {
                    // SAFETY: prev is live and no other reference to it exists.
                    Some(prev) => unsafe { prev.node_mut().next = next },
                    None => self.head = next,
                }
                if next.is_none() {
                    self.tail = prev;
                }
                self.len -= 1;

                // SAFETY: The node has just been unlinked, so this is the last use of the handle.
                return Some(unsafe { node.take_node() }.value);
            }

            prev = current;
            current = next;
        }

        None
    }

    /// Reverses the order of the list in place, by reversing every link.
    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut current = self.head;
        self.tail = self.head;

        while let Some(node) = current {
            // SAFETY: Each node is live and only referenced here while it is relinked.
            unsafe {
                let node = node.node_mut();
                current = node.next;
                node.next = prev;
            }
            prev = Some(node);
        }

        self.head = prev;
    }

    /// Removes all elements from the list.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns an iterator over references to the elements of the list, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements of the list, from front to
    /// back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Walks from the head to the node at `index`.
    pub(crate) fn node_at(&self, index: usize) -> Link<T> {
        if index >= self.len {
            return None;
        }

        let mut current = self.head;
        for _ in 0..index {
            // SAFETY: index < len, so every node walked over is live and has a successor.
            current = current.and_then(|node| unsafe { node.node().next });
        }
        current
    }

    /// Walks the whole list to find the last node, for use after the links have been rearranged.
    pub(crate) fn find_tail(&self) -> Link<T> {
        let mut current = self.head?;

        // SAFETY: Linked nodes are live while the list is borrowed.
        while let Some(next) = unsafe { current.node().next } {
            current = next;
        }
        Some(current)
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Searches the list from front to back, returning the index of the first element equal to
    /// `value`.
    pub fn search(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Returns true if any element of the list is equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }
}

impl<T: Ord> LinkedList<T> {
    /// Sorts the list in ascending order with an insertion sort. Nodes are relinked one at a time
    /// into a new sorted chain, rather than moving any values.
    pub fn insertion_sort(&mut self) {
        let mut sorted: Link<T> = None;
        let mut current = self.head.take();

        while let Some(node) = current {
            // SAFETY: Every node is live. Each one is unlinked from the unsorted chain before it
            // is linked into the sorted one.
            unsafe {
                current = node.node().next;
                sorted = Some(Self::insert_sorted(sorted, node));
            }
        }

        self.head = sorted;
        self.tail = self.find_tail();
    }

    /// Links `node` into the sorted chain starting at `head`, returning the new head.
    ///
    /// # Safety
    /// All nodes must be live, and `node` must not already be part of the chain.
    unsafe fn insert_sorted(head: Link<T>, node: NodePtr<T>) -> NodePtr<T> {
        // SAFETY: Upheld by the caller. No reference outlives the statement that creates it.
        unsafe {
            match head {
                Some(first) if node.node().value > first.node().value => {
                    let mut prev = first;
                    while let Some(next) = prev.node().next {
                        if next.node().value >= node.node().value {
                            break;
                        }
                        prev = next;
                    }

                    node.node_mut().next = prev.node().next;
                    prev.node_mut().next = Some(node);
                    first
                },
                _ => {
                    node.node_mut().next = head;
                    node
                },
            }
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// SAFETY: The list uniquely owns its nodes, so it can be sent if T can.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: Shared references to the list only give out shared references to elements.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("head", &self.front())
            .field("tail", &self.back())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

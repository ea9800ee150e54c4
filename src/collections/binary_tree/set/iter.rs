use std::iter::FusedIterator;

use super::{BinaryTreeSet, Branch, Node};
use crate::collections::contiguous::Vector;

// Each traversal keeps its own stack of pending nodes, so walking a degenerate tree never
// recurses. remaining tracks the number of keys left to yield.

impl<'a, K: Ord> IntoIterator for &'a BinaryTreeSet<K> {
    type Item = &'a K;

    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// An iterator over the keys of a [`BinaryTreeSet`] in left, root, right order.
pub struct InOrder<'a, K: Ord> {
    pub(crate) stack: Vector<&'a Node<K>>,
    pub(crate) remaining: usize,
}

impl<'a, K: Ord> InOrder<'a, K> {
    pub(crate) fn new(root: &'a Branch<K>, len: usize) -> InOrder<'a, K> {
        let mut iter = InOrder {
            stack: Vector::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, branch: &'a Branch<K>) {
        let mut next = branch.as_deref();

        while let Some(node) = next {
            self.stack.push(node);
            next = node.left.as_deref();
        }
    }
}

impl<'a, K: Ord> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;

        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: Ord> FusedIterator for InOrder<'a, K> {}

impl<'a, K: Ord> ExactSizeIterator for InOrder<'a, K> {}

/// An iterator over the keys of a [`BinaryTreeSet`] in root, left, right order.
pub struct PreOrder<'a, K: Ord> {
    pub(crate) stack: Vector<&'a Node<K>>,
    pub(crate) remaining: usize,
}

impl<'a, K: Ord> PreOrder<'a, K> {
    pub(crate) fn new(root: &'a Branch<K>, len: usize) -> PreOrder<'a, K> {
        let mut stack = Vector::new();
        stack.extend(root.as_deref());

        PreOrder {
            stack,
            remaining: len,
        }
    }
}

impl<'a, K: Ord> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // The right child is pushed first, so that the left subtree is visited before it.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;

        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: Ord> FusedIterator for PreOrder<'a, K> {}

impl<'a, K: Ord> ExactSizeIterator for PreOrder<'a, K> {}

/// An iterator over the keys of a [`BinaryTreeSet`] in left, right, root order.
pub struct PostOrder<'a, K: Ord> {
    /// Nodes paired with whether their children have already been pushed.
    pub(crate) stack: Vector<(&'a Node<K>, bool)>,
    pub(crate) remaining: usize,
}

impl<'a, K: Ord> PostOrder<'a, K> {
    pub(crate) fn new(root: &'a Branch<K>, len: usize) -> PostOrder<'a, K> {
        let mut stack = Vector::new();
        stack.extend(root.as_deref().map(|node| (node, false)));

        PostOrder {
            stack,
            remaining: len,
        }
    }
}

impl<'a, K: Ord> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;

            if expanded {
                self.remaining -= 1;
                return Some(&node.key);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|right| (right, false)));
            self.stack.extend(node.left.as_deref().map(|left| (left, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: Ord> FusedIterator for PostOrder<'a, K> {}

impl<'a, K: Ord> ExactSizeIterator for PostOrder<'a, K> {}

use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::collections::contiguous::Vector;

/// An owning slot for a subtree, which is empty when the subtree has no nodes.
pub(crate) struct Branch<K: Ord>(pub Option<Box<Node<K>>>);

pub(crate) struct Node<K: Ord> {
    pub left: Branch<K>,
    pub right: Branch<K>,
    pub key: K,
}

impl<K: Ord> Node<K> {
    pub fn leaf(key: K) -> Node<K> {
        Node {
            left: None.into(),
            right: None.into(),
            key,
        }
    }

    /// Moves this node's key down its left spine, for as long as the left child holds a greater
    /// key, shifting each of those keys up one level.
    pub fn sift_left(&mut self) {
        let mut node = self;

        while let Some(left) = node.left.0.as_deref_mut() {
            if left.key <= node.key {
                break;
            }

            mem::swap(&mut node.key, &mut left.key);
            node = left;
        }
    }
}

impl<K: Ord> Branch<K> {
    pub fn insert(&mut self, key: K) -> bool {
        let mut branch = self;

        while let Branch(Some(node)) = branch {
            branch = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }

        branch.0 = Some(Box::new(Node::leaf(key)));
        true
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut branch = self;

        while let Branch(Some(node)) = branch {
            branch = match key.cmp(&node.key) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }

        false
    }

    pub fn remove(&mut self, key: &K) -> bool {
        let mut branch = self;

        loop {
            let ordering = match branch.0.as_deref() {
                Some(node) => key.cmp(&node.key),
                None => return false,
            };

            // Only borrow the node mutably to descend, so that the branch is still free to use
            // once the key is found.
            if ordering == Ordering::Equal {
                break;
            }
            let Some(node) = branch.0.as_deref_mut() else {
                return false;
            };
            branch = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }

        branch.take_root().is_some()
    }

    /// Removes the key held by the root of this branch. A single child takes the root's place,
    /// while a root with two children is given the smallest key of its right subtree instead.
    pub fn take_root(&mut self) -> Option<K> {
        let node = self.0.as_mut()?;

        if node.left.is_some() && node.right.is_some() {
            let successor = node.right.take_first()?;
            return Some(mem::replace(&mut node.key, successor));
        }

        let mut node = self.0.take()?;
        self.0 = node.left.0.take().or_else(|| node.right.0.take());
        Some(node.key)
    }

    pub fn take_first(&mut self) -> Option<K> {
        let mut branch = self;

        while branch.0.as_ref().is_some_and(|node| node.left.is_some()) {
            branch = &mut branch.0.as_mut()?.left;
        }

        // The leftmost node has no left child, so its right child simply takes its place.
        branch.take_root()
    }

    pub fn first(&self) -> Option<&K> {
        let mut node = self.0.as_deref()?;

        while let Some(left) = node.left.0.as_deref() {
            node = left;
        }

        Some(&node.key)
    }

    pub fn last(&self) -> Option<&K> {
        let mut node = self.0.as_deref()?;

        while let Some(right) = node.right.0.as_deref() {
            node = right;
        }

        Some(&node.key)
    }

    pub fn rotate_to_sorted(&mut self) {
        let Branch(Some(node)) = self else {
            return;
        };

        node.left.rotate_to_sorted();
        node.right.rotate_to_sorted();
        node.sift_left();
    }

    pub fn mirror(&mut self) {
        let mut pending: Vector<&mut Node<K>> = Vector::new();
        pending.extend(self.0.as_deref_mut());

        while let Some(node) = pending.pop() {
            mem::swap(&mut node.left, &mut node.right);
            pending.extend(node.left.0.as_deref_mut());
            pending.extend(node.right.0.as_deref_mut());
        }
    }

    /// Frees every node below this branch without recursing, leaving it empty.
    pub fn free(&mut self) {
        let mut pending: Vector<Box<Node<K>>> = Vector::new();
        pending.extend(self.0.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.0.take());
            pending.extend(node.right.0.take());
        }
    }
}

impl<K: Ord> Deref for Branch<K> {
    type Target = Option<Box<Node<K>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K: Ord> DerefMut for Branch<K> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K: Ord> From<Option<Box<Node<K>>>> for Branch<K> {
    fn from(value: Option<Box<Node<K>>>) -> Self {
        Branch(value)
    }
}

/// A line of the sideways drawing of a tree, still waiting to be written.
enum Pending<'a, K: Ord> {
    Subtree(&'a Branch<K>),
    Key(&'a K),
}

/// Draws the tree sideways, with each left subtree above its parent's key and each right subtree
/// below it. Every line is prefixed by the path to it, and an empty branch is drawn as `-`.
impl<K: Ord + Debug> Debug for Branch<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut pending: Vector<(String, Pending<'_, K>)> = Vector::new();
        pending.push((String::new(), Pending::Subtree(self)));
        let mut written = false;

        while let Some((prefix, line)) = pending.pop() {
            let separator = if written { "\n" } else { "" };

            match line {
                Pending::Subtree(Branch(Some(node))) => {
                    pending.push((format!("{prefix}└    "), Pending::Subtree(&node.right)));
                    pending.push((prefix.clone(), Pending::Key(&node.key)));
                    pending.push((prefix + "┌    ", Pending::Subtree(&node.left)));
                    continue;
                },
                Pending::Subtree(Branch(None)) => write!(f, "{separator}{prefix}-")?,
                Pending::Key(key) => write!(f, "{separator}{prefix}({key:?})")?,
            }

            written = true;
        }

        Ok(())
    }
}

use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, EmptyTree, InOrder, PostOrder, PreOrder};
use crate::util::fmt::DebugWith;

/// An ordered set of keys, stored in an unbalanced binary search tree.
///
/// Every key in the left subtree of a node is less than the node's key, and every key in the
/// right subtree is greater. Keys are unique, so inserting a key which is already present does
/// nothing.
///
/// Two operations deliberately leave the search order behind:
/// - [`mirror`](BinaryTreeSet::mirror) swaps the children of every node, so an in-order traversal
///   produces the keys in descending order.
/// - [`rotate_to_sorted`](BinaryTreeSet::rotate_to_sorted) shifts keys up along left spines, and
///   may produce a tree in which descending for a key no longer finds it.
///
/// After either of these, `insert`, `contains` and `remove` are only reliable once the tree is
/// cleared.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of keys in the BinaryTreeSet.
/// - `h`: The height of the tree, which is between `log2 n` and `n` depending on insertion order.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `min/max` | `O(h)` |
/// | `in_order/pre_order/post_order` | `O(n)` |
/// | `mirror` | `O(n)` |
/// | `rotate_to_sorted` | `O(n * h)` |
/// | `clear` | `O(n * h)` |
pub struct BinaryTreeSet<K: Ord> {
    pub(crate) root: Branch<K>,
    pub(crate) len: usize,
}

impl<K: Ord> BinaryTreeSet<K> {
    /// Creates a new BinaryTreeSet with no nodes.
    pub const fn new() -> BinaryTreeSet<K> {
        BinaryTreeSet {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of keys in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no keys.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `key` into the tree as a new leaf, returning false (and leaving the tree unchanged)
    /// if it was already present.
    ///
    /// # Examples
    /// ```
    /// # use structure_bench::collections::binary_tree::BinaryTreeSet;
    /// let mut tree = BinaryTreeSet::new();
    /// assert!(tree.insert(5));
    /// assert!(tree.insert(3));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let inserted = self.root.insert(key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Returns true if `key` is present in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.root.contains(key)
    }

    /// Removes `key` from the tree, returning whether it was present.
    ///
    /// A node with two children is not unlinked itself. It takes on the smallest key of its right
    /// subtree (the key's in-order successor), which is removed from that subtree instead.
    ///
    /// # Examples
    /// ```
    /// # use structure_bench::collections::binary_tree::BinaryTreeSet;
    /// let mut tree: BinaryTreeSet<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&5));
    /// assert_eq!(tree.to_string(), "{1, 3, 4, 8}");
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        let removed = self.root.remove(key);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Returns the smallest key in the tree, found at the end of the root's left spine.
    ///
    /// # Errors
    /// Returns [`EmptyTree`] if the tree has no nodes.
    pub fn min(&self) -> Result<&K, EmptyTree> {
        self.root.first().ok_or(EmptyTree)
    }

    /// Returns the largest key in the tree, found at the end of the root's right spine.
    ///
    /// # Errors
    /// Returns [`EmptyTree`] if the tree has no nodes.
    pub fn max(&self) -> Result<&K, EmptyTree> {
        self.root.last().ok_or(EmptyTree)
    }

    /// Removes every key from the tree, by repeatedly removing whichever key is at the root.
    pub fn clear(&mut self) {
        while self.root.take_root().is_some() {}
        self.len = 0;
    }

    /// Returns an iterator over the keys in left, root, right order. For a valid search tree this
    /// is ascending order.
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(&self.root, self.len)
    }

    /// Returns an iterator over the keys in root, left, right order.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(&self.root, self.len)
    }

    /// Returns an iterator over the keys in left, right, root order.
    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder::new(&self.root, self.len)
    }

    /// Returns an iterator over the keys of the tree, in order. Equivalent to
    /// [`in_order`](BinaryTreeSet::in_order).
    pub fn iter(&self) -> InOrder<'_, K> {
        self.into_iter()
    }

    /// Visits every node from the bottom up, moving each node's key down its left spine while the
    /// left child holds a greater key.
    ///
    /// This has no effect on a valid search tree, where every left child is already smaller.
    /// Applied to a tree whose order has been disturbed (for example by
    /// [`mirror`](BinaryTreeSet::mirror)) it reorders keys along left spines only, and the result
    /// is not guaranteed to be a valid search tree.
    pub fn rotate_to_sorted(&mut self) {
        self.root.rotate_to_sorted();
    }

    /// Swaps the left and right children of every node, producing the mirror image of the tree.
    ///
    /// # Examples
    /// ```
    /// # use structure_bench::collections::binary_tree::BinaryTreeSet;
    /// let mut tree: BinaryTreeSet<_> = [2, 1, 3].into_iter().collect();
    /// tree.mirror();
    /// assert_eq!(tree.to_string(), "{3, 2, 1}");
    /// ```
    pub fn mirror(&mut self) {
        self.root.mirror();
    }
}

impl<K: Ord> Drop for BinaryTreeSet<K> {
    fn drop(&mut self) {
        self.root.free();
    }
}

impl<K: Ord> Default for BinaryTreeSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for BinaryTreeSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = BinaryTreeSet::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for BinaryTreeSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord + Debug> Debug for BinaryTreeSet<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTreeSet")
            .field("nodes", &DebugWith(|f| write!(f, "\n{:?}\n", &self.root)))
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Ord + Debug> Display for BinaryTreeSet<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

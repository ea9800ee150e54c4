//! Collections based on binary search trees.
//!
//! The trees here are never rebalanced, so their shape depends entirely on the order in which
//! keys are inserted. Inserting keys in ascending order produces a tree with the same depth as a
//! linked list, so every operation which descends the tree or walks it is written without
//! recursion, except for [`BinaryTreeSet::rotate_to_sorted`].

pub mod set;

#[doc(inline)]
pub use set::{BinaryTreeSet, EmptyTree};

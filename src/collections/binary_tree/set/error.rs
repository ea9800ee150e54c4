use derive_more::{Display, Error};

/// A key was requested from a [`BinaryTreeSet`](super::BinaryTreeSet) with no nodes.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Attempted to find an extreme key of an empty tree!")]
pub struct EmptyTree;

//! A module containing [`BinaryTreeSet`] and its traversal iterators.

mod binary_tree_set;
mod error;
mod iter;
mod node;

pub use binary_tree_set::*;
pub use error::*;
pub use iter::*;
pub(crate) use node::*;

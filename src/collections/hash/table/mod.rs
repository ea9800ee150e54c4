//! A module containing [`HashTable`] and associated types.
//!
//! The table never changes its number of buckets after construction, so collisions are resolved by
//! chaining: each bucket is a [`LinkedList`](crate::collections::linked::LinkedList) of entries.
//!
//! [`HashTable`] is also re-exported under the parent module.

mod bucket_key;
mod error;
mod hash_table;
mod iter;

pub use bucket_key::*;
pub use error::*;
pub use hash_table::*;
pub use iter::*;

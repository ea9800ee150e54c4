//! Hash-based collections.
//!
//! Rather than hashing with [`Hash`](std::hash::Hash), the table here places keys with
//! [`BucketKey`], which maps an integer key directly onto a bucket by taking its remainder.

pub mod table;

#[doc(inline)]
pub use table::{BucketKey, HashTable, KeyNotFound, ValueNotFound, ZeroCapacity};

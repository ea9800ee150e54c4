use derive_more::{Display, Error};

/// No entry in a [`HashTable`](super::HashTable) has the requested key.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("No entry exists for the provided key!")]
pub struct KeyNotFound;

/// No entry in a [`HashTable`](super::HashTable) has the requested value.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("No entry exists with the provided value!")]
pub struct ValueNotFound;

/// A [`HashTable`](super::HashTable) was created without any buckets, leaving nowhere to place
/// keys.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to calculate indices for hash-based collection with capacity 0!")]
pub struct ZeroCapacity;

use derive_more::{Display, Error};

/// An index was used which doesn't refer to an element of the collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// An element was requested from a collection with no elements.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Attempted to take an element from an empty {kind}!")]
pub struct EmptyCollection {
    pub kind: &'static str,
}

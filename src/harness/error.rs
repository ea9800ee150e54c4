use derive_more::{Display, Error, From, IsVariant};

use crate::collections::hash::{KeyNotFound, ZeroCapacity};
use crate::util::error::IndexOutOfBounds;
#[doc(inline)]
pub use crate::util::error::EmptyCollection;

/// A name was provided that doesn't match any [`Operation`](super::Operation).
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("Unknown operation '{name}', expected insert(), delete(), search(), size() or sort()!")]
pub struct UnknownOperation {
    pub name: String,
}

/// A name was provided that doesn't match any [`Structure`](super::Structure).
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("Unknown data structure '{name}'!")]
pub struct UnknownStructure {
    pub name: String,
}

/// A word was provided that doesn't match any [`Requirement`](super::Requirement).
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("Unknown requirement '{name}'!")]
pub struct UnknownRequirement {
    pub name: String,
}

/// A word was provided that doesn't match any [`Hint`](super::Hint).
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("Unknown preference '{name}', expected search, memory or balanced!")]
pub struct UnknownHint {
    pub name: String,
}

/// An error encountered while running an [`Operation`](super::Operation) against a structure.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadError {
    Empty(EmptyCollection),
    Index(IndexOutOfBounds),
    Key(KeyNotFound),
    ZeroCapacity(ZeroCapacity),
}

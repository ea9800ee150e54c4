//! Contiguous collection types, all built on top of [`Array`]: [`Vector`] (a dynamic array),
//! [`Stack`] and [`Queue`].
#![warn(missing_docs)]

pub mod array;
pub mod queue;
pub mod stack;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;
#[doc(inline)]
pub use vector::Vector;

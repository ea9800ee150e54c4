//! Linked collection types. Currently just a singly [`LinkedList`], which also serves as the chain
//! type of [`HashTable`](crate::collections::hash::HashTable).

pub mod list;

#[doc(inline)]
pub use list::LinkedList;

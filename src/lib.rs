//! A small collection of textbook data structures, written from scratch, along with a harness that
//! times them against each other.
//!
//! # Purpose
//! The crate answers a fairly naive question: given an API made up of operations like `insert()`,
//! `delete()` and `search()`, which of the classic data structures handles it fastest? To answer
//! it, each structure is implemented here rather than borrowed from [`std`], so that the timings
//! reflect the algorithms described in the docs of each type.
//!
//! # Contents
//! - [`collections::contiguous`]: [`Array`](collections::contiguous::Array),
//!   [`Vector`](collections::contiguous::Vector) (a dynamic array),
//!   [`Stack`](collections::contiguous::Stack) and [`Queue`](collections::contiguous::Queue).
//! - [`collections::linked`]: a singly [`LinkedList`](collections::linked::LinkedList).
//! - [`collections::binary_tree`]: [`BinaryTreeSet`](collections::binary_tree::BinaryTreeSet), an
//!   unbalanced binary search tree.
//! - [`collections::hash`]: [`HashTable`](collections::hash::HashTable), a fixed capacity hash
//!   table which resolves collisions by chaining.
//! - [`harness`]: workloads, timing and the rule table used to pick candidate structures.
//!
//! # Error Handling
//! Operations which can fail for reasons other than a programming error return a [`Result`] with
//! a small, strongly typed error (often a ZST) that implements [`Error`](std::error::Error). Where
//! it is more ergonomic to panic (indexing out of bounds for example), a panicking method is
//! provided alongside a `try_` variant, and the panic is documented.
//!
//! # Dependencies
//! Like the structures themselves, the collections don't use [`Vec`] internally. Everything
//! contiguous is built on [`Array`](collections::contiguous::Array). Derive macros from
//! `derive_more` take care of the error boilerplate and `tracing` is used by the harness to report
//! what it is doing.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod harness;

pub(crate) mod util;

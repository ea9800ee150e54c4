//! The collection types compared by the [`harness`](crate::harness).
//!
//! # Purpose
//! Each type is written by hand, on top of raw allocations and pointers where it needs them, so
//! that timing a structure measures that structure and nothing borrowed from the standard library.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves writing some of the more repetitive functionality.

pub mod binary_tree;
pub mod contiguous;
pub mod hash;
pub mod linked;

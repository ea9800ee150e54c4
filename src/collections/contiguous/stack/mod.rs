//! A module containing [`Stack`], a last in, first out collection backed by a
//! [`Vector`](super::Vector).
//!
//! [`Stack`] is also re-exported under the parent module.

mod stack;

pub use stack::*;

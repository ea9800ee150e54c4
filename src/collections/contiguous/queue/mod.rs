//! A module containing [`Queue`], a first in, first out collection stored in a circular buffer,
//! and its borrowed iterator [`Iter`].
//!
//! [`Queue`] is also re-exported under the parent module.

mod iter;
mod queue;
mod tests;

pub use iter::*;
pub use queue::*;

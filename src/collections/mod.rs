//! Various general-purpose collection types.
//!
//! # Method
//! [`Vector`](contiguous::Vector) implements [`Deref<Target = [T]>`](std::ops::Deref) (and
//! DerefMut), which saves me from writing some of the more repetitive functionality. The adapters
//! are built entirely on top of it.

#[cfg(feature = "adapters")]
pub mod adapters;
#[cfg(feature = "contiguous")]
pub mod contiguous;

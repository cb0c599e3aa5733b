//! Contiguous collection types. Namely [`Vector`], a growable buffer with explicit capacity
//! management.
#![warn(missing_docs)]

pub(crate) mod raw;
pub mod vector;

#[doc(inline)]
pub use vector::Vector;

//! A module containing [`SharedPtr`], a single-threaded reference-counted pointer. The
//! reference count lives in a private control block which is shared by every SharedPtr that
//! refers to the same value.

mod control;
mod shared_ptr;
mod tests;

pub use shared_ptr::*;

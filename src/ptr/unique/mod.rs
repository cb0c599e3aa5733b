//! A module containing [`UniquePtr`] and the [`Deleter`] trait it uses to clean up after itself.

mod deleter;
mod unique_ptr;

pub use deleter::*;
pub use unique_ptr::*;

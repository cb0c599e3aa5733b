//! This crate is a small collection of the building blocks that most other containers end up
//! resting on: a growable buffer and a pair of owning smart pointers.
//!
//! # Purpose
//! Like the rest of my standard library experiments, this is a learning exercise with no
//! expectation of being used in production. The point is to write the allocation, ownership and
//! destruction logic by hand, rather than reaching for [`Vec`], [`Box`] or [`Rc`](std::rc::Rc) and
//! letting them do the interesting part.
//!
//! # Contents
//! - [`Vector`](collections::contiguous::Vector): a contiguous, growable buffer. Capacity grows to
//!   `2 * cap + 1` when full, `reserve` either succeeds or leaves the Vector untouched, and `clear`
//!   gives the allocation back.
//! - [`Stack`](collections::adapters::Stack) and
//!   [`PriorityQueue`](collections::adapters::PriorityQueue): adapters built purely on top of
//!   Vector.
//! - [`UniquePtr`](ptr::unique::UniquePtr): exclusive ownership of a single value, destroyed by a
//!   configurable [`Deleter`](ptr::unique::Deleter).
//! - [`SharedPtr`](ptr::shared::SharedPtr): shared ownership through a reference counted control
//!   block.
//!
//! # Error Handling
//! Most operations that can fail come in two flavours: a `try_` method that returns a strongly
//! typed [`Result`], and a plain method that panics with the same error. Errors are structs (often
//! ZSTs) that implement [`Error`](std::error::Error), combined with enums where a method can fail
//! in more than one way. Allocation failure is the exception: it is reported through
//! [`handle_alloc_error`](std::alloc::handle_alloc_error) by every method that doesn't return it.
//!
//! # Features
//! Each module sits behind a cargo feature, all of which are enabled by default. `collections-all`
//! and `ptr-all` enable everything under their respective modules.
//!
//! # Dependencies
//! The crate uses `std` for its allocator, and depends on `derive_more` to remove some very
//! repetitive error definitions.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "ptr")]
pub mod ptr;

pub(crate) mod util;

#[doc(inline)]
pub use util::error;

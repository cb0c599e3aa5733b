//! Owning smart pointers, for when [`Box`] and [`Rc`](std::rc::Rc) are too opinionated.
//!
//! # Purpose
//! [`UniquePtr`](unique::UniquePtr) owns a single heap value and runs a configurable
//! [`Deleter`](unique::Deleter) when it is dropped or reset. [`SharedPtr`](shared::SharedPtr)
//! shares ownership of a heap value through a reference-counted control block and drops the value
//! when the last owner releases it.
//!
//! Neither type is thread-safe, and SharedPtr has no weak references: a cycle of SharedPtrs is
//! never freed.

#[cfg(feature = "shared")]
pub mod shared;
#[cfg(feature = "unique")]
pub mod unique;

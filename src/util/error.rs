//! Error types shared across the crate.

use std::alloc::Layout;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An error indicating that an index was outside the bounds of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// An error indicating that a requested capacity can't be represented by a valid memory layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// An error indicating that the global allocator failed to provide memory for `layout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Failed to allocate {} bytes!", layout.size())]
pub struct AllocError {
    /// The layout that couldn't be allocated.
    pub layout: Layout,
}

/// The error returned when a collection fails to reserve capacity. In both cases, the collection
/// is left exactly as it was before the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ReserveError {
    /// The requested capacity doesn't fit a valid layout.
    CapacityOverflow(CapacityOverflow),
    /// The allocator couldn't provide the memory.
    AllocError(AllocError),
}

/// The error returned by insertions at an arbitrary index, which can fail either because the index
/// is out of bounds or because the collection couldn't grow to make room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum IndexOrReserveError {
    /// The index was past the end of the collection.
    IndexOutOfBounds(IndexOutOfBounds),
    /// Growing the collection failed.
    ReserveError(ReserveError),
}

/// An error indicating that an operation required at least one element, but the collection was
/// empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to remove an element from an empty collection!")
    }
}

impl Error for EmptyCollection {}

/// An error indicating that a smart pointer doesn't currently own a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPointer;

impl Display for EmptyPointer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to access the value of an empty pointer!")
    }
}

impl Error for EmptyPointer {}

impl ReserveError {
    /// Reports this error the way infallible allocation methods do: a [`CapacityOverflow`] panics,
    /// while an [`AllocError`] is passed to [`handle_alloc_error`](std::alloc::handle_alloc_error)
    /// to avoid allocating during the panic.
    ///
    /// # Panics
    /// Panics if self is a [`ReserveError::CapacityOverflow`].
    #[track_caller]
    pub fn raise(self) -> ! {
        match self {
            ReserveError::CapacityOverflow(error) => panic!("{}", error),
            ReserveError::AllocError(error) => std::alloc::handle_alloc_error(error.layout),
        }
    }
}

use std::ptr::NonNull;

/// The cleanup action run by a [`UniquePtr`](super::UniquePtr) on the value it owns.
///
/// A Deleter is only ever invoked with non-null pointers, and at most once for each pointer
/// adopted by the UniquePtr. A UniquePtr which holds nothing doesn't invoke its Deleter at all.
///
/// Any `FnMut(NonNull<T>)` closure can be used as a Deleter.
pub trait Deleter<T> {
    /// Destroys the value at `ptr` and releases its memory.
    fn delete(&mut self, ptr: NonNull<T>);
}

/// The Deleter used by default, which frees values allocated through [`Box`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultDeleter;

impl<T> Deleter<T> for DefaultDeleter {
    fn delete(&mut self, ptr: NonNull<T>) {
        // SAFETY: A UniquePtr using DefaultDeleter only adopts pointers produced by Box::into_raw
        // (either internally or as required of unsafe constructors), and hands each one over
        // exactly once.
        drop(unsafe { Box::from_raw(ptr.as_ptr()) });
    }
}

impl<T, F: FnMut(NonNull<T>)> Deleter<T> for F {
    fn delete(&mut self, ptr: NonNull<T>) {
        self(ptr);
    }
}

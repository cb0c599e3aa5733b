use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ops::Deref;
use std::ptr::{self, NonNull};

use super::control::ControlBlock;
use crate::util::error::EmptyPointer;
use crate::util::result::ResultExtension;

/// A pointer which shares ownership of a heap allocated value with every other SharedPtr cloned
/// from it. The value is dropped exactly once, when the last of them is dropped.
///
/// Ownership is tracked by a control block, allocated once per value and holding the number of
/// SharedPtrs which refer to it. Cloning a SharedPtr increments that count, dropping one decrements
/// it. Moving a SharedPtr, either with a plain Rust move or with [`take`](SharedPtr::take), leaves
/// the count unchanged.
///
/// The count isn't atomic, so SharedPtr is neither [`Send`] nor [`Sync`]. There are also no weak
/// references: SharedPtrs which form a cycle keep each other alive forever and are leaked.
///
/// # Examples
/// ```
/// # use tiny_std::ptr::shared::SharedPtr;
/// let p = SharedPtr::new(5);
/// assert_eq!(p.use_count(), Ok(1));
///
/// let mut p2 = p.clone();
/// assert_eq!(p.use_count(), Ok(2));
///
/// let p3 = p2.take();
/// assert_eq!(p.use_count(), Ok(2));
/// assert!(!p2.has_block());
///
/// drop(p3);
/// assert_eq!(p.use_count(), Ok(1));
/// assert_eq!(*p, 5);
/// ```
pub struct SharedPtr<T> {
    pub(crate) block: Option<NonNull<ControlBlock<T>>>,
    pub(crate) _phantom: PhantomData<ControlBlock<T>>,
}

impl<T> SharedPtr<T> {
    /// Moves `value` onto the heap and creates the first SharedPtr to own it, with a count of 1.
    pub fn new(value: T) -> SharedPtr<T> {
        SharedPtr::from_block(ControlBlock::allocate(
            Some(NonNull::from(Box::leak(Box::new(value)))),
        ))
    }

    /// Creates a SharedPtr without a control block. It owns nothing and has no count.
    pub const fn empty() -> SharedPtr<T> {
        SharedPtr {
            block: None,
            _phantom: PhantomData,
        }
    }

    /// Takes ownership of the value behind a raw pointer, allocating a new control block with a
    /// count of 1.
    ///
    /// A control block is allocated even when `ptr` is null, so the result
    /// [`has_block`](SharedPtr::has_block) but [`get`](SharedPtr::get) returns [`None`].
    ///
    /// # Safety
    /// `ptr` must either be null or have been produced by [`Box::into_raw`], and must not be owned
    /// by anything else afterwards. In particular, this must be called at most once for any given
    /// address: use [`clone`](Clone::clone) to create further owners. Two SharedPtrs created
    /// separately from the same address each have their own control block, and both would free the
    /// value.
    pub unsafe fn from_raw(ptr: *mut T) -> SharedPtr<T> {
        SharedPtr::from_block(ControlBlock::allocate(NonNull::new(ptr)))
    }

    const fn from_block(block: NonNull<ControlBlock<T>>) -> SharedPtr<T> {
        SharedPtr {
            block: Some(block),
            _phantom: PhantomData,
        }
    }

    /// Returns true if this SharedPtr refers to a control block, which is the case for every
    /// SharedPtr apart from those created with [`empty`](SharedPtr::empty) or left behind by
    /// [`take`](SharedPtr::take).
    ///
    /// Note that this tests for ownership rather than for a value: a SharedPtr created from a null
    /// pointer has a control block, but no value.
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::ptr::shared::SharedPtr;
    /// // SAFETY: Null pointers are always accepted.
    /// let null = unsafe { SharedPtr::<u8>::from_raw(std::ptr::null_mut()) };
    /// assert!(null.has_block());
    /// assert_eq!(null.get(), None);
    ///
    /// assert!(!SharedPtr::<u8>::empty().has_block());
    /// ```
    pub const fn has_block(&self) -> bool {
        self.block.is_some()
    }

    /// Returns the number of SharedPtrs which share this one's control block, including itself.
    ///
    /// # Errors
    /// Returns [`EmptyPointer`] if this SharedPtr has no control block.
    pub fn use_count(&self) -> Result<usize, EmptyPointer> {
        self.control().map(|block| block.count.get()).ok_or(EmptyPointer)
    }

    /// Returns a reference to the shared value, or [`None`] if there is no control block or the
    /// control block holds a null pointer.
    pub fn get(&self) -> Option<&T> {
        // SAFETY: The value stays allocated for as long as any owner of its block exists,
        // including self, and the reference is tied to &self. Nothing hands out mutable
        // references to the value.
        self.control()?.value.map(|value| unsafe { value.as_ref() })
    }

    /// Returns a reference to the shared value.
    ///
    /// # Errors
    /// Returns [`EmptyPointer`] if there is no control block or it holds a null pointer.
    pub fn try_get(&self) -> Result<&T, EmptyPointer> {
        self.get().ok_or(EmptyPointer)
    }

    /// Returns the address of the shared value, or null.
    pub fn as_ptr(&self) -> *const T {
        self.control()
            .and_then(|block| block.value)
            .map_or(ptr::null(), |value| value.as_ptr().cast_const())
    }

    /// Returns true if both SharedPtrs share a control block. Two empty SharedPtrs are never equal
    /// in this sense.
    pub fn ptr_eq(&self, other: &SharedPtr<T>) -> bool {
        match (self.block, other.block) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Moves ownership out of self into a new SharedPtr, leaving self empty. The count of the
    /// control block is unchanged. This is the equivalent of move assignment from a SharedPtr
    /// which remains usable.
    pub const fn take(&mut self) -> SharedPtr<T> {
        SharedPtr {
            block: self.block.take(),
            _phantom: PhantomData,
        }
    }

    /// Releases this SharedPtr's share of ownership, leaving it empty. If it was the last owner,
    /// the value is dropped.
    pub fn reset(&mut self) {
        if let Some(block) = self.block.take() {
            // SAFETY: self owned one count of block, which is given up here.
            unsafe { ControlBlock::release(block) }
        }
    }

    fn control(&self) -> Option<&ControlBlock<T>> {
        // SAFETY: Blocks are only freed when their count reaches zero, and self holds one count for
        // as long as the returned reference is usable.
        self.block.map(|block| unsafe { block.as_ref() })
    }
}

impl<T> Clone for SharedPtr<T> {
    /// Creates another owner of the same value, incrementing the count.
    fn clone(&self) -> Self {
        if let Some(block) = self.control() {
            block.acquire();
        }

        SharedPtr {
            block: self.block,
            _phantom: PhantomData,
        }
    }

    /// Copy-assigns `source` to self. If both already share a control block, nothing happens.
    /// Otherwise, self releases its own block (dropping the value if it was the last owner)
    /// before sharing the block of `source`.
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::ptr::shared::SharedPtr;
    /// let a = SharedPtr::new("a");
    /// let mut b = SharedPtr::new("b");
    /// b.clone_from(&a);
    /// assert_eq!(*b, "a");
    /// assert_eq!(a.use_count(), Ok(2));
    ///
    /// b.clone_from(&a);
    /// assert_eq!(a.use_count(), Ok(2));
    /// ```
    fn clone_from(&mut self, source: &Self) {
        if self.block == source.block {
            return;
        }

        // Acquire before releasing, so that the count can never reach zero in between.
        let new = source.clone();
        drop(mem::replace(self, new));
    }
}

impl<T> Default for SharedPtr<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for SharedPtr<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T> Deref for SharedPtr<T> {
    type Target = T;

    /// # Panics
    /// Panics with [`EmptyPointer`] if there is no control block or it holds a null pointer.
    fn deref(&self) -> &Self::Target {
        self.try_get().throw()
    }
}

impl<T> From<Box<T>> for SharedPtr<T> {
    fn from(value: Box<T>) -> Self {
        SharedPtr::from_block(ControlBlock::allocate(Some(NonNull::from(Box::leak(value)))))
    }
}

impl<T: Debug> Debug for SharedPtr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.control() {
            Some(block) => f.debug_struct("SharedPtr")
                .field("value", &self.get())
                .field("count", &block.count.get())
                .finish(),
            None => write!(f, "SharedPtr(empty)"),
        }
    }
}

impl<T: Display> Display for SharedPtr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => Display::fmt(value, f),
            None => write!(f, "null"),
        }
    }
}

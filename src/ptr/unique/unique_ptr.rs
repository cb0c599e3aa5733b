use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};

use super::{DefaultDeleter, Deleter};
use crate::util::error::EmptyPointer;
use crate::util::result::ResultExtension;

/// A pointer which exclusively owns a single heap allocated value (or nothing), and destroys it
/// with a [`Deleter`] when dropped or reset.
///
/// UniquePtr implements neither [`Clone`] nor [`Copy`], so ownership can only ever be moved:
///
/// ```compile_fail
/// # use tiny_std::ptr::unique::UniquePtr;
/// let a = UniquePtr::new(5);
/// let b: UniquePtr<i32> = a.clone();
/// ```
///
/// Moving a UniquePtr in Rust transfers ownership without any runtime bookkeeping. To move the
/// value out of a UniquePtr that should remain usable, use [`take`](UniquePtr::take), which leaves
/// it null.
///
/// # Examples
/// ```
/// # use tiny_std::ptr::unique::UniquePtr;
/// let mut ptr = UniquePtr::new(String::from("hello"));
/// ptr.push_str(" world");
/// assert_eq!(&*ptr, "hello world");
///
/// let moved = ptr.take();
/// assert!(ptr.is_null());
/// assert_eq!(&*moved, "hello world");
/// ```
pub struct UniquePtr<T, D: Deleter<T> = DefaultDeleter> {
    pub(crate) ptr: Option<NonNull<T>>,
    pub(crate) deleter: D,
}

impl<T> UniquePtr<T> {
    /// Moves `value` onto the heap and takes ownership of it.
    pub fn new(value: T) -> UniquePtr<T> {
        UniquePtr {
            ptr: Some(NonNull::from(Box::leak(Box::new(value)))),
            deleter: DefaultDeleter,
        }
    }

    /// Takes ownership of the value behind a raw pointer. A null `ptr` produces a null
    /// UniquePtr.
    ///
    /// # Safety
    /// `ptr` must either be null or have been produced by [`Box::into_raw`] (or
    /// [`release`](UniquePtr::release) on a UniquePtr with the default Deleter), and must not be
    /// owned by anything else afterwards.
    pub unsafe fn from_raw(ptr: *mut T) -> UniquePtr<T> {
        UniquePtr {
            ptr: NonNull::new(ptr),
            deleter: DefaultDeleter,
        }
    }

    /// Replaces the owned value (if any) with a newly allocated `value`, destroying the old one.
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::ptr::unique::UniquePtr;
    /// let mut ptr: UniquePtr<i32> = UniquePtr::null();
    /// ptr.set(1);
    /// ptr.set(2);
    /// assert_eq!(*ptr, 2);
    /// ```
    pub fn set(&mut self, value: T) {
        // SAFETY: The pointer comes straight from Box::into_raw and is owned by nothing else.
        unsafe { self.reset(Box::into_raw(Box::new(value))) }
    }
}

impl<T, D: Deleter<T> + Default> UniquePtr<T, D> {
    /// Creates a UniquePtr which owns nothing.
    pub fn null() -> UniquePtr<T, D> {
        UniquePtr {
            ptr: None,
            deleter: D::default(),
        }
    }
}

impl<T, D: Deleter<T>> UniquePtr<T, D> {
    /// Takes ownership of the value behind a raw pointer, to be destroyed by `deleter`. A null
    /// `ptr` produces a null UniquePtr, which never invokes its deleter.
    ///
    /// # Safety
    /// If `ptr` is non-null, it must be valid for reads and writes of `T` until it is passed to
    /// `deleter`, and must not be owned by anything else.
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::ptr::unique::UniquePtr;
    /// # use std::ptr::NonNull;
    /// let mut value = 5;
    /// let mut deleted = false;
    /// {
    ///     // SAFETY: value outlives the pointer, and the deleter doesn't free it.
    ///     let ptr = unsafe {
    ///         UniquePtr::from_raw_with_deleter(&raw mut value, |_: NonNull<i32>| deleted = true)
    ///     };
    ///     assert_eq!(*ptr, 5);
    /// }
    /// assert!(deleted);
    /// ```
    pub unsafe fn from_raw_with_deleter(ptr: *mut T, deleter: D) -> UniquePtr<T, D> {
        UniquePtr {
            ptr: NonNull::new(ptr),
            deleter,
        }
    }

    /// Returns true if the UniquePtr owns nothing.
    pub const fn is_null(&self) -> bool {
        self.ptr.is_none()
    }

    /// Returns the owned address, or null.
    pub const fn as_ptr(&self) -> *mut T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => ptr::null_mut(),
        }
    }

    /// Returns a reference to the owned value, or [`None`] if the UniquePtr is null.
    pub const fn get(&self) -> Option<&T> {
        match self.ptr {
            // SAFETY: The pointer is valid while owned, and the reference is tied to &self.
            Some(ptr) => Some(unsafe { ptr.as_ref() }),
            None => None,
        }
    }

    /// Returns a mutable reference to the owned value, or [`None`] if the UniquePtr is null.
    pub const fn get_mut(&mut self) -> Option<&mut T> {
        match self.ptr {
            // SAFETY: The pointer is valid and uniquely owned, and the reference is tied to
            // &mut self.
            Some(mut ptr) => Some(unsafe { ptr.as_mut() }),
            None => None,
        }
    }

    /// Returns a reference to the owned value.
    ///
    /// # Errors
    /// Returns [`EmptyPointer`] if the UniquePtr is null.
    pub fn try_get(&self) -> Result<&T, EmptyPointer> {
        self.get().ok_or(EmptyPointer)
    }

    /// Returns a mutable reference to the owned value.
    ///
    /// # Errors
    /// Returns [`EmptyPointer`] if the UniquePtr is null.
    pub fn try_get_mut(&mut self) -> Result<&mut T, EmptyPointer> {
        self.get_mut().ok_or(EmptyPointer)
    }

    /// Returns the Deleter which will destroy the owned value.
    pub const fn deleter(&self) -> &D {
        &self.deleter
    }

    /// Returns the Deleter mutably, allowing its state to be adjusted before it next runs.
    pub const fn deleter_mut(&mut self) -> &mut D {
        &mut self.deleter
    }

    /// Gives up ownership of the held address without destroying the value, leaving the UniquePtr
    /// null. The caller becomes responsible for cleaning up the value.
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::ptr::unique::UniquePtr;
    /// let mut ptr = UniquePtr::new(3);
    /// let raw = ptr.release().expect("ptr isn't null");
    /// assert!(ptr.is_null());
    ///
    /// // SAFETY: raw came from a UniquePtr using the default deleter, and isn't owned elsewhere.
    /// let value = unsafe { Box::from_raw(raw.as_ptr()) };
    /// assert_eq!(*value, 3);
    /// ```
    pub const fn release(&mut self) -> Option<NonNull<T>> {
        self.ptr.take()
    }

    /// Destroys the currently owned value (if any) with the Deleter, then takes ownership of
    /// `ptr`, which may be null.
    ///
    /// # Safety
    /// The same requirements as the constructor used for this UniquePtr apply to `ptr`: it must
    /// be suitable for passing to this UniquePtr's Deleter and must not be owned by anything else.
    pub unsafe fn reset(&mut self, ptr: *mut T) {
        let old = mem::replace(&mut self.ptr, NonNull::new(ptr));
        if let Some(old) = old {
            self.deleter.delete(old);
        }
    }

    /// Destroys the currently owned value (if any), leaving the UniquePtr null.
    pub fn clear(&mut self) {
        if let Some(old) = self.ptr.take() {
            self.deleter.delete(old);
        }
    }

    /// Checks whether both UniquePtrs hold the same address. Two non-null UniquePtrs can only be
    /// equal if one of them was constructed unsafely in violation of its contract.
    pub fn addr_eq<E: Deleter<T>>(&self, other: &UniquePtr<T, E>) -> bool {
        self.as_ptr() == other.as_ptr()
    }
}

impl<T, D: Deleter<T> + Clone> UniquePtr<T, D> {
    /// Moves ownership out of self into a new UniquePtr with a copy of the same Deleter, leaving
    /// self null. This is the equivalent of move assignment from a UniquePtr which remains usable.
    pub fn take(&mut self) -> UniquePtr<T, D> {
        UniquePtr {
            ptr: self.ptr.take(),
            deleter: self.deleter.clone(),
        }
    }
}

impl<T, D: Deleter<T> + Default> Default for UniquePtr<T, D> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T, D: Deleter<T>> Drop for UniquePtr<T, D> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, D: Deleter<T>> Deref for UniquePtr<T, D> {
    type Target = T;

    /// # Panics
    /// Panics with [`EmptyPointer`] if the UniquePtr is null.
    fn deref(&self) -> &Self::Target {
        self.try_get().throw()
    }
}

impl<T, D: Deleter<T>> DerefMut for UniquePtr<T, D> {
    /// # Panics
    /// Panics with [`EmptyPointer`] if the UniquePtr is null.
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.try_get_mut().throw()
    }
}

impl<T> From<Box<T>> for UniquePtr<T> {
    fn from(value: Box<T>) -> Self {
        UniquePtr {
            ptr: Some(NonNull::from(Box::leak(value))),
            deleter: DefaultDeleter,
        }
    }
}

impl<T, D: Deleter<T>, E: Deleter<T>> PartialEq<UniquePtr<T, E>> for UniquePtr<T, D> {
    /// Compares addresses, see [`addr_eq`](UniquePtr::addr_eq).
    fn eq(&self, other: &UniquePtr<T, E>) -> bool {
        self.addr_eq(other)
    }
}

impl<T, D: Deleter<T>> Eq for UniquePtr<T, D> {}

// SAFETY: UniquePtr owns its value uniquely, so sending it sends the value and the Deleter.
unsafe impl<T: Send, D: Deleter<T> + Send> Send for UniquePtr<T, D> {}
// SAFETY: Shared references to a UniquePtr only provide shared references to the value and
// Deleter.
unsafe impl<T: Sync, D: Deleter<T> + Sync> Sync for UniquePtr<T, D> {}

impl<T: Debug, D: Deleter<T>> Debug for UniquePtr<T, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("UniquePtr").field(value).finish(),
            None => write!(f, "UniquePtr(null)"),
        }
    }
}

impl<T: Display, D: Deleter<T>> Display for UniquePtr<T, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => Display::fmt(value, f),
            None => write!(f, "null"),
        }
    }
}

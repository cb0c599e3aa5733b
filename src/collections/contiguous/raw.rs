use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::util::error::{AllocError, CapacityOverflow, ReserveError};

/// A run of `cap` uninitialized slots for values of `T`, owned exclusively. RawBuf knows nothing
/// about which slots are initialized, it only allocates, moves and releases memory. Dropping it
/// never drops any values.
///
/// The pointer is [`None`] if and only if `cap` is zero. Zero-sized types are never allocated, but
/// hold a dangling pointer while `cap` is non-zero.
pub(crate) struct RawBuf<T> {
    pub(crate) ptr: Option<NonNull<T>>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawBuf<T> {
    pub(crate) const fn new() -> RawBuf<T> {
        RawBuf {
            ptr: None,
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns a pointer to the first slot, or a dangling pointer if nothing is allocated. The
    /// result is always suitable for creating a slice of length zero.
    pub(crate) const fn data(&self) -> NonNull<T> {
        match self.ptr {
            Some(ptr) => ptr,
            None => NonNull::dangling(),
        }
    }

    /// Returns a pointer to the first slot, or null if nothing is allocated.
    pub(crate) const fn as_ptr(&self) -> *mut T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => std::ptr::null_mut(),
        }
    }

    pub(crate) fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow)
    }

    /// Moves the contents of the buffer into a region of exactly `new_cap` slots, releasing the old
    /// region. The bytes of the first `min(cap, new_cap)` slots are preserved.
    ///
    /// Any initialized values in slots `new_cap..cap` must have been dropped (or moved out) by the
    /// caller beforehand, because they are released without being dropped.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the layout for `new_cap` elements would overflow or if the
    /// allocator fails. In either case, the buffer is unchanged and still owns the old region.
    pub(crate) fn try_realloc(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        if new_cap == self.cap {
            return Ok(());
        }

        if size_of::<T>() == 0 {
            // Nothing is ever allocated for a zero-sized type, we only need to track the capacity.
            self.ptr = (new_cap != 0).then(NonNull::dangling);
            self.cap = new_cap;
            return Ok(());
        }

        if new_cap == 0 {
            self.release();
            return Ok(());
        }

        let new_layout = Self::make_layout(new_cap)?;

        let new_ptr = match self.ptr {
            None => {
                // SAFETY: The layout has a non-zero size, because both zero capacity and zero-sized
                // types are guarded against.
                let raw_ptr: *mut T = unsafe { alloc::alloc(new_layout).cast() };
                NonNull::new(raw_ptr).ok_or(AllocError { layout: new_layout })?
            },
            Some(old_ptr) => {
                // SAFETY: old_ptr was allocated by the global allocator with the layout of cap
                // elements, which is non-zero and valid because it was produced when allocating.
                // The new size is non-zero and has been checked to fit a Layout. On failure,
                // realloc leaves the old region untouched.
                let raw_ptr: *mut T = unsafe {
                    alloc::realloc(
                        old_ptr.as_ptr().cast(),
                        self.current_layout(),
                        new_layout.size(),
                    ).cast()
                };
                NonNull::new(raw_ptr).ok_or(AllocError { layout: new_layout })?
            },
        };

        self.ptr = Some(new_ptr);
        self.cap = new_cap;
        Ok(())
    }

    /// Releases the owned region without dropping anything, leaving the buffer with capacity zero.
    pub(crate) fn release(&mut self) {
        if let Some(ptr) = self.ptr.take() {
            if size_of::<T>() != 0 {
                // SAFETY: ptr was allocated by the global allocator with the current layout.
                // Zero-sized types are never allocated, so they are never deallocated.
                unsafe { alloc::dealloc(ptr.as_ptr().cast(), self.current_layout()) }
            }
        }
        self.cap = 0;
    }

    /// The layout of the currently allocated region.
    fn current_layout(&self) -> Layout {
        // SAFETY: The same layout was successfully created for cap elements when the region was
        // allocated, so it is known to be valid.
        unsafe {
            Layout::from_size_align_unchecked(size_of::<T>() * self.cap, align_of::<T>())
        }
    }
}

impl<T> Default for RawBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.release();
    }
}

// SAFETY: RawBuf owns its region uniquely, so it may be sent whenever T may be.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: RawBuf provides no shared mutation through &self.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

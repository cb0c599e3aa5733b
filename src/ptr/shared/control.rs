use std::cell::Cell;
use std::ptr::NonNull;

/// The heap allocated block shared by every [`SharedPtr`](super::SharedPtr) referring to the same
/// value. The block owns the value, and is destroyed along with it when the count reaches zero.
pub(crate) struct ControlBlock<T> {
    /// The owned value, allocated through [`Box`]. May be null.
    pub(crate) value: Option<NonNull<T>>,
    /// The number of SharedPtrs referring to this block.
    pub(crate) count: Cell<usize>,
}

impl<T> ControlBlock<T> {
    /// Allocates a new block for `value` with a count of 1, returning a pointer to it which the
    /// caller is responsible for releasing with [`ControlBlock::release`].
    pub(crate) fn allocate(value: Option<NonNull<T>>) -> NonNull<ControlBlock<T>> {
        NonNull::from(Box::leak(Box::new(ControlBlock {
            value,
            count: Cell::new(1),
        })))
    }

    /// Registers one more owner.
    pub(crate) fn acquire(&self) {
        // A count that can't be incremented would have needed more SharedPtrs than there is
        // memory to store them in, unless they were leaked on purpose.
        let count = self.count.get().checked_add(1).unwrap_or_else(|| std::process::abort());
        self.count.set(count);
    }

    /// Unregisters one owner of the block behind `block`, destroying the value and freeing the
    /// block if it was the last one.
    ///
    /// # Safety
    /// `block` must have been produced by [`ControlBlock::allocate`], must not have been freed, and
    /// the caller must be giving up one of the owners counted by the block.
    pub(crate) unsafe fn release(block: NonNull<ControlBlock<T>>) {
        // SAFETY: The caller guarantees that block is still allocated. Only a shared reference is
        // created, and it isn't used after the block is freed.
        let count = unsafe { block.as_ref() }.count.get() - 1;

        if count != 0 {
            // SAFETY: As above.
            unsafe { block.as_ref() }.count.set(count);
            return;
        }

        // SAFETY: block came from Box::leak in allocate, and the caller was its last owner, so
        // nothing else can access it anymore.
        let block = unsafe { Box::from_raw(block.as_ptr()) };
        if let Some(value) = block.value {
            // SAFETY: The value was allocated through Box and is owned only by this block.
            drop(unsafe { Box::from_raw(value.as_ptr()) });
        }
    }
}

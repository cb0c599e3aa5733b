use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::raw::RawBuf;
use crate::util::error::{
    CapacityOverflow, EmptyCollection, IndexOrReserveError, IndexOutOfBounds, ReserveError,
};
use crate::util::result::ResultExtension;

const GROWTH_FACTOR: usize = 2;
const GROWTH_OFFSET: usize = 1;

/// A variable size contiguous collection, owning a heap allocated buffer of elements.
///
/// The capacity of a Vector is exactly the value it was last set to. When a push finds the Vector
/// full, the capacity grows from `cap` to `2 * cap + 1`, so growing from empty produces the
/// capacities 1, 3, 7, 15 and so on. Moving elements during reallocation therefore costs `O(n)`
/// across `n` pushes.
///
/// Note that [`clear`](Vector::clear) releases the allocation as well as the elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in the second Vector.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `resize` | `O(n)` |
/// | `clear` | `O(n)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `append` | `O(n+m)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Nothing is allocated until the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// assert!(vec.as_ptr().is_null());
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        let mut vec = Vector::new();
        vec.reserve(cap);
        vec
    }

    /// Returns the number of initialized elements in the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push(1);
    /// assert!(!vec.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is guaranteed to be
    /// exactly the value provided to any of the various capacity manipulation functions, or the
    /// value produced by growth.
    pub const fn cap(&self) -> usize {
        self.buf.cap
    }

    /// Returns a pointer to the Vector's storage. The pointer is null if and only if the capacity is
    /// zero. It is invalidated by any operation which changes the capacity.
    pub const fn as_ptr(&self) -> *const T {
        self.buf.as_ptr().cast_const()
    }

    /// Returns a mutable pointer to the Vector's storage, see [`as_ptr`](Vector::as_ptr).
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_ptr()
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity to `2 * cap + 1`
    /// if it is full.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// vec.push(1);
    /// assert_eq!(vec.cap(), 1);
    /// vec.push(2);
    /// vec.push(3);
    /// assert_eq!(vec.cap(), 3);
    /// assert_eq!(&*vec, &[1, 2, 3]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).unwrap_or_else(|error| error.raise())
    }

    /// Push the provided value onto the end of the Vector, see [`push`](Vector::push).
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the Vector is full and growing it fails. The Vector is left
    /// unchanged and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<(), ReserveError> {
        if self.len == self.cap() {
            self.grow()?;
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap) to
    /// do so. Using this method on a Vector without enough capacity is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::contiguous::Vector;
    /// let mut vec = Vector::with_cap(3);
    /// for i in 1_u8..=3 {
    ///     // SAFETY: vec has enough capacity to store all three elements.
    ///     unsafe { vec.push_unchecked(i); }
    /// }
    /// assert_eq!(&*vec, &[1, 2, 3]);
    /// ```
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, leading to the write being in bounds of the allocation.
        unsafe { self.buf.data().add(self.len).write(value); }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0. Popping from an empty Vector returns [`None`] and leaves it
    /// unchanged. The capacity is never changed.
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// assert_eq!(vec.len(), 0);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading.
            self.len -= 1;

            // SAFETY: len has just been decremented and is within the capacity of the Vector, and
            // all values < the old len are initialized. The value is no longer tracked as
            // initialized, so the read moves it out of the buffer.
            Some(unsafe { self.buf.data().add(self.len).read() })
        }
    }

    /// Drops the last element of the Vector in place.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2]);
    /// assert!(vec.remove_last().is_ok());
    /// assert!(vec.remove_last().is_ok());
    /// assert!(vec.remove_last().is_err());
    /// ```
    pub fn remove_last(&mut self) -> Result<(), EmptyCollection> {
        if self.len == 0 {
            return Err(EmptyCollection);
        }

        // Decrement first, so that a panicking drop can't cause a second drop later on.
        self.len -= 1;
        // SAFETY: The value at the old len - 1 is initialized, and is no longer considered part
        // of the Vector.
        unsafe { ptr::drop_in_place(self.buf.data().add(self.len).as_ptr()); }
        Ok(())
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary. An
    /// index equal to the length pushes onto the end.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds, or if the memory layout of the Vector would
    /// have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(5, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        match self.try_insert(index, value) {
            Ok(()) => (),
            Err(IndexOrReserveError::IndexOutOfBounds(error)) => panic!("{}", error),
            Err(IndexOrReserveError::ReserveError(error)) => error.raise(),
        }
    }

    /// Inserts the provided value at the given index, see [`insert`](Vector::insert).
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`, or a [`ReserveError`] if the Vector is full
    /// and growing it fails. In both cases the Vector is left unchanged and `value` is dropped.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrReserveError> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into());
        }

        if self.len == self.cap() {
            self.grow()?;
        }

        // SAFETY: There is capacity for one more element, so shifting index..len up by one slot
        // stays in bounds. The regions may overlap, which ptr::copy allows. The slot at index is
        // then logically uninitialized and written without dropping.
        unsafe {
            let slot = self.buf.data().add(index);
            ptr::copy(slot.as_ptr(), slot.add(1).as_ptr(), self.len - index);
            slot.write(value);
        }
        self.len += 1;

        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, see [`remove`](Vector::remove).
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`, leaving the Vector unchanged.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len, so the value is initialized. After reading it, the gap is filled by
        // shifting index + 1..len down by one slot, which stays in bounds.
        let value = unsafe {
            let slot = self.buf.data().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1).as_ptr(), slot.as_ptr(), self.len - index - 1);
            value
        };
        self.len -= 1;

        Ok(value)
    }

    /// Ensures that the capacity of the Vector is at least `new_cap`. If the capacity is already
    /// large enough, nothing happens and pointers into the Vector remain valid. Otherwise, exactly
    /// `new_cap` slots are allocated and all elements are moved into them.
    ///
    /// Note that unlike [`Vec::reserve`], the argument is a total capacity rather than an
    /// additional one.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.reserve(10);
    /// assert_eq!(vec.cap(), 10);
    /// vec.reserve(4);
    /// assert_eq!(vec.cap(), 10);
    /// ```
    pub fn reserve(&mut self, new_cap: usize) {
        self.try_reserve(new_cap).unwrap_or_else(|error| error.raise())
    }

    /// Ensures that the capacity of the Vector is at least `new_cap`, see
    /// [`reserve`](Vector::reserve).
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the required layout overflows or allocation fails. The Vector
    /// is left exactly as it was, including its capacity and the location of its elements.
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1_u64, 2, 3]);
    /// assert!(vec.try_reserve(usize::MAX).is_err());
    /// assert_eq!(&*vec, &[1, 2, 3]);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        if new_cap <= self.cap() {
            return Ok(());
        }

        self.buf.try_realloc(new_cap)
    }

    /// Shrinks the Vector so that its capacity is equal to its length, releasing the allocation
    /// entirely if it is empty.
    pub fn shrink_to_fit(&mut self) {
        self.buf.try_realloc(self.len).unwrap_or_else(|error| error.raise())
    }

    /// Drops every element of the Vector in index order and releases its allocation, leaving it
    /// with both length and capacity 0.
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.clear();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// vec.push(4);
    /// assert_eq!(vec.cap(), 1);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
        self.buf.release();
    }

    /// Drops all elements at or after `len`, keeping the capacity unchanged. Does nothing if the
    /// Vector is already no longer than `len`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let dropped = self.len - len;
        // Shorten first, so that a panicking drop can't cause a second drop later on.
        self.len = len;

        // SAFETY: Values len..len + dropped are initialized and no longer considered part of the
        // Vector. Dropping a slice drops its elements in index order.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.data().add(len).as_ptr(),
                dropped,
            ));
        }
    }

    /// Resizes the Vector to `new_len` elements. When shrinking, trailing elements are dropped.
    /// When growing, the capacity is first raised to exactly `new_len` if required, then new
    /// elements are produced by calling `f` once for each.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }

        self.reserve(new_len);

        while self.len < new_len {
            // SAFETY: The capacity is at least new_len, which is greater than len.
            unsafe { self.push_unchecked(f()) }
        }
    }

    /// Moves all elements out of `other` and onto the end of self.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2]);
    /// vec.append(Vector::from([3, 4]));
    /// assert_eq!(&*vec, &[1, 2, 3, 4]);
    /// ```
    pub fn append(&mut self, mut other: Vector<T>) {
        let new_len = self.len.checked_add(other.len)
            .ok_or(CapacityOverflow)
            .throw();
        self.reserve(new_len);

        // SAFETY: self has capacity for new_len elements, so the destination is valid for
        // other.len writes. other is valid for other.len reads. The two are different allocations.
        unsafe {
            ptr::copy_nonoverlapping(
                other.buf.data().as_ptr().cast_const(),
                self.buf.data().add(self.len).as_ptr(),
                other.len,
            );
        }
        self.len = new_len;

        // The values now belong to self, so other must only release its allocation.
        other.len = 0;
    }

    /// Moves the contents out of self, leaving it empty with no allocation. This is the equivalent
    /// of move assignment from a Vector which remains usable.
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::contiguous::Vector;
    /// let mut source = Vector::from([1, 2, 3]);
    /// let dest = source.take();
    /// assert_eq!(&*dest, &[1, 2, 3]);
    /// assert_eq!((source.len(), source.cap()), (0, 0));
    /// ```
    pub fn take(&mut self) -> Vector<T> {
        mem::take(self)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn at(&self, index: usize) -> &T {
        self.try_at(index).throw()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::contiguous::Vector;
    /// let vec = Vector::from([1, 2]);
    /// assert_eq!(vec.try_at(1), Ok(&2));
    /// assert!(vec.try_at(2).is_err());
    /// ```
    pub fn try_at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the element is initialized.
        Ok(unsafe { self.buf.data().add(index).as_ref() })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        self.try_at_mut(index).throw()
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the element is initialized, and self is borrowed mutably.
        Ok(unsafe { self.buf.data().add(index).as_mut() })
    }

    /// Returns the first element, or [`None`] if the Vector is empty.
    pub fn front(&self) -> Option<&T> {
        self.first()
    }

    /// Returns the first element mutably, or [`None`] if the Vector is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.first_mut()
    }

    /// Returns the last element, or [`None`] if the Vector is empty.
    pub fn back(&self) -> Option<&T> {
        self.last()
    }

    /// Returns the last element mutably, or [`None`] if the Vector is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    /// Grows the Vector from `cap` to `2 * cap + 1`. After calling this, the Vector can take at
    /// least one more element.
    pub(crate) fn grow(&mut self) -> Result<(), ReserveError> {
        let new_cap = self.cap()
            .checked_mul(GROWTH_FACTOR)
            .and_then(|cap| cap.checked_add(GROWTH_OFFSET))
            .ok_or(CapacityOverflow)?;

        self.buf.try_realloc(new_cap)
    }

    /// Checks that the provided index refers to an initialized element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }
}

impl<T: Default> Vector<T> {
    /// Creates a Vector of `len` default values, with capacity `len`.
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_len(3);
    /// assert_eq!(&*vec, &[0, 0, 0]);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn with_len(len: usize) -> Vector<T> {
        let mut vec = Vector::new();
        vec.resize_default(len);
        vec
    }

    /// Resizes the Vector to `new_len`, filling new slots with the default value of `T`. See
    /// [`resize_with`](Vector::resize_with).
    pub fn resize_default(&mut self, new_len: usize) {
        self.resize_with(new_len, T::default);
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a Vector containing `count` clones of `value`, with capacity `count`.
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::contiguous::Vector;
    /// let vec = Vector::repeat("a", 3);
    /// assert_eq!(&*vec, &["a", "a", "a"]);
    /// ```
    pub fn repeat(value: T, count: usize) -> Vector<T> {
        let mut vec = Vector::new();
        vec.resize(count, value);
        vec
    }

    /// Creates a Vector by cloning every element of `slice`, with capacity equal to its length.
    pub fn from_slice(slice: &[T]) -> Vector<T> {
        let mut vec = Vector::with_cap(slice.len());

        for value in slice {
            // SAFETY: vec has been created with the right capacity.
            unsafe { vec.push_unchecked(value.clone()); }
        }

        vec
    }

    /// Resizes the Vector to `new_len`, filling new slots with clones of `value`. See
    /// [`resize_with`](Vector::resize_with).
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2]);
    /// vec.resize(4, 9);
    /// assert_eq!(&*vec, &[1, 2, 9, 9]);
    /// assert_eq!(vec.cap(), 4);
    /// vec.resize(1, 0);
    /// assert_eq!(&*vec, &[1]);
    /// assert_eq!(vec.cap(), 4);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) {
        self.resize_with(new_len, || value.clone());
    }

    /// Replaces the contents of the Vector with `count` clones of `value`.
    pub fn assign(&mut self, count: usize, value: T) {
        *self = Vector::repeat(value, count);
    }

    /// Replaces the contents of the Vector with clones of the elements of `slice`.
    pub fn assign_from_slice(&mut self, slice: &[T]) {
        *self = Vector::from_slice(slice);
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        for item in iter {
            self.push(*item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);
        vec.extend(iter);
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        let mut vec = Vector::with_cap(N);

        for item in value {
            // SAFETY: vec has been created with capacity for all N items.
            unsafe { vec.push_unchecked(item); }
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Drop all initialized values in place. The RawBuf then releases the allocation.
        self.truncate(0);
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull and properly aligned, even when nothing is allocated. The borrow checker
        // enforces that self isn't mutated due to this function taking a &self.
        unsafe { slice::from_raw_parts(self.buf.data().as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull and properly aligned, even when nothing is allocated. The borrow checker
        // enforces that self isn't accessed elsewhere due to this function taking a &mut self.
        unsafe { slice::from_raw_parts_mut(self.buf.data().as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Deep-copies every element into a new allocation with capacity equal to this Vector's
    /// length.
    fn clone(&self) -> Self {
        Vector::from_slice(self)
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::mem;
use std::ptr;
use std::slice;

use super::Vector;
use crate::collections::contiguous::raw::RawBuf;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let buf = mem::take(&mut self.buf);
        let end = self.len;
        // The elements now belong to the iterator, self only has an empty RawBuf left to drop.
        self.len = 0;

        IntoIter {
            buf,
            start: 0,
            end,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`Vector`]. See [`Vector::into_iter`]. The iterator keeps the
/// Vector's allocation until it is dropped, along with any elements that weren't yielded.
pub struct IntoIter<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: Values start..end are initialized and haven't been yielded yet.
        unsafe { slice::from_raw_parts(self.buf.data().add(self.start).as_ptr(), self.len()) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: start < end, so the value is initialized. Incrementing start marks it as moved.
        let value = unsafe { self.buf.data().add(self.start).read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: The old end - 1 is >= start, so the value is initialized. Decrementing end marks
        // it as moved.
        Some(unsafe { self.buf.data().add(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Values start..end haven't been yielded and are still initialized. The RawBuf
        // releases the allocation afterwards without dropping anything.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.data().add(self.start).as_ptr(),
                self.end - self.start,
            ));
        }
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

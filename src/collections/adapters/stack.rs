use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::Vector;

/// A last-in, first-out stack, backed by a [`Vector`].
///
/// # Examples
/// ```
/// # use tiny_std::collections::adapters::Stack;
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.top(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    pub(crate) data: Vector<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack without allocating.
    pub const fn new() -> Stack<T> {
        Stack {
            data: Vector::new(),
        }
    }

    /// Returns the number of values in the Stack.
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the Stack contains no values.
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pushes `value` onto the top of the Stack.
    ///
    /// # Panics
    /// Panics if the memory layout of the underlying [`Vector`] would have a size that exceeds
    /// [`isize::MAX`].
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Removes and returns the value on top of the Stack, or [`None`] if it is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Returns the value on top of the Stack, or [`None`] if it is empty.
    pub fn top(&self) -> Option<&T> {
        self.data.back()
    }

    /// Returns the value on top of the Stack mutably, or [`None`] if it is empty.
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.data.back_mut()
    }

    /// Drops every value in the Stack and releases its allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &&*self.data)
            .field("len", &self.len())
            .finish()
    }
}

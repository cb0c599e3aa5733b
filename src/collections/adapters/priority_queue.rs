use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::Vector;

/// A priority queue implemented as a binary min-heap on top of a [`Vector`]. The smallest value
/// according to [`Ord`] is always at the top.
///
/// The heap is stored level by level: the children of the value at index `i` are at `2i + 1` and
/// `2i + 2`, and its parent is at `(i - 1) / 2`.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `top` | `O(1)` |
/// | `push` | `O(log n)`*, `O(n)` |
/// | `pop` | `O(log n)` |
///
/// \* If the underlying Vector needs to grow, `push` will take `O(n)`.
///
/// # Examples
/// ```
/// # use tiny_std::collections::adapters::PriorityQueue;
/// let mut queue = PriorityQueue::new();
/// for i in [5, 3, 8, 1] {
///     queue.push(i);
/// }
/// assert_eq!(queue.top(), Some(&1));
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T: Ord> {
    pub(crate) heap: Vector<T>,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates a new, empty PriorityQueue without allocating.
    pub const fn new() -> PriorityQueue<T> {
        PriorityQueue {
            heap: Vector::new(),
        }
    }

    /// Returns the number of values in the queue.
    pub const fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the queue contains no values.
    pub const fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the smallest value in the queue, or [`None`] if it is empty.
    pub fn top(&self) -> Option<&T> {
        self.heap.front()
    }

    /// Adds `value` to the queue.
    ///
    /// # Panics
    /// Panics if the memory layout of the underlying [`Vector`] would have a size that exceeds
    /// [`isize::MAX`].
    pub fn push(&mut self, value: T) {
        self.heap.push(value);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the smallest value in the queue, or [`None`] if it is empty.
    ///
    /// # Examples
    /// ```
    /// # use tiny_std::collections::adapters::PriorityQueue;
    /// let mut queue: PriorityQueue<_> = [5, 3, 8, 1].into_iter().collect();
    /// assert_eq!(queue.pop(), Some(1));
    /// assert_eq!(queue.pop(), Some(3));
    /// assert_eq!(queue.pop(), Some(5));
    /// assert_eq!(queue.pop(), Some(8));
    /// assert_eq!(queue.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        // Move the last value into the root, then restore the heap from the top.
        let last = self.heap.len().checked_sub(1)?;
        self.heap.swap(0, last);
        let top = self.heap.pop()?;
        self.sift_down(0);

        Some(top)
    }

    /// Drops every value in the queue and releases its allocation.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Consumes the queue, producing a [`Vector`] of its values in ascending order.
    pub fn into_sorted_vector(mut self) -> Vector<T> {
        let mut sorted = Vector::with_cap(self.len());
        while let Some(value) = self.pop() {
            // SAFETY: sorted was created with capacity for every value in the queue.
            unsafe { sorted.push_unchecked(value); }
        }
        sorted
    }

    /// Moves the value at `index` towards the root while it is smaller than its parent.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index] >= self.heap[parent] {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    /// Moves the value at `index` away from the root while it is larger than either child,
    /// swapping it with the smaller child each time.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();

        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < len && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = PriorityQueue::new();
        for value in iter {
            queue.push(value);
        }
        queue
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord + Debug> Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &&*self.heap)
            .field("len", &self.len())
            .finish()
    }
}

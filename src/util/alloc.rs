#![cfg(test)]

use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

/// A zero-sized element type, used to check that containers never allocate for it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZeroSizedType;

/// A value that increments a shared counter every time it is dropped, used to check that owners
/// drop exactly the values they should.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    /// Creates a new counter, starting at zero drops.
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(0)))
    }

    /// Returns the number of drops counted so far, without resetting the counter.
    pub fn drops(&self) -> usize {
        *self.0.borrow()
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

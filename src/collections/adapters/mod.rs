//! Collections built entirely by delegating to [`Vector`](super::contiguous::Vector): a LIFO
//! [`Stack`] and a minimum-first [`PriorityQueue`].

pub mod priority_queue;
pub mod stack;

#[doc(inline)]
pub use priority_queue::PriorityQueue;
#[doc(inline)]
pub use stack::Stack;

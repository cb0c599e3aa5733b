#![cfg(test)]

use static_assertions::{assert_impl_all, assert_not_impl_any};

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::EmptyPointer;
use crate::util::panic::assert_panics;

assert_impl_all!(SharedPtr<u32>: Clone, Default);
assert_not_impl_any!(SharedPtr<u32>: Send, Sync, Copy);

#[test]
fn test_aliasing() {
    let counter = CountedDrop::new();
    let p = SharedPtr::new(counter.clone());
    assert_eq!(p.use_count(), Ok(1));

    let mut p2 = p.clone();
    assert_eq!(p.use_count(), Ok(2));
    assert!(p.ptr_eq(&p2));
    assert_eq!(p.as_ptr(), p2.as_ptr(), "Clones should refer to the same value.");

    let p3 = p2.take();
    assert_eq!(p.use_count(), Ok(2), "Taking shouldn't change the count.");
    assert!(!p2.has_block());
    assert_eq!(p2.use_count(), Err(EmptyPointer));
    assert!(p.ptr_eq(&p3));

    drop(p3);
    assert_eq!(p.use_count(), Ok(1));
    assert_eq!(counter.drops(), 0, "The value should live while an owner remains.");

    drop(p);
    assert_eq!(counter.drops(), 1, "The last owner should drop the value.");

    drop(p2);
    assert_eq!(counter.drops(), 1, "An empty SharedPtr mustn't drop anything.");
}

#[test]
fn test_count_over_operations() {
    let counter = CountedDrop::new();
    let root = SharedPtr::new(counter.clone());

    let mut owners = Vec::new();
    for i in 1..=10 {
        owners.push(root.clone());
        assert_eq!(root.use_count(), Ok(i + 1));
    }

    let moved: Vec<_> = owners.iter_mut().map(SharedPtr::take).collect();
    assert_eq!(root.use_count(), Ok(11));
    assert!(owners.iter().all(|owner| !owner.has_block()));

    drop(owners);
    assert_eq!(root.use_count(), Ok(11), "Dropping empty SharedPtrs shouldn't change the count.");

    for (i, mut owner) in moved.into_iter().enumerate() {
        if i % 2 == 0 {
            owner.reset();
            assert!(!owner.has_block());
        } else {
            drop(owner);
        }
        assert_eq!(root.use_count(), Ok(10 - i));
    }
    assert_eq!(counter.drops(), 0);

    drop(root);
    assert_eq!(counter.drops(), 1);
}

#[test]
fn test_clone_from() {
    let counter_a = CountedDrop::new();
    let counter_b = CountedDrop::new();

    let a = SharedPtr::new(counter_a.clone());
    let mut b = SharedPtr::new(counter_b.clone());

    b.clone_from(&a);
    assert_eq!(counter_b.drops(), 1, "Assigning over the last owner should drop its value.");
    assert_eq!(a.use_count(), Ok(2));
    assert!(a.ptr_eq(&b));

    b.clone_from(&a);
    assert_eq!(a.use_count(), Ok(2), "Assigning from the same block should do nothing.");

    let alias = b.clone();
    b.clone_from(&alias);
    assert_eq!(a.use_count(), Ok(3));

    let mut empty: SharedPtr<CountedDrop> = SharedPtr::empty();
    empty.clone_from(&a);
    assert_eq!(a.use_count(), Ok(4));

    b.clone_from(&SharedPtr::empty());
    assert!(!b.has_block());
    assert_eq!(a.use_count(), Ok(3));

    drop((a, alias, empty));
    assert_eq!(counter_a.drops(), 1);
}

#[test]
fn test_null_pointee() {
    // SAFETY: Null pointers are always accepted.
    let null = unsafe { SharedPtr::<u8>::from_raw(std::ptr::null_mut()) };
    assert!(null.has_block(), "A null pointee should still have a control block.");
    assert_eq!(null.use_count(), Ok(1));
    assert_eq!(null.get(), None);
    assert_eq!(null.try_get(), Err(EmptyPointer));
    assert!(null.as_ptr().is_null());

    let copy = null.clone();
    assert_eq!(null.use_count(), Ok(2));
    assert!(copy.ptr_eq(&null));
    assert_panics!({ let _value: u8 = *copy; }, "Dereferencing a null pointee should panic.");
}

#[test]
fn test_empty() {
    let empty: SharedPtr<u8> = SharedPtr::default();
    assert!(!empty.has_block());
    assert_eq!(empty.use_count(), Err(EmptyPointer));
    assert_eq!(empty.get(), None);
    assert!(empty.as_ptr().is_null());
    assert!(!empty.ptr_eq(&SharedPtr::empty()), "Empty SharedPtrs share no block.");
    assert_panics!({ let _value: u8 = *empty; });

    let clone = empty.clone();
    assert!(!clone.has_block());
}

#[test]
fn test_from_raw_and_box() {
    let counter = CountedDrop::new();
    let raw = Box::into_raw(Box::new(counter.clone()));

    // SAFETY: raw comes from Box::into_raw and is used only once.
    let ptr = unsafe { SharedPtr::from_raw(raw) };
    assert_eq!(ptr.as_ptr(), raw.cast_const());
    drop(ptr);
    assert_eq!(counter.drops(), 1);

    let boxed = SharedPtr::from(Box::new(String::from("boxed")));
    assert_eq!(boxed.len(), 5);
    assert_eq!(boxed.get().map(String::as_str), Some("boxed"));
}

#[test]
fn test_formatting() {
    let ptr = SharedPtr::new(7);
    let _copy = ptr.clone();
    assert_eq!(format!("{ptr}"), "7");
    assert_eq!(format!("{ptr:?}"), "SharedPtr { value: Some(7), count: 2 }");

    let empty: SharedPtr<i32> = SharedPtr::empty();
    assert_eq!(format!("{empty}"), "null");
    assert_eq!(format!("{empty:?}"), "SharedPtr(empty)");
}

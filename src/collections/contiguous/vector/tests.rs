#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::{EmptyCollection, IndexOrReserveError, IndexOutOfBounds, ReserveError};
use crate::util::panic::assert_panics;

fn assert_storage_invariants<T>(vec: &Vector<T>) {
    assert!(vec.len() <= vec.cap(), "Length should never exceed capacity.");
    assert_eq!(
        vec.cap() == 0,
        vec.as_ptr().is_null(),
        "Storage should be absent exactly when the capacity is zero."
    );
}

#[test]
fn test_growth_scenario() {
    let mut vec = Vector::new();
    assert_eq!((vec.len(), vec.cap()), (0, 0));
    assert_storage_invariants(&vec);

    vec.push(1);
    assert_eq!(vec.cap(), 1, "First push should grow capacity from 0 to 1.");
    vec.push(2);
    vec.push(3);
    assert_eq!((vec.len(), vec.cap()), (3, 3), "Capacity should grow 0 -> 1 -> 3.");

    assert_eq!(vec.pop(), Some(3));
    assert_eq!((vec.len(), vec.cap()), (2, 3), "Popping should never change capacity.");
    assert_eq!((vec[0], vec[1]), (1, 2));
    assert_storage_invariants(&vec);
}

#[test]
fn test_growth_sequence() {
    let mut vec = Vector::new();
    let mut caps = Vector::new();

    for i in 0..20 {
        let old_cap = vec.cap();
        vec.push(i);
        if vec.cap() != old_cap {
            caps.push(vec.cap());
        }
    }

    assert_eq!(*caps, [1, 3, 7, 15, 31], "Capacity should always grow to 2 * cap + 1.");
}

#[test]
fn test_amortized_moves() {
    for n in [1_usize, 10, 100, 1_000, 10_000] {
        let mut vec = Vector::new();
        let mut moved = 0;

        for i in 0..n {
            let (old_len, old_cap) = (vec.len(), vec.cap());
            vec.push(i);
            if vec.cap() != old_cap {
                // Every live element is moved into the new region when growing.
                moved += old_len;
            }
            assert_storage_invariants(&vec);
        }

        assert!(moved < 2 * n, "Moved {moved} elements over {n} pushes, growth isn't O(n).");
    }
}

#[test]
fn test_reserve() {
    let mut vec = Vector::from([1, 2, 3]);
    let old_ptr = vec.as_ptr();

    vec.reserve(2);
    vec.reserve(3);
    assert_eq!(vec.cap(), 3, "Reserving less than the capacity should do nothing.");
    assert_eq!(vec.as_ptr(), old_ptr, "Reserving less than the capacity shouldn't reallocate.");

    vec.reserve(10);
    assert_eq!(vec.cap(), 10, "Reserve should allocate exactly the requested capacity.");
    assert_eq!(*vec, [1, 2, 3], "Elements should be moved in index order.");
}

#[test]
fn test_reserve_failure_is_strong() {
    let mut vec = Vector::from([1_u32, 2, 3]);
    let old_ptr = vec.as_ptr();

    let error = vec.try_reserve(usize::MAX).expect_err("Layout should overflow.");
    assert!(error.is_capacity_overflow());
    assert_eq!(*vec, [1, 2, 3], "A failed reserve should leave elements untouched.");
    assert_eq!(vec.cap(), 3, "A failed reserve should leave the capacity untouched.");
    assert_eq!(vec.as_ptr(), old_ptr, "A failed reserve should leave the storage untouched.");

    assert!(matches!(
        vec.try_reserve(isize::MAX as usize / 2),
        Err(ReserveError::CapacityOverflow(_))
    ));

    assert_panics!({
        let mut vec = Vector::<u16>::new();
        vec.reserve(usize::MAX);
    });
}

#[test]
fn test_try_push_failure_is_strong() {
    let mut vec = Vector::<ZeroSizedType>::with_cap(usize::MAX);
    // Zero-sized values are never read, so any length within the capacity is valid.
    vec.len = usize::MAX;

    let error = vec.try_push(ZeroSizedType).expect_err("Growth should overflow.");
    assert!(error.is_capacity_overflow());
    assert_eq!((vec.len(), vec.cap()), (usize::MAX, usize::MAX));

    vec.len = 0;
    assert_eq!(vec.try_push(ZeroSizedType), Ok(()));
    assert_eq!(vec.len(), 1);
}

#[test]
fn test_alloc_failure_is_strong() {
    let mut vec = Vector::from([1_u8, 2, 3]);
    let old_ptr = vec.as_ptr();

    // The layout is valid, but no allocator can provide isize::MAX bytes.
    let error = vec.try_reserve(isize::MAX as usize).expect_err("Allocation should fail.");
    assert!(matches!(error, ReserveError::AllocError(_)));
    assert_eq!(*vec, [1, 2, 3], "A failed allocation should leave elements untouched.");
    assert_eq!(vec.cap(), 3, "A failed allocation should leave the capacity untouched.");
    assert_eq!(vec.as_ptr(), old_ptr, "A failed allocation should leave the storage untouched.");

    let mut empty = Vector::<u8>::new();
    assert!(matches!(
        empty.try_reserve(isize::MAX as usize),
        Err(ReserveError::AllocError(_))
    ));
    assert_eq!((empty.len(), empty.cap()), (0, 0));
    assert!(empty.as_ptr().is_null(), "A failed allocation shouldn't leave storage behind.");
}

#[test]
fn test_try_insert_growth_failure() {
    let counter = CountedDrop::new();
    let mut vec = Vector::<ZeroSizedType>::with_cap(usize::MAX);
    // Zero-sized values are never read, so any length within the capacity is valid.
    vec.len = usize::MAX;

    let error = vec.try_insert(0, ZeroSizedType).expect_err("Growth should overflow.");
    assert!(matches!(
        error,
        IndexOrReserveError::ReserveError(ReserveError::CapacityOverflow(_))
    ));
    assert_eq!((vec.len(), vec.cap()), (usize::MAX, usize::MAX));
    vec.len = 0;

    let mut full = Vector::with_cap(1);
    full.push(counter.clone());
    assert!(full.try_insert(2, counter.clone()).unwrap_err().is_index_out_of_bounds());
    assert_eq!(counter.drops(), 1, "A rejected value should be dropped.");
    assert_eq!(full.len(), 1);
}

#[test]
fn test_clear_releases_storage() {
    let counter = CountedDrop::new();
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(5).collect();

    vec.clear();
    assert_eq!(counter.drops(), 5, "Clear should drop every element.");
    assert_eq!((vec.len(), vec.cap()), (0, 0), "Clear should release the allocation.");
    assert_storage_invariants(&vec);

    vec.push(counter.clone());
    assert_eq!(vec.cap(), 1, "Pushing after clear should reallocate from zero.");
}

#[test]
fn test_pop_empty() {
    let mut vec = Vector::<u8>::new();
    assert_eq!(vec.pop(), None);
    assert_eq!(vec.len(), 0, "Popping an empty Vector mustn't underflow its length.");
    assert_eq!(vec.remove_last(), Err(EmptyCollection));

    vec.push(1);
    assert_eq!(vec.remove_last(), Ok(()));
    assert_eq!(vec.remove_last(), Err(EmptyCollection));
    assert_eq!(vec.len(), 0);
}

#[test]
fn test_remove_last_drops_in_place() {
    let counter = CountedDrop::new();
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(3).collect();

    vec.remove_last().expect("Vector isn't empty.");
    assert_eq!(counter.drops(), 1);
    assert_eq!((vec.len(), vec.cap()), (2, 3));
}

#[test]
fn test_checked_access() {
    let mut vec = Vector::from([10, 20, 30]);

    assert_eq!(vec.at(2), &30);
    *vec.at_mut(0) = 5;
    assert_eq!(vec.try_at(0), Ok(&5));
    assert_eq!(vec.try_at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert!(vec.try_at_mut(7).is_err());

    assert_panics!({ vec.at(3); });
    assert_panics!({ vec[3]; }, "Unchecked indexing out of bounds should still panic.");

    assert_eq!(vec.front(), Some(&5));
    assert_eq!(vec.back(), Some(&30));
    *vec.back_mut().expect("Vector isn't empty.") += 1;
    assert_eq!(vec.back(), Some(&31));

    let empty = Vector::<u8>::new();
    assert_eq!((empty.front(), empty.back()), (None, None));
}

#[test]
fn test_insert_remove() {
    let mut vec: Vector<_> = (0..5).collect();

    vec.insert(0, 100);
    vec.insert(6, 200);
    assert_eq!(*vec, [100, 0, 1, 2, 3, 4, 200]);
    assert_eq!(
        vec.try_insert(8, 300),
        Err(IndexOrReserveError::IndexOutOfBounds(IndexOutOfBounds { index: 8, len: 7 })),
        "Inserting past the end should be reported."
    );

    assert_eq!(vec.remove(0), 100);
    assert_eq!(vec.remove(5), 200);
    assert_eq!(vec.remove(2), 2);
    assert_eq!(*vec, [0, 1, 3, 4]);
    assert_eq!(vec.try_remove(4), Err(IndexOutOfBounds { index: 4, len: 4 }));

    let mut empty = Vector::<u8>::new();
    empty.insert(0, 1);
    assert_eq!(*empty, [1], "Inserting at index 0 of an empty Vector should push.");
}

#[test]
fn test_resize() {
    let mut vec = Vector::from([1, 2]);

    vec.resize(5, 7);
    assert_eq!(*vec, [1, 2, 7, 7, 7]);
    assert_eq!(vec.cap(), 5, "Growing past capacity should reserve exactly the new length.");

    vec.resize_default(3);
    assert_eq!(*vec, [1, 2, 7]);
    assert_eq!(vec.cap(), 5, "Shrinking should keep the capacity.");

    vec.resize_default(4);
    assert_eq!(*vec, [1, 2, 7, 0], "Growing within capacity should use default values.");
    assert_eq!(vec.cap(), 5);

    let counter = CountedDrop::new();
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    vec.resize_with(4, || unreachable!());
    assert_eq!(counter.drops(), 6, "6 elements should have been dropped while shrinking.");

    let mut count = 0;
    let mut vec = Vector::new();
    vec.resize_with(3, || {
        count += 1;
        count
    });
    assert_eq!(*vec, [1, 2, 3]);
}

#[test]
fn test_constructors() {
    assert_eq!(*Vector::<u8>::with_len(3), [0, 0, 0]);
    assert_eq!(*Vector::repeat('a', 2), ['a', 'a']);
    assert_eq!(*Vector::from_slice(&[1, 2, 3]), [1, 2, 3]);
    assert_eq!(Vector::<u8>::from_slice(&[]).cap(), 0);

    let vec = Vector::repeat(5, 4);
    assert_eq!(vec.cap(), 4, "Pre-sized Vectors should have capacity equal to their length.");

    let mut vec = Vector::from([1, 2, 3, 4]);
    vec.assign(2, 9);
    assert_eq!(*vec, [9, 9]);
    vec.assign_from_slice(&[4, 5, 6]);
    assert_eq!(*vec, [4, 5, 6]);
}

#[test]
fn test_clone_isolation() {
    let mut original = Vector::with_cap(10);
    original.extend([String::from("a"), String::from("b")]);

    let mut copy = original.clone();
    assert_eq!(original, copy, "A clone should compare equal to its source.");
    assert_eq!(copy.cap(), 2, "A clone's capacity should match the source's length.");

    copy.push(String::from("c"));
    copy[0].push('!');
    assert_eq!(*original, ["a", "b"], "Mutating a clone mustn't affect the source.");
    assert_eq!(*copy, ["a!", "b", "c"]);

    let counter = CountedDrop::new();
    let mut target: Vector<_> = iter::repeat_with(|| counter.clone()).take(4).collect();
    target.clone_from(&Vector::new());
    assert_eq!(counter.drops(), 4, "Clone assignment should drop the target's old elements.");
    assert_eq!(target.cap(), 0);
}

#[test]
fn test_take_empties_source() {
    let mut source = Vector::from([1, 2, 3]);
    let dest = source.take();

    assert_eq!(*dest, [1, 2, 3]);
    assert_eq!(dest.cap(), 3);
    assert_eq!((source.len(), source.cap()), (0, 0));
    assert!(source.as_ptr().is_null(), "A moved-from Vector should have no storage.");

    source.push(4);
    assert_eq!(*source, [4], "A moved-from Vector should remain usable.");
}

#[test]
fn test_append() {
    let mut vec = Vector::from([1, 2]);
    vec.append(Vector::from([3, 4, 5]));
    assert_eq!(*vec, [1, 2, 3, 4, 5]);

    let counter = CountedDrop::new();
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(2).collect();
    vec.append(iter::repeat_with(|| counter.clone()).take(3).collect());
    assert_eq!(counter.drops(), 0, "Appending shouldn't drop any moved elements.");
    drop(vec);
    assert_eq!(counter.drops(), 5, "Every appended element should be dropped exactly once.");
}

#[test]
fn test_shrink_to_fit() {
    let mut vec = Vector::<i32>::with_cap(10);
    vec.extend([1, 2, 3]);
    vec.shrink_to_fit();
    assert_eq!((vec.len(), vec.cap()), (3, 3));
    assert_eq!(*vec, [1, 2, 3]);

    vec.truncate(0);
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 0);
    assert_storage_invariants(&vec);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(vec);

    assert_eq!(counter.drops(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_iterators() {
    let mut vec: Vector<usize> = (0..5).collect();

    for i in &mut vec {
        *i *= 2;
    }
    assert_eq!(*vec, [0, 2, 4, 6, 8]);
    assert_eq!((&vec).into_iter().sum::<usize>(), 20);

    let mut iter = vec.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.as_slice(), &[2, 4, 6]);
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new();
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(
        counter.drops(),
        10,
        "Dropping an owned iterator should drop all remaining elements."
    );
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..10 {
        vec.push(ZeroSizedType);
    }

    assert_eq!(vec.len(), 10);
    assert_eq!(vec.cap(), 15);
    assert_storage_invariants(&vec);
    assert_eq!(vec.pop(), Some(ZeroSizedType));

    vec.clear();
    assert_eq!(vec.cap(), 0);
    assert_storage_invariants(&vec);
}

#[test]
fn test_equality_and_hash() {
    let vec = Vector::from([0_usize, 1, 2, 3, 4]);

    assert_eq!(vec, (0..5).collect(), "Different construction methods should be equal.");
    assert_ne!(vec, Vector::from([0, 1, 2, 5, 4]));

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&vec),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_formatting() {
    let vec = Vector::from([1, 2]);
    assert_eq!(format!("{vec}"), "[1, 2]");
    assert_eq!(format!("{vec:?}"), "Vector { contents: [1, 2], len: 2, cap: 2 }");
}

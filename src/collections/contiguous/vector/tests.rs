#![cfg(test)]

use std::iter;

use proptest::prelude::*;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_growth() {
    let mut vec = Vector::new();
    assert_eq!(vec.cap(), 0, "A new Vector shouldn't allocate.");

    vec.push(0);
    assert_eq!(vec.cap(), 2, "The first allocation should use the minimum capacity.");

    for i in 1..5 {
        vec.push(i);
    }
    assert_eq!(vec.cap(), 8, "Capacity should double each time the Vector is full.");
    assert_eq!(&*vec, &[0, 1, 2, 3, 4]);

    assert_eq!(vec.pop(), Some(4));
    assert_eq!(vec.len(), 4);
    assert_eq!(vec.cap(), 8, "Popping shouldn't shrink the Vector.");
}

#[test]
fn test_insert_and_remove() {
    let mut vec: Vector<_> = (0..5).collect();

    vec.insert(0, 10);
    vec.insert(3, 20);
    vec.insert(vec.len(), 30);
    assert_eq!(&*vec, &[10, 0, 1, 20, 2, 3, 4, 30]);

    assert_eq!(vec.remove(3), 20);
    assert_eq!(vec.remove(0), 10);
    assert_eq!(vec.remove(vec.len() - 1), 30);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4], "Removals should close the gaps they leave.");

    assert_eq!(
        vec.try_insert(6, 0),
        Err(IndexOutOfBounds { index: 6, len: 5 }),
        "Inserting past the end should fail."
    );
    assert_eq!(vec.try_remove(5), Err(IndexOutOfBounds { index: 5, len: 5 }));
    assert_panics!({ vec.remove(5); });
}

#[test]
fn test_search_and_sort() {
    let mut vec: Vector<_> = [5, 3, 8, 1, 4, 3].into_iter().collect();

    assert_eq!(vec.search(&3), Some(1), "Search should find the first match.");
    assert_eq!(vec.search(&7), None);

    vec.bubble_sort();
    assert_eq!(&*vec, &[1, 3, 3, 4, 5, 8]);

    let mut empty: Vector<u8> = Vector::new();
    empty.bubble_sort();
    assert!(empty.is_empty());
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(vec.remove(2));
    drop(vec.pop());
    assert_eq!(*counter.borrow(), 2);

    vec.clear();
    assert_eq!(*counter.borrow(), 10, "Clearing should drop every element.");
    assert_eq!(vec.len(), 0);

    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    drop(iter);
    assert_eq!(
        *counter.borrow(),
        20,
        "Dropping an owned iterator should drop the remaining elements."
    );
}

#[test]
fn test_iterators() {
    let mut vec: Vector<_> = (0..5).collect();

    for i in &mut vec {
        *i *= 2;
    }
    assert_eq!(vec.iter().sum::<i32>(), 20);

    let mut iter = vec.clone().into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.collect::<Vector<_>>(), [2, 4, 6].into_iter().collect::<Vector<_>>());
    assert_eq!(format!("{vec}"), "[0, 2, 4, 6, 8]");
}

proptest! {
    #[test]
    fn prop_bubble_sort_orders_elements(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut vec: Vector<_> = items.iter().copied().collect();
        vec.bubble_sort();

        let mut expected = items.clone();
        expected.sort();
        prop_assert_eq!(&*vec, expected.as_slice());
    }
}

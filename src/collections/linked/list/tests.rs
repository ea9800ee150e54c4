#![cfg(test)]

use std::iter;

use proptest::prelude::*;

use super::*;
use crate::collections::contiguous::Vector;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn contents<T: Clone>(list: &LinkedList<T>) -> Vector<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_push_and_pop() {
    let mut list = LinkedList::new();
    assert_eq!(list.pop_front(), None);

    list.push_back(2);
    list.push_front(1);
    list.push_back(3);

    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(3));
    assert_eq!(list.back(), None, "Popping the last node should clear the tail as well.");

    list.push_back(4);
    assert_eq!(list.front(), Some(&4));
    assert_eq!(list.back(), Some(&4));
}

#[test]
fn test_insert_and_remove() {
    let mut list: LinkedList<_> = (0..5).collect();

    list.insert(0, 10);
    list.insert(3, 20);
    list.insert(list.len(), 30);
    assert_eq!(&*contents(&list), &[10, 0, 1, 20, 2, 3, 4, 30]);
    assert_eq!(list.back(), Some(&30));

    assert_eq!(list.remove(3), 20);
    assert_eq!(list.remove(0), 10);
    assert_eq!(list.remove(list.len() - 1), 30);
    assert_eq!(list.back(), Some(&4), "Removing the tail should move it back one node.");

    assert_eq!(list.try_insert(7, 0), Err(IndexOutOfBounds { index: 7, len: 5 }));
    assert_eq!(list.try_remove(5), Err(IndexOutOfBounds { index: 5, len: 5 }));
    assert_panics!({ list.remove(5); });

    list.push_back(5);
    assert_eq!(&*contents(&list), &[0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_get() {
    let mut list: LinkedList<_> = "abc".chars().collect();

    assert_eq!(list.get(1), Some(&'b'));
    assert_eq!(list.get(3), None);

    if let Some(value) = list.get_mut(2) {
        *value = 'z';
    }
    assert_eq!(list.back(), Some(&'z'));
}

#[test]
fn test_search_and_remove_first() {
    let mut list: LinkedList<_> = [4, 7, 1, 7, 9].into_iter().collect();

    assert_eq!(list.search(&7), Some(1));
    assert!(list.contains(&9));
    assert!(!list.contains(&3));

    assert_eq!(list.remove_first(|&value| value == 7), Some(7));
    assert_eq!(&*contents(&list), &[4, 1, 7, 9]);

    assert_eq!(list.remove_first(|&value| value == 9), Some(9));
    assert_eq!(list.back(), Some(&7));

    assert_eq!(list.remove_first(|&value| value > 100), None);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_reverse() {
    let mut list: LinkedList<_> = (1..=4).collect();
    list.reverse();

    assert_eq!(&*contents(&list), &[4, 3, 2, 1]);
    assert_eq!(list.front(), Some(&4));
    assert_eq!(list.back(), Some(&1));

    list.push_back(0);
    assert_eq!(format!("{list}"), "[4, 3, 2, 1, 0]");

    let mut empty: LinkedList<u8> = LinkedList::new();
    empty.reverse();
    assert!(empty.is_empty());
}

#[test]
fn test_insertion_sort() {
    let mut list: LinkedList<_> = [5, 2, 9, 2, 1, 7].into_iter().collect();
    list.insertion_sort();

    assert_eq!(&*contents(&list), &[1, 2, 2, 5, 7, 9]);
    assert_eq!(list.back(), Some(&9), "The tail should be found again after sorting.");

    list.push_back(10);
    assert_eq!(list.len(), 7);
    assert_eq!(list.get(6), Some(&10));
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(list.pop_front());
    drop(list.remove(4));
    assert_eq!(*counter.borrow(), 2);

    drop(list);
    assert_eq!(*counter.borrow(), 10);

    let list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = list.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(*counter.borrow(), 20);
}

#[test]
fn test_iterators() {
    let mut list: LinkedList<_> = (0..5).collect();

    for value in &mut list {
        *value += 1;
    }
    assert_eq!(list.iter().len(), 5);
    assert_eq!(list.iter().sum::<i32>(), 15);
    assert_eq!(list.clone(), list);
    assert_eq!(list.into_iter().collect::<Vector<_>>(), (1..=5).collect::<Vector<_>>());
}

proptest! {
    #[test]
    fn prop_insertion_sort_orders_elements(items in prop::collection::vec(any::<i16>(), 0..64)) {
        let mut list: LinkedList<_> = items.iter().copied().collect();
        list.insertion_sort();

        let mut expected = items.clone();
        expected.sort();
        prop_assert_eq!(&*contents(&list), expected.as_slice());
        prop_assert_eq!(list.back(), expected.last());
    }

    #[test]
    fn prop_reverse_twice_is_identity(items in prop::collection::vec(any::<u8>(), 0..32)) {
        let original: LinkedList<_> = items.iter().copied().collect();
        let mut list = original.clone();
        list.reverse();
        list.reverse();
        prop_assert_eq!(list, original);
    }
}

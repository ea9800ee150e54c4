#![cfg(test)]

use std::iter;
use std::mem::MaybeUninit;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_construction() {
    let arr: Array<u8> = Array::new();
    assert_eq!(arr.size(), 0);
    assert_eq!(&*arr, &[] as &[u8]);

    let arr = Array::from_iter_sized(0..5);
    assert_eq!(&*arr, &[0, 1, 2, 3, 4]);

    let arr: Array<Option<u8>> = Array::repeat_default(3);
    assert_eq!(&*arr, &[None, None, None], "Should be filled with the default value.");

    let mut next = 0;
    let arr = Array::repeat_with(|| { next += 2; next }, 4);
    assert_eq!(&*arr, &[2, 4, 6, 8], "Elements should be produced in order.");
}

#[test]
fn test_realloc() {
    let mut arr: Array<MaybeUninit<usize>> = Array::new_uninit(2);
    arr[0].write(10);
    arr[1].write(20);

    arr.realloc(5);
    assert_eq!(arr.size(), 5);
    for i in 2..5 {
        arr[i].write(i);
    }

    // SAFETY: All five elements have been written.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(
        &*arr,
        &[10, 20, 2, 3, 4],
        "Growing should keep existing elements in place."
    );

    let mut arr: Array<MaybeUninit<usize>> = Array::new_uninit(4);
    arr.realloc(0);
    assert_eq!(arr.size(), 0, "Shrinking to zero should leave an empty Array.");
    arr.realloc(0);

    assert_panics!({
        let mut arr: Array<MaybeUninit<u64>> = Array::new_uninit(1);
        arr.realloc(isize::MAX as usize);
    });
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let arr = Array::from_iter_sized(iter::repeat_with(|| counter.clone()).take(10));

    drop(arr);

    assert_eq!(*counter.borrow(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_equality_and_clone() {
    let arr = Array::from_iter_sized([1, 2, 3]);

    assert_eq!(arr, arr.clone(), "A cloned Array should be equal.");
    assert_ne!(arr, Array::from_iter_sized([1, 2, 4]));
    assert_eq!(format!("{arr}"), "[1, 2, 3]");
}

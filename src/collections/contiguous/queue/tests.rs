#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;

#[test]
fn test_first_in_first_out() {
    let mut queue = Queue::new();
    assert_eq!(queue.dequeue(), None, "Dequeuing an empty Queue should return None.");

    for i in 0..5 {
        queue.enqueue(i);
    }

    assert_eq!(queue.peek(), Some(&0));
    assert_eq!(queue.dequeue(), Some(0));
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.len(), 3);
    assert_eq!(format!("{queue}"), "[2, 3, 4]");
}

#[test]
fn test_wrap_around_and_growth() {
    let mut queue = Queue::with_cap(4);
    for i in 0..4 {
        queue.enqueue(i);
    }
    queue.dequeue();
    queue.dequeue();

    // These two land at the start of the Array, behind the front.
    queue.enqueue(4);
    queue.enqueue(5);
    assert!(queue.is_full());
    assert_eq!(queue.front, 2);

    queue.enqueue(6);
    assert_eq!(queue.cap(), 8, "A full Queue should double its capacity.");
    assert_eq!(queue.front, 0, "Growing should move the front to the start of the Array.");
    assert_eq!(
        queue.iter().copied().collect::<Vector<_>>(),
        [2, 3, 4, 5, 6].into_iter().collect::<Vector<_>>(),
        "Order should be preserved across the wrap and the reallocation."
    );
}

#[test]
fn test_search_and_sort() {
    let mut queue = Queue::with_cap(6);
    for value in [9, 9, 9] {
        queue.enqueue(value);
    }
    for _ in 0..3 {
        queue.dequeue();
    }
    // The contents now start halfway through the Array and wrap.
    for value in [5, 3, 8, 1, 4] {
        queue.enqueue(value);
    }

    assert_eq!(queue.search(&8), Some(2), "Positions should be relative to the front.");
    assert_eq!(queue.search(&7), None);

    queue.selection_sort();
    assert_eq!(
        queue.iter().copied().collect::<Vector<_>>(),
        [1, 3, 4, 5, 8].into_iter().collect::<Vector<_>>()
    );
    assert_eq!(queue.dequeue(), Some(1), "The smallest element should be at the front.");
}

#[test]
fn test_clear() {
    let mut queue: Queue<_> = "queue".chars().collect();
    assert_eq!(queue.len(), 5);

    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.peek(), None);

    queue.enqueue('q');
    assert_eq!(queue.iter().next_back(), Some(&'q'));
}

#![cfg(test)]

use std::time::Duration;

use rstest::rstest;

use super::*;
use crate::collections::binary_tree::BinaryTreeSet;
use crate::collections::contiguous::{Queue, Stack, Vector};
use crate::collections::hash::HashTable;
use crate::collections::linked::LinkedList;

fn timing(structure: Structure, micros: &[u64]) -> Timing {
    let mut timing = Timing::new(structure);
    for (op, &us) in Operation::ALL.into_iter().zip(micros) {
        timing.durations.push((op, Duration::from_micros(us)));
    }
    timing
}

#[rstest]
#[case("insert()", Operation::Insert)]
#[case("delete", Operation::Delete)]
#[case(" SEARCH() ", Operation::Search)]
#[case("Size()", Operation::Size)]
#[case("sort", Operation::Sort)]
fn test_parse_operation(#[case] name: &str, #[case] expected: Operation) {
    assert_eq!(name.parse::<Operation>(), Ok(expected));
}

#[rstest]
#[case("push()")]
#[case("")]
#[case("insert(x)")]
fn test_parse_unknown_operation(#[case] name: &str) {
    assert_eq!(
        name.parse::<Operation>(),
        Err(UnknownOperation { name: name.to_owned() })
    );
}

#[rstest]
#[case("array", Structure::Array)]
#[case("Stack", Structure::Stack)]
#[case("linked list", Structure::LinkedList)]
#[case("linked-list", Structure::LinkedList)]
#[case("HASH_TABLE", Structure::HashTable)]
#[case("BST", Structure::Tree)]
#[case("tree", Structure::Tree)]
fn test_parse_structure(#[case] name: &str, #[case] expected: Structure) {
    assert_eq!(name.parse::<Structure>(), Ok(expected));
}

#[test]
fn test_display_round_trips() {
    for op in Operation::ALL {
        assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
    }
    for structure in Structure::ALL {
        assert_eq!(structure.to_string().parse::<Structure>(), Ok(structure));
    }
    assert_eq!(Operation::Insert.to_string(), "insert()");
    assert!("graphs".parse::<Structure>().is_err());
}

#[rstest]
#[case(&[], &[Structure::Array, Structure::Stack, Structure::Queue, Structure::LinkedList, Structure::Tree, Structure::HashTable])]
#[case(&["random access"], &[Structure::Array, Structure::HashTable])]
#[case(&["sorting"], &[Structure::LinkedList, Structure::Tree])]
#[case(&["insertion"], &[Structure::Stack, Structure::Queue, Structure::LinkedList, Structure::HashTable])]
#[case(&["deletion"], &[Structure::Stack, Structure::Queue, Structure::LinkedList, Structure::HashTable])]
#[case(&["ordered"], &[Structure::Array, Structure::Stack, Structure::Queue, Structure::LinkedList, Structure::Tree])]
#[case(&["random access", "sorting"], &[Structure::Array])]
#[case(&["random-access", "deletion"], &[Structure::HashTable])]
#[case(&["sorting", "insertion", "deletion"], &[Structure::LinkedList, Structure::Tree])]
#[case(&["insertion", "ordered"], &[Structure::LinkedList, Structure::Tree])]
#[case(&["random access", "sorting", "ordered"], &[Structure::Array])]
#[case(&["random access", "sorting", "insertion"], &[])]
#[case(&["random access", "insertion", "ordered"], &[])]
#[case(&["sorting", "insertion", "ordered"], &[])]
fn test_candidates(#[case] words: &[&str], #[case] expected: &[Structure]) {
    let requirements: Requirements = words
        .iter()
        .map(|word| word.parse::<Requirement>())
        .collect::<Result<Vector<_>, _>>()
        .expect("All requirement words should parse")
        .into_iter()
        .collect();

    assert_eq!(&*candidates(requirements), expected);
}

#[test]
fn test_unknown_requirement_and_hint() {
    assert_eq!(
        "speed".parse::<Requirement>(),
        Err(UnknownRequirement { name: "speed".into() })
    );
    assert_eq!("speed".parse::<Hint>(), Err(UnknownHint { name: "speed".into() }));
    assert_eq!("Balanced".parse::<Hint>(), Ok(Hint::Balanced));
}

#[rstest]
#[case(&[], &[Structure::Array, Structure::LinkedList, Structure::Tree, Structure::HashTable])]
#[case(&[Hint::Search], &[Structure::HashTable, Structure::Array, Structure::LinkedList, Structure::Tree])]
#[case(&[Hint::Balanced, Hint::Memory], &[Structure::Tree, Structure::Array, Structure::LinkedList, Structure::HashTable])]
fn test_prefer(#[case] hints: &[Hint], #[case] expected: &[Structure]) {
    let candidates = [Structure::Array, Structure::LinkedList, Structure::Tree, Structure::HashTable];
    assert_eq!(&*prefer(&candidates, hints), expected);
}

#[test]
fn test_prefer_ignores_unsuitable_hints() {
    let candidates = [Structure::LinkedList, Structure::Tree];
    assert_eq!(&*prefer(&candidates, &[Hint::Search]), &candidates);
}

#[rstest]
#[case(Structure::Array)]
#[case(Structure::Stack)]
#[case(Structure::Queue)]
#[case(Structure::LinkedList)]
#[case(Structure::HashTable)]
#[case(Structure::Tree)]
fn test_measure_full_api(#[case] structure: Structure) {
    let config = Config::default();
    let data = synthetic_data(64, 7);

    let timing = measure(structure, &Operation::ALL, &data, &config)
        .expect("The full API should run against every structure");

    assert_eq!(timing.structure, structure);
    assert_eq!(
        timing.durations.iter().map(|(op, _)| *op).collect::<Vector<_>>(),
        Operation::ALL.into_iter().collect::<Vector<_>>()
    );
    assert!(timing.get(Operation::Sort).is_some());
}

#[rstest]
#[case(Structure::Array, WorkloadError::is_index)]
#[case(Structure::Stack, WorkloadError::is_empty)]
#[case(Structure::Queue, WorkloadError::is_empty)]
#[case(Structure::LinkedList, WorkloadError::is_index)]
#[case(Structure::HashTable, WorkloadError::is_key)]
#[case(Structure::Tree, WorkloadError::is_key)]
fn test_delete_before_insert_fails(
    #[case] structure: Structure,
    #[case] expected: fn(&WorkloadError) -> bool,
) {
    let data = synthetic_data(10, 1);
    let result = measure(structure, &[Operation::Delete], &data, &Config::default());

    assert!(result.as_ref().is_err_and(expected), "Unexpected result {result:?}");
}

#[test]
fn test_search_miss_is_not_an_error() {
    let data = synthetic_data(10, 1);

    for structure in Structure::ALL {
        let api = [Operation::Search, Operation::Size];
        assert!(measure(structure, &api, &data, &Config::default()).is_ok());
    }
}

#[test]
fn test_zero_hash_capacity() {
    let config = Config {
        hash_capacity: 0,
        ..Config::default()
    };

    assert_eq!(
        measure(Structure::HashTable, &Operation::ALL, &[1, 2, 3], &config),
        Err(WorkloadError::ZeroCapacity(crate::collections::hash::ZeroCapacity))
    );
}

#[test]
fn test_workloads_leave_expected_contents() {
    let data = synthetic_data(50, 3);
    let sorted: Vector<Datum> = (0..50).collect();

    let mut array: Vector<Datum> = Vector::new();
    for op in Operation::ALL {
        array.run(op, &data).expect("Array workload should succeed");
    }
    assert_eq!(array.len(), 50);
    assert!(array.windows(2).all(|pair| pair[0] <= pair[1]), "The full API should end sorted.");

    let mut stack: Stack<Datum> = Stack::new();
    stack.run(Operation::Insert, &data).expect("Insert should succeed");
    stack.run(Operation::Sort, &data).expect("Sort should succeed");
    assert_eq!(stack.peek(), data.first(), "Reversing should bring the first datum to the top.");

    let mut list: LinkedList<Datum> = LinkedList::new();
    for op in Operation::ALL {
        list.run(op, &data).expect("List workload should succeed");
    }
    let listed: Vector<Datum> = list.iter().copied().collect();
    assert_eq!(listed.len(), 50);
    assert!(listed.windows(2).all(|pair| pair[0] <= pair[1]));

    let mut table: HashTable<usize, Datum> = HashTable::with_cap(5);
    for op in Operation::ALL {
        table.run(op, &data).expect("Hash table workload should succeed");
    }
    assert_eq!(table.len(), 50);
    assert!((0..50).all(|key| table.get(&key) == Ok(&data[key])));

    let mut tree: BinaryTreeSet<Datum> = BinaryTreeSet::new();
    for op in Operation::ALL {
        tree.run(op, &data).expect("Tree workload should succeed");
    }
    assert_eq!(tree.len(), 50);
    assert!(tree.in_order().eq(sorted.iter()));
}

#[test]
fn test_delete_removes_then_appends_data() {
    let data = [3, 1, 2, 0];
    let delete = [Operation::Insert, Operation::Delete];

    let mut array: Vector<Datum> = Vector::new();
    let mut list: LinkedList<Datum> = LinkedList::new();
    let mut stack: Stack<Datum> = Stack::new();
    let mut queue: Queue<Datum> = Queue::new();
    let mut table: HashTable<usize, Datum> = HashTable::with_cap(3);
    for op in delete {
        array.run(op, &data).expect("Array workload should succeed");
        list.run(op, &data).expect("List workload should succeed");
        stack.run(op, &data).expect("Stack workload should succeed");
        queue.run(op, &data).expect("Queue workload should succeed");
        table.run(op, &data).expect("Hash table workload should succeed");
    }

    // Index 2 then index 3 are removed, with data[2] and data[3] appended after each.
    assert_eq!(&*array, &[3, 1, 0, 0]);
    assert!(list.iter().eq([3, 1, 0, 0].iter()));
    assert_eq!(stack.peek(), Some(&0));
    assert_eq!(stack.len(), 4);
    assert!(queue.iter().eq([2, 0, 2, 0].iter()));
    assert!((0..4).all(|key| table.get(&key) == Ok(&data[key])));
}

#[test]
fn test_best_prefers_later_on_ties() {
    let timings = [
        timing(Structure::Array, &[10, 20]),
        timing(Structure::Queue, &[5, 5]),
        timing(Structure::Tree, &[2, 8]),
    ];

    assert_eq!(best(&timings).map(|t| t.structure), Some(Structure::Tree));
    assert_eq!(best(&[]), None);
}

#[test]
fn test_rank_is_stable() {
    let timings = [
        timing(Structure::Array, &[30]),
        timing(Structure::Stack, &[10]),
        timing(Structure::Queue, &[20]),
        timing(Structure::LinkedList, &[10]),
    ];

    assert_eq!(
        rank(&timings).iter().map(|t| t.structure).collect::<Vector<_>>(),
        [Structure::Stack, Structure::LinkedList, Structure::Queue, Structure::Array]
            .into_iter()
            .collect::<Vector<_>>()
    );
}

#[test]
fn test_timing_average() {
    let timing = timing(Structure::Array, &[1, 2, 6]);

    assert_eq!(timing.total(), Duration::from_micros(9));
    assert_eq!(timing.average(), Duration::from_micros(3));
    assert_eq!(timing.get(Operation::Delete), Some(Duration::from_micros(2)));
    assert_eq!(timing.get(Operation::Sort), None);
    assert_eq!(Timing::new(Structure::Tree).average(), Duration::ZERO);
}

#[test]
fn test_synthetic_data() {
    let data = synthetic_data(100, 42);

    assert_eq!(data, synthetic_data(100, 42), "The same seed should shuffle the same way.");
    assert_ne!(data, synthetic_data(100, 43));

    let mut sorted = data.clone();
    sorted.bubble_sort();
    assert_eq!(sorted, (0..100).collect::<Vector<_>>());
}

#[test]
fn test_compare() {
    let config = Config {
        size: 40,
        requirements: [Requirement::RandomAccess].into_iter().collect(),
        hints: [Hint::Search].into_iter().collect(),
        ..Config::default()
    };
    let comparison = compare(&config);

    assert_eq!(comparison.timings.len(), 6);
    assert!(comparison.failures.is_empty());
    assert!(comparison.best().is_some());
    assert_eq!(comparison.rank().len(), 6);
    assert_eq!(&*comparison.candidates, &[Structure::HashTable, Structure::Array]);

    let failing = Config {
        api: [Operation::Delete].into_iter().collect(),
        structures: [Structure::Stack, Structure::Tree].into_iter().collect(),
        ..config
    };
    let comparison = compare(&failing);
    assert!(comparison.timings.is_empty());
    assert_eq!(comparison.failures.len(), 2);
}

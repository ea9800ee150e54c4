use std::hint;

use super::{EmptyCollection, Operation, WorkloadError};
use crate::collections::binary_tree::BinaryTreeSet;
use crate::collections::contiguous::{Queue, Stack, Vector};
use crate::collections::hash::{HashTable, KeyNotFound};
use crate::collections::linked::LinkedList;

/// The value type of the data that workloads are run with.
pub type Datum = usize;

/// A data structure that can carry out each [`Operation`] over a set of data.
///
/// The operations are run in sequence on the same structure, so `delete` and `search` normally
/// follow an `insert` which has filled it with `data`.
pub trait Workload {
    /// Adds every datum to the structure.
    fn insert(&mut self, data: &[Datum]) -> Result<(), WorkloadError>;

    /// Walks the second half of the data, removing an element and then adding that datum back
    /// each step. Positional structures remove by index and append, so the contents can drift
    /// from the data, while keyed structures remove and reinsert the datum's own entry.
    ///
    /// # Errors
    /// Fails if the structure doesn't hold enough of the data.
    fn delete(&mut self, data: &[Datum]) -> Result<(), WorkloadError>;

    /// Searches for the last datum. Failing to find it is not an error.
    fn search(&mut self, data: &[Datum]) -> Result<(), WorkloadError>;

    /// Reads the number of elements in the structure.
    fn size(&mut self) -> Result<(), WorkloadError>;

    /// Sorts the structure, or does whatever comes closest for a structure which can't be sorted.
    fn sort(&mut self) -> Result<(), WorkloadError>;

    /// Runs the provided operation.
    fn run(&mut self, op: Operation, data: &[Datum]) -> Result<(), WorkloadError> {
        match op {
            Operation::Insert => self.insert(data),
            Operation::Delete => self.delete(data),
            Operation::Search => self.search(data),
            Operation::Size => self.size(),
            Operation::Sort => self.sort(),
        }
    }
}

/// The indices of the data which [`Workload::delete`] removes and restores.
fn second_half(data: &[Datum]) -> impl Iterator<Item = usize> {
    data.len() / 2..data.len()
}

impl Workload for Vector<Datum> {
    fn insert(&mut self, data: &[Datum]) -> Result<(), WorkloadError> {
        self.extend(data.iter().copied());
        Ok(())
    }

    fn delete(&mut self, data: &[Datum]) -> Result<(), WorkloadError> {
        for index in second_half(data) {
            self.try_remove(index)?;
            self.push(data[index]);
        }
        Ok(())
    }

    fn search(&mut self, data: &[Datum]) -> Result<(), WorkloadError> {
        if let Some(last) = data.last() {
            hint::black_box(Vector::search(self, last));
        }
        Ok(())
    }

    fn size(&mut self) -> Result<(), WorkloadError> {
        hint::black_box(self.len());
        Ok(())
    }

    fn sort(&mut self) -> Result<(), WorkloadError> {
        self.bubble_sort();
        Ok(())
    }
}

impl Workload for Stack<Datum> {
    fn insert(&mut self, data: &[Datum]) -> Result<(), WorkloadError> {
        self.extend(data.iter().copied());
        Ok(())
    }

    fn delete(&mut self, data: &[Datum]) -> Result<(), WorkloadError> {
        for index in second_half(data) {
            self.pop().ok_or(EmptyCollection { kind: "stack" })?;
            self.push(data[index]);
        }
        Ok(())
    }

    fn search(&mut self, data: &[Datum]) -> Result<(), WorkloadError> {
        if let Some(last) = data.last() {
            hint::black_box(Stack::search(self, last));
        }
        Ok(())
    }

    fn size(&mut self) -> Result<(), WorkloadError> {
        hint::black_box(self.len());
        Ok(())
    }

    fn sort(&mut self) -> Result<(), WorkloadError> {
        // A stack can only be reordered by reversing it.
        self.reverse();
        Ok(())
    }
}

impl Workload for Queue<Datum> {
    fn insert(&mut self, data: &[Datum]) -> Result<(), WorkloadError> {
        self.extend(data.iter().copied());
        Ok(())
    }

    fn delete(&mut self, data: &[Datum]) -> Result<(), WorkloadError> {
        for index in second_half(data) {
            self.dequeue().ok_or(EmptyCollection { kind: "queue" })?;
            self.enqueue(data[index]);
        }
        Ok(())
    }

    fn search(&mut self, data: &[Datum]) -> Result<(), WorkloadError> {
        if let Some(last) = data.last() {
            hint::black_box(Queue::search(self, last));
        }
        Ok(())
    }

    fn size(&mut self) -> Result<(), WorkloadError> {
        hint::black_box(self.len());
        Ok(())
    }

    fn sort(&mut self) -> Result<(), WorkloadError> {
        self.selection_sort();
        Ok(())
    }
}

impl Workload for LinkedList<Datum> {
    fn insert(&mut self, data: &[Datum]) -> Result<(), WorkloadError> {
        self.extend(data.iter().copied());
        Ok(())
    }

    fn delete(&mut self, data: &[Datum]) -> Result<(), WorkloadError> {
        for index in second_half(data) {
            self.try_remove(index)?;
            self.push_back(data[index]);
        }
        Ok(())
    }

    fn search(&mut self, data: &[Datum]) -> Result<(), WorkloadError> {
        if let Some(last) = data.last() {
            hint::black_box(LinkedList::search(self, last));
        }
        Ok(())
    }

    fn size(&mut self) -> Result<(), WorkloadError> {
        hint::black_box(self.len());
        Ok(())
    }

    fn sort(&mut self) -> Result<(), WorkloadError> {
        self.insertion_sort();
        Ok(())
    }
}

/// The hash table is keyed by the index of each datum.
impl Workload for HashTable<usize, Datum> {
    fn insert(&mut self, data: &[Datum]) -> Result<(), WorkloadError> {
        self.extend(data.iter().copied().enumerate());
        Ok(())
    }

    fn delete(&mut self, data: &[Datum]) -> Result<(), WorkloadError> {
        for key in second_half(data) {
            self.remove(&key)?;
            HashTable::insert(self, key, data[key]);
        }
        Ok(())
    }

    fn search(&mut self, data: &[Datum]) -> Result<(), WorkloadError> {
        if let Some(key) = data.len().checked_sub(1) {
            hint::black_box(self.contains(&key));
        }
        Ok(())
    }

    fn size(&mut self) -> Result<(), WorkloadError> {
        hint::black_box(self.len());
        Ok(())
    }

    fn sort(&mut self) -> Result<(), WorkloadError> {
        // A hash table has no order, so the closest equivalent is moving every entry.
        let keys: Vector<usize> = self.iter().map(|(key, _)| *key).collect();

        for key in keys {
            let value = self.remove(&key)?;
            HashTable::insert(self, key, value);
        }
        Ok(())
    }
}

impl Workload for BinaryTreeSet<Datum> {
    fn insert(&mut self, data: &[Datum]) -> Result<(), WorkloadError> {
        self.extend(data.iter().copied());
        Ok(())
    }

    fn delete(&mut self, data: &[Datum]) -> Result<(), WorkloadError> {
        for index in second_half(data) {
            let key = data[index];

            if !self.remove(&key) {
                return Err(KeyNotFound.into());
            }
            BinaryTreeSet::insert(self, key);
        }
        Ok(())
    }

    fn search(&mut self, data: &[Datum]) -> Result<(), WorkloadError> {
        if let Some(last) = data.last() {
            hint::black_box(self.contains(last));
        }
        Ok(())
    }

    fn size(&mut self) -> Result<(), WorkloadError> {
        hint::black_box(self.len());
        Ok(())
    }

    fn sort(&mut self) -> Result<(), WorkloadError> {
        self.rotate_to_sorted();
        Ok(())
    }
}

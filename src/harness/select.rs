use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::{Structure, UnknownHint, UnknownRequirement};
use crate::collections::contiguous::Vector;

/// A property that an API may need from the structure behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    RandomAccess,
    Sorting,
    Insertion,
    Deletion,
    Ordered,
}

impl Requirement {
    pub const ALL: [Requirement; 5] = [
        Requirement::RandomAccess,
        Requirement::Sorting,
        Requirement::Insertion,
        Requirement::Deletion,
        Requirement::Ordered,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Requirement::RandomAccess => "random access",
            Requirement::Sorting => "sorting",
            Requirement::Insertion => "insertion",
            Requirement::Deletion => "deletion",
            Requirement::Ordered => "ordered",
        }
    }
}

impl FromStr for Requirement {
    type Err = UnknownRequirement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");

        Requirement::ALL
            .into_iter()
            .find(|requirement| requirement.name() == name)
            .ok_or_else(|| UnknownRequirement { name: s.to_owned() })
    }
}

impl Display for Requirement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The set of properties an API needs. Insertion and deletion are treated as one requirement:
/// adding or removing elements at any position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Requirements {
    pub random_access: bool,
    pub sorting: bool,
    pub insertion_deletion: bool,
    pub ordered: bool,
}

impl Requirements {
    /// Adds `requirement` to the set.
    pub fn require(&mut self, requirement: Requirement) {
        match requirement {
            Requirement::RandomAccess => self.random_access = true,
            Requirement::Sorting => self.sorting = true,
            Requirement::Insertion | Requirement::Deletion => self.insertion_deletion = true,
            Requirement::Ordered => self.ordered = true,
        }
    }
}

impl FromIterator<Requirement> for Requirements {
    fn from_iter<I: IntoIterator<Item = Requirement>>(iter: I) -> Self {
        let mut requirements = Requirements::default();
        for requirement in iter {
            requirements.require(requirement);
        }
        requirements
    }
}

/// Returns the structures suitable for an API with the provided requirements, from a fixed table.
/// Some combinations can't be satisfied by any structure, in which case the result is empty.
///
/// # Examples
/// ```
/// # use structure_bench::harness::{self, Requirement, Requirements, Structure};
/// let requirements: Requirements = [Requirement::RandomAccess].into_iter().collect();
/// assert_eq!(
///     &*harness::candidates(requirements),
///     &[Structure::Array, Structure::HashTable],
/// );
/// ```
pub fn candidates(requirements: Requirements) -> Vector<Structure> {
    use Structure::*;

    let Requirements {
        random_access,
        sorting,
        insertion_deletion,
        ordered,
    } = requirements;

    let suitable: &[Structure] = match (random_access, sorting, insertion_deletion, ordered) {
        (false, false, false, false) => &[Array, Stack, Queue, LinkedList, Tree, HashTable],
        (true, false, false, false) => &[Array, HashTable],
        (false, true, false, false) => &[LinkedList, Tree],
        (false, false, true, false) => &[Stack, Queue, LinkedList, HashTable],
        (false, false, false, true) => &[Array, Stack, Queue, LinkedList, Tree],
        (true, true, false, false) => &[Array],
        (true, false, true, false) => &[HashTable],
        (true, false, false, true) => &[Array],
        (false, true, true, false) => &[LinkedList, Tree],
        (false, true, false, true) => &[LinkedList, Tree],
        (false, false, true, true) => &[LinkedList, Tree],
        (true, true, false, true) => &[Array],
        // Random access with insertion and deletion, or all three of sorting, insertion and
        // ordering, has no suitable structure.
        (true, true, true, _) | (true, false, true, true) | (false, true, true, true) => &[],
    };

    suitable.iter().copied().collect()
}

/// A preference which favours one structure over the others, when more than one is suitable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    /// Fast lookups, favouring a [`Structure::HashTable`].
    Search,
    /// Low memory overhead, favouring a [`Structure::Array`].
    Memory,
    /// Predictable performance, favouring a [`Structure::Tree`].
    Balanced,
}

impl Hint {
    pub const ALL: [Hint; 3] = [Hint::Search, Hint::Memory, Hint::Balanced];

    pub const fn name(self) -> &'static str {
        match self {
            Hint::Search => "search",
            Hint::Memory => "memory",
            Hint::Balanced => "balanced",
        }
    }

    /// Returns the structure favoured by this hint.
    pub const fn favours(self) -> Structure {
        match self {
            Hint::Search => Structure::HashTable,
            Hint::Memory => Structure::Array,
            Hint::Balanced => Structure::Tree,
        }
    }
}

impl FromStr for Hint {
    type Err = UnknownHint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        Hint::ALL
            .into_iter()
            .find(|hint| hint.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownHint { name: s.to_owned() })
    }
}

impl Display for Hint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Reorders `candidates` so that structures favoured by `hints` come first, in the order of the
/// hints. Everything else keeps its relative order, after the favoured structures.
///
/// # Examples
/// ```
/// # use structure_bench::harness::{self, Hint, Structure};
/// let candidates = [Structure::Array, Structure::LinkedList, Structure::HashTable];
/// assert_eq!(
///     &*harness::prefer(&candidates, &[Hint::Search]),
///     &[Structure::HashTable, Structure::Array, Structure::LinkedList],
/// );
/// ```
pub fn prefer(candidates: &[Structure], hints: &[Hint]) -> Vector<Structure> {
    let mut preferred: Vector<Structure> = candidates.iter().copied().collect();

    preferred.sort_by_key(|structure| {
        hints
            .iter()
            .position(|hint| hint.favours() == *structure)
            .unwrap_or(hints.len())
    });
    preferred
}

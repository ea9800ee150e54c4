use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::UnknownStructure;

/// One of the data structures which the harness can time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
    /// A [`Vector`](crate::collections::contiguous::Vector).
    Array,
    /// A [`Stack`](crate::collections::contiguous::Stack).
    Stack,
    /// A [`Queue`](crate::collections::contiguous::Queue).
    Queue,
    /// A [`LinkedList`](crate::collections::linked::LinkedList).
    LinkedList,
    /// A [`HashTable`](crate::collections::hash::HashTable).
    HashTable,
    /// A [`BinaryTreeSet`](crate::collections::binary_tree::BinaryTreeSet).
    Tree,
}

impl Structure {
    /// Every structure, in the order they are compared by default.
    pub const ALL: [Structure; 6] = [
        Structure::Array,
        Structure::Stack,
        Structure::Queue,
        Structure::LinkedList,
        Structure::HashTable,
        Structure::Tree,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Structure::Array => "array",
            Structure::Stack => "stack",
            Structure::Queue => "queue",
            Structure::LinkedList => "linked list",
            Structure::HashTable => "hash table",
            Structure::Tree => "tree",
        }
    }
}

impl FromStr for Structure {
    type Err = UnknownStructure;

    /// Parses a structure from its name, ignoring case. Words may be separated by spaces, dashes or
    /// underscores, and `bst` is accepted for a tree.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");

        match name.as_str() {
            "bst" => Ok(Structure::Tree),
            name => Structure::ALL
                .into_iter()
                .find(|structure| structure.name() == name)
                .ok_or_else(|| UnknownStructure { name: s.to_owned() }),
        }
    }
}

impl Display for Structure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

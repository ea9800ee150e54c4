use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::UnknownOperation;

/// One of the operations that an API can require of a data structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Insert,
    Delete,
    Search,
    Size,
    Sort,
}

impl Operation {
    /// Every operation, in the order they are run by default.
    pub const ALL: [Operation; 5] = [
        Operation::Insert,
        Operation::Delete,
        Operation::Search,
        Operation::Size,
        Operation::Sort,
    ];

    /// Returns the name of the operation, without the trailing parentheses.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Delete => "delete",
            Operation::Search => "search",
            Operation::Size => "size",
            Operation::Sort => "sort",
        }
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Parses an operation from its name, ignoring case and surrounding whitespace. The name may
    /// be written as a call, so `"insert()"` and `"insert"` are equivalent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = trimmed.strip_suffix("()").unwrap_or(trimmed);

        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownOperation { name: s.to_owned() })
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}()", self.name())
    }
}

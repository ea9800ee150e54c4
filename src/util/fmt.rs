use std::fmt::{self, Debug, Formatter};

/// Prints the contained string verbatim when formatted with [`Debug`], rather than quoting it.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats a value with the provided closure when formatted with [`Debug`]. Useful for nesting a
/// `debug_list` inside of a `debug_struct` field.
pub struct DebugWith<F>(pub F)
where
    F: Fn(&mut Formatter<'_>) -> fmt::Result;

impl<F> Debug for DebugWith<F>
where
    F: Fn(&mut Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}

use std::ops::Range;

/// Position of a token inside the line it was scanned from.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) column: usize,
}

impl Span {
    pub(super) fn new(start: usize, end: usize, column: usize) -> Self {
        Self { start, end, column }
    }

    /// Byte range of the token in the scanned line.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// 1-based character column of the first character.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "column {}", self.column)
    }
}

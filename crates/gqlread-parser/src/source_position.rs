/// A position within a source document.
///
/// Lines and columns are 0-based. Columns count UTF-8 characters, not
/// bytes; `byte_offset` is the absolute byte offset from the start of the
/// source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    line: usize,
    column: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character column.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the absolute byte offset from the start of the source.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 1-based for humans.
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

use std::ops::Range;

/// Result of applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Byte ranges of the new text that were written; a deletion is an
    /// empty range. No ranges at all for a no-op.
    pub changed: Vec<Range<usize>>,
    /// Suggested caret after the edit.
    pub new_selection: Range<usize>,
    pub version: u64,
}

impl Patch {
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty()
    }
}

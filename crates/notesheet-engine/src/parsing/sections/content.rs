//! Per-line content projection for sections.
//!
//! Sections strip markers (`# `, `**`, fence lines) from what they display,
//! but edits must land back in the raw text without disturbing those
//! markers. Each displayed line therefore remembers exactly where its
//! editable content lives in the document.

use serde::{Deserialize, Serialize};

use crate::parsing::rope::span::Span;

/// A single displayed line of a section, with document-relative spans.
///
/// # Invariants
///
/// - `raw_line.start <= content.start <= content.end <= ending.start`
/// - `ending.end == raw_line.end`
/// - `ending` is the line break (`\n`, `\r\n`) or empty at end of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLine {
    /// Full physical line span in the document.
    pub raw_line: Span,
    /// Editable text of the line, markers and line break excluded.
    pub content: Span,
    /// The line break.
    pub ending: Span,
}

impl ContentLine {
    /// A line whose whole body is content (no markers).
    pub fn verbatim(raw_line: Span, ending: Span) -> Self {
        Self {
            raw_line,
            content: Span::new(raw_line.start, ending.start),
            ending,
        }
    }

    /// Bytes this line contributes to its section's display text.
    #[must_use]
    pub fn display_len(&self) -> usize {
        self.content.len() + self.ending.len()
    }

    /// True when the spans respect the ordering invariants.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.raw_line.start <= self.content.start
            && self.content.start <= self.content.end
            && self.content.end <= self.ending.start
            && self.ending.start <= self.ending.end
            && self.ending.end == self.raw_line.end
    }
}

use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{CodeFence, FenceSig, Table};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of sectioning: each line is classified independently
/// without reference to surrounding context. Context-dependent decisions
/// (are we inside a fence? is this the first table row?) belong to the
/// [`SectionBuilder`](super::SectionBuilder).
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the document.
    pub line: Span,
    /// The line without its line break.
    pub body: Span,
    /// The line break alone.
    pub ending: Span,
    /// Full line text, line break included.
    pub raw: String,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// If the line opens or closes a code fence.
    pub fence: Option<FenceSig>,
    /// If the line has enough pipes to be a table row.
    pub is_table_row: bool,
}

impl LineClass {
    /// Text of a span lying within this line.
    pub fn slice(&self, sp: Span) -> &str {
        &self.raw[sp.start - self.line.start..sp.end - self.line.start]
    }

    pub fn body_text(&self) -> &str {
        self.slice(self.body)
    }

    pub fn ending_text(&self) -> &str {
        self.slice(self.ending)
    }
}

/// Classifies individual lines for the sectioning phase.
pub struct SectionLineClassifier;

impl SectionLineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let body = lr.body_span();
        let body_text = &lr.text[..body.len()];

        LineClass {
            line: lr.span,
            body,
            ending: lr.ending_span(),
            raw: lr.text.clone(),
            is_blank: body_text.trim().is_empty(),
            fence: CodeFence::sig(body_text),
            is_table_row: Table::is_row(body_text),
        }
    }
}

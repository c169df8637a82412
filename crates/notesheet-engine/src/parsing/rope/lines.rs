use xi_rope::Rope;

use super::span::Span;

/// A single physical line of the document with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line (includes the line break if present).
    pub span: Span,
    /// The line text, line break included.
    pub text: String,
}

impl LineRef {
    /// Length in bytes of the text without its trailing `\n` / `\r\n`.
    pub fn body_len(&self) -> usize {
        self.text.trim_end_matches(['\r', '\n']).len()
    }

    /// Span of the line without its line break.
    pub fn body_span(&self) -> Span {
        Span::new(self.span.start, self.span.start + self.body_len())
    }

    /// Span of the line break alone (empty for a final unterminated line).
    pub fn ending_span(&self) -> Span {
        Span::new(self.span.start + self.body_len(), self.span.end)
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` so line breaks stay attached; the spans of all lines
/// tile the rope without gaps.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    kinds::{Course, Heading, ListItem, Question},
    types::SectionKind,
};

/// What a non-blank, non-fence, non-table line opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOpen {
    pub kind: SectionKind,
    /// Editable content of the line after marker stripping.
    pub content: Span,
}

/// Rules 4 to 9 of sectioning, first match wins. `None` means plain text.
///
/// Markers are tested on the line with leading whitespace skipped.
pub fn try_open_line(c: &LineClass) -> Option<LineOpen> {
    let body = c.body_text();
    let lead = body.len() - body.trim_start().len();
    let trimmed = body.trim();
    let trimmed_start = c.body.start + lead;
    let verbatim = c.body;

    let open = |kind, content| Some(LineOpen { kind, content });
    let inner = |range: std::ops::Range<usize>| {
        Span::new(trimmed_start + range.start, trimmed_start + range.end)
    };

    if Course::matches(trimmed) {
        return open(SectionKind::Course, verbatim);
    }
    if Question::is_numbered(trimmed) {
        let content = match Heading::bold_inner(trimmed) {
            Some(range) => inner(range),
            None => verbatim,
        };
        return open(SectionKind::Question, content);
    }
    if let Some(rest) = trimmed.strip_prefix(Heading::H1) {
        let start = trimmed_start + Heading::H1.len();
        return open(SectionKind::Heading1, Span::new(start, start + rest.len()));
    }
    if Heading::is_bold_heading(trimmed) {
        let range = Heading::bold_inner(trimmed)?;
        return open(SectionKind::Heading1, inner(range));
    }
    if let Some(rest) = trimmed.strip_prefix(Heading::H2) {
        let start = trimmed_start + Heading::H2.len();
        return open(SectionKind::Heading2, Span::new(start, start + rest.len()));
    }
    if Question::is_trailing(trimmed) {
        return open(SectionKind::Question, verbatim);
    }
    if ListItem::matches(trimmed) {
        return open(SectionKind::ListItem, verbatim);
    }
    None
}

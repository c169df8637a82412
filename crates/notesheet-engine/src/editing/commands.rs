use std::ops::Range;

use crate::{
    paging::{LineIdentity, Page},
    parsing::{
        inline::kinds::Bold,
        rope::span::Span,
        sections::kinds::{Heading, Question},
    },
};

use super::line_edit::{locate_line, validate_span};

/// Edit commands. Each compiles to a single replacement of a byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    InsertText { at: usize, text: String },
    DeleteRange { range: Range<usize> },
    ReplaceAll { text: String },
    /// Replace the content of one rendered line.
    EditLine { at: LineIdentity, text: String },
    /// Make the line containing `at` a main heading.
    ToggleHeading { at: usize },
    /// Make the line containing `at` a subheading.
    ToggleSubheading { at: usize },
    /// Ensure the line containing `at` ends with a question mark.
    MarkQuestion { at: usize },
    WrapBold { range: Range<usize> },
}

/// A compiled command: replace `range` with `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: Span,
    pub text: String,
}

impl Edit {
    fn replace(range: Span, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }

    fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::replace(Span::empty_at(at), text)
    }
}

impl Cmd {
    /// Compiles against the current text and its pages.
    ///
    /// Positions are clamped into the text; `None` means nothing to do
    /// (already formatted, or a line coordinate that no longer exists).
    pub fn compile(&self, text: &str, pages: &[Page]) -> Option<Edit> {
        match self {
            Cmd::InsertText { at, text: ins } => {
                Some(Edit::insert(clamp(text, *at), ins.as_str())).filter(|_| !ins.is_empty())
            }
            Cmd::DeleteRange { range } => {
                let span = clamp_range(text, range);
                (!span.is_empty()).then(|| Edit::replace(span, ""))
            }
            Cmd::ReplaceAll { text: new } => {
                Some(Edit::replace(Span::new(0, text.len()), new.as_str()))
            }
            Cmd::EditLine { at, text: new } => {
                let line = match locate_line(pages, *at).and_then(|l| {
                    validate_span(text, l.content)?;
                    Ok(l)
                }) {
                    Ok(line) => line,
                    Err(e) => {
                        log::debug!("line edit at {at:?} ignored: {e}");
                        return None;
                    }
                };
                Some(Edit::replace(line.content, new.as_str()))
            }
            Cmd::ToggleHeading { at } => toggle_heading(text, *at, Heading::H1, Heading::H2),
            Cmd::ToggleSubheading { at } => toggle_heading(text, *at, Heading::H2, Heading::H1),
            Cmd::MarkQuestion { at } => {
                let line = line_body(text, *at);
                let body = &text[line.range()];
                let trimmed = body.trim();
                if trimmed.ends_with(Question::MARK) {
                    return None;
                }
                Some(Edit::replace(line, format!("{trimmed}{}", Question::MARK)))
            }
            Cmd::WrapBold { range } => {
                let span = clamp_range(text, range);
                let inner = &text[span.range()];
                Some(Edit::replace(span, format!("{}{inner}{}", Bold::DELIM, Bold::DELIM)))
            }
        }
    }
}

/// `want` already present: nothing. `other` present: swapped. Otherwise
/// `want` is inserted at the start of the line.
fn toggle_heading(text: &str, at: usize, want: &str, other: &str) -> Option<Edit> {
    let line = line_body(text, at);
    let body = &text[line.range()];
    if body.starts_with(want) {
        return None;
    }
    if body.starts_with(other) {
        return Some(Edit::replace(
            Span::new(line.start, line.start + other.len()),
            want,
        ));
    }
    Some(Edit::insert(line.start, want))
}

/// The line containing `at`, without its line break.
pub fn line_body(text: &str, at: usize) -> Span {
    let at = clamp(text, at);
    let start = text[..at].rfind('\n').map_or(0, |i| i + 1);
    let end = text[at..].find('\n').map_or(text.len(), |i| at + i);
    let end = if text[start..end].ends_with('\r') { end - 1 } else { end };
    Span::new(start, end.max(start))
}

/// Clamps a byte position into `text`, moving back to a char boundary.
fn clamp(text: &str, at: usize) -> usize {
    let mut at = at.min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }
    at
}

fn clamp_range(text: &str, range: &Range<usize>) -> Span {
    let start = clamp(text, range.start);
    let end = clamp(text, range.end).max(start);
    Span::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn apply(text: &str, cmd: Cmd) -> String {
        match cmd.compile(text, &[]) {
            Some(edit) => {
                let mut out = text.to_string();
                out.replace_range(edit.range.range(), &edit.text);
                out
            }
            None => text.to_string(),
        }
    }

    #[rstest]
    #[case("title\nbody", 2, "# title\nbody")]
    #[case("## title\nbody", 0, "# title\nbody")]
    #[case("# title\nbody", 3, "# title\nbody")]
    #[case("a\nb", 2, "a\n# b")]
    fn toggle_heading_cases(#[case] text: &str, #[case] at: usize, #[case] expected: &str) {
        assert_eq!(apply(text, Cmd::ToggleHeading { at }), expected);
    }

    #[rstest]
    #[case("title", 0, "## title")]
    #[case("# title", 0, "## title")]
    #[case("## title", 0, "## title")]
    fn toggle_subheading_cases(#[case] text: &str, #[case] at: usize, #[case] expected: &str) {
        assert_eq!(apply(text, Cmd::ToggleSubheading { at }), expected);
    }

    #[rstest]
    #[case("what is it  \nnext", 0, "what is it?\nnext")]
    #[case("done?\n", 1, "done?\n")]
    #[case("a\n\nb", 2, "a\n?\nb")]
    #[case("crlf line\r\n", 0, "crlf line?\r\n")]
    fn mark_question_cases(#[case] text: &str, #[case] at: usize, #[case] expected: &str) {
        assert_eq!(apply(text, Cmd::MarkQuestion { at }), expected);
    }

    #[test]
    fn wrap_bold_and_clamped_delete() {
        assert_eq!(apply("make bold", Cmd::WrapBold { range: 5..9 }), "make **bold**");
        assert_eq!(apply("abc", Cmd::DeleteRange { range: 1..99 }), "a");
        assert_eq!(
            apply("abc", Cmd::InsertText { at: 99, text: "d".into() }),
            "abcd"
        );
    }

    #[test]
    fn positions_inside_multibyte_chars_snap_back() {
        assert_eq!(
            apply("é", Cmd::InsertText { at: 1, text: "x".into() }),
            "xé"
        );
    }

    #[test]
    fn edit_line_without_pages_is_nothing() {
        let cmd = Cmd::EditLine {
            at: LineIdentity::new(0, 0, 0),
            text: "x".into(),
        };
        assert_eq!(cmd.compile("abc", &[]), None);
    }
}

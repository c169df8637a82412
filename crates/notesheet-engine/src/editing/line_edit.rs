//! Offset-mapped line editing.
//!
//! A rendered line is addressed by its [`LineIdentity`]. The line's
//! document-relative content span, recorded at classification time, says
//! where the new text goes. Markers around the content (`# `, `**`) and
//! the line break are left untouched.

use crate::{
    paging::{LineIdentity, Page},
    parsing::{rope::span::Span, sections::ContentLine},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("page index {index} out of range ({len} pages)")]
    PageOutOfRange { index: usize, len: usize },
    #[error("section index {index} out of range on page {page} ({len} sections)")]
    SectionOutOfRange { page: usize, index: usize, len: usize },
    #[error("line index {index} out of range ({len} lines)")]
    LineOutOfRange { index: usize, len: usize },
    #[error("line span {span:?} does not fit a document of {len} bytes")]
    StaleOffsets { span: Span, len: usize },
}

/// Finds the line at `at`.
pub fn locate_line(pages: &[Page], at: LineIdentity) -> Result<ContentLine, EditError> {
    let page = pages.get(at.page_index).ok_or(EditError::PageOutOfRange {
        index: at.page_index,
        len: pages.len(),
    })?;
    let placed = page
        .sections
        .get(at.section_index)
        .ok_or(EditError::SectionOutOfRange {
            page: page.page_number,
            index: at.section_index,
            len: page.sections.len(),
        })?;
    placed
        .section
        .lines
        .get(at.line_index)
        .copied()
        .ok_or(EditError::LineOutOfRange {
            index: at.line_index,
            len: placed.section.lines.len(),
        })
}

/// Checks that a content span can be spliced into `raw`.
pub fn validate_span(raw: &str, span: Span) -> Result<(), EditError> {
    let fits = span.start <= span.end
        && span.end <= raw.len()
        && raw.is_char_boundary(span.start)
        && raw.is_char_boundary(span.end);
    if fits {
        Ok(())
    } else {
        Err(EditError::StaleOffsets {
            span,
            len: raw.len(),
        })
    }
}

/// Replaces the content of the line at `at` with `new_line`.
///
/// `pages` must have been derived from `raw`.
pub fn try_apply_line_edit(
    raw: &str,
    pages: &[Page],
    at: LineIdentity,
    new_line: &str,
) -> Result<String, EditError> {
    let line = locate_line(pages, at)?;
    validate_span(raw, line.content)?;

    let mut out = String::with_capacity(raw.len() - line.content.len() + new_line.len());
    out.push_str(&raw[..line.content.start]);
    out.push_str(new_line);
    out.push_str(&raw[line.content.end..]);
    Ok(out)
}

/// Like [`try_apply_line_edit`], but a bad coordinate leaves the text
/// unchanged instead of failing.
pub fn apply_line_edit(raw: &str, pages: &[Page], at: LineIdentity, new_line: &str) -> String {
    match try_apply_line_edit(raw, pages, at, new_line) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("line edit at {at:?} ignored: {e}");
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        paging::{PageCapacity, paginate},
        parsing::classify,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn pages(raw: &str) -> Vec<Page> {
        paginate(&classify(raw), PageCapacity::default())
    }

    #[test]
    fn edit_keeps_heading_marker() {
        let raw = "# Title\nHello?\nAnswer.\n";
        let out = apply_line_edit(raw, &pages(raw), LineIdentity::new(0, 0, 0), "Renamed");
        assert_eq!(out, "# Renamed\nHello?\nAnswer.\n");
    }

    #[test]
    fn edit_inside_multi_line_section_touches_one_line() {
        let raw = "first\nsecond\nthird\n";
        let out = apply_line_edit(raw, &pages(raw), LineIdentity::new(0, 0, 1), "2nd");
        assert_eq!(out, "first\n2nd\nthird\n");
    }

    #[test]
    fn edit_code_body_keeps_fences() {
        let raw = "```py\nx=1\n```\n";
        let out = apply_line_edit(raw, &pages(raw), LineIdentity::new(0, 0, 0), "x = 2");
        assert_eq!(out, "```py\nx = 2\n```\n");
    }

    #[test]
    fn edit_bold_question_keeps_wrapping() {
        let raw = "**Q1. Old?**\n";
        let out = apply_line_edit(raw, &pages(raw), LineIdentity::new(0, 0, 0), "Q1. New?");
        assert_eq!(out, "**Q1. New?**\n");
    }

    #[rstest]
    #[case(LineIdentity::new(1, 0, 0))]
    #[case(LineIdentity::new(0, 5, 0))]
    #[case(LineIdentity::new(0, 0, 9))]
    fn out_of_range_edits_are_no_ops(#[case] at: LineIdentity) {
        let raw = "# Title\nbody\n";
        assert_eq!(apply_line_edit(raw, &pages(raw), at, "x"), raw);
        assert!(try_apply_line_edit(raw, &pages(raw), at, "x").is_err());
    }

    #[test]
    fn stale_pages_are_rejected() {
        let old = "a long first line\n";
        let stale = pages(old);
        let err = try_apply_line_edit("short\n", &stale, LineIdentity::new(0, 0, 0), "x");
        assert!(matches!(err, Err(EditError::StaleOffsets { .. })));
    }
}

use crate::{paging::Page, parsing::sections::Section};

/// Validates classifier output against the raw text it came from.
///
/// Asserts that:
/// - section spans are within bounds, ordered and non-overlapping
/// - every line is well formed and contained in its section's span
/// - each section's text equals its lines' content and endings
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(raw: &str, sections: &[Section]) {
    let n = raw.len();
    let mut prev_end = 0;
    for s in sections {
        assert!(
            s.span.start <= s.span.end && s.span.end <= n,
            "section span out of bounds: {:?} (len: {})",
            s.span,
            n
        );
        assert!(
            s.span.start >= prev_end,
            "section spans overlap or are out of order at {:?}",
            s.span
        );
        prev_end = s.span.end;

        let mut rebuilt = String::new();
        for line in &s.lines {
            assert!(line.is_well_formed(), "malformed line {line:?}");
            assert!(
                s.span.contains_span(line.raw_line),
                "line {:?} outside section span {:?}",
                line.raw_line,
                s.span
            );
            rebuilt.push_str(&raw[line.content.range()]);
            rebuilt.push_str(&raw[line.ending.range()]);
        }
        assert_eq!(rebuilt, s.text, "section text disagrees with its line spans");
    }
}

/// Validates pager output.
///
/// Asserts that page numbers are contiguous from 1 and that each placed
/// section's `start_index` is the running character count of its page.
pub fn check_pages(pages: &[Page]) {
    assert!(!pages.is_empty(), "pager must emit at least one page");
    for (i, page) in pages.iter().enumerate() {
        assert_eq!(page.page_number, i + 1, "page numbers must be contiguous");
        let mut offset = 0;
        for placed in &page.sections {
            assert_eq!(placed.start_index, offset, "start_index drifted on page {}", i + 1);
            offset += placed.section.char_count();
        }
    }
}

//! Dividing ordinary sections that are larger than a page.
//!
//! Both halves keep the section kind and exact document-relative line
//! spans, so edits on either half still land in the right place.

use crate::parsing::{
    rope::span::Span,
    sections::{ContentLine, Section},
};

/// Character count of each displayed line, line break included.
pub fn line_char_counts(section: &Section) -> Vec<usize> {
    (0..section.lines.len())
        .filter_map(|i| section.line_range(i))
        .map(|range| section.text[range].chars().count())
        .collect()
}

/// How many leading lines fit within the given room.
pub fn lines_that_fit(section: &Section, room_lines: usize, room_chars: usize) -> usize {
    let mut chars = 0;
    let mut n = 0;
    for count in line_char_counts(section) {
        if n + 1 > room_lines || chars + count > room_chars {
            break;
        }
        chars += count;
        n += 1;
    }
    n
}

/// Splits after the first `n` lines. Requires `0 < n < line_count`.
pub fn split_at_line(section: &Section, n: usize) -> Option<(Section, Section)> {
    if n == 0 || n >= section.lines.len() {
        return None;
    }
    let cut = section.line_range(n)?.start;
    let boundary = section.lines[n].raw_line.start;

    let head = Section {
        kind: section.kind.clone(),
        text: section.text[..cut].to_string(),
        span: Span::new(section.span.start, boundary),
        lines: section.lines[..n].to_vec(),
    };
    let tail = Section {
        kind: section.kind.clone(),
        text: section.text[cut..].to_string(),
        span: Span::new(boundary, section.span.end),
        lines: section.lines[n..].to_vec(),
    };
    Some((head, tail))
}

/// Splits the first line so the head holds at most `max_chars` characters,
/// preferring to break after the last whitespace before the limit.
///
/// Returns `None` when the line already fits or no progress is possible.
pub fn split_long_line(section: &Section, max_chars: usize) -> Option<(Section, Section)> {
    let first = *section.lines.first()?;
    let content_text = section.line_text(0)?;
    let line_chars = section.text[section.line_range(0)?].chars().count();
    if line_chars <= max_chars {
        return None;
    }

    let hard = content_text
        .char_indices()
        .nth(max_chars)
        .map_or(content_text.len(), |(i, _)| i);
    let soft = content_text[..hard]
        .char_indices()
        .rev()
        .find(|(_, ch)| ch.is_whitespace())
        .map(|(i, ch)| i + ch.len_utf8())
        .filter(|&i| i > 0);
    let cut = soft.unwrap_or(hard);
    if cut == 0 {
        return None;
    }

    let at = first.content.start + cut;
    let head_line = ContentLine {
        raw_line: Span::new(first.raw_line.start, at),
        content: Span::new(first.content.start, at),
        ending: Span::empty_at(at),
    };
    let tail_line = ContentLine {
        raw_line: Span::new(at, first.raw_line.end),
        content: Span::new(at, first.content.end),
        ending: first.ending,
    };

    let head = Section {
        kind: section.kind.clone(),
        text: section.text[..cut].to_string(),
        span: Span::new(section.span.start, at),
        lines: vec![head_line],
    };
    let mut tail_lines = vec![tail_line];
    tail_lines.extend_from_slice(&section.lines[1..]);
    let tail = Section {
        kind: section.kind.clone(),
        text: section.text[cut..].to_string(),
        span: Span::new(at, section.span.end),
        lines: tail_lines,
    };
    Some((head, tail))
}

use crate::parsing::rope::span::Span;

use super::{
    cursor::Cursor,
    kinds::{Bold, Italic, Underline},
    types::InlineNode,
};

#[derive(Clone, Copy)]
enum Markup {
    Bold,
    Italic,
    Underline,
}

/// Delimiters in precedence order: longer first.
const DELIMITERS: [(&str, Markup); 4] = [
    (Bold::DELIM, Markup::Bold),
    (Underline::DELIM, Markup::Underline),
    (Italic::STAR, Markup::Italic),
    (Italic::UNDERSCORE, Markup::Italic),
];

/// Parses a line into a sequence of [`InlineNode`]s covering all of `s`.
///
/// `base` is added to every span. Text between markup is emitted as
/// `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        let parsed = DELIMITERS
            .iter()
            .find_map(|&(delim, markup)| try_parse_delimited(&mut cur, delim, markup));
        if let Some(node) = parsed {
            flush_text(&mut out, text_start, node.full().start);
            text_start = node.full().end;
            out.push(node);
            continue;
        }
        cur.bump_char();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// The visible text of a line with markup delimiters removed.
pub fn strip_markup(s: &str) -> String {
    parse_inline(0, s)
        .iter()
        .map(|node| &s[node.visible().range()])
        .collect()
}

/// Attempts to parse `delim inner delim` at the cursor.
///
/// Openers glued to a preceding word character (`snake_case`) or to the
/// tail of a longer delimiter, and empty inners, do not count. On failure
/// the cursor is left untouched.
fn try_parse_delimited(cur: &mut Cursor<'_>, delim: &str, markup: Markup) -> Option<InlineNode> {
    let delim_byte = delim.as_bytes()[0];
    if !cur.starts_with(delim)
        || cur
            .prev()
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == delim_byte)
    {
        return None;
    }

    let start = cur.pos();
    let inner_local = cur.i + delim.len();
    let mut ahead = cur.clone();
    ahead.bump_n(delim.len());
    let close_local = ahead.find(delim)?;
    if close_local == inner_local {
        return None;
    }

    cur.i = close_local + delim.len();
    let full = Span::new(start, cur.pos());
    let inner = Span::new(cur.base + inner_local, cur.base + close_local);
    Some(match markup {
        Markup::Bold => InlineNode::Bold { full, inner },
        Markup::Italic => InlineNode::Italic { full, inner },
        Markup::Underline => InlineNode::Underline { full, inner },
    })
}

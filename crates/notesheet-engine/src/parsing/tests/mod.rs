//! Scenario tests for the classifier.
//!
//! Uses inline `insta` snapshots of the normalized section listing
//! (`kind [start..end] text`).

use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{
    paging::{PageCapacity, paginate},
    parsing::{
        classify,
        inline::InlineNode,
        sections::{Section, SectionKind},
        snapshot,
    },
};

fn sections(raw: &str) -> Vec<Section> {
    let sections = classify(raw);
    snapshot::invariants(raw, &sections);
    sections
}

#[test]
fn mixed_note() {
    let raw = "CS 101: Algorithms\n# Lecture 1\n**Overview**\n## Sorting\n1. bubble\n2. merge\nWhy sort?\n\nplain text\ncontinues\n";
    assert_snapshot!(snapshot::normalize(&sections(raw)), @r"
    course [0..19] CS 101: Algorithms\n
    heading1 [19..31] Lecture 1\n
    heading1 [31..44] Overview\n
    heading2 [44..55] Sorting\n
    listItem [55..74] 1. bubble\n2. merge\n
    question [74..84] Why sort?\n
    text [84..85] \n
    text [85..106] plain text\ncontinues\n
    ");
}

#[test]
fn raw_zones() {
    let raw = "Intro\n```rust\nfn main() {}\n```\n| x | y |\n|---|---|\n| 1 | 2 |\nafter\n";
    assert_snapshot!(snapshot::normalize(&sections(raw)), @r"
    text [0..6] Intro\n
    code(rust) [6..31] fn main() {}\n
    table(x,y) [31..61] | x | y |\n|---|---|\n| 1 | 2 |\n
    text [61..67] after\n
    ");
}

#[test]
fn blank_lines_close_runs_then_stand_alone() {
    assert_snapshot!(snapshot::normalize(&sections("a\n\n\nb")), @r"
    text [0..3] a\n\n
    text [3..4] \n
    text [4..5] b
    ");
}

#[test]
fn blank_line_closing_a_list_stays_in_the_list() {
    let raw = "1. a\n2. b\n\n\nx\n";
    let sections = sections(raw);
    assert_snapshot!(snapshot::normalize(&sections), @r"
    listItem [0..11] 1. a\n2. b\n\n
    text [11..12] \n
    text [12..14] x\n
    ");
    assert_eq!(sections[0].line_count(), 3);
}

#[test]
fn crlf_endings_are_kept() {
    assert_snapshot!(snapshot::normalize(&sections("# T\r\nbody\r\n")), @r"
    heading1 [0..5] T\r\n
    text [5..11] body\r\n
    ");
}

#[test]
fn pages_listing() {
    let raw = "# Title\nHello?\nAnswer.\n";
    let pages = paginate(&sections(raw), PageCapacity::default());
    snapshot::page_invariants(&pages);
    assert_snapshot!(snapshot::normalize_pages(&pages), @r"
    page 1
      @0 heading1 [0..8] Title\n
      @6 question [8..15] Hello?\n
      @13 text [15..23] Answer.\n
    ");
}

#[test]
fn title_question_answer() {
    let s = sections("# Title\nHello?\nAnswer.\n");
    let kinds: Vec<_> = s.iter().map(|s| (s.kind.clone(), s.text.as_str())).collect();
    assert_eq!(
        kinds,
        vec![
            (SectionKind::Heading1, "Title\n"),
            (SectionKind::Question, "Hello?\n"),
            (SectionKind::Text, "Answer.\n"),
        ]
    );
}

#[test]
fn code_fence_with_language() {
    let s = sections("```py\nx=1\n```\n");
    assert_eq!(s.len(), 1);
    assert_eq!(s[0].language(), Some("py"));
    assert_eq!(s[0].text, "x=1\n");
}

#[test]
fn fence_body_is_never_reclassified() {
    let s = sections("```\n# not a heading\nwhy?\n| a | b |\n```\n");
    assert_eq!(s.len(), 1);
    assert_eq!(s[0].text, "# not a heading\nwhy?\n| a | b |\n");
    assert_eq!(s[0].line_count(), 3);
}

#[test]
fn unterminated_fence_runs_to_end() {
    let s = sections("```\nnever closed\n");
    assert_eq!(s.len(), 1);
    assert_eq!(s[0].language(), Some(""));
    assert_eq!(s[0].text, "never closed\n");
    assert_eq!(s[0].span.end, 17);
}

#[test]
fn table_ends_at_first_non_row() {
    let s = sections("| a | b |\n| 1 | 2 |\n# Next\n");
    assert_eq!(s.len(), 2);
    assert_eq!(s[0].headers(), Some(&["a".to_string(), "b".to_string()][..]));
    assert_eq!(s[0].line_count(), 2);
    assert_eq!(s[1].kind, SectionKind::Heading1);
}

#[test]
fn plain_line_ends_list_run() {
    let s = sections("1. one\n2. two\nafter the list\n");
    assert_eq!(s.len(), 2);
    assert_eq!(s[0].kind, SectionKind::ListItem);
    assert_eq!(s[1].kind, SectionKind::Text);
}

#[test]
fn empty_marker_heading_is_text() {
    let s = sections("# \n");
    assert_eq!(s[0].kind, SectionKind::Text);
}

#[test]
fn raw_zones_suppress_inline_parsing() {
    let s = sections("```\n**bold?**\n```\n**bold** text\n");
    let code = s[0].inline_lines();
    assert!(matches!(code[0][..], [InlineNode::Text(_)]));
    let text = s[1].inline_lines();
    assert!(matches!(text[0][0], InlineNode::Bold { .. }));
}

#[test]
fn empty_document() {
    assert!(sections("").is_empty());
}

#[test]
fn blank_lines_only() {
    let s = sections("\n\n\n");
    assert_eq!(s.len(), 3);
    assert!(s.iter().all(|s| s.kind == SectionKind::Text && s.text == "\n"));
}

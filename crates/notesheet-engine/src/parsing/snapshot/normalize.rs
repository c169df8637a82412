use std::fmt::Write;

use crate::{
    paging::Page,
    parsing::{rope::slice::preview, sections::Section},
};

/// One line per section: `kind [start..end] text`, with control characters
/// escaped and long text truncated.
pub fn normalize(sections: &[Section]) -> String {
    let mut out = String::new();
    for s in sections {
        let _ = writeln!(out, "{}", section_line(s));
    }
    out
}

/// Like [`normalize`], grouped under a `page N` line per page, with each
/// section's page-relative `start_index`.
pub fn normalize_pages(pages: &[Page]) -> String {
    let mut out = String::new();
    for page in pages {
        let _ = writeln!(out, "page {}", page.page_number);
        for placed in &page.sections {
            let _ = writeln!(out, "  @{} {}", placed.start_index, section_line(&placed.section));
        }
    }
    out
}

fn section_line(s: &Section) -> String {
    let mut kind = s.kind.tag().to_string();
    if let Some(language) = s.language() {
        let _ = write!(kind, "({language})");
    }
    if let Some(headers) = s.headers() {
        let _ = write!(kind, "({})", headers.join(","));
    }
    let text: String = s.text.escape_debug().collect();
    format!(
        "{kind} [{}..{}] {}",
        s.span.start,
        s.span.end,
        preview(&text, 60)
    )
}

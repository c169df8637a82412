use serde::{Deserialize, Serialize};

use crate::parsing::{
    inline::{self, InlineNode},
    rope::span::Span,
};

use super::{content::ContentLine, style::SectionStyle};

/// The kind of a section. Closed set; match exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SectionKind {
    Heading1,
    Heading2,
    Question,
    /// Course header line such as `CS 101: Algorithms`.
    Course,
    /// A run of numbered list lines.
    ListItem,
    /// Fenced code block body.
    Code {
        /// Text after the opening fence, possibly empty.
        language: String,
    },
    /// Pipe table rows.
    Table {
        /// Cells of the first row.
        headers: Vec<String>,
    },
    /// Paragraph text and blank spacer lines.
    Text,
}

impl SectionKind {
    /// Stable short name of the kind.
    pub fn tag(&self) -> &'static str {
        match self {
            SectionKind::Heading1 => "heading1",
            SectionKind::Heading2 => "heading2",
            SectionKind::Question => "question",
            SectionKind::Course => "course",
            SectionKind::ListItem => "listItem",
            SectionKind::Code { .. } => "code",
            SectionKind::Table { .. } => "table",
            SectionKind::Text => "text",
        }
    }

    /// Code and tables are never divided across pages.
    pub fn is_unsplittable(&self) -> bool {
        matches!(self, SectionKind::Code { .. } | SectionKind::Table { .. })
    }

    /// Raw zones are displayed verbatim, without inline markup parsing.
    pub fn is_raw_zone(&self) -> bool {
        self.is_unsplittable()
    }
}

/// A typed, contiguous span of the raw document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    /// Display text: each line's content followed by its line break.
    pub text: String,
    /// Everything this section consumed in the document, markers and fence
    /// lines included.
    pub span: Span,
    /// One entry per displayed line, in order.
    pub lines: Vec<ContentLine>,
}

impl Section {
    pub fn style(&self) -> SectionStyle {
        self.kind.style()
    }

    pub fn language(&self) -> Option<&str> {
        match &self.kind {
            SectionKind::Code { language } => Some(language),
            _ => None,
        }
    }

    pub fn headers(&self) -> Option<&[String]> {
        match &self.kind {
            SectionKind::Table { headers } => Some(headers),
            _ => None,
        }
    }

    /// Number of lines this section occupies on a page.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of characters of display text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte range of line `i` inside `text`, line break included.
    pub fn line_range(&self, i: usize) -> Option<std::ops::Range<usize>> {
        let start: usize = self.lines.get(..i)?.iter().map(|l| l.display_len()).sum();
        let line = self.lines.get(i)?;
        Some(start..start + line.display_len())
    }

    /// Display text of line `i` without its line break.
    pub fn line_text(&self, i: usize) -> Option<&str> {
        let range = self.line_range(i)?;
        let content_len = self.lines[i].content.len();
        self.text.get(range.start..range.start + content_len)
    }

    pub fn line_texts(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.lines.len()).filter_map(move |i| self.line_text(i))
    }

    /// Inline markup of every line. Raw zones yield a single text node per
    /// line. Spans are relative to the start of each line.
    pub fn inline_lines(&self) -> Vec<Vec<InlineNode>> {
        self.line_texts()
            .map(|line| {
                if self.kind.is_raw_zone() {
                    vec![InlineNode::Text(Span::new(0, line.len()))]
                } else {
                    inline::parse_inline(0, line)
                }
            })
            .collect()
    }
}

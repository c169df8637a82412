use serde::{Deserialize, Serialize};

use crate::parsing::sections::Section;

/// A section assigned to a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedSection {
    pub section: Section,
    /// Character offset of the section's first character from the start of
    /// its page's content. Recomputed on every pagination.
    pub start_index: usize,
}

/// One fixed-size sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// 1-based, contiguous, in emission order.
    pub page_number: usize,
    pub sections: Vec<PlacedSection>,
}

/// Coordinate of a displayed line: page, section within the page, line
/// within the section. Positional, so it shifts when boundaries move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineIdentity {
    pub page_index: usize,
    pub section_index: usize,
    pub line_index: usize,
}

impl LineIdentity {
    pub const fn new(page_index: usize, section_index: usize, line_index: usize) -> Self {
        Self {
            page_index,
            section_index,
            line_index,
        }
    }
}

impl Page {
    pub fn empty(page_number: usize) -> Self {
        Self {
            page_number,
            sections: vec![],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Concatenated display text of every section on the page.
    pub fn content(&self) -> String {
        self.sections
            .iter()
            .map(|p| p.section.text.as_str())
            .collect()
    }

    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|p| p.section.line_count()).sum()
    }

    pub fn char_count(&self) -> usize {
        self.sections.iter().map(|p| p.section.char_count()).sum()
    }

    /// Whether any section on this page is a code block or table.
    pub fn has_unsplittable(&self) -> bool {
        self.sections
            .iter()
            .any(|p| p.section.kind.is_unsplittable())
    }

    /// Every displayed line of the page, top to bottom.
    pub fn line_identities(&self, page_index: usize) -> Vec<LineIdentity> {
        self.sections
            .iter()
            .enumerate()
            .flat_map(|(si, p)| {
                (0..p.section.line_count()).map(move |li| LineIdentity::new(page_index, si, li))
            })
            .collect()
    }

    pub fn section_at(&self, at: LineIdentity) -> Option<&Section> {
        self.sections.get(at.section_index).map(|p| &p.section)
    }
}

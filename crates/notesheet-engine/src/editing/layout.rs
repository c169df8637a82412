//! UI-only state that outlives re-derivation: page headers, per-line
//! alignment and the line currently being edited.
//!
//! Lines are keyed by [`LineKey`], a hash of what the line belongs to
//! rather than where it sits, so inserting text above a line does not
//! move its alignment onto a neighbour.

use std::{
    collections::{BTreeMap, HashMap, HashSet},
    hash::{DefaultHasher, Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use crate::{
    paging::{LineIdentity, Page},
    parsing::sections::Section,
};

/// Characters of section text that go into a [`LineKey`].
const KEY_PREFIX_CHARS: usize = 32;

/// Content-derived identity of a displayed line.
///
/// Built from the section's kind and text prefix, the number of earlier
/// sections with the same kind and prefix, and the line index. Identical
/// sections (blank spacers, a repeated question) therefore get distinct
/// keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineKey(u64);

impl LineKey {
    /// Key of the line at `at`, if it exists.
    pub fn at(pages: &[Page], at: LineIdentity) -> Option<Self> {
        LineKeys::new(pages).get(at)
    }

    fn content_hash(section: &Section) -> u64 {
        let mut h = DefaultHasher::new();
        section.kind.tag().hash(&mut h);
        section
            .text
            .chars()
            .take(KEY_PREFIX_CHARS)
            .for_each(|c| c.hash(&mut h));
        h.finish()
    }

    fn from_parts(content: u64, occurrence: usize, line_index: usize) -> Self {
        let mut h = DefaultHasher::new();
        content.hash(&mut h);
        occurrence.hash(&mut h);
        line_index.hash(&mut h);
        LineKey(h.finish())
    }
}

/// Keys of every displayed line, indexed page, section, line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineKeys {
    pages: Vec<Vec<Vec<LineKey>>>,
}

impl LineKeys {
    pub fn new(pages: &[Page]) -> Self {
        let mut seen: HashMap<u64, usize> = HashMap::new();
        let pages = pages
            .iter()
            .map(|page| {
                page.sections
                    .iter()
                    .map(|p| {
                        let content = LineKey::content_hash(&p.section);
                        let count = seen.entry(content).or_default();
                        let occurrence = *count;
                        *count += 1;
                        (0..p.section.line_count())
                            .map(|i| LineKey::from_parts(content, occurrence, i))
                            .collect::<Vec<_>>()
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { pages }
    }

    pub fn get(&self, at: LineIdentity) -> Option<LineKey> {
        self.section(at)?.get(at.line_index).copied()
    }

    /// Keys of every line of the section holding `at`.
    pub fn section(&self, at: LineIdentity) -> Option<&[LineKey]> {
        self.pages
            .get(at.page_index)?
            .get(at.section_index)
            .map(Vec::as_slice)
    }

    /// Keys of one page's lines, top to bottom.
    pub fn page(&self, page_index: usize) -> impl Iterator<Item = LineKey> + '_ {
        self.pages
            .get(page_index)
            .into_iter()
            .flatten()
            .flatten()
            .copied()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = LineKey> + '_ {
        self.pages.iter().flatten().flatten().copied()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Left, center, right, then back to left.
    pub fn next(self) -> Self {
        match self {
            Alignment::Left => Alignment::Center,
            Alignment::Center => Alignment::Right,
            Alignment::Right => Alignment::Left,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageHeader {
    pub text: String,
    pub align: Alignment,
}

/// Everything a renderer needs about one page besides its sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page_number: usize,
    pub header: PageHeader,
    /// Alignment of each displayed line, top to bottom.
    pub line_alignments: Vec<Alignment>,
}

/// The line being edited and the keys its section had when editing began.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EditSession {
    at: LineIdentity,
    section: Vec<LineKey>,
}

impl EditSession {
    fn line(&self) -> LineKey {
        self.section[self.at.line_index]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutState {
    headers: BTreeMap<usize, PageHeader>,
    alignments: HashMap<LineKey, Alignment>,
    editing: Option<EditSession>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty header clears the entry.
    pub fn set_header(&mut self, page_number: usize, header: PageHeader) {
        if header == PageHeader::default() {
            self.headers.remove(&page_number);
        } else {
            self.headers.insert(page_number, header);
        }
    }

    pub fn header(&self, page_number: usize) -> PageHeader {
        self.headers.get(&page_number).cloned().unwrap_or_default()
    }

    pub fn set_alignment(&mut self, key: LineKey, align: Alignment) {
        if align == Alignment::default() {
            self.alignments.remove(&key);
        } else {
            self.alignments.insert(key, align);
        }
    }

    pub fn alignment(&self, key: LineKey) -> Alignment {
        self.alignments.get(&key).copied().unwrap_or_default()
    }

    /// Advances the line's alignment and returns the new value.
    pub fn cycle_alignment(&mut self, key: LineKey) -> Alignment {
        let next = self.alignment(key).next();
        self.set_alignment(key, next);
        next
    }

    /// Marks the line at `at` as being edited. Only one line is edited at
    /// a time; an `at` with no line clears the flag.
    pub fn begin_edit(&mut self, keys: &LineKeys, at: LineIdentity) {
        self.editing = keys
            .section(at)
            .filter(|section| at.line_index < section.len())
            .map(|section| EditSession {
                at,
                section: section.to_vec(),
            });
    }

    /// Clears the edit flag. `after` holds the keys derived once the edit
    /// was applied; every line of the edited section takes its alignment
    /// over to its new key. `None` cancels the edit.
    pub fn end_edit(&mut self, after: Option<&LineKeys>) {
        let Some(session) = self.editing.take() else {
            return;
        };
        let Some(rekeyed) = after.and_then(|keys| keys.section(session.at)) else {
            return;
        };
        let moved: Vec<(LineKey, Alignment)> = session
            .section
            .iter()
            .zip(rekeyed)
            .filter(|(old, new)| old != new)
            .filter_map(|(old, &new)| Some((new, self.alignments.remove(old)?)))
            .collect();
        self.alignments.extend(moved);
    }

    pub fn is_editing(&self, key: LineKey) -> bool {
        self.editing() == Some(key)
    }

    pub fn editing(&self) -> Option<LineKey> {
        self.editing.as_ref().map(EditSession::line)
    }

    /// Drops state for lines and pages that no longer exist.
    pub fn retain_live(&mut self, keys: &LineKeys) {
        let live: HashSet<LineKey> = keys.iter().collect();
        let before = self.alignments.len();
        self.alignments.retain(|key, _| live.contains(key));
        if self.editing().is_some_and(|key| !live.contains(&key)) {
            self.editing = None;
        }
        self.headers.retain(|&n, _| n <= keys.page_count());
        let dropped = before - self.alignments.len();
        if dropped > 0 {
            log::debug!("dropped alignment of {dropped} vanished lines");
        }
    }

    /// Header and line alignments of the page at `page_index`.
    pub fn page_meta(&self, keys: &LineKeys, page_index: usize) -> PageMeta {
        let page_number = page_index + 1;
        PageMeta {
            page_number,
            header: self.header(page_number),
            line_alignments: keys.page(page_index).map(|k| self.alignment(k)).collect(),
        }
    }
}

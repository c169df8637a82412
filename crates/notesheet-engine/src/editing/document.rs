use xi_rope::{Delta, Rope, RopeInfo, delta::Builder};

use crate::{
    editing::{Cmd, LineKeys, Patch, commands::Edit},
    paging::{Page, PageCapacity, paginate},
    parsing::{parse_document, sections::Section},
};

/// A note held in a rope buffer together with everything derived from it.
///
/// The buffer is the single source of truth. Sections, pages and line keys are
/// recomputed from it after every command, so they never drift from the
/// text and no offset ever needs renumbering.
///
/// ```rust
/// # use notesheet_engine::editing::{Cmd, NoteDocument};
/// let mut doc = NoteDocument::from_text("Title\nWhat is it\n");
/// doc.apply(Cmd::ToggleHeading { at: 0 });
/// doc.apply(Cmd::MarkQuestion { at: 9 });
/// assert_eq!(doc.text(), "# Title\nWhat is it?\n");
/// assert_eq!(doc.pages().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct NoteDocument {
    pub(crate) buffer: Rope,
    capacity: PageCapacity,
    sections: Vec<Section>,
    pages: Vec<Page>,
    line_keys: LineKeys,
    selection: std::ops::Range<usize>,
    version: u64,
}

impl NoteDocument {
    pub fn new(text: &str, capacity: PageCapacity) -> Self {
        let buffer = Rope::from(text);
        let len = buffer.len();
        let mut doc = Self {
            buffer,
            capacity,
            sections: vec![],
            pages: vec![],
            line_keys: LineKeys::default(),
            selection: len..len,
            version: 0,
        };
        doc.rederive();
        doc
    }

    /// A document at the default page capacity.
    pub fn from_text(text: &str) -> Self {
        Self::new(text, PageCapacity::default())
    }

    /// Fails on invalid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::from_text(text))
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.text().into_bytes()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Keys of every displayed line, for [`LayoutState`](super::LayoutState).
    pub fn line_keys(&self) -> &LineKeys {
        &self.line_keys
    }

    pub fn capacity(&self) -> PageCapacity {
        self.capacity
    }

    /// Changes the page size and repaginates. The text is untouched.
    pub fn set_capacity(&mut self, capacity: PageCapacity) {
        if capacity != self.capacity {
            self.capacity = capacity;
            self.pages = paginate(&self.sections, capacity);
            self.line_keys = LineKeys::new(&self.pages);
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn selection(&self) -> std::ops::Range<usize> {
        self.selection.clone()
    }

    pub fn set_selection(&mut self, selection: std::ops::Range<usize>) {
        let len = self.buffer.len();
        self.selection = selection.start.min(len)..selection.end.min(len);
    }

    /// Applies a command and re-derives sections and pages.
    ///
    /// Commands that compile to nothing (already formatted, stale line
    /// coordinates) leave the text and version as they were.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let text = self.text();
        let Some(edit) = cmd.compile(&text, &self.pages) else {
            return Patch {
                changed: vec![],
                new_selection: self.selection(),
                version: self.version,
            };
        };

        let delta = self.compile_edit(&edit);
        self.buffer = delta.apply(&self.buffer);
        self.rederive();

        // A deletion reports the empty range where the text used to be.
        let end = edit.range.start + edit.text.len();
        self.selection = end..end;
        self.version += 1;

        Patch {
            changed: vec![edit.range.start..end],
            new_selection: self.selection(),
            version: self.version,
        }
    }

    fn compile_edit(&self, edit: &Edit) -> Delta<RopeInfo> {
        let mut builder = Builder::new(self.buffer.len());
        if edit.text.is_empty() {
            builder.delete(edit.range.range());
        } else {
            builder.replace(edit.range.range(), Rope::from(edit.text.as_str()));
        }
        builder.build()
    }

    fn rederive(&mut self) {
        self.sections = parse_document(&self.buffer).sections;
        self.pages = paginate(&self.sections, self.capacity);
        self.line_keys = LineKeys::new(&self.pages);
        log::trace!(
            "v{}: {} sections on {} pages",
            self.version,
            self.sections.len(),
            self.pages.len()
        );
    }
}

impl PartialEq for NoteDocument {
    fn eq(&self, other: &Self) -> bool {
        // Sections and pages are derived from the buffer and capacity.
        self.buffer.to_string() == other.buffer.to_string()
            && self.capacity == other.capacity
            && self.selection == other.selection
            && self.version == other.version
    }
}

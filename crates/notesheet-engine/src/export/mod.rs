//! Export of paginated notes, one sheet at a time.
//!
//! [`export_pages`] renders every page with [`render_sheet`] and hands the
//! result to a [`PageSink`]. Sinks decide where sheets go:
//! - [`TextFileSink`] writes them to any `Write` destination, separated by
//!   form feeds
//! - `Vec<String>` collects them in memory
//!
//! # Example
//!
//! ```
//! use notesheet_engine::editing::{LayoutState, NoteDocument};
//! use notesheet_engine::export::{SheetOptions, export_pages};
//!
//! let doc = NoteDocument::from_text("# Notes\nfirst line\n");
//! let mut sheets: Vec<String> = Vec::new();
//! export_pages(doc.pages(), &LayoutState::new(), &SheetOptions::default(), &mut sheets)?;
//! assert_eq!(sheets.len(), 1);
//! assert!(sheets[0].ends_with("Page 1 of 1"));
//! # Ok::<(), notesheet_engine::export::ExportError>(())
//! ```

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    editing::{LayoutState, LineKeys},
    paging::Page,
};

mod sheet;

pub use sheet::{PaperStyle, SheetOptions, render_sheet};

/// Separates sheets in text output.
pub const FORM_FEED: char = '\u{c}';

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Nothing to export: no pages")]
    NoPages,
}

/// Receives rendered sheets in page order.
pub trait PageSink {
    fn accept(&mut self, page_number: usize, sheet: &str) -> Result<(), ExportError>;

    /// Called once after the last sheet.
    fn finish(&mut self) -> Result<(), ExportError> {
        Ok(())
    }
}

impl PageSink for Vec<String> {
    fn accept(&mut self, _page_number: usize, sheet: &str) -> Result<(), ExportError> {
        self.push(sheet.to_string());
        Ok(())
    }
}

/// Writes sheets as plain text.
#[derive(Debug)]
pub struct TextFileSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> TextFileSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of sheets written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFileSink<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: &Path) -> Result<Self, ExportError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> PageSink for TextFileSink<W> {
    fn accept(&mut self, _page_number: usize, sheet: &str) -> Result<(), ExportError> {
        if self.written > 0 {
            writeln!(self.writer, "{FORM_FEED}")?;
        }
        writeln!(self.writer, "{sheet}")?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ExportError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Renders every page into `sink`, then finishes it. Returns the number of
/// sheets exported.
pub fn export_pages(
    pages: &[Page],
    layout: &LayoutState,
    options: &SheetOptions,
    sink: &mut dyn PageSink,
) -> Result<usize, ExportError> {
    if pages.is_empty() {
        return Err(ExportError::NoPages);
    }
    let total = pages.len();
    let keys = LineKeys::new(pages);
    for (index, page) in pages.iter().enumerate() {
        let meta = layout.page_meta(&keys, index);
        let sheet = render_sheet(page, &meta, total, options);
        sink.accept(page.page_number, &sheet)?;
    }
    sink.finish()?;
    log::debug!("exported {total} sheets");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        editing::NoteDocument,
        paging::PageCapacity,
        tests::{create_test_dir, numbered_lines},
    };

    fn three_page_doc() -> NoteDocument {
        NoteDocument::new(&numbered_lines(7), PageCapacity::new(3, 300))
    }

    #[test]
    fn collects_one_sheet_per_page() {
        let doc = three_page_doc();
        let mut sheets: Vec<String> = Vec::new();
        let options = SheetOptions::new(PaperStyle::Blank, doc.capacity());
        let n = export_pages(doc.pages(), &LayoutState::new(), &options, &mut sheets).unwrap();

        assert_eq!(n, 3);
        assert!(sheets[0].contains("line 1"));
        assert!(sheets[2].contains("line 7"));
        assert!(sheets[2].ends_with("Page 3 of 3"));
    }

    #[test]
    fn text_file_sink_separates_sheets_with_form_feeds() {
        let dir = create_test_dir();
        let path = dir.path().join("out").join("notes.txt");
        let doc = three_page_doc();

        let mut sink = TextFileSink::create(&path).unwrap();
        let layout = LayoutState::new();
        export_pages(doc.pages(), &layout, &SheetOptions::default(), &mut sink).unwrap();
        assert_eq!(sink.written(), 3);
        drop(sink);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches(FORM_FEED).count(), 2);
        assert!(text.ends_with("Page 3 of 3\n"));
    }

    #[test]
    fn in_memory_writer_sink() {
        let doc = NoteDocument::from_text("x\n");
        let mut sink = TextFileSink::new(Vec::new());
        let layout = LayoutState::new();
        export_pages(doc.pages(), &layout, &SheetOptions::default(), &mut sink).unwrap();
        let bytes = sink.into_inner();
        assert!(!bytes.contains(&(FORM_FEED as u8)));
    }

    #[test]
    fn empty_page_list_is_an_error() {
        let mut sheets: Vec<String> = Vec::new();
        let result = export_pages(&[], &LayoutState::new(), &SheetOptions::default(), &mut sheets);
        assert!(matches!(result, Err(ExportError::NoPages)));
    }
}

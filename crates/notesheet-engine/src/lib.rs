pub mod editing;
pub mod export;
pub mod io;
pub mod paging;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{
    Alignment, Cmd, EditError, LayoutState, LineKey, LineKeys, NoteDocument, PageHeader, PageMeta,
    Patch, apply_line_edit, try_apply_line_edit,
};
pub use export::{
    ExportError, PageSink, PaperStyle, SheetOptions, TextFileSink, export_pages, render_sheet,
};
pub use io::*;
pub use paging::{LineIdentity, Page, PageCapacity, PageGeometry, PlacedSection, paginate};
pub use parsing::{
    classify,
    sections::{ContentLine, FontFamily, Section, SectionKind, SectionStyle},
};

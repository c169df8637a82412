use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use notesheet_engine::{
    Alignment, Cmd, LayoutState, LineIdentity, LineKey, NoteDocument, PageCapacity, PageHeader,
    PageMeta, PaperStyle, SheetOptions, TextFileSink, export_pages, io,
};

/// What the key handler wants the event loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browse,
    /// Editing the content of one line.
    EditLine { at: LineIdentity, buffer: String },
    /// Editing the current page's header.
    EditHeader { buffer: String },
}

pub struct App {
    pub path: PathBuf,
    pub export_path: PathBuf,
    pub doc: NoteDocument,
    pub layout: LayoutState,
    pub options: SheetOptions,
    /// Index of the page on screen.
    pub page: usize,
    /// Line index within the page, top to bottom.
    pub cursor: usize,
    pub mode: Mode,
    pub dirty: bool,
    pub status: String,
}

impl App {
    pub fn new(path: PathBuf, text: &str, capacity: PageCapacity, paper_style: PaperStyle) -> Self {
        let export_path = path.with_extension("sheets.txt");
        Self {
            path,
            export_path,
            doc: NoteDocument::new(text, capacity),
            layout: LayoutState::new(),
            options: SheetOptions::new(paper_style, capacity),
            page: 0,
            cursor: 0,
            mode: Mode::Browse,
            dirty: false,
            status: String::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.doc.pages().len()
    }

    /// Coordinate of the line under the cursor, if the page has lines.
    pub fn current_line(&self) -> Option<LineIdentity> {
        self.doc
            .pages()
            .get(self.page)?
            .line_identities(self.page)
            .get(self.cursor)
            .copied()
    }

    fn current_key(&self) -> Option<LineKey> {
        self.doc.line_keys().get(self.current_line()?)
    }

    /// Text of the line under the cursor, markers excluded.
    fn current_text(&self) -> Option<String> {
        let at = self.current_line()?;
        let section = self.doc.pages().get(at.page_index)?.section_at(at)?;
        section.line_text(at.line_index).map(str::to_string)
    }

    /// Byte offset of the start of the line under the cursor.
    fn current_offset(&self) -> Option<usize> {
        let at = self.current_line()?;
        let section = self.doc.pages().get(at.page_index)?.section_at(at)?;
        section.lines.get(at.line_index).map(|l| l.raw_line.start)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Action> {
        match self.mode.clone() {
            Mode::Browse => return self.handle_browse_key(key),
            Mode::EditLine { at, mut buffer } => match key.code {
                KeyCode::Enter => self.commit_line(at, buffer),
                KeyCode::Esc => {
                    self.layout.end_edit(None);
                    self.mode = Mode::Browse;
                }
                code => {
                    edit_buffer(&mut buffer, code);
                    self.mode = Mode::EditLine { at, buffer };
                }
            },
            Mode::EditHeader { mut buffer } => match key.code {
                KeyCode::Enter => {
                    let page_number = self.page + 1;
                    let align = self.layout.header(page_number).align;
                    self.layout.set_header(page_number, PageHeader { text: buffer, align });
                    self.mode = Mode::Browse;
                }
                KeyCode::Esc => self.mode = Mode::Browse,
                code => {
                    edit_buffer(&mut buffer, code);
                    self.mode = Mode::EditHeader { buffer };
                }
            },
        }
        Ok(Action::Continue)
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Result<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Action::Quit);
        }
        match key.code {
            KeyCode::Char('q') => return Ok(Action::Quit),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => self.turn_page(1),
            KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => self.turn_page(-1),
            KeyCode::Enter => self.begin_line_edit(),
            KeyCode::Char('a') => {
                if let Some(key) = self.current_key() {
                    let align = self.layout.cycle_alignment(key);
                    self.status = format!("Line aligned {align:?}");
                }
            }
            KeyCode::Char('t') => {
                let buffer = self.layout.header(self.page + 1).text;
                self.mode = Mode::EditHeader { buffer };
            }
            KeyCode::Char('T') => {
                let mut header = self.layout.header(self.page + 1);
                header.align = header.align.next();
                self.layout.set_header(self.page + 1, header);
            }
            KeyCode::Char('H') => self.format_line(|at| Cmd::ToggleHeading { at }),
            KeyCode::Char('S') => self.format_line(|at| Cmd::ToggleSubheading { at }),
            KeyCode::Char('?') => self.format_line(|at| Cmd::MarkQuestion { at }),
            KeyCode::Char('s') => self.save()?,
            KeyCode::Char('e') => self.export()?,
            _ => {}
        }
        Ok(Action::Continue)
    }

    fn move_cursor(&mut self, delta: isize) {
        let lines = self
            .doc
            .pages()
            .get(self.page)
            .map_or(0, |p| p.line_count());
        if lines == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(lines - 1);
    }

    fn turn_page(&mut self, delta: isize) {
        let last = self.page_count().saturating_sub(1);
        let page = self.page.saturating_add_signed(delta).min(last);
        if page != self.page {
            self.page = page;
            self.cursor = 0;
        }
    }

    fn begin_line_edit(&mut self) {
        let (Some(at), Some(text)) = (self.current_line(), self.current_text()) else {
            return;
        };
        self.layout.begin_edit(self.doc.line_keys(), at);
        self.mode = Mode::EditLine { at, buffer: text };
    }

    fn commit_line(&mut self, at: LineIdentity, buffer: String) {
        let patch = self.doc.apply(Cmd::EditLine { at, text: buffer });
        self.layout.end_edit(Some(self.doc.line_keys()));
        self.mode = Mode::Browse;
        self.after_change(!patch.is_noop());
    }

    fn format_line(&mut self, cmd: impl FnOnce(usize) -> Cmd) {
        let Some(offset) = self.current_offset() else {
            return;
        };
        let patch = self.doc.apply(cmd(offset));
        self.after_change(!patch.is_noop());
    }

    fn after_change(&mut self, changed: bool) {
        if changed {
            self.dirty = true;
        }
        self.layout.retain_live(self.doc.line_keys());
        self.page = self.page.min(self.page_count().saturating_sub(1));
        self.move_cursor(0);
    }

    fn save(&mut self) -> Result<()> {
        io::write_document(&self.path, &self.doc.text())?;
        self.dirty = false;
        self.status = format!("Saved {}", self.path.display());
        log::info!("saved {}", self.path.display());
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        let mut sink = TextFileSink::create(&self.export_path)?;
        let n = export_pages(self.doc.pages(), &self.layout, &self.options, &mut sink)?;
        self.status = format!("Exported {n} sheets to {}", self.export_path.display());
        Ok(())
    }

    /// Header and line alignments of the current page.
    pub fn page_meta(&self) -> PageMeta {
        self.layout.page_meta(self.doc.line_keys(), self.page)
    }

    /// Alignment of every line on the current page.
    pub fn alignments(&self) -> Vec<Alignment> {
        self.page_meta().line_alignments
    }
}

fn edit_buffer(buffer: &mut String, code: KeyCode) {
    match code {
        KeyCode::Char(c) => buffer.push(c),
        KeyCode::Backspace => {
            buffer.pop();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn app(text: &str) -> App {
        App::new(
            PathBuf::from("note.md"),
            text,
            PageCapacity::new(3, 60),
            PaperStyle::Ruled,
        )
    }

    fn press(app: &mut App, code: KeyCode) -> Action {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn edit_line_round_trip() {
        let mut app = app("# Title\nbody\n");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(&app.mode, Mode::EditLine { buffer, .. } if buffer == "Title"));

        for _ in 0..5 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "Notes");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.doc.text(), "# Notes\nbody\n");
        assert!(app.dirty);
    }

    #[test]
    fn escape_cancels_edit() {
        let mut app = app("line\n");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "xyz");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.doc.text(), "line\n");
        assert_eq!(app.layout.editing(), None);
        assert!(!app.dirty);
    }

    #[test]
    fn formatting_keys_apply_to_current_line() {
        let mut app = app("first\nsecond\n");
        press(&mut app, KeyCode::Char('H'));
        assert_eq!(app.doc.text(), "# first\nsecond\n");

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.doc.text(), "# first\nsecond?\n");

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char('S'));
        assert_eq!(app.doc.text(), "## first\nsecond?\n");
    }

    #[test]
    fn cursor_and_pages_are_clamped() {
        let mut app = app("1\n2\n3\n4\n5\n");
        assert_eq!(app.page_count(), 2);
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.cursor, 2);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!((app.page, app.cursor), (1, 0));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.page, 0);
    }

    #[test]
    fn alignment_and_header_keys() {
        let mut app = app("line\n");
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.alignments(), vec![Alignment::Center]);

        press(&mut app, KeyCode::Char('t'));
        type_text(&mut app, "Week 1");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('T'));
        assert_eq!(
            app.layout.header(1),
            PageHeader {
                text: "Week 1".into(),
                align: Alignment::Center,
            }
        );
    }

    #[test]
    fn editing_a_line_keeps_alignment_of_its_neighbours() {
        let mut app = app("alpha\nbeta\ngamma\n");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('a'));

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "!");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.doc.text(), "alpha!\nbeta\ngamma\n");
        assert_eq!(
            app.alignments(),
            vec![Alignment::Left, Alignment::Left, Alignment::Center]
        );
    }

    #[test]
    fn save_and_export_write_files() {
        let dir = TempDir::new().unwrap();
        let mut app = app("# Saved\n");
        app.path = dir.path().join("note.md");
        app.export_path = dir.path().join("note.sheets.txt");
        app.dirty = true;

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('e'));

        assert!(!app.dirty);
        assert_eq!(std::fs::read_to_string(&app.path).unwrap(), "# Saved\n");
        let sheets = std::fs::read_to_string(&app.export_path).unwrap();
        assert!(sheets.contains("Saved"));
        assert!(sheets.contains("Page 1 of 1"));
    }

    #[test]
    fn quit_keys() {
        let mut app = app("");
        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c).unwrap(), Action::Quit);
    }
}

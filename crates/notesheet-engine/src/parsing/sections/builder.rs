use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    content::ContentLine,
    kinds::Table,
    open::try_open_line,
    types::{Section, SectionKind},
};

/// Lines collected for a section that is still open.
#[derive(Debug, Clone)]
struct Pending {
    span: Span,
    lines: Vec<ContentLine>,
    text: String,
}

impl Pending {
    fn starting_at(line: Span) -> Self {
        Self {
            span: Span::empty_at(line.start),
            lines: vec![],
            text: String::new(),
        }
    }

    fn push(&mut self, c: &LineClass, line: ContentLine) {
        self.text.push_str(c.slice(line.content));
        self.text.push_str(c.slice(line.ending));
        self.lines.push(line);
        self.span = self.span.cover(c.line);
    }

    /// Extends the covered range without adding a displayed line (fences).
    fn cover(&mut self, line: Span) {
        self.span = self.span.cover(line);
    }

    fn into_section(self, kind: SectionKind) -> Section {
        Section {
            kind,
            text: self.text,
            span: self.span,
            lines: self.lines,
        }
    }
}

/// Which kind of paragraph-like run is accumulating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    Text,
    List,
}

impl Run {
    fn kind(self) -> SectionKind {
        match self {
            Run::Text => SectionKind::Text,
            Run::List => SectionKind::ListItem,
        }
    }
}

/// The scanner state. At most one pending buffer exists at any time.
#[derive(Debug, Clone)]
enum ScanState {
    Normal,
    Accumulating { run: Run, buf: Pending },
    InCode { language: String, buf: Pending },
    InTable { headers: Vec<String>, buf: Pending },
}

/// Phase 2 of sectioning: turns classified lines into [`Section`]s.
pub struct SectionBuilder {
    state: ScanState,
    out: Vec<Section>,
}

impl SectionBuilder {
    pub fn new() -> Self {
        Self {
            state: ScanState::Normal,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if matches!(self.state, ScanState::InCode { .. }) {
            self.consume_code_line(c);
            return;
        }

        if matches!(self.state, ScanState::InTable { .. }) {
            if c.is_table_row {
                self.extend_table(c);
                return;
            }
            // The row that ends a table is classified from scratch.
            self.flush();
        }

        if let Some(sig) = &c.fence {
            self.flush();
            let mut buf = Pending::starting_at(c.line);
            buf.cover(c.line);
            self.state = ScanState::InCode {
                language: sig.language.clone(),
                buf,
            };
            return;
        }

        if c.is_table_row {
            self.flush();
            let mut buf = Pending::starting_at(c.line);
            buf.push(c, ContentLine::verbatim(c.line, c.ending));
            self.state = ScanState::InTable {
                headers: Table::header_cells(c.body_text()),
                buf,
            };
            return;
        }

        if c.is_blank {
            self.push_blank(c);
            return;
        }

        match try_open_line(c) {
            Some(open) if open.kind == SectionKind::ListItem => self.extend_run(Run::List, c),
            Some(open) => {
                self.flush();
                let line = ContentLine {
                    raw_line: c.line,
                    content: open.content,
                    ending: c.ending,
                };
                let mut buf = Pending::starting_at(c.line);
                buf.push(c, line);
                self.out.push(buf.into_section(open.kind));
            }
            None => self.extend_run(Run::Text, c),
        }
    }

    pub fn finish(mut self) -> Vec<Section> {
        // EOF flush: open paragraphs, tables and unterminated fences are all
        // emitted rather than dropped.
        self.flush();
        self.out
    }

    fn consume_code_line(&mut self, c: &LineClass) {
        let ScanState::InCode { buf, .. } = &mut self.state else {
            return;
        };
        if c.fence.is_some() {
            buf.cover(c.line);
            self.flush();
        } else {
            buf.push(c, ContentLine::verbatim(c.line, c.ending));
        }
    }

    fn extend_table(&mut self, c: &LineClass) {
        if let ScanState::InTable { buf, .. } = &mut self.state {
            buf.push(c, ContentLine::verbatim(c.line, c.ending));
        }
    }

    fn extend_run(&mut self, run: Run, c: &LineClass) {
        let line = ContentLine::verbatim(c.line, c.ending);
        if let ScanState::Accumulating { run: open, buf } = &mut self.state
            && *open == run
        {
            buf.push(c, line);
            return;
        }
        self.flush();
        let mut buf = Pending::starting_at(c.line);
        buf.push(c, line);
        self.state = ScanState::Accumulating { run, buf };
    }

    /// A blank line closes an open run (and belongs to it); on its own it
    /// becomes a one-line spacer section.
    fn push_blank(&mut self, c: &LineClass) {
        let line = ContentLine::verbatim(c.line, c.ending);
        if let ScanState::Accumulating { buf, .. } = &mut self.state {
            buf.push(c, line);
            self.flush();
            return;
        }
        let mut buf = Pending::starting_at(c.line);
        buf.push(c, line);
        self.out.push(buf.into_section(SectionKind::Text));
    }

    fn flush(&mut self) {
        let section = match std::mem::replace(&mut self.state, ScanState::Normal) {
            ScanState::Normal => return,
            ScanState::Accumulating { run, buf } => buf.into_section(run.kind()),
            ScanState::InCode { language, buf } => buf.into_section(SectionKind::Code { language }),
            ScanState::InTable { headers, buf } => buf.into_section(SectionKind::Table { headers }),
        };
        self.out.push(section);
    }
}

impl Default for SectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! notesheet - lecture notes laid out as handwritten paper sheets

mod app;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use notesheet_config::{Config, Pen};
use notesheet_engine::{
    LayoutState, NoteDocument, Page, PageMeta, SheetOptions, TextFileSink, export_pages, io,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Serialize;
use std::{
    io::{Stdout, stdout},
    path::PathBuf,
};

use app::{Action, App};

#[derive(Parser)]
#[command(name = "notesheet")]
#[command(version, about = "Lecture notes on paper sheets", long_about = None)]
#[command(after_help = "EXAMPLES:
    notesheet week1.md                       Open a note in the sheet view
    notesheet week1.md --export week1.txt    Write every sheet to a text file
    notesheet week1.md --dump-json           Print the paginated layout as JSON
    notesheet week1.md --init-config         Save week1.md as the default note")]
struct Cli {
    /// Markdown note to open (defaults to document_path from the config file)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Export all sheets to this file and exit
    #[arg(short, long, value_name = "OUT", conflicts_with = "dump_json")]
    export: Option<PathBuf>,

    /// Print pages and their layout metadata as JSON and exit
    #[arg(long)]
    dump_json: bool,

    /// Write the config file (FILE becomes document_path) and exit
    #[arg(long, conflicts_with_all = ["export", "dump_json"])]
    init_config: bool,
}

#[derive(Serialize)]
struct PageDump<'a> {
    page: &'a Page,
    meta: PageMeta,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config_path = Config::config_path();
    let mut config = Config::load()
        .with_context(|| format!("Failed to load config file {}", config_path.display()))?
        .unwrap_or_default();

    if cli.init_config {
        if let Some(file) = cli.file {
            config.document_path = Some(std::path::absolute(file)?);
        }
        config.save()?;
        eprintln!("Wrote {}", config_path.display());
        return Ok(());
    }

    let path = cli.file.or(config.document_path.clone()).with_context(|| {
        format!(
            "No note file given and no document_path in {}",
            config_path.display()
        )
    })?;

    let text = match io::read_document(&path) {
        Ok(text) => text,
        Err(io::IoError::NotFound(_)) => {
            log::info!("{} does not exist yet, starting empty", path.display());
            String::new()
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to open {}", path.display())),
    };

    let capacity = config.geometry.capacity();
    log::debug!(
        "page capacity: {} lines, {} chars",
        capacity.lines_per_page,
        capacity.chars_per_page
    );

    if cli.dump_json {
        let doc = NoteDocument::new(&text, capacity);
        let layout = LayoutState::new();
        let dump: Vec<PageDump> = doc
            .pages()
            .iter()
            .enumerate()
            .map(|(i, page)| PageDump {
                page,
                meta: layout.page_meta(doc.line_keys(), i),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    if let Some(out) = cli.export {
        let doc = NoteDocument::new(&text, capacity);
        let options = SheetOptions::new(config.paper_style, capacity);
        let mut sink = TextFileSink::create(&out)?;
        let n = export_pages(doc.pages(), &LayoutState::new(), &options, &mut sink)?;
        eprintln!("Exported {n} sheets to {}", out.display());
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(path, &text, capacity, config.paper_style);

    // Main loop
    let res = run_app(&mut terminal, &mut app, &config.pen);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }
    if app.dirty {
        eprintln!("Unsaved changes to {} were discarded", app.path.display());
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    pen: &Pen,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app, pen))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.handle_key(key) {
                Ok(Action::Quit) => return Ok(()),
                Ok(Action::Continue) => {}
                Err(e) => {
                    log::error!("{e:#}");
                    app.status = format!("Error: {e:#}");
                }
            }
        }
    }
}

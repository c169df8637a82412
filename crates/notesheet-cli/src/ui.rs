use notesheet_config::Pen;
use notesheet_engine::{FontFamily, render_sheet};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Mode};

/// `#rrggbb` to a terminal color. Anything else falls back to blue ink.
pub fn pen_color(color: &str) -> Color {
    let parse = |range: std::ops::Range<usize>| {
        color
            .get(1..)
            .and_then(|hex| hex.get(range))
            .and_then(|h| u8::from_str_radix(h, 16).ok())
    };
    match (parse(0..2), parse(2..4), parse(4..6)) {
        (Some(r), Some(g), Some(b)) if color.len() == 7 => Color::Rgb(r, g, b),
        _ => Color::Blue,
    }
}

pub fn ui(f: &mut Frame, app: &App, pen: &Pen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    let ink = pen_color(&pen.color);
    let sheet = sheet_lines(app, ink);
    let title = format!(
        " {}{} ({}, {:?} paper) ",
        app.path.display(),
        if app.dirty { " *" } else { "" },
        pen.font,
        app.options.paper_style
    );
    let page = Paragraph::new(sheet).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(page, chunks[0]);

    let status = match &app.mode {
        Mode::Browse => app.status.clone(),
        Mode::EditLine { .. } => "Editing line: Enter to commit, Esc to cancel".to_string(),
        Mode::EditHeader { buffer } => format!("Header: {buffer}"),
    };
    f.render_widget(Paragraph::new(Line::from(status)), chunks[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | ↑↓: Line | ←→: Page | Enter: Edit | "),
        Span::raw("a: Align | t/T: Header | H/S/?: Format | s: Save | e: Export"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[2]);
}

/// The current page rendered as a sheet, with the cursor row highlighted
/// and each body row styled after its section.
fn sheet_lines(app: &App, ink: Color) -> Vec<Line<'static>> {
    let Some(page) = app.doc.pages().get(app.page) else {
        return vec![];
    };
    let sheet = render_sheet(page, &app.page_meta(), app.page_count(), &app.options);
    let identities = page.line_identities(app.page);
    let margin = app.options.paper_style.margin();

    sheet
        .lines()
        .enumerate()
        .map(|(row, text)| {
            // Row 0 is the header; body rows follow.
            let body = row.checked_sub(1).and_then(|i| identities.get(i).map(|at| (i, at)));
            let Some((i, at)) = body else {
                return Line::styled(text.to_string(), Style::default().fg(Color::DarkGray));
            };

            let mut style = Style::default().fg(ink);
            if let Some(section) = page.section_at(*at) {
                let s = section.style();
                if s.bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if s.color.is_some() {
                    style = style.fg(Color::White);
                }
                if s.family == FontFamily::Mono {
                    style = style.fg(Color::Gray);
                }
            }

            if i == app.cursor {
                if let Mode::EditLine { buffer, .. } = &app.mode {
                    return Line::from(vec![
                        Span::raw(margin.to_string()),
                        Span::styled(
                            format!("{buffer}▏"),
                            style.add_modifier(Modifier::UNDERLINED),
                        ),
                    ]);
                }
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::styled(text.to_string(), style)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#2563eb", Color::Rgb(0x25, 0x63, 0xeb))]
    #[case("#000000", Color::Rgb(0, 0, 0))]
    #[case("blue", Color::Blue)]
    #[case("#12345", Color::Blue)]
    #[case("#1234567", Color::Blue)]
    fn parses_pen_colors(#[case] color: &str, #[case] expected: Color) {
        assert_eq!(pen_color(color), expected);
    }
}

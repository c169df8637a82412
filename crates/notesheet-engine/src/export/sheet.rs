//! Rendering one page as a fixed-size text sheet.

use serde::{Deserialize, Serialize};

use crate::{
    editing::{Alignment, PageMeta},
    paging::{Page, PageCapacity},
    parsing::inline::strip_markup,
};

/// Background of the sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperStyle {
    #[default]
    Ruled,
    Grid,
    Blank,
}

impl PaperStyle {
    /// Left margin drawn before every row. Blank paper has none.
    pub fn margin(self) -> &'static str {
        match self {
            PaperStyle::Ruled => "   | ",
            PaperStyle::Grid => "   + ",
            PaperStyle::Blank => "",
        }
    }

    /// How an unused row of the sheet looks.
    fn empty_row(self, width: usize) -> String {
        match self {
            PaperStyle::Ruled => "_".repeat(width),
            PaperStyle::Grid => ". ".repeat(width.div_ceil(2)).chars().take(width).collect(),
            PaperStyle::Blank => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetOptions {
    pub paper_style: PaperStyle,
    /// Body rows per sheet. Overflowing code or tables add rows.
    pub lines_per_page: usize,
    pub chars_per_line: usize,
}

impl SheetOptions {
    pub fn new(paper_style: PaperStyle, capacity: PageCapacity) -> Self {
        Self {
            paper_style,
            lines_per_page: capacity.lines_per_page,
            chars_per_line: capacity.chars_per_line(),
        }
    }
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self::new(PaperStyle::default(), PageCapacity::default())
    }
}

/// Renders `page` (one of `total` pages) as newline-separated rows:
/// header, body rows, footer. `meta` supplies the header and line
/// alignments.
///
/// Inline markup is stripped from ordinary lines; code and table lines are
/// printed verbatim.
pub fn render_sheet(
    page: &Page,
    meta: &PageMeta,
    total: usize,
    options: &SheetOptions,
) -> String {
    let width = options.chars_per_line;
    let margin = options.paper_style.margin();

    let body: Vec<String> = page
        .sections
        .iter()
        .flat_map(|p| {
            let raw = p.section.kind.is_raw_zone();
            p.section.line_texts().map(move |line| {
                if raw {
                    line.to_string()
                } else {
                    strip_markup(line)
                }
            })
        })
        .collect();

    let mut rows = Vec::with_capacity(options.lines_per_page.max(body.len()) + 2);
    rows.push(align(&meta.header.text, meta.header.align, width + margin.len()));
    for (i, line) in body.iter().enumerate() {
        let align_to = meta.line_alignments.get(i).copied().unwrap_or_default();
        rows.push(format!("{margin}{}", align(line, align_to, width)));
    }
    for _ in body.len()..options.lines_per_page {
        rows.push(format!("{margin}{}", options.paper_style.empty_row(width)));
    }
    rows.push(align(
        &format!("Page {} of {}", page.page_number, total),
        Alignment::Center,
        width + margin.len(),
    ));

    rows.iter()
        .map(|row| row.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pads `text` to `width` characters. Longer text is left as is.
fn align(text: &str, alignment: Alignment, width: usize) -> String {
    let len = text.chars().count();
    let room = width.saturating_sub(len);
    let left = match alignment {
        Alignment::Left => 0,
        Alignment::Center => room / 2,
        Alignment::Right => room,
    };
    format!("{}{text}", " ".repeat(left))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        editing::{LayoutState, LineKeys, PageHeader},
        paging::{LineIdentity, paginate},
        parsing::classify,
    };
    use pretty_assertions::assert_eq;

    fn rows(sheet: &str) -> Vec<&str> {
        sheet.split('\n').collect()
    }

    #[test]
    fn ruled_sheet_with_header_and_footer() {
        let pages = paginate(&classify("# **Title**\nsome *text*\n"), PageCapacity::new(4, 48));
        let mut layout = LayoutState::new();
        layout.set_header(
            1,
            PageHeader {
                text: "Week 1".into(),
                align: Alignment::Right,
            },
        );
        let options = SheetOptions {
            paper_style: PaperStyle::Ruled,
            lines_per_page: 4,
            chars_per_line: 12,
        };
        let meta = layout.page_meta(&LineKeys::new(&pages), 0);
        let sheet = render_sheet(&pages[0], &meta, 1, &options);
        assert_eq!(
            rows(&sheet),
            vec![
                "           Week 1",
                "   | Title",
                "   | some text",
                "   | ____________",
                "   | ____________",
                "   Page 1 of 1",
            ]
        );
    }

    #[test]
    fn line_alignment_on_blank_paper() {
        let pages = paginate(&classify("mid\n"), PageCapacity::new(2, 24));
        let mut layout = LayoutState::new();
        let keys = LineKeys::new(&pages);
        layout.set_alignment(keys.get(LineIdentity::new(0, 0, 0)).unwrap(), Alignment::Center);
        let options = SheetOptions {
            paper_style: PaperStyle::Blank,
            lines_per_page: 2,
            chars_per_line: 12,
        };
        let sheet = render_sheet(&pages[0], &layout.page_meta(&keys, 0), 3, &options);
        assert_eq!(rows(&sheet), vec!["", "    mid", "", "Page 1 of 3"]);
    }

    #[test]
    fn code_is_verbatim_and_may_overflow() {
        let pages = paginate(
            &classify("```\n**a**\n**b**\n**c**\n```\n"),
            PageCapacity::new(2, 24),
        );
        let options = SheetOptions {
            paper_style: PaperStyle::Grid,
            lines_per_page: 2,
            chars_per_line: 6,
        };
        let meta = LayoutState::new().page_meta(&LineKeys::new(&pages), 0);
        let sheet = render_sheet(&pages[0], &meta, 1, &options);
        assert_eq!(
            rows(&sheet),
            vec!["", "   + **a**", "   + **b**", "   + **c**", "Page 1 of 1"]
        );
    }

    #[test]
    fn grid_rows_alternate_dots() {
        assert_eq!(PaperStyle::Grid.empty_row(5), ". . .");
        assert_eq!(PaperStyle::Blank.empty_row(5), "");
    }

    #[test]
    fn options_follow_capacity() {
        let options = SheetOptions::default();
        assert_eq!(options.lines_per_page, 30);
        assert_eq!(options.chars_per_line, 36);
        assert_eq!(options.paper_style, PaperStyle::Ruled);
    }
}

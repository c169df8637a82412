use serde::{Deserialize, Serialize};

/// Physical page layout in page units (A4 at 72 units per inch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    pub page_width: u32,
    pub page_height: u32,
    /// Strip reserved at the top for the page header.
    pub header_height: u32,
    /// Strip reserved at the bottom for the page number.
    pub footer_height: u32,
    pub line_height: u32,
    /// Approximate characters of handwriting per line.
    pub chars_per_line: u32,
}

impl PageGeometry {
    pub const A4_WIDTH: u32 = 595;
    pub const A4_HEIGHT: u32 = 842;

    /// Lines and characters that fit between header and footer.
    pub fn capacity(&self) -> PageCapacity {
        let usable = self
            .page_height
            .saturating_sub(self.header_height + self.footer_height);
        let lines = (usable / self.line_height.max(1)).max(1) as usize;
        PageCapacity::new(lines, lines * self.chars_per_line.max(1) as usize)
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_width: Self::A4_WIDTH,
            page_height: Self::A4_HEIGHT,
            header_height: 50,
            footer_height: 72,
            line_height: 24,
            chars_per_line: 36,
        }
    }
}

/// Heuristic capacity of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCapacity {
    pub lines_per_page: usize,
    pub chars_per_page: usize,
}

impl PageCapacity {
    /// Both limits are clamped to at least 1.
    pub fn new(lines_per_page: usize, chars_per_page: usize) -> Self {
        Self {
            lines_per_page: lines_per_page.max(1),
            chars_per_page: chars_per_page.max(1),
        }
    }

    pub fn chars_per_line(&self) -> usize {
        (self.chars_per_page / self.lines_per_page).max(1)
    }
}

impl Default for PageCapacity {
    fn default() -> Self {
        PageGeometry::default().capacity()
    }
}

use crate::parsing::sections::Section;

use super::{
    geometry::PageCapacity,
    split::{lines_that_fit, split_at_line, split_long_line},
    types::{Page, PlacedSection},
};

/// Packs sections into pages.
///
/// Greedy single pass over `sections`. Page-relative `start_index` values
/// are assigned as sections are placed.
pub fn paginate(sections: &[Section], capacity: PageCapacity) -> Vec<Page> {
    let mut pager = Pager::new(capacity);
    for section in sections {
        pager.push(section.clone());
    }
    let pages = pager.finish();
    log::trace!("paginated {} sections into {} pages", sections.len(), pages.len());
    pages
}

/// Incremental page packer holding the page under construction.
pub struct Pager {
    capacity: PageCapacity,
    pages: Vec<Page>,
    current: Vec<PlacedSection>,
    lines: usize,
    chars: usize,
}

impl Pager {
    pub fn new(capacity: PageCapacity) -> Self {
        Self {
            capacity,
            pages: vec![],
            current: vec![],
            lines: 0,
            chars: 0,
        }
    }

    pub fn push(&mut self, section: Section) {
        if section.kind.is_unsplittable() {
            self.push_block(section);
        } else {
            self.push_flow(section);
        }
    }

    /// Seals the last page. Always returns at least one page.
    pub fn finish(mut self) -> Vec<Page> {
        self.seal();
        if self.pages.is_empty() {
            self.pages.push(Page::empty(1));
        }
        self.pages
    }

    /// Code and tables move to a fresh page when they don't fit, and are
    /// never split even if they overflow that page.
    fn push_block(&mut self, section: Section) {
        if !self.current.is_empty() && !self.fits(&section) {
            self.seal();
        }
        if !self.fits_empty_page(&section) {
            log::debug!(
                "{} block of {} lines overflows page {} (capacity {})",
                section.kind.tag(),
                section.line_count(),
                self.pages.len() + 1,
                self.capacity.lines_per_page
            );
        }
        self.place(section);
    }

    fn push_flow(&mut self, mut section: Section) {
        loop {
            if self.fits(&section) {
                self.place(section);
                return;
            }
            if !self.current.is_empty() && self.fits_empty_page(&section) {
                self.seal();
                self.place(section);
                return;
            }

            // Larger than a whole page: fill what is left of this one.
            let room_lines = self.capacity.lines_per_page.saturating_sub(self.lines);
            let room_chars = self.capacity.chars_per_page.saturating_sub(self.chars);
            let n = lines_that_fit(&section, room_lines, room_chars);
            let split = if n > 0 {
                split_at_line(&section, n)
            } else if self.current.is_empty() {
                split_long_line(&section, room_chars)
            } else {
                None
            };

            match split {
                Some((head, tail)) => {
                    log::debug!(
                        "split {} section at byte {} across pages {} and {}",
                        head.kind.tag(),
                        tail.span.start,
                        self.pages.len() + 1,
                        self.pages.len() + 2
                    );
                    self.place(head);
                    self.seal();
                    section = tail;
                }
                None if self.current.is_empty() => {
                    log::debug!(
                        "unsplittable line of {} chars overflows page",
                        section.char_count()
                    );
                    self.place(section);
                    return;
                }
                None => self.seal(),
            }
        }
    }

    fn fits(&self, section: &Section) -> bool {
        self.lines + section.line_count() <= self.capacity.lines_per_page
            && self.chars + section.char_count() <= self.capacity.chars_per_page
    }

    fn fits_empty_page(&self, section: &Section) -> bool {
        section.line_count() <= self.capacity.lines_per_page
            && section.char_count() <= self.capacity.chars_per_page
    }

    fn place(&mut self, section: Section) {
        let start_index = self.chars;
        self.lines += section.line_count();
        self.chars += section.char_count();
        self.current.push(PlacedSection {
            section,
            start_index,
        });
    }

    fn seal(&mut self) {
        if self.current.is_empty() {
            return;
        }
        self.pages.push(Page {
            page_number: self.pages.len() + 1,
            sections: std::mem::take(&mut self.current),
        });
        self.lines = 0;
        self.chars = 0;
    }
}

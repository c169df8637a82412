/// A byte cursor over an inline string with absolute position tracking.
///
/// `base` is added to the local index so produced spans can be relative to
/// a line, a section or the whole document as the caller needs.
#[derive(Clone)]
pub struct Cursor<'a> {
    pub s: &'a str,
    pub base: usize,
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Current absolute position.
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn starts_with(&self, pat: &str) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat.as_bytes())
    }

    /// The byte just before the cursor, if any.
    pub fn prev(&self) -> Option<u8> {
        self.i.checked_sub(1).map(|j| self.s.as_bytes()[j])
    }

    /// Local index of the next occurrence of `pat` at or after the cursor.
    pub fn find(&self, pat: &str) -> Option<usize> {
        self.s[self.i..].find(pat).map(|off| self.i + off)
    }

    /// Advances past the current character (not just one byte).
    pub fn bump_char(&mut self) {
        let step = self.s[self.i..].chars().next().map_or(1, char::len_utf8);
        self.i += step;
    }

    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}

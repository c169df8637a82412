use crate::parsing::inline::kinds::Bold;

/// Heading markers. `# ` and `## ` prefixes, or a bold-wrapped line.
pub struct Heading;

impl Heading {
    pub const H1: &'static str = "# ";
    pub const H2: &'static str = "## ";
    /// Bold-wrapped lines containing this character are not headings.
    pub const NOT_IN_BOLD_HEADING: char = ':';

    /// Returns the byte range of the inner text when `trimmed` is a single
    /// `**...**` pair with non-empty content.
    pub fn bold_inner(trimmed: &str) -> Option<std::ops::Range<usize>> {
        let d = Bold::DELIM.len();
        if trimmed.len() > 2 * d
            && trimmed.starts_with(Bold::DELIM)
            && trimmed.ends_with(Bold::DELIM)
        {
            Some(d..trimmed.len() - d)
        } else {
            None
        }
    }

    /// A bold-wrapped line without a colon reads as a main heading.
    pub fn is_bold_heading(trimmed: &str) -> bool {
        Self::bold_inner(trimmed).is_some() && !trimmed.contains(Self::NOT_IN_BOLD_HEADING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_inner_requires_content() {
        assert_eq!(Heading::bold_inner("**Intro**"), Some(2..7));
        assert_eq!(Heading::bold_inner("****"), None);
        assert_eq!(Heading::bold_inner("**open"), None);
    }

    #[test]
    fn colon_disqualifies_bold_heading() {
        assert!(Heading::is_bold_heading("**Chapter One**"));
        assert!(!Heading::is_bold_heading("**Note: read me**"));
    }
}

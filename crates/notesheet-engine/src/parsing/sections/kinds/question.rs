use std::sync::OnceLock;

use regex::Regex;

/// Question lines: numbered (`Q3. ...`) or ending in a question mark.
pub struct Question;

impl Question {
    pub const MARK: char = '?';
    /// Trailing-`?` questions must be shorter than this (in characters).
    pub const MAX_LEN: usize = 100;

    /// `Q<digits>. ` at the start, optionally behind an opening `**`.
    pub fn is_numbered(trimmed: &str) -> bool {
        static NUMBERED_REGEX: OnceLock<Regex> = OnceLock::new();
        NUMBERED_REGEX
            .get_or_init(|| {
                Regex::new(r"^(?:\*\*)?Q[0-9]+\. ").expect("Invalid numbered question regex")
            })
            .is_match(trimmed)
    }

    pub fn is_trailing(trimmed: &str) -> bool {
        trimmed.ends_with(Self::MARK) && trimmed.chars().count() < Self::MAX_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_question_plain_and_bold() {
        assert!(Question::is_numbered("Q1. What is a stack"));
        assert!(Question::is_numbered("**Q12. Define entropy.**"));
        assert!(!Question::is_numbered("Q. missing number"));
        assert!(!Question::is_numbered("Q1.no space"));
    }

    #[test]
    fn trailing_question_length_limit() {
        assert!(Question::is_trailing("Hello?"));
        let long = format!("{}?", "a".repeat(99));
        assert!(!Question::is_trailing(&long));
        let short = format!("{}?", "a".repeat(98));
        assert!(Question::is_trailing(&short));
    }
}

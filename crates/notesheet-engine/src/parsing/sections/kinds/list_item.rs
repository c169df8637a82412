use std::sync::OnceLock;

use regex::Regex;

/// Numbered list items (`1. first`).
pub struct ListItem;

impl ListItem {
    pub fn matches(trimmed: &str) -> bool {
        static LIST_REGEX: OnceLock<Regex> = OnceLock::new();
        LIST_REGEX
            .get_or_init(|| Regex::new(r"^[0-9]+\. ").expect("Invalid list item regex"))
            .is_match(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_items() {
        assert!(ListItem::matches("1. first"));
        assert!(ListItem::matches("42. answer"));
        assert!(!ListItem::matches("1.no space"));
        assert!(!ListItem::matches("- bullet"));
    }
}

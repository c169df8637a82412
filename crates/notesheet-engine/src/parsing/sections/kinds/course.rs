use std::sync::OnceLock;

use regex::Regex;

/// Course header lines such as `CS 101: Intro to Computing`.
pub struct Course;

impl Course {
    pub fn matches(trimmed: &str) -> bool {
        static COURSE_REGEX: OnceLock<Regex> = OnceLock::new();
        COURSE_REGEX
            .get_or_init(|| Regex::new(r"^[A-Z]{2,4} [0-9]{3}:").expect("Invalid course regex"))
            .is_match(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("CS 101: Intro", true)]
    #[case("MATH 221: Linear Algebra", true)]
    #[case("CS 101:", true)]
    #[case("C 101: too short", false)]
    #[case("ABCDE 101: too long", false)]
    #[case("cs 101: lowercase", false)]
    #[case("CS 1010: four digits", false)]
    #[case("CS 101 no colon", false)]
    fn course_pattern(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(Course::matches(line), expected);
    }
}

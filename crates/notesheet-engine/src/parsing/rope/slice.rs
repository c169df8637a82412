/// Truncates `s` to at most `max` characters, appending "..." when cut.
///
/// Used for snapshot listings.
pub fn preview(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

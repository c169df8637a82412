/// Bold markup. Also used by the sectioner to recognize bold-wrapped
/// headings and numbered questions.
pub struct Bold;

impl Bold {
    pub const DELIM: &'static str = "**";
}

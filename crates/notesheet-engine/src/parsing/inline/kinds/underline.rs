pub struct Underline;

impl Underline {
    pub const DELIM: &'static str = "__";
}

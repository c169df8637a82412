pub struct Italic;

impl Italic {
    pub const STAR: &'static str = "*";
    pub const UNDERSCORE: &'static str = "_";
}

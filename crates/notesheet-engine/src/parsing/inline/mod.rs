//! # Inline Markup
//!
//! Cursor-based parsing of bold, italic and underline markup inside a
//! section line. Flat: markup does not nest, and unclosed delimiters stay
//! plain text. Code and table sections are raw zones and are never parsed.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{parse_inline, strip_markup};
pub use types::InlineNode;

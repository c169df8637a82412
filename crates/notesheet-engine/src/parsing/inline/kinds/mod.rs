//! # Inline Kinds
//!
//! Inline markup types that own their delimiters.
//!
//! - **`Bold`**: `**text**`
//! - **`Underline`**: `__text__`
//! - **`Italic`**: `*text*` or `_text_`
//!
//! The parser tries longer delimiters first, so `**` is never read as two
//! italic markers.

pub mod bold;
pub mod italic;
pub mod underline;

pub use bold::Bold;
pub use italic::Italic;
pub use underline::Underline;

//! Section kinds owning their syntax knowledge (markers, patterns, limits).
//!
//! The classifier and builder ask these types; they never hardcode
//! delimiters themselves.

pub mod code_fence;
pub mod course;
pub mod heading;
pub mod list_item;
pub mod question;
pub mod table;

pub use code_fence::{CodeFence, FenceSig};
pub use course::Course;
pub use heading::Heading;
pub use list_item::ListItem;
pub use question::Question;
pub use table::Table;

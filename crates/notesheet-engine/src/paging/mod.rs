//! # Paging
//!
//! Greedy bin packing of sections into fixed-capacity pages.
//!
//! - **`geometry`**: `PageGeometry` (page units) → `PageCapacity` (lines, chars)
//! - **`types`**: `Page`, `PlacedSection`, `LineIdentity`
//! - **`split`**: dividing ordinary sections larger than a page
//! - **`pager`**: `paginate` and the incremental `Pager`
//!
//! ## Rules
//!
//! - Code and tables are never split; they move to a new page when they
//!   don't fit and may overflow it alone.
//! - Other sections move whole to a new page when they don't fit, and are
//!   split across pages only when larger than an entire page.
//! - `start_index` is page-relative; document offsets live on each
//!   section's `ContentLine`s.

pub mod geometry;
pub mod pager;
pub mod split;
pub mod types;

pub use geometry::{PageCapacity, PageGeometry};
pub use pager::{Pager, paginate};
pub use types::{LineIdentity, Page, PlacedSection};

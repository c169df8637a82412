//! # Snapshot Testing Support
//!
//! - **`normalize`**: renders sections or pages as a stable, line-per-item
//!   listing for `insta` snapshots
//! - **`invariants`**: runtime checks of classifier and pager output
//!   (spans in bounds and ordered, text agreeing with line spans, page
//!   numbering contiguous)

pub mod invariants;
pub mod normalize;

pub use invariants::{check as invariants, check_pages as page_invariants};
pub use normalize::{normalize, normalize_pages};

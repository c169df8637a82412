//! # Sectioning
//!
//! Two-phase classification of raw text into typed sections.
//!
//! ## Phases
//!
//! 1. **Line classification** (`classify`): each line becomes a `LineClass`
//!    of local facts (spans, blank flag, fence signature, table-row test).
//! 2. **Section construction** (`builder`): a `SectionBuilder` runs one
//!    explicit scanner state (normal, accumulating, in code, in table) and
//!    emits `Section`s in document order.
//!
//! ## Modules
//!
//! - **`types`**: `Section`, `SectionKind`
//! - **`style`**: `SectionStyle` derived from the kind
//! - **`content`**: `ContentLine`, per-line document-relative spans
//! - **`kinds`**: marker and pattern knowledge per kind
//! - **`open`**: `try_open_line`, single-line openers in precedence order
//! - **`classify`**, **`builder`**: the two phases
//!
//! ## Key Invariants
//!
//! - Fence bodies are raw zones: never reclassified
//! - Sections appear in document order with non-overlapping spans
//! - A section's `text` is exactly its lines' content plus line breaks

pub mod builder;
pub mod classify;
pub mod content;
pub mod kinds;
pub mod open;
pub mod style;
pub mod types;

pub use builder::SectionBuilder;
pub use classify::{LineClass, SectionLineClassifier};
pub use content::ContentLine;
pub use style::{FontFamily, SectionStyle};
pub use types::{Section, SectionKind};

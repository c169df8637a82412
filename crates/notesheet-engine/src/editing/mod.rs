/*!
 * # Editing
 *
 * ## Model
 *
 * - The whole note lives in one **`xi_rope::Rope`** buffer inside
 *   [`NoteDocument`]. Saving writes the buffer verbatim.
 * - Every change is a [`Cmd`] that compiles to a single replacement and
 *   is applied as a rope `Delta`.
 * - After each command the document is classified and paginated again from
 *   scratch. Sections and pages are never patched in place.
 *
 * ## Editing a rendered line
 *
 * Each displayed line remembers the document-relative span of its content
 * (see `ContentLine`). [`try_apply_line_edit`] replaces exactly that span,
 * so block markers such as `# `, the `**` around a bold heading and fence
 * lines survive the edit untouched.
 *
 * ## UI state
 *
 * [`LayoutState`] holds headers, alignment overrides and the edit flag.
 * It is keyed by content ([`LineKey`], collected per document in
 * [`LineKeys`]) and pruned with
 * [`LayoutState::retain_live`] after each re-derivation.
 *
 * ```rust
 * use notesheet_engine::editing::*;
 * use notesheet_engine::paging::LineIdentity;
 *
 * let mut doc = NoteDocument::from_text("# Week 1\nNotes\n");
 * let mut layout = LayoutState::new();
 *
 * let key = doc.line_keys().get(LineIdentity::new(0, 1, 0)).unwrap();
 * layout.cycle_alignment(key);
 *
 * let title = LineIdentity::new(0, 0, 0);
 * layout.begin_edit(doc.line_keys(), title);
 * doc.apply(Cmd::EditLine { at: title, text: "Week 2".into() });
 * layout.end_edit(Some(doc.line_keys()));
 * layout.retain_live(doc.line_keys());
 *
 * assert_eq!(doc.text(), "# Week 2\nNotes\n");
 * assert_eq!(layout.alignment(key), Alignment::Center);
 * ```
 */

pub mod commands;
pub mod document;
pub mod layout;
pub mod line_edit;
pub mod patch;

pub use commands::Cmd;
pub use document::NoteDocument;
pub use layout::{Alignment, LayoutState, LineKey, LineKeys, PageHeader, PageMeta};
pub use line_edit::{EditError, apply_line_edit, try_apply_line_edit};
pub use patch::Patch;

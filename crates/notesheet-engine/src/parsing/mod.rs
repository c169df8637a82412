pub mod inline;
pub mod rope;
pub mod sections;
pub mod snapshot;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use rope::lines_with_spans;
use sections::{Section, SectionBuilder, SectionLineClassifier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub sections: Vec<Section>,
}

/// Classifies the whole document into sections, in document order.
///
/// Total: any input, including unterminated fences and tables, produces a
/// well-formed section list.
pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let classifier = SectionLineClassifier;
    let mut builder = SectionBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    let sections = builder.finish();
    log::trace!("classified {} bytes into {} sections", rope.len(), sections.len());
    ParsedDoc { sections }
}

/// Convenience over [`parse_document`] for a plain string.
pub fn classify(raw: &str) -> Vec<Section> {
    parse_document(&Rope::from(raw)).sections
}

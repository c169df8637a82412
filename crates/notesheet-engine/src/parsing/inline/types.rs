use serde::Serialize;

use crate::parsing::rope::span::Span;

/// A parsed inline node. Spans are relative to the `base` given to
/// [`parse_inline`](super::parse_inline).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineNode {
    /// Plain text that isn't part of any markup.
    Text(Span),
    /// `**inner**`
    Bold { full: Span, inner: Span },
    /// `*inner*` or `_inner_`
    Italic { full: Span, inner: Span },
    /// `__inner__`
    Underline { full: Span, inner: Span },
}

impl InlineNode {
    /// Span including delimiters.
    pub fn full(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::Bold { full, .. }
            | InlineNode::Italic { full, .. }
            | InlineNode::Underline { full, .. } => *full,
        }
    }

    /// Span of the text a reader sees (delimiters excluded).
    pub fn visible(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::Bold { inner, .. }
            | InlineNode::Italic { inner, .. }
            | InlineNode::Underline { inner, .. } => *inner,
        }
    }
}

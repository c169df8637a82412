/// Signature of a fence line (opener or closer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    /// Text after the backticks, trimmed. Empty when no language is given.
    pub language: String,
}

/// Fenced code block type with owned delimiter constant.
///
/// Fence bodies are raw zones: lines inside are never reclassified.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Detects a fence on a line body (line break already removed).
    pub fn sig(body: &str) -> Option<FenceSig> {
        let rest = body.trim_start().strip_prefix(Self::FENCE)?;
        Some(FenceSig {
            language: rest.trim().to_string(),
        })
    }
}

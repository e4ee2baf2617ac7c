use std::ops::Range;

/// A flat single-class rule such as `.cut { stroke: red; }`.
///
/// Blocks are found by pattern, so the body ends at the first closing
/// brace; nested braces are not understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBlock {
    /// Class name without the leading dot.
    pub selector: String,
    /// Source text from the dot through the closing brace.
    pub text: String,
    /// Byte range of `text` in the source.
    pub range: Range<usize>,
}

impl RuleBlock {
    /// Declarations between the braces, untrimmed.
    pub fn body(&self) -> &str {
        let inner = match self.text.find('{') {
            Some(open) => &self.text[open + 1..],
            None => self.text.as_str(),
        };
        inner.strip_suffix('}').unwrap_or(inner)
    }
}

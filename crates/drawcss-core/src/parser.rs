use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::RuleBlock;

/// `.name { ... }` up to the first closing brace.
static RULE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.([A-Za-z0-9_-]+)\s*\{[^}]*\}").expect("valid rule block pattern")
});

/// Extract every flat single-class rule block, in source order.
///
/// This is a pattern scan rather than a stylesheet parser: a body ends at
/// the first `}` even when a nested `{` was opened inside it.
pub fn rule_blocks(text: &str) -> Vec<RuleBlock> {
    RULE_BLOCK
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let selector = caps.get(1)?;
            Some(RuleBlock {
                selector: selector.as_str().to_string(),
                text: whole.as_str().to_string(),
                range: whole.range(),
            })
        })
        .collect()
}

/// Distinct block selectors in order of first appearance.
pub fn selectors(text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for block in rule_blocks(text) {
        if !seen.contains(&block.selector) {
            seen.push(block.selector);
        }
    }
    seen
}

/// Pattern matching every block of exactly `selector`.
pub(crate) fn block_pattern(selector: &str) -> Option<Regex> {
    let pattern = format!(r"\.{}\s*\{{[^}}]*\}}", regex::escape(selector));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            log::debug!("skipping selector '{}': {}", selector, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_blocks_in_order() {
        let src = ".foo { color: red; }\n.bar {\n    color: blue;\n}\n";
        let blocks = rule_blocks(src);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].selector, "foo");
        assert_eq!(blocks[0].text, ".foo { color: red; }");
        assert_eq!(blocks[0].body(), " color: red; ");
        assert_eq!(blocks[1].selector, "bar");
        assert_eq!(&src[blocks[1].range.clone()], blocks[1].text);
        assert_eq!(blocks[1].body().trim(), "color: blue;");
    }

    #[test]
    fn accepts_dashes_and_no_space() {
        let blocks = rule_blocks(".wall-cut{stroke:red}");
        assert_eq!(blocks[0].selector, "wall-cut");
        assert_eq!(blocks[0].body(), "stroke:red");
    }

    #[test]
    fn empty_body() {
        let blocks = rule_blocks(".a {}");
        assert_eq!(blocks[0].body(), "");
    }

    #[test]
    fn nested_body_stops_at_first_close() {
        let blocks = rule_blocks(".outer { .inner { a: b; } c: d; }");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].selector, "outer");
        assert_eq!(blocks[0].text, ".outer { .inner { a: b; }");
    }

    #[test]
    fn ignores_non_class_rules() {
        assert!(rule_blocks("line { stroke: red; }\n#id { a: b; }").is_empty());
    }

    #[test]
    fn selectors_are_distinct() {
        let src = ".a { x: 1; }\n.b { x: 2; }\n.a { x: 3; }";
        assert_eq!(selectors(src), ["a", "b"]);
    }

    #[test]
    fn block_pattern_is_exact() {
        let re = block_pattern("foo").unwrap();
        assert!(re.is_match(".foo { a: b; }"));
        assert!(!re.is_match(".foobar { a: b; }"));
    }
}

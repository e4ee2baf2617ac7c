use crate::parser::{block_pattern, selectors};

/// Comment placed between the base rules and the override rules.
pub const OVERRIDE_SEPARATOR: &str = "\n/* ---- overrides ---- */\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged {
    pub text: String,
    /// Override selectors that removed at least one base block.
    pub replaced: Vec<String>,
}

/// Merge `override_text` over `base`.
///
/// Every base block whose selector also has a block in the override is
/// dropped whole, then the override follows the separator verbatim. There
/// is no property-level merging.
pub fn merge(base: &str, override_text: &str) -> Merged {
    let wanted = selectors(override_text);
    let (kept, replaced) = remove_blocks(base, &wanted);

    for selector in &replaced {
        log::debug!("override replaces .{}", selector);
    }

    let mut text =
        String::with_capacity(kept.len() + OVERRIDE_SEPARATOR.len() + override_text.len());
    text.push_str(&kept);
    text.push_str(OVERRIDE_SEPARATOR);
    text.push_str(override_text);

    Merged { text, replaced }
}

/// Remove every block of each selector in `selectors`, everywhere in `text`.
///
/// Returns the remaining text and the selectors that matched anything.
pub fn remove_blocks(text: &str, selectors: &[String]) -> (String, Vec<String>) {
    let mut out = text.to_string();
    let mut removed = Vec::new();

    for selector in selectors {
        let Some(pattern) = block_pattern(selector) else {
            continue;
        };
        if !pattern.is_match(&out) {
            continue;
        }
        out = pattern.replace_all(&out, "").into_owned();
        removed.push(selector.clone());
    }

    (out, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::rule_blocks;
    use proptest::prelude::*;

    #[test]
    fn override_block_wins() {
        let base = ".foo { color: red; }\n.bar { color: blue; }\n";
        let over = ".foo { color: green; }\n";
        let merged = merge(base, over);

        assert_eq!(
            merged.text,
            "\n.bar { color: blue; }\n\n/* ---- overrides ---- */\n.foo { color: green; }\n"
        );
        assert_eq!(merged.replaced, ["foo"]);
        assert!(!merged.text.contains("red"));
        assert_eq!(merged.text.matches(".bar {").count(), 1);
        assert_eq!(merged.text.matches(".foo {").count(), 1);
    }

    #[test]
    fn removes_all_base_occurrences() {
        let base = ".a { x: 1; }\n.b { y: 2; }\n.a {\n  x: 3;\n}\n";
        let over = ".a { x: 9; }\n.a { z: 9; }\n";
        let merged = merge(base, over);
        let blocks = rule_blocks(&merged.text);
        let a_blocks: Vec<_> = blocks.iter().filter(|b| b.selector == "a").collect();
        assert_eq!(a_blocks.len(), 2);
        assert!(a_blocks.iter().all(|b| b.text.contains('9')));
        assert_eq!(merged.replaced, ["a"]);
    }

    #[test]
    fn prefix_selectors_are_kept() {
        let base = ".foobar { a: b; }\n.foo-x { a: b; }\n";
        let merged = merge(base, ".foo { a: c; }");
        assert!(merged.text.starts_with(base));
        assert!(merged.replaced.is_empty());
    }

    #[test]
    fn base_without_overlap_passes_through() {
        let base = "/* base */\nline { stroke: black; }\n.a { x: 1; }\n";
        let over = ".z { x: 2; }";
        let merged = merge(base, over);
        assert_eq!(merged.text, format!("{}{}{}", base, OVERRIDE_SEPARATOR, over));
    }

    #[test]
    fn empty_override() {
        let merged = merge(".a { x: 1; }", "");
        assert_eq!(merged.text, format!(".a {{ x: 1; }}{}", OVERRIDE_SEPARATOR));
    }

    #[test]
    fn nested_base_block_leaves_remainder() {
        let base = ".a { .b { x: 1; } y: 2; }\n";
        let merged = merge(base, ".a { z: 3; }");
        assert!(merged.text.starts_with(" y: 2; }\n"));
    }

    fn block() -> impl Strategy<Value = (String, String)> {
        ("[a-e]", "[a-z]{1,6}").prop_map(|(sel, val)| (sel, format!("color: {};", val)))
    }

    fn render(blocks: &[(String, String)]) -> String {
        blocks
            .iter()
            .map(|(sel, body)| format!(".{} {{ {} }}\n", sel, body))
            .collect()
    }

    proptest! {
        #[test]
        fn override_precedence_and_non_interference(
            base in prop::collection::vec(block(), 0..8),
            over in prop::collection::vec(block(), 0..4),
        ) {
            let base_text = render(&base);
            let over_text = render(&over);
            let merged = merge(&base_text, &over_text);

            prop_assert!(merged.text.ends_with(&over_text));

            let over_selectors: Vec<_> = over.iter().map(|(s, _)| s.clone()).collect();
            let over_blocks = rule_blocks(&over_text);
            for block in rule_blocks(&merged.text) {
                if over_selectors.contains(&block.selector) {
                    prop_assert!(over_blocks.iter().any(|b| b.text == block.text));
                }
            }

            for (sel, body) in &base {
                if !over_selectors.contains(sel) {
                    let expected = format!(".{} {{ {} }}", sel, body);
                    prop_assert!(merged.text.contains(&expected));
                }
            }

            let from_base = rule_blocks(&merged.text).len() - rule_blocks(&over_text).len();
            let base_only = base.iter().filter(|(s, _)| !over_selectors.contains(s)).count();
            prop_assert_eq!(from_base, base_only);
        }
    }
}

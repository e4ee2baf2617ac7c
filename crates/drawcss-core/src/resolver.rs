use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeSet;

use crate::tokens::TokenTable;

/// `var(--name)` where the name is ASCII alphanumerics and dashes.
static REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"var\((--[A-Za-z0-9-]+)\)").expect("valid reference pattern"));

/// Outcome of resolving token references in a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    /// Number of references replaced by a literal value.
    pub replaced: usize,
    /// Referenced names with no entry in the table, left in place.
    pub unresolved: BTreeSet<String>,
}

/// Replace every `var(--name)` known to `table` with its literal value.
///
/// Unknown references are left untouched. Comments are not special.
pub fn resolve(text: &str, table: &TokenTable) -> String {
    resolve_with_report(text, table).text
}

pub fn resolve_with_report(text: &str, table: &TokenTable) -> Resolution {
    let mut replaced = 0;
    let mut unresolved = BTreeSet::new();

    let resolved = REFERENCE.replace_all(text, |caps: &Captures| {
        let name = &caps[1];
        match table.get(name) {
            Some(value) => {
                replaced += 1;
                value.to_string()
            }
            None => {
                unresolved.insert(name.to_string());
                caps[0].to_string()
            }
        }
    });

    for name in &unresolved {
        log::debug!("leaving unknown token reference var({}) in place", name);
    }

    Resolution {
        text: resolved.into_owned(),
        replaced,
        unresolved,
    }
}

/// Every referenced token name, in order of appearance.
pub fn references(text: &str) -> Vec<&str> {
    REFERENCE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

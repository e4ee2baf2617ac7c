//! Output normalisation for merged stylesheets.
//!
//! Three passes run in order: empty rule blocks are dropped, blank lines are
//! dropped, and repeated lines are dropped after their first occurrence. The
//! passes repeat until nothing changes, so cleaning cleaned output is a no-op.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// A selector on one line followed by braces holding only whitespace.
static EMPTY_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\s{};/][^{};/\n]*\{\s*\}").expect("valid empty block pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cleaner {
    /// Drop exact repeats of non-blank lines across the whole text.
    pub dedupe_lines: bool,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self { dedupe_lines: true }
    }
}

impl Cleaner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keep_duplicates(mut self) -> Self {
        self.dedupe_lines = false;
        self
    }

    pub fn clean(&self, text: &str) -> String {
        let mut current = text.to_string();
        loop {
            let next = self.pass(&current);
            if next == current {
                return next;
            }
            current = next;
        }
    }

    fn pass(&self, text: &str) -> String {
        let text = remove_empty_blocks(text);
        let text = remove_blank_lines(&text);
        if self.dedupe_lines {
            remove_duplicate_lines(&text)
        } else {
            text
        }
    }
}

/// Clean with the default passes.
pub fn clean(text: &str) -> String {
    Cleaner::default().clean(text)
}

pub fn remove_empty_blocks(text: &str) -> String {
    EMPTY_BLOCK.replace_all(text, "").into_owned()
}

/// Drop whitespace-only lines entirely.
pub fn remove_blank_lines(text: &str) -> String {
    join_lines(text.lines().filter(|line| !line.trim().is_empty()))
}

/// Keep the first occurrence of each non-blank line; comparison is exact.
pub fn remove_duplicate_lines(text: &str) -> String {
    let mut seen = HashSet::new();
    join_lines(
        text.lines()
            .filter(|line| line.trim().is_empty() || seen.insert(*line)),
    )
}

fn join_lines<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

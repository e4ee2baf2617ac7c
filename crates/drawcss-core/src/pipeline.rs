//! Read, transform and write the drawing stylesheet.
//!
//! Single-file mode only substitutes tokens. Merge mode merges the locale
//! override over the base stylesheet, substitutes tokens and cleans the
//! result. Every input is read before the output is written.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::cleaner::Cleaner;
use crate::emitter::write_stylesheet;
use crate::error::Result;
use crate::loader::read_stylesheet;
use crate::merger::merge;
use crate::resolver::resolve_with_report;
use crate::tokens::TokenTable;

pub const SINGLE_INPUT: &str = "default_DK_RAW.css";
pub const MERGE_BASE: &str = "default_RAW.css";
pub const MERGE_OVERRIDE: &str = "default_DK_RAW.css";
pub const OUTPUT: &str = "default_DK.css";

/// Fixed file names resolved against an explicit base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    base_dir: PathBuf,
    pub single_input: String,
    pub merge_base: String,
    pub merge_override: String,
    pub output: String,
}

impl Layout {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            single_input: SINGLE_INPUT.to_string(),
            merge_base: MERGE_BASE.to_string(),
            merge_override: MERGE_OVERRIDE.to_string(),
            output: OUTPUT.to_string(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve a file name against the base directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    pub fn single_input_path(&self) -> PathBuf {
        self.path(&self.single_input)
    }

    pub fn merge_base_path(&self) -> PathBuf {
        self.path(&self.merge_base)
    }

    pub fn merge_override_path(&self) -> PathBuf {
        self.path(&self.merge_override)
    }

    pub fn output_path(&self) -> PathBuf {
        self.path(&self.output)
    }
}

/// Summary of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub output: PathBuf,
    pub bytes: usize,
    pub substitutions: usize,
    pub unresolved: BTreeSet<String>,
    /// Base selectors replaced by the override; empty in single-file mode.
    pub overridden: Vec<String>,
}

/// Substitute tokens in the single input file and write the output.
pub fn run_single(layout: &Layout, tokens: &TokenTable) -> Result<Report> {
    let source = read_stylesheet(&layout.single_input_path())?;
    let resolved = resolve_with_report(&source, tokens);

    let output = layout.output_path();
    write_stylesheet(&output, &resolved.text)?;
    log::info!("wrote {} ({} substitutions)", output.display(), resolved.replaced);

    Ok(Report {
        output,
        bytes: resolved.text.len(),
        substitutions: resolved.replaced,
        unresolved: resolved.unresolved,
        overridden: Vec::new(),
    })
}

/// Merge the override over the base, substitute tokens, clean and write.
pub fn run_merge(layout: &Layout, tokens: &TokenTable, cleaner: &Cleaner) -> Result<Report> {
    let base = read_stylesheet(&layout.merge_base_path())?;
    let overrides = read_stylesheet(&layout.merge_override_path())?;

    let merged = merge(&base, &overrides);
    let resolved = resolve_with_report(&merged.text, tokens);
    let cleaned = cleaner.clean(&resolved.text);

    let output = layout.output_path();
    write_stylesheet(&output, &cleaned)?;
    log::info!(
        "wrote {} ({} substitutions, {} overridden rules)",
        output.display(),
        resolved.replaced,
        merged.replaced.len()
    );

    Ok(Report {
        output,
        bytes: cleaned.len(),
        substitutions: resolved.replaced,
        unresolved: resolved.unresolved,
        overridden: merged.replaced,
    })
}

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use cli::{Cli, Commands};
use drawcss_core::{pipeline, Cleaner, Layout, Report, TokenTable};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let report = match cli.command {
        Commands::Build { dir, tokens } => {
            let layout = Layout::new(resolve_base_dir(dir)?);
            let table = load_tokens(&layout, tokens.as_deref())?;
            pipeline::run_single(&layout, &table)
                .with_context(|| format!("build failed in {}", layout.base_dir().display()))?
        }
        Commands::Merge {
            dir,
            tokens,
            keep_duplicates,
        } => {
            let layout = Layout::new(resolve_base_dir(dir)?);
            let table = load_tokens(&layout, tokens.as_deref())?;
            let cleaner = if keep_duplicates {
                Cleaner::new().keep_duplicates()
            } else {
                Cleaner::new()
            };
            pipeline::run_merge(&layout, &table, &cleaner)
                .with_context(|| format!("merge failed in {}", layout.base_dir().display()))?
        }
    };

    log_unresolved(&report);
    Ok(())
}

/// The stylesheets live next to the program, not in the working directory.
fn resolve_base_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = dir {
        return Ok(dir);
    }
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .context("executable has no parent directory")
}

fn load_tokens(layout: &Layout, tokens: Option<&Path>) -> Result<TokenTable> {
    let mut table = TokenTable::drawing_defaults();
    if let Some(file) = tokens {
        let path = layout.base_dir().join(file);
        let custom = TokenTable::load(&path)
            .with_context(|| format!("loading tokens from {}", path.display()))?;
        for (name, value) in &custom {
            log::debug!("{}: {} (from {})", name, value, path.display());
        }
        table.extend(custom);
    }
    Ok(table)
}

fn log_unresolved(report: &Report) {
    if !report.unresolved.is_empty() {
        let names: Vec<&str> = report.unresolved.iter().map(String::as_str).collect();
        log::info!(
            "{} unknown token(s) left in place: {}",
            names.len(),
            names.join(", ")
        );
    }
}

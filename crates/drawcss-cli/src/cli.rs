use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "drawcss")]
#[command(about = "Prepare drawing stylesheets: substitute tokens and merge locale overrides")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Substitute tokens in default_DK_RAW.css into default_DK.css
    Build {
        /// Directory holding the stylesheets (default: next to the executable)
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// JSON token file layered over the built-in table
        #[arg(short, long)]
        tokens: Option<PathBuf>,
    },
    /// Merge default_DK_RAW.css over default_RAW.css, substitute and clean
    Merge {
        #[arg(short, long)]
        dir: Option<PathBuf>,
        #[arg(short, long)]
        tokens: Option<PathBuf>,
        /// Keep repeated lines in the output
        #[arg(long)]
        keep_duplicates: bool,
    },
}

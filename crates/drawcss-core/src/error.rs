use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while preparing a drawing stylesheet.
///
/// Unknown token references and malformed rule blocks are not errors; only
/// file access and token table problems are reported.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid token file {}: {source}", path.display())]
    TokenFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Token names may only contain ASCII letters, digits and dashes.
    #[error("invalid token name '{0}'")]
    InvalidTokenName(String),
}

pub type Result<T> = std::result::Result<T, Error>;

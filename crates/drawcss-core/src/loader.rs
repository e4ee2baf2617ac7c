use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read a whole stylesheet as UTF-8.
pub fn read_stylesheet(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} ({} bytes)", path.display(), text.len());
    Ok(text)
}

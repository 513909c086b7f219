use std::{fs, path::Path};

use tracing::debug;

use crate::error::{Result, SimilarityError};

/// Reads a whole file as UTF-8 text
///
/// # Arguments
/// * `path` - file to read
///
/// # Returns
/// * `Result<String>` - file content, or `SimilarityError::Io` naming the path
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| SimilarityError::io(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "read document");
    Ok(text)
}

/// Writes `content` to `path` as UTF-8, replacing any existing file
pub fn write_text<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, content).map_err(|e| SimilarityError::io(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote result");
    Ok(())
}

//! Opening the summary page with the OS default handler.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("cannot resolve {path}: {source}")]
    Resolve { path: PathBuf, source: io::Error },
    #[error("{0}")]
    Launch(#[from] io::Error),
}

/// Open a file with the platform's default file association.
///
/// The path is resolved to an absolute one first so the handler is not
/// sensitive to the working directory it inherits.
pub fn open_file(path: &Path) -> Result<(), BrowserError> {
    let full_path = path
        .canonicalize()
        .map_err(|source| BrowserError::Resolve {
            path: path.to_path_buf(),
            source,
        })?;

    open::that(full_path)?;
    Ok(())
}

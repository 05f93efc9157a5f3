//! Writing the rendered documents to the output directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default directory for the rendered pages, relative to the working
/// directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Paths of the two files written for a topic.
#[derive(Debug, Clone)]
pub struct WrittenPages {
    /// The formatted summary document
    pub summary: PathBuf,
    /// The raw-JSON debug document
    pub raw: PathBuf,
}

/// Write both documents for a topic slug, creating the directory if needed.
///
/// Existing files at the same paths are overwritten, so re-running a topic
/// replaces its output in place.
pub fn write_pages(
    dir: &Path,
    slug: &str,
    summary_html: &str,
    raw_html: &str,
) -> Result<WrittenPages, OutputError> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let summary = dir.join(format!("{slug}_summary.html"));
    fs::write(&summary, summary_html).map_err(|source| OutputError::Write {
        path: summary.clone(),
        source,
    })?;

    let raw = dir.join(format!("{slug}_raw.html"));
    fs::write(&raw, raw_html).map_err(|source| OutputError::Write {
        path: raw.clone(),
        source,
    })?;

    Ok(WrittenPages { summary, raw })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_both_files_under_the_slug() {
        let dir = tempfile::tempdir().unwrap();
        let pages = write_pages(dir.path(), "rust", "<html>summary</html>", "<html>raw</html>")
            .unwrap();

        assert_eq!(pages.summary, dir.path().join("rust_summary.html"));
        assert_eq!(pages.raw, dir.path().join("rust_raw.html"));
        assert_eq!(
            fs::read_to_string(&pages.summary).unwrap(),
            "<html>summary</html>"
        );
        assert_eq!(fs::read_to_string(&pages.raw).unwrap(), "<html>raw</html>");
    }

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("pages");
        write_pages(&nested, "ada", "s", "r").unwrap();
        assert!(nested.join("ada_summary.html").exists());
    }

    #[test]
    fn rerunning_a_topic_overwrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        write_pages(dir.path(), "rust", "first", "first-raw").unwrap();
        let pages = write_pages(dir.path(), "rust", "second", "second-raw").unwrap();

        assert_eq!(fs::read_to_string(&pages.summary).unwrap(), "second");
        assert_eq!(fs::read_to_string(&pages.raw).unwrap(), "second-raw");
        // Still exactly two files for the topic
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }
}

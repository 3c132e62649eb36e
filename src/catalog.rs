//! Directory listing and entry collection.
//!
//! Looks at the immediate children of the input directory only. A child is
//! cataloged when it is a regular file (symlinks are followed), its extension
//! is exactly `html`, and its name is not `index.html`, which is reserved for
//! the generated page so a previous run's output is never listed.
//!
//! ```text
//! docs/
//! ├── index.html        # skipped: reserved output name
//! ├── guide.html        # cataloged
//! ├── notes.HTML        # skipped: extension match is case-sensitive
//! ├── mkindex.toml      # skipped: not html
//! └── archive/          # skipped: not descended into
//!     └── old.html
//! ```
//!
//! Entries are sorted by title with a stable sort over a name-sorted listing,
//! so two runs over the same directory always produce the same order, even
//! when titles collide.

use crate::extract;
use crate::types::DocumentEntry;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// File name the generated index is written to, never cataloged.
pub const INDEX_FILENAME: &str = "index.html";

const HTML_EXTENSION: &str = "html";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot read directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Build the sorted catalog for `dir`.
///
/// Unreadable individual files fall back to stem/placeholder values; only a
/// failure to list `dir` itself is an error.
pub fn build_catalog(dir: &Path, placeholder: &str) -> Result<Vec<DocumentEntry>, CatalogError> {
    if !dir.is_dir() {
        return Err(CatalogError::NotADirectory(dir.to_path_buf()));
    }

    let mut entries = Vec::new();
    for path in list_candidates(dir)? {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let extracted = extract::extract(&path, placeholder);
        tracing::debug!(file = %filename, title = %extracted.title, "cataloged");
        entries.push(DocumentEntry {
            filename,
            title: extracted.title,
            description: extracted.description,
        });
    }

    sort_entries(&mut entries);
    Ok(entries)
}

/// Stable ascending sort by title, comparing bytes.
pub fn sort_entries(entries: &mut [DocumentEntry]) {
    entries.sort_by(|a, b| a.title.as_bytes().cmp(b.title.as_bytes()));
}

/// Immediate children of `dir` that qualify for the catalog, in name order.
fn list_candidates(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let mut candidates = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            // A vanished or unreadable child is skipped; a failure on the
            // root itself aborts the run.
            Err(e) if e.depth() > 0 => {
                tracing::warn!(error = %e, "skipping directory entry");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if is_catalog_candidate(entry.path()) {
            candidates.push(entry.into_path());
        }
    }
    Ok(candidates)
}

fn is_catalog_candidate(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let is_html = path
        .extension()
        .map(|e| e == HTML_EXTENSION)
        .unwrap_or(false);
    let is_reserved = path
        .file_name()
        .map(|n| n == INDEX_FILENAME)
        .unwrap_or(false);
    is_html && !is_reserved
}

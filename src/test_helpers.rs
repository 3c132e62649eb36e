//! Shared test utilities for the mkindex test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! write_doc(tmp.path(), "a.html", "Apple", "Red fruit.");
//! let entries = build_catalog(tmp.path(), "n/a").unwrap();
//! assert_eq!(entry_titles(&entries), vec!["Apple"]);
//! ```

use std::path::{Path, PathBuf};

use crate::types::DocumentEntry;

// =========================================================================
// Fixture setup
// =========================================================================

/// Write `content` to `dir/name` and return the path.
pub fn write_html(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Write a minimal document with one heading and one paragraph.
pub fn write_doc(dir: &Path, name: &str, title: &str, description: &str) -> PathBuf {
    let content = format!(
        "<!DOCTYPE html>\n<html>\n<body>\n<h1>{title}</h1>\n<p>{description}</p>\n</body>\n</html>\n"
    );
    write_html(dir, name, &content)
}

/// Build an entry directly, bypassing extraction.
pub fn entry(filename: &str, title: &str, description: &str) -> DocumentEntry {
    DocumentEntry {
        filename: filename.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All titles in catalog order.
pub fn entry_titles(entries: &[DocumentEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.title.as_str()).collect()
}

/// All file names in catalog order.
pub fn entry_filenames(entries: &[DocumentEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.filename.as_str()).collect()
}

// =========================================================================
// Assertions
// =========================================================================

/// Number of rendered entry blocks in an index page.
pub fn count_result_blocks(html: &str) -> usize {
    html.matches(r#"<div class="result">"#).count()
}

/// Assert titles are in non-decreasing ordinal order.
pub fn assert_titles_sorted(entries: &[DocumentEntry]) {
    for pair in entries.windows(2) {
        assert!(
            pair[0].title.as_bytes() <= pair[1].title.as_bytes(),
            "'{}' sorted before '{}'",
            pair[0].title,
            pair[1].title
        );
    }
}

//! CLI output formatting.
//!
//! Each entry is shown by its title first, with the source file as an
//! indented context line:
//!
//! ```text
//! 001 Apple
//!     Source: apple.html
//!     Description: Red fruit.
//! 002 Zebra
//!     Source: zebra.html
//!
//! 2 documents
//! ```
//!
//! `format_*` functions return lines and do no I/O; `print_*` wrappers write
//! them to stdout.

use crate::types::DocumentEntry;
use std::path::Path;

/// Width descriptions are cut to in the listing.
const LISTING_DESC_CHARS: usize = 60;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    }
}

fn count_label(n: usize) -> String {
    match n {
        1 => "1 document".to_string(),
        n => format!("{n} documents"),
    }
}

/// Format the cataloged entries in render order.
///
/// `placeholder` descriptions are omitted so only real extracted text shows.
pub fn format_catalog(entries: &[DocumentEntry], placeholder: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), entry.title));
        lines.push(format!("    Source: {}", entry.filename));
        if entry.description != placeholder {
            lines.push(format!(
                "    Description: {}",
                truncate_desc(&entry.description, LISTING_DESC_CHARS)
            ));
        }
    }
    if !entries.is_empty() {
        lines.push(String::new());
    }
    lines.push(count_label(entries.len()));
    lines
}

/// Print the catalog listing to stdout.
pub fn print_catalog(entries: &[DocumentEntry], placeholder: &str) {
    for line in format_catalog(entries, placeholder) {
        println!("{}", line);
    }
}

/// Confirmation line printed after a successful write.
pub fn format_success(index_path: &Path) -> String {
    format!("Index generated at: {}", index_path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::entry;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn truncate_desc_short() {
        assert_eq!(truncate_desc("Short text", 40), "Short text");
    }

    #[test]
    fn truncate_desc_long() {
        let text = "a".repeat(50);
        assert_eq!(truncate_desc(&text, 40), format!("{}...", "a".repeat(40)));
    }

    #[test]
    fn truncate_desc_multibyte() {
        assert_eq!(truncate_desc("ñandú", 2), "ña...");
    }

    #[test]
    fn catalog_listing() {
        let entries = vec![
            entry("apple.html", "Apple", "Red fruit."),
            entry("zebra.html", "Zebra", "n/a"),
        ];
        let lines = format_catalog(&entries, "n/a");
        assert_eq!(
            lines,
            vec![
                "001 Apple",
                "    Source: apple.html",
                "    Description: Red fruit.",
                "002 Zebra",
                "    Source: zebra.html",
                "",
                "2 documents",
            ]
        );
    }

    #[test]
    fn empty_catalog_listing() {
        assert_eq!(format_catalog(&[], "n/a"), vec!["0 documents"]);
    }

    #[test]
    fn single_document_label() {
        let lines = format_catalog(&[entry("a.html", "A", "n/a")], "n/a");
        assert_eq!(lines.last().map(String::as_str), Some("1 document"));
    }

    #[test]
    fn success_line() {
        assert_eq!(
            format_success(Path::new("/tmp/out/index.html")),
            "Index generated at: /tmp/out/index.html"
        );
    }
}

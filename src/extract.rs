//! Title and description extraction from a single HTML file.
//!
//! ## Scanning
//!
//! The document is scanned once, left to right, in two ordered phases:
//!
//! ```text
//! <html> ... <p>ignored</p> ... <h1 class="x">Title</h1> ... <p>Description</p> ... <p>ignored</p>
//!                               └─── heading phase ───┘      └── paragraph phase ──┘
//! ```
//!
//! 1. **Heading**: the first `<h1` and the first `</h1>` after it. The title
//!    is everything between the `>` closing the open tag and `</h1>`.
//! 2. **Paragraph**: only once a heading was found, the first `<p` after the
//!    `</h1>` and the first `</p>` after that.
//!
//! Tag matching is by literal prefix and is case-sensitive, so `<H1>` is not
//! a heading while `<h10>` is, and `<pre>` counts as a paragraph. A paragraph
//! that appears before the heading can never be picked up.
//!
//! ## Fallbacks
//!
//! Nothing here is fatal. An unreadable file, a missing heading, or markup
//! with an unterminated tag all resolve to fallbacks:
//!
//! - **Title**: the file stem (`guide.html` → `guide`)
//! - **Description**: the configured placeholder (stock: `Descripción no disponible`)

use crate::clean::clean_content;
use std::fs;
use std::path::Path;

/// Maximum description length in characters, ellipsis included.
pub const MAX_DESCRIPTION_CHARS: usize = 160;

const ELLIPSIS: &str = "...";

const HEADING_OPEN: &str = "<h1";
const HEADING_CLOSE: &str = "</h1>";
const PARAGRAPH_OPEN: &str = "<p";
const PARAGRAPH_CLOSE: &str = "</p>";

/// Raw scanner output before any fallback is applied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScannedFields {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Final title/description pair for one file. Both fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub title: String,
    pub description: String,
}

/// Run the two-phase heading/paragraph scan over a document.
///
/// Returned fields are already cleaned but not truncated or defaulted.
pub fn scan_document(content: &str) -> ScannedFields {
    let mut fields = ScannedFields::default();

    let Some((title, resume_at)) = find_element(content, 0, HEADING_OPEN, HEADING_CLOSE) else {
        return fields;
    };
    fields.title = Some(title);

    if let Some((description, _)) =
        find_element(content, resume_at, PARAGRAPH_OPEN, PARAGRAPH_CLOSE)
    {
        fields.description = Some(description);
    }

    fields
}

/// Find the first `open` at or after `from` and the first `close` after it.
///
/// Returns the cleaned inner fragment and the byte offset just past `close`.
/// The inner fragment starts after the first `>` following `open`.
///
/// When that `>` only shows up inside or past `close` (`<h1</h1>...`), the
/// fragment is empty, so the caller falls back to the stem or placeholder.
/// Taking everything from that `>` to the end of the file instead would turn
/// a broken tag into a page-long title.
fn find_element(content: &str, from: usize, open: &str, close: &str) -> Option<(String, usize)> {
    let start = from + content[from..].find(open)?;
    let close_at = start + content[start..].find(close)?;
    let inner_start = content[start..].find('>').map(|i| start + i + 1)?;

    let fragment = if inner_start <= close_at {
        clean_content(&content[inner_start..close_at])
    } else {
        String::new()
    };

    Some((fragment, close_at + close.len()))
}

/// Cap a description at [`MAX_DESCRIPTION_CHARS`].
///
/// Longer text keeps its first 157 characters followed by `...`, so a
/// truncated description is always exactly 160 characters long.
pub fn truncate_description(description: String) -> String {
    if description.chars().count() <= MAX_DESCRIPTION_CHARS {
        return description;
    }
    let keep = MAX_DESCRIPTION_CHARS - ELLIPSIS.chars().count();
    let mut truncated: String = description.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// File stem used as the fallback title (`notes.v2.html` → `notes.v2`).
pub fn fallback_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Extract the display title and description for one HTML file.
///
/// Never fails: read errors and missing elements produce the stem/placeholder
/// fallbacks. Invalid UTF-8 is decoded lossily rather than rejected.
pub fn extract(path: &Path, placeholder: &str) -> Extracted {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "unreadable file, using fallbacks");
            return Extracted {
                title: fallback_title(path),
                description: placeholder.to_string(),
            };
        }
    };
    let content = String::from_utf8_lossy(&bytes);
    let scanned = scan_document(&content);

    let title = scanned
        .title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| {
            tracing::debug!(path = %path.display(), "no heading found");
            fallback_title(path)
        });
    let description = scanned
        .description
        .filter(|d| !d.is_empty())
        .map(truncate_description)
        .unwrap_or_else(|| placeholder.to_string());

    Extracted { title, description }
}

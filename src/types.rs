//! Shared types passed from the catalog builder to the renderer.

/// One cataloged HTML file.
///
/// Built once per run by [`crate::catalog::build_catalog`]; after that the
/// only thing that happens to an entry is being sorted and rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    /// File name relative to the input directory, e.g. `guide.html`.
    /// Used verbatim as the link target.
    pub filename: String,
    /// First `<h1>` text, or the file stem when there is none. Never empty.
    pub title: String,
    /// First paragraph after the heading, capped at 160 characters, or the
    /// configured placeholder. Never empty.
    pub description: String,
}

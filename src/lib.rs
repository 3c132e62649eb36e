//! # mkindex
//!
//! Builds a browsable landing page for a folder of standalone HTML documents.
//! Each `.html` file in the input directory becomes one entry, titled by its
//! first `<h1>` and described by the first paragraph after it, and the entries
//! are written, sorted by title, to a single static `index.html`.
//!
//! # Pipeline
//!
//! ```text
//! 1. Catalog   docs/*.html  →  Vec<DocumentEntry>   (list, extract, sort)
//! 2. Render    entries      →  out/index.html       (maud template + timestamp)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Lists the input directory, extracts every eligible file, sorts by title |
//! | [`extract`] | Two-phase heading/paragraph scanner with stem and placeholder fallbacks |
//! | [`clean`] | Turns raw HTML fragments into display text |
//! | [`render`] | Renders and atomically writes the index page using Maud |
//! | [`clock`] | Injectable time source for the footer timestamp |
//! | [`config`] | Optional `mkindex.toml`: page strings, placeholder, colors |
//! | [`types`] | [`types::DocumentEntry`], shared by catalog and renderer |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## A Scanner, Not a Parser
//!
//! Extraction is a literal substring scan for `<h1`, `</h1>`, `<p` and `</p>`.
//! It tolerates any amount of broken markup and behaves the same on every
//! input, at the cost of matching by prefix (`<h10>`, `<pre>`) and ignoring
//! case-variant tags. Documents in scope are hand-written standalone pages
//! where the first heading and paragraph are reliable enough.
//!
//! ## Deterministic Output
//!
//! The directory listing is sorted by file name before a stable sort by title,
//! and the only time-dependent byte in the output comes from the [`clock::Clock`]
//! handed to [`render::write_index`]. Two runs over the same input produce the
//! same page apart from the footer timestamp.

pub mod catalog;
pub mod clean;
pub mod clock;
pub mod config;
pub mod extract;
pub mod output;
pub mod render;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

//! Index page rendering.
//!
//! Turns the sorted catalog into a single static `index.html`:
//!
//! ```text
//! <header>  page title
//! <main>    one block per entry, in catalog order:
//!             <h2 class="result-title"><a href="guide.html">Guide</a></h2>
//!             <div class="result-url">guide.html</div>
//!             <p class="result-description">First paragraph...</p>
//! <footer>  footer text + generation timestamp
//! ```
//!
//! Styling is inline: color variables from config followed by the embedded
//! `static/style.css`. HTML is built with [maud](https://maud.lambda.xyz/), so
//! titles, descriptions, and file names are escaped on the way out.
//!
//! [`render_index`] is pure. Wall time only enters through the [`Clock`]
//! passed to [`write_index`], which is also the only function touching disk.

use crate::catalog::INDEX_FILENAME;
use crate::clock::Clock;
use crate::config::{self, IndexConfig};
use crate::types::DocumentEntry;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Scratch name the page is written under before being renamed into place.
const TEMP_FILENAME: &str = ".index.html.tmp";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Cannot create output directory {0}: {1}")]
    CreateDir(PathBuf, #[source] std::io::Error),
    #[error("Cannot write {0}: {1}")]
    Write(PathBuf, #[source] std::io::Error),
    #[error("Cannot format timestamp with {0:?}")]
    Timestamp(String),
}

/// Format the current time of `clock` with a chrono format string.
///
/// Fails instead of panicking when chrono cannot render a field.
pub fn format_timestamp(clock: &dyn Clock, format: &str) -> Result<String, RenderError> {
    let mut stamp = String::new();
    write!(stamp, "{}", clock.now().format(format))
        .map_err(|_| RenderError::Timestamp(format.to_string()))?;
    Ok(stamp)
}

/// Full stylesheet: config color variables, then the static rules.
fn stylesheet(config: &IndexConfig) -> String {
    format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    )
}

/// Render one catalog entry.
fn entry_block(entry: &DocumentEntry) -> Markup {
    html! {
        div.result {
            h2.result-title {
                a href=(entry.filename) { (entry.title) }
            }
            div.result-url { (entry.filename) }
            p.result-description { (entry.description) }
        }
    }
}

/// Render the complete index document.
pub fn render_index(entries: &[DocumentEntry], config: &IndexConfig, generated_at: &str) -> Markup {
    let page = &config.page;
    html! {
        (DOCTYPE)
        html lang=(page.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.title) }
                style { (PreEscaped(stylesheet(config))) }
            }
            body {
                header {
                    h1 { (page.title) }
                }
                main {
                    @for entry in entries {
                        (entry_block(entry))
                    }
                }
                footer {
                    (page.footer) " " (generated_at)
                }
            }
        }
    }
}

/// Render and write `<output_dir>/index.html`, creating `output_dir` if needed.
///
/// The page is written to a scratch file next to the target and renamed over
/// it, so an existing `index.html` is either fully replaced or left alone.
/// Returns the path of the written index.
pub fn write_index(
    entries: &[DocumentEntry],
    output_dir: &Path,
    config: &IndexConfig,
    clock: &dyn Clock,
) -> Result<PathBuf, RenderError> {
    let generated_at = format_timestamp(clock, &config.page.timestamp_format)?;

    fs::create_dir_all(output_dir)
        .map_err(|e| RenderError::CreateDir(output_dir.to_path_buf(), e))?;

    let page = render_index(entries, config, &generated_at).into_string();

    let target = output_dir.join(INDEX_FILENAME);
    let scratch = output_dir.join(TEMP_FILENAME);
    let written = fs::write(&scratch, page).and_then(|()| fs::rename(&scratch, &target));
    if let Err(e) = written {
        // Best effort; the write error is what gets reported.
        let _ = fs::remove_file(&scratch);
        return Err(RenderError::Write(target, e));
    }

    tracing::info!(path = %target.display(), entries = entries.len(), "index written");
    Ok(target)
}

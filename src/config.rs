//! Index configuration.
//!
//! Loads an optional `mkindex.toml`, either passed with `--config` or found in
//! the input directory. User values are merged on top of stock defaults, so a
//! file only needs the keys it changes.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [page]
//! title = "Índice de Documentos"       # <title> and header text
//! lang = "es"                          # <html lang="..">
//! footer = "Índice generado automáticamente el"
//! timestamp_format = "%d/%m/%Y a las %H:%M"
//!
//! [extract]
//! placeholder = "Descripción no disponible"
//!
//! [colors]
//! primary = "#1a0dab"                  # Header and link color
//! visited = "#681da8"
//! url = "#006621"                      # File name line under each title
//! text = "#202124"
//! description = "#4d5156"
//! border = "#dadce0"
//! background = "#ffffff"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the input directory when `--config` is not given.
pub const CONFIG_FILENAME: &str = "mkindex.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Everything the extractor and renderer can be told from `mkindex.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Page-level strings and the footer timestamp format.
    pub page: PageConfig,
    /// Extraction fallbacks.
    pub extract: ExtractConfig,
    /// CSS custom properties for the generated page.
    pub colors: ColorConfig,
}

impl IndexConfig {
    /// Validate values the pipeline relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "page.title must not be empty".into(),
            ));
        }
        if self.page.lang.trim().is_empty() {
            return Err(ConfigError::Validation("page.lang must not be empty".into()));
        }
        if self.extract.placeholder.trim().is_empty() {
            return Err(ConfigError::Validation(
                "extract.placeholder must not be empty".into(),
            ));
        }
        let format = &self.page.timestamp_format;
        let renders = write!(String::new(), "{}", Local::now().format(format)).is_ok();
        if !renders || StrftimeItems::new(format).any(|item| item == Item::Error) {
            return Err(ConfigError::Validation(format!(
                "page.timestamp_format is not a valid format: {:?}",
                self.page.timestamp_format
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub title: String,
    pub lang: String,
    /// Text placed before the generation timestamp in the footer.
    pub footer: String,
    /// chrono `strftime`-style format for the footer timestamp.
    pub timestamp_format: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Índice de Documentos".to_string(),
            lang: "es".to_string(),
            footer: "Índice generado automáticamente el".to_string(),
            timestamp_format: "%d/%m/%Y a las %H:%M".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractConfig {
    /// Description used when a document has no usable paragraph.
    pub placeholder: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            placeholder: "Descripción no disponible".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub primary: String,
    pub visited: String,
    pub url: String,
    pub text: String,
    pub description: String,
    pub border: String,
    pub background: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#1a0dab".to_string(),
            visited: "#681da8".to_string(),
            url: "#006621".to_string(),
            text: "#202124".to_string(),
            description: "#4d5156".to_string(),
            border: "#dadce0".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(IndexConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<IndexConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: IndexConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the effective configuration for a run.
///
/// An explicit path must exist. Without one, `mkindex.toml` in `source_dir`
/// is used when present and stock defaults otherwise.
pub fn load_config(explicit: Option<&Path>, source_dir: &Path) -> Result<IndexConfig, ConfigError> {
    let overlay = match explicit {
        Some(path) if !path.is_file() => {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Some(path) => Some(load_raw_config(path)?),
        None => {
            let implicit = source_dir.join(CONFIG_FILENAME);
            if implicit.is_file() {
                tracing::info!(path = %implicit.display(), "using config");
                Some(load_raw_config(&implicit)?)
            } else {
                None
            }
        }
    };
    resolve_config(overlay)
}

/// Returns a fully-commented stock `mkindex.toml`.
///
/// Printed by `mkindex --gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# mkindex Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# mkindex reads this file from the input directory (mkindex.toml) or
# from the path given with --config. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Page
# ---------------------------------------------------------------------------
[page]
# Shown in the browser tab and as the page header.
title = "Índice de Documentos"

# Value of the <html lang=".."> attribute.
lang = "es"

# Footer text; the generation timestamp is appended after it.
footer = "Índice generado automáticamente el"

# Timestamp format (chrono strftime syntax), in local time.
timestamp_format = "%d/%m/%Y a las %H:%M"

# ---------------------------------------------------------------------------
# Extraction
# ---------------------------------------------------------------------------
[extract]
# Description used when a document has no paragraph after its first <h1>.
placeholder = "Descripción no disponible"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
primary = "#1a0dab"       # Header and result links
visited = "#681da8"       # Visited result links
url = "#006621"           # File name line
text = "#202124"
description = "#4d5156"   # Descriptions and footer
border = "#dadce0"
background = "#ffffff"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --primary-color: {primary};
    --visited-color: {visited};
    --url-color: {url};
    --text-color: {text};
    --description-color: {description};
    --border-color: {border};
    --bg-color: {background};
}}"#,
        primary = colors.primary,
        visited = colors.visited,
        url = colors.url,
        text = colors.text,
        description = colors.description,
        border = colors.border,
        background = colors.background,
    )
}

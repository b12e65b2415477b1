//! Inspection settings
//!
//! Everything the inspector needs to know about a run lives in
//! [`InspectConfig`]. The CLI fills it from arguments and environment
//! variables; library callers build it directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Workbook inspected when no path is given
pub const DEFAULT_WORKBOOK: &str = "Personal Finance 2026.xlsx";

/// Number of leading data rows shown per sheet
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Report rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text tables
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML document
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(format!(
                "unknown format '{}' (expected text, json or yaml)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

/// Settings for one inspection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectConfig {
    /// Workbook to open
    pub path: PathBuf,
    /// Maximum data rows per preview
    pub preview_rows: usize,
    /// Sheets to preview (empty = all, in workbook order)
    pub sheets: Vec<String>,
    /// How the report is rendered
    pub format: OutputFormat,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_WORKBOOK),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            sheets: Vec::new(),
            format: OutputFormat::Text,
        }
    }
}

impl InspectConfig {
    /// Default settings for the workbook at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    #[must_use]
    pub fn with_sheets(mut self, sheets: Vec<String>) -> Self {
        self.sheets = sheets;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Whether `sheet` should get a preview
    pub fn wants_sheet(&self, sheet: &str) -> bool {
        self.sheets.is_empty() || self.sheets.iter().any(|s| s == sheet)
    }
}

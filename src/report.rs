//! Inspection report and its renderings

use crate::config::OutputFormat;
use crate::error::InspectResult;
use crate::preview::{single_line, Preview};
use serde::Serialize;
use std::fmt;

/// Preview of one sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetReport {
    pub name: String,
    #[serde(flatten)]
    pub preview: Preview,
}

impl SheetReport {
    pub fn new(name: String, preview: Preview) -> Self {
        Self { name, preview }
    }
}

/// Everything printed for one workbook
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Every sheet in workbook order, previewed or not
    pub sheet_names: Vec<String>,
    /// Previewed sheets, in workbook order
    pub sheets: Vec<SheetReport>,
}

impl Report {
    pub fn sheet(&self, name: &str) -> Option<&SheetReport> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Render the report; the result always ends with a newline
    pub fn render(&self, format: OutputFormat) -> InspectResult<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(self)?;
                json.push('\n');
                Ok(json)
            }
            OutputFormat::Yaml => Ok(serde_yaml::to_string(self)?),
        }
    }
}

/// First line of the text report
pub fn sheet_names_line(sheet_names: &[String]) -> String {
    format!("Sheet names: {:?}\n", sheet_names)
}

impl fmt::Display for SheetReport {
    /// One sheet's block of the text report, preceded by a blank line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "--- Sheet: {} ---", self.name)?;
        writeln!(f, "{}", self.preview)?;
        writeln!(f)?;
        writeln!(f, "Column types:")?;

        let columns = &self.preview.columns;
        if columns.is_empty() {
            return writeln!(f, "(no columns)");
        }
        let labels: Vec<String> = columns.iter().map(|c| single_line(&c.label)).collect();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        for (label, column) in labels.iter().zip(columns) {
            writeln!(
                f,
                "{:<width$}    {}",
                label,
                column.column_type,
                width = label_width
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&sheet_names_line(&self.sheet_names))?;
        for sheet in &self.sheets {
            write!(f, "{}", sheet)?;
        }
        Ok(())
    }
}

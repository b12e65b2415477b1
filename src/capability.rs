//! Startup capability probe
//!
//! Each workbook format is decoded by an engine that is compiled in through a
//! cargo feature. The probe runs once, before the workbook is touched, so a
//! build that cannot read the requested format fails with
//! [`InspectError::MissingDependency`] instead of a confusing read error.

use crate::error::{InspectError, InspectResult};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Workbook file formats understood by calamine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkbookFormat {
    /// Office Open XML (.xlsx, .xlsm, .xlam)
    Xlsx,
    /// Excel binary workbook (.xlsb)
    Xlsb,
    /// Legacy BIFF8 (.xls, .xla)
    Xls,
    /// OpenDocument spreadsheet (.ods)
    Ods,
}

impl WorkbookFormat {
    /// Fallback order when the extension does not name a format
    pub const ALL: [WorkbookFormat; 4] = [
        WorkbookFormat::Xlsx,
        WorkbookFormat::Xlsb,
        WorkbookFormat::Xls,
        WorkbookFormat::Ods,
    ];

    /// Detect the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xlam" => Some(WorkbookFormat::Xlsx),
            "xlsb" => Some(WorkbookFormat::Xlsb),
            "xls" | "xla" => Some(WorkbookFormat::Xls),
            "ods" => Some(WorkbookFormat::Ods),
            _ => None,
        }
    }

    /// Cargo feature that compiles in this format's engine
    pub fn feature(self) -> &'static str {
        match self {
            WorkbookFormat::Xlsx => "xlsx",
            WorkbookFormat::Xlsb => "xlsb",
            WorkbookFormat::Xls => "xls",
            WorkbookFormat::Ods => "ods",
        }
    }

    fn compiled_in(self) -> bool {
        match self {
            WorkbookFormat::Xlsx => cfg!(feature = "xlsx"),
            WorkbookFormat::Xlsb => cfg!(feature = "xlsb"),
            WorkbookFormat::Xls => cfg!(feature = "xls"),
            WorkbookFormat::Ods => cfg!(feature = "ods"),
        }
    }
}

impl fmt::Display for WorkbookFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} engine", self.feature())
    }
}

/// The set of format engines available in this build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    engines: Vec<WorkbookFormat>,
}

impl Capabilities {
    /// Probe the compiled-in engines.
    ///
    /// Fails when no engine at all is available: nothing could be read.
    pub fn probe() -> InspectResult<Self> {
        Self::from_engines(
            WorkbookFormat::ALL
                .into_iter()
                .filter(|format| format.compiled_in())
                .collect(),
        )
    }

    /// Capabilities with an explicit engine set
    pub fn from_engines(engines: Vec<WorkbookFormat>) -> InspectResult<Self> {
        if engines.is_empty() {
            return Err(InspectError::MissingDependency {
                capability: "spreadsheet reader".to_string(),
                feature: "xlsx",
            });
        }
        debug!(?engines, "probed workbook engines");
        Ok(Self { engines })
    }

    pub fn engines(&self) -> &[WorkbookFormat] {
        &self.engines
    }

    pub fn supports(&self, format: WorkbookFormat) -> bool {
        self.engines.contains(&format)
    }

    /// Check that the engine for `path`'s format is available.
    ///
    /// Only the extension is inspected, so this runs before the file is
    /// checked for existence. Unknown extensions pass; opening them falls
    /// back to trying every engine.
    pub fn require_for(&self, path: &Path) -> InspectResult<Option<WorkbookFormat>> {
        match WorkbookFormat::from_path(path) {
            Some(format) if !self.supports(format) => Err(InspectError::MissingDependency {
                capability: format.to_string(),
                feature: format.feature(),
            }),
            detected => Ok(detected),
        }
    }
}

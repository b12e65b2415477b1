//! Workbook handle - opening a file through calamine

use crate::capability::{Capabilities, WorkbookFormat};
use crate::error::{InspectError, InspectResult};
#[cfg(any(feature = "xlsx", feature = "xlsb", feature = "xls", feature = "ods"))]
use calamine::open_workbook;
#[cfg(feature = "ods")]
use calamine::Ods;
#[cfg(feature = "xls")]
use calamine::Xls;
#[cfg(feature = "xlsb")]
use calamine::Xlsb;
#[cfg(feature = "xlsx")]
use calamine::Xlsx;
use calamine::{Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An opened workbook.
///
/// The underlying file is closed when the handle is dropped.
pub struct Workbook {
    path: PathBuf,
    format: WorkbookFormat,
    sheets: Sheets<BufReader<File>>,
}

impl Workbook {
    /// Open `path` with the engine for `format`.
    ///
    /// With no format (unrecognised extension) every available engine is
    /// tried in turn and the first one that accepts the file wins. If none
    /// does, the last engine's error is kept as the cause.
    pub fn open(
        path: &Path,
        format: Option<WorkbookFormat>,
        capabilities: &Capabilities,
    ) -> InspectResult<Self> {
        if let Some(format) = format {
            return Self::open_as(path, format);
        }

        let mut last_cause = String::new();
        for &format in capabilities.engines() {
            match Self::open_as(path, format) {
                Ok(workbook) => return Ok(workbook),
                Err(e) => {
                    debug!(%format, error = %e, "engine rejected workbook");
                    last_cause = match e {
                        InspectError::Read { cause, .. } => cause,
                        other => other.to_string(),
                    };
                }
            }
        }

        let tried: Vec<&str> = capabilities.engines().iter().map(|f| f.feature()).collect();
        Err(InspectError::read(
            path,
            format!(
                "{} is not a recognised workbook (tried {}): {}",
                path.display(),
                tried.join(", "),
                last_cause
            ),
        ))
    }

    /// Open with one engine. Engines left out of the build are unreachable
    /// and report [`InspectError::MissingDependency`].
    fn open_as(path: &Path, format: WorkbookFormat) -> InspectResult<Self> {
        debug!(path = %path.display(), %format, "opening workbook");

        let sheets = match format {
            #[cfg(feature = "xlsx")]
            WorkbookFormat::Xlsx => open_workbook::<Xlsx<_>, _>(path)
                .map(Sheets::Xlsx)
                .map_err(|e| InspectError::read(path, e))?,
            #[cfg(feature = "xlsb")]
            WorkbookFormat::Xlsb => open_workbook::<Xlsb<_>, _>(path)
                .map(Sheets::Xlsb)
                .map_err(|e| InspectError::read(path, e))?,
            #[cfg(feature = "xls")]
            WorkbookFormat::Xls => open_workbook::<Xls<_>, _>(path)
                .map(Sheets::Xls)
                .map_err(|e| InspectError::read(path, e))?,
            #[cfg(feature = "ods")]
            WorkbookFormat::Ods => open_workbook::<Ods<_>, _>(path)
                .map(Sheets::Ods)
                .map_err(|e| InspectError::read(path, e))?,
            #[allow(unreachable_patterns)]
            disabled => {
                return Err(InspectError::MissingDependency {
                    capability: disabled.to_string(),
                    feature: disabled.feature(),
                })
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            format,
            sheets,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> WorkbookFormat {
        self.format
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    /// Read the used range of one sheet
    pub fn worksheet_range(&mut self, sheet_name: &str) -> InspectResult<Range<Data>> {
        if !self.sheet_names().iter().any(|name| name == sheet_name) {
            return Err(InspectError::read(
                &self.path,
                format!("Worksheet named '{}' not found", sheet_name),
            ));
        }

        self.sheets
            .worksheet_range(sheet_name)
            .map_err(|e| InspectError::read(&self.path, e))
    }
}

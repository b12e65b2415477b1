//! The sheet inspector: probe, open, enumerate, preview

use crate::capability::Capabilities;
use crate::config::InspectConfig;
use crate::error::{InspectError, InspectResult};
use crate::preview::Preview;
use crate::report::{Report, SheetReport};
use crate::workbook::Workbook;
use std::path::Path;
use tracing::{debug, info};

/// Inspect the workbook at `path` with default settings
pub fn inspect<P: AsRef<Path>>(path: P) -> InspectResult<Report> {
    Inspector::new(InspectConfig::new(path)).run()
}

/// A part of the report, delivered as soon as it is built
#[derive(Debug, Clone, Copy)]
pub enum InspectEvent<'a> {
    /// The workbook opened; every sheet name in workbook order
    SheetNames(&'a [String]),
    /// One previewed sheet
    Sheet(&'a SheetReport),
}

/// Runs one inspection
pub struct Inspector {
    config: InspectConfig,
}

impl Inspector {
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InspectConfig {
        &self.config
    }

    /// Probe capabilities, then inspect
    pub fn run(&self) -> InspectResult<Report> {
        let capabilities = Capabilities::probe()?;
        self.run_with(&capabilities)
    }

    /// Inspect with an already probed set of capabilities.
    ///
    /// The first failure aborts the run and no report is returned. Use
    /// [`Inspector::stream_with`] to see the parts built before the failure.
    pub fn run_with(&self, capabilities: &Capabilities) -> InspectResult<Report> {
        self.stream_with(capabilities, |_| {})
    }

    /// Probe capabilities, then inspect, reporting each part as it is built
    pub fn stream<F>(&self, on_event: F) -> InspectResult<Report>
    where
        F: FnMut(InspectEvent<'_>),
    {
        let capabilities = Capabilities::probe()?;
        self.stream_with(&capabilities, on_event)
    }

    /// Inspect, handing each part of the report to `on_event` once built.
    ///
    /// The sheet names arrive first, then each previewed sheet in workbook
    /// order. When a sheet fails to read, the events already delivered stand
    /// and the error is returned without visiting the remaining sheets.
    pub fn stream_with<F>(
        &self,
        capabilities: &Capabilities,
        mut on_event: F,
    ) -> InspectResult<Report>
    where
        F: FnMut(InspectEvent<'_>),
    {
        let path = self.config.path.as_path();
        let format = capabilities.require_for(path)?;

        if !path.exists() {
            return Err(InspectError::FileNotFound(path.to_path_buf()));
        }

        let mut workbook = Workbook::open(path, format, capabilities)?;
        let sheet_names = workbook.sheet_names();
        info!(
            path = %workbook.path().display(),
            format = %workbook.format(),
            sheets = sheet_names.len(),
            "opened workbook"
        );
        on_event(InspectEvent::SheetNames(&sheet_names));

        if let Some(missing) = self
            .config
            .sheets
            .iter()
            .find(|requested| !sheet_names.contains(requested))
        {
            return Err(InspectError::read(
                path,
                format!("Worksheet named '{}' not found", missing),
            ));
        }

        let mut sheets = Vec::new();
        for name in sheet_names.iter().filter(|n| self.config.wants_sheet(n)) {
            let range = workbook.worksheet_range(name)?;
            let preview = Preview::from_range(&range, self.config.preview_rows);
            debug!(
                sheet = %name,
                columns = preview.columns.len(),
                rows = preview.total_rows,
                "previewed sheet"
            );
            let sheet = SheetReport::new(name.clone(), preview);
            on_event(InspectEvent::Sheet(&sheet));
            sheets.push(sheet);
        }

        Ok(Report {
            sheet_names,
            sheets,
        })
    }
}

use std::path::PathBuf;
use thiserror::Error;

pub type InspectResult<T> = Result<T, InspectError>;

/// Exit status for a missing capability or a missing workbook
pub const EXIT_FAILURE: u8 = 1;

/// Exit status for a read failure when running with `--strict`
pub const EXIT_READ_ERROR: u8 = 2;

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("Error: {capability} not available (rebuild with the \"{feature}\" feature enabled)")]
    MissingDependency {
        capability: String,
        feature: &'static str,
    },

    #[error("Error: File not found at {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Error reading excel: {cause}")]
    Read { path: PathBuf, cause: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl InspectError {
    /// Build a read failure for `path` from any displayable cause.
    ///
    /// Multi-line causes are folded onto one line.
    pub fn read(path: impl Into<PathBuf>, cause: impl std::fmt::Display) -> Self {
        let cause = cause
            .to_string()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        InspectError::Read {
            path: path.into(),
            cause,
        }
    }

    /// Process exit status for this failure.
    ///
    /// Read failures are reported and swallowed unless `strict` is set.
    pub fn exit_code(&self, strict: bool) -> u8 {
        match self {
            InspectError::Read { .. } if strict => EXIT_READ_ERROR,
            InspectError::Read { .. } => 0,
            InspectError::MissingDependency { .. }
            | InspectError::FileNotFound(_)
            | InspectError::Json(_)
            | InspectError::Yaml(_) => EXIT_FAILURE,
        }
    }
}

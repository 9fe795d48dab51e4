use std::path::PathBuf;

use thiserror::Error;

use crate::ingestion::IngestionSeverity;

/// Convenience result type used across ingestion and analysis.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Error type returned by ingestion, analysis, and dataset generation.
///
/// Non-numeric tokens are never errors: they become [`crate::types::Entry::Invalid`] values or
/// [`crate::types::SkippedLine`] diagnostics.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The submission was empty (or a single empty token).
    #[error("data can't be empty")]
    EmptyInput,

    /// No valid numeric values were left to analyze.
    #[error("no valid numeric data to analyze")]
    EmptyDataset,

    /// The input path does not carry the expected file extension.
    #[error("invalid file extension for '{}': expected .{expected}", path.display())]
    InvalidExtension { path: PathBuf, expected: String },

    /// The input path does not exist.
    #[error("file not found: '{}'", path.display())]
    FileNotFound { path: PathBuf },

    /// The process may not open (or create) the path.
    #[error("permission denied: '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    /// File content is not valid UTF-8.
    #[error("'{}' is not valid UTF-8 (line {line})", path.display())]
    Encoding { path: PathBuf, line: usize },

    /// Any other operating system error, with the original message preserved.
    #[error("os error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generator range where the start lies above the end.
    #[error("invalid range: start {start} is greater than end {end}")]
    InvalidRange { start: i64, end: i64 },
}

impl AnalysisError {
    /// Map an [`std::io::Error`] raised while accessing `path` onto the matching variant.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source: err },
        }
    }

    /// Severity used by observers and alert thresholds.
    pub fn severity(&self) -> IngestionSeverity {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::Encoding { .. }
            | Self::Io { .. } => IngestionSeverity::Critical,
            Self::EmptyInput | Self::InvalidExtension { .. } | Self::InvalidRange { .. } => {
                IngestionSeverity::Error
            }
            Self::EmptyDataset => IngestionSeverity::Warning,
        }
    }
}

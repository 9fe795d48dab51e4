//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`analyze_source`] (from [`source`]) which:
//!
//! - accepts any [`InputSource`] (comma list, one-at-a-time entries, or `.txt` file)
//! - runs the shared filter/statistics stage and returns an [`AnalysisOutcome`]
//! - optionally reports completion/skipped lines/failures to an [`IngestionObserver`]
//!
//! Mode-specific helpers are also available under:
//! - [`tokenize`]
//! - [`file`]

pub mod file;
pub mod observability;
pub mod source;
pub mod tokenize;

pub use file::{FileRead, check_extension, normalize_path, read_numeric_file, read_numeric_lines};
pub use observability::{
    CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    LogObserver,
};
pub use source::{AnalysisOutcome, AnalysisRequest, InputMode, InputSource, IngestionOptions, analyze_source};
pub use tokenize::{EntryCollector, Submission, dataset_from_list, is_done, tokenize_list};

//! `basic-data-analysis` computes descriptive statistics (mean, median, mode, multi-mode) over
//! small numeric datasets, tolerating and reporting non-numeric entries.
//!
//! The primary entrypoint is [`ingestion::analyze_source`], which runs any input mode through
//! the same filter → statistics pipeline and returns an [`types::AnalysisReport`].
//!
//! ## Input modes
//!
//! - **Comma list**: `"1, 2, 3"` or `"(1, 2, 3)"` (one outer parenthesis pair is stripped)
//! - **One at a time**: entries collected line by line until `done` (case-insensitive)
//! - **Text file**: a `.txt` file with one number per line; unparseable lines are skipped and
//!   reported, and I/O faults keep whatever was read before them
//!
//! ## Edge cases
//!
//! - Tokens that are not finite numbers (including `inf`/`NaN`) are kept, in their original
//!   text, in [`types::AnalysisReport::invalid`].
//! - With no valid values the report's numeric fields are `None`; analysis never panics.
//! - When several values tie for the highest frequency, [`types::AnalysisReport::mode`] is the
//!   smallest of them and [`types::AnalysisReport::multi_modes`] lists all of them.
//!
//! ## Quick example
//!
//! ```rust
//! use basic_data_analysis::ingestion::{analyze_source, InputSource, IngestionOptions};
//!
//! # fn main() -> Result<(), basic_data_analysis::AnalysisError> {
//! let out = analyze_source(
//!     &InputSource::List("1, 2, a, 4".to_string()),
//!     &IngestionOptions::default(),
//! )?;
//! assert_eq!(out.report.median, Some(2.0));
//! assert_eq!(out.report.invalid, vec!["a".to_string()]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: tokenizing, file reading, unified entrypoint, and observers
//! - [`processing`]: validity filter and statistics engine
//! - [`types`]: dataset, partition, and report types
//! - [`generator`]: random dataset files in the format the file reader consumes
//! - [`cli`]: interactive menu session
//! - [`error`]: error type used across the crate

pub mod cli;
pub mod error;
pub mod generator;
pub mod ingestion;
pub mod processing;
pub mod types;

pub use error::{AnalysisError, AnalysisResult};

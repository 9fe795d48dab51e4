//! In-memory analysis of ingested data.
//!
//! The processing layer is the shared downstream stage of every input mode:
//!
//! - [`filter()`]: split a [`Dataset`] into valid numbers and invalid originals
//! - [`stats::describe`]: mean, median, single mode, and multi-mode
//! - [`analyze()`]: filter → statistics → [`AnalysisReport`]
//!
//! ## Example: list input
//!
//! ```rust
//! use basic_data_analysis::ingestion::tokenize_list;
//! use basic_data_analysis::processing::analyze;
//! use basic_data_analysis::types::Dataset;
//!
//! let ds = Dataset::new(tokenize_list("1, 2, a, 4")).unwrap();
//! let report = analyze(&ds);
//!
//! assert_eq!(report.invalid, vec!["a".to_string()]);
//! assert_eq!(report.median, Some(2.0));
//! ```

pub mod filter;
pub mod stats;

pub use filter::{classify, classify_entry, filter, parse_number, partition};
pub use stats::{describe, mean, median, mode, multimode};

use crate::error::AnalysisError;
use crate::types::{AnalysisReport, Dataset, Partition, SkippedLine};

/// Filter `dataset` and compute statistics over the valid values.
///
/// Never fails: when nothing is numeric the report's numeric fields are `None` and
/// [`AnalysisReport::is_empty_dataset`] is `true`.
pub fn analyze(dataset: &Dataset) -> AnalysisReport {
    report_from_partition(filter(dataset), Vec::new())
}

/// Build a report from an existing partition plus any skipped file lines.
pub fn report_from_partition(partition: Partition, skipped: Vec<SkippedLine>) -> AnalysisReport {
    let Partition { valid, invalid } = partition;
    let mut report = AnalysisReport {
        valid_count: valid.len(),
        invalid,
        skipped,
        ..Default::default()
    };

    match describe(&valid) {
        Ok(stats) => {
            report.mean = Some(stats.mean);
            report.median = Some(stats.median);
            report.mode = Some(stats.mode);
            report.multi_modes = stats.multi_modes;
        }
        Err(AnalysisError::EmptyDataset) => {
            log::warn!("no valid numeric values to analyze");
        }
        Err(e) => log::error!("statistics failed: {e}"),
    }

    report
}

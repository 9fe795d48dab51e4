//! Unified analysis entrypoint.
//!
//! Most callers should use [`analyze_source`], which runs any [`InputSource`] through the
//! same pipeline: tokenize (or read the file) → filter → statistics → [`AnalysisReport`].
//!
//! - List and entry modes reject empty submissions with [`AnalysisError::EmptyInput`]
//!   before any analysis happens.
//! - File mode never fails outright: a terminal fault is returned in
//!   [`AnalysisOutcome::fault`] and the report covers whatever was read before it.
//! - If an [`IngestionObserver`] is configured, completion, skipped lines, and failures are
//!   reported to it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{AnalysisError, AnalysisResult};
use crate::processing::{analyze, report_from_partition};
use crate::types::{AnalysisReport, Dataset, Partition};

use super::file::{DEFAULT_EXTENSION, read_numeric_file};
use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};
use super::tokenize::tokenize_list;

/// The three ways raw data reaches the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A comma-separated list, optionally wrapped in one pair of parentheses.
    List(String),
    /// Entries collected one at a time.
    Entries(Vec<String>),
    /// A `.txt` file with one value per line.
    File(PathBuf),
}

impl InputSource {
    /// The [`InputMode`] of this source.
    pub fn mode(&self) -> InputMode {
        match self {
            Self::List(_) => InputMode::List,
            Self::Entries(_) => InputMode::Entries,
            Self::File(_) => InputMode::File,
        }
    }
}

/// Input mode tag used in observer contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    List,
    Entries,
    File,
}

/// Options controlling ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
    /// Required file extension for file mode, without the dot (case-insensitive).
    pub extension: String,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .field("extension", &self.extension)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// Result of analyzing one source.
#[derive(Debug)]
pub struct AnalysisOutcome {
    /// Statistics over whatever numeric data was available.
    pub report: AnalysisReport,
    /// Resource fault that interrupted file ingestion, if any.
    pub fault: Option<AnalysisError>,
}

/// Run the full pipeline for `source`.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use basic_data_analysis::ingestion::{analyze_source, InputSource, IngestionOptions, LogObserver};
///
/// # fn main() -> Result<(), basic_data_analysis::AnalysisError> {
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(LogObserver)),
///     ..Default::default()
/// };
///
/// let outcome = analyze_source(&InputSource::File("random_data.txt".into()), &opts)?;
/// if let Some(fault) = &outcome.fault {
///     eprintln!("read stopped early: {fault}");
/// }
/// println!("{}", outcome.report);
/// # Ok(())
/// # }
/// ```
pub fn analyze_source(source: &InputSource, options: &IngestionOptions) -> AnalysisResult<AnalysisOutcome> {
    let ctx = IngestionContext {
        mode: source.mode(),
        path: match source {
            InputSource::File(p) => Some(p.clone()),
            _ => None,
        },
    };

    let outcome = match source {
        InputSource::List(text) => Dataset::new(tokenize_list(text)).map(|ds| analyze_dataset(&ds)),
        InputSource::Entries(entries) => Dataset::new(entries.clone()).map(|ds| analyze_dataset(&ds)),
        InputSource::File(path) => Ok(analyze_file(path, options, &ctx)),
    };

    if let Some(obs) = options.observer.as_ref() {
        match &outcome {
            Ok(out) => {
                obs.on_success(
                    &ctx,
                    IngestionStats {
                        valid: out.report.valid_count,
                        invalid: out.report.invalid.len(),
                        skipped: out.report.skipped.len(),
                    },
                );
                if let Some(fault) = &out.fault {
                    report_failure(obs.as_ref(), &ctx, fault, options.alert_at_or_above);
                }
                if out.report.is_empty_dataset() {
                    report_failure(
                        obs.as_ref(),
                        &ctx,
                        &AnalysisError::EmptyDataset,
                        options.alert_at_or_above,
                    );
                }
            }
            Err(e) => report_failure(obs.as_ref(), &ctx, e, options.alert_at_or_above),
        }
    }

    outcome
}

fn analyze_dataset(dataset: &Dataset) -> AnalysisOutcome {
    AnalysisOutcome {
        report: analyze(dataset),
        fault: None,
    }
}

fn analyze_file(path: &Path, options: &IngestionOptions, ctx: &IngestionContext) -> AnalysisOutcome {
    let read = read_numeric_file(path, &options.extension);
    if let Some(obs) = options.observer.as_ref() {
        for skipped in &read.skipped {
            obs.on_skipped_line(ctx, skipped);
        }
    }

    // Lines are already numeric; nothing is left for the invalid side.
    let partition = Partition {
        valid: read.values,
        invalid: Vec::new(),
    };
    AnalysisOutcome {
        report: report_from_partition(partition, read.skipped),
        fault: read.fault,
    }
}

fn report_failure(
    obs: &dyn IngestionObserver,
    ctx: &IngestionContext,
    error: &AnalysisError,
    alert_at_or_above: IngestionSeverity,
) {
    let sev = error.severity();
    obs.on_failure(ctx, sev, error);
    if sev >= alert_at_or_above {
        obs.on_alert(ctx, sev, error);
    }
}

/// Convenience helper for callers that want an owned request object.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Where the data comes from.
    pub source: InputSource,
    /// Options controlling ingestion.
    pub options: IngestionOptions,
}

impl AnalysisRequest {
    /// Execute the request by calling [`analyze_source`].
    pub fn run(&self) -> AnalysisResult<AnalysisOutcome> {
        analyze_source(&self.source, &self.options)
    }
}

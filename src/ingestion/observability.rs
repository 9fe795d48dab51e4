use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::json;

use crate::error::AnalysisError;
use crate::types::SkippedLine;

use super::source::InputMode;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (bad input).
    Error,
    /// Critical error (I/O or other resource failures).
    Critical,
}

/// Context about an ingestion attempt.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// Input mode used.
    pub mode: InputMode,
    /// Input path, for file mode.
    pub path: Option<PathBuf>,
}

impl IngestionContext {
    fn path_display(&self) -> String {
        self.path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Stats reported when ingestion completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    /// Number of valid numeric values.
    pub valid: usize,
    /// Number of invalid entries (list/entry modes).
    pub invalid: usize,
    /// Number of skipped lines (file mode).
    pub skipped: usize,
}

/// Observer interface for ingestion outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait IngestionObserver: Send + Sync {
    /// Called when ingestion completes, even if a terminal fault cut it short.
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// Called for every file line that could not be parsed.
    fn on_skipped_line(&self, _ctx: &IngestionContext, _skipped: &SkippedLine) {}

    /// Called when ingestion fails or is cut short.
    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &AnalysisError) {}

    /// Called when a failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &AnalysisError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl IngestionObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_skipped_line(&self, ctx: &IngestionContext, skipped: &SkippedLine) {
        for o in &self.observers {
            o.on_skipped_line(ctx, skipped);
        }
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &AnalysisError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &AnalysisError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Forwards ingestion events to the [`log`] facade.
#[derive(Debug, Default)]
pub struct LogObserver;

impl IngestionObserver for LogObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        log::info!(
            "[ingest][ok] mode={:?} path={} valid={} invalid={} skipped={}",
            ctx.mode,
            ctx.path_display(),
            stats.valid,
            stats.invalid,
            stats.skipped
        );
    }

    fn on_skipped_line(&self, ctx: &IngestionContext, skipped: &SkippedLine) {
        log::warn!("[ingest][skip] path={} {}", ctx.path_display(), skipped);
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &AnalysisError) {
        let level = match severity {
            IngestionSeverity::Info => log::Level::Info,
            IngestionSeverity::Warning => log::Level::Warn,
            IngestionSeverity::Error | IngestionSeverity::Critical => log::Level::Error,
        };
        log::log!(
            level,
            "[ingest][{:?}] mode={:?} path={} err={}",
            severity,
            ctx.mode,
            ctx.path_display(),
            error
        );
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &AnalysisError) {
        log::error!(
            "[ALERT][ingest][{:?}] mode={:?} path={} err={}",
            severity,
            ctx.mode,
            ctx.path_display(),
            error
        );
    }
}

/// Appends ingestion events to a local log file, one JSON object per line.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append(&self, event: serde_json::Value) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{event}");
        }
    }
}

impl IngestionObserver for FileObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.append(json!({
            "ts": unix_ts(),
            "event": "ok",
            "mode": format!("{:?}", ctx.mode),
            "path": ctx.path_display(),
            "valid": stats.valid,
            "invalid": stats.invalid,
            "skipped": stats.skipped,
        }));
    }

    fn on_skipped_line(&self, ctx: &IngestionContext, skipped: &SkippedLine) {
        self.append(json!({
            "ts": unix_ts(),
            "event": "skip",
            "path": ctx.path_display(),
            "line": skipped.line,
            "raw": skipped.raw,
            "reason": skipped.reason,
        }));
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &AnalysisError) {
        self.append(json!({
            "ts": unix_ts(),
            "event": "fail",
            "severity": format!("{severity:?}"),
            "mode": format!("{:?}", ctx.mode),
            "path": ctx.path_display(),
            "err": error.to_string(),
        }));
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &AnalysisError) {
        self.append(json!({
            "ts": unix_ts(),
            "event": "alert",
            "severity": format!("{severity:?}"),
            "mode": format!("{:?}", ctx.mode),
            "path": ctx.path_display(),
            "err": error.to_string(),
        }));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

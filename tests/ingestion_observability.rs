use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use basic_data_analysis::AnalysisError;
use basic_data_analysis::ingestion::{
    CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionOptions, IngestionSeverity,
    IngestionStats, InputSource, analyze_source,
};
use basic_data_analysis::types::SkippedLine;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<IngestionStats>>,
    skipped: Mutex<Vec<usize>>,
    failures: Mutex<Vec<IngestionSeverity>>,
    alerts: Mutex<Vec<IngestionSeverity>>,
}

impl IngestionObserver for RecordingObserver {
    fn on_success(&self, _ctx: &IngestionContext, stats: IngestionStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_skipped_line(&self, _ctx: &IngestionContext, skipped: &SkippedLine) {
        self.skipped.lock().unwrap().push(skipped.line);
    }

    fn on_failure(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &AnalysisError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &AnalysisError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn tmp_file(ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("basic-data-analysis-observe-{nanos}.{ext}"))
}

fn options_with(obs: Arc<RecordingObserver>) -> IngestionOptions {
    IngestionOptions {
        observer: Some(obs),
        alert_at_or_above: IngestionSeverity::Critical,
        ..Default::default()
    }
}

#[test]
fn observer_receives_failure_and_alert_on_missing_file() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options_with(obs.clone());

    // Missing file -> FileNotFound (Critical), then an empty dataset (Warning).
    let _ = analyze_source(&InputSource::File(tmp_file("txt")), &opts).unwrap();

    assert_eq!(
        obs.failures.lock().unwrap().clone(),
        vec![IngestionSeverity::Critical, IngestionSeverity::Warning]
    );
    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![IngestionSeverity::Critical]);
    assert_eq!(obs.successes.lock().unwrap().len(), 1);
}

#[test]
fn observer_sees_skipped_lines() {
    let path = tmp_file("txt");
    fs::write(&path, "1\noops\n2\n\n").unwrap();

    let obs = Arc::new(RecordingObserver::default());
    let out = analyze_source(&InputSource::File(path.clone()), &options_with(obs.clone())).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(out.report.valid_count, 2);
    assert_eq!(obs.skipped.lock().unwrap().clone(), vec![2, 4]);
    assert_eq!(
        obs.successes.lock().unwrap().clone(),
        vec![IngestionStats { valid: 2, invalid: 0, skipped: 2 }]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn empty_input_is_an_error_without_alert() {
    let obs = Arc::new(RecordingObserver::default());
    let err = analyze_source(&InputSource::List(String::new()), &options_with(obs.clone())).unwrap_err();

    assert!(matches!(err, AnalysisError::EmptyInput));
    assert_eq!(obs.failures.lock().unwrap().clone(), vec![IngestionSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
    assert!(obs.successes.lock().unwrap().is_empty());
}

#[test]
fn composite_and_file_observers_record_events() {
    let log_path = tmp_file("log");
    let recording = Arc::new(RecordingObserver::default());
    let first: Arc<dyn IngestionObserver> = recording.clone();
    let second: Arc<dyn IngestionObserver> = Arc::new(FileObserver::new(&log_path));
    let composite = CompositeObserver::new(vec![first, second]);
    let opts = IngestionOptions {
        observer: Some(Arc::new(composite)),
        ..Default::default()
    };

    let _ = analyze_source(&InputSource::File("data.csv".into()), &opts).unwrap();

    let log = fs::read_to_string(&log_path).unwrap();
    fs::remove_file(&log_path).unwrap();

    let events: Vec<serde_json::Value> = log.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    let kinds: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
    assert_eq!(kinds, vec!["ok", "fail", "fail"]);
    assert_eq!(events[1]["severity"], "Error");
    assert_eq!(recording.failures.lock().unwrap().len(), 2);
}

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use basic_data_analysis::cli::{Session, SessionConfig};

fn tmp_file(ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("basic-data-analysis-cli-{nanos}.{ext}"))
}

fn run_session(input: &str, config: SessionConfig) -> String {
    let mut session = Session::new(Cursor::new(input.to_string()), Vec::new(), config).with_seed(5);
    session.run().unwrap();
    String::from_utf8(session.into_output()).unwrap()
}

#[test]
fn whole_list_reprompts_on_empty_then_reports() {
    let out = run_session("1\n\n1, 2, a, 4\nexit\n", SessionConfig::default());

    assert!(out.contains("Error: data can't be empty"));
    assert!(out.contains("Median: 2.0"));
    assert!(out.contains("Invalid data include: [\"a\"]"));
    assert!(out.trim_end().ends_with("Exiting..."));
}

#[test]
fn one_at_a_time_collects_until_done() {
    let out = run_session("2\ndone\n5\n5\nx\nDONE\nExit\n", SessionConfig::default());

    assert!(out.contains("Current: []"));
    assert!(out.contains("Current: [\"5\", \"5\", \"x\"]"));
    assert!(out.contains("Error: data can't be empty"));
    assert!(out.contains("Mode: 5.0"));
    assert!(out.contains("Invalid data include: [\"x\"]"));
}

#[test]
fn unknown_menu_option_and_eof_exit() {
    let out = run_session("9\n", SessionConfig::default());
    assert!(out.contains("Invalid menu option"));
    assert!(out.contains("Exiting..."));
}

#[test]
fn text_file_mode_reports_fault_and_empty_dataset() {
    let out = run_session("3\n\"missing_numbers.txt\"\nexit\n", SessionConfig::default());
    assert!(out.contains("file not found"));
    assert!(out.contains("no valid numeric data"));
}

#[test]
fn generate_then_analyze_file() {
    let path = tmp_file("txt");
    let config = SessionConfig {
        generator_output: path.clone(),
        ..Default::default()
    };
    let input = format!("4\n1\n1\nten\n6\n8\n3\n{}\nexit\n", path.display());
    let out = run_session(&input, config);
    let text = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(out.contains("Input is not a whole number"));
    assert!(out.contains(">> Saved 8 values"));
    assert_eq!(text.lines().count(), 8);
    assert!(out.contains("Mean: "));
    assert!(!out.contains("Skipped line"));
}

#[test]
fn generator_stop_returns_to_menu() {
    let out = run_session("4\nstop\nexit\n", SessionConfig::default());
    assert!(out.contains("Stopping..."));
    assert!(out.matches("What input mode do you want to use?").count() >= 2);
}

#[test]
fn huge_decimal_places_do_not_abort_session() {
    let path = tmp_file("txt");
    let config = SessionConfig {
        generator_output: path.clone(),
        ..Default::default()
    };
    let input = format!("4\n2\n0\n1\n100000\n4\n3\n{}\nexit\n", path.display());
    let out = run_session(&input, config);
    let text = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(out.contains(">> Saved 4 values"));
    assert_eq!(text.lines().count(), 4);
    assert!(!out.contains("Skipped line"));
    assert!(out.trim_end().ends_with("Exiting..."));
}

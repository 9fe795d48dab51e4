//! Normalization of raw user input into [`Dataset`] tokens.

use crate::error::{AnalysisError, AnalysisResult};
use crate::types::Dataset;

/// Sentinel that ends one-at-a-time collection (case-insensitive, surrounding whitespace
/// ignored).
pub const DONE_SENTINEL: &str = "done";

/// Split a comma-separated list into trimmed tokens.
///
/// A single outer `(`…`)` pair around the (trimmed) input is stripped first, so
/// `"(1, 2, 3)"` and `"1, 2, 3"` yield the same tokens. Any other parentheses are kept
/// and end up in the token text.
pub fn tokenize_list(input: &str) -> Vec<String> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);
    body.split(',').map(|tok| tok.trim().to_owned()).collect()
}

/// Tokenize a comma-separated list and wrap it in a [`Dataset`].
///
/// Returns [`AnalysisError::EmptyInput`] for blank input.
pub fn dataset_from_list(input: &str) -> AnalysisResult<Dataset> {
    Dataset::new(tokenize_list(input))
}

/// `true` if `line` is the `done` sentinel.
pub fn is_done(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(DONE_SENTINEL)
}

/// Outcome of submitting one line to an [`EntryCollector`].
#[derive(Debug)]
pub enum Submission {
    /// The trimmed line was recorded as an entry.
    Added,
    /// `done` was submitted; collection is complete.
    Finished(Dataset),
    /// `done` arrived before any entry; collection continues.
    Rejected(AnalysisError),
}

/// Collects entries one line at a time until the `done` sentinel.
#[derive(Debug, Default, Clone)]
pub struct EntryCollector {
    entries: Vec<String>,
}

impl EntryCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries collected so far.
    pub fn current(&self) -> &[String] {
        &self.entries
    }

    /// Submit one user line.
    pub fn submit(&mut self, line: &str) -> Submission {
        if is_done(line) {
            return match Dataset::new(std::mem::take(&mut self.entries)) {
                Ok(ds) => Submission::Finished(ds),
                Err(e) => Submission::Rejected(e),
            };
        }
        self.entries.push(line.trim().to_owned());
        Submission::Added
    }
}

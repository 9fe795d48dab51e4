//! Core data model for ingestion and analysis.
//!
//! Raw input is normalized into a [`Dataset`] of string tokens, classified into [`Entry`]
//! values, split into a [`Partition`], and summarized by [`Statistics`] inside an
//! [`AnalysisReport`].

use std::fmt;

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};

/// An ordered, non-empty sequence of raw textual entries collected from one input mode.
///
/// Duplicates are allowed. Order is input order; it is not significant to statistics but is
/// preserved for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    entries: Vec<String>,
}

impl Dataset {
    /// Create a dataset from raw entries.
    ///
    /// Returns [`AnalysisError::EmptyInput`] if there are no entries, or if the only entry is
    /// the empty string.
    pub fn new(entries: Vec<String>) -> AnalysisResult<Self> {
        match entries.as_slice() {
            [] => Err(AnalysisError::EmptyInput),
            [only] if only.is_empty() => Err(AnalysisError::EmptyInput),
            _ => Ok(Self { entries }),
        }
    }

    /// Raw entries in input order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the dataset and return its entries.
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

/// A classified raw entry: either a finite number or the original text.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Parsed finite number.
    Valid(f64),
    /// Original text that did not parse as a finite number.
    Invalid(String),
}


/// Numeric/non-numeric split of a [`Dataset`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Partition {
    /// Finite numeric values.
    pub valid: Vec<f64>,
    /// Entries that failed numeric parsing, in their original textual form and order.
    pub invalid: Vec<String>,
}

impl FromIterator<Entry> for Partition {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut out = Self::default();
        for entry in iter {
            match entry {
                Entry::Valid(v) => out.valid.push(v),
                Entry::Invalid(raw) => out.invalid.push(raw),
            }
        }
        out
    }
}

/// A file line that could not be parsed as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    /// Line content without its terminator.
    pub raw: String,
    /// Human-readable reason.
    pub reason: String,
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} (raw='{}')", self.line, self.reason, self.raw)
    }
}

/// Descriptive statistics over a non-empty set of valid values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Middle value; mean of the two central values for even counts.
    pub median: f64,
    /// Most frequent value. Among ties, the smallest tied value.
    pub mode: f64,
    /// All values sharing the highest frequency, ascending and duplicate-free.
    pub multi_modes: Vec<f64>,
}

impl Statistics {
    /// `true` when more than one value shares the highest frequency, i.e. `mode` was picked
    /// among ties.
    pub fn has_tie(&self) -> bool {
        self.multi_modes.len() > 1
    }
}

/// Transient report produced by one analysis invocation.
///
/// Numeric fields are `None` only when no valid values were found.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub mode: Option<f64>,
    pub multi_modes: Vec<f64>,
    /// Number of valid values that were analyzed.
    pub valid_count: usize,
    /// Entries that were not numeric, in original form.
    pub invalid: Vec<String>,
    /// File lines that were skipped (file mode only).
    pub skipped: Vec<SkippedLine>,
}

impl AnalysisReport {
    /// `true` if there was nothing numeric to analyze.
    pub fn is_empty_dataset(&self) -> bool {
        self.valid_count == 0
    }

    /// `true` when the reported single mode was chosen among tied values.
    pub fn has_mode_tie(&self) -> bool {
        self.multi_modes.len() > 1
    }

    /// Serialize the report as a JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.mean, self.median, self.mode) {
            (Some(mean), Some(median), Some(mode)) => {
                writeln!(f, "Mean: {mean:?}")?;
                writeln!(f, "Median: {median:?}")?;
                writeln!(f, "Mode: {mode:?}")?;
                write!(f, "Modes: {}", NumberList(&self.multi_modes))?;
                if self.has_mode_tie() {
                    write!(f, " (tie: {} values share the highest frequency)", self.multi_modes.len())?;
                }
                writeln!(f)?;
            }
            _ => writeln!(f, "Error: {}", AnalysisError::EmptyDataset)?,
        }
        write!(f, "Invalid data include: {:?}", self.invalid)?;
        for skipped in &self.skipped {
            write!(f, "\nSkipped {skipped}")?;
        }
        Ok(())
    }
}

struct NumberList<'a>(&'a [f64]);

impl fmt::Display for NumberList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v:?}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::{AnalysisReport, Dataset, Entry, Partition};
    use crate::error::AnalysisError;

    #[test]
    fn dataset_rejects_empty_submissions() {
        assert!(matches!(Dataset::new(vec![]), Err(AnalysisError::EmptyInput)));
        assert!(matches!(
            Dataset::new(vec![String::new()]),
            Err(AnalysisError::EmptyInput)
        ));
        let ds = Dataset::new(vec![String::new(), String::new()]).unwrap();
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn partition_collects_entries_in_order() {
        let p: Partition = vec![
            Entry::Invalid("b".to_string()),
            Entry::Valid(2.0),
            Entry::Invalid("a".to_string()),
            Entry::Valid(1.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(p.valid, vec![2.0, 1.0]);
        assert_eq!(p.invalid, vec!["b", "a"]);
    }

    #[test]
    fn display_reports_tie_and_invalid() {
        let report = AnalysisReport {
            mean: Some(1.8),
            median: Some(2.0),
            mode: Some(1.0),
            multi_modes: vec![1.0, 2.0],
            valid_count: 5,
            invalid: vec!["a".to_string()],
            skipped: vec![],
        };
        let text = report.to_string();
        assert!(text.contains("Mean: 1.8"));
        assert!(text.contains("Median: 2.0\n"));
        assert!(text.contains("Mode: 1.0\n"));
        assert!(text.contains("Modes: [1.0, 2.0] (tie: 2 values"));
        assert!(text.contains("Invalid data include: [\"a\"]"));
    }

    #[test]
    fn display_empty_report() {
        let report = AnalysisReport {
            invalid: vec!["x".to_string()],
            ..Default::default()
        };
        let text = report.to_string();
        assert!(text.contains("no valid numeric data"));
        assert!(text.contains("[\"x\"]"));
    }
}

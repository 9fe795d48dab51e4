//! Validity filter: split raw entries into finite numbers and invalid residuals.

use crate::types::{Dataset, Entry, Partition};

/// Parse a single token as a finite number.
///
/// Surrounding whitespace is ignored. Tokens that parse to NaN or an infinity are rejected.
pub fn parse_number(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("empty value".to_string());
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err("non-finite number".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Classify one raw token.
pub fn classify_entry(raw: &str) -> Entry {
    match parse_number(raw) {
        Ok(v) => Entry::Valid(v),
        Err(_) => Entry::Invalid(raw.to_owned()),
    }
}

/// Classify every entry of `dataset`, preserving positions.
pub fn classify(dataset: &Dataset) -> Vec<Entry> {
    dataset.entries().iter().map(|raw| classify_entry(raw)).collect()
}

/// Partition raw entries into valid numbers and invalid originals.
///
/// Filtering is total: every entry lands in exactly one side.
pub fn partition<S: AsRef<str>>(entries: &[S]) -> Partition {
    collect_partition(entries.iter().map(|raw| classify_entry(raw.as_ref())))
}

/// Classify `dataset` and split it into a [`Partition`].
pub fn filter(dataset: &Dataset) -> Partition {
    collect_partition(classify(dataset))
}

fn collect_partition(entries: impl IntoIterator<Item = Entry>) -> Partition {
    let out: Partition = entries.into_iter().collect();
    log::debug!(
        "filter kept {} valid, {} invalid",
        out.valid.len(),
        out.invalid.len()
    );
    out
}

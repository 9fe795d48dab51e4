//! Statistics engine: mean, median, single mode, and multi-mode.
//!
//! All functions are pure and never mutate their input; values are copied and sorted
//! internally with [`f64::total_cmp`].

use crate::error::{AnalysisError, AnalysisResult};
use crate::types::Statistics;

/// Compute all statistics for `values`.
///
/// Returns [`AnalysisError::EmptyDataset`] if `values` is empty.
pub fn describe(values: &[f64]) -> AnalysisResult<Statistics> {
    let sorted = sorted_copy(values);
    describe_sorted(&sorted)
}

/// Like [`describe`], for values already sorted ascending.
pub fn describe_sorted(sorted: &[f64]) -> AnalysisResult<Statistics> {
    debug_assert!(
        sorted.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
        "values must be sorted in ascending order"
    );
    let mean = mean_of(sorted).ok_or(AnalysisError::EmptyDataset)?;
    let median = median_of_sorted(sorted).ok_or(AnalysisError::EmptyDataset)?;
    let multi_modes = multimode_of_sorted(sorted);
    let mode = *multi_modes.first().ok_or(AnalysisError::EmptyDataset)?;
    log::debug!("described {} values: mean={mean} median={median} modes={multi_modes:?}", sorted.len());

    Ok(Statistics {
        mean,
        median,
        mode,
        multi_modes,
    })
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    mean_of(values)
}

/// Median, or `None` for an empty slice.
pub fn median(values: &[f64]) -> Option<f64> {
    median_of_sorted(&sorted_copy(values))
}

/// Most frequent value (smallest among ties), or `None` for an empty slice.
pub fn mode(values: &[f64]) -> Option<f64> {
    multimode(values).first().copied()
}

/// Every value sharing the highest frequency, ascending and duplicate-free.
///
/// Empty input yields an empty vector.
pub fn multimode(values: &[f64]) -> Vec<f64> {
    multimode_of_sorted(&sorted_copy(values))
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Mean from a compensated sum, so the result stays close to the exact rational mean.
///
/// If the sum overflows, values are scaled by `1/n` first; a finite input always gives a
/// finite mean.
#[allow(clippy::cast_precision_loss)]
fn mean_of(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let (sum, residual) = compensated_sum(values.iter().copied());
    if sum.is_finite() {
        let q = sum / n;
        // Exact remainder of `sum / n`.
        let rem = (-q).mul_add(n, sum);
        Some(q + (rem + residual) / n)
    } else {
        let (sum, residual) = compensated_sum(values.iter().map(|v| v / n));
        Some(sum + residual)
    }
}

/// Neumaier summation. Returns the rounded sum and the accumulated rounding error.
fn compensated_sum(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut sum = 0.0_f64;
    let mut residual = 0.0_f64;
    for v in values {
        let t = sum + v;
        if sum.abs() >= v.abs() {
            residual += (sum - t) + v;
        } else {
            residual += (v - t) + sum;
        }
        sum = t;
    }
    (sum, residual)
}

fn median_of_sorted(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some(sorted[mid - 1] / 2.0 + sorted[mid] / 2.0)
    }
}

fn multimode_of_sorted(sorted: &[f64]) -> Vec<f64> {
    let mut runs: Vec<(f64, usize)> = Vec::new();
    for &v in sorted {
        match runs.last_mut() {
            Some((last, count)) if *last == v => *count += 1,
            _ => runs.push((v, 1)),
        }
    }
    let max = runs.iter().map(|&(_, c)| c).max().unwrap_or(0);
    runs.into_iter()
        .filter(|&(_, c)| c == max)
        .map(|(v, _)| v)
        .collect()
}

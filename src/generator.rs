//! Random dataset generation.
//!
//! Writes the same file format the file reader consumes: one numeric literal per line,
//! UTF-8, each line terminated by `\n`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::Rng;

use crate::error::{AnalysisError, AnalysisResult};

/// Default output file name, relative to the current directory.
pub const DEFAULT_OUTPUT: &str = "random_data.txt";

/// What to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorSpec {
    /// Uniform integers in `start..=end`.
    Integers { start: i64, end: i64, count: usize },
    /// Uniform floats in `start..=end`, rounded to `decimals` places.
    Floats {
        start: i64,
        end: i64,
        decimals: usize,
        count: usize,
    },
}

/// Decimal places past which rounding leaves an `f64` unchanged.
const MAX_DECIMALS: usize = 17;

impl GeneratorSpec {
    fn bounds(&self) -> (i64, i64) {
        match *self {
            Self::Integers { start, end, .. } | Self::Floats { start, end, .. } => (start, end),
        }
    }

    fn count(&self) -> usize {
        match *self {
            Self::Integers { count, .. } | Self::Floats { count, .. } => count,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn sample<R: Rng>(&self, rng: &mut R) -> String {
        match *self {
            Self::Integers { start, end, .. } => rng.gen_range(start..=end).to_string(),
            Self::Floats { start, end, decimals, .. } => {
                let v: f64 = rng.gen_range(start as f64..=end as f64);
                format!("{:?}", round_to(v, decimals))
            }
        }
    }
}

/// Round `v` to `decimals` places. Large `decimals` return `v` as is.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn round_to(v: f64, decimals: usize) -> f64 {
    if decimals >= MAX_DECIMALS {
        return v;
    }
    let scale = 10f64.powi(decimals as i32);
    (v * scale).round() / scale
}

fn samples<R: Rng>(spec: GeneratorSpec, rng: &mut R) -> AnalysisResult<impl Iterator<Item = String>> {
    let (start, end) = spec.bounds();
    if start > end {
        return Err(AnalysisError::InvalidRange { start, end });
    }
    Ok((0..spec.count()).map(move |_| spec.sample(rng)))
}

/// Generate numeric literals for `spec`.
///
/// Floats are rendered with at least one fractional digit (`7.0`, `3.25`) and no padding.
/// Returns [`AnalysisError::InvalidRange`] if `start > end`.
pub fn generate<R: Rng>(spec: &GeneratorSpec, rng: &mut R) -> AnalysisResult<Vec<String>> {
    Ok(samples(*spec, rng)?.collect())
}

/// Write `values` to `path`, one per line, replacing any existing file.
///
/// Returns the number of lines written.
pub fn write_dataset<I, S>(path: impl AsRef<Path>, values: I) -> AnalysisResult<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| AnalysisError::from_io(path, e))?;
    let mut w = BufWriter::new(file);
    let mut written = 0;
    for v in values {
        writeln!(w, "{}", v.as_ref()).map_err(|e| AnalysisError::from_io(path, e))?;
        written += 1;
    }
    w.flush().map_err(|e| AnalysisError::from_io(path, e))?;
    log::info!("wrote {written} values to {}", path.display());
    Ok(written)
}

/// Generate values for `spec` and stream them to `path`.
///
/// Returns the number of values written.
pub fn generate_to_file<R: Rng>(
    spec: &GeneratorSpec,
    rng: &mut R,
    path: impl AsRef<Path>,
) -> AnalysisResult<usize> {
    write_dataset(path, samples(*spec, rng)?)
}

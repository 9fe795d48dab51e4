//! Text file reader: one numeric literal per line, with per-line fault isolation.
//!
//! Rules:
//!
//! - The path must carry the expected extension (`.txt` by default, case-insensitive);
//!   surrounding double quotes are removed first.
//! - Each line, without its terminator and surrounding whitespace, is parsed as a finite
//!   number. Lines that do not parse become [`SkippedLine`]s and reading continues.
//! - A terminal fault (open failure, I/O error, invalid UTF-8) stops reading but keeps every
//!   value read so far.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use crate::error::AnalysisError;
use crate::processing::parse_number;
use crate::types::SkippedLine;

/// Extension expected for data files.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Everything collected from one file read.
#[derive(Debug, Default)]
pub struct FileRead {
    /// Values parsed from good lines, in file order.
    pub values: Vec<f64>,
    /// Lines that could not be parsed.
    pub skipped: Vec<SkippedLine>,
    /// Terminal fault, if reading stopped early or never started.
    pub fault: Option<AnalysisError>,
}

/// Trim `raw` and remove one pair of surrounding double quotes.
pub fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(unquoted)
}

/// Check that `path` ends in `.{expected}` (case-insensitive).
pub fn check_extension(path: &Path, expected: &str) -> Result<(), AnalysisError> {
    let matches = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(expected));
    if matches {
        Ok(())
    } else {
        Err(AnalysisError::InvalidExtension {
            path: path.to_path_buf(),
            expected: expected.to_owned(),
        })
    }
}

/// Read a numeric text file.
///
/// Never fails outright: extension, open, and read errors are returned in
/// [`FileRead::fault`] alongside whatever was read before them.
pub fn read_numeric_file(path: impl AsRef<Path>, extension: &str) -> FileRead {
    let path = path.as_ref();
    if let Err(e) = check_extension(path, extension) {
        return FileRead {
            fault: Some(e),
            ..Default::default()
        };
    }

    // The handle lives only for this scope and is closed on every return path.
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            return FileRead {
                fault: Some(AnalysisError::from_io(path, e)),
                ..Default::default()
            };
        }
    };
    read_numeric_lines(BufReader::new(file), path)
}

/// Read numeric lines from an existing reader. `path` is only used in error values.
pub fn read_numeric_lines<R: BufRead>(mut reader: R, path: &Path) -> FileRead {
    let mut out = FileRead::default();
    let mut buf = Vec::new();
    let mut line = 0usize;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                out.fault = Some(AnalysisError::from_io(path, e));
                break;
            }
        }
        line += 1;

        strip_terminator(&mut buf);
        let text = match std::str::from_utf8(&buf) {
            Ok(t) => t,
            Err(_) => {
                out.fault = Some(AnalysisError::Encoding {
                    path: path.to_path_buf(),
                    line,
                });
                break;
            }
        };
        let text = if line == 1 { text.trim_start_matches('\u{feff}') } else { text };

        match parse_number(text) {
            Ok(v) => out.values.push(v),
            Err(reason) => out.skipped.push(SkippedLine {
                line,
                raw: text.to_owned(),
                reason,
            }),
        }
    }

    log::debug!(
        "read {} values, skipped {} lines from {}",
        out.values.len(),
        out.skipped.len(),
        path.display()
    );
    out
}

fn strip_terminator(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read};
    use std::path::Path;

    use super::{check_extension, normalize_path, read_numeric_lines};
    use crate::error::AnalysisError;

    #[test]
    fn normalize_path_strips_quotes() {
        assert_eq!(normalize_path("  \"data/x.txt\" "), Path::new("data/x.txt"));
        assert_eq!(normalize_path("x.txt"), Path::new("x.txt"));
        assert_eq!(normalize_path("\"x.txt"), Path::new("\"x.txt"));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(check_extension(Path::new("a.txt"), "txt").is_ok());
        assert!(check_extension(Path::new("a.TXT"), "txt").is_ok());
        assert!(matches!(
            check_extension(Path::new("data.csv"), "txt"),
            Err(AnalysisError::InvalidExtension { .. })
        ));
        assert!(check_extension(Path::new("noext"), "txt").is_err());
    }

    #[test]
    fn bad_lines_are_skipped_not_fatal() {
        let read = read_numeric_lines(Cursor::new("452.28\nbad\n330.22\n"), Path::new("m.txt"));
        assert_eq!(read.values, vec![452.28, 330.22]);
        assert_eq!(read.skipped.len(), 1);
        assert_eq!(read.skipped[0].line, 2);
        assert_eq!(read.skipped[0].raw, "bad");
        assert!(read.fault.is_none());
    }

    #[test]
    fn crlf_blank_lines_and_missing_final_newline() {
        let read = read_numeric_lines(Cursor::new("1\r\n\n-2\r\n3"), Path::new("m.txt"));
        assert_eq!(read.values, vec![1.0, -2.0, 3.0]);
        assert_eq!(read.skipped.len(), 1);
        assert_eq!(read.skipped[0].line, 2);
    }

    #[test]
    fn invalid_utf8_stops_but_keeps_partial_values() {
        let bytes: &[u8] = b"1\n2\n\xff\xfe\n4\n";
        let read = read_numeric_lines(Cursor::new(bytes), Path::new("m.txt"));
        assert_eq!(read.values, vec![1.0, 2.0]);
        assert!(matches!(read.fault, Some(AnalysisError::Encoding { line: 3, .. })));
    }

    struct FailingAfter {
        inner: Cursor<&'static str>,
        served: bool,
    }

    impl Read for FailingAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::other("device went away"));
            }
            self.served = true;
            self.inner.read(buf)
        }
    }

    #[test]
    fn io_fault_keeps_partial_values() {
        let reader = io::BufReader::new(FailingAfter {
            inner: Cursor::new("10\n20\n"),
            served: false,
        });
        let read = read_numeric_lines(reader, Path::new("m.txt"));
        assert_eq!(read.values, vec![10.0, 20.0]);
        match read.fault {
            Some(AnalysisError::Io { source, .. }) => assert!(source.to_string().contains("device went away")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn leading_bom_is_ignored() {
        let read = read_numeric_lines(Cursor::new("\u{feff}7\n8\n"), Path::new("m.txt"));
        assert_eq!(read.values, vec![7.0, 8.0]);
    }
}

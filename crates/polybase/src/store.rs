//! Line-delimited text storage.
//!
//! One polynomial's canonical text per line, with no header or metadata.
//! Loading treats each line independently: a line that fails to parse is
//! reported and skipped, and the rest of the input is still loaded.

use std::io::{self, BufRead, Write};
use std::string::FromUtf8Error;

use log::{debug, warn};

use polybase_poly::{parse, ParseError, ParseErrorKind};

use crate::collection::Collection;

/// A line that could not be loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineError {
    /// 1-based line number.
    pub line: usize,
    /// The line's text.
    pub text: String,
    /// Why it was rejected.
    pub error: ParseError,
}

/// Outcome of a batch load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of polynomials appended.
    pub loaded: usize,
    /// Lines that were skipped.
    pub failures: Vec<LineError>,
}

impl LoadReport {
    /// Returns true if every line loaded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Collection {
    /// Appends one polynomial per line of `reader`.
    ///
    /// Blank lines parse to the zero polynomial, as `0` does. A line that
    /// is not valid UTF-8 is rejected as unknown characters at its first
    /// undecodable character.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading fails; per-line failures are
    /// collected in the report.
    pub fn load<R: BufRead>(&mut self, reader: R) -> io::Result<LoadReport> {
        let mut report = LoadReport::default();
        for (i, bytes) in reader.split(b'\n').enumerate() {
            let mut bytes = bytes?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            let line = i + 1;
            let parsed = match String::from_utf8(bytes) {
                Ok(text) => parse(&text).map_err(|error| (text, error)),
                Err(err) => Err(undecodable(err)),
            };
            match parsed {
                Ok(poly) => {
                    self.push(poly);
                    report.loaded += 1;
                }
                Err((text, error)) => {
                    warn!("line {line}: {error}: {text:?}");
                    report.failures.push(LineError { line, text, error });
                }
            }
        }
        debug!(
            "loaded {} polynomials, skipped {} lines",
            report.loaded,
            report.failures.len()
        );
        Ok(report)
    }

    /// Writes every polynomial's canonical text, one per line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn save<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for poly in self {
            writeln!(writer, "{}", poly.export())?;
        }
        writer.flush()
    }
}

/// Lossy text and an error pointing at the first invalid byte sequence.
fn undecodable(err: FromUtf8Error) -> (String, ParseError) {
    let valid = err.utf8_error().valid_up_to();
    let bytes = err.into_bytes();
    let position = String::from_utf8_lossy(&bytes[..valid]).chars().count();
    let text = String::from_utf8_lossy(&bytes).into_owned();
    (text, ParseError::new(ParseErrorKind::UnknownCharacters, position))
}

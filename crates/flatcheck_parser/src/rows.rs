//! Streaming row source over data files.

use crate::Result;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;
use tracing::error;

/// Reads a data file one line at a time.
///
/// `RowReader` is an iterator of rows, so it can feed a
/// [`Dataset`](flatcheck_core::Dataset) directly. Line terminators (`\n` and
/// `\r\n`) are stripped. Iteration stops at the first read error, which is
/// kept and returned by [`RowReader::finish`].
///
/// # Example
///
/// ```no_run
/// use flatcheck_core::{Configuration, Dataset};
/// use flatcheck_parser::RowReader;
///
/// let configuration = Configuration::from_json(r#"{ "size": 2 }"#).unwrap();
/// let mut rows = RowReader::open("data/orders.txt").unwrap();
///
/// let records = Dataset::new(rows.by_ref(), &configuration).count();
/// rows.finish().unwrap();
/// println!("{} records", records);
/// ```
pub struct RowReader<R = BufReader<File>> {
    lines: Lines<R>,
    error: Option<io::Error>,
    rows_read: usize,
}

impl RowReader {
    /// Opens a data file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> RowReader<R> {
    /// Wraps any buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            error: None,
            rows_read: 0,
        }
    }

    /// Returns the number of rows yielded so far.
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Ends reading, returning the read error that stopped iteration, if any.
    pub fn finish(self) -> Result<()> {
        match self.error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

impl<R: BufRead> Iterator for RowReader<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.error.is_some() {
            return None;
        }

        match self.lines.next()? {
            Ok(line) => {
                self.rows_read += 1;
                Some(line)
            }
            Err(e) => {
                error!(row = self.rows_read + 1, "Failed to read row: {}", e);
                self.error = Some(e);
                None
            }
        }
    }
}

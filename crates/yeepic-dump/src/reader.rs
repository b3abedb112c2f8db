//! Snapshot reader.
//!
//! [`SnapshotReader`] parses the row format produced by
//! [`SnapshotWriter`](crate::SnapshotWriter) from any `BufRead` source.

use std::io::BufRead;

use crate::error::DumpError;

/// Reads grid rows from a text stream.
///
/// Generic over `R: BufRead` so tests can use `&[u8]` and production
/// code can use `BufReader<File>`.
pub struct SnapshotReader<R: BufRead> {
    reader: R,
    line: String,
    lines_read: usize,
}

impl<R: BufRead> SnapshotReader<R> {
    /// Wrap a text source positioned at the start of a row.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            lines_read: 0,
        }
    }

    /// Read the next row, or `None` at end of stream.
    pub fn next_row(&mut self) -> Result<Option<Vec<f64>>, DumpError> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        self.lines_read += 1;
        let line = self.lines_read;
        self.line
            .split_ascii_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| DumpError::Parse {
                    line,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    /// Read exactly `count` rows.
    ///
    /// # Errors
    ///
    /// [`DumpError::Truncated`] if the stream ends first.
    pub fn read_rows(&mut self, count: usize) -> Result<Vec<Vec<f64>>, DumpError> {
        let mut rows = Vec::with_capacity(count);
        while rows.len() < count {
            match self.next_row()? {
                Some(row) => rows.push(row),
                None => {
                    return Err(DumpError::Truncated {
                        expected: count,
                        found: rows.len(),
                    })
                }
            }
        }
        Ok(rows)
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Convert into a row iterator.
    pub fn rows(self) -> RowIter<R> {
        RowIter {
            inner: self,
            done: false,
        }
    }
}

/// Iterator adapter over snapshot rows.
pub struct RowIter<R: BufRead> {
    inner: SnapshotReader<R>,
    done: bool,
}

impl<R: BufRead> Iterator for RowIter<R> {
    type Item = Result<Vec<f64>, DumpError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.next_row() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_in_order() {
        let mut reader = SnapshotReader::new(&b"1 2.5\n-3 1e-7\n"[..]);
        assert_eq!(reader.next_row().unwrap(), Some(vec![1.0, 2.5]));
        assert_eq!(reader.next_row().unwrap(), Some(vec![-3.0, 1e-7]));
        assert_eq!(reader.next_row().unwrap(), None);
        assert_eq!(reader.lines_read(), 2);
    }

    #[test]
    fn bad_token_reports_line() {
        let mut reader = SnapshotReader::new(&b"1 2\n3 0x7ffd5e8a\n"[..]);
        let err = reader.read_rows(2).unwrap_err();
        assert!(matches!(
            err,
            DumpError::Parse { line: 2, ref token } if token == "0x7ffd5e8a"
        ));
    }

    #[test]
    fn short_stream_is_truncated() {
        let mut reader = SnapshotReader::new(&b"1\n2\n"[..]);
        assert!(matches!(
            reader.read_rows(3),
            Err(DumpError::Truncated {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn iterator_stops_after_error() {
        let rows: Vec<_> = SnapshotReader::new(&b"1\nx\n2\n"[..]).rows().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_ok());
        assert!(rows[1].is_err());
    }

    #[test]
    fn missing_final_newline_is_accepted() {
        let mut reader = SnapshotReader::new(&b"4 5"[..]);
        assert_eq!(reader.read_rows(1).unwrap(), vec![vec![4.0, 5.0]]);
    }
}

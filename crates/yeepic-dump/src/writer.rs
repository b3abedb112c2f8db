//! Snapshot writer.
//!
//! [`SnapshotWriter`] streams row dumps of staggered grids to any
//! `Write` sink. Consecutive dumps are simply concatenated.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use yeepic_grid::StaggeredGrid;

use crate::error::DumpError;

/// Writes grid snapshots to a byte stream.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production
/// code can use `BufWriter<File>` (see [`create`](SnapshotWriter::create)).
///
/// # Examples
///
/// ```
/// use yeepic_dump::{SnapshotReader, SnapshotWriter};
/// use yeepic_grid::StaggeredGrid;
///
/// let mut grid = StaggeredGrid::with_dims(&[3, 2]).unwrap();
/// grid.data_mut().copy_from_slice(&[0.0, 1.0, 10.0, 11.0, 20.0, 21.0]);
///
/// let mut writer = SnapshotWriter::new(Vec::new());
/// writer.dump_rows(&grid, 3).unwrap();
/// assert_eq!(writer.dumps_written(), 1);
/// let buf = writer.into_inner();
/// assert_eq!(buf, b"0 1\n10 11\n20 21\n");
///
/// let mut reader = SnapshotReader::new(buf.as_slice());
/// let rows = reader.read_rows(3).unwrap();
/// assert_eq!(rows[2], vec![20.0, 21.0]);
/// ```
pub struct SnapshotWriter<W: Write> {
    writer: W,
    dumps_written: u64,
}

impl SnapshotWriter<BufWriter<File>> {
    /// Create (or truncate) a snapshot file.
    ///
    /// # Errors
    ///
    /// [`DumpError::Open`] naming `path` if the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, DumpError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| DumpError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("snapshot sink opened at {}", path.display());
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> SnapshotWriter<W> {
    /// Wrap an existing sink.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            dumps_written: 0,
        }
    }

    /// Write the first `row_count` rows of `grid`.
    pub fn dump_rows(&mut self, grid: &StaggeredGrid, row_count: usize) -> Result<(), DumpError> {
        grid.dump_rows(&mut self.writer, row_count)?;
        self.dumps_written += 1;
        Ok(())
    }

    /// Write every row of `grid`.
    pub fn dump_all(&mut self, grid: &StaggeredGrid) -> Result<(), DumpError> {
        let rows = grid.sizes().first().copied().unwrap_or(0);
        self.dump_rows(grid, rows)
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), DumpError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of dumps written so far.
    pub fn dumps_written(&self) -> u64 {
        self.dumps_written
    }

    /// Consume the writer and return the underlying `Write` sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yeepic_grid::GridError;

    #[test]
    fn dump_all_covers_every_row() {
        let mut grid = StaggeredGrid::with_staggering(&[2, 1], 0, false).unwrap();
        grid.data_mut().copy_from_slice(&[1.0, 2.0, 3.0]);
        let mut writer = SnapshotWriter::new(Vec::new());
        writer.dump_all(&grid).unwrap();
        assert_eq!(writer.into_inner(), b"1\n2\n3\n");
    }

    #[test]
    fn failed_dump_is_not_counted() {
        let grid = StaggeredGrid::with_dims(&[2, 2]).unwrap();
        let mut writer = SnapshotWriter::new(Vec::new());
        let err = writer.dump_rows(&grid, 5).unwrap_err();
        assert!(matches!(
            err,
            DumpError::Grid(GridError::RowCountOutOfRange {
                requested: 5,
                available: 2
            })
        ));
        assert_eq!(writer.dumps_written(), 0);
    }

    #[test]
    fn unallocated_grid_is_rejected() {
        let grid = StaggeredGrid::new(2).unwrap();
        let mut writer = SnapshotWriter::new(Vec::new());
        assert!(matches!(
            writer.dump_all(&grid),
            Err(DumpError::Grid(GridError::NotAllocated))
        ));
    }

    #[test]
    fn open_failure_names_path() {
        let dir = std::env::temp_dir().join("yeepic-dump-missing-dir-for-test");
        let path = dir.join("nested").join("fields.txt");
        let Err(err) = SnapshotWriter::create(&path) else {
            panic!("created a file under a missing directory");
        };
        assert!(matches!(&err, DumpError::Open { path: p, .. } if *p == path));
        assert!(err.to_string().contains("fields.txt"));
    }
}

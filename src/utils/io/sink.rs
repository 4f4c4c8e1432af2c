//! CSV result table

use crate::core::batch::OutcomeSink;
use crate::core::client::ValidationOutcome;
use crate::utils::error::{Result, ViesError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// First line of every result file
pub const CSV_HEADER: &str = "siren;has_vat";

/// Writes `siren;has_vat` rows, flushed one by one so a crash keeps what
/// was already validated. Rows are echoed to stdout unless quiet.
#[derive(Debug)]
pub struct CsvSink {
    writer: BufWriter<File>,
    path: PathBuf,
    echo: bool,
    rows: usize,
}

impl CsvSink {
    /// Create (or truncate) the result file and write the header
    pub fn create(path: impl Into<PathBuf>, echo: bool) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path).map_err(|e| {
            ViesError::output(format!("Cannot write to '{}': {}", path.display(), e))
        })?;

        let mut sink = Self {
            writer: BufWriter::new(file),
            path,
            echo,
            rows: 0,
        };
        sink.write_line(CSV_HEADER)?;
        Ok(sink)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Data rows written so far, header excluded
    pub fn rows(&self) -> usize {
        self.rows
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)
            .and_then(|_| self.writer.flush())
            .map_err(|e| {
                ViesError::output(format!("Cannot write to '{}': {}", self.path.display(), e))
            })?;
        if self.echo {
            println!("{}", line);
        }
        Ok(())
    }
}

impl OutcomeSink for CsvSink {
    fn record(&mut self, outcome: &ValidationOutcome) -> Result<()> {
        self.write_line(&outcome.csv_row())?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| ViesError::output(format!("Cannot flush '{}': {}", self.path.display(), e)))
    }
}

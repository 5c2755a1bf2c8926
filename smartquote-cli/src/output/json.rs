//! JSON status formatter

use super::{FileReport, ReportFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs all file reports as one JSON array
pub struct JsonReporter<W: Write> {
    writer: W,
    reports: Vec<FileReport>,
}

impl<W: Write> JsonReporter<W> {
    /// Create a new JSON reporter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reports: Vec::new(),
        }
    }
}

impl<W: Write> ReportFormatter for JsonReporter<W> {
    fn report(&mut self, report: &FileReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

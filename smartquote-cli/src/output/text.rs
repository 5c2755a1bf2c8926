//! Plain text status formatter

use super::{FileReport, FileStatus, ReportFormatter};
use anyhow::Result;
use std::io::Write;

/// One line per file; successes to `out`, failures to `err`
pub struct TextReporter<O: Write, E: Write> {
    out: O,
    err: E,
    quiet: bool,
}

impl<O: Write, E: Write> TextReporter<O, E> {
    /// Create a new text reporter
    pub fn new(out: O, err: E, quiet: bool) -> Self {
        Self { out, err, quiet }
    }
}

impl<O: Write, E: Write> ReportFormatter for TextReporter<O, E> {
    fn report(&mut self, report: &FileReport) -> Result<()> {
        let path = report.path.display();
        let language = report.language.unwrap_or("-");

        match report.status {
            FileStatus::Failed => {
                let error = report.error.as_deref().unwrap_or("unknown error");
                writeln!(self.err, "✗ {path}: {error}")?;
            }
            _ if self.quiet => {}
            FileStatus::Converted => writeln!(
                self.out,
                "✓ converted {path} ({language}, {} line(s))",
                report.changed_lines
            )?,
            FileStatus::Unchanged => writeln!(self.out, "✓ unchanged {path} ({language})")?,
            FileStatus::WouldChange => writeln!(
                self.out,
                "! would convert {path} ({language}, {} line(s))",
                report.changed_lines
            )?,
        }

        if !report.balanced && !self.quiet {
            writeln!(self.err, "  warning: {path} ends inside an open quotation")?;
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }
}
